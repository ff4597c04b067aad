pub mod draws;
pub mod tickets;

pub use draws as draw_entity;
pub use draws::DrawStatus;
pub use tickets as ticket_entity;
