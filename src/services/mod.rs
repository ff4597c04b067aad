pub mod draw_service;
pub mod ticket_service;

pub use draw_service::*;
pub use ticket_service::*;
