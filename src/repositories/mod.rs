//! 持久化访问层
//!
//! 所有函数对 `ConnectionTrait` 泛型，既可以直接传入连接池，也可以传入
//! `DatabaseTransaction` 以便在同一事务内组合多步操作。

pub mod draw_repository;
pub mod ticket_repository;

pub use draw_repository::DrawRepository;
pub use ticket_repository::TicketRepository;
