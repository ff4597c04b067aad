pub mod common;
pub mod lottery;

pub use common::*;
pub use lottery::*;
