pub mod numbers;
pub mod sampler;

pub use numbers::*;
pub use sampler::*;
