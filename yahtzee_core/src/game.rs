pub mod catalog;
pub mod primitives;
pub mod scoring;

pub use catalog::*;
pub use primitives::*;
pub use scoring::*;
