pub mod printing_utils;
pub mod roll_utils;

pub use printing_utils::*;
pub use roll_utils::*;
