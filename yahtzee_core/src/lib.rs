pub mod game;
pub mod utils;
