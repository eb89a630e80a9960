pub mod config;
pub mod error;
pub mod game;
pub mod logger;

pub use error::{GameError, GameResult};
