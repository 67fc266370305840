pub mod game;
pub mod console;
pub mod error;
pub mod config;

pub use error::{GameError, Result};
pub use config::Config;
pub use game::GameEngine;
