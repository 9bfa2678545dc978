pub mod config;
pub mod error;
pub mod types;

pub use config::EngineConfig;
pub use error::{HexMoveError, Result};
