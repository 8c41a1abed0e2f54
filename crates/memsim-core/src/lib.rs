pub mod config;
pub mod error;
pub mod types;

pub use config::MemsimConfig;
pub use error::{AllocError, AllocResult, ConfigError, ValidationError};
pub use types::*;
