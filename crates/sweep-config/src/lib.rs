pub mod config;
pub mod constants;
mod error;
pub mod telemetry;

pub use config::PagesConfig;
pub use error::{ConfigError, Result};
