use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be one of true, false, 1, 0, got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
