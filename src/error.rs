use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    /// Caller contract violation. Not recoverable input, a programming error.
    #[error("Invalid Parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Profile Source Error: {0}")]
    Source(String),
}

pub type GxResult<T> = Result<T, GalaxyError>;
