use thiserror::Error;

#[derive(Error, Debug)]
pub enum BracketError {
    #[error("Invalid suppression policy: {0}")]
    InvalidPolicy(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {message}")]
    Parse { message: String, line: Option<usize> },
    #[error("Overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, BracketError>;

// Helper conversions
impl From<rusqlite::Error> for BracketError {
    fn from(e: rusqlite::Error) -> Self { Self::Persistence(e.to_string()) }
}
impl From<config::ConfigError> for BracketError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
