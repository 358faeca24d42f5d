use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubtranError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Cannot read source file: {0}")]
    Source(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Cannot save translated file: {0}")]
    Save(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SubtranError>;
