use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodescoreError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("upload rejected: {0}")]
    Rejected(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("history store error: {0}")]
    Store(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodescoreError>;
