use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeHarvestError {
    #[error("Document not found: {path}")]
    DocumentNotFound { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BadgeHarvestError>;

impl BadgeHarvestError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::DocumentNotFound { .. } => 2,
            Self::Fetch { .. } => 3,
            Self::ConfigParse { .. } => 4,
            _ => 1,
        }
    }
}
