use thiserror::Error;

use crate::core::types::StarId;

#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Star not found: {0:?}")]
    StarNotFound(StarId),

    #[error("No system with a habitable star exists in the galaxy")]
    NoHabitableSystem,

    #[error("Background generation failed: {0}")]
    BackgroundTask(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GalaxyError>;
