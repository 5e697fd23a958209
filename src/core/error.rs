use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Unit not found: {0:?}")]
    UnitNotFound(crate::core::types::UnitId),

    #[error("Player not found: {0:?}")]
    PlayerNotFound(crate::core::types::PlayerId),

    #[error("Illegal load: {0}")]
    InvalidLoad(String),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RulesError>;
