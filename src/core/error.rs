use thiserror::Error;

use crate::core::types::FighterId;

#[derive(Error, Debug)]
pub enum BoutError {
    #[error("Both corners hold the same fighter: {0:?}")]
    SameFighter(FighterId),

    #[error("Unsupported round count: {0} (expected 3 or 5)")]
    UnsupportedRounds(u32),

    #[error("Invalid bout config: {0}")]
    InvalidConfig(String),

    #[error("Traits cannot be combined: {0} and {1}")]
    ConflictingTraits(String, String),

    #[error("Unknown fighting style: {0}")]
    UnknownStyle(String),

    #[error("Unknown trait: {0}")]
    UnknownTrait(String),

    #[error("Unknown weight cut severity: {0}")]
    UnknownCutSeverity(String),

    #[error("Attribute {name} out of range: {value} (expected 1-100)")]
    AttributeOutOfRange { name: &'static str, value: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoutError>;
