use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Unknown intervention: {0}")]
    UnknownIntervention(String),

    #[error("Non-finite {field} in {region}: {value}")]
    NonFinite {
        region: String,
        field: &'static str,
        value: f64,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
