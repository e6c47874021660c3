use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("No module data loaded for '{0}'")]
    ModuleNotLoaded(String),

    #[error("Unknown species '{name}' (version {version}) in module '{module}'")]
    UnknownSpecies {
        module: String,
        name: String,
        version: u8,
    },

    #[error("Invalid module data: {0}")]
    InvalidModule(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
