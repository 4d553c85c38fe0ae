//! Crate-level error type.

use crate::ontology::value_objects::IriError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Iri(#[from] IriError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("cannot install logger: {0}")]
    Logger(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
