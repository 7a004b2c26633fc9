//! Errors in the environment layer.
use thiserror::Error;

/// Errors of the environment registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The id was registered twice.
    #[error("Environment id already registered: {0}")]
    DuplicateEnvId(String),

    /// Lookup of an id that was never registered.
    #[error("Unknown environment id: {0}")]
    UnknownEnvId(String),
}
