//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum QuadlocoError {
    /// No entity with the given name exists in the scene.
    #[error("Unknown scene entity: {0}")]
    UnknownEntity(String),

    /// An articulation has no body with the given name.
    #[error("Unknown body {body} on articulation {entity}")]
    UnknownBody {
        /// Name of the articulation in the scene.
        entity: String,
        /// Requested body name.
        body: String,
    },

    /// Degenerate clip range, `min >= max`.
    #[error("Invalid clip range: [{min}, {max}]")]
    InvalidClipRange {
        /// Lower clip bound.
        min: f32,
        /// Upper clip bound.
        max: f32,
    },

    /// Collaborator tensors with inconsistent dimensions.
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}
