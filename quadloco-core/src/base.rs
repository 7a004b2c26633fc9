//! Observation functions.
use crate::scene::Scene;
use anyhow::Result;
use ndarray::Array2;
use serde::{de::DeserializeOwned, Serialize};

/// Extracts one batched observation term from the scene.
///
/// An observation term is a pure transform: one call reads the scene and
/// produces a `(num_envs, dim)` array, with no cross-environment data
/// dependency and no side effects. The host runtime invokes it once per
/// observation step.
pub trait ObsFn {
    /// Configuration.
    type Config: Clone + Default + Serialize + DeserializeOwned;

    /// Builds the observation term, validating its configuration.
    fn build(config: &Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Computes the observation term for every environment.
    fn observe(&self, scene: &Scene) -> Result<Array2<f32>>;

    /// Returns default configuration.
    fn default_config() -> Self::Config {
        Self::Config::default()
    }
}
