//! External force on the base.
use anyhow::Result;
use log::trace;
use ndarray::Array2;
use quadloco_core::{ObsFn, QuadlocoError, Scene, SceneEntityCfg};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`BaseExternalForce`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseExternalForceConfig {
    /// Articulation and body to read.
    pub asset: SceneEntityCfg,
}

impl Default for BaseExternalForceConfig {
    fn default() -> Self {
        Self {
            asset: SceneEntityCfg::new("robot").body("base"),
        }
    }
}

impl BaseExternalForceConfig {
    /// Sets the articulation and body to read.
    pub fn asset(mut self, asset: SceneEntityCfg) -> Self {
        self.asset = asset;
        self
    }

    /// Constructs [`BaseExternalForceConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`BaseExternalForceConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// External-force observation term.
///
/// Returns the external force currently applied on the configured body,
/// `(num_envs, 3)`. The array is an independent copy of the articulation
/// state. When the configuration names no body, the first body is read.
pub struct BaseExternalForce {
    config: BaseExternalForceConfig,
}

impl ObsFn for BaseExternalForce {
    type Config = BaseExternalForceConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
        })
    }

    fn observe(&self, scene: &Scene) -> Result<Array2<f32>> {
        let asset = scene.articulation(&self.config.asset.name)?;
        let body_ix = match &self.config.asset.body {
            Some(body) => asset.body_index(body).ok_or_else(|| QuadlocoError::UnknownBody {
                entity: self.config.asset.name.clone(),
                body: body.clone(),
            })?,
            None => 0,
        };
        trace!(
            "external force on {}[{}] over {} envs",
            self.config.asset.name,
            body_ix,
            asset.num_envs()
        );
        Ok(asset.external_force_b(body_ix))
    }
}
