//! Scene entities supplied by the simulation runtime.
//!
//! The host runtime resolves entities dynamically by name. Here that
//! becomes an explicit registry: assets are added under a name once and
//! observation terms look them up through typed getters.
mod articulation;
mod height_scanner;
pub use articulation::Articulation;
pub use height_scanner::HeightScanner;

use crate::error::QuadlocoError;
use anyhow::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reference to a scene entity, used by observation configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEntityCfg {
    /// Name of the entity in the scene.
    pub name: String,

    /// Name of a body of the entity, for articulations.
    pub body: Option<String>,
}

impl Default for SceneEntityCfg {
    fn default() -> Self {
        Self::new("robot")
    }
}

impl SceneEntityCfg {
    /// Creates a reference to the named entity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
        }
    }

    /// Sets the body name.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Named assets of a simulated scene.
#[derive(Debug, Default)]
pub struct Scene {
    articulations: HashMap<String, Articulation>,
    height_scanners: HashMap<String, HeightScanner>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds an articulation under the given name.
    pub fn add_articulation(mut self, name: impl Into<String>, asset: Articulation) -> Self {
        let name = name.into();
        info!("scene: added articulation {}", name);
        self.articulations.insert(name, asset);
        self
    }

    /// Adds a height scanner under the given name.
    pub fn add_height_scanner(mut self, name: impl Into<String>, sensor: HeightScanner) -> Self {
        let name = name.into();
        info!("scene: added height scanner {}", name);
        self.height_scanners.insert(name, sensor);
        self
    }

    /// Looks up an articulation by name.
    pub fn articulation(&self, name: &str) -> Result<&Articulation> {
        self.articulations
            .get(name)
            .ok_or_else(|| QuadlocoError::UnknownEntity(name.into()).into())
    }

    /// Looks up an articulation by name, mutably.
    ///
    /// The host runtime uses this to push fresh state between steps.
    pub fn articulation_mut(&mut self, name: &str) -> Result<&mut Articulation> {
        self.articulations
            .get_mut(name)
            .ok_or_else(|| QuadlocoError::UnknownEntity(name.into()).into())
    }

    /// Looks up a height scanner by name.
    pub fn height_scanner(&self, name: &str) -> Result<&HeightScanner> {
        self.height_scanners
            .get(name)
            .ok_or_else(|| QuadlocoError::UnknownEntity(name.into()).into())
    }

    /// Looks up a height scanner by name, mutably.
    pub fn height_scanner_mut(&mut self, name: &str) -> Result<&mut HeightScanner> {
        self.height_scanners
            .get_mut(name)
            .ok_or_else(|| QuadlocoError::UnknownEntity(name.into()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_unknown_entity() {
        let scene = Scene::new();
        let err = scene.articulation("robot").unwrap_err();
        match err.downcast_ref::<QuadlocoError>() {
            Some(QuadlocoError::UnknownEntity(name)) => assert_eq!(name, "robot"),
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    fn test_lookup_by_name() {
        let asset = Articulation::new(vec!["base".into()], Array3::zeros((2, 1, 3))).unwrap();
        let scene = Scene::new().add_articulation("robot", asset);
        assert!(scene.articulation("robot").is_ok());
        assert!(scene.height_scanner("robot").is_err());
    }

    #[test]
    fn test_runtime_update() {
        use ndarray::Array2;
        let sensor = HeightScanner::new(Array2::zeros((2, 3)), Array3::zeros((2, 5, 3))).unwrap();
        let mut scene = Scene::new().add_height_scanner("height_scanner", sensor);
        let mut pos = Array2::zeros((2, 3));
        pos[[0, 2]] = 0.6;
        scene
            .height_scanner_mut("height_scanner")
            .unwrap()
            .update(pos, Array3::zeros((2, 5, 3)))
            .unwrap();
        let sensor = scene.height_scanner("height_scanner").unwrap();
        assert_eq!(sensor.pos_z()[0], 0.6);
    }

    #[test]
    fn test_entity_cfg_builder() {
        let cfg = SceneEntityCfg::new("robot").body("base");
        assert_eq!(cfg.name, "robot");
        assert_eq!(cfg.body.as_deref(), Some("base"));
    }
}
