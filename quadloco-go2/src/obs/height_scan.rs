//! Normalized height scan.
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

/// Configuration of [`HeightScan`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightScanConfig {
    /// Height sensor to read.
    pub sensor: SceneEntityCfg,

    /// Constant subtracted from every raw height.
    pub offset: f32,

    /// Lower clip bound, applied before scaling.
    pub clip_min: f32,

    /// Upper clip bound, applied before scaling.
    pub clip_max: f32,

    /// Factor applied after clipping.
    pub scale: f32,
}

impl Default for HeightScanConfig {
    fn default() -> Self {
        Self {
            sensor: SceneEntityCfg::new("height_scanner"),
            offset: 0.5,
            clip_min: -1.0,
            clip_max: 1.0,
            scale: 5.0,
        }
    }
}

impl HeightScanConfig {
    /// Sets the sensor to read.
    pub fn sensor(mut self, sensor: SceneEntityCfg) -> Self {
        self.sensor = sensor;
        self
    }

    /// Sets the height offset.
    pub fn offset(mut self, v: f32) -> Self {
        self.offset = v;
        self
    }

    /// Sets the lower clip bound.
    pub fn clip_min(mut self, v: f32) -> Self {
        self.clip_min = v;
        self
    }

    /// Sets the upper clip bound.
    pub fn clip_max(mut self, v: f32) -> Self {
        self.clip_max = v;
        self
    }

    /// Sets the scale factor.
    pub fn scale(mut self, v: f32) -> Self {
        self.scale = v;
        self
    }

    /// Constructs [`HeightScanConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`HeightScanConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// Height-scan observation term.
///
/// For every environment and ray, reads the height of the sensor above the
/// ray hit point, `sensor_z - hit_z - offset`, clips it to
/// `[clip_min, clip_max]`, and multiplies by `scale`. Clipping happens
/// before scaling, so the output stays within
/// `[clip_min * scale, clip_max * scale]` however extreme the terrain is;
/// the state estimator consuming this term never sees values outside the
/// range it was trained on.
#[derive(Debug)]
pub struct HeightScan {
    config: HeightScanConfig,
}

impl ObsFn for HeightScan {
    type Config = HeightScanConfig;

    fn build(config: &Self::Config) -> Result<Self> {
        if config.clip_min >= config.clip_max {
            return Err(QuadlocoError::InvalidClipRange {
                min: config.clip_min,
                max: config.clip_max,
            }
            .into());
        }
        Ok(Self {
            config: config.clone(),
        })
    }

    fn observe(&self, scene: &Scene) -> Result<Array2<f32>> {
        let sensor = scene.height_scanner(&self.config.sensor.name)?;
        let pos_z = sensor.pos_z();
        let hits_z = sensor.ray_hits_z();
        trace!(
            "height scan over {} envs x {} rays",
            sensor.num_envs(),
            sensor.num_rays()
        );
        let mut out = Array2::zeros((sensor.num_envs(), sensor.num_rays()));
        for ((env, ray), v) in out.indexed_iter_mut() {
            let raw = pos_z[env] - hits_z[[env, ray]] - self.config.offset;
            // clip before scale, the bound must hold for any terrain
            *v = raw.clamp(self.config.clip_min, self.config.clip_max) * self.config.scale;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array3};
    use quadloco_core::HeightScanner;
    use tempdir::TempDir;

    /// One environment, sensor 1.0 above the origin, hit heights as given.
    fn scene_with_hits(hit_z: &[f32]) -> Scene {
        let pos = arr2(&[[0.0, 0.0, 1.0]]);
        let mut hits = Array3::zeros((1, hit_z.len(), 3));
        for (ray, z) in hit_z.iter().enumerate() {
            hits[[0, ray, 2]] = *z;
        }
        Scene::new().add_height_scanner("height_scanner", HeightScanner::new(pos, hits).unwrap())
    }

    #[test]
    fn test_default_parameters() -> Result<()> {
        // raw heights 3.0, -3.0, 0.3 under offset 0.5
        let scene = scene_with_hits(&[-2.5, 3.5, 0.2]);
        let term = HeightScan::build(&HeightScanConfig::default())?;
        let obs = term.observe(&scene)?;
        assert_eq!(obs[[0, 0]], 5.0);
        assert_eq!(obs[[0, 1]], -5.0);
        assert!((obs[[0, 2]] - 1.5).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_bound_holds_for_any_terrain() -> Result<()> {
        fastrand::seed(7);
        let hit_z: Vec<f32> = (0..256).map(|_| 20.0 * fastrand::f32() - 10.0).collect();
        let scene = scene_with_hits(&hit_z);
        let config = HeightScanConfig::default();
        let term = HeightScan::build(&config)?;
        let obs = term.observe(&scene)?;
        let (lo, hi) = (config.clip_min * config.scale, config.clip_max * config.scale);
        for v in obs.iter() {
            assert!(*v >= lo && *v <= hi, "{} outside [{}, {}]", v, lo, hi);
        }
        Ok(())
    }

    #[test]
    fn test_clip_applied_before_scale() -> Result<()> {
        // scaling first would give 15.0 here
        let scene = scene_with_hits(&[-2.5]);
        let term = HeightScan::build(&HeightScanConfig::default())?;
        assert_eq!(term.observe(&scene)?[[0, 0]], 5.0);
        Ok(())
    }

    #[test]
    fn test_monotone_and_saturating() -> Result<()> {
        // raw heights increase from -2.0 to 2.0 as hit_z decreases
        let hit_z: Vec<f32> = (0..41).map(|k| 2.5 - 0.1 * k as f32).collect();
        let scene = scene_with_hits(&hit_z);
        let term = HeightScan::build(&HeightScanConfig::default())?;
        let obs = term.observe(&scene)?;
        let row: Vec<f32> = obs.row(0).to_vec();
        for pair in row.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(row[0], -5.0);
        assert_eq!(row[row.len() - 1], 5.0);
        Ok(())
    }

    #[test]
    fn test_degenerate_clip_range_rejected() {
        let config = HeightScanConfig::default().clip_min(1.0).clip_max(-1.0);
        let err = HeightScan::build(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuadlocoError>(),
            Some(QuadlocoError::InvalidClipRange { .. })
        ));
    }

    #[test]
    fn test_unknown_sensor() {
        let scene = Scene::new();
        let term = HeightScan::build(&HeightScanConfig::default()).unwrap();
        let err = term.observe(&scene).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QuadlocoError>(),
            Some(QuadlocoError::UnknownEntity(_))
        ));
    }

    #[test]
    fn test_serde_config() -> Result<()> {
        let config = HeightScanConfig::default()
            .offset(0.3)
            .scale(2.0)
            .sensor(SceneEntityCfg::new("scanner"));
        let dir = TempDir::new("height_scan_config")?;
        let path = dir.path().join("height_scan.yaml");
        config.save(&path)?;
        let config_ = HeightScanConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
