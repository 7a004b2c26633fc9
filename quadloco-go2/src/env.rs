//! Environment configurations for the Go2 velocity task.
use crate::obs::{BaseExternalForceConfig, HeightScanConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of the Go2 velocity-tracking environment.
///
/// Covers the parameters this crate owns: batch size, layout, episode
/// length, and the observation terms. Physics and reward settings live
/// with the host runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotEnvCfg {
    /// Number of environment instances stepped in one batch.
    pub num_envs: usize,

    /// Spacing between environment origins in meters.
    pub env_spacing: f32,

    /// Episode length in seconds.
    pub episode_length_s: f32,

    /// Height-scan observation term.
    pub height_scan: HeightScanConfig,

    /// External-force observation term.
    pub base_external_force: BaseExternalForceConfig,
}

impl Default for RobotEnvCfg {
    fn default() -> Self {
        Self {
            num_envs: 4096,
            env_spacing: 2.5,
            episode_length_s: 20.0,
            height_scan: HeightScanConfig::default(),
            base_external_force: BaseExternalForceConfig::default(),
        }
    }
}

impl RobotEnvCfg {
    /// Sets the number of environment instances.
    pub fn num_envs(mut self, v: usize) -> Self {
        self.num_envs = v;
        self
    }

    /// Sets the spacing between environment origins.
    pub fn env_spacing(mut self, v: f32) -> Self {
        self.env_spacing = v;
        self
    }

    /// Sets the episode length in seconds.
    pub fn episode_length_s(mut self, v: f32) -> Self {
        self.episode_length_s = v;
        self
    }

    /// Sets the height-scan term configuration.
    pub fn height_scan(mut self, v: HeightScanConfig) -> Self {
        self.height_scan = v;
        self
    }

    /// Sets the external-force term configuration.
    pub fn base_external_force(mut self, v: BaseExternalForceConfig) -> Self {
        self.base_external_force = v;
        self
    }

    /// The play variant: a small batch for rolling out a trained policy.
    pub fn play(mut self) -> Self {
        self.num_envs = 50;
        self
    }

    /// Constructs [`RobotEnvCfg`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`RobotEnvCfg`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_play_variant() {
        let cfg = RobotEnvCfg::default();
        let play = cfg.clone().play();
        assert_eq!(play.num_envs, 50);
        assert_eq!(play.height_scan, cfg.height_scan);
        assert_eq!(play.episode_length_s, cfg.episode_length_s);
    }

    #[test]
    fn test_serde_config() -> Result<()> {
        let cfg = RobotEnvCfg::default().num_envs(128).episode_length_s(10.0);
        let dir = TempDir::new("robot_env_cfg")?;
        let path = dir.path().join("robot_env_cfg.yaml");
        cfg.save(&path)?;
        let cfg_ = RobotEnvCfg::load(&path)?;
        assert_eq!(cfg, cfg_);
        Ok(())
    }
}
