//! Registry of environment ids.
//!
//! The host runtime instantiates environments from a declarative table of
//! id, entry point and configuration. The table is built once at startup;
//! lookups after that are read-only.
use crate::{env::RobotEnvCfg, error::RegistryError};
use anyhow::Result;
use log::info;
use std::collections::HashMap;

/// A registered environment id and how to instantiate it.
#[derive(Debug)]
pub struct EnvSpec {
    /// Environment id.
    pub id: &'static str,

    /// Entry point of the environment class in the host runtime.
    pub entry_point: &'static str,

    /// Builds the environment configuration.
    pub cfg: fn() -> RobotEnvCfg,

    /// Entry point of the RL runner configuration.
    pub rl_cfg_entry_point: &'static str,
}

/// Table of registered environments.
#[derive(Default)]
pub struct EnvRegistry {
    specs: HashMap<&'static str, EnvSpec>,
}

impl EnvRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers an environment. Ids must be unique.
    pub fn register(&mut self, spec: EnvSpec) -> Result<()> {
        if self.specs.contains_key(spec.id) {
            return Err(RegistryError::DuplicateEnvId(spec.id.into()).into());
        }
        info!("registered environment {}", spec.id);
        self.specs.insert(spec.id, spec);
        Ok(())
    }

    /// Looks up an environment by id.
    pub fn get(&self, id: &str) -> Result<&EnvSpec> {
        self.specs
            .get(id)
            .ok_or_else(|| RegistryError::UnknownEnvId(id.into()).into())
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.specs.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered environments.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// Registers the Go2 velocity environments.
pub fn register_go2(registry: &mut EnvRegistry) -> Result<()> {
    registry.register(EnvSpec {
        id: "Unitree-Go2-Velocity",
        entry_point: "manager_based_rl_env",
        cfg: RobotEnvCfg::default,
        rl_cfg_entry_point: "ppo_runner:VelocityPPORunnerCfg",
    })?;
    registry.register(EnvSpec {
        id: "Unitree-Go2-Velocity-Play",
        entry_point: "manager_based_rl_env",
        cfg: || RobotEnvCfg::default().play(),
        rl_cfg_entry_point: "ppo_runner:VelocityPPORunnerCfg",
    })?;
    Ok(())
}

/// The registry with every environment of this crate.
pub fn default_registry() -> Result<EnvRegistry> {
    let mut registry = EnvRegistry::new();
    register_go2(&mut registry)?;
    Ok(registry)
}
