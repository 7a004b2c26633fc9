#![warn(missing_docs)]
//! Unitree Go2 velocity-tracking environments.
//!
//! Defines the observation terms of the Go2 locomotion task, the
//! environment configurations, and the registry of environment ids the
//! host runtime instantiates at startup.
pub mod env;
pub mod error;
pub mod obs;
pub mod registry;

pub use env::RobotEnvCfg;
pub use registry::{default_registry, EnvRegistry, EnvSpec};
