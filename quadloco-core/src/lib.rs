#![warn(missing_docs)]
//! Core abstractions for quadruped locomotion environments.
//!
//! The simulation runtime owns physics, sensors and the environment
//! lifecycle. This crate models only what observation terms read from it:
//! a [`Scene`] of named assets, the batched state of an [`Articulation`]
//! and a [`HeightScanner`], and the [`ObsFn`] trait that observation
//! terms implement.
pub mod error;
pub mod scene;

mod base;
pub use base::ObsFn;
pub use error::QuadlocoError;
pub use scene::{Articulation, HeightScanner, Scene, SceneEntityCfg};
