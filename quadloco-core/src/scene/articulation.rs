//! Articulated-body state.
use crate::error::QuadlocoError;
use anyhow::Result;
use ndarray::{Array2, Array3, Axis};
use std::collections::HashMap;

/// Per-environment state of an articulated body.
///
/// Only the slice of state read by observation terms is modeled: the body
/// names and the external force applied on each body, in body frame, as a
/// `(num_envs, num_bodies, 3)` tensor.
#[derive(Debug, Clone)]
pub struct Articulation {
    body_names: Vec<String>,
    body_index: HashMap<String, usize>,
    external_force_b: Array3<f32>,
}

impl Articulation {
    /// Builds an articulation from body names and the external-force tensor.
    pub fn new(body_names: Vec<String>, external_force_b: Array3<f32>) -> Result<Self> {
        let shape = external_force_b.shape();
        if shape[1] != body_names.len() || shape[2] != 3 {
            return Err(QuadlocoError::ShapeMismatch(format!(
                "external force tensor {:?} does not match {} bodies",
                shape,
                body_names.len()
            ))
            .into());
        }
        let body_index = body_names
            .iter()
            .enumerate()
            .map(|(ix, name)| (name.clone(), ix))
            .collect();
        Ok(Self {
            body_names,
            body_index,
            external_force_b,
        })
    }

    /// Number of environment instances.
    pub fn num_envs(&self) -> usize {
        self.external_force_b.shape()[0]
    }

    /// Names of the bodies, in index order.
    pub fn body_names(&self) -> &[String] {
        &self.body_names
    }

    /// Index of a named body, if it exists.
    pub fn body_index(&self, name: &str) -> Option<usize> {
        self.body_index.get(name).copied()
    }

    /// External force applied on one body, per environment.
    ///
    /// Returns an owned `(num_envs, 3)` copy; later updates of the
    /// articulation state do not affect arrays already returned.
    pub fn external_force_b(&self, body_ix: usize) -> Array2<f32> {
        self.external_force_b.index_axis(Axis(1), body_ix).to_owned()
    }

    /// Overwrites the force on one body for every environment.
    pub fn set_external_force_b(&mut self, body_ix: usize, force: [f32; 3]) {
        for mut env in self.external_force_b.axis_iter_mut(Axis(0)) {
            for (k, v) in force.iter().enumerate() {
                env[[body_ix, k]] = *v;
            }
        }
    }
}
