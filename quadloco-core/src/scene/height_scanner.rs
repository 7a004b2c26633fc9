//! Ray-cast height sensor state.
use crate::error::QuadlocoError;
use anyhow::Result;
use ndarray::{s, Array2, Array3, ArrayView1, ArrayView2};

/// State of a downward ray-cast height sensor.
///
/// The sensor sits on the robot and casts a grid of rays at the terrain.
/// The runtime supplies the sensor's world position, `(num_envs, 3)`, and
/// the world positions of the ray hit points, `(num_envs, num_rays, 3)`.
#[derive(Debug, Clone)]
pub struct HeightScanner {
    pos_w: Array2<f32>,
    ray_hits_w: Array3<f32>,
}

impl HeightScanner {
    /// Builds a scanner from the sensor position and ray-hit tensors.
    pub fn new(pos_w: Array2<f32>, ray_hits_w: Array3<f32>) -> Result<Self> {
        if pos_w.shape()[1] != 3 || ray_hits_w.shape()[2] != 3 {
            return Err(QuadlocoError::ShapeMismatch(format!(
                "positions must be 3-vectors, got {:?} and {:?}",
                pos_w.shape(),
                ray_hits_w.shape()
            ))
            .into());
        }
        if pos_w.shape()[0] != ray_hits_w.shape()[0] {
            return Err(QuadlocoError::ShapeMismatch(format!(
                "sensor has {} envs but ray hits have {}",
                pos_w.shape()[0],
                ray_hits_w.shape()[0]
            ))
            .into());
        }
        Ok(Self { pos_w, ray_hits_w })
    }

    /// Number of environment instances.
    pub fn num_envs(&self) -> usize {
        self.pos_w.shape()[0]
    }

    /// Number of rays per environment.
    pub fn num_rays(&self) -> usize {
        self.ray_hits_w.shape()[1]
    }

    /// Sensor height over the world origin, per environment.
    pub fn pos_z(&self) -> ArrayView1<f32> {
        self.pos_w.column(2)
    }

    /// Height of each ray hit point, per environment and ray.
    pub fn ray_hits_z(&self) -> ArrayView2<f32> {
        self.ray_hits_w.slice(s![.., .., 2])
    }

    /// Replaces the sensor state with fresh runtime data.
    pub fn update(&mut self, pos_w: Array2<f32>, ray_hits_w: Array3<f32>) -> Result<()> {
        *self = Self::new(pos_w, ray_hits_w)?;
        Ok(())
    }
}
