//! Observation terms of the Go2 locomotion task.
mod external_force;
mod height_scan;
pub use external_force::{BaseExternalForce, BaseExternalForceConfig};
pub use height_scan::{HeightScan, HeightScanConfig};
