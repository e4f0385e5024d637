//! Energy reading — consumption and cost attributed to a device.

use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    /// Device *name* the reading belongs to. Not checked against the device list.
    pub device: String,
    pub consumption: f64,
    pub cost: f64,
    pub timestamp: Timestamp,
}

impl EnergyReading {
    #[must_use]
    pub fn new(device: impl Into<String>, consumption: f64, cost: f64, timestamp: Timestamp) -> Self {
        Self {
            device: device.into(),
            consumption,
            cost,
            timestamp,
        }
    }
}
