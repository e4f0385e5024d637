//! Room — a named grouping of devices.

use serde::{Deserialize, Serialize};

use crate::error::{HomeboardError, ValidationError};
use crate::id::RoomId;

/// A room shown on the dashboard.
///
/// `device_count` is advisory: it is whatever the room record says and is
/// never recomputed from the device collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub device_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), HomeboardError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    device_count: u32,
    temperature: Option<f64>,
    humidity: Option<f64>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<RoomId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device_count(mut self, device_count: u32) -> Self {
        self.device_count = device_count;
        self
    }

    #[must_use]
    pub fn climate(mut self, temperature: f64, humidity: f64) -> Self {
        self.temperature = Some(temperature);
        self.humidity = Some(humidity);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Room, HomeboardError> {
        let room = Room {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            device_count: self.device_count,
            temperature: self.temperature,
            humidity: self.humidity,
        };
        room.validate()?;
        Ok(room)
    }
}
