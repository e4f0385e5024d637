//! Device — a simulated smart-home device and the typed patch used to update it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{HomeboardError, ValidationError};
use crate::id::DeviceId;
use crate::time::{Timestamp, advance, now};

/// Closed set of device kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Light,
    Thermostat,
    Camera,
    Lock,
    #[default]
    Sensor,
    Outlet,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Thermostat => f.write_str("thermostat"),
            Self::Camera => f.write_str("camera"),
            Self::Lock => f.write_str("lock"),
            Self::Sensor => f.write_str("sensor"),
            Self::Outlet => f.write_str("outlet"),
        }
    }
}

/// Reachability of a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceStatus {
    #[default]
    Online,
    Offline,
}

impl DeviceStatus {
    #[must_use]
    pub fn is_online(self) -> bool {
        matches!(self, Self::Online)
    }
}

/// A simulated device shown on the dashboard.
///
/// `room` is the *name* of the owning room. It is a loose reference: nothing
/// checks that a matching [`Room`](crate::room::Room) exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: DeviceType,
    pub room: String,
    pub status: DeviceStatus,
    pub is_on: bool,
    /// Reading whose meaning depends on `device_type` (brightness %, temperature, …).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub last_updated: Timestamp,
}

impl Device {
    /// Create a builder for constructing a [`Device`].
    #[must_use]
    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
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

    /// Return a copy of this device with `patch` shallow-merged in.
    ///
    /// `last_updated` is set to `at`, but never moves backwards: if the
    /// stored stamp is later than `at` it is kept.
    #[must_use]
    pub fn patched(&self, patch: &DevicePatch, at: Timestamp) -> Self {
        Self {
            id: self.id.clone(),
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            device_type: self.device_type,
            room: patch.room.clone().unwrap_or_else(|| self.room.clone()),
            status: patch.status.unwrap_or(self.status),
            is_on: patch.is_on.unwrap_or(self.is_on),
            value: patch.value.unwrap_or(self.value),
            unit: patch.unit.clone().unwrap_or_else(|| self.unit.clone()),
            last_updated: advance(self.last_updated, at),
        }
    }
}

/// Step-by-step builder for [`Device`].
#[derive(Debug, Default)]
pub struct DeviceBuilder {
    id: Option<DeviceId>,
    name: Option<String>,
    device_type: DeviceType,
    room: Option<String>,
    status: DeviceStatus,
    is_on: bool,
    value: Option<f64>,
    unit: Option<String>,
    last_updated: Option<Timestamp>,
}

impl DeviceBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<DeviceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn device_type(mut self, device_type: DeviceType) -> Self {
        self.device_type = device_type;
        self
    }

    #[must_use]
    pub fn room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: DeviceStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn is_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.value = Some(value);
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn last_updated(mut self, at: Timestamp) -> Self {
        self.last_updated = Some(at);
        self
    }

    /// Consume the builder, validate, and return a [`Device`].
    ///
    /// `last_updated` defaults to the current time.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Device, HomeboardError> {
        let device = Device {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            device_type: self.device_type,
            room: self.room.unwrap_or_default(),
            status: self.status,
            is_on: self.is_on,
            value: self.value,
            unit: self.unit,
            last_updated: self.last_updated.unwrap_or_else(now),
        };
        device.validate()?;
        Ok(device)
    }
}

/// Partial update applied by [`Action::UpdateDevice`](crate::action::Action::UpdateDevice).
///
/// Only the fields allowed to vary are present; `id` and `device_type`
/// cannot be changed through a patch. `value` and `unit` are doubly optional
/// so that a patch can clear them: `None` leaves the field alone,
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Option<f64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_some",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<Option<String>>,
}

impl DevicePatch {
    /// Patch that only switches the device on or off.
    #[must_use]
    pub fn power(is_on: bool) -> Self {
        Self {
            is_on: Some(is_on),
            ..Self::default()
        }
    }

    /// Patch that only sets the numeric reading.
    #[must_use]
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(Some(value)),
            ..Self::default()
        }
    }
}

// Distinguishes an explicit `null` (clear the field) from an absent key.
fn deserialize_some<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn light() -> Device {
        Device::builder()
            .id("1")
            .name("Living Room Light")
            .device_type(DeviceType::Light)
            .room("Living Room")
            .is_on(true)
            .value(75.0, "%")
            .last_updated(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn should_build_valid_device_when_name_provided() {
        let device = light();
        assert_eq!(device.id.as_str(), "1");
        assert_eq!(device.device_type, DeviceType::Light);
        assert_eq!(device.status, DeviceStatus::Online);
        assert_eq!(device.value, Some(75.0));
        assert_eq!(device.unit.as_deref(), Some("%"));
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Device::builder().build();
        assert!(matches!(
            result,
            Err(HomeboardError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_merge_only_patched_fields() {
        let device = light();
        let at = device.last_updated + Duration::seconds(5);

        let patched = device.patched(&DevicePatch::power(false), at);

        assert!(!patched.is_on);
        assert_eq!(patched.name, device.name);
        assert_eq!(patched.value, device.value);
        assert_eq!(patched.last_updated, at);
    }

    #[test]
    fn should_clear_optional_reading_when_patch_sets_none() {
        let device = light();
        let patch = DevicePatch {
            value: Some(None),
            unit: Some(None),
            ..DevicePatch::default()
        };

        let patched = device.patched(&patch, device.last_updated);

        assert_eq!(patched.value, None);
        assert_eq!(patched.unit, None);
    }

    #[test]
    fn should_not_move_last_updated_backwards() {
        let device = light();
        let earlier = device.last_updated - Duration::hours(1);

        let patched = device.patched(&DevicePatch::power(false), earlier);

        assert_eq!(patched.last_updated, device.last_updated);
    }

    #[test]
    fn should_serialize_with_camel_case_and_type_tag() {
        let json = serde_json::to_value(light()).unwrap();
        assert_eq!(json["type"], "light");
        assert_eq!(json["isOn"], true);
        assert!(json.get("lastUpdated").is_some());
    }

    #[test]
    fn should_distinguish_null_from_absent_in_patch() {
        let cleared: DevicePatch = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(cleared.value, Some(None));

        let untouched: DevicePatch = serde_json::from_str(r#"{"isOn": false}"#).unwrap();
        assert_eq!(untouched.value, None);
        assert_eq!(untouched.is_on, Some(false));
    }

    #[test]
    fn should_ignore_identity_fields_in_patch_payload() {
        let patch: DevicePatch =
            serde_json::from_str(r#"{"id": "99", "type": "lock", "isOn": false}"#).unwrap();
        let device = light();

        let patched = device.patched(&patch, device.last_updated);

        assert_eq!(patched.id, device.id);
        assert_eq!(patched.device_type, DeviceType::Light);
    }
}
