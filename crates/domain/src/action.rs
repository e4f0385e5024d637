//! Action — a tagged description of one intended state transition.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::automation::AutomationRule;
use crate::device::{Device, DevicePatch};
use crate::energy::EnergyReading;
use crate::id::DeviceId;
use crate::room::Room;

/// The closed set of transitions the state container accepts.
///
/// Serialized adjacently tagged, e.g.
/// `{"type": "UPDATE_DEVICE", "payload": {"id": "1", "updates": {"isOn": false}}}`.
/// A tag outside this set deserializes to [`Action::Unrecognized`] whatever
/// its payload, and the container treats it as a no-op.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the full device collection.
    SetDevices(Vec<Device>),
    /// Merge `updates` into the device whose id is `id`.
    UpdateDevice { id: DeviceId, updates: DevicePatch },
    /// Replace the full room collection.
    SetRooms(Vec<Room>),
    /// Replace the full automation rule collection.
    SetAutomationRules(Vec<AutomationRule>),
    /// Replace the full energy reading collection.
    SetEnergyData(Vec<EnergyReading>),
    /// Set the informational loading flag.
    SetLoading(bool),
    Unrecognized,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

#[derive(Deserialize)]
struct UpdateDevicePayload {
    id: DeviceId,
    updates: DevicePatch,
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Envelope { kind, payload } = Envelope::deserialize(deserializer)?;
        let action = match kind.as_str() {
            "SET_DEVICES" => serde_json::from_value(payload).map(Self::SetDevices),
            "UPDATE_DEVICE" => serde_json::from_value(payload)
                .map(|UpdateDevicePayload { id, updates }| Self::UpdateDevice { id, updates }),
            "SET_ROOMS" => serde_json::from_value(payload).map(Self::SetRooms),
            "SET_AUTOMATION_RULES" => serde_json::from_value(payload).map(Self::SetAutomationRules),
            "SET_ENERGY_DATA" => serde_json::from_value(payload).map(Self::SetEnergyData),
            "SET_LOADING" => serde_json::from_value(payload).map(Self::SetLoading),
            // Unknown kinds discard whatever payload they carry.
            _ => Ok(Self::Unrecognized),
        };
        action.map_err(D::Error::custom)
    }
}

impl Action {
    /// Wire tag of this action, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetDevices(_) => "SET_DEVICES",
            Self::UpdateDevice { .. } => "UPDATE_DEVICE",
            Self::SetRooms(_) => "SET_ROOMS",
            Self::SetAutomationRules(_) => "SET_AUTOMATION_RULES",
            Self::SetEnergyData(_) => "SET_ENERGY_DATA",
            Self::SetLoading(_) => "SET_LOADING",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpdateDevice { id, .. } => write!(f, "{}({id})", self.kind()),
            Self::SetLoading(flag) => write!(f, "{}({flag})", self.kind()),
            _ => f.write_str(self.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_update_device_from_wire_form() {
        let json = r#"{"type":"UPDATE_DEVICE","payload":{"id":"1","updates":{"isOn":false}}}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(
            action,
            Action::UpdateDevice {
                id: DeviceId::from("1"),
                updates: DevicePatch::power(false),
            }
        );
    }

    #[test]
    fn should_deserialize_set_loading() {
        let action: Action = serde_json::from_str(r#"{"type":"SET_LOADING","payload":true}"#).unwrap();
        assert_eq!(action, Action::SetLoading(true));
    }

    #[test]
    fn should_deserialize_unknown_tag_as_unrecognized() {
        let action: Action = serde_json::from_str(r#"{"type":"RESET_EVERYTHING"}"#).unwrap();
        assert_eq!(action, Action::Unrecognized);
    }

    #[test]
    fn should_deserialize_unknown_tag_with_any_payload_as_unrecognized() {
        let payloads = [
            r#"{"type":"RESET_EVERYTHING","payload":{"force":true}}"#,
            r#"{"type":"RESET_EVERYTHING","payload":true}"#,
            r#"{"type":"RESET_EVERYTHING","payload":[1]}"#,
            r#"{"type":"RESET_EVERYTHING","payload":null}"#,
        ];
        for json in payloads {
            let action: Action = serde_json::from_str(json).unwrap();
            assert_eq!(action, Action::Unrecognized, "{json}");
        }
    }

    #[test]
    fn should_reject_known_tag_with_missing_or_wrong_payload() {
        assert!(serde_json::from_str::<Action>(r#"{"type":"SET_LOADING"}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"type":"SET_ROOMS","payload":{}}"#).is_err());
        assert!(serde_json::from_str::<Action>(r#"{"payload":true}"#).is_err());
    }

    #[test]
    fn should_decode_what_it_encodes() {
        let action = Action::UpdateDevice {
            id: DeviceId::from("2"),
            updates: DevicePatch::value(68.0),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), action);
    }

    #[test]
    fn should_serialize_with_screaming_snake_case_tag() {
        let json = serde_json::to_value(Action::SetRooms(Vec::new())).unwrap();
        assert_eq!(json["type"], "SET_ROOMS");
        assert_eq!(json["payload"], serde_json::json!([]));
    }

    #[test]
    fn should_display_kind_with_target() {
        let action = Action::UpdateDevice {
            id: DeviceId::from("3"),
            updates: DevicePatch::default(),
        };
        assert_eq!(action.to_string(), "UPDATE_DEVICE(3)");
        assert_eq!(Action::SetEnergyData(Vec::new()).to_string(), "SET_ENERGY_DATA");
    }
}
