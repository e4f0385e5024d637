//! The pure transition function of the state container.

use std::sync::Arc;

use homeboard_domain::action::Action;
use homeboard_domain::device::{Device, DevicePatch};
use homeboard_domain::id::DeviceId;
use homeboard_domain::state::{HomeState, share_devices};
use homeboard_domain::time::{Timestamp, now};

/// Apply `action` to `state`, reading the clock for `UpdateDevice`.
///
/// See [`reduce_at`].
#[must_use]
pub fn reduce(state: &Arc<HomeState>, action: Action) -> Arc<HomeState> {
    reduce_at(state, action, now())
}

/// Apply `action` to `state` with `at` as the current time.
///
/// The input snapshot is never modified. A transition that changes nothing
/// (unrecognized action, unknown device id, loading flag already set)
/// returns the *same* `Arc`, so callers can detect no-ops with
/// [`Arc::ptr_eq`]. Every other transition returns a fresh snapshot that
/// shares all untouched collections with the previous one.
#[must_use]
pub fn reduce_at(state: &Arc<HomeState>, action: Action, at: Timestamp) -> Arc<HomeState> {
    match action {
        Action::SetDevices(devices) => Arc::new(HomeState {
            devices: share_devices(devices),
            ..HomeState::clone(state)
        }),
        Action::UpdateDevice { id, updates } => update_device(state, &id, &updates, at),
        Action::SetRooms(rooms) => Arc::new(HomeState {
            rooms: rooms.into(),
            ..HomeState::clone(state)
        }),
        Action::SetAutomationRules(rules) => Arc::new(HomeState {
            automation_rules: rules.into(),
            ..HomeState::clone(state)
        }),
        Action::SetEnergyData(readings) => Arc::new(HomeState {
            energy_data: readings.into(),
            ..HomeState::clone(state)
        }),
        Action::SetLoading(is_loading) if state.is_loading == is_loading => Arc::clone(state),
        Action::SetLoading(is_loading) => Arc::new(HomeState {
            is_loading,
            ..HomeState::clone(state)
        }),
        Action::Unrecognized => Arc::clone(state),
    }
}

fn update_device(
    state: &Arc<HomeState>,
    id: &DeviceId,
    patch: &DevicePatch,
    at: Timestamp,
) -> Arc<HomeState> {
    let Some(index) = state.devices.iter().position(|device| &device.id == id) else {
        tracing::debug!(device_id = %id, "update targets unknown device, ignoring");
        return Arc::clone(state);
    };

    let mut devices = state.devices.to_vec();
    devices[index] = Arc::new(Device::patched(&devices[index], patch, at));

    Arc::new(HomeState {
        devices: devices.into(),
        ..HomeState::clone(state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use homeboard_domain::device::DeviceType;
    use homeboard_domain::energy::EnergyReading;
    use homeboard_domain::room::Room;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn device(id: &str, name: &str, is_on: bool) -> Device {
        Device::builder()
            .id(id)
            .name(name)
            .device_type(DeviceType::Light)
            .room("Living Room")
            .is_on(is_on)
            .last_updated(t0())
            .build()
            .unwrap()
    }

    fn state() -> Arc<HomeState> {
        let devices = vec![
            device("1", "Living Room Light", true),
            device("2", "Main Thermostat", true),
            device("3", "Front Door Lock", false),
        ];
        let rooms = vec![Room::builder().id("1").name("Living Room").build().unwrap()];
        Arc::new(HomeState::new(devices, rooms, Vec::new(), Vec::new()))
    }

    #[test]
    fn should_not_mutate_input_snapshot() {
        let before = state();
        let copy = HomeState::clone(&before);

        let _ = reduce(&before, Action::SetDevices(Vec::new()));
        let _ = reduce(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("1"),
                updates: DevicePatch::power(false),
            },
        );

        assert_eq!(*before, copy);
        assert_eq!(before.devices.len(), 3);
    }

    #[test]
    fn should_return_same_snapshot_for_unrecognized_action() {
        let before = state();
        let after = reduce(&before, Action::Unrecognized);
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(*before, *after);
    }

    #[test]
    fn should_patch_matching_device_and_share_the_others() {
        let before = state();
        let at = t0() + Duration::seconds(30);

        let after = reduce_at(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("1"),
                updates: DevicePatch::power(false),
            },
            at,
        );

        let updated = after.device(&DeviceId::from("1")).unwrap();
        assert!(!updated.is_on);
        assert!(updated.last_updated > before.devices[0].last_updated);
        assert_eq!(updated.last_updated, at);
        for (old, new) in before.devices.iter().zip(after.devices.iter()).skip(1) {
            assert!(Arc::ptr_eq(old, new));
        }
        assert!(Arc::ptr_eq(&before.rooms, &after.rooms));
    }

    #[test]
    fn should_refresh_timestamp_with_wall_clock() {
        let before = state();
        let after = reduce(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("2"),
                updates: DevicePatch::value(68.0),
            },
        );

        let updated = after.device(&DeviceId::from("2")).unwrap();
        assert_eq!(updated.value, Some(68.0));
        assert!(updated.last_updated > t0());
    }

    #[test]
    fn should_silently_ignore_update_for_unknown_device() {
        let before = state();
        let after = reduce(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("nonexistent-id"),
                updates: DevicePatch::power(false),
            },
        );

        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(before.devices, after.devices);
    }

    #[test]
    fn should_preserve_order_when_patching() {
        let before = state();
        let after = reduce(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("2"),
                updates: DevicePatch::power(false),
            },
        );

        let ids: Vec<&str> = after.devices.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn should_replace_rooms_and_leave_devices_untouched() {
        let before = state();
        let after = reduce(&before, Action::SetRooms(Vec::new()));

        assert!(after.rooms.is_empty());
        assert!(Arc::ptr_eq(&before.devices, &after.devices));
    }

    #[test]
    fn should_replace_devices_wholesale_without_validation() {
        let before = state();
        let unnamed = Device {
            name: String::new(),
            ..device("9", "placeholder", false)
        };

        let after = reduce(&before, Action::SetDevices(vec![unnamed]));

        assert_eq!(after.devices.len(), 1);
        assert!(after.devices[0].name.is_empty());
    }

    #[test]
    fn should_replace_automation_rules_and_energy_data() {
        let before = state();
        let reading = EnergyReading::new("Living Room Light", 0.06, 0.01, t0());

        let after = reduce(&before, Action::SetEnergyData(vec![reading.clone()]));
        let after = reduce(&after, Action::SetAutomationRules(Vec::new()));

        assert_eq!(after.energy_data.as_ref(), [reading]);
        assert!(after.automation_rules.is_empty());
        assert!(Arc::ptr_eq(&before.devices, &after.devices));
    }

    #[test]
    fn should_be_idempotent_when_setting_loading_twice() {
        let before = state();
        let once = reduce(&before, Action::SetLoading(true));
        let twice = reduce(&once, Action::SetLoading(true));

        assert!(once.is_loading);
        assert_eq!(*once, *twice);
        assert!(Arc::ptr_eq(&once, &twice));
        assert!(!before.is_loading);
    }

    #[test]
    fn should_keep_timestamp_monotonic_when_clock_goes_backwards() {
        let before = state();
        let after = reduce_at(
            &before,
            Action::UpdateDevice {
                id: DeviceId::from("3"),
                updates: DevicePatch::power(true),
            },
            t0() - Duration::minutes(10),
        );

        let updated = after.device(&DeviceId::from("3")).unwrap();
        assert!(updated.is_on);
        assert_eq!(updated.last_updated, t0());
    }
}
