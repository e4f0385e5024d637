//! Fixed initial state the dashboard starts from.
//!
//! There is no external source behind it: no file, env var or fetch.

use homeboard_domain::automation::AutomationRule;
use homeboard_domain::device::{Device, DeviceStatus, DeviceType};
use homeboard_domain::error::HomeboardError;
use homeboard_domain::room::Room;
use homeboard_domain::state::HomeState;

/// Build the seeded state: 4 devices, 4 rooms, 2 rules, no energy readings.
///
/// # Errors
///
/// Only fails if a seed record violates a domain invariant, which would be
/// a bug in this module.
pub fn initial_state() -> Result<HomeState, HomeboardError> {
    Ok(HomeState::new(devices()?, rooms()?, automation_rules()?, Vec::new()))
}

fn devices() -> Result<Vec<Device>, HomeboardError> {
    Ok(vec![
        Device::builder()
            .id("1")
            .name("Living Room Light")
            .device_type(DeviceType::Light)
            .room("Living Room")
            .status(DeviceStatus::Online)
            .is_on(true)
            .value(75.0, "%")
            .build()?,
        Device::builder()
            .id("2")
            .name("Main Thermostat")
            .device_type(DeviceType::Thermostat)
            .room("Living Room")
            .status(DeviceStatus::Online)
            .is_on(true)
            .value(72.0, "°F")
            .build()?,
        Device::builder()
            .id("3")
            .name("Front Door Lock")
            .device_type(DeviceType::Lock)
            .room("Entrance")
            .status(DeviceStatus::Online)
            .is_on(false)
            .build()?,
        Device::builder()
            .id("4")
            .name("Security Camera")
            .device_type(DeviceType::Camera)
            .room("Entrance")
            .status(DeviceStatus::Online)
            .is_on(true)
            .build()?,
    ])
}

fn rooms() -> Result<Vec<Room>, HomeboardError> {
    [
        ("1", "Living Room", 3, 72.0, 45.0),
        ("2", "Kitchen", 2, 70.0, 50.0),
        ("3", "Bedroom", 4, 68.0, 42.0),
        ("4", "Entrance", 2, 71.0, 48.0),
    ]
    .into_iter()
    .map(|(id, name, device_count, temperature, humidity)| {
        Room::builder()
            .id(id)
            .name(name)
            .device_count(device_count)
            .climate(temperature, humidity)
            .build()
    })
    .collect()
}

fn automation_rules() -> Result<Vec<AutomationRule>, HomeboardError> {
    Ok(vec![
        AutomationRule::new("Evening Lights", "Sunset", "Turn on all lights")?
            .with_id("1")
            .with_schedule("18:00"),
        AutomationRule::new(
            "Away Mode",
            "All users leave",
            "Lock doors, turn off lights",
        )?
        .with_id("2"),
    ])
}
