//! Read-only selectors over a [`HomeState`] snapshot.
//!
//! These compute what the dashboard page shows; they never dispatch.

use std::sync::Arc;

use serde::Serialize;

use homeboard_domain::device::Device;
use homeboard_domain::energy::EnergyReading;
use homeboard_domain::room::Room;
use homeboard_domain::state::HomeState;

/// Number of devices shown in the "recent devices" panel.
pub const RECENT_DEVICES: usize = 4;
/// Number of rooms shown in the "quick rooms" panel.
pub const QUICK_ROOMS: usize = 3;

/// Headline figures of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_devices: usize,
    pub active_rooms: usize,
    pub online_devices: usize,
    pub powered_devices: usize,
    pub enabled_rules: usize,
    pub is_loading: bool,
    pub energy: EnergySummary,
}

impl DashboardSummary {
    #[must_use]
    pub fn from_state(state: &HomeState) -> Self {
        Self {
            total_devices: state.devices.len(),
            active_rooms: state.rooms.len(),
            online_devices: state
                .devices
                .iter()
                .filter(|d| d.status.is_online())
                .count(),
            powered_devices: state.devices.iter().filter(|d| d.is_on).count(),
            enabled_rules: state.automation_rules.iter().filter(|r| r.enabled).count(),
            is_loading: state.is_loading,
            energy: EnergySummary::from_readings(&state.energy_data),
        }
    }
}

/// Totals over the energy readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySummary {
    pub total_consumption: f64,
    pub total_cost: f64,
}

impl EnergySummary {
    #[must_use]
    pub fn from_readings(readings: &[EnergyReading]) -> Self {
        readings.iter().fold(Self::default(), |acc, reading| Self {
            total_consumption: acc.total_consumption + reading.consumption,
            total_cost: acc.total_cost + reading.cost,
        })
    }
}

/// The first few devices, in collection order.
#[must_use]
pub fn recent_devices(state: &HomeState) -> &[Arc<Device>] {
    &state.devices[..state.devices.len().min(RECENT_DEVICES)]
}

/// The first few rooms, in collection order.
#[must_use]
pub fn quick_rooms(state: &HomeState) -> &[Room] {
    &state.rooms[..state.rooms.len().min(QUICK_ROOMS)]
}

/// Devices whose `room` names `room_name`.
pub fn devices_in_room<'a>(
    state: &'a HomeState,
    room_name: &'a str,
) -> impl Iterator<Item = &'a Arc<Device>> + 'a {
    state.devices.iter().filter(move |d| d.room == room_name)
}
