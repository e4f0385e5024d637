//! Application state — the aggregate snapshot every view renders from.

use std::sync::Arc;

use crate::automation::AutomationRule;
use crate::device::Device;
use crate::energy::EnergyReading;
use crate::error::{HomeboardError, NotFoundError};
use crate::id::DeviceId;
use crate::room::Room;

/// Immutable snapshot of the whole dashboard state.
///
/// Collections are shared slices so that a transition touching one
/// collection reuses the others as-is. Devices are individually shared as
/// well: updating one device leaves every other `Arc<Device>` pointer-equal
/// to its previous value, which lets consumers skip unchanged items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeState {
    pub devices: Arc<[Arc<Device>]>,
    pub rooms: Arc<[Room]>,
    pub automation_rules: Arc<[AutomationRule]>,
    pub energy_data: Arc<[EnergyReading]>,
    pub is_loading: bool,
}

impl HomeState {
    #[must_use]
    pub fn new(
        devices: Vec<Device>,
        rooms: Vec<Room>,
        automation_rules: Vec<AutomationRule>,
        energy_data: Vec<EnergyReading>,
    ) -> Self {
        Self {
            devices: share_devices(devices),
            rooms: rooms.into(),
            automation_rules: automation_rules.into(),
            energy_data: energy_data.into(),
            is_loading: false,
        }
    }

    /// Find a device by id.
    #[must_use]
    pub fn device(&self, id: &DeviceId) -> Option<&Arc<Device>> {
        self.devices.iter().find(|device| &device.id == id)
    }

    /// Find a device by id, failing when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`HomeboardError::NotFound`] when no device has `id`.
    pub fn require_device(&self, id: &DeviceId) -> Result<&Arc<Device>, HomeboardError> {
        self.device(id).ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }
}

/// Wrap each device in its own `Arc` and collect into a shared slice.
#[must_use]
pub fn share_devices(devices: Vec<Device>) -> Arc<[Arc<Device>]> {
    devices.into_iter().map(Arc::new).collect()
}
