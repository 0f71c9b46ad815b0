//! Device list controller
//!
//! Owns one [`DeviceViewModel`] per roster entry, in roster order, plus the
//! selection cursor. The roster is fetched once; freshness afterwards comes
//! from each device's own refresh.

use lumadeck_core::prelude::*;
use lumadeck_core::{DeviceEntry, DeviceInfo};

use crate::device::{DeviceViewModel, Lifecycle};

/// State of the roster fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RosterState {
    #[default]
    Loading,
    Loaded,
    /// The fetch failed; the whole list is replaced by this message
    Failed(String),
}

/// Aggregate counts for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceCounts {
    pub total: usize,
    pub loaded: usize,
    pub errors: usize,
    pub offline: usize,
    pub in_flight: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DeviceListController {
    roster: RosterState,
    devices: Vec<DeviceViewModel>,
    selected: usize,
}

impl DeviceListController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn devices(&self) -> &[DeviceViewModel] {
        &self.devices
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    pub fn get(&self, device_id: &str) -> Option<&DeviceViewModel> {
        self.devices.iter().find(|d| d.id() == device_id)
    }

    pub fn get_mut(&mut self, device_id: &str) -> Option<&mut DeviceViewModel> {
        self.devices.iter_mut().find(|d| d.id() == device_id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.devices.iter().map(|d| d.id().to_string()).collect()
    }

    /// A roster fetch was issued
    pub fn begin_load(&mut self) {
        self.roster = RosterState::Loading;
    }

    /// Build the view-models from a roster-only fetch.
    ///
    /// Returns the ids to refresh, which is every device.
    pub fn load_succeeded(&mut self, devices: Vec<DeviceInfo>) -> Vec<String> {
        info!("Loaded {} devices", devices.len());
        self.devices = devices.into_iter().map(DeviceViewModel::new).collect();
        self.roster = RosterState::Loaded;
        self.selected = 0;
        self.ids()
    }

    /// Build the view-models from a combined fetch.
    ///
    /// Embedded statuses are applied directly. Returns the ids of devices that
    /// came without one and still need a refresh.
    pub fn load_succeeded_with_status(&mut self, entries: Vec<DeviceEntry>) -> Vec<String> {
        info!("Loaded {} devices with status", entries.len());
        let mut needs_refresh = Vec::new();
        self.devices = entries
            .into_iter()
            .map(|entry| {
                let mut vm = DeviceViewModel::new(entry.info);
                match entry.status {
                    Some(status) => vm.apply_status(status),
                    None => needs_refresh.push(vm.id().to_string()),
                }
                vm
            })
            .collect();
        self.roster = RosterState::Loaded;
        self.selected = 0;
        needs_refresh
    }

    /// The roster fetch failed; no partial list is kept
    pub fn load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("Device list failed: {}", message);
        self.devices.clear();
        self.selected = 0;
        self.roster = RosterState::Failed(message);
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&DeviceViewModel> {
        self.devices.get(self.selected)
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected().map(|d| d.id().to_string())
    }

    pub fn select_next(&mut self) {
        if !self.devices.is_empty() {
            self.selected = (self.selected + 1) % self.devices.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.devices.is_empty() {
            self.selected = if self.selected == 0 {
                self.devices.len() - 1
            } else {
                self.selected - 1
            };
        }
    }

    pub fn counts(&self) -> DeviceCounts {
        let mut counts = DeviceCounts {
            total: self.devices.len(),
            ..Default::default()
        };
        for device in &self.devices {
            counts.in_flight += device.in_flight();
            match device.lifecycle() {
                Lifecycle::Error(_) => counts.errors += 1,
                Lifecycle::Offline => counts.offline += 1,
                _ if device.known_status().is_some() => counts.loaded += 1,
                _ => {}
            }
        }
        counts
    }

    /// Total operations still awaiting a completion
    pub fn in_flight(&self) -> usize {
        self.devices.iter().map(DeviceViewModel::in_flight).sum()
    }
}
