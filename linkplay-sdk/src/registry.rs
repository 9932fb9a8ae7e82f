//! Host-owned collection of devices
//!
//! Batch services such as the preset button address several devices at
//! once. The host keeps its devices in a [`DeviceRegistry`] and routes
//! requests through it; nothing here is global.

use std::collections::HashMap;
use std::fmt;

use linkplay_api::{HttpClient, Transport};
use linkplay_state::{Enricher, EnrichmentPipeline};
use serde::Deserialize;

use crate::{LinkPlayDevice, RefreshOutcome, SdkError, ServiceCall, ServiceRequest};

/// Host-assigned identifier of a device
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeviceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Per-device results of a batch operation, in target order
pub type BatchResults<R> = Vec<(DeviceId, Result<R, SdkError>)>;

/// Keyed collection of devices owned by the host
pub struct DeviceRegistry<T = HttpClient, E = EnrichmentPipeline> {
    devices: HashMap<DeviceId, LinkPlayDevice<T, E>>,
}

impl<T, E> Default for DeviceRegistry<T, E> {
    fn default() -> Self {
        Self {
            devices: HashMap::new(),
        }
    }
}

impl<T: Transport, E: Enricher> DeviceRegistry<T, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device, returning any device previously registered under `id`
    pub fn insert(
        &mut self,
        id: impl Into<DeviceId>,
        device: LinkPlayDevice<T, E>,
    ) -> Option<LinkPlayDevice<T, E>> {
        self.devices.insert(id.into(), device)
    }

    pub fn remove(&mut self, id: &DeviceId) -> Option<LinkPlayDevice<T, E>> {
        self.devices.remove(id)
    }

    pub fn get(&self, id: &DeviceId) -> Option<&LinkPlayDevice<T, E>> {
        self.devices.get(id)
    }

    pub fn get_mut(&mut self, id: &DeviceId) -> Option<&mut LinkPlayDevice<T, E>> {
        self.devices.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Registered ids, sorted
    pub fn ids(&self) -> Vec<DeviceId> {
        let mut ids: Vec<_> = self.devices.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Run a service call against every target device
    pub fn dispatch(&self, request: &ServiceRequest) -> BatchResults<()> {
        tracing::debug!(
            "Dispatching {} to {} device(s)",
            request.call.kind(),
            request.targets.len()
        );

        request
            .targets
            .iter()
            .map(|id| {
                let result = match self.devices.get(id) {
                    Some(device) => request.call.invoke(device),
                    None => {
                        tracing::warn!("Service {} targets unknown device {}", request.call.kind(), id);
                        Err(SdkError::DeviceNotFound(id.to_string()))
                    }
                };
                (id.clone(), result)
            })
            .collect()
    }

    /// Press preset button `preset` on each target device
    pub fn press_preset(&self, targets: &[DeviceId], preset: u32) -> BatchResults<()> {
        self.dispatch(&ServiceRequest::new(
            targets.to_vec(),
            ServiceCall::PresetButton { preset },
        ))
    }

    /// Refresh every registered device, in id order
    pub fn refresh_all(&mut self) -> BatchResults<RefreshOutcome> {
        let mut ids: Vec<_> = self.devices.keys().cloned().collect();
        ids.sort();

        ids.into_iter()
            .filter_map(|id| {
                let device = self.devices.get_mut(&id)?;
                let result = device.refresh();
                Some((id, result))
            })
            .collect()
    }
}
