use std::collections::BTreeMap;
use std::fmt;

/// Opaque reference to a device opened through a `NativeBridge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DeviceHandle(u32);

impl DeviceHandle {
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every open device so none outlives the bridge.
/// An open handle is never handed out twice. Closed handles only come back
/// after the `u32` counter wraps around.
pub struct DeviceRegistry<D> {
    devices: BTreeMap<DeviceHandle, D>,
    next_handle: u32,
}

impl<D> DeviceRegistry<D> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            devices: BTreeMap::new(),
            next_handle: 1,
        }
    }

    pub fn insert(&mut self, device: D) -> DeviceHandle {
        let mut handle = DeviceHandle(self.next_handle);
        while self.devices.contains_key(&handle) {
            handle = DeviceHandle(next_raw(handle.0));
        }
        self.next_handle = next_raw(handle.0);
        self.devices.insert(handle, device);
        handle
    }

    pub fn get_mut(&mut self, handle: DeviceHandle) -> Option<&mut D> {
        self.devices.get_mut(&handle)
    }

    /// Removes the device, it is closed when the returned value is dropped.
    pub fn remove(&mut self, handle: DeviceHandle) -> Option<D> {
        self.devices.remove(&handle)
    }

    /// Removes every device in handle order.
    pub fn drain(&mut self) -> Vec<(DeviceHandle, D)> {
        std::mem::take(&mut self.devices).into_iter().collect()
    }

    #[must_use]
    pub fn handles(&self) -> Vec<DeviceHandle> {
        self.devices.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

// 0 is never a valid handle
const fn next_raw(raw: u32) -> u32 {
    match raw.checked_add(1) {
        Some(next) => next,
        None => 1,
    }
}

impl<D> Default for DeviceRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}
