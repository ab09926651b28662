use log::debug;

use crate::config::BridgeConfig;
use crate::device_id::DeviceId;
use crate::native::{NativeHid, NativeHidDevice, HID_SUCCESS, USB_SUCCESS};
use crate::registry::{DeviceHandle, DeviceRegistry};
use crate::result::{BridgeError, BridgeResult};

/// Text returned to Java by the legacy initialize entry point, whatever the outcome.
pub const LEGACY_GREETING: &str = "Hello from C++";
/// Status returned to Java by the legacy connect entry point, whatever the outcome.
pub const LEGACY_CONNECT_STATUS: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninitialized,
    Initialized,
}

/// Bootstraps the USB and HID subsystems and opens HID devices by vendor and product id.
///
/// Opened devices stay owned by the bridge until they are closed or the bridge shuts down.
pub struct NativeBridge<N: NativeHid> {
    native: N,
    config: BridgeConfig,
    state: BridgeState,
    devices: DeviceRegistry<N::Device>,
}

impl<N: NativeHid> NativeBridge<N> {
    #[must_use]
    pub fn new(native: N) -> Self {
        Self::with_config(native, BridgeConfig::default())
    }

    #[must_use]
    pub fn with_config(native: N, config: BridgeConfig) -> Self {
        Self {
            native,
            config,
            state: BridgeState::Uninitialized,
            devices: DeviceRegistry::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> BridgeState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[must_use]
    pub const fn native(&self) -> &N {
        &self.native
    }

    /// Handles of the devices currently open, in the order they were opened.
    #[must_use]
    pub fn open_devices(&self) -> Vec<DeviceHandle> {
        self.devices.handles()
    }

    /// Disables USB device discovery, then initializes the HID layer.
    ///
    /// The HID layer is left untouched when the USB option cannot be applied.
    /// Calling this again re-runs both steps. The state only changes on success.
    ///
    /// # Errors
    ///
    /// Returns the status code of the step that failed.
    pub fn initialize(&mut self) -> BridgeResult<()> {
        let status = self.native.disable_device_discovery();
        if status != USB_SUCCESS {
            debug!("libusb_set_option failed: {status}");
            return Err(BridgeError::UsbOption(status));
        }

        let status = self.native.hid_init();
        debug!("hid_init()={status}");
        if status != HID_SUCCESS {
            return Err(BridgeError::HidInit(status));
        }

        self.state = BridgeState::Initialized;
        Ok(())
    }

    /// Opens the configured target device.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` if no matching device is present or it is busy.
    pub fn connect(&mut self) -> BridgeResult<DeviceHandle> {
        self.connect_device(self.config.target())
    }

    /// Opens the first device matching `device`, regardless of its serial number.
    /// Does not require `initialize` to have been called.
    ///
    /// # Errors
    ///
    /// Returns `DeviceUnavailable` if no matching device is present or it is busy.
    pub fn connect_device(&mut self, device: DeviceId) -> BridgeResult<DeviceHandle> {
        let Some(opened) = self.native.open(device) else {
            debug!("Device {device} couldn't be opened");
            return Err(BridgeError::DeviceUnavailable(device));
        };
        debug!("Device {device} successfully opened");

        let handle = self.devices.insert(opened);
        log::trace!("device {device} registered as {handle}");
        Ok(handle)
    }

    /// Reads one input report, waiting up to `timeout_millis` (`-1` blocks).
    /// Returns `0` when nothing arrived in time.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not open or the read failed.
    pub fn read_timeout(
        &mut self,
        handle: DeviceHandle,
        buffer: &mut [u8],
        timeout_millis: i32,
    ) -> BridgeResult<usize> {
        let device = self.device(handle)?;
        Ok(device.read_timeout(buffer, timeout_millis)?)
    }

    /// Writes one output report, the first byte being the report id.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is not open or the write failed.
    pub fn write(&mut self, handle: DeviceHandle, data: &[u8]) -> BridgeResult<usize> {
        let device = self.device(handle)?;
        Ok(device.write(data)?)
    }

    /// Returns the serial number of an open device, empty if it has none.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if the handle is not open.
    pub fn identifier(&mut self, handle: DeviceHandle) -> BridgeResult<String> {
        Ok(self.device(handle)?.identifier())
    }

    /// Closes one device.
    ///
    /// # Errors
    ///
    /// Returns `UnknownHandle` if the handle is not open.
    pub fn close(&mut self, handle: DeviceHandle) -> BridgeResult<()> {
        let device = self
            .devices
            .remove(handle)
            .ok_or(BridgeError::UnknownHandle(handle))?;
        drop(device);
        debug!("Device {handle} closed");
        Ok(())
    }

    /// Closes every open device and releases the HID context.
    pub fn shutdown(&mut self) {
        let closed = self.devices.drain().len();
        if self.state == BridgeState::Uninitialized && closed == 0 {
            return;
        }

        self.native.release_hid();
        debug!("Released HID context, closed {closed} device(s)");
        self.state = BridgeState::Uninitialized;
    }

    /// Runs `initialize`, reporting failures only through the log.
    pub fn initialize_legacy(&mut self) -> &'static str {
        _ = self.initialize();
        LEGACY_GREETING
    }

    /// Opens the original Wii remote (057e:0306), reporting failures only through the log.
    /// An opened device stays registered until `shutdown`.
    pub fn connect_legacy(&mut self) -> i32 {
        _ = self.connect_device(DeviceId::WIIMOTE);
        LEGACY_CONNECT_STATUS
    }

    fn device(&mut self, handle: DeviceHandle) -> BridgeResult<&mut N::Device> {
        self.devices
            .get_mut(handle)
            .ok_or(BridgeError::UnknownHandle(handle))
    }
}

impl<N: NativeHid> Drop for NativeBridge<N> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
