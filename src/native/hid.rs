use hidapi::{HidApi, HidDevice, HidResult};

use crate::device_id::DeviceId;

use super::libusb;
use super::{NativeHid, NativeHidDevice, HID_FAILURE, HID_SUCCESS};

/// Backend built on libusb (`rusb`) for the USB option and `hidapi` for the HID layer.
#[derive(Default)]
pub struct HidApiNative {
    api: Option<HidApi>,
}

impl HidApiNative {
    #[must_use]
    pub const fn new() -> Self {
        Self { api: None }
    }

    fn api(&mut self) -> Option<&HidApi> {
        if self.api.is_none() && self.hid_init() != HID_SUCCESS {
            return None;
        }
        self.api.as_ref()
    }
}

impl NativeHid for HidApiNative {
    type Device = HidDevice;

    fn disable_device_discovery(&mut self) -> i32 {
        libusb::disable_device_discovery()
    }

    fn hid_init(&mut self) -> i32 {
        // libusb discovery is already off, keep hidapi from enumerating on init
        HidApi::disable_device_discovery();
        match HidApi::new() {
            Ok(api) => {
                self.api = Some(api);
                HID_SUCCESS
            }
            Err(_) => HID_FAILURE,
        }
    }

    fn release_hid(&mut self) {
        // hidapi never calls hid_exit, the library stays initialized until the process ends
        _ = self.api.take();
    }

    fn open(&mut self, device: DeviceId) -> Option<Self::Device> {
        // hid_open initializes the HID layer itself when needed
        self.api()?.open(device.vendor_id, device.product_id).ok()
    }
}

impl NativeHidDevice for HidDevice {
    fn read_timeout(&mut self, buffer: &mut [u8], timeout_millis: i32) -> HidResult<usize> {
        HidDevice::read_timeout(self, buffer, timeout_millis)
    }

    fn write(&mut self, buffer: &[u8]) -> HidResult<usize> {
        HidDevice::write(self, buffer)
    }

    fn identifier(&self) -> String {
        self.get_serial_number_string()
            .ok()
            .flatten()
            .unwrap_or_default()
    }
}
