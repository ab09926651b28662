mod hid;
mod libusb;
#[cfg(test)]
pub(crate) mod mock;

use hidapi::HidResult;

use crate::device_id::DeviceId;

pub use hid::HidApiNative;
pub use libusb::status_code as libusb_status_code;

pub const HID_SUCCESS: i32 = 0;
pub const HID_FAILURE: i32 = -1;
pub const USB_SUCCESS: i32 = 0;

/// Process-wide USB and HID subsystems a `NativeBridge` drives.
///
/// Statuses follow the C libraries: `0` is success, negative values are errors.
pub trait NativeHid {
    type Device: NativeHidDevice;

    /// Turns off automatic USB device discovery for the whole process.
    fn disable_device_discovery(&mut self) -> i32;
    fn hid_init(&mut self) -> i32;
    /// Drops the HID context. The HID library itself may stay initialized for the process.
    fn release_hid(&mut self);
    /// Opens the first device matching `device`, ignoring the serial number.
    fn open(&mut self, device: DeviceId) -> Option<Self::Device>;
}

/// An opened HID device, closed when dropped.
pub trait NativeHidDevice {
    fn read_timeout(&mut self, buffer: &mut [u8], timeout_millis: i32) -> HidResult<usize>;
    fn write(&mut self, buffer: &[u8]) -> HidResult<usize>;
    fn identifier(&self) -> String;
}
