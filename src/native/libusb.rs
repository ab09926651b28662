use rusb::constants::{
    LIBUSB_ERROR_ACCESS, LIBUSB_ERROR_BUSY, LIBUSB_ERROR_INTERRUPTED, LIBUSB_ERROR_INVALID_PARAM,
    LIBUSB_ERROR_IO, LIBUSB_ERROR_NOT_FOUND, LIBUSB_ERROR_NOT_SUPPORTED, LIBUSB_ERROR_NO_DEVICE,
    LIBUSB_ERROR_NO_MEM, LIBUSB_ERROR_OTHER, LIBUSB_ERROR_OVERFLOW, LIBUSB_ERROR_PIPE,
    LIBUSB_ERROR_TIMEOUT, LIBUSB_SUCCESS,
};

/// Sets `LIBUSB_OPTION_NO_DEVICE_DISCOVERY` on the default libusb context.
/// The option is process-wide and must be applied before the HID layer starts.
pub fn disable_device_discovery() -> i32 {
    match rusb::disable_device_discovery() {
        Ok(()) => LIBUSB_SUCCESS,
        Err(error) => status_code(error),
    }
}

/// Maps a `rusb` error back to the libusb status code it was created from.
pub const fn status_code(error: rusb::Error) -> i32 {
    match error {
        rusb::Error::Io => LIBUSB_ERROR_IO,
        rusb::Error::InvalidParam => LIBUSB_ERROR_INVALID_PARAM,
        rusb::Error::Access => LIBUSB_ERROR_ACCESS,
        rusb::Error::NoDevice => LIBUSB_ERROR_NO_DEVICE,
        rusb::Error::NotFound => LIBUSB_ERROR_NOT_FOUND,
        rusb::Error::Busy => LIBUSB_ERROR_BUSY,
        rusb::Error::Timeout => LIBUSB_ERROR_TIMEOUT,
        rusb::Error::Overflow => LIBUSB_ERROR_OVERFLOW,
        rusb::Error::Pipe => LIBUSB_ERROR_PIPE,
        rusb::Error::Interrupted => LIBUSB_ERROR_INTERRUPTED,
        rusb::Error::NoMem => LIBUSB_ERROR_NO_MEM,
        rusb::Error::NotSupported => LIBUSB_ERROR_NOT_SUPPORTED,
        #[allow(unreachable_patterns)]
        _ => LIBUSB_ERROR_OTHER,
    }
}
