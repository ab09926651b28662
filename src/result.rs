use hidapi::HidError;
use thiserror::Error;

use crate::device_id::DeviceId;
use crate::registry::DeviceHandle;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("libusb_set_option failed: {0}")]
    UsbOption(i32),
    #[error("hid_init failed: {0}")]
    HidInit(i32),
    #[error("device {0} couldn't be opened")]
    DeviceUnavailable(DeviceId),
    #[error("no open device for handle {0}")]
    UnknownHandle(DeviceHandle),
    #[error("hidapi error: {0}")]
    HidApiError(#[from] HidError),
}

impl BridgeError {
    /// Returns the status code reported by the underlying library, if any.
    #[must_use]
    pub const fn status_code(&self) -> Option<i32> {
        match self {
            Self::UsbOption(status) | Self::HidInit(status) => Some(*status),
            _ => None,
        }
    }
}

pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code() {
        assert_eq!(BridgeError::UsbOption(-12).status_code(), Some(-12));
        assert_eq!(BridgeError::HidInit(-1).status_code(), Some(-1));
        assert_eq!(
            BridgeError::DeviceUnavailable(DeviceId::WIIMOTE).status_code(),
            None
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            BridgeError::UsbOption(-1).to_string(),
            "libusb_set_option failed: -1"
        );
        assert_eq!(
            BridgeError::DeviceUnavailable(DeviceId::WIIMOTE).to_string(),
            "device 057e:0306 couldn't be opened"
        );
    }
}
