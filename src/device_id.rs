use std::fmt;

pub const WIIMOTE_VENDOR_ID: u16 = 0x057E;
pub const WIIMOTE_PRODUCT_ID: u16 = 0x0306;
pub const WIIMOTE_PLUS_PRODUCT_ID: u16 = 0x0330;

/// Identifies a device model on the USB bus by its vendor and product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId {
    pub vendor_id: u16,
    pub product_id: u16,
}

impl DeviceId {
    /// The original Wii remote (RVL-CNT-01).
    pub const WIIMOTE: Self = Self::new(WIIMOTE_VENDOR_ID, WIIMOTE_PRODUCT_ID);
    /// The Wii remote with built-in MotionPlus (RVL-CNT-01-TR).
    pub const WIIMOTE_PLUS: Self = Self::new(WIIMOTE_VENDOR_ID, WIIMOTE_PLUS_PRODUCT_ID);

    #[must_use]
    pub const fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
        }
    }

    /// Returns whether this id names one of the known Wii remote variants.
    #[must_use]
    pub const fn is_wiimote(&self) -> bool {
        is_wiimote(self.vendor_id, self.product_id)
    }
}

impl Default for DeviceId {
    fn default() -> Self {
        Self::WIIMOTE
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:04x}", self.vendor_id, self.product_id)
    }
}

#[must_use]
pub const fn is_wiimote(vendor_id: u16, product_id: u16) -> bool {
    vendor_id == WIIMOTE_VENDOR_ID
        && (product_id == WIIMOTE_PRODUCT_ID || product_id == WIIMOTE_PLUS_PRODUCT_ID)
}
