#![allow(clippy::module_name_repetitions)]

mod bridge;
mod config;
mod device_id;
pub mod ffi;
mod logging;
mod manager;
pub mod native;
mod registry;
mod result;
#[cfg(test)]
mod test_logger;

pub mod prelude {
    pub use crate::bridge::{BridgeState, NativeBridge, LEGACY_CONNECT_STATUS, LEGACY_GREETING};
    pub use crate::config::{BridgeConfig, DEFAULT_LOG_TAG};
    pub use crate::device_id::*;
    pub use crate::manager::BridgeManager;
    pub use crate::native::{HidApiNative, NativeHid, NativeHidDevice};
    pub use crate::registry::{DeviceHandle, DeviceRegistry};
    pub use crate::result::*;
}
