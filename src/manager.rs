use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::bridge::NativeBridge;
use crate::config::BridgeConfig;
use crate::logging;
use crate::native::HidApiNative;

type SharedBridge = Arc<Mutex<NativeBridge<HidApiNative>>>;

/// Owns the process-wide bridge used by the exported entry points.
pub struct BridgeManager;

impl BridgeManager {
    /// Get the bridge instance, installing the platform logger on first use.
    pub fn get_instance() -> SharedBridge {
        static SINGLETON: Lazy<SharedBridge> = Lazy::new(|| {
            let config = BridgeConfig::default();
            logging::init(&config);
            Arc::new(Mutex::new(NativeBridge::with_config(
                HidApiNative::new(),
                config,
            )))
        });
        Arc::clone(&SINGLETON)
    }

    /// Runs `f` with exclusive access to the bridge instance.
    pub fn with_instance<R>(f: impl FnOnce(&mut NativeBridge<HidApiNative>) -> R) -> R {
        let bridge = Self::get_instance();
        let mut bridge = match bridge.lock() {
            Ok(b) => b,
            Err(b) => b.into_inner(),
        };
        f(&mut bridge)
    }

    /// Close every device and shut the HID layer down.
    pub fn cleanup() {
        Self::with_instance(|bridge| bridge.shutdown());
    }
}
