use log::LevelFilter;

use crate::device_id::DeviceId;

pub const DEFAULT_LOG_TAG: &str = "MainActivityJni";

/// Settings injected into a `NativeBridge` when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    target: DeviceId,
    log_tag: String,
    max_log_level: LevelFilter,
}

impl BridgeConfig {
    /// Sets the device opened by `NativeBridge::connect`.
    #[must_use]
    pub const fn with_target(mut self, target: DeviceId) -> Self {
        self.target = target;
        self
    }

    /// Sets the tag attached to platform log lines.
    #[must_use]
    pub fn with_log_tag(mut self, log_tag: impl Into<String>) -> Self {
        self.log_tag = log_tag.into();
        self
    }

    #[must_use]
    pub const fn with_max_log_level(mut self, max_log_level: LevelFilter) -> Self {
        self.max_log_level = max_log_level;
        self
    }

    #[must_use]
    pub const fn target(&self) -> DeviceId {
        self.target
    }

    #[must_use]
    pub fn log_tag(&self) -> &str {
        &self.log_tag
    }

    #[must_use]
    pub const fn max_log_level(&self) -> LevelFilter {
        self.max_log_level
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            target: DeviceId::WIIMOTE,
            log_tag: DEFAULT_LOG_TAG.to_string(),
            max_log_level: LevelFilter::Debug,
        }
    }
}
