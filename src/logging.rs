use crate::config::BridgeConfig;

/// Routes `log` records to the platform log.
///
/// On Android this installs `android_logger` once per process, later calls are ignored.
/// Other targets leave logger installation to the host application.
#[cfg(target_os = "android")]
pub fn init(config: &BridgeConfig) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(config.log_tag())
            .with_max_level(config.max_log_level()),
    );
}

#[cfg(not(target_os = "android"))]
pub fn init(config: &BridgeConfig) {
    log::trace!(
        "no platform logger for tag {}, using the host logger",
        config.log_tag()
    );
}
