//! Entry points called by `org.scotthamilton.wiidroid.MainActivity`.
//!
//! They keep the contract the app was built against: initialize always answers with
//! [`LEGACY_GREETING`](crate::prelude::LEGACY_GREETING) and connect always answers with
//! [`LEGACY_CONNECT_STATUS`](crate::prelude::LEGACY_CONNECT_STATUS).
//! Outcomes only show up in the platform log.

use jni::objects::JObject;
use jni::sys::{jint, jstring};
use jni::JNIEnv;

use crate::manager::BridgeManager;

#[no_mangle]
pub extern "system" fn Java_org_scotthamilton_wiidroid_MainActivity_testInitHIDAPI<'local>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    let greeting = BridgeManager::with_instance(|bridge| bridge.initialize_legacy());
    match env.new_string(greeting) {
        Ok(greeting) => greeting.into_raw(),
        Err(error) => {
            log::error!("Unable to create Java string: {error}");
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_org_scotthamilton_wiidroid_MainActivity_testConnectHIDAPI<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jint {
    BridgeManager::with_instance(|bridge| bridge.connect_legacy())
}

#[no_mangle]
pub extern "system" fn Java_org_scotthamilton_wiidroid_MainActivity_shutdownHIDAPI<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    BridgeManager::cleanup();
}
