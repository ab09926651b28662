use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hidapi::{HidError, HidResult};

use crate::device_id::DeviceId;

use super::{NativeHid, NativeHidDevice, HID_SUCCESS, USB_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    DisableDeviceDiscovery,
    HidInit,
    ReleaseHid,
    Open(DeviceId),
}

/// Scripted backend recording every call made into it.
pub struct MockNative {
    pub usb_status: i32,
    pub hid_init_status: i32,
    pub present: Vec<DeviceId>,
    pub reports: VecDeque<Vec<u8>>,
    pub calls: Vec<Call>,
    pub closed: Arc<AtomicUsize>,
}

impl MockNative {
    pub fn new() -> Self {
        Self {
            usb_status: USB_SUCCESS,
            hid_init_status: HID_SUCCESS,
            present: Vec::new(),
            reports: VecDeque::new(),
            calls: Vec::new(),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_device(mut self, device: DeviceId) -> Self {
        self.present.push(device);
        self
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn count(&self, call: Call) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }
}

impl NativeHid for MockNative {
    type Device = MockDevice;

    fn disable_device_discovery(&mut self) -> i32 {
        self.calls.push(Call::DisableDeviceDiscovery);
        self.usb_status
    }

    fn hid_init(&mut self) -> i32 {
        self.calls.push(Call::HidInit);
        self.hid_init_status
    }

    fn release_hid(&mut self) {
        self.calls.push(Call::ReleaseHid);
    }

    fn open(&mut self, device: DeviceId) -> Option<Self::Device> {
        self.calls.push(Call::Open(device));
        if !self.present.contains(&device) {
            return None;
        }
        Some(MockDevice {
            id: device,
            reports: std::mem::take(&mut self.reports),
            closed: Arc::clone(&self.closed),
        })
    }
}

pub struct MockDevice {
    id: DeviceId,
    reports: VecDeque<Vec<u8>>,
    closed: Arc<AtomicUsize>,
}

impl NativeHidDevice for MockDevice {
    fn read_timeout(&mut self, buffer: &mut [u8], _timeout_millis: i32) -> HidResult<usize> {
        match self.reports.pop_front() {
            Some(report) if report.len() > buffer.len() => Err(HidError::HidApiError {
                message: "report larger than buffer".to_string(),
            }),
            Some(report) => {
                buffer[..report.len()].copy_from_slice(&report);
                Ok(report.len())
            }
            None => Ok(0),
        }
    }

    fn write(&mut self, buffer: &[u8]) -> HidResult<usize> {
        Ok(buffer.len())
    }

    fn identifier(&self) -> String {
        self.id.to_string()
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}
