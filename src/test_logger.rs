use std::sync::{Mutex, Once};
use std::thread::ThreadId;

use log::{Level, LevelFilter, Log, Metadata, Record};

static RECORDS: Mutex<Vec<(ThreadId, Level, String)>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut records = match RECORDS.lock() {
            Ok(records) => records,
            Err(records) => records.into_inner(),
        };
        records.push((
            std::thread::current().id(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

/// Installs the capturing logger and drops anything the current thread logged so far.
pub fn install() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        _ = log::set_logger(&CapturingLogger);
        log::set_max_level(LevelFilter::Trace);
    });
    _ = take();
}

/// Returns the debug lines logged by the current thread since the last call.
pub fn take() -> Vec<String> {
    let current = std::thread::current().id();
    let mut records = match RECORDS.lock() {
        Ok(records) => records,
        Err(records) => records.into_inner(),
    };
    let (mine, others) = records
        .drain(..)
        .partition::<Vec<_>, _>(|(thread, _, _)| *thread == current);
    *records = others;
    mine.into_iter()
        .filter(|(_, level, _)| *level == Level::Debug)
        .map(|(_, _, line)| line)
        .collect()
}
