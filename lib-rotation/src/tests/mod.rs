use std::cell::RefCell;
use log::{Level, LevelFilter, Log, Metadata, Record};

mod float_utils;

/// Logger that keeps every record on the thread that emitted it, so tests running in parallel
/// only ever see their own log lines.
/// 
struct CaptureLogger;

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            captured.borrow_mut().push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Runs `f` and returns its result together with everything it logged.
/// 
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    // Only the first test to get here installs the logger, the error for the others is expected.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);

    CAPTURED.with(|captured| captured.borrow_mut().clear());
    let result = f();
    let logs = CAPTURED.with(|captured| captured.borrow_mut().drain(..).collect());
    (result, logs)
}
