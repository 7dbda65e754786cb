// src/logging.rs
//
// Console sink for the `log` facade.
// Info/debug lines go to stdout, warnings and errors to stderr.
// Every line carries the time elapsed since the sink was installed.

use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

use ::log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static START: OnceLock<Instant> = OnceLock::new();
static LOGGER: ConsoleLogger = ConsoleLogger { lock: Mutex::new(()) };

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

struct ConsoleLogger {
    lock: Mutex<()>,
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= ::log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {}\n", record.level(), record.args());

        // Interleaving across the two streams is fine; lines themselves must not tear.
        let _guard = self.lock.lock();
        let _ = match record.level() {
            Level::Error | Level::Warn => std::io::stderr().write_all(line.as_bytes()),
            _ => std::io::stdout().write_all(line.as_bytes()),
        };
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
    }
}

/// Install the console sink. Calling it twice is harmless; the second call
/// only adjusts the level.
pub fn init(level: LevelFilter) {
    start();
    ::log::set_max_level(level);
    // Err only means a logger is already installed (tests, repeated runs)
    let _: Result<(), SetLoggerError> = ::log::set_logger(&LOGGER);
}
