//! Stderr backend for the `log` facade.

use std::env;
use std::io::{self, Write};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding the level: `off`, `error`, `warn`, `info`,
/// `debug` or `trace`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

/// Writes this crate's records to stderr, one line each, so stdout stays
/// clean for JSON responses.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level() && metadata.target().starts_with("broadside")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = io::stderr().lock();
        let _ = writeln!(
            err,
            "{:<5} {}: {}",
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger at the level named by [`LOG_ENV`], `info` when
/// unset or unparsable.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_logging_at(level);
}

/// Install the stderr logger at `level`. Calling again only changes the level.
pub fn init_logging_at(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
