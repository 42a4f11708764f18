//! Diagnostic logging to stderr
//!
//! Level comes from `RUST_LOG`, defaulting to warnings only.

use flexi_logger::{Logger, LoggerHandle};

const DEFAULT_SPEC: &str = "warn";

/// Start the logger; the handle must stay alive for the whole run
pub fn init() -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str(DEFAULT_SPEC)
        .and_then(|logger| logger.log_to_stderr().start());

    match started {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled ({})", e);
            None
        }
    }
}
