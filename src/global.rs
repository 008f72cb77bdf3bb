//! The process-wide logger handle
//!
//! One logger per process, with an explicit lifecycle: [`init`] installs a
//! configured logger exactly once, [`global`] hands out the `'static`
//! reference, and [`shutdown`] releases the destination at the end of the
//! process. When `init` is never called, the first `global()` installs a
//! default-configured logger instead, so library code can log without
//! ceremony.
//!
//! # Example
//!
//! ```
//! use unilog::{global, Logger, Severity};
//!
//! let _ = global::init(Logger::builder().threshold(Severity::Info).build());
//! unilog::info!(global::global(), "service starting\n");
//! ```

use crate::core::error::{LogError, Result};
use crate::core::logger::Logger;
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Install `logger` as the process-wide instance.
///
/// Fails with [`LogError::AlreadyInitialized`] if a logger is already
/// installed, including the default one installed by a preceding
/// [`global`] call.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| LogError::AlreadyInitialized)
}

/// The process-wide logger, installing a default-configured one on first
/// use if [`init`] was never called. The instance lives for the remainder
/// of the process.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// The process-wide logger, if one has been installed.
pub fn try_global() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Flush and release the global logger's destination, reverting it to
/// stdout. The logger itself stays usable; this only makes the teardown of
/// an owned log file deterministic instead of leaving it to process exit.
pub fn shutdown() {
    if let Some(logger) = GLOBAL.get() {
        let _ = logger.flush();
        logger.reset();
    }
}
