//! # unilog
//!
//! A process-wide, severity-gated logging facility with a single
//! configurable destination.
//!
//! ## Features
//!
//! - **Syslog severities**: `EMERGENCY` through `DEBUG`, plus verbose
//!   debug sub-levels (`Debug + n`)
//! - **One destination**: stdout, stderr, an owned log file, or any
//!   caller-supplied writer, with an optional stdout/stderr split mode
//! - **Build-mode prefixes**: release, debug, and general modes control
//!   how much call-site context each line carries
//! - **Never raises**: formatting and write failures degrade inside the
//!   emit path instead of reaching the caller
//!
//! ## Quick start
//!
//! ```
//! use unilog::{Logger, Severity};
//!
//! let logger = Logger::builder().threshold(Severity::Info).build();
//!
//! unilog::info!(logger, "{}!\n", "Hello World");
//! unilog::debug!(logger, "suppressed by the threshold\n");
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        BuildMode, CallSite, Destination, LogError, Logger, LoggerBuilder, LoggerMetrics, Result,
        Severity,
    };
    pub use crate::global::{global, init, shutdown, try_global};
}

pub use crate::core::{
    BuildMode, CallSite, Destination, LogError, Logger, LoggerBuilder, LoggerMetrics, Result,
    Severity,
};
