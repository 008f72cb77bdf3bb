//! Logging macros
//!
//! The macros capture the call site automatically and forward to
//! [`Logger::emit`](crate::Logger::emit). Like `write!`, they append no
//! newline; the template carries its own terminator.
//!
//! # Examples
//!
//! ```
//! use unilog::{Logger, Severity};
//!
//! let logger = Logger::new();
//!
//! unilog::info!(logger, "server started\n");
//!
//! let port = 8080;
//! unilog::notice!(logger, "listening on port {}\n", port);
//!
//! // Verbose debug sub-level (Debug + 2)
//! unilog::debug_verbose!(logger, 2, "handshake state: {:?}\n", ());
//! ```
//!
//! Under the `release-mode` feature, `debug!`, `debug_verbose!`, and
//! `report_debug!` expand to no-ops; their arguments are not evaluated.

/// Emit a message at an explicit severity, capturing the call site.
///
/// # Examples
///
/// ```
/// # use unilog::{Logger, Severity};
/// # let logger = Logger::new();
/// unilog::emit!(logger, Severity::Info, "simple message\n");
/// unilog::emit!(logger, Severity::Error, "error code: {}\n", 500);
/// ```
#[macro_export]
macro_rules! emit {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.emit($level, $crate::callsite!(), ::core::format_args!($($arg)+))
    };
}

/// Log an emergency-level message (system is unusable).
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}

/// Log an alert-level message (action must be taken immediately).
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use unilog::Logger;
/// # let logger = Logger::new();
/// unilog::error!(logger, "failed to connect to database\n");
/// unilog::error!(logger, "code: {}, message: {}\n", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use unilog::Logger;
/// # let logger = Logger::new();
/// unilog::info!(logger, "application started\n");
/// unilog::info!(logger, "processing {} items\n", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::emit!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message. Compiled out entirely under the
/// `release-mode` feature.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {{
        #[cfg(not(feature = "release-mode"))]
        $crate::emit!($logger, $crate::Severity::Debug, $($arg)+);
        #[cfg(feature = "release-mode")]
        {
            let _ = &$logger;
        }
    }};
}

/// Log at a verbose debug sub-level (`Debug + n`). Compiled out entirely
/// under the `release-mode` feature.
///
/// # Examples
///
/// ```
/// # use unilog::{Logger, Severity};
/// # let logger = Logger::new();
/// # logger.set_threshold(Severity::verbose(5));
/// unilog::debug_verbose!(logger, 2, "retry budget: {}\n", 3);
/// ```
#[macro_export]
macro_rules! debug_verbose {
    ($logger:expr, $n:expr, $($arg:tt)+) => {{
        #[cfg(not(feature = "release-mode"))]
        $crate::emit!($logger, $crate::Severity::verbose($n), $($arg)+);
        #[cfg(feature = "release-mode")]
        {
            let _ = (&$logger, $n);
        }
    }};
}

/// Report a caught error at an explicit severity, capturing the call site.
///
/// # Examples
///
/// ```
/// # use unilog::{Logger, Severity};
/// # let logger = Logger::new();
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
/// unilog::report!(logger, Severity::Error, err);
/// ```
#[macro_export]
macro_rules! report {
    ($logger:expr, $level:expr, $err:expr) => {
        $logger.report($level, $crate::callsite!(), &$err)
    };
}

/// Report a caught error at debug level. Compiled out entirely under the
/// `release-mode` feature.
#[macro_export]
macro_rules! report_debug {
    ($logger:expr, $err:expr) => {{
        #[cfg(not(feature = "release-mode"))]
        $crate::report!($logger, $crate::Severity::Debug, $err);
        #[cfg(feature = "release-mode")]
        {
            let _ = (&$logger, &$err);
        }
    }};
}
