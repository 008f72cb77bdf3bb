//! Main logger implementation
//!
//! [`Logger`] owns the active destination and the gating/formatting
//! configuration. The emit path is a hard error boundary: nothing that
//! happens while formatting or writing a message can reach the caller.
//!
//! The gating configuration sits behind a `parking_lot::RwLock` (read on
//! the hot path) and the destination behind a `Mutex` (held only while
//! bytes are written), so a `Logger` can be shared freely (`Arc` or a
//! `'static` global) and setters are safe to call while emits are in
//! flight. A message that passed the gate under the previous configuration
//! may still be written under it; settings take effect on the next emitted
//! message.

use super::{
    build_mode::BuildMode,
    call_site::CallSite,
    destination::Destination,
    error::{LogError, Result},
    metrics::LoggerMetrics,
    severity::Severity,
};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;

/// Report emitted when formatting the caller's message fails.
const FALLBACK_REPORT: &str = "Catch Exception:\nerror while formatting log message\n";

/// Last-resort line when even the fallback report cannot be rendered.
const FALLBACK_LITERAL: &str = "ERROR: error while formatting log message\n";

#[derive(Clone, Copy)]
struct LoggerConfig {
    threshold: Severity,
    split: bool,
    include_function_names: bool,
    build_mode: BuildMode,
}

pub struct Logger {
    config: RwLock<LoggerConfig>,
    destination: Mutex<Destination>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with the default configuration: stdout destination,
    /// `Debug` threshold (most permissive), split mode off, build mode from
    /// the compile-time feature selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: RwLock::new(LoggerConfig {
                threshold: Severity::Debug,
                split: false,
                include_function_names: false,
                build_mode: BuildMode::from_build(),
            }),
            destination: Mutex::new(Destination::Stdout),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use unilog::{BuildMode, Logger, Severity};
    ///
    /// let logger = Logger::builder()
    ///     .threshold(Severity::Info)
    ///     .build_mode(BuildMode::General)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Gate, format, and dispatch one message.
    ///
    /// Suppressed messages cost one configuration read and one atomic
    /// increment; no formatting or I/O happens for them. This operation
    /// never panics and never surfaces an error: formatting failures
    /// degrade to a fallback report and write failures are swallowed
    /// (both are counted in [`metrics`](Self::metrics)).
    pub fn emit(&self, level: Severity, site: CallSite, args: fmt::Arguments<'_>) {
        let config = *self.config.read();

        if level.rank() > config.threshold.rank() {
            self.metrics.record_suppressed();
            return;
        }
        // Release builds carry no debug-level output at all.
        if config.build_mode == BuildMode::Release && level.rank() >= Severity::Debug.rank() {
            self.metrics.record_suppressed();
            return;
        }

        let level_name = level.as_str();
        let text = match render(
            config.build_mode,
            config.include_function_names,
            level_name,
            site,
            args,
        ) {
            Ok(text) => text,
            Err(_) => {
                self.metrics.record_format_error();
                render_fallback(level_name, site)
            }
        };

        self.write_text(&text, config.split);
        self.metrics.record_emitted();
    }

    /// Emit a caught-error report: `Catch Exception:` followed by the
    /// error's description on its own line. Same gates and degradation as
    /// [`emit`](Self::emit).
    pub fn report<E: fmt::Display + ?Sized>(&self, level: Severity, site: CallSite, error: &E) {
        self.emit(level, site, format_args!("Catch Exception:\n{}\n", error));
    }

    fn write_text(&self, text: &str, split: bool) {
        let mut destination = self.destination.lock();
        if destination.write_all(text.as_bytes()).is_err() {
            self.metrics.record_write_error();
        }
        if split {
            if let Some(pair) = destination.split_pair() {
                if pair.write_all(text.as_bytes()).is_err() {
                    self.metrics.record_write_error();
                }
            }
        }
    }

    /// Switch the destination to standard output, closing any owned file.
    pub fn set_stdout(&self) {
        *self.destination.lock() = Destination::Stdout;
    }

    /// Switch the destination to standard error, closing any owned file.
    pub fn set_stderr(&self) {
        *self.destination.lock() = Destination::Stderr;
    }

    /// Switch to a caller-supplied sink, closing any owned file.
    pub fn set_writer(&self, writer: Box<dyn Write + Send>) {
        *self.destination.lock() = Destination::Writer(writer);
    }

    /// Open `path` for truncated writing and make it the owned destination.
    ///
    /// Acquire-then-release: the file is opened before the previous
    /// destination is touched, so on failure the error is returned and the
    /// current destination stays active.
    pub fn set_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let destination = Destination::file(path)?;
        *self.destination.lock() = destination;
        Ok(())
    }

    /// Replace the destination wholesale.
    pub fn set_destination(&self, destination: Destination) {
        *self.destination.lock() = destination;
    }

    pub fn set_threshold(&self, level: Severity) {
        self.config.write().threshold = level;
    }

    /// Set the threshold from a raw rank (ranks above `Debug` select
    /// verbose sub-levels).
    pub fn set_threshold_rank(&self, rank: u8) {
        self.set_threshold(Severity::from_rank(rank));
    }

    pub fn set_split(&self, split: bool) {
        self.config.write().split = split;
    }

    pub fn set_include_function_names(&self, include: bool) {
        self.config.write().include_function_names = include;
    }

    pub fn set_build_mode(&self, mode: BuildMode) {
        self.config.write().build_mode = mode;
    }

    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.config.read().threshold
    }

    #[must_use]
    pub fn split(&self) -> bool {
        self.config.read().split
    }

    #[must_use]
    pub fn include_function_names(&self) -> bool {
        self.config.read().include_function_names
    }

    #[must_use]
    pub fn build_mode(&self) -> BuildMode {
        self.config.read().build_mode
    }

    /// Path of the owned log file; `None` for stream destinations.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.destination.lock().path().map(PathBuf::from)
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.destination.lock().path().is_some()
    }

    /// Run `f` with exclusive access to the active destination, e.g. to
    /// write directly to the same sink the logger uses.
    pub fn with_destination<R>(&self, f: impl FnOnce(&mut Destination) -> R) -> R {
        f(&mut self.destination.lock())
    }

    /// Logger metrics for observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Revert to the stdout destination, closing any owned file. This is
    /// the observable part of process-exit teardown, exposed so embedding
    /// applications can release the log file deterministically.
    pub fn reset(&self) {
        let mut destination = self.destination.lock();
        let _ = destination.flush();
        *destination = Destination::Stdout;
    }

    pub fn flush(&self) -> Result<()> {
        self.destination
            .lock()
            .flush()
            .map_err(|e| LogError::io("flushing log destination", e))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.destination.get_mut().flush();
    }
}

/// Render prefix + caller message. A `Display` impl that returns an error
/// or panics surfaces here as `Err`, never past the emit boundary.
fn render(
    mode: BuildMode,
    include_function_names: bool,
    level_name: &str,
    site: CallSite,
    args: fmt::Arguments<'_>,
) -> Result<String> {
    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut buf = String::new();
        mode.render_prefix(&mut buf, level_name, site, include_function_names);
        fmt::write(&mut buf, args).map(|()| buf)
    }))
    .map_err(|_| LogError::format("panic while formatting log message"))?
    .map_err(|_| LogError::format("argument formatting returned an error"))
}

/// The degraded message: debug-style prefix plus a fixed report, with a
/// plain literal as the final stage if even that cannot be rendered.
fn render_fallback(level_name: &str, site: CallSite) -> String {
    panic::catch_unwind(AssertUnwindSafe(|| {
        let mut buf = String::new();
        BuildMode::Debug.render_prefix(&mut buf, level_name, site, true);
        buf.push_str(FALLBACK_REPORT);
        buf
    }))
    .unwrap_or_else(|_| FALLBACK_LITERAL.to_string())
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use unilog::{BuildMode, Logger, Severity};
///
/// let logger = Logger::builder()
///     .threshold(Severity::Notice)
///     .split(true)
///     .include_function_names(true)
///     .build_mode(BuildMode::Debug)
///     .build();
/// ```
pub struct LoggerBuilder {
    threshold: Severity,
    destination: Option<Destination>,
    split: bool,
    include_function_names: bool,
    build_mode: BuildMode,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Severity::Debug,
            destination: None,
            split: false,
            include_function_names: false,
            build_mode: BuildMode::from_build(),
        }
    }

    /// Set the severity threshold
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, level: Severity) -> Self {
        self.threshold = level;
        self
    }

    /// Set the destination (`Destination::file` for an owned log file)
    #[must_use = "builder methods return a new value"]
    pub fn destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Enable or disable split mode
    #[must_use = "builder methods return a new value"]
    pub fn split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Include function names in debug-mode prefixes
    #[must_use = "builder methods return a new value"]
    pub fn include_function_names(mut self, include: bool) -> Self {
        self.include_function_names = include;
        self
    }

    /// Override the build mode selected by the compile-time features
    #[must_use = "builder methods return a new value"]
    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        Logger {
            config: RwLock::new(LoggerConfig {
                threshold: self.threshold,
                split: self.split,
                include_function_names: self.include_function_names,
                build_mode: self.build_mode,
            }),
            destination: Mutex::new(self.destination.unwrap_or_default()),
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
