//! Build-mode prefix strategies
//!
//! The three modes decide how much call-site context the emitted prefix
//! carries. The compile-time default comes from the `release-mode` /
//! `debug-mode` cargo features; enabling neither selects [`BuildMode::General`].
//! The active mode is a runtime configuration value so an embedding
//! application can pin it at startup regardless of how the crate was built.

use super::call_site::CallSite;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildMode {
    /// Level name only; debug-level messages are suppressed entirely.
    Release,
    /// Level name plus `file:line`, optionally with the function name.
    Debug,
    /// Level name plus function name.
    General,
}

impl BuildMode {
    /// The mode selected by cargo features at compile time.
    #[must_use]
    pub fn from_build() -> Self {
        if cfg!(feature = "release-mode") {
            BuildMode::Release
        } else if cfg!(feature = "debug-mode") {
            BuildMode::Debug
        } else {
            BuildMode::General
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Release => "release",
            BuildMode::Debug => "debug",
            BuildMode::General => "general",
        }
    }

    /// Render the message prefix for this mode into `buf`.
    ///
    /// Writing into a `String` cannot fail, so this is infallible even
    /// though it goes through `write!`.
    pub(crate) fn render_prefix(
        self,
        buf: &mut String,
        level_name: &str,
        site: CallSite,
        include_function_names: bool,
    ) {
        let _ = match self {
            BuildMode::Release => write!(buf, "{}: ", level_name),
            BuildMode::Debug if include_function_names => write!(
                buf,
                "{}: {}:{} {}: ",
                level_name,
                site.file(),
                site.line(),
                site.function()
            ),
            BuildMode::Debug => write!(buf, "{}: {}:{}: ", level_name, site.file(), site.line()),
            BuildMode::General => write!(buf, "{}: {}: ", level_name, site.function()),
        };
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::from_build()
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::new("src/worker.rs", 17, "worker::run")
    }

    fn prefix(mode: BuildMode, include_function_names: bool) -> String {
        let mut buf = String::new();
        mode.render_prefix(&mut buf, "WARNING", site(), include_function_names);
        buf
    }

    #[test]
    fn test_release_prefix() {
        assert_eq!(prefix(BuildMode::Release, false), "WARNING: ");
        // The flag only matters in debug mode
        assert_eq!(prefix(BuildMode::Release, true), "WARNING: ");
    }

    #[test]
    fn test_debug_prefix() {
        assert_eq!(prefix(BuildMode::Debug, false), "WARNING: src/worker.rs:17: ");
        assert_eq!(
            prefix(BuildMode::Debug, true),
            "WARNING: src/worker.rs:17 worker::run: "
        );
    }

    #[test]
    fn test_general_prefix() {
        assert_eq!(prefix(BuildMode::General, false), "WARNING: worker::run: ");
    }

    #[test]
    fn test_from_build_without_mode_features() {
        #[cfg(not(any(feature = "release-mode", feature = "debug-mode")))]
        assert_eq!(BuildMode::from_build(), BuildMode::General);
        #[cfg(feature = "release-mode")]
        assert_eq!(BuildMode::from_build(), BuildMode::Release);
        #[cfg(all(feature = "debug-mode", not(feature = "release-mode")))]
        assert_eq!(BuildMode::from_build(), BuildMode::Debug);
    }
}
