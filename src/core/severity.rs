//! Severity level definitions
//!
//! Levels follow the syslog ordering: a *lower* rank is *more* severe.
//! Ranks above `Debug` (7) are permitted and model verbose debug
//! sub-levels; they compare as less severe than `Debug` but are gated by
//! the same threshold comparison.

use super::error::LogError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub enum Severity {
    /// System is unusable
    Emergency,
    /// Action must be taken immediately
    Alert,
    /// Critical conditions
    Critical,
    /// Error conditions
    Error,
    /// Warning conditions
    Warning,
    /// Normal but significant condition
    Notice,
    /// Informational
    Info,
    /// Debug-level messages
    #[default]
    Debug,
    /// Debug sub-level: `Debug + n` with `n >= 1`
    Verbose(u8),
}

impl Severity {
    /// Numeric rank of this level; lower means more severe.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Severity::Emergency => 0,
            Severity::Alert => 1,
            Severity::Critical => 2,
            Severity::Error => 3,
            Severity::Warning => 4,
            Severity::Notice => 5,
            Severity::Info => 6,
            Severity::Debug => 7,
            Severity::Verbose(n) => 7u8.saturating_add(n),
        }
    }

    /// Map a raw rank back to a level. Total: ranks above `Debug` become
    /// `Verbose` sub-levels.
    #[must_use]
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 => Severity::Emergency,
            1 => Severity::Alert,
            2 => Severity::Critical,
            3 => Severity::Error,
            4 => Severity::Warning,
            5 => Severity::Notice,
            6 => Severity::Info,
            7 => Severity::Debug,
            n => Severity::Verbose(n - 7),
        }
    }

    /// Debug sub-level `Debug + extra`. `extra == 0` is plain `Debug`.
    #[must_use]
    pub fn verbose(extra: u8) -> Self {
        if extra == 0 {
            Severity::Debug
        } else {
            Severity::Verbose(extra)
        }
    }

    /// Human-readable level name. Anything at or past `Debug` renders as
    /// `"DEBUG"`, matching the wire format of the emitted prefix.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug | Severity::Verbose(_) => "DEBUG",
        }
    }
}

// Comparisons go through `rank()` so that `Verbose(0)`, should one be built
// by hand, stays consistent with `Debug` under both Eq and Ord.
impl PartialEq for Severity {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for Severity {}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl Hash for Severity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERGENCY" | "EMERG" => Ok(Severity::Emergency),
            "ALERT" => Ok(Severity::Alert),
            "CRITICAL" | "CRIT" => Ok(Severity::Critical),
            "ERROR" | "ERR" => Ok(Severity::Error),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}
