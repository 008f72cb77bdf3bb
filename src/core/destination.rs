//! Output destinations
//!
//! Exactly one destination is active at a time. Files are opened truncating
//! and exclusively owned; the handle is closed when the destination is
//! replaced or the logger is dropped. Caller-supplied writers are merely
//! held. All writes are synchronous and unbuffered.

use super::error::{LogError, Result};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The stream or file currently receiving log output.
pub enum Destination {
    Stdout,
    Stderr,
    /// An internally opened, exclusively owned log file.
    File { path: PathBuf, file: File },
    /// A caller-supplied sink.
    Writer(Box<dyn Write + Send>),
}

/// The complementary console stream written in split mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplitPair {
    Stdout,
    Stderr,
}

impl Destination {
    /// Open `path` for truncated writing and take ownership of the handle.
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| LogError::io(format!("opening log file '{}'", path.display()), e))?;
        Ok(Destination::File { path, file })
    }

    /// Path of the owned log file, if the destination is one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Destination::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// The paired stream to mirror to in split mode. Only the two console
    /// streams pair up; files and caller-supplied writers are not split.
    pub(crate) fn split_pair(&self) -> Option<SplitPair> {
        match self {
            Destination::Stdout => Some(SplitPair::Stderr),
            Destination::Stderr => Some(SplitPair::Stdout),
            Destination::File { .. } | Destination::Writer(_) => None,
        }
    }

}

impl Write for Destination {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Destination::Stdout => io::stdout().write(buf),
            Destination::Stderr => io::stderr().write(buf),
            Destination::File { file, .. } => file.write(buf),
            Destination::Writer(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Destination::Stdout => io::stdout().flush(),
            Destination::Stderr => io::stderr().flush(),
            Destination::File { file, .. } => file.flush(),
            Destination::Writer(writer) => writer.flush(),
        }
    }
}

impl SplitPair {
    pub(crate) fn write_all(self, bytes: &[u8]) -> io::Result<()> {
        match self {
            SplitPair::Stdout => io::stdout().write_all(bytes),
            SplitPair::Stderr => io::stderr().write_all(bytes),
        }
    }
}

impl Default for Destination {
    fn default() -> Self {
        Destination::Stdout
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("Stdout"),
            Destination::Stderr => f.write_str("Stderr"),
            Destination::File { path, .. } => f.debug_struct("File").field("path", path).finish(),
            Destination::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}
