//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many messages passed the
//! gate, how many were suppressed, and how often the never-raising emit
//! path had to swallow a failure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use unilog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_emitted();
/// metrics.record_suppressed();
///
/// assert_eq!(metrics.emitted_count(), 1);
/// assert_eq!(metrics.suppressed_count(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Messages that passed the gate and were written
    emitted: AtomicU64,

    /// Messages rejected by the threshold or release-mode gate
    suppressed: AtomicU64,

    /// Destination write failures swallowed by the emit path
    write_errors: AtomicU64,

    /// Formatting failures downgraded to the fallback report
    format_errors: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            write_errors: AtomicU64::new(0),
            format_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn emitted_count(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn suppressed_count(&self) -> u64 {
        self.suppressed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_error_count(&self) -> u64 {
        self.write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn format_error_count(&self) -> u64 {
        self.format_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_suppressed(&self) -> u64 {
        self.suppressed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_error(&self) -> u64 {
        self.write_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_format_error(&self) -> u64 {
        self.format_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of gate-checked messages that were suppressed, as a
    /// percentage (0.0 - 100.0). Returns 0.0 before any message is seen.
    pub fn suppression_rate(&self) -> f64 {
        let suppressed = self.suppressed_count() as f64;
        let total = self.emitted_count() as f64 + suppressed;
        if total == 0.0 {
            0.0
        } else {
            (suppressed / total) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.emitted.store(0, Ordering::Relaxed);
        self.suppressed.store(0, Ordering::Relaxed);
        self.write_errors.store(0, Ordering::Relaxed);
        self.format_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            emitted: AtomicU64::new(self.emitted_count()),
            suppressed: AtomicU64::new(self.suppressed_count()),
            write_errors: AtomicU64::new(self.write_error_count()),
            format_errors: AtomicU64::new(self.format_error_count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.suppressed_count(), 0);
        assert_eq!(metrics.write_error_count(), 0);
        assert_eq!(metrics.format_error_count(), 0);
    }

    #[test]
    fn test_metrics_record() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_emitted(), 0); // Returns previous value
        assert_eq!(metrics.emitted_count(), 1);
        metrics.record_suppressed();
        metrics.record_suppressed();
        assert_eq!(metrics.suppressed_count(), 2);
    }

    #[test]
    fn test_suppression_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.suppression_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_emitted();
        }
        for _ in 0..10 {
            metrics.record_suppressed();
        }

        let rate = metrics.suppression_rate();
        assert!((9.9..=10.1).contains(&rate), "Suppression rate was {}", rate);
    }

    #[test]
    fn test_metrics_reset() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_write_error();
        metrics.record_format_error();

        metrics.reset();

        assert_eq!(metrics.emitted_count(), 0);
        assert_eq!(metrics.write_error_count(), 0);
        assert_eq!(metrics.format_error_count(), 0);
    }

    #[test]
    fn test_metrics_clone() {
        let metrics = LoggerMetrics::new();
        metrics.record_emitted();
        metrics.record_emitted();
        metrics.record_suppressed();

        let snapshot = metrics.clone();
        assert_eq!(snapshot.emitted_count(), 2);
        assert_eq!(snapshot.suppressed_count(), 1);

        // Original and clone are independent
        metrics.record_emitted();
        assert_eq!(metrics.emitted_count(), 3);
        assert_eq!(snapshot.emitted_count(), 2);
    }
}
