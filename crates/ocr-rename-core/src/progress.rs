use std::path::Path;

/// Trait for reporting batch progress.
///
/// The CLI implements it with indicatif; a graphical front end would forward
/// to its progress widget. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Number of images found by the counting pass.
    fn on_count_complete(&self, _total: usize) {}
    /// Called once per processed image. `percent` is truncated to an integer.
    fn on_progress(&self, _percent: u32, _processed: usize, _total: usize) {}
    fn on_file_renamed(&self, _source: &Path, _destination: &Path) {}
    fn on_file_skipped(&self, _source: &Path, _reason: &str) {}
    /// Fired once, when the processed count reaches the counted total.
    fn on_complete(&self) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}

/// Percentage of `processed` out of `total`, truncated toward zero.
pub fn percent(processed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (processed as f64 / total as f64 * 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_truncates() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(3, 3), 100);
    }

    #[test]
    fn test_percent_zero_total() {
        assert_eq!(percent(0, 0), 0);
    }
}
