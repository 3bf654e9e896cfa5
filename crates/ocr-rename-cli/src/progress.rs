use indicatif::{ProgressBar, ProgressStyle};
use ocr_rename_core::ProgressReporter;
use std::path::Path;
use std::sync::Mutex;

/// CLI progress reporter using an indicatif bar.
///
/// The bar is created once the counting pass knows the total and tracks the
/// same 0-100 percentage a graphical front end would show.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        let guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.as_ref() {
            f(pb);
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_count_complete(&self, total: usize) {
        if total == 0 {
            eprintln!("  No .jpg images found");
            return;
        }

        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::with_template(
                "  {spinner:.cyan} Renaming [{bar:30.cyan/dim}] {pos:>3}% {msg}",
            )
            .unwrap()
            .progress_chars("━╸─")
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(format!("0/{} images", total));
        pb.enable_steady_tick(std::time::Duration::from_millis(80));

        let mut guard = self.bar.lock().unwrap();
        if let Some(old) = guard.replace(pb) {
            old.finish_and_clear();
        }
    }

    fn on_progress(&self, percent: u32, processed: usize, total: usize) {
        self.with_bar(|pb| {
            pb.set_position(percent as u64);
            pb.set_message(format!("{}/{} images", processed, total));
        });
    }

    fn on_file_renamed(&self, source: &Path, destination: &Path) {
        self.with_bar(|pb| {
            pb.println(format!(
                "  \x1b[32m✓\x1b[0m {} -> {}",
                display_name(source),
                display_name(destination)
            ));
        });
    }

    fn on_file_skipped(&self, source: &Path, reason: &str) {
        self.with_bar(|pb| {
            pb.println(format!(
                "  \x1b[33m-\x1b[0m {} skipped: {}",
                display_name(source),
                reason
            ));
        });
    }

    fn on_complete(&self) {
        let mut guard = self.bar.lock().unwrap();
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
        eprintln!("  \x1b[32m✓\x1b[0m All images processed");
    }
}

impl Drop for CliReporter {
    fn drop(&mut self) {
        // Batch aborted before completion
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.abandon();
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
