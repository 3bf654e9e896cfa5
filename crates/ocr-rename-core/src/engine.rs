use crate::error::Error;
use crate::extract::extract_time_token;
use crate::ocr::Recognizer;
use crate::platform;
use crate::progress::{self, ProgressReporter};
use crate::scanner::{self, ImageScan};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Images are picked up, and written back, with this extension.
pub const IMAGE_EXTENSION: &str = "jpg";
/// Folder created inside the input folder to hold the renamed copies.
pub const OUTPUT_DIR_NAME: &str = "Fotos Renomeadas";

pub struct RenameEngine<R> {
    recognizer: R,
    ignore_patterns: Vec<Pattern>,
}

#[derive(Debug)]
pub struct BatchResult {
    pub total_images: usize,
    pub processed: usize,
    pub renamed: usize,
    pub skipped: usize,
    /// `None` when nothing was ever copied.
    pub output_dir: Option<PathBuf>,
    pub duration: Duration,
}

impl<R: Recognizer> RenameEngine<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            ignore_patterns: Vec::new(),
        }
    }

    pub fn with_ignore_patterns(mut self, globs: &[String]) -> Self {
        self.ignore_patterns = scanner::compile_ignore_patterns(globs);
        self
    }

    /// Run the batch over `input_folder`:
    /// 1. Count every image under the folder
    /// 2. Walk again in the same order, OCR each image and copy it to
    ///    `<input_folder>/Fotos Renomeadas/<HH.MM.SS>.jpg`
    ///
    /// The first OCR, read or copy failure aborts the remaining files.
    pub fn process(
        &self,
        input_folder: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<BatchResult, Error> {
        let start = Instant::now();
        let output_dir = input_folder.join(OUTPUT_DIR_NAME);
        let scan = ImageScan::new(input_folder, IMAGE_EXTENSION)
            .excluding(&output_dir)
            .ignoring(self.ignore_patterns.clone());

        // Pass 1: Count
        info!("Counting images in {}...", input_folder.display());
        let total = scan.count()?;
        reporter.on_count_complete(total);
        debug!("{} images found", total);

        // Pass 2: Recognize and copy
        info!("Renaming images...");
        let mut processed = 0usize;
        let mut renamed = 0usize;
        let mut skipped = 0usize;
        let mut output_created = false;

        for entry in scan.iter() {
            let source = entry?;

            match self.rename_one(&source, &output_dir, &mut output_created)? {
                Some(destination) => {
                    renamed += 1;
                    reporter.on_file_renamed(&source, &destination);
                }
                None => {
                    skipped += 1;
                    reporter.on_file_skipped(&source, "no text recognized");
                }
            }

            processed += 1;
            reporter.on_progress(progress::percent(processed, total), processed, total);

            if processed == total {
                reporter.on_complete();
            }
        }

        let duration = start.elapsed();
        debug!(
            "Batch completed in {:.2}s: {} processed, {} renamed, {} skipped",
            duration.as_secs_f64(),
            processed,
            renamed,
            skipped,
        );

        Ok(BatchResult {
            total_images: total,
            processed,
            renamed,
            skipped,
            output_dir: output_created.then_some(output_dir),
            duration,
        })
    }

    /// OCR a single image and copy it under its time token.
    /// Returns the destination, or `None` when the service parsed nothing.
    fn rename_one(
        &self,
        source: &Path,
        output_dir: &Path,
        output_created: &mut bool,
    ) -> Result<Option<PathBuf>, Error> {
        let response = self.recognizer.recognize(source)?;

        if response.is_errored_on_processing {
            warn!(
                "OCR reported an error for {}: {}",
                source.display(),
                response.error_summary().unwrap_or_default()
            );
        }

        let text = match response.first_text() {
            Some(text) => text,
            None => {
                warn!("No parsed results for {}, skipping", source.display());
                return Ok(None);
            }
        };

        let token = extract_time_token(text);
        if token.is_empty() {
            // Still copied, as `.jpg`; later empty tokens overwrite it.
            warn!(
                "No time found in OCR text for {}, writing .{}",
                source.display(),
                IMAGE_EXTENSION
            );
        }

        if !*output_created {
            platform::ensure_dir(output_dir)?;
            *output_created = true;
        }

        let destination = output_dir.join(format!("{}.{}", token, IMAGE_EXTENSION));
        fs::copy(source, &destination)?;
        debug!("Copied {} -> {}", source.display(), destination.display());

        Ok(Some(destination))
    }
}
