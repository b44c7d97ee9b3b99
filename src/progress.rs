//! Progress reporting utilities

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for result writing
#[derive(Debug)]
pub struct ProgressReporter {
    rows_pb: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create progress reporter for writing a known number of rows
    pub fn new_for_write(total_rows: u64) -> Self {
        Self {
            rows_pb: Some(create_progress_bar(total_rows, "Writing rows")),
        }
    }

    /// Create minimal progress reporter (no progress bars)
    pub fn new_minimal() -> Self {
        Self { rows_pb: None }
    }

    /// Update row progress
    pub fn update_rows(&mut self, written: u64) {
        if let Some(pb) = &self.rows_pb {
            pb.set_position(written);
        }
    }

    /// Finish row processing
    pub fn finish_rows(&mut self, message: &str) {
        if let Some(pb) = self.rows_pb.take() {
            pb.finish_with_message(message.to_string());
        }
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        // Ensure the progress bar is cleaned up silently
        if let Some(pb) = self.rows_pb.take() {
            pb.finish_and_clear();
        }
    }
}

/// Create a progress bar with known total
fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>7}/{len:7} ({per_sec}) {eta} {msg}")
            .expect("Invalid progress template")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
