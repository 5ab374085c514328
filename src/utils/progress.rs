// file: src/utils/progress.rs
// description: spinner shown while the knowledge base is being loaded
// reference: uses indicatif for progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct LoadSpinner {
    bar: ProgressBar,
}

impl LoadSpinner {
    pub fn new(message: impl Into<String>, colored: bool) -> Self {
        let bar = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} [{elapsed_precise}] {msg}"
        } else {
            "{spinner} [{elapsed_precise}] {msg}"
        };

        bar.set_style(
            ProgressStyle::default_spinner()
                .template(template)
                .expect("Failed to create spinner template"),
        );
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }

    /// A spinner that draws nothing, for quiet or non-interactive runs.
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self, documents: usize) {
        self.bar
            .finish_with_message(format!("Loaded {} documents", documents));
    }

    pub fn abandon(&self, message: impl Into<String>) {
        self.bar.abandon_with_message(message.into());
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Drop for LoadSpinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
