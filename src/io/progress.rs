//! Progress display of placed tiles

use crate::geometry::Vector;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::io::sink::{PlacementEvent, PlacementSink};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} [{elapsed_precise}] Tiles placed: {pos}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Sink advancing a progress bar on each placement before forwarding events
pub struct ProgressSink<S> {
    inner: S,
    bar: ProgressBar,
}

impl<S> ProgressSink<S> {
    /// Show a bar of `total` tiles, or a spinner when the total is unknown
    pub fn new(inner: S, total: Option<u64>) -> Self {
        let bar = match total {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(PROGRESS_STYLE.clone());
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(SPINNER_STYLE.clone());
                bar
            }
        };
        Self { inner, bar }
    }

    /// Count placements without drawing anything
    pub fn hidden(inner: S) -> Self {
        Self {
            inner,
            bar: ProgressBar::hidden(),
        }
    }

    /// Number of placements seen so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display and return the wrapped sink
    pub fn finish(self) -> S {
        self.bar.finish_and_clear();
        self.inner
    }
}

impl<S: PlacementSink> PlacementSink for ProgressSink<S> {
    fn on_placement(&mut self, event: &PlacementEvent) {
        self.inner.on_placement(event);
        self.bar.inc(1);
    }

    fn on_candidate(&mut self, position: Vector, segment_length: usize) {
        self.inner.on_candidate(position, segment_length);
    }
}
