//! Terminal progress for generation, built on `indicatif`.
//!
//! One bar tracks the builder (`current/total`; the search bar moves backwards
//! while it backtracks) and a second bar tracks flip attempts with the running
//! success count as its message. With `verbose`, every attempt also gets a
//! log line, printed through `suspend` so it does not tear the bar.

use hamcycle::prelude::{FlipEvent, Progress};
use indicatif::{ProgressBar, ProgressStyle};

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix:>10} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░  ")
}

fn new_bar(total: usize, prefix: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    bar.set_style(bar_style());
    bar.set_prefix(prefix);
    bar
}

pub struct BarProgress {
    verbose: bool,
    build: Option<ProgressBar>,
    flips: Option<ProgressBar>,
}

impl BarProgress {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            build: None,
            flips: None,
        }
    }

    /// Leave both bars at their final position.
    pub fn finish(self) {
        for bar in [self.build, self.flips].into_iter().flatten() {
            bar.finish();
        }
    }
}

impl Progress for BarProgress {
    fn building(&mut self, current: usize, total: usize) {
        let bar = self
            .build
            .get_or_insert_with(|| new_bar(total, "building"));
        bar.set_position(current as u64);
    }

    fn flipping(&mut self, event: &FlipEvent) {
        if let Some(build) = self.build.take() {
            build.finish();
        }
        let bar = self
            .flips
            .get_or_insert_with(|| new_bar(event.total, "flipping"));
        bar.set_position(event.attempt as u64);
        bar.set_message(format!("({} successes)", event.successes));
        if self.verbose {
            bar.suspend(|| {
                tracing::info!(
                    attempt = event.attempt,
                    total = event.total,
                    x = event.anchor.x,
                    y = event.anchor.y,
                    outcome = ?event.outcome,
                    successes = event.successes,
                    "flip attempt"
                )
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hamcycle::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn bars_follow_builder_and_flips() {
        let mut sink = BarProgress::new(false);
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::new(4, 4).unwrap();
        let tour = search(grid, SearchCfg::default(), &mut rng, &mut sink).unwrap();
        let build_len = sink.build.as_ref().map(|b| b.length());
        assert_eq!(build_len, Some(Some(16)));
        flip(tour, 5, &mut rng, &mut sink);
        assert!(sink.build.is_none());
        let flips = sink.flips.as_ref().unwrap();
        assert_eq!(flips.position(), 5);
        assert_eq!(flips.length(), Some(5));
        sink.finish();
    }
}
