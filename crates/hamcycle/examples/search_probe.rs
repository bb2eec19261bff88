//! Backtracking cost probe for the randomized builder.
//!
//! Purpose
//! - Give a code-backed answer to "how much does the search backtrack on an
//!   n×n cylinder, with and without pruning?" instead of estimates.
//! - Print one line per (size, pruning) pair: pushes + pops, backtracks,
//!   wall time.
//!
//! Run: `cargo run --release -p hamcycle --example search_probe`

use std::time::Instant;

use hamcycle::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Counts steps and how often the path got shorter.
#[derive(Default)]
struct StepCounter {
    steps: u64,
    backtracks: u64,
    last: usize,
}

impl Progress for StepCounter {
    fn building(&mut self, current: usize, _total: usize) {
        self.steps += 1;
        if current < self.last {
            self.backtracks += 1;
        }
        self.last = current;
    }
}

fn main() {
    for side in [4usize, 6, 8, 12, 16] {
        let grid = Grid::new(side, side).expect("even side");
        for (label, prune) in [("pruned", true), ("plain", false)] {
            let cfg = SearchCfg {
                max_steps: Some(2_000_000),
                prune_closure: prune,
                prune_strands: prune,
            };
            let mut rng = StdRng::seed_from_u64(2024);
            let mut counter = StepCounter::default();
            let start = Instant::now();
            let outcome = search(grid, cfg, &mut rng, &mut counter);
            let ms = start.elapsed().as_secs_f64() * 1e3;
            let status = match outcome {
                Ok(_) => "ok".to_string(),
                Err(err) => err.to_string(),
            };
            println!(
                "side={side} mode={label} steps={} backtracks={} time_ms={ms:.3} status={status}",
                counter.steps, counter.backtracks
            );
        }
    }
}
