//! 2×2 edge flips, applied speculatively and rolled back when the tour splits.
//!
//! A square `v0 v1 / v2 v3` whose tour uses both horizontal sides (or both
//! vertical sides) can trade them for the other pair. Locally that always
//! looks fine, but globally it either reroutes the tour or cuts it into two
//! loops. Only a traversal of the whole view tells the two apart, so every
//! flip is applied, measured, and reverted if the loop through `v0` came up
//! short.

use rand::Rng;

use crate::cycle::Cycle;
use crate::grid::Cell;
use crate::progress::Progress;

use super::adjacency::AdjacencyView;

/// Result of a single flip attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Edges swapped and the tour is still one loop.
    Accepted,
    /// The square carries neither parallel edge pair exclusively.
    NotFlippable,
    /// The swap split the tour and was reverted.
    Disconnected,
}

/// Progress record emitted after every attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipEvent {
    /// 1-based attempt index.
    pub attempt: usize,
    pub total: usize,
    /// Top-left cell of the 2×2 square.
    pub anchor: Cell,
    pub outcome: FlipOutcome,
    /// Accepted flips so far, including this one.
    pub successes: usize,
}

impl FlipEvent {
    #[inline]
    pub fn accepted(&self) -> bool {
        self.outcome == FlipOutcome::Accepted
    }
}

/// Mutated cycle plus aggregate counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlipReport {
    pub cycle: Cycle,
    pub attempts: usize,
    pub successes: usize,
}

/// Run `attempts` random flip attempts on `cycle`.
///
/// Each attempt draws an anchor `x ∈ [0, width)`, then `y ∈ [0, height-1)`.
/// The returned cycle starts at the input's first cell. Failed attempts are
/// counted, not errors.
pub fn flip<R: Rng + ?Sized>(
    cycle: Cycle,
    attempts: usize,
    rng: &mut R,
    progress: &mut impl Progress,
) -> FlipReport {
    if attempts == 0 {
        return FlipReport {
            cycle,
            attempts,
            successes: 0,
        };
    }
    let grid = cycle.grid();
    let (w, h) = (grid.width(), grid.height());
    let n = grid.len();
    let mut view = AdjacencyView::from_cycle(&cycle);
    let mut successes = 0;

    for attempt in 1..=attempts {
        let x = rng.gen_range(0..w);
        let y = rng.gen_range(0..h - 1);
        let anchor = Cell::new(x, y);
        let x1 = (x + 1) % w;
        let v0 = grid.index(anchor);
        let v1 = grid.index(Cell::new(x1, y));
        let v2 = grid.index(Cell::new(x, y + 1));
        let v3 = grid.index(Cell::new(x1, y + 1));

        let horizontal = view.has_edge(v0, v1) && view.has_edge(v2, v3);
        let vertical = view.has_edge(v0, v2) && view.has_edge(v1, v3);
        // (from, to) for rewire: drop v0–b, c–v3, add v0–c, b–v3.
        let swap = match (horizontal, vertical) {
            (true, false) => Some((v1, v2)),
            (false, true) => Some((v2, v1)),
            _ => None,
        };

        let outcome = match swap {
            None => FlipOutcome::NotFlippable,
            Some((b, c)) => {
                view.rewire(v0, b, c, v3);
                if view.loop_len(v0) == n {
                    successes += 1;
                    FlipOutcome::Accepted
                } else {
                    view.rewire(v0, c, b, v3);
                    FlipOutcome::Disconnected
                }
            }
        };

        progress.flipping(&FlipEvent {
            attempt,
            total: attempts,
            anchor,
            outcome,
            successes,
        });
    }

    let path = cycle.path();
    let rebuilt = view.to_path(path[0], path[1]);
    FlipReport {
        cycle: Cycle::from_trusted(grid, rebuilt),
        attempts,
        successes,
    }
}
