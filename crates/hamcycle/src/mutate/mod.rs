//! Invariant-preserving cycle mutations.
//!
//! - `flip`: local 2×2 edge swaps, each verified by a full traversal and
//!   rolled back when it would split the tour.
//! - `rotate`: random start offset plus optional reversal; always valid.

mod adjacency;
mod flip;
mod rotate;

pub use flip::{flip, FlipEvent, FlipOutcome, FlipReport};
pub use rotate::rotate;

#[cfg(test)]
mod tests;
