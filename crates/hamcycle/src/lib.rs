//! Hamiltonian cycles on cylindrical grids.
//!
//! A cylindrical grid wraps horizontally (column `width-1` touches column `0`)
//! but not vertically. This crate builds closed tours that visit every cell
//! exactly once and perturbs them without breaking that property.
//!
//! Layout
//! - `grid`: cells, dimensions, and the wrap-aware adjacency rule.
//! - `cycle`: the ordered tour, its validation, and the shared error type.
//! - `build`: serpentine sweep and randomized Warnsdorff backtracking.
//! - `mutate`: 2×2 edge flips (verified, rolled back on split) and rotation.
//! - `progress`: reporting hooks implemented by callers.
//! - `api`: the `generate_cycle` entrypoint tying the pieces together.
//!
//! File and terminal I/O live in the `cli` crate.

pub mod api;
pub mod build;
pub mod cycle;
pub mod grid;
pub mod mutate;
pub mod progress;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{generate_cycle, generate_with_report, BuilderKind, GenerateCfg};
pub use cycle::{Cycle, CycleError};
pub use grid::{are_adjacent, neighbors, Cell, Grid};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{generate_cycle, generate_with_report, BuilderKind, GenerateCfg};
    pub use crate::build::{search, serpentine, SearchCfg};
    pub use crate::cycle::{Cycle, CycleError, Edge};
    pub use crate::grid::{are_adjacent, neighbors, Cell, Grid};
    pub use crate::mutate::{flip, rotate, FlipEvent, FlipOutcome, FlipReport};
    pub use crate::progress::{NoProgress, Progress};
}
