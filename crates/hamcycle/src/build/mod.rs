//! Cycle builders: deterministic serpentine sweep and randomized backtracking.
//!
//! Both return a `Cycle` that already satisfies the Hamiltonian invariant.
//! `serpentine` needs no randomness; `search` draws from the caller's RNG and is
//! reproducible for a fixed seed.

mod search;
mod serpentine;
mod types;

pub use search::search;
pub(crate) use search::search_path;
pub use serpentine::serpentine;
pub use types::SearchCfg;
