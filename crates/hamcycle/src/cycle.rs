//! Ordered Hamiltonian cycle and the error type shared by builders and mutators.

use std::collections::HashSet;
use std::fmt;

use crate::grid::{Cell, Grid};

/// Error type shared by builders, mutators, and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleError {
    /// Width or height is odd or zero. Rejected before any work begins.
    InvalidDimensions { width: usize, height: usize },
    /// Backtracking explored its whole space without closing a tour.
    SearchExhausted { steps: u64 },
    /// Backtracking hit the configured step budget.
    BudgetExceeded { steps: u64 },
    /// A path failed validation.
    InvalidCycle { reason: String },
}

impl CycleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidCycle {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => write!(
                f,
                "invalid dimensions {width}x{height}: width and height must be even and positive"
            ),
            Self::SearchExhausted { steps } => {
                write!(f, "search exhausted after {steps} steps without closing a cycle")
            }
            Self::BudgetExceeded { steps } => {
                write!(f, "search step budget exceeded ({steps} steps)")
            }
            Self::InvalidCycle { reason } => write!(f, "invalid cycle: {reason}"),
        }
    }
}

impl std::error::Error for CycleError {}

/// Undirected cycle edge between two adjacent cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: Cell,
    pub b: Cell,
}

impl Edge {
    /// Same edge with endpoints in ascending order, for set comparisons.
    pub fn normalized(self) -> Self {
        if self.a <= self.b {
            self
        } else {
            Self {
                a: self.b,
                b: self.a,
            }
        }
    }

    /// True if the edge crosses the horizontal wrap (`|dx| == width - 1`).
    /// Width 2 has no separate seam: its two columns also touch directly.
    pub fn is_seam(&self, width: usize) -> bool {
        width > 2 && self.a.y == self.b.y && self.a.x.abs_diff(self.b.x) == width - 1
    }
}

/// Hamiltonian cycle on a cylindrical grid.
///
/// Invariant: `path` is a permutation of all grid cells and every consecutive
/// pair, including last → first, is adjacent. Constructed only through
/// validation or by the builders/mutators in this crate, which preserve it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cycle {
    grid: Grid,
    path: Vec<Cell>,
}

impl Cycle {
    /// Validate `path` against the cylinder rules and wrap it.
    pub fn new(width: usize, height: usize, path: Vec<Cell>) -> Result<Self, CycleError> {
        let grid = Grid::new(width, height)?;
        validate_path(grid, &path)?;
        Ok(Self { grid, path })
    }

    /// Wrap a path the caller has just built. Checked in debug builds.
    pub(crate) fn from_trusted(grid: Grid, path: Vec<Cell>) -> Self {
        debug_assert_eq!(validate_path(grid, &path), Ok(()));
        Self { grid, path }
    }

    #[inline]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    pub fn into_path(self) -> Vec<Cell> {
        self.path
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Re-check the invariant. Always `Ok` for values produced by this crate.
    pub fn validate(&self) -> Result<(), CycleError> {
        validate_path(self.grid, &self.path)
    }

    /// Edges in traversal order, ending with the implicit closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.path.len();
        (0..n).map(move |i| Edge {
            a: self.path[i],
            b: self.path[(i + 1) % n],
        })
    }

    /// Unordered edge set; independent of start cell and direction.
    pub fn edge_set(&self) -> HashSet<Edge> {
        self.edges().map(Edge::normalized).collect()
    }
}

fn validate_path(grid: Grid, path: &[Cell]) -> Result<(), CycleError> {
    if path.len() != grid.len() {
        return Err(CycleError::invalid(format!(
            "path has {} cells, expected {}",
            path.len(),
            grid.len()
        )));
    }
    let mut seen = vec![false; grid.len()];
    for (i, &c) in path.iter().enumerate() {
        if !grid.contains(c) {
            return Err(CycleError::invalid(format!(
                "cell {c} at position {i} is outside the {}x{} grid",
                grid.width(),
                grid.height()
            )));
        }
        let k = grid.index(c);
        if seen[k] {
            return Err(CycleError::invalid(format!(
                "cell {c} at position {i} is visited twice"
            )));
        }
        seen[k] = true;
    }
    for i in 0..path.len() {
        let (a, b) = (path[i], path[(i + 1) % path.len()]);
        if !grid.are_adjacent(a, b) {
            return Err(CycleError::invalid(format!(
                "cells {a} and {b} at positions {i}, {} are not adjacent",
                (i + 1) % path.len()
            )));
        }
    }
    Ok(())
}
