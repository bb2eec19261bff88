//! Cylindrical grid topology.
//!
//! Columns wrap (`x = width-1` is adjacent to `x = 0`); rows do not. All
//! functions here are pure. Passing a cell outside the grid is a caller bug and
//! is only checked with `debug_assert!`.

use std::fmt;
use std::ops::Deref;

use crate::cycle::CycleError;

/// Grid cell `(x, y)` with `0 <= x < width`, `0 <= y < height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Validated grid dimensions: both even and at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Rejects odd or zero sides, and sides whose cell count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, CycleError> {
        let even = width != 0 && height != 0 && width % 2 == 0 && height % 2 == 0;
        if !even || width.checked_mul(height).is_none() {
            return Err(CycleError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Skip the parity check. Only for exercising the search on degenerate shapes.
    #[cfg(test)]
    pub(crate) fn unchecked(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, i.e. the length of any Hamiltonian cycle on this grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Dense row-major index.
    #[inline]
    pub fn index(&self, c: Cell) -> usize {
        debug_assert!(self.contains(c), "cell {c} outside {}x{}", self.width, self.height);
        c.y * self.width + c.x
    }

    #[inline]
    pub fn cell(&self, index: usize) -> Cell {
        debug_assert!(index < self.len());
        Cell::new(index % self.width, index / self.width)
    }

    #[inline]
    pub fn are_adjacent(&self, a: Cell, b: Cell) -> bool {
        are_adjacent(a, b, self.width)
    }

    #[inline]
    pub fn neighbors(&self, c: Cell) -> Neighbors {
        neighbors(c, self.width, self.height)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).map(move |i| self.cell(i))
    }
}

/// Horizontal distance across the seam: `min(|dx|, width - |dx|)`.
#[inline]
pub fn wrap_dx(a: usize, b: usize, width: usize) -> usize {
    let dx = a.abs_diff(b);
    dx.min(width - dx)
}

/// True iff `a` and `b` are at Manhattan distance 1 with horizontal wrap.
#[inline]
pub fn are_adjacent(a: Cell, b: Cell, width: usize) -> bool {
    debug_assert!(a.x < width && b.x < width);
    wrap_dx(a.x, b.x, width) + a.y.abs_diff(b.y) == 1
}

/// Up to four distinct neighbors of a cell, in order right, left, down, up.
#[derive(Clone, Copy, Debug)]
pub struct Neighbors {
    cells: [Cell; 4],
    len: usize,
}

impl Neighbors {
    fn push(&mut self, c: Cell) {
        if !self.cells[..self.len].contains(&c) {
            self.cells[self.len] = c;
            self.len += 1;
        }
    }
}

impl Deref for Neighbors {
    type Target = [Cell];

    fn deref(&self) -> &[Cell] {
        &self.cells[..self.len]
    }
}

/// Neighbors of `c` on a `width`×`height` cylinder.
///
/// Horizontal neighbors always wrap; vertical ones exist only inside
/// `[0, height)`. The cell itself and duplicates (width 2) are dropped.
pub fn neighbors(c: Cell, width: usize, height: usize) -> Neighbors {
    debug_assert!(c.x < width && c.y < height, "cell {c} outside {width}x{height}");
    let mut out = Neighbors {
        cells: [c; 4],
        len: 0,
    };
    for cand in [
        Cell::new((c.x + 1) % width, c.y),
        Cell::new((c.x + width - 1) % width, c.y),
    ] {
        if cand != c {
            out.push(cand);
        }
    }
    if c.y + 1 < height {
        out.push(Cell::new(c.x, c.y + 1));
    }
    if c.y > 0 {
        out.push(Cell::new(c.x, c.y - 1));
    }
    out
}
