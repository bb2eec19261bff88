//! Boustrophedon sweep over columns.

use crate::cycle::{Cycle, CycleError};
use crate::grid::{Cell, Grid};
use crate::progress::Progress;

/// Deterministic cycle: even columns top-to-bottom, odd columns bottom-to-top.
///
/// Column `width-1` is odd and therefore ends on row 0, which is adjacent
/// across the seam to `(0, 0)`. Odd widths cannot close this way; odd heights
/// fall outside the grid contract and are rejected with them.
pub fn serpentine(
    width: usize,
    height: usize,
    progress: &mut impl Progress,
) -> Result<Cycle, CycleError> {
    let grid = Grid::new(width, height)?;
    let total = grid.len();
    let mut path = Vec::with_capacity(total);
    for x in 0..width {
        for step in 0..height {
            let y = if x % 2 == 0 { step } else { height - 1 - step };
            path.push(Cell::new(x, y));
            progress.building(path.len(), total);
        }
    }
    Ok(Cycle::from_trusted(grid, path))
}
