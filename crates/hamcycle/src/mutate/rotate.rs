use rand::Rng;

use crate::cycle::Cycle;

/// Start the tour at a uniformly random position and, with probability 1/2,
/// walk it in the opposite direction. The edge set is unchanged.
pub fn rotate<R: Rng + ?Sized>(cycle: Cycle, rng: &mut R) -> Cycle {
    let grid = cycle.grid();
    let mut path = cycle.into_path();
    let offset = rng.gen_range(0..path.len());
    path.rotate_left(offset);
    if rng.gen_bool(0.5) {
        // Keep the new start, reverse the order of everything after it.
        path[1..].reverse();
    }
    Cycle::from_trusted(grid, path)
}
