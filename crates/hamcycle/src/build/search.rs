//! Randomized backtracking with Warnsdorff move ordering.
//!
//! The search keeps an explicit stack of frames, one per cell on the current
//! path, each holding that cell's ordered untried successors. Depth is bounded
//! by the cell count and never touches the call stack.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cycle::{Cycle, CycleError};
use crate::grid::{Cell, Grid};
use crate::mutate::rotate;
use crate::progress::Progress;

use super::types::SearchCfg;

/// Build a randomized Hamiltonian cycle starting from `(0, 0)`, then rotate it
/// so the start cell differs between seeds.
///
/// Candidates at each step are the unvisited neighbors of the path tip,
/// shuffled with `rng` and then stably sorted by how many unvisited neighbors
/// each has (fewest first). Dead ends pop the tip and resume with the parent's
/// next candidate.
pub fn search<R: Rng + ?Sized>(
    grid: Grid,
    cfg: SearchCfg,
    rng: &mut R,
    progress: &mut impl Progress,
) -> Result<Cycle, CycleError> {
    let path = search_path(grid, cfg, rng, progress)?;
    Ok(rotate(Cycle::from_trusted(grid, path), rng))
}

/// Search result before rotation. The grid is not required to be even, which
/// lets tests reach the exhaustion path.
pub(crate) fn search_path<R: Rng + ?Sized>(
    grid: Grid,
    cfg: SearchCfg,
    rng: &mut R,
    progress: &mut impl Progress,
) -> Result<Vec<Cell>, CycleError> {
    SearchRunner::new(grid, cfg).run(rng, progress)
}

/// Ordered successors of one path cell.
struct Frame {
    candidates: Vec<Cell>,
    next: usize,
}

/// Runner carrying the partial path, visited bitmap, and frame stack.
struct SearchRunner {
    grid: Grid,
    cfg: SearchCfg,
    start: Cell,
    visited: Vec<bool>,
    path: Vec<Cell>,
    stack: Vec<Frame>,
    steps: u64,
}

impl SearchRunner {
    fn new(grid: Grid, cfg: SearchCfg) -> Self {
        Self {
            grid,
            cfg,
            start: Cell::new(0, 0),
            visited: vec![false; grid.len()],
            path: Vec::with_capacity(grid.len()),
            stack: Vec::with_capacity(grid.len()),
            steps: 0,
        }
    }

    fn run<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        progress: &mut impl Progress,
    ) -> Result<Vec<Cell>, CycleError> {
        let total = self.grid.len();
        self.enter(self.start, rng);
        progress.building(self.path.len(), total);
        loop {
            let tip = self.path[self.path.len() - 1];
            if self.path.len() == total && self.grid.are_adjacent(tip, self.start) {
                return Ok(self.path);
            }
            self.tick()?;
            match self.next_candidate() {
                Some(cell) => self.enter(cell, rng),
                None => {
                    self.leave();
                    if self.path.is_empty() {
                        return Err(CycleError::SearchExhausted { steps: self.steps });
                    }
                }
            }
            progress.building(self.path.len(), total);
        }
    }

    fn tick(&mut self) -> Result<(), CycleError> {
        if let Some(limit) = self.cfg.max_steps {
            if self.steps >= limit {
                return Err(CycleError::BudgetExceeded { steps: self.steps });
            }
        }
        self.steps += 1;
        Ok(())
    }

    /// Push `cell` and its ordered candidate frame.
    fn enter<R: Rng + ?Sized>(&mut self, cell: Cell, rng: &mut R) {
        self.visited[self.grid.index(cell)] = true;
        self.path.push(cell);
        let candidates = self.order_candidates(cell, rng);
        self.stack.push(Frame {
            candidates,
            next: 0,
        });
    }

    /// Pop the tip and its frame.
    fn leave(&mut self) {
        self.stack.pop();
        if let Some(cell) = self.path.pop() {
            self.visited[self.grid.index(cell)] = false;
        }
    }

    /// Next untried candidate of the tip frame that is still viable.
    fn next_candidate(&mut self) -> Option<Cell> {
        let remaining = self.grid.len() - self.path.len();
        let tip = *self.path.last()?;
        loop {
            let frame = self.stack.last_mut()?;
            let cell = *frame.candidates.get(frame.next)?;
            frame.next += 1;
            if self.is_visited(cell) {
                continue;
            }
            if self.cfg.prune_closure && remaining > 1 && self.open_around_start(cell) == 0 {
                continue;
            }
            if self.cfg.prune_strands && self.strands_neighbor(tip, cell) {
                continue;
            }
            return Some(cell);
        }
    }

    #[inline]
    fn is_visited(&self, cell: Cell) -> bool {
        self.visited[self.grid.index(cell)]
    }

    /// Unvisited neighbors of the start once `taking` is also visited.
    fn open_around_start(&self, taking: Cell) -> usize {
        self.grid
            .neighbors(self.start)
            .iter()
            .filter(|&&n| n != taking && !self.is_visited(n))
            .count()
    }

    /// Moving the tip from `tip` to `next` strands a cell if some unvisited
    /// neighbor of `tip` is left with fewer than two possible tour edges.
    /// `tip` itself stops being an endpoint, so only its neighbors lose options.
    fn strands_neighbor(&self, tip: Cell, next: Cell) -> bool {
        self.grid
            .neighbors(tip)
            .iter()
            .filter(|&&u| u != next && !self.is_visited(u))
            .any(|&u| {
                let free = self
                    .grid
                    .neighbors(u)
                    .iter()
                    .filter(|&&k| k != next && !self.is_visited(k))
                    .count();
                let ends = usize::from(self.grid.are_adjacent(u, self.start))
                    + usize::from(self.grid.are_adjacent(u, next));
                free + ends < 2
            })
    }

    fn unvisited_degree(&self, cell: Cell) -> usize {
        self.grid
            .neighbors(cell)
            .iter()
            .filter(|&&n| !self.is_visited(n))
            .count()
    }

    fn order_candidates<R: Rng + ?Sized>(&self, cell: Cell, rng: &mut R) -> Vec<Cell> {
        let mut candidates: Vec<Cell> = self
            .grid
            .neighbors(cell)
            .iter()
            .copied()
            .filter(|&n| !self.is_visited(n))
            .collect();
        candidates.shuffle(rng);
        // Stable: ties keep their shuffled order.
        candidates.sort_by_key(|&n| self.unvisited_degree(n));
        candidates
    }
}
