//! Mutable two-neighbor view of a cycle, indexed by dense cell index.

use crate::cycle::Cycle;
use crate::grid::{Cell, Grid};

/// Each cell's two tour neighbors. Only meaningful while every cell has
/// exactly two distinct links, which `rewire` preserves.
#[derive(Clone, Debug)]
pub(super) struct AdjacencyView {
    grid: Grid,
    links: Vec<[usize; 2]>,
}

impl AdjacencyView {
    pub(super) fn from_cycle(cycle: &Cycle) -> Self {
        let grid = cycle.grid();
        let path = cycle.path();
        let n = path.len();
        let mut links = vec![[0usize; 2]; n];
        for i in 0..n {
            let here = grid.index(path[i]);
            links[here] = [
                grid.index(path[(i + n - 1) % n]),
                grid.index(path[(i + 1) % n]),
            ];
        }
        Self { grid, links }
    }

    #[inline]
    pub(super) fn has_edge(&self, a: usize, b: usize) -> bool {
        self.links[a].contains(&b)
    }

    fn relink(&mut self, at: usize, from: usize, to: usize) {
        let slot = &mut self.links[at];
        if slot[0] == from {
            slot[0] = to;
        } else {
            debug_assert_eq!(slot[1], from, "{at} is not linked to {from}");
            slot[1] = to;
        }
    }

    /// Replace edges `a–b`, `c–d` with `a–c`, `b–d`.
    ///
    /// `rewire(a, c, b, d)` undoes `rewire(a, b, c, d)`.
    pub(super) fn rewire(&mut self, a: usize, b: usize, c: usize, d: usize) {
        self.relink(a, b, c);
        self.relink(b, a, d);
        self.relink(c, d, a);
        self.relink(d, c, b);
    }

    #[inline]
    fn step(&self, prev: usize, cur: usize) -> usize {
        let [l, r] = self.links[cur];
        if l != prev {
            l
        } else {
            r
        }
    }

    /// Length of the loop through `start`. Equals the cell count iff the view
    /// is a single Hamiltonian cycle.
    pub(super) fn loop_len(&self, start: usize) -> usize {
        let n = self.links.len();
        let (mut prev, mut cur) = (start, self.links[start][0]);
        let mut len = 1;
        while cur != start && len <= n {
            let next = self.step(prev, cur);
            prev = cur;
            cur = next;
            len += 1;
        }
        len
    }

    /// Ordered path from `start`, leaving towards `toward` when it is linked.
    pub(super) fn to_path(&self, start: Cell, toward: Cell) -> Vec<Cell> {
        let n = self.links.len();
        let s = self.grid.index(start);
        let t = self.grid.index(toward);
        let first = if self.has_edge(s, t) {
            t
        } else {
            self.links[s][0]
        };
        let mut path = Vec::with_capacity(n);
        path.push(start);
        let (mut prev, mut cur) = (s, first);
        while cur != s && path.len() < n {
            path.push(self.grid.cell(cur));
            let next = self.step(prev, cur);
            prev = cur;
            cur = next;
        }
        path
    }
}
