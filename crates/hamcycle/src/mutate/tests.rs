use super::*;
use crate::build::{search, serpentine, SearchCfg};
use crate::cycle::Cycle;
use crate::grid::Cell;
use crate::progress::{NoProgress, Progress};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Events(Vec<FlipEvent>);

impl Progress for Events {
    fn flipping(&mut self, event: &FlipEvent) {
        self.0.push(*event);
    }
}

fn base(w: usize, h: usize) -> Cycle {
    serpentine(w, h, &mut NoProgress).unwrap()
}

fn searched(w: usize, h: usize, seed: u64) -> Cycle {
    let grid = crate::grid::Grid::new(w, h).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    search(grid, SearchCfg::default(), &mut rng, &mut NoProgress).unwrap()
}

#[test]
fn rotation_keeps_edge_set() {
    let c = base(6, 4);
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..20 {
        let r = rotate(c.clone(), &mut rng);
        assert_eq!(r.validate(), Ok(()));
        assert_eq!(r.edge_set(), c.edge_set());
    }
}

#[test]
fn rotation_changes_start_or_direction() {
    let c = base(4, 4);
    let mut rng = StdRng::seed_from_u64(1);
    let starts: std::collections::HashSet<Cell> = (0..32)
        .map(|_| rotate(c.clone(), &mut rng).path()[0])
        .collect();
    assert!(starts.len() > 1);
}

#[test]
fn zero_flips_is_identity() {
    let c = base(4, 4);
    let mut rng = StdRng::seed_from_u64(9);
    let report = flip(c.clone(), 0, &mut rng, &mut NoProgress);
    assert_eq!(report.cycle, c);
    assert_eq!(report.successes, 0);
}

#[test]
fn flips_keep_cycle_valid_and_count_bounded() {
    for (w, h, seed) in [(2, 2, 0), (2, 6, 1), (4, 4, 2), (6, 6, 3), (6, 4, 4)] {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut events = Events::default();
        let report = flip(searched(w, h, seed), 60, &mut rng, &mut events);
        assert_eq!(report.cycle.validate(), Ok(()), "{w}x{h}");
        assert_eq!(report.attempts, 60);
        assert!(report.successes <= 60);
        assert_eq!(events.0.len(), 60);
        let accepted = events.0.iter().filter(|e| e.accepted()).count();
        assert_eq!(accepted, report.successes);
        assert_eq!(events.0.last().map(|e| e.successes), Some(report.successes));
    }
}

#[test]
fn flips_report_anchor_inside_upper_rows() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut events = Events::default();
    flip(base(6, 4), 100, &mut rng, &mut events);
    for (i, e) in events.0.iter().enumerate() {
        assert_eq!(e.attempt, i + 1);
        assert_eq!(e.total, 100);
        assert!(e.anchor.x < 6 && e.anchor.y < 3, "{:?}", e.anchor);
    }
}

#[test]
fn flips_never_survive_on_cylinder_tours() {
    // A tour separates the cylinder, so each 2x2 face lies on one side of it and
    // the face's two parallel tour edges run in opposite directions. Swapping
    // such a pair always cuts the tour; the traversal check must catch every one.
    for seed in 0..8 {
        let c = searched(6, 6, seed);
        let mut rng = StdRng::seed_from_u64(seed + 100);
        let mut events = Events::default();
        let report = flip(c.clone(), 50, &mut rng, &mut events);
        assert_eq!(report.successes, 0);
        assert_eq!(report.cycle, c);
        assert!(events
            .0
            .iter()
            .all(|e| e.outcome != FlipOutcome::Accepted));
    }
}

#[test]
fn disconnecting_flip_is_rolled_back() {
    // Neighboring serpentine columns form a U, so trading their vertical sides
    // for horizontal ones always cuts the U's tail off into its own loop.
    let c = base(4, 4);
    let mut events = Events::default();
    let mut seen_disconnect = false;
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        events.0.clear();
        let report = flip(c.clone(), 1, &mut rng, &mut events);
        let e = events.0[0];
        match e.outcome {
            FlipOutcome::Disconnected | FlipOutcome::NotFlippable => {
                assert_eq!(report.cycle, c);
                seen_disconnect |= e.outcome == FlipOutcome::Disconnected;
            }
            FlipOutcome::Accepted => panic!("serpentine square {:?} flipped", e.anchor),
        }
    }
    assert!(seen_disconnect);
}
