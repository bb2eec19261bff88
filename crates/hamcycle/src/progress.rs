//! Reporting hooks for long-running builds and flip passes.
//!
//! Sinks never influence the result; every method defaults to a no-op so an
//! implementation only overrides what it displays.

use crate::mutate::FlipEvent;

/// Receives progress from builders and the flip mutator.
pub trait Progress {
    /// Current path length out of `total` cells. During backtracking the
    /// count goes down as well as up.
    fn building(&mut self, _current: usize, _total: usize) {}

    /// Outcome of one flip attempt.
    fn flipping(&mut self, _event: &FlipEvent) {}
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn building(&mut self, current: usize, total: usize) {
        (**self).building(current, total);
    }

    fn flipping(&mut self, event: &FlipEvent) {
        (**self).flipping(event);
    }
}
