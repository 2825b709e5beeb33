//! Greedy best-first search.

use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet};
use crate::strategy::{Strategy, log_outcome};
use crate::traits::AstarPather;

impl PathRange {
    /// Find a path from `from` to `to` by greedy best-first search.
    ///
    /// The frontier is ordered by the heuristic estimate from each node to
    /// `to` alone, ignoring the cost paid so far. Costs are still tracked so
    /// a node reached more cheaply later gets its predecessor updated. The
    /// result is usually found quickly but is not guaranteed to be cheapest.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn best_first_path<P: AstarPather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.best_first_path_with(pather, from, to, &mut Quiet)
    }

    /// Like [`best_first_path`](Self::best_first_path), reporting expansions
    /// and relaxations to `observer`.
    pub fn best_first_path_with<P, O>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
    ) -> Option<Vec<Point>>
    where
        P: AstarPather + ?Sized,
        O: Observer + ?Sized,
    {
        let path = self.relaxing_search(pather, from, to, observer, |_, np| {
            pather.estimate(np, to)
        });
        log_outcome(Strategy::BestFirst, from, to, path.as_deref());
        path
    }
}
