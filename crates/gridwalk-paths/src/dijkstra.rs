use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet};
use crate::strategy::{Strategy, log_outcome};
use crate::traits::WeightedPather;

impl PathRange {
    /// Compute the cheapest path from `from` to `to` using Dijkstra's
    /// algorithm.
    ///
    /// Nodes are expanded in order of cumulative entry cost. The path is
    /// final only once `to` leaves the queue, so discovering the goal early
    /// through an expensive cell does not end the search.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn dijkstra_path<P: WeightedPather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.dijkstra_path_with(pather, from, to, &mut Quiet)
    }

    /// Like [`dijkstra_path`](Self::dijkstra_path), reporting expansions and
    /// relaxations to `observer`.
    pub fn dijkstra_path_with<P, O>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
    ) -> Option<Vec<Point>>
    where
        P: WeightedPather + ?Sized,
        O: Observer + ?Sized,
    {
        let path = self.relaxing_search(pather, from, to, observer, |g, _| g);
        log_outcome(Strategy::Dijkstra, from, to, path.as_deref());
        path
    }
}
