//! Per-node search events for callers that want to display or count the
//! exploration.

use gridwalk_core::Point;

/// What happened to a node during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visit {
    /// DFS/BFS marked the node visited and added it to the frontier.
    Discovered,
    /// A cost-guided search recorded a strictly cheaper cost for the node
    /// and queued it again.
    Relaxed,
    /// The node was taken from the frontier and its neighbors examined.
    Expanded,
}

/// Receives [`Visit`] events while a search runs.
///
/// Observers cannot influence the search; they are called after the
/// bookkeeping for the event is done. Any `FnMut(Point, Visit)` closure is
/// an observer.
pub trait Observer {
    fn visit(&mut self, p: Point, visit: Visit);
}

impl<F: FnMut(Point, Visit)> Observer for F {
    fn visit(&mut self, p: Point, visit: Visit) {
        self(p, visit)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Quiet;

impl Observer for Quiet {
    #[inline]
    fn visit(&mut self, _p: Point, _visit: Visit) {}
}
