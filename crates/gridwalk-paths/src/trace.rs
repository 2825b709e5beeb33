//! Path reconstruction from the predecessor arena.

use gridwalk_core::Point;

use crate::PathRange;
use crate::pathrange::NO_PARENT;

impl PathRange {
    /// Follow predecessors from node `goal` back to the node that has none,
    /// then return the chain in start-to-goal order.
    ///
    /// Returns `None` when `goal` was not recorded by the current search.
    pub(crate) fn trace_path(&self, goal: usize) -> Option<Vec<Point>> {
        if !self.seen(goal) {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            // Chains are acyclic unless a graph reported negative costs.
            if path.len() > self.nodes.len() {
                log::debug!("predecessor chain from {} does not terminate", self.point(goal));
                return None;
            }
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
