use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet, Visit};
use crate::pathrange::NO_PARENT;
use crate::strategy::{Strategy, log_outcome};
use crate::traits::Pather;

impl PathRange {
    /// Find a path from `from` to `to` by breadth-first search.
    ///
    /// Every step counts as 1 regardless of entry costs, so the result has
    /// the fewest possible steps. The first visit of a node fixes its
    /// predecessor, and the search stops as soon as `to` is discovered.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn bfs_path<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.bfs_path_with(pather, from, to, &mut Quiet)
    }

    /// Like [`bfs_path`](Self::bfs_path), reporting [`Visit::Expanded`] for
    /// each dequeued node and [`Visit::Discovered`] for each new neighbor.
    pub fn bfs_path_with<P, O>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
    ) -> Option<Vec<Point>>
    where
        P: Pather + ?Sized,
        O: Observer + ?Sized,
    {
        let (start_idx, goal_idx) = self.endpoints(from, to)?;

        self.begin();
        self.mark(start_idx, 0, NO_PARENT);
        if start_idx == goal_idx {
            let path = Some(vec![from]);
            log_outcome(Strategy::Bfs, from, to, path.as_deref());
            return path;
        }

        let mut queue = std::mem::take(&mut self.fifo);
        queue.clear();
        queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = queue.pop_front() else {
                break 'search false;
            };
            let cp = self.point(ci);
            let depth = self.nodes[ci].g + 1;
            observer.visit(cp, Visit::Expanded);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen(ni) {
                    continue;
                }
                self.mark(ni, depth, ci);
                queue.push_back(ni);
                observer.visit(np, Visit::Discovered);
                if ni == goal_idx {
                    break 'search true;
                }
            }
        };

        self.fifo = queue;
        self.nbuf = nbuf;

        let path = if found { self.trace_path(goal_idx) } else { None };
        log_outcome(Strategy::Bfs, from, to, path.as_deref());
        path
    }
}
