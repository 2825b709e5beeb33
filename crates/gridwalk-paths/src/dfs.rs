//! Depth-first path search.

use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet, Visit};
use crate::pathrange::NO_PARENT;
use crate::strategy::{Strategy, log_outcome};
use crate::traits::Pather;

impl PathRange {
    /// Find a path from `from` to `to` by depth-first search.
    ///
    /// The search keeps an explicit stack holding the current path. From the
    /// node on top it advances to the first unvisited neighbor (in the order
    /// the pather lists them) and backtracks when none is left. It stops as
    /// soon as `to` is discovered, so the result is usually not the shortest
    /// path.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn dfs_path<P: Pather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.dfs_path_with(pather, from, to, &mut Quiet)
    }

    /// Like [`dfs_path`](Self::dfs_path), reporting each newly visited node
    /// as [`Visit::Discovered`].
    pub fn dfs_path_with<P, O>(
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
            log_outcome(Strategy::Dfs, from, to, path.as_deref());
            return path;
        }

        let mut stack = std::mem::take(&mut self.stack);
        stack.clear();
        stack.push(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(&ci) = stack.last() else {
                break 'search false;
            };
            let depth = self.nodes[ci].g + 1;

            nbuf.clear();
            pather.neighbors(self.point(ci), &mut nbuf);

            let mut advanced = false;
            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.seen(ni) {
                    continue;
                }
                self.mark(ni, depth, ci);
                stack.push(ni);
                observer.visit(np, Visit::Discovered);
                if ni == goal_idx {
                    break 'search true;
                }
                advanced = true;
                break;
            }

            if !advanced {
                stack.pop();
            }
        };

        let path = found.then(|| stack.iter().map(|&i| self.point(i)).collect::<Vec<_>>());

        self.stack = stack;
        self.nbuf = nbuf;

        log_outcome(Strategy::Dfs, from, to, path.as_deref());
        path
    }
}
