//! Frontier loop shared by the cost-guided strategies.

use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Visit};
use crate::pathrange::NO_PARENT;
use crate::traits::WeightedPather;

impl PathRange {
    /// Priority-queue search keyed by `priority(g, neighbor)`.
    ///
    /// A neighbor is relaxed only when `g(current) + entry_cost(neighbor)` is
    /// strictly lower than its recorded cost (or it was never reached); it
    /// may be relaxed again later if a cheaper path shows up. Superseded
    /// queue entries stay in the queue and are skipped when dequeued. The
    /// search succeeds when `to` is dequeued, not when it is first reached.
    pub(crate) fn relaxing_search<P, O, F>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
        priority: F,
    ) -> Option<Vec<Point>>
    where
        P: WeightedPather + ?Sized,
        O: Observer + ?Sized,
        F: Fn(i32, Point) -> i32,
    {
        let (start_idx, goal_idx) = self.endpoints(from, to)?;

        self.begin();
        self.mark(start_idx, 0, NO_PARENT);

        let mut open = std::mem::take(&mut self.open);
        open.clear();
        open.enqueue(start_idx, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = open.pop() else {
                break 'search false;
            };

            // Skip stale entries.
            if !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);
            observer.visit(current_point, Visit::Expanded);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(pather.entry_cost(np));
                if self.seen(ni) && tentative_g >= self.nodes[ni].g {
                    continue;
                }

                self.mark(ni, tentative_g, ci);
                open.enqueue(ni, priority(tentative_g, np));
                observer.visit(np, Visit::Relaxed);
            }
        };

        self.open = open;
        self.nbuf = nbuf;

        if found { self.trace_path(goal_idx) } else { None }
    }
}
