use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet};
use crate::strategy::{Strategy, log_outcome};
use crate::traits::AstarPather;

impl PathRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// The frontier is ordered by `g + estimate(node, to)`. With an
    /// admissible estimate the result costs the same as
    /// [`dijkstra_path`](Self::dijkstra_path) while expanding fewer nodes.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range.
    pub fn astar_path<P: AstarPather + ?Sized>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.astar_path_with(pather, from, to, &mut Quiet)
    }

    /// Like [`astar_path`](Self::astar_path), reporting expansions and
    /// relaxations to `observer`.
    pub fn astar_path_with<P, O>(
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
        let path = self.relaxing_search(pather, from, to, observer, |g, np| {
            g.saturating_add(pather.estimate(np, to))
        });
        log_outcome(Strategy::Astar, from, to, path.as_deref());
        path
    }
}

#[cfg(test)]
mod tests {
    use gridwalk_core::{Point, Range};

    use crate::grid::CostGrid;
    use crate::{PathRange, Visit, path_cost};

    #[test]
    fn open_grid_corner_to_corner() {
        let grid = CostGrid::new(Range::sized(3, 3), 1).unwrap();
        let mut pr = PathRange::new(grid.range());
        let path = pr
            .astar_path(&grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        // Same cost as BFS/Dijkstra, but the heuristic pulls the path
        // through the centre.
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(path_cost(&grid, &path), 4);
    }

    #[test]
    fn matches_dijkstra_cost_on_weighted_grid() {
        let grid = CostGrid::parse(
            "\
.1.9...
.#.#.#.
.#3#2#.
...9...",
        )
        .unwrap();
        let mut pr = PathRange::new(grid.range());
        let from = Point::new(0, 0);
        let to = Point::new(6, 3);

        let astar = pr.astar_path(&grid, from, to).unwrap();
        let dijkstra = pr.dijkstra_path(&grid, from, to).unwrap();
        assert_eq!(path_cost(&grid, &astar), path_cost(&grid, &dijkstra));
        assert_eq!(astar.first(), Some(&from));
        assert_eq!(astar.last(), Some(&to));
    }

    #[test]
    fn expands_fewer_nodes_than_dijkstra() {
        let grid = CostGrid::new(Range::sized(20, 20), 1).unwrap();
        let mut pr = PathRange::new(grid.range());
        let from = Point::new(0, 10);
        let to = Point::new(19, 10);

        let mut astar = 0;
        let a = pr
            .astar_path_with(&grid, from, to, &mut |_p: Point, v: Visit| {
                if v == Visit::Expanded {
                    astar += 1;
                }
            })
            .unwrap();

        let mut dijkstra = 0;
        let d = pr
            .dijkstra_path_with(&grid, from, to, &mut |_p: Point, v: Visit| {
                if v == Visit::Expanded {
                    dijkstra += 1;
                }
            })
            .unwrap();

        assert_eq!(path_cost(&grid, &a), 19);
        assert_eq!(path_cost(&grid, &d), 19);
        assert!(astar < dijkstra, "astar {astar} vs dijkstra {dijkstra}");
    }

    #[test]
    fn zero_heuristic_behaves_like_dijkstra() {
        use crate::traits::{AstarPather, Pather, WeightedPather};

        struct Blind<'a>(&'a CostGrid);

        impl Pather for Blind<'_> {
            fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
                self.0.neighbors(p, buf)
            }
        }

        impl WeightedPather for Blind<'_> {
            fn entry_cost(&self, p: Point) -> i32 {
                self.0.entry_cost(p)
            }
        }

        impl AstarPather for Blind<'_> {
            fn estimate(&self, _from: Point, _to: Point) -> i32 {
                0
            }
        }

        let grid = CostGrid::parse(
            "\
.3..
.#2.
....",
        )
        .unwrap();
        let blind = Blind(&grid);
        let mut pr = PathRange::new(grid.range());
        let from = Point::new(0, 0);
        let to = Point::new(3, 2);
        assert_eq!(
            pr.astar_path(&blind, from, to),
            pr.dijkstra_path(&grid, from, to)
        );
    }

    #[test]
    fn unreachable_goal() {
        let grid = CostGrid::parse(
            "\
..#.
..#.
###.",
        )
        .unwrap();
        let mut pr = PathRange::new(grid.range());
        assert_eq!(pr.astar_path(&grid, Point::new(0, 0), Point::new(3, 0)), None);
    }
}
