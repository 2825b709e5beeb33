use gridwalk_core::Point;

/// Minimal graph interface: neighbor enumeration only.
///
/// Used by depth-first and breadth-first search.
pub trait Pather {
    /// Append the walkable neighbors of `p` into `buf`. The caller clears
    /// `buf` before calling.
    ///
    /// Order matters: depth-first search follows the first unvisited
    /// neighbor, and the other strategies break priority ties in discovery
    /// order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather whose nodes carry an entry cost.
pub trait WeightedPather: Pather {
    /// Cost charged for moving into `p`, independent of where the move comes
    /// from. Must be >= 0.
    fn entry_cost(&self, p: Point) -> i32;
}

/// Weighted pather with a distance estimate, for greedy best-first and A*.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible) for A* to return
    /// optimal paths.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Total cost of walking `path`: the entry cost of every node after the
/// first. Empty and single-node paths cost 0.
pub fn path_cost<P: WeightedPather + ?Sized>(pather: &P, path: &[Point]) -> i32 {
    path.iter().skip(1).map(|&p| pather.entry_cost(p)).sum()
}
