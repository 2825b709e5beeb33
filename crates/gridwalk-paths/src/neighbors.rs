use gridwalk_core::Point;

/// Reusable neighbor enumeration helper.
///
/// Lists cardinal (4-way) or all (8-way) neighbors of a grid point, in
/// [`Point::neighbors_4`] / [`Point::neighbors_8`] order, filtered by a
/// predicate.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// 4-directional neighbors of `p` (up, right, down, left) for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }

    /// 8-directional neighbors of `p` (clockwise from up) for which `keep`
    /// returns `true`.
    pub fn all(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        self.buf.extend(p.neighbors_8().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}
