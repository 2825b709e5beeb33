//! Distance functions usable as [`AstarPather::estimate`](crate::AstarPather::estimate).

use gridwalk_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance rounded to the nearest integer.
///
/// Never exceeds [`manhattan`], so it is admissible for 4-way movement with
/// entry costs of at least 1.
#[inline]
pub fn euclidean(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        let a = Point::new(1, 1);
        let b = Point::new(4, 5);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(euclidean(a, b), 5);
        assert_eq!(euclidean(Point::ZERO, Point::new(1, 1)), 1);
        assert_eq!(euclidean(Point::ZERO, Point::new(2, 2)), 3);
    }

    #[test]
    fn symmetric_and_zero_on_self() {
        let a = Point::new(-3, 8);
        let b = Point::new(6, -2);
        for f in [manhattan, chebyshev, euclidean] {
            assert_eq!(f(a, b), f(b, a));
            assert_eq!(f(a, a), 0);
        }
    }

    #[test]
    fn euclidean_bounded_by_grid_metrics() {
        let o = Point::ZERO;
        for p in gridwalk_core::Range::new(-6, -6, 7, 7) {
            assert!(euclidean(o, p) <= manhattan(o, p));
            assert!(euclidean(o, p) >= chebyshev(o, p));
        }
    }
}
