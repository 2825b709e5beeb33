//! A ready-made weighted grid graph.
//!
//! [`CostGrid`] stores one entry cost per cell, with walls marked
//! impassable, and implements the full [`AstarPather`] contract. It is the
//! graph the engine is usually driven with; hosts with their own map types
//! implement the traits directly instead.

use std::fmt;

use gridwalk_core::{Point, Range};

use crate::distance;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Which cells count as adjacent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// Cardinal plus diagonal moves.
    All,
}

/// Errors that can occur when building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Lines of the map text have different widths.
    InconsistentWidth { line: usize, expected: usize, found: usize },
    /// A character other than `#`, `.` or a digit was found.
    InvalidChar { ch: char, pos: Point },
    /// A cell was given a negative entry cost.
    NegativeCost { pos: Point, cost: i32 },
    /// The number of cells does not match the range.
    SizeMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid contains invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::NegativeCost { pos, cost } => {
                write!(f, "grid: negative entry cost {cost} at {pos}")
            }
            Self::SizeMismatch { expected, found } => {
                write!(f, "grid: expected {expected} cells, got {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A rectangular grid of cells, each either a wall or walkable with a
/// non-negative entry cost.
///
/// Neighbor queries list walkable cells inside the range, in
/// [`Point::neighbors_4`] or [`Point::neighbors_8`] order. The estimate is a
/// step-count lower bound for the grid's connectivity (rounded straight-line
/// distance for cardinal moves, Chebyshev distance with diagonals) scaled by
/// the cheapest walkable cell, so it never overestimates. A grid with
/// zero-cost cells always estimates 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    rng: Range,
    /// Row-major entry costs; `None` is a wall.
    cells: Vec<Option<i32>>,
    connectivity: Connectivity,
    /// Lower bound on the entry cost of any walkable cell. Raising a cell's
    /// cost leaves it untouched, so it may be below the true minimum.
    min_cost: i32,
}

impl CostGrid {
    /// Create a grid where every cell is walkable with `default_cost`.
    ///
    /// A negative `default_cost` is rejected like any other negative entry
    /// cost, reported at the first cell of the range.
    pub fn new(rng: Range, default_cost: i32) -> Result<Self, GridError> {
        if default_cost < 0 {
            return Err(GridError::NegativeCost {
                pos: rng.min,
                cost: default_cost,
            });
        }
        Ok(Self {
            rng,
            cells: vec![Some(default_cost); rng.len()],
            connectivity: Connectivity::default(),
            min_cost: default_cost,
        })
    }

    /// Build a grid from row-major cells (`None` for walls).
    pub fn from_cells(rng: Range, cells: Vec<Option<i32>>) -> Result<Self, GridError> {
        if cells.len() != rng.len() {
            return Err(GridError::SizeMismatch {
                expected: rng.len(),
                found: cells.len(),
            });
        }
        if let Some((p, cost)) = rng.iter().zip(cells.iter()).find_map(|(p, &c)| match c {
            Some(cost) if cost < 0 => Some((p, cost)),
            _ => None,
        }) {
            return Err(GridError::NegativeCost { pos: p, cost });
        }
        let min_cost = cells.iter().flatten().copied().min().unwrap_or(0);
        Ok(Self {
            rng,
            cells,
            connectivity: Connectivity::default(),
            min_cost,
        })
    }

    /// Parse a text map anchored at the origin.
    ///
    /// `#` is a wall, `.` a cell of cost 1, and a digit a cell of that cost.
    /// Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());

        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => None,
                    '.' => Some(1),
                    d if d.is_ascii_digit() => d.to_digit(10).map(|c| c as i32),
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                cells.push(cell);
            }
        }

        let rng = Range::sized(width as i32, lines.len() as i32);
        log::debug!(
            "parsed {} grid with {} walls",
            rng.size(),
            cells.iter().filter(|c| c.is_none()).count()
        );
        Self::from_cells(rng, cells)
    }

    /// Return the grid with a different adjacency rule.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Entry cost of `p`, or `None` for walls and points outside the grid.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        self.index(p).and_then(|i| self.cells[i])
    }

    /// Whether `p` is inside the grid and not a wall.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cost_at(p).is_some()
    }

    /// Make `p` walkable with the given entry cost. Points outside the grid
    /// are ignored.
    pub fn set_cost(&mut self, p: Point, cost: i32) -> Result<(), GridError> {
        if cost < 0 {
            return Err(GridError::NegativeCost { pos: p, cost });
        }
        if let Some(i) = self.index(p) {
            self.cells[i] = Some(cost);
            self.min_cost = self.min_cost.min(cost);
        }
        Ok(())
    }

    /// Turn `p` into a wall. Points outside the grid are ignored.
    pub fn set_wall(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i] = None;
        }
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.rng.width() as usize + x)
    }
}

impl Pather for CostGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        match self.connectivity {
            Connectivity::Cardinal => buf.extend(
                p.neighbors_4()
                    .into_iter()
                    .filter(|&q| self.is_walkable(q)),
            ),
            Connectivity::All => buf.extend(
                p.neighbors_8()
                    .into_iter()
                    .filter(|&q| self.is_walkable(q)),
            ),
        }
    }
}

impl WeightedPather for CostGrid {
    fn entry_cost(&self, p: Point) -> i32 {
        self.cost_at(p).unwrap_or(0)
    }
}

impl AstarPather for CostGrid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        let steps = match self.connectivity {
            Connectivity::Cardinal => distance::euclidean(from, to),
            Connectivity::All => distance::chebyshev(from, to),
        };
        steps.saturating_mul(self.min_cost)
    }
}

impl fmt::Display for CostGrid {
    /// Renders back to the [`parse`](Self::parse) format; costs above 9 are
    /// shown as `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.rng.min.y..self.rng.max.y {
            for x in self.rng.min.x..self.rng.max.x {
                let ch = match self.cost_at(Point::new(x, y)) {
                    None => '#',
                    Some(1) => '.',
                    Some(c @ 0..=9) => char::from(b'0' + c as u8),
                    Some(_) => '+',
                };
                write!(f, "{ch}")?;
            }
            if y + 1 < self.rng.max.y {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = "\
..#
.5#
...";

    #[test]
    fn parse_costs_and_walls() {
        let g = CostGrid::parse(MAP).unwrap();
        assert_eq!(g.range(), Range::sized(3, 3));
        assert_eq!(g.cost_at(Point::new(0, 0)), Some(1));
        assert_eq!(g.cost_at(Point::new(1, 1)), Some(5));
        assert_eq!(g.cost_at(Point::new(2, 0)), None);
        assert!(!g.is_walkable(Point::new(2, 1)));
        assert!(!g.is_walkable(Point::new(-1, 0)));
    }

    #[test]
    fn display_round_trips_parse_format() {
        let g = CostGrid::parse(MAP).unwrap();
        assert_eq!(g.to_string(), MAP);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            CostGrid::parse("..\n...").unwrap_err(),
            GridError::InconsistentWidth {
                line: 1,
                expected: 2,
                found: 3
            }
        );
        let err = CostGrid::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidChar {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
        assert!(err.to_string().contains("(1, 1)"));
    }

    #[test]
    fn from_cells_validates() {
        let rng = Range::sized(2, 1);
        assert_eq!(
            CostGrid::from_cells(rng, vec![Some(1)]).unwrap_err(),
            GridError::SizeMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            CostGrid::from_cells(rng, vec![Some(1), Some(-2)]).unwrap_err(),
            GridError::NegativeCost {
                pos: Point::new(1, 0),
                cost: -2
            }
        );
        assert!(CostGrid::from_cells(rng, vec![None, Some(0)]).is_ok());
    }

    #[test]
    fn set_cost_and_wall() {
        let mut g = CostGrid::new(Range::sized(2, 2), 1).unwrap();
        g.set_cost(Point::new(1, 1), 7).unwrap();
        g.set_wall(Point::new(0, 1));
        assert_eq!(g.cost_at(Point::new(1, 1)), Some(7));
        assert!(!g.is_walkable(Point::new(0, 1)));
        assert!(g.set_cost(Point::new(0, 0), -1).is_err());
        assert_eq!(g.cost_at(Point::new(0, 0)), Some(1));
    }

    #[test]
    fn neighbors_skip_walls_and_edges() {
        let g = CostGrid::parse(MAP).unwrap();
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(1, 1), Point::new(0, 0)]);

        let g = g.with_connectivity(Connectivity::All);
        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(1, 0),
                Point::new(2, 2),
                Point::new(1, 2),
                Point::new(0, 2),
                Point::new(0, 1),
                Point::new(0, 0),
            ]
        );
    }

    #[test]
    fn offset_range_indexing() {
        let mut g = CostGrid::new(Range::new(-2, -2, 2, 2), 1).unwrap();
        g.set_wall(Point::new(-2, -2));
        g.set_cost(Point::new(1, 1), 4).unwrap();
        assert!(!g.is_walkable(Point::new(-2, -2)));
        assert_eq!(g.cost_at(Point::new(1, 1)), Some(4));
        assert_eq!(g.cost_at(Point::new(2, 2)), None);
    }

    #[test]
    fn estimate_is_rounded_euclidean() {
        let g = CostGrid::new(Range::sized(10, 10), 1).unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 5);
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(1, 1)), 1);
        assert_eq!(g.entry_cost(Point::new(9, 9)), 1);
    }

    #[test]
    fn estimate_counts_diagonal_steps() {
        let g = CostGrid::new(Range::sized(10, 10), 1)
            .unwrap()
            .with_connectivity(Connectivity::All);
        // Two diagonal moves, where the straight line would round up to 3.
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(2, 2)), 2);
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 4);
    }

    #[test]
    fn estimate_scales_with_cheapest_cell() {
        let mut g = CostGrid::new(Range::sized(10, 10), 3).unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 15);
        g.set_cost(Point::new(5, 5), 2).unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 10);
        // Raising a cell back never raises the bound.
        g.set_cost(Point::new(5, 5), 9).unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(3, 4)), 10);

        let g = CostGrid::parse("1.\n.0").unwrap();
        assert_eq!(g.estimate(Point::new(0, 0), Point::new(1, 1)), 0);
    }

    #[test]
    fn negative_default_cost_is_rejected() {
        assert_eq!(
            CostGrid::new(Range::new(1, 2, 4, 4), -1).unwrap_err(),
            GridError::NegativeCost {
                pos: Point::new(1, 2),
                cost: -1
            }
        );
        assert!(CostGrid::new(Range::sized(2, 2), 0).is_ok());
    }
}
