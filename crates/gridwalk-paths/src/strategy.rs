//! Runtime selection between the five search strategies.

use std::fmt;
use std::str::FromStr;

use gridwalk_core::Point;

use crate::PathRange;
use crate::observer::{Observer, Quiet};
use crate::traits::AstarPather;

/// One of the interchangeable search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Depth-first: follows the first unvisited neighbor, backtracks when
    /// stuck. Finds *a* path, not a short one.
    Dfs,
    /// Breadth-first: fewest steps, ignores entry costs.
    Bfs,
    /// Dijkstra: cheapest path by cumulative entry cost.
    Dijkstra,
    /// Greedy best-first: always expands the node that looks closest to the
    /// goal. Fast, not optimal.
    BestFirst,
    /// A*: cheapest path, guided by the heuristic.
    #[default]
    Astar,
}

impl Strategy {
    /// Every strategy, in increasing order of sophistication.
    pub const ALL: [Strategy; 5] = [
        Strategy::Dfs,
        Strategy::Bfs,
        Strategy::Dijkstra,
        Strategy::BestFirst,
        Strategy::Astar,
    ];

    /// Stable lowercase name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
            Self::Dijkstra => "dijkstra",
            Self::BestFirst => "best-first",
            Self::Astar => "astar",
        }
    }

    /// Whether the strategy always returns a cheapest path (given an
    /// admissible heuristic for A*).
    pub fn is_optimal(self) -> bool {
        matches!(self, Self::Dijkstra | Self::Astar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown search strategy \u{201c}{}\u{201d} (expected one of: dfs, bfs, dijkstra, best-first, astar)",
            self.0
        )
    }
}

impl std::error::Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Self::Dfs),
            "bfs" | "breadth-first" => Ok(Self::Bfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "best-first" | "bestfirst" | "greedy" => Ok(Self::BestFirst),
            "astar" | "a*" => Ok(Self::Astar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl PathRange {
    /// Find a path from `from` to `to` with the given strategy.
    ///
    /// Returns the full path (both endpoints included) or `None` if the goal
    /// is unreachable or either endpoint lies outside the range.
    pub fn search<P: AstarPather + ?Sized>(
        &mut self,
        strategy: Strategy,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.search_with(strategy, pather, from, to, &mut Quiet)
    }

    /// Like [`search`](Self::search), reporting node events to `observer`.
    pub fn search_with<P, O>(
        &mut self,
        strategy: Strategy,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
    ) -> Option<Vec<Point>>
    where
        P: AstarPather + ?Sized,
        O: Observer + ?Sized,
    {
        match strategy {
            Strategy::Dfs => self.dfs_path_with(pather, from, to, observer),
            Strategy::Bfs => self.bfs_path_with(pather, from, to, observer),
            Strategy::Dijkstra => self.dijkstra_path_with(pather, from, to, observer),
            Strategy::BestFirst => self.best_first_path_with(pather, from, to, observer),
            Strategy::Astar => self.astar_path_with(pather, from, to, observer),
        }
    }
}

/// Debug-log the outcome of one search.
pub(crate) fn log_outcome(strategy: Strategy, from: Point, to: Point, path: Option<&[Point]>) {
    match path {
        Some(p) => log::debug!("{strategy}: {from} -> {to}: {} nodes", p.len()),
        None => log::debug!("{strategy}: {from} -> {to}: no path"),
    }
}
