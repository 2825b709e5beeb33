//! Path search on grid-shaped graphs.
//!
//! This crate finds a path between two cells of a grid graph with one of
//! five interchangeable strategies:
//!
//! - **Depth-first** ([`PathRange::dfs_path`]): any path, following neighbor order
//! - **Breadth-first** ([`PathRange::bfs_path`]): fewest steps
//! - **Dijkstra** ([`PathRange::dijkstra_path`]): cheapest by entry cost
//! - **Greedy best-first** ([`PathRange::best_first_path`]): heuristic-driven, fast
//! - **A\*** ([`PathRange::astar_path`]): cheapest, heuristic-guided
//!
//! [`PathRange::search`] picks one at runtime from a [`Strategy`]. Every
//! search returns the path from start to goal inclusive, or `None` when the
//! goal cannot be reached.
//!
//! All strategies run through [`PathRange`], which owns the cost,
//! predecessor and visited arenas and reuses them across searches.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | DFS, BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | greedy best-first, A* |
//!
//! [`CostGrid`] implements all three for a plain grid of per-cell costs.
//!
//! # Example
//!
//! ```
//! use gridwalk_core::Point;
//! use gridwalk_paths::{CostGrid, PathRange, Strategy, path_cost};
//!
//! let grid = CostGrid::parse(
//!     "\
//! ..#.
//! ..#.
//! ....",
//! )
//! .unwrap();
//! let mut pr = PathRange::new(grid.range());
//! let path = pr
//!     .search(Strategy::Astar, &grid, Point::new(0, 0), Point::new(3, 0))
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(3, 0)));
//! assert_eq!(path_cost(&grid, &path), 7);
//! ```

mod astar;
mod bestfirst;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod grid;
mod neighbors;
mod observer;
mod pathrange;
mod queue;
mod relax;
mod strategy;
mod trace;
mod traits;

pub use distance::{chebyshev, euclidean, manhattan};
pub use grid::{Connectivity, CostGrid, GridError};
pub use neighbors::Neighbors;
pub use observer::{Observer, Quiet, Visit};
pub use pathrange::PathRange;
pub use queue::{PriorityQueue, QueueError};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::{AstarPather, Pather, WeightedPather, path_cost};
