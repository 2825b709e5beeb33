//! **gridwalk-core**: geometry primitives for grid-shaped graphs.
//!
//! A [`Point`] identifies one node of a grid graph and a [`Range`] bounds the
//! region a search may visit. Both are small `Copy` values with stable
//! equality and hashing, so they can key maps for the duration of a search.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
