use std::collections::VecDeque;

use gridwalk_core::{Point, Range};

use crate::queue::PriorityQueue;

/// Parent index of a node that has no predecessor (the start node).
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-cell bookkeeping shared by every strategy
// ---------------------------------------------------------------------------

/// Cost, predecessor and visited state of one cell.
///
/// A node belongs to the current search only when its `generation` equals
/// [`PathRange::generation`]; anything else reads as "never seen".
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// Best known cumulative cost (DFS/BFS: depth in steps).
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Still waiting in the frontier. Cleared on expansion, set again when
    /// the node is relaxed to a cheaper cost.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Search engine bound to a grid rectangle.
///
/// Nodes are mapped to dense indices into arenas sized to the range, which
/// serve as the cost map, predecessor map and visited set of every search.
/// Starting a search bumps a generation counter, so each call observes fresh
/// bookkeeping while the allocations are reused.
///
/// Methods take `&mut self`: a `PathRange` runs one search at a time. Use
/// one `PathRange` per thread to search concurrently over a shared graph.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // frontier caches
    pub(crate) stack: Vec<usize>,
    pub(crate) fifo: VecDeque<usize>,
    pub(crate) open: PriorityQueue<usize>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            stack: Vec::new(),
            fifo: VecDeque::new(),
            open: PriorityQueue::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new range fits within the existing arena only the generation
    /// is bumped; otherwise the arena is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.begin();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle searches are confined to.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Cost recorded for `p` by the last search, or `None` if the last
    /// search never reached it.
    ///
    /// For cost-guided strategies this is the best cumulative entry cost
    /// found; for DFS and BFS it is the number of steps taken.
    pub fn cost_at(&self, p: Point) -> Option<i32> {
        let i = self.idx(p)?;
        self.seen(i).then(|| self.nodes[i].g)
    }

    /// Rebuild the path from the last search's start to `p` by following
    /// recorded predecessors.
    ///
    /// Returns `None` if `p` was not reached by the last search.
    pub fn path_to(&self, p: Point) -> Option<Vec<Point>> {
        self.trace_path(self.idx(p)?)
    }

    // -----------------------------------------------------------------------
    // Bookkeeping helpers
    // -----------------------------------------------------------------------

    /// Start a fresh search: every node becomes unseen.
    pub(crate) fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped around: stale stamps could now collide.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
    }

    /// Whether node `i` was reached during the current search.
    ///
    /// Generation 0 means no search has run since the arena was allocated.
    #[inline]
    pub(crate) fn seen(&self, i: usize) -> bool {
        self.generation != 0 && self.nodes[i].generation == self.generation
    }

    /// Record cost `g` and predecessor `parent` for node `i` and mark it
    /// open in the current search.
    #[inline]
    pub(crate) fn mark(&mut self, i: usize, g: i32, parent: usize) {
        let generation = self.generation;
        let n = &mut self.nodes[i];
        n.g = g;
        n.parent = parent;
        n.generation = generation;
        n.open = true;
    }

    /// Resolve both endpoints to indices, rejecting points outside the range.
    pub(crate) fn endpoints(&self, from: Point, to: Point) -> Option<(usize, usize)> {
        let Some(si) = self.idx(from) else {
            log::trace!("start {from} outside search range {}", self.rng);
            return None;
        };
        let Some(gi) = self.idx(to) else {
            log::trace!("goal {to} outside search range {}", self.rng);
            return None;
        };
        Some((si, gi))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range = <Range as serde::Deserialize>::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
