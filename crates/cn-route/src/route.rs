//! The result of a routing query.

use std::collections::HashSet;

use cn_core::LocationId;
use cn_graph::CampusGraph;

/// An ordered walk from a source to a target plus its total weight.
///
/// `path[0]` is the source and `path[last]` the target.  A route from a
/// location to itself is `[X]` with distance 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path:     Vec<LocationId>,
    /// Sum of edge weights along `path`, in the graph's weight unit.
    pub distance: f64,
}

impl Route {
    /// The zero-length route `[at]`.
    pub fn trivial(at: LocationId) -> Self {
        Self { path: vec![at], distance: 0.0 }
    }

    pub fn source(&self) -> Option<LocationId> {
        self.path.first().copied()
    }

    pub fn target(&self) -> Option<LocationId> {
        self.path.last().copied()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if the source and target are the same location.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// `true` if no location repeats.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.path.len());
        self.path.iter().all(|id| seen.insert(*id))
    }

    /// Location names along the path.
    pub fn names(&self, graph: &CampusGraph) -> Vec<String> {
        graph.path_names(&self.path)
    }

    /// `true` if `edge` (either direction) is one of this route's legs.
    pub fn uses_edge(&self, a: LocationId, b: LocationId) -> bool {
        self.path
            .windows(2)
            .any(|w| (w[0] == a && w[1] == b) || (w[0] == b && w[1] == a))
    }
}
