//! Campus graph representation.
//!
//! # Data layout
//!
//! Locations are interned to dense [`LocationId`]s in insertion order.  Each
//! location owns a `Vec<Neighbor>` in the order its edges were added; that
//! order is observable (bounded DFS only explores the first few neighbours),
//! so it is preserved by every mutator.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest located
//! `LocationId`.  Locations without a coordinate are not indexed.

use std::collections::HashMap;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use cn_core::{GeoPoint, LocationId, WeightUnit};

use crate::CampusGraphBuilder;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a `[lat, lon]` point with the
/// associated `LocationId`.
#[derive(Clone, Debug)]
pub(crate) struct LocationEntry {
    pub(crate) point: [f64; 2], // [lat, lon]
    pub(crate) id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for LocationEntry {
    /// Squared Euclidean distance in lat/lon space.  Ordering-equivalent to
    /// great-circle distance at campus scale.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Neighbor ──────────────────────────────────────────────────────────────────

/// One directed half of a symmetric edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub to:     LocationId,
    pub weight: f64,
}

// ── CampusGraph ───────────────────────────────────────────────────────────────

/// Symmetric weighted campus graph keyed by location name.
///
/// Cloning is cheap at campus scale and is how alternative-route search gets
/// a private working copy it can cut edges from.  Do not construct directly;
/// use [`CampusGraphBuilder`] or one of the seed/proximity constructors.
#[derive(Clone, Debug)]
pub struct CampusGraph {
    pub(crate) names:       Vec<String>,
    pub(crate) index:       HashMap<String, LocationId>,
    pub(crate) coords:      Vec<Option<GeoPoint>>,
    pub(crate) adjacency:   Vec<Vec<Neighbor>>,
    pub(crate) unit:        WeightUnit,
    pub(crate) spatial_idx: RTree<LocationEntry>,
}

impl CampusGraph {
    /// A graph with no locations.  Every routing request against it reports
    /// "location not found".
    pub fn empty() -> Self {
        CampusGraphBuilder::new(WeightUnit::Minutes).build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges (each stored twice internally).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Unit every edge weight in this graph is expressed in.
    pub fn unit(&self) -> WeightUnit {
        self.unit
    }

    // ── Name lookup ───────────────────────────────────────────────────────

    /// Resolve a case-sensitive location name.
    pub fn id(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// `true` if `id` was issued by this graph.
    #[inline]
    pub fn contains_id(&self, id: LocationId) -> bool {
        id.index() < self.names.len()
    }

    /// Name of `id`.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    #[inline]
    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    /// All location names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All location ids in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    /// Map a path of ids back to names.
    pub fn path_names(&self, path: &[LocationId]) -> Vec<String> {
        path.iter().map(|&id| self.name(id).to_owned()).collect()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    pub fn coordinate(&self, id: LocationId) -> Option<GeoPoint> {
        self.coords.get(id.index()).copied().flatten()
    }

    /// Coordinates of the located entries of `path`, in path order.
    /// Locations without a coordinate are skipped.
    pub fn path_coordinates(&self, path: &[LocationId]) -> Vec<GeoPoint> {
        path.iter().filter_map(|&id| self.coordinate(id)).collect()
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Outgoing half-edges of `id` in insertion order.  Empty for unknown ids.
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> &[Neighbor] {
        self.adjacency.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the edge `u → v`, if present.
    pub fn weight(&self, u: LocationId, v: LocationId) -> Option<f64> {
        self.neighbors(u).iter().find(|n| n.to == v).map(|n| n.weight)
    }

    pub fn has_edge(&self, u: LocationId, v: LocationId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Sum of edge weights along `path`, or `None` if any consecutive pair
    /// lacks an edge.  A single-location path weighs zero.
    pub fn path_weight(&self, path: &[LocationId]) -> Option<f64> {
        path.windows(2)
            .map(|w| self.weight(w[0], w[1]))
            .sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Overwrite the weight of edge `u – v` in both directions.
    ///
    /// Returns `false` (and changes nothing) if the edge does not exist.
    pub fn set_weight(&mut self, u: LocationId, v: LocationId, weight: f64) -> bool {
        if !self.has_edge(u, v) || !self.has_edge(v, u) {
            return false;
        }
        for (a, b) in [(u, v), (v, u)] {
            if let Some(n) = self.adjacency[a.index()].iter_mut().find(|n| n.to == b) {
                n.weight = weight;
            }
        }
        true
    }

    /// Delete edge `u – v` in both directions, keeping the relative order of
    /// the remaining neighbours.  Returns `false` if the edge did not exist.
    pub fn remove_edge(&mut self, u: LocationId, v: LocationId) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }
        self.adjacency[u.index()].retain(|n| n.to != v);
        if let Some(list) = self.adjacency.get_mut(v.index()) {
            list.retain(|n| n.to != u);
        }
        true
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The located location nearest to `pos`.
    ///
    /// Returns `None` only if no location has a coordinate.
    pub fn nearest_location(&self, pos: GeoPoint) -> Option<LocationId> {
        self.spatial_idx
            .nearest_neighbor(&pos.to_pair())
            .map(|e| e.id)
    }
}

impl Default for CampusGraph {
    fn default() -> Self {
        Self::empty()
    }
}
