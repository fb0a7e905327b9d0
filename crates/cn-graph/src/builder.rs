//! Incremental construction of a [`CampusGraph`].

use std::collections::HashMap;

use log::{debug, warn};
use rstar::RTree;

use cn_core::{GeoPoint, LocationId, WeightUnit};

use crate::graph::{CampusGraph, LocationEntry, Neighbor};

/// Construct a [`CampusGraph`] incrementally, then call [`build`](Self::build).
///
/// Edges are always symmetric: [`add_edge`](Self::add_edge) inserts both
/// directions with the same weight.  Re-adding an existing edge overwrites its
/// weight in place, so neighbour order reflects first insertion.
///
/// # Example
///
/// ```
/// use cn_core::{GeoPoint, WeightUnit};
/// use cn_graph::CampusGraphBuilder;
///
/// let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
/// let gate = b.add_location("Main Gate", Some(GeoPoint::new(6.5158, 3.3898)));
/// let lib  = b.add_location("Library", None);
/// b.add_edge(gate, lib, 7.0);
/// let g = b.build();
/// assert_eq!(g.location_count(), 2);
/// assert_eq!(g.edge_count(), 1);
/// ```
pub struct CampusGraphBuilder {
    unit:      WeightUnit,
    names:     Vec<String>,
    index:     HashMap<String, LocationId>,
    coords:    Vec<Option<GeoPoint>>,
    adjacency: Vec<Vec<Neighbor>>,
}

impl CampusGraphBuilder {
    pub fn new(unit: WeightUnit) -> Self {
        Self {
            unit,
            names:     Vec::new(),
            index:     HashMap::new(),
            coords:    Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of locations.
    pub fn with_capacity(unit: WeightUnit, locations: usize) -> Self {
        Self {
            unit,
            names:     Vec::with_capacity(locations),
            index:     HashMap::with_capacity(locations),
            coords:    Vec::with_capacity(locations),
            adjacency: Vec::with_capacity(locations),
        }
    }

    /// Add a location and return its id.
    ///
    /// Adding an existing name returns the existing id; a `Some` coordinate
    /// replaces the stored one, `None` leaves it untouched.
    pub fn add_location(&mut self, name: &str, coord: Option<GeoPoint>) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            if coord.is_some() {
                self.coords[id.index()] = coord;
            }
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.index.insert(name.to_owned(), id);
        self.coords.push(coord);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add a symmetric edge `a – b`.
    ///
    /// Self-loops and negative or non-finite weights are rejected with a
    /// warning and `false` is returned.
    pub fn add_edge(&mut self, a: LocationId, b: LocationId, weight: f64) -> bool {
        if a == b {
            warn!("skipping self-loop on {:?}", self.names[a.index()]);
            return false;
        }
        if !weight.is_finite() || weight < 0.0 {
            warn!(
                "skipping edge {:?} – {:?}: invalid weight {weight}",
                self.names[a.index()],
                self.names[b.index()]
            );
            return false;
        }
        self.upsert_half(a, b, weight);
        self.upsert_half(b, a, weight);
        true
    }

    /// Convenience: add both endpoints by name (if new) and the edge between
    /// them.
    pub fn add_edge_by_name(&mut self, a: &str, b: &str, weight: f64) -> bool {
        let a = self.add_location(a, None);
        let b = self.add_location(b, None);
        self.add_edge(a, b, weight)
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Consume the builder and produce a [`CampusGraph`], bulk-loading the
    /// R-tree over located locations.
    pub fn build(self) -> CampusGraph {
        let entries: Vec<LocationEntry> = self
            .coords
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                c.map(|pos| LocationEntry { point: pos.to_pair(), id: LocationId(i as u32) })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let graph = CampusGraph {
            names:     self.names,
            index:     self.index,
            coords:    self.coords,
            adjacency: self.adjacency,
            unit:      self.unit,
            spatial_idx,
        };
        debug!(
            "campus graph built: {} locations, {} edges ({})",
            graph.location_count(),
            graph.edge_count(),
            graph.unit()
        );
        graph
    }

    fn upsert_half(&mut self, from: LocationId, to: LocationId, weight: f64) {
        let list = &mut self.adjacency[from.index()];
        match list.iter_mut().find(|n| n.to == to) {
            Some(n) => n.weight = weight,
            None => list.push(Neighbor { to, weight }),
        }
    }
}
