//! JSON seed document loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "nodes": ["Main Gate", "Library", "Senate Building"],
//!   "edges": [["Main Gate", "Library", 7], ["Library", "Senate Building", 4]],
//!   "coordinates": { "Main Gate": [6.5158, 3.3898], "Library": [6.5190, 3.3972] }
//! }
//! ```
//!
//! All three fields are optional.  The seed is read-only: traffic updates
//! mutate the in-memory graph only, and a reset rebuilds from the seed.
//!
//! # Malformed records
//!
//! Record-level problems never fail the load.  An edge that is not an array
//! of at least `[name, name, weight]` with string names and a finite
//! non-negative weight, a coordinate that is not at least `[lat, lon]`, or a
//! non-string node entry is logged, dropped, and counted in [`SeedReport`].
//! Only unreadable input or invalid JSON produce an error.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;

use cn_core::{GeoPoint, WeightUnit};

use crate::{CampusGraph, CampusGraphBuilder, GraphResult, build_proximity_graph};

// ── Raw document ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawSeed {
    #[serde(default)]
    nodes:       Vec<Value>,
    #[serde(default)]
    edges:       Vec<Value>,
    #[serde(default)]
    coordinates: serde_json::Map<String, Value>,
}

// ── Parsed seed ───────────────────────────────────────────────────────────────

/// One well-formed edge triple from the seed.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeRecord {
    pub a:      String,
    pub b:      String,
    pub weight: f64,
}

/// Counts of records dropped while parsing a seed document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub skipped_locations:   usize,
    pub skipped_edges:       usize,
    pub skipped_coordinates: usize,
}

impl SeedReport {
    pub fn is_clean(&self) -> bool {
        *self == SeedReport::default()
    }
}

/// Validated, immutable static input for graph construction.
#[derive(Clone, Debug, Default)]
pub struct CampusSeed {
    /// Location names in document order, without duplicates.
    pub locations:   Vec<String>,
    /// Well-formed edge triples in document order.
    pub edges:       Vec<EdgeRecord>,
    /// Coordinates by location name.
    pub coordinates: HashMap<String, GeoPoint>,
    /// What was dropped while parsing.
    pub report:      SeedReport,
}

impl CampusSeed {
    /// Parse a seed from a JSON string.
    pub fn from_json_str(json: &str) -> GraphResult<Self> {
        load_seed_reader(json.as_bytes())
    }

    pub fn coordinate(&self, name: &str) -> Option<GeoPoint> {
        self.coordinates.get(name).copied()
    }

    /// Explicit-edge mode: a minute-weighted graph with exactly the seed's
    /// edges, mirrored in both directions.
    ///
    /// Locations come first in `nodes` order; endpoints that only appear in
    /// the edge list are appended as they are met.  Locations without a
    /// coordinate are kept.
    pub fn to_edge_graph(&self) -> CampusGraph {
        let mut b = CampusGraphBuilder::with_capacity(WeightUnit::Minutes, self.locations.len());
        for name in &self.locations {
            b.add_location(name, self.coordinate(name));
        }
        for e in &self.edges {
            let a = b.add_location(&e.a, self.coordinate(&e.a));
            let c = b.add_location(&e.b, self.coordinate(&e.b));
            b.add_edge(a, c, e.weight);
        }
        let graph = b.build();
        info!(
            "edge-list graph loaded: {} locations, {} edges",
            graph.location_count(),
            graph.edge_count()
        );
        graph
    }

    /// Proximity mode: connect every located pair closer than `threshold_km`.
    /// Recomputed from scratch on each call.
    pub fn to_proximity_graph(&self, threshold_km: f64) -> CampusGraph {
        let graph = build_proximity_graph(
            self.locations
                .iter()
                .map(|name| (name.as_str(), self.coordinate(name))),
            threshold_km,
        );
        info!(
            "proximity graph built: {} connected locations, {} edges",
            graph.location_count(),
            graph.edge_count()
        );
        graph
    }

    fn from_raw(raw: RawSeed) -> Self {
        let mut seed = CampusSeed::default();

        // ── Nodes ─────────────────────────────────────────────────────────
        for node in raw.nodes {
            match node {
                Value::String(name) => {
                    if !seed.locations.contains(&name) {
                        seed.locations.push(name);
                    }
                }
                other => {
                    warn!("skipping non-string location entry {other}");
                    seed.report.skipped_locations += 1;
                }
            }
        }

        // ── Edges ─────────────────────────────────────────────────────────
        for edge in raw.edges {
            match parse_edge(&edge) {
                Some(record) => seed.edges.push(record),
                None => {
                    warn!("skipping malformed edge {edge}");
                    seed.report.skipped_edges += 1;
                }
            }
        }

        // ── Coordinates ───────────────────────────────────────────────────
        for (name, value) in raw.coordinates {
            match parse_coordinate(&value) {
                Some(pos) => {
                    seed.coordinates.insert(name, pos);
                }
                None => {
                    warn!("skipping malformed coordinate for {name:?}: {value}");
                    seed.report.skipped_coordinates += 1;
                }
            }
        }

        seed
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a seed document from a JSON file.
pub fn load_seed_json(path: &Path) -> GraphResult<CampusSeed> {
    let file = std::fs::File::open(path)?;
    load_seed_reader(file)
}

/// Like [`load_seed_json`] but accepts any `Read` source.
pub fn load_seed_reader<R: Read>(reader: R) -> GraphResult<CampusSeed> {
    let raw: RawSeed = serde_json::from_reader(reader)?;
    let seed = CampusSeed::from_raw(raw);
    if !seed.report.is_clean() {
        warn!("seed loaded with dropped records: {:?}", seed.report);
    }
    Ok(seed)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_edge(value: &Value) -> Option<EdgeRecord> {
    let items = value.as_array()?;
    if items.len() < 3 {
        return None;
    }
    let a = items[0].as_str()?;
    let b = items[1].as_str()?;
    if a == b {
        return None;
    }
    let weight = items[2].as_f64().filter(|w| w.is_finite() && *w >= 0.0)?;
    Some(EdgeRecord { a: a.to_owned(), b: b.to_owned(), weight })
}

fn parse_coordinate(value: &Value) -> Option<GeoPoint> {
    let items = value.as_array()?;
    if items.len() < 2 {
        return None;
    }
    Some(GeoPoint::new(items[0].as_f64()?, items[1].as_f64()?))
}
