//! `cn-graph` — campus graph store, builders, and seed loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`graph`]     | `CampusGraph` (symmetric adjacency + R-tree), `Neighbor`   |
//! | [`builder`]   | `CampusGraphBuilder` (explicit-edge construction)          |
//! | [`proximity`] | `build_proximity_graph` (haversine threshold construction) |
//! | [`seed`]      | `CampusSeed`, `load_seed_json`, `load_seed_reader`         |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Symmetry invariant
//!
//! Every edge is stored in both directions with the same weight.  The only
//! mutators ([`CampusGraph::set_weight`], [`CampusGraph::remove_edge`], and the
//! builder's `add_edge`) always write both directions.

pub mod builder;
pub mod error;
pub mod graph;
pub mod proximity;
pub mod seed;

#[cfg(test)]
mod tests;

pub use builder::CampusGraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{CampusGraph, Neighbor};
pub use proximity::{PROXIMITY_SOFT_LIMIT, build_proximity_graph};
pub use seed::{CampusSeed, EdgeRecord, SeedReport, load_seed_json, load_seed_reader};
