//! `cn-route` — shortest paths, alternatives, and emergency routing.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`route`]        | `Route`                                                    |
//! | [`dijkstra`]     | `Router` trait, `DijkstraRouter`, `resolve`                |
//! | [`observer`]     | `SearchObserver`, `NoopObserver`, `StepRecorder`, `StepRecord` |
//! | [`enumerate`]    | Bounded DFS enumeration, `RouteAnalysis`                   |
//! | [`edge_removal`] | Iterative single-edge-removal alternatives                 |
//! | [`alternatives`] | `alternative_routes` facade, `RouteStrategy`               |
//! | [`emergency`]    | `EmergencyCategory`, `nearest_emergency`                   |
//! | [`error`]        | `RouteError`, `RouteResult<T>`                             |
//!
//! Every search runs on an immutable `&CampusGraph` snapshot.  Strategies
//! that need to cut edges work on a private clone, never on the caller's
//! graph.

pub mod alternatives;
pub mod dijkstra;
pub mod edge_removal;
pub mod emergency;
pub mod enumerate;
pub mod error;
pub mod observer;
pub mod route;


pub use alternatives::{AlternativeRoutes, RouteStrategy, alternative_routes};
pub use dijkstra::{DijkstraRouter, Router, resolve};
pub use edge_removal::edge_removal_routes;
pub use emergency::{EmergencyCategory, EmergencyRoute, nearest_emergency};
pub use enumerate::{Enumeration, RouteAnalysis, enumerate_simple_paths};
pub use error::{RouteError, RouteResult};
pub use observer::{NoopObserver, SearchObserver, SearchState, StepAction, StepRecord, StepRecorder};
pub use route::Route;
