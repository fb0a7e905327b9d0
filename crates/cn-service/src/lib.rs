//! `cn-service` — the campus navigation operations behind one owned facade.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`builder`]   | `NavigatorBuilder`                                        |
//! | [`navigator`] | `Navigator`, `GraphMode`                                  |
//! | [`response`]  | Serializable response types                               |
//! | [`error`]     | `ServiceError`, `ServiceResult<T>`                        |
//!
//! # Operations
//!
//! | Method                | Lock  | Returns                                |
//! |-----------------------|-------|----------------------------------------|
//! | `get_locations`       | read  | `LocationsResponse`                    |
//! | `shortest_path`       | read  | `PathResponse` (optional step trace)   |
//! | `alternative_routes`  | read  | `AlternativesResponse`                 |
//! | `emergency_route`     | read  | `EmergencyResponse`                    |
//! | `nearest_location`    | read  | `Option<NearestLocation>`              |
//! | `graph_info`          | read  | `GraphInfo`                            |
//! | `apply_traffic`       | write | `TrafficReport`                        |
//! | `update_edge`         | write | `bool`                                 |
//! | `reset_graph`         | write | `ResetAck`                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cn_service::{GraphMode, NavigatorBuilder};
//!
//! let nav = NavigatorBuilder::from_json_str(SEED)?.mode(GraphMode::EdgeList).build()?;
//! let resp = nav.shortest_path("Main Gate", "Faculty of Engineering", true);
//! println!("{}", serde_json::to_string_pretty(&resp)?);
//! ```

pub mod builder;
pub mod error;
pub mod navigator;
pub mod response;

#[cfg(test)]
mod tests;

pub use builder::NavigatorBuilder;
pub use error::{ServiceError, ServiceResult};
pub use navigator::{GraphMode, Navigator};
pub use response::{
    AlternativesResponse, CandidateDistance, EmergencyBest, EmergencyResponse, GraphInfo,
    LocationEntry, LocationsResponse, NearestLocation, PathResponse, ResetAck, RouteView, StepView,
};
