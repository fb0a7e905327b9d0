//! `cn-core` — foundational types for the `campus_nav` routing engine.
//!
//! This crate is a dependency of every other `cn-*` crate.  It has no `cn-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`ids`]      | `LocationId`                                           |
//! | [`geo`]      | `GeoPoint`, haversine distance, initial bearing        |
//! | [`pace`]     | `WalkPace`, `WeightUnit`, walking-time estimates       |
//! | [`config`]   | `NavConfig`, `DfsLimits`                               |
//! | [`error`]    | `NavError`, `NavResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `cn-service`.                                  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod pace;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DfsLimits, NavConfig};
pub use error::{NavError, NavResult};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, bearing_deg, haversine_km};
pub use ids::LocationId;
pub use pace::{WalkPace, WeightUnit};
