//! `cn-traffic` — dynamic edge-weight overrides on top of a baseline graph.
//!
//! # Crate layout
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`condition`] | `TrafficCondition`, `TrafficUpdate`                    |
//! | [`live`]      | `LiveGraph` (baseline + live copy), `EdgeChange`       |
//! | [`report`]    | `TrafficReport`, `UpdateDetail`, `UpdateStatus`        |
//! | [`error`]     | `TrafficError`, `TrafficResult<T>`                     |
//!
//! # Multipliers
//!
//! | Condition       | Multiplier |
//! |-----------------|------------|
//! | `light_traffic` | 1.2        |
//! | `heavy_traffic` | 2.5        |
//! | `construction`  | 3.0        |
//! | `closed`        | 100        |
//! | anything else   | 2.0        |

pub mod condition;
pub mod error;
pub mod live;
pub mod report;


pub use condition::{TrafficCondition, TrafficUpdate, UNKNOWN_CONDITION_MULTIPLIER};
pub use error::{TrafficError, TrafficResult};
pub use live::{EdgeChange, LiveGraph};
pub use report::{TrafficReport, UpdateDetail, UpdateStatus};
