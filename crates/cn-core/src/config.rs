//! Engine configuration.
//!
//! `NavConfig::default()` reproduces the fixed constants the engine has
//! always used.  Applications typically deserialize it from a JSON file and
//! pass it to the service builder.

use crate::{NavError, NavResult, WalkPace, WeightUnit};

// ── DfsLimits ─────────────────────────────────────────────────────────────────

/// Hard caps for bounded DFS path enumeration.
///
/// These stand in for cancellation: enumeration on a pathological graph is
/// bounded by `max_depth`, `max_paths` and `max_fanout` instead of a timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DfsLimits {
    /// Maximum hops in an accepted path.  Default: 6.
    pub max_depth: usize,
    /// Stop after this many accepted paths.  Default: 50.
    pub max_paths: usize,
    /// Only the first `max_fanout` neighbours of a vertex are explored.
    /// Default: 8.
    pub max_fanout: usize,
}

impl Default for DfsLimits {
    fn default() -> Self {
        Self { max_depth: 6, max_paths: 50, max_fanout: 8 }
    }
}

// ── NavConfig ─────────────────────────────────────────────────────────────────

/// Top-level engine configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Proximity builder keeps pairs strictly closer than this.  Default: 0.8 km.
    pub proximity_threshold_km: f64,

    /// Bounded-DFS caps for alternative-route enumeration.
    pub dfs: DfsLimits,

    /// Alternatives returned when a caller does not ask for a count.  Default: 5.
    pub default_alternatives: usize,

    /// Normal walking speed in metres per minute.  Default: 80.
    pub walking_speed_m_per_min: f64,

    /// Emergency walking speed in metres per minute.  Default: 120.
    pub emergency_speed_m_per_min: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            proximity_threshold_km:    0.8,
            dfs:                       DfsLimits::default(),
            default_alternatives:      5,
            walking_speed_m_per_min:   80.0,
            emergency_speed_m_per_min: 120.0,
        }
    }
}

impl NavConfig {
    /// Reject values that would make routing or time estimates meaningless.
    pub fn validate(&self) -> NavResult<()> {
        if !(self.proximity_threshold_km.is_finite() && self.proximity_threshold_km > 0.0) {
            return Err(NavError::Config(format!(
                "proximity_threshold_km must be positive, got {}",
                self.proximity_threshold_km
            )));
        }
        for (what, v) in [
            ("walking_speed_m_per_min", self.walking_speed_m_per_min),
            ("emergency_speed_m_per_min", self.emergency_speed_m_per_min),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(NavError::Config(format!("{what} must be positive, got {v}")));
            }
        }
        if self.dfs.max_depth == 0 || self.dfs.max_paths == 0 || self.dfs.max_fanout == 0 {
            return Err(NavError::Config("dfs limits must all be non-zero".into()));
        }
        Ok(())
    }

    /// Walking-time estimate for a route total under this configuration.
    #[inline]
    pub fn estimate_minutes(&self, total: f64, unit: WeightUnit, pace: WalkPace) -> u32 {
        pace.estimate_minutes(
            total,
            unit,
            self.walking_speed_m_per_min,
            self.emergency_speed_m_per_min,
        )
    }
}
