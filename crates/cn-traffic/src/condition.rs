//! Named traffic conditions and update requests.

use std::fmt;

use crate::{TrafficError, TrafficResult};

// ── TrafficCondition ──────────────────────────────────────────────────────────

/// What is happening on an edge, expressed as a multiplier on its baseline
/// weight.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TrafficCondition {
    /// ×1.2
    LightTraffic,
    /// ×2.5; also what an update with no condition means.
    #[default]
    HeavyTraffic,
    /// ×3.0
    Construction,
    /// ×100; the edge stays traversable but is effectively avoided.
    Closed,
    /// Unrecognised condition name; scaled by [`UNKNOWN_CONDITION_MULTIPLIER`].
    Other(String),
    /// Caller-supplied multiplier.
    Custom(f64),
}

/// Multiplier applied for condition names that are not recognised.
pub const UNKNOWN_CONDITION_MULTIPLIER: f64 = 2.0;

impl TrafficCondition {
    /// Parse a condition name (`light_traffic | heavy_traffic | construction |
    /// closed`).  Anything else becomes [`TrafficCondition::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "light_traffic" => TrafficCondition::LightTraffic,
            "heavy_traffic" => TrafficCondition::HeavyTraffic,
            "construction"  => TrafficCondition::Construction,
            "closed"        => TrafficCondition::Closed,
            other           => TrafficCondition::Other(other.to_owned()),
        }
    }

    /// Validated explicit multiplier.
    pub fn custom(multiplier: f64) -> TrafficResult<Self> {
        if multiplier.is_finite() && multiplier > 0.0 {
            Ok(TrafficCondition::Custom(multiplier))
        } else {
            Err(TrafficError::InvalidMultiplier(multiplier))
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            TrafficCondition::LightTraffic => 1.2,
            TrafficCondition::HeavyTraffic => 2.5,
            TrafficCondition::Construction => 3.0,
            TrafficCondition::Closed       => 100.0,
            TrafficCondition::Other(_)     => UNKNOWN_CONDITION_MULTIPLIER,
            TrafficCondition::Custom(m)    => *m,
        }
    }

    /// Weight of an edge whose baseline weight is `baseline`.
    #[inline]
    pub fn apply(&self, baseline: f64) -> f64 {
        baseline * self.multiplier()
    }
}

impl fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrafficCondition::LightTraffic => f.write_str("light_traffic"),
            TrafficCondition::HeavyTraffic => f.write_str("heavy_traffic"),
            TrafficCondition::Construction => f.write_str("construction"),
            TrafficCondition::Closed       => f.write_str("closed"),
            TrafficCondition::Other(name)  => f.write_str(name),
            TrafficCondition::Custom(m)    => write!(f, "custom x{m}"),
        }
    }
}

// ── TrafficUpdate ─────────────────────────────────────────────────────────────

/// One requested change: scale edge `from – to` by a named condition or an
/// explicit multiplier.
///
/// An explicit `multiplier` wins over `condition`; with neither, the update
/// means `heavy_traffic`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficUpdate {
    pub from:       String,
    pub to:         String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub condition:  Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub multiplier: Option<f64>,
}

impl TrafficUpdate {
    pub fn named(from: &str, to: &str, condition: &str) -> Self {
        Self {
            from:      from.to_owned(),
            to:        to.to_owned(),
            condition: Some(condition.to_owned()),
            ..Self::default()
        }
    }

    pub fn scaled(from: &str, to: &str, multiplier: f64) -> Self {
        Self {
            from:       from.to_owned(),
            to:         to.to_owned(),
            multiplier: Some(multiplier),
            ..Self::default()
        }
    }

    /// The condition this update asks for.
    pub fn resolve(&self) -> TrafficResult<TrafficCondition> {
        match (self.multiplier, self.condition.as_deref()) {
            (Some(m), _)       => TrafficCondition::custom(m),
            (None, Some(name)) => Ok(TrafficCondition::from_name(name)),
            (None, None)       => Ok(TrafficCondition::default()),
        }
    }

    /// Label reported back for this update: the condition name as given, or
    /// `heavy_traffic` when none was.
    pub fn condition_label(&self) -> String {
        self.condition
            .clone()
            .unwrap_or_else(|| TrafficCondition::default().to_string())
    }
}
