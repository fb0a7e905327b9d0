//! Walking pace and edge-weight units shared by routing and presentation.
//!
//! Edge weights mean different things depending on how the graph was built:
//! explicit edge lists carry walking minutes, the proximity builder carries
//! great-circle kilometres.  [`WeightUnit`] records which, and
//! [`WalkPace::estimate_minutes`] turns a route total into a time estimate.

/// Unit of every edge weight in one graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightUnit {
    /// Walking minutes at normal pace (explicit edge lists).
    #[default]
    Minutes,
    /// Great-circle kilometres (proximity-built graphs).
    Kilometres,
}

impl WeightUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightUnit::Minutes    => "minutes",
            WeightUnit::Kilometres => "kilometres",
        }
    }
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How fast the traveller is assumed to walk.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WalkPace {
    /// Everyday routing.
    #[default]
    Normal,
    /// Emergency routing; uses the faster configured speed.
    Emergency,
}

impl WalkPace {
    /// Estimated whole minutes to cover `total` weight units.
    ///
    /// - `Kilometres`: `max(1, floor(metres / speed))`.
    /// - `Minutes`: weights are already normal-pace minutes; emergency pace
    ///   scales them by `normal_speed / emergency_speed`.
    ///
    /// A zero-length route is estimated at zero minutes.
    pub fn estimate_minutes(
        self,
        total:                f64,
        unit:                 WeightUnit,
        normal_speed_m_min:   f64,
        emergency_speed_m_min: f64,
    ) -> u32 {
        if total <= 0.0 {
            return 0;
        }
        let speed = match self {
            WalkPace::Normal    => normal_speed_m_min,
            WalkPace::Emergency => emergency_speed_m_min,
        };
        let minutes = match unit {
            WeightUnit::Kilometres => total * 1_000.0 / speed,
            WeightUnit::Minutes    => total * normal_speed_m_min / speed,
        };
        (minutes.floor() as u32).max(1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WalkPace::Normal    => "normal",
            WalkPace::Emergency => "emergency",
        }
    }
}

impl std::fmt::Display for WalkPace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
