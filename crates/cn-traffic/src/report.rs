//! Per-update outcome reporting.

/// Outcome of one [`TrafficUpdate`][crate::TrafficUpdate].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpdateStatus {
    Updated,
    /// No such edge (or no such location); nothing changed.
    EdgeNotFound,
    /// The request itself was invalid (e.g. a negative multiplier).
    Rejected,
}

impl UpdateStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateStatus::Updated      => "updated",
            UpdateStatus::EdgeNotFound => "edge_not_found",
            UpdateStatus::Rejected     => "rejected",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateDetail {
    /// `"A ↔ B"`.
    pub edge:            String,
    pub condition:       String,
    pub status:          UpdateStatus,
    /// Baseline weight the multiplier was applied to.
    pub original_weight: Option<f64>,
    pub new_weight:      Option<f64>,
    /// Why the update was rejected.
    pub reason:          Option<String>,
}

impl UpdateDetail {
    pub(crate) fn new(from: &str, to: &str, condition: String, status: UpdateStatus) -> Self {
        Self {
            edge: format!("{from} ↔ {to}"),
            condition,
            status,
            original_weight: None,
            new_weight: None,
            reason: None,
        }
    }
}

/// Summary of a batch of traffic updates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficReport {
    /// Number of details with status `updated`.
    pub applied_count: usize,
    /// One entry per requested update, in request order.
    pub details:       Vec<UpdateDetail>,
}
