//! The live graph: a mutable copy of a baseline snapshot.
//!
//! ```text
//!   seed ──build──▶ baseline ──clone──▶ live ◀── update_edge / apply_condition
//!                      │                  ▲
//!                      └──────reset───────┘
//! ```
//!
//! Conditions always scale the **baseline** weight, so applying the same
//! condition twice leaves the edge where one application put it.  An explicit
//! [`LiveGraph::update_edge`] overwrites the live weight as given.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use cn_core::LocationId;
use cn_graph::CampusGraph;

use crate::{
    TrafficCondition, TrafficError, TrafficReport, TrafficResult, TrafficUpdate, UpdateDetail,
    UpdateStatus,
};

/// Weight change made to a single edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeChange {
    pub baseline: f64,
    pub previous: f64,
    pub current:  f64,
}

#[derive(Clone, Debug)]
pub struct LiveGraph {
    baseline: CampusGraph,
    live:     CampusGraph,
    /// Undirected edges (lower id first) whose live weight was written since
    /// the last reset.
    modified: BTreeSet<(LocationId, LocationId)>,
}

impl LiveGraph {
    pub fn new(baseline: CampusGraph) -> Self {
        Self {
            live: baseline.clone(),
            baseline,
            modified: BTreeSet::new(),
        }
    }

    /// The graph routing requests should see.
    pub fn graph(&self) -> &CampusGraph {
        &self.live
    }

    pub fn baseline(&self) -> &CampusGraph {
        &self.baseline
    }

    /// Number of edges currently overridden.
    pub fn modified_edge_count(&self) -> usize {
        self.modified.len()
    }

    pub fn is_modified(&self) -> bool {
        !self.modified.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Overwrite the weight of edge `from – to` in both directions.
    ///
    /// `Ok(None)` if the edge does not exist (nothing changes).
    pub fn update_edge(
        &mut self,
        from:   &str,
        to:     &str,
        weight: f64,
    ) -> TrafficResult<Option<EdgeChange>> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TrafficError::InvalidWeight(weight));
        }
        let Some((u, v)) = self.edge_ids(from, to) else {
            warn!("update_edge: no edge {from:?} ↔ {to:?}");
            return Ok(None);
        };
        Ok(self.write(u, v, weight))
    }

    /// Set edge `from – to` to its baseline weight scaled by `condition`.
    ///
    /// `Ok(None)` if the edge does not exist.  A multiplier that is not
    /// positive and finite is rejected before anything is written.
    pub fn apply_condition(
        &mut self,
        from:      &str,
        to:        &str,
        condition: &TrafficCondition,
    ) -> TrafficResult<Option<EdgeChange>> {
        let multiplier = condition.multiplier();
        if !multiplier.is_finite() || multiplier <= 0.0 {
            return Err(TrafficError::InvalidMultiplier(multiplier));
        }
        let Some((u, v)) = self.edge_ids(from, to) else {
            warn!("apply_condition: no edge {from:?} ↔ {to:?}");
            return Ok(None);
        };
        let Some(baseline) = self.baseline.weight(u, v) else {
            return Ok(None);
        };
        if let TrafficCondition::Other(name) = condition {
            warn!("unknown traffic condition {name:?}; using x{multiplier}");
        }
        let weight = condition.apply(baseline);
        if !weight.is_finite() {
            return Err(TrafficError::InvalidWeight(weight));
        }
        Ok(self.write(u, v, weight))
    }

    /// Apply a batch of updates in order, reporting each one.
    ///
    /// Invalid requests and missing edges are reported per update and never
    /// abort the batch.
    pub fn apply_updates(&mut self, updates: &[TrafficUpdate]) -> TrafficReport {
        let mut report = TrafficReport::default();
        for update in updates {
            let label = update.condition_label();
            let applied = update
                .resolve()
                .and_then(|condition| self.apply_condition(&update.from, &update.to, &condition));
            let detail = match applied {
                Ok(Some(change)) => {
                    report.applied_count += 1;
                    UpdateDetail {
                        original_weight: Some(change.baseline),
                        new_weight: Some(change.current),
                        ..UpdateDetail::new(&update.from, &update.to, label, UpdateStatus::Updated)
                    }
                }
                Ok(None) => {
                    UpdateDetail::new(&update.from, &update.to, label, UpdateStatus::EdgeNotFound)
                }
                Err(e) => {
                    warn!("rejected traffic update {:?} ↔ {:?}: {e}", update.from, update.to);
                    UpdateDetail {
                        reason: Some(e.to_string()),
                        ..UpdateDetail::new(&update.from, &update.to, label, UpdateStatus::Rejected)
                    }
                }
            };
            report.details.push(detail);
        }
        info!(
            "traffic: {} of {} updates applied, {} edges overridden",
            report.applied_count,
            updates.len(),
            self.modified.len()
        );
        report
    }

    /// Discard every override and return to the baseline snapshot.
    pub fn reset(&mut self) {
        self.live = self.baseline.clone();
        let cleared = std::mem::take(&mut self.modified).len();
        info!("graph reset to baseline ({cleared} overrides discarded)");
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn edge_ids(&self, from: &str, to: &str) -> Option<(LocationId, LocationId)> {
        let u = self.live.id(from)?;
        let v = self.live.id(to)?;
        self.live.has_edge(u, v).then_some((u, v))
    }

    fn write(&mut self, u: LocationId, v: LocationId, weight: f64) -> Option<EdgeChange> {
        let previous = self.live.weight(u, v)?;
        let baseline = self.baseline.weight(u, v).unwrap_or(previous);
        if !self.live.set_weight(u, v, weight) {
            return None;
        }
        self.modified.insert(if u < v { (u, v) } else { (v, u) });
        debug!(
            "edge {} ↔ {}: {previous:.3} → {weight:.3} (baseline {baseline:.3})",
            self.live.name(u),
            self.live.name(v)
        );
        Some(EdgeChange { baseline, previous, current: weight })
    }
}
