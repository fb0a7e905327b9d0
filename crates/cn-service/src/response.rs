//! Serializable response types returned by [`Navigator`][crate::Navigator].
//!
//! Locations are reported by name and coordinates as `[lat, lon]` pairs.
//! Absent distances serialize as `null`; no sentinel value is used.

use std::collections::BTreeMap;

use serde::Serialize;

use cn_core::{LocationId, NavConfig, WalkPace, WeightUnit};
use cn_graph::CampusGraph;
use cn_route::{EmergencyCategory, Route, RouteAnalysis, RouteStrategy, StepAction, StepRecord};

use crate::GraphMode;

// ── Locations ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationEntry {
    pub name:       String,
    pub coordinate: Option<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationsResponse {
    /// Graph insertion order.
    pub locations: Vec<LocationEntry>,
    pub count:     usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NearestLocation {
    pub name:        String,
    pub coordinate:  [f64; 2],
    pub distance_km: f64,
}

// ── Shortest path ─────────────────────────────────────────────────────────────

/// One algorithm step, with ids resolved to names.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepView {
    pub step:         usize,
    pub description:  String,
    pub current_node: String,
    /// Tentative distance per location; `null` means not reached yet.
    pub distances:    BTreeMap<String, Option<f64>>,
    pub visited:      Vec<String>,
    pub frontier:     Vec<String>,
    pub action:       StepAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge:         Option<[String; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_path:   Option<Vec<String>>,
}

impl StepView {
    pub(crate) fn new(graph: &CampusGraph, record: &StepRecord) -> Self {
        let name = |id: LocationId| graph.name(id).to_owned();
        Self {
            step:         record.index,
            description:  record.description.clone(),
            current_node: name(record.node),
            distances:    graph
                .names()
                .iter()
                .cloned()
                .zip(record.distances.iter().copied())
                .collect(),
            visited:      graph.path_names(&record.visited),
            frontier:     graph.path_names(&record.frontier),
            action:       record.action,
            edge:         record.edge.map(|(a, b)| [name(a), name(b)]),
            final_path:   record.final_path.as_deref().map(|p| graph.path_names(p)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathResponse {
    pub source:            String,
    pub target:            String,
    pub found:             bool,
    /// Empty when no route exists.
    pub path:              Vec<String>,
    pub distance:          Option<f64>,
    pub unit:              WeightUnit,
    pub estimated_minutes: Option<u32>,
    pub path_coordinates:  Vec<[f64; 2]>,
    /// Initial bearing of each leg whose endpoints are both located.
    pub bearings:          Vec<f64>,
    pub turns:             usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps:             Option<Vec<StepView>>,
    /// Why `found` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:             Option<String>,
}

impl PathResponse {
    pub(crate) fn found(
        graph:  &CampusGraph,
        config: &NavConfig,
        source: &str,
        target: &str,
        route:  &Route,
    ) -> Self {
        Self {
            source:            source.to_owned(),
            target:            target.to_owned(),
            found:             true,
            path:              route.names(graph),
            distance:          Some(route.distance),
            unit:              graph.unit(),
            estimated_minutes: Some(config.estimate_minutes(
                route.distance,
                graph.unit(),
                WalkPace::Normal,
            )),
            path_coordinates:  coordinates(graph, &route.path),
            bearings:          leg_bearings(graph, &route.path),
            turns:             route.hops(),
            steps:             None,
            error:             None,
        }
    }

    pub(crate) fn not_found(graph: &CampusGraph, source: &str, target: &str, error: String) -> Self {
        Self {
            source:            source.to_owned(),
            target:            target.to_owned(),
            found:             false,
            path:              Vec::new(),
            distance:          None,
            unit:              graph.unit(),
            estimated_minutes: None,
            path_coordinates:  Vec::new(),
            bearings:          Vec::new(),
            turns:             0,
            steps:             None,
            error:             Some(error),
        }
    }
}

// ── Alternatives ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteView {
    /// 1-based, ascending by distance.
    pub rank:              usize,
    pub path:              Vec<String>,
    pub distance:          f64,
    pub estimated_minutes: u32,
    pub path_coordinates:  Vec<[f64; 2]>,
    pub turns:             usize,
    pub is_optimal:        bool,
}

impl RouteView {
    pub(crate) fn new(graph: &CampusGraph, config: &NavConfig, index: usize, route: &Route) -> Self {
        Self {
            rank:              index + 1,
            path:              route.names(graph),
            distance:          route.distance,
            estimated_minutes: config.estimate_minutes(route.distance, graph.unit(), WalkPace::Normal),
            path_coordinates:  coordinates(graph, &route.path),
            turns:             route.hops(),
            is_optimal:        index == 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlternativesResponse {
    pub source:    String,
    pub target:    String,
    pub strategy:  RouteStrategy,
    pub unit:      WeightUnit,
    /// Empty when either endpoint is unknown or they are not connected.
    pub routes:    Vec<RouteView>,
    pub analysis:  Option<RouteAnalysis>,
    pub truncated: bool,
    pub fell_back: bool,
}

// ── Emergency ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CandidateDistance {
    pub name:     String,
    pub distance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmergencyBest {
    pub destination:       String,
    pub path:              Vec<String>,
    pub distance:          f64,
    /// At emergency walking pace.
    pub estimated_minutes: u32,
    pub path_coordinates:  Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmergencyResponse {
    pub source:                String,
    pub category:              EmergencyCategory,
    pub found:                 bool,
    pub best_route:            Option<EmergencyBest>,
    /// Candidates present in the graph, in table order.
    pub candidates_considered: Vec<String>,
    /// Reachable candidates, ascending by distance.
    pub reachable:             Vec<CandidateDistance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:                 Option<String>,
}

// ── Graph state ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ResetAck {
    pub reset:               bool,
    pub locations:           usize,
    pub edges:               usize,
    pub overrides_discarded: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GraphInfo {
    pub mode:           GraphMode,
    pub unit:           WeightUnit,
    pub locations:      usize,
    pub edges:          usize,
    /// Edges currently carrying a traffic override.
    pub modified_edges: usize,
}

// ── Geometry helpers ──────────────────────────────────────────────────────────

pub(crate) fn coordinates(graph: &CampusGraph, path: &[LocationId]) -> Vec<[f64; 2]> {
    graph
        .path_coordinates(path)
        .into_iter()
        .map(|p| p.to_pair())
        .collect()
}

fn leg_bearings(graph: &CampusGraph, path: &[LocationId]) -> Vec<f64> {
    path.windows(2)
        .filter_map(|w| {
            let from = graph.coordinate(w[0])?;
            let to = graph.coordinate(w[1])?;
            Some(from.bearing_to(to))
        })
        .collect()
}
