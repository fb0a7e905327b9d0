//! The `Navigator` facade and its operations.
//!
//! # Locking
//!
//! One `parking_lot::RwLock` guards the live graph.  Read operations hold a
//! single read guard for their whole duration, so every answer is computed
//! against one consistent snapshot; traffic updates, edge overwrites and
//! reset take the write guard.

use log::{debug, info};
use parking_lot::RwLock;
use serde::Serialize;

use cn_core::{GeoPoint, NavConfig, WalkPace};
use cn_graph::CampusSeed;
use cn_route::{
    DijkstraRouter, EmergencyCategory, RouteStrategy, Router, StepRecorder, alternative_routes,
    nearest_emergency, resolve,
};
use cn_traffic::{LiveGraph, TrafficReport, TrafficUpdate};

use crate::response::{
    AlternativesResponse, CandidateDistance, EmergencyBest, EmergencyResponse, GraphInfo,
    LocationEntry, LocationsResponse, NearestLocation, PathResponse, ResetAck, RouteView, StepView,
    coordinates,
};
use crate::{ServiceError, ServiceResult};

/// How the graph is derived from the seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Exactly the seed's edges, weighted in minutes.
    #[default]
    EdgeList,
    /// Every located pair closer than the proximity threshold, weighted in
    /// kilometres.
    Proximity,
}

/// Owned campus navigation service.
///
/// Create via [`NavigatorBuilder`][crate::NavigatorBuilder].  All methods
/// take `&self`; share across threads with `Arc<Navigator>`.
pub struct Navigator {
    pub(crate) live:   RwLock<LiveGraph>,
    pub(crate) seed:   CampusSeed,
    pub(crate) config: NavConfig,
    pub(crate) mode:   GraphMode,
}

impl Navigator {
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// The static input the baseline graph was built from.
    pub fn seed(&self) -> &CampusSeed {
        &self.seed
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn get_locations(&self) -> LocationsResponse {
        let live = self.live.read();
        let graph = live.graph();
        let locations: Vec<LocationEntry> = graph
            .locations()
            .map(|id| LocationEntry {
                name:       graph.name(id).to_owned(),
                coordinate: graph.coordinate(id).map(GeoPoint::to_pair),
            })
            .collect();
        LocationsResponse { count: locations.len(), locations }
    }

    /// Shortest route between two named locations, optionally with the full
    /// step trace.
    ///
    /// Unknown names and disconnected endpoints give `found: false`; an
    /// unknown name also gives an empty trace.
    pub fn shortest_path(&self, source: &str, target: &str, with_steps: bool) -> PathResponse {
        let live = self.live.read();
        let graph = live.graph();

        let ids = resolve(graph, source).and_then(|s| Ok((s, resolve(graph, target)?)));
        let (from, to) = match ids {
            Ok(ids) => ids,
            Err(e) => {
                let mut resp = PathResponse::not_found(graph, source, target, e.to_string());
                resp.steps = with_steps.then(Vec::new);
                return resp;
            }
        };

        let (result, steps) = if with_steps {
            let mut recorder = StepRecorder::new(graph);
            let result = DijkstraRouter.route_observed(graph, from, to, &mut recorder);
            let steps = recorder.steps().iter().map(|s| StepView::new(graph, s)).collect();
            (result, Some(steps))
        } else {
            (DijkstraRouter.route(graph, from, to), None)
        };

        let mut resp = match result {
            Ok(route) => PathResponse::found(graph, &self.config, source, target, &route),
            Err(e) => PathResponse::not_found(graph, source, target, e.to_string()),
        };
        resp.steps = steps;
        resp
    }

    /// Up to `k` alternative routes (`None` = the configured default).
    ///
    /// Fails only for `k == 0`.
    pub fn alternative_routes(
        &self,
        source:   &str,
        target:   &str,
        k:        Option<usize>,
        strategy: RouteStrategy,
    ) -> ServiceResult<AlternativesResponse> {
        let k = k.unwrap_or(self.config.default_alternatives);
        if k == 0 {
            return Err(ServiceError::ZeroAlternatives);
        }

        let live = self.live.read();
        let graph = live.graph();
        let alt = alternative_routes(graph, source, target, k, strategy, &self.config.dfs);
        debug!(
            "{} alternatives {source:?} → {target:?}: {} routes",
            strategy.as_str(),
            alt.routes.len()
        );

        Ok(AlternativesResponse {
            source:    source.to_owned(),
            target:    target.to_owned(),
            strategy,
            unit:      graph.unit(),
            routes:    alt
                .routes
                .iter()
                .enumerate()
                .map(|(i, r)| RouteView::new(graph, &self.config, i, r))
                .collect(),
            analysis:  alt.analysis,
            truncated: alt.truncated,
            fell_back: alt.fell_back,
        })
    }

    /// Route from `source` to the nearest reachable destination of
    /// `category` (`medical | security | fire | evacuation`).
    ///
    /// An unknown category is a request error; an unknown source or no
    /// reachable destination gives `found: false`.
    pub fn emergency_route(&self, source: &str, category: &str) -> ServiceResult<EmergencyResponse> {
        let category: EmergencyCategory = category.parse()?;

        let live = self.live.read();
        let graph = live.graph();
        let considered = category
            .candidates()
            .iter()
            .filter(|name| graph.contains(name))
            .map(|name| (*name).to_owned())
            .collect();

        let resp = match nearest_emergency(&DijkstraRouter, graph, source, category) {
            Ok(er) => EmergencyResponse {
                source: source.to_owned(),
                category,
                found: true,
                best_route: Some(EmergencyBest {
                    destination:       graph.name(er.destination).to_owned(),
                    path:              er.route.names(graph),
                    distance:          er.route.distance,
                    estimated_minutes: self.config.estimate_minutes(
                        er.route.distance,
                        graph.unit(),
                        WalkPace::Emergency,
                    ),
                    path_coordinates:  coordinates(graph, &er.route.path),
                }),
                candidates_considered: graph.path_names(&er.considered),
                reachable: er
                    .reachable
                    .iter()
                    .map(|(id, r)| CandidateDistance {
                        name:     graph.name(*id).to_owned(),
                        distance: r.distance,
                    })
                    .collect(),
                error: None,
            },
            Err(e) => EmergencyResponse {
                source: source.to_owned(),
                category,
                found: false,
                best_route: None,
                candidates_considered: considered,
                reachable: Vec::new(),
                error: Some(e.to_string()),
            },
        };
        Ok(resp)
    }

    /// The located location closest to `(lat, lon)`.
    pub fn nearest_location(&self, lat: f64, lon: f64) -> Option<NearestLocation> {
        let live = self.live.read();
        let graph = live.graph();
        let pos = GeoPoint::new(lat, lon);
        let id = graph.nearest_location(pos)?;
        let at = graph.coordinate(id)?;
        Some(NearestLocation {
            name:        graph.name(id).to_owned(),
            coordinate:  at.to_pair(),
            distance_km: pos.distance_km(at),
        })
    }

    pub fn graph_info(&self) -> GraphInfo {
        let live = self.live.read();
        let graph = live.graph();
        GraphInfo {
            mode:           self.mode,
            unit:           graph.unit(),
            locations:      graph.location_count(),
            edges:          graph.edge_count(),
            modified_edges: live.modified_edge_count(),
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Apply traffic conditions; each update is reported individually.
    pub fn apply_traffic(&self, updates: &[TrafficUpdate]) -> TrafficReport {
        self.live.write().apply_updates(updates)
    }

    /// Overwrite one edge's weight in both directions.  `Ok(false)` if the
    /// edge does not exist.
    pub fn update_edge(&self, from: &str, to: &str, weight: f64) -> ServiceResult<bool> {
        Ok(self.live.write().update_edge(from, to, weight)?.is_some())
    }

    /// Discard every override and return to the baseline weights.
    pub fn reset_graph(&self) -> ResetAck {
        let mut live = self.live.write();
        let overrides_discarded = live.modified_edge_count();
        live.reset();
        let graph = live.graph();
        info!("navigator reset: {overrides_discarded} overrides discarded, baseline weights restored");
        ResetAck {
            reset: true,
            locations: graph.location_count(),
            edges: graph.edge_count(),
            overrides_discarded,
        }
    }
}
