//! Unit tests for cn-service.

#[cfg(test)]
mod helpers {
    use crate::{GraphMode, Navigator, NavigatorBuilder};

    /// ```text
    ///   Main Gate —2— Security Post —4— Administrative Block —3— University Library
    ///      |                                  |                        |
    ///      13                                 6                        5
    ///      |                                  |                        |
    ///   Sports Complex ———————4——————— Health Centre     Faculty of Engineering
    ///      └──────────────────────2───────────────────────────────────┘
    ///
    ///   Lagoon Front: isolated, far from everything.
    /// ```
    pub const SEED: &str = r#"{
        "nodes": [
            "Main Gate", "Security Post", "Administrative Block", "University Library",
            "Health Centre", "Sports Complex", "Faculty of Engineering", "Lagoon Front"
        ],
        "edges": [
            ["Main Gate", "Security Post", 2],
            ["Security Post", "Administrative Block", 4],
            ["Administrative Block", "University Library", 3],
            ["University Library", "Faculty of Engineering", 5],
            ["Administrative Block", "Health Centre", 6],
            ["Health Centre", "Sports Complex", 4],
            ["Sports Complex", "Faculty of Engineering", 2],
            ["Main Gate", "Sports Complex", 13]
        ],
        "coordinates": {
            "Main Gate":              [6.5180, 3.3850],
            "Security Post":          [6.5175, 3.3870],
            "Administrative Block":   [6.5160, 3.3900],
            "University Library":     [6.5150, 3.3920],
            "Health Centre":          [6.5140, 3.3880],
            "Sports Complex":         [6.5120, 3.3860],
            "Faculty of Engineering": [6.5130, 3.3940],
            "Lagoon Front":           [6.5300, 3.4100]
        }
    }"#;

    pub fn navigator() -> Navigator {
        NavigatorBuilder::from_json_str(SEED).unwrap().build().unwrap()
    }

    pub fn proximity_navigator() -> Navigator {
        NavigatorBuilder::from_json_str(SEED)
            .unwrap()
            .mode(GraphMode::Proximity)
            .build()
            .unwrap()
    }

    pub fn names(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| s.to_string()).collect()
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use cn_core::{NavConfig, WeightUnit};

    use super::helpers::{SEED, navigator, proximity_navigator};
    use crate::{GraphMode, NavigatorBuilder, ServiceError};

    #[test]
    fn edge_list_defaults() {
        let nav = navigator();
        let info = nav.graph_info();
        assert_eq!(info.mode, GraphMode::EdgeList);
        assert_eq!(info.unit, WeightUnit::Minutes);
        assert_eq!(info.locations, 8);
        assert_eq!(info.edges, 8);
        assert_eq!(info.modified_edges, 0);
        assert!(nav.seed().report.is_clean());
    }

    #[test]
    fn proximity_drops_isolated_locations() {
        let nav = proximity_navigator();
        let info = nav.graph_info();
        assert_eq!(info.unit, WeightUnit::Kilometres);
        assert_eq!(info.locations, 7);
        assert!(!nav.get_locations().locations.iter().any(|l| l.name == "Lagoon Front"));
    }

    #[test]
    fn invalid_config_rejected() {
        let config = NavConfig { proximity_threshold_km: 0.0, ..NavConfig::default() };
        let err = NavigatorBuilder::from_json_str(SEED).unwrap().config(config).build();
        assert!(matches!(err, Err(ServiceError::Config(_))));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            NavigatorBuilder::from_json_str("{ nodes"),
            Err(ServiceError::Seed(_))
        ));
    }
}

// ── Locations ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod locations {
    use super::helpers::navigator;

    #[test]
    fn catalogue_in_seed_order() {
        let resp = navigator().get_locations();
        assert_eq!(resp.count, 8);
        assert_eq!(resp.locations[0].name, "Main Gate");
        assert_eq!(resp.locations[0].coordinate, Some([6.5180, 3.3850]));
        assert_eq!(resp.locations[7].name, "Lagoon Front");
    }

    #[test]
    fn nearest_location_snaps() {
        let nav = navigator();
        let near = nav.nearest_location(6.5151, 3.3921).unwrap();
        assert_eq!(near.name, "University Library");
        assert!(near.distance_km < 0.05);
    }
}

// ── Shortest path ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest {
    use cn_route::StepAction;

    use super::helpers::{names, navigator, proximity_navigator};

    const ROUTE: [&str; 5] = [
        "Main Gate",
        "Security Post",
        "Administrative Block",
        "University Library",
        "Faculty of Engineering",
    ];

    #[test]
    fn found_route_details() {
        let resp = navigator().shortest_path("Main Gate", "Faculty of Engineering", false);
        assert!(resp.found);
        assert_eq!(resp.path, names(&ROUTE));
        assert_eq!(resp.distance, Some(14.0));
        assert_eq!(resp.estimated_minutes, Some(14));
        assert_eq!(resp.turns, 4);
        assert_eq!(resp.path_coordinates.len(), 5);
        assert_eq!(resp.bearings.len(), 4);
        assert!(resp.bearings.iter().all(|b| (0.0..360.0).contains(b)));
        assert!(resp.steps.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn traced_route_matches_untraced() {
        let nav = navigator();
        let plain = nav.shortest_path("Main Gate", "Faculty of Engineering", false);
        let traced = nav.shortest_path("Main Gate", "Faculty of Engineering", true);
        assert_eq!(traced.path, plain.path);
        assert_eq!(traced.distance, plain.distance);

        let steps = traced.steps.unwrap();
        assert_eq!(steps.first().unwrap().action, StepAction::Initialize);
        let last = steps.last().unwrap();
        assert_eq!(last.action, StepAction::Complete);
        assert_eq!(last.final_path.as_ref(), Some(&plain.path));
        assert_eq!(steps[0].distances["Main Gate"], Some(0.0));
        assert_eq!(steps[0].distances["Lagoon Front"], None);
    }

    #[test]
    fn unknown_location() {
        let resp = navigator().shortest_path("Main Gate", "Nowhere", true);
        assert!(!resp.found);
        assert!(resp.path.is_empty());
        assert_eq!(resp.distance, None);
        assert_eq!(resp.steps, Some(Vec::new()));
        assert!(resp.error.unwrap().contains("not found"));
    }

    #[test]
    fn unreachable_location() {
        let resp = navigator().shortest_path("Main Gate", "Lagoon Front", false);
        assert!(!resp.found);
        assert!(resp.path.is_empty());
        assert!(resp.error.unwrap().contains("no route"));
    }

    #[test]
    fn same_location() {
        let resp = navigator().shortest_path("Main Gate", "Main Gate", false);
        assert!(resp.found);
        assert_eq!(resp.path, names(&["Main Gate"]));
        assert_eq!(resp.distance, Some(0.0));
        assert_eq!(resp.estimated_minutes, Some(0));
    }

    #[test]
    fn proximity_route_in_kilometres() {
        let resp = proximity_navigator().shortest_path("Main Gate", "Faculty of Engineering", false);
        assert!(resp.found);
        let km = resp.distance.unwrap();
        assert!(km > 1.0 && km < 2.0, "got {km}");
        assert!(resp.estimated_minutes.unwrap() >= 1);
    }
}

// ── Alternatives ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod alternatives {
    use cn_route::RouteStrategy;

    use super::helpers::navigator;
    use crate::ServiceError;

    #[test]
    fn ranked_enumeration() {
        let resp = navigator()
            .alternative_routes("Main Gate", "Faculty of Engineering", Some(3), RouteStrategy::Enumerate)
            .unwrap();
        assert_eq!(resp.routes.len(), 3);
        let ranks: Vec<usize> = resp.routes.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, [1, 2, 3]);
        assert!(resp.routes[0].is_optimal);
        assert!(!resp.routes[1].is_optimal);
        let distances: Vec<f64> = resp.routes.iter().map(|r| r.distance).collect();
        assert_eq!(distances, [14.0, 15.0, 18.0]);

        let analysis = resp.analysis.unwrap();
        assert_eq!(analysis.routes_found, 4);
        assert_eq!(analysis.optimal_distance, 14.0);
        assert_eq!(analysis.longest_distance, 31.0);
    }

    #[test]
    fn default_count_and_edge_removal() {
        let nav = navigator();
        let resp = nav
            .alternative_routes("Main Gate", "Faculty of Engineering", None, RouteStrategy::EdgeRemoval)
            .unwrap();
        assert!(!resp.routes.is_empty() && resp.routes.len() <= 5);
        for (i, r) in resp.routes.iter().enumerate() {
            assert!(resp.routes[i + 1..].iter().all(|o| o.path != r.path));
        }
    }

    #[test]
    fn zero_is_rejected() {
        let err = navigator()
            .alternative_routes("Main Gate", "Sports Complex", Some(0), RouteStrategy::Enumerate)
            .unwrap_err();
        assert!(matches!(err, ServiceError::ZeroAlternatives));
    }

    #[test]
    fn no_route_is_empty() {
        let nav = navigator();
        for target in ["Nowhere", "Lagoon Front"] {
            let resp = nav
                .alternative_routes("Main Gate", target, Some(3), RouteStrategy::Enumerate)
                .unwrap();
            assert!(resp.routes.is_empty());
            assert!(resp.analysis.is_none());
        }
    }
}

// ── Traffic ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod traffic {
    use cn_traffic::{TrafficUpdate, UpdateStatus};

    use super::helpers::{names, navigator};
    use crate::ServiceError;

    #[test]
    fn closure_reroutes_and_reset_restores() {
        let nav = navigator();
        let report = nav.apply_traffic(&[
            TrafficUpdate::named("Administrative Block", "University Library", "closed"),
            TrafficUpdate::named("Main Gate", "Lagoon Front", "construction"),
        ]);
        assert_eq!(report.applied_count, 1);
        assert_eq!(report.details[1].status, UpdateStatus::EdgeNotFound);
        assert_eq!(report.details[0].new_weight, Some(300.0));

        let resp = nav.shortest_path("Main Gate", "Faculty of Engineering", false);
        assert_eq!(resp.path, names(&["Main Gate", "Sports Complex", "Faculty of Engineering"]));
        assert_eq!(resp.distance, Some(15.0));
        assert_eq!(nav.graph_info().modified_edges, 1);

        let ack = nav.reset_graph();
        assert!(ack.reset);
        assert_eq!(ack.overrides_discarded, 1);
        assert_eq!(ack.edges, 8);
        let resp = nav.shortest_path("Main Gate", "Faculty of Engineering", false);
        assert_eq!(resp.distance, Some(14.0));
    }

    #[test]
    fn repeated_condition_is_idempotent() {
        let nav = navigator();
        let update = [TrafficUpdate::named("Main Gate", "Security Post", "heavy_traffic")];
        nav.apply_traffic(&update);
        let report = nav.apply_traffic(&update);
        assert_eq!(report.details[0].original_weight, Some(2.0));
        assert_eq!(report.details[0].new_weight, Some(5.0));
    }

    #[test]
    fn update_edge_overwrites() {
        let nav = navigator();
        assert!(nav.update_edge("Administrative Block", "University Library", 10.0).unwrap());
        let resp = nav.shortest_path("Main Gate", "Faculty of Engineering", false);
        assert_eq!(resp.distance, Some(15.0));

        assert!(!nav.update_edge("Main Gate", "Lagoon Front", 1.0).unwrap());
        assert!(matches!(
            nav.update_edge("Main Gate", "Security Post", -3.0),
            Err(ServiceError::Traffic(_))
        ));
    }
}

// ── Emergency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod emergency {
    use cn_route::{EmergencyCategory, RouteError};

    use super::helpers::{names, navigator};
    use crate::ServiceError;

    #[test]
    fn nearest_medical_destination() {
        let resp = navigator().emergency_route("Main Gate", "medical").unwrap();
        assert!(resp.found);
        assert_eq!(resp.category, EmergencyCategory::Medical);
        let best = resp.best_route.unwrap();
        assert_eq!(best.destination, "Administrative Block");
        assert_eq!(best.distance, 6.0);
        assert_eq!(best.estimated_minutes, 4);
        assert_eq!(resp.candidates_considered, names(&["Health Centre", "Administrative Block"]));
        let reachable: Vec<(&str, f64)> =
            resp.reachable.iter().map(|c| (c.name.as_str(), c.distance)).collect();
        assert_eq!(reachable, [("Administrative Block", 6.0), ("Health Centre", 12.0)]);
    }

    #[test]
    fn evacuation_picks_global_minimum() {
        let resp = navigator().emergency_route("Faculty of Engineering", "Evacuation").unwrap();
        assert_eq!(resp.best_route.unwrap().destination, "Sports Complex");
    }

    #[test]
    fn isolated_start_finds_nothing() {
        let resp = navigator().emergency_route("Lagoon Front", "medical").unwrap();
        assert!(!resp.found);
        assert!(resp.best_route.is_none());
        assert_eq!(resp.candidates_considered.len(), 2);
        assert!(resp.error.is_some());
    }

    #[test]
    fn unknown_category_is_an_error() {
        let err = navigator().emergency_route("Main Gate", "flood").unwrap_err();
        assert!(matches!(err, ServiceError::Route(RouteError::UnknownCategory(_))));
    }
}

// ── Serialization and sharing ─────────────────────────────────────────────────

#[cfg(test)]
mod wire {
    use std::sync::Arc;

    use super::helpers::navigator;

    #[test]
    fn step_distances_serialize_as_null() {
        let resp = navigator().shortest_path("Main Gate", "Security Post", true);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["found"], true);
        assert_eq!(json["unit"], "minutes");
        let first = &json["steps"][0];
        assert_eq!(first["action"], "initialize");
        assert!(first["distances"]["Lagoon Front"].is_null());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let nav = Arc::new(navigator());
        std::thread::scope(|s| {
            for _ in 0..4 {
                let nav = Arc::clone(&nav);
                s.spawn(move || {
                    for _ in 0..20 {
                        let d = nav
                            .shortest_path("Main Gate", "Faculty of Engineering", false)
                            .distance
                            .unwrap();
                        assert!(d == 14.0 || d == 15.0, "got {d}");
                    }
                });
            }
            s.spawn(|| {
                for _ in 0..10 {
                    nav.update_edge("Administrative Block", "University Library", 10.0).unwrap();
                    nav.reset_graph();
                }
            });
        });
        assert_eq!(nav.graph_info().modified_edges, 0);
    }
}
