//! Unit tests for cn-graph.
//!
//! All tests use hand-crafted graphs or inline JSON so they run without any
//! seed file on disk (except the explicit file-loading test).

#[cfg(test)]
mod helpers {
    use cn_core::WeightUnit;
    use crate::{CampusGraph, CampusGraphBuilder};

    /// Four locations, symmetric edges:
    ///
    /// ```text
    ///   A —1— B —1— C —1— D
    ///    \_______5_____/
    /// ```
    pub fn diamond() -> CampusGraph {
        let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
        b.add_edge_by_name("A", "B", 1.0);
        b.add_edge_by_name("B", "C", 1.0);
        b.add_edge_by_name("A", "C", 5.0);
        b.add_edge_by_name("C", "D", 1.0);
        b.build()
    }

    pub const SEED_JSON: &str = r#"{
        "nodes": ["Main Gate", "Library", "Senate Building", "Sports Complex"],
        "edges": [
            ["Main Gate", "Library", 7],
            ["Library", "Senate Building", 4.5],
            ["Main Gate", "Senate Building"],
            ["Senate Building", "Health Centre", 3]
        ],
        "coordinates": {
            "Main Gate":       [6.5158, 3.3898],
            "Library":         [6.5190, 3.3972],
            "Senate Building": [6.5180, 3.3990],
            "Sports Complex":  "unknown"
        }
    }"#;
}

// ── Graph store & builder ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use cn_core::{GeoPoint, LocationId, WeightUnit};
    use crate::CampusGraphBuilder;

    #[test]
    fn empty_build() {
        let g = CampusGraphBuilder::new(WeightUnit::Minutes).build();
        assert_eq!(g.location_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn edges_are_symmetric() {
        let g = super::helpers::diamond();
        for u in g.locations() {
            for n in g.neighbors(u) {
                assert_eq!(g.weight(n.to, u), Some(n.weight), "{} – {}", g.name(u), g.name(n.to));
            }
        }
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn ids_follow_insertion_order() {
        let g = super::helpers::diamond();
        assert_eq!(g.id("A"), Some(LocationId(0)));
        assert_eq!(g.id("B"), Some(LocationId(1)));
        assert_eq!(g.id("C"), Some(LocationId(2)));
        assert_eq!(g.id("D"), Some(LocationId(3)));
        assert_eq!(g.id("a"), None, "names are case-sensitive");
    }

    #[test]
    fn neighbor_order_is_insertion_order() {
        let g = super::helpers::diamond();
        let a = g.id("A").unwrap();
        let names: Vec<&str> = g.neighbors(a).iter().map(|n| g.name(n.to)).collect();
        assert_eq!(names, ["B", "C"]);
    }

    #[test]
    fn re_adding_edge_overwrites_weight() {
        let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
        b.add_edge_by_name("X", "Y", 2.0);
        b.add_edge_by_name("Y", "X", 9.0);
        let g = b.build();
        let (x, y) = (g.id("X").unwrap(), g.id("Y").unwrap());
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(x, y), Some(9.0));
        assert_eq!(g.weight(y, x), Some(9.0));
    }

    #[test]
    fn rejects_invalid_edges() {
        let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
        let x = b.add_location("X", None);
        let y = b.add_location("Y", None);
        assert!(!b.add_edge(x, x, 1.0));
        assert!(!b.add_edge(x, y, -1.0));
        assert!(!b.add_edge(x, y, f64::NAN));
        assert!(b.add_edge(x, y, 0.0));
        assert_eq!(b.build().edge_count(), 1);
    }

    #[test]
    fn duplicate_location_keeps_id_and_updates_coordinate() {
        let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
        let first = b.add_location("Library", None);
        let again = b.add_location("Library", Some(GeoPoint::new(6.519, 3.397)));
        assert_eq!(first, again);
        let g = b.build();
        assert_eq!(g.coordinate(first), Some(GeoPoint::new(6.519, 3.397)));
    }

    #[test]
    fn path_weight_sums_edges() {
        let g = super::helpers::diamond();
        let path: Vec<_> = ["A", "B", "C", "D"].iter().map(|n| g.id(n).unwrap()).collect();
        assert_eq!(g.path_weight(&path), Some(3.0));
        assert_eq!(g.path_weight(&path[..1]), Some(0.0));
        let broken = [g.id("A").unwrap(), g.id("D").unwrap()];
        assert_eq!(g.path_weight(&broken), None);
    }
}

// ── Mutation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mutation {
    #[test]
    fn set_weight_writes_both_directions() {
        let mut g = super::helpers::diamond();
        let (b, c) = (g.id("B").unwrap(), g.id("C").unwrap());
        assert!(g.set_weight(b, c, 10.0));
        assert_eq!(g.weight(b, c), Some(10.0));
        assert_eq!(g.weight(c, b), Some(10.0));
    }

    #[test]
    fn set_weight_on_missing_edge_is_noop() {
        let mut g = super::helpers::diamond();
        let before = g.clone();
        let (a, d) = (g.id("A").unwrap(), g.id("D").unwrap());
        assert!(!g.set_weight(a, d, 2.0));
        assert!(!g.has_edge(a, d));
        assert_eq!(g.edge_count(), before.edge_count());
    }

    #[test]
    fn remove_edge_cuts_both_directions_and_keeps_order() {
        let mut g = super::helpers::diamond();
        let (a, b, c) = (g.id("A").unwrap(), g.id("B").unwrap(), g.id("C").unwrap());
        assert!(g.remove_edge(c, b));
        assert!(!g.has_edge(b, c));
        assert!(!g.has_edge(c, b));
        assert_eq!(g.edge_count(), 3);
        // C's remaining neighbours keep their relative order: A then D.
        let names: Vec<&str> = g.neighbors(c).iter().map(|n| g.name(n.to)).collect();
        assert_eq!(names, ["A", "D"]);
        assert!(!g.remove_edge(b, c));
        let _ = a;
    }

    #[test]
    fn clone_is_independent() {
        let g = super::helpers::diamond();
        let mut copy = g.clone();
        let (a, b) = (g.id("A").unwrap(), g.id("B").unwrap());
        copy.remove_edge(a, b);
        assert!(g.has_edge(a, b));
        assert!(!copy.has_edge(a, b));
    }
}

// ── Proximity builder ─────────────────────────────────────────────────────────

#[cfg(test)]
mod proximity {
    use cn_core::{GeoPoint, WeightUnit};
    use crate::build_proximity_graph;

    // A–B ≈ 0.663 km, A–C ≈ 0.667 km, B–C ≈ 0.94 km.
    const A: GeoPoint = GeoPoint { lat: 6.500, lon: 3.400 };
    const B: GeoPoint = GeoPoint { lat: 6.500, lon: 3.406 };
    const C: GeoPoint = GeoPoint { lat: 6.506, lon: 3.400 };

    #[test]
    fn triangle_keeps_only_short_sides() {
        let g = build_proximity_graph(
            [("A", Some(A)), ("B", Some(B)), ("C", Some(C))],
            0.8,
        );
        let (a, b, c) = (g.id("A").unwrap(), g.id("B").unwrap(), g.id("C").unwrap());
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(a, b));
        assert!(g.has_edge(a, c));
        assert!(!g.has_edge(b, c));
        assert_eq!(g.unit(), WeightUnit::Kilometres);
        let ab = g.weight(a, b).unwrap();
        assert!((ab - A.distance_km(B)).abs() < 1e-12);
    }

    #[test]
    fn isolated_and_unlocated_locations_are_dropped() {
        let far = GeoPoint::new(6.600, 3.500);
        let g = build_proximity_graph(
            [("A", Some(A)), ("Nowhere", None), ("B", Some(B)), ("Far", Some(far))],
            0.8,
        );
        assert_eq!(g.location_count(), 2);
        assert!(!g.contains("Far"));
        assert!(!g.contains("Nowhere"));
    }

    #[test]
    fn threshold_is_strict() {
        let d = A.distance_km(B);
        let g = build_proximity_graph([("A", Some(A)), ("B", Some(B))], d);
        assert!(g.is_empty());
    }

    #[test]
    fn rebuild_is_deterministic() {
        let input = [("A", Some(A)), ("B", Some(B)), ("C", Some(C))];
        let g1 = build_proximity_graph(input, 0.8);
        let g2 = build_proximity_graph(input, 0.8);
        assert_eq!(g1.names(), g2.names());
        for u in g1.locations() {
            assert_eq!(g1.neighbors(u), g2.neighbors(u));
        }
    }
}

// ── Seed loading ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod seed {
    use std::io::Write;

    use cn_core::{GeoPoint, WeightUnit};
    use crate::{CampusSeed, GraphError, load_seed_json, load_seed_reader};

    #[test]
    fn malformed_records_are_skipped_and_counted() {
        let seed = CampusSeed::from_json_str(super::helpers::SEED_JSON).unwrap();
        assert_eq!(seed.locations.len(), 4);
        assert_eq!(seed.edges.len(), 3);
        assert_eq!(seed.report.skipped_edges, 1);
        assert_eq!(seed.report.skipped_coordinates, 1);
        assert!(!seed.report.is_clean());
    }

    #[test]
    fn self_loop_edges_are_counted_as_skipped() {
        let json = r#"{
            "nodes": ["Main Gate", "Library"],
            "edges": [["Main Gate", "Main Gate", 3], ["Main Gate", "Library", 4]]
        }"#;
        let seed = CampusSeed::from_json_str(json).unwrap();
        assert_eq!(seed.edges.len(), 1);
        assert_eq!(seed.report.skipped_edges, 1);
        assert_eq!(seed.to_edge_graph().edge_count(), 1);
    }

    #[test]
    fn edge_graph_includes_edge_only_endpoints() {
        let seed = CampusSeed::from_json_str(super::helpers::SEED_JSON).unwrap();
        let g = seed.to_edge_graph();
        assert_eq!(g.unit(), WeightUnit::Minutes);
        // 4 listed + Health Centre from the edge list.
        assert_eq!(g.location_count(), 5);
        assert_eq!(g.edge_count(), 3);
        let sports = g.id("Sports Complex").unwrap();
        assert!(g.neighbors(sports).is_empty(), "listed locations stay even without edges");
        let health = g.id("Health Centre").unwrap();
        assert_eq!(g.coordinate(health), None);
    }

    #[test]
    fn proximity_graph_uses_coordinates_only() {
        let seed = CampusSeed::from_json_str(super::helpers::SEED_JSON).unwrap();
        let g = seed.to_proximity_graph(0.8);
        // Gate is ~0.89 km from Library and ~1.04 km from Senate; Library–Senate ≈ 0.23 km.
        assert!(!g.contains("Main Gate"));
        assert!(g.contains("Library"));
        assert!(g.contains("Senate Building"));
        assert!(!g.contains("Sports Complex"));
    }

    #[test]
    fn reader_and_missing_fields() {
        let seed = load_seed_reader(r#"{ "nodes": ["Only"] }"#.as_bytes()).unwrap();
        assert_eq!(seed.locations, ["Only"]);
        assert!(seed.edges.is_empty());
        assert!(seed.report.is_clean());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = load_seed_reader("{ not json".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_seed_json(std::path::Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(super::helpers::SEED_JSON.as_bytes()).unwrap();
        let seed = load_seed_json(file.path()).unwrap();
        assert_eq!(seed.coordinate("Main Gate"), Some(GeoPoint::new(6.5158, 3.3898)));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use cn_core::{GeoPoint, WeightUnit};
    use crate::{CampusGraph, CampusGraphBuilder};

    #[test]
    fn snaps_to_nearest_located() {
        let mut b = CampusGraphBuilder::new(WeightUnit::Minutes);
        let gate = b.add_location("Main Gate", Some(GeoPoint::new(6.5158, 3.3898)));
        let lib  = b.add_location("Library", Some(GeoPoint::new(6.5190, 3.3972)));
        b.add_location("Unmapped", None);
        let g = b.build();
        assert_eq!(g.nearest_location(GeoPoint::new(6.516, 3.390)), Some(gate));
        assert_eq!(g.nearest_location(GeoPoint::new(6.519, 3.397)), Some(lib));
    }

    #[test]
    fn empty_graph_returns_none() {
        assert!(CampusGraph::empty().nearest_location(GeoPoint::new(0.0, 0.0)).is_none());
    }
}
