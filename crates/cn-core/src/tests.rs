//! Unit tests for cn-core primitives.

#[cfg(test)]
mod ids {
    use crate::LocationId;

    #[test]
    fn index_roundtrip() {
        let id = LocationId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(LocationId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering_follows_insertion() {
        assert!(LocationId(0) < LocationId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(LocationId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, bearing_deg, haversine_km};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(6.5158, 3.3898);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // 1 degree of latitude on a 6371 km sphere = 111.195 km
        let d = haversine_km(0.0, 3.0, 1.0, 3.0);
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(6.5158, 3.3898);
        let b = GeoPoint::new(6.5202, 3.3995);
        assert_eq!(a.distance_km(b), b.distance_km(a));
    }

    #[test]
    fn campus_scale_distance() {
        // Roughly 1.17 km across the campus.
        let d = haversine_km(6.5158, 3.3898, 6.5202, 3.3995);
        assert!(d > 1.1 && d < 1.25, "got {d}");
    }

    #[test]
    fn cardinal_bearings() {
        assert!((bearing_deg(0.0, 0.0, 1.0, 0.0) - 0.0).abs() < 1e-9);
        assert!((bearing_deg(0.0, 0.0, 0.0, 1.0) - 90.0).abs() < 1e-9);
        assert!((bearing_deg(1.0, 0.0, 0.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((bearing_deg(0.0, 1.0, 0.0, 0.0) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn bearing_in_range() {
        let b = GeoPoint::new(6.52, 3.39).bearing_to(GeoPoint::new(6.51, 3.38));
        assert!((0.0..360.0).contains(&b), "got {b}");
        assert!(b > 180.0 && b < 270.0, "south-west expected, got {b}");
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        let d = haversine_km(120.0, 500.0, -95.0, -720.0);
        assert!(d.is_finite());
    }

    #[test]
    fn pair_conversion() {
        let p = GeoPoint::from([6.5, 3.4]);
        assert_eq!(p.to_pair(), [6.5, 3.4]);
    }
}

#[cfg(test)]
mod pace {
    use crate::{NavConfig, WalkPace, WeightUnit};

    #[test]
    fn kilometres_at_normal_pace() {
        let cfg = NavConfig::default();
        // 0.4 km at 80 m/min = 5 min
        assert_eq!(cfg.estimate_minutes(0.4, WeightUnit::Kilometres, WalkPace::Normal), 5);
    }

    #[test]
    fn short_routes_round_up_to_one_minute() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.estimate_minutes(0.01, WeightUnit::Kilometres, WalkPace::Normal), 1);
    }

    #[test]
    fn emergency_is_faster() {
        let cfg = NavConfig::default();
        // 750 m: 9.375 min at 80 m/min, 6.25 min at 120 m/min
        let normal = cfg.estimate_minutes(0.75, WeightUnit::Kilometres, WalkPace::Normal);
        let urgent = cfg.estimate_minutes(0.75, WeightUnit::Kilometres, WalkPace::Emergency);
        assert_eq!(normal, 9);
        assert_eq!(urgent, 6);
    }

    #[test]
    fn minute_weights_scale_only_under_emergency() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.estimate_minutes(12.0, WeightUnit::Minutes, WalkPace::Normal), 12);
        assert_eq!(cfg.estimate_minutes(12.0, WeightUnit::Minutes, WalkPace::Emergency), 8);
    }

    #[test]
    fn zero_route_is_zero_minutes() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.estimate_minutes(0.0, WeightUnit::Minutes, WalkPace::Emergency), 0);
    }
}

#[cfg(test)]
mod config {
    use crate::NavConfig;

    #[test]
    fn defaults_match_engine_constants() {
        let cfg = NavConfig::default();
        assert_eq!(cfg.proximity_threshold_km, 0.8);
        assert_eq!(cfg.dfs.max_depth, 6);
        assert_eq!(cfg.dfs.max_paths, 50);
        assert_eq!(cfg.dfs.max_fanout, 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speed() {
        let cfg = NavConfig { emergency_speed_m_per_min: 0.0, ..NavConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_zero_dfs_limit() {
        let mut cfg = NavConfig::default();
        cfg.dfs.max_fanout = 0;
        assert!(cfg.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_fills_defaults() {
        let cfg: NavConfig =
            serde_json::from_str(r#"{ "proximity_threshold_km": 0.5, "dfs": { "max_depth": 4 } }"#)
                .unwrap();
        assert_eq!(cfg.proximity_threshold_km, 0.5);
        assert_eq!(cfg.dfs.max_depth, 4);
        assert_eq!(cfg.dfs.max_paths, 50);
        assert_eq!(cfg.walking_speed_m_per_min, 80.0);
    }
}
