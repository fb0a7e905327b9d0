//! Proximity-based graph construction.
//!
//! Every pair of distinct located locations whose great-circle distance is
//! strictly below a threshold becomes an edge weighted by that distance in
//! kilometres.  Locations left without any qualifying neighbour are dropped
//! from the result entirely, and locations without a coordinate never take
//! part.
//!
//! # Cost
//!
//! O(N²) haversine evaluations, recomputed from scratch on every call with no
//! caching.  Fine for a campus (≤ ~100 locations); beyond that a spatial
//! pre-filter is needed, and a warning is logged.

use std::collections::HashSet;

use log::{debug, warn};

use cn_core::{GeoPoint, LocationId, WeightUnit};

use crate::{CampusGraph, CampusGraphBuilder};

/// Located-location count above which the quadratic build is logged as a
/// scalability concern.
pub const PROXIMITY_SOFT_LIMIT: usize = 100;

/// Build a kilometre-weighted graph connecting every pair of locations closer
/// than `threshold_km`.
///
/// `locations` supplies names in the order they should be interned; entries
/// with `None` coordinates and repeated names are ignored.  Neighbour order
/// follows input order.
pub fn build_proximity_graph<'a, I>(locations: I, threshold_km: f64) -> CampusGraph
where
    I: IntoIterator<Item = (&'a str, Option<GeoPoint>)>,
{
    let mut seen = HashSet::new();
    let located: Vec<(&str, GeoPoint)> = locations
        .into_iter()
        .filter_map(|(name, coord)| coord.map(|pos| (name, pos)))
        .filter(|(name, _)| seen.insert(*name))
        .collect();

    let n = located.len();
    if n > PROXIMITY_SOFT_LIMIT {
        warn!(
            "proximity build over {n} locations exceeds the {PROXIMITY_SOFT_LIMIT}-location \
             design ceiling; cost grows quadratically"
        );
    }

    // ── Pairwise distances ────────────────────────────────────────────────
    let mut pairs = Vec::new();
    let mut connected = vec![false; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = located[i].1.distance_km(located[j].1);
            if d < threshold_km {
                pairs.push((i, j, d));
                connected[i] = true;
                connected[j] = true;
            }
        }
    }

    // ── Intern only connected locations, then add edges ───────────────────
    let mut b = CampusGraphBuilder::with_capacity(WeightUnit::Kilometres, n);
    let ids: Vec<Option<LocationId>> = located
        .iter()
        .zip(&connected)
        .map(|(&(name, pos), &keep)| keep.then(|| b.add_location(name, Some(pos))))
        .collect();

    for (i, j, d) in pairs {
        if let (Some(a), Some(c)) = (ids[i], ids[j]) {
            b.add_edge(a, c, d);
        }
    }

    let graph = b.build();
    debug!(
        "proximity graph: {} of {n} located locations connected by {} edges under {threshold_km} km",
        graph.location_count(),
        graph.edge_count(),
    );
    graph
}
