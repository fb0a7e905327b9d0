//! Alternatives by iterative single-edge removal.
//!
//! Start from the shortest route.  Each round, cut every edge used by any
//! route found so far (one at a time, both directions, on a private copy of
//! the graph), rerun the router, and keep the cheapest result that is not
//! already in the list.  Stop after `k` routes or when a round finds nothing
//! new.
//!
//! This is a cheap relaxation of Yen's algorithm: it yields `k` distinct
//! loopless routes but not necessarily the `k` shortest ones, because routes
//! that differ from every known route in two or more edges are never
//! generated.

use std::collections::HashSet;

use log::debug;

use cn_core::LocationId;
use cn_graph::CampusGraph;

use crate::{Route, RouteError, RouteResult, Router};

/// Up to `k` distinct routes `from → to`, the first being the shortest.
///
/// Errors from the first search (unknown location, unreachable) are returned
/// as-is; later rounds treat "unreachable after the cut" as "no candidate".
pub fn edge_removal_routes<R: Router>(
    router: &R,
    graph:  &CampusGraph,
    from:   LocationId,
    to:     LocationId,
    k:      usize,
) -> RouteResult<Vec<Route>> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let mut found = vec![router.route(graph, from, to)?];

    while found.len() < k {
        let mut best: Option<Route> = None;
        let mut tried: HashSet<(LocationId, LocationId)> = HashSet::new();

        for route in &found {
            for leg in route.path.windows(2) {
                let key = if leg[0] < leg[1] { (leg[0], leg[1]) } else { (leg[1], leg[0]) };
                if !tried.insert(key) {
                    continue;
                }

                let mut working = graph.clone();
                working.remove_edge(leg[0], leg[1]);

                let candidate = match router.route(&working, from, to) {
                    Ok(candidate) => candidate,
                    Err(RouteError::Unreachable { .. }) => continue,
                    Err(e) => return Err(e),
                };
                if found.iter().any(|r| r.path == candidate.path) {
                    continue;
                }
                if best.as_ref().is_none_or(|b| candidate.distance < b.distance) {
                    best = Some(candidate);
                }
            }
        }

        match best {
            Some(route) => {
                debug!(
                    "edge removal round {}: found alternative with distance {:.3}",
                    found.len(),
                    route.distance
                );
                found.push(route);
            }
            None => break,
        }
    }

    Ok(found)
}
