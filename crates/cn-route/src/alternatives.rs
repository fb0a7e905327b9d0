//! Alternative-route facade over the two strategies.

use std::str::FromStr;

use log::{debug, warn};

use cn_core::DfsLimits;
use cn_graph::CampusGraph;

use crate::enumerate::{RouteAnalysis, enumerate_simple_paths};
use crate::{DijkstraRouter, Route, RouteError, Router, edge_removal_routes, resolve};

/// Which alternative-route strategy to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RouteStrategy {
    /// Bounded DFS over simple paths, sorted by distance.
    #[default]
    Enumerate,
    /// Iterative single-edge removal around known routes.
    EdgeRemoval,
}

impl RouteStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            RouteStrategy::Enumerate   => "enumerate",
            RouteStrategy::EdgeRemoval => "edge_removal",
        }
    }
}

impl FromStr for RouteStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enumerate" | "dfs" => Ok(RouteStrategy::Enumerate),
            "edge_removal" | "yen" => Ok(RouteStrategy::EdgeRemoval),
            other => Err(format!("unknown route strategy {other:?}")),
        }
    }
}

/// Result of an alternative-routes request.
///
/// Empty `routes` means "no route": an unknown endpoint or no connection.
#[derive(Clone, Debug, Default)]
pub struct AlternativeRoutes {
    /// At most `k` routes, ascending by distance.
    pub routes:    Vec<Route>,
    /// Summary over everything enumerated (enumeration strategy only).
    pub analysis:  Option<RouteAnalysis>,
    /// Enumeration hit one of its caps.
    pub truncated: bool,
    /// Enumeration failed and the single shortest route was returned instead.
    pub fell_back: bool,
}

/// Up to `k` distinct routes between two named locations.
///
/// Never fails: unknown names and disconnected endpoints yield an empty
/// result, as does an enumeration whose caps admit no path (with `truncated`
/// set).  An internal search failure degrades to the single shortest route
/// with `fell_back` set.
pub fn alternative_routes(
    graph:    &CampusGraph,
    from:     &str,
    to:       &str,
    k:        usize,
    strategy: RouteStrategy,
    limits:   &DfsLimits,
) -> AlternativeRoutes {
    let router = DijkstraRouter;
    let ids = resolve(graph, from).and_then(|f| Ok((f, resolve(graph, to)?)));
    let (from_id, to_id) = match ids {
        Ok(ids) => ids,
        Err(e) => {
            debug!("alternative routes: {e}");
            return AlternativeRoutes::default();
        }
    };

    // The optimum both anchors the analysis and detects "no route at all".
    let shortest = match router.route(graph, from_id, to_id) {
        Ok(route) => route,
        Err(e) => {
            debug!("alternative routes: {e}");
            return AlternativeRoutes::default();
        }
    };
    if k == 0 {
        return AlternativeRoutes::default();
    }

    match strategy {
        RouteStrategy::Enumerate => match enumerate_simple_paths(graph, from_id, to_id, limits) {
            Ok(mut enumeration) => {
                // Every simple path is longer than the depth cap.
                if enumeration.routes.is_empty() {
                    debug!("alternative routes: no path within {} hops", limits.max_depth);
                    return AlternativeRoutes { truncated: true, ..AlternativeRoutes::default() };
                }
                let analysis =
                    RouteAnalysis::from_routes(&enumeration.routes, Some(shortest.distance));
                enumeration.routes.truncate(k);
                AlternativeRoutes {
                    routes: enumeration.routes,
                    analysis,
                    truncated: enumeration.truncated,
                    fell_back: false,
                }
            }
            Err(e) => fallback(shortest, &e),
        },
        RouteStrategy::EdgeRemoval => {
            match edge_removal_routes(&router, graph, from_id, to_id, k) {
                Ok(routes) => AlternativeRoutes { routes, ..AlternativeRoutes::default() },
                Err(e) => fallback(shortest, &e),
            }
        }
    }
}

pub(crate) fn fallback(shortest: Route, err: &RouteError) -> AlternativeRoutes {
    warn!("alternative route search failed ({err}); returning the shortest route only");
    AlternativeRoutes {
        analysis:  RouteAnalysis::from_routes(std::slice::from_ref(&shortest), Some(shortest.distance)),
        routes:    vec![shortest],
        truncated: false,
        fell_back: true,
    }
}
