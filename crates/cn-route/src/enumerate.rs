//! Bounded depth-first enumeration of simple paths.
//!
//! Exhaustive search is exponential, so it is capped three ways
//! ([`DfsLimits`]): path length in hops, number of accepted paths, and how
//! many neighbours of each location are explored (first N in adjacency
//! order).  Hitting any cap marks the result `truncated`; it is never an
//! error.

use std::fmt;

use log::{debug, warn};

use cn_core::{DfsLimits, LocationId};
use cn_graph::CampusGraph;

use crate::{Route, RouteError, RouteResult};

// ── Enumeration ───────────────────────────────────────────────────────────────

/// Simple paths found by [`enumerate_simple_paths`], sorted by ascending
/// distance (ties keep discovery order).
#[derive(Clone, Debug, Default)]
pub struct Enumeration {
    pub routes:    Vec<Route>,
    /// A depth, count or fan-out cap cut the search short.
    pub truncated: bool,
}

/// Enumerate simple paths `from → to` by DFS within `limits`.
///
/// Each completed path is weighed by summing its edges; a path with a missing
/// edge is discarded.  `Err(InconsistentGraph)` is returned if adjacency
/// references a location the graph does not contain; callers are expected to
/// fall back to a plain shortest path in that case.
pub fn enumerate_simple_paths(
    graph:  &CampusGraph,
    from:   LocationId,
    to:     LocationId,
    limits: &DfsLimits,
) -> RouteResult<Enumeration> {
    for id in [from, to] {
        if !graph.contains_id(id) {
            return Err(RouteError::LocationNotFound(id.to_string()));
        }
    }

    let mut dfs = Dfs {
        graph,
        target:    to,
        limits,
        path:      vec![from],
        on_path:   vec![false; graph.location_count()],
        found:     Vec::new(),
        truncated: false,
    };
    dfs.on_path[from.index()] = true;
    dfs.visit(from, 0)?;

    let Dfs { mut found, truncated, .. } = dfs;
    found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    debug!(
        "enumerated {} simple paths {} → {} (truncated: {truncated})",
        found.len(),
        graph.name(from),
        graph.name(to)
    );
    Ok(Enumeration { routes: found, truncated })
}

struct Dfs<'a> {
    graph:     &'a CampusGraph,
    target:    LocationId,
    limits:    &'a DfsLimits,
    path:      Vec<LocationId>,
    on_path:   Vec<bool>,
    found:     Vec<Route>,
    truncated: bool,
}

impl Dfs<'_> {
    fn visit(&mut self, current: LocationId, depth: usize) -> RouteResult<()> {
        if depth > self.limits.max_depth || self.found.len() >= self.limits.max_paths {
            self.truncated = true;
            return Ok(());
        }

        if current == self.target {
            match self.graph.path_weight(&self.path) {
                Some(distance) => self.found.push(Route { path: self.path.clone(), distance }),
                None => warn!("discarding path with a missing edge: {:?}", self.path),
            }
            return Ok(());
        }

        let neighbors = self.graph.neighbors(current);
        if neighbors.len() > self.limits.max_fanout {
            self.truncated = true;
        }
        for nb in neighbors.iter().take(self.limits.max_fanout) {
            let Some(&seen) = self.on_path.get(nb.to.index()) else {
                return Err(RouteError::InconsistentGraph(nb.to));
            };
            if seen {
                continue;
            }
            self.path.push(nb.to);
            self.on_path[nb.to.index()] = true;
            let result = self.visit(nb.to, depth + 1);
            self.on_path[nb.to.index()] = false;
            self.path.pop();
            result?;
        }
        Ok(())
    }
}

// ── RouteAnalysis ─────────────────────────────────────────────────────────────

/// Summary over every path an enumeration found.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteAnalysis {
    /// Minimum distance: the Dijkstra optimum when known, else the shortest
    /// enumerated route.
    pub optimal_distance:  f64,
    /// Number of distinct routes found (before truncation to `k`).
    pub routes_found:      usize,
    pub shortest_distance: f64,
    pub longest_distance:  f64,
    /// `longest_distance - shortest_distance`.
    pub spread:            f64,
}

impl RouteAnalysis {
    /// Analyse `routes` (sorted ascending).  `None` if there are none.
    pub fn from_routes(routes: &[Route], optimal: Option<f64>) -> Option<Self> {
        let shortest = routes.first()?.distance;
        let longest = routes.last()?.distance;
        Some(Self {
            optimal_distance:  optimal.map_or(shortest, |o| o.min(shortest)),
            routes_found:      routes.len(),
            shortest_distance: shortest,
            longest_distance:  longest,
            spread:            (longest - shortest).abs(),
        })
    }
}

impl fmt::Display for RouteAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "optimal distance: {:.2}", self.optimal_distance)?;
        writeln!(f, "routes found:     {}", self.routes_found)?;
        writeln!(f, "shortest:         {:.2}", self.shortest_distance)?;
        write!(
            f,
            "longest:          {:.2} (+{:.2})",
            self.longest_distance, self.spread
        )
    }
}
