//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! Alternative-route strategies and the emergency router call routing via the
//! [`Router`] trait, so a different engine (A*, a canonical Yen's spur search)
//! can be dropped in without touching them.
//!
//! # Search
//!
//! Single-source, single-target Dijkstra over the symmetric adjacency lists:
//!
//! ```text
//! INITIALIZED → { visit (finalize) , relax }* → COMPLETE | UNREACHABLE
//! ```
//!
//! - The target is returned as soon as it is finalized (weights are
//!   non-negative, so its distance is final).
//! - The heap running dry means every remaining location is unreachable.
//! - Ties on tentative distance are broken by the lower `LocationId`, i.e. the
//!   location inserted into the graph first.
//! - "Infinite" is `None`; no sentinel value is used.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use cn_core::LocationId;
use cn_graph::CampusGraph;

use crate::observer::{NoopObserver, SearchObserver, SearchState};
use crate::{Route, RouteError, RouteResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router {
    /// Compute the shortest route from `from` to `to` on `graph`.
    ///
    /// - `Err(LocationNotFound)` if either id is not in `graph`.
    /// - `Err(Unreachable)` if both exist but are not connected.
    /// - `from == to` yields the trivial route `[from]`.
    fn route(&self, graph: &CampusGraph, from: LocationId, to: LocationId) -> RouteResult<Route>;
}

/// Resolve a case-sensitive location name to its id.
pub fn resolve(graph: &CampusGraph, name: &str) -> RouteResult<LocationId> {
    graph
        .id(name)
        .ok_or_else(|| RouteError::LocationNotFound(name.to_owned()))
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with early exit at the target.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &CampusGraph, from: LocationId, to: LocationId) -> RouteResult<Route> {
        self.route_observed(graph, from, to, &mut NoopObserver)
    }
}

impl DijkstraRouter {
    /// Route by location names.
    pub fn route_by_name(&self, graph: &CampusGraph, from: &str, to: &str) -> RouteResult<Route> {
        let (from, to) = (resolve(graph, from)?, resolve(graph, to)?);
        self.route(graph, from, to)
    }

    /// Like [`Router::route`], reporting every step to `observer`.
    ///
    /// Unknown endpoints fail before initialization, so the observer sees no
    /// steps at all for them.
    pub fn route_observed<O: SearchObserver>(
        &self,
        graph:    &CampusGraph,
        from:     LocationId,
        to:       LocationId,
        observer: &mut O,
    ) -> RouteResult<Route> {
        for id in [from, to] {
            if !graph.contains_id(id) {
                return Err(RouteError::LocationNotFound(id.to_string()));
            }
        }
        dijkstra(graph, from, to, observer)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: LocationId,
}

impl Eq for State {}

// Min-heap by cost, then by id (reversed from standard Rust BinaryHeap).
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra<O: SearchObserver>(
    graph:    &CampusGraph,
    from:     LocationId,
    to:       LocationId,
    observer: &mut O,
) -> RouteResult<Route> {
    let n = graph.location_count();
    // dist[v] = best known cost to reach v; None = not reached.
    let mut dist: Vec<Option<f64>> = vec![None; n];
    // prev[v] = predecessor on the best known path; INVALID for unreached.
    let mut prev    = vec![LocationId::INVALID; n];
    let mut settled = vec![false; n];
    let mut visited = Vec::new();

    dist[from.index()] = Some(0.0);
    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: from });

    observer.on_initialize(from, &SearchState {
        distances: &dist,
        visited:   &visited,
        settled:   &settled,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Skip stale heap entries.
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        visited.push(node);

        observer.on_visit(node, cost, &SearchState {
            distances: &dist,
            visited:   &visited,
            settled:   &settled,
        });

        if node == to {
            let route = reconstruct(&prev, from, to, cost);
            observer.on_complete(&route, &SearchState {
                distances: &dist,
                visited:   &visited,
                settled:   &settled,
            });
            debug!(
                "dijkstra {} → {}: {} hops, distance {cost:.3}, {} finalized",
                graph.name(from),
                graph.name(to),
                route.hops(),
                visited.len()
            );
            return Ok(route);
        }

        for nb in graph.neighbors(node) {
            let Some(&done) = settled.get(nb.to.index()) else {
                return Err(RouteError::InconsistentGraph(nb.to));
            };
            if done {
                continue;
            }
            let new_cost = cost + nb.weight;
            if dist[nb.to.index()].is_none_or(|d| new_cost < d) {
                dist[nb.to.index()] = Some(new_cost);
                prev[nb.to.index()] = node;
                heap.push(State { cost: new_cost, node: nb.to });

                observer.on_relax(node, nb.to, new_cost, &SearchState {
                    distances: &dist,
                    visited:   &visited,
                    settled:   &settled,
                });
            }
        }
    }

    Err(RouteError::Unreachable {
        from: graph.name(from).to_owned(),
        to:   graph.name(to).to_owned(),
    })
}

/// Walk predecessor links back from `to`.  Only called once `to` is
/// finalized, so the chain always ends at `from`.
fn reconstruct(prev: &[LocationId], from: LocationId, to: LocationId, distance: f64) -> Route {
    let mut path = vec![to];
    let mut cur = to;
    while cur != from {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    Route { path, distance }
}
