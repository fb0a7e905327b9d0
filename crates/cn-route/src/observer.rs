//! Search observer trait and the step recorder used for visualization.
//!
//! The shortest-path search calls an observer after initialization and after
//! every finalize / relax action.  Observers only ever see shared borrows of
//! the search state, so they cannot change the outcome; [`NoopObserver`]
//! compiles away entirely.

use cn_core::LocationId;
use cn_graph::CampusGraph;

use crate::Route;

// ── Search state view ─────────────────────────────────────────────────────────

/// Read-only view of a search in progress.
pub struct SearchState<'a> {
    /// Tentative distance per location, indexed by `LocationId`.
    /// `None` means "not reached yet" (infinite).
    pub distances: &'a [Option<f64>],
    /// Locations finalized so far, in finalization order.
    pub visited:   &'a [LocationId],
    /// Finalized flag per location, indexed by `LocationId`.
    pub settled:   &'a [bool],
}

impl SearchState<'_> {
    /// Locations not yet finalized, in id order.
    pub fn frontier(&self) -> Vec<LocationId> {
        self.settled
            .iter()
            .enumerate()
            .filter(|&(_, done)| !done)
            .map(|(i, _)| LocationId(i as u32))
            .collect()
    }
}

// ── Observer trait ────────────────────────────────────────────────────────────

/// Callbacks invoked by [`DijkstraRouter::route_observed`][crate::DijkstraRouter::route_observed].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SearchObserver {
    /// Source distance set to 0, everything else infinite.
    fn on_initialize(&mut self, _source: LocationId, _state: &SearchState<'_>) {}

    /// `node` was finalized at distance `cost`.
    fn on_visit(&mut self, _node: LocationId, _cost: f64, _state: &SearchState<'_>) {}

    /// The tentative distance of `to` improved to `cost` via `from`.
    fn on_relax(
        &mut self,
        _from:  LocationId,
        _to:    LocationId,
        _cost:  f64,
        _state: &SearchState<'_>,
    ) {}

    /// The target was finalized and `route` reconstructed.
    fn on_complete(&mut self, _route: &Route, _state: &SearchState<'_>) {}
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

// ── Step records ──────────────────────────────────────────────────────────────

/// Kind of algorithm step captured in a [`StepRecord`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepAction {
    Initialize,
    VisitNode,
    RelaxEdge,
    Complete,
}

impl StepAction {
    pub fn as_str(self) -> &'static str {
        match self {
            StepAction::Initialize => "initialize",
            StepAction::VisitNode  => "visit_node",
            StepAction::RelaxEdge  => "relax_edge",
            StepAction::Complete   => "complete",
        }
    }
}

/// Immutable snapshot of the search after one action.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    /// 0-based sequence number within the run.
    pub index:       usize,
    pub description: String,
    /// Location acted upon (the visited node, or the relaxing node).
    pub node:        LocationId,
    /// Tentative distances at this instant, indexed by `LocationId`.
    pub distances:   Vec<Option<f64>>,
    /// Finalized locations in order.
    pub visited:     Vec<LocationId>,
    /// Locations not yet finalized.
    pub frontier:    Vec<LocationId>,
    pub action:      StepAction,
    /// The relaxed edge, for `RelaxEdge` steps.
    pub edge:        Option<(LocationId, LocationId)>,
    /// The final path, for the `Complete` step.
    pub final_path:  Option<Vec<LocationId>>,
}

/// Observer that appends a [`StepRecord`] for every search action.
pub struct StepRecorder<'g> {
    graph: &'g CampusGraph,
    steps: Vec<StepRecord>,
}

impl<'g> StepRecorder<'g> {
    pub fn new(graph: &'g CampusGraph) -> Self {
        Self { graph, steps: Vec::new() }
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.steps
    }

    fn push(
        &mut self,
        action:      StepAction,
        node:        LocationId,
        description: String,
        state:       &SearchState<'_>,
    ) -> &mut StepRecord {
        let frontier = match action {
            StepAction::Complete => Vec::new(),
            _ => state.frontier(),
        };
        self.steps.push(StepRecord {
            index: self.steps.len(),
            description,
            node,
            distances: state.distances.to_vec(),
            visited: state.visited.to_vec(),
            frontier,
            action,
            edge: None,
            final_path: None,
        });
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }
}

impl SearchObserver for StepRecorder<'_> {
    fn on_initialize(&mut self, source: LocationId, state: &SearchState<'_>) {
        let description = format!(
            "Initialize: set distance to {} = 0, all others = ∞",
            self.graph.name(source)
        );
        self.push(StepAction::Initialize, source, description, state);
    }

    fn on_visit(&mut self, node: LocationId, cost: f64, state: &SearchState<'_>) {
        let description = format!("Visit {} (distance: {cost:.3})", self.graph.name(node));
        self.push(StepAction::VisitNode, node, description, state);
    }

    fn on_relax(&mut self, from: LocationId, to: LocationId, cost: f64, state: &SearchState<'_>) {
        let description = format!(
            "Relax edge {} → {}. New distance: {cost:.3}",
            self.graph.name(from),
            self.graph.name(to)
        );
        self.push(StepAction::RelaxEdge, from, description, state).edge = Some((from, to));
    }

    fn on_complete(&mut self, route: &Route, state: &SearchState<'_>) {
        let Some(target) = route.target() else { return };
        let description = format!(
            "Algorithm complete! Shortest distance: {:.3}",
            route.distance
        );
        self.push(StepAction::Complete, target, description, state).final_path =
            Some(route.path.clone());
    }
}
