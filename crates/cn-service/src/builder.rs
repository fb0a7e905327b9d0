//! Fluent builder for constructing a [`Navigator`].

use std::path::Path;

use parking_lot::RwLock;

use cn_core::NavConfig;
use cn_graph::{CampusGraph, CampusSeed, load_seed_json};
use cn_traffic::LiveGraph;

use crate::{GraphMode, Navigator, ServiceResult};

/// Fluent builder for [`Navigator`].
///
/// | Method       | Default                |
/// |--------------|------------------------|
/// | `.config(c)` | `NavConfig::default()` |
/// | `.mode(m)`   | `GraphMode::EdgeList`  |
///
/// ```rust,ignore
/// let nav = NavigatorBuilder::from_path(Path::new("campus.json"))?
///     .mode(GraphMode::Proximity)
///     .build()?;
/// let route = nav.shortest_path("Main Gate", "University Library", false);
/// ```
pub struct NavigatorBuilder {
    seed:   CampusSeed,
    config: NavConfig,
    mode:   GraphMode,
}

impl NavigatorBuilder {
    pub fn new(seed: CampusSeed) -> Self {
        Self { seed, config: NavConfig::default(), mode: GraphMode::default() }
    }

    /// Parse the seed from a JSON string.
    pub fn from_json_str(json: &str) -> ServiceResult<Self> {
        Ok(Self::new(CampusSeed::from_json_str(json)?))
    }

    /// Load the seed from a JSON file.
    pub fn from_path(path: &Path) -> ServiceResult<Self> {
        Ok(Self::new(load_seed_json(path)?))
    }

    pub fn config(mut self, config: NavConfig) -> Self {
        self.config = config;
        self
    }

    pub fn mode(mut self, mode: GraphMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration and build the baseline graph.
    pub fn build(self) -> ServiceResult<Navigator> {
        self.config.validate()?;
        let graph = build_graph(&self.seed, self.mode, &self.config);
        Ok(Navigator {
            live:   RwLock::new(LiveGraph::new(graph)),
            seed:   self.seed,
            config: self.config,
            mode:   self.mode,
        })
    }
}

pub(crate) fn build_graph(seed: &CampusSeed, mode: GraphMode, config: &NavConfig) -> CampusGraph {
    match mode {
        GraphMode::EdgeList  => seed.to_edge_graph(),
        GraphMode::Proximity => seed.to_proximity_graph(config.proximity_threshold_km),
    }
}
