//! Emergency routing to the nearest destination of a category.

use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use cn_core::LocationId;
use cn_graph::CampusGraph;

use crate::{Route, RouteError, RouteResult, Router, resolve};

/// Kind of emergency; each maps to an ordered list of candidate
/// destinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmergencyCategory {
    Medical,
    Security,
    Fire,
    Evacuation,
}

impl EmergencyCategory {
    pub const ALL: [EmergencyCategory; 4] = [
        EmergencyCategory::Medical,
        EmergencyCategory::Security,
        EmergencyCategory::Fire,
        EmergencyCategory::Evacuation,
    ];

    /// Candidate destination names, in preference order for equal distances.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            EmergencyCategory::Medical => {
                &["Health Centre", "Medical Centre", "Administrative Block"]
            }
            EmergencyCategory::Security => {
                &["Security Post", "Main Gate", "Administrative Block"]
            }
            EmergencyCategory::Fire => &["Main Gate", "Security Post", "Administrative Block"],
            EmergencyCategory::Evacuation => &["Main Gate", "Sports Complex", "University Library"],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EmergencyCategory::Medical    => "medical",
            EmergencyCategory::Security   => "security",
            EmergencyCategory::Fire       => "fire",
            EmergencyCategory::Evacuation => "evacuation",
        }
    }
}

impl fmt::Display for EmergencyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergencyCategory {
    type Err = RouteError;

    /// Case-insensitive parse of `medical | security | fire | evacuation`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RouteError::UnknownCategory(s.to_owned()))
    }
}

/// Result of [`nearest_emergency`].
#[derive(Clone, Debug)]
pub struct EmergencyRoute {
    pub category:    EmergencyCategory,
    /// The chosen destination (`route`'s target).
    pub destination: LocationId,
    /// Shortest route to `destination`.
    pub route:       Route,
    /// Candidates that exist in the graph, in table order.
    pub considered:  Vec<LocationId>,
    /// Every reachable candidate and its route, ascending by distance.
    pub reachable:   Vec<(LocationId, Route)>,
}

/// Route from `start` to the closest reachable candidate of `category`.
///
/// Candidates missing from the graph are skipped; equal distances keep the
/// earlier table entry.  Fails with `LocationNotFound` for an unknown start
/// and `NoEmergencyDestination` when no candidate is reachable.
pub fn nearest_emergency<R: Router>(
    router:   &R,
    graph:    &CampusGraph,
    start:    &str,
    category: EmergencyCategory,
) -> RouteResult<EmergencyRoute> {
    let from = resolve(graph, start)?;

    let mut considered = Vec::new();
    let mut reachable: Vec<(LocationId, Route)> = Vec::new();
    for name in category.candidates() {
        let Some(dest) = graph.id(name) else {
            debug!("{category} candidate {name:?} is not on the map");
            continue;
        };
        considered.push(dest);
        match router.route(graph, from, dest) {
            Ok(route) => reachable.push((dest, route)),
            Err(RouteError::Unreachable { .. }) => {
                debug!("{category} candidate {name:?} unreachable from {start:?}");
            }
            Err(e) => return Err(e),
        }
    }

    // Stable sort keeps table order among equal distances.
    reachable.sort_by(|a, b| a.1.distance.total_cmp(&b.1.distance));

    let Some((destination, route)) = reachable.first().cloned() else {
        return Err(RouteError::NoEmergencyDestination {
            from:     start.to_owned(),
            category: category.as_str(),
        });
    };
    info!(
        "{category} emergency from {start:?}: nearest is {:?} at {:.3}",
        graph.name(destination),
        route.distance
    );

    Ok(EmergencyRoute { category, destination, route, considered, reachable })
}
