//! Query input and output types.

use rp_core::{LocationId, TransportMode};
use rp_spatial::Link;

/// One `(from, to, mode)` request, for batch queries.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteQuery {
    pub from: String,
    pub to:   String,
    pub mode: TransportMode,
}

impl RouteQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>, mode: TransportMode) -> Self {
        Self { from: from.into(), to: to.into(), mode }
    }
}

/// A found route: consecutive links from source to target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Links in travel order.  Each one's `distance_km` is the geometric
    /// distance between its endpoints.
    pub links: Vec<Link>,
    /// Minimum total of stored edge weights, as found by the search.
    pub total_weight: f64,
}

impl Route {
    /// `true` if source and target are the same location.
    pub fn is_trivial(&self) -> bool {
        self.links.is_empty()
    }

    /// Sum of the emitted (geometric) link distances.
    pub fn geometric_km(&self) -> f64 {
        self.links.iter().map(|l| l.distance_km).sum()
    }

    pub fn source(&self) -> Option<LocationId> {
        self.links.first().map(|l| l.from)
    }

    pub fn target(&self) -> Option<LocationId> {
        self.links.last().map(|l| l.to)
    }

    /// Every location on the route, source first.
    pub fn stops(&self) -> Vec<LocationId> {
        let mut out: Vec<LocationId> = self.links.iter().map(|l| l.from).collect();
        out.extend(self.target());
        out
    }
}
