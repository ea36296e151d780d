//! Undirected, mode-tagged link graph.
//!
//! # Data layout
//!
//! Links are stored once, in insertion order, indexed by `LinkId`.  For each
//! transport mode the builder derives a **Compressed Sparse Row** adjacency:
//! the links touching location `n` under mode `m` occupy
//!
//! ```text
//! adjacency[m].links[ adjacency[m].start[n] .. adjacency[m].start[n+1] ]
//! ```
//!
//! The CSR is built with a stable sort, so within one location the links
//! keep their insertion order.  Neighbor iteration order therefore equals
//! link load order, which is what search tie-breaking relies on.

use std::collections::HashMap;
use std::fmt;

use rp_core::{LinkId, LocationId, TransportMode};

use crate::{LocationIndex, SpatialError, SpatialResult};

// ── Link ──────────────────────────────────────────────────────────────────────

/// An undirected, weighted edge between two locations.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub from:        LocationId,
    pub to:          LocationId,
    /// Edge weight in kilometres.  Never negative.
    pub distance_km: f64,
    pub mode:        TransportMode,
}

impl Link {
    pub fn new(from: LocationId, to: LocationId, distance_km: f64, mode: TransportMode) -> Self {
        Self { from, to, distance_km, mode }
    }

    /// `true` if this link joins `a` and `b`, in either direction.
    #[inline]
    pub fn connects(&self, a: LocationId, b: LocationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// The endpoint opposite `loc`, or `None` if `loc` is not an endpoint.
    #[inline]
    pub fn other_end(&self, loc: LocationId) -> Option<LocationId> {
        if self.from == loc {
            Some(self.to)
        } else if self.to == loc {
            Some(self.from)
        } else {
            None
        }
    }
}

// ── Per-mode adjacency ────────────────────────────────────────────────────────

struct ModeAdjacency {
    /// CSR row pointer; length = `max location index + 2`.
    start: Vec<u32>,
    links: Vec<LinkId>,
}

impl ModeAdjacency {
    fn incident(&self, loc: LocationId) -> &[LinkId] {
        let n = loc.index();
        if n + 1 >= self.start.len() {
            return &[];
        }
        &self.links[self.start[n] as usize..self.start[n + 1] as usize]
    }
}

// ── LinkGraph ─────────────────────────────────────────────────────────────────

/// Every transport link, with per-mode adjacency.
///
/// Do not construct directly; use [`LinkGraphBuilder`].
pub struct LinkGraph {
    links:     Vec<Link>,
    adjacency: HashMap<TransportMode, ModeAdjacency>,
}

impl LinkGraph {
    /// A graph with no links.
    pub fn empty() -> Self {
        LinkGraphBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    /// All links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// `true` if at least one link is tagged `mode`.
    pub fn has_mode(&self, mode: TransportMode) -> bool {
        self.adjacency.contains_key(&mode)
    }

    /// Links tagged `mode`, in insertion order.
    pub fn links_for(&self, mode: TransportMode) -> impl Iterator<Item = &Link> + '_ {
        self.links.iter().filter(move |l| l.mode == mode)
    }

    /// Ids of the `mode` links touching `loc`, in insertion order.
    pub fn incident(&self, loc: LocationId, mode: TransportMode) -> &[LinkId] {
        self.adjacency
            .get(&mode)
            .map_or(&[][..], |adj| adj.incident(loc))
    }

    /// The far endpoint of every `mode` link touching `loc`.
    ///
    /// Yields one entry per link, so parallel links produce repeated
    /// neighbors.  Order is link insertion order.
    pub fn neighbors_of(
        &self,
        loc: LocationId,
        mode: TransportMode,
    ) -> impl Iterator<Item = LocationId> + '_ {
        self.incident(loc, mode)
            .iter()
            .filter_map(move |&id| self.links[id.index()].other_end(loc))
    }

    /// The first `mode` link joining `a` and `b`, in either direction.
    pub fn edge_between(&self, a: LocationId, b: LocationId, mode: TransportMode) -> Option<&Link> {
        self.incident(a, mode)
            .iter()
            .map(|&id| &self.links[id.index()])
            .find(|l| l.connects(a, b))
    }

    /// Every location that is an endpoint of some `mode` link.
    ///
    /// De-duplicated: all distinct `from` endpoints in first-seen order,
    /// followed by the `to` endpoints not already listed.
    pub fn locations_served_by(&self, mode: TransportMode) -> Vec<LocationId> {
        let mut seen = vec![false; self.location_bound()];
        let mut out = Vec::new();
        let froms = self.links_for(mode).map(|l| l.from);
        let tos = self.links_for(mode).map(|l| l.to);
        for loc in froms.chain(tos) {
            if !seen[loc.index()] {
                seen[loc.index()] = true;
                out.push(loc);
            }
        }
        out
    }

    /// One past the highest location index referenced by any link.
    fn location_bound(&self) -> usize {
        self.links
            .iter()
            .map(|l| l.from.index().max(l.to.index()) + 1)
            .max()
            .unwrap_or(0)
    }
}

// ── LinkGraphBuilder ──────────────────────────────────────────────────────────

/// Collect links in any order, then call [`build`](Self::build).
///
/// Endpoints are not checked against a `LocationIndex` when added by id;
/// [`add_link_between`](Self::add_link_between) resolves names and
/// validates the distance.
///
/// # Example
///
/// ```
/// use rp_core::{LocationId, TransportMode};
/// use rp_spatial::LinkGraphBuilder;
///
/// let mut b = LinkGraphBuilder::new();
/// b.add_link(LocationId(0), LocationId(1), 95.0, TransportMode::Rail).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.neighbors_of(LocationId(1), TransportMode::Rail).collect::<Vec<_>>(), [LocationId(0)]);
/// assert_eq!(graph.neighbors_of(LocationId(1), TransportMode::Road).count(), 0);
/// ```
pub struct LinkGraphBuilder {
    links: Vec<Link>,
}

impl LinkGraphBuilder {
    pub fn new() -> Self {
        Self { links: Vec::new() }
    }

    pub fn with_capacity(links: usize) -> Self {
        Self { links: Vec::with_capacity(links) }
    }

    /// Add an undirected link and return its `LinkId` (sequential from 0).
    ///
    /// Fails with [`SpatialError::InvalidDistance`] unless `distance_km` is
    /// finite and non-negative.
    pub fn add_link(
        &mut self,
        from: LocationId,
        to: LocationId,
        distance_km: f64,
        mode: TransportMode,
    ) -> SpatialResult<LinkId> {
        check_distance(&from, &to, distance_km)?;
        let id = LinkId::from_index(self.links.len());
        self.links.push(Link::new(from, to, distance_km, mode));
        Ok(id)
    }

    /// Add a link between two named locations of `index`.
    ///
    /// With `distance_km = None` the weight is the geometric distance
    /// between the two endpoints.
    pub fn add_link_between(
        &mut self,
        index: &LocationIndex,
        from: &str,
        to: &str,
        distance_km: Option<f64>,
        mode: TransportMode,
    ) -> SpatialResult<LinkId> {
        let resolve = |name: &str| {
            index
                .find_by_name(name)
                .ok_or_else(|| SpatialError::UnknownLocation(name.to_owned()))
        };
        let a = resolve(from)?;
        let b = resolve(to)?;

        let distance = distance_km
            .unwrap_or_else(|| index.location(a).distance_km(index.location(b)));
        // Report by name rather than by id.
        check_distance(&from, &to, distance)?;
        self.add_link(a, b, distance, mode)
    }

    /// Move every link of `other` to the end of this builder, keeping their
    /// relative order.
    pub fn append(&mut self, mut other: LinkGraphBuilder) {
        self.links.append(&mut other.links);
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Consume the builder and produce a [`LinkGraph`].
    ///
    /// Time complexity: O(E log E) for the per-mode stable sorts.
    pub fn build(self) -> LinkGraph {
        // (endpoint, link) incidence pairs per mode, in link order.
        let mut incidence: HashMap<TransportMode, Vec<(LocationId, LinkId)>> = HashMap::new();
        for (i, l) in self.links.iter().enumerate() {
            let id = LinkId::from_index(i);
            let pairs = incidence.entry(l.mode).or_default();
            pairs.push((l.from, id));
            if l.to != l.from {
                pairs.push((l.to, id));
            }
        }

        let adjacency = incidence
            .into_iter()
            .map(|(mode, mut pairs)| {
                // Stable: links touching one location keep insertion order.
                pairs.sort_by_key(|&(loc, _)| loc);

                let bound = pairs.last().map_or(0, |&(loc, _)| loc.index() + 1);
                let mut start = vec![0u32; bound + 1];
                for &(loc, _) in &pairs {
                    start[loc.index() + 1] += 1;
                }
                for i in 1..=bound {
                    start[i] += start[i - 1];
                }
                debug_assert_eq!(start[bound] as usize, pairs.len());

                let links = pairs.into_iter().map(|(_, id)| id).collect();
                (mode, ModeAdjacency { start, links })
            })
            .collect();

        LinkGraph { links: self.links, adjacency }
    }
}

/// Link weights must be finite and non-negative.
fn check_distance(from: &dyn fmt::Display, to: &dyn fmt::Display, distance: f64) -> SpatialResult<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(SpatialError::InvalidDistance {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        });
    }
    Ok(())
}

impl Default for LinkGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
