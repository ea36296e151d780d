//! Location storage, name lookup, and geometric restriction queries.
//!
//! # Storage
//!
//! Locations live in a `Vec` indexed by `LocationId`, in insertion order.
//! A folded-name map gives O(1) case-insensitive lookup; when two records
//! share a name, the first one inserted wins.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[lat, lon]` answers the bounding-box
//! restriction without a full scan.  Its envelope query is inclusive, so
//! the strict-interior filter is applied afterwards.

use std::collections::HashMap;

use rstar::{AABB, RTree, RTreeObject};

use rp_core::{CandidateSet, Location, LocationId, WayPoint, fold_name};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a 2-D `[lat, lon]` point with its id.
#[derive(Clone)]
struct LocationEntry {
    point: [f64; 2], // [lat, lon]
    id:    LocationId,
}

impl RTreeObject for LocationEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── LocationIndex ─────────────────────────────────────────────────────────────

/// Every known location, with name and geometric lookups.
///
/// Do not construct directly; use [`LocationIndexBuilder`].
pub struct LocationIndex {
    locations:   Vec<Location>,
    by_name:     HashMap<String, LocationId>,
    spatial_idx: RTree<LocationEntry>,
}

impl LocationIndex {
    /// An index with no locations.  Every lookup against it returns `None`.
    pub fn empty() -> Self {
        LocationIndexBuilder::new().build()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The location stored under `id`.
    ///
    /// # Panics
    /// If `id` was not issued by this index.
    #[inline]
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    /// Like [`location`](Self::location) but returns `None` for foreign ids.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// All locations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> + '_ {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, loc)| (LocationId::from_index(i), loc))
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(&fold_name(name)).copied()
    }

    /// Every location within `max_km` of `origin` (inclusive), nearest first.
    ///
    /// Locations at exactly the same distance are all kept, in insertion
    /// order.
    pub fn find_within_radius(&self, origin: WayPoint, max_km: f64) -> Vec<LocationId> {
        let mut hits: Vec<(f64, LocationId)> = self
            .iter()
            .filter_map(|(id, loc)| {
                let d = origin.distance_km(loc.position());
                (d <= max_km).then_some((d, id))
            })
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.into_iter().map(|(_, id)| id).collect()
    }

    /// `[from, interior…, to]`: `from`, every location strictly inside the
    /// lat/lon rectangle spanned by `from` and `to` (insertion order), then
    /// `to`.  Locations on the rectangle boundary are excluded.  `to` is not
    /// repeated when it is `from`.
    ///
    /// This is a pruning heuristic: a shortest path that leaves the
    /// rectangle will not be found.
    pub fn restrict_to_bounding_box(&self, from: LocationId, to: LocationId) -> Vec<LocationId> {
        let a = self.location(from).position();
        let b = self.location(to).position();

        let envelope = AABB::from_corners(
            [a.lat.min(b.lat), a.lon.min(b.lon)],
            [a.lat.max(b.lat), a.lon.max(b.lon)],
        );
        let mut interior: Vec<LocationId> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .filter(|e| WayPoint::new(e.point[0], e.point[1]).strictly_between(a, b))
            .map(|e| e.id)
            .collect();
        // R-tree order is arbitrary; ids restore load order.
        interior.sort_unstable();

        bracket(from, interior, to)
    }

    /// `[from, every other location…, to]` with no geometric pruning.
    pub fn all_between(&self, from: LocationId, to: LocationId) -> Vec<LocationId> {
        let others = self
            .iter()
            .map(|(id, _)| id)
            .filter(|&id| id != from && id != to)
            .collect();
        bracket(from, others, to)
    }

    /// The candidate set a search from `from` to `to` may visit.
    pub fn candidates(&self, from: LocationId, to: LocationId, set: CandidateSet) -> Vec<LocationId> {
        match set {
            CandidateSet::BoundingBox => self.restrict_to_bounding_box(from, to),
            CandidateSet::All => self.all_between(from, to),
        }
    }
}

fn bracket(from: LocationId, middle: Vec<LocationId>, to: LocationId) -> Vec<LocationId> {
    let mut out = Vec::with_capacity(middle.len() + 2);
    out.push(from);
    out.extend(middle);
    if to != from {
        out.push(to);
    }
    out
}

// ── LocationIndexBuilder ──────────────────────────────────────────────────────

/// Collect locations, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rp_core::{Location, WayPoint};
/// use rp_spatial::LocationIndexBuilder;
///
/// let mut b = LocationIndexBuilder::new();
/// let bern = b.add(Location::new("Bern", "CH", 134_000, WayPoint::new(46.948, 7.447)));
/// let index = b.build();
/// assert_eq!(index.find_by_name("BERN"), Some(bern));
/// ```
pub struct LocationIndexBuilder {
    locations: Vec<Location>,
}

impl LocationIndexBuilder {
    pub fn new() -> Self {
        Self { locations: Vec::new() }
    }

    /// Pre-allocate for the expected number of locations.
    pub fn with_capacity(locations: usize) -> Self {
        Self { locations: Vec::with_capacity(locations) }
    }

    /// Add a location and return its `LocationId` (sequential from 0).
    pub fn add(&mut self, location: Location) -> LocationId {
        let id = LocationId::from_index(self.locations.len());
        self.locations.push(location);
        id
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Consume the builder and produce a [`LocationIndex`].
    pub fn build(self) -> LocationIndex {
        let mut by_name = HashMap::with_capacity(self.locations.len());
        for (i, loc) in self.locations.iter().enumerate() {
            by_name
                .entry(loc.name_key())
                .or_insert(LocationId::from_index(i));
        }

        // Bulk-load for O(N log N) construction.  A point with a NaN or
        // infinite component has no envelope and never lies in a box.
        let entries: Vec<LocationEntry> = self
            .locations
            .iter()
            .enumerate()
            .filter(|(_, loc)| loc.position().is_finite())
            .map(|(i, loc)| LocationEntry {
                point: [loc.position().lat, loc.position().lon],
                id:    LocationId::from_index(i),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        LocationIndex {
            locations: self.locations,
            by_name,
            spatial_idx,
        }
    }
}

impl Default for LocationIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
