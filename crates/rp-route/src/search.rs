//! Dijkstra relaxation over a restricted candidate set.
//!
//! # State machine
//!
//! ```text
//! init:  dist[source] = 0, dist[*] = ∞, pred[*] = none, unvisited = candidates
//! loop:  u = unvisited location with minimum finite dist (first in
//!            candidate order on ties); none → stop
//!        remove u from unvisited
//!        for n in neighbors_of(u, mode) ∩ candidates, n still unvisited:
//!            w = edge_between(u, n, mode) weight, ∞ if missing
//!            if dist[u] + w < dist[n]: dist[n] = dist[u] + w; pred[n] = u
//! ```
//!
//! All scratch state is owned by one [`ShortestPathSearch::run`] call and
//! returned as [`Predecessors`]; the graph is only borrowed.
//!
//! # Selection strategies
//!
//! [`MinSelection::LinearScan`] scans the unvisited list every step.
//! [`MinSelection::BinaryHeap`] keys a min-heap on `(dist, candidate
//! position)`, which pops locations in exactly the order the scan settles
//! them, so both strategies return identical predecessor maps.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::trace;

use rp_core::{LocationId, MinSelection, TransportMode};
use rp_spatial::LinkGraph;

/// Candidate location → slot in the per-search vectors.
#[cfg(feature = "fx-hash")]
type SlotMap = rustc_hash::FxHashMap<LocationId, usize>;
#[cfg(not(feature = "fx-hash"))]
type SlotMap = std::collections::HashMap<LocationId, usize>;

// ── Predecessors ──────────────────────────────────────────────────────────────

/// Result of one search: best distances and predecessor links, keyed by
/// candidate.
#[derive(Debug, Clone)]
pub struct Predecessors {
    source:     LocationId,
    slots:      SlotMap,
    dist:       Vec<f64>,
    pred:       Vec<Option<LocationId>>,
    settled:    Vec<LocationId>,
    /// Per slot: already removed from the unvisited set.
    is_settled: Vec<bool>,
}

impl Predecessors {
    pub fn source(&self) -> LocationId {
        self.source
    }

    /// Best-known distance to `loc`: `None` if `loc` was not a candidate,
    /// `Some(f64::INFINITY)` if it was never reached.
    pub fn distance(&self, loc: LocationId) -> Option<f64> {
        self.slots.get(&loc).map(|&s| self.dist[s])
    }

    /// The location `loc` was reached from on its best path.
    pub fn predecessor(&self, loc: LocationId) -> Option<LocationId> {
        self.slots.get(&loc).and_then(|&s| self.pred[s])
    }

    /// `true` if `loc` is a candidate with a finite distance.
    pub fn is_reached(&self, loc: LocationId) -> bool {
        self.distance(loc).is_some_and(f64::is_finite)
    }

    /// Locations in the order they were removed from the unvisited set.
    pub fn settled(&self) -> &[LocationId] {
        &self.settled
    }
}

// ── ShortestPathSearch ────────────────────────────────────────────────────────

/// Single-mode Dijkstra over a borrowed [`LinkGraph`].
///
/// Cheap to construct; holds no per-search state, so one value can serve
/// any number of concurrent searches.
#[derive(Clone, Copy)]
pub struct ShortestPathSearch<'g> {
    graph:     &'g LinkGraph,
    selection: MinSelection,
}

impl<'g> ShortestPathSearch<'g> {
    pub fn new(graph: &'g LinkGraph, selection: MinSelection) -> Self {
        Self { graph, selection }
    }

    /// Compute best distances from `source` over `candidates`, following
    /// only links tagged `mode`.
    ///
    /// Neighbors outside `candidates` are never relaxed.  If `source` is not
    /// itself a candidate nothing is reached.
    pub fn run(
        &self,
        candidates: &[LocationId],
        source: LocationId,
        mode: TransportMode,
    ) -> Predecessors {
        let n = candidates.len();
        let mut slots = SlotMap::with_capacity_and_hasher(n, Default::default());
        for (i, &loc) in candidates.iter().enumerate() {
            // Duplicate candidates share their first slot.
            slots.entry(loc).or_insert(i);
        }

        let mut state = Predecessors {
            source,
            slots,
            dist:       vec![f64::INFINITY; n],
            pred:       vec![None; n],
            settled:    Vec::with_capacity(n),
            is_settled: vec![false; n],
        };
        let Some(&src) = state.slots.get(&source) else {
            return state;
        };
        state.dist[src] = 0.0;

        match self.selection {
            MinSelection::LinearScan => self.linear_scan(candidates, &mut state, mode),
            MinSelection::BinaryHeap => self.binary_heap(candidates, src, &mut state, mode),
        }
        state
    }

    fn linear_scan(&self, candidates: &[LocationId], state: &mut Predecessors, mode: TransportMode) {
        // Positions into `candidates`, kept in candidate order.
        let mut unvisited: Vec<usize> = (0..candidates.len())
            .filter(|&i| state.slots[&candidates[i]] == i)
            .collect();

        while !unvisited.is_empty() {
            let mut best: Option<usize> = None;
            let mut min_dist = f64::INFINITY;
            for (k, &slot) in unvisited.iter().enumerate() {
                if state.dist[slot] < min_dist {
                    best = Some(k);
                    min_dist = state.dist[slot];
                }
            }
            // Everything left is unreachable.
            let Some(k) = best else { break };

            let slot = unvisited.remove(k);
            self.settle(candidates[slot], slot, state, mode, |_, _| {});
        }
    }

    fn binary_heap(
        &self,
        candidates: &[LocationId],
        src: usize,
        state: &mut Predecessors,
        mode: TransportMode,
    ) {
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        heap.push(Reverse(HeapEntry { dist: 0.0, slot: src }));

        while let Some(Reverse(HeapEntry { dist, slot })) = heap.pop() {
            // Skip settled and stale entries.
            if state.is_settled[slot] || dist > state.dist[slot] {
                continue;
            }
            self.settle(candidates[slot], slot, state, mode, |slot, dist| {
                heap.push(Reverse(HeapEntry { dist, slot }));
            });
        }
    }

    /// Remove `u` from play and relax its `mode` neighbors.  `on_improve` is
    /// told about every slot whose distance dropped.
    fn settle(
        &self,
        u: LocationId,
        u_slot: usize,
        state: &mut Predecessors,
        mode: TransportMode,
        mut on_improve: impl FnMut(usize, f64),
    ) {
        trace!("settled {u} at {:.3} km", state.dist[u_slot]);
        state.settled.push(u);
        state.is_settled[u_slot] = true;

        let base = state.dist[u_slot];
        for n in self.graph.neighbors_of(u, mode) {
            let Some(&n_slot) = state.slots.get(&n) else {
                continue;
            };
            // A settled location keeps its predecessor, so the chain stays
            // acyclic.
            if state.is_settled[n_slot] {
                continue;
            }
            // Neighbors come from existing links, but never assume the edge.
            let weight = self
                .graph
                .edge_between(u, n, mode)
                .map_or(f64::INFINITY, |l| l.distance_km);
            let d = base + weight;
            if d < state.dist[n_slot] {
                state.dist[n_slot] = d;
                state.pred[n_slot] = Some(u);
                on_improve(n_slot, d);
            }
        }
    }
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// Min-heap key.  Ordered by distance, then by candidate position so that
/// ties resolve the way the linear scan does.
#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    dist: f64,
    slot: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.slot.cmp(&other.slot))
    }
}
