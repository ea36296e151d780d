//! Planner configuration.
//!
//! Typically built in code by the application, or deserialized from a
//! config file with the `serde` feature, and handed to
//! `RoutePlanner::with_config`.

/// Which locations a search is allowed to visit.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CandidateSet {
    /// Source, target and every location strictly inside the rectangle they
    /// span.  Can miss a shortest path that detours outside the rectangle.
    #[default]
    BoundingBox,
    /// Every known location.  Exact, but the search cost grows with the
    /// whole index.
    All,
}

/// How the next location to settle is picked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MinSelection {
    /// Scan the unvisited set on every step.  O(n²) over the candidate set,
    /// fine for the small sets produced by bounding-box pruning.
    #[default]
    LinearScan,
    /// Binary heap keyed on `(distance, candidate position)`.  Settles
    /// locations in exactly the same order as `LinearScan`.
    BinaryHeap,
}

/// Top-level planner configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Candidate restriction applied before every search.
    pub candidates: CandidateSet,

    /// Minimum-selection strategy used by the relaxation loop.
    pub selection: MinSelection,
}
