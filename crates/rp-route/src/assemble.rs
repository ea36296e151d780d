//! Turning a predecessor map into an ordered list of links.
//!
//! Emitted links carry the **geometric** distance between their endpoints,
//! recomputed from coordinates, not the stored edge weight the search
//! relaxed over.  When a stored weight is a real road length the two
//! differ; [`Route::total_weight`](crate::Route::total_weight) keeps the
//! searched value.

use rp_core::{LocationId, TransportMode};
use rp_spatial::{Link, LocationIndex};

use crate::Predecessors;

/// Builds location sequences and link lists against one `LocationIndex`.
pub struct PathAssembler<'a> {
    index: &'a LocationIndex,
}

impl<'a> PathAssembler<'a> {
    pub fn new(index: &'a LocationIndex) -> Self {
        Self { index }
    }

    /// Follow predecessors back from `target` and return `[source, …, target]`.
    ///
    /// Returns `None` when the chain does not lead back to `source`, i.e. the
    /// target was not reached.
    pub fn reconstruct(
        &self,
        source: LocationId,
        target: LocationId,
        preds: &Predecessors,
    ) -> Option<Vec<LocationId>> {
        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = preds.predecessor(cur) {
            path.push(prev);
            cur = prev;
        }
        if cur != source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    /// One link per consecutive pair of `path`, tagged `mode`, with the
    /// geometric distance between the pair.
    pub fn to_links(&self, path: &[LocationId], mode: TransportMode) -> Vec<Link> {
        path.windows(2)
            .map(|w| {
                let (a, b) = (w[0], w[1]);
                let km = self.index.location(a).distance_km(self.index.location(b));
                Link::new(a, b, km, mode)
            })
            .collect()
    }
}
