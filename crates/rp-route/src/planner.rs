//! The query facade: names in, route out.

use log::debug;

use rp_core::{PlannerConfig, TransportMode};
use rp_spatial::{LinkGraph, LocationIndex};

use crate::{NoopObserver, PathAssembler, Route, RouteObserver, RouteQuery, ShortestPathSearch};

/// An immutable snapshot of locations and links that answers shortest-route
/// queries.
///
/// All query methods take `&self`; nothing is mutated while searching, so a
/// planner can be shared across threads and queried concurrently.  Loading
/// happens before construction, through `rp-load` or the builders.
///
/// # Example
///
/// ```
/// use rp_core::{Location, TransportMode, WayPoint};
/// use rp_spatial::{LinkGraphBuilder, LocationIndexBuilder};
/// use rp_route::RoutePlanner;
///
/// let mut ib = LocationIndexBuilder::new();
/// let a = ib.add(Location::new("A", "", 0, WayPoint::new(0.0, 0.0)));
/// let b = ib.add(Location::new("B", "", 0, WayPoint::new(1.0, 1.0)));
/// let mut gb = LinkGraphBuilder::new();
/// gb.add_link(a, b, 160.0, TransportMode::Road).unwrap();
///
/// let planner = RoutePlanner::new(ib.build(), gb.build());
/// let route = planner.find_shortest_route("a", "b", TransportMode::Road).unwrap();
/// assert_eq!(route.stops(), vec![a, b]);
/// assert!(planner.find_shortest_route("a", "b", TransportMode::Rail).is_none());
/// ```
pub struct RoutePlanner {
    index:    LocationIndex,
    graph:    LinkGraph,
    config:   PlannerConfig,
    observer: Box<dyn RouteObserver>,
}

impl RoutePlanner {
    pub fn new(index: LocationIndex, graph: LinkGraph) -> Self {
        Self {
            index,
            graph,
            config: PlannerConfig::default(),
            observer: Box::new(NoopObserver),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the hook called before every search.  Replaces any previous
    /// observer.
    pub fn with_observer(mut self, observer: impl RouteObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn graph(&self) -> &LinkGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Shortest route from `from` to `to` using only `mode` links.
    ///
    /// Names are matched case-insensitively.  Returns `None` when either
    /// name is unknown, no link carries `mode`, or the target cannot be
    /// reached within the candidate set.  Same source and target yields
    /// a trivial route with no links.
    pub fn find_shortest_route(&self, from: &str, to: &str, mode: TransportMode) -> Option<Route> {
        self.observer.on_route_request(from, to, mode);

        let (Some(source), Some(target)) = (self.index.find_by_name(from), self.index.find_by_name(to))
        else {
            debug!("{from} → {to}: unknown location");
            return None;
        };
        if !self.graph.has_mode(mode) {
            debug!("{from} → {to}: no {mode} links loaded");
            return None;
        }

        let candidates = self.index.candidates(source, target, self.config.candidates);
        let preds = ShortestPathSearch::new(&self.graph, self.config.selection)
            .run(&candidates, source, mode);

        let assembler = PathAssembler::new(&self.index);
        let Some(path) = assembler.reconstruct(source, target, &preds) else {
            debug!(
                "{from} → {to} by {mode}: unreachable among {} candidates",
                candidates.len()
            );
            return None;
        };
        let total_weight = preds.distance(target).unwrap_or(0.0);
        debug!(
            "{from} → {to} by {mode}: {} links, {total_weight:.3} km over {} candidates",
            path.len() - 1,
            candidates.len()
        );

        Some(Route {
            links: assembler.to_links(&path, mode),
            total_weight,
        })
    }

    /// Answer every query against the same snapshot, in input order.
    ///
    /// With the `parallel` feature the queries run on Rayon's pool.
    pub fn find_shortest_routes(&self, queries: &[RouteQuery]) -> Vec<Option<Route>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            queries
                .par_iter()
                .map(|q| self.find_shortest_route(&q.from, &q.to, q.mode))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            queries
                .iter()
                .map(|q| self.find_shortest_route(&q.from, &q.to, q.mode))
                .collect()
        }
    }
}
