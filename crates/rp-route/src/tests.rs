//! Unit and property tests for rp-route.

use rp_core::{CandidateSet, Location, LocationId, MinSelection, PlannerConfig, TransportMode, WayPoint};
use rp_spatial::{LinkGraph, LinkGraphBuilder, LocationIndex, LocationIndexBuilder};

use crate::{Route, RoutePlanner};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn loc(name: &str, lat: f64, lon: f64) -> Location {
    Location::new(name, "XX", 1_000, WayPoint::new(lat, lon))
}

fn all_candidates() -> PlannerConfig {
    PlannerConfig { candidates: CandidateSet::All, ..PlannerConfig::default() }
}

/// A(0,0) B(1,0) C(2,0) D(1,1); road A–B 1, B–C 1, A–D 5, D–C 1.
fn diamond() -> (LocationIndex, LinkGraph, [LocationId; 4]) {
    let mut ib = LocationIndexBuilder::new();
    let a = ib.add(loc("A", 0.0, 0.0));
    let b = ib.add(loc("B", 1.0, 0.0));
    let c = ib.add(loc("C", 2.0, 0.0));
    let d = ib.add(loc("D", 1.0, 1.0));

    let mut gb = LinkGraphBuilder::new();
    gb.add_link(a, b, 1.0, TransportMode::Road).unwrap();
    gb.add_link(b, c, 1.0, TransportMode::Road).unwrap();
    gb.add_link(a, d, 5.0, TransportMode::Road).unwrap();
    gb.add_link(d, c, 1.0, TransportMode::Road).unwrap();

    (ib.build(), gb.build(), [a, b, c, d])
}

/// S(0,0) … T(3,3) with interior P(1,1) Q(2,2) R(1,2) and O(5,5) outside.
///
/// Road: S–P 2, P–Q 2, Q–T 2, S–R 1, R–T 10, P–R 2, S–O 1, O–T 1.
/// Inside the box the best is S-P-Q-T (6); the detour through O costs 2.
fn boxed() -> (LocationIndex, LinkGraph, [LocationId; 6]) {
    let mut ib = LocationIndexBuilder::new();
    let s = ib.add(loc("S", 0.0, 0.0));
    let p = ib.add(loc("P", 1.0, 1.0));
    let q = ib.add(loc("Q", 2.0, 2.0));
    let r = ib.add(loc("R", 1.0, 2.0));
    let o = ib.add(loc("O", 5.0, 5.0));
    let t = ib.add(loc("T", 3.0, 3.0));

    let mut gb = LinkGraphBuilder::new();
    for (x, y, w) in [(s, p, 2.0), (p, q, 2.0), (q, t, 2.0), (s, r, 1.0), (r, t, 10.0), (p, r, 2.0), (s, o, 1.0), (o, t, 1.0)] {
        gb.add_link(x, y, w, TransportMode::Road).unwrap();
    }
    (ib.build(), gb.build(), [s, p, q, r, o, t])
}

/// First link starts at `source`, last ends at `target`, neighbours chain.
fn assert_connected(route: &Route, source: LocationId, target: LocationId) {
    assert_eq!(route.source(), Some(source));
    assert_eq!(route.target(), Some(target));
    for pair in route.links.windows(2) {
        assert_eq!(pair[0].to, pair[1].from, "links do not chain: {pair:?}");
    }
}

// ── ShortestPathSearch ────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use super::*;
    use crate::ShortestPathSearch;

    #[test]
    fn distances_and_predecessors() {
        let (_, graph, [a, b, c, d]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[a, b, d, c], a, TransportMode::Road);

        assert_eq!(preds.distance(a), Some(0.0));
        assert_eq!(preds.distance(b), Some(1.0));
        assert_eq!(preds.distance(c), Some(2.0));
        assert_eq!(preds.distance(d), Some(3.0)); // via C, not the direct 5
        assert_eq!(preds.predecessor(a), None);
        assert_eq!(preds.predecessor(c), Some(b));
        assert_eq!(preds.predecessor(d), Some(c));
        assert_eq!(preds.settled(), &[a, b, c, d]);
    }

    #[test]
    fn non_candidates_are_never_relaxed() {
        let (_, graph, [a, b, c, d]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[a, d, c], a, TransportMode::Road);
        assert_eq!(preds.distance(b), None);
        assert_eq!(preds.distance(c), Some(6.0));
        assert_eq!(preds.predecessor(c), Some(d));
    }

    #[test]
    fn unreachable_stops_early() {
        let (_, graph, [a, b, c, d]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[a, b, c, d], a, TransportMode::Rail);
        assert_eq!(preds.settled(), &[a]);
        assert_eq!(preds.distance(c), Some(f64::INFINITY));
        assert!(!preds.is_reached(c));
        assert!(preds.is_reached(a));
    }

    #[test]
    fn source_outside_candidates_reaches_nothing() {
        let (_, graph, [a, b, c, _]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::BinaryHeap)
            .run(&[b, c], a, TransportMode::Road);
        assert!(preds.settled().is_empty());
        assert!(!preds.is_reached(b));
    }

    #[test]
    fn ties_break_by_candidate_order() {
        // S–X 1, S–Y 1, X–T 1, Y–T 1: two equal paths to T.
        let (s, x, y, t) = (LocationId(0), LocationId(1), LocationId(2), LocationId(3));
        let mut gb = LinkGraphBuilder::new();
        gb.add_link(s, x, 1.0, TransportMode::Road).unwrap();
        gb.add_link(s, y, 1.0, TransportMode::Road).unwrap();
        gb.add_link(x, t, 1.0, TransportMode::Road).unwrap();
        gb.add_link(y, t, 1.0, TransportMode::Road).unwrap();
        let graph = gb.build();

        for selection in [MinSelection::LinearScan, MinSelection::BinaryHeap] {
            let search = ShortestPathSearch::new(&graph, selection);
            let xy = search.run(&[s, x, y, t], s, TransportMode::Road);
            assert_eq!(xy.predecessor(t), Some(x), "{selection:?}");
            assert_eq!(xy.settled(), &[s, x, y, t], "{selection:?}");

            let yx = search.run(&[s, y, x, t], s, TransportMode::Road);
            assert_eq!(yx.predecessor(t), Some(y), "{selection:?}");
            assert_eq!(yx.settled(), &[s, y, x, t], "{selection:?}");
        }
    }

    #[test]
    fn zero_weight_cycle_keeps_predecessor_chain_acyclic() {
        // S–X 0, X–Y 0, Y–S 0: every location ties at distance 0.
        let (s, x, y) = (LocationId(0), LocationId(1), LocationId(2));
        let mut gb = LinkGraphBuilder::new();
        gb.add_link(s, x, 0.0, TransportMode::Road).unwrap();
        gb.add_link(x, y, 0.0, TransportMode::Road).unwrap();
        gb.add_link(y, s, 0.0, TransportMode::Road).unwrap();
        let graph = gb.build();

        for selection in [MinSelection::LinearScan, MinSelection::BinaryHeap] {
            let preds = ShortestPathSearch::new(&graph, selection).run(&[s, x, y], s, TransportMode::Road);
            assert_eq!(preds.predecessor(s), None, "{selection:?}");
            assert_eq!(preds.predecessor(x), Some(s), "{selection:?}");
            assert_eq!(preds.predecessor(y), Some(s), "{selection:?}");
            assert_eq!(preds.settled().len(), 3, "{selection:?}");
        }
    }

    #[test]
    fn parallel_links_use_first_weight() {
        let (s, t) = (LocationId(0), LocationId(1));
        let mut gb = LinkGraphBuilder::new();
        gb.add_link(s, t, 9.0, TransportMode::Road).unwrap();
        gb.add_link(t, s, 2.0, TransportMode::Road).unwrap();
        let graph = gb.build();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[s, t], s, TransportMode::Road);
        assert_eq!(preds.distance(t), Some(9.0));
    }
}

// ── PathAssembler ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod assemble {
    use super::*;
    use crate::{PathAssembler, ShortestPathSearch};

    #[test]
    fn reconstruct_source_to_target() {
        let (index, graph, [a, b, c, d]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[a, b, d, c], a, TransportMode::Road);
        let asm = PathAssembler::new(&index);
        assert_eq!(asm.reconstruct(a, c, &preds), Some(vec![a, b, c]));
        assert_eq!(asm.reconstruct(a, d, &preds), Some(vec![a, b, c, d]));
        assert_eq!(asm.reconstruct(a, a, &preds), Some(vec![a]));
    }

    #[test]
    fn reconstruct_unreached_is_none() {
        let (index, graph, [a, b, c, d]) = diamond();
        let preds = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
            .run(&[a, b, c, d], a, TransportMode::Air);
        assert_eq!(PathAssembler::new(&index).reconstruct(a, c, &preds), None);
    }

    #[test]
    fn links_carry_geometric_distance() {
        let (index, _, [a, b, c, _]) = diamond();
        let links = PathAssembler::new(&index).to_links(&[a, b, c], TransportMode::Bus);
        assert_eq!(links.len(), 2);
        let ab = index.location(a).distance_km(index.location(b));
        assert_eq!(links[0].distance_km, ab);
        assert!((ab - 111.195).abs() < 0.01);
        assert!(links.iter().all(|l| l.mode == TransportMode::Bus));
        assert_eq!((links[1].from, links[1].to), (b, c));
    }

    #[test]
    fn single_location_has_no_links() {
        let (index, _, [a, ..]) = diamond();
        assert!(PathAssembler::new(&index).to_links(&[a], TransportMode::Road).is_empty());
    }
}

// ── RoutePlanner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::RouteQuery;

    #[test]
    fn diamond_prefers_two_hop_path() {
        let (index, graph, [a, b, c, _]) = diamond();
        let planner = RoutePlanner::new(index, graph).with_config(all_candidates());
        let route = planner.find_shortest_route("A", "C", TransportMode::Road).unwrap();

        assert_eq!(route.stops(), vec![a, b, c]);
        assert_eq!(route.total_weight, 2.0);
        assert_connected(&route, a, c);
    }

    #[test]
    fn diamond_degenerate_box_prunes_every_intermediate() {
        // A and C share a longitude: the box has no interior, and there is
        // no direct A–C road.
        let (index, graph, _) = diamond();
        let planner = RoutePlanner::new(index, graph);
        assert!(planner.find_shortest_route("A", "C", TransportMode::Road).is_none());
    }

    #[test]
    fn bounding_box_route_stays_inside() {
        let (index, graph, [s, p, q, _, _, t]) = boxed();
        let planner = RoutePlanner::new(index, graph);
        let route = planner.find_shortest_route("s", "T", TransportMode::Road).unwrap();
        assert_eq!(route.stops(), vec![s, p, q, t]);
        assert_eq!(route.total_weight, 6.0);
        assert_connected(&route, s, t);
    }

    #[test]
    fn all_candidates_finds_outside_detour() {
        let (index, graph, [s, _, _, _, o, t]) = boxed();
        let planner = RoutePlanner::new(index, graph).with_config(all_candidates());
        let route = planner.find_shortest_route("S", "T", TransportMode::Road).unwrap();
        assert_eq!(route.stops(), vec![s, o, t]);
        assert_eq!(route.total_weight, 2.0);
    }

    #[test]
    fn geometric_total_differs_from_search_weight() {
        let (index, graph, _) = boxed();
        let planner = RoutePlanner::new(index, graph);
        let route = planner.find_shortest_route("S", "T", TransportMode::Road).unwrap();
        // Stored weights are tiny; emitted links are great-circle kilometres.
        assert!(route.geometric_km() > 400.0);
        assert_eq!(route.total_weight, 6.0);
    }

    #[test]
    fn islands_are_unreachable_by_road() {
        let mut ib = LocationIndexBuilder::new();
        let a = ib.add(loc("Dover", 0.0, 0.0));
        let b = ib.add(loc("Calais", 1.0, 1.0));
        let mut gb = LinkGraphBuilder::new();
        gb.add_link(a, b, 50.0, TransportMode::Rail).unwrap();
        let planner = RoutePlanner::new(ib.build(), gb.build());

        assert!(planner.find_shortest_route("Dover", "Calais", TransportMode::Road).is_none());
        let rail = planner.find_shortest_route("Dover", "Calais", TransportMode::Rail).unwrap();
        assert_connected(&rail, a, b);
    }

    #[test]
    fn unknown_names_are_none() {
        let (index, graph, _) = diamond();
        let planner = RoutePlanner::new(index, graph);
        assert!(planner.find_shortest_route("Atlantis", "C", TransportMode::Road).is_none());
        assert!(planner.find_shortest_route("A", "", TransportMode::Road).is_none());
    }

    #[test]
    fn empty_graph_is_none_even_for_same_location() {
        let (index, _, _) = diamond();
        let planner = RoutePlanner::new(index, LinkGraph::empty());
        assert!(planner.find_shortest_route("A", "A", TransportMode::Road).is_none());
        assert!(planner.find_shortest_route("A", "B", TransportMode::Road).is_none());
    }

    #[test]
    fn mode_without_links_is_none_even_for_same_location() {
        let (index, graph, _) = diamond();
        let planner = RoutePlanner::new(index, graph);
        assert!(planner.find_shortest_route("A", "A", TransportMode::Tram).is_none());
    }

    #[test]
    fn same_location_is_trivial_route() {
        let (index, graph, _) = diamond();
        let planner = RoutePlanner::new(index, graph);
        let route = planner.find_shortest_route("b", "B", TransportMode::Road).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.total_weight, 0.0);
        assert!(route.stops().is_empty());
    }

    #[test]
    fn observer_sees_every_request_once() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let (index, graph, _) = diamond();
        let planner = RoutePlanner::new(index, graph).with_observer(
            move |from: &str, to: &str, mode: TransportMode| {
                sink.lock().unwrap().push((from.to_owned(), to.to_owned(), mode));
            },
        );

        planner.find_shortest_route("a", "c", TransportMode::Road);
        planner.find_shortest_route("Nowhere", "C", TransportMode::Air);

        let calls = calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                ("a".to_owned(), "c".to_owned(), TransportMode::Road),
                ("Nowhere".to_owned(), "C".to_owned(), TransportMode::Air),
            ]
        );
    }

    #[test]
    fn observer_does_not_change_result() {
        let counter = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&counter);
        let (index, graph, _) = boxed();
        let observed = RoutePlanner::new(index, graph).with_observer(
            move |_: &str, _: &str, _: TransportMode| {
                c.fetch_add(1, Ordering::Relaxed);
            },
        );
        let (index, graph, _) = boxed();
        let plain = RoutePlanner::new(index, graph);

        assert_eq!(
            observed.find_shortest_route("S", "T", TransportMode::Road),
            plain.find_shortest_route("S", "T", TransportMode::Road)
        );
        assert_eq!(counter.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let (index, graph, _) = boxed();
        let planner = RoutePlanner::new(index, graph);
        let first = planner.find_shortest_route("S", "T", TransportMode::Road);
        for _ in 0..5 {
            assert_eq!(planner.find_shortest_route("S", "T", TransportMode::Road), first);
        }
    }

    #[test]
    fn batch_matches_single_queries_in_order() {
        let (index, graph, _) = boxed();
        let planner = RoutePlanner::new(index, graph);
        let queries = vec![
            RouteQuery::new("S", "T", TransportMode::Road),
            RouteQuery::new("S", "T", TransportMode::Rail),
            RouteQuery::new("P", "Q", TransportMode::Road),
            RouteQuery::new("Q", "Nowhere", TransportMode::Road),
        ];
        let batch = planner.find_shortest_routes(&queries);
        assert_eq!(batch.len(), 4);
        for (q, got) in queries.iter().zip(&batch) {
            assert_eq!(*got, planner.find_shortest_route(&q.from, &q.to, q.mode));
        }
        assert!(batch[0].is_some());
        assert!(batch[1].is_none());
        assert!(batch[3].is_none());
    }

    #[test]
    fn planner_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<RoutePlanner>();
    }
}

// ── Properties on random small graphs ─────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::ShortestPathSearch;

    /// Up to 8 locations on a coarse integer grid (so boundary cases and
    /// coincident points are common), with at most one link per pair.
    fn random_world(rng: &mut SmallRng) -> (LocationIndex, LinkGraph) {
        let n = rng.gen_range(2..=8);
        let mut ib = LocationIndexBuilder::new();
        for i in 0..n {
            let lat = rng.gen_range(0..5) as f64;
            let lon = rng.gen_range(0..5) as f64;
            ib.add(loc(&format!("L{i}"), lat, lon));
        }
        let mut gb = LinkGraphBuilder::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(0.45) {
                    let mode = if rng.gen_bool(0.8) { TransportMode::Road } else { TransportMode::Rail };
                    let w = rng.gen_range(1..20) as f64;
                    gb.add_link(LocationId::from_index(i), LocationId::from_index(j), w, mode).unwrap();
                }
            }
        }
        (ib.build(), gb.build())
    }

    /// Minimum path weight by exhaustive enumeration of simple paths.
    fn brute_force(
        graph: &LinkGraph,
        allowed: &[LocationId],
        s: LocationId,
        t: LocationId,
        mode: TransportMode,
    ) -> Option<f64> {
        #[allow(clippy::too_many_arguments)]
        fn walk(
            graph: &LinkGraph,
            allowed: &HashSet<LocationId>,
            cur: LocationId,
            t: LocationId,
            mode: TransportMode,
            seen: &mut HashSet<LocationId>,
            acc: f64,
            best: &mut Option<f64>,
        ) {
            if cur == t {
                if best.is_none_or(|b| acc < b) {
                    *best = Some(acc);
                }
                return;
            }
            for link in graph.links_for(mode) {
                let Some(next) = link.other_end(cur) else { continue };
                if !allowed.contains(&next) || seen.contains(&next) {
                    continue;
                }
                seen.insert(next);
                walk(graph, allowed, next, t, mode, seen, acc + link.distance_km, best);
                seen.remove(&next);
            }
        }

        let allowed: HashSet<LocationId> = allowed.iter().copied().collect();
        let mut seen = HashSet::from([s]);
        let mut best = None;
        walk(graph, &allowed, s, t, mode, &mut seen, 0.0, &mut best);
        best
    }

    #[test]
    fn optimal_against_brute_force() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        for _ in 0..300 {
            let (index, graph) = random_world(&mut rng);
            let n = index.len();
            let s = LocationId::from_index(rng.gen_range(0..n));
            let t = LocationId::from_index(rng.gen_range(0..n));

            for set in [CandidateSet::BoundingBox, CandidateSet::All] {
                let candidates = index.candidates(s, t, set);
                let expected = brute_force(&graph, &candidates, s, t, TransportMode::Road);

                let cfg = PlannerConfig { candidates: set, ..PlannerConfig::default() };
                let from = index.location(s).name().to_owned();
                let to = index.location(t).name().to_owned();
                let planner = RoutePlanner::new(
                    // Rebuild: the planner takes ownership of its snapshot.
                    rebuild_index(&index),
                    rebuild_graph(&graph),
                )
                .with_config(cfg);
                let got = planner.find_shortest_route(&from, &to, TransportMode::Road);

                // A mode with no links yields None even for s == t.
                let expected = if graph.has_mode(TransportMode::Road) { expected } else { None };
                match (got, expected) {
                    (None, None) => {}
                    (Some(route), Some(best)) => {
                        assert_eq!(route.total_weight, best, "{from} → {to} ({set:?})");
                        if s != t {
                            assert_connected(&route, s, t);
                        }
                    }
                    (got, expected) => panic!("{from} → {to} ({set:?}): got {got:?}, expected {expected:?}"),
                }
            }
        }
    }

    #[test]
    fn heap_and_scan_settle_identically() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..300 {
            let (index, graph) = random_world(&mut rng);
            let n = index.len();
            let s = LocationId::from_index(rng.gen_range(0..n));
            let t = LocationId::from_index(rng.gen_range(0..n));
            let candidates = index.candidates(s, t, CandidateSet::All);

            let scan = ShortestPathSearch::new(&graph, MinSelection::LinearScan)
                .run(&candidates, s, TransportMode::Road);
            let heap = ShortestPathSearch::new(&graph, MinSelection::BinaryHeap)
                .run(&candidates, s, TransportMode::Road);

            assert_eq!(scan.settled(), heap.settled());
            for &c in &candidates {
                assert_eq!(scan.predecessor(c), heap.predecessor(c));
                assert_eq!(scan.distance(c), heap.distance(c));
            }
        }
    }

    fn rebuild_index(index: &LocationIndex) -> LocationIndex {
        let mut b = LocationIndexBuilder::with_capacity(index.len());
        for (_, l) in index.iter() {
            b.add(l.clone());
        }
        b.build()
    }

    fn rebuild_graph(graph: &LinkGraph) -> LinkGraph {
        let mut b = LinkGraphBuilder::with_capacity(graph.len());
        for l in graph.links() {
            b.add_link(l.from, l.to, l.distance_km, l.mode).unwrap();
        }
        b.build()
    }
}

// ── End to end through rp-load ────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use std::io::Cursor;

    use rp_load::{load_links_reader, load_locations_reader};

    use super::*;

    const CITIES: &str = "\
Basel\tSwitzerland\t173000\t47.5596\t7.5886\n\
Olten\tSwitzerland\t18000\t47.3499\t7.9033\n\
Aarau\tSwitzerland\t21000\t47.3925\t8.0444\n\
Zürich\tSwitzerland\t421000\t47.3769\t8.5417\n\
Bern\tSwitzerland\t134000\t46.9480\t7.4474\n\
";

    // Olten lies just south of the Basel–Zürich box; Aarau lies inside it.
    const LINKS: &str = "\
Basel\tOlten\trail\t39\n\
Olten\tZürich\trail\t60\n\
Basel\tAarau\trail\t60\n\
Aarau\tZürich\trail\t41\n\
Basel\tZürich\troad\t87\n\
Bern\tOlten\trail\t67\n\
";

    fn planner(candidates: CandidateSet) -> RoutePlanner {
        let mut ib = LocationIndexBuilder::new();
        load_locations_reader(Cursor::new(CITIES), &mut ib).unwrap();
        let index = ib.build();
        let mut gb = LinkGraphBuilder::new();
        load_links_reader(Cursor::new(LINKS), &index, &mut gb).unwrap();
        RoutePlanner::new(index, gb.build())
            .with_config(PlannerConfig { candidates, ..PlannerConfig::default() })
    }

    fn stop_names(planner: &RoutePlanner, route: &Route) -> Vec<String> {
        route
            .stops()
            .into_iter()
            .map(|id| planner.index().location(id).name().to_owned())
            .collect()
    }

    #[test]
    fn rail_route_stays_in_the_box() {
        let planner = planner(CandidateSet::BoundingBox);
        let route = planner.find_shortest_route("basel", "ZÜRICH", TransportMode::Rail).unwrap();
        assert_eq!(stop_names(&planner, &route), ["Basel", "Aarau", "Zürich"]);
        assert_eq!(route.total_weight, 101.0);
    }

    #[test]
    fn rail_route_over_all_locations_is_shorter() {
        let planner = planner(CandidateSet::All);
        let route = planner.find_shortest_route("Basel", "Zürich", TransportMode::Rail).unwrap();
        assert_eq!(stop_names(&planner, &route), ["Basel", "Olten", "Zürich"]);
        assert_eq!(route.total_weight, 99.0);
    }

    #[test]
    fn road_uses_direct_link() {
        let planner = planner(CandidateSet::BoundingBox);
        let route = planner.find_shortest_route("Basel", "Zürich", TransportMode::Road).unwrap();
        assert_eq!(route.links.len(), 1);
        assert_eq!(route.total_weight, 87.0);
    }

    #[test]
    fn bern_is_outside_basel_zurich_box() {
        let planner = planner(CandidateSet::BoundingBox);
        let index = planner.index();
        let basel = index.find_by_name("Basel").unwrap();
        let zurich = index.find_by_name("Zürich").unwrap();
        let bern = index.find_by_name("Bern").unwrap();
        assert!(!index.restrict_to_bounding_box(basel, zurich).contains(&bern));
    }
}
