//! planner — answer a few shortest-route queries over a small Swiss network.
//!
//! With no arguments the embedded network is used.  Pass a location file and
//! a link file (tab-delimited, see `rp-load`) to plan over your own data:
//!
//! ```text
//! RUST_LOG=debug cargo run -p planner -- cities.txt links.txt
//! ```

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{Result, bail};
use log::{error, info};

use rp_core::{CandidateSet, PlannerConfig, TransportMode};
use rp_load::{load_links_path, load_locations_path};
use rp_route::{LogObserver, Route, RoutePlanner, RouteQuery};
use rp_spatial::{LinkGraph, LinkGraphBuilder, LocationIndex, LocationIndexBuilder};

use network::build_network;

// ── Queries ───────────────────────────────────────────────────────────────────

const QUERIES: &[(&str, &str, TransportMode)] = &[
    ("Genève", "St. Gallen", TransportMode::Rail),
    ("Basel", "Zürich", TransportMode::Rail),
    ("Basel", "Zürich", TransportMode::Road),
    ("Lausanne", "Winterthur", TransportMode::Road),
    ("Bern", "Biel", TransportMode::Bus),
    ("Bern", "Luzern", TransportMode::Air),
    ("Bern", "Bern", TransportMode::Rail),
];

// ── Loading ───────────────────────────────────────────────────────────────────

/// The embedded network, or the two files named on the command line.
fn load(args: &[String]) -> Result<(LocationIndex, LinkGraph)> {
    let (index, graph) = match args {
        [] => build_network()?,
        [locations, links] => load_files(Path::new(locations), Path::new(links))?,
        _ => bail!("usage: planner [<locations file> <links file>]"),
    };
    info!("network: {} locations, {} links", index.len(), graph.len());
    Ok((index, graph))
}

fn load_files(locations: &Path, links: &Path) -> Result<(LocationIndex, LinkGraph)> {
    let mut ib = LocationIndexBuilder::new();
    if load_locations_path(locations, &mut ib)? == 0 {
        bail!("{} holds no locations", locations.display());
    }
    let index = ib.build();

    let mut gb = LinkGraphBuilder::new();
    load_links_path(links, &index, &mut gb)?;
    Ok((index, gb.build()))
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_route(planner: &RoutePlanner, query: &RouteQuery, route: Option<&Route>) {
    let header = format!("{} → {} by {}", query.from, query.to, query.mode);
    let Some(route) = route else {
        println!("{header}: no route");
        return;
    };
    if route.is_trivial() {
        println!("{header}: already there");
        return;
    }

    let names: Vec<&str> = route
        .stops()
        .into_iter()
        .map(|id| planner.index().location(id).name())
        .collect();
    println!(
        "{header}: {} ({} links, {:.0} km searched, {:.1} km great-circle)",
        names.join(" – "),
        route.links.len(),
        route.total_weight,
        route.geometric_km()
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let queries: Vec<RouteQuery> = QUERIES
        .iter()
        .map(|&(from, to, mode)| RouteQuery::new(from, to, mode))
        .collect();

    for (label, candidates) in [
        ("bounding box", CandidateSet::BoundingBox),
        ("all locations", CandidateSet::All),
    ] {
        // A planner owns its snapshot, so each pass loads its own.
        let (index, graph) = load(&args)?;
        let planner = RoutePlanner::new(index, graph)
            .with_config(PlannerConfig { candidates, ..PlannerConfig::default() })
            .with_observer(LogObserver);

        println!("=== candidates: {label} ===");
        let t0 = Instant::now();
        let routes = planner.find_shortest_routes(&queries);
        let elapsed = t0.elapsed();

        for (query, route) in queries.iter().zip(&routes) {
            print_route(&planner, query, route.as_ref());
        }
        println!(
            "{} queries in {:.3} ms",
            queries.len(),
            elapsed.as_secs_f64() * 1e3
        );
        println!();
    }

    Ok(())
}
