//! Tab-delimited location and link loaders.
//!
//! # Location format
//!
//! One location per line, no header, fields separated by a tab:
//!
//! ```text
//! name    country    population    latitude    longitude
//! Bern	Switzerland	134000	46.948	7.447
//! ```
//!
//! Coordinates always use `.` as the decimal point.  Latitude must lie in
//! `[-90, 90]` and longitude in `[-180, 180]`; `NaN` and infinities are
//! rejected.
//!
//! # Link format
//!
//! One undirected link per line, endpoints given by (case-insensitive)
//! location name:
//!
//! ```text
//! from    to    mode    [distance_km]
//! Bern	Zürich	rail	118.0
//! Bern	Thun	road
//! ```
//!
//! An empty or missing distance means the geometric distance between the two
//! endpoints.  The mode is one of the `TransportMode` tags.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{error, info};
use serde::Deserialize;

use rp_core::{Location, TransportMode, WayPoint};
use rp_spatial::{LinkGraphBuilder, LocationIndex, LocationIndexBuilder};

use crate::{LoadError, LoadResult};

/// Field separator for both file formats.
pub const DELIMITER: u8 = b'\t';

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name:       String,
    country:    String,
    population: u32,
    lat:        f64,
    lon:        f64,
}

struct LinkRecord {
    line:     u64,
    from:     String,
    to:       String,
    mode:     TransportMode,
    distance: Option<f64>,
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.delimiter(DELIMITER)
        .has_headers(false)
        .quoting(false)
        .trim(csv::Trim::All);
    b
}

// ── Locations ─────────────────────────────────────────────────────────────────

/// Load locations from the file at `path` into `into`.
///
/// Returns the number of locations added.  On failure nothing is added, and
/// the path and cause are logged.
pub fn load_locations_path(path: &Path, into: &mut LocationIndexBuilder) -> LoadResult<usize> {
    let result = File::open(path)
        .map_err(LoadError::Io)
        .and_then(stage_locations);
    commit_locations(result, &path.display().to_string(), into)
}

/// Like [`load_locations_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data embedded in a
/// binary.
pub fn load_locations_reader<R: Read>(
    reader: R,
    into: &mut LocationIndexBuilder,
) -> LoadResult<usize> {
    commit_locations(stage_locations(reader), "<reader>", into)
}

fn stage_locations<R: Read>(reader: R) -> LoadResult<Vec<Location>> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut staged = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let r: LocationRecord = record.deserialize(None)?;

        let position = WayPoint::new(r.lat, r.lon);
        if !position.is_valid() {
            return Err(LoadError::Parse {
                line,
                message: format!("coordinate {position} of {:?} is out of range", r.name),
            });
        }
        staged.push(Location::new(r.name, r.country, r.population, position));
    }
    Ok(staged)
}

fn commit_locations(
    staged: LoadResult<Vec<Location>>,
    source: &str,
    into: &mut LocationIndexBuilder,
) -> LoadResult<usize> {
    match staged {
        Ok(locations) => {
            let count = locations.len();
            for loc in locations {
                into.add(loc);
            }
            info!("loaded {count} locations from {source}");
            Ok(count)
        }
        Err(e) => {
            error!("the location source {source:?} could not be read: {e}");
            Err(e)
        }
    }
}

// ── Links ─────────────────────────────────────────────────────────────────────

/// Load links from the file at `path` into `into`, resolving endpoint names
/// against `index`.
///
/// Returns the number of links added.  On failure nothing is added, and the
/// path and cause are logged.
pub fn load_links_path(
    path: &Path,
    index: &LocationIndex,
    into: &mut LinkGraphBuilder,
) -> LoadResult<usize> {
    let result = File::open(path)
        .map_err(LoadError::Io)
        .and_then(stage_links);
    commit_links(result, &path.display().to_string(), index, into)
}

/// Like [`load_links_path`] but accepts any `Read` source.
pub fn load_links_reader<R: Read>(
    reader: R,
    index: &LocationIndex,
    into: &mut LinkGraphBuilder,
) -> LoadResult<usize> {
    commit_links(stage_links(reader), "<reader>", index, into)
}

fn stage_links<R: Read>(reader: R) -> LoadResult<Vec<LinkRecord>> {
    let mut rdr = reader_builder().flexible(true).from_reader(reader);
    let mut staged = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        if !(3..=4).contains(&record.len()) {
            return Err(LoadError::Parse {
                line,
                message: format!("expected 3 or 4 fields, found {}", record.len()),
            });
        }
        let mode = record[2]
            .parse::<TransportMode>()
            .map_err(|_| LoadError::UnknownMode { line, tag: record[2].to_owned() })?;
        let distance = match record.get(3) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<f64>().map_err(|e| LoadError::Parse {
                line,
                message: format!("invalid distance {raw:?}: {e}"),
            })?),
        };

        staged.push(LinkRecord {
            line,
            from: record[0].to_owned(),
            to: record[1].to_owned(),
            mode,
            distance,
        });
    }
    Ok(staged)
}

fn commit_links(
    staged: LoadResult<Vec<LinkRecord>>,
    source: &str,
    index: &LocationIndex,
    into: &mut LinkGraphBuilder,
) -> LoadResult<usize> {
    let result = staged.and_then(|records| {
        // Validate everything against a scratch builder first so a bad line
        // leaves `into` untouched.
        let mut scratch = LinkGraphBuilder::with_capacity(records.len());
        for r in &records {
            scratch
                .add_link_between(index, &r.from, &r.to, r.distance, r.mode)
                .map_err(|source| LoadError::Link { line: r.line, source })?;
        }
        Ok(scratch)
    });

    match result {
        Ok(scratch) => {
            let count = scratch.len();
            into.append(scratch);
            info!("loaded {count} links from {source}");
            Ok(count)
        }
        Err(e) => {
            error!("the link source {source:?} could not be read: {e}");
            Err(e)
        }
    }
}
