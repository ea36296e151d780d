//! `rp-core` — foundational types for the route planner.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no `rp-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `LinkId`                                |
//! | [`geo`]         | `WayPoint`, haversine distance                        |
//! | [`location`]    | `Location` (case-insensitive name identity)           |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`config`]      | `PlannerConfig`, `CandidateSet`, `MinSelection`       |
//! | [`error`]       | `RpError`                                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CandidateSet, MinSelection, PlannerConfig};
pub use error::RpError;
pub use geo::WayPoint;
pub use ids::{LinkId, LocationId};
pub use location::{Location, fold_name};
pub use transport::TransportMode;
