//! `rp-spatial` — location index and link graph.
//!
//! Both structures are built once (by a loader or by hand through their
//! builders) and are read-only afterwards.  Searches borrow them immutably,
//! so any number of searches can share one snapshot.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`index`] | `LocationIndex` (name map + R-tree), `LocationIndexBuilder`   |
//! | [`graph`] | `Link`, `LinkGraph` (per-mode CSR), `LinkGraphBuilder`        |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod index;


pub use error::{SpatialError, SpatialResult};
pub use graph::{Link, LinkGraph, LinkGraphBuilder};
pub use index::{LocationIndex, LocationIndexBuilder};
