//! `rp-route` — shortest-route search over the location index and link
//! graph.
//!
//! # Query pipeline
//!
//! ```text
//! (from, to, mode)
//!   ① observer     RouteObserver::on_route_request, before anything else
//!   ② resolve      case-insensitive name lookup in LocationIndex
//!   ③ restrict     candidate set: [from, strictly-inside-the-box…, to]
//!   ④ search       ShortestPathSearch relaxes mode links inside the set
//!   ⑤ assemble     PathAssembler walks predecessors back from `to` and
//!                   emits links with geometric distances
//! ```
//!
//! Unknown names, a mode with no links and an unreachable target all come back as
//! `None`; none of them is an error.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Batch queries run on Rayon's thread pool.              |
//! | `fx-hash`  | FxHash for the per-search candidate slot map.          |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `Route`/`RouteQuery`. |

pub mod assemble;
pub mod observer;
pub mod planner;
pub mod route;
pub mod search;

#[cfg(test)]
mod tests;

pub use assemble::PathAssembler;
pub use observer::{LogObserver, NoopObserver, RouteObserver};
pub use planner::RoutePlanner;
pub use route::{Route, RouteQuery};
pub use search::{Predecessors, ShortestPathSearch};
