//! Hook invoked once per query, before the search runs.

use log::info;

use rp_core::TransportMode;

/// Observer told about every route request.
///
/// It sees the names exactly as the caller passed them, before resolution,
/// and cannot influence the result.  Any `Fn(&str, &str, TransportMode)`
/// closure that is `Send + Sync` is an observer.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use rp_core::TransportMode;
/// use rp_route::RouteObserver;
///
/// let count = AtomicUsize::new(0);
/// let obs = |_: &str, _: &str, _: TransportMode| {
///     count.fetch_add(1, Ordering::Relaxed);
/// };
/// obs.on_route_request("Bern", "Thun", TransportMode::Rail);
/// assert_eq!(count.load(Ordering::Relaxed), 1);
/// ```
pub trait RouteObserver: Send + Sync {
    fn on_route_request(&self, from: &str, to: &str, mode: TransportMode);
}

impl<F> RouteObserver for F
where
    F: Fn(&str, &str, TransportMode) + Send + Sync,
{
    fn on_route_request(&self, from: &str, to: &str, mode: TransportMode) {
        self(from, to, mode)
    }
}

/// A [`RouteObserver`] that does nothing.  The planner's default.
pub struct NoopObserver;

impl RouteObserver for NoopObserver {
    fn on_route_request(&self, _from: &str, _to: &str, _mode: TransportMode) {}
}

/// Logs every request at `info` level.
pub struct LogObserver;

impl RouteObserver for LogObserver {
    fn on_route_request(&self, from: &str, to: &str, mode: TransportMode) {
        info!("route request: {from} → {to} by {mode}");
    }
}
