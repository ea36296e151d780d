//! Transport mode tags that partition the link set into independent
//! subgraphs.
//!
//! A search only ever traverses links of a single mode.  The set is closed:
//! loaders reject unknown tags rather than mapping them to a catch-all.

use std::str::FromStr;

use crate::RpError;

/// The kind of transport a link belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransportMode {
    /// Roads (car, coach).
    Road,
    /// Heavy rail.
    Rail,
    /// Scheduled flights.
    Air,
    /// Ferries and shipping lines.
    Ship,
    /// Bus networks separate from the road graph.
    Bus,
    /// Tram and light rail.
    Tram,
}

impl TransportMode {
    /// Every mode, in declaration order.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Road,
        TransportMode::Rail,
        TransportMode::Air,
        TransportMode::Ship,
        TransportMode::Bus,
        TransportMode::Tram,
    ];

    /// Lowercase tag, as used in link files.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Road => "road",
            TransportMode::Rail => "rail",
            TransportMode::Air  => "air",
            TransportMode::Ship => "ship",
            TransportMode::Bus  => "bus",
            TransportMode::Tram => "tram",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = RpError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| RpError::UnknownMode(tag.to_owned()))
    }
}
