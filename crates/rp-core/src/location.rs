//! The graph's node type: a named point with metadata.

use std::hash::{Hash, Hasher};

use crate::WayPoint;

/// A named geographic location.
///
/// Immutable once constructed.  Identity is the **case-insensitive** name:
/// `"Bern"` and `"BERN"` compare equal and hash identically, whatever their
/// country, population or coordinates.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    name:       String,
    country:    String,
    population: u32,
    position:   WayPoint,
}

impl Location {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        population: u32,
        position: WayPoint,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            population,
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn position(&self) -> WayPoint {
        self.position
    }

    /// The folded key used for lookup and equality.
    pub fn name_key(&self) -> String {
        fold_name(&self.name)
    }

    /// Case-insensitive comparison against a raw name.  Does not allocate.
    pub fn is_named(&self, name: &str) -> bool {
        folded(&self.name).eq(folded(name))
    }

    /// Geometric distance to another location in kilometres.
    #[inline]
    pub fn distance_km(&self, other: &Location) -> f64 {
        self.position.distance_km(other.position)
    }
}

/// Fold a location name to its identity key.
pub fn fold_name(name: &str) -> String {
    folded(name).collect()
}

/// Per-character lowercase mapping shared by every name comparison.
fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.is_named(&other.name)
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.name) {
            c.hash(state);
        }
        // Terminator, as `str` hashing does.
        state.write_u8(0xff);
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.country)
    }
}
