//! Strongly typed, zero-cost identifier wrappers.
//!
//! An id is the insertion position of its record, so ordering by id is
//! ordering by load order.  That property is what makes candidate sets and
//! neighbor lists reproducible: sort by id and you get the order the data
//! was loaded in.
//!
//! There is no "invalid" sentinel.  Absence is always `Option<LocationId>`.

use std::fmt;

/// Generate a typed id wrapper around a `u32` position.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id for the record stored at position `i`.
            ///
            /// # Panics
            ///
            /// If `i` does not fit in a `u32`.  Use `try_from` to handle that
            /// case instead.
            #[inline]
            pub fn from_index(i: usize) -> Self {
                match Self::try_from(i) {
                    Ok(id) => id,
                    Err(_) => panic!("{} index {i} exceeds u32::MAX", stringify!($name)),
                }
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(i: usize) -> Result<Self, Self::Error> {
                u32::try_from(i).map($name)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "#{}", self.0)
            }
        }
    };
}

typed_id! {
    /// Position of a location in `LocationIndex` storage.
    pub struct LocationId;
}

typed_id! {
    /// Position of an undirected link in `LinkGraph` storage.
    pub struct LinkId;
}
