//! `rp-load` — bulk loading of locations and links from delimited text.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`loader`] | `load_locations_*`, `load_links_*`                          |
//! | [`error`]  | `LoadError`, `LoadResult<T>`                                |
//!
//! A load either commits every record of its source or none of them.
//! `Ok(0)` is a successful load of an empty source; failure is always an
//! `Err`, logged at `error` level with the source and the cause.

pub mod error;
pub mod loader;


pub use error::{LoadError, LoadResult};
pub use loader::{
    DELIMITER, load_links_path, load_links_reader, load_locations_path, load_locations_reader,
};
