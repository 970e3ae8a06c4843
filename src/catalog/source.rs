//! Catalog source abstraction.
//!
//! A [`CatalogSource`] is the external loader that supplies the catalog once
//! at startup. The presentation layer never knows where recipes came from; it
//! only receives the validated [`Catalog`].
//!
//! # Implementations
//!
//! - [`BuiltinCatalog`](super::BuiltinCatalog): the six sample recipes
//! - [`JsonCatalogFile`](super::JsonCatalogFile): a JSON array on disk, read by
//!   the worker thread

use super::Catalog;
use crate::domain::Result;

/// Loader of an ordered, immutable recipe catalog.
pub trait CatalogSource: Send {
    /// Human-readable description for logs (e.g. a file path).
    fn describe(&self) -> String;

    /// Loads and validates the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read or parsed, or if it
    /// violates a catalog invariant.
    fn load(&self) -> Result<Catalog>;
}
