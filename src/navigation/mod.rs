//! Shell navigation: locations, routes, and redirects.
//!
//! The presentation controller reads exactly one thing from here, the `view`
//! parameter of the initial location, and only at construction.

pub mod location;

pub use location::{Location, Route};
