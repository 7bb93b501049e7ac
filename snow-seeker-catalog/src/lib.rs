//! Resort catalog loading and the search/sort pipeline.
//!
//! The catalog is the read-only data source the rest of the app is built on.
//! It is loaded once, validated for unique ids, and then only queried.

pub mod catalog;
pub mod query;

pub use catalog::{BUNDLED_RESORTS, CatalogError, ResortCatalog};
pub use query::{filter_and_sort, fold};
