//! Core value types shared by every snow-seeker crate.
//!
//! Nothing in here touches the filesystem: resorts are plain immutable
//! records, facilities are derived from raw strings on demand, and sort
//! orders are a closed enum the query pipeline dispatches on.

pub mod facility;
pub mod resort;
pub mod sort;

pub use facility::Facility;
pub use resort::Resort;
pub use sort::{SortOrder, SortOrderParseError};
