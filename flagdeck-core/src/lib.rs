//! UI-free core logic for the flagdeck console.
//!
//! Everything here operates on plain [`flagdeck_model`] records and is
//! unit-tested without a window or a network: the table comparator
//! engine, the substring filters backing every search box, sandbox
//! parameter parsing, and pre-submission form validation.

pub mod compare;
pub mod error;
pub mod filter;
pub mod sandbox;
pub mod sort;

pub use error::ValidationError;
pub use sort::{SortDirection, SortKey, SortState};
