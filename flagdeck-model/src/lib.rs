//! Core data model definitions shared across flagdeck crates.
//!
//! Everything in here mirrors the JSON shapes produced by the backend
//! REST API; deserialization is deliberately lenient where the backend
//! is known to emit inconsistent scalars (SQLite booleans as integers,
//! `"N/A"` placeholder strings).

pub mod actions;
pub mod compare;
pub mod routes;
pub mod sandbox;
pub mod stats;
pub mod user;
pub mod world;

// Intentionally curated re-exports for downstream consumers.
pub use actions::{ActionReply, ExecuteReply, ExecuteRequest, TeleportReply, TeleportRequest};
pub use compare::CompareResult;
pub use sandbox::{CommandDescriptor, ParamDescriptor};
pub use stats::Stats;
pub use user::{FlagEntry, LastPosition, UserDetail, UserProfile, UserSummary};
pub use world::{NewLocation, Room};
