//! Flagdeck console library
//!
//! This crate contains the desktop console's library surfaces used by
//! the executable in `src/main.rs`. Modules are exposed mainly to
//! enable testing: the integration tests drive [`update::update`]
//! directly against a constructed [`state::State`] without opening a
//! window or a socket.

pub mod config;
pub mod infrastructure;
pub mod message;
pub mod router;
pub mod state;
pub mod theme;
pub mod update;
pub mod updates;
pub mod views;
