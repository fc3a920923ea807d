//! Backend API route constants.
//!
//! Paths are relative to the client's `<base>/api` prefix; dynamic
//! segments are appended (and percent-encoded) by the API client.

pub mod api {
    pub const STATS: &str = "/stats";
    pub const USERS: &str = "/users";
    /// Prefix for `GET /user/{username}`.
    pub const USER: &str = "/user";
    pub const COMPARE: &str = "/compare";
    pub const SANDBOX_COMMANDS: &str = "/sandbox/commands";
    pub const SANDBOX_EXECUTE: &str = "/sandbox/execute";
    pub const REACHABLE_ROOMS: &str = "/reachable_rooms";
    pub const TELEPORT: &str = "/teleport";
    pub const UPDATE_DB: &str = "/update-db";
    pub const UPDATE_WORLDS: &str = "/update-worlds";
}
