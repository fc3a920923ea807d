//! Shared fixtures for the state-level tests.
//!
//! These tests drive `update` directly: tasks returned by handlers are
//! dropped, so no request ever leaves the process.
#![allow(dead_code)]

use flagdeck_console::config::AppConfig;
use flagdeck_console::state::State;
use flagdeck_model::{CommandDescriptor, ParamDescriptor, UserSummary};

pub fn test_state() -> State {
    let config = AppConfig {
        // Nothing listens here; tasks are never polled in tests.
        server_url: "http://localhost:59999".to_string(),
    };
    State::new(&config)
}

pub fn user(username: &str, flag_count: i64, blocked: Option<bool>) -> UserSummary {
    UserSummary {
        username: username.to_string(),
        first_name: None,
        last_name: None,
        filiere: None,
        flag_count,
        blocked,
    }
}

pub fn command(name: &str, params: Vec<ParamDescriptor>) -> CommandDescriptor {
    CommandDescriptor {
        name: name.to_string(),
        description: Some(format!("Test command {name}")),
        kerberized: false,
        params,
    }
}

pub fn param(name: &str, type_hint: &str, required: bool) -> ParamDescriptor {
    ParamDescriptor {
        name: name.to_string(),
        type_hint: type_hint.to_string(),
        description: None,
        required,
    }
}
