//! State-level tests for the sandbox card machine and the teleport
//! search-then-click flow.

mod common;

use common::{command, param, test_state};

use flagdeck_console::infrastructure::api_client::ApiError;
use flagdeck_console::message::Message;
use flagdeck_console::router::Route;
use flagdeck_console::state::{CardOutcome, CardPhase, Screen, State, StatusLine};
use flagdeck_console::update::update;
use flagdeck_model::{ExecuteReply, NewLocation, Room, TeleportReply};
use serde_json::json;

fn sandbox_state() -> State {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Sandbox));
    let _ = update(
        &mut state,
        Message::CommandsLoaded(Ok(vec![command(
            "worlds.spawn",
            vec![param("count", "int", true), param("note", "string", false)],
        )])),
    );
    state
}

fn card(state: &State) -> &flagdeck_console::state::CardState {
    state
        .sandbox
        .cards
        .get("worlds.spawn")
        .expect("card state present")
}

#[test]
fn commands_arrival_clears_loading_and_shows_sandbox() {
    let state = sandbox_state();
    assert!(!state.loading);
    assert_eq!(state.screen, Screen::Sandbox);
    assert_eq!(state.sandbox.commands.len(), 1);
}

#[test]
fn card_expands_then_collapse_clears_the_form() {
    let mut state = sandbox_state();

    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    assert_eq!(card(&state).phase, CardPhase::Expanded);

    let _ = update(
        &mut state,
        Message::ParamChanged {
            command: "worlds.spawn".to_string(),
            param: "count".to_string(),
            value: "3".to_string(),
        },
    );
    assert_eq!(
        card(&state).inputs.get("count").map(String::as_str),
        Some("3")
    );

    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    assert_eq!(card(&state).phase, CardPhase::Collapsed);
    assert!(card(&state).inputs.is_empty());
    assert_eq!(card(&state).outcome, None);
}

#[test]
fn required_int_left_blank_blocks_execution() {
    let mut state = sandbox_state();
    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    let _ = update(
        &mut state,
        Message::ExecuteRequested("worlds.spawn".to_string()),
    );

    // Validation failed: the card never enters Executing and the
    // offending field is flagged.
    assert_eq!(card(&state).phase, CardPhase::Expanded);
    assert_eq!(card(&state).invalid_field.as_deref(), Some("count"));
    let Some(CardOutcome::Failure(message)) = &card(&state).outcome else {
        panic!("expected a validation failure");
    };
    assert!(message.contains("count"), "message was: {message}");
}

#[test]
fn valid_params_execute_and_render_the_result() {
    let mut state = sandbox_state();
    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    let _ = update(
        &mut state,
        Message::ParamChanged {
            command: "worlds.spawn".to_string(),
            param: "count".to_string(),
            value: "3".to_string(),
        },
    );
    let _ = update(
        &mut state,
        Message::ExecuteRequested("worlds.spawn".to_string()),
    );
    assert_eq!(card(&state).phase, CardPhase::Executing);

    let _ = update(
        &mut state,
        Message::ExecuteFinished(
            "worlds.spawn".to_string(),
            Ok(ExecuteReply {
                success: true,
                result: Some(json!({"spawned": 3})),
                error: None,
            }),
        ),
    );
    assert_eq!(card(&state).phase, CardPhase::Expanded);
    let Some(CardOutcome::Success(rendered)) = &card(&state).outcome else {
        panic!("expected a success outcome");
    };
    assert!(rendered.contains("\"spawned\": 3"), "rendered: {rendered}");
}

#[test]
fn server_side_failure_is_rendered_as_an_error() {
    let mut state = sandbox_state();
    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    let _ = update(
        &mut state,
        Message::ParamChanged {
            command: "worlds.spawn".to_string(),
            param: "count".to_string(),
            value: "3".to_string(),
        },
    );
    let _ = update(
        &mut state,
        Message::ExecuteRequested("worlds.spawn".to_string()),
    );
    let _ = update(
        &mut state,
        Message::ExecuteFinished(
            "worlds.spawn".to_string(),
            Ok(ExecuteReply {
                success: false,
                result: None,
                error: Some("kerberos ticket expired".to_string()),
            }),
        ),
    );
    assert_eq!(
        card(&state).outcome,
        Some(CardOutcome::Failure("kerberos ticket expired".to_string()))
    );
}

#[test]
fn transport_failure_keeps_the_status_code_visible() {
    let mut state = sandbox_state();
    let _ = update(&mut state, Message::CardToggled("worlds.spawn".to_string()));
    let _ = update(
        &mut state,
        Message::ParamChanged {
            command: "worlds.spawn".to_string(),
            param: "count".to_string(),
            value: "3".to_string(),
        },
    );
    let _ = update(
        &mut state,
        Message::ExecuteRequested("worlds.spawn".to_string()),
    );
    let _ = update(
        &mut state,
        Message::ExecuteFinished(
            "worlds.spawn".to_string(),
            Err(ApiError::Http {
                status: 502,
                message: "upstream down".to_string(),
            }),
        ),
    );
    let Some(CardOutcome::Failure(message)) = &card(&state).outcome else {
        panic!("expected a failure outcome");
    };
    assert!(message.contains("upstream down"));
    assert!(message.contains("502"));
}

#[test]
fn room_search_requires_a_world_id() {
    let mut state = test_state();
    let _ = update(&mut state, Message::FindRoomsRequested);
    assert_eq!(
        state.teleport.status,
        Some(StatusLine::Error("enter a world id".to_string()))
    );
    assert!(!state.teleport.searching);
}

#[test]
fn room_search_then_click_teleports() {
    let mut state = test_state();
    let _ = update(&mut state, Message::WorldIdChanged("w-7".to_string()));
    let _ = update(&mut state, Message::FindRoomsRequested);
    assert!(state.teleport.searching);
    assert_eq!(state.teleport.last_world_id.as_deref(), Some("w-7"));

    let _ = update(
        &mut state,
        Message::RoomsLoaded(Ok(vec![
            Room {
                id: "r-2".to_string(),
                name: Some("Observatory".to_string()),
            },
            Room {
                id: "r-1".to_string(),
                name: Some("atrium".to_string()),
            },
        ])),
    );
    assert!(!state.teleport.searching);
    assert!(state.teleport.searched);
    // Rooms are ordered by display label, case-insensitively.
    let labels: Vec<&str> = state.teleport.rooms.iter().map(Room::label).collect();
    assert_eq!(labels, vec!["atrium", "Observatory"]);
    assert!(matches!(
        state.teleport.status,
        Some(StatusLine::Info(ref m)) if m.contains("2 found")
    ));

    let _ = update(&mut state, Message::TeleportRequested("r-2".to_string()));
    assert_eq!(state.teleport.teleporting.as_deref(), Some("r-2"));

    let _ = update(
        &mut state,
        Message::TeleportFinished(Ok(TeleportReply {
            success: true,
            message: Some("Moved to the Observatory".to_string()),
            new_location: Some(NewLocation {
                id: "r-2".to_string(),
                name: Some("Observatory".to_string()),
            }),
            error: None,
        })),
    );
    assert_eq!(state.teleport.teleporting, None);
    let Some(StatusLine::Success(message)) = &state.teleport.status else {
        panic!("expected a success status");
    };
    assert!(message.contains("Moved to the Observatory"));
    assert!(message.contains("r-2"));
}

#[test]
fn teleport_without_a_remembered_world_errors_inline() {
    let mut state = test_state();
    let _ = update(&mut state, Message::TeleportRequested("r-1".to_string()));
    assert!(matches!(
        state.teleport.status,
        Some(StatusLine::Error(ref m)) if m.contains("world id")
    ));
    assert_eq!(state.teleport.teleporting, None);
}

#[test]
fn failed_room_search_clears_the_grid() {
    let mut state = test_state();
    let _ = update(&mut state, Message::WorldIdChanged("w-7".to_string()));
    let _ = update(&mut state, Message::FindRoomsRequested);
    let _ = update(
        &mut state,
        Message::RoomsLoaded(Err(ApiError::Network("connection refused".to_string()))),
    );
    assert!(state.teleport.rooms.is_empty());
    assert!(matches!(
        state.teleport.status,
        Some(StatusLine::Error(ref m)) if m.contains("connection refused")
    ));

    // The world id from the failed search is remembered, so a retry
    // click can still start a teleport.
    let _ = update(&mut state, Message::TeleportRequested("r-1".to_string()));
    assert_eq!(state.teleport.teleporting.as_deref(), Some("r-1"));
}
