//! State-level tests for routing, the sortable user table, the compare
//! form, and the maintenance triggers.

mod common;

use common::{test_state, user};

use flagdeck_console::infrastructure::api_client::ApiError;
use flagdeck_console::message::Message;
use flagdeck_console::router::Route;
use flagdeck_console::state::{PickerSlot, Screen, StatusLine};
use flagdeck_console::update::update;
use flagdeck_core::filter::user_matches;
use flagdeck_core::{SortDirection, SortKey};
use flagdeck_model::ActionReply;

fn usernames(state: &flagdeck_console::state::State) -> Vec<String> {
    state
        .users
        .list
        .iter()
        .map(|u| u.username.clone())
        .collect()
}

#[test]
fn navigating_to_users_resets_sort_and_raises_loading() {
    let mut state = test_state();
    let _ = update(&mut state, Message::SortBy(SortKey::FlagCount));
    assert_eq!(state.users.sort.key, SortKey::FlagCount);

    let _ = update(&mut state, Message::Navigate(Route::Users));
    assert!(state.loading);
    assert_eq!(state.screen, Screen::Users);
    assert_eq!(state.users.sort.key, SortKey::Username);
    assert_eq!(state.users.sort.direction, SortDirection::Asc);
}

#[test]
fn users_arrival_sorts_case_insensitively_and_clears_loading() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Users));
    let _ = update(
        &mut state,
        Message::UsersLoaded(Ok(vec![
            user("bob", 5, Some(false)),
            user("Alice", 2, Some(true)),
        ])),
    );
    assert!(!state.loading);
    assert_eq!(usernames(&state), vec!["Alice", "bob"]);
}

#[test]
fn header_clicks_toggle_direction_then_reset() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Users));
    let _ = update(
        &mut state,
        Message::UsersLoaded(Ok(vec![
            user("bob", 5, Some(false)),
            user("Alice", 2, Some(true)),
        ])),
    );

    // Same key: asc -> desc.
    let _ = update(&mut state, Message::SortBy(SortKey::Username));
    assert_eq!(state.users.sort.direction, SortDirection::Desc);
    assert_eq!(usernames(&state), vec!["bob", "Alice"]);

    // Same key again: back to asc.
    let _ = update(&mut state, Message::SortBy(SortKey::Username));
    assert_eq!(state.users.sort.direction, SortDirection::Asc);
    assert_eq!(usernames(&state), vec!["Alice", "bob"]);

    // Different key after a desc state: always asc.
    let _ = update(&mut state, Message::SortBy(SortKey::Username));
    assert_eq!(state.users.sort.direction, SortDirection::Desc);
    let _ = update(&mut state, Message::SortBy(SortKey::Blocked));
    assert_eq!(state.users.sort.direction, SortDirection::Asc);
    // blocked asc: false before true.
    assert_eq!(usernames(&state), vec!["bob", "Alice"]);
}

#[test]
fn filtering_hides_rows_and_clearing_restores_them() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Users));
    let _ = update(
        &mut state,
        Message::UsersLoaded(Ok(vec![
            user("bob", 5, None),
            user("Alice", 2, None),
            user("alina", 1, None),
        ])),
    );

    let _ = update(&mut state, Message::UserFilterChanged("ali".to_string()));
    let visible = state
        .users
        .list
        .iter()
        .filter(|u| user_matches(u, &state.users.filter))
        .count();
    assert_eq!(visible, 2);
    // The backing list itself is untouched by filtering.
    assert_eq!(state.users.list.len(), 3);

    let _ = update(&mut state, Message::UserFilterChanged(String::new()));
    let visible = state
        .users
        .list
        .iter()
        .filter(|u| user_matches(u, &state.users.filter))
        .count();
    assert_eq!(visible, 3);
}

#[test]
fn route_fetch_failure_renders_message_and_status() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Dashboard));
    let _ = update(
        &mut state,
        Message::StatsLoaded(Err(ApiError::Http {
            status: 500,
            message: "db locked".to_string(),
        })),
    );
    assert!(!state.loading);
    let Screen::Failed { message } = &state.screen else {
        panic!("expected failed screen, got {:?}", state.screen);
    };
    assert!(message.contains("db locked"), "message was: {message}");
    assert!(message.contains("500"), "message was: {message}");
}

#[test]
fn unknown_fragment_lands_on_not_found_with_loader_released() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::parse("#worlds/42")));
    assert!(!state.loading);
    assert_eq!(
        state.screen,
        Screen::NotFound {
            fragment: "#worlds/42".to_string()
        }
    );
    // Nothing in the sidebar is highlighted for an unknown fragment.
    assert_eq!(state.route.nav_target(), None);
}

#[test]
fn compare_blocks_empty_and_identical_selections() {
    let mut state = test_state();
    let _ = update(&mut state, Message::Navigate(Route::Compare));
    let _ = update(
        &mut state,
        Message::CompareUsersLoaded(Ok(vec![user("alice", 1, None), user("bob", 2, None)])),
    );

    // Nothing selected yet.
    let _ = update(&mut state, Message::CompareRequested);
    assert!(!state.compare.busy);
    assert_eq!(
        state.compare.error.as_deref(),
        Some("select two valid users")
    );

    // Identical selections.
    let _ = update(
        &mut state,
        Message::PickerSelected(PickerSlot::First, "bob".to_string()),
    );
    let _ = update(
        &mut state,
        Message::PickerSelected(PickerSlot::Second, "bob".to_string()),
    );
    let _ = update(&mut state, Message::CompareRequested);
    assert!(!state.compare.busy);
    assert_eq!(
        state.compare.error.as_deref(),
        Some("select two different users")
    );

    // Distinct selections pass validation and start the fetch.
    let _ = update(
        &mut state,
        Message::PickerSelected(PickerSlot::First, "alice".to_string()),
    );
    let _ = update(&mut state, Message::CompareRequested);
    assert!(state.compare.busy);
    assert_eq!(state.compare.error, None);
}

#[test]
fn typing_in_a_picker_invalidates_its_selection() {
    let mut state = test_state();
    let _ = update(
        &mut state,
        Message::PickerSelected(PickerSlot::First, "alice".to_string()),
    );
    assert_eq!(state.compare.first.selected.as_deref(), Some("alice"));

    let _ = update(
        &mut state,
        Message::PickerInput(PickerSlot::First, "ali".to_string()),
    );
    assert_eq!(state.compare.first.selected, None);
    assert!(state.compare.first.open);
}

#[test]
fn db_refresh_reports_in_the_local_status_area() {
    let mut state = test_state();
    let _ = update(&mut state, Message::DbRefreshRequested);
    assert!(state.maintenance.db_busy);
    assert!(matches!(
        state.maintenance.db_status,
        Some(StatusLine::Info(_))
    ));
    // The global loader is untouched by maintenance triggers.
    assert!(!state.loading);

    let _ = update(
        &mut state,
        Message::DbRefreshFinished(Ok(ActionReply {
            success: true,
            message: Some("12 rows updated".to_string()),
            error: None,
        })),
    );
    assert!(!state.maintenance.db_busy);
    let Some(StatusLine::Success(message)) = &state.maintenance.db_status else {
        panic!("expected success status");
    };
    assert_eq!(message, "12 rows updated");
}

#[test]
fn failed_maintenance_shows_the_backend_error() {
    let mut state = test_state();
    let _ = update(&mut state, Message::WorldsRefreshRequested);
    let _ = update(
        &mut state,
        Message::WorldsRefreshFinished(Ok(ActionReply {
            success: false,
            message: None,
            error: Some("scraper unavailable".to_string()),
        })),
    );
    assert!(!state.maintenance.worlds_busy);
    assert_eq!(
        state.maintenance.worlds_status,
        Some(StatusLine::Error("scraper unavailable".to_string()))
    );
}
