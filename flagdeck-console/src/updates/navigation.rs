//! Route navigation and route-data arrival handling.
//!
//! Navigation owns the global loading indicator: it is raised here and
//! released by every completion handler, success or failure. In-flight
//! fetches are never cancelled; a later response simply overwrites the
//! content region when it resolves.

use iced::Task;

use flagdeck_core::{SortState, sort};
use flagdeck_model::{CommandDescriptor, Stats, UserDetail, UserSummary};

use crate::infrastructure::api_client::ApiError;
use crate::message::Message;
use crate::router::Route;
use crate::state::{ComparePane, DetailPane, Screen, State};

pub fn navigate(state: &mut State, route: Route) -> Task<Message> {
    log::debug!("navigating to {}", route.fragment());
    state.route = route.clone();
    state.loading = true;

    match route {
        Route::Dashboard => {
            state.screen = Screen::Dashboard;
            let api = state.api.clone();
            Task::perform(async move { api.stats().await }, Message::StatsLoaded)
        }
        Route::Users => {
            // Entering the list fresh resets the table to (username, asc).
            state.users.sort = SortState::default();
            state.users.filter.clear();
            state.screen = Screen::Users;
            let api = state.api.clone();
            Task::perform(async move { api.users().await }, Message::UsersLoaded)
        }
        Route::User(username) => {
            state.detail = DetailPane::default();
            state.screen = Screen::UserDetail {
                username: username.clone(),
            };
            let api = state.api.clone();
            let subject = username.clone();
            Task::perform(async move { api.user_detail(&subject).await }, move |result| {
                Message::UserDetailLoaded(username.clone(), result)
            })
        }
        Route::Compare => {
            state.compare = ComparePane::default();
            state.screen = Screen::Compare;
            let api = state.api.clone();
            Task::perform(async move { api.users().await }, Message::CompareUsersLoaded)
        }
        Route::Sandbox => {
            state.screen = Screen::Sandbox;
            let api = state.api.clone();
            Task::perform(
                async move { api.sandbox_commands().await },
                Message::CommandsLoaded,
            )
        }
        Route::NotFound(fragment) => {
            state.screen = Screen::NotFound { fragment };
            state.loading = false;
            Task::none()
        }
    }
}

fn fail_route(state: &mut State, error: ApiError) {
    log::warn!("route load failed: {error}");
    state.screen = Screen::Failed {
        message: error.to_string(),
    };
}

pub fn stats_loaded(state: &mut State, result: Result<Stats, ApiError>) -> Task<Message> {
    state.loading = false;
    match result {
        Ok(stats) => state.dashboard.stats = Some(stats),
        Err(error) => fail_route(state, error),
    }
    Task::none()
}

pub fn users_loaded(
    state: &mut State,
    result: Result<Vec<UserSummary>, ApiError>,
) -> Task<Message> {
    state.loading = false;
    match result {
        Ok(list) => {
            state.users.list = list;
            sort::sort_users(&mut state.users.list, state.users.sort);
        }
        Err(error) => fail_route(state, error),
    }
    Task::none()
}

pub fn user_detail_loaded(
    state: &mut State,
    username: String,
    result: Result<UserDetail, ApiError>,
) -> Task<Message> {
    state.loading = false;
    match result {
        Ok(detail) => {
            log::debug!("loaded detail for {username}");
            state.detail.data = Some(detail);
        }
        Err(error) => fail_route(state, error),
    }
    Task::none()
}

pub fn compare_users_loaded(
    state: &mut State,
    result: Result<Vec<UserSummary>, ApiError>,
) -> Task<Message> {
    state.loading = false;
    match result {
        Ok(mut users) => {
            users.sort_by_key(|user| user.username.to_lowercase());
            state.compare.users = users;
        }
        Err(error) => fail_route(state, error),
    }
    Task::none()
}

pub fn commands_loaded(
    state: &mut State,
    result: Result<Vec<CommandDescriptor>, ApiError>,
) -> Task<Message> {
    state.loading = false;
    match result {
        Ok(commands) => {
            state.sandbox.commands = commands;
            state.sandbox.cards.clear();
            state.sandbox.filter.clear();
        }
        Err(error) => fail_route(state, error),
    }
    Task::none()
}
