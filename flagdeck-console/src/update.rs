//! Top-level message dispatch.
//!
//! Each concern keeps its handlers in a module under [`crate::updates`];
//! this function only routes messages to them.

use iced::Task;

use crate::message::Message;
use crate::state::State;
use crate::updates::{compare, maintenance, navigation, prefs, sandbox, teleport, users};

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        // Routing
        Message::Navigate(route) => navigation::navigate(state, route),
        Message::StatsLoaded(result) => navigation::stats_loaded(state, result),
        Message::UsersLoaded(result) => navigation::users_loaded(state, result),
        Message::UserDetailLoaded(username, result) => {
            navigation::user_detail_loaded(state, username, result)
        }
        Message::CompareUsersLoaded(result) => navigation::compare_users_loaded(state, result),
        Message::CommandsLoaded(result) => navigation::commands_loaded(state, result),

        // Users view
        Message::SortBy(key) => users::sort_by(state, key),
        Message::UserFilterChanged(term) => users::filter_changed(state, term),
        Message::FlagFilterChanged(term) => users::flag_filter_changed(state, term),

        // Compare view
        Message::PickerInput(slot, value) => compare::picker_input(state, slot, value),
        Message::PickerOpened(slot) => compare::picker_opened(state, slot),
        Message::PickerClosed(slot) => compare::picker_closed(state, slot),
        Message::PickerSelected(slot, username) => compare::picker_selected(state, slot, username),
        Message::CompareRequested => compare::submit(state),
        Message::CompareLoaded(result) => compare::loaded(state, result),

        // Sandbox view
        Message::SandboxFilterChanged(term) => sandbox::filter_changed(state, term),
        Message::CardToggled(command) => sandbox::toggled(state, command),
        Message::ParamChanged {
            command,
            param,
            value,
        } => sandbox::param_changed(state, command, param, value),
        Message::ParamEdited {
            command,
            param,
            action,
        } => sandbox::param_edited(state, command, param, action),
        Message::ExecuteRequested(command) => sandbox::execute(state, command),
        Message::ExecuteFinished(command, result) => sandbox::finished(state, command, result),

        // Teleport section
        Message::WorldIdChanged(value) => teleport::world_id_changed(state, value),
        Message::FindRoomsRequested => teleport::find_rooms(state),
        Message::RoomsLoaded(result) => teleport::rooms_loaded(state, result),
        Message::RoomFilterChanged(term) => teleport::filter_changed(state, term),
        Message::TeleportRequested(room_id) => teleport::requested(state, room_id),
        Message::TeleportFinished(result) => teleport::finished(state, result),

        // Maintenance triggers
        Message::DbRefreshRequested => maintenance::db_requested(state),
        Message::DbRefreshFinished(result) => maintenance::db_finished(state, result),
        Message::WorldsRefreshRequested => maintenance::worlds_requested(state),
        Message::WorldsRefreshFinished(result) => maintenance::worlds_finished(state, result),

        // Sidebar chrome
        Message::DarkModeToggled(enabled) => prefs::dark_mode_toggled(state, enabled),
        Message::NotesEdited(action) => prefs::notes_edited(state, action),
    }
}
