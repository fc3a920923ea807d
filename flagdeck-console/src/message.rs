//! The application's message vocabulary.

use iced::widget::text_editor;

use flagdeck_core::SortKey;
use flagdeck_model::{
    ActionReply, CommandDescriptor, CompareResult, ExecuteReply, Room, Stats, TeleportReply,
    UserDetail, UserSummary,
};

use crate::infrastructure::api_client::ApiError;
use crate::router::Route;
use crate::state::PickerSlot;

#[derive(Debug, Clone)]
pub enum Message {
    // Routing
    Navigate(Route),

    // Route data arrivals
    StatsLoaded(Result<Stats, ApiError>),
    UsersLoaded(Result<Vec<UserSummary>, ApiError>),
    UserDetailLoaded(String, Result<UserDetail, ApiError>),
    CompareUsersLoaded(Result<Vec<UserSummary>, ApiError>),
    CommandsLoaded(Result<Vec<CommandDescriptor>, ApiError>),

    // Users view
    SortBy(SortKey),
    UserFilterChanged(String),
    FlagFilterChanged(String),

    // Compare view
    PickerInput(PickerSlot, String),
    PickerOpened(PickerSlot),
    PickerClosed(PickerSlot),
    PickerSelected(PickerSlot, String),
    CompareRequested,
    CompareLoaded(Result<CompareResult, ApiError>),

    // Sandbox view
    SandboxFilterChanged(String),
    CardToggled(String),
    ParamChanged {
        command: String,
        param: String,
        value: String,
    },
    ParamEdited {
        command: String,
        param: String,
        action: text_editor::Action,
    },
    ExecuteRequested(String),
    ExecuteFinished(String, Result<ExecuteReply, ApiError>),

    // Teleport section (dashboard)
    WorldIdChanged(String),
    FindRoomsRequested,
    RoomsLoaded(Result<Vec<Room>, ApiError>),
    RoomFilterChanged(String),
    TeleportRequested(String),
    TeleportFinished(Result<TeleportReply, ApiError>),

    // Maintenance triggers (sidebar)
    DbRefreshRequested,
    DbRefreshFinished(Result<ActionReply, ApiError>),
    WorldsRefreshRequested,
    WorldsRefreshFinished(Result<ActionReply, ApiError>),

    // Sidebar chrome
    DarkModeToggled(bool),
    NotesEdited(text_editor::Action),
}
