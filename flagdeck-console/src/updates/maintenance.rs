//! Fire-and-forget maintenance triggers. Progress is reported in the
//! sidebar's local status areas, never through the global loading
//! indicator.

use iced::Task;

use flagdeck_model::ActionReply;

use crate::infrastructure::api_client::ApiError;
use crate::message::Message;
use crate::state::{State, StatusLine};

pub fn db_requested(state: &mut State) -> Task<Message> {
    state.maintenance.db_busy = true;
    state.maintenance.db_status =
        Some(StatusLine::Info("Starting database refresh...".to_string()));
    let api = state.api.clone();
    Task::perform(async move { api.update_db().await }, Message::DbRefreshFinished)
}

pub fn db_finished(state: &mut State, result: Result<ActionReply, ApiError>) -> Task<Message> {
    state.maintenance.db_busy = false;
    match result {
        Ok(reply) if reply.success => {
            state.maintenance.db_status = Some(StatusLine::Success(
                reply.message.unwrap_or_else(|| "Update finished.".to_string()),
            ));
            // Fresh data may be visible; reload whatever is on screen.
            Task::done(Message::Navigate(state.route.clone()))
        }
        Ok(reply) => {
            state.maintenance.db_status = Some(StatusLine::Error(
                reply
                    .error
                    .unwrap_or_else(|| "Unknown server error.".to_string()),
            ));
            Task::none()
        }
        Err(error) => {
            state.maintenance.db_status = Some(StatusLine::Error(error.to_string()));
            Task::none()
        }
    }
}

pub fn worlds_requested(state: &mut State) -> Task<Message> {
    state.maintenance.worlds_busy = true;
    state.maintenance.worlds_status = Some(StatusLine::Info(
        "Starting position refresh...".to_string(),
    ));
    let api = state.api.clone();
    Task::perform(
        async move { api.update_worlds().await },
        Message::WorldsRefreshFinished,
    )
}

pub fn worlds_finished(state: &mut State, result: Result<ActionReply, ApiError>) -> Task<Message> {
    state.maintenance.worlds_busy = false;
    state.maintenance.worlds_status = Some(match result {
        Ok(reply) if reply.success => StatusLine::Success(
            reply
                .message
                .unwrap_or_else(|| "Position update finished.".to_string()),
        ),
        Ok(reply) => StatusLine::Error(
            reply
                .error
                .unwrap_or_else(|| "Unknown server error.".to_string()),
        ),
        Err(error) => StatusLine::Error(error.to_string()),
    });
    Task::none()
}
