//! Teleport utility: room search, grid filtering, and the
//! search-then-click teleport flow.

use iced::Task;

use flagdeck_core::compare::validate_world_id;
use flagdeck_core::sort::sort_rooms;
use flagdeck_model::{Room, TeleportReply, TeleportRequest};

use crate::infrastructure::api_client::ApiError;
use crate::message::Message;
use crate::state::{State, StatusLine};

pub fn world_id_changed(state: &mut State, value: String) -> Task<Message> {
    state.teleport.world_id_input = value;
    Task::none()
}

pub fn filter_changed(state: &mut State, term: String) -> Task<Message> {
    state.teleport.filter = term;
    Task::none()
}

pub fn find_rooms(state: &mut State) -> Task<Message> {
    let world_id = match validate_world_id(&state.teleport.world_id_input) {
        Ok(id) => id.to_string(),
        Err(error) => {
            state.teleport.status = Some(StatusLine::Error(error.to_string()));
            return Task::none();
        }
    };

    let teleport = &mut state.teleport;
    teleport.last_world_id = Some(world_id.clone());
    teleport.filter.clear();
    teleport.rooms.clear();
    teleport.searched = false;
    teleport.searching = true;
    teleport.status = Some(StatusLine::Info(format!(
        "Searching reachable rooms for world {world_id}..."
    )));

    let api = state.api.clone();
    Task::perform(
        async move { api.reachable_rooms(&world_id).await },
        Message::RoomsLoaded,
    )
}

pub fn rooms_loaded(state: &mut State, result: Result<Vec<Room>, ApiError>) -> Task<Message> {
    let teleport = &mut state.teleport;
    teleport.searching = false;
    teleport.searched = true;
    match result {
        Ok(mut rooms) => {
            sort_rooms(&mut rooms);
            teleport.status = if rooms.is_empty() {
                None
            } else {
                Some(StatusLine::Info(format!(
                    "Click a room to teleport. ({} found)",
                    rooms.len()
                )))
            };
            teleport.rooms = rooms;
        }
        Err(error) => {
            teleport.rooms.clear();
            teleport.status = Some(StatusLine::Error(format!("Room search failed: {error}")));
        }
    }
    Task::none()
}

pub fn requested(state: &mut State, room_id: String) -> Task<Message> {
    let Some(world_id) = state.teleport.last_world_id.clone() else {
        state.teleport.status = Some(StatusLine::Error(
            "World id missing. Run the room search again.".to_string(),
        ));
        return Task::none();
    };

    let label = state
        .teleport
        .rooms
        .iter()
        .find(|room| room.id == room_id)
        .map(|room| room.label().to_string())
        .unwrap_or_else(|| room_id.clone());

    state.teleport.teleporting = Some(room_id.clone());
    state.teleport.status = Some(StatusLine::Info(format!("Teleporting to {label}...")));

    let request = TeleportRequest {
        world_id,
        target_room_id: room_id,
    };
    let api = state.api.clone();
    Task::perform(
        async move { api.teleport(&request).await },
        Message::TeleportFinished,
    )
}

pub fn finished(state: &mut State, result: Result<TeleportReply, ApiError>) -> Task<Message> {
    state.teleport.teleporting = None;
    state.teleport.status = Some(match result {
        Ok(reply) if reply.success => {
            let mut message = reply
                .message
                .unwrap_or_else(|| "Teleport complete.".to_string());
            if let Some(location) = reply.new_location {
                message = format!("{message} (new position: {})", location.id);
            }
            StatusLine::Success(message)
        }
        Ok(reply) => StatusLine::Error(format!(
            "Teleport failed: {}",
            reply
                .error
                .unwrap_or_else(|| "no further detail from the server".to_string())
        )),
        Err(error) => StatusLine::Error(format!("Teleport failed: {error}")),
    });
    Task::none()
}
