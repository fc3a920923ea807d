//! Compare-form interactions: the two searchable pickers and the
//! submission flow. Validation runs before any request is built.

use iced::Task;

use flagdeck_core::compare::validate_selection;
use flagdeck_model::CompareResult;

use crate::infrastructure::api_client::ApiError;
use crate::message::Message;
use crate::state::{PickerSlot, State};

pub fn picker_input(state: &mut State, slot: PickerSlot, value: String) -> Task<Message> {
    let picker = state.compare.picker_mut(slot);
    // Typing invalidates the previous selection, exactly like the
    // hidden-input pattern this replaces.
    picker.selected = None;
    picker.open = true;
    picker.input = value;
    Task::none()
}

pub fn picker_opened(state: &mut State, slot: PickerSlot) -> Task<Message> {
    state.compare.picker_mut(slot).open = true;
    Task::none()
}

pub fn picker_closed(state: &mut State, slot: PickerSlot) -> Task<Message> {
    state.compare.picker_mut(slot).open = false;
    Task::none()
}

pub fn picker_selected(state: &mut State, slot: PickerSlot, username: String) -> Task<Message> {
    let picker = state.compare.picker_mut(slot);
    picker.input = username.clone();
    picker.selected = Some(username);
    picker.open = false;
    Task::none()
}

pub fn submit(state: &mut State) -> Task<Message> {
    state.compare.result = None;

    let user1 = state.compare.first.selected.clone().unwrap_or_default();
    let user2 = state.compare.second.selected.clone().unwrap_or_default();
    if let Err(error) = validate_selection(&user1, &user2) {
        state.compare.error = Some(error.to_string());
        return Task::none();
    }

    state.compare.error = None;
    state.compare.busy = true;
    let api = state.api.clone();
    Task::perform(
        async move { api.compare(&user1, &user2).await },
        Message::CompareLoaded,
    )
}

pub fn loaded(state: &mut State, result: Result<CompareResult, ApiError>) -> Task<Message> {
    state.compare.busy = false;
    match result {
        Ok(outcome) => {
            state.compare.error = None;
            state.compare.result = Some(outcome);
        }
        Err(error) => state.compare.error = Some(format!("Comparison failed: {error}")),
    }
    Task::none()
}
