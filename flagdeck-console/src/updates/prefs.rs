//! Sidebar chrome: dark mode and the persisted notes pad.

use iced::Task;
use iced::widget::text_editor;

use crate::message::Message;
use crate::state::State;

pub fn dark_mode_toggled(state: &mut State, enabled: bool) -> Task<Message> {
    state.prefs.dark_mode = enabled;
    persist(state);
    Task::none()
}

pub fn notes_edited(state: &mut State, action: text_editor::Action) -> Task<Message> {
    state.notes.perform(action);
    state.prefs.notes = state.notes.text();
    persist(state);
    Task::none()
}

fn persist(state: &State) {
    if let Err(error) = state.prefs.save() {
        log::warn!("failed to persist preferences: {error}");
    }
}
