//! User-list interactions: header sorting and the two text filters.

use iced::Task;

use flagdeck_core::{SortKey, sort};

use crate::message::Message;
use crate::state::State;

pub fn sort_by(state: &mut State, key: SortKey) -> Task<Message> {
    state.users.sort = state.users.sort.toggled(key);
    sort::sort_users(&mut state.users.list, state.users.sort);
    Task::none()
}

pub fn filter_changed(state: &mut State, term: String) -> Task<Message> {
    state.users.filter = term;
    Task::none()
}

pub fn flag_filter_changed(state: &mut State, term: String) -> Task<Message> {
    state.detail.flag_filter = term;
    Task::none()
}
