//! Root-level view composition.

pub mod compare;
pub mod components;
pub mod dashboard;
pub mod sandbox;
pub mod sidebar;
pub mod user_detail;
pub mod users;

use iced::widget::{container, row, scrollable};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{Screen, State};

pub fn view(state: &State) -> Element<'_, Message> {
    let content: Element<'_, Message> = if state.loading {
        components::loading_view()
    } else {
        match &state.screen {
            Screen::Dashboard => dashboard::view(state),
            Screen::Users => users::view(state),
            Screen::UserDetail { username } => user_detail::view(state, username),
            Screen::Compare => compare::view(state),
            Screen::Sandbox => sandbox::view(state),
            Screen::NotFound { fragment } => components::not_found(fragment),
            Screen::Failed { message } => components::error_box(message),
        }
    };

    row![
        sidebar::view(state),
        scrollable(container(content).padding(24.0).width(Length::Fill)).height(Length::Fill),
    ]
    .into()
}
