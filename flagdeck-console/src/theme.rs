//! Theme selection for the application window.

use iced::Theme;

use crate::state::State;

pub fn application_theme(state: &State) -> Theme {
    if state.prefs.dark_mode {
        Theme::Dark
    } else {
        Theme::Light
    }
}
