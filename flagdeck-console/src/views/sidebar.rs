//! Navigation sidebar: view links, dark-mode toggle, maintenance
//! triggers, and the persisted notes pad.

use iced::widget::{
    Space, button, checkbox, column, container, horizontal_rule, text, text_editor,
};
use iced::{Element, Length, Theme};

use crate::message::Message;
use crate::router::Route;
use crate::state::State;

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let active = state.route.nav_target();
    let nav = column![
        nav_button("Dashboard", Route::Dashboard, &active),
        nav_button("Users", Route::Users, &active),
        nav_button("Compare Flags", Route::Compare, &active),
        nav_button("Sandbox", Route::Sandbox, &active),
    ]
    .spacing(4.0);

    let maintenance = maintenance_section(state);

    let notes = column![
        text("Notes").size(13.0).style(text::secondary),
        text_editor(&state.notes)
            .on_action(Message::NotesEdited)
            .height(140.0),
    ]
    .spacing(6.0);

    let panel = column![
        text("Flagdeck").size(22.0),
        Space::with_height(12.0),
        nav,
        Space::with_height(12.0),
        horizontal_rule(1.0),
        checkbox("Dark mode", state.prefs.dark_mode).on_toggle(Message::DarkModeToggled),
        horizontal_rule(1.0),
        maintenance,
        horizontal_rule(1.0),
        notes,
    ]
    .spacing(14.0);

    container(panel)
        .padding(16.0)
        .width(240.0)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..container::Style::default()
        })
        .into()
}

fn nav_button<'a>(label: &'a str, target: Route, active: &Option<Route>) -> Element<'a, Message> {
    let is_active = active.as_ref() == Some(&target);
    button(text(label).size(15.0))
        .style(if is_active { button::primary } else { button::text })
        .width(Length::Fill)
        .on_press(Message::Navigate(target))
        .into()
}

fn maintenance_section(state: &State) -> Element<'_, Message> {
    let pane = &state.maintenance;

    let db_label = if pane.db_busy {
        "Refreshing..."
    } else {
        "Refresh database"
    };
    let worlds_label = if pane.worlds_busy {
        "Refreshing..."
    } else {
        "Refresh player positions"
    };

    let mut section = column![
        text("Maintenance").size(13.0).style(text::secondary),
        button(text(db_label).size(13.0))
            .style(button::secondary)
            .width(Length::Fill)
            .on_press_maybe((!pane.db_busy).then_some(Message::DbRefreshRequested)),
    ]
    .spacing(8.0);

    if let Some(line) = &pane.db_status {
        section = section.push(components::status_line(line));
    }

    section = section.push(
        button(text(worlds_label).size(13.0))
            .style(button::secondary)
            .width(Length::Fill)
            .on_press_maybe((!pane.worlds_busy).then_some(Message::WorldsRefreshRequested)),
    );

    if let Some(line) = &pane.worlds_status {
        section = section.push(components::status_line(line));
    }

    section.into()
}
