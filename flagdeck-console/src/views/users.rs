//! Sortable, filterable user table.

use iced::widget::{button, column, container, horizontal_rule, row, text, text_input};
use iced::{Element, Length};

use flagdeck_core::{SortDirection, SortKey, SortState, filter};
use flagdeck_model::UserSummary;

use crate::message::Message;
use crate::router::Route;
use crate::state::State;

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let pane = &state.users;

    let mut header = row![].spacing(8.0);
    for key in SortKey::all() {
        header = header.push(header_button(*key, pane.sort));
    }

    let mut body = column![].spacing(2.0);
    let mut visible = 0usize;
    for user in pane
        .list
        .iter()
        .filter(|user| filter::user_matches(user, &pane.filter))
    {
        visible += 1;
        body = body.push(user_row(user));
    }
    if visible == 0 && !pane.list.is_empty() {
        body = body.push(
            text("No users match the current filter.")
                .size(13.0)
                .style(text::secondary),
        );
    }

    column![
        components::page_title(format!("User list ({})", pane.list.len())),
        text_input("Search by username or name...", &pane.filter)
            .on_input(Message::UserFilterChanged)
            .width(320.0),
        components::card(column![header, horizontal_rule(1.0), body].spacing(8.0)),
    ]
    .spacing(16.0)
    .into()
}

fn header_button(key: SortKey, sort: SortState) -> Element<'static, Message> {
    let indicator = if sort.key == key {
        match sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    } else {
        "↕"
    };
    button(
        row![
            text(key.label()).size(13.0),
            text(indicator).size(11.0).style(text::secondary),
        ]
        .spacing(4.0)
        .align_y(iced::Alignment::Center),
    )
    .style(button::text)
    .width(column_width(key))
    .on_press(Message::SortBy(key))
    .into()
}

fn column_width(key: SortKey) -> Length {
    match key {
        SortKey::Username | SortKey::Name => Length::FillPortion(3),
        SortKey::Filiere | SortKey::Blocked => Length::FillPortion(2),
        SortKey::FlagCount => Length::FillPortion(1),
    }
}

fn user_row(user: &UserSummary) -> Element<'_, Message> {
    let name = {
        let first = user.first_name.as_deref().unwrap_or("");
        let last = user.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    };

    let status: Element<'_, Message> = match user.blocked {
        None => text("Unknown").size(13.0).style(text::secondary).into(),
        Some(true) => text("Blocked").size(13.0).style(text::danger).into(),
        Some(false) => text("Active").size(13.0).style(text::success).into(),
    };

    button(
        row![
            text(&user.username)
                .size(14.0)
                .width(column_width(SortKey::Username)),
            text(name).size(14.0).width(column_width(SortKey::Name)),
            text(user.filiere.as_deref().unwrap_or("N/A"))
                .size(14.0)
                .width(column_width(SortKey::Filiere)),
            text(user.flag_count.to_string())
                .size(14.0)
                .width(column_width(SortKey::FlagCount)),
            container(status).width(column_width(SortKey::Blocked)),
        ]
        .spacing(8.0)
        .align_y(iced::Alignment::Center),
    )
    .style(button::text)
    .width(Length::Fill)
    .on_press(Message::Navigate(Route::User(user.username.clone())))
    .into()
}
