//! Single-user detail: profile, last position, and the flag cloud.

use iced::widget::tooltip;
use iced::widget::{button, column, container, row, text, text_input};
use iced::{Border, Element, Theme};

use flagdeck_core::filter;
use flagdeck_model::FlagEntry;

use crate::message::Message;
use crate::router::Route;
use crate::state::State;

use super::components;

pub fn view<'a>(state: &'a State, username: &'a str) -> Element<'a, Message> {
    let back = button(text("< Back to list").size(14.0))
        .style(button::text)
        .on_press(Message::Navigate(Route::Users));

    let Some(data) = &state.detail.data else {
        return column![
            back,
            text(format!("No data available for {username}."))
                .size(14.0)
                .style(text::secondary),
        ]
        .spacing(16.0)
        .into();
    };

    let details = &data.details;

    let status: Element<'_, Message> = match details.blocked {
        None => text("Unknown").size(13.0).style(text::secondary).into(),
        Some(true) => text("Blocked").size(13.0).style(text::danger).into(),
        Some(false) => text("Active").size(13.0).style(text::success).into(),
    };

    let info = components::card(
        column![
            text("Profile").size(17.0),
            info_row(
                "Name",
                format!("{} {}", display(&details.first_name), display(&details.last_name)),
            ),
            info_row("Email", display(&details.email).to_string()),
            info_row("Track", display(&details.filiere).to_string()),
            info_row("Profile", display(&details.profile).to_string()),
            row![
                text("Status").size(13.0).style(text::secondary).width(110.0),
                status,
            ]
            .spacing(8.0),
            info_row(
                "Created",
                components::format_date(details.created_at.as_deref()),
            ),
        ]
        .spacing(6.0),
    );

    let position: Element<'_, Message> = match &data.last_position {
        Some(position) => column![
            info_row("World", display(&position.world_id).to_string()),
            info_row("Location", display(&position.location).to_string()),
            info_row("Room", display(&position.room).to_string()),
            info_row(
                "Seen",
                components::format_date(position.created_at.as_deref()),
            ),
        ]
        .spacing(6.0)
        .into(),
        None => text("No recent position recorded.")
            .size(13.0)
            .style(text::secondary)
            .into(),
    };
    let position = components::card(column![text("Last seen position").size(17.0), position].spacing(10.0));

    column![
        back,
        components::page_title(details.username.clone()),
        row![info, position].spacing(16.0),
        flags_card(state),
    ]
    .spacing(16.0)
    .into()
}

fn flags_card(state: &State) -> Element<'_, Message> {
    let Some(data) = &state.detail.data else {
        return column![].into();
    };
    let flags = &data.flags;
    let visible: Vec<&FlagEntry> = flags
        .iter()
        .filter(|entry| filter::flag_matches(entry, &state.detail.flag_filter))
        .collect();

    let mut section = column![
        text(format!("Flags ({})", flags.len())).size(17.0),
        text_input("Filter flags...", &state.detail.flag_filter)
            .on_input(Message::FlagFilterChanged)
            .width(320.0),
    ]
    .spacing(10.0);

    if flags.is_empty() {
        section = section.push(text("No flags found.").size(13.0).style(text::secondary));
    } else if visible.is_empty() {
        // Shown only when a filter hides everything and flags existed.
        section = section.push(
            text("No matching flags found.")
                .size(13.0)
                .style(text::secondary),
        );
    } else {
        section = section.push(flag_cloud(&visible));
    }

    components::card(section)
}

fn flag_cloud<'a>(flags: &[&'a FlagEntry]) -> Element<'a, Message> {
    let mut cloud = column![].spacing(6.0);
    for chunk in flags.chunks(3) {
        let mut line = row![].spacing(6.0);
        for entry in chunk {
            line = line.push(flag_chip(entry));
        }
        cloud = cloud.push(line);
    }
    cloud.into()
}

fn flag_chip(entry: &FlagEntry) -> Element<'_, Message> {
    let chip = container(text(&entry.flag).size(13.0))
        .padding([4.0, 10.0])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            border: Border {
                radius: 12.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        });
    tooltip(
        chip,
        text(format!(
            "Captured: {}",
            components::format_date(entry.date.as_deref())
        ))
        .size(12.0),
        tooltip::Position::Top,
    )
    .style(container::rounded_box)
    .into()
}

fn info_row<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    row![
        text(label).size(13.0).style(text::secondary).width(110.0),
        text(value).size(13.0),
    ]
    .spacing(8.0)
    .into()
}

fn display(value: &Option<String>) -> &str {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or("N/A")
}
