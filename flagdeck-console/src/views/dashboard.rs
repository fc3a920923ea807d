//! Dashboard: global counters plus the quick-teleport utility.

use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length};

use flagdeck_core::filter;
use flagdeck_model::Room;

use crate::message::Message;
use crate::state::State;

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let stats = state.dashboard.stats.unwrap_or_default();
    let cards = row![
        stat_card("Unique users", stats.users),
        stat_card("Recorded worlds", stats.worlds),
        stat_card("Unique flag bases", stats.flags),
    ]
    .spacing(16.0);

    column![
        components::page_title("Dashboard"),
        cards,
        teleport_section(state),
    ]
    .spacing(20.0)
    .into()
}

fn stat_card(label: &'static str, value: Option<i64>) -> Element<'static, Message> {
    components::card(
        column![
            text(label).size(14.0).style(text::secondary),
            text(value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())).size(34.0),
        ]
        .spacing(8.0),
    )
}

fn teleport_section(state: &State) -> Element<'_, Message> {
    let pane = &state.teleport;

    let search_row = row![
        text_input("Enter a world id...", &pane.world_id_input)
            .on_input(Message::WorldIdChanged)
            .on_submit(Message::FindRoomsRequested)
            .width(Length::Fill),
        button(
            text(if pane.searching {
                "Searching..."
            } else {
                "Find reachable rooms"
            })
            .size(14.0)
        )
        .style(button::primary)
        .on_press_maybe((!pane.searching).then_some(Message::FindRoomsRequested)),
    ]
    .spacing(12.0)
    .align_y(iced::Alignment::Center);

    let mut section = column![text("Quick teleport").size(18.0), search_row].spacing(12.0);

    if let Some(line) = &pane.status {
        section = section.push(components::status_line(line));
    }

    section = section.push(
        text_input("Filter rooms by name or id...", &pane.filter)
            .on_input(Message::RoomFilterChanged)
            .width(360.0),
    );

    let visible: Vec<&Room> = pane
        .rooms
        .iter()
        .filter(|room| filter::room_matches(room, &pane.filter))
        .collect();

    if pane.rooms.is_empty() {
        let hint = if pane.searched {
            "No reachable rooms found from this position."
        } else {
            "Enter a world id and search for reachable rooms."
        };
        section = section.push(text(hint).size(13.0).style(text::secondary));
    } else if visible.is_empty() {
        section = section.push(
            text("No rooms match the current filter.")
                .size(13.0)
                .style(text::secondary),
        );
    } else {
        section = section.push(room_grid(&visible, pane.teleporting.is_some()));
    }

    components::card(section)
}

fn room_grid<'a>(rooms: &[&'a Room], disabled: bool) -> Element<'a, Message> {
    let mut grid = column![].spacing(8.0);
    for chunk in rooms.chunks(4) {
        let mut line = row![].spacing(8.0);
        for room in chunk {
            line = line.push(
                button(text(room.label()).size(13.0))
                    .style(button::secondary)
                    .width(Length::Fill)
                    .on_press_maybe(
                        (!disabled).then(|| Message::TeleportRequested(room.id.clone())),
                    ),
            );
        }
        grid = grid.push(line);
    }
    grid.into()
}
