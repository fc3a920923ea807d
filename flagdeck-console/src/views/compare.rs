//! Compare view: two searchable pickers and the three-column result.

use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Element, Length};

use flagdeck_model::{CompareResult, UserSummary};

use crate::message::Message;
use crate::state::{ComparePane, PickerSlot, State};

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let pane = &state.compare;

    let form = components::card(
        row![
            picker(pane, PickerSlot::First, "User 1"),
            picker(pane, PickerSlot::Second, "User 2"),
            button(
                text(if pane.busy { "Comparing..." } else { "Compare" }).size(14.0)
            )
            .style(button::primary)
            .on_press_maybe((!pane.busy).then_some(Message::CompareRequested)),
        ]
        .spacing(16.0)
        .align_y(iced::Alignment::End),
    );

    let mut page = column![
        components::page_title("Compare flag bases"),
        form,
    ]
    .spacing(16.0);

    if let Some(error) = &pane.error {
        page = page.push(components::error_box(error));
    }
    if let Some(result) = &pane.result {
        page = page.push(result_view(result));
    }

    page.into()
}

fn picker<'a>(pane: &'a ComparePane, slot: PickerSlot, label: &'static str) -> Element<'a, Message> {
    let picker_state = pane.picker(slot);

    let input = text_input("Search user...", &picker_state.input)
        .on_input(move |value| Message::PickerInput(slot, value))
        .width(Length::Fill);
    let toggle = button(text(if picker_state.open { "▲" } else { "▼" }).size(11.0))
        .style(button::text)
        .on_press(if picker_state.open {
            Message::PickerClosed(slot)
        } else {
            Message::PickerOpened(slot)
        });

    let mut field = column![
        text(label).size(13.0).style(text::secondary),
        row![input, toggle].spacing(4.0).align_y(iced::Alignment::Center),
    ]
    .spacing(4.0)
    .width(Length::FillPortion(1));

    if picker_state.open {
        let term = picker_state.input.to_lowercase();
        let matches: Vec<&UserSummary> = pane
            .users
            .iter()
            .filter(|user| user.username.to_lowercase().contains(&term))
            .take(8)
            .collect();

        let options: Element<'_, Message> = if matches.is_empty() {
            text("No user found").size(13.0).style(text::secondary).into()
        } else {
            let mut list = column![];
            for user in matches {
                list = list.push(
                    button(text(&user.username).size(13.0))
                        .style(button::text)
                        .width(Length::Fill)
                        .on_press(Message::PickerSelected(slot, user.username.clone())),
                );
            }
            list.into()
        };

        field = field.push(
            container(options)
                .style(container::bordered_box)
                .width(Length::Fill)
                .padding(4.0),
        );
    }

    field.into()
}

fn result_view(result: &CompareResult) -> Element<'_, Message> {
    column![
        text(format!("Result: {} vs {}", result.user1, result.user2)).size(18.0),
        row![
            bases_card(
                format!("{} is ahead", result.user1),
                result.ahead_count,
                &result.ahead,
            ),
            bases_card(
                format!("{} is ahead", result.user2),
                result.behind_count,
                &result.behind,
            ),
            bases_card("In common".to_string(), result.common_count, &result.common),
        ]
        .spacing(16.0),
    ]
    .spacing(12.0)
    .into()
}

fn bases_card(title: String, count: i64, items: &[String]) -> Element<'_, Message> {
    let mut section = column![text(format!("{title} ({count})")).size(15.0)].spacing(6.0);
    if items.is_empty() {
        section = section.push(text("None").size(13.0).style(text::secondary));
    } else {
        let mut list = column![].spacing(2.0);
        for item in items {
            list = list.push(text(format!("- {item}")).size(13.0));
        }
        section = section.push(scrollable(list).height(220.0));
    }
    components::card(section)
}
