//! Sandbox view: searchable, expandable command cards with
//! type-driven parameter forms.

use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, text, text_editor, text_input,
};
use iced::{Border, Element, Length, Theme};

use flagdeck_core::filter;
use flagdeck_core::sandbox::ParamKind;
use flagdeck_model::{CommandDescriptor, ParamDescriptor};

use crate::message::Message;
use crate::state::{BoolChoice, CardOutcome, CardPhase, CardState, State};

use super::components;

pub fn view(state: &State) -> Element<'_, Message> {
    let pane = &state.sandbox;

    let mut page = column![
        components::page_title("Sandbox"),
        text_input("Search a command...", &pane.filter)
            .on_input(Message::SandboxFilterChanged)
            .width(420.0),
    ]
    .spacing(16.0);

    let mut visible = 0usize;
    for command in pane
        .commands
        .iter()
        .filter(|command| filter::command_matches(command, &pane.filter))
    {
        visible += 1;
        page = page.push(card_view(state, command));
    }

    if pane.commands.is_empty() {
        page = page.push(
            text("No sandbox commands available.")
                .size(13.0)
                .style(text::secondary),
        );
    } else if visible == 0 {
        page = page.push(text("No command found.").size(13.0).style(text::secondary));
    }

    page.into()
}

fn card_view<'a>(state: &'a State, command: &'a CommandDescriptor) -> Element<'a, Message> {
    let card_state = state.sandbox.cards.get(&command.name);
    let phase = card_state.map(|card| card.phase).unwrap_or_default();

    let mut header = row![text(&command.name).size(16.0)]
        .spacing(8.0)
        .align_y(iced::Alignment::Center);
    if command.kerberized {
        header = header.push(
            container(text("Kerberized").size(11.0))
                .padding([2.0, 8.0])
                .style(badge_style),
        );
    }
    header = header.push(horizontal_space());
    header = header.push(
        text(if phase == CardPhase::Collapsed { "+" } else { "-" })
            .size(15.0)
            .style(text::secondary),
    );

    let mut body = column![
        button(header)
            .style(button::text)
            .width(Length::Fill)
            .on_press(Message::CardToggled(command.name.clone())),
    ]
    .spacing(8.0);

    if let Some(description) = &command.description {
        body = body.push(text(description).size(13.0).style(text::secondary));
    }

    if phase != CardPhase::Collapsed {
        if let Some(card) = card_state {
            let executing = phase == CardPhase::Executing;
            body = body.push(param_form(command, card));
            body = body.push(
                button(
                    text(if executing { "Executing..." } else { "Execute" }).size(14.0),
                )
                .style(button::primary)
                .on_press_maybe(
                    (!executing).then(|| Message::ExecuteRequested(command.name.clone())),
                ),
            );
            if let Some(outcome) = &card.outcome {
                body = body.push(match outcome {
                    CardOutcome::Success(result) => success_result(result),
                    CardOutcome::Failure(message) => components::error_box(message),
                });
            }
        }
    }

    components::card(body)
}

fn param_form<'a>(command: &'a CommandDescriptor, card: &'a CardState) -> Element<'a, Message> {
    if command.params.is_empty() {
        return text("This command takes no parameters.")
            .size(13.0)
            .style(text::secondary)
            .into();
    }

    let mut form = column![].spacing(10.0);
    for param in &command.params {
        let invalid = card.invalid_field.as_deref() == Some(param.name.as_str());

        let mut label = row![
            text(&param.name).size(13.0),
            text(format!("({})", hint_label(&param.type_hint)))
                .size(11.0)
                .style(text::secondary),
        ]
        .spacing(6.0)
        .align_y(iced::Alignment::Center);
        if param.required {
            label = label.push(text("*").size(13.0).style(text::danger));
        }

        let input = param_input(command, param, card);
        let input: Element<'a, Message> = if invalid {
            container(input).padding(2.0).style(invalid_style).into()
        } else {
            input
        };

        form = form.push(column![label, input].spacing(4.0));
    }
    form.into()
}

fn hint_label(hint: &str) -> &str {
    if hint.is_empty() { "string" } else { hint }
}

fn param_input<'a>(
    command: &'a CommandDescriptor,
    param: &'a ParamDescriptor,
    card: &'a CardState,
) -> Element<'a, Message> {
    let command_name = command.name.clone();
    let param_name = param.name.clone();

    match ParamKind::from_hint(&param.type_hint) {
        ParamKind::Json => match card.json_inputs.get(&param.name) {
            Some(content) => text_editor(content)
                .on_action(move |action| Message::ParamEdited {
                    command: command_name.clone(),
                    param: param_name.clone(),
                    action,
                })
                .height(90.0)
                .into(),
            None => text("Editor unavailable; collapse and re-expand the card.")
                .size(12.0)
                .style(text::danger)
                .into(),
        },
        ParamKind::Boolean => {
            let current = BoolChoice::from_input(
                card.inputs
                    .get(&param.name)
                    .map(String::as_str)
                    .unwrap_or(""),
            );
            pick_list(&BoolChoice::ALL[..], Some(current), move |choice| {
                Message::ParamChanged {
                    command: command_name.clone(),
                    param: param_name.clone(),
                    value: choice.as_input().to_string(),
                }
            })
            .into()
        }
        ParamKind::Number | ParamKind::Text => {
            let value = card
                .inputs
                .get(&param.name)
                .map(String::as_str)
                .unwrap_or("");
            text_input(param.description.as_deref().unwrap_or(""), value)
                .on_input(move |value| Message::ParamChanged {
                    command: command_name.clone(),
                    param: param_name.clone(),
                    value,
                })
                .width(Length::Fill)
                .into()
        }
    }
}

fn success_result(result: &str) -> Element<'_, Message> {
    column![
        text("Success").size(13.0).style(text::success),
        container(text(result).size(12.0).font(iced::Font::MONOSPACE))
            .padding(8.0)
            .width(Length::Fill)
            .style(container::rounded_box),
    ]
    .spacing(4.0)
    .into()
}

fn badge_style(theme: &Theme) -> container::Style {
    let pair = theme.extended_palette().primary.weak;
    container::Style {
        background: Some(pair.color.into()),
        text_color: Some(pair.text),
        border: Border {
            radius: 10.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn invalid_style(theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: theme.extended_palette().danger.base.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}
