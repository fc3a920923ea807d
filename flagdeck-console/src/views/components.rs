//! Shared view pieces: cards, status boxes, the loading screen, and
//! date formatting.

use iced::widget::{column, container, text};
use iced::{Border, Element, Length, Theme};

use crate::message::Message;
use crate::state::StatusLine;

pub fn page_title(title: impl Into<String>) -> Element<'static, Message> {
    text(title.into()).size(26.0).into()
}

/// Rounded card container used by every view.
pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(16.0)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

pub fn loading_view<'a>() -> Element<'a, Message> {
    container(text("Loading...").size(18.0).style(text::secondary))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn not_found(fragment: &str) -> Element<'_, Message> {
    column![
        text("Page not found").size(26.0).style(text::danger),
        text(format!(
            "The link {fragment} does not match any known section."
        ))
        .size(14.0),
    ]
    .spacing(12.0)
    .into()
}

pub fn status_line(line: &StatusLine) -> Element<'_, Message> {
    match line {
        StatusLine::Info(message) => info_box(message),
        StatusLine::Success(message) => success_box(message),
        StatusLine::Error(message) => error_box(message),
    }
}

pub fn error_box(message: &str) -> Element<'_, Message> {
    toned_box(message, |theme| {
        let pair = theme.extended_palette().danger.weak;
        (pair.color, pair.text)
    })
}

pub fn success_box(message: &str) -> Element<'_, Message> {
    toned_box(message, |theme| {
        let pair = theme.extended_palette().success.weak;
        (pair.color, pair.text)
    })
}

pub fn info_box(message: &str) -> Element<'_, Message> {
    toned_box(message, |theme| {
        let pair = theme.extended_palette().background.weak;
        (pair.color, pair.text)
    })
}

fn toned_box<'a>(
    message: &'a str,
    tone: fn(&Theme) -> (iced::Color, iced::Color),
) -> Element<'a, Message> {
    container(text(message).size(13.0))
        .padding(12.0)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let (background, text_color) = tone(theme);
            container::Style {
                background: Some(background.into()),
                text_color: Some(text_color),
                border: Border {
                    radius: 6.0.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }
        })
        .into()
}

/// Render backend timestamps as `DD/MM/YYYY HH:MM`, falling back to
/// the raw string when the shape is unrecognized.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty() && *r != "N/A") else {
        return "N/A".to_string();
    };
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%d/%m/%Y %H:%M").to_string();
    }
    raw.to_string()
}
