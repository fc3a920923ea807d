//! Sandbox card lifecycle: expand/collapse, form editing, execution.

use iced::Task;
use iced::widget::text_editor;
use serde_json::Value;

use flagdeck_core::sandbox::{ParamKind, build_params};
use flagdeck_model::{ExecuteReply, ExecuteRequest};

use crate::infrastructure::api_client::ApiError;
use crate::message::Message;
use crate::state::{CardOutcome, CardPhase, CardState, State};

pub fn filter_changed(state: &mut State, term: String) -> Task<Message> {
    state.sandbox.filter = term;
    Task::none()
}

pub fn toggled(state: &mut State, command: String) -> Task<Message> {
    // JSON-typed parameters get a dedicated editor buffer on expand.
    let json_params: Vec<String> = state
        .sandbox
        .commands
        .iter()
        .find(|c| c.name == command)
        .map(|c| {
            c.params
                .iter()
                .filter(|p| ParamKind::from_hint(&p.type_hint) == ParamKind::Json)
                .map(|p| p.name.clone())
                .collect()
        })
        .unwrap_or_default();

    let card = state.sandbox.cards.entry(command).or_default();
    match card.phase {
        CardPhase::Collapsed => {
            card.phase = CardPhase::Expanded;
            card.inputs.clear();
            card.json_inputs = json_params
                .into_iter()
                .map(|name| (name, text_editor::Content::new()))
                .collect();
            card.invalid_field = None;
            card.outcome = None;
        }
        // Collapsing discards the form and any previous result.
        CardPhase::Expanded => *card = CardState::default(),
        // Ignore toggles while a request is in flight.
        CardPhase::Executing => {}
    }
    Task::none()
}

pub fn param_changed(
    state: &mut State,
    command: String,
    param: String,
    value: String,
) -> Task<Message> {
    if let Some(card) = state.sandbox.cards.get_mut(&command) {
        if card.invalid_field.as_deref() == Some(param.as_str()) {
            card.invalid_field = None;
        }
        card.inputs.insert(param, value);
    }
    Task::none()
}

pub fn param_edited(
    state: &mut State,
    command: String,
    param: String,
    action: text_editor::Action,
) -> Task<Message> {
    if let Some(card) = state.sandbox.cards.get_mut(&command) {
        if card.invalid_field.as_deref() == Some(param.as_str()) {
            card.invalid_field = None;
        }
        if let Some(content) = card.json_inputs.get_mut(&param) {
            content.perform(action);
        }
    }
    Task::none()
}

pub fn execute(state: &mut State, command: String) -> Task<Message> {
    let Some(descriptor) = state
        .sandbox
        .commands
        .iter()
        .find(|c| c.name == command)
        .cloned()
    else {
        log::warn!("execute requested for unknown command {command}");
        return Task::none();
    };
    let Some(card) = state.sandbox.cards.get_mut(&command) else {
        return Task::none();
    };

    card.invalid_field = None;
    card.outcome = None;

    let mut raw = card.inputs.clone();
    for (param, content) in &card.json_inputs {
        raw.insert(param.clone(), content.text());
    }

    match build_params(&descriptor.params, |name| raw.get(name).map(String::as_str)) {
        Err(error) => {
            // Blocked client-side: no request is built.
            card.invalid_field = error.field().map(str::to_string);
            card.outcome = Some(CardOutcome::Failure(error.to_string()));
            Task::none()
        }
        Ok(params) => {
            card.phase = CardPhase::Executing;
            let request = ExecuteRequest {
                method_name: command.clone(),
                params,
            };
            let api = state.api.clone();
            Task::perform(
                async move { api.execute_command(&request).await },
                move |result| Message::ExecuteFinished(command.clone(), result),
            )
        }
    }
}

pub fn finished(
    state: &mut State,
    command: String,
    result: Result<ExecuteReply, ApiError>,
) -> Task<Message> {
    if let Some(card) = state.sandbox.cards.get_mut(&command) {
        card.phase = CardPhase::Expanded;
        card.outcome = Some(match result {
            Ok(reply) if reply.success => CardOutcome::Success(render_result(reply.result)),
            Ok(reply) => CardOutcome::Failure(
                reply
                    .error
                    .unwrap_or_else(|| "Unknown server error.".to_string()),
            ),
            Err(error) => CardOutcome::Failure(error.to_string()),
        });
    }
    Task::none()
}

/// Render an execution result: objects and arrays pretty-printed,
/// strings verbatim, everything else via its JSON form.
pub fn render_result(result: Option<Value>) -> String {
    match result {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s,
        Some(value @ (Value::Object(_) | Value::Array(_))) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
        }
        Some(value) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_pretty_print_and_scalars_pass_through() {
        assert_eq!(render_result(None), "null");
        assert_eq!(render_result(Some(json!("done"))), "done");
        assert_eq!(render_result(Some(json!(12))), "12");
        let pretty = render_result(Some(json!({"a": 1})));
        assert!(pretty.contains("\n"));
        assert!(pretty.contains("\"a\": 1"));
    }
}
