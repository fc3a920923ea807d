//! Sandbox parameter parsing.
//!
//! Each declared parameter type maps to a [`ParamKind`]; each kind has
//! one parse function turning the raw widget text into a JSON value or
//! a [`ValidationError`]. Validation runs before any request is built,
//! so a failing field never reaches the network.

use flagdeck_model::ParamDescriptor;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Widget and parsing class of a declared parameter type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Multi-line JSON input (`json`, `list`, `dict`, `array`, `object`).
    Json,
    /// Tri-state optional selector.
    Boolean,
    /// Numeric input (`int`, `number`).
    Number,
    /// Plain text, the default for unknown hints.
    Text,
}

impl ParamKind {
    /// Classify a backend type hint. Matching is substring-based for
    /// the JSON family, mirroring how loose the hints are in practice
    /// (`"list of str"`, `"json object"`, ...).
    pub fn from_hint(hint: &str) -> ParamKind {
        let hint = hint.to_lowercase();
        if ["json", "list", "dict", "array", "object"]
            .iter()
            .any(|k| hint.contains(k))
        {
            ParamKind::Json
        } else if hint == "boolean" {
            ParamKind::Boolean
        } else if hint == "int" || hint == "number" {
            ParamKind::Number
        } else {
            ParamKind::Text
        }
    }
}

/// Parse one raw field. `Ok(None)` means an optional parameter was
/// left empty and should be omitted from the request object.
pub fn parse_param(
    descriptor: &ParamDescriptor,
    raw: &str,
) -> Result<Option<Value>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return if descriptor.required {
            Err(ValidationError::RequiredParam(descriptor.name.clone()))
        } else {
            Ok(None)
        };
    }

    let value = match ParamKind::from_hint(&descriptor.type_hint) {
        ParamKind::Json => serde_json::from_str(raw)
            .map_err(|_| ValidationError::InvalidJson(descriptor.name.clone()))?,
        ParamKind::Number => parse_number(descriptor, raw)?,
        ParamKind::Boolean => match raw {
            "true" | "True" => Value::Bool(true),
            "false" | "False" => Value::Bool(false),
            _ => return Err(ValidationError::InvalidBool(descriptor.name.clone())),
        },
        ParamKind::Text => Value::String(raw.to_string()),
    };
    Ok(Some(value))
}

fn parse_number(descriptor: &ParamDescriptor, raw: &str) -> Result<Value, ValidationError> {
    // Integers stay integers on the wire; anything else goes through f64.
    if let Ok(int) = raw.parse::<i64>() {
        return Ok(Value::from(int));
    }
    let float: f64 = raw
        .parse()
        .map_err(|_| ValidationError::InvalidNumber(descriptor.name.clone()))?;
    serde_json::Number::from_f64(float)
        .map(Value::Number)
        .ok_or_else(|| ValidationError::InvalidNumber(descriptor.name.clone()))
}

/// Parse every declared parameter, aggregating the request object.
/// Fields the user never touched read as empty. Fails on the first
/// offending field so the view can highlight it.
pub fn build_params<'a, F>(
    descriptors: &[ParamDescriptor],
    raw_input: F,
) -> Result<Map<String, Value>, ValidationError>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut params = Map::new();
    for descriptor in descriptors {
        let raw = raw_input(&descriptor.name).unwrap_or("");
        if let Some(value) = parse_param(descriptor, raw)? {
            params.insert(descriptor.name.clone(), value);
        }
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn descriptor(name: &str, hint: &str, required: bool) -> ParamDescriptor {
        ParamDescriptor {
            name: name.to_string(),
            type_hint: hint.to_string(),
            description: None,
            required,
        }
    }

    #[test]
    fn hint_classification_matches_widget_table() {
        assert_eq!(ParamKind::from_hint("json"), ParamKind::Json);
        assert_eq!(ParamKind::from_hint("list of str"), ParamKind::Json);
        assert_eq!(ParamKind::from_hint("dict"), ParamKind::Json);
        assert_eq!(ParamKind::from_hint("boolean"), ParamKind::Boolean);
        assert_eq!(ParamKind::from_hint("int"), ParamKind::Number);
        assert_eq!(ParamKind::from_hint("number"), ParamKind::Number);
        assert_eq!(ParamKind::from_hint("string"), ParamKind::Text);
        assert_eq!(ParamKind::from_hint(""), ParamKind::Text);
    }

    #[test]
    fn required_int_left_blank_blocks_submission() {
        let desc = descriptor("count", "int", true);
        let err = parse_param(&desc, "   ").unwrap_err();
        assert_eq!(err, ValidationError::RequiredParam("count".into()));
        assert_eq!(err.field(), Some("count"));
    }

    #[test]
    fn optional_empty_field_is_omitted() {
        let descriptors = vec![
            descriptor("who", "string", true),
            descriptor("note", "string", false),
        ];
        let inputs: HashMap<String, String> = [("who".to_string(), "bob".to_string())].into();
        let params = build_params(&descriptors, |name| inputs.get(name).map(String::as_str))
            .unwrap();
        assert_eq!(params.get("who"), Some(&json!("bob")));
        assert!(!params.contains_key("note"));
    }

    #[test]
    fn numbers_keep_integer_shape_when_integral() {
        let desc = descriptor("count", "int", true);
        assert_eq!(parse_param(&desc, "42").unwrap(), Some(json!(42)));
        assert_eq!(parse_param(&desc, "2.5").unwrap(), Some(json!(2.5)));
        assert_eq!(
            parse_param(&desc, "forty").unwrap_err(),
            ValidationError::InvalidNumber("count".into())
        );
    }

    #[test]
    fn json_fields_parse_or_flag_the_field() {
        let desc = descriptor("payload", "json", false);
        assert_eq!(
            parse_param(&desc, r#"{"a": [1, 2]}"#).unwrap(),
            Some(json!({"a": [1, 2]}))
        );
        let err = parse_param(&desc, "{not json").unwrap_err();
        assert_eq!(err, ValidationError::InvalidJson("payload".into()));
    }

    #[test]
    fn boolean_tri_state_accepts_only_true_false() {
        let desc = descriptor("force", "boolean", false);
        assert_eq!(parse_param(&desc, "true").unwrap(), Some(json!(true)));
        assert_eq!(parse_param(&desc, "false").unwrap(), Some(json!(false)));
        assert_eq!(parse_param(&desc, "").unwrap(), None);
        assert!(parse_param(&desc, "maybe").is_err());
    }

    #[test]
    fn build_params_stops_at_first_invalid_field() {
        let descriptors = vec![
            descriptor("count", "int", true),
            descriptor("who", "string", true),
        ];
        let inputs: HashMap<String, String> = [("count".to_string(), "nope".to_string())].into();
        let err = build_params(&descriptors, |name| inputs.get(name).map(String::as_str))
            .unwrap_err();
        assert_eq!(err.field(), Some("count"));
    }
}
