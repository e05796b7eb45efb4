//! Request shape checks shared by the handlers. Length bounds live on the
//! request types as `#[validate(...)]` attributes; enum membership and unknown
//! keys are enforced by deserialization.

use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::errors::AppError;

/// Runs the derived validators and turns any failure into a 400.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|errors| AppError::Validation(describe(&errors)))
}

/// Joins field errors into one stable, sorted message.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = camel_case(field);
            errs.iter().map(move |e| message_for(&field, e))
        })
        .collect();
    messages.sort();
    messages.join(". ")
}

fn message_for(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    if error.code != "length" {
        return format!("\"{field}\" is invalid");
    }

    let empty = error
        .params
        .get("value")
        .and_then(Value::as_str)
        .is_some_and(str::is_empty);
    match error.params.get("max") {
        _ if empty => format!("\"{field}\" is not allowed to be empty"),
        Some(max) => {
            format!("\"{field}\" length must be less than or equal to {max} characters long")
        }
        None => format!("\"{field}\" is not allowed to be empty"),
    }
}

/// Error keys come from Rust field names; the wire uses camelCase.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
