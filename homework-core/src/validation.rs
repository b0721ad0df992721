//! Response validation
//!
//! Checks the shape of a homework statuses response before any record is
//! looked at. Failures are logged here so the cause is visible even when the
//! caller only reports a generic message.

use serde_json::Value;
use tracing::error;

use crate::error::{HomeworkError, Result};

/// Validates an API response and returns its `homeworks` sequence
///
/// The returned slice may be empty when nothing changed in the window.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let Some(body) = response.as_object() else {
        error!("API response is not a JSON object: {}", kind_of(response));
        return Err(HomeworkError::shape("response is not a JSON object"));
    };

    match body.get("homeworks") {
        Some(Value::Array(homeworks)) => Ok(homeworks.as_slice()),
        Some(other) => {
            error!(
                "\"homeworks\" in API response is not a list: {}",
                kind_of(other)
            );
            Err(HomeworkError::shape("\"homeworks\" is not a list"))
        }
        None => {
            error!("API response has no \"homeworks\" key");
            Err(HomeworkError::shape("\"homeworks\" key is missing"))
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_returns_homeworks() {
        let response = json!({
            "homeworks": [
                {"homework_name": "a", "status": "approved"},
                {"homework_name": "b", "status": "rejected"}
            ],
            "current_date": 1700000000
        });

        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "a");
    }

    #[test]
    fn test_check_response_empty_list() {
        let response = json!({"homeworks": []});

        let homeworks = check_response(&response).unwrap();
        assert!(homeworks.is_empty());
    }

    #[test]
    fn test_check_response_list_body() {
        let response = json!([{"homeworks": []}]);

        let result = check_response(&response);
        assert!(matches!(result, Err(HomeworkError::ShapeError(_))));
    }

    #[test]
    fn test_check_response_missing_key() {
        let response = json!({"current_date": 1700000000});

        let result = check_response(&response);
        assert!(matches!(result, Err(HomeworkError::ShapeError(_))));
    }

    #[test]
    fn test_check_response_homeworks_not_list() {
        let response = json!({"homeworks": {"homework_name": "a"}});

        let result = check_response(&response);
        assert!(matches!(result, Err(HomeworkError::ShapeError(_))));
    }
}
