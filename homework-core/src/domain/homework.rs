//! Homework domain types

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{HomeworkError, Result};

/// Review status of a homework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Status code as sent by the API
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human-readable verdict for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => {
                "The work has been reviewed: the reviewer liked everything. Hooray!"
            }
            HomeworkStatus::Reviewing => "The work has been taken for review by the reviewer.",
            HomeworkStatus::Rejected => "The work has been reviewed: the reviewer has comments.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = HomeworkError;

    fn from_str(code: &str) -> Result<Self> {
        match code {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(HomeworkError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single homework record with a recognized status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homework {
    pub name: String,
    pub status: HomeworkStatus,
}

impl Homework {
    /// Builds a homework from a raw API record
    ///
    /// Fields are checked in order: `homework_name`, then `status`, then the
    /// status code against the verdict table.
    pub fn from_record(record: &Value) -> Result<Self> {
        let fields = record
            .as_object()
            .ok_or_else(|| HomeworkError::shape("homework record is not a JSON object"))?;

        let name = required_str(fields, "homework_name")?;
        let code = required_str(fields, "status")?;
        let status = code.parse::<HomeworkStatus>()?;

        Ok(Self {
            name: name.to_string(),
            status,
        })
    }

    /// Notification text announcing the current status
    pub fn status_message(&self) -> String {
        format!(
            "Changed status of review for \"{}\". {}",
            self.name,
            self.status.verdict()
        )
    }
}

/// Translates a raw homework record into a notification message
pub fn parse_status(record: &Value) -> Result<String> {
    Homework::from_record(record).map(|homework| homework.status_message())
}

fn required_str<'a>(
    fields: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str> {
    match fields.get(key) {
        None | Some(Value::Null) => Err(HomeworkError::MissingField(key)),
        Some(Value::String(s)) if s.is_empty() => Err(HomeworkError::MissingField(key)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(HomeworkError::shape(format!("\"{key}\" is not a string"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_status_approved() {
        let record = json!({"homework_name": "X", "status": "approved"});

        let message = parse_status(&record).unwrap();
        assert_eq!(
            message,
            "Changed status of review for \"X\". The work has been reviewed: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn test_parse_status_every_known_code() {
        for status in [
            HomeworkStatus::Approved,
            HomeworkStatus::Reviewing,
            HomeworkStatus::Rejected,
        ] {
            let record = json!({"homework_name": "hw", "status": status.code()});
            let message = parse_status(&record).unwrap();
            assert!(message.ends_with(status.verdict()));
        }
    }

    #[test]
    fn test_parse_status_unknown_code() {
        let record = json!({"homework_name": "hw", "status": "lost"});

        let result = parse_status(&record);
        assert_eq!(result, Err(HomeworkError::UnknownStatus("lost".to_string())));
    }

    #[test]
    fn test_parse_status_missing_name() {
        let record = json!({"status": "approved"});
        assert_eq!(
            parse_status(&record),
            Err(HomeworkError::MissingField("homework_name"))
        );

        let record = json!({"homework_name": "", "status": "approved"});
        assert_eq!(
            parse_status(&record),
            Err(HomeworkError::MissingField("homework_name"))
        );
    }

    #[test]
    fn test_parse_status_missing_status() {
        let record = json!({"homework_name": "hw", "status": null});
        assert_eq!(
            parse_status(&record),
            Err(HomeworkError::MissingField("status"))
        );

        let record = json!({"homework_name": "hw", "status": ""});
        assert_eq!(
            parse_status(&record),
            Err(HomeworkError::MissingField("status"))
        );
    }

    #[test]
    fn test_name_checked_before_status() {
        let record = json!({});
        assert_eq!(
            parse_status(&record),
            Err(HomeworkError::MissingField("homework_name"))
        );
    }

    #[test]
    fn test_record_must_be_object() {
        let record = json!(["hw", "approved"]);
        assert!(matches!(
            parse_status(&record),
            Err(HomeworkError::ShapeError(_))
        ));

        let record = json!({"homework_name": 42, "status": "approved"});
        assert!(matches!(
            parse_status(&record),
            Err(HomeworkError::ShapeError(_))
        ));
    }

    #[test]
    fn test_from_record_builds_homework() {
        let record = json!({"homework_name": "hw", "status": "rejected", "id": 7});

        let homework = Homework::from_record(&record).unwrap();
        assert_eq!(
            homework,
            Homework {
                name: "hw".to_string(),
                status: HomeworkStatus::Rejected,
            }
        );
    }

    #[test]
    fn test_status_serde_uses_codes() {
        let status: HomeworkStatus = serde_json::from_value(json!("reviewing")).unwrap();
        assert_eq!(status, HomeworkStatus::Reviewing);
        assert_eq!(status.to_string(), "reviewing");
    }
}
