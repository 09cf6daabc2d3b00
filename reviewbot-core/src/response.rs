//! Review API response handling
//!
//! Shape validation and status extraction for the payload returned by the
//! homework-statuses endpoint. The payload is checked key by key so that
//! every contract violation surfaces as a distinct [`ResponseError`] instead
//! of a generic deserialization failure.

use serde_json::Value;
use thiserror::Error;

use crate::domain::homework::{ReviewStatus, status_report};

/// Contract violations in the review API payload
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The response body is not a JSON object
    #[error("response is not a JSON object")]
    NotAnObject,

    /// A required key is absent
    #[error("response is missing required key `{0}`")]
    MissingKey(&'static str),

    /// The `homeworks` value is not a list
    #[error("`homeworks` is not a list")]
    HomeworksNotAList,

    /// A homework record key holds a non-string value
    #[error("homework key `{0}` is not a string")]
    NotAString(&'static str),

    /// The status value is outside the fixed verdict set
    #[error("unknown review status `{0}`")]
    UnknownStatus(String),
}

/// Validates the shape of a review API response
///
/// Checks, in order: the response is an object, it contains `homeworks`,
/// it contains `current_date`, and `homeworks` is a list. Returns the
/// homework records unmodified, preserving their original order.
pub fn check_response(response: &Value) -> Result<&[Value], ResponseError> {
    let object = response.as_object().ok_or(ResponseError::NotAnObject)?;

    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingKey("homeworks"))?;

    if !object.contains_key("current_date") {
        return Err(ResponseError::MissingKey("current_date"));
    }

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(ResponseError::HomeworksNotAList)
}

/// Extracts the notification text from a single homework record
///
/// Requires `homework_name` and `status` string keys; the status must be
/// one of the three known review outcomes.
pub fn parse_status(homework: &Value) -> Result<String, ResponseError> {
    let name = homework
        .get("homework_name")
        .ok_or(ResponseError::MissingKey("homework_name"))?
        .as_str()
        .ok_or(ResponseError::NotAString("homework_name"))?;

    let raw_status = homework
        .get("status")
        .ok_or(ResponseError::MissingKey("status"))?
        .as_str()
        .ok_or(ResponseError::NotAString("status"))?;

    let status = ReviewStatus::parse(raw_status)
        .ok_or_else(|| ResponseError::UnknownStatus(raw_status.to_string()))?;

    Ok(status_report(name, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_returns_homeworks_in_order() {
        let response = json!({
            "homeworks": [
                {"homework_name": "proj2", "status": "reviewing"},
                {"homework_name": "proj1", "status": "approved"},
            ],
            "current_date": 1_700_000_000,
        });

        let homeworks = check_response(&response).unwrap();
        assert_eq!(homeworks.len(), 2);
        assert_eq!(homeworks[0]["homework_name"], "proj2");
        assert_eq!(homeworks[1]["homework_name"], "proj1");
    }

    #[test]
    fn test_check_response_rejects_non_object() {
        let err = check_response(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, ResponseError::NotAnObject));
    }

    #[test]
    fn test_check_response_requires_homeworks_key() {
        let err = check_response(&json!({"current_date": 1_700_000_000})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey("homeworks")));
    }

    #[test]
    fn test_check_response_requires_current_date_key() {
        let err = check_response(&json!({"homeworks": []})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey("current_date")));
    }

    #[test]
    fn test_missing_homeworks_reported_before_current_date() {
        let err = check_response(&json!({})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey("homeworks")));
    }

    #[test]
    fn test_check_response_rejects_non_list_homeworks() {
        let response = json!({"homeworks": "none", "current_date": 1_700_000_000});
        let err = check_response(&response).unwrap_err();
        assert!(matches!(err, ResponseError::HomeworksNotAList));
    }

    #[test]
    fn test_parse_status_formats_report() {
        let homework = json!({"homework_name": "proj1", "status": "approved"});
        let report = parse_status(&homework).unwrap();
        assert_eq!(
            report,
            format!(
                "Changed review status for \"proj1\". {}",
                ReviewStatus::Approved.verdict()
            )
        );
    }

    #[test]
    fn test_parse_status_requires_homework_name() {
        let err = parse_status(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey("homework_name")));
    }

    #[test]
    fn test_parse_status_requires_status() {
        let err = parse_status(&json!({"homework_name": "proj1"})).unwrap_err();
        assert!(matches!(err, ResponseError::MissingKey("status")));
    }

    #[test]
    fn test_parse_status_rejects_unknown_status() {
        let homework = json!({"homework_name": "proj1", "status": "resubmitted"});
        let err = parse_status(&homework).unwrap_err();
        match err {
            ResponseError::UnknownStatus(value) => assert_eq!(value, "resubmitted"),
            other => panic!("expected UnknownStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_status_rejects_non_string_status() {
        let homework = json!({"homework_name": "proj1", "status": 3});
        let err = parse_status(&homework).unwrap_err();
        assert!(matches!(err, ResponseError::NotAString("status")));
    }
}
