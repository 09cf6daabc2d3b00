//! Homework review domain types

use serde::{Deserialize, Serialize};

/// Review outcome for a homework submission
///
/// The review API reports exactly these three states; any other value is a
/// contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    /// The reviewer accepted the work
    Approved,

    /// The work is currently being reviewed
    Reviewing,

    /// The reviewer returned the work with remarks
    Rejected,
}

impl ReviewStatus {
    /// Parses a raw status string from the API
    ///
    /// Returns `None` for anything outside the fixed verdict set.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(ReviewStatus::Approved),
            "reviewing" => Some(ReviewStatus::Reviewing),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict text for this status
    pub fn verdict(&self) -> &'static str {
        match self {
            ReviewStatus::Approved => "The work was reviewed: the reviewer liked everything. Hooray!",
            ReviewStatus::Reviewing => "The work was picked up for review.",
            ReviewStatus::Rejected => "The work was reviewed: the reviewer has remarks.",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewStatus::Approved => write!(f, "approved"),
            ReviewStatus::Reviewing => write!(f, "reviewing"),
            ReviewStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Formats the notification sent when a homework's review status changes
pub fn status_report(homework_name: &str, status: ReviewStatus) -> String {
    format!(
        "Changed review status for \"{}\". {}",
        homework_name,
        status.verdict()
    )
}

/// Line logged when the fetch window contains no homework updates
pub const NO_CHANGES_REPORT: &str = "No review status changes";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(ReviewStatus::parse("approved"), Some(ReviewStatus::Approved));
        assert_eq!(ReviewStatus::parse("reviewing"), Some(ReviewStatus::Reviewing));
        assert_eq!(ReviewStatus::parse("rejected"), Some(ReviewStatus::Rejected));
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        assert_eq!(ReviewStatus::parse("accepted"), None);
        assert_eq!(ReviewStatus::parse("APPROVED"), None);
        assert_eq!(ReviewStatus::parse(""), None);
    }

    #[test]
    fn test_status_report_includes_name_and_verdict() {
        let report = status_report("proj1", ReviewStatus::Approved);
        assert!(report.starts_with("Changed review status for \"proj1\"."));
        assert!(report.ends_with(ReviewStatus::Approved.verdict()));
    }

    #[test]
    fn test_serde_roundtrip_uses_wire_names() {
        let status: ReviewStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, ReviewStatus::Rejected);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"rejected\"");
    }
}
