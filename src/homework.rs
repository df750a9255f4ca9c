use serde::Deserialize;
use serde_json::Value;

use crate::error::PollError;

/// One page of the review API feed.
#[derive(Debug, Deserialize)]
pub struct StatusPage {
    /// Submissions with status changes, most recent first.
    pub homeworks: Vec<Homework>,
    /// Server-side clock at response time; becomes the next poll cursor.
    pub current_date: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Homework {
    pub homework_name: String,
    pub status: String,
}

/// The review verdicts the API is documented to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Approved,
    Reviewing,
    Rejected,
}

impl Status {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict phrase used in the notification text.
    fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "reviewed, all good",
            Self::Reviewing => "taken for review",
            Self::Rejected => "reviewed, has remarks",
        }
    }
}

/// Check the shape of a raw API response before trusting it.
///
/// Rejects the response as a whole when `homeworks` is not a sequence or
/// `current_date` is not an integer; never yields a partial page.
pub fn validate(body: Value) -> Result<StatusPage, PollError> {
    serde_json::from_value(body).map_err(|e| PollError::Schema(e.to_string()))
}

/// Render a homework record into the line sent to the chat.
pub fn describe(homework: &Homework) -> Result<String, PollError> {
    let status = Status::parse(&homework.status)
        .ok_or_else(|| PollError::UnknownStatus(homework.status.clone()))?;
    Ok(format!(
        "Status changed for \"{}\". {}",
        homework.homework_name,
        status.verdict()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str, status: &str) -> Homework {
        Homework {
            homework_name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_page() {
        let page = validate(json!({
            "homeworks": [{"homework_name": "proj1", "status": "approved"}],
            "current_date": 1_700_000_000,
        }))
        .unwrap();

        assert_eq!(page.current_date, 1_700_000_000);
        assert_eq!(page.homeworks.len(), 1);
        assert_eq!(page.homeworks[0].homework_name, "proj1");
    }

    #[test]
    fn test_validate_accepts_empty_homeworks() {
        let page = validate(json!({"homeworks": [], "current_date": 1_700_000_000})).unwrap();
        assert!(page.homeworks.is_empty());
    }

    #[test]
    fn test_validate_rejects_missing_keys() {
        let missing_homeworks = validate(json!({"current_date": 1_700_000_000}));
        assert!(matches!(missing_homeworks, Err(PollError::Schema(_))));

        let missing_date = validate(json!({"homeworks": []}));
        assert!(matches!(missing_date, Err(PollError::Schema(_))));
    }

    #[test]
    fn test_validate_rejects_wrong_types() {
        let not_a_sequence = validate(json!({
            "homeworks": {"homework_name": "proj1", "status": "approved"},
            "current_date": 1_700_000_000,
        }));
        assert!(matches!(not_a_sequence, Err(PollError::Schema(_))));

        let date_as_string = validate(json!({"homeworks": [], "current_date": "1700000000"}));
        assert!(matches!(date_as_string, Err(PollError::Schema(_))));

        let date_as_float = validate(json!({"homeworks": [], "current_date": 1700000000.5}));
        assert!(matches!(date_as_float, Err(PollError::Schema(_))));
    }

    #[test]
    fn test_describe_uses_fixed_verdict_phrases() {
        assert_eq!(
            describe(&record("proj1", "approved")).unwrap(),
            "Status changed for \"proj1\". reviewed, all good"
        );
        assert_eq!(
            describe(&record("proj2", "reviewing")).unwrap(),
            "Status changed for \"proj2\". taken for review"
        );
        assert_eq!(
            describe(&record("proj3", "rejected")).unwrap(),
            "Status changed for \"proj3\". reviewed, has remarks"
        );
    }

    #[test]
    fn test_describe_rejects_undocumented_status() {
        let err = describe(&record("proj1", "paused")).unwrap_err();
        assert!(matches!(err, PollError::UnknownStatus(ref s) if s == "paused"));
    }
}
