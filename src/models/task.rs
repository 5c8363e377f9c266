use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use super::article::lenient_string;

/// Body of a Todoist task-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub content: String,
    pub project_id: String,
    /// Calendar date only, rendered `YYYY-MM-DD`.
    #[serde(serialize_with = "serialize_due_date")]
    pub due_date: NaiveDate,
}

fn serialize_due_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_due_date(date))
}

/// Render a due date the way Todoist expects it.
pub fn format_due_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A task as echoed back by Todoist. Only the fields worth logging are kept.
///
/// The task already exists once this arrives, so ids are accepted as strings
/// or numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedTask {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project_id: String,
}
