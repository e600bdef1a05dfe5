use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque goal identifier. The server may send it as a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGoalId", into = "String")]
pub struct GoalId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawGoalId {
    Number(i64),
    Text(String),
}

impl From<RawGoalId> for GoalId {
    fn from(raw: RawGoalId) -> Self {
        match raw {
            RawGoalId::Number(value) => Self(value.to_string()),
            RawGoalId::Text(value) => Self(value),
        }
    }
}

impl From<GoalId> for String {
    fn from(id: GoalId) -> Self {
        id.0
    }
}

impl GoalId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<i64> for GoalId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for GoalId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for GoalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Goal status. Values other than the two the summary counts pass through as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalStatus {
    #[default]
    InProgress,
    Completed,
    Other(String),
}

impl GoalStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for GoalStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for GoalStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<GoalStatus> for String {
    fn from(status: GoalStatus) -> Self {
        match status {
            GoalStatus::Other(value) => value,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    #[serde(alias = "id")]
    pub goal_id: GoalId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: GoalStatus,
}

// Blank and null dates both mean "not set".
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Body of the goal list endpoint: either `{ "goals": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GoalListBody {
    Wrapped { goals: Vec<Goal> },
    Bare(Vec<Goal>),
}

impl GoalListBody {
    pub fn into_goals(self) -> Vec<Goal> {
        match self {
            Self::Wrapped { goals } => goals,
            Self::Bare(goals) => goals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: GoalStatus,
}

/// Full replacement of the editable fields, sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalEdit {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub target_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GoalUpdate {
    Status(StatusUpdate),
    Details(GoalEdit),
}

/// Reply to a `PUT`. Only the `error` field is interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiReply {
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|message| !message.is_empty())
    }
}

/// Ordered name/value pairs of a form, as a multipart submission would carry them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    entries: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
