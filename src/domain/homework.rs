//! Homework submissions and status message rendering.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::status::HomeworkStatus;
use crate::error::PollError;

/// One submitted assignment as reported by the review API.
///
/// Fields are optional on the wire; [`Homework::status_message`] enforces
/// the ones it needs. The informational fields accept any JSON value and
/// keep only strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Homework {
    #[serde(rename = "homework_name")]
    pub name: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub reviewer_comment: Option<String>,
    #[serde(default, deserialize_with = "text_or_none")]
    pub date_updated: Option<String>,
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
}

impl Homework {
    /// Build a homework with a name and raw status code.
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    /// Render the chat message announcing this homework's status.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::MissingField`] when the name or status is absent
    /// and [`PollError::UnknownStatus`] for unrecognized status codes.
    pub fn status_message(&self) -> Result<String, PollError> {
        let name = self.name.as_deref().ok_or(PollError::MissingField {
            field: "homework_name",
        })?;
        let status: HomeworkStatus = self
            .status
            .as_deref()
            .ok_or(PollError::MissingField { field: "status" })?
            .parse()?;

        Ok(format!(
            "Status changed for \"{name}\". {}",
            status.verdict()
        ))
    }
}
