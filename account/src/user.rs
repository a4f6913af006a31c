//! User record returned by the account API.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::Date;
use time::macros::format_description;

/// An authenticated user as returned by the `signup`, `signin` and
/// `updateUser` mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier. GraphQL `ID` values may arrive as numbers.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Login email.
    pub email: String,
    /// Free-form profile text, at most 128 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Date of birth as sent by the server (ISO date or timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl User {
    /// Description with empty strings folded to `None`.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Avatar URL with empty strings folded to `None`.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.is_empty())
    }

    /// Date of birth with empty strings folded to `None`.
    #[must_use]
    pub fn date_of_birth(&self) -> Option<&str> {
        self.date_of_birth.as_deref().filter(|d| !d.is_empty())
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

/// Parse the leading `YYYY-MM-DD` of a server date string.
fn parse_leading_date(raw: &str) -> Option<Date> {
    let head = raw.get(..10)?;
    Date::parse(head, format_description!("[year]-[month]-[day]")).ok()
}

/// Value for an `<input type="date">`: the `YYYY-MM-DD` prefix, or empty.
#[must_use]
pub fn date_input_value(raw: &str) -> String {
    parse_leading_date(raw)
        .map(|_| raw[..10].to_owned())
        .unwrap_or_default()
}

/// Human-readable date of birth, e.g. `"March 5, 1990"`.
///
/// Strings that do not start with an ISO date are returned unchanged.
#[must_use]
pub fn format_date_of_birth(raw: &str) -> String {
    parse_leading_date(raw)
        .and_then(|date| {
            date.format(format_description!("[month repr:long] [day padding:none], [year]"))
                .ok()
        })
        .unwrap_or_else(|| raw.to_owned())
}
