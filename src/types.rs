use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single entry in the user directory.
///
/// Records are immutable once the directory is built. `id` is the unique
/// exact-match key; uniqueness is assumed of the supplied collection and is
/// not enforced here. `name` and `occupation` are matched as case-insensitive
/// substrings, `age` by numeric proximity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub age: i64,
    pub occupation: String,
}

impl UserRecord {
    /// Convenience constructor, mainly for building fixture datasets.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: i64,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            occupation: occupation.into(),
        }
    }
}

/// Optional filter criteria for one search call.
///
/// Every field is an optional string; an absent field and an empty string
/// both mean "not provided". `age` stays a string here because numeric
/// parsing happens per record inside the engine, so a malformed value
/// degrades for the affected records instead of failing the whole call.
///
/// The struct deserializes directly from an HTTP query string
/// (`?id=&name=&age=&occupation=`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: Option<String>,

    #[serde(default)]
    pub occupation: Option<String>,
}

impl SearchCriteria {
    /// `id` criterion, with empty strings normalized to absent.
    pub fn id(&self) -> Option<&str> {
        provided(&self.id)
    }

    /// `name` criterion, with empty strings normalized to absent.
    pub fn name(&self) -> Option<&str> {
        provided(&self.name)
    }

    /// `age` criterion (still unparsed), with empty strings normalized to absent.
    pub fn age(&self) -> Option<&str> {
        provided(&self.age)
    }

    /// `occupation` criterion, with empty strings normalized to absent.
    pub fn occupation(&self) -> Option<&str> {
        provided(&self.occupation)
    }

    /// True when no criterion is provided at all.
    pub fn is_empty(&self) -> bool {
        self.id().is_none()
            && self.name().is_none()
            && self.age().is_none()
            && self.occupation().is_none()
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Rank of a match, tied to which criterion produced it.
///
/// Lower values sort first in search results. `All` is only produced by the
/// no-criteria path that returns the entire directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPriority {
    All = 0,
    Id = 1,
    Name = 2,
    Age = 3,
    Occupation = 4,
}

/// A matched record together with the priority of the criterion that
/// produced it. A record matched by several criteria yields one hit per
/// matched priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub user: UserRecord,
    pub priority: MatchPriority,
}

/// Errors produced by the search engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// No record matched any provided criterion. Distinguished from an
    /// empty list so callers can surface the user-facing message.
    #[error("User not found")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_criteria_are_absent() {
        let criteria = SearchCriteria {
            id: Some(String::new()),
            name: Some(String::new()),
            age: None,
            occupation: Some("nurse".to_string()),
        };
        assert_eq!(criteria.id(), None);
        assert_eq!(criteria.name(), None);
        assert_eq!(criteria.occupation(), Some("nurse"));
        assert!(!criteria.is_empty());
    }

    #[test]
    fn default_criteria_are_empty() {
        assert!(SearchCriteria::default().is_empty());
    }

    #[test]
    fn priority_ordering_is_ascending() {
        assert!(MatchPriority::All < MatchPriority::Id);
        assert!(MatchPriority::Id < MatchPriority::Name);
        assert!(MatchPriority::Name < MatchPriority::Age);
        assert!(MatchPriority::Age < MatchPriority::Occupation);
    }

    #[test]
    fn user_record_wire_shape() {
        let user = UserRecord::new("1", "Alice", 30, "Engineer");
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "name": "Alice",
                "age": 30,
                "occupation": "Engineer",
            })
        );
    }

    #[test]
    fn not_found_message_is_user_facing() {
        assert_eq!(SearchError::NotFound.to_string(), "User not found");
    }
}
