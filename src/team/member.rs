use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A roster entry. Fields this crate does not read are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TeamMember {
    pub fn new(email: &str, name: &str) -> Self {
        Self {
            email: Some(email.to_string()),
            name: Some(name.to_string()),
            extra: Map::new(),
        }
    }

    pub fn email_matches(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == email.to_lowercase())
    }

    /// Name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// First member whose email matches, case-insensitively, in roster order.
pub fn find_by_email<'a>(members: &'a [TeamMember], email: &str) -> Option<&'a TeamMember> {
    members.iter().find(|m| m.email_matches(email))
}

/// How many roster entries share this email.
pub fn count_by_email(members: &[TeamMember], email: &str) -> usize {
    members.iter().filter(|m| m.email_matches(email)).count()
}
