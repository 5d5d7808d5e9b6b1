use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{RecordStatus, display_time, format_timestamp};
use crate::list_query::Searchable;

/// Fields searched on the admin account list.
pub const ACCOUNT_SEARCH_KEYS: &[&str] = &["id", "username", "character", "status"];

/// Back-office operator account.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    /// Operator role, e.g. `Finance`.
    #[serde(rename = "character")]
    pub role: String,
    /// Last login as reported by the backend, often relative ("2 hours ago").
    #[serde(rename = "lastLogin")]
    pub last_login: Option<String>,
    #[serde(rename = "created", with = "display_time")]
    pub created_at: NaiveDateTime,
    pub status: RecordStatus,
}

impl Searchable for Account {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "username" => Some(Cow::Borrowed(&self.username)),
            "email" => self.email.as_deref().map(Cow::Borrowed),
            "character" => Some(Cow::Borrowed(&self.role)),
            "lastLogin" => self.last_login.as_deref().map(Cow::Borrowed),
            "created" => Some(Cow::Owned(format_timestamp(&self.created_at))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    #[serde(rename = "character")]
    pub role: String,
    pub password: String,
}
