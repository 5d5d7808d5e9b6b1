use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{LogLevel, display_time, format_timestamp};
use crate::list_query::Searchable;

/// Fields searched on the system log list.
pub const SYSTEM_LOG_SEARCH_KEYS: &[&str] = &["endpoint", "status", "ip"];

/// One request recorded by the platform's services.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SystemLog {
    #[serde(rename = "dateTime", with = "display_time")]
    pub date_time: NaiveDateTime,
    pub level: LogLevel,
    pub source: String,
    pub endpoint: String,
    /// HTTP status code returned by the endpoint.
    pub status: u16,
    pub ip: String,
}

impl Searchable for SystemLog {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "dateTime" => Some(Cow::Owned(format_timestamp(&self.date_time))),
            "level" => Some(Cow::Borrowed(self.level.as_str())),
            "source" => Some(Cow::Borrowed(&self.source)),
            "endpoint" => Some(Cow::Borrowed(&self.endpoint)),
            "status" => Some(Cow::Owned(self.status.to_string())),
            "ip" => Some(Cow::Borrowed(&self.ip)),
            _ => None,
        }
    }
}
