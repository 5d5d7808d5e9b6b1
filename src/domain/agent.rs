use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    RecordStatus, amount_text, display_amount, display_time, format_timestamp,
};
use crate::list_query::Searchable;

/// Fields searched on the agent list.
pub const AGENT_SEARCH_KEYS: &[&str] = &["id", "status", "bonus", "l1", "l2", "join"];

/// Referral agent with the size of its first two downline levels.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Agent {
    pub id: String,
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    /// Direct referrals.
    pub l1: u32,
    /// Referrals of direct referrals.
    pub l2: u32,
    #[serde(rename = "join", with = "display_time")]
    pub joined_at: NaiveDateTime,
    pub status: RecordStatus,
}

impl Searchable for Agent {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "l1" => Some(Cow::Owned(self.l1.to_string())),
            "l2" => Some(Cow::Owned(self.l2.to_string())),
            "join" => Some(Cow::Owned(format_timestamp(&self.joined_at))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}
