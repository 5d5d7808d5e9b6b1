use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    RecordStatus, amount_text, display_amount, display_time, format_timestamp,
};
use crate::list_query::Searchable;

/// Fields searched on the user list.
pub const USER_SEARCH_KEYS: &[&str] = &["id", "status", "spend", "bonus", "join"];

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct User {
    pub id: String,
    pub wallet: Option<String>,
    /// Total spending volume.
    #[serde(serialize_with = "display_amount::serialize")]
    pub spend: f64,
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    #[serde(rename = "join", with = "display_time")]
    pub joined_at: NaiveDateTime,
    pub status: RecordStatus,
}

impl Searchable for User {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "wallet" => self.wallet.as_deref().map(Cow::Borrowed),
            "spend" => Some(Cow::Owned(amount_text(self.spend))),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "join" => Some(Cow::Owned(format_timestamp(&self.joined_at))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}
