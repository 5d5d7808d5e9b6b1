use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    NetworkLevel, RecordStatus, amount_text, display_amount, display_time, format_timestamp,
};
use crate::list_query::Searchable;

/// Fields searched on an agent's network tab.
pub const NETWORK_SEARCH_KEYS: &[&str] = &[
    "id",
    "volume",
    "bonus",
    "sponsorL1",
    "sponsorL2",
    "join",
    "status",
    "referrer",
];

/// A member of an agent's referral downline.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NetworkMember {
    pub id: String,
    pub level: NetworkLevel,
    /// Volume contributed by the member.
    #[serde(serialize_with = "display_amount::serialize")]
    pub volume: f64,
    /// Bonus the agent earned from the member.
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    #[serde(rename = "sponsorL1")]
    pub sponsor_l1: u32,
    #[serde(rename = "sponsorL2")]
    pub sponsor_l2: u32,
    /// Level 1 member who brought in a level 2 member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    #[serde(rename = "join", with = "display_time")]
    pub joined_at: NaiveDateTime,
    pub status: RecordStatus,
}

impl Searchable for NetworkMember {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "level" => Some(Cow::Borrowed(self.level.as_str())),
            "volume" => Some(Cow::Owned(amount_text(self.volume))),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "sponsorL1" => Some(Cow::Owned(self.sponsor_l1.to_string())),
            "sponsorL2" => Some(Cow::Owned(self.sponsor_l2.to_string())),
            "referrer" => self.referrer.as_deref().map(Cow::Borrowed),
            "join" => Some(Cow::Owned(format_timestamp(&self.joined_at))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            _ => None,
        }
    }
}
