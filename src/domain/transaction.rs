use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{amount_text, display_amount, display_time, format_timestamp};
use crate::list_query::Searchable;

/// Fields searched on the transaction list.
pub const TRANSACTION_SEARCH_KEYS: &[&str] = &["id", "type", "orderno", "status", "reference"];

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "orderno")]
    pub order_no: String,
    #[serde(serialize_with = "display_amount::serialize")]
    pub amount: f64,
    #[serde(rename = "netprofit", serialize_with = "display_amount::serialize")]
    pub net_profit: f64,
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    #[serde(with = "display_time")]
    pub time: NaiveDateTime,
    pub reference: String,
    pub status: String,
}

impl Searchable for Transaction {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "type" => Some(Cow::Borrowed(&self.kind)),
            "orderno" => Some(Cow::Borrowed(&self.order_no)),
            "amount" => Some(Cow::Owned(amount_text(self.amount))),
            "netprofit" => Some(Cow::Owned(amount_text(self.net_profit))),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "time" => Some(Cow::Owned(format_timestamp(&self.time))),
            "reference" => Some(Cow::Borrowed(&self.reference)),
            "status" => Some(Cow::Borrowed(&self.status)),
            _ => None,
        }
    }
}
