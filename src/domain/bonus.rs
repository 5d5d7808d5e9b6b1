use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    BonusTier, amount_text, display_amount, display_time, format_timestamp,
};
use crate::list_query::Searchable;

/// Fields searched on the bonus claim list.
pub const BONUS_SEARCH_KEYS: &[&str] = &["id", "wallet", "status"];

/// Fields searched on the unclaimed bonus list.
pub const BONUS_UNCLAIM_SEARCH_KEYS: &[&str] = &["id", "status"];

/// A bonus payout claimed by a wallet.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BonusClaim {
    pub id: String,
    pub wallet: String,
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    #[serde(serialize_with = "display_amount::serialize")]
    pub fees: f64,
    #[serde(serialize_with = "display_amount::serialize")]
    pub net: f64,
    #[serde(with = "display_time")]
    pub time: NaiveDateTime,
    pub status: String,
    #[serde(rename = "bonusTier")]
    pub bonus_tier: Option<BonusTier>,
}

impl Searchable for BonusClaim {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "wallet" => Some(Cow::Borrowed(&self.wallet)),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "fees" => Some(Cow::Owned(amount_text(self.fees))),
            "net" => Some(Cow::Owned(amount_text(self.net))),
            "time" => Some(Cow::Owned(format_timestamp(&self.time))),
            "status" => Some(Cow::Borrowed(&self.status)),
            "bonusTier" => self.bonus_tier.map(|tier| Cow::Borrowed(tier.as_str())),
            _ => None,
        }
    }
}

/// Bonus credited to a member but not yet claimed.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct BonusUnclaim {
    pub id: String,
    #[serde(serialize_with = "display_amount::serialize")]
    pub bonus: f64,
    /// Last time the balance changed.
    #[serde(rename = "update", with = "display_time")]
    pub updated_at: NaiveDateTime,
    pub status: String,
    #[serde(rename = "bonusTier")]
    pub bonus_tier: Option<BonusTier>,
}

impl Searchable for BonusUnclaim {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "bonus" => Some(Cow::Owned(amount_text(self.bonus))),
            "update" => Some(Cow::Owned(format_timestamp(&self.updated_at))),
            "status" => Some(Cow::Borrowed(&self.status)),
            "bonusTier" => self.bonus_tier.map(|tier| Cow::Borrowed(tier.as_str())),
            _ => None,
        }
    }
}
