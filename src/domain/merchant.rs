use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{MerchantTier, RecordStatus, display_time, format_timestamp};
use crate::list_query::Searchable;

/// Fields searched on the merchant list.
pub const MERCHANT_SEARCH_KEYS: &[&str] = &["id", "name", "type", "state"];

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Merchant {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub business_type: String,
    pub state: String,
    #[serde(rename = "join", with = "display_time")]
    pub joined_at: NaiveDateTime,
    pub status: RecordStatus,
    pub tier: MerchantTier,
    /// Company registration (SSM) number.
    pub ssm: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "walletAddress")]
    pub wallet_address: Option<String>,
}

impl Searchable for Merchant {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "name" => Some(Cow::Borrowed(&self.name)),
            "type" => Some(Cow::Borrowed(&self.business_type)),
            "state" => Some(Cow::Borrowed(&self.state)),
            "join" => Some(Cow::Owned(format_timestamp(&self.joined_at))),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "tier" => Some(Cow::Borrowed(self.tier.as_str())),
            "ssm" => self.ssm.as_deref().map(Cow::Borrowed),
            "email" => self.email.as_deref().map(Cow::Borrowed),
            "walletAddress" => self.wallet_address.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

/// Payload for registering a merchant.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewMerchant {
    pub name: String,
    pub ssm: String,
    #[serde(rename = "type")]
    pub business_type: String,
    pub state: String,
    #[serde(rename = "group")]
    pub tier: MerchantTier,
    pub email: String,
    #[serde(rename = "walletAddress")]
    pub wallet_address: String,
}

/// Number of merchants per tier.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct MerchantStats {
    pub t1: usize,
    pub t2: usize,
    pub t3: usize,
    pub total: usize,
}

impl MerchantStats {
    pub fn from_merchants(merchants: &[Merchant]) -> Self {
        merchants.iter().fold(Self::default(), |mut stats, merchant| {
            match merchant.tier {
                MerchantTier::T1 => stats.t1 += 1,
                MerchantTier::T2 => stats.t2 += 1,
                MerchantTier::T3 => stats.t3 += 1,
            }
            stats.total += 1;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::parse_timestamp;
    use crate::list_query::filter_records;

    fn merchant(id: &str, name: &str, tier: MerchantTier) -> Merchant {
        Merchant {
            id: id.to_string(),
            name: name.to_string(),
            business_type: "F&B".to_string(),
            state: "Johor".to_string(),
            joined_at: parse_timestamp("01-11-2025 13:00").unwrap(),
            status: RecordStatus::Active,
            tier,
            ssm: None,
            email: None,
            wallet_address: None,
        }
    }

    #[test]
    fn searches_type_by_its_column_name() {
        let records = vec![
            merchant("Mer1", "Coffee Shop A", MerchantTier::T1),
            Merchant {
                business_type: "Retail".to_string(),
                ..merchant("Mer2", "Grocery Store X", MerchantTier::T1)
            },
        ];

        let found = filter_records(&records, "retail", MERCHANT_SEARCH_KEYS);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "Mer2");
    }

    #[test]
    fn join_date_is_searchable_as_displayed() {
        let record = merchant("Mer1", "Coffee", MerchantTier::T1);

        assert_eq!(record.field_text("join").as_deref(), Some("01-11-2025 13:00"));
        assert_eq!(record.field_text("unknown"), None);
    }

    #[test]
    fn stats_count_per_tier() {
        let stats = MerchantStats::from_merchants(&[
            merchant("Mer1", "A", MerchantTier::T1),
            merchant("Mer2", "B", MerchantTier::T1),
            merchant("Mer3", "C", MerchantTier::T3),
        ]);

        assert_eq!(
            stats,
            MerchantStats {
                t1: 2,
                t2: 0,
                t3: 1,
                total: 3
            }
        );
    }
}
