use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::types::{
    WithdrawalStatus, amount_text, display_amount, display_time, format_timestamp,
};
use crate::list_query::Searchable;

/// Fields searched on the pending applications list.
pub const WITHDRAWAL_SEARCH_KEYS: &[&str] = &["id", "merchant", "wallet", "ref"];

/// Fields searched on the approved/rejected history list.
pub const WITHDRAWAL_HISTORY_SEARCH_KEYS: &[&str] = &["id", "wallet", "amount"];

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Withdrawal {
    pub id: String,
    /// Merchant that filed the application, when known.
    pub merchant: Option<String>,
    #[serde(serialize_with = "display_amount::serialize")]
    pub amount: f64,
    pub wallet: String,
    #[serde(with = "display_time")]
    pub time: NaiveDateTime,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    pub status: WithdrawalStatus,
    /// Reason given when the application was rejected.
    pub reason: Option<String>,
}

impl Withdrawal {
    pub fn is_pending(&self) -> bool {
        self.status == WithdrawalStatus::Pending
    }
}

impl Searchable for Withdrawal {
    fn field_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "id" => Some(Cow::Borrowed(&self.id)),
            "merchant" => self.merchant.as_deref().map(Cow::Borrowed),
            "amount" => Some(Cow::Owned(amount_text(self.amount))),
            "wallet" => Some(Cow::Borrowed(&self.wallet)),
            "time" => Some(Cow::Owned(format_timestamp(&self.time))),
            "ref" => self.reference.as_deref().map(Cow::Borrowed),
            "status" => Some(Cow::Borrowed(self.status.as_str())),
            "reason" => self.reason.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

/// Totals shown above the withdrawal tables.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct WithdrawalStats {
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    #[serde(serialize_with = "display_amount::serialize")]
    pub approved_amount: f64,
}

impl WithdrawalStats {
    pub fn from_withdrawals(withdrawals: &[Withdrawal]) -> Self {
        withdrawals.iter().fold(Self::default(), |mut stats, withdrawal| {
            match withdrawal.status {
                WithdrawalStatus::Pending => stats.pending += 1,
                WithdrawalStatus::Approved => {
                    stats.approved += 1;
                    stats.approved_amount += withdrawal.amount;
                }
                WithdrawalStatus::Rejected => stats.rejected += 1,
            }
            stats
        })
    }
}
