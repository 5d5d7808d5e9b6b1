use serde::Deserialize;

use crate::domain::types::{TypeConstraintError, WithdrawalStatus, parse_timestamp};
use crate::domain::withdrawal::Withdrawal as DomainWithdrawal;
use crate::models::{Scalar, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct Withdrawal {
    #[serde(alias = "Id", alias = "withdrawal_id", alias = "withdrawalId")]
    pub id: Scalar,
    #[serde(default, alias = "Merchant", alias = "merchant_id", alias = "merchantId")]
    pub merchant: Option<Scalar>,
    #[serde(alias = "Amount")]
    pub amount: Scalar,
    #[serde(alias = "Wallet", alias = "wallet_address", alias = "walletAddress")]
    pub wallet: String,
    #[serde(alias = "Time", alias = "created_at", alias = "applied_at")]
    pub time: String,
    #[serde(default, rename = "ref", alias = "reference", alias = "Reference")]
    pub reference: Option<String>,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, alias = "reject_reason", alias = "rejectReason")]
    pub reason: Option<String>,
}

impl TryFrom<Withdrawal> for DomainWithdrawal {
    type Error = TypeConstraintError;

    fn try_from(record: Withdrawal) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            merchant: optional_text(record.merchant.map(Scalar::into_text)),
            amount: record.amount.to_amount()?,
            wallet: required_text(record.wallet)?,
            time: parse_timestamp(&record.time)?,
            reference: optional_text(record.reference),
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => WithdrawalStatus::Pending,
            },
            reason: optional_text(record.reason),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatted_amount_and_missing_status() {
        let record: Withdrawal = serde_json::from_str(
            r#"{"id": "AP123455551", "merchant": "mo12345", "amount": "10,000.00 U",
                "wallet": "0xF3A....12345", "time": "01-11-2025 13:00", "ref": "Test123"}"#,
        )
        .unwrap();

        let withdrawal = DomainWithdrawal::try_from(record).unwrap();

        assert_eq!(withdrawal.amount, 10000.0);
        assert_eq!(withdrawal.status, WithdrawalStatus::Pending);
        assert_eq!(withdrawal.reference.as_deref(), Some("Test123"));
    }
}
