use serde::Deserialize;

use crate::domain::bonus::{BonusClaim as DomainBonusClaim, BonusUnclaim as DomainBonusUnclaim};
use crate::domain::types::{BonusTier, TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_amount, optional_text, required_text};

fn bonus_tier(value: Option<String>) -> Result<Option<BonusTier>, TypeConstraintError> {
    optional_text(value).map(|tier| tier.parse()).transpose()
}

#[derive(Clone, Debug, Deserialize)]
pub struct BonusClaim {
    #[serde(alias = "Id", alias = "claim_id", alias = "claimId")]
    pub id: Scalar,
    #[serde(alias = "Wallet", alias = "wallet_address", alias = "walletAddress")]
    pub wallet: String,
    #[serde(default, alias = "Bonus", alias = "amount")]
    pub bonus: Option<Scalar>,
    #[serde(default, alias = "Fees", alias = "fee")]
    pub fees: Option<Scalar>,
    #[serde(default, alias = "Net", alias = "net_amount")]
    pub net: Option<Scalar>,
    #[serde(alias = "Time", alias = "created_at", alias = "claimed_at")]
    pub time: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, rename = "bonusTier", alias = "bonus_tier", alias = "tier")]
    pub bonus_tier: Option<String>,
}

impl TryFrom<BonusClaim> for DomainBonusClaim {
    type Error = TypeConstraintError;

    fn try_from(record: BonusClaim) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            wallet: required_text(record.wallet)?,
            bonus: optional_amount(record.bonus.as_ref())?,
            fees: optional_amount(record.fees.as_ref())?,
            net: optional_amount(record.net.as_ref())?,
            time: parse_timestamp(&record.time)?,
            status: optional_text(record.status).unwrap_or_default(),
            bonus_tier: bonus_tier(record.bonus_tier)?,
        })
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BonusUnclaim {
    #[serde(alias = "Id", alias = "member_id", alias = "memberId")]
    pub id: Scalar,
    #[serde(default, alias = "Bonus", alias = "amount", alias = "unclaimed")]
    pub bonus: Option<Scalar>,
    #[serde(
        rename = "update",
        alias = "updated_at",
        alias = "updatedAt",
        alias = "last_update"
    )]
    pub updated_at: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(default, rename = "bonusTier", alias = "bonus_tier", alias = "tier")]
    pub bonus_tier: Option<String>,
}

impl TryFrom<BonusUnclaim> for DomainBonusUnclaim {
    type Error = TypeConstraintError;

    fn try_from(record: BonusUnclaim) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            bonus: optional_amount(record.bonus.as_ref())?,
            updated_at: parse_timestamp(&record.updated_at)?,
            status: optional_text(record.status).unwrap_or_else(|| "Pending".to_string()),
            bonus_tier: bonus_tier(record.bonus_tier)?,
        })
    }
}
