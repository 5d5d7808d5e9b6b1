use serde::Deserialize;

use crate::domain::merchant::Merchant as DomainMerchant;
use crate::domain::types::{RecordStatus, TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct Merchant {
    #[serde(alias = "Id", alias = "merchant_id", alias = "merchantId")]
    pub id: Scalar,
    #[serde(alias = "Name", alias = "company_name", alias = "companyName")]
    pub name: String,
    #[serde(
        rename = "type",
        alias = "Type",
        alias = "business_type",
        alias = "businessType"
    )]
    pub business_type: String,
    #[serde(default, alias = "State")]
    pub state: Option<String>,
    #[serde(
        rename = "join",
        alias = "joinDate",
        alias = "join_date",
        alias = "JoinDate",
        alias = "created_at"
    )]
    pub joined_at: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
    #[serde(alias = "group", alias = "Group", alias = "Tier")]
    pub tier: String,
    #[serde(default, alias = "SSM")]
    pub ssm: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(
        default,
        alias = "walletAddress",
        alias = "WalletAddress",
        alias = "wallet"
    )]
    pub wallet_address: Option<String>,
}

impl TryFrom<Merchant> for DomainMerchant {
    type Error = TypeConstraintError;

    fn try_from(record: Merchant) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            name: required_text(record.name)?,
            business_type: record.business_type.trim().to_string(),
            state: optional_text(record.state).unwrap_or_default(),
            joined_at: parse_timestamp(&record.joined_at)?,
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => RecordStatus::Active,
            },
            tier: record.tier.parse()?,
            ssm: optional_text(record.ssm),
            email: optional_text(record.email).map(|e| e.to_lowercase()),
            wallet_address: optional_text(record.wallet_address),
        })
    }
}
