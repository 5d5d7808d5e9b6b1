use serde::Deserialize;

use crate::domain::types::{RecordStatus, TypeConstraintError, parse_timestamp};
use crate::domain::user::User as DomainUser;
use crate::models::{Scalar, optional_amount, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct User {
    #[serde(alias = "Id", alias = "user_id", alias = "userId")]
    pub id: Scalar,
    #[serde(
        default,
        alias = "wallet_id",
        alias = "walletId",
        alias = "wallet_address",
        alias = "walletAddress"
    )]
    pub wallet: Option<String>,
    #[serde(default, alias = "amount", alias = "Spend", alias = "total_spend")]
    pub spend: Option<Scalar>,
    #[serde(default, alias = "Bonus")]
    pub bonus: Option<Scalar>,
    #[serde(
        rename = "join",
        alias = "join_time",
        alias = "joinTime",
        alias = "joinDate",
        alias = "created_at"
    )]
    pub joined_at: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(record: User) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            wallet: optional_text(record.wallet),
            spend: optional_amount(record.spend.as_ref())?,
            bonus: optional_amount(record.bonus.as_ref())?,
            joined_at: parse_timestamp(&record.joined_at)?,
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => RecordStatus::Active,
            },
        })
    }
}
