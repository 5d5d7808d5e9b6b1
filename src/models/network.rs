use serde::Deserialize;

use crate::domain::network::NetworkMember as DomainNetworkMember;
use crate::domain::types::{RecordStatus, TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_amount, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct NetworkMember {
    #[serde(alias = "Id", alias = "agent_id", alias = "agentId")]
    pub id: Scalar,
    #[serde(alias = "Level")]
    pub level: String,
    #[serde(default, alias = "Volume", alias = "total_volume")]
    pub volume: Option<Scalar>,
    #[serde(default, alias = "Bonus")]
    pub bonus: Option<Scalar>,
    #[serde(default, rename = "sponsorL1", alias = "sponsor_l1", alias = "l1")]
    pub sponsor_l1: Option<Scalar>,
    #[serde(default, rename = "sponsorL2", alias = "sponsor_l2", alias = "l2")]
    pub sponsor_l2: Option<Scalar>,
    #[serde(default, alias = "Referrer", alias = "referrer_id", alias = "referrerId")]
    pub referrer: Option<Scalar>,
    #[serde(
        rename = "join",
        alias = "joinDate",
        alias = "join_date",
        alias = "created_at"
    )]
    pub joined_at: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
}

impl TryFrom<NetworkMember> for DomainNetworkMember {
    type Error = TypeConstraintError;

    fn try_from(record: NetworkMember) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            level: record.level.parse()?,
            volume: optional_amount(record.volume.as_ref())?,
            bonus: optional_amount(record.bonus.as_ref())?,
            sponsor_l1: record.sponsor_l1.as_ref().map_or(Ok(0), Scalar::to_count)?,
            sponsor_l2: record.sponsor_l2.as_ref().map_or(Ok(0), Scalar::to_count)?,
            referrer: optional_text(record.referrer.map(Scalar::into_text)),
            joined_at: parse_timestamp(&record.joined_at)?,
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => RecordStatus::Active,
            },
        })
    }
}
