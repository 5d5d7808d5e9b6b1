use serde::Deserialize;

use crate::domain::agent::Agent as DomainAgent;
use crate::domain::types::{RecordStatus, TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_amount, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct Agent {
    #[serde(alias = "Id", alias = "agent_id", alias = "agentId")]
    pub id: Scalar,
    #[serde(default, alias = "Bonus", alias = "total_bonus", alias = "totalBonus")]
    pub bonus: Option<Scalar>,
    #[serde(default, alias = "L1", alias = "level1", alias = "level_1")]
    pub l1: Option<Scalar>,
    #[serde(default, alias = "L2", alias = "level2", alias = "level_2")]
    pub l2: Option<Scalar>,
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
}

impl TryFrom<Agent> for DomainAgent {
    type Error = TypeConstraintError;

    fn try_from(record: Agent) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            bonus: optional_amount(record.bonus.as_ref())?,
            l1: record.l1.as_ref().map_or(Ok(0), Scalar::to_count)?,
            l2: record.l2.as_ref().map_or(Ok(0), Scalar::to_count)?,
            joined_at: parse_timestamp(&record.joined_at)?,
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => RecordStatus::Active,
            },
        })
    }
}
