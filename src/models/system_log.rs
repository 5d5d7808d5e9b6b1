use serde::Deserialize;

use crate::domain::system_log::SystemLog as DomainSystemLog;
use crate::domain::types::{TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_text};

#[derive(Clone, Debug, Deserialize)]
pub struct SystemLog {
    #[serde(
        rename = "dateTime",
        alias = "date_time",
        alias = "timestamp",
        alias = "created_at"
    )]
    pub date_time: String,
    #[serde(alias = "Level")]
    pub level: String,
    #[serde(default, alias = "Source", alias = "service")]
    pub source: Option<String>,
    #[serde(alias = "Endpoint", alias = "path")]
    pub endpoint: String,
    #[serde(alias = "Status", alias = "status_code", alias = "statusCode")]
    pub status: Scalar,
    #[serde(default, alias = "IP", alias = "ip_address", alias = "ipAddress")]
    pub ip: Option<String>,
}

impl TryFrom<SystemLog> for DomainSystemLog {
    type Error = TypeConstraintError;

    fn try_from(record: SystemLog) -> Result<Self, Self::Error> {
        let status = record.status.into_text();
        Ok(Self {
            date_time: parse_timestamp(&record.date_time)?,
            level: record.level.parse()?,
            source: optional_text(record.source).unwrap_or_default(),
            endpoint: record.endpoint.trim().to_string(),
            status: status
                .trim()
                .parse()
                .map_err(|_| TypeConstraintError::InvalidValue(status))?,
            ip: optional_text(record.ip).unwrap_or_default(),
        })
    }
}
