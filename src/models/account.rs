use serde::Deserialize;

use crate::domain::account::Account as DomainAccount;
use crate::domain::types::{RecordStatus, TypeConstraintError, parse_timestamp};
use crate::models::{Scalar, optional_text, required_text};

#[derive(Clone, Debug, Deserialize)]
pub struct Account {
    #[serde(alias = "Id", alias = "account_id")]
    pub id: Scalar,
    #[serde(alias = "Username", alias = "user_name")]
    pub username: String,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(
        default,
        rename = "character",
        alias = "role",
        alias = "admin_type",
        alias = "adminType"
    )]
    pub role: Option<String>,
    #[serde(default, rename = "lastLogin", alias = "last_login")]
    pub last_login: Option<String>,
    #[serde(rename = "created", alias = "created_at", alias = "createdAt")]
    pub created_at: String,
    #[serde(default, alias = "Status")]
    pub status: Option<String>,
}

impl TryFrom<Account> for DomainAccount {
    type Error = TypeConstraintError;

    fn try_from(record: Account) -> Result<Self, Self::Error> {
        Ok(Self {
            id: required_text(record.id.into_text())?,
            username: required_text(record.username)?,
            email: optional_text(record.email).map(|e| e.to_lowercase()),
            role: optional_text(record.role).unwrap_or_default(),
            last_login: optional_text(record.last_login),
            created_at: parse_timestamp(&record.created_at)?,
            status: match optional_text(record.status) {
                Some(status) => status.parse()?,
                None => RecordStatus::Active,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_and_admin_type_are_normalized() {
        let record: Account = serde_json::from_str(
            r#"{"id": 3, "username": "finance3", "email": "Finance3@NBN.com", "admin_type": "t3",
                "status": "Inactive", "last_login": "2025-11-17 08:00:00",
                "created_at": "2025-11-01 15:00:00"}"#,
        )
        .unwrap();

        let account = DomainAccount::try_from(record).unwrap();

        assert_eq!(account.id, "3");
        assert_eq!(account.role, "t3");
        assert_eq!(account.email.as_deref(), Some("finance3@nbn.com"));
        assert_eq!(account.status, RecordStatus::Inactive);
    }
}
