//! Wire shapes sent by the upstream backend and their conversion into domain
//! entities.
//!
//! The backend is inconsistent about naming (`joinDate`, `join_date`,
//! `JoinDate`) and about whether amounts are numbers or formatted strings.
//! Every record here accepts the known spellings and normalizes them once, so
//! nothing past this layer has to care.

use serde::Deserialize;

use crate::domain::types::{TypeConstraintError, parse_amount};

pub mod account;
pub mod agent;
pub mod bonus;
#[cfg(feature = "server")]
pub mod config;
pub mod envelope;
pub mod merchant;
pub mod network;
pub mod system_log;
pub mod transaction;
pub mod user;
pub mod withdrawal;

/// A value the backend sends either as text or as a number.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn into_text(self) -> String {
        match self {
            Scalar::Integer(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Text(value) => value,
        }
    }

    pub fn to_amount(&self) -> Result<f64, TypeConstraintError> {
        match self {
            Scalar::Integer(value) => Ok(*value as f64),
            Scalar::Float(value) => Ok(*value),
            Scalar::Text(value) => parse_amount(value),
        }
    }

    pub fn to_count(&self) -> Result<u32, TypeConstraintError> {
        match self {
            Scalar::Integer(value) => u32::try_from(*value)
                .map_err(|_| TypeConstraintError::InvalidValue(value.to_string())),
            Scalar::Float(value) => Err(TypeConstraintError::InvalidValue(value.to_string())),
            Scalar::Text(value) => value
                .trim()
                .replace(',', "")
                .parse()
                .map_err(|_| TypeConstraintError::InvalidValue(value.clone())),
        }
    }
}

/// Trims `value`, rejecting blank strings.
pub(crate) fn required_text(value: String) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trims `value`, turning blank strings into `None`.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub(crate) fn optional_amount(value: Option<&Scalar>) -> Result<f64, TypeConstraintError> {
    value.map_or(Ok(0.0), Scalar::to_amount)
}
