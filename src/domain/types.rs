//! Value objects shared by the dashboard entities.
//!
//! Status-like fields arrive from the backend as free text; the enums here
//! pin them down to the values the dashboard understands while keeping the
//! exact spelling the tables display (and therefore search on).
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Timestamp matched none of the accepted layouts.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    /// Amount could not be read as a number.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Layout used by every table column that shows a point in time.
pub const DISPLAY_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

const ACCEPTED_TIME_FORMATS: &[&str] = &[
    DISPLAY_TIME_FORMAT,
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parses a timestamp in any of the layouts the backend is known to send.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TypeConstraintError> {
    let trimmed = value.trim().trim_end_matches('Z');
    ACCEPTED_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| TypeConstraintError::InvalidTimestamp(value.to_string()))
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_TIME_FORMAT).to_string()
}

/// Serde adapter writing timestamps in [`DISPLAY_TIME_FORMAT`].
pub mod display_time {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// Reads an amount such as `10000`, `"10,000.00"`, `"10,000.00 USDT"` or
/// `"+ 352.00 U"`.
pub fn parse_amount(value: &str) -> Result<f64, TypeConstraintError> {
    let numeric: String = value
        .trim()
        .trim_end_matches(|c: char| c.is_alphabetic() || c.is_whitespace())
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    numeric
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| TypeConstraintError::InvalidAmount(value.to_string()))
}

/// Generates a closed set of textual values with case-insensitive parsing.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = TypeConstraintError;

            fn from_str(value: &str) -> Result<Self, TypeConstraintError> {
                let value = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(value))
                    .ok_or_else(|| TypeConstraintError::InvalidValue(value.to_string()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, TypeConstraintError> {
                value.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

text_enum!(
    /// Whether an account-like record is enabled.
    RecordStatus {
        Active => "Active",
        Inactive => "Inactive",
        Suspended => "Suspended",
    }
);

text_enum!(
    /// Merchant group; drives the tabs on the merchant list.
    MerchantTier {
        T1 => "T1",
        T2 => "T2",
        T3 => "T3",
    }
);

text_enum!(
    /// Depth of a member in an agent's referral network.
    NetworkLevel {
        Level1 => "level1",
        Level2 => "level2",
    }
);

text_enum!(
    /// Pool a bonus is paid from; drives the tabs on the bonus page.
    BonusTier {
        System => "System",
        Partner => "Partner",
        Agent => "Agent",
        Merchant => "Merchant",
        User => "User",
    }
);

text_enum!(
    WithdrawalStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
);

text_enum!(
    LogLevel {
        Info => "INFO",
        Warning => "WARNING",
        Error => "ERROR",
    }
);

/// Amount as the tables show it: two decimals with thousands separators,
/// e.g. `10,000.00`. Search, JSON and CSV all use this form.
pub fn amount_text(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{fraction}")
}

/// Serde adapter writing amounts with [`amount_text`].
pub mod display_amount {
    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::amount_text(*value))
    }
}
