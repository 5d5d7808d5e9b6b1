//! Form definitions backing the dashboard write endpoints.

use thiserror::Error;
use validator::ValidationErrors;

pub mod accounts;
pub mod merchants;
pub mod withdrawals;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid fields: {}", field_list(.0))]
    Validation(#[from] ValidationErrors),

    #[error("invalid merchant group")]
    InvalidTier,

    #[error("merchant type is required")]
    InvalidMerchantType,
}

fn field_list(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_keys()
        .map(|key| key.into_owned())
        .collect();
    fields.sort_unstable();
    fields.join(", ")
}
