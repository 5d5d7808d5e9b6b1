use serde::Deserialize;
use validator::Validate;

use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Reason entered when rejecting a withdrawal application.
pub struct RejectWithdrawalForm {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

impl RejectWithdrawalForm {
    /// Returns the trimmed reason once it passes validation.
    pub fn into_reason(self) -> Result<String, FormError> {
        let form = Self {
            reason: self.reason.trim().to_string(),
        };
        form.validate()?;
        Ok(form.reason)
    }
}
