use serde::Deserialize;
use validator::Validate;

use crate::domain::account::NewAccount;
use crate::forms::FormError;

#[derive(Debug, Deserialize, Validate)]
/// Form data for creating a back-office account.
pub struct AddAccountForm {
    #[validate(length(min = 3, max = 32))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// Role shown in the `Character` column, e.g. `Finance`.
    #[serde(alias = "role")]
    #[validate(length(min = 1, max = 32))]
    pub character: String,
    #[validate(length(min = 8))]
    pub password: String,
}

impl TryFrom<AddAccountForm> for NewAccount {
    type Error = FormError;

    fn try_from(form: AddAccountForm) -> Result<Self, Self::Error> {
        let form = AddAccountForm {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_lowercase(),
            character: form.character.trim().to_string(),
            password: form.password,
        };
        form.validate()?;

        Ok(NewAccount {
            username: form.username,
            email: form.email,
            role: form.character,
            password: form.password,
        })
    }
}
