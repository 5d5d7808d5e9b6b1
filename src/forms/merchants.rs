use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::merchant::NewMerchant;
use crate::domain::types::MerchantTier;
use crate::forms::FormError;

/// Merchant type that asks for a free-text type instead.
const OTHER_MERCHANT_TYPE: &str = "Others";

/// Accepts `0x` followed by 40 hex digits.
pub(crate) fn validate_wallet(value: &str) -> Result<(), ValidationError> {
    let valid = value
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("wallet_address"))
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Form data for registering a merchant.
pub struct AddMerchantForm {
    /// Tier the merchant joins (`T1`, `T2`, `T3`).
    #[serde(alias = "tier", alias = "group")]
    pub merchant_group: String,
    #[validate(email)]
    pub email: String,
    #[serde(alias = "name")]
    #[validate(length(min = 1, max = 120))]
    pub company_name: String,
    #[serde(alias = "ssm")]
    #[validate(length(min = 1, max = 40))]
    pub ssm_number: String,
    #[serde(alias = "type")]
    pub merchant_type: String,
    /// Free-text type used when `merchant_type` is `Others`.
    #[serde(default)]
    pub merchant_type_other: Option<String>,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(custom(function = "validate_wallet"))]
    pub wallet_address: String,
}

impl AddMerchantForm {
    fn trimmed(self) -> Self {
        Self {
            merchant_group: self.merchant_group.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            company_name: self.company_name.trim().to_string(),
            ssm_number: self.ssm_number.trim().to_string(),
            merchant_type: self.merchant_type.trim().to_string(),
            merchant_type_other: self
                .merchant_type_other
                .map(|other| other.trim().to_string()),
            state: self.state.trim().to_string(),
            wallet_address: self.wallet_address.trim().to_string(),
        }
    }
}

impl TryFrom<AddMerchantForm> for NewMerchant {
    type Error = FormError;

    fn try_from(form: AddMerchantForm) -> Result<Self, Self::Error> {
        let form = form.trimmed();
        form.validate()?;

        let tier: MerchantTier = form
            .merchant_group
            .parse()
            .map_err(|_| FormError::InvalidTier)?;

        let business_type = if form.merchant_type == OTHER_MERCHANT_TYPE {
            form.merchant_type_other.unwrap_or_default()
        } else {
            form.merchant_type
        };
        if business_type.is_empty() {
            return Err(FormError::InvalidMerchantType);
        }

        Ok(NewMerchant {
            name: form.company_name,
            ssm: form.ssm_number,
            business_type,
            state: form.state,
            tier,
            email: form.email,
            wallet_address: form.wallet_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLET: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn form() -> AddMerchantForm {
        AddMerchantForm {
            merchant_group: "t2".to_string(),
            email: " Owner@Kedai.MY ".to_string(),
            company_name: "  Kedai Runcit Ali ".to_string(),
            ssm_number: "202301234567".to_string(),
            merchant_type: "F&B".to_string(),
            merchant_type_other: None,
            state: "Selangor".to_string(),
            wallet_address: WALLET.to_string(),
        }
    }

    #[test]
    fn valid_form_becomes_new_merchant() {
        let merchant = NewMerchant::try_from(form()).unwrap();

        assert_eq!(merchant.name, "Kedai Runcit Ali");
        assert_eq!(merchant.tier, MerchantTier::T2);
        assert_eq!(merchant.email, "owner@kedai.my");
        assert_eq!(merchant.business_type, "F&B");
    }

    #[test]
    fn other_type_uses_free_text() {
        let mut input = form();
        input.merchant_type = "Others".to_string();
        input.merchant_type_other = Some(" Laundry ".to_string());

        assert_eq!(NewMerchant::try_from(input).unwrap().business_type, "Laundry");

        let mut missing = form();
        missing.merchant_type = "Others".to_string();
        assert!(matches!(
            NewMerchant::try_from(missing),
            Err(FormError::InvalidMerchantType)
        ));
    }

    #[test]
    fn blank_name_and_bad_wallet_are_rejected() {
        let mut input = form();
        input.company_name = "   ".to_string();
        input.wallet_address = "0x123".to_string();

        let err = NewMerchant::try_from(input).unwrap_err();

        assert!(matches!(
            err,
            FormError::Validation(ref errors) if errors.field_errors().len() == 2
        ));
    }

    #[test]
    fn unknown_tier_is_rejected() {
        let mut input = form();
        input.merchant_group = "T9".to_string();

        assert!(matches!(NewMerchant::try_from(input), Err(FormError::InvalidTier)));
    }

    #[test]
    fn form_accepts_dashboard_field_names() {
        let json = format!(
            r#"{{"merchantGroup":"T1","email":"a@b.co","companyName":"A","ssmNumber":"1",
                "merchantType":"Retail","state":"Johor","walletAddress":"{WALLET}"}}"#
        );

        let form: AddMerchantForm = serde_json::from_str(&json).unwrap();

        assert_eq!(form.company_name, "A");
        assert!(form.merchant_type_other.is_none());
    }
}
