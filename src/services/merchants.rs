//! Services handling the merchant list and merchant administration.

use crate::domain::merchant::{MERCHANT_SEARCH_KEYS, Merchant, MerchantStats, NewMerchant};
use crate::domain::types::MerchantTier;
use crate::dto::lists::ListPageData;
use crate::dto::merchants::{MerchantListParams, MerchantsPageData};
use crate::forms::merchants::AddMerchantForm;
use crate::notify::{Notifier, OutcomeMessages, report_outcome};
use crate::repository::{MerchantReader, MerchantWriter};
use crate::services::{ServiceError, ServiceResult, list_page, parse_filter, require, search_all};

fn load_merchants<R>(repo: &R) -> ServiceResult<Vec<Merchant>>
where
    R: MerchantReader + ?Sized,
{
    repo.list_merchants().map_err(|err| {
        log::error!("Failed to list merchants: {err}");
        ServiceError::from(err)
    })
}

fn in_tier(merchants: Vec<Merchant>, tier: Option<MerchantTier>) -> Vec<Merchant> {
    match tier {
        Some(tier) => merchants.into_iter().filter(|m| m.tier == tier).collect(),
        None => merchants,
    }
}

/// Loads one page of the merchant list for the selected tier tab.
pub fn list_merchants<R>(repo: &R, params: &MerchantListParams) -> ServiceResult<MerchantsPageData>
where
    R: MerchantReader + ?Sized,
{
    let tier = parse_filter(params.tier.as_deref(), "tier")?;

    let merchants = load_merchants(repo)?;
    let stats = MerchantStats::from_merchants(&merchants);
    let merchants = in_tier(merchants, tier);

    let ListPageData {
        records,
        search_query,
    } = list_page(&merchants, MERCHANT_SEARCH_KEYS, &params.list_params());

    Ok(MerchantsPageData {
        records,
        search_query,
        stats,
    })
}

/// Merchants of the selected tier matching the search, unpaged.
pub fn search_merchants<R>(repo: &R, params: &MerchantListParams) -> ServiceResult<Vec<Merchant>>
where
    R: MerchantReader + ?Sized,
{
    let tier = parse_filter(params.tier.as_deref(), "tier")?;
    let merchants = in_tier(load_merchants(repo)?, tier);

    Ok(search_all(&merchants, MERCHANT_SEARCH_KEYS, params.search.as_deref()))
}

pub fn get_merchant<R>(repo: &R, id: &str) -> ServiceResult<Merchant>
where
    R: MerchantReader + ?Sized,
{
    require(repo.get_merchant_by_id(id), "merchant", id)
}

/// Validates the add-merchant form and registers the merchant.
pub fn add_merchant<R, N>(repo: &R, form: AddMerchantForm, notifier: &N) -> ServiceResult<Merchant>
where
    R: MerchantWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = NewMerchant::try_from(form)
        .map_err(ServiceError::from)
        .and_then(|new_merchant| {
            repo.create_merchant(&new_merchant).map_err(|err| {
                log::error!("Failed to add merchant {}: {err}", new_merchant.name);
                ServiceError::from(err)
            })
        });

    report_outcome(
        &result,
        OutcomeMessages::on_success("Merchant added successfully."),
        notifier,
    );

    result
}

pub fn delete_merchant<R, N>(repo: &R, id: &str, notifier: &N) -> ServiceResult<()>
where
    R: MerchantWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = repo.delete_merchant(id).map_err(|err| {
        log::error!("Failed to delete merchant {id}: {err}");
        ServiceError::from(err)
    });

    report_outcome(
        &result,
        OutcomeMessages::new("Merchant deleted.", "Failed to delete merchant."),
        notifier,
    );

    result
}
