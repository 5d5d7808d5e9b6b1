use serde::{Deserialize, Serialize};

use crate::domain::merchant::{Merchant, MerchantStats};
use crate::dto::lists::ListQueryParams;
use crate::pagination::Paginated;

/// Query parameters of the merchant list and its CSV export.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct MerchantListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    /// Tier tab (`T1`, `T2`, `T3`); blank means all tiers.
    pub tier: Option<String>,
}

impl MerchantListParams {
    pub fn list_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: self.search.clone(),
            page: self.page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MerchantsPageData {
    pub records: Paginated<Merchant>,
    pub search_query: Option<String>,
    /// Counts over all merchants, regardless of the tier or search filter.
    pub stats: MerchantStats,
}
