use serde::{Deserialize, Serialize};

use crate::pagination::Paginated;

/// Query parameters accepted by every list view.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListQueryParams {
    /// Optional free-form search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface, 1-indexed.
    pub page: Option<usize>,
}

impl ListQueryParams {
    pub fn new(search: Option<&str>, page: Option<usize>) -> Self {
        Self {
            search: search.map(str::to_string),
            page,
        }
    }
}

/// One page of a searchable list.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    pub records: Paginated<T>,
    /// Trimmed search echoed back when present.
    pub search_query: Option<String>,
}

/// Query parameters of an agent's network tab.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NetworkListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    /// `level1` or `level2`; blank means both.
    pub level: Option<String>,
}

impl NetworkListParams {
    pub fn list_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: self.search.clone(),
            page: self.page,
        }
    }
}

/// Query parameters of the bonus claim and unclaim lists.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BonusListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    /// Bonus tier tab (`System`, `Partner`, `Agent`, `Merchant`, `User`);
    /// blank means every tier.
    pub tier: Option<String>,
}

impl BonusListParams {
    pub fn list_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: self.search.clone(),
            page: self.page,
        }
    }
}
