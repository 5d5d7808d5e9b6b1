use serde::{Deserialize, Serialize};

use crate::domain::withdrawal::{Withdrawal, WithdrawalStats};
use crate::dto::lists::ListQueryParams;
use crate::pagination::Paginated;

/// Query parameters of the withdrawal history list.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WithdrawalHistoryParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    /// `approved` or `rejected`; defaults to approved.
    pub status: Option<String>,
}

impl WithdrawalHistoryParams {
    pub fn list_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: self.search.clone(),
            page: self.page,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WithdrawalsPageData {
    pub records: Paginated<Withdrawal>,
    pub search_query: Option<String>,
    pub stats: WithdrawalStats,
}
