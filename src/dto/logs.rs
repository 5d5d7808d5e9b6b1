use serde::Deserialize;

use crate::dto::lists::ListQueryParams;

/// Query parameters of the system log list.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LogListParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    /// Exact log level (`INFO`, `WARNING`, `ERROR`); blank means any.
    pub level: Option<String>,
    /// Exact HTTP status code; blank means any.
    pub status: Option<String>,
}

impl LogListParams {
    pub fn list_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: self.search.clone(),
            page: self.page,
        }
    }
}
