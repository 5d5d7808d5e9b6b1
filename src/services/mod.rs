//! Business workflows behind the dashboard views.
//!
//! Every list view follows the same path: load the whole collection from the
//! repository, apply any exact filters the view has, then hand the result to
//! [`ListQuery`] for search and paging.

use crate::dto::lists::{ListPageData, ListQueryParams};
use crate::list_query::{ListQuery, Searchable, paginate};
use crate::pagination::Paginated;
use crate::repository::errors::RepositoryResult;

pub mod accounts;
pub mod errors;
pub mod export;
pub mod lists;
pub mod logs;
pub mod merchants;
pub mod withdrawals;

pub use errors::{ServiceError, ServiceResult};

/// Trims the search box value; blank input counts as no search.
pub(crate) fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
}

/// Searches `records` over `keys` and cuts out the requested page.
///
/// The page is clamped into `1..=total_pages` before slicing, so the echoed
/// page always names the items returned.
pub(crate) fn list_page<T>(
    records: &[T],
    keys: &[&str],
    params: &ListQueryParams,
) -> ListPageData<T>
where
    T: Searchable + Clone,
{
    let search_query = normalize_search(params.search.as_deref());
    let per_page = crate::DEFAULT_ITEMS_PER_PAGE;

    let filtered = ListQuery::new(keys)
        .search(search_query.as_deref().unwrap_or_default())
        .filter(records);
    let last_page = filtered.len().div_ceil(per_page).max(1);
    let page = params.page.unwrap_or(1).clamp(1, last_page);

    let slice = paginate(&filtered, page, per_page);

    ListPageData {
        records: Paginated::from_slice(slice, page),
        search_query,
    }
}

/// Unwraps a lookup by id; nothing found becomes [`ServiceError::NotFound`].
pub(crate) fn require<T>(
    found: RepositoryResult<Option<T>>,
    what: &str,
    id: &str,
) -> ServiceResult<T> {
    found
        .map_err(|err| {
            log::error!("Failed to load {what} {id}: {err}");
            ServiceError::from(err)
        })?
        .ok_or(ServiceError::NotFound)
}

/// Every record matching the search, for exports.
pub(crate) fn search_all<T>(records: &[T], keys: &[&str], search: Option<&str>) -> Vec<T>
where
    T: Searchable + Clone,
{
    let term = normalize_search(search).unwrap_or_default();
    ListQuery::new(keys).search(term).filter(records).into_owned()
}

/// Parses an optional exact-match filter; blank means no filter.
pub(crate) fn parse_filter<T>(value: Option<&str>, name: &str) -> ServiceResult<Option<T>>
where
    T: std::str::FromStr,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServiceError::Form(format!("invalid {name}: {raw}"))),
    }
}
