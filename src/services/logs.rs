use crate::domain::system_log::{SYSTEM_LOG_SEARCH_KEYS, SystemLog};
use crate::domain::types::LogLevel;
use crate::dto::lists::ListPageData;
use crate::dto::logs::LogListParams;
use crate::repository::SystemLogReader;
use crate::services::{ServiceResult, list_page, parse_filter};

/// Loads the system log page, applying the level and status dropdowns
/// before the free-text search.
pub fn list_system_logs<R>(
    repo: &R,
    params: &LogListParams,
) -> ServiceResult<ListPageData<SystemLog>>
where
    R: SystemLogReader + ?Sized,
{
    let level: Option<LogLevel> = parse_filter(params.level.as_deref(), "level")?;
    let status: Option<u16> = parse_filter(params.status.as_deref(), "status")?;

    let logs = repo.list_system_logs().map_err(|err| {
        log::error!("Failed to list system logs: {err}");
        err
    })?;

    let logs: Vec<SystemLog> = logs
        .into_iter()
        .filter(|entry| level.is_none_or(|level| entry.level == level))
        .filter(|entry| status.is_none_or(|status| entry.status == status))
        .collect();

    Ok(list_page(&logs, SYSTEM_LOG_SEARCH_KEYS, &params.list_params()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FixtureRepository;
    use crate::services::ServiceError;

    fn repo() -> FixtureRepository {
        FixtureRepository::seeded().expect("seed should load")
    }

    fn params(level: Option<&str>, status: Option<&str>, search: Option<&str>) -> LogListParams {
        LogListParams {
            search: search.map(str::to_string),
            page: None,
            level: level.map(str::to_string),
            status: status.map(str::to_string),
        }
    }

    #[test]
    fn filters_by_level_case_insensitively() {
        let data = list_system_logs(&repo(), &params(Some("error"), None, None)).unwrap();

        assert_eq!(data.records.total_items, 3);
        assert!(data.records.items.iter().all(|l| l.level == LogLevel::Error));
    }

    #[test]
    fn filters_by_exact_status() {
        let data = list_system_logs(&repo(), &params(None, Some("200"), None)).unwrap();

        assert_eq!(data.records.total_items, 4);
    }

    #[test]
    fn level_filter_runs_before_search() {
        let data =
            list_system_logs(&repo(), &params(Some("INFO"), None, Some("login"))).unwrap();

        assert_eq!(data.records.total_items, 1);
        assert_eq!(data.records.items[0].ip, "192.168.1.1");
    }

    #[test]
    fn ip_search_is_substring_match() {
        let data = list_system_logs(&repo(), &params(None, Some(""), Some("192.168.1.1"))).unwrap();

        assert_eq!(data.records.total_items, 4);
    }

    #[test]
    fn unknown_level_is_a_form_error() {
        let result = list_system_logs(&repo(), &params(Some("DEBUG"), None, None));

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }
}
