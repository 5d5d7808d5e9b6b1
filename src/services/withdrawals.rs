//! Services behind the withdrawal review screens.

use crate::domain::types::WithdrawalStatus;
use crate::domain::withdrawal::{
    WITHDRAWAL_HISTORY_SEARCH_KEYS, WITHDRAWAL_SEARCH_KEYS, Withdrawal, WithdrawalStats,
};
use crate::dto::lists::{ListPageData, ListQueryParams};
use crate::dto::withdrawals::{WithdrawalHistoryParams, WithdrawalsPageData};
use crate::forms::withdrawals::RejectWithdrawalForm;
use crate::notify::{Notifier, OutcomeMessages, report_outcome};
use crate::repository::{WithdrawalReader, WithdrawalWriter};
use crate::services::{ServiceError, ServiceResult, list_page, parse_filter, require};

fn load_withdrawals<R>(repo: &R) -> ServiceResult<Vec<Withdrawal>>
where
    R: WithdrawalReader + ?Sized,
{
    repo.list_withdrawals(None).map_err(|err| {
        log::error!("Failed to list withdrawals: {err}");
        ServiceError::from(err)
    })
}

fn page_with_stats(
    withdrawals: &[Withdrawal],
    status: WithdrawalStatus,
    keys: &[&str],
    params: &ListQueryParams,
) -> WithdrawalsPageData {
    let stats = WithdrawalStats::from_withdrawals(withdrawals);
    let in_status: Vec<Withdrawal> = withdrawals
        .iter()
        .filter(|w| w.status == status)
        .cloned()
        .collect();

    let ListPageData {
        records,
        search_query,
    } = list_page(&in_status, keys, params);

    WithdrawalsPageData {
        records,
        search_query,
        stats,
    }
}

/// Pending applications awaiting review.
pub fn list_applications<R>(
    repo: &R,
    params: &ListQueryParams,
) -> ServiceResult<WithdrawalsPageData>
where
    R: WithdrawalReader + ?Sized,
{
    let withdrawals = load_withdrawals(repo)?;
    Ok(page_with_stats(
        &withdrawals,
        WithdrawalStatus::Pending,
        WITHDRAWAL_SEARCH_KEYS,
        params,
    ))
}

/// Approved or rejected withdrawals; approved when no status is given.
pub fn list_history<R>(
    repo: &R,
    params: &WithdrawalHistoryParams,
) -> ServiceResult<WithdrawalsPageData>
where
    R: WithdrawalReader + ?Sized,
{
    let status = parse_filter(params.status.as_deref(), "status")?
        .unwrap_or(WithdrawalStatus::Approved);
    if status == WithdrawalStatus::Pending {
        return Err(ServiceError::Form(
            "history status must be approved or rejected".to_string(),
        ));
    }

    let withdrawals = load_withdrawals(repo)?;
    Ok(page_with_stats(
        &withdrawals,
        status,
        WITHDRAWAL_HISTORY_SEARCH_KEYS,
        &params.list_params(),
    ))
}

pub fn get_withdrawal<R>(repo: &R, id: &str) -> ServiceResult<Withdrawal>
where
    R: WithdrawalReader + ?Sized,
{
    require(repo.get_withdrawal_by_id(id), "withdrawal", id)
}

fn ensure_pending<R>(repo: &R, id: &str) -> ServiceResult<()>
where
    R: WithdrawalReader + ?Sized,
{
    let withdrawal = get_withdrawal(repo, id)?;
    if !withdrawal.is_pending() {
        return Err(ServiceError::Conflict(format!(
            "Withdrawal {id} is already {}.",
            withdrawal.status.as_str().to_lowercase()
        )));
    }
    Ok(())
}

pub fn approve_withdrawal<R, N>(repo: &R, id: &str, notifier: &N) -> ServiceResult<Withdrawal>
where
    R: WithdrawalReader + WithdrawalWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = ensure_pending(repo, id).and_then(|()| {
        repo.approve_withdrawal(id).map_err(|err| {
            log::error!("Failed to approve withdrawal {id}: {err}");
            ServiceError::from(err)
        })
    });

    let success = format!("Withdrawal {id} approved.");
    report_outcome(&result, OutcomeMessages::on_success(&success), notifier);

    result
}

pub fn reject_withdrawal<R, N>(
    repo: &R,
    id: &str,
    form: RejectWithdrawalForm,
    notifier: &N,
) -> ServiceResult<Withdrawal>
where
    R: WithdrawalReader + WithdrawalWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = form
        .into_reason()
        .map_err(ServiceError::from)
        .and_then(|reason| {
            ensure_pending(repo, id)?;
            repo.reject_withdrawal(id, &reason).map_err(|err| {
                log::error!("Failed to reject withdrawal {id}: {err}");
                ServiceError::from(err)
            })
        });

    let success = format!("Withdrawal {id} rejected.");
    report_outcome(&result, OutcomeMessages::on_success(&success), notifier);

    result
}
