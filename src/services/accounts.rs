//! Services handling back-office account administration.

use crate::domain::account::{ACCOUNT_SEARCH_KEYS, Account, NewAccount};
use crate::dto::lists::{ListPageData, ListQueryParams};
use crate::forms::accounts::AddAccountForm;
use crate::notify::{Notifier, OutcomeMessages, report_outcome};
use crate::repository::{AccountReader, AccountWriter};
use crate::services::{ServiceError, ServiceResult, list_page, require};

pub fn list_accounts<R>(repo: &R, params: &ListQueryParams) -> ServiceResult<ListPageData<Account>>
where
    R: AccountReader + ?Sized,
{
    let accounts = repo.list_accounts().map_err(|err| {
        log::error!("Failed to list accounts: {err}");
        err
    })?;

    Ok(list_page(&accounts, ACCOUNT_SEARCH_KEYS, params))
}

pub fn get_account<R>(repo: &R, id: &str) -> ServiceResult<Account>
where
    R: AccountReader + ?Sized,
{
    require(repo.get_account_by_id(id), "account", id)
}

/// Validates the add-account form and creates the account.
pub fn add_account<R, N>(repo: &R, form: AddAccountForm, notifier: &N) -> ServiceResult<Account>
where
    R: AccountWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = NewAccount::try_from(form)
        .map_err(ServiceError::from)
        .and_then(|new_account| {
            repo.create_account(&new_account).map_err(|err| {
                log::error!("Failed to add account {}: {err}", new_account.username);
                ServiceError::from(err)
            })
        });

    report_outcome(
        &result,
        OutcomeMessages::on_success("Account created successfully."),
        notifier,
    );

    result
}

pub fn delete_account<R, N>(repo: &R, id: &str, notifier: &N) -> ServiceResult<()>
where
    R: AccountWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let result = repo.delete_account(id).map_err(|err| {
        log::error!("Failed to delete account {id}: {err}");
        ServiceError::from(err)
    });

    report_outcome(
        &result,
        OutcomeMessages::new("Account deleted.", "Failed to delete account."),
        notifier,
    );

    result
}
