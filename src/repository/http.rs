//! Data source backed by the upstream REST API.
//!
//! Uses the blocking `reqwest` client; callers inside the actix runtime must
//! go through `web::block`.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{
    account::{Account, NewAccount},
    agent::Agent,
    bonus::{BonusClaim, BonusUnclaim},
    merchant::{Merchant, NewMerchant},
    network::NetworkMember,
    system_log::SystemLog,
    transaction::Transaction,
    types::WithdrawalStatus,
    user::User,
    withdrawal::Withdrawal,
};
use crate::models;
use crate::models::config::DataSourceConfig;
use crate::models::envelope::{ApiEnvelope, ApiMeta, error_message};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AccountReader, AccountWriter, AgentReader, BonusReader, MerchantReader, MerchantWriter,
    SystemLogReader, TransactionReader, UserReader, WithdrawalReader, WithdrawalWriter,
};

/// Path segment shared by the T3 and system admin endpoints.
const ADMIN_SEGMENT: &str = "t3systemadmin";

/// Upper bound on pages followed for one list; the backend's `meta` is
/// trusted only this far.
const MAX_LIST_PAGES: usize = 100;

/// Checks that `id` can stand as a single path segment.
///
/// Anything else cannot name a record, so it is reported as not found
/// instead of being sent.
fn id_segment(id: &str) -> RepositoryResult<&str> {
    match id.trim() {
        "" | "." | ".." => Err(RepositoryError::NotFound),
        _ => Ok(id),
    }
}

pub struct HttpRepository {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpRepository {
    pub fn new(base_url: &str, timeout: Duration, token: Option<String>) -> RepositoryResult<Self> {
        let base_url = Url::parse(base_url).map_err(|err| {
            RepositoryError::ConnectionError(format!("invalid base URL {base_url}: {err}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(RepositoryError::ConnectionError(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    pub fn from_config(config: &DataSourceConfig) -> RepositoryResult<Self> {
        let base_url = config.base_url.as_deref().ok_or_else(|| {
            RepositoryError::ConnectionError("data_source.base_url is not set".to_string())
        })?;
        Self::new(
            base_url,
            Duration::from_millis(config.timeout_ms),
            config.token.clone(),
        )
    }

    /// Admin endpoint made of `segments`, each percent-encoded on its own.
    fn endpoint(&self, segments: &[&str]) -> RepositoryResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                RepositoryError::ConnectionError(format!(
                    "base URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push(ADMIN_SEGMENT)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send_envelope<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> RepositoryResult<ApiEnvelope<T>> {
        let response = builder.send()?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }

        let body = response.text()?;
        if !status.is_success() {
            let message = error_message(status.as_u16(), &body);
            log::error!("API error [{status}]: {message}");
            return Err(RepositoryError::Backend(message));
        }

        Ok(serde_json::from_str::<ApiEnvelope<T>>(&body)?)
    }

    fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> RepositoryResult<T> {
        self.send_envelope(builder)?.into_data()
    }

    /// Loads a whole collection, following `meta` onto later pages.
    fn fetch_list<W, D>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> RepositoryResult<Vec<D>>
    where
        W: DeserializeOwned,
        D: TryFrom<W>,
        RepositoryError: From<D::Error>,
    {
        let url = self.endpoint(segments)?;
        let mut records: Vec<W> = Vec::new();
        let mut page = 1;

        loop {
            let mut builder = self.request(Method::GET, url.clone()).query(query);
            if page > 1 {
                builder = builder.query(&[("page", page)]);
            }
            let envelope = self.send_envelope::<Vec<W>>(builder)?;
            let next = envelope.meta.as_ref().and_then(ApiMeta::next_page);
            records.extend(envelope.into_data()?);

            match next {
                Some(next) if next > page && next <= MAX_LIST_PAGES => page = next,
                Some(_) => {
                    log::warn!("Stopped following pages of {url} at page {page}");
                    break;
                }
                None => break,
            }
        }

        records
            .into_iter()
            .map(|record| D::try_from(record).map_err(RepositoryError::from))
            .collect()
    }

    fn fetch_one<W, D>(&self, segments: &[&str]) -> RepositoryResult<Option<D>>
    where
        W: DeserializeOwned,
        D: TryFrom<W>,
        RepositoryError: From<D::Error>,
    {
        let url = self.endpoint(segments)?;
        match self.send::<W>(self.request(Method::GET, url)) {
            Ok(record) => Ok(Some(D::try_from(record)?)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn post<W, D, B>(&self, segments: &[&str], body: Option<&B>) -> RepositoryResult<D>
    where
        W: DeserializeOwned,
        D: TryFrom<W>,
        RepositoryError: From<D::Error>,
        B: Serialize + ?Sized,
    {
        let mut builder = self.request(Method::POST, self.endpoint(segments)?);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let record: W = self.send(builder)?;
        Ok(D::try_from(record)?)
    }

    fn delete(&self, segments: &[&str]) -> RepositoryResult<()> {
        let builder = self.request(Method::DELETE, self.endpoint(segments)?);
        self.send_envelope::<serde_json::Value>(builder)?.check()
    }
}

impl MerchantReader for HttpRepository {
    fn list_merchants(&self) -> RepositoryResult<Vec<Merchant>> {
        self.fetch_list::<models::merchant::Merchant, _>(&["merchants"], &[])
    }

    fn get_merchant_by_id(&self, id: &str) -> RepositoryResult<Option<Merchant>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::merchant::Merchant, _>(&["merchants", id])
    }
}

impl MerchantWriter for HttpRepository {
    fn create_merchant(&self, new_merchant: &NewMerchant) -> RepositoryResult<Merchant> {
        self.post::<models::merchant::Merchant, _, _>(&["merchants"], Some(new_merchant))
    }

    fn delete_merchant(&self, id: &str) -> RepositoryResult<()> {
        self.delete(&["merchants", id_segment(id)?])
    }
}

impl AgentReader for HttpRepository {
    fn list_agents(&self) -> RepositoryResult<Vec<Agent>> {
        self.fetch_list::<models::agent::Agent, _>(&["agents"], &[])
    }

    fn get_agent_by_id(&self, id: &str) -> RepositoryResult<Option<Agent>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::agent::Agent, _>(&["agents", id])
    }

    fn list_agent_network(&self, agent_id: &str) -> RepositoryResult<Vec<NetworkMember>> {
        let segments = ["agents", id_segment(agent_id)?, "network"];
        self.fetch_list::<models::network::NetworkMember, _>(&segments, &[])
    }
}

impl UserReader for HttpRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.fetch_list::<models::user::User, _>(&["users"], &[])
    }

    fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::user::User, _>(&["users", id])
    }
}

impl TransactionReader for HttpRepository {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>> {
        self.fetch_list::<models::transaction::Transaction, _>(&["transactions"], &[])
    }

    fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::transaction::Transaction, _>(&["transactions", id])
    }
}

impl WithdrawalReader for HttpRepository {
    fn list_withdrawals(
        &self,
        status: Option<WithdrawalStatus>,
    ) -> RepositoryResult<Vec<Withdrawal>> {
        match status {
            Some(WithdrawalStatus::Pending) => {
                let segments = ["withdrawals", "applications"];
                self.fetch_list::<models::withdrawal::Withdrawal, _>(&segments, &[])
            }
            Some(status) => {
                let status = status.as_str().to_lowercase();
                self.fetch_list::<models::withdrawal::Withdrawal, _>(
                    &["withdrawals", "history"],
                    &[("status", status.as_str())],
                )
            }
            None => {
                let mut all = self.list_withdrawals(Some(WithdrawalStatus::Pending))?;
                all.extend(self.list_withdrawals(Some(WithdrawalStatus::Approved))?);
                all.extend(self.list_withdrawals(Some(WithdrawalStatus::Rejected))?);
                Ok(all)
            }
        }
    }

    fn get_withdrawal_by_id(&self, id: &str) -> RepositoryResult<Option<Withdrawal>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::withdrawal::Withdrawal, _>(&["withdrawals", id])
    }
}

#[derive(Serialize)]
struct RejectBody<'a> {
    reason: &'a str,
}

impl WithdrawalWriter for HttpRepository {
    fn approve_withdrawal(&self, id: &str) -> RepositoryResult<Withdrawal> {
        self.post::<models::withdrawal::Withdrawal, _, ()>(
            &["withdrawals", id_segment(id)?, "approve"],
            None,
        )
    }

    fn reject_withdrawal(&self, id: &str, reason: &str) -> RepositoryResult<Withdrawal> {
        self.post::<models::withdrawal::Withdrawal, _, _>(
            &["withdrawals", id_segment(id)?, "reject"],
            Some(&RejectBody { reason }),
        )
    }
}

impl BonusReader for HttpRepository {
    fn list_bonus_claims(&self) -> RepositoryResult<Vec<BonusClaim>> {
        self.fetch_list::<models::bonus::BonusClaim, _>(&["bonus", "claims"], &[])
    }

    // The backend has no single-claim endpoint.
    fn get_bonus_claim_by_id(&self, id: &str) -> RepositoryResult<Option<BonusClaim>> {
        Ok(self.list_bonus_claims()?.into_iter().find(|claim| claim.id == id))
    }

    fn list_bonus_unclaims(&self) -> RepositoryResult<Vec<BonusUnclaim>> {
        self.fetch_list::<models::bonus::BonusUnclaim, _>(&["bonus", "unclaims"], &[])
    }
}

impl SystemLogReader for HttpRepository {
    fn list_system_logs(&self) -> RepositoryResult<Vec<SystemLog>> {
        self.fetch_list::<models::system_log::SystemLog, _>(&["logs"], &[])
    }
}

impl AccountReader for HttpRepository {
    fn list_accounts(&self) -> RepositoryResult<Vec<Account>> {
        self.fetch_list::<models::account::Account, _>(&["accounts"], &[])
    }

    fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        let Ok(id) = id_segment(id) else {
            return Ok(None);
        };
        self.fetch_one::<models::account::Account, _>(&["accounts", id])
    }
}

impl AccountWriter for HttpRepository {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account> {
        self.post::<models::account::Account, _, _>(&["accounts"], Some(new_account))
    }

    fn delete_account(&self, id: &str) -> RepositoryResult<()> {
        self.delete(&["accounts", id_segment(id)?])
    }
}
