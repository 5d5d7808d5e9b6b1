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
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod fixture;
#[cfg(feature = "server")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use fixture::FixtureRepository;
#[cfg(feature = "server")]
pub use http::HttpRepository;

// Readers return whole collections; searching and paging happen in memory.

pub trait MerchantReader {
    fn list_merchants(&self) -> RepositoryResult<Vec<Merchant>>;
    fn get_merchant_by_id(&self, id: &str) -> RepositoryResult<Option<Merchant>>;
}

pub trait MerchantWriter {
    fn create_merchant(&self, new_merchant: &NewMerchant) -> RepositoryResult<Merchant>;
    fn delete_merchant(&self, id: &str) -> RepositoryResult<()>;
}

pub trait AgentReader {
    fn list_agents(&self) -> RepositoryResult<Vec<Agent>>;
    fn get_agent_by_id(&self, id: &str) -> RepositoryResult<Option<Agent>>;
    /// Level 1 and level 2 members below `agent_id`; `NotFound` for an
    /// unknown agent.
    fn list_agent_network(&self, agent_id: &str) -> RepositoryResult<Vec<NetworkMember>>;
}

pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
    fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
}

pub trait TransactionReader {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
    fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>>;
}

pub trait WithdrawalReader {
    /// Withdrawals in `status`, or all of them when `None`.
    fn list_withdrawals(
        &self,
        status: Option<WithdrawalStatus>,
    ) -> RepositoryResult<Vec<Withdrawal>>;
    fn get_withdrawal_by_id(&self, id: &str) -> RepositoryResult<Option<Withdrawal>>;
}

pub trait WithdrawalWriter {
    fn approve_withdrawal(&self, id: &str) -> RepositoryResult<Withdrawal>;
    fn reject_withdrawal(&self, id: &str, reason: &str) -> RepositoryResult<Withdrawal>;
}

pub trait BonusReader {
    fn list_bonus_claims(&self) -> RepositoryResult<Vec<BonusClaim>>;
    fn get_bonus_claim_by_id(&self, id: &str) -> RepositoryResult<Option<BonusClaim>>;
    fn list_bonus_unclaims(&self) -> RepositoryResult<Vec<BonusUnclaim>>;
}

pub trait SystemLogReader {
    fn list_system_logs(&self) -> RepositoryResult<Vec<SystemLog>>;
}

pub trait AccountReader {
    fn list_accounts(&self) -> RepositoryResult<Vec<Account>>;
    fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>>;
}

pub trait AccountWriter {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
    fn delete_account(&self, id: &str) -> RepositoryResult<()>;
}

/// Everything the dashboard needs from a data source.
///
/// Implemented for any type providing all readers and writers, so handlers
/// can share one `Arc<dyn AdminRepository>` picked at startup.
pub trait AdminRepository:
    MerchantReader
    + MerchantWriter
    + AgentReader
    + UserReader
    + TransactionReader
    + WithdrawalReader
    + WithdrawalWriter
    + BonusReader
    + SystemLogReader
    + AccountReader
    + AccountWriter
    + Send
    + Sync
{
}

impl<T> AdminRepository for T where
    T: MerchantReader
        + MerchantWriter
        + AgentReader
        + UserReader
        + TransactionReader
        + WithdrawalReader
        + WithdrawalWriter
        + BonusReader
        + SystemLogReader
        + AccountReader
        + AccountWriter
        + Send
        + Sync
{
}
