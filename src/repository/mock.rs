//! Mock repository implementations for isolating services in tests.

use mockall::mock;

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
use crate::repository::{
    AccountReader, AccountWriter, AgentReader, BonusReader, MerchantReader, MerchantWriter,
    SystemLogReader, TransactionReader, UserReader, WithdrawalReader, WithdrawalWriter,
};

mock! {
    pub Repository {}

    impl MerchantReader for Repository {
        fn list_merchants(&self) -> RepositoryResult<Vec<Merchant>>;
        fn get_merchant_by_id(&self, id: &str) -> RepositoryResult<Option<Merchant>>;
    }

    impl MerchantWriter for Repository {
        fn create_merchant(&self, new_merchant: &NewMerchant) -> RepositoryResult<Merchant>;
        fn delete_merchant(&self, id: &str) -> RepositoryResult<()>;
    }

    impl AgentReader for Repository {
        fn list_agents(&self) -> RepositoryResult<Vec<Agent>>;
        fn get_agent_by_id(&self, id: &str) -> RepositoryResult<Option<Agent>>;
        fn list_agent_network(&self, agent_id: &str) -> RepositoryResult<Vec<NetworkMember>>;
    }

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
        fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
    }

    impl TransactionReader for Repository {
        fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>>;
        fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>>;
    }

    impl WithdrawalReader for Repository {
        fn list_withdrawals(
            &self,
            status: Option<WithdrawalStatus>,
        ) -> RepositoryResult<Vec<Withdrawal>>;
        fn get_withdrawal_by_id(&self, id: &str) -> RepositoryResult<Option<Withdrawal>>;
    }

    impl WithdrawalWriter for Repository {
        fn approve_withdrawal(&self, id: &str) -> RepositoryResult<Withdrawal>;
        fn reject_withdrawal(&self, id: &str, reason: &str) -> RepositoryResult<Withdrawal>;
    }

    impl BonusReader for Repository {
        fn list_bonus_claims(&self) -> RepositoryResult<Vec<BonusClaim>>;
        fn get_bonus_claim_by_id(&self, id: &str) -> RepositoryResult<Option<BonusClaim>>;
        fn list_bonus_unclaims(&self) -> RepositoryResult<Vec<BonusUnclaim>>;
    }

    impl SystemLogReader for Repository {
        fn list_system_logs(&self) -> RepositoryResult<Vec<SystemLog>>;
    }

    impl AccountReader for Repository {
        fn list_accounts(&self) -> RepositoryResult<Vec<Account>>;
        fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>>;
    }

    impl AccountWriter for Repository {
        fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account>;
        fn delete_account(&self, id: &str) -> RepositoryResult<()>;
    }
}
