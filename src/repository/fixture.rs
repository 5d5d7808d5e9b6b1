//! In-memory data source seeded from bundled JSON.
//!
//! Used for local development and demos in place of the upstream backend.
//! The seed goes through the same wire models as real replies, so it also
//! doubles as a check on the normalization layer.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Local;
use serde::Deserialize;

use crate::domain::{
    account::{Account, NewAccount},
    agent::Agent,
    bonus::{BonusClaim, BonusUnclaim},
    merchant::{Merchant, NewMerchant},
    network::NetworkMember,
    system_log::SystemLog,
    transaction::Transaction,
    types::{RecordStatus, WithdrawalStatus},
    user::User,
    withdrawal::Withdrawal,
};
use crate::models;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AccountReader, AccountWriter, AgentReader, BonusReader, MerchantReader, MerchantWriter,
    SystemLogReader, TransactionReader, UserReader, WithdrawalReader, WithdrawalWriter,
};

const SEED: &str = include_str!("../../fixtures/seed.json");

/// Collections held by [`FixtureRepository`].
#[derive(Clone, Debug, Default)]
pub struct FixtureData {
    pub merchants: Vec<Merchant>,
    pub agents: Vec<Agent>,
    /// Downline of each agent, keyed by agent id.
    pub agent_networks: BTreeMap<String, Vec<NetworkMember>>,
    pub users: Vec<User>,
    pub transactions: Vec<Transaction>,
    pub withdrawals: Vec<Withdrawal>,
    pub bonus_claims: Vec<BonusClaim>,
    pub bonus_unclaims: Vec<BonusUnclaim>,
    pub system_logs: Vec<SystemLog>,
    pub accounts: Vec<Account>,
}

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    merchants: Vec<models::merchant::Merchant>,
    #[serde(default)]
    agents: Vec<models::agent::Agent>,
    #[serde(default)]
    agent_networks: BTreeMap<String, Vec<models::network::NetworkMember>>,
    #[serde(default)]
    users: Vec<models::user::User>,
    #[serde(default)]
    transactions: Vec<models::transaction::Transaction>,
    #[serde(default)]
    withdrawals: Vec<models::withdrawal::Withdrawal>,
    #[serde(default)]
    bonus_claims: Vec<models::bonus::BonusClaim>,
    #[serde(default)]
    bonus_unclaims: Vec<models::bonus::BonusUnclaim>,
    #[serde(default)]
    system_logs: Vec<models::system_log::SystemLog>,
    #[serde(default)]
    accounts: Vec<models::account::Account>,
}

fn convert<W, D>(records: Vec<W>) -> RepositoryResult<Vec<D>>
where
    D: TryFrom<W>,
    RepositoryError: From<D::Error>,
{
    records
        .into_iter()
        .map(|record| D::try_from(record).map_err(RepositoryError::from))
        .collect()
}

impl FixtureData {
    /// Parses a seed document shaped like `fixtures/seed.json`.
    pub fn from_json(json: &str) -> RepositoryResult<Self> {
        let seed: SeedFile = serde_json::from_str(json)?;
        Ok(Self {
            merchants: convert(seed.merchants)?,
            agents: convert(seed.agents)?,
            agent_networks: seed
                .agent_networks
                .into_iter()
                .map(|(agent_id, members)| {
                    convert(members).map(|members: Vec<NetworkMember>| (agent_id, members))
                })
                .collect::<RepositoryResult<_>>()?,
            users: convert(seed.users)?,
            transactions: convert(seed.transactions)?,
            withdrawals: convert(seed.withdrawals)?,
            bonus_claims: convert(seed.bonus_claims)?,
            bonus_unclaims: convert(seed.bonus_unclaims)?,
            system_logs: convert(seed.system_logs)?,
            accounts: convert(seed.accounts)?,
        })
    }
}

/// Next identifier after the largest numeric suffix among `ids`.
fn next_id<'a>(
    ids: impl Iterator<Item = &'a str>,
    prefix: &str,
    width: usize,
    first: u64,
) -> RepositoryResult<String> {
    let next = match ids
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
    {
        None => first,
        Some(max) => max.checked_add(1).ok_or_else(|| {
            RepositoryError::ConstraintViolation(format!("no identifier left after {prefix}{max}"))
        })?,
    };
    Ok(format!("{prefix}{next:0width$}"))
}

#[derive(Debug, Default)]
pub struct FixtureRepository {
    data: RwLock<FixtureData>,
}

impl FixtureRepository {
    pub fn new(data: FixtureData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }

    /// Repository preloaded with the bundled demo data.
    pub fn seeded() -> RepositoryResult<Self> {
        FixtureData::from_json(SEED).map(Self::new)
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, FixtureData>> {
        self.data
            .read()
            .map_err(|_| RepositoryError::Unexpected("fixture store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, FixtureData>> {
        self.data
            .write()
            .map_err(|_| RepositoryError::Unexpected("fixture store lock poisoned".to_string()))
    }

    fn decide_withdrawal(
        &self,
        id: &str,
        status: WithdrawalStatus,
        reason: Option<&str>,
    ) -> RepositoryResult<Withdrawal> {
        let mut data = self.write()?;
        let withdrawal = data
            .withdrawals
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(RepositoryError::NotFound)?;

        if !withdrawal.is_pending() {
            return Err(RepositoryError::ConstraintViolation(format!(
                "withdrawal {id} is already {}",
                withdrawal.status
            )));
        }

        withdrawal.status = status;
        withdrawal.reason = reason.map(str::to_string);
        Ok(withdrawal.clone())
    }
}

impl MerchantReader for FixtureRepository {
    fn list_merchants(&self) -> RepositoryResult<Vec<Merchant>> {
        Ok(self.read()?.merchants.clone())
    }

    fn get_merchant_by_id(&self, id: &str) -> RepositoryResult<Option<Merchant>> {
        Ok(self.read()?.merchants.iter().find(|m| m.id == id).cloned())
    }
}

impl MerchantWriter for FixtureRepository {
    fn create_merchant(&self, new_merchant: &NewMerchant) -> RepositoryResult<Merchant> {
        let mut data = self.write()?;

        if data
            .merchants
            .iter()
            .any(|m| m.name.eq_ignore_ascii_case(&new_merchant.name))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "merchant {} already exists",
                new_merchant.name
            )));
        }

        let merchant = Merchant {
            id: next_id(data.merchants.iter().map(|m| m.id.as_str()), "Mer", 5, 10001)?,
            name: new_merchant.name.clone(),
            business_type: new_merchant.business_type.clone(),
            state: new_merchant.state.clone(),
            joined_at: Local::now().naive_local(),
            status: RecordStatus::Active,
            tier: new_merchant.tier,
            ssm: Some(new_merchant.ssm.clone()),
            email: Some(new_merchant.email.clone()),
            wallet_address: Some(new_merchant.wallet_address.clone()),
        };
        data.merchants.push(merchant.clone());

        Ok(merchant)
    }

    fn delete_merchant(&self, id: &str) -> RepositoryResult<()> {
        let mut data = self.write()?;
        let before = data.merchants.len();
        data.merchants.retain(|m| m.id != id);
        if data.merchants.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl AgentReader for FixtureRepository {
    fn list_agents(&self) -> RepositoryResult<Vec<Agent>> {
        Ok(self.read()?.agents.clone())
    }

    fn get_agent_by_id(&self, id: &str) -> RepositoryResult<Option<Agent>> {
        Ok(self.read()?.agents.iter().find(|a| a.id == id).cloned())
    }

    fn list_agent_network(&self, agent_id: &str) -> RepositoryResult<Vec<NetworkMember>> {
        let data = self.read()?;
        if !data.agents.iter().any(|a| a.id == agent_id) {
            return Err(RepositoryError::NotFound);
        }
        Ok(data
            .agent_networks
            .get(agent_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl UserReader for FixtureRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    fn get_user_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }
}

impl TransactionReader for FixtureRepository {
    fn list_transactions(&self) -> RepositoryResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    fn get_transaction_by_id(&self, id: &str) -> RepositoryResult<Option<Transaction>> {
        Ok(self.read()?.transactions.iter().find(|t| t.id == id).cloned())
    }
}

impl WithdrawalReader for FixtureRepository {
    fn list_withdrawals(
        &self,
        status: Option<WithdrawalStatus>,
    ) -> RepositoryResult<Vec<Withdrawal>> {
        Ok(self
            .read()?
            .withdrawals
            .iter()
            .filter(|w| status.is_none_or(|status| w.status == status))
            .cloned()
            .collect())
    }

    fn get_withdrawal_by_id(&self, id: &str) -> RepositoryResult<Option<Withdrawal>> {
        Ok(self.read()?.withdrawals.iter().find(|w| w.id == id).cloned())
    }
}

impl WithdrawalWriter for FixtureRepository {
    fn approve_withdrawal(&self, id: &str) -> RepositoryResult<Withdrawal> {
        self.decide_withdrawal(id, WithdrawalStatus::Approved, None)
    }

    fn reject_withdrawal(&self, id: &str, reason: &str) -> RepositoryResult<Withdrawal> {
        self.decide_withdrawal(id, WithdrawalStatus::Rejected, Some(reason))
    }
}

impl BonusReader for FixtureRepository {
    fn list_bonus_claims(&self) -> RepositoryResult<Vec<BonusClaim>> {
        Ok(self.read()?.bonus_claims.clone())
    }

    fn get_bonus_claim_by_id(&self, id: &str) -> RepositoryResult<Option<BonusClaim>> {
        Ok(self.read()?.bonus_claims.iter().find(|c| c.id == id).cloned())
    }

    fn list_bonus_unclaims(&self) -> RepositoryResult<Vec<BonusUnclaim>> {
        Ok(self.read()?.bonus_unclaims.clone())
    }
}

impl SystemLogReader for FixtureRepository {
    fn list_system_logs(&self) -> RepositoryResult<Vec<SystemLog>> {
        Ok(self.read()?.system_logs.clone())
    }
}

impl AccountReader for FixtureRepository {
    fn list_accounts(&self) -> RepositoryResult<Vec<Account>> {
        Ok(self.read()?.accounts.clone())
    }

    fn get_account_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        Ok(self.read()?.accounts.iter().find(|a| a.id == id).cloned())
    }
}

impl AccountWriter for FixtureRepository {
    fn create_account(&self, new_account: &NewAccount) -> RepositoryResult<Account> {
        let mut data = self.write()?;

        if data
            .accounts
            .iter()
            .any(|a| a.username.eq_ignore_ascii_case(&new_account.username))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "username {} is taken",
                new_account.username
            )));
        }

        let account = Account {
            id: next_id(data.accounts.iter().map(|a| a.id.as_str()), "", 3, 1)?,
            username: new_account.username.clone(),
            email: Some(new_account.email.clone()),
            role: new_account.role.clone(),
            last_login: None,
            created_at: Local::now().naive_local(),
            status: RecordStatus::Active,
        };
        data.accounts.push(account.clone());

        Ok(account)
    }

    fn delete_account(&self, id: &str) -> RepositoryResult<()> {
        let mut data = self.write()?;
        let before = data.accounts.len();
        data.accounts.retain(|a| a.id != id);
        if data.accounts.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_follows_largest_suffix() {
        let ids = ["Mer12341", "Mer12367", "Mer12345", "other"];
        assert_eq!(next_id(ids.iter().copied(), "Mer", 5, 10001).unwrap(), "Mer12368");
        assert_eq!(next_id(std::iter::empty(), "Mer", 5, 10001).unwrap(), "Mer10001");
        assert_eq!(next_id(["001", "005"].iter().copied(), "", 3, 1).unwrap(), "006");
    }

    #[test]
    fn next_id_refuses_to_wrap() {
        let last = format!("Mer{}", u64::MAX);

        let result = next_id(std::iter::once(last.as_str()), "Mer", 5, 10001);

        assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    }

    #[test]
    fn bundled_seed_parses() {
        let data = FixtureData::from_json(SEED).expect("seed should parse");

        assert_eq!(data.merchants.len(), 24);
        assert_eq!(data.withdrawals.len(), 15);
        assert_eq!(data.system_logs.len(), 12);
        assert_eq!(data.bonus_unclaims.len(), 6);
        assert_eq!(data.agent_networks["T1234567890"].len(), 12);
        assert!(!data.accounts.is_empty());
    }

    #[test]
    fn invalid_seed_reports_validation_error() {
        let result = FixtureData::from_json(
            r#"{"merchants": [
                {"id": "m1", "name": "x", "type": "F&B", "join": "soon", "tier": "T1"}
            ]}"#,
        );

        assert!(matches!(result, Err(RepositoryError::ValidationError(_))));
    }
}
