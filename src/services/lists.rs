//! Read-only views: agents and their networks, users, transactions and
//! bonuses.

use crate::domain::{
    agent::{AGENT_SEARCH_KEYS, Agent},
    bonus::{BONUS_SEARCH_KEYS, BONUS_UNCLAIM_SEARCH_KEYS, BonusClaim, BonusUnclaim},
    network::{NETWORK_SEARCH_KEYS, NetworkMember},
    transaction::{TRANSACTION_SEARCH_KEYS, Transaction},
    types::{BonusTier, NetworkLevel},
    user::{USER_SEARCH_KEYS, User},
};
use crate::dto::lists::{BonusListParams, ListPageData, ListQueryParams, NetworkListParams};
use crate::repository::{AgentReader, BonusReader, TransactionReader, UserReader};
use crate::services::{ServiceError, ServiceResult, list_page, parse_filter, require, search_all};

pub fn list_agents<R>(repo: &R, params: &ListQueryParams) -> ServiceResult<ListPageData<Agent>>
where
    R: AgentReader + ?Sized,
{
    let agents = repo.list_agents().map_err(|err| {
        log::error!("Failed to list agents: {err}");
        err
    })?;

    Ok(list_page(&agents, AGENT_SEARCH_KEYS, params))
}

pub fn get_agent<R>(repo: &R, id: &str) -> ServiceResult<Agent>
where
    R: AgentReader + ?Sized,
{
    require(repo.get_agent_by_id(id), "agent", id)
}

/// Loads an agent's network tab, applying the level tab before the search.
pub fn list_agent_network<R>(
    repo: &R,
    agent_id: &str,
    params: &NetworkListParams,
) -> ServiceResult<ListPageData<NetworkMember>>
where
    R: AgentReader + ?Sized,
{
    let level: Option<NetworkLevel> = parse_filter(params.level.as_deref(), "level")?;

    let members = repo.list_agent_network(agent_id).map_err(|err| {
        log::error!("Failed to load network of agent {agent_id}: {err}");
        ServiceError::from(err)
    })?;

    let members: Vec<NetworkMember> = members
        .into_iter()
        .filter(|member| level.is_none_or(|level| member.level == level))
        .collect();

    Ok(list_page(&members, NETWORK_SEARCH_KEYS, &params.list_params()))
}

pub fn list_users<R>(repo: &R, params: &ListQueryParams) -> ServiceResult<ListPageData<User>>
where
    R: UserReader + ?Sized,
{
    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to list users: {err}");
        err
    })?;

    Ok(list_page(&users, USER_SEARCH_KEYS, params))
}

pub fn get_user<R>(repo: &R, id: &str) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    require(repo.get_user_by_id(id), "user", id)
}

pub fn list_transactions<R>(
    repo: &R,
    params: &ListQueryParams,
) -> ServiceResult<ListPageData<Transaction>>
where
    R: TransactionReader + ?Sized,
{
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;

    Ok(list_page(&transactions, TRANSACTION_SEARCH_KEYS, params))
}

pub fn get_transaction<R>(repo: &R, id: &str) -> ServiceResult<Transaction>
where
    R: TransactionReader + ?Sized,
{
    require(repo.get_transaction_by_id(id), "transaction", id)
}

/// Transactions matching `search`, unpaged, for the CSV export.
pub fn search_transactions<R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<Transaction>>
where
    R: TransactionReader + ?Sized,
{
    let transactions = repo.list_transactions().map_err(|err| {
        log::error!("Failed to list transactions: {err}");
        err
    })?;

    Ok(search_all(&transactions, TRANSACTION_SEARCH_KEYS, search))
}

/// Loads the bonus claim tab, applying the tier tab before the search.
pub fn list_bonus_claims<R>(
    repo: &R,
    params: &BonusListParams,
) -> ServiceResult<ListPageData<BonusClaim>>
where
    R: BonusReader + ?Sized,
{
    let tier: Option<BonusTier> = parse_filter(params.tier.as_deref(), "tier")?;

    let claims = repo.list_bonus_claims().map_err(|err| {
        log::error!("Failed to list bonus claims: {err}");
        err
    })?;

    let claims: Vec<BonusClaim> = claims
        .into_iter()
        .filter(|claim| tier.is_none_or(|tier| claim.bonus_tier == Some(tier)))
        .collect();

    Ok(list_page(&claims, BONUS_SEARCH_KEYS, &params.list_params()))
}

pub fn get_bonus_claim<R>(repo: &R, id: &str) -> ServiceResult<BonusClaim>
where
    R: BonusReader + ?Sized,
{
    require(repo.get_bonus_claim_by_id(id), "bonus claim", id)
}

/// Loads the unclaimed bonus tab, applying the tier tab before the search.
pub fn list_bonus_unclaims<R>(
    repo: &R,
    params: &BonusListParams,
) -> ServiceResult<ListPageData<BonusUnclaim>>
where
    R: BonusReader + ?Sized,
{
    let tier: Option<BonusTier> = parse_filter(params.tier.as_deref(), "tier")?;

    let unclaims = repo.list_bonus_unclaims().map_err(|err| {
        log::error!("Failed to list unclaimed bonuses: {err}");
        err
    })?;

    let unclaims: Vec<BonusUnclaim> = unclaims
        .into_iter()
        .filter(|unclaim| tier.is_none_or(|tier| unclaim.bonus_tier == Some(tier)))
        .collect();

    Ok(list_page(&unclaims, BONUS_UNCLAIM_SEARCH_KEYS, &params.list_params()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::FixtureRepository;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn repo() -> FixtureRepository {
        FixtureRepository::seeded().expect("seed should load")
    }

    fn search(term: &str) -> ListQueryParams {
        ListQueryParams::new(Some(term), None)
    }

    #[test]
    fn active_matches_inactive_agents_too() {
        let all = list_agents(&repo(), &search("active")).unwrap();
        let inactive = list_agents(&repo(), &search("INACTIVE")).unwrap();

        assert_eq!(all.records.total_items, 5);
        assert_eq!(inactive.records.total_items, 1);
        assert_eq!(inactive.records.items[0].id, "T1234567893");
    }

    #[test]
    fn agent_bonus_is_searched_as_displayed() {
        let data = list_agents(&repo(), &search("10,000")).unwrap();

        assert_eq!(data.records.total_items, 1);
        assert_eq!(data.records.items[0].id, "T1234567890");
        assert!(list_agents(&repo(), &search("10000")).unwrap().records.items.is_empty());
    }

    #[test]
    fn users_list_without_search_keeps_order() {
        let data = list_users(&repo(), &ListQueryParams::default()).unwrap();

        let ids: Vec<&str> = data.records.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(
            ids,
            ["U1234567890", "U1234567891", "U1234567892", "U1234567893", "U1234567894"]
        );
        assert_eq!(data.records.total_pages, 1);
    }

    #[test]
    fn transactions_search_type_column() {
        let data = list_transactions(&repo(), &search("refund")).unwrap();

        assert_eq!(data.records.total_items, 1);
        assert_eq!(data.records.items[0].id, "T000004");
    }

    #[test]
    fn transaction_export_search_is_unpaged() {
        let found = search_transactions(&repo(), Some("payment")).unwrap();

        assert_eq!(found.len(), 4);
    }

    fn bonuses(tier: Option<&str>, term: Option<&str>) -> BonusListParams {
        BonusListParams {
            search: term.map(str::to_string),
            page: None,
            tier: tier.map(str::to_string),
        }
    }

    fn network(level: Option<&str>, term: Option<&str>) -> NetworkListParams {
        NetworkListParams {
            search: term.map(str::to_string),
            page: None,
            level: level.map(str::to_string),
        }
    }

    #[test]
    fn bonus_claims_search_status() {
        let data = list_bonus_claims(&repo(), &bonuses(None, Some("pending"))).unwrap();

        assert_eq!(data.records.total_items, 1);
        assert_eq!(data.records.items[0].id, "tx-m3n4o5p6");
    }

    #[test]
    fn bonus_claims_filter_by_tier_before_search() {
        let system = list_bonus_claims(&repo(), &bonuses(Some("system"), None)).unwrap();
        let partner_pending =
            list_bonus_claims(&repo(), &bonuses(Some("Partner"), Some("pending"))).unwrap();

        assert_eq!(system.records.total_items, 2);
        assert_eq!(partner_pending.records.total_items, 0);
    }

    #[test]
    fn bonus_claim_detail() {
        let claim = get_bonus_claim(&repo(), "tx-e5f6g7h8").unwrap();

        assert_eq!(claim.bonus_tier, Some(BonusTier::Partner));
        assert!(matches!(
            get_bonus_claim(&repo(), "tx-missing"),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn unclaims_filter_by_tier_and_search_id() {
        let system = list_bonus_unclaims(&repo(), &bonuses(Some("System"), None)).unwrap();
        let ids: Vec<&str> = system.records.items.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["U000001", "U000004"]);

        let found = list_bonus_unclaims(&repo(), &bonuses(None, Some("u000005"))).unwrap();
        assert_eq!(found.records.total_items, 1);
        assert_eq!(found.records.items[0].bonus_tier, Some(BonusTier::Merchant));
    }

    #[test]
    fn unclaims_reject_unknown_tier() {
        let result = list_bonus_unclaims(&repo(), &bonuses(Some("gold"), None));

        assert!(matches!(
            result,
            Err(ServiceError::Form(message)) if message == "invalid tier: gold"
        ));
    }

    #[test]
    fn network_filters_level_before_search() {
        let level1 = list_agent_network(&repo(), "T1234567890", &network(Some("level1"), None))
            .unwrap();
        let level2 = list_agent_network(&repo(), "T1234567890", &network(Some("level2"), None))
            .unwrap();
        let all = list_agent_network(&repo(), "T1234567890", &network(None, None)).unwrap();

        assert_eq!(level1.records.total_items, 6);
        assert_eq!(level2.records.total_items, 6);
        assert_eq!(all.records.total_items, 12);
        assert_eq!(all.records.total_pages, 2);
    }

    #[test]
    fn network_search_covers_referrer_and_status() {
        let referred = list_agent_network(
            &repo(),
            "T1234567890",
            &network(Some("level2"), Some("A000001")),
        )
        .unwrap();
        let suspended =
            list_agent_network(&repo(), "T1234567890", &network(None, Some("suspended")))
                .unwrap();

        let ids: Vec<&str> = referred.records.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["A000007", "A000009"]);
        assert_eq!(suspended.records.items[0].id, "A000012");
    }

    #[test]
    fn network_of_unknown_agent_is_not_found() {
        let result = list_agent_network(&repo(), "T0000000000", &network(None, None));

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn agent_without_network_has_empty_list() {
        let data = list_agent_network(&repo(), "T1234567891", &network(None, None)).unwrap();

        assert!(data.records.items.is_empty());
        assert_eq!(data.records.page, 1);
    }

    #[test]
    fn detail_lookups() {
        assert_eq!(get_agent(&repo(), "T1234567893").unwrap().id, "T1234567893");
        assert_eq!(get_user(&repo(), "U1234567892").unwrap().id, "U1234567892");
        assert_eq!(get_transaction(&repo(), "T000004").unwrap().kind, "Refund");
        assert!(matches!(get_user(&repo(), "U0"), Err(ServiceError::NotFound)));
    }

    #[test]
    fn repository_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_list_users()
            .returning(|| Err(RepositoryError::ConnectionError("timed out".to_string())));

        let result = list_users(&repo, &ListQueryParams::default());

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::ConnectionError(_)))
        ));
    }
}
