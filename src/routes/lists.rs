//! Read-only list endpoints.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, web};

use crate::dto::lists::{BonusListParams, ListQueryParams, NetworkListParams};
use crate::dto::logs::LogListParams;
use crate::repository::AdminRepository;
use crate::routes::{blocking, csv_response, respond};
use crate::services::{export, lists as lists_service, logs as logs_service};

#[get("/agents")]
pub async fn list_agents(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || lists_service::list_agents(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/agents/{id}")]
pub async fn show_agent(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || lists_service::get_agent(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/agents/{id}/network")]
pub async fn list_agent_network(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
    params: web::Query<NetworkListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();
    let params = params.into_inner();

    let result =
        blocking(move || lists_service::list_agent_network(repo.as_ref(), &id, &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/users")]
pub async fn list_users(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || lists_service::list_users(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/users/{id}")]
pub async fn show_user(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || lists_service::get_user(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/transactions")]
pub async fn list_transactions(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result =
        blocking(move || lists_service::list_transactions(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/transactions/export.csv")]
pub async fn export_transactions(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || {
        let transactions =
            lists_service::search_transactions(repo.as_ref(), params.search.as_deref())?;
        export::export_csv(&transactions)
    })
    .await;

    csv_response(result, "transactions.csv")
}

#[get("/transactions/{id}")]
pub async fn show_transaction(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || lists_service::get_transaction(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/bonuses")]
pub async fn list_bonuses(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<BonusListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result =
        blocking(move || lists_service::list_bonus_claims(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/bonuses/unclaims")]
pub async fn list_bonus_unclaims(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<BonusListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result =
        blocking(move || lists_service::list_bonus_unclaims(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/bonuses/{id}")]
pub async fn show_bonus(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || lists_service::get_bonus_claim(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/logs")]
pub async fn list_logs(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<LogListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || logs_service::list_system_logs(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}
