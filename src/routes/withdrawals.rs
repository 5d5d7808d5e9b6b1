use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, get, post, web};

use crate::dto::lists::ListQueryParams;
use crate::dto::withdrawals::WithdrawalHistoryParams;
use crate::forms::withdrawals::RejectWithdrawalForm;
use crate::notify::BufferedNotifier;
use crate::repository::AdminRepository;
use crate::routes::{blocking, respond};
use crate::services::withdrawals as withdrawals_service;

#[get("/withdrawals")]
pub async fn list_applications(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result =
        blocking(move || withdrawals_service::list_applications(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/withdrawals/history")]
pub async fn list_history(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<WithdrawalHistoryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || withdrawals_service::list_history(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/withdrawals/{id}")]
pub async fn show_withdrawal(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || withdrawals_service::get_withdrawal(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[post("/withdrawals/{id}/approve")]
pub async fn approve_withdrawal(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        withdrawals_service::approve_withdrawal(repo.as_ref(), &id, task_notifier.as_ref())
    })
    .await;

    respond(StatusCode::OK, result, notifier.take())
}

#[post("/withdrawals/{id}/reject")]
pub async fn reject_withdrawal(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
    web::Json(form): web::Json<RejectWithdrawalForm>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        withdrawals_service::reject_withdrawal(repo.as_ref(), &id, form, task_notifier.as_ref())
    })
    .await;

    respond(StatusCode::OK, result, notifier.take())
}
