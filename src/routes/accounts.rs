use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, web};

use crate::dto::api::Deleted;
use crate::dto::lists::ListQueryParams;
use crate::forms::accounts::AddAccountForm;
use crate::notify::BufferedNotifier;
use crate::repository::AdminRepository;
use crate::routes::{blocking, respond};
use crate::services::accounts as accounts_service;

#[get("/accounts")]
pub async fn list_accounts(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<ListQueryParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || accounts_service::list_accounts(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/accounts/{id}")]
pub async fn show_account(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || accounts_service::get_account(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[post("/accounts")]
pub async fn add_account(
    repo: web::Data<dyn AdminRepository>,
    web::Json(form): web::Json<AddAccountForm>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        accounts_service::add_account(repo.as_ref(), form, task_notifier.as_ref())
    })
    .await;

    respond(StatusCode::CREATED, result, notifier.take())
}

#[delete("/accounts/{id}")]
pub async fn delete_account(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        accounts_service::delete_account(repo.as_ref(), &id, task_notifier.as_ref())
            .map(|()| Deleted { id })
    })
    .await;

    respond(StatusCode::OK, result, notifier.take())
}
