use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, web};

use crate::dto::api::Deleted;
use crate::dto::merchants::MerchantListParams;
use crate::forms::merchants::AddMerchantForm;
use crate::notify::BufferedNotifier;
use crate::repository::AdminRepository;
use crate::routes::{blocking, csv_response, respond};
use crate::services::{export, merchants as merchants_service};

#[get("/merchants")]
pub async fn list_merchants(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<MerchantListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || merchants_service::list_merchants(repo.as_ref(), &params)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[get("/merchants/export.csv")]
pub async fn export_merchants(
    repo: web::Data<dyn AdminRepository>,
    params: web::Query<MerchantListParams>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let params = params.into_inner();

    let result = blocking(move || {
        let merchants = merchants_service::search_merchants(repo.as_ref(), &params)?;
        export::export_csv(&merchants)
    })
    .await;

    csv_response(result, "merchants.csv")
}

#[get("/merchants/{id}")]
pub async fn show_merchant(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();

    let result = blocking(move || merchants_service::get_merchant(repo.as_ref(), &id)).await;

    respond(StatusCode::OK, result, Vec::new())
}

#[post("/merchants")]
pub async fn add_merchant(
    repo: web::Data<dyn AdminRepository>,
    web::Json(form): web::Json<AddMerchantForm>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        merchants_service::add_merchant(repo.as_ref(), form, task_notifier.as_ref())
    })
    .await;

    respond(StatusCode::CREATED, result, notifier.take())
}

#[delete("/merchants/{id}")]
pub async fn delete_merchant(
    repo: web::Data<dyn AdminRepository>,
    id: web::Path<String>,
) -> HttpResponse {
    let repo = repo.into_inner();
    let id = id.into_inner();
    let notifier = Arc::new(BufferedNotifier::new());
    let task_notifier = Arc::clone(&notifier);

    let result = blocking(move || {
        merchants_service::delete_merchant(repo.as_ref(), &id, task_notifier.as_ref())
            .map(|()| Deleted { id })
    })
    .await;

    respond(StatusCode::OK, result, notifier.take())
}
