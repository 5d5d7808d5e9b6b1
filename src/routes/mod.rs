//! JSON API handlers.
//!
//! Services are synchronous, so every handler hands its work to
//! `web::block` together with a shared handle to the repository.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, error, web};
use serde::Serialize;

use crate::dto::api::{ApiResponse, ErrorBody};
use crate::notify::Notification;
use crate::repository::errors::RepositoryError;
use crate::services::{ServiceError, ServiceResult};

pub mod accounts;
pub mod lists;
pub mod merchants;
pub mod withdrawals;

/// Registers every dashboard endpoint under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .app_data(query_config())
            // Static paths must precede their `{id}` siblings.
            .service(merchants::export_merchants)
            .service(merchants::list_merchants)
            .service(merchants::show_merchant)
            .service(merchants::add_merchant)
            .service(merchants::delete_merchant)
            .service(lists::list_agents)
            .service(lists::show_agent)
            .service(lists::list_agent_network)
            .service(lists::list_users)
            .service(lists::show_user)
            .service(lists::export_transactions)
            .service(lists::list_transactions)
            .service(lists::show_transaction)
            .service(lists::list_bonus_unclaims)
            .service(lists::list_bonuses)
            .service(lists::show_bonus)
            .service(lists::list_logs)
            .service(withdrawals::list_history)
            .service(withdrawals::list_applications)
            .service(withdrawals::show_withdrawal)
            .service(withdrawals::approve_withdrawal)
            .service(withdrawals::reject_withdrawal)
            .service(accounts::list_accounts)
            .service(accounts::show_account)
            .service(accounts::add_account)
            .service(accounts::delete_account),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(err, bad_request(message)).into()
    })
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse {
        body: ErrorBody { message },
        alerts: Vec::new(),
    })
}

/// Runs a service call on the blocking thread pool.
pub(crate) async fn blocking<T, F>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f).await.map_err(|err| {
        ServiceError::Repository(RepositoryError::Unexpected(format!(
            "blocking task failed: {err}"
        )))
    })?
}

/// Maps a service failure onto an HTTP status with a `{message, alerts}` body.
pub(crate) fn error_response(err: ServiceError, alerts: Vec<Notification>) -> HttpResponse {
    let (status, message) = match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
        ServiceError::Form(message) | ServiceError::TypeConstraint(message) => {
            (StatusCode::BAD_REQUEST, message)
        }
        ServiceError::Conflict(message) => (StatusCode::CONFLICT, message),
        err @ (ServiceError::Repository(_) | ServiceError::Export(_)) => {
            log::error!("Request failed: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Operation failed. Please try again.".to_string(),
            )
        }
    };

    HttpResponse::build(status).json(ApiResponse {
        body: ErrorBody { message },
        alerts,
    })
}

pub(crate) fn respond<T: Serialize>(
    status: StatusCode,
    result: ServiceResult<T>,
    alerts: Vec<Notification>,
) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::build(status).json(ApiResponse { body, alerts }),
        Err(err) => error_response(err, alerts),
    }
}

pub(crate) fn csv_response(result: ServiceResult<Vec<u8>>, filename: &str) -> HttpResponse {
    match result {
        Ok(bytes) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ))
            .body(bytes),
        Err(err) => error_response(err, Vec::new()),
    }
}
