//! Response wrappers exposed by the JSON API.

use serde::Serialize;

use crate::notify::Notification;

/// A response body together with the notifications raised while producing it.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(flatten)]
    pub body: T,
    pub alerts: Vec<Notification>,
}

/// Body returned after a record was removed.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub id: String,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}
