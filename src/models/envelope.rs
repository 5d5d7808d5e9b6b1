//! The `{success, data, message, meta}` wrapper around every backend reply.

use serde::Deserialize;

use crate::repository::errors::{RepositoryError, RepositoryResult};

fn default_success() -> bool {
    true
}

/// Pagination hints the backend attaches to list replies.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiMeta {
    #[serde(default)]
    pub total: Option<usize>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default, alias = "total_pages")]
    pub total_pages: Option<usize>,
}

impl ApiMeta {
    /// The page to request after this one, when the backend reports more.
    pub fn next_page(&self) -> Option<usize> {
        let page = self.page?;
        let total_pages = self.total_pages?;
        (page < total_pages).then(|| page + 1)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Replies that omit the flag are treated as successful.
    #[serde(default = "default_success", alias = "Success")]
    pub success: bool,
    #[serde(alias = "Data")]
    pub data: Option<T>,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub meta: Option<ApiMeta>,
}

impl<T> ApiEnvelope<T> {
    /// Best human-readable explanation carried by the envelope.
    pub fn reason(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.trim().is_empty())
    }

    /// Turns `success: false` into a backend error.
    pub fn check(&self) -> RepositoryResult<()> {
        if self.success {
            return Ok(());
        }
        let message = self
            .reason()
            .unwrap_or("Operation failed. Please try again.")
            .to_string();
        Err(RepositoryError::Backend(message))
    }

    /// Unwraps `data` of a successful reply.
    pub fn into_data(self) -> RepositoryResult<T> {
        self.check()?;
        self.data
            .ok_or_else(|| RepositoryError::ValidationError("response has no data".to_string()))
    }
}

/// Extracts the error text from a non-2xx reply body.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ApiEnvelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.reason().map(str::to_string))
        .unwrap_or_else(|| format!("Error {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_list_reply_with_meta() {
        let envelope: ApiEnvelope<Vec<serde_json::Value>> = serde_json::from_str(
            r#"{
                "success": true,
                "data": [{"id": "m1"}],
                "meta": {"total": 100, "page": 1, "limit": 10, "totalPages": 10}
            }"#,
        )
        .unwrap();

        assert_eq!(envelope.meta.as_ref().and_then(ApiMeta::next_page), Some(2));
        assert_eq!(envelope.into_data().unwrap().len(), 1);
    }

    #[test]
    fn meta_stops_at_last_page() {
        let last = ApiMeta {
            page: Some(3),
            total_pages: Some(3),
            ..ApiMeta::default()
        };
        let partial = ApiMeta {
            total: Some(30),
            ..ApiMeta::default()
        };

        assert_eq!(last.next_page(), None);
        assert_eq!(partial.next_page(), None);
    }

    #[test]
    fn missing_success_flag_counts_as_success() {
        let envelope: ApiEnvelope<Vec<u8>> =
            serde_json::from_str(r#"{"data": [1, 2]}"#).unwrap();

        assert_eq!(envelope.into_data().unwrap(), vec![1, 2]);
    }

    #[test]
    fn failed_reply_becomes_backend_error() {
        let envelope: ApiEnvelope<Vec<u8>> =
            serde_json::from_str(r#"{"success": false, "error": "Merchant exists"}"#).unwrap();

        match envelope.into_data() {
            Err(RepositoryError::Backend(message)) => assert_eq!(message, "Merchant exists"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn acknowledgement_without_data_passes_check() {
        let envelope: ApiEnvelope<serde_json::Value> =
            serde_json::from_str(r#"{"success": true, "message": "Deleted"}"#).unwrap();

        assert!(envelope.check().is_ok());
    }

    #[test]
    fn successful_reply_without_data_is_rejected() {
        let envelope: ApiEnvelope<Vec<u8>> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(matches!(
            envelope.into_data(),
            Err(RepositoryError::ValidationError(_))
        ));
    }

    #[test]
    fn error_message_prefers_body_text() {
        assert_eq!(error_message(400, r#"{"message": "Bad wallet"}"#), "Bad wallet");
        assert_eq!(error_message(401, r#"{"error": "Token expired"}"#), "Token expired");
        assert_eq!(error_message(502, "<html>"), "Error 502");
    }
}
