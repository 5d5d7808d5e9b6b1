//! CSV export of list views.

use serde::Serialize;

use crate::services::{ServiceError, ServiceResult};

/// Serializes `records` to CSV with a header row taken from the first record.
///
/// An empty slice produces an empty document.
pub fn export_csv<T: Serialize>(records: &[T]) -> ServiceResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for record in records {
        writer.serialize(record).map_err(|err| {
            log::error!("Failed to write CSV row: {err}");
            ServiceError::Export(err.to_string())
        })?;
    }

    writer.into_inner().map_err(|err| {
        log::error!("Failed to finish CSV export: {err}");
        ServiceError::Export(err.to_string())
    })
}
