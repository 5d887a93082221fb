use anyhow::{Context, Result};

use crate::db::KeyValueStore;
use crate::models::Record;

/// The single key holding the whole record collection.
pub(crate) const STORAGE_KEY: &str = "ledger-records";

/// Read every stored record. Missing, unreadable or malformed data all yield an
/// empty collection; the caller never sees an error.
pub(crate) fn load(store: &dyn KeyValueStore) -> Vec<Record> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read stored records, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Record>>(&raw) {
        Ok(records) => {
            tracing::debug!(count = records.len(), "loaded records");
            records
        }
        Err(e) => {
            tracing::warn!(error = %e, "stored records are corrupt, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the stored collection with `records`.
pub(crate) fn save(store: &mut dyn KeyValueStore, records: &[Record]) -> Result<()> {
    let raw = serde_json::to_string(records).context("Failed to serialize records")?;
    store.set(STORAGE_KEY, &raw)?;
    tracing::debug!(count = records.len(), bytes = raw.len(), "saved records");
    Ok(())
}
