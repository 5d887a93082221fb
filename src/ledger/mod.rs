mod persist;
mod summary;

use anyhow::Result;
use rand::Rng;

use crate::db::KeyValueStore;
use crate::models::{Filter, Record, RecordInput};

pub(crate) use persist::{load, save, STORAGE_KEY};
pub(crate) use summary::{summarize, Summary};

/// The record collection and the store it is written through to.
///
/// Records are kept newest-first. Every mutation rewrites the whole collection
/// before returning, and a failed write undoes the change in memory.
pub(crate) struct Ledger {
    records: Vec<Record>,
    store: Box<dyn KeyValueStore>,
}

impl Ledger {
    pub(crate) fn open(store: Box<dyn KeyValueStore>) -> Self {
        let records = load(store.as_ref());
        tracing::info!(key = STORAGE_KEY, count = records.len(), "ledger opened");
        Self { records, store }
    }

    pub(crate) fn add(&mut self, input: RecordInput) -> Result<Record> {
        let id = self.fresh_id();
        let record = input.into_record(id);
        self.records.insert(0, record.clone());
        if let Err(e) = self.persist() {
            self.records.remove(0);
            return Err(e);
        }
        tracing::info!(
            id = %record.id,
            kind = record.kind.as_str(),
            amount = %record.amount,
            category = %record.category,
            "record added"
        );
        Ok(record)
    }

    /// Remove the record with `id`. Returns whether anything was removed;
    /// an unknown id is not an error.
    pub(crate) fn delete(&mut self, id: &str) -> Result<bool> {
        let previous = self.records.clone();
        self.records.retain(|r| r.id != id);
        let removed = self.records.len() != previous.len();
        if let Err(e) = self.persist() {
            self.records = previous;
            return Err(e);
        }
        if removed {
            tracing::info!(id, "record deleted");
        } else {
            tracing::debug!(id, "delete of unknown id ignored");
        }
        Ok(removed)
    }

    pub(crate) fn all(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn filtered(&self, filter: Filter) -> Vec<&Record> {
        self.records.iter().filter(|r| filter.matches(r)).collect()
    }

    pub(crate) fn get(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        save(self.store.as_mut(), &self.records)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `id_<unix millis>_<7 base36 chars>`.
pub(crate) fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("id_{}_{suffix}", chrono::Utc::now().timestamp_millis())
}
