use anyhow::Result;
use std::collections::HashMap;

use super::KeyValueStore;

/// Volatile store: nothing survives the process.
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
