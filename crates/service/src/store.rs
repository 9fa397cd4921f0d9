use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::{ConfigStatus, Configuration, ConfigurationInput};
use crate::errors::ServiceError;

/// In-memory configuration store. Process-lifetime state, no persistence.
///
/// One lock guards both the id counter and the record map, so concurrent
/// creates can never hand out the same id and readers never observe a
/// half-applied update. Ids are monotonic and never reused, which also
/// makes `BTreeMap` iteration order equal insertion order.
#[derive(Clone, Default)]
pub struct ConfigStore {
    inner: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    next_id: u32,
    items: BTreeMap<u32, Configuration>,
}

impl StoreState {
    fn insert(&mut self, content: String, status: ConfigStatus) -> Configuration {
        self.next_id += 1;
        let rec = Configuration { id: self.next_id, content, status };
        self.items.insert(rec.id, rec.clone());
        rec
    }
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the two fixture records every fresh deployment starts with.
    /// Called once from startup; not part of the request path.
    pub async fn seed(&self) {
        let mut state = self.inner.write().await;
        state.insert("Some Content".to_string(), ConfigStatus::Active);
        state.insert("Some More Content".to_string(), ConfigStatus::Inactive);
        info!(count = state.items.len(), "seeded default configurations");
    }

    /// List all records in id order.
    pub async fn list(&self) -> Vec<Configuration> {
        let state = self.inner.read().await;
        state.items.values().cloned().collect()
    }

    pub async fn get(&self, id: u32) -> Option<Configuration> {
        let state = self.inner.read().await;
        state.items.get(&id).cloned()
    }

    /// Create a new record. A rejected input never consumes an id.
    pub async fn create(&self, input: ConfigurationInput) -> Result<Configuration, ServiceError> {
        let content = input.validate()?;
        let mut state = self.inner.write().await;
        Ok(state.insert(content, input.status))
    }

    /// Replace content and status of an existing record, id preserved.
    /// Existence is checked before the payload, so a missing id wins over
    /// a content defect when both apply.
    pub async fn update(&self, id: u32, input: ConfigurationInput) -> Result<Configuration, ServiceError> {
        let mut state = self.inner.write().await;
        let existing = match state.items.get_mut(&id) {
            Some(rec) => rec,
            None => return Err(ServiceError::not_found("configuration")),
        };
        let content = input.validate()?;
        existing.content = content;
        existing.status = input.status;
        Ok(existing.clone())
    }

    /// Remove a record; deleting an absent id is a no-op returning false.
    pub async fn delete(&self, id: u32) -> bool {
        let mut state = self.inner.write().await;
        state.items.remove(&id).is_some()
    }
}
