// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory entity store

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use super::{EntityKey, EntityStore, StoreStats, WriteBatch};
use crate::entities::{Entity, EntityKind, Record};
use crate::errors::StoreError;

/// Internal state for memory store
#[derive(Debug, Default)]
struct MemoryStoreState {
    records: HashMap<EntityKey, Record>,
    stats: StoreStats,
}

/// In-memory entity store
///
/// Holds every record in a `HashMap` behind a single async mutex. A batch is
/// applied while holding the lock, so commits are atomic and readers never
/// observe half of one.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use subledger::store::MemoryStore;
/// use subledger::{EntityKind, MappingHandlers};
///
/// let store = Arc::new(MemoryStore::new());
/// let handlers = MappingHandlers::new(Arc::clone(&store));
/// handlers.handle_event(&event).await?;
///
/// assert_eq!(store.count(EntityKind::Transfer).await, 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryStoreState>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records of one kind
    pub async fn count(&self, kind: EntityKind) -> usize {
        let state = self.state.lock().await;
        state.records.keys().filter(|k| k.kind == kind).count()
    }

    /// All entities of type `E`, sorted by id
    pub async fn all<E: Entity>(&self) -> Vec<E> {
        let state = self.state.lock().await;
        let mut entries: Vec<(&EntityKey, &Record)> = state
            .records
            .iter()
            .filter(|(k, _)| k.kind == E::KIND)
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .filter_map(|(_, record)| E::from_record(record.clone()).ok())
            .collect()
    }

    /// Removes every record
    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        debug!(entries = state.records.len(), "Clearing memory store");
        state.records.clear();
        state.stats.entries = 0;
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn get_record(&self, key: &EntityKey) -> Result<Option<Record>, StoreError> {
        let mut state = self.state.lock().await;
        let result = state.records.get(key).cloned();

        if result.is_some() {
            state.stats.hits += 1;
            trace!(key = %key, "Store hit (memory)");
        } else {
            state.stats.misses += 1;
            trace!(key = %key, "Store miss (memory)");
        }

        Ok(result)
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;

        for record in batch {
            let key = EntityKey::for_record(&record);
            trace!(key = %key, "Writing record to memory store");
            if state.records.insert(key, record).is_some() {
                state.stats.updates += 1;
            } else {
                state.stats.inserts += 1;
            }
        }

        state.stats.commits += 1;
        state.stats.entries = state.records.len();
        Ok(())
    }

    async fn stats(&self) -> StoreStats {
        let state = self.state.lock().await;
        state.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryStore"
    }
}
