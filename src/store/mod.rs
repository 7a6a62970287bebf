// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Entity store abstraction
//!
//! Handlers read and write entities through the [`EntityStore`] trait. The
//! host supplies the implementation (a database, an RPC-backed store, …);
//! [`MemoryStore`] is provided for tests and for hosts that only need an
//! in-process index.
//!
//! Writes are grouped: a handler stages everything it wants to persist in a
//! [`Session`] and commits the resulting [`WriteBatch`] once. A store must
//! apply a batch atomically, so a handler either records an event completely
//! or not at all.
//!
//! # Examples
//!
//! ```rust,ignore
//! use subledger::store::{EntityStoreExt, MemoryStore};
//! use subledger::Account;
//!
//! let store = MemoryStore::new();
//! store.save(account).await?;
//! let loaded: Option<Account> = store.get("5grwva…").await?;
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::entities::{Entity, EntityKind, Record};
use crate::errors::StoreError;

mod batch;
mod memory;
mod session;

pub use batch::WriteBatch;
pub use memory::MemoryStore;
pub use session::Session;

/// Key a record is stored under
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKey {
    pub(crate) kind: EntityKind,
    pub(crate) id: String,
}

impl EntityKey {
    /// Creates a key for an entity kind and id
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Creates a key for entity type `E`
    pub fn of<E: Entity>(id: impl Into<String>) -> Self {
        Self::new(E::KIND, id)
    }

    /// Key of an existing record
    pub fn for_record(record: &Record) -> Self {
        Self::new(record.kind(), record.id())
    }

    /// Entity kind part of the key
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Id part of the key
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Statistics about store usage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of lookups that found a record
    pub hits: u64,
    /// Number of lookups that found nothing
    pub misses: u64,
    /// Records written under a key that did not exist yet
    pub inserts: u64,
    /// Records written over an existing record
    pub updates: u64,
    /// Batches applied
    pub commits: u64,
    /// Current number of records
    pub entries: usize,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, inserts={}, updates={}, commits={}, entries={}",
            self.hits, self.misses, self.inserts, self.updates, self.commits, self.entries
        )
    }
}

/// Trait for entity store backends
///
/// # Thread Safety
///
/// Implementations must be thread-safe; the host may share one store between
/// tasks. Use interior mutability (e.g. `Mutex`) as needed.
///
/// # Consistency
///
/// A record committed by one call must be visible to every later
/// [`get_record`](EntityStore::get_record). Handlers rely on this to find
/// accounts created by earlier events.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Retrieves the record stored under `key`, if any
    async fn get_record(&self, key: &EntityKey) -> Result<Option<Record>, StoreError>;

    /// Applies every write in `batch`, or none of them
    ///
    /// Later writes in the batch replace earlier writes of the same key.
    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError>;

    /// Returns current store statistics
    async fn stats(&self) -> StoreStats;

    /// Returns a human-readable name for this backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}

/// Typed `get`/`save` on top of any [`EntityStore`]
pub trait EntityStoreExt: EntityStore {
    /// Loads the entity of type `E` stored under `id`
    ///
    /// Fails with [`StoreError::KindMismatch`] if the backend hands back a
    /// record of another kind.
    fn get<E: Entity>(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<E>, StoreError>> + Send {
        async move {
            let key = EntityKey::of::<E>(id);
            match self.get_record(&key).await? {
                None => Ok(None),
                Some(record) => E::from_record(record).map(Some).map_err(|found| {
                    StoreError::KindMismatch {
                        id: id.to_string(),
                        expected: E::KIND,
                        found: found.kind(),
                    }
                }),
            }
        }
    }

    /// Persists a single entity
    fn save<E: Entity>(&self, entity: E) -> impl Future<Output = Result<(), StoreError>> + Send {
        async move {
            let mut batch = WriteBatch::new();
            batch.put(entity);
            self.commit(batch).await
        }
    }
}

impl<S: EntityStore + ?Sized> EntityStoreExt for S {}

/// Lets a host share one store between handler sets and its own readers
#[async_trait]
impl<T: EntityStore + ?Sized> EntityStore for Arc<T> {
    async fn get_record(&self, key: &EntityKey) -> Result<Option<Record>, StoreError> {
        (**self).get_record(key).await
    }

    async fn commit(&self, batch: WriteBatch) -> Result<(), StoreError> {
        (**self).commit(batch).await
    }

    async fn stats(&self) -> StoreStats {
        (**self).stats().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
