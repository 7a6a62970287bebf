// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-invocation unit of work

use tracing::debug;

use super::{EntityStore, EntityStoreExt, WriteBatch};
use crate::entities::Entity;
use crate::errors::StoreError;

/// Reads through to a store while collecting writes for one commit.
///
/// Lookups see the session's own staged writes before the store's contents,
/// so an entity created earlier in the same handler invocation is found
/// again instead of being created twice. Dropping a session without calling
/// [`commit`](Session::commit) discards everything staged.
pub struct Session<'a, S: ?Sized> {
    store: &'a S,
    staged: WriteBatch,
}

impl<'a, S: EntityStore + ?Sized> Session<'a, S> {
    /// Opens a session over `store`
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            staged: WriteBatch::new(),
        }
    }

    /// Loads an entity, preferring a staged write over the stored value
    pub async fn get<E: Entity>(&self, id: &str) -> Result<Option<E>, StoreError> {
        if let Some(entity) = self.staged.get::<E>(id) {
            return Ok(Some(entity));
        }
        self.store.get::<E>(id).await
    }

    /// Stages an entity for the commit
    pub fn stage<E: Entity>(&mut self, entity: E) {
        self.staged.put(entity);
    }

    /// Writes staged so far
    pub fn staged(&self) -> &WriteBatch {
        &self.staged
    }

    /// Commits every staged write as one batch, returning how many records
    /// were written
    pub async fn commit(self) -> Result<usize, StoreError> {
        let count = self.staged.len();
        if count == 0 {
            return Ok(0);
        }

        debug!(store = self.store.name(), records = count, "Committing session");
        self.store.commit(self.staged).await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Account;
    use crate::store::MemoryStore;
    use crate::types::PublicKey;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            public_key: PublicKey::from(vec![7]),
            first_transfer_block: 5,
            last_transfer_block: None,
        }
    }

    #[tokio::test]
    async fn test_session_reads_its_own_writes() {
        let store = MemoryStore::new();
        let mut session = Session::new(&store);

        session.stage(account("a"));
        let found: Option<Account> = session.get("a").await.unwrap();
        assert!(found.is_some());

        // Nothing reaches the store before commit
        let stored: Option<Account> = store.get("a").await.unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_commit_writes_all_staged() {
        let store = MemoryStore::new();
        let mut session = Session::new(&store);
        session.stage(account("a"));
        session.stage(account("b"));

        assert_eq!(session.commit().await.unwrap(), 2);
        assert_eq!(store.stats().await.entries, 2);
        assert_eq!(store.stats().await.commits, 1);
    }

    #[tokio::test]
    async fn test_dropped_session_writes_nothing() {
        let store = MemoryStore::new();
        {
            let mut session = Session::new(&store);
            session.stage(account("a"));
        }
        assert_eq!(store.stats().await.entries, 0);
    }

    #[tokio::test]
    async fn test_empty_commit_skips_store() {
        let store = MemoryStore::new();
        let session = Session::new(&store);
        assert_eq!(session.commit().await.unwrap(), 0);
        assert_eq!(store.stats().await.commits, 0);
    }
}
