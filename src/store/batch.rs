// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Staged writes applied as one unit

use crate::entities::{Entity, EntityKind, Record};

/// An ordered set of pending writes.
///
/// Writes keep the order in which their keys were first staged, so entities
/// staged earlier (accounts) are applied before entities that reference
/// them (transfers). Staging the same key again replaces the pending value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    records: Vec<Record>,
}

impl WriteBatch {
    /// Creates an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `entity`, replacing any pending write of the same key
    pub fn put<E: Entity>(&mut self, entity: E) {
        let id = entity.entity_id();
        let record = entity.into_record();
        match self.position(E::KIND, &id) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    /// Returns the pending write of type `E` under `id`, if any
    pub fn get<E: Entity>(&self, id: &str) -> Option<E> {
        let pos = self.position(E::KIND, id)?;
        E::from_record(self.records[pos].clone()).ok()
    }

    /// Number of distinct keys staged
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is staged
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Pending writes in application order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    fn position(&self, kind: EntityKind, id: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.kind() == kind && r.id() == id)
    }
}

impl IntoIterator for WriteBatch {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
