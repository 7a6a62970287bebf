// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the entity store.

use crate::entities::EntityKind;

/// Errors returned by [`EntityStore`](crate::store::EntityStore) implementations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A record stored under a key was not of the requested entity kind.
    #[error("Record {id} is a {found}, expected {expected}")]
    KindMismatch {
        /// Requested id
        id: String,
        /// Kind the caller asked for
        expected: EntityKind,
        /// Kind actually stored
        found: EntityKind,
    },

    /// The storage backend failed.
    #[error("Store backend failure: {details}")]
    Backend {
        /// Backend-specific message
        details: String,
    },
}

impl StoreError {
    /// Create a `Backend` error with details.
    pub fn backend(details: impl Into<String>) -> Self {
        StoreError::Backend {
            details: details.into(),
        }
    }
}
