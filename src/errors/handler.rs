// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for mapping handlers.

use super::{AddressError, StoreError};

/// Errors that abort a mapping handler invocation.
///
/// Handlers stage all of their writes and commit them at the very end, so
/// when any of these is returned nothing from the failed invocation has been
/// persisted.
///
/// # Examples
///
/// ```rust,ignore
/// use subledger::HandlerError;
///
/// match handlers.handle_frontier_evm_event(&event).await {
///     Err(HandlerError::Precondition { message }) => {
///         tracing::warn!(%message, "Skipping malformed EVM log");
///     }
///     other => other?,
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The event payload did not have the expected shape.
    ///
    /// Raised when an event carries the wrong number of arguments or an
    /// argument of the wrong kind.
    #[error("Failed to decode event payload: {details}")]
    DecodeFailed {
        /// Details about why the decode failed
        details: String,
    },

    /// A required input field was absent.
    #[error("Precondition failed: {message}")]
    Precondition {
        /// Assertion message, e.g. "No transactionHash"
        message: String,
    },

    /// An account address could not be decoded.
    #[error("Address decoding failed: {0}")]
    Address(#[from] AddressError),

    /// The entity store rejected a read or commit.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl HandlerError {
    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        HandlerError::DecodeFailed {
            details: details.into(),
        }
    }

    /// Create a `Precondition` error with the assertion message.
    pub fn precondition(message: impl Into<String>) -> Self {
        HandlerError::Precondition {
            message: message.into(),
        }
    }

    /// Returns `true` for failures caused by the input rather than the store.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, HandlerError::Store(_))
    }
}
