// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for indexer configuration.

/// Errors raised while building an [`IndexerConfig`](crate::IndexerConfig)
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidValue {
        /// Environment variable name
        field: String,
        /// Raw value
        value: String,
        /// Why it was rejected
        reason: String,
    },
}

/// A string that is not a `<section>.<method>` event selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid event selector {input:?}: expected <section>.<method>")]
pub struct ParseEventSelectorError {
    /// Rejected input
    pub input: String,
}

impl ParseEventSelectorError {
    /// Create an error for `input`.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl ConfigError {
    /// Create an `InvalidValue` error.
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}
