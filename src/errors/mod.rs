// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the subledger library.
//!
//! Each concern has its own error type:
//! - [`AddressError`] - Errors from decoding chain addresses into public keys
//! - [`HandlerError`] - Errors that abort a mapping handler invocation
//! - [`StoreError`] - Errors from the entity store
//! - [`ConfigError`] - Errors from loading indexer configuration
//!
//! [`SubledgerError`] wraps all of them for callers that don't need to tell
//! the sources apart.
//!
//! # Examples
//!
//! ```rust,ignore
//! use subledger::{HandlerError, MappingHandlers};
//!
//! match handlers.handle_event(&event).await {
//!     Ok(()) => {}
//!     Err(HandlerError::Address(e)) => eprintln!("Malformed address: {e}"),
//!     Err(HandlerError::DecodeFailed { details }) => eprintln!("Bad payload: {details}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod address;
mod config;
mod handler;
mod store;

pub use address::AddressError;
pub use config::{ConfigError, ParseEventSelectorError};
pub use handler::HandlerError;
pub use store::StoreError;

/// Unified error type for all subledger operations.
///
/// All module-specific error types convert into `SubledgerError` via `From`,
/// so `?` works across module boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SubledgerError {
    /// Error from address decoding.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Error from a mapping handler.
    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    /// Error from the entity store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
