// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across subledger.
//!
//! This module provides newtype wrappers for domain concepts:
//! - Substrate balances (`u128` amounts that must survive JSON hosts intact)
//! - Composite `{block}-{index}` record ids
//! - Address normalization policies per entity kind
//! - Public keys decoded from chain addresses

pub mod balance;
pub mod ids;
pub mod public_key;

pub use balance::Balance;
pub use ids::{EventId, NormalizationPolicy};
pub use public_key::PublicKey;
