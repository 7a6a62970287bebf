// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mapping handlers that index Substrate balance transfers, vtoken
//! redemptions and Frontier EVM token activity into an entity store.

pub mod config;
mod dispatch;
pub mod entities;
pub mod errors;
pub mod evm;
mod handlers;
mod spans;
pub mod ss58;
pub mod store;
pub mod substrate;
pub mod types;

pub use config::{EventSelector, IndexerConfig, IndexerConfigBuilder};
pub use dispatch::*;
pub use entities::*;
pub use errors::*;
pub use handlers::*;
pub use store::{EntityStore, EntityStoreExt, MemoryStore, Session, StoreStats};
pub use types::*;
