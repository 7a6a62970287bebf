// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Record identifiers and address normalization

use alloy_primitives::BlockNumber;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Composite identifier `{block_number}-{event_index}` for records produced
/// from a Substrate event.
///
/// Unique across the chain because an event index is unique within its
/// block. Ordering follows chain order (block first, then index), which the
/// string form does not preserve lexicographically, so compare `EventId`s
/// rather than their strings.
///
/// # Examples
///
/// ```
/// use subledger::EventId;
///
/// let id = EventId::new(100, 3);
/// assert_eq!(id.to_string(), "100-3");
/// assert_eq!("100-3".parse::<EventId>().unwrap(), id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct EventId {
    block_number: BlockNumber,
    event_index: u32,
}

impl EventId {
    /// Create an id for the event at `event_index` within `block_number`
    pub const fn new(block_number: BlockNumber, event_index: u32) -> Self {
        Self {
            block_number,
            event_index,
        }
    }

    /// Block the event was emitted in
    pub const fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    /// Position of the event within its block
    pub const fn event_index(&self) -> u32 {
        self.event_index
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.block_number, self.event_index)
    }
}

/// Error parsing an [`EventId`] from its string form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid event id {0:?}, expected <block>-<index>")]
pub struct ParseEventIdError(String);

impl FromStr for EventId {
    type Err = ParseEventIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseEventIdError(s.to_string());
        let (block, index) = s.split_once('-').ok_or_else(err)?;
        Ok(Self {
            block_number: block.parse().map_err(|_| err())?,
            event_index: index.parse().map_err(|_| err())?,
        })
    }
}

impl From<EventId> for String {
    fn from(value: EventId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for EventId {
    type Error = ParseEventIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How an entity kind turns a raw chain address into its id.
///
/// Balance-transfer accounts collapse case variants of an address into one
/// entity; redeem accounts keep the address exactly as reported. The two
/// kinds are tracked independently and their policies are kept separate so
/// that changing one never changes which records the other merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationPolicy {
    /// Lowercase the address before using it as an id
    Lowercase,
    /// Use the address verbatim
    Preserve,
}

impl NormalizationPolicy {
    /// Apply the policy to a raw address
    pub fn normalize(self, address: &str) -> String {
        match self {
            NormalizationPolicy::Lowercase => address.to_lowercase(),
            NormalizationPolicy::Preserve => address.to_string(),
        }
    }
}
