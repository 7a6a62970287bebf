// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Public key bytes decoded from a chain address
//!
//! Stored records carry the key as its decimal bytes joined by commas
//! (`"212,53,147,…"`), the form indexing hosts already hold for these
//! entities. Logs and error messages use `0x`-hex through `Display`.

use alloy_primitives::{hex, Bytes};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// Raw public key (account id) bytes behind an SS58 or hex address.
///
/// Usually 32 bytes, but SS58 also encodes 1, 2, 4, 8 and 33 byte payloads,
/// so the length is not fixed. Displays as lowercase `0x`-hex and
/// serializes as comma-joined decimal bytes.
///
/// # Examples
///
/// ```
/// use subledger::PublicKey;
///
/// let key = PublicKey::from(vec![0xAB, 0xCD]);
/// assert_eq!(key.to_string(), "0xabcd");
/// assert_eq!(key.to_decimal_list(), "171,205");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(Bytes);

impl PublicKey {
    /// Get the inner bytes
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    /// Bytes as decimal numbers joined by commas, the stored form
    pub fn to_decimal_list(&self) -> String {
        self.0
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the stored form produced by [`to_decimal_list`](Self::to_decimal_list)
    pub fn from_decimal_list(list: &str) -> Result<Self, std::num::ParseIntError> {
        if list.is_empty() {
            return Ok(Self(Bytes::new()));
        }
        list.split(',')
            .map(|byte| byte.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map(Self::from)
    }
}

impl From<Vec<u8>> for PublicKey {
    fn from(value: Vec<u8>) -> Self {
        Self(Bytes::from(value))
    }
}

impl From<Bytes> for PublicKey {
    fn from(value: Bytes) -> Self {
        Self(value)
    }
}

impl Deref for PublicKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_prefixed(&self.0))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_list())
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PublicKeyVisitor;

        impl Visitor<'_> for PublicKeyVisitor {
            type Value = PublicKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("comma-separated decimal bytes or a 0x-hex string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PublicKey, E> {
                if v.starts_with("0x") {
                    return hex::decode(v).map(PublicKey::from).map_err(E::custom);
                }
                PublicKey::from_decimal_list(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(PublicKeyVisitor)
    }
}
