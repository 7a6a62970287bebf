// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for Substrate balances
//!
//! Substrate balances are `u128`. Hosts commonly move records around as JSON,
//! where numbers above 2^53 lose precision, so a [`Balance`] serializes as a
//! decimal string and accepts either a string or an integer when read back.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An amount in a chain's smallest balance unit
///
/// # Examples
///
/// ```
/// use subledger::Balance;
///
/// let amount = Balance::new(u128::MAX);
/// assert_eq!(amount.to_string(), "340282366920938463463374607431768211455");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Balance(u128);

impl Balance {
    /// Create a new balance
    pub const fn new(amount: u128) -> Self {
        Self(amount)
    }

    /// Get the inner value
    pub const fn as_u128(&self) -> u128 {
        self.0
    }
}

impl From<u128> for Balance {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<u64> for Balance {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BalanceVisitor;

        impl Visitor<'_> for BalanceVisitor {
            type Value = Balance;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an unsigned integer or a decimal string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Balance, E> {
                Ok(Balance(v as u128))
            }

            fn visit_u128<E: de::Error>(self, v: u128) -> Result<Balance, E> {
                Ok(Balance(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Balance, E> {
                v.parse::<u128>().map(Balance).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(BalanceVisitor)
    }
}
