// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for chain address decoding.

/// Errors that can occur while decoding an SS58 or hex address into its
/// public key bytes.
///
/// A decoding failure is fatal for the handler that triggered it: the
/// enclosing event is not recorded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The address is not valid base58.
    #[error("Invalid base58 in address {address}: {details}")]
    InvalidBase58 {
        /// The address as received
        address: String,
        /// Decoder message
        details: String,
    },

    /// The address looked like hex (`0x` prefix) but did not decode.
    #[error("Invalid hex in address {address}: {details}")]
    InvalidHex {
        /// The address as received
        address: String,
        /// Decoder message
        details: String,
    },

    /// The decoded payload has a length no SS58 address can have.
    #[error("Invalid decoded address length {length} for {address}")]
    InvalidLength {
        /// The address as received
        address: String,
        /// Decoded byte length
        length: usize,
    },

    /// The prefix byte(s) are reserved or malformed.
    #[error("Invalid SS58 prefix in address {address}")]
    InvalidPrefix {
        /// The address as received
        address: String,
    },

    /// The blake2b checksum did not match.
    #[error("Invalid checksum for address {address}")]
    InvalidChecksum {
        /// The address as received
        address: String,
    },

    /// The address is valid but encoded for a different network.
    #[error("Address {address} has SS58 prefix {found}, expected {expected}")]
    PrefixMismatch {
        /// The address as received
        address: String,
        /// Prefix the indexer is configured for
        expected: u16,
        /// Prefix found in the address
        found: u16,
    },
}

impl AddressError {
    /// Returns the address that failed to decode.
    pub fn address(&self) -> &str {
        match self {
            AddressError::InvalidBase58 { address, .. }
            | AddressError::InvalidHex { address, .. }
            | AddressError::InvalidLength { address, .. }
            | AddressError::InvalidPrefix { address }
            | AddressError::InvalidChecksum { address }
            | AddressError::PrefixMismatch { address, .. } => address,
        }
    }
}
