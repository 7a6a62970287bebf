// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! SS58 address decoding
//!
//! Substrate chains render account ids as SS58 strings: base58 of
//! `prefix ++ payload ++ checksum`, where the checksum is taken from
//! `blake2b-512("SS58PRE" ++ prefix ++ payload)`. This module turns such a
//! string (or a plain `0x` hex string) back into the raw public key bytes.
//!
//! # Examples
//!
//! ```
//! use subledger::ss58::decode_address;
//!
//! let alice = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
//! let key = decode_address(alice, None).unwrap();
//! assert_eq!(
//!     key.to_string(),
//!     "0xd43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"
//! );
//! ```

use alloy_primitives::hex;
use blake2::{Blake2b512, Digest};

use crate::errors::AddressError;
use crate::types::PublicKey;

/// Checksum preimage prefix
const SS58_CONTEXT: &[u8] = b"SS58PRE";

/// Decoded lengths (prefix + payload + checksum) an SS58 address may have
const ALLOWED_DECODED_LENGTHS: [usize; 8] = [3, 4, 6, 10, 35, 36, 37, 38];

/// Prefixes reserved by the SS58 registry and never valid in an address
const RESERVED_PREFIXES: [u8; 2] = [46, 47];

/// Largest prefix expressible in the two-byte form
pub const MAX_PREFIX: u16 = 0x3fff;

/// Decode an address into its public key bytes.
///
/// Hex strings (`0x…`) are decoded as-is. Everything else is treated as SS58
/// and must carry a valid checksum. When `expected_prefix` is set the
/// address must be encoded for that network.
///
/// Decoding is case-sensitive for SS58: callers that normalize addresses for
/// lookup must still decode the address exactly as the chain reported it.
pub fn decode_address(
    address: &str,
    expected_prefix: Option<u16>,
) -> Result<PublicKey, AddressError> {
    if address.starts_with("0x") {
        let bytes = hex::decode(address).map_err(|e| AddressError::InvalidHex {
            address: address.to_string(),
            details: e.to_string(),
        })?;
        return Ok(PublicKey::from(bytes));
    }

    let decoded = bs58::decode(address)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58 {
            address: address.to_string(),
            details: e.to_string(),
        })?;

    if !ALLOWED_DECODED_LENGTHS.contains(&decoded.len()) {
        return Err(AddressError::InvalidLength {
            address: address.to_string(),
            length: decoded.len(),
        });
    }

    let (prefix, prefix_len) = read_prefix(&decoded).ok_or_else(|| AddressError::InvalidPrefix {
        address: address.to_string(),
    })?;

    let is_public_key = decoded.len() == 34 + prefix_len || decoded.len() == 35 + prefix_len;
    let checksum_len = if is_public_key { 2 } else { 1 };
    let body_end = decoded.len() - checksum_len;

    let hash = checksum(&decoded[..body_end]);
    if decoded[body_end..] != hash[..checksum_len] {
        return Err(AddressError::InvalidChecksum {
            address: address.to_string(),
        });
    }

    if let Some(expected) = expected_prefix {
        if expected != prefix {
            return Err(AddressError::PrefixMismatch {
                address: address.to_string(),
                expected,
                found: prefix,
            });
        }
    }

    Ok(PublicKey::from(decoded[prefix_len..body_end].to_vec()))
}

/// Encode public key bytes as an SS58 address for the given network prefix.
///
/// Fails with [`AddressError::InvalidPrefix`] for reserved prefixes or
/// prefixes above [`MAX_PREFIX`].
pub fn encode_address(public_key: &[u8], prefix: u16) -> Result<String, AddressError> {
    let invalid = || AddressError::InvalidPrefix {
        address: hex::encode_prefixed(public_key),
    };

    if prefix > MAX_PREFIX || (prefix < 64 && RESERVED_PREFIXES.contains(&(prefix as u8))) {
        return Err(invalid());
    }

    let mut body = if prefix < 64 {
        vec![prefix as u8]
    } else {
        vec![
            (((prefix & 0b1111_1100) >> 2) as u8) | 0b0100_0000,
            ((prefix >> 8) as u8) | (((prefix & 0b11) as u8) << 6),
        ]
    };
    body.extend_from_slice(public_key);

    let checksum_len = if matches!(public_key.len(), 32 | 33) { 2 } else { 1 };
    let hash = checksum(&body);
    body.extend_from_slice(&hash[..checksum_len]);

    Ok(bs58::encode(body).into_string())
}

/// Read the network prefix, returning it with its encoded width in bytes.
fn read_prefix(decoded: &[u8]) -> Option<(u16, usize)> {
    let first = decoded[0];
    if first & 0b1000_0000 != 0 || RESERVED_PREFIXES.contains(&first) {
        return None;
    }

    if first & 0b0100_0000 == 0 {
        return Some((first as u16, 1));
    }

    let second = *decoded.get(1)?;
    let prefix = (((first & 0b0011_1111) as u16) << 2)
        | ((second >> 6) as u16)
        | (((second & 0b0011_1111) as u16) << 8);
    Some((prefix, 2))
}

fn checksum(body: &[u8]) -> [u8; 64] {
    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CONTEXT);
    hasher.update(body);
    hasher.finalize().into()
}
