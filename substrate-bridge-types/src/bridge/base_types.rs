// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fundamental identifiers shared by the bridge pallet and the relayer.
//!
//! All fixed-width identifiers are SCALE-encoded as their raw bytes, so the
//! encodings below are exactly what the destination runtime stores and hashes.

use parity_scale_codec::{Decode, Encode};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::str::FromStr;

pub use primitive_types::{H256, U256};

/// Bridge chain id (the pallet's `ChainId`, a `u8`)
pub type ChainId = u8;

/// Per-source-chain transfer counter
pub type DepositNonce = u64;

pub const RESOURCE_ID_LENGTH: usize = 32;
pub const ACCOUNT_ID_LENGTH: usize = 32;

/// Errors from parsing identifiers out of their textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

fn parse_fixed_hex<const N: usize>(s: &str) -> Result<[u8; N], IdParseError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| IdParseError::InvalidHex(e.to_string()))?;
    bytes_to_fixed(&bytes)
}

fn bytes_to_fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N], IdParseError> {
    bytes.try_into().map_err(|_| IdParseError::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

macro_rules! fixed_bytes_id {
    ($(#[$meta:meta])* $name:ident, $len:expr) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            Default,
            Encode,
            Decode,
            SerializeDisplay,
            DeserializeFromStr,
        )]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const ZERO: Self = Self([0u8; $len]);

            pub fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn from_slice(bytes: &[u8]) -> Result<Self, IdParseError> {
                bytes_to_fixed(bytes).map(Self)
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            pub fn to_vec(&self) -> Vec<u8> {
                self.0.to_vec()
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_fixed_hex::<$len>(s).map(Self)
            }
        }
    };
}

fixed_bytes_id!(
    /// 32-byte id the bridge pallet maps to a destination call
    ResourceId,
    RESOURCE_ID_LENGTH
);

fixed_bytes_id!(
    /// Substrate `AccountId32`
    AccountId,
    ACCOUNT_ID_LENGTH
);

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_resource_id_hex_round_trip() {
        let raw = hex!("000000000000000000000000000000c76ebe4a02bbc34786d860b355f5a5ce00");
        let id = ResourceId::new(raw);
        let text = id.to_string();
        assert!(text.starts_with("0x"));
        assert_eq!(ResourceId::from_str(&text).unwrap(), id);
        // Prefix is optional
        assert_eq!(ResourceId::from_str(&text[2..]).unwrap(), id);
    }

    #[test]
    fn test_fixed_ids_reject_wrong_length() {
        assert_eq!(
            AccountId::from_slice(&[1u8; 31]).unwrap_err(),
            IdParseError::InvalidLength {
                expected: 32,
                actual: 31
            }
        );
        assert!(matches!(
            ResourceId::from_str("0xzz").unwrap_err(),
            IdParseError::InvalidHex(_)
        ));
    }

    #[test]
    fn test_fixed_ids_encode_as_raw_bytes() {
        let id = AccountId::new([7u8; 32]);
        assert_eq!(id.encode(), vec![7u8; 32]);
        assert_eq!(AccountId::decode(&mut &[7u8; 32][..]).unwrap(), id);
    }

    #[test]
    fn test_resource_id_serde_as_hex_string() {
        let id = ResourceId::new([0xab; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(32)));
        let back: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
