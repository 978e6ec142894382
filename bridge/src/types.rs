// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{BridgeError, BridgeResult};
use parity_scale_codec::Encode;
use serde::{Deserialize, Serialize};
use substrate_bridge_types::base_types::{
    AccountId, ChainId, DepositNonce, ResourceId, H256, U256,
};
use substrate_bridge_types::call::Call;
use substrate_bridge_types::transfer::TransferKind;

/// Largest big-endian integer a payload may carry (U256)
const MAX_UINT_BYTES: usize = 32;

/// One untyped value of a positional message payload, as delivered by the
/// message bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadValue {
    Bytes(#[serde(with = "hex::serde")] Vec<u8>),
    Integer(u64),
    Text(String),
}

impl PayloadValue {
    fn type_name(&self) -> &'static str {
        match self {
            PayloadValue::Bytes(_) => "bytes",
            PayloadValue::Integer(_) => "integer",
            PayloadValue::Text(_) => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FungiblePayload {
    pub amount: U256,
    pub recipient: AccountId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonFungiblePayload {
    pub token_id: U256,
    pub recipient: AccountId,
    pub metadata: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericPayload {
    pub hash: H256,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferPayload {
    Fungible(FungiblePayload),
    NonFungible(NonFungiblePayload),
    Generic(GenericPayload),
}

impl TransferPayload {
    pub fn kind(&self) -> TransferKind {
        match self {
            TransferPayload::Fungible(_) => TransferKind::Fungible,
            TransferPayload::NonFungible(_) => TransferKind::NonFungible,
            TransferPayload::Generic(_) => TransferKind::Generic,
        }
    }
}

/// Chain-agnostic transfer message delivered to the writer of the
/// destination chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub source: ChainId,
    pub destination: ChainId,
    pub nonce: DepositNonce,
    pub resource_id: ResourceId,
    pub payload: TransferPayload,
}

impl Message {
    pub fn new_fungible(
        source: ChainId,
        destination: ChainId,
        nonce: DepositNonce,
        resource_id: ResourceId,
        amount: U256,
        recipient: AccountId,
    ) -> Self {
        Self {
            source,
            destination,
            nonce,
            resource_id,
            payload: TransferPayload::Fungible(FungiblePayload { amount, recipient }),
        }
    }

    pub fn new_non_fungible(
        source: ChainId,
        destination: ChainId,
        nonce: DepositNonce,
        resource_id: ResourceId,
        token_id: U256,
        recipient: AccountId,
        metadata: Vec<u8>,
    ) -> Self {
        Self {
            source,
            destination,
            nonce,
            resource_id,
            payload: TransferPayload::NonFungible(NonFungiblePayload {
                token_id,
                recipient,
                metadata,
            }),
        }
    }

    pub fn new_generic(
        source: ChainId,
        destination: ChainId,
        nonce: DepositNonce,
        resource_id: ResourceId,
        hash: H256,
    ) -> Self {
        Self {
            source,
            destination,
            nonce,
            resource_id,
            payload: TransferPayload::Generic(GenericPayload { hash }),
        }
    }

    /// Builds a message from a positional payload.
    ///
    /// Layout per kind:
    /// - fungible: `[amount (big-endian), recipient]`
    /// - non-fungible: `[token id (big-endian), recipient, metadata]`
    /// - generic: `[32-byte hash]`
    pub fn from_raw_payload(
        kind: TransferKind,
        source: ChainId,
        destination: ChainId,
        nonce: DepositNonce,
        resource_id: ResourceId,
        payload: &[PayloadValue],
    ) -> BridgeResult<Self> {
        let payload = match kind {
            TransferKind::Fungible => TransferPayload::Fungible(FungiblePayload {
                amount: uint_at(payload, 0)?,
                recipient: account_at(payload, 1)?,
            }),
            TransferKind::NonFungible => TransferPayload::NonFungible(NonFungiblePayload {
                token_id: uint_at(payload, 0)?,
                recipient: account_at(payload, 1)?,
                metadata: bytes_at(payload, 2)?.to_vec(),
            }),
            TransferKind::Generic => TransferPayload::Generic(GenericPayload {
                hash: hash_at(payload, 0)?,
            }),
        };
        Ok(Self {
            source,
            destination,
            nonce,
            resource_id,
            payload,
        })
    }

    pub fn kind(&self) -> TransferKind {
        self.payload.kind()
    }
}

fn bytes_at(payload: &[PayloadValue], position: usize) -> BridgeResult<&[u8]> {
    match payload.get(position) {
        Some(PayloadValue::Bytes(bytes)) => Ok(bytes),
        Some(other) => Err(BridgeError::malformed(
            position,
            format!("expected bytes, got {}", other.type_name()),
        )),
        None => Err(BridgeError::malformed(position, "missing value")),
    }
}

fn uint_at(payload: &[PayloadValue], position: usize) -> BridgeResult<U256> {
    let bytes = bytes_at(payload, position)?;
    // Leading zero bytes carry no value
    let first = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > MAX_UINT_BYTES {
        return Err(BridgeError::malformed(
            position,
            format!(
                "integer of {} significant bytes exceeds 256 bits",
                significant.len()
            ),
        ));
    }
    Ok(U256::from_big_endian(significant))
}

fn account_at(payload: &[PayloadValue], position: usize) -> BridgeResult<AccountId> {
    let bytes = bytes_at(payload, position)?;
    AccountId::from_slice(bytes)
        .map_err(|e| BridgeError::malformed(position, format!("invalid recipient: {e}")))
}

fn hash_at(payload: &[PayloadValue], position: usize) -> BridgeResult<H256> {
    let bytes = bytes_at(payload, position)?;
    if bytes.len() != 32 {
        return Err(BridgeError::malformed(
            position,
            format!("hash must be 32 bytes, got {}", bytes.len()),
        ));
    }
    Ok(H256::from_slice(bytes))
}

/// A call ready to be voted on by the bridge pallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    deposit_nonce: DepositNonce,
    call: Call,
    source_id: ChainId,
    resource_id: ResourceId,
    // Diagnostic only, never encoded
    method: String,
}

impl Proposal {
    pub fn new(
        deposit_nonce: DepositNonce,
        call: Call,
        source_id: ChainId,
        resource_id: ResourceId,
        method: String,
    ) -> Self {
        Self {
            deposit_nonce,
            call,
            source_id,
            resource_id,
            method,
        }
    }

    pub fn deposit_nonce(&self) -> DepositNonce {
        self.deposit_nonce
    }

    pub fn call(&self) -> &Call {
        &self.call
    }

    pub fn source_id(&self) -> ChainId {
        self.source_id
    }

    pub fn resource_id(&self) -> ResourceId {
        self.resource_id
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// `nonce ++ call`: the proposal part of the pallet's votes storage key.
    pub fn encode(&self) -> Vec<u8> {
        (self.deposit_nonce, &self.call).encode()
    }

    /// Both keys of the votes double map: encoded source id and encoded
    /// proposal.
    pub fn votes_key(&self) -> (Vec<u8>, Vec<u8>) {
        (self.source_id.encode(), self.encode())
    }
}
