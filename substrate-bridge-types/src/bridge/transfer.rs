// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Transfer records emitted by the bridge pallet.
//!
//! Fields are SCALE-encoded in declaration order. Variable-length fields
//! carry a compact length prefix.

use super::base_types::{ChainId, DepositNonce, ResourceId, U256};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    strum_macros::Display,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
pub enum TransferKind {
    Fungible = 0,
    NonFungible = 1,
    Generic = 2,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct FungibleTransferItem {
    pub destination: ChainId,
    pub deposit_nonce: DepositNonce,
    pub resource_id: ResourceId,
    pub amount: U256,
    pub recipient: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct NonFungibleTransferItem {
    pub destination: ChainId,
    pub deposit_nonce: DepositNonce,
    pub resource_id: ResourceId,
    /// Big-endian integer bytes
    pub token_id: Vec<u8>,
    pub recipient: Vec<u8>,
    pub metadata: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct GenericTransferItem {
    pub destination: ChainId,
    pub deposit_nonce: DepositNonce,
    pub resource_id: ResourceId,
    pub metadata: Vec<u8>,
}
