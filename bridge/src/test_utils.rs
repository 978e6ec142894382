// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Fixtures mirroring the example handler pallet of the bridge: a fungible
//! `transfer`, a non-fungible `mint_erc721` and a generic `remark`.

use crate::call_builder::MetadataCallEncoder;
use crate::metadata::{ArgType, CallSignature, StaticMetadata};
use crate::proposal_builder::{ProposalBuilder, ProposalConfig};
use crate::resolver::StaticResourceResolver;
use crate::types::Message;
use substrate_bridge_types::base_types::{AccountId, ChainId, ResourceId, H256, U256};
use substrate_bridge_types::call::CallIndex;

pub const TEST_SOURCE_CHAIN: ChainId = 0;
pub const TEST_DEST_CHAIN: ChainId = 1;
pub const EXAMPLE_PALLET_INDEX: u8 = 11;

pub const FUNGIBLE_METHOD: &str = "Example.transfer";
pub const NON_FUNGIBLE_METHOD: &str = "Example.mint_erc721";
pub const GENERIC_METHOD: &str = "Example.remark";

pub fn fungible_resource_id() -> ResourceId {
    ResourceId::new([0x01; 32])
}

pub fn non_fungible_resource_id() -> ResourceId {
    ResourceId::new([0x02; 32])
}

pub fn generic_resource_id() -> ResourceId {
    ResourceId::new([0x03; 32])
}

pub fn unregistered_resource_id() -> ResourceId {
    ResourceId::new([0xff; 32])
}

pub fn test_resolver() -> StaticResourceResolver {
    StaticResourceResolver::new()
        .with_resource(fungible_resource_id(), FUNGIBLE_METHOD)
        .with_resource(non_fungible_resource_id(), NON_FUNGIBLE_METHOD)
        .with_resource(generic_resource_id(), GENERIC_METHOD)
}

pub fn test_metadata() -> StaticMetadata {
    StaticMetadata::new()
        .with_call(
            FUNGIBLE_METHOD,
            CallSignature::new(
                CallIndex::new(EXAMPLE_PALLET_INDEX, 0),
                vec![ArgType::AccountId, ArgType::U128],
            ),
        )
        .with_call(
            NON_FUNGIBLE_METHOD,
            CallSignature::new(
                CallIndex::new(EXAMPLE_PALLET_INDEX, 1),
                vec![ArgType::AccountId, ArgType::U256, ArgType::Bytes],
            ),
        )
        .with_call(
            GENERIC_METHOD,
            CallSignature::new(
                CallIndex::new(EXAMPLE_PALLET_INDEX, 2),
                vec![ArgType::Hash],
            ),
        )
}

pub fn test_call_encoder() -> MetadataCallEncoder<StaticMetadata> {
    MetadataCallEncoder::new(test_metadata())
}

pub fn test_builder(
    config: ProposalConfig,
) -> ProposalBuilder<StaticResourceResolver, MetadataCallEncoder<StaticMetadata>> {
    ProposalBuilder::new(test_resolver(), test_call_encoder(), config)
}

pub fn fungible_message(nonce: u64, amount: u128, recipient: AccountId) -> Message {
    Message::new_fungible(
        TEST_SOURCE_CHAIN,
        TEST_DEST_CHAIN,
        nonce,
        fungible_resource_id(),
        U256::from(amount),
        recipient,
    )
}

pub fn non_fungible_message(
    nonce: u64,
    token_id: U256,
    recipient: AccountId,
    metadata: Vec<u8>,
) -> Message {
    Message::new_non_fungible(
        TEST_SOURCE_CHAIN,
        TEST_DEST_CHAIN,
        nonce,
        non_fungible_resource_id(),
        token_id,
        recipient,
        metadata,
    )
}

pub fn generic_message(nonce: u64, hash: H256) -> Message {
    Message::new_generic(
        TEST_SOURCE_CHAIN,
        TEST_DEST_CHAIN,
        nonce,
        generic_resource_id(),
        hash,
    )
}
