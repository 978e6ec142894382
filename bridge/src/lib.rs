// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

pub mod call_builder;
pub mod config;
pub mod error;
pub mod events;
pub mod metadata;
pub mod proposal_builder;
pub mod resolver;
pub mod types;
pub mod votes;

#[cfg(test)]
pub(crate) mod test_utils;

pub use call_builder::{CallArg, CallEncoder, MetadataCallEncoder};
pub use config::{CallSignatureConfig, RelayerConfig};
pub use error::{BridgeError, BridgeResult};
pub use events::{decode_relay_transfers, RelayTransfer};
pub use metadata::{ArgType, CallSignature, MetadataCache, MetadataProvider, StaticMetadata};
pub use proposal_builder::{ProposalBuilder, ProposalConfig};
pub use resolver::{ResourceResolver, StaticResourceResolver};
pub use types::{Message, PayloadValue, Proposal, TransferPayload};
pub use votes::{assess_vote, assess_vote_storage, VoteDecision};
