// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Bridge pallet types, organized in a submodule

// Infrastructure modules
pub mod base_types;
pub mod codec;
pub mod error;

// Pallet storage and event types
pub mod call;
pub mod events;
pub mod transfer;
pub mod vote;

pub use call::{Call, CallIndex};
pub use events::{decode_bridge_event, decode_bridge_events, BridgeEvent, BridgeEvents};
pub use transfer::{
    FungibleTransferItem, GenericTransferItem, NonFungibleTransferItem, TransferKind,
};
pub use vote::{decode_vote_state, decode_vote_status, VoteState, VoteStatus};
