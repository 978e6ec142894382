// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sanitized view of the transfer events emitted by the bridge pallet.
//!
//! The pallet stores a list of [`BridgeEvent`]s per block. Relay logic only
//! cares about the transfers in it, flattened into the positional payload
//! shape that every chain writer accepts.

use crate::error::BridgeResult;
use crate::types::{Message, PayloadValue};
use substrate_bridge_types::base_types::{ChainId, DepositNonce, ResourceId, U256};
use substrate_bridge_types::events::{decode_bridge_events, BridgeEvent};
use substrate_bridge_types::transfer::TransferKind;
use tracing::{debug, warn};

/// A transfer observed on the bridge pallet, ready to be routed to the
/// writer of its destination chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayTransfer {
    pub kind: TransferKind,
    pub destination: ChainId,
    pub nonce: DepositNonce,
    pub resource_id: ResourceId,
    pub payload: Vec<PayloadValue>,
}

// Minimal big-endian bytes, empty for zero
fn uint_to_be_bytes(value: U256) -> Vec<u8> {
    let mut buf = [0u8; 32];
    value.to_big_endian(&mut buf);
    let first = buf.iter().position(|b| *b != 0).unwrap_or(buf.len());
    buf[first..].to_vec()
}

impl RelayTransfer {
    /// Returns `None` for events whose discriminant is unknown.
    pub fn from_bridge_event(event: BridgeEvent) -> Option<Self> {
        let transfer = match event {
            BridgeEvent::Fungible(item) => Self {
                kind: TransferKind::Fungible,
                destination: item.destination,
                nonce: item.deposit_nonce,
                resource_id: item.resource_id,
                payload: vec![
                    PayloadValue::Bytes(uint_to_be_bytes(item.amount)),
                    PayloadValue::Bytes(item.recipient),
                ],
            },
            BridgeEvent::NonFungible(item) => Self {
                kind: TransferKind::NonFungible,
                destination: item.destination,
                nonce: item.deposit_nonce,
                resource_id: item.resource_id,
                payload: vec![
                    PayloadValue::Bytes(item.token_id),
                    PayloadValue::Bytes(item.recipient),
                    PayloadValue::Bytes(item.metadata),
                ],
            },
            BridgeEvent::Generic(item) => Self {
                kind: TransferKind::Generic,
                destination: item.destination,
                nonce: item.deposit_nonce,
                resource_id: item.resource_id,
                payload: vec![PayloadValue::Bytes(item.metadata)],
            },
            BridgeEvent::Unknown(_) => return None,
        };
        Some(transfer)
    }

    /// Builds the inbound message a Substrate destination writer consumes.
    pub fn into_message(self, source: ChainId) -> BridgeResult<Message> {
        Message::from_raw_payload(
            self.kind,
            source,
            self.destination,
            self.nonce,
            self.resource_id,
            &self.payload,
        )
    }
}

/// Decodes a block's event list and keeps the transfers in log order.
pub fn decode_relay_transfers(bytes: &[u8]) -> BridgeResult<Vec<RelayTransfer>> {
    let events = decode_bridge_events(bytes)?;
    let mut transfers = Vec::with_capacity(events.len());
    for event in events {
        match RelayTransfer::from_bridge_event(event) {
            Some(transfer) => {
                debug!(
                    nonce = transfer.nonce,
                    destination = transfer.destination,
                    resource_id = %transfer.resource_id,
                    kind = %transfer.kind,
                    "Observed bridge transfer"
                );
                transfers.push(transfer);
            }
            None => warn!("Skipping bridge event with unknown discriminant"),
        }
    }
    Ok(transfers)
}
