// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! `BridgeEvent` as stored by the bridge pallet: one discriminant byte
//! selecting a transfer record, followed by that record.

use super::base_types::{ChainId, DepositNonce, ResourceId};
use super::codec::{decode_from_bytes, decode_variant, read_variant, TaggedVariant};
use super::error::CodecResult;
use super::transfer::{
    FungibleTransferItem, GenericTransferItem, NonFungibleTransferItem, TransferKind,
};
use parity_scale_codec::{Decode, Encode, Input, Output};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    Fungible(FungibleTransferItem),
    NonFungible(NonFungibleTransferItem),
    Generic(GenericTransferItem),
    /// Discriminant not known to this relayer; no payload was read.
    Unknown(u8),
}

/// Events in chain log order
pub type BridgeEvents = Vec<BridgeEvent>;

impl BridgeEvent {
    pub fn is_fungible(&self) -> bool {
        matches!(self, BridgeEvent::Fungible(_))
    }

    pub fn is_non_fungible(&self) -> bool {
        matches!(self, BridgeEvent::NonFungible(_))
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, BridgeEvent::Generic(_))
    }

    pub fn kind(&self) -> Option<TransferKind> {
        match self {
            BridgeEvent::Fungible(_) => Some(TransferKind::Fungible),
            BridgeEvent::NonFungible(_) => Some(TransferKind::NonFungible),
            BridgeEvent::Generic(_) => Some(TransferKind::Generic),
            BridgeEvent::Unknown(_) => None,
        }
    }

    pub fn destination(&self) -> Option<ChainId> {
        match self {
            BridgeEvent::Fungible(item) => Some(item.destination),
            BridgeEvent::NonFungible(item) => Some(item.destination),
            BridgeEvent::Generic(item) => Some(item.destination),
            BridgeEvent::Unknown(_) => None,
        }
    }

    pub fn deposit_nonce(&self) -> Option<DepositNonce> {
        match self {
            BridgeEvent::Fungible(item) => Some(item.deposit_nonce),
            BridgeEvent::NonFungible(item) => Some(item.deposit_nonce),
            BridgeEvent::Generic(item) => Some(item.deposit_nonce),
            BridgeEvent::Unknown(_) => None,
        }
    }

    pub fn resource_id(&self) -> Option<ResourceId> {
        match self {
            BridgeEvent::Fungible(item) => Some(item.resource_id),
            BridgeEvent::NonFungible(item) => Some(item.resource_id),
            BridgeEvent::Generic(item) => Some(item.resource_id),
            BridgeEvent::Unknown(_) => None,
        }
    }

    fn discriminant(&self) -> u8 {
        match self {
            BridgeEvent::Fungible(_) => TransferKind::Fungible.into(),
            BridgeEvent::NonFungible(_) => TransferKind::NonFungible.into(),
            BridgeEvent::Generic(_) => TransferKind::Generic.into(),
            BridgeEvent::Unknown(tag) => *tag,
        }
    }
}

impl TaggedVariant for BridgeEvent {
    fn unknown(tag: u8) -> Self {
        BridgeEvent::Unknown(tag)
    }

    fn decode_body<I: Input>(
        tag: u8,
        input: &mut I,
    ) -> Result<Option<Self>, parity_scale_codec::Error> {
        let Ok(kind) = TransferKind::try_from(tag) else {
            return Ok(None);
        };
        let event = match kind {
            TransferKind::Fungible => BridgeEvent::Fungible(Decode::decode(input)?),
            TransferKind::NonFungible => BridgeEvent::NonFungible(Decode::decode(input)?),
            TransferKind::Generic => BridgeEvent::Generic(Decode::decode(input)?),
        };
        Ok(Some(event))
    }
}

impl Decode for BridgeEvent {
    fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
        read_variant(input)
    }
}

impl Encode for BridgeEvent {
    fn size_hint(&self) -> usize {
        1 + match self {
            BridgeEvent::Fungible(item) => item.size_hint(),
            BridgeEvent::NonFungible(item) => item.size_hint(),
            BridgeEvent::Generic(item) => item.size_hint(),
            BridgeEvent::Unknown(_) => 0,
        }
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.push_byte(self.discriminant());
        match self {
            BridgeEvent::Fungible(item) => item.encode_to(dest),
            BridgeEvent::NonFungible(item) => item.encode_to(dest),
            BridgeEvent::Generic(item) => item.encode_to(dest),
            BridgeEvent::Unknown(_) => {}
        }
    }
}

/// Decodes a single event from the front of `bytes`.
pub fn decode_bridge_event(bytes: &[u8]) -> CodecResult<BridgeEvent> {
    decode_variant(bytes).map(|(event, _rest)| event)
}

/// Decodes the pallet's event list (compact length, then each event).
///
/// An empty buffer is an absent storage entry and yields no events. An
/// unknown discriminant inside the list does not consume a body, so the
/// events after it are read from that body's bytes.
pub fn decode_bridge_events(bytes: &[u8]) -> CodecResult<BridgeEvents> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    decode_from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::base_types::U256;
    use crate::bridge::error::CodecError;

    fn generic_item(hash: [u8; 32]) -> GenericTransferItem {
        GenericTransferItem {
            destination: 1,
            deposit_nonce: 42,
            resource_id: ResourceId::new([3u8; 32]),
            metadata: hash.to_vec(),
        }
    }

    #[test]
    fn test_generic_event_preserves_hash_bytes() {
        let hash: [u8; 32] = core::array::from_fn(|i| i as u8);
        let bytes = BridgeEvent::Generic(generic_item(hash)).encode();
        assert_eq!(bytes[0], 2);

        let event = decode_bridge_event(&bytes).unwrap();
        assert!(event.is_generic());
        assert!(!event.is_fungible() && !event.is_non_fungible());
        match event {
            BridgeEvent::Generic(item) => assert_eq!(item.metadata, hash.to_vec()),
            other => panic!("Expected generic event, got: {:?}", other),
        }
    }

    #[test]
    fn test_event_accessors() {
        let event = BridgeEvent::Fungible(FungibleTransferItem {
            destination: 7,
            deposit_nonce: 11,
            resource_id: ResourceId::new([9u8; 32]),
            amount: U256::from(5u64),
            recipient: vec![1; 32],
        });
        assert_eq!(event.kind(), Some(TransferKind::Fungible));
        assert_eq!(event.destination(), Some(7));
        assert_eq!(event.deposit_nonce(), Some(11));
        assert_eq!(event.resource_id(), Some(ResourceId::new([9u8; 32])));

        let unknown = BridgeEvent::Unknown(4);
        assert_eq!(unknown.kind(), None);
        assert_eq!(unknown.deposit_nonce(), None);
    }

    #[test]
    fn test_unknown_event_tag_sets_no_flag() {
        let event = decode_bridge_event(&[5, 1, 2, 3]).unwrap();
        assert_eq!(event, BridgeEvent::Unknown(5));
        assert!(!event.is_fungible() && !event.is_non_fungible() && !event.is_generic());
    }

    #[test]
    fn test_truncated_event_body() {
        let mut bytes = BridgeEvent::NonFungible(NonFungibleTransferItem {
            destination: 1,
            deposit_nonce: 1,
            resource_id: ResourceId::ZERO,
            token_id: vec![1],
            recipient: vec![2; 32],
            metadata: vec![3; 8],
        })
        .encode();
        bytes.truncate(bytes.len() - 4);
        assert!(matches!(
            decode_bridge_event(&bytes).unwrap_err(),
            CodecError::TruncatedInput(_)
        ));
        assert!(matches!(
            decode_bridge_event(&[]).unwrap_err(),
            CodecError::TruncatedInput(_)
        ));
    }

    #[test]
    fn test_decode_bridge_events_empty_buffer() {
        assert_eq!(decode_bridge_events(&[]).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_bridge_events_preserves_order() {
        let events = vec![
            BridgeEvent::Generic(generic_item([1u8; 32])),
            BridgeEvent::Fungible(FungibleTransferItem {
                destination: 2,
                deposit_nonce: 43,
                resource_id: ResourceId::new([4u8; 32]),
                amount: U256::from(1_000_000u64),
                recipient: vec![8; 32],
            }),
            BridgeEvent::Generic(generic_item([2u8; 32])),
        ];
        let decoded = decode_bridge_events(&events.encode()).unwrap();
        assert_eq!(decoded, events);
    }
}
