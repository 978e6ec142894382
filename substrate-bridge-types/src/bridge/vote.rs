// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Read model of the pallet's `Votes` storage entry.

use super::base_types::AccountId;
use super::codec::{decode_from_bytes, decode_variant, read_variant, TaggedVariant};
use super::error::CodecResult;
use parity_scale_codec::{Decode, Encode, Input, Output};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteStatus {
    Active,
    Approved,
    Rejected,
    /// Status byte this relayer does not understand
    Unknown(u8),
}

impl VoteStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, VoteStatus::Active)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, VoteStatus::Approved)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, VoteStatus::Rejected)
    }

    fn discriminant(&self) -> u8 {
        match self {
            VoteStatus::Active => 0,
            VoteStatus::Approved => 1,
            VoteStatus::Rejected => 2,
            VoteStatus::Unknown(tag) => *tag,
        }
    }
}

impl TaggedVariant for VoteStatus {
    fn unknown(tag: u8) -> Self {
        VoteStatus::Unknown(tag)
    }

    fn decode_body<I: Input>(
        tag: u8,
        _input: &mut I,
    ) -> Result<Option<Self>, parity_scale_codec::Error> {
        Ok(match tag {
            0 => Some(VoteStatus::Active),
            1 => Some(VoteStatus::Approved),
            2 => Some(VoteStatus::Rejected),
            _ => None,
        })
    }
}

impl Decode for VoteStatus {
    fn decode<I: Input>(input: &mut I) -> Result<Self, parity_scale_codec::Error> {
        read_variant(input)
    }
}

impl Encode for VoteStatus {
    fn size_hint(&self) -> usize {
        1
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        dest.push_byte(self.discriminant());
    }
}

/// Votes cast on one proposal
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct VoteState {
    pub votes_for: Vec<AccountId>,
    pub votes_against: Vec<AccountId>,
    pub status: VoteStatus,
}

impl VoteState {
    pub fn has_voted(&self, account: &AccountId) -> bool {
        self.votes_for.contains(account) || self.votes_against.contains(account)
    }
}

pub fn decode_vote_status(bytes: &[u8]) -> CodecResult<VoteStatus> {
    decode_variant(bytes).map(|(status, _rest)| status)
}

pub fn decode_vote_state(bytes: &[u8]) -> CodecResult<VoteState> {
    decode_from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::error::CodecError;
    use proptest::prelude::*;

    fn flags(status: VoteStatus) -> (bool, bool, bool) {
        (status.is_active(), status.is_approved(), status.is_rejected())
    }

    #[test]
    fn test_vote_status_bytes() {
        assert_eq!(flags(decode_vote_status(&[0]).unwrap()), (true, false, false));
        assert_eq!(flags(decode_vote_status(&[1]).unwrap()), (false, true, false));
        assert_eq!(flags(decode_vote_status(&[2]).unwrap()), (false, false, true));
        // Unrecognised byte decodes without error and with no flag set
        let unknown = decode_vote_status(&[7]).unwrap();
        assert_eq!(unknown, VoteStatus::Unknown(7));
        assert_eq!(flags(unknown), (false, false, false));
    }

    #[test]
    fn test_vote_state_decodes_what_was_encoded() {
        let a = AccountId::new([0xaa; 32]);
        let b = AccountId::new([0xbb; 32]);
        let c = AccountId::new([0xcc; 32]);
        let state = VoteState {
            votes_for: vec![a, b],
            votes_against: vec![c],
            status: VoteStatus::Approved,
        };

        let decoded = decode_vote_state(&state.encode()).unwrap();
        assert_eq!(decoded.votes_for, vec![a, b]);
        assert_eq!(decoded.votes_against, vec![c]);
        assert!(decoded.status.is_approved());
        assert!(decoded.has_voted(&c));
        assert!(!decoded.has_voted(&AccountId::ZERO));
    }

    #[test]
    fn test_vote_state_layout() {
        let state = VoteState {
            votes_for: vec![AccountId::new([1; 32])],
            votes_against: vec![],
            status: VoteStatus::Rejected,
        };
        let bytes = state.encode();
        // compact(1) ++ 32 bytes ++ compact(0) ++ status
        assert_eq!(bytes.len(), 1 + 32 + 1 + 1);
        assert_eq!(bytes[0], 0x04);
        assert_eq!(bytes[33], 0x00);
        assert_eq!(bytes[34], 2);
    }

    #[test]
    fn test_vote_state_missing_status_is_truncated() {
        // Two empty lists and no status byte
        assert!(matches!(
            decode_vote_state(&[0, 0]).unwrap_err(),
            CodecError::TruncatedInput(_)
        ));
        // One voter declared, half an account id present
        let mut bytes = vec![0x04];
        bytes.extend_from_slice(&[1u8; 16]);
        assert!(matches!(
            decode_vote_state(&bytes).unwrap_err(),
            CodecError::TruncatedInput(_)
        ));
    }

    proptest! {
        #[test]
        fn prop_vote_state_round_trip(
            votes_for in proptest::collection::vec(any::<[u8; 32]>(), 0..6),
            votes_against in proptest::collection::vec(any::<[u8; 32]>(), 0..6),
            status_byte in any::<u8>(),
        ) {
            let status = decode_vote_status(&[status_byte]).unwrap();
            let state = VoteState {
                votes_for: votes_for.into_iter().map(AccountId::new).collect(),
                votes_against: votes_against.into_iter().map(AccountId::new).collect(),
                status,
            };
            prop_assert_eq!(decode_vote_state(&state.encode()).unwrap(), state);
        }
    }
}
