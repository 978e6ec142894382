// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::BridgeResult;
use crate::types::Proposal;
use substrate_bridge_types::base_types::AccountId;
use substrate_bridge_types::vote::{decode_vote_state, VoteState};
use tracing::debug;

/// What a relayer should do about a proposal given its on-chain votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum VoteDecision {
    /// No vote recorded yet from this relayer, and the proposal is open.
    Vote,
    AlreadyVoted,
    /// The proposal was approved, rejected or is in a state this relayer
    /// does not recognise. Nothing left to do.
    Complete,
}

/// `state` is `None` when the votes storage holds nothing for the proposal.
pub fn assess_vote(state: Option<&VoteState>, relayer: &AccountId) -> VoteDecision {
    match state {
        None => VoteDecision::Vote,
        Some(state) if !state.status.is_active() => VoteDecision::Complete,
        Some(state) if state.has_voted(relayer) => VoteDecision::AlreadyVoted,
        Some(_) => VoteDecision::Vote,
    }
}

/// Same as [`assess_vote`] on the raw bytes read from the votes storage.
pub fn assess_vote_storage(
    proposal: &Proposal,
    storage: Option<&[u8]>,
    relayer: &AccountId,
) -> BridgeResult<VoteDecision> {
    let state = storage.map(decode_vote_state).transpose()?;
    let decision = assess_vote(state.as_ref(), relayer);
    debug!(
        nonce = proposal.deposit_nonce(),
        source = proposal.source_id(),
        method = proposal.method(),
        %decision,
        "Assessed proposal votes"
    );
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;
    use parity_scale_codec::Encode;
    use substrate_bridge_types::base_types::ResourceId;
    use substrate_bridge_types::call::{Call, CallIndex};
    use substrate_bridge_types::vote::VoteStatus;

    fn relayer() -> AccountId {
        AccountId::new([0xaa; 32])
    }

    fn state(votes_for: Vec<AccountId>, status: VoteStatus) -> VoteState {
        VoteState {
            votes_for,
            votes_against: vec![],
            status,
        }
    }

    fn proposal() -> Proposal {
        Proposal::new(
            1,
            Call::new(CallIndex::new(11, 2), vec![0; 32]),
            0,
            ResourceId::new([3; 32]),
            "Example.remark".to_string(),
        )
    }

    #[test]
    fn test_no_votes_yet() {
        assert_eq!(assess_vote(None, &relayer()), VoteDecision::Vote);
    }

    #[test]
    fn test_active_proposal() {
        let other = AccountId::new([0xbb; 32]);
        let open = state(vec![other], VoteStatus::Active);
        assert_eq!(assess_vote(Some(&open), &relayer()), VoteDecision::Vote);

        let voted = state(vec![other, relayer()], VoteStatus::Active);
        assert_eq!(
            assess_vote(Some(&voted), &relayer()),
            VoteDecision::AlreadyVoted
        );

        let mut voted_against = state(vec![], VoteStatus::Active);
        voted_against.votes_against.push(relayer());
        assert_eq!(
            assess_vote(Some(&voted_against), &relayer()),
            VoteDecision::AlreadyVoted
        );
    }

    #[test]
    fn test_finished_proposals_are_complete() {
        for status in [
            VoteStatus::Approved,
            VoteStatus::Rejected,
            VoteStatus::Unknown(7),
        ] {
            assert_eq!(
                assess_vote(Some(&state(vec![], status)), &relayer()),
                VoteDecision::Complete
            );
        }
    }

    #[test]
    fn test_assess_vote_storage() {
        let bytes = state(vec![relayer()], VoteStatus::Active).encode();
        assert_eq!(
            assess_vote_storage(&proposal(), Some(&bytes), &relayer()).unwrap(),
            VoteDecision::AlreadyVoted
        );
        assert_eq!(
            assess_vote_storage(&proposal(), None, &relayer()).unwrap(),
            VoteDecision::Vote
        );
        assert!(matches!(
            assess_vote_storage(&proposal(), Some(&bytes[..bytes.len() - 1]), &relayer()),
            Err(BridgeError::TruncatedInput(_))
        ));
    }
}
