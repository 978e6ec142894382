// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Proposal builder for the destination chain.
//!
//! Every inbound transfer becomes exactly one [`Proposal`]: the resource id
//! picks the handler method, the payload supplies its arguments, and the
//! result is wrapped with the deposit nonce and source chain so the bridge
//! pallet can key votes on it. Building is a pure transform; failures are
//! returned to the caller and never retried here.

use crate::call_builder::{CallArg, CallEncoder};
use crate::error::{BridgeError, BridgeResult};
use crate::resolver::ResourceResolver;
use crate::types::{Message, Proposal, TransferPayload};
use serde::{Deserialize, Serialize};
use substrate_bridge_types::base_types::U256;
use substrate_bridge_types::transfer::TransferKind;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProposalConfig {
    /// Append the encoded resource id to every call, for handlers that take
    /// it as a trailing argument.
    pub extend_call: bool,
}

pub struct ProposalBuilder<R, E> {
    resolver: R,
    encoder: E,
    config: ProposalConfig,
}

impl<R: ResourceResolver, E: CallEncoder> ProposalBuilder<R, E> {
    pub fn new(resolver: R, encoder: E, config: ProposalConfig) -> Self {
        Self {
            resolver,
            encoder,
            config,
        }
    }

    pub fn config(&self) -> ProposalConfig {
        self.config
    }

    /// Builds the proposal matching the message's payload kind.
    pub fn build_proposal(&self, message: &Message) -> BridgeResult<Proposal> {
        self.build(message, message.kind())
    }

    pub fn build_fungible_proposal(&self, message: &Message) -> BridgeResult<Proposal> {
        self.build(message, TransferKind::Fungible)
    }

    pub fn build_nonfungible_proposal(&self, message: &Message) -> BridgeResult<Proposal> {
        self.build(message, TransferKind::NonFungible)
    }

    pub fn build_generic_proposal(&self, message: &Message) -> BridgeResult<Proposal> {
        self.build(message, TransferKind::Generic)
    }

    fn build(&self, message: &Message, kind: TransferKind) -> BridgeResult<Proposal> {
        let result = self.try_build(message, kind);
        match &result {
            Ok(proposal) => debug!(
                nonce = message.nonce,
                source = message.source,
                resource_id = %message.resource_id,
                method = proposal.method(),
                %kind,
                "Built proposal"
            ),
            Err(e) => warn!(
                nonce = message.nonce,
                source = message.source,
                resource_id = %message.resource_id,
                error_kind = e.kind(),
                %kind,
                "Failed to build proposal: {e}"
            ),
        }
        result
    }

    fn try_build(&self, message: &Message, kind: TransferKind) -> BridgeResult<Proposal> {
        let method = self.resolver.resolve(&message.resource_id)?;
        let args = call_args(&method, kind, &message.payload)?;
        let mut call = self.encoder.encode_call(&method, &args)?;
        if self.config.extend_call {
            call.extend_args(&self.encoder.encode_resource_id(&message.resource_id));
        }
        Ok(Proposal::new(
            message.nonce,
            call,
            message.source,
            message.resource_id,
            method,
        ))
    }
}

// Handler arguments per kind:
// fungible (recipient, amount), non-fungible (recipient, token id, metadata),
// generic (hash)
fn call_args(
    method: &str,
    kind: TransferKind,
    payload: &TransferPayload,
) -> BridgeResult<Vec<CallArg>> {
    match (kind, payload) {
        (TransferKind::Fungible, TransferPayload::Fungible(p)) => {
            // Balances on the destination are u128
            if p.amount > U256::from(u128::MAX) {
                return Err(BridgeError::call_failed(
                    method,
                    format!("amount {} does not fit in u128", p.amount),
                ));
            }
            Ok(vec![
                CallArg::AccountId(p.recipient),
                CallArg::U128(p.amount.low_u128()),
            ])
        }
        (TransferKind::NonFungible, TransferPayload::NonFungible(p)) => Ok(vec![
            CallArg::AccountId(p.recipient),
            CallArg::U256(p.token_id),
            CallArg::Bytes(p.metadata.clone()),
        ]),
        (TransferKind::Generic, TransferPayload::Generic(p)) => Ok(vec![CallArg::Hash(p.hash)]),
        (expected, payload) => Err(BridgeError::malformed(
            0,
            format!("expected {expected} payload, got {}", payload.kind()),
        )),
    }
}
