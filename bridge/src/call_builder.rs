// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Call builder for the destination runtime.
//!
//! Bridge handlers differ per transfer kind in both arity and argument types,
//! so a call is described as a method name plus a list of typed arguments and
//! checked against the runtime metadata before it is encoded.

use crate::error::{BridgeError, BridgeResult};
use crate::metadata::{ArgType, MetadataProvider};
use parity_scale_codec::Encode;
use substrate_bridge_types::base_types::{AccountId, ResourceId, H256, U256};
use substrate_bridge_types::call::Call;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArg {
    AccountId(AccountId),
    U128(u128),
    U256(U256),
    Bytes(Vec<u8>),
    Hash(H256),
}

impl CallArg {
    pub fn arg_type(&self) -> ArgType {
        match self {
            CallArg::AccountId(_) => ArgType::AccountId,
            CallArg::U128(_) => ArgType::U128,
            CallArg::U256(_) => ArgType::U256,
            CallArg::Bytes(_) => ArgType::Bytes,
            CallArg::Hash(_) => ArgType::Hash,
        }
    }

    pub fn encode_to(&self, dest: &mut Vec<u8>) {
        match self {
            CallArg::AccountId(account) => account.encode_to(dest),
            CallArg::U128(value) => value.encode_to(dest),
            CallArg::U256(value) => value.encode_to(dest),
            CallArg::Bytes(bytes) => bytes.encode_to(dest),
            CallArg::Hash(hash) => hash.encode_to(dest),
        }
    }
}

/// Turns a method name and typed arguments into a runtime call.
pub trait CallEncoder: Send + Sync {
    fn encode_call(&self, method: &str, args: &[CallArg]) -> BridgeResult<Call>;

    /// Encoding appended to call arguments for handlers that expect the
    /// resource id as a trailing argument.
    fn encode_resource_id(&self, resource_id: &ResourceId) -> Vec<u8> {
        resource_id.encode()
    }
}

impl<T: CallEncoder + ?Sized> CallEncoder for std::sync::Arc<T> {
    fn encode_call(&self, method: &str, args: &[CallArg]) -> BridgeResult<Call> {
        (**self).encode_call(method, args)
    }

    fn encode_resource_id(&self, resource_id: &ResourceId) -> Vec<u8> {
        (**self).encode_resource_id(resource_id)
    }
}

/// SCALE call encoder checked against runtime metadata.
pub struct MetadataCallEncoder<M> {
    metadata: M,
}

impl<M: MetadataProvider> MetadataCallEncoder<M> {
    pub fn new(metadata: M) -> Self {
        Self { metadata }
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }
}

impl<M: MetadataProvider> CallEncoder for MetadataCallEncoder<M> {
    fn encode_call(&self, method: &str, args: &[CallArg]) -> BridgeResult<Call> {
        let signature = self
            .metadata
            .call_signature(method)
            .ok_or_else(|| BridgeError::call_failed(method, "method not found in metadata"))?;

        if signature.args.len() != args.len() {
            return Err(BridgeError::call_failed(
                method,
                format!(
                    "expected {} arguments, got {}",
                    signature.args.len(),
                    args.len()
                ),
            ));
        }

        let mut encoded = Vec::new();
        for (position, (expected, arg)) in signature.args.iter().zip(args).enumerate() {
            if *expected != arg.arg_type() {
                return Err(BridgeError::call_failed(
                    method,
                    format!(
                        "argument {position} has type {}, metadata expects {expected}",
                        arg.arg_type()
                    ),
                ));
            }
            arg.encode_to(&mut encoded);
        }

        Ok(Call::new(signature.index, encoded))
    }
}
