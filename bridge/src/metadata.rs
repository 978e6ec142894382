// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Destination runtime metadata needed to encode calls.
//!
//! Fetching metadata from a node is the connection's job. This module only
//! holds what was fetched: for every callable method, its call index and the
//! types of its arguments in order.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use substrate_bridge_types::call::CallIndex;
use tracing::info;

/// Argument types a bridge handler call may take
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum ArgType {
    AccountId,
    U128,
    U256,
    Bytes,
    Hash,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSignature {
    pub index: CallIndex,
    pub args: Vec<ArgType>,
}

impl CallSignature {
    pub fn new(index: CallIndex, args: Vec<ArgType>) -> Self {
        Self { index, args }
    }
}

/// Read access to runtime metadata. Implementations must tolerate
/// concurrent readers.
pub trait MetadataProvider: Send + Sync {
    /// Looks up a call by its `Pallet.call` name.
    fn call_signature(&self, method: &str) -> Option<CallSignature>;
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for Arc<T> {
    fn call_signature(&self, method: &str) -> Option<CallSignature> {
        (**self).call_signature(method)
    }
}

impl<T: MetadataProvider + ?Sized> MetadataProvider for &T {
    fn call_signature(&self, method: &str) -> Option<CallSignature> {
        (**self).call_signature(method)
    }
}

/// Fixed table of call signatures keyed by `Pallet.call`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticMetadata {
    calls: BTreeMap<String, CallSignature>,
}

impl StaticMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call(mut self, method: &str, signature: CallSignature) -> Self {
        self.insert(method, signature);
        self
    }

    /// Returns the previous signature registered under `method`, if any.
    pub fn insert(&mut self, method: &str, signature: CallSignature) -> Option<CallSignature> {
        self.calls.insert(method.to_string(), signature)
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl MetadataProvider for StaticMetadata {
    fn call_signature(&self, method: &str) -> Option<CallSignature> {
        self.calls.get(method).cloned()
    }
}

/// Metadata that can be swapped after a runtime upgrade while builders keep
/// reading it.
pub struct MetadataCache {
    current: ArcSwap<StaticMetadata>,
}

impl MetadataCache {
    pub fn new(metadata: StaticMetadata) -> Self {
        Self {
            current: ArcSwap::from_pointee(metadata),
        }
    }

    pub fn refresh(&self, metadata: StaticMetadata) {
        info!("Refreshing runtime metadata with {} calls", metadata.len());
        self.current.store(Arc::new(metadata));
    }

    pub fn snapshot(&self) -> Arc<StaticMetadata> {
        self.current.load_full()
    }
}

impl MetadataProvider for MetadataCache {
    fn call_signature(&self, method: &str) -> Option<CallSignature> {
        self.current.load().call_signature(method)
    }
}
