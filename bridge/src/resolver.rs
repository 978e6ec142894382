// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{BridgeError, BridgeResult};
use std::collections::BTreeMap;
use std::sync::Arc;
use substrate_bridge_types::base_types::ResourceId;

/// Maps a resource id to the `Pallet.call` that handles it on the
/// destination chain.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, resource_id: &ResourceId) -> BridgeResult<String>;
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for Arc<T> {
    fn resolve(&self, resource_id: &ResourceId) -> BridgeResult<String> {
        (**self).resolve(resource_id)
    }
}

impl<T: ResourceResolver + ?Sized> ResourceResolver for &T {
    fn resolve(&self, resource_id: &ResourceId) -> BridgeResult<String> {
        (**self).resolve(resource_id)
    }
}

/// Resolver over a fixed registration table, usually loaded from config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticResourceResolver {
    methods: BTreeMap<ResourceId, String>,
}

impl StaticResourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, resource_id: ResourceId, method: &str) -> Self {
        self.register(resource_id, method);
        self
    }

    pub fn register(&mut self, resource_id: ResourceId, method: &str) -> Option<String> {
        self.methods.insert(resource_id, method.to_string())
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl FromIterator<(ResourceId, String)> for StaticResourceResolver {
    fn from_iter<I: IntoIterator<Item = (ResourceId, String)>>(iter: I) -> Self {
        Self {
            methods: iter.into_iter().collect(),
        }
    }
}

impl ResourceResolver for StaticResourceResolver {
    fn resolve(&self, resource_id: &ResourceId) -> BridgeResult<String> {
        self.methods
            .get(resource_id)
            .cloned()
            .ok_or(BridgeError::UnresolvedResource(*resource_id))
    }
}
