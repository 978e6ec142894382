// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::error::{BridgeError, BridgeResult};
use crate::metadata::{ArgType, CallSignature, StaticMetadata};
use crate::proposal_builder::ProposalConfig;
use crate::resolver::StaticResourceResolver;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use substrate_bridge_config::Config;
use substrate_bridge_types::base_types::{ChainId, ResourceId};
use substrate_bridge_types::call::CallIndex;
use tracing::{info, warn};

/// Call signature as written in the relayer config, for runtimes whose
/// metadata is pinned rather than fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CallSignatureConfig {
    /// `Pallet.call`
    pub method: String,
    pub section: u8,
    pub index: u8,
    #[serde(default)]
    pub args: Vec<ArgType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelayerConfig {
    /// Chain id of the Substrate chain this relayer writes to.
    pub chain_id: ChainId,
    #[serde(default)]
    pub extend_call: bool,
    /// Hex resource id to handler method.
    #[serde(default)]
    pub resources: BTreeMap<String, String>,
    #[serde(default)]
    pub calls: Vec<CallSignatureConfig>,
}

impl Config for RelayerConfig {}

impl RelayerConfig {
    pub fn validate(
        &self,
    ) -> BridgeResult<(ProposalConfig, StaticResourceResolver, StaticMetadata)> {
        let mut metadata = StaticMetadata::new();
        for call in &self.calls {
            let signature =
                CallSignature::new(CallIndex::new(call.section, call.index), call.args.clone());
            if metadata.insert(&call.method, signature).is_some() {
                return Err(BridgeError::ConfigError(format!(
                    "duplicate call signature for method {}",
                    call.method
                )));
            }
        }

        let mut resolver = StaticResourceResolver::new();
        for (id, method) in &self.resources {
            let resource_id = ResourceId::from_str(id).map_err(|e| {
                BridgeError::ConfigError(format!("invalid resource id {id}: {e}"))
            })?;
            if resolver.register(resource_id, method).is_some() {
                return Err(BridgeError::ConfigError(format!(
                    "resource id {resource_id} is registered more than once"
                )));
            }
            if !metadata.is_empty() && !self.calls.iter().any(|c| &c.method == method) {
                warn!("Resource {resource_id} maps to {method}, which has no call signature");
            }
        }

        info!(
            chain_id = self.chain_id,
            resources = resolver.len(),
            calls = metadata.len(),
            "Validated relayer config"
        );
        Ok((
            ProposalConfig {
                extend_call: self.extend_call,
            },
            resolver,
            metadata,
        ))
    }
}
