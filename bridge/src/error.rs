// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use substrate_bridge_types::base_types::ResourceId;
use substrate_bridge_types::error::CodecError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Not enough bytes to decode a fixed or length-prefixed field
    #[error("Truncated input: {0}")]
    TruncatedInput(String),
    /// Wrong type or shape at an expected message payload position
    #[error("Malformed payload at position {position}: {reason}")]
    MalformedPayload { position: usize, reason: String },
    /// No destination method registered for the resource id
    #[error("Unresolved resource id {0}")]
    UnresolvedResource(ResourceId),
    /// Call encoder rejected the method or its arguments
    #[error("Failed to construct call {method}: {reason}")]
    CallConstructionFailed { method: String, reason: String },
    #[error("Invalid relayer config: {0}")]
    ConfigError(String),
}

impl BridgeError {
    pub fn malformed(position: usize, reason: impl Into<String>) -> Self {
        BridgeError::MalformedPayload {
            position,
            reason: reason.into(),
        }
    }

    pub fn call_failed(method: &str, reason: impl Into<String>) -> Self {
        BridgeError::CallConstructionFailed {
            method: method.to_string(),
            reason: reason.into(),
        }
    }

    /// Short label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::TruncatedInput(_) => "truncated_input",
            BridgeError::MalformedPayload { .. } => "malformed_payload",
            BridgeError::UnresolvedResource(_) => "unresolved_resource",
            BridgeError::CallConstructionFailed { .. } => "call_construction_failed",
            BridgeError::ConfigError(_) => "config_error",
        }
    }
}

impl From<CodecError> for BridgeError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::TruncatedInput(msg) => BridgeError::TruncatedInput(msg),
        }
    }
}

pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
