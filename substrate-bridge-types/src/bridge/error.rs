// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors raised while decoding on-chain bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Not enough bytes for a fixed-width field, a discriminant, or a
    /// length-prefixed field whose declared length overruns the buffer.
    #[error("Truncated input: {0}")]
    TruncatedInput(String),
}

impl From<parity_scale_codec::Error> for CodecError {
    fn from(e: parity_scale_codec::Error) -> Self {
        CodecError::TruncatedInput(e.to_string())
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
