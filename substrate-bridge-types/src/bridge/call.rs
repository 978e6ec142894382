// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Runtime calls as the destination chain encodes them: a two-byte call
//! index followed by the already-encoded arguments, with no length prefix.

use parity_scale_codec::{Decode, Encode, Error, Input, Output};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pallet index and call index inside that pallet
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Encode, Decode, Serialize, Deserialize,
)]
pub struct CallIndex {
    pub section: u8,
    pub method: u8,
}

impl CallIndex {
    pub fn new(section: u8, method: u8) -> Self {
        Self { section, method }
    }
}

impl fmt::Display for CallIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.method)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Call {
    pub index: CallIndex,
    pub args: Vec<u8>,
}

impl Call {
    pub fn new(index: CallIndex, args: Vec<u8>) -> Self {
        Self { index, args }
    }

    /// Appends already-encoded bytes to the argument list.
    pub fn extend_args(&mut self, encoded: &[u8]) {
        self.args.extend_from_slice(encoded);
    }
}

impl Encode for Call {
    fn size_hint(&self) -> usize {
        2 + self.args.len()
    }

    fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
        self.index.encode_to(dest);
        dest.write(&self.args);
    }
}

impl Decode for Call {
    // Arguments are not self-delimiting, so a call can only be decoded when
    // it is the last thing in the input.
    fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
        let index = CallIndex::decode(input)?;
        let len = input
            .remaining_len()?
            .ok_or("call arguments need a bounded input")?;
        let mut args = vec![0u8; len];
        input.read(&mut args)?;
        Ok(Self { index, args })
    }
}
