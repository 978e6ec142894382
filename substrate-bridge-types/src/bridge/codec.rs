// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Decoding of single-byte discriminated unions.
//!
//! The bridge pallet encodes its enums as one discriminant byte followed by
//! the selected variant's fields. Producers already on chain rely on the
//! relayer tolerating discriminants it does not know about: such a byte
//! decodes to the type's `unknown` value instead of an error, and the bytes
//! after it are left untouched.

use super::error::{CodecError, CodecResult};
use parity_scale_codec::{Decode, Input};

/// A type encoded as `discriminant ++ body`.
pub trait TaggedVariant: Sized {
    /// Value for a discriminant with no known body layout.
    fn unknown(tag: u8) -> Self;

    /// Decodes the body selected by `tag`. Returns `Ok(None)` when `tag` is
    /// not a recognised discriminant, in which case nothing is consumed.
    fn decode_body<I: Input>(
        tag: u8,
        input: &mut I,
    ) -> Result<Option<Self>, parity_scale_codec::Error>;
}

/// Reads one discriminant byte and the body it selects from `input`.
pub fn read_variant<T: TaggedVariant, I: Input>(
    input: &mut I,
) -> Result<T, parity_scale_codec::Error> {
    let tag = input.read_byte()?;
    Ok(T::decode_body(tag, input)?.unwrap_or_else(|| T::unknown(tag)))
}

/// Decodes a tagged variant from the front of `bytes` and returns it together
/// with the bytes that follow it.
pub fn decode_variant<T: TaggedVariant>(bytes: &[u8]) -> CodecResult<(T, &[u8])> {
    if bytes.is_empty() {
        return Err(CodecError::TruncatedInput(
            "no discriminant byte to read".to_string(),
        ));
    }
    let mut input = bytes;
    let value = read_variant(&mut input)?;
    Ok((value, input))
}

/// Decodes a `T` from the front of `bytes`. Trailing bytes are ignored, as
/// storage reads of the relayer always have.
pub fn decode_from_bytes<T: Decode>(bytes: &[u8]) -> CodecResult<T> {
    let mut input = bytes;
    Ok(T::decode(&mut input)?)
}
