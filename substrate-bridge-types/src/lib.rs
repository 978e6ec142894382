// Copyright (c) Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Bridge pallet types
//!
//! Mirrors of the storage entries and events of the Substrate bridge pallet,
//! with the SCALE layouts the relayer reads and writes. Nothing in this crate
//! performs I/O.

pub mod bridge;

pub use bridge::{base_types, call, codec, error, events, transfer, vote};
