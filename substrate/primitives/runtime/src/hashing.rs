// This file is part of Substrate.

// Copyright (C) Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: Apache-2.0

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Hashing functions used by the runtime.
//!
//! The implementations are supplied by `sp-crypto-hashing`; this module fixes the set the
//! runtime relies on and adds the typed helpers for [`H256`].

use crate::H256;
use alloc::vec::Vec;
use codec::Encode;

pub use sp_crypto_hashing::{blake2_128, blake2_256, twox_128, twox_256, twox_64};

/// Blake2-256 hash of `data` as an [`H256`].
pub fn blake2_256_hash(data: &[u8]) -> H256 {
	H256(blake2_256(data))
}

/// Blake2-256 hash of the encoding of `value`.
pub fn hash_of<T: Encode + ?Sized>(value: &T) -> H256 {
	value.using_encoded(blake2_256_hash)
}

/// Commitment over an ordered list of encoded items.
///
/// This stands in for the ordered trie root: the items are encoded as a length prefixed
/// sequence of byte vectors and hashed with Blake2-256.
pub fn ordered_root(items: &[Vec<u8>]) -> H256 {
	hash_of(items)
}
