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

//! Testing utilities.
//!
//! The runtime never implements a signature scheme itself. [`TestContext`] stands in for the
//! environment with a deterministic keyed hash: a signature is `blake2_256(signer ++ message)`
//! twice over, wrapped as an sr25519 signature.

use crate::{
	hashing::blake2_256,
	traits::{AccountIdLookup, Lookup, LookupError, StaticLookup, Verify},
	AccountId32, MultiAddress, MultiSignature,
};
use alloc::vec::Vec;

fn expected_signature(signer: &AccountId32, msg: &[u8]) -> [u8; 64] {
	let mut preimage = Vec::with_capacity(32 + msg.len());
	preimage.extend_from_slice(signer.as_bytes());
	preimage.extend_from_slice(msg);
	let digest = blake2_256(&preimage);
	let mut signature = [0u8; 64];
	signature[..32].copy_from_slice(&digest);
	signature[32..].copy_from_slice(&digest);
	signature
}

/// Sign `msg` as `signer` with the test scheme.
pub fn sign(signer: &AccountId32, msg: &[u8]) -> MultiSignature {
	MultiSignature::Sr25519(expected_signature(signer, msg))
}

/// A checking context resolving addresses with [`AccountIdLookup`] and verifying signatures made
/// by [`sign`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TestContext;

impl Lookup for TestContext {
	type Source = MultiAddress<AccountId32, u32>;
	type Target = AccountId32;

	fn lookup(&self, s: Self::Source) -> Result<AccountId32, LookupError> {
		AccountIdLookup::<u32>::lookup(s)
	}
}

impl Verify<MultiSignature> for TestContext {
	type Signer = AccountId32;

	fn verify(&self, signature: &MultiSignature, msg: &[u8], signer: &AccountId32) -> bool {
		match signature {
			MultiSignature::Sr25519(raw) => *raw == expected_signature(signer, msg),
			_ => false,
		}
	}
}
