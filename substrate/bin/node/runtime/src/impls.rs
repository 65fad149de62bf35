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


//! Some configurable implementations as associated type for the runtime.

use crate::{AccountId, AccountIndex, Address, Signature};
use ed25519_dalek::Verifier;
use k256::ecdsa::{RecoveryId, VerifyingKey};
use tessera_primitives::{
	hashing::blake2_256,
	traits::{AccountIdLookup, Lookup, LookupError, StaticLookup, Verify},
	MultiSignature,
};

const LOG_TARGET: &str = "runtime::context";

/// The signing context of sr25519 signatures over extrinsic payloads.
pub const SR25519_SIGNING_CTX: &[u8] = b"substrate";

/// The context extrinsics are checked in: addresses resolve through [`AccountIdLookup`] and
/// signatures are verified against the account they claim to come from.
///
/// - Ed25519 and Sr25519 accounts are their public key.
/// - Ecdsa accounts are the blake2-256 hash of the compressed public key, which is recovered
///   from the signature over the blake2-256 hash of the message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuntimeContext;

impl Lookup for RuntimeContext {
	type Source = Address;
	type Target = AccountId;

	fn lookup(&self, s: Address) -> Result<AccountId, LookupError> {
		AccountIdLookup::<AccountIndex>::lookup(s)
	}
}

impl Verify<Signature> for RuntimeContext {
	type Signer = AccountId;

	fn verify(&self, signature: &Signature, msg: &[u8], signer: &AccountId) -> bool {
		let valid = match signature {
			MultiSignature::Ed25519(sig) => ed25519_verify(sig, msg, signer.as_bytes()),
			MultiSignature::Sr25519(sig) => sr25519_verify(sig, msg, signer.as_bytes()),
			MultiSignature::Ecdsa(sig) =>
				match secp256k1_ecdsa_recover_compressed(sig, &blake2_256(msg)) {
					Some(public) => blake2_256(&public) == *signer.as_bytes(),
					None => false,
				},
		};
		if !valid {
			log::trace!(target: LOG_TARGET, "bad signature for {}", signer);
		}
		valid
	}
}

/// Verify an ed25519 signature.
pub fn ed25519_verify(sig: &[u8; 64], msg: &[u8], public: &[u8; 32]) -> bool {
	let Ok(public) = ed25519_dalek::VerifyingKey::from_bytes(public) else { return false };
	let sig = ed25519_dalek::Signature::from_bytes(sig);
	public.verify(msg, &sig).is_ok()
}

/// Verify an sr25519 signature made in the [`SR25519_SIGNING_CTX`] context.
pub fn sr25519_verify(sig: &[u8; 64], msg: &[u8], public: &[u8; 32]) -> bool {
	let Ok(sig) = schnorrkel::Signature::from_bytes(sig) else { return false };
	let Ok(public) = schnorrkel::PublicKey::from_bytes(public) else { return false };
	public.verify_simple(SR25519_SIGNING_CTX, msg, &sig).is_ok()
}

/// Recover the compressed secp256k1 public key that made `sig` over the prehashed `msg`.
///
/// The last byte of `sig` is the recovery id, either raw (0 or 1) or with the legacy offset of
/// 27.
pub fn secp256k1_ecdsa_recover_compressed(sig: &[u8; 65], msg: &[u8; 32]) -> Option<[u8; 33]> {
	let v = if sig[64] > 26 { sig[64] - 27 } else { sig[64] };
	let rid = RecoveryId::from_byte(v)?;
	let signature = k256::ecdsa::Signature::from_slice(&sig[..64]).ok()?;
	let public = VerifyingKey::recover_from_prehash(msg, &signature, rid).ok()?;
	public.to_encoded_point(true).as_bytes().try_into().ok()
}
