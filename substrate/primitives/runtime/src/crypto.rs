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

//! Fixed size byte types: account identifiers, hashes and signatures.

use alloc::string::String;
use codec::{Decode, Encode, Error, Input, Output};
use core::fmt;

macro_rules! fixed_bytes {
	( $( #[ $attr:meta ] )* $name:ident, $len:expr ) => {
		$( #[ $attr ] )*
		#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
		pub struct $name(pub [u8; $len]);

		impl $name {
			/// Length in bytes.
			pub const LEN: usize = $len;

			/// Wrap raw bytes.
			pub const fn new(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}

			/// Every byte set to `byte`.
			pub const fn repeat_byte(byte: u8) -> Self {
				Self([byte; $len])
			}

			/// Borrow the raw bytes.
			pub fn as_bytes(&self) -> &[u8; $len] {
				&self.0
			}

			/// Render as a `0x` prefixed lower case hex string.
			pub fn to_hex(&self) -> String {
				let mut s = String::from("0x");
				s.push_str(&hex::encode(self.0));
				s
			}

			/// Parse a hex string, with or without a `0x` prefix.
			pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
				let mut bytes = [0u8; $len];
				hex::decode_to_slice(s.strip_prefix("0x").unwrap_or(s), &mut bytes)?;
				Ok(Self(bytes))
			}
		}

		impl From<[u8; $len]> for $name {
			fn from(bytes: [u8; $len]) -> Self {
				Self(bytes)
			}
		}

		impl From<$name> for [u8; $len] {
			fn from(x: $name) -> [u8; $len] {
				x.0
			}
		}

		impl AsRef<[u8]> for $name {
			fn as_ref(&self) -> &[u8] {
				&self.0[..]
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("0x")?;
				for byte in self.0.iter() {
					write!(f, "{:02x}", byte)?;
				}
				Ok(())
			}
		}

		impl fmt::Debug for $name {
			fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
				fmt::Display::fmt(self, f)
			}
		}

		impl Encode for $name {
			fn size_hint(&self) -> usize {
				$len
			}

			fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
				dest.write(&self.0)
			}
		}

		impl Decode for $name {
			fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
				let mut bytes = [0u8; $len];
				input.read(&mut bytes).map_err(|e| e.expecting(stringify!($name)))?;
				Ok(Self(bytes))
			}
		}

		impl serde::Serialize for $name {
			fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
				serializer.serialize_str(&self.to_hex())
			}
		}

		impl<'de> serde::Deserialize<'de> for $name {
			fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
				let s = <String as serde::Deserialize>::deserialize(deserializer)?;
				Self::from_hex(&s).map_err(|e| {
					serde::de::Error::custom(alloc::format!("invalid {}: {}", stringify!($name), e))
				})
			}
		}
	};
}

fixed_bytes!(
	/// An opaque 32-byte cryptographic identifier.
	AccountId32,
	32
);

fixed_bytes!(
	/// A 256-bit hash.
	H256,
	32
);

impl From<H256> for AccountId32 {
	fn from(h: H256) -> Self {
		Self(h.0)
	}
}

/// Signature container that can store known signature types.
///
/// The signature schemes themselves are implemented by the host; the runtime only carries the
/// bytes and hands them to a [`Verify`](crate::traits::Verify) implementation.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum MultiSignature {
	/// An Ed25519 signature.
	Ed25519([u8; 64]),
	/// An Sr25519 signature.
	Sr25519([u8; 64]),
	/// An ECDSA/SECP256k1 signature.
	Ecdsa([u8; 65]),
}

impl MultiSignature {
	/// The raw signature bytes, without the scheme tag.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			Self::Ed25519(sig) | Self::Sr25519(sig) => &sig[..],
			Self::Ecdsa(sig) => &sig[..],
		}
	}
}

impl Encode for MultiSignature {
	fn size_hint(&self) -> usize {
		1 + self.as_bytes().len()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		let index = match self {
			Self::Ed25519(_) => 0,
			Self::Sr25519(_) => 1,
			Self::Ecdsa(_) => 2,
		};
		dest.push_byte(index);
		dest.write(self.as_bytes());
	}
}

impl Decode for MultiSignature {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let err = |e: Error| e.expecting("MultiSignature");
		match input.read_byte().map_err(err)? {
			0 => {
				let mut sig = [0u8; 64];
				input.read(&mut sig).map_err(err)?;
				Ok(Self::Ed25519(sig))
			},
			1 => {
				let mut sig = [0u8; 64];
				input.read(&mut sig).map_err(err)?;
				Ok(Self::Sr25519(sig))
			},
			2 => {
				let mut sig = [0u8; 65];
				input.read(&mut sig).map_err(err)?;
				Ok(Self::Ecdsa(sig))
			},
			index => Err(Error::unknown_variant("MultiSignature", index)),
		}
	}
}
