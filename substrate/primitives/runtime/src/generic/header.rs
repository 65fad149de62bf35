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

//! The block header.

use crate::{hashing::hash_of, BlockNumber, H256};
use codec::{Compact, Decode, Encode, Error, Input, Output};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Abstraction over a block header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct Header {
	/// The parent hash.
	pub parent_hash: H256,
	/// The block number.
	pub number: BlockNumber,
	/// The state trie merkle root
	pub state_root: H256,
	/// The merkle root of the extrinsics.
	pub extrinsics_root: H256,
}

impl Header {
	/// Create a new header.
	pub fn new(
		number: BlockNumber,
		extrinsics_root: H256,
		state_root: H256,
		parent_hash: H256,
	) -> Self {
		Self { parent_hash, number, state_root, extrinsics_root }
	}

	/// The blake2-256 hash of the encoded header.
	pub fn hash(&self) -> H256 {
		hash_of(self)
	}
}

impl Encode for Header {
	fn size_hint(&self) -> usize {
		32 * 3 + Compact(self.number).size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.parent_hash.encode_to(dest);
		Compact(self.number).encode_to(dest);
		self.state_root.encode_to(dest);
		self.extrinsics_root.encode_to(dest);
	}
}

impl Decode for Header {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let parent_hash = H256::decode(input).map_err(|e| e.expecting("Header::parent_hash"))?;
		let number = <Compact<BlockNumber>>::decode(input)
			.map_err(|e| e.expecting("Header::number"))?
			.0;
		let state_root = H256::decode(input).map_err(|e| e.expecting("Header::state_root"))?;
		let extrinsics_root =
			H256::decode(input).map_err(|e| e.expecting("Header::extrinsics_root"))?;
		Ok(Self { parent_hash, number, state_root, extrinsics_root })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn number_is_compact_encoded() {
		let header = Header::new(1, H256::from([2; 32]), H256::from([3; 32]), H256::from([4; 32]));
		let encoded = header.encode();
		assert_eq!(encoded.len(), 97);
		assert_eq!(&encoded[..32], &[4u8; 32][..]);
		assert_eq!(encoded[32], 0x04);
		assert_eq!(Header::decode(&mut &encoded[..]).unwrap(), header);
	}

	#[test]
	fn hash_commits_to_every_field() {
		let header = Header::default();
		let mut other = header.clone();
		other.number = 1;
		assert_ne!(header.hash(), other.hash());
		assert_eq!(header.hash(), Header::default().hash());
	}

	#[test]
	fn json_uses_camel_case() {
		let header = Header::new(7, H256::default(), H256::default(), H256::default());
		let json = serde_json::to_value(&header).unwrap();
		assert_eq!(json["number"], 7);
		assert!(json.get("parentHash").is_some());
		assert!(json.get("extrinsicsRoot").is_some());
		let back: Header = serde_json::from_value(json).unwrap();
		assert_eq!(back, header);
	}
}
