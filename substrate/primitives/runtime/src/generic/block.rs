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

//! A block: a header and a list of extrinsics.

use super::Header;
use crate::{hashing::ordered_root, H256};
use alloc::vec::Vec;
use codec::Encode;

/// Abstraction over a block.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block<Extrinsic> {
	/// The block header.
	pub header: Header,
	/// The accompanying extrinsics.
	pub extrinsics: Vec<Extrinsic>,
}

codec::impl_codec_struct!(Block<Extrinsic> { header, extrinsics });

impl<Extrinsic: Encode> Block<Extrinsic> {
	/// Create a new block.
	pub fn new(header: Header, extrinsics: Vec<Extrinsic>) -> Self {
		Self { header, extrinsics }
	}

	/// Split the block into header and list of extrinsics.
	pub fn deconstruct(self) -> (Header, Vec<Extrinsic>) {
		(self.header, self.extrinsics)
	}

	/// The hash of the block, which is the hash of its header.
	pub fn hash(&self) -> H256 {
		self.header.hash()
	}

	/// The root the header must commit to for these extrinsics.
	pub fn extrinsics_root(&self) -> H256 {
		let encoded: Vec<Vec<u8>> = self.extrinsics.iter().map(Encode::encode).collect();
		ordered_root(&encoded)
	}
}
