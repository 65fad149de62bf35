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

//! MultiAddress type is a wrapper for multiple downstream account formats.

use alloc::vec::Vec;
use codec::{Compact, Decode, Encode, Error, Input, Output};

/// A multi-format address wrapper for on-chain accounts.
#[derive(Eq, PartialEq, Clone, Debug)]
pub enum MultiAddress<AccountId, AccountIndex> {
	/// It's an account ID (pubkey).
	Id(AccountId),
	/// It's an account index.
	Index(AccountIndex),
	/// It's some arbitrary raw bytes.
	Raw(Vec<u8>),
	/// It's a 32 byte representation.
	Address32([u8; 32]),
	/// Its a 20 byte representation.
	Address20([u8; 20]),
}

impl<AccountId, AccountIndex> From<AccountId> for MultiAddress<AccountId, AccountIndex> {
	fn from(a: AccountId) -> Self {
		Self::Id(a)
	}
}

impl<AccountId, AccountIndex> Encode for MultiAddress<AccountId, AccountIndex>
where
	AccountId: Encode,
	AccountIndex: Copy,
	Compact<AccountIndex>: Encode,
{
	fn size_hint(&self) -> usize {
		1 + match self {
			Self::Id(who) => who.size_hint(),
			Self::Index(index) => Compact(*index).size_hint(),
			Self::Raw(raw) => raw.size_hint(),
			Self::Address32(_) => 32,
			Self::Address20(_) => 20,
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match self {
			Self::Id(who) => {
				dest.push_byte(0);
				who.encode_to(dest);
			},
			Self::Index(index) => {
				dest.push_byte(1);
				Compact(*index).encode_to(dest);
			},
			Self::Raw(raw) => {
				dest.push_byte(2);
				raw.encode_to(dest);
			},
			Self::Address32(bytes) => {
				dest.push_byte(3);
				dest.write(bytes);
			},
			Self::Address20(bytes) => {
				dest.push_byte(4);
				dest.write(bytes);
			},
		}
	}
}

impl<AccountId, AccountIndex> Decode for MultiAddress<AccountId, AccountIndex>
where
	AccountId: Decode,
	Compact<AccountIndex>: Decode,
{
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let err = |e: Error| e.expecting("MultiAddress");
		Ok(match input.read_byte().map_err(err)? {
			0 => Self::Id(AccountId::decode(input).map_err(err)?),
			1 => Self::Index(Compact::<AccountIndex>::decode(input).map_err(err)?.0),
			2 => Self::Raw(Vec::decode(input).map_err(err)?),
			3 => {
				let mut bytes = [0u8; 32];
				input.read(&mut bytes).map_err(err)?;
				Self::Address32(bytes)
			},
			4 => {
				let mut bytes = [0u8; 20];
				input.read(&mut bytes).map_err(err)?;
				Self::Address20(bytes)
			},
			index => return Err(Error::unknown_variant("MultiAddress", index)),
		})
	}
}
