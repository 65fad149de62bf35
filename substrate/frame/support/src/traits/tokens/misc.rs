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


//! Miscellaneous types.

use codec::{Decode, Encode, Error, Input, Output};

/// Simple boolean for whether an account needs to be kept in existence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ExistenceRequirement {
	/// Operation must not result in the account going out of existence.
	///
	/// Note this implies that if the account never existed in the first place, then the operation
	/// may legitimately leave the account unchanged and still non-existent.
	KeepAlive,
	/// Operation may result in account going out of existence.
	AllowDeath,
}

codec::impl_codec_enum!(ExistenceRequirement { KeepAlive = 0, AllowDeath = 1 });

/// Status of funds.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum BalanceStatus {
	/// Funds are free, as corresponding to `free` item in Balances.
	Free,
	/// Funds are reserved, as corresponding to `reserved` item in Balances.
	Reserved,
}

codec::impl_codec_enum!(BalanceStatus { Free = 0, Reserved = 1 });

bitflags::bitflags! {
	/// Reasons for moving funds out of an account.
	pub struct WithdrawReasons: u8 {
		/// In order to pay for (system) transaction costs.
		const TRANSACTION_PAYMENT = 0b00000001;
		/// In order to transfer ownership.
		const TRANSFER = 0b00000010;
		/// In order to reserve some funds for a later return or repatriation.
		const RESERVE = 0b00000100;
		/// In order to pay some other (higher-level) fees.
		const FEE = 0b00001000;
		/// In order to tip a validator for transaction inclusion.
		const TIP = 0b00010000;
	}
}

impl WithdrawReasons {
	/// Choose all variants except for `one`.
	///
	/// ```rust
	/// # use tessera_support::traits::tokens::WithdrawReasons;
	/// # fn main() {
	/// assert_eq!(
	/// 	WithdrawReasons::FEE | WithdrawReasons::TRANSFER | WithdrawReasons::RESERVE | WithdrawReasons::TIP,
	/// 	WithdrawReasons::except(WithdrawReasons::TRANSACTION_PAYMENT),
	/// 	);
	/// # }
	/// ```
	pub fn except(one: WithdrawReasons) -> WithdrawReasons {
		let mut flags = Self::all();
		flags.toggle(one);
		flags
	}
}

impl Encode for WithdrawReasons {
	fn size_hint(&self) -> usize {
		1
	}

	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		dest.push_byte(self.bits())
	}
}

impl Decode for WithdrawReasons {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let bits = u8::decode(input).map_err(|e| e.expecting("WithdrawReasons"))?;
		Self::from_bits(bits).ok_or_else(|| {
			Error::from("Invalid withdraw reasons").expecting("WithdrawReasons")
		})
	}
}
