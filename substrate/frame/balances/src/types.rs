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


//! Types used in the balances module.

use crate::{Config, Event, NegativeImbalance, Pallet};
use codec::{impl_codec_enum, impl_codec_struct};
use core::ops::BitOr;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::{Balance, Externalities};
use tessera_support::traits::{Imbalance, LockIdentifier, OnUnbalanced, WithdrawReasons};

/// Simplified reasons for withdrawing balance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Reasons {
	/// Paying system transaction fees.
	Fee,
	/// Any reason other than paying system transaction fees.
	Misc,
	/// Any reason at all.
	All,
}

impl_codec_enum!(Reasons { Fee = 0, Misc = 1, All = 2 });

impl From<WithdrawReasons> for Reasons {
	fn from(r: WithdrawReasons) -> Reasons {
		if r == WithdrawReasons::TRANSACTION_PAYMENT {
			Reasons::Fee
		} else if r.contains(WithdrawReasons::TRANSACTION_PAYMENT) {
			Reasons::All
		} else {
			Reasons::Misc
		}
	}
}

impl BitOr for Reasons {
	type Output = Reasons;
	fn bitor(self, other: Reasons) -> Reasons {
		if self == other {
			return self
		}
		Reasons::All
	}
}

/// A single lock on a balance. There can be many of these on an account and they "overlap", so the
/// same balance is frozen by multiple locks.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BalanceLock {
	/// An identifier for this lock. Only one lock may be in existence for each identifier.
	pub id: LockIdentifier,
	/// The amount which the free balance may not drop below when this lock is in effect.
	pub amount: Balance,
	/// If true, then the lock remains in effect even for payment of transaction fees.
	pub reasons: Reasons,
}

impl_codec_struct!(BalanceLock { id, amount, reasons });

/// All balance information for an account.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct AccountData {
	/// Non-reserved part of the balance. There may still be restrictions on this, but it is the
	/// total pool what may in principle be transferred, reserved and used for tipping.
	///
	/// This is the only balance that matters in terms of most operations on tokens. It
	/// alone is used to determine the balance when in the contract execution environment.
	pub free: Balance,
	/// Balance which is reserved and may not be used at all.
	///
	/// This can still get slashed, but gets slashed last of all.
	///
	/// This balance is a 'reserve' balance that other subsystems use in order to set aside tokens
	/// that are still 'owned' by the account holder, but which are suspendable.
	pub reserved: Balance,
	/// The amount that `free` may not drop below when withdrawing for *anything except transaction
	/// fee payment*.
	pub misc_frozen: Balance,
	/// The amount that `free` may not drop below when withdrawing specifically for transaction
	/// fee payment.
	pub fee_frozen: Balance,
}

impl_codec_struct!(AccountData { free, reserved, misc_frozen, fee_frozen });

impl AccountData {
	/// How much this account's balance can be reduced for the given `reasons`.
	pub fn usable(&self, reasons: Reasons) -> Balance {
		self.free.saturating_sub(self.frozen(reasons))
	}

	/// The amount that this account's free balance may not be reduced beyond for the given
	/// `reasons`.
	///
	/// `Reasons::Fee` answers with `misc_frozen`, not `fee_frozen`.
	pub fn frozen(&self, reasons: Reasons) -> Balance {
		match reasons {
			Reasons::All => self.misc_frozen.max(self.fee_frozen),
			Reasons::Misc => self.misc_frozen,
			Reasons::Fee => self.misc_frozen,
		}
	}

	/// The total balance in this account including any that is reserved and ignoring any frozen.
	pub fn total(&self) -> Balance {
		self.free.saturating_add(self.reserved)
	}
}

/// Dust swept from an account that fell below the existential deposit.
///
/// Holds the imbalance until [`DustCleaner::clean`] hands it to `DustRemoval` and reports it with a
/// `DustLost` event.
#[must_use]
pub struct DustCleaner<T: Config>(pub(crate) Option<(T::AccountId, NegativeImbalance)>);

impl<T: Config> Default for DustCleaner<T> {
	fn default() -> Self {
		Self(None)
	}
}

impl<T: Config> DustCleaner<T> {
	/// Report the dust, if any, and settle it through `DustRemoval`.
	pub fn clean(self, ext: &mut Externalities) {
		if let Some((who, dust)) = self.0 {
			Pallet::<T>::deposit_event(ext, Event::DustLost { account: who, amount: dust.peek() });
			T::DustRemoval::on_unbalanced(ext, dust);
		}
	}
}
