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


//! The Currency trait and associated types.
//!
//! Balances are `u128` throughout, the unit every account in the runtime is denominated in.

use super::{
	imbalance::{Imbalance, SettleIssuance, SignedImbalance},
	misc::{ExistenceRequirement, WithdrawReasons},
};
use crate::{
	dispatch::{DispatchError, DispatchResult},
	traits::SameOrOther,
};
use tessera_primitives::{Balance, Externalities};

mod lockable;
pub use lockable::{LockIdentifier, LockableCurrency};
mod reservable;
pub use reservable::ReservableCurrency;

/// Abstraction over a fungible assets system.
pub trait Currency<AccountId> {
	/// The opaque token type for an imbalance. This is returned by unbalanced operations
	/// and must be dealt with. It may be dropped but cannot be cloned.
	type PositiveImbalance: Imbalance<Balance, Opposite = Self::NegativeImbalance>;

	/// The opaque token type for an imbalance. This is returned by unbalanced operations
	/// and must be dealt with. It may be dropped but cannot be cloned.
	type NegativeImbalance: Imbalance<Balance, Opposite = Self::PositiveImbalance>;

	// PUBLIC IMMUTABLES

	/// The combined balance of `who`.
	fn total_balance(ext: &Externalities, who: &AccountId) -> Balance;

	/// Same result as `slash(who, value)` (but without the side-effects) assuming there are no
	/// balance changes in the meantime and only the reserved balance is not taken into account.
	fn can_slash(ext: &Externalities, who: &AccountId, value: Balance) -> bool;

	/// The total amount of issuance in the system.
	fn total_issuance(ext: &Externalities) -> Balance;

	/// The total amount of issuance in the system excluding those which are controlled by the
	/// system.
	fn active_issuance(ext: &Externalities) -> Balance {
		Self::total_issuance(ext)
	}

	/// The minimum balance any single account may have. This is equivalent to the `Balances`
	/// module's `ExistentialDeposit`.
	fn minimum_balance() -> Balance;

	/// Reduce the total issuance by `amount` and return the according imbalance. The imbalance
	/// will typically be used to reduce an account by the same amount with e.g. `settle`.
	///
	/// This is infallible, but doesn't guarantee that the entire `amount` is burnt, for example
	/// in the case of underflow.
	fn burn(ext: &mut Externalities, amount: Balance) -> Self::PositiveImbalance;

	/// Increase the total issuance by `amount` and return the according imbalance. The imbalance
	/// will typically be used to increase an account by the same amount with e.g.
	/// `resolve_into_existing` or `resolve_creating`.
	///
	/// This is infallible, but doesn't guarantee that the entire `amount` is issued, for example
	/// in the case of overflow.
	fn issue(ext: &mut Externalities, amount: Balance) -> Self::NegativeImbalance;

	/// Produce a pair of imbalances that cancel each other out exactly.
	///
	/// This is just the same as burning and issuing the same amount and has no effect on the
	/// total issuance.
	fn pair(
		ext: &mut Externalities,
		amount: Balance,
	) -> (Self::PositiveImbalance, Self::NegativeImbalance) {
		(Self::burn(ext, amount), Self::issue(ext, amount))
	}

	/// The 'free' balance of a given account.
	///
	/// This is the only balance that matters in terms of most operations on tokens. It alone
	/// is used to determine the balance when in the contract execution environment. When this
	/// balance falls below the value of `ExistentialDeposit`, then the 'current account' is
	/// deleted: specifically `FreeBalance`.
	///
	/// `system::AccountNonce` is also deleted if `ReservedBalance` is also zero (it also gets
	/// collapsed to zero if it ever becomes less than `ExistentialDeposit`.
	fn free_balance(ext: &Externalities, who: &AccountId) -> Balance;

	/// Returns `Ok` iff the account is able to make a withdrawal of the given amount
	/// for the given reason. Basically, it's just a dry-run of `withdraw`.
	///
	/// `Err(...)` with the reason why not otherwise.
	fn ensure_can_withdraw(
		ext: &Externalities,
		who: &AccountId,
		_amount: Balance,
		reasons: WithdrawReasons,
		new_balance: Balance,
	) -> DispatchResult;

	// PUBLIC MUTABLES (DANGEROUS)

	/// Transfer some liquid free balance to another staker.
	///
	/// This is a very high-level function. It will ensure all appropriate fees are paid
	/// and no imbalance in the system remains.
	fn transfer(
		ext: &mut Externalities,
		source: &AccountId,
		dest: &AccountId,
		value: Balance,
		existence_requirement: ExistenceRequirement,
	) -> DispatchResult;

	/// Deducts up to `value` from the combined balance of `who`, preferring to deduct from the
	/// free balance. This function cannot fail.
	///
	/// The resulting imbalance is the first item of the tuple returned.
	///
	/// As much funds up to `value` will be deducted as possible. If this is less than `value`,
	/// then a non-zero second item will be returned.
	fn slash(
		ext: &mut Externalities,
		who: &AccountId,
		value: Balance,
	) -> (Self::NegativeImbalance, Balance);

	/// Mints `value` to the free balance of `who`.
	///
	/// If `who` doesn't exist, nothing is done and an Err returned.
	fn deposit_into_existing(
		ext: &mut Externalities,
		who: &AccountId,
		value: Balance,
	) -> Result<Self::PositiveImbalance, DispatchError>;

	/// Similar to deposit_creating, only accepts a `NegativeImbalance` and returns nothing on
	/// success.
	fn resolve_into_existing(
		ext: &mut Externalities,
		who: &AccountId,
		value: Self::NegativeImbalance,
	) -> Result<(), Self::NegativeImbalance> {
		let v = value.peek();
		match Self::deposit_into_existing(ext, who, v) {
			Ok(opposite) => Ok(settle_offset(ext, value.offset(opposite))),
			_ => Err(value),
		}
	}

	/// Adds up to `value` to the free balance of `who`. If `who` doesn't exist, it is created.
	///
	/// Infallible.
	fn deposit_creating(
		ext: &mut Externalities,
		who: &AccountId,
		value: Balance,
	) -> Self::PositiveImbalance;

	/// Similar to deposit_creating, only accepts a `NegativeImbalance` and returns nothing on
	/// success.
	fn resolve_creating(ext: &mut Externalities, who: &AccountId, value: Self::NegativeImbalance) {
		let v = value.peek();
		let opposite = Self::deposit_creating(ext, who, v);
		settle_offset(ext, value.offset(opposite));
	}

	/// Removes some free balance from `who` account for `reason` if possible. If `liveness` is
	/// `KeepAlive`, then no less than `ExistentialDeposit` must be left remaining.
	///
	/// This checks any locks, vesting, and liquidity requirements. If the removal is not possible,
	/// then it returns `Err`.
	///
	/// If the operation is successful, this will return `Ok` with a `NegativeImbalance` whose value
	/// is `value`.
	fn withdraw(
		ext: &mut Externalities,
		who: &AccountId,
		value: Balance,
		reasons: WithdrawReasons,
		liveness: ExistenceRequirement,
	) -> Result<Self::NegativeImbalance, DispatchError>;

	/// Similar to withdraw, only accepts a `PositiveImbalance` and returns nothing on success.
	fn settle(
		ext: &mut Externalities,
		who: &AccountId,
		value: Self::PositiveImbalance,
		reasons: WithdrawReasons,
		liveness: ExistenceRequirement,
	) -> Result<(), Self::PositiveImbalance> {
		let v = value.peek();
		match Self::withdraw(ext, who, v, reasons, liveness) {
			Ok(opposite) => Ok(settle_offset(ext, value.offset(opposite))),
			_ => Err(value),
		}
	}

	/// Ensure an account's free balance equals some value; this will create the account
	/// if needed.
	///
	/// Returns a signed imbalance and status to indicate if the account was successfully updated
	/// or update has led to killing of the account.
	fn make_free_balance_be(
		ext: &mut Externalities,
		who: &AccountId,
		balance: Balance,
	) -> SignedImbalance<Balance, Self::PositiveImbalance>;
}

/// Settle whatever is left over after offsetting two opposite imbalances.
pub fn settle_offset<A: SettleIssuance, B: SettleIssuance>(
	ext: &mut Externalities,
	rest: SameOrOther<A, B>,
) {
	match rest {
		SameOrOther::None => {},
		SameOrOther::Same(same) => same.settle_issuance(ext),
		SameOrOther::Other(other) => other.settle_issuance(ext),
	}
}
