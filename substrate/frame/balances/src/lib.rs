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


//! # Balances Module
//!
//! The Balances module provides functionality for handling accounts and balances.
//!
//! ## Overview
//!
//! The Balances module provides functions for:
//!
//! - Getting and setting free balances.
//! - Retrieving total, reserved and unreserved balances.
//! - Repatriating a reserved balance to a beneficiary account that exists.
//! - Transferring a balance between accounts (when not reserved).
//! - Slashing an account balance.
//! - Account creation and removal.
//! - Managing total issuance.
//! - Setting and managing locks.
//!
//! ### Terminology
//!
//! - **Existential Deposit:** The minimum balance required to create or keep an account open. This
//!   prevents "dust accounts" from filling storage. When the free plus the reserved balance (i.e.
//!   the total balance) fall below this, then the account is said to be dead; and it loses its
//!   functionality as well as any prior history and all information on it is removed from the
//!   chain's state. No account should ever have a total balance that is strictly between 0 and
//!   the existential deposit (exclusive). If this ever happens, it indicates either a bug in this
//!   module or an erroneous raw mutation of storage.
//! - **Total Issuance:** The total number of units in existence in a system.
//! - **Reaping an account:** The act of removing an account by resetting its nonce. Happens after
//!   its total balance has become zero (or, strictly speaking, less than the Existential Deposit).
//! - **Free Balance:** The portion of a balance that is not reserved. The free balance is the only
//!   balance that matters for most operations.
//! - **Reserved Balance:** Reserved balance still belongs to the account holder, but is suspended.
//!   Reserved balance can still be slashed, but only after all the free balance has been slashed.
//! - **Imbalance:** A condition when some funds were credited or debited without equal and
//!   opposite accounting (i.e. a difference between total issuance and account balances).
//!   Functions that result in an imbalance will return an object of the `Imbalance` trait that
//!   must be settled against the total issuance exactly once.
//! - **Lock:** A freeze on a specified amount of an account's free balance until a specified block
//!   number. Multiple locks always operate over the same funds, so they "overlay" rather than
//!   "stack".
//!
//! ### Implementations
//!
//! The Balances module provides implementations for the following traits. If these traits provide
//! the functionality that you need, then you can avoid coupling with the Balances module.
//!
//! - [`Currency`]: Functions for dealing with a fungible assets system.
//! - [`ReservableCurrency`]: Functions for dealing with assets that can be reserved from an
//!   account.
//! - [`LockableCurrency`]: Functions for dealing with accounts that allow liquidity restrictions.
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! - `transfer` - Transfer some liquid free balance to another account.
//! - `set_balance` - Set the balances of a given account. The origin of this call must be root.
//! - `force_transfer` - Transfer between two arbitrary accounts. The origin must be root.
//! - `transfer_keep_alive` - Like `transfer`, but refuses to reap the sender.
//! - `transfer_all` - Transfer everything that can be transferred.
//! - `force_unreserve` - Unreserve some balance from a user by force. The origin must be root.
//!
//! ## Assumptions
//!
//! * Total issued balanced of all accounts should be less than `Balance::max_value()`.
//! * Every mutation of an account goes through [`Pallet::try_mutate_account_with_dust`]; dust it
//!   reports has to be cleaned by the caller.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod imbalances;
#[cfg(test)]
mod tests;
mod types;
pub mod weights;

use alloc::{collections::btree_set::BTreeSet, vec, vec::Vec};
use codec::{Compact, Decode, Encode, Error as CodecError, Input, Output};
use core::{convert::Infallible, marker::PhantomData};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::{
	traits::StaticLookup, ArithmeticError, Balance, BlockNumber, DispatchError, Externalities,
};
use tessera_support::{
	decl_error, ensure, generate_storage_instances,
	dispatch::{
		DispatchInfo, DispatchResult, DispatchResultWithPostInfo, GetCallIndex, GetCallName,
		GetDispatchInfo, UnfilteredDispatchable,
	},
	registry::{ConstantMetadata, ItemMetadata, ModuleMetadata},
	storage::{
		transactional::with_storage_layer,
		types::{StorageMap, StorageValue, ValueQuery},
	},
	traits::{
		BalanceStatus, BuildGenesisConfig, Currency, ExistenceRequirement, Get, Imbalance,
		IntegrityTest, LockIdentifier, LockableCurrency, OnFinalize, OnInitialize, OnUnbalanced,
		PalletInfo, PalletInfoAccess, ReservableCurrency, SettleIssuance, SignedImbalance,
		StoredMap, WithdrawReasons,
	},
	Blake2_128Concat,
};
use tessera_system::{self as frame_system, ensure_root, ensure_signed, OriginFor};

pub use imbalances::{NegativeImbalance, PositiveImbalance};
pub use types::{AccountData, BalanceLock, DustCleaner, Reasons};
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::balances";

type AccountIdLookupOf<T> = <<T as frame_system::Config>::Lookup as StaticLookup>::Source;

/// The module's configuration trait.
pub trait Config: frame_system::Config {
	/// The overarching event type.
	type RuntimeEvent: From<Event<Self>> + Into<<Self as frame_system::Config>::RuntimeEvent>;

	/// Handler for the unbalanced reduction when removing a dust account.
	type DustRemoval: OnUnbalanced<NegativeImbalance>;

	/// The minimum amount required to keep an account open. MUST BE GREATER THAN ZERO!
	///
	/// If you *really* need it to be zero, you can enable the feature `insecure_zero_ed` for
	/// this module. However, you do so at your own risk: this will open up a major DoS vector.
	/// In case you have multiple sources of provider references, you may also get unexpected
	/// behaviour if you set this to zero.
	type ExistentialDeposit: Get<Balance>;

	/// The means of storing the balances of an account.
	type AccountStore: StoredMap<Self::AccountId, AccountData>;

	/// Weight information for extrinsics in this module.
	type WeightInfo: WeightInfo;

	/// The maximum number of locks that should exist on an account.
	/// Not strictly enforced, but used for weight estimation.
	type MaxLocks: Get<u32>;
}

/// The Balances module.
pub struct Pallet<T>(PhantomData<T>);

generate_storage_instances!("Balances", {
	TotalIssuancePrefix => "TotalIssuance",
	LocksPrefix => "Locks",
});

/// The total units issued in the system.
pub type TotalIssuance = StorageValue<TotalIssuancePrefix, Balance, ValueQuery>;

/// Any liquidity locks on some account balances.
/// NOTE: Should only be accessed when setting, changing and freeing a lock.
pub type Locks<T> = StorageMap<
	LocksPrefix,
	Blake2_128Concat,
	<T as frame_system::Config>::AccountId,
	Vec<BalanceLock>,
	ValueQuery,
>;

const STORAGE_ITEMS: &[&str] = &["TotalIssuance", "Locks"];

/// Event for the Balances module.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<T: Config> {
	/// An account was created with some free balance.
	Endowed { account: T::AccountId, free_balance: Balance },
	/// An account was removed whose balance was non-zero but below ExistentialDeposit,
	/// resulting in an outright loss.
	DustLost { account: T::AccountId, amount: Balance },
	/// Transfer succeeded.
	Transfer { from: T::AccountId, to: T::AccountId, amount: Balance },
	/// A balance was set by root.
	BalanceSet { who: T::AccountId, free: Balance, reserved: Balance },
	/// Some balance was reserved (moved from free to reserved).
	Reserved { who: T::AccountId, amount: Balance },
	/// Some balance was unreserved (moved from reserved to free).
	Unreserved { who: T::AccountId, amount: Balance },
	/// Some balance was moved from the reserve of the first account to the second account.
	/// Final argument indicates the destination balance type.
	ReserveRepatriated {
		from: T::AccountId,
		to: T::AccountId,
		amount: Balance,
		destination_status: BalanceStatus,
	},
	/// Some amount was deposited (e.g. for transaction fees).
	Deposit { who: T::AccountId, amount: Balance },
	/// Some amount was withdrawn from the account (e.g. for transaction fees).
	Withdraw { who: T::AccountId, amount: Balance },
	/// Some amount was removed from the account (e.g. for misbehavior).
	Slashed { who: T::AccountId, amount: Balance },
}

const EVENT_NAMES: &[&str] = &[
	"Endowed",
	"DustLost",
	"Transfer",
	"BalanceSet",
	"Reserved",
	"Unreserved",
	"ReserveRepatriated",
	"Deposit",
	"Withdraw",
	"Slashed",
];

impl<T: Config> Event<T> {
	/// Names and indices of every event of the module.
	pub fn metadata() -> Vec<ItemMetadata> {
		EVENT_NAMES
			.iter()
			.enumerate()
			.map(|(index, name)| ItemMetadata::new(*name, index as u8))
			.collect()
	}
}

impl<T: Config> Encode for Event<T> {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			Event::Endowed { account, free_balance } => {
				dest.push_byte(0);
				account.encode_to(dest);
				free_balance.encode_to(dest);
			},
			Event::DustLost { account, amount } => {
				dest.push_byte(1);
				account.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::Transfer { from, to, amount } => {
				dest.push_byte(2);
				from.encode_to(dest);
				to.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::BalanceSet { who, free, reserved } => {
				dest.push_byte(3);
				who.encode_to(dest);
				free.encode_to(dest);
				reserved.encode_to(dest);
			},
			Event::Reserved { who, amount } => {
				dest.push_byte(4);
				who.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::Unreserved { who, amount } => {
				dest.push_byte(5);
				who.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::ReserveRepatriated { from, to, amount, destination_status } => {
				dest.push_byte(6);
				from.encode_to(dest);
				to.encode_to(dest);
				amount.encode_to(dest);
				destination_status.encode_to(dest);
			},
			Event::Deposit { who, amount } => {
				dest.push_byte(7);
				who.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::Withdraw { who, amount } => {
				dest.push_byte(8);
				who.encode_to(dest);
				amount.encode_to(dest);
			},
			Event::Slashed { who, amount } => {
				dest.push_byte(9);
				who.encode_to(dest);
				amount.encode_to(dest);
			},
		}
	}
}

impl<T: Config> Decode for Event<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let index = input.read_byte().map_err(|e| e.expecting("Event"))?;
		let event = match index {
			0 => Event::Endowed {
				account: Decode::decode(input)?,
				free_balance: Decode::decode(input)?,
			},
			1 => Event::DustLost { account: Decode::decode(input)?, amount: Decode::decode(input)? },
			2 => Event::Transfer {
				from: Decode::decode(input)?,
				to: Decode::decode(input)?,
				amount: Decode::decode(input)?,
			},
			3 => Event::BalanceSet {
				who: Decode::decode(input)?,
				free: Decode::decode(input)?,
				reserved: Decode::decode(input)?,
			},
			4 => Event::Reserved { who: Decode::decode(input)?, amount: Decode::decode(input)? },
			5 => Event::Unreserved { who: Decode::decode(input)?, amount: Decode::decode(input)? },
			6 => Event::ReserveRepatriated {
				from: Decode::decode(input)?,
				to: Decode::decode(input)?,
				amount: Decode::decode(input)?,
				destination_status: Decode::decode(input)?,
			},
			7 => Event::Deposit { who: Decode::decode(input)?, amount: Decode::decode(input)? },
			8 => Event::Withdraw { who: Decode::decode(input)?, amount: Decode::decode(input)? },
			9 => Event::Slashed { who: Decode::decode(input)?, amount: Decode::decode(input)? },
			_ => return Err(CodecError::unknown_variant("Event", index)),
		};
		Ok(event)
	}
}

decl_error! {
	/// Error for the Balances module.
	pub enum Error for Pallet<T: Config> {
		/// Vesting balance too high to send value.
		VestingBalance = 0,
		/// Account liquidity restrictions prevent withdrawal.
		LiquidityRestrictions = 1,
		/// Balance too low to send value.
		InsufficientBalance = 2,
		/// Value too low to create account due to existential deposit.
		ExistentialDeposit = 3,
		/// Transfer/payment would kill account.
		KeepAlive = 4,
		/// A vesting schedule already exists for this account.
		ExistingVestingSchedule = 5,
		/// Beneficiary account must pre-exist.
		DeadAccount = 6,
		/// Number of named reserves exceed `MaxReserves`.
		TooManyReserves = 7,
	}
}

/// Contains a variant per dispatchable extrinsic that this module has.
#[derive(Clone, PartialEq, Debug)]
#[allow(non_camel_case_types)]
pub enum Call<T: Config> {
	#[doc(hidden)]
	__Ignore(PhantomData<T>, Infallible),
	/// Transfer some liquid free balance to another account.
	transfer { dest: AccountIdLookupOf<T>, value: Balance },
	/// Set the regular balance of a given account.
	set_balance { who: AccountIdLookupOf<T>, new_free: Balance, new_reserved: Balance },
	/// Exactly as `transfer`, except the origin must be root and the source account may be
	/// specified.
	force_transfer { source: AccountIdLookupOf<T>, dest: AccountIdLookupOf<T>, value: Balance },
	/// Same as the `transfer` call, but with a check that the transfer will not kill the
	/// origin account.
	transfer_keep_alive { dest: AccountIdLookupOf<T>, value: Balance },
	/// Transfer the entire transferable balance from the caller account.
	transfer_all { dest: AccountIdLookupOf<T>, keep_alive: bool },
	/// Unreserve some balance from a user by force.
	force_unreserve { who: AccountIdLookupOf<T>, amount: Balance },
}

impl<T: Config> Eq for Call<T> {}

const CALL_NAMES: &[&str] = &[
	"transfer",
	"set_balance",
	"force_transfer",
	"transfer_keep_alive",
	"transfer_all",
	"force_unreserve",
];
const CALL_INDICES: &[u8] = &[0, 1, 2, 3, 4, 5];

impl<T: Config> Call<T> {
	/// Names and indices of every call of the module.
	pub fn metadata() -> Vec<ItemMetadata> {
		CALL_NAMES
			.iter()
			.zip(CALL_INDICES)
			.map(|(name, index)| ItemMetadata::new(*name, *index))
			.collect()
	}
}

impl<T: Config> GetCallName for Call<T> {
	fn get_call_names() -> &'static [&'static str] {
		CALL_NAMES
	}

	fn get_call_name(&self) -> &'static str {
		CALL_NAMES[self.get_call_index() as usize]
	}
}

impl<T: Config> GetCallIndex for Call<T> {
	fn get_call_indices() -> &'static [u8] {
		CALL_INDICES
	}

	fn get_call_index(&self) -> u8 {
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::transfer { .. } => 0,
			Self::set_balance { .. } => 1,
			Self::force_transfer { .. } => 2,
			Self::transfer_keep_alive { .. } => 3,
			Self::transfer_all { .. } => 4,
			Self::force_unreserve { .. } => 5,
		}
	}
}

impl<T: Config> Encode for Call<T> {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		dest.push_byte(self.get_call_index());
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::transfer { dest: to, value } | Self::transfer_keep_alive { dest: to, value } => {
				to.encode_to(dest);
				Compact(*value).encode_to(dest);
			},
			Self::set_balance { who, new_free, new_reserved } => {
				who.encode_to(dest);
				Compact(*new_free).encode_to(dest);
				Compact(*new_reserved).encode_to(dest);
			},
			Self::force_transfer { source, dest: to, value } => {
				source.encode_to(dest);
				to.encode_to(dest);
				Compact(*value).encode_to(dest);
			},
			Self::transfer_all { dest: to, keep_alive } => {
				to.encode_to(dest);
				keep_alive.encode_to(dest);
			},
			Self::force_unreserve { who, amount } => {
				who.encode_to(dest);
				Compact(*amount).encode_to(dest);
			},
		}
	}
}

fn decode_compact_balance<I: Input>(input: &mut I) -> Result<Balance, CodecError> {
	Compact::<Balance>::decode(input).map(|c| c.0)
}

impl<T: Config> Decode for Call<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let index = input.read_byte().map_err(|e| e.expecting("Call"))?;
		let call = match index {
			0 => Self::transfer {
				dest: Decode::decode(input).map_err(|e| e.expecting("Call::transfer"))?,
				value: decode_compact_balance(input).map_err(|e| e.expecting("Call::transfer"))?,
			},
			1 => Self::set_balance {
				who: Decode::decode(input).map_err(|e| e.expecting("Call::set_balance"))?,
				new_free: decode_compact_balance(input)
					.map_err(|e| e.expecting("Call::set_balance"))?,
				new_reserved: decode_compact_balance(input)
					.map_err(|e| e.expecting("Call::set_balance"))?,
			},
			2 => Self::force_transfer {
				source: Decode::decode(input).map_err(|e| e.expecting("Call::force_transfer"))?,
				dest: Decode::decode(input).map_err(|e| e.expecting("Call::force_transfer"))?,
				value: decode_compact_balance(input)
					.map_err(|e| e.expecting("Call::force_transfer"))?,
			},
			3 => Self::transfer_keep_alive {
				dest: Decode::decode(input).map_err(|e| e.expecting("Call::transfer_keep_alive"))?,
				value: decode_compact_balance(input)
					.map_err(|e| e.expecting("Call::transfer_keep_alive"))?,
			},
			4 => Self::transfer_all {
				dest: Decode::decode(input).map_err(|e| e.expecting("Call::transfer_all"))?,
				keep_alive: Decode::decode(input).map_err(|e| e.expecting("Call::transfer_all"))?,
			},
			5 => Self::force_unreserve {
				who: Decode::decode(input).map_err(|e| e.expecting("Call::force_unreserve"))?,
				amount: decode_compact_balance(input)
					.map_err(|e| e.expecting("Call::force_unreserve"))?,
			},
			_ => return Err(CodecError::unknown_variant("Call", index)),
		};
		Ok(call)
	}
}

impl<T: Config> GetDispatchInfo for Call<T> {
	fn get_dispatch_info(&self) -> DispatchInfo {
		let weight = match self {
			Self::__Ignore(_, never) => match *never {},
			Self::transfer { .. } => T::WeightInfo::transfer(),
			Self::set_balance { .. } => T::WeightInfo::set_balance_creating()
				.max(T::WeightInfo::set_balance_killing()),
			Self::force_transfer { .. } => T::WeightInfo::force_transfer(),
			Self::transfer_keep_alive { .. } => T::WeightInfo::transfer_keep_alive(),
			Self::transfer_all { .. } => T::WeightInfo::transfer_all(),
			Self::force_unreserve { .. } => T::WeightInfo::force_unreserve(),
		};
		DispatchInfo::from_annotation(weight, ())
	}
}

impl<T: Config> UnfilteredDispatchable for Call<T> {
	type RuntimeOrigin = OriginFor<T>;

	fn dispatch_bypass_filter(
		self,
		ext: &mut Externalities,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithPostInfo {
		match self {
			Self::__Ignore(_, never) => match never {},
			Self::transfer { dest, value } => Pallet::<T>::transfer(ext, origin, dest, value),
			Self::set_balance { who, new_free, new_reserved } =>
				Pallet::<T>::set_balance(ext, origin, who, new_free, new_reserved),
			Self::force_transfer { source, dest, value } =>
				Pallet::<T>::force_transfer(ext, origin, source, dest, value),
			Self::transfer_keep_alive { dest, value } =>
				Pallet::<T>::transfer_keep_alive(ext, origin, dest, value),
			Self::transfer_all { dest, keep_alive } =>
				Pallet::<T>::transfer_all(ext, origin, dest, keep_alive),
			Self::force_unreserve { who, amount } =>
				Pallet::<T>::force_unreserve(ext, origin, who, amount),
		}
	}
}

// Dispatchable functions.
impl<T: Config> Pallet<T> {
	/// Transfer some liquid free balance to another account.
	///
	/// `transfer` will set the `FreeBalance` of the sender and receiver.
	/// If the sender's account is below the existential deposit as a result
	/// of the transfer, the account will be reaped.
	///
	/// The dispatch origin for this call must be `Signed` by the transactor.
	pub fn transfer(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let dest = T::Lookup::lookup(dest)?;
		Self::do_transfer(ext, &transactor, &dest, value, ExistenceRequirement::AllowDeath)?;
		Ok(().into())
	}

	/// Set the balances of a given account.
	///
	/// This will alter `FreeBalance` and `ReservedBalance` in storage. It will
	/// also alter the total issuance of the system (`TotalIssuance`) appropriately.
	/// If the new free or reserved balance is below the existential deposit,
	/// it will reset the account nonce (`frame_system::AccountNonce`).
	///
	/// The dispatch origin for this call is `root`.
	pub fn set_balance(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		who: AccountIdLookupOf<T>,
		new_free: Balance,
		new_reserved: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		let who = T::Lookup::lookup(who)?;
		let existential_deposit = T::ExistentialDeposit::get();

		let wipeout = new_free.saturating_add(new_reserved) < existential_deposit;
		let new_free = if wipeout { 0 } else { new_free };
		let new_reserved = if wipeout { 0 } else { new_reserved };

		let (old_free, old_reserved) = Self::mutate_account(ext, &who, |account| {
			let old_free = account.free;
			let old_reserved = account.reserved;

			account.free = new_free;
			account.reserved = new_reserved;

			(old_free, old_reserved)
		})?;

		// This will adjust the total issuance, which was not done by the `mutate_account` above.
		if new_free > old_free {
			PositiveImbalance::new(new_free - old_free).settle_issuance(ext);
		} else if new_free < old_free {
			NegativeImbalance::new(old_free - new_free).settle_issuance(ext);
		}

		if new_reserved > old_reserved {
			PositiveImbalance::new(new_reserved - old_reserved).settle_issuance(ext);
		} else if new_reserved < old_reserved {
			NegativeImbalance::new(old_reserved - new_reserved).settle_issuance(ext);
		}

		Self::deposit_event(
			ext,
			Event::BalanceSet { who, free: new_free, reserved: new_reserved },
		);
		Ok(().into())
	}

	/// Exactly as `transfer`, except the origin must be root and the source account may be
	/// specified.
	pub fn force_transfer(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		source: AccountIdLookupOf<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		let source = T::Lookup::lookup(source)?;
		let dest = T::Lookup::lookup(dest)?;
		Self::do_transfer(ext, &source, &dest, value, ExistenceRequirement::AllowDeath)?;
		Ok(().into())
	}

	/// Same as the [`transfer`](Self::transfer) call, but with a check that the transfer will not
	/// kill the origin account.
	pub fn transfer_keep_alive(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		dest: AccountIdLookupOf<T>,
		value: Balance,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let dest = T::Lookup::lookup(dest)?;
		Self::do_transfer(ext, &transactor, &dest, value, ExistenceRequirement::KeepAlive)?;
		Ok(().into())
	}

	/// Transfer the entire transferable balance from the caller account.
	///
	/// NOTE: This function only attempts to transfer _transferable_ balances. This means that
	/// any locked, reserved, or existential deposits (when `keep_alive` is `true`), will not be
	/// transferred by this function.
	///
	/// - `keep_alive`: A boolean to determine if the `transfer_all` operation should send all
	///   of the funds the account has, causing the sender account to be killed (false), or
	///   transfer everything except at least the existential deposit, which will guarantee to
	///   keep the sender account alive (true).
	pub fn transfer_all(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		dest: AccountIdLookupOf<T>,
		keep_alive: bool,
	) -> DispatchResultWithPostInfo {
		let transactor = ensure_signed(origin)?;
		let reducible_balance = Self::reducible_balance(ext, &transactor, keep_alive);
		let dest = T::Lookup::lookup(dest)?;
		let keep_alive = if keep_alive {
			ExistenceRequirement::KeepAlive
		} else {
			ExistenceRequirement::AllowDeath
		};
		Self::do_transfer(ext, &transactor, &dest, reducible_balance, keep_alive)?;
		Ok(().into())
	}

	/// Unreserve some balance from a user by force.
	///
	/// Can only be called by ROOT.
	pub fn force_unreserve(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		who: AccountIdLookupOf<T>,
		amount: Balance,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		let who = T::Lookup::lookup(who)?;
		let _leftover = <Self as ReservableCurrency<_>>::unreserve(ext, &who, amount);
		Ok(().into())
	}
}

impl<T: Config> PalletInfoAccess for Pallet<T> {
	fn index() -> usize {
		<T as frame_system::Config>::PalletInfo::index::<Self>().expect(
			"Pallet is part of the runtime because pallet `Config` trait is \
			implemented by the runtime; qed",
		)
	}

	fn name() -> &'static str {
		<T as frame_system::Config>::PalletInfo::name::<Self>().expect(
			"Pallet is part of the runtime because pallet `Config` trait is \
			implemented by the runtime; qed",
		)
	}
}

impl<T: Config> OnInitialize<BlockNumber> for Pallet<T> {}

impl<T: Config> OnFinalize<BlockNumber> for Pallet<T> {}

impl<T: Config> IntegrityTest for Pallet<T> {
	fn integrity_test() {
		assert!(
			T::ExistentialDeposit::get() > 0,
			"The existential deposit must be greater than zero!"
		);
	}
}

/// Genesis configuration of the Balances module.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
#[cfg_attr(
	feature = "std",
	serde(bound(
		serialize = "T::AccountId: Serialize",
		deserialize = "T::AccountId: Deserialize<'de>"
	))
)]
pub struct GenesisConfig<T: Config> {
	/// The balances to endow accounts with at genesis.
	pub balances: Vec<(T::AccountId, Balance)>,
}

impl<T: Config> Default for GenesisConfig<T> {
	fn default() -> Self {
		Self { balances: Default::default() }
	}
}

impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
	fn build(&self, ext: &mut Externalities) {
		let total = self.balances.iter().fold(0, |acc: Balance, &(_, n)| acc.saturating_add(n));
		TotalIssuance::put(ext, total);

		for (_, balance) in &self.balances {
			assert!(
				*balance >= T::ExistentialDeposit::get(),
				"the balance of any account should always be at least the existential deposit.",
			)
		}

		// ensure no duplicates exist.
		let endowed_accounts =
			self.balances.iter().map(|(x, _)| x).cloned().collect::<BTreeSet<_>>();

		assert!(
			endowed_accounts.len() == self.balances.len(),
			"duplicate balances in genesis."
		);

		for &(ref who, free) in self.balances.iter() {
			assert!(T::AccountStore::insert(ext, who, AccountData { free, ..Default::default() })
				.is_ok());
		}
	}
}

impl<T: Config> Pallet<T> {
	/// Get the free balance of an account.
	pub fn free_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).free
	}

	/// Get the balance of an account that can be used for transfers, reservations, or any other
	/// non-locking, non-transaction-fee activity. Will be at most `free_balance`.
	pub fn usable_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).usable(Reasons::Misc)
	}

	/// Get the balance of an account that can be used for paying transaction fees (not tipping,
	/// or any other kind of fees, though). Will be at most `free_balance`.
	pub fn usable_balance_for_fees(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).usable(Reasons::Fee)
	}

	/// Get the reserved balance of an account.
	pub fn reserved_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).reserved
	}

	/// The total units issued in the system.
	pub fn total_issuance(ext: &Externalities) -> Balance {
		TotalIssuance::get(ext)
	}

	/// Any liquidity locks on `who`.
	pub fn locks(ext: &Externalities, who: &T::AccountId) -> Vec<BalanceLock> {
		Locks::<T>::get(ext, who)
	}

	/// Get both the free and reserved balances of an account.
	pub fn account(ext: &Externalities, who: &T::AccountId) -> AccountData {
		T::AccountStore::get(ext, who)
	}

	/// The maximum amount `who` can transfer away.
	///
	/// The free balance minus any freezes, less the existential deposit unless the account may
	/// be reaped (nothing depends on it and `keep_alive` is `false`).
	pub fn reducible_balance(ext: &Externalities, who: &T::AccountId, keep_alive: bool) -> Balance {
		let a = Self::account(ext, who);
		// Liquid balance is what is neither reserved nor locked/frozen.
		let liquid = a.free.saturating_sub(a.fee_frozen.max(a.misc_frozen));
		if frame_system::Pallet::<T>::can_dec_provider(ext, who) && !keep_alive {
			liquid
		} else {
			// `must_remain_to_exist` is the part of liquid balance which must remain to keep total
			// over ED.
			let must_remain_to_exist =
				T::ExistentialDeposit::get().saturating_sub(a.total().saturating_sub(liquid));
			liquid.saturating_sub(must_remain_to_exist)
		}
	}

	/// Handles any steps needed after mutating an account.
	///
	/// This includes DustRemoval unbalancing, in the case than the `new` account's total balance
	/// is non-zero but below ED.
	///
	/// Returns two values:
	/// - `Some` containing the `new` account, iff the account has sufficient balance.
	/// - `Some` containing the dust to be dropped, iff some dust should be dropped.
	fn post_mutation(new: AccountData) -> (Option<AccountData>, Option<Balance>) {
		let total = new.total();
		if total < T::ExistentialDeposit::get() {
			if total == 0 {
				(None, None)
			} else {
				(None, Some(total))
			}
		} else {
			(Some(new), None)
		}
	}

	fn deposit_event(ext: &mut Externalities, event: Event<T>) {
		let event = <T as Config>::RuntimeEvent::from(event);
		frame_system::Pallet::<T>::deposit_event(ext, event);
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed.
	///
	/// NOTE: Doesn't do any preparatory work for creating a new account, so should only be used
	/// when it is known that the account already exists.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn mutate_account<R>(
		ext: &mut Externalities,
		who: &T::AccountId,
		f: impl FnOnce(&mut AccountData) -> R,
	) -> Result<R, DispatchError> {
		Self::try_mutate_account(ext, who, |a, _| -> Result<R, DispatchError> { Ok(f(a)) })
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed. This will do nothing if the
	/// result of `f` is an `Err`.
	///
	/// NOTE: Doesn't do any preparatory work for creating a new account, so should only be used
	/// when it is known that the account already exists.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn try_mutate_account<R, E: From<DispatchError>>(
		ext: &mut Externalities,
		who: &T::AccountId,
		f: impl FnOnce(&mut AccountData, bool) -> Result<R, E>,
	) -> Result<R, E> {
		Self::try_mutate_account_with_dust(ext, who, f).map(|(result, dust_cleaner)| {
			dust_cleaner.clean(ext);
			result
		})
	}

	/// Mutate an account to some new value, or delete it entirely with `None`. Will enforce
	/// `ExistentialDeposit` law, annulling the account as needed. This will do nothing if the
	/// result of `f` is an `Err`.
	///
	/// It returns both the result from the closure, and an optional `DustCleaner` instance which
	/// should be cleaned once it is known that all nested mutates that could affect storage items
	/// what the dust handler touches have completed.
	///
	/// NOTE: Doesn't do any preparatory work for creating a new account, so should only be used
	/// when it is known that the account already exists.
	///
	/// NOTE: LOW-LEVEL: This will not attempt to maintain total issuance. It is expected that
	/// the caller will do this.
	pub fn try_mutate_account_with_dust<R, E: From<DispatchError>>(
		ext: &mut Externalities,
		who: &T::AccountId,
		f: impl FnOnce(&mut AccountData, bool) -> Result<R, E>,
	) -> Result<(R, DustCleaner<T>), E> {
		let (maybe_endowed, maybe_dust, result) =
			T::AccountStore::try_mutate_exists(ext, who, |maybe_account| {
				let is_new = maybe_account.is_none();
				let mut account = maybe_account.take().unwrap_or_default();
				f(&mut account, is_new).map(move |result| {
					let maybe_endowed = if is_new { Some(account.free) } else { None };
					let (maybe_account_maybe_dust, maybe_dust) = Self::post_mutation(account);
					*maybe_account = maybe_account_maybe_dust;
					(maybe_endowed, maybe_dust, result)
				})
			})?;
		if let Some(endowed) = maybe_endowed {
			Self::deposit_event(
				ext,
				Event::Endowed { account: who.clone(), free_balance: endowed },
			);
		}
		let dust_cleaner =
			DustCleaner(maybe_dust.map(|dust| (who.clone(), NegativeImbalance::new(dust))));
		Ok((result, dust_cleaner))
	}

	/// Check that `who` may drop its free balance to `new_balance` for `reasons`.
	fn ensure_can_withdraw_for(
		ext: &Externalities,
		who: &T::AccountId,
		amount: Balance,
		reasons: Reasons,
		new_balance: Balance,
	) -> DispatchResult {
		if amount == 0 {
			return Ok(())
		}
		let min_balance = Self::account(ext, who).frozen(reasons);
		ensure!(new_balance >= min_balance, Error::<T>::LiquidityRestrictions);
		Ok(())
	}

	/// Transfer `value` from `transactor` to `dest`.
	///
	/// Nothing happens for a zero value or a transfer to self. Every check runs against the
	/// current state before either account is touched; both accounts are then written inside one
	/// storage layer. `Transfer` is emitted ahead of the `Endowed`, `KilledAccount` and
	/// `DustLost` events the account writes cause.
	pub fn do_transfer(
		ext: &mut Externalities,
		transactor: &T::AccountId,
		dest: &T::AccountId,
		value: Balance,
		existence_requirement: ExistenceRequirement,
	) -> DispatchResult {
		if value == 0 || transactor == dest {
			return Ok(())
		}
		let existential_deposit = T::ExistentialDeposit::get();

		let from_account = Self::account(ext, transactor);
		let new_from_free =
			from_account.free.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;

		let to_account = Self::account(ext, dest);
		let new_to_total = to_account.total().checked_add(value).ok_or(ArithmeticError::Overflow)?;
		ensure!(new_to_total >= existential_deposit, Error::<T>::ExistentialDeposit);

		Self::ensure_can_withdraw_for(ext, transactor, value, Reasons::All, new_from_free)?;

		// The sender may only drop below the existential deposit when its provider can go.
		let allow_death = existence_requirement == ExistenceRequirement::AllowDeath &&
			frame_system::Pallet::<T>::can_dec_provider(ext, transactor);
		ensure!(
			allow_death || new_from_free.saturating_add(from_account.reserved) >= existential_deposit,
			Error::<T>::KeepAlive
		);

		let (to_dust, from_dust) = with_storage_layer(ext, |ext| -> Result<_, DispatchError> {
			Self::deposit_event(
				ext,
				Event::Transfer { from: transactor.clone(), to: dest.clone(), amount: value },
			);
			let ((), to_dust) =
				Self::try_mutate_account_with_dust(ext, dest, |to_account, _| -> DispatchResult {
					to_account.free =
						to_account.free.checked_add(value).ok_or(ArithmeticError::Overflow)?;
					Ok(())
				})?;
			let ((), from_dust) = Self::try_mutate_account_with_dust(
				ext,
				transactor,
				|from_account, _| -> DispatchResult {
					from_account.free = from_account
						.free
						.checked_sub(value)
						.ok_or(Error::<T>::InsufficientBalance)?;
					Ok(())
				},
			)?;
			Ok((to_dust, from_dust))
		})?;
		to_dust.clean(ext);
		from_dust.clean(ext);

		log::trace!(target: LOG_TARGET, "transferred {} from {:?} to {:?}", value, transactor, dest);
		Ok(())
	}

	/// Update the account entry for `who`, given the locks.
	fn update_locks(ext: &mut Externalities, who: &T::AccountId, locks: &[BalanceLock]) {
		if locks.len() as u32 > T::MaxLocks::get() {
			log::warn!(
				target: LOG_TARGET,
				"Warning: A user has more currency locks than expected. \
				A runtime configuration adjustment may be needed."
			);
		}
		let res = Self::mutate_account(ext, who, |b| {
			b.misc_frozen = 0;
			b.fee_frozen = 0;
			for l in locks.iter() {
				if l.reasons == Reasons::All || l.reasons == Reasons::Misc {
					b.misc_frozen = b.misc_frozen.max(l.amount);
				}
				if l.reasons == Reasons::All || l.reasons == Reasons::Fee {
					b.fee_frozen = b.fee_frozen.max(l.amount);
				}
			}
		});
		if let Err(e) = res {
			log::error!(target: LOG_TARGET, "Failed to update account frozen balances: {:?}", e);
		}

		let existed = Locks::<T>::contains_key(ext, who);
		if locks.is_empty() {
			Locks::<T>::remove(ext, who);
			if existed {
				frame_system::Pallet::<T>::dec_consumers(ext, who);
			}
		} else {
			Locks::<T>::insert(ext, who, locks.to_vec());
			if !existed && frame_system::Pallet::<T>::inc_consumers(ext, who).is_err() {
				// No providers for the locks. This is impossible under normal circumstances
				// since the funds that are under the lock will themselves be stored in the
				// account and therefore will need a reference.
				log::warn!(
					target: LOG_TARGET,
					"Warning: Attempt to introduce lock consumer reference, yet no providers. \
					This is unexpected but should be safe."
				);
			}
		}
	}

	/// Everything the module exposes to the outside.
	pub fn metadata() -> ModuleMetadata {
		ModuleMetadata {
			name: <Self as PalletInfoAccess>::name(),
			index: <Self as PalletInfoAccess>::index() as u8,
			calls: Call::<T>::metadata(),
			events: Event::<T>::metadata(),
			errors: Error::<T>::metadata(),
			storage: STORAGE_ITEMS.to_vec(),
			constants: vec![
				ConstantMetadata {
					name: "ExistentialDeposit",
					value: T::ExistentialDeposit::get().encode(),
				},
				ConstantMetadata { name: "MaxLocks", value: T::MaxLocks::get().encode() },
			],
		}
	}
}

impl<T: Config> Currency<T::AccountId> for Pallet<T> {
	type PositiveImbalance = PositiveImbalance;
	type NegativeImbalance = NegativeImbalance;

	fn total_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).total()
	}

	// Check if `value` amount of free balance can be slashed from `who`.
	fn can_slash(ext: &Externalities, who: &T::AccountId, value: Balance) -> bool {
		if value == 0 {
			return true
		}
		Self::free_balance(ext, who) >= value
	}

	fn total_issuance(ext: &Externalities) -> Balance {
		TotalIssuance::get(ext)
	}

	fn minimum_balance() -> Balance {
		T::ExistentialDeposit::get()
	}

	// Burn funds from the total issuance, returning a positive imbalance for the amount burned.
	// Is a no-op if amount to be burned is zero.
	fn burn(ext: &mut Externalities, mut amount: Balance) -> Self::PositiveImbalance {
		if amount == 0 {
			return PositiveImbalance::zero()
		}
		TotalIssuance::mutate(ext, |issued| {
			*issued = issued.checked_sub(amount).unwrap_or_else(|| {
				amount = *issued;
				0
			});
		});
		PositiveImbalance::new(amount)
	}

	// Create new funds into the total issuance, returning a negative imbalance
	// for the amount issued.
	// Is a no-op if amount to be issued it zero.
	fn issue(ext: &mut Externalities, mut amount: Balance) -> Self::NegativeImbalance {
		if amount == 0 {
			return NegativeImbalance::zero()
		}
		TotalIssuance::mutate(ext, |issued| {
			*issued = issued.checked_add(amount).unwrap_or_else(|| {
				amount = Balance::MAX - *issued;
				Balance::MAX
			})
		});
		NegativeImbalance::new(amount)
	}

	fn free_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).free
	}

	// Ensure that an account can withdraw from their free balance given any existing withdrawal
	// restrictions like locks and vesting balance.
	// Is a no-op if amount to be withdrawn is zero.
	fn ensure_can_withdraw(
		ext: &Externalities,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
		new_balance: Balance,
	) -> DispatchResult {
		Self::ensure_can_withdraw_for(ext, who, amount, reasons.into(), new_balance)
	}

	// Transfer some free balance from `transactor` to `dest`, respecting existence requirements.
	// Is a no-op if value to be transferred is zero or the `transactor` is the same as `dest`.
	fn transfer(
		ext: &mut Externalities,
		transactor: &T::AccountId,
		dest: &T::AccountId,
		value: Balance,
		existence_requirement: ExistenceRequirement,
	) -> DispatchResult {
		Self::do_transfer(ext, transactor, dest, value, existence_requirement)
	}

	/// Slash a target account `who`, returning the negative imbalance created and any left over
	/// amount that could not be slashed.
	///
	/// Is a no-op if `value` to be slashed is zero or the account does not exist.
	///
	/// NOTE: `slash()` prefers free balance, but assumes that reserve balance can be drawn
	/// from in extreme circumstances. `can_slash()` should be used prior to `slash()` to avoid
	/// having to draw from reserved funds, however we err on the side of punishment if things are
	/// inconsistent or `can_slash` wasn't used appropriately.
	fn slash(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
	) -> (Self::NegativeImbalance, Balance) {
		if value == 0 {
			return (NegativeImbalance::zero(), 0)
		}
		if Self::total_balance(ext, who) == 0 {
			return (NegativeImbalance::zero(), value)
		}

		let result = Self::try_mutate_account(
			ext,
			who,
			|account, _is_new| -> Result<(Balance, Balance), DispatchError> {
				// Best value is the most amount we can slash following liveness rules.
				let free_slash = value.min(account.free);
				account.free -= free_slash;
				let remaining_slash = value - free_slash;
				let reserved_slash = remaining_slash.min(account.reserved);
				account.reserved -= reserved_slash;
				Ok((free_slash + reserved_slash, remaining_slash - reserved_slash))
			},
		);
		match result {
			Ok((slashed, remaining)) => {
				Self::deposit_event(ext, Event::Slashed { who: who.clone(), amount: slashed });
				(NegativeImbalance::new(slashed), remaining)
			},
			Err(_) => (NegativeImbalance::zero(), value),
		}
	}

	/// Deposit some `value` into the free balance of an existing target account `who`.
	///
	/// Is a no-op if the `value` to be deposited is zero.
	fn deposit_into_existing(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
	) -> Result<Self::PositiveImbalance, DispatchError> {
		if value == 0 {
			return Ok(PositiveImbalance::zero())
		}

		Self::try_mutate_account(ext, who, |account, is_new| -> DispatchResult {
			ensure!(!is_new, Error::<T>::DeadAccount);
			account.free = account.free.checked_add(value).ok_or(ArithmeticError::Overflow)?;
			Ok(())
		})?;
		Self::deposit_event(ext, Event::Deposit { who: who.clone(), amount: value });
		Ok(PositiveImbalance::new(value))
	}

	/// Deposit some `value` into the free balance of `who`, possibly creating a new account.
	///
	/// This function is a no-op if:
	/// - the `value` to be deposited is zero; or
	/// - the `value` to be deposited is less than the required ED and the account does not yet
	///   exist; or
	/// - the deposit would necessitate the account to exist and there are no provider references;
	///   or
	/// - `value` is so large it would cause the balance of `who` to overflow.
	fn deposit_creating(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
	) -> Self::PositiveImbalance {
		if value == 0 {
			return PositiveImbalance::zero()
		}

		let result = Self::try_mutate_account(ext, who, |account, is_new| -> DispatchResult {
			let ed = T::ExistentialDeposit::get();
			ensure!(value >= ed || !is_new, Error::<T>::ExistentialDeposit);

			// defensive only: overflow should never happen, however in case it does, then this
			// operation is a no-op.
			account.free = match account.free.checked_add(value) {
				Some(x) => x,
				None => return Ok(()),
			};
			Ok(())
		});
		match result {
			Ok(()) => {
				Self::deposit_event(ext, Event::Deposit { who: who.clone(), amount: value });
				PositiveImbalance::new(value)
			},
			Err(_) => PositiveImbalance::zero(),
		}
	}

	/// Withdraw some free balance from an account, respecting existence requirements.
	///
	/// Is a no-op if value to be withdrawn is zero.
	fn withdraw(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
		reasons: WithdrawReasons,
		liveness: ExistenceRequirement,
	) -> Result<Self::NegativeImbalance, DispatchError> {
		if value == 0 {
			return Ok(NegativeImbalance::zero())
		}

		let account = Self::account(ext, who);
		let new_free_account =
			account.free.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;

		// bail if we need to keep the account alive and this would kill it.
		let ed = T::ExistentialDeposit::get();
		let would_be_dead = new_free_account.saturating_add(account.reserved) < ed;
		let would_kill = would_be_dead && account.total() >= ed;
		ensure!(liveness == ExistenceRequirement::AllowDeath || !would_kill, Error::<T>::KeepAlive);

		Self::ensure_can_withdraw_for(ext, who, value, reasons.into(), new_free_account)?;

		Self::try_mutate_account(ext, who, |account, _| -> DispatchResult {
			account.free = account.free.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;
			Ok(())
		})?;
		Self::deposit_event(ext, Event::Withdraw { who: who.clone(), amount: value });
		Ok(NegativeImbalance::new(value))
	}

	/// Force the new free balance of a target account `who` to some new value `balance`.
	fn make_free_balance_be(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
	) -> SignedImbalance<Balance, Self::PositiveImbalance> {
		let result = Self::try_mutate_account(
			ext,
			who,
			|account, is_new| -> Result<(Balance, Balance), DispatchError> {
				let ed = T::ExistentialDeposit::get();
				let total = value.saturating_add(account.reserved);
				// If we're attempting to set an existing account to less than ED, then
				// bypass the entire operation. It's a no-op if you follow it through, but
				// since this is an instance where we might account for a negative imbalance
				// (in the dust cleaner of set_account) before we account for its actual
				// equal and opposite cause (returned as an Imbalance), then in the
				// instance that there's no other accounts on the system at all, we might
				// underflow the issuance and our arithmetic will be off.
				ensure!(total >= ed || !is_new, Error::<T>::ExistentialDeposit);

				let old_free = account.free;
				account.free = value;
				Ok((old_free, account.reserved))
			},
		);
		match result {
			Ok((old_free, reserved)) => {
				Self::deposit_event(
					ext,
					Event::BalanceSet { who: who.clone(), free: value, reserved },
				);
				if value > old_free {
					SignedImbalance::Positive(PositiveImbalance::new(value - old_free))
				} else {
					SignedImbalance::Negative(NegativeImbalance::new(old_free - value))
				}
			},
			Err(_) => SignedImbalance::Positive(PositiveImbalance::zero()),
		}
	}
}

impl<T: Config> ReservableCurrency<T::AccountId> for Pallet<T> {
	/// Check if `who` can reserve `value` from their free balance.
	///
	/// Always `true` if value to be reserved is zero.
	fn can_reserve(ext: &Externalities, who: &T::AccountId, value: Balance) -> bool {
		if value == 0 {
			return true
		}
		Self::account(ext, who).free.checked_sub(value).map_or(false, |new_balance| {
			Self::ensure_can_withdraw(ext, who, value, WithdrawReasons::RESERVE, new_balance)
				.is_ok()
		})
	}

	fn reserved_balance(ext: &Externalities, who: &T::AccountId) -> Balance {
		Self::account(ext, who).reserved
	}

	/// Move `value` from the free balance from `who` to their reserved balance.
	///
	/// Is a no-op if value to be reserved is zero.
	fn reserve(ext: &mut Externalities, who: &T::AccountId, value: Balance) -> DispatchResult {
		if value == 0 {
			return Ok(())
		}

		let account = Self::account(ext, who);
		let new_free = account.free.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;
		account.reserved.checked_add(value).ok_or(ArithmeticError::Overflow)?;
		Self::ensure_can_withdraw(ext, who, value, WithdrawReasons::RESERVE, new_free)?;

		Self::try_mutate_account(ext, who, |account, _| -> DispatchResult {
			account.free = account.free.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;
			account.reserved =
				account.reserved.checked_add(value).ok_or(ArithmeticError::Overflow)?;
			Ok(())
		})?;

		Self::deposit_event(ext, Event::Reserved { who: who.clone(), amount: value });
		Ok(())
	}

	/// Unreserve some funds, returning any amount that was unable to be unreserved.
	///
	/// Is a no-op if the value to be unreserved is zero or the account does not exist.
	///
	/// NOTE: returns amount value which wasn't successfully unreserved.
	fn unreserve(ext: &mut Externalities, who: &T::AccountId, value: Balance) -> Balance {
		if value == 0 {
			return 0
		}
		if Self::total_balance(ext, who) == 0 {
			return value
		}

		let actual = match Self::mutate_account(ext, who, |account| {
			let actual = account.reserved.min(value);
			account.reserved -= actual;
			// defensive only: this can never fail since total issuance which is at least
			// free+reserved fits into the same data type.
			account.free = account.free.saturating_add(actual);
			actual
		}) {
			Ok(x) => x,
			Err(_) => {
				// This should never happen since we don't alter the total amount in the account.
				// If it ever does, then we should fail gracefully though, indicating that nothing
				// could be done.
				return value
			},
		};

		Self::deposit_event(ext, Event::Unreserved { who: who.clone(), amount: actual });
		value - actual
	}

	/// Slash from reserved balance, returning the negative imbalance created,
	/// and any amount that was unable to be slashed.
	///
	/// Is a no-op if the value to be slashed is zero or the account does not exist.
	fn slash_reserved(
		ext: &mut Externalities,
		who: &T::AccountId,
		value: Balance,
	) -> (Self::NegativeImbalance, Balance) {
		if value == 0 {
			return (NegativeImbalance::zero(), 0)
		}
		if Self::total_balance(ext, who) == 0 {
			return (NegativeImbalance::zero(), value)
		}

		// NOTE: `mutate_account` may fail if it attempts to reduce the balance to the point that an
		//   account is attempted to be illegally destroyed.

		match Self::mutate_account(ext, who, |account| {
			let actual = value.min(account.reserved);
			account.reserved -= actual;
			actual
		}) {
			Ok(actual) => {
				Self::deposit_event(ext, Event::Slashed { who: who.clone(), amount: actual });
				(NegativeImbalance::new(actual), value - actual)
			},
			Err(_) => (NegativeImbalance::zero(), value),
		}
	}

	/// Move the reserved balance of one account into the balance of another, according to
	/// `status`.
	///
	/// Is a no-op if:
	/// - the value to be moved is zero; or
	/// - the `slashed` id equal to `beneficiary` and the `status` is `Reserved`.
	///
	/// Returns the amount that could not be moved.
	fn repatriate_reserved(
		ext: &mut Externalities,
		slashed: &T::AccountId,
		beneficiary: &T::AccountId,
		value: Balance,
		status: BalanceStatus,
	) -> Result<Balance, DispatchError> {
		if value == 0 {
			return Ok(0)
		}

		if slashed == beneficiary {
			return match status {
				BalanceStatus::Free => Ok(Self::unreserve(ext, slashed, value)),
				BalanceStatus::Reserved =>
					Ok(value.saturating_sub(Self::reserved_balance(ext, slashed))),
			}
		}

		let to_account = Self::account(ext, beneficiary);
		ensure!(to_account != AccountData::default(), Error::<T>::DeadAccount);
		let actual = value.min(Self::account(ext, slashed).reserved);
		match status {
			BalanceStatus::Free => to_account.free.checked_add(actual),
			BalanceStatus::Reserved => to_account.reserved.checked_add(actual),
		}
		.ok_or(ArithmeticError::Overflow)?;

		let (to_dust, from_dust) = with_storage_layer(ext, |ext| -> Result<_, DispatchError> {
			let ((), to_dust) =
				Self::try_mutate_account_with_dust(
					ext,
					beneficiary,
					|to_account, is_new| -> DispatchResult {
						ensure!(!is_new, Error::<T>::DeadAccount);
						match status {
							BalanceStatus::Free =>
								to_account.free = to_account
									.free
									.checked_add(actual)
									.ok_or(ArithmeticError::Overflow)?,
							BalanceStatus::Reserved =>
								to_account.reserved = to_account
									.reserved
									.checked_add(actual)
									.ok_or(ArithmeticError::Overflow)?,
						}
						Ok(())
					},
				)?;
			let ((), from_dust) =
				Self::try_mutate_account_with_dust(ext, slashed, |from_account, _| -> DispatchResult {
					from_account.reserved -= actual.min(from_account.reserved);
					Ok(())
				})?;
			Ok((to_dust, from_dust))
		})?;
		to_dust.clean(ext);
		from_dust.clean(ext);

		Self::deposit_event(
			ext,
			Event::ReserveRepatriated {
				from: slashed.clone(),
				to: beneficiary.clone(),
				amount: actual,
				destination_status: status,
			},
		);
		Ok(value - actual)
	}
}

impl<T: Config> LockableCurrency<T::AccountId> for Pallet<T> {
	type MaxLocks = T::MaxLocks;

	// Set a lock on the balance of `who`.
	// Is a no-op if lock amount is zero or `reasons` `is_none()`.
	fn set_lock(
		ext: &mut Externalities,
		id: LockIdentifier,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	) {
		if amount == 0 || reasons.is_empty() {
			return
		}
		let mut new_lock = Some(BalanceLock { id, amount, reasons: reasons.into() });
		let mut locks = Self::locks(ext, who)
			.into_iter()
			.filter_map(|lock| if lock.id == id { new_lock.take() } else { Some(lock) })
			.collect::<Vec<_>>();
		if let Some(lock) = new_lock {
			locks.push(lock)
		}
		Self::update_locks(ext, who, &locks[..]);
	}

	// Extend a lock on the balance of `who`.
	// Is a no-op if lock amount is zero or `reasons` `is_none()`.
	fn extend_lock(
		ext: &mut Externalities,
		id: LockIdentifier,
		who: &T::AccountId,
		amount: Balance,
		reasons: WithdrawReasons,
	) {
		if amount == 0 || reasons.is_empty() {
			return
		}
		let mut new_lock = Some(BalanceLock { id, amount, reasons: reasons.into() });
		let mut locks = Self::locks(ext, who)
			.into_iter()
			.filter_map(|lock| {
				if lock.id == id {
					new_lock.take().map(|nl| BalanceLock {
						id: lock.id,
						amount: lock.amount.max(nl.amount),
						reasons: lock.reasons | nl.reasons,
					})
				} else {
					Some(lock)
				}
			})
			.collect::<Vec<_>>();
		if let Some(lock) = new_lock {
			locks.push(lock)
		}
		Self::update_locks(ext, who, &locks[..]);
	}

	fn remove_lock(ext: &mut Externalities, id: LockIdentifier, who: &T::AccountId) {
		let mut locks = Self::locks(ext, who);
		locks.retain(|l| l.id != id);
		Self::update_locks(ext, who, &locks[..]);
	}
}
