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


//! # Transaction Payment Module
//!
//! This module provides the basic logic needed to pay the absolute minimum amount needed for a
//! transaction to be included. This includes:
//!   - _base fee_: This is the minimum amount a user pays for a transaction. It is declared
//! 	as a base _weight_ in the runtime and converted to a fee using `WeightToFee`.
//!   - _weight fee_: A fee proportional to amount of weight a transaction consumes.
//!   - _length fee_: A fee proportional to the encoded length of the transaction.
//!   - _tip_: An optional tip. Tip increases the priority of the transaction, giving it a higher
//!     chance to be included by the transaction queue.
//!
//! The base fee and adjusted weight and length fees constitute the _inclusion fee_, which is
//! the minimum fee for a transaction to be included in a block.
//!
//! The formula of final fee:
//!   ```ignore
//!   inclusion_fee = base_fee + length_fee + [fee_multiplier * weight_fee];
//!   final_fee = inclusion_fee + tip;
//!   ```
//!
//!   - `fee_multiplier`: A multiplier read from [`NextFeeMultiplier`] and updated at the end of
//!     every block through the `FeeMultiplierUpdate` configuration.
//!
//! The fee is withdrawn by the [`ChargeTransactionPayment`] signed extension before dispatch,
//! and any overcharge is refunded once the actual weight of the dispatch is known.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(test)]
mod mock;

mod payment;
mod types;

use alloc::{vec, vec::Vec};
use codec::{Compact, Decode, Encode, Error as CodecError, Input, Output};
use core::marker::PhantomData;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::{
	generic::UncheckedExtrinsic,
	traits::{Convert, DispatchInfoOf, PostDispatchInfoOf, SignedExtension},
	transaction_validity::{
		TransactionPriority, TransactionValidity, TransactionValidityError, ValidTransaction,
	},
	Balance, BlockNumber, DispatchResult, Externalities, FixedU128,
};
use tessera_support::{
	defensive,
	dispatch::{DispatchClass, DispatchInfo, GetDispatchInfo, Pays, PostDispatchInfo},
	generate_storage_instances,
	registry::{ConstantMetadata, ItemMetadata, ModuleMetadata},
	storage::types::{StorageValue, ValueQuery},
	traits::{
		BuildGenesisConfig, Get, IntegrityTest, OnFinalize, OnInitialize, PalletInfo,
		PalletInfoAccess,
	},
	weights::{Weight, WeightToFee},
};
use tessera_system as frame_system;

pub use payment::*;
pub use types::{FeeDetails, InclusionFee, RuntimeDispatchInfo};

const LOG_TARGET: &str = "runtime::transaction-payment";

/// Fee multiplier.
pub type Multiplier = FixedU128;

/// Something that can convert the current multiplier to the next one.
pub trait MultiplierUpdate: Convert<Multiplier, Multiplier> {
	/// Minimum multiplier. Any outcome of the `convert` function should be at least this.
	fn min() -> Multiplier;
	/// Maximum multiplier. Any outcome of the `convert` function should be less or equal this.
	fn max() -> Multiplier;
}

/// A multiplier that never changes.
///
/// Useful for chains that do not need fees to react to congestion. The value of `M` is used both
/// as the genesis default and as the result of every update.
pub struct ConstFeeMultiplier<M: Get<Multiplier>>(PhantomData<M>);

impl<M: Get<Multiplier>> MultiplierUpdate for ConstFeeMultiplier<M> {
	fn min() -> Multiplier {
		M::get()
	}
	fn max() -> Multiplier {
		M::get()
	}
}

impl<M> Convert<Multiplier, Multiplier> for ConstFeeMultiplier<M>
where
	M: Get<Multiplier>,
{
	fn convert(_previous: Multiplier) -> Multiplier {
		Self::min()
	}
}

/// The module's configuration trait.
pub trait Config: frame_system::Config {
	/// The overarching event type.
	type RuntimeEvent: From<Event<Self>> + Into<<Self as frame_system::Config>::RuntimeEvent>;

	/// Handler for withdrawing, refunding and depositing the transaction fee.
	/// Transaction fees are withdrawn before the transaction is executed.
	/// After the transaction was executed the transaction weight can be
	/// adjusted, depending on the used resources by the transaction. If the
	/// transaction weight is lower than expected, parts of the transaction fee
	/// might be refunded. In the end the fees can be deposited.
	type OnChargeTransaction: OnChargeTransaction<Self>;

	/// A fee multiplier for `Operational` extrinsics to compute "virtual tip" to boost their
	/// `priority`
	///
	/// This value is multiplied by the `final_fee` to obtain a "virtual tip" that is later
	/// added to a tip component in regular `priority` calculations.
	/// It means that a `Normal` transaction can front-run a similarly-sized `Operational`
	/// extrinsic (with no tip), by including a tip value greater than the virtual tip.
	///
	/// ```rust,ignore
	/// // For `Normal`
	/// let priority = priority_calc(tip);
	///
	/// // For `Operational`
	/// let virtual_tip = (inclusion_fee + tip) * OperationalFeeMultiplier;
	/// let priority = priority_calc(tip + virtual_tip);
	/// ```
	///
	/// Note that since we use `final_fee` the multiplier applies also to the regular `tip`
	/// sent with the transaction. So, not only does the transaction get a priority bump based
	/// on the `inclusion_fee`, but we also amplify the impact of tips applied to `Operational`
	/// transactions.
	type OperationalFeeMultiplier: Get<u8>;

	/// Convert a weight value into a deductible fee based on the currency type.
	type WeightToFee: WeightToFee<Balance = Balance>;

	/// Convert a length value into a deductible fee based on the currency type.
	type LengthToFee: WeightToFee<Balance = Balance>;

	/// Update the multiplier of the next block, based on the previous block's weight.
	type FeeMultiplierUpdate: MultiplierUpdate;
}

/// The Transaction Payment module.
pub struct Pallet<T>(PhantomData<T>);

generate_storage_instances!("TransactionPayment", {
	NextFeeMultiplierPrefix => "NextFeeMultiplier",
});

/// The multiplier an empty [`NextFeeMultiplier`] reads as.
pub struct NextFeeMultiplierOnEmpty;

impl Get<Multiplier> for NextFeeMultiplierOnEmpty {
	fn get() -> Multiplier {
		Multiplier::one()
	}
}

/// The fee multiplier applied to the weight fee of transactions in the next block.
pub type NextFeeMultiplier =
	StorageValue<NextFeeMultiplierPrefix, Multiplier, ValueQuery, NextFeeMultiplierOnEmpty>;

const STORAGE_ITEMS: &[&str] = &["NextFeeMultiplier"];

/// Event for the Transaction Payment module.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<T: Config> {
	/// A transaction fee `actual_fee`, of which `tip` was added to the minimum inclusion fee,
	/// has been paid by `who`.
	TransactionFeePaid { who: T::AccountId, actual_fee: Balance, tip: Balance },
}

impl<T: Config> Event<T> {
	/// Names and indices of every event of the module.
	pub fn metadata() -> Vec<ItemMetadata> {
		vec![ItemMetadata::new("TransactionFeePaid", 0)]
	}
}

impl<T: Config> Encode for Event<T> {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			Event::TransactionFeePaid { who, actual_fee, tip } => {
				dest.push_byte(0);
				who.encode_to(dest);
				actual_fee.encode_to(dest);
				tip.encode_to(dest);
			},
		}
	}
}

impl<T: Config> Decode for Event<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		match input.read_byte().map_err(|e| e.expecting("Event"))? {
			0 => Ok(Event::TransactionFeePaid {
				who: Decode::decode(input)?,
				actual_fee: Decode::decode(input)?,
				tip: Decode::decode(input)?,
			}),
			index => Err(CodecError::unknown_variant("Event", index)),
		}
	}
}

/// Genesis configuration of the Transaction Payment module.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct GenesisConfig<T: Config> {
	/// The fee multiplier of the first block.
	pub multiplier: Multiplier,
	#[cfg_attr(feature = "std", serde(skip))]
	pub _config: PhantomData<T>,
}

impl<T: Config> Default for GenesisConfig<T> {
	fn default() -> Self {
		Self { multiplier: Multiplier::one(), _config: PhantomData }
	}
}

impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
	fn build(&self, ext: &mut Externalities) {
		NextFeeMultiplier::put(ext, self.multiplier);
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

impl<T: Config> OnFinalize<BlockNumber> for Pallet<T> {
	fn on_finalize(ext: &mut Externalities, _: BlockNumber) {
		NextFeeMultiplier::mutate(ext, |fm| {
			*fm = T::FeeMultiplierUpdate::convert(*fm);
		});
	}
}

impl<T: Config> IntegrityTest for Pallet<T> {
	fn integrity_test() {
		assert!(
			T::FeeMultiplierUpdate::min() <= T::FeeMultiplierUpdate::max(),
			"The minimum fee multiplier exceeds the maximum."
		);

		let target = T::BlockWeights::get()
			.get(DispatchClass::Normal)
			.max_total
			.unwrap_or_else(|| T::BlockWeights::get().max_block);
		assert!(
			!target.is_zero(),
			"Setting `max_total` for `Normal` dispatch class to zero is not compatible with \
			`transaction-payment` module."
		);
	}
}

impl<T: Config> Pallet<T> {
	/// Public function to access the next fee multiplier.
	pub fn next_fee_multiplier(ext: &Externalities) -> Multiplier {
		NextFeeMultiplier::get(ext)
	}

	/// Query the data that we know about the fee of a given `call`.
	///
	/// This module is not and cannot be aware of the internals of a signed extension, for example
	/// a tip. It only interprets the extrinsic as some encoded value and accounts for its weight
	/// and length, the runtime's extrinsic base weight, and the current fee multiplier.
	///
	/// All dispatchables must be annotated with weight and will have some fee info. This function
	/// always returns.
	pub fn query_info<Address, Signature, Extra>(
		ext: &Externalities,
		unchecked_extrinsic: &UncheckedExtrinsic<Address, T::RuntimeCall, Signature, Extra>,
		len: u32,
	) -> RuntimeDispatchInfo
	where
		Extra: SignedExtension,
	{
		// The tip inside `Extra` is not inspected, so `partial_fee` never includes it.
		let dispatch_info = unchecked_extrinsic.function.get_dispatch_info();

		let partial_fee = if unchecked_extrinsic.is_signed() {
			Self::compute_fee(ext, len, &dispatch_info, 0)
		} else {
			// Unsigned extrinsics have no partial fee.
			0
		};

		let DispatchInfo { weight, class, .. } = dispatch_info;

		RuntimeDispatchInfo { weight, class, partial_fee }
	}

	/// Query the detailed fee of a given `call`.
	pub fn query_fee_details<Address, Signature, Extra>(
		ext: &Externalities,
		unchecked_extrinsic: &UncheckedExtrinsic<Address, T::RuntimeCall, Signature, Extra>,
		len: u32,
	) -> FeeDetails
	where
		Extra: SignedExtension,
	{
		let dispatch_info = unchecked_extrinsic.function.get_dispatch_info();

		let tip = 0;

		if unchecked_extrinsic.is_signed() {
			Self::compute_fee_details(ext, len, &dispatch_info, tip)
		} else {
			// Unsigned extrinsics have no inclusion fee.
			FeeDetails { inclusion_fee: None, tip }
		}
	}

	/// Query information of a dispatch class, weight, and fee of a given encoded `Call`.
	pub fn query_call_info(
		ext: &Externalities,
		call: T::RuntimeCall,
		len: u32,
	) -> RuntimeDispatchInfo {
		let dispatch_info = <T::RuntimeCall as GetDispatchInfo>::get_dispatch_info(&call);
		let DispatchInfo { weight, class, .. } = dispatch_info;

		RuntimeDispatchInfo {
			weight,
			class,
			partial_fee: Self::compute_fee(ext, len, &dispatch_info, 0),
		}
	}

	/// Query fee details of a given encoded `Call`.
	pub fn query_call_fee_details(
		ext: &Externalities,
		call: T::RuntimeCall,
		len: u32,
	) -> FeeDetails {
		let dispatch_info = <T::RuntimeCall as GetDispatchInfo>::get_dispatch_info(&call);
		let tip = 0;

		Self::compute_fee_details(ext, len, &dispatch_info, tip)
	}

	/// Compute the final fee value for a particular transaction.
	pub fn compute_fee(
		ext: &Externalities,
		len: u32,
		info: &DispatchInfoOf<T::RuntimeCall>,
		tip: Balance,
	) -> Balance {
		Self::compute_fee_details(ext, len, info, tip).final_fee()
	}

	/// Compute the fee details for a particular transaction.
	pub fn compute_fee_details(
		ext: &Externalities,
		len: u32,
		info: &DispatchInfoOf<T::RuntimeCall>,
		tip: Balance,
	) -> FeeDetails {
		Self::compute_fee_raw(ext, len, info.weight, tip, info.pays_fee, info.class)
	}

	/// Compute the actual post dispatch fee for a particular transaction.
	///
	/// Identical to `compute_fee` with the only difference that the post dispatch corrected
	/// weight is used for the weight fee calculation.
	pub fn compute_actual_fee(
		ext: &Externalities,
		len: u32,
		info: &DispatchInfoOf<T::RuntimeCall>,
		post_info: &PostDispatchInfoOf<T::RuntimeCall>,
		tip: Balance,
	) -> Balance {
		Self::compute_actual_fee_details(ext, len, info, post_info, tip).final_fee()
	}

	/// Compute the actual post dispatch fee details for a particular transaction.
	pub fn compute_actual_fee_details(
		ext: &Externalities,
		len: u32,
		info: &DispatchInfoOf<T::RuntimeCall>,
		post_info: &PostDispatchInfoOf<T::RuntimeCall>,
		tip: Balance,
	) -> FeeDetails {
		Self::compute_fee_raw(
			ext,
			len,
			post_info.calc_actual_weight(info),
			tip,
			post_info.pays_fee(info),
			info.class,
		)
	}

	fn compute_fee_raw(
		ext: &Externalities,
		len: u32,
		weight: Weight,
		tip: Balance,
		pays_fee: Pays,
		class: DispatchClass,
	) -> FeeDetails {
		if pays_fee == Pays::Yes {
			// the adjustable part of the fee.
			let unadjusted_weight_fee = Self::weight_to_fee(weight);
			let multiplier = Self::next_fee_multiplier(ext);
			// final adjusted weight fee.
			let adjusted_weight_fee = multiplier.saturating_mul_int(unadjusted_weight_fee);

			// length fee. this is adjusted via `LengthToFee`.
			let len_fee = Self::length_to_fee(len);

			let base_fee = Self::weight_to_fee(T::BlockWeights::get().get(class).base_extrinsic);
			FeeDetails {
				inclusion_fee: Some(InclusionFee { base_fee, len_fee, adjusted_weight_fee }),
				tip,
			}
		} else {
			FeeDetails { inclusion_fee: None, tip }
		}
	}

	/// Compute the length portion of a fee by invoking the configured `LengthToFee` impl.
	pub fn length_to_fee(length: u32) -> Balance {
		T::LengthToFee::weight_to_fee(&Weight::from_parts(length as u64, 0))
	}

	/// Compute the unadjusted portion of the weight fee by invoking the configured `WeightToFee`
	/// impl. Note that the input `weight` is capped by the maximum block weight before computation.
	pub fn weight_to_fee(weight: Weight) -> Balance {
		// cap the weight to the maximum defined in runtime, otherwise it will be the
		// `Bounded` maximum of its data type, which is not desired.
		let capped_weight = weight.min(T::BlockWeights::get().max_block);
		T::WeightToFee::weight_to_fee(&capped_weight)
	}

	/// Compute the fee for the specified weight, adjusted by the given fee multiplier.
	///
	/// This is the share that the weight contributes to the overall fee of a transaction. It is
	/// mainly for informational purposes and not used in the actual fee calculation.
	pub fn adjusted_weight_fee(ext: &Externalities, weight: Weight) -> Balance {
		Self::next_fee_multiplier(ext).saturating_mul_int(Self::weight_to_fee(weight))
	}

	fn deposit_event(ext: &mut Externalities, event: Event<T>) {
		let event = <T as Config>::RuntimeEvent::from(event);
		frame_system::Pallet::<T>::deposit_event(ext, event);
	}

	/// Everything the module exposes to the outside.
	pub fn metadata() -> ModuleMetadata {
		ModuleMetadata {
			name: <Self as PalletInfoAccess>::name(),
			index: <Self as PalletInfoAccess>::index() as u8,
			calls: Vec::new(),
			events: Event::<T>::metadata(),
			errors: Vec::new(),
			storage: STORAGE_ITEMS.to_vec(),
			constants: vec![ConstantMetadata {
				name: "OperationalFeeMultiplier",
				value: T::OperationalFeeMultiplier::get().encode(),
			}],
		}
	}
}

/// Require the transactor pay for themselves and maybe include a tip to gain additional priority
/// in the queue.
///
/// # Transaction Validity
///
/// This extension sets the `priority` field of `TransactionValidity` depending on the amount
/// of tip being paid per weight unit.
///
/// Operational transactions will receive an additional priority bump, so that they are normally
/// considered before regular transactions.
#[derive(Clone, Eq, PartialEq)]
pub struct ChargeTransactionPayment<T>(Balance, PhantomData<T>);

impl<T: Config> ChargeTransactionPayment<T> {
	/// utility constructor. Used only in client/factory code.
	pub fn from(fee: Balance) -> Self {
		Self(fee, PhantomData)
	}

	/// Returns the tip as being chosen by the transaction sender.
	pub fn tip(&self) -> Balance {
		self.0
	}

	fn withdraw_fee(
		&self,
		ext: &mut Externalities,
		who: &T::AccountId,
		call: &T::RuntimeCall,
		info: &DispatchInfoOf<T::RuntimeCall>,
		len: usize,
	) -> Result<
		(Balance, <<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::LiquidityInfo),
		TransactionValidityError,
	> {
		let tip = self.0;
		let fee = Pallet::<T>::compute_fee(ext, len as u32, info, tip);

		<<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::withdraw_fee(
			ext, who, call, info, fee, tip,
		)
		.map(|i| (fee, i))
	}

	/// Get an appropriate priority for a transaction with the given `DispatchInfo`, encoded length
	/// and user-included tip.
	///
	/// The priority is based on the amount of `tip` the user is willing to pay per unit of either
	/// `weight` or `length`, depending which one is more limiting. For `Operational` extrinsics
	/// we add a "virtual tip" to the calculations.
	///
	/// The formula should simply be `tip / bounded_{weight|length}`, but since we are using
	/// integer division, we have no guarantees it's going to give results in any reasonable
	/// range (might simply end up being zero). Hence we use a scaling factor:
	/// `tip * (max_block_{weight|length} / bounded_{weight|length})`, since given current
	/// state of-the-art blockchains, number of per-block transactions is expected to be in a
	/// range reasonable enough to not saturate the `Balance` type while multiplying by the tip.
	pub fn get_priority(
		info: &DispatchInfoOf<T::RuntimeCall>,
		len: usize,
		tip: Balance,
		final_fee: Balance,
	) -> TransactionPriority {
		// Calculate how many such extrinsics we could fit into an empty block and take the
		// limiting factor.
		let max_block_weight = T::BlockWeights::get().max_block;
		let max_block_length = *T::BlockLength::get().max.get(info.class) as u64;

		// bounded_weight is used as a divisor later so we keep it non-zero.
		let bounded_weight = info.weight.max(Weight::from_parts(1, 1)).min(max_block_weight);
		let bounded_length = (len as u64).min(max_block_length).max(1);

		// returns the scarce resource, i.e. the one that is limiting the number of transactions.
		let max_tx_per_block_weight =
			match max_block_weight.checked_div_per_component(&bounded_weight) {
				Some(max_tx) => max_tx,
				None => {
					defensive!("bounded_weight is non-zero; qed");
					1
				},
			};
		let max_tx_per_block_length = max_block_length / bounded_length;
		// Given our current knowledge this value is going to be in a reasonable range - i.e.
		// less than 10^9 (2^30), so multiplying by the `tip` value is unlikely to overflow the
		// balance type. We still use saturating ops obviously, but the point is to end up with some
		// `priority` distribution instead of having all transactions saturate the priority.
		let max_tx_per_block = max_tx_per_block_length.min(max_tx_per_block_weight) as Balance;
		let max_reward = |val: Balance| val.saturating_mul(max_tx_per_block);

		// To distribute no-tip transactions a little bit, we increase the tip value by one.
		// This means that given two transactions without a tip, smaller one will be preferred.
		let tip = tip.saturating_add(1);
		let scaled_tip = max_reward(tip);

		let priority = match info.class {
			DispatchClass::Normal => {
				// For normal class we simply take the `tip_per_weight`.
				scaled_tip
			},
			DispatchClass::Mandatory => {
				// Mandatory extrinsics should be prohibited (e.g. by the `CheckWeight`
				// extensions), but just to be safe let's return the same priority as `Normal` here.
				scaled_tip
			},
			DispatchClass::Operational => {
				// A "virtual tip" value added to an `Operational` extrinsic.
				// This value should be kept high enough to allow `Operational` extrinsics
				// to get in even during congestion period, but at the same time low
				// enough to prevent a possible spam attack by sending invalid operational
				// extrinsics which push away regular transactions from the pool.
				let fee_multiplier = T::OperationalFeeMultiplier::get() as Balance;
				let virtual_tip = final_fee.saturating_mul(fee_multiplier);
				let scaled_virtual_tip = max_reward(virtual_tip);

				scaled_tip.saturating_add(scaled_virtual_tip)
			},
		};
		priority.min(TransactionPriority::MAX as Balance) as TransactionPriority
	}
}

impl<T: Config> Encode for ChargeTransactionPayment<T> {
	fn size_hint(&self) -> usize {
		Compact(self.0).size_hint()
	}

	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		Compact(self.0).encode_to(dest)
	}
}

impl<T: Config> Decode for ChargeTransactionPayment<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let tip = Compact::<Balance>::decode(input)
			.map_err(|e| e.expecting("ChargeTransactionPayment"))?;
		Ok(Self::from(tip.0))
	}
}

impl<T: Config> core::fmt::Debug for ChargeTransactionPayment<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "ChargeTransactionPayment<{:?}>", self.0)
	}
}

impl<T: Config> SignedExtension for ChargeTransactionPayment<T> {
	const IDENTIFIER: &'static str = "ChargeTransactionPayment";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = ();
	type Pre = (
		// tip
		Balance,
		// who paid the fee
		T::AccountId,
		// imbalance resulting from withdrawing the fee
		<<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::LiquidityInfo,
	);

	fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	fn validate(
		&self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		let tip = self.0;
		let final_fee = Pallet::<T>::compute_fee(ext, len as u32, info, tip);
		<<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::can_withdraw_fee(
			ext, who, call, info, final_fee, tip,
		)?;
		Ok(ValidTransaction {
			priority: Self::get_priority(info, len, tip, final_fee),
			..Default::default()
		})
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<Self::Pre, TransactionValidityError> {
		let (_fee, imbalance) = self.withdraw_fee(ext, who, call, info, len)?;
		Ok((self.0, who.clone(), imbalance))
	}

	fn post_dispatch(
		ext: &mut Externalities,
		maybe_pre: Option<Self::Pre>,
		info: &DispatchInfoOf<Self::Call>,
		post_info: &PostDispatchInfoOf<Self::Call>,
		len: usize,
		_result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		if let Some((tip, who, imbalance)) = maybe_pre {
			let actual_fee = Pallet::<T>::compute_actual_fee(ext, len as u32, info, post_info, tip);
			<<T as Config>::OnChargeTransaction as OnChargeTransaction<T>>::correct_and_deposit_fee(
				ext, &who, info, post_info, actual_fee, tip, imbalance,
			)?;
			log::trace!(
				target: LOG_TARGET,
				"charged {} (tip {}) from {:?}",
				actual_fee,
				tip,
				who,
			);
			Pallet::<T>::deposit_event(ext, Event::TransactionFeePaid { who, actual_fee, tip });
		}
		Ok(())
	}
}
