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


use crate::{limits::BlockWeights, AllExtrinsicsLen, BlockWeight, Config, Pallet, LOG_TARGET};
use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, Get, PostDispatchInfoOf, SignedExtension},
	transaction_validity::{
		InvalidTransaction, TransactionValidity, TransactionValidityError, ValidTransaction,
	},
	DispatchResult, Externalities,
};
use tessera_support::{
	dispatch::{DispatchClass, DispatchInfo, PostDispatchInfo},
	weights::{ConsumedWeight, Weight},
};

/// Block resource (weight) limit check.
///
/// # Transaction Validity
///
/// This extension does not influence any fields of `TransactionValidity` in case the
/// transaction is valid.
#[derive(Clone, Eq, PartialEq)]
pub struct CheckWeight<T>(PhantomData<T>);

super::impl_empty_extension_codec!(CheckWeight);

impl<T: Config> core::fmt::Debug for CheckWeight<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "CheckWeight")
	}
}

impl<T: Config> Default for CheckWeight<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Config> CheckWeight<T> {
	/// Creates new `SignedExtension` to check weight of the extrinsic.
	pub fn new() -> Self {
		Self(PhantomData)
	}

	/// Checks if the current extrinsic does not exceed the maximum weight a single extrinsic
	/// with given `DispatchClass` can have.
	pub fn check_extrinsic_weight(info: &DispatchInfo) -> Result<(), TransactionValidityError> {
		let max = T::BlockWeights::get().get(info.class).max_extrinsic;
		match max {
			Some(max) if info.weight.any_gt(max) => {
				log::debug!(
					target: LOG_TARGET,
					"Extrinsic {} is greater than the max extrinsic {}",
					info.weight,
					max,
				);
				Err(InvalidTransaction::ExhaustsResources.into())
			},
			_ => Ok(()),
		}
	}

	/// Checks if the current extrinsic can fit into the block with respect to block weight limits.
	///
	/// Upon successes, it returns the new block weight as a `Result`.
	fn check_block_weight(
		ext: &Externalities,
		info: &DispatchInfo,
	) -> Result<ConsumedWeight, TransactionValidityError> {
		let maximum_weight = T::BlockWeights::get();
		let all_weight = Pallet::<T>::block_weight(ext);
		calculate_consumed_weight(&maximum_weight, all_weight, info)
	}

	/// Checks if the current extrinsic can fit into the block with respect to block length limits.
	///
	/// Upon successes, it returns the new block length as a `Result`.
	fn check_block_length(
		ext: &Externalities,
		info: &DispatchInfo,
		len: usize,
	) -> Result<u32, TransactionValidityError> {
		let length_limit = T::BlockLength::get();
		let current_len = AllExtrinsicsLen::get(ext).unwrap_or(0);
		let added_len = u32::try_from(len).unwrap_or(u32::MAX);
		let next_len = current_len.saturating_add(added_len);
		if next_len > *length_limit.max.get(info.class) {
			log::debug!(
				target: LOG_TARGET,
				"Exceeded block length limit: {} > {}",
				next_len,
				length_limit.max.get(info.class),
			);
			Err(InvalidTransaction::ExhaustsResources.into())
		} else {
			Ok(next_len)
		}
	}

	/// Do the pre-dispatch checks. This can be applied to both signed and unsigned.
	///
	/// It checks and notes the new weight and length.
	pub fn do_pre_dispatch(
		ext: &mut Externalities,
		info: &DispatchInfo,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		let next_len = Self::check_block_length(ext, info, len)?;
		let next_weight = Self::check_block_weight(ext, info)?;
		Self::check_extrinsic_weight(info)?;

		AllExtrinsicsLen::put(ext, next_len);
		BlockWeight::put(ext, next_weight);
		Ok(())
	}

	/// Do the validate checks. This can be applied to both signed and unsigned.
	///
	/// It only checks that the block weight and length limit will not exceed.
	pub fn do_validate(
		ext: &Externalities,
		info: &DispatchInfo,
		len: usize,
	) -> TransactionValidity {
		// ignore the next length. If they return `Ok`, then it is below the limit.
		let _ = Self::check_block_length(ext, info, len)?;
		// during validation we skip block limit check. Since the `validate_transaction`
		// call runs on an empty block anyway, by the time the tx is included,
		// it might have weight less than the block limit.
		Self::check_extrinsic_weight(info)?;

		Ok(ValidTransaction::default())
	}

	/// Give back the weight an extrinsic reserved but did not use.
	///
	/// A mandatory extrinsic that failed makes the whole block invalid.
	pub fn do_post_dispatch(
		ext: &mut Externalities,
		info: &DispatchInfo,
		post_info: &PostDispatchInfo,
		result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		if info.class == DispatchClass::Mandatory && result.is_err() {
			return Err(InvalidTransaction::BadMandatory.into())
		}

		let unspent = post_info.calc_unspent(info);
		if unspent.any_gt(Weight::zero()) {
			BlockWeight::mutate(ext, |current_weight| {
				current_weight.reduce(unspent, info.class);
			})
		}
		Ok(())
	}
}

/// Checks if the current extrinsic can fit into the block with respect to block weight limits.
///
/// Upon successes, it returns the new block weight as a `Result`.
pub fn calculate_consumed_weight(
	maximum_weight: &BlockWeights,
	mut all_weight: ConsumedWeight,
	info: &DispatchInfo,
) -> Result<ConsumedWeight, TransactionValidityError> {
	let extrinsic_weight =
		info.weight.saturating_add(maximum_weight.get(info.class).base_extrinsic);
	let limit_per_class = maximum_weight.get(info.class);

	// add the weight. If class is unlimited, use saturating add instead of checked one.
	if limit_per_class.max_total.is_none() && limit_per_class.reserved.is_none() {
		all_weight.accrue(extrinsic_weight, info.class)
	} else {
		all_weight.checked_accrue(extrinsic_weight, info.class).map_err(|_| {
			log::debug!(
				target: LOG_TARGET,
				"All weight checked add overflow.",
			);
			InvalidTransaction::ExhaustsResources
		})?;
	}

	let per_class = *all_weight.get(info.class);

	// Check if we don't exceed per-class allowance
	match limit_per_class.max_total {
		Some(max) if per_class.any_gt(max) => {
			log::debug!(
				target: LOG_TARGET,
				"Exceeded the per-class allowance.",
			);

			return Err(InvalidTransaction::ExhaustsResources.into())
		},
		// There is no `max_total` limit (`None`),
		// or we are below the limit.
		_ => {},
	}

	// In cases total block weight is exceeded, we need to fall back
	// to `reserved` pool if there is any.
	if all_weight.total().any_gt(maximum_weight.max_block) {
		match limit_per_class.reserved {
			// We are over the limit in reserved pool.
			Some(reserved) if per_class.any_gt(reserved) => {
				log::debug!(
					target: LOG_TARGET,
					"Total block weight is exceeded.",
				);

				return Err(InvalidTransaction::ExhaustsResources.into())
			},
			// There is either no limit in reserved pool (`None`),
			// or we are below the limit.
			_ => {},
		}
	}

	Ok(all_weight)
}

impl<T: Config> SignedExtension for CheckWeight<T> {
	const IDENTIFIER: &'static str = "CheckWeight";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = ();
	type Pre = ();

	fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		_who: &Self::AccountId,
		_call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		Self::do_pre_dispatch(ext, info, len)
	}

	fn validate(
		&self,
		ext: &mut Externalities,
		_who: &Self::AccountId,
		_call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		Self::do_validate(ext, info, len)
	}

	fn pre_dispatch_unsigned(
		ext: &mut Externalities,
		_call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		Self::do_pre_dispatch(ext, info, len)
	}

	fn validate_unsigned(
		ext: &mut Externalities,
		_call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		Self::do_validate(ext, info, len)
	}

	fn post_dispatch(
		ext: &mut Externalities,
		_pre: Option<Self::Pre>,
		info: &DispatchInfoOf<Self::Call>,
		post_info: &PostDispatchInfoOf<Self::Call>,
		_len: usize,
		result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		Self::do_post_dispatch(ext, info, post_info, result)
	}
}
