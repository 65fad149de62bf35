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


//! Types for transaction-payment RPC.

use codec::impl_codec_struct;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::Balance;
use tessera_support::{dispatch::DispatchClass, weights::Weight};

/// The base fee and adjusted weight and length fees constitute the _inclusion fee_.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct InclusionFee {
	/// This is the minimum amount a user pays for a transaction. It is declared
	/// as a base _weight_ in the runtime and converted to a fee using `WeightToFee`.
	pub base_fee: Balance,
	/// The length fee, the amount paid for the encoded length (in bytes) of the transaction.
	pub len_fee: Balance,
	/// The weight fee scaled by the fee multiplier.
	///
	/// - `fee_multiplier`: A multiplier that can tune the final fee based on the congestion of
	///   the network.
	/// - `weight_fee`: This amount is computed based on the weight of the transaction. Weight
	///   accounts for the execution time of a transaction.
	///
	/// adjusted_weight_fee = fee_multiplier * weight_fee
	pub adjusted_weight_fee: Balance,
}

impl_codec_struct!(InclusionFee { base_fee, len_fee, adjusted_weight_fee });

impl InclusionFee {
	/// Returns the total of inclusion fee.
	///
	/// ```ignore
	/// inclusion_fee = base_fee + len_fee + adjusted_weight_fee
	/// ```
	pub fn inclusion_fee(&self) -> Balance {
		self.base_fee
			.saturating_add(self.len_fee)
			.saturating_add(self.adjusted_weight_fee)
	}
}

/// The `FeeDetails` is composed of:
///   - (Optional) `inclusion_fee`: Only the `Pays::Yes` transaction can have the inclusion fee.
///   - `tip`: If included in the transaction, the tip will be added on top. Only signed
///     transactions can have a tip.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct FeeDetails {
	/// The minimum fee for a transaction to be included in a block.
	pub inclusion_fee: Option<InclusionFee>,
	// Do not serialize and deserialize `tip` as we actually can not pass any tip to the RPC.
	#[cfg_attr(feature = "std", serde(skip))]
	pub tip: Balance,
}

impl_codec_struct!(FeeDetails { inclusion_fee, tip });

impl FeeDetails {
	/// Returns the final fee.
	///
	/// ```ignore
	/// final_fee = inclusion_fee + tip;
	/// ```
	pub fn final_fee(&self) -> Balance {
		self.inclusion_fee
			.as_ref()
			.map(|i| i.inclusion_fee())
			.unwrap_or(0)
			.saturating_add(self.tip)
	}
}

/// Information related to a dispatchable's class, weight, and fee that can be queried from the
/// runtime.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct RuntimeDispatchInfo {
	/// Weight of this dispatch.
	pub weight: Weight,
	/// Class of this dispatch.
	pub class: DispatchClass,
	/// The inclusion fee of this dispatch.
	///
	/// This does not include a tip or anything else that
	/// depends on the signature (i.e. depends on a `SignedExtension`).
	pub partial_fee: Balance,
}

impl_codec_struct!(RuntimeDispatchInfo { weight, class, partial_fee });
