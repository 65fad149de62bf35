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


//! Re-exports the weight types and the reference weights of the runtime.
//!
//! A dispatchable declares its cost as a [`Weight`]; the transaction payment module prices it
//! through a [`WeightToFee`] implementation.

mod block_weights;
mod extrinsic_weights;
mod rocksdb_weights;

use core::marker::PhantomData;
use tessera_primitives::traits::Get;

pub use tessera_weights::*;

/// Benchmarked base weights of the block and extrinsic pipeline, and the database costs.
pub mod constants {
	pub use super::{
		block_weights::BlockExecutionWeight, extrinsic_weights::ExtrinsicBaseWeight,
		rocksdb_weights::RocksDbWeight,
	};
	pub use tessera_weights::constants::*;
}

/// A trait that describes the weight to fee calculation.
pub trait WeightToFee {
	/// The type that is returned as result from calculation.
	type Balance;

	/// Calculates the fee from the passed `weight`.
	fn weight_to_fee(weight: &Weight) -> Self::Balance;
}

/// Implementor of `WeightToFee` that maps one unit of ref time to one unit of balance.
///
/// The proof size dimension is not priced.
pub struct IdentityFee<T>(PhantomData<T>);

impl<T: From<u64>> WeightToFee for IdentityFee<T> {
	type Balance = T;

	fn weight_to_fee(weight: &Weight) -> Self::Balance {
		Self::Balance::from(weight.ref_time())
	}
}

/// Implementor of [`WeightToFee`] such that it maps any unit of weight to a fixed fee.
pub struct FixedFee<const F: u32, T>(PhantomData<T>);

impl<const F: u32, T: From<u32>> WeightToFee for FixedFee<F, T> {
	type Balance = T;

	fn weight_to_fee(_: &Weight) -> Self::Balance {
		F.into()
	}
}

/// Implementor of [`WeightToFee`] that uses a constant multiplier.
///
/// # Example
///
/// ```
/// # use tessera_support::traits::ConstU128;
/// # use tessera_support::weights::{ConstantMultiplier, Weight, WeightToFee};
/// // Results in a multiplier of 10 for each unit of weight (or length)
/// type LengthToFee = ConstantMultiplier::<u128, ConstU128<10u128>>;
/// assert_eq!(LengthToFee::weight_to_fee(&Weight::from_parts(3, 0)), 30);
/// ```
pub struct ConstantMultiplier<T, M>(PhantomData<(T, M)>);

impl<M: Get<u128>> WeightToFee for ConstantMultiplier<u128, M> {
	type Balance = u128;

	fn weight_to_fee(weight: &Weight) -> Self::Balance {
		(weight.ref_time() as u128).saturating_mul(M::get())
	}
}
