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


//! Positive and negative imbalances of the balances module.
//!
//! An imbalance records value that was created (positive) or destroyed (negative) in some account
//! without the opposite happening anywhere else. It has to be settled against [`TotalIssuance`]
//! exactly once: by [`SettleIssuance::settle_issuance`], by [`Imbalance::finalize`], or by being
//! offset against its opposite. Dropping a non-zero imbalance is a logic error and is reported
//! through `defensive!`.

use crate::TotalIssuance;
use core::mem;
use tessera_primitives::{Balance, Externalities};
use tessera_support::{
	defensive,
	traits::{Imbalance, SameOrOther, SettleIssuance, TryDrop},
};

/// Opaque, move-only struct with private fields that serves as a token denoting that
/// funds have been created without any equal and opposite accounting.
#[must_use]
#[derive(PartialEq, Eq, Debug, Default)]
pub struct PositiveImbalance(Balance);

impl PositiveImbalance {
	/// Create a new positive imbalance from a balance.
	pub fn new(amount: Balance) -> Self {
		PositiveImbalance(amount)
	}

	fn take(&mut self) -> Balance {
		mem::take(&mut self.0)
	}
}

/// Opaque, move-only struct with private fields that serves as a token denoting that
/// funds have been destroyed without any equal and opposite accounting.
#[must_use]
#[derive(PartialEq, Eq, Debug, Default)]
pub struct NegativeImbalance(Balance);

impl NegativeImbalance {
	/// Create a new negative imbalance from a balance.
	pub fn new(amount: Balance) -> Self {
		NegativeImbalance(amount)
	}

	fn take(&mut self) -> Balance {
		mem::take(&mut self.0)
	}
}

impl TryDrop for PositiveImbalance {
	fn try_drop(self) -> Result<(), Self> {
		self.drop_zero()
	}
}

impl Imbalance<Balance> for PositiveImbalance {
	type Opposite = NegativeImbalance;

	fn zero() -> Self {
		Self(0)
	}

	fn drop_zero(self) -> Result<(), Self> {
		if self.0 == 0 {
			Ok(())
		} else {
			Err(self)
		}
	}

	fn split(mut self, amount: Balance) -> (Self, Self) {
		let total = self.take();
		let first = total.min(amount);
		let second = total - first;
		(Self(first), Self(second))
	}

	fn merge(mut self, mut other: Self) -> Self {
		Self(self.take().saturating_add(other.take()))
	}

	fn subsume(&mut self, mut other: Self) {
		self.0 = self.0.saturating_add(other.take());
	}

	fn offset(mut self, mut other: Self::Opposite) -> SameOrOther<Self, Self::Opposite> {
		let (a, b) = (self.take(), other.take());
		if a > b {
			SameOrOther::Same(Self(a - b))
		} else if b > a {
			SameOrOther::Other(NegativeImbalance::new(b - a))
		} else {
			SameOrOther::None
		}
	}

	fn peek(&self) -> Balance {
		self.0
	}

	fn finalize(mut self, issuance: &mut Balance) {
		*issuance = issuance.saturating_add(self.take());
	}
}

impl SettleIssuance for PositiveImbalance {
	fn settle_issuance(self, ext: &mut Externalities) {
		let mut issuance = TotalIssuance::get(ext);
		self.finalize(&mut issuance);
		TotalIssuance::put(ext, issuance);
	}
}

impl TryDrop for NegativeImbalance {
	fn try_drop(self) -> Result<(), Self> {
		self.drop_zero()
	}
}

impl Imbalance<Balance> for NegativeImbalance {
	type Opposite = PositiveImbalance;

	fn zero() -> Self {
		Self(0)
	}

	fn drop_zero(self) -> Result<(), Self> {
		if self.0 == 0 {
			Ok(())
		} else {
			Err(self)
		}
	}

	fn split(mut self, amount: Balance) -> (Self, Self) {
		let total = self.take();
		let first = total.min(amount);
		let second = total - first;
		(Self(first), Self(second))
	}

	fn merge(mut self, mut other: Self) -> Self {
		Self(self.take().saturating_add(other.take()))
	}

	fn subsume(&mut self, mut other: Self) {
		self.0 = self.0.saturating_add(other.take());
	}

	fn offset(mut self, mut other: Self::Opposite) -> SameOrOther<Self, Self::Opposite> {
		let (a, b) = (self.take(), other.take());
		if a > b {
			SameOrOther::Same(Self(a - b))
		} else if b > a {
			SameOrOther::Other(PositiveImbalance::new(b - a))
		} else {
			SameOrOther::None
		}
	}

	fn peek(&self) -> Balance {
		self.0
	}

	fn finalize(mut self, issuance: &mut Balance) {
		*issuance = issuance.saturating_sub(self.take());
	}
}

impl SettleIssuance for NegativeImbalance {
	fn settle_issuance(self, ext: &mut Externalities) {
		let mut issuance = TotalIssuance::get(ext);
		self.finalize(&mut issuance);
		TotalIssuance::put(ext, issuance);
	}
}

impl Drop for PositiveImbalance {
	fn drop(&mut self) {
		if self.0 != 0 {
			defensive!("positive imbalance dropped without being settled", self.0);
		}
	}
}

impl Drop for NegativeImbalance {
	fn drop(&mut self) {
		if self.0 != 0 {
			defensive!("negative imbalance dropped without being settled", self.0);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn finalize_saturates_at_issuance_bounds() {
		let mut issuance = 10;
		NegativeImbalance::new(25).finalize(&mut issuance);
		assert_eq!(issuance, 0);

		let mut issuance = Balance::MAX - 1;
		PositiveImbalance::new(5).finalize(&mut issuance);
		assert_eq!(issuance, Balance::MAX);
	}

	#[test]
	fn offset_nets_out_opposites() {
		let mut issuance = 100;
		match PositiveImbalance::new(30).offset(NegativeImbalance::new(50)) {
			SameOrOther::Other(negative) => {
				assert_eq!(negative.peek(), 20);
				negative.finalize(&mut issuance);
			},
			_ => panic!("negative side is larger"),
		}
		assert_eq!(issuance, 80);
		assert!(NegativeImbalance::new(7).offset(PositiveImbalance::new(7)).try_none().is_ok());
	}

	#[test]
	fn split_and_merge_preserve_value() {
		let (a, b) = PositiveImbalance::new(10).split(3);
		assert_eq!((a.peek(), b.peek()), (3, 7));
		let mut merged = a.merge(b);
		assert_eq!(merged.peek(), 10);
		merged.subsume(PositiveImbalance::new(5));
		let (all, none) = merged.split(100);
		assert_eq!((all.peek(), none.peek()), (15, 0));
		assert!(none.drop_zero().is_ok());
		let mut issuance = 0;
		all.finalize(&mut issuance);
		assert_eq!(issuance, 15);
	}

	#[test]
	#[should_panic(expected = "negative imbalance dropped without being settled")]
	fn dropping_unsettled_imbalance_is_defensive() {
		let _ = NegativeImbalance::new(1);
	}
}
