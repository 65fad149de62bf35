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

//! Dispatch classes and the per-class weight ledger.

use crate::Weight;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// A generalized group of dispatch types.
///
/// NOTE whenever upgrading the enum make sure to also update
/// [`DispatchClass::all`] and [`DispatchClass::non_mandatory`] helper functions.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum DispatchClass {
	/// A normal dispatch.
	#[default]
	Normal,
	/// An operational dispatch.
	Operational,
	/// A mandatory dispatch. These kinds of dispatch are always included regardless of their
	/// weight, therefore it is critical that they are separately validated to ensure that a
	/// malicious validator cannot craft a valid but impossibly heavy block. Usually this just
	/// means ensuring that the extrinsic can only be included once and that it is always very
	/// light.
	///
	/// Do *NOT* use it for extrinsics that can be heavy.
	///
	/// The only real use case for this is inherent extrinsics that are required to execute in a
	/// block for the block to be valid, and it solves the issue in the case that the block
	/// initialization is sufficiently heavy to mean that those inherents do not fit into the
	/// block. Essentially, we assume that in these exceptional circumstances, it is better to
	/// allow an overweight block to be created than to not allow any block at all to be created.
	Mandatory,
}

impl DispatchClass {
	/// Returns an array containing all dispatch classes.
	pub fn all() -> &'static [DispatchClass] {
		&[DispatchClass::Normal, DispatchClass::Operational, DispatchClass::Mandatory]
	}

	/// Returns an array of all dispatch classes except `Mandatory`.
	pub fn non_mandatory() -> &'static [DispatchClass] {
		&[DispatchClass::Normal, DispatchClass::Operational]
	}
}

codec::impl_codec_enum!(DispatchClass { Normal = 0, Operational = 1, Mandatory = 2 });

/// A trait that represents one or many values of given type.
///
/// Useful to accept as parameter type to let the caller pass either a single value directly
/// or an iterator.
pub trait OneOrMany<T> {
	/// The iterator type.
	type Iter: Iterator<Item = T>;
	/// Convert this item into an iterator.
	fn into_iter(self) -> Self::Iter;
}

impl OneOrMany<DispatchClass> for DispatchClass {
	type Iter = core::iter::Once<DispatchClass>;
	fn into_iter(self) -> Self::Iter {
		core::iter::once(self)
	}
}

impl<'a> OneOrMany<DispatchClass> for &'a [DispatchClass] {
	type Iter = core::iter::Cloned<core::slice::Iter<'a, DispatchClass>>;
	fn into_iter(self) -> Self::Iter {
		self.iter().cloned()
	}
}

/// A struct holding value for each `DispatchClass`.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct PerDispatchClass<T> {
	/// Value for `Normal` extrinsics.
	normal: T,
	/// Value for `Operational` extrinsics.
	operational: T,
	/// Value for `Mandatory` extrinsics.
	mandatory: T,
}

codec::impl_codec_struct!(PerDispatchClass<T> { normal, operational, mandatory });

impl<T> PerDispatchClass<T> {
	/// Create new `PerDispatchClass` with the same value for every class.
	pub fn new(val: impl Fn(DispatchClass) -> T) -> Self {
		Self {
			normal: val(DispatchClass::Normal),
			operational: val(DispatchClass::Operational),
			mandatory: val(DispatchClass::Mandatory),
		}
	}

	/// Get a mutable reference to current value of given class.
	pub fn get_mut(&mut self, class: DispatchClass) -> &mut T {
		match class {
			DispatchClass::Operational => &mut self.operational,
			DispatchClass::Normal => &mut self.normal,
			DispatchClass::Mandatory => &mut self.mandatory,
		}
	}

	/// Get current value for given class.
	pub fn get(&self, class: DispatchClass) -> &T {
		match class {
			DispatchClass::Normal => &self.normal,
			DispatchClass::Operational => &self.operational,
			DispatchClass::Mandatory => &self.mandatory,
		}
	}
}

impl<T: Clone> PerDispatchClass<T> {
	/// Set the value of given class.
	pub fn set(&mut self, new: T, class: impl OneOrMany<DispatchClass>) {
		for class in class.into_iter() {
			*self.get_mut(class) = new.clone();
		}
	}
}

impl PerDispatchClass<Weight> {
	/// Returns the total weight consumed by all extrinsics in the block.
	///
	/// Saturates on overflow.
	pub fn total(&self) -> Weight {
		let mut sum = Weight::zero();
		for class in DispatchClass::all() {
			sum.saturating_accrue(*self.get(*class));
		}
		sum
	}

	/// Add some weight to the given class. Saturates at the numeric bounds.
	pub fn add(mut self, weight: Weight, class: DispatchClass) -> Self {
		self.accrue(weight, class);
		self
	}

	/// Increase the weight of the given class. Saturates at the numeric bounds.
	pub fn accrue(&mut self, weight: Weight, class: DispatchClass) {
		self.get_mut(class).saturating_accrue(weight);
	}

	/// Try to increase the weight of the given class.
	///
	/// Fails if either dimension would overflow, in which case the ledger is left unchanged.
	pub fn checked_accrue(&mut self, weight: Weight, class: DispatchClass) -> Result<(), ()> {
		self.get_mut(class).checked_accrue(weight).ok_or(())
	}

	/// Reduce the weight of the given class. Saturates at the numeric bounds.
	pub fn reduce(&mut self, weight: Weight, class: DispatchClass) {
		self.get_mut(class).saturating_reduce(weight);
	}
}

/// An object to track the currently used extrinsic weight in a block.
pub type ConsumedWeight = PerDispatchClass<Weight>;

#[cfg(test)]
mod tests {
	use super::*;
	use codec::{Decode, Encode};
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case(DispatchClass::Normal, 0)]
	#[case(DispatchClass::Operational, 1)]
	#[case(DispatchClass::Mandatory, 2)]
	fn dispatch_class_discriminants_are_stable(#[case] class: DispatchClass, #[case] index: u8) {
		assert_eq!(class.encode(), vec![index]);
		assert_eq!(DispatchClass::decode(&mut &[index][..]).unwrap(), class);
	}

	#[test]
	fn unknown_dispatch_class_is_rejected() {
		let err = DispatchClass::decode(&mut &[3u8][..]).unwrap_err();
		assert_eq!(err.expected(), Some("DispatchClass"));
	}

	#[test]
	fn dispatch_class_serializes_camel_case() {
		assert_eq!(serde_json::to_string(&DispatchClass::Operational).unwrap(), "\"operational\"");
		assert_eq!(
			serde_json::from_str::<DispatchClass>("\"mandatory\"").unwrap(),
			DispatchClass::Mandatory
		);
		let weight = Weight::from_parts(7, 9);
		let json = serde_json::to_string(&weight).unwrap();
		assert_eq!(json, r#"{"ref_time":7,"proof_size":9}"#);
		assert_eq!(serde_json::from_str::<Weight>(&json).unwrap(), weight);
	}

	#[test]
	fn checked_accrue_works() {
		let mut weights = ConsumedWeight::default();

		weights.checked_accrue(Weight::from_parts(1, 2), DispatchClass::Normal).unwrap();
		weights.checked_accrue(Weight::from_parts(3, 4), DispatchClass::Operational).unwrap();
		weights.checked_accrue(Weight::from_parts(5, 6), DispatchClass::Mandatory).unwrap();
		assert_eq!(weights.total(), Weight::from_parts(9, 12));
	}

	#[test]
	fn checked_accrue_does_not_commit_ref_time_when_proof_size_overflows() {
		let mut weights = ConsumedWeight::default();
		weights.accrue(Weight::from_parts(10, u64::MAX), DispatchClass::Normal);

		assert!(weights.checked_accrue(Weight::from_parts(5, 1), DispatchClass::Normal).is_err());
		assert_eq!(*weights.get(DispatchClass::Normal), Weight::from_parts(10, u64::MAX));
	}

	#[test]
	fn checked_accrue_does_not_commit_proof_size_when_ref_time_overflows() {
		let mut weights = ConsumedWeight::default();
		weights.accrue(Weight::from_parts(u64::MAX, 7), DispatchClass::Operational);

		assert!(weights
			.checked_accrue(Weight::from_parts(1, 3), DispatchClass::Operational)
			.is_err());
		assert_eq!(*weights.get(DispatchClass::Operational), Weight::from_parts(u64::MAX, 7));
		assert_eq!(*weights.get(DispatchClass::Normal), Weight::zero());
	}

	#[test]
	fn accrue_and_reduce_saturate() {
		let mut weights = ConsumedWeight::default();
		weights.accrue(Weight::MAX, DispatchClass::Mandatory);
		weights.accrue(Weight::from_parts(1, 1), DispatchClass::Mandatory);
		assert_eq!(*weights.get(DispatchClass::Mandatory), Weight::MAX);

		weights.reduce(Weight::MAX, DispatchClass::Normal);
		assert_eq!(*weights.get(DispatchClass::Normal), Weight::zero());

		let weights = weights.add(Weight::from_parts(1, 1), DispatchClass::Normal);
		assert_eq!(weights.total(), Weight::MAX);
	}

	#[test]
	fn set_accepts_one_or_many_classes() {
		let mut limits = PerDispatchClass::new(|_| 0u32);
		limits.set(7, DispatchClass::Operational);
		assert_eq!(*limits.get(DispatchClass::Operational), 7);
		limits.set(3, DispatchClass::non_mandatory());
		assert_eq!(
			(limits.get(DispatchClass::Normal), limits.get(DispatchClass::Operational)),
			(&3, &3)
		);
		assert_eq!(*limits.get(DispatchClass::Mandatory), 0);
	}

	proptest! {
		#[test]
		fn failed_checked_accrue_leaves_ledger_untouched(
			start_ref in any::<u64>(),
			start_proof in any::<u64>(),
			add_ref in any::<u64>(),
			add_proof in any::<u64>(),
		) {
			let mut weights = ConsumedWeight::default();
			weights.accrue(Weight::from_parts(start_ref, start_proof), DispatchClass::Normal);
			let before = weights.clone();

			let overflows = start_ref.checked_add(add_ref).is_none() ||
				start_proof.checked_add(add_proof).is_none();
			let result = weights.checked_accrue(Weight::from_parts(add_ref, add_proof), DispatchClass::Normal);

			prop_assert_eq!(result.is_err(), overflows);
			if overflows {
				prop_assert_eq!(weights, before);
			} else {
				prop_assert_eq!(
					*weights.get(DispatchClass::Normal),
					Weight::from_parts(start_ref + add_ref, start_proof + add_proof)
				);
			}
		}
	}
}
