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


//! Traits for hooking tasks to events in a blockchain's lifecycle.

use crate::impl_for_tuples_attr;
use tessera_primitives::Externalities;
use tessera_weights::Weight;

/// The block initialization trait.
///
/// Implementing this lets you express what should happen for your pallet when the block is
/// beginning (right before the first extrinsic is executed).
pub trait OnInitialize<BlockNumber> {
	/// The block is being initialized. Implement to have something happen.
	///
	/// Return the non-negotiable weight consumed in the block.
	///
	/// NOTE: This function is called BEFORE ANY extrinsic in a block is applied,
	/// including inherent extrinsics.
	fn on_initialize(_ext: &mut Externalities, _n: BlockNumber) -> Weight {
		Weight::zero()
	}
}

impl_for_tuples_attr! {
	impl<BlockNumber: Clone> OnInitialize<BlockNumber> for Tuple {
		fn on_initialize(ext: &mut Externalities, n: BlockNumber) -> Weight {
			let mut weight = Weight::zero();
			for_tuples!( #( weight = weight.saturating_add(Tuple::on_initialize(ext, n.clone())); )* );
			weight
		}
	}
}

/// The block finalization trait.
///
/// Implementing this lets you express what should happen for your pallet when the block is ending.
pub trait OnFinalize<BlockNumber> {
	/// The block is being finalized. Implement to have something happen.
	///
	/// NOTE: This function is called AFTER ALL extrinsics in a block are applied,
	/// including inherent extrinsics.
	fn on_finalize(_ext: &mut Externalities, _n: BlockNumber) {}
}

impl_for_tuples_attr! {
	impl<BlockNumber: Clone> OnFinalize<BlockNumber> for Tuple {
		fn on_finalize(ext: &mut Externalities, n: BlockNumber) {
			for_tuples!( #( Tuple::on_finalize(ext, n.clone()); )* );
		}
	}
}

/// Type that provide some integrity tests.
///
/// This implemented for modules by `decl_module`.
pub trait IntegrityTest {
	/// Run integrity test.
	///
	/// The test is not executed in a externalities provided environment.
	fn integrity_test() {}
}

impl_for_tuples_attr! {
	impl IntegrityTest for Tuple {
		fn integrity_test() {
			for_tuples!( #( Tuple::integrity_test(); )* );
		}
	}
}

/// A trait to define the build function of a genesis config for both runtime and pallets.
pub trait BuildGenesisConfig: Default {
	/// The build function puts initial `GenesisConfig` keys/values pairs into the storage.
	fn build(&self, ext: &mut Externalities);
}

impl BuildGenesisConfig for () {
	fn build(&self, _ext: &mut Externalities) {}
}
