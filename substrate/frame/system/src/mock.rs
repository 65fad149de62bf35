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


use crate::{self as frame_system, *};
use core::any::TypeId;
use tessera_primitives::{
	traits::IdentityLookup, DispatchResultWithInfo, Perbill,
};
use tessera_support::{
	parameter_types,
	traits::{Contains, OnKilledAccount},
	weights::constants::RocksDbWeight,
};

/// Index of the system module in the test runtime.
pub const SYSTEM_INDEX: u8 = 0;

const NORMAL_DISPATCH_RATIO: Perbill = Perbill::from_percent(75);
const MAX_BLOCK_WEIGHT: Weight = Weight::from_parts(1024, u64::MAX);

parameter_types! {
	pub Version: RuntimeVersion = RuntimeVersion {
		spec_name: "test".into(),
		impl_name: "system-test".into(),
		spec_version: 1,
		impl_version: 1,
		transaction_version: 1,
	};
	pub const BlockHashCount: BlockNumber = 10;
	pub const MaxConsumers: u32 = 16;
	pub RuntimeBlockWeights: limits::BlockWeights = limits::BlockWeights::builder()
		.base_block(Weight::from_parts(10, 0))
		.for_class(DispatchClass::all(), |weights| {
			weights.base_extrinsic = Weight::from_parts(5, 0);
		})
		.for_class(DispatchClass::Normal, |weights| {
			weights.max_total = Some(NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT);
		})
		.for_class(DispatchClass::Operational, |weights| {
			weights.base_extrinsic = Weight::from_parts(10, 0);
			weights.max_total = Some(MAX_BLOCK_WEIGHT);
			weights.reserved = Some(
				MAX_BLOCK_WEIGHT - NORMAL_DISPATCH_RATIO * MAX_BLOCK_WEIGHT
			);
		})
		.avg_block_initialization(Perbill::from_percent(0))
		.build_or_panic();
	pub RuntimeBlockLength: limits::BlockLength =
		limits::BlockLength::max_with_normal_ratio(1024, NORMAL_DISPATCH_RATIO);
	pub DbWeight: RuntimeDbWeight = RocksDbWeight::get();
	pub static Killed: Vec<u64> = vec![];
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Test;

/// The aggregated call of the test runtime.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuntimeCall {
	System(frame_system::Call<Test>),
}

impl Encode for RuntimeCall {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			RuntimeCall::System(call) => {
				dest.push_byte(SYSTEM_INDEX);
				call.encode_to(dest);
			},
		}
	}
}

impl Decode for RuntimeCall {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		match input.read_byte().map_err(|e| e.expecting("RuntimeCall"))? {
			SYSTEM_INDEX => Ok(RuntimeCall::System(Decode::decode(input)?)),
			index => Err(CodecError::unknown_variant("RuntimeCall", index)),
		}
	}
}

impl From<frame_system::Call<Test>> for RuntimeCall {
	fn from(call: frame_system::Call<Test>) -> Self {
		RuntimeCall::System(call)
	}
}

impl GetDispatchInfo for RuntimeCall {
	fn get_dispatch_info(&self) -> DispatchInfo {
		match self {
			RuntimeCall::System(call) => call.get_dispatch_info(),
		}
	}
}

impl Dispatchable for RuntimeCall {
	type RuntimeOrigin = OriginFor<Test>;
	type Info = DispatchInfo;
	type PostInfo = PostDispatchInfo;

	fn dispatch(
		self,
		ext: &mut Externalities,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithInfo<PostDispatchInfo> {
		if !origin.is_root() && !<Test as Config>::BaseCallFilter::contains(&self) {
			return Err(Error::<Test>::CallFiltered.into())
		}
		match self {
			RuntimeCall::System(call) => call.dispatch_bypass_filter(ext, origin),
		}
	}
}

/// Rejects remarks carrying the payload `forbidden`.
pub struct MockFilter;
impl Contains<RuntimeCall> for MockFilter {
	fn contains(call: &RuntimeCall) -> bool {
		!matches!(
			call,
			RuntimeCall::System(frame_system::Call::remark { remark }) if remark == b"forbidden"
		)
	}
}

pub struct MockPalletInfo;
impl PalletInfo for MockPalletInfo {
	fn index<P: 'static>() -> Option<usize> {
		(TypeId::of::<P>() == TypeId::of::<System>()).then_some(SYSTEM_INDEX as usize)
	}

	fn name<P: 'static>() -> Option<&'static str> {
		(TypeId::of::<P>() == TypeId::of::<System>()).then_some("System")
	}
}

pub struct RecordKilled;
impl OnKilledAccount<u64> for RecordKilled {
	fn on_killed_account(_ext: &mut Externalities, who: &u64) {
		Killed::mutate(|r| r.push(*who))
	}
}

impl Config for Test {
	type BaseCallFilter = MockFilter;
	type BlockWeights = RuntimeBlockWeights;
	type BlockLength = RuntimeBlockLength;
	type DbWeight = DbWeight;
	type RuntimeCall = RuntimeCall;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type RuntimeEvent = Event<Test>;
	type BlockHashCount = BlockHashCount;
	type Version = Version;
	type PalletInfo = MockPalletInfo;
	type AccountData = u32;
	type OnNewAccount = ();
	type OnKilledAccount = RecordKilled;
	type SystemWeightInfo = ();
	type MaxConsumers = MaxConsumers;
}

pub type System = Pallet<Test>;
pub type SysEvent = frame_system::Event<Test>;

/// A call that every origin filter lets through.
pub const CALL: &RuntimeCall =
	&RuntimeCall::System(frame_system::Call::set_heap_pages { pages: 0u64 });

/// Create new externalities for `System` module tests.
pub fn new_test_ext() -> Externalities {
	let mut ext = Externalities::default();
	GenesisConfig::<Test>::default().build(&mut ext);
	// Add to each test the initial weight of a block
	System::register_extra_weight_unchecked(
		&mut ext,
		<Test as Config>::BlockWeights::get().base_block,
		DispatchClass::Mandatory,
	);
	ext
}
