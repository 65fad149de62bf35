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


//! Tests of the balances module, and the mock runtime they run against.

#![cfg(test)]

use crate::{self as pallet_balances, *};
use core::any::TypeId;
use tessera_primitives::{
	traits::{Dispatchable, IdentityLookup},
	DispatchResultWithInfo, Perbill,
};
use tessera_support::{
	dispatch::PostDispatchInfo,
	parameter_types,
	traits::{ConstU32, Everything},
	weights::{constants::RocksDbWeight, RuntimeDbWeight, Weight},
};
use tessera_system::{limits, EventRecord, RuntimeVersion};

mod currency_tests;
mod dispatchable_tests;

pub const SYSTEM_INDEX: u8 = 0;
pub const BALANCES_INDEX: u8 = 5;

const ID_1: LockIdentifier = *b"1       ";
const ID_2: LockIdentifier = *b"2       ";

parameter_types! {
	pub Version: RuntimeVersion = RuntimeVersion {
		spec_name: "balances-test".into(),
		impl_name: "balances-test".into(),
		spec_version: 1,
		impl_version: 1,
		transaction_version: 1,
	};
	pub const BlockHashCount: BlockNumber = 250;
	pub BlockWeights: limits::BlockWeights =
		limits::BlockWeights::simple_max(Weight::from_parts(1024, u64::MAX));
	pub BlockLength: limits::BlockLength =
		limits::BlockLength::max_with_normal_ratio(5 * 1024 * 1024, Perbill::from_percent(75));
	pub DbWeight: RuntimeDbWeight = RocksDbWeight::get();
	pub static ExistentialDeposit: Balance = 1;
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Test;

/// The aggregated call of the test runtime.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuntimeCall {
	System(tessera_system::Call<Test>),
	Balances(pallet_balances::Call<Test>),
}

impl Encode for RuntimeCall {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			RuntimeCall::System(call) => {
				dest.push_byte(SYSTEM_INDEX);
				call.encode_to(dest);
			},
			RuntimeCall::Balances(call) => {
				dest.push_byte(BALANCES_INDEX);
				call.encode_to(dest);
			},
		}
	}
}

impl Decode for RuntimeCall {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		match input.read_byte().map_err(|e| e.expecting("RuntimeCall"))? {
			SYSTEM_INDEX => Ok(RuntimeCall::System(Decode::decode(input)?)),
			BALANCES_INDEX => Ok(RuntimeCall::Balances(Decode::decode(input)?)),
			index => Err(CodecError::unknown_variant("RuntimeCall", index)),
		}
	}
}

impl From<tessera_system::Call<Test>> for RuntimeCall {
	fn from(call: tessera_system::Call<Test>) -> Self {
		RuntimeCall::System(call)
	}
}

impl From<pallet_balances::Call<Test>> for RuntimeCall {
	fn from(call: pallet_balances::Call<Test>) -> Self {
		RuntimeCall::Balances(call)
	}
}

impl GetDispatchInfo for RuntimeCall {
	fn get_dispatch_info(&self) -> DispatchInfo {
		match self {
			RuntimeCall::System(call) => call.get_dispatch_info(),
			RuntimeCall::Balances(call) => call.get_dispatch_info(),
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
		match self {
			RuntimeCall::System(call) => call.dispatch_bypass_filter(ext, origin),
			RuntimeCall::Balances(call) => call.dispatch_bypass_filter(ext, origin),
		}
	}
}

/// The aggregated event of the test runtime.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuntimeEvent {
	System(tessera_system::Event<Test>),
	Balances(pallet_balances::Event<Test>),
}

impl Encode for RuntimeEvent {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			RuntimeEvent::System(event) => {
				dest.push_byte(SYSTEM_INDEX);
				event.encode_to(dest);
			},
			RuntimeEvent::Balances(event) => {
				dest.push_byte(BALANCES_INDEX);
				event.encode_to(dest);
			},
		}
	}
}

impl Decode for RuntimeEvent {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		match input.read_byte().map_err(|e| e.expecting("RuntimeEvent"))? {
			SYSTEM_INDEX => Ok(RuntimeEvent::System(Decode::decode(input)?)),
			BALANCES_INDEX => Ok(RuntimeEvent::Balances(Decode::decode(input)?)),
			index => Err(CodecError::unknown_variant("RuntimeEvent", index)),
		}
	}
}

impl From<tessera_system::Event<Test>> for RuntimeEvent {
	fn from(event: tessera_system::Event<Test>) -> Self {
		RuntimeEvent::System(event)
	}
}

impl From<pallet_balances::Event<Test>> for RuntimeEvent {
	fn from(event: pallet_balances::Event<Test>) -> Self {
		RuntimeEvent::Balances(event)
	}
}

pub struct MockPalletInfo;
impl PalletInfo for MockPalletInfo {
	fn index<P: 'static>() -> Option<usize> {
		let type_id = TypeId::of::<P>();
		if type_id == TypeId::of::<System>() {
			return Some(SYSTEM_INDEX as usize)
		}
		if type_id == TypeId::of::<Balances>() {
			return Some(BALANCES_INDEX as usize)
		}
		None
	}

	fn name<P: 'static>() -> Option<&'static str> {
		let type_id = TypeId::of::<P>();
		if type_id == TypeId::of::<System>() {
			return Some("System")
		}
		if type_id == TypeId::of::<Balances>() {
			return Some("Balances")
		}
		None
	}
}

impl tessera_system::Config for Test {
	type BaseCallFilter = Everything;
	type BlockWeights = BlockWeights;
	type BlockLength = BlockLength;
	type DbWeight = DbWeight;
	type RuntimeCall = RuntimeCall;
	type AccountId = u64;
	type Lookup = IdentityLookup<Self::AccountId>;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = BlockHashCount;
	type Version = Version;
	type PalletInfo = MockPalletInfo;
	type AccountData = AccountData;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type MaxConsumers = ConstU32<16>;
}

impl Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = ConstU32<50>;
}

pub type System = tessera_system::Pallet<Test>;
pub type Balances = Pallet<Test>;

pub struct ExtBuilder {
	existential_deposit: Balance,
	monied: bool,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self { existential_deposit: 1, monied: false }
	}
}

impl ExtBuilder {
	pub fn existential_deposit(mut self, existential_deposit: Balance) -> Self {
		self.existential_deposit = existential_deposit;
		self
	}

	/// Endow accounts 1, 2, 3 and 4 with ten, twenty, thirty and forty times the existential
	/// deposit.
	pub fn monied(mut self, monied: bool) -> Self {
		self.monied = monied;
		self
	}

	pub fn set_associated_consts(&self) {
		ExistentialDeposit::set(self.existential_deposit);
	}

	pub fn build(self) -> Externalities {
		let _ = env_logger::try_init();
		self.set_associated_consts();
		let mut ext = Externalities::default();
		tessera_system::GenesisConfig::<Test>::default().build(&mut ext);
		pallet_balances::GenesisConfig::<Test> {
			balances: if self.monied {
				vec![
					(1, 10 * self.existential_deposit),
					(2, 20 * self.existential_deposit),
					(3, 30 * self.existential_deposit),
					(4, 40 * self.existential_deposit),
				]
			} else {
				vec![]
			},
		}
		.build(&mut ext);
		System::set_block_number(&mut ext, 1);
		ext
	}
}

/// All balance events deposited so far, clearing the event log.
pub fn events(ext: &mut Externalities) -> Vec<RuntimeEvent> {
	let events = System::events(ext).into_iter().map(|EventRecord { event, .. }| event).collect();
	System::reset_events(ext);
	events
}

pub fn last_event(ext: &Externalities) -> RuntimeEvent {
	System::events(ext).pop().expect("Event expected").event
}

/// `deposit_creating` with the issuance settled right away.
pub fn deposit_creating(ext: &mut Externalities, who: u64, amount: Balance) {
	Balances::deposit_creating(ext, &who, amount).settle_issuance(ext);
}

/// `make_free_balance_be` with the issuance settled right away.
pub fn make_free_balance_be(ext: &mut Externalities, who: u64, amount: Balance) {
	Balances::make_free_balance_be(ext, &who, amount).settle_issuance(ext);
}

/// Sum of the totals of every account with a balance, which must equal the total issuance.
pub fn sum_of_balances(ext: &Externalities) -> Balance {
	tessera_system::Account::<Test>::iter_values(ext)
		.into_iter()
		.map(|info| info.data.total())
		.sum()
}
