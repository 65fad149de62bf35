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


use crate::{self as pallet_transaction_payment, *};

use core::any::TypeId;
use tessera_balances::NegativeImbalance;
use tessera_primitives::{
	traits::{Dispatchable, IdentityLookup},
	DispatchResultWithInfo, Perbill,
};
use tessera_support::{
	dispatch::UnfilteredDispatchable,
	parameter_types,
	traits::{ConstU128, ConstU32, Everything, Imbalance, OnUnbalanced, SettleIssuance},
	weights::{constants::RocksDbWeight, RuntimeDbWeight, WeightToFee as WeightToFeeT},
};
use tessera_system::{limits, OriginFor, RuntimeVersion};

pub const SYSTEM_INDEX: u8 = 0;
pub const BALANCES_INDEX: u8 = 5;
pub const TRANSACTION_PAYMENT_INDEX: u8 = 6;

pub type BalancesCall = tessera_balances::Call<Test>;

pub const CALL: &RuntimeCall =
	&RuntimeCall::Balances(BalancesCall::transfer { dest: 2, value: 69 });

parameter_types! {
	pub Version: RuntimeVersion = RuntimeVersion {
		spec_name: "transaction-payment-test".into(),
		impl_name: "transaction-payment-test".into(),
		spec_version: 1,
		impl_version: 1,
		transaction_version: 1,
	};
	pub const BlockHashCount: BlockNumber = 250;
	pub static ExtrinsicBaseWeight: Weight = Weight::zero();
	pub BlockWeights: limits::BlockWeights = limits::BlockWeights::builder()
		.base_block(Weight::zero())
		.for_class(DispatchClass::all(), |weights| {
			weights.base_extrinsic = ExtrinsicBaseWeight::get();
		})
		.for_class(DispatchClass::non_mandatory(), |weights| {
			weights.max_total = Weight::from_parts(1024, u64::MAX).into();
		})
		.build_or_panic();
	pub BlockLength: limits::BlockLength =
		limits::BlockLength::max_with_normal_ratio(5 * 1024 * 1024, Perbill::from_percent(75));
	pub DbWeight: RuntimeDbWeight = RocksDbWeight::get();

	pub static WeightFee: Balance = 1;
	pub static ByteFee: Balance = 1;
	pub static OperationalFeeMultiplier: u8 = 5;
	pub static FeeMultiplier: Multiplier = Multiplier::one();
	pub static FeeUnbalancedAmount: Balance = 0;
	pub static TipUnbalancedAmount: Balance = 0;
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Test;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuntimeCall {
	System(tessera_system::Call<Test>),
	Balances(tessera_balances::Call<Test>),
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

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuntimeEvent {
	System(tessera_system::Event<Test>),
	Balances(tessera_balances::Event<Test>),
	TransactionPayment(pallet_transaction_payment::Event<Test>),
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
			RuntimeEvent::TransactionPayment(event) => {
				dest.push_byte(TRANSACTION_PAYMENT_INDEX);
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
			TRANSACTION_PAYMENT_INDEX =>
				Ok(RuntimeEvent::TransactionPayment(Decode::decode(input)?)),
			index => Err(CodecError::unknown_variant("RuntimeEvent", index)),
		}
	}
}

impl From<tessera_system::Event<Test>> for RuntimeEvent {
	fn from(event: tessera_system::Event<Test>) -> Self {
		RuntimeEvent::System(event)
	}
}

impl From<tessera_balances::Event<Test>> for RuntimeEvent {
	fn from(event: tessera_balances::Event<Test>) -> Self {
		RuntimeEvent::Balances(event)
	}
}

impl From<pallet_transaction_payment::Event<Test>> for RuntimeEvent {
	fn from(event: pallet_transaction_payment::Event<Test>) -> Self {
		RuntimeEvent::TransactionPayment(event)
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
		if type_id == TypeId::of::<TransactionPayment>() {
			return Some(TRANSACTION_PAYMENT_INDEX as usize)
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
		if type_id == TypeId::of::<TransactionPayment>() {
			return Some("TransactionPayment")
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
	type AccountData = tessera_balances::AccountData;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type MaxConsumers = ConstU32<16>;
}

impl tessera_balances::Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type DustRemoval = ();
	type ExistentialDeposit = ConstU128<1>;
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = ConstU32<50>;
}

/// Prices ref time at [`WeightFee`] per unit.
pub struct WeightToFee;
impl WeightToFeeT for WeightToFee {
	type Balance = Balance;

	fn weight_to_fee(weight: &Weight) -> Self::Balance {
		(weight.ref_time() as Balance).saturating_mul(WeightFee::get())
	}
}

/// Prices every byte at [`ByteFee`].
pub struct TransactionByteFee;
impl WeightToFeeT for TransactionByteFee {
	type Balance = Balance;

	fn weight_to_fee(weight: &Weight) -> Self::Balance {
		(weight.ref_time() as Balance).saturating_mul(ByteFee::get())
	}
}

/// Records the fee and the tip it is handed, then burns both.
pub struct DealWithFees;
impl OnUnbalanced<NegativeImbalance> for DealWithFees {
	fn on_unbalanceds<B>(
		ext: &mut Externalities,
		mut fees_then_tips: impl Iterator<Item = NegativeImbalance>,
	) where
		NegativeImbalance: Imbalance<B>,
	{
		if let Some(fees) = fees_then_tips.next() {
			FeeUnbalancedAmount::mutate(|a| {
				*a += <NegativeImbalance as Imbalance<Balance>>::peek(&fees)
			});
			fees.settle_issuance(ext);
			if let Some(tips) = fees_then_tips.next() {
				TipUnbalancedAmount::mutate(|a| {
					*a += <NegativeImbalance as Imbalance<Balance>>::peek(&tips)
				});
				tips.settle_issuance(ext);
			}
		}
	}
}

impl Config for Test {
	type RuntimeEvent = RuntimeEvent;
	type OnChargeTransaction = CurrencyAdapter<Balances, DealWithFees>;
	type OperationalFeeMultiplier = OperationalFeeMultiplier;
	type WeightToFee = WeightToFee;
	type LengthToFee = TransactionByteFee;
	type FeeMultiplierUpdate = ConstFeeMultiplier<FeeMultiplier>;
}

pub type System = tessera_system::Pallet<Test>;
pub type Balances = tessera_balances::Pallet<Test>;
pub type TransactionPayment = Pallet<Test>;

pub struct ExtBuilder {
	balance_factor: Balance,
	base_weight: Weight,
	byte_fee: Balance,
	weight_to_fee: Balance,
	initial_multiplier: Option<Multiplier>,
}

impl Default for ExtBuilder {
	fn default() -> Self {
		Self {
			balance_factor: 1,
			base_weight: Weight::zero(),
			byte_fee: 1,
			weight_to_fee: 1,
			initial_multiplier: None,
		}
	}
}

impl ExtBuilder {
	pub fn base_weight(mut self, base_weight: Weight) -> Self {
		self.base_weight = base_weight;
		self
	}
	pub fn byte_fee(mut self, byte_fee: Balance) -> Self {
		self.byte_fee = byte_fee;
		self
	}
	pub fn weight_fee(mut self, weight_to_fee: Balance) -> Self {
		self.weight_to_fee = weight_to_fee;
		self
	}
	/// Endow accounts 1 to 6 with ten to sixty times `factor`. Zero endows nobody.
	pub fn balance_factor(mut self, factor: Balance) -> Self {
		self.balance_factor = factor;
		self
	}
	pub fn with_initial_multiplier(mut self, multiplier: Multiplier) -> Self {
		self.initial_multiplier = Some(multiplier);
		self
	}
	fn set_constants(&self) {
		ExtrinsicBaseWeight::set(self.base_weight);
		ByteFee::set(self.byte_fee);
		WeightFee::set(self.weight_to_fee);
	}
	pub fn build(self) -> Externalities {
		let _ = env_logger::try_init();
		self.set_constants();
		let mut ext = Externalities::default();
		tessera_system::GenesisConfig::<Test>::default().build(&mut ext);
		tessera_balances::GenesisConfig::<Test> {
			balances: if self.balance_factor > 0 {
				vec![
					(1, 10 * self.balance_factor),
					(2, 20 * self.balance_factor),
					(3, 30 * self.balance_factor),
					(4, 40 * self.balance_factor),
					(5, 50 * self.balance_factor),
					(6, 60 * self.balance_factor),
				]
			} else {
				vec![]
			},
		}
		.build(&mut ext);
		let mut genesis = pallet_transaction_payment::GenesisConfig::<Test>::default();
		if let Some(multiplier) = self.initial_multiplier {
			genesis.multiplier = multiplier;
		}
		genesis.build(&mut ext);
		System::set_block_number(&mut ext, 1);
		ext
	}
}
