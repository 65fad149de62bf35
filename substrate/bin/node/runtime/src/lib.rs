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


//! The node runtime: the system, balances and transaction payment modules composed into one
//! state transition function.
//!
//! Module indices are part of the wire format of calls and events:
//!
//! | Module               | Index |
//! |----------------------|-------|
//! | `System`             | 0     |
//! | `Balances`           | 5     |
//! | `TransactionPayment` | 6     |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::vec::Vec;
use codec::{Decode, Encode, Error as CodecError, Input, Output};
use core::any::TypeId;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::{
	generic,
	traits::{AccountIdLookup, Dispatchable, ValidateUnsigned},
	transaction_validity::{TransactionSource, TransactionValidity, TransactionValidityError},
	DispatchResultWithInfo, Externalities, Perbill,
};
use tessera_support::{
	dispatch::{
		DispatchClass, DispatchInfo, GetCallIndex, GetDispatchInfo, PostDispatchInfo, RawOrigin,
		UnfilteredDispatchable,
	},
	parameter_types,
	registry::{
		decode_module_call, no_pre_dispatch, reject_unsigned, CallIndex, ModuleEntry,
		ModuleMetadata, ModuleRegistry,
	},
	traits::{
		BuildGenesisConfig, ConstU32, ConstU8, Contains, Everything, PalletInfo as PalletInfoT,
	},
	weights::{
		constants::{
			BlockExecutionWeight, ExtrinsicBaseWeight, RocksDbWeight, WEIGHT_REF_TIME_PER_SECOND,
		},
		ConstantMultiplier, IdentityFee, Weight,
	},
};
use tessera_system::{
	limits::{BlockLength, BlockWeights},
	RuntimeVersion,
};
use tessera_transaction_payment::{ConstFeeMultiplier, CurrencyAdapter, Multiplier};

pub use tessera_balances::Call as BalancesCall;
pub use tessera_primitives::{AccountId32, Balance, BlockNumber, MultiAddress, Nonce, H256};
pub use tessera_system::Call as SystemCall;

/// Constant values used within the runtime.
pub mod constants;
use constants::currency::*;

/// Implementations of some helper traits passed into runtime modules as associated types.
pub mod impls;
pub use impls::RuntimeContext;

/// Genesis presets used by this runtime.
#[cfg(feature = "std")]
pub mod genesis_config_presets;

/// Some way of identifying an account on the chain.
pub type AccountId = AccountId32;

/// The type for looking up accounts. We don't expect more than 4 billion of them.
pub type AccountIndex = u32;

/// The address format for describing accounts.
pub type Address = MultiAddress<AccountId, AccountIndex>;

/// Alias to the signature scheme used by extrinsics.
pub type Signature = tessera_primitives::MultiSignature;

/// A hash of some data used by the chain.
pub type Hash = H256;

/// Runtime version.
pub const VERSION: RuntimeVersion = RuntimeVersion {
	spec_name: alloc::borrow::Cow::Borrowed("node"),
	impl_name: alloc::borrow::Cow::Borrowed("tessera-node"),
	// Per convention: if the runtime behavior changes, increment spec_version
	// and set impl_version to 0. If only runtime
	// implementation changes and behavior does not, then leave spec_version as
	// is and increment impl_version.
	spec_version: 100,
	impl_version: 0,
	transaction_version: 1,
};

/// We assume that ~10% of the block weight is consumed by `on_initialize` handlers.
/// This is used to limit the maximal weight of a single extrinsic.
const AVERAGE_ON_INITIALIZE_RATIO: Perbill = Perbill::from_percent(10);
/// We allow `Normal` extrinsics to fill up the block up to 75%, the rest can be used
/// by  Operational  extrinsics.
const NORMAL_DISPATCH_RATIO: Perbill = Perbill::from_percent(75);
/// We allow for 2 seconds of compute with a 6 second average block time, with maximum proof size.
const MAXIMUM_BLOCK_WEIGHT: Weight =
	Weight::from_parts(WEIGHT_REF_TIME_PER_SECOND.saturating_mul(2), u64::MAX);

pub const SYSTEM_INDEX: u8 = 0;
pub const BALANCES_INDEX: u8 = 5;
pub const TRANSACTION_PAYMENT_INDEX: u8 = 6;

parameter_types! {
	pub const BlockHashCount: BlockNumber = 2400;
	pub const Version: RuntimeVersion = VERSION;
	pub RuntimeBlockLength: BlockLength =
		BlockLength::max_with_normal_ratio(5 * 1024 * 1024, NORMAL_DISPATCH_RATIO);
	pub RuntimeBlockWeights: BlockWeights = BlockWeights::builder()
		.base_block(BlockExecutionWeight::get())
		.for_class(DispatchClass::all(), |weights| {
			weights.base_extrinsic = ExtrinsicBaseWeight::get();
		})
		.for_class(DispatchClass::Normal, |weights| {
			weights.max_total = Some(NORMAL_DISPATCH_RATIO * MAXIMUM_BLOCK_WEIGHT);
		})
		.for_class(DispatchClass::Operational, |weights| {
			weights.max_total = Some(MAXIMUM_BLOCK_WEIGHT);
			// Operational transactions have some extra reserved space, so that they
			// are included even if block reached `MAXIMUM_BLOCK_WEIGHT`.
			weights.reserved = Some(
				MAXIMUM_BLOCK_WEIGHT.saturating_sub(NORMAL_DISPATCH_RATIO * MAXIMUM_BLOCK_WEIGHT)
			);
		})
		.avg_block_initialization(AVERAGE_ON_INITIALIZE_RATIO)
		.build_or_panic();
}

/// The runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Runtime;

pub type System = tessera_system::Pallet<Runtime>;
pub type Balances = tessera_balances::Pallet<Runtime>;
pub type TransactionPayment = tessera_transaction_payment::Pallet<Runtime>;

/// All modules of the runtime, in the order their hooks run.
pub type AllPalletsWithSystem = (System, Balances, TransactionPayment);

impl tessera_system::Config for Runtime {
	type BaseCallFilter = Everything;
	type BlockWeights = RuntimeBlockWeights;
	type BlockLength = RuntimeBlockLength;
	type DbWeight = RocksDbWeight;
	type RuntimeCall = RuntimeCall;
	type AccountId = AccountId;
	type Lookup = AccountIdLookup<AccountIndex>;
	type RuntimeEvent = RuntimeEvent;
	type BlockHashCount = BlockHashCount;
	type Version = Version;
	type PalletInfo = PalletInfo;
	type AccountData = tessera_balances::AccountData;
	type OnNewAccount = ();
	type OnKilledAccount = ();
	type SystemWeightInfo = ();
	type MaxConsumers = ConstU32<16>;
}

parameter_types! {
	pub const ExistentialDeposit: Balance = 1 * DOLLARS;
	// For weight estimation, we assume that the most locks on an individual account will be 50.
	// This number may need to be adjusted in the future if this assumption no longer holds true.
	pub const MaxLocks: u32 = 50;
}

impl tessera_balances::Config for Runtime {
	type RuntimeEvent = RuntimeEvent;
	/// The dust is burnt.
	type DustRemoval = ();
	type ExistentialDeposit = ExistentialDeposit;
	type AccountStore = System;
	type WeightInfo = ();
	type MaxLocks = MaxLocks;
}

parameter_types! {
	pub const TransactionByteFee: Balance = 10 * MILLICENTS;
	pub FeeMultiplier: Multiplier = Multiplier::one();
}

impl tessera_transaction_payment::Config for Runtime {
	type RuntimeEvent = RuntimeEvent;
	/// Fees and tips are burnt.
	type OnChargeTransaction = CurrencyAdapter<Balances, ()>;
	type OperationalFeeMultiplier = ConstU8<5>;
	type WeightToFee = IdentityFee<Balance>;
	type LengthToFee = ConstantMultiplier<Balance, TransactionByteFee>;
	type FeeMultiplierUpdate = ConstFeeMultiplier<FeeMultiplier>;
}

/// The outer call: a call of any module of the runtime.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RuntimeCall {
	System(tessera_system::Call<Runtime>),
	Balances(tessera_balances::Call<Runtime>),
}

impl Encode for RuntimeCall {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		dest.push_byte(self.module_index());
		match self {
			RuntimeCall::System(call) => call.encode_to(dest),
			RuntimeCall::Balances(call) => call.encode_to(dest),
		}
	}
}

impl Decode for RuntimeCall {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		MODULES.decode_call(input)
	}
}

impl CallIndex for RuntimeCall {
	fn module_index(&self) -> u8 {
		match self {
			RuntimeCall::System(_) => SYSTEM_INDEX,
			RuntimeCall::Balances(_) => BALANCES_INDEX,
		}
	}

	fn function_index(&self) -> u8 {
		match self {
			RuntimeCall::System(call) => call.get_call_index(),
			RuntimeCall::Balances(call) => call.get_call_index(),
		}
	}
}

impl From<tessera_system::Call<Runtime>> for RuntimeCall {
	fn from(call: tessera_system::Call<Runtime>) -> Self {
		RuntimeCall::System(call)
	}
}

impl From<tessera_balances::Call<Runtime>> for RuntimeCall {
	fn from(call: tessera_balances::Call<Runtime>) -> Self {
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
	type RuntimeOrigin = RawOrigin<AccountId>;
	type Info = DispatchInfo;
	type PostInfo = PostDispatchInfo;

	fn dispatch(
		self,
		ext: &mut Externalities,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithInfo<PostDispatchInfo> {
		// Root bypasses the call filter.
		if origin != RawOrigin::Root &&
			!<Runtime as tessera_system::Config>::BaseCallFilter::contains(&self)
		{
			return Err(tessera_system::Error::<Runtime>::CallFiltered.into())
		}
		match self {
			RuntimeCall::System(call) => call.dispatch_bypass_filter(ext, origin),
			RuntimeCall::Balances(call) => call.dispatch_bypass_filter(ext, origin),
		}
	}
}

/// The outer event: an event of any module of the runtime.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RuntimeEvent {
	System(tessera_system::Event<Runtime>),
	Balances(tessera_balances::Event<Runtime>),
	TransactionPayment(tessera_transaction_payment::Event<Runtime>),
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

impl From<tessera_system::Event<Runtime>> for RuntimeEvent {
	fn from(event: tessera_system::Event<Runtime>) -> Self {
		RuntimeEvent::System(event)
	}
}

impl From<tessera_balances::Event<Runtime>> for RuntimeEvent {
	fn from(event: tessera_balances::Event<Runtime>) -> Self {
		RuntimeEvent::Balances(event)
	}
}

impl From<tessera_transaction_payment::Event<Runtime>> for RuntimeEvent {
	fn from(event: tessera_transaction_payment::Event<Runtime>) -> Self {
		RuntimeEvent::TransactionPayment(event)
	}
}

/// Index and name of every module of the runtime.
pub struct PalletInfo;

impl PalletInfoT for PalletInfo {
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
		let index = Self::index::<P>()?;
		MODULES.get(index as u8).map(|entry| entry.name)
	}
}

/// Transaction payment has no calls of its own.
fn decode_no_call(input: &mut dyn Input) -> Result<RuntimeCall, CodecError> {
	let index = input.read_byte()?;
	Err(CodecError::unknown_variant("Call", index))
}

static MODULE_ENTRIES: [ModuleEntry<RuntimeCall>; 3] = [
	ModuleEntry {
		index: SYSTEM_INDEX,
		name: "System",
		decode_call: decode_module_call::<tessera_system::Call<Runtime>, RuntimeCall>,
		validate_unsigned: reject_unsigned,
		pre_dispatch: no_pre_dispatch,
		metadata: System::metadata,
	},
	ModuleEntry {
		index: BALANCES_INDEX,
		name: "Balances",
		decode_call: decode_module_call::<tessera_balances::Call<Runtime>, RuntimeCall>,
		validate_unsigned: reject_unsigned,
		pre_dispatch: no_pre_dispatch,
		metadata: Balances::metadata,
	},
	ModuleEntry {
		index: TRANSACTION_PAYMENT_INDEX,
		name: "TransactionPayment",
		decode_call: decode_no_call,
		validate_unsigned: reject_unsigned,
		pre_dispatch: no_pre_dispatch,
		metadata: TransactionPayment::metadata,
	},
];

/// The module registry of the runtime.
pub static MODULES: ModuleRegistry<RuntimeCall> = ModuleRegistry::new(&MODULE_ENTRIES);

impl ValidateUnsigned for Runtime {
	type Call = RuntimeCall;

	fn pre_dispatch(
		ext: &mut Externalities,
		call: &Self::Call,
	) -> Result<(), TransactionValidityError> {
		MODULES.pre_dispatch(ext, call)
	}

	fn validate_unsigned(
		ext: &mut Externalities,
		source: TransactionSource,
		call: &Self::Call,
	) -> TransactionValidity {
		MODULES.validate_unsigned(ext, source, call)
	}
}

pub type SystemConfig = tessera_system::GenesisConfig<Runtime>;
pub type BalancesConfig = tessera_balances::GenesisConfig<Runtime>;
pub type TransactionPaymentConfig = tessera_transaction_payment::GenesisConfig<Runtime>;

/// The genesis state of every module of the runtime.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields, default))]
pub struct RuntimeGenesisConfig {
	pub system: SystemConfig,
	pub balances: BalancesConfig,
	pub transaction_payment: TransactionPaymentConfig,
}

impl BuildGenesisConfig for RuntimeGenesisConfig {
	fn build(&self, ext: &mut Externalities) {
		self.system.build(ext);
		self.balances.build(ext);
		self.transaction_payment.build(ext);
	}
}

/// Block header type as expected by this runtime.
pub type Header = generic::Header;
/// Block type as expected by this runtime.
pub type Block = generic::Block<UncheckedExtrinsic>;
/// The SignedExtension to the basic transaction logic.
pub type SignedExtra = (
	tessera_system::CheckNonZeroSender<Runtime>,
	tessera_system::CheckSpecVersion<Runtime>,
	tessera_system::CheckTxVersion<Runtime>,
	tessera_system::CheckGenesis<Runtime>,
	tessera_system::CheckMortality<Runtime>,
	tessera_system::CheckNonce<Runtime>,
	tessera_system::CheckWeight<Runtime>,
	tessera_transaction_payment::ChargeTransactionPayment<Runtime>,
);
/// Unchecked extrinsic type as expected by this runtime.
pub type UncheckedExtrinsic =
	generic::UncheckedExtrinsic<Address, RuntimeCall, Signature, SignedExtra>;
/// The payload being signed in transactions.
pub type SignedPayload = generic::SignedPayload<RuntimeCall, SignedExtra>;
/// Extrinsic type that has already been checked.
pub type CheckedExtrinsic = generic::CheckedExtrinsic<AccountId, RuntimeCall, SignedExtra>;
/// Executive: handles dispatch to the various modules.
pub type Executive = tessera_executive::Executive<
	Runtime,
	UncheckedExtrinsic,
	RuntimeContext,
	Runtime,
	AllPalletsWithSystem,
>;

/// The entry points a node calls into.
pub mod api {
	use super::*;
	use tessera_primitives::ApplyExtrinsicResult;
	use tessera_transaction_payment::{FeeDetails, RuntimeDispatchInfo};

	/// The version of the runtime.
	pub fn version() -> RuntimeVersion {
		VERSION
	}

	/// Execute and check `block` on top of the state in `ext`.
	pub fn execute_block(ext: &mut Externalities, block: Block) {
		Executive::execute_block(ext, block)
	}

	/// Start building a block on top of `header`'s parent.
	pub fn initialize_block(ext: &mut Externalities, header: &Header) {
		Executive::initialize_block(ext, header)
	}

	/// Apply an encoded extrinsic to the block being built.
	pub fn apply_extrinsic(ext: &mut Externalities, extrinsic: &[u8]) -> ApplyExtrinsicResult {
		Executive::apply_extrinsic(ext, extrinsic)
	}

	/// Finish the block being built.
	pub fn finalize_block(ext: &mut Externalities) -> Header {
		Executive::finalize_block(ext)
	}

	/// Validate an encoded transaction for the pool.
	pub fn validate_transaction(
		ext: &mut Externalities,
		source: TransactionSource,
		tx: &[u8],
		block_hash: Hash,
	) -> TransactionValidity {
		Executive::validate_transaction(ext, source, tx, block_hash)
	}

	/// The nonce the next transaction of `account` must carry.
	pub fn account_nonce(ext: &Externalities, account: &AccountId) -> Nonce {
		System::account_nonce(ext, account)
	}

	/// Weight, class and partial fee of `uxt`.
	pub fn query_info(
		ext: &Externalities,
		uxt: &UncheckedExtrinsic,
		len: u32,
	) -> RuntimeDispatchInfo {
		TransactionPayment::query_info(ext, uxt, len)
	}

	/// The components of the fee of `uxt`.
	pub fn query_fee_details(ext: &Externalities, uxt: &UncheckedExtrinsic, len: u32) -> FeeDetails {
		TransactionPayment::query_fee_details(ext, uxt, len)
	}

	/// Metadata of every module, in index order.
	pub fn metadata() -> Vec<ModuleMetadata> {
		MODULES.metadata()
	}

	/// Build the genesis state out of a JSON encoded [`RuntimeGenesisConfig`].
	///
	/// Fields left out of the JSON keep their default value.
	#[cfg(feature = "std")]
	pub fn build_state(ext: &mut Externalities, json: &[u8]) -> Result<(), String> {
		let config: RuntimeGenesisConfig = serde_json::from_slice(json)
			.map_err(|e| format!("Invalid JSON blob: {}", e))?;
		config.build(ext);
		Ok(())
	}

	/// The JSON encoded genesis config of the preset `id`, if it exists.
	#[cfg(feature = "std")]
	pub fn get_preset(id: &str) -> Option<Vec<u8>> {
		genesis_config_presets::get_preset(id)
	}

	/// Names of the available genesis presets.
	#[cfg(feature = "std")]
	pub fn preset_names() -> Vec<&'static str> {
		genesis_config_presets::preset_names()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use tessera_support::traits::IntegrityTest;

	#[test]
	fn integrity_test_passes() {
		<AllPalletsWithSystem as IntegrityTest>::integrity_test();
	}

	#[test]
	fn module_indices_are_stable() {
		assert_eq!(<PalletInfo as PalletInfoT>::index::<System>(), Some(0));
		assert_eq!(<PalletInfo as PalletInfoT>::index::<Balances>(), Some(5));
		assert_eq!(<PalletInfo as PalletInfoT>::index::<TransactionPayment>(), Some(6));
		assert_eq!(<PalletInfo as PalletInfoT>::name::<Balances>(), Some("Balances"));
		assert_eq!(<PalletInfo as PalletInfoT>::index::<Runtime>(), None);
		assert_eq!(MODULES.len(), 3);
	}

	#[test]
	fn block_weights_are_sane() {
		let weights = RuntimeBlockWeights::get();
		assert_eq!(weights.max_block, MAXIMUM_BLOCK_WEIGHT);
		assert_eq!(weights.base_block, BlockExecutionWeight::get());
		let normal = weights.get(DispatchClass::Normal);
		assert_eq!(normal.max_total, Some(NORMAL_DISPATCH_RATIO * MAXIMUM_BLOCK_WEIGHT));
		assert!(normal.max_extrinsic.is_some());
		assert_eq!(*RuntimeBlockLength::get().max.get(DispatchClass::Normal), 3_932_160);
	}

	#[test]
	fn call_encoding_starts_with_the_module_and_function_index() {
		let call = RuntimeCall::Balances(BalancesCall::transfer_keep_alive {
			dest: MultiAddress::Id(AccountId::new([1; 32])),
			value: 7,
		});
		let encoded = call.encode();
		assert_eq!(&encoded[..2], &[BALANCES_INDEX, 3]);
		assert_eq!(call.function_index(), 3);
		assert_eq!(RuntimeCall::decode(&mut &encoded[..]).unwrap(), call);
	}

	#[test]
	fn calls_of_unknown_modules_do_not_decode() {
		assert!(RuntimeCall::decode(&mut &[1u8, 0][..]).is_err());
		assert!(RuntimeCall::decode(&mut &[TRANSACTION_PAYMENT_INDEX, 0][..]).is_err());
	}
}
