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


//! # System Module
//!
//! The System module provides low-level access to core types and cross-cutting utilities.
//! It acts as the base layer for other modules to interact with the runtime.
//!
//! ## Overview
//!
//! The System module defines the core data types used in a runtime.
//! It also provides several utility functions (see [`Pallet`]) for other modules.
//!
//! In addition, it manages the storage items for extrinsics data, indexes, event records, and
//! digest items, among other things that support the execution of the current block.
//!
//! It also handles low-level tasks like depositing logs, basic set up and take down of
//! temporary storage entries, and access to previous block hashes.
//!
//! ## Interface
//!
//! ### Dispatchable Functions
//!
//! The System module does not implement any dispatchable functions that a user would call
//! other than `remark` and `remark_with_event`; the rest are root only.
//!
//! ### Public Functions
//!
//! See the [`Pallet`] type for details of publicly available functions.
//!
//! ### Signed Extensions
//!
//! The System module defines the following extensions:
//!
//!   - [`CheckWeight`]: Checks the weight and length of the block and ensure that it does not
//!     exceed the limits.
//!   - [`CheckNonce`]: Checks the nonce of the transaction. Contains a single payload of type
//!     `Nonce`.
//!   - [`CheckMortality`]: Checks the mortality of the transaction. The `AdditionalSigned`
//!     payload is the hash of the block the era was born in.
//!   - [`CheckGenesis`]: Checks the provided genesis hash of the transaction. Must be a part of
//!     the signed payload of the transaction.
//!   - [`CheckSpecVersion`]: Checks that the runtime version is the same as the one used to
//!     sign the transaction.
//!   - [`CheckTxVersion`]: Checks that the transaction version is the same as the one used to
//!     sign the transaction.
//!   - [`CheckNonZeroSender`]: Rejects transactions signed by the all-zero account.
//!
//! Look up the runtime aggregator file (e.g. `node/runtime`) to see the full list of signed
//! extensions included in a chain.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::{borrow::Cow, vec, vec::Vec};
use codec::{Decode, Encode, Error as CodecError, FullCodec, Input, Output};
use core::{convert::Infallible, fmt::Debug, marker::PhantomData};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_primitives::{
	generic::Header,
	hashing::{blake2_256_hash, ordered_root},
	traits::{BadOrigin, Dispatchable, Member, StaticLookup},
	BlockNumber, DispatchError, Externalities, Nonce, H256,
};
use tessera_support::{
	decl_error, generate_storage_instances,
	dispatch::{
		extract_actual_pays_fee, extract_actual_weight, DispatchClass, DispatchInfo,
		DispatchResultWithPostInfo, GetCallIndex, GetCallName, GetDispatchInfo, PostDispatchInfo,
		RawOrigin, UnfilteredDispatchable,
	},
	registry::{ConstantMetadata, ItemMetadata, ModuleMetadata},
	storage::{
		types::{OptionQuery, StorageMap, StorageValue, ValueQuery},
		unhashed,
	},
	traits::{
		BuildGenesisConfig, Contains, Get, IntegrityTest, OnFinalize, OnInitialize,
		OnKilledAccount, OnNewAccount, PalletInfo, PalletInfoAccess, StoredMap,
	},
	weights::{ConsumedWeight, RuntimeDbWeight, Weight},
	Twox64Concat,
};

pub mod extensions;
pub mod limits;
#[cfg(test)]
pub(crate) mod mock;
#[cfg(test)]
mod tests;
pub mod weights;

pub use extensions::{
	check_genesis::CheckGenesis, check_mortality::CheckMortality,
	check_non_zero_sender::CheckNonZeroSender, check_nonce::CheckNonce,
	check_spec_version::CheckSpecVersion, check_tx_version::CheckTxVersion,
	check_weight::CheckWeight,
};
pub use weights::WeightInfo;

const LOG_TARGET: &str = "runtime::system";

/// Type alias for the origin of a module's calls.
pub type OriginFor<T> = RawOrigin<<T as Config>::AccountId>;

/// Type used to encode the number of references an account has.
pub type RefCount = u32;

/// Index of an event within a block.
pub type EventIndex = u32;

/// A raw storage key.
pub type Key = Vec<u8>;

/// A raw storage key and the value to write under it.
pub type KeyValue = (Vec<u8>, Vec<u8>);

/// Well known storage keys that live outside of any module prefix.
pub mod well_known_keys {
	/// Current extrinsic index (u32) is stored under this key.
	pub const EXTRINSIC_INDEX: &[u8] = b":extrinsic_index";

	/// Number of wasm linear memory pages required for execution of the runtime.
	///
	/// The type of this value is encoded `u64`.
	pub const HEAP_PAGES: &[u8] = b":heappages";
}

/// Runtime version.
///
/// This should not be thought of as classic Semver (major/minor/tiny).
/// This triplet have different semantics and mis-interpretation could cause problems.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct RuntimeVersion {
	/// Identifies the different runtimes.
	///
	/// A different `spec_name` means that the runtimes are not compatible with each other.
	pub spec_name: Cow<'static, str>,

	/// Name of the implementation of the spec.
	///
	/// This is of marginal use to the runtime but is useful for tooling.
	pub impl_name: Cow<'static, str>,

	/// Version of the runtime specification.
	///
	/// Runtimes with equal `spec_name` and `spec_version` must be equivalent in behaviour.
	pub spec_version: u32,

	/// Version of the implementation of the specification.
	///
	/// Changes that do not affect behaviour, such as an optimization, only bump this.
	pub impl_version: u32,

	/// All existing calls (dispatchables) are fully compatible when this number doesn't change.
	///
	/// If this number is updated, then the signed payload of a transaction changes, so
	/// transactions signed against the previous version are no longer valid.
	pub transaction_version: u32,
}

codec::impl_codec_struct!(RuntimeVersion {
	spec_name,
	impl_name,
	spec_version,
	impl_version,
	transaction_version
});

/// System configuration trait. Implemented by runtime.
pub trait Config: 'static + Eq + Clone + Debug {
	/// The basic call filter to use in dispatchable. Root calls bypass it.
	type BaseCallFilter: Contains<Self::RuntimeCall>;

	/// Block & extrinsics weights: base values and limits.
	type BlockWeights: Get<limits::BlockWeights>;

	/// The maximum length of a block (in bytes).
	type BlockLength: Get<limits::BlockLength>;

	/// The weight of runtime database operations the runtime can invoke.
	type DbWeight: Get<RuntimeDbWeight>;

	/// The aggregated `RuntimeCall` type.
	type RuntimeCall: Member
		+ FullCodec
		+ Dispatchable<
			RuntimeOrigin = OriginFor<Self>,
			Info = DispatchInfo,
			PostInfo = PostDispatchInfo,
		> + GetDispatchInfo
		+ From<Call<Self>>;

	/// The user account identifier type for the runtime.
	type AccountId: Member + FullCodec + Ord;

	/// Converting trait to take a source type and convert to `AccountId`.
	///
	/// Used to define the type and conversion mechanism for referencing accounts in
	/// transactions.
	type Lookup: StaticLookup<Target = Self::AccountId>;

	/// The aggregated event type of the runtime.
	type RuntimeEvent: Member + FullCodec + From<Event<Self>>;

	/// Maximum number of block number to block hash mappings to keep (oldest pruned first).
	type BlockHashCount: Get<BlockNumber>;

	/// Get the chain's current version.
	type Version: Get<RuntimeVersion>;

	/// Provides information about the module setup in the runtime.
	///
	/// Expects the `PalletInfo` type that is being generated by the runtime.
	type PalletInfo: PalletInfo;

	/// Data to be associated with an account (other than nonce/transaction counter, which this
	/// module does regardless).
	type AccountData: Member + FullCodec + Default;

	/// Handler for when a new account has just been created.
	type OnNewAccount: OnNewAccount<Self::AccountId>;

	/// A function that is invoked when an account has been determined to be dead.
	///
	/// All resources should be cleaned up associated with the given account.
	type OnKilledAccount: OnKilledAccount<Self::AccountId>;

	/// Weight information for the extrinsics of this module.
	type SystemWeightInfo: WeightInfo;

	/// The maximum number of consumers allowed on a single account.
	type MaxConsumers: Get<RefCount>;
}

/// The System module.
pub struct Pallet<T>(PhantomData<T>);

/// Information of an account.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct AccountInfo<AccountData> {
	/// The number of transactions this account has sent.
	pub nonce: Nonce,
	/// The number of other modules that currently depend on this account's existence. The account
	/// cannot be reaped until this is zero.
	pub consumers: RefCount,
	/// The number of other modules that allow this account to exist. The account may not be
	/// reaped until this and `sufficients` are both zero.
	pub providers: RefCount,
	/// The number of modules that allow this account to exist for their own purposes only. The
	/// account may not be reaped until this and `providers` are both zero.
	pub sufficients: RefCount,
	/// The additional data that belongs to this account. Used to store the balance(s) in a lot of
	/// chains.
	pub data: AccountData,
}

codec::impl_codec_struct!(AccountInfo<AccountData> {
	nonce,
	consumers,
	providers,
	sufficients,
	data
});

/// A phase of a block's execution.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum Phase {
	/// Applying an extrinsic.
	ApplyExtrinsic(u32),
	/// Finalizing the block.
	Finalization,
	/// Initializing the block.
	#[default]
	Initialization,
}

impl Encode for Phase {
	fn size_hint(&self) -> usize {
		match self {
			Phase::ApplyExtrinsic(_) => 5,
			_ => 1,
		}
	}

	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			Phase::ApplyExtrinsic(index) => {
				dest.push_byte(0);
				index.encode_to(dest);
			},
			Phase::Finalization => dest.push_byte(1),
			Phase::Initialization => dest.push_byte(2),
		}
	}
}

impl Decode for Phase {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		match input.read_byte().map_err(|e| e.expecting("Phase"))? {
			0 => Ok(Phase::ApplyExtrinsic(
				u32::decode(input).map_err(|e| e.expecting("Phase::ApplyExtrinsic"))?,
			)),
			1 => Ok(Phase::Finalization),
			2 => Ok(Phase::Initialization),
			index => Err(CodecError::unknown_variant("Phase", index)),
		}
	}
}

/// Record of an event happening.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EventRecord<E> {
	/// The phase of the block it happened in.
	pub phase: Phase,
	/// The event itself.
	pub event: E,
	/// The list of the topics this event has.
	pub topics: Vec<H256>,
}

codec::impl_codec_struct!(EventRecord<E> { phase, event, topics });

/// Some resultant status relevant to incrementing a provider/self-sufficient reference.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum IncRefStatus {
	/// Account was created.
	Created,
	/// Account already existed.
	Existed,
}

/// Some resultant status relevant to decrementing a provider/self-sufficient reference.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum DecRefStatus {
	/// Account was destroyed.
	Reaped,
	/// Account still exists.
	Exists,
}

generate_storage_instances!("System", {
	AccountPrefix => "Account",
	ExtrinsicCountPrefix => "ExtrinsicCount",
	BlockWeightPrefix => "BlockWeight",
	AllExtrinsicsLenPrefix => "AllExtrinsicsLen",
	BlockHashPrefix => "BlockHash",
	ExtrinsicDataPrefix => "ExtrinsicData",
	NumberPrefix => "Number",
	ParentHashPrefix => "ParentHash",
	EventsPrefix => "Events",
	EventCountPrefix => "EventCount",
	ExecutionPhasePrefix => "ExecutionPhase",
});

/// The full account information for a particular account ID.
pub type Account<T> = StorageMap<
	AccountPrefix,
	Twox64Concat,
	<T as Config>::AccountId,
	AccountInfo<<T as Config>::AccountData>,
	ValueQuery,
>;

/// Total extrinsics count for the current block.
pub type ExtrinsicCount = StorageValue<ExtrinsicCountPrefix, u32, OptionQuery>;

/// The current weight for the block.
pub type BlockWeight = StorageValue<BlockWeightPrefix, ConsumedWeight, ValueQuery>;

/// Total length (in bytes) for all extrinsics put together, for the current block.
pub type AllExtrinsicsLen = StorageValue<AllExtrinsicsLenPrefix, u32, OptionQuery>;

/// Map of block numbers to block hashes.
pub type BlockHash = StorageMap<BlockHashPrefix, Twox64Concat, BlockNumber, H256, ValueQuery>;

/// Extrinsics data for the current block (maps an extrinsic's index to its data).
pub type ExtrinsicData = StorageMap<ExtrinsicDataPrefix, Twox64Concat, u32, Vec<u8>, ValueQuery>;

/// The current block number being processed. Set by `execute_block`.
pub type Number = StorageValue<NumberPrefix, BlockNumber, ValueQuery>;

/// Hash of the previous block.
pub type ParentHash = StorageValue<ParentHashPrefix, H256, ValueQuery>;

/// Events deposited for the current block.
///
/// NOTE: The item is unbound and should therefore never be read on chain.
/// It could otherwise inflate the proof size of a block.
///
/// Events have a large in-memory size. Box the events to not go out-of-memory
/// just in case someone still reads them from within the runtime.
pub type Events<T> =
	StorageValue<EventsPrefix, Vec<EventRecord<<T as Config>::RuntimeEvent>>, ValueQuery>;

/// The number of events in the `Events<T>` list.
pub type EventCount = StorageValue<EventCountPrefix, EventIndex, ValueQuery>;

/// The execution phase of the block.
pub type ExecutionPhase = StorageValue<ExecutionPhasePrefix, Phase, OptionQuery>;

const STORAGE_ITEMS: &[&str] = &[
	"Account",
	"ExtrinsicCount",
	"BlockWeight",
	"AllExtrinsicsLen",
	"BlockHash",
	"ExtrinsicData",
	"Number",
	"ParentHash",
	"Events",
	"EventCount",
	"ExecutionPhase",
];

/// Event for the System module.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event<T: Config> {
	/// An extrinsic completed successfully.
	ExtrinsicSuccess { dispatch_info: DispatchInfo },
	/// An extrinsic failed.
	ExtrinsicFailed { dispatch_error: DispatchError, dispatch_info: DispatchInfo },
	/// `:code` was updated.
	CodeUpdated,
	/// A new account was created.
	NewAccount { account: T::AccountId },
	/// An account was reaped.
	KilledAccount { account: T::AccountId },
	/// On on-chain remark happened.
	Remarked { sender: T::AccountId, hash: H256 },
}

impl<T: Config> Event<T> {
	/// Names and indices of every event of the module.
	pub fn metadata() -> Vec<ItemMetadata> {
		vec![
			ItemMetadata::new("ExtrinsicSuccess", 0),
			ItemMetadata::new("ExtrinsicFailed", 1),
			ItemMetadata::new("CodeUpdated", 2),
			ItemMetadata::new("NewAccount", 3),
			ItemMetadata::new("KilledAccount", 4),
			ItemMetadata::new("Remarked", 5),
		]
	}
}

impl<T: Config> Encode for Event<T> {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		match self {
			Event::ExtrinsicSuccess { dispatch_info } => {
				dest.push_byte(0);
				dispatch_info.encode_to(dest);
			},
			Event::ExtrinsicFailed { dispatch_error, dispatch_info } => {
				dest.push_byte(1);
				dispatch_error.encode_to(dest);
				dispatch_info.encode_to(dest);
			},
			Event::CodeUpdated => dest.push_byte(2),
			Event::NewAccount { account } => {
				dest.push_byte(3);
				account.encode_to(dest);
			},
			Event::KilledAccount { account } => {
				dest.push_byte(4);
				account.encode_to(dest);
			},
			Event::Remarked { sender, hash } => {
				dest.push_byte(5);
				sender.encode_to(dest);
				hash.encode_to(dest);
			},
		}
	}
}

impl<T: Config> Decode for Event<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let index = input.read_byte().map_err(|e| e.expecting("Event"))?;
		let event = match index {
			0 => Event::ExtrinsicSuccess { dispatch_info: Decode::decode(input)? },
			1 => Event::ExtrinsicFailed {
				dispatch_error: Decode::decode(input)?,
				dispatch_info: Decode::decode(input)?,
			},
			2 => Event::CodeUpdated,
			3 => Event::NewAccount { account: Decode::decode(input)? },
			4 => Event::KilledAccount { account: Decode::decode(input)? },
			5 => Event::Remarked { sender: Decode::decode(input)?, hash: Decode::decode(input)? },
			_ => return Err(CodecError::unknown_variant("Event", index)),
		};
		Ok(event)
	}
}

decl_error! {
	/// Error for the System module
	pub enum Error for Pallet<T: Config> {
		/// The name of specification does not match between the current runtime
		/// and the new runtime.
		InvalidSpecName = 0,
		/// The specification version is not allowed to decrease between the current runtime
		/// and the new runtime.
		SpecVersionNeedsToIncrease = 1,
		/// Failed to extract the runtime version from the new runtime.
		///
		/// Either calling `Core_version` or decoding `RuntimeVersion` failed.
		FailedToExtractRuntimeVersion = 2,
		/// Suicide called when the account has non-default composite data.
		NonDefaultComposite = 3,
		/// There is a non-zero reference count preventing the account from being purged.
		NonZeroRefCount = 4,
		/// The origin filter prevent the call to be dispatched.
		CallFiltered = 5,
	}
}

/// Contains a variant per dispatchable extrinsic that this module has.
#[derive(Clone, PartialEq, Eq, Debug)]
#[allow(non_camel_case_types)]
pub enum Call<T: Config> {
	#[doc(hidden)]
	__Ignore(PhantomData<T>, Infallible),
	/// Make some on-chain remark.
	///
	/// Can be executed by every `origin`.
	remark { remark: Vec<u8> },
	/// Set the number of pages in the WebAssembly environment's heap.
	set_heap_pages { pages: u64 },
	/// Set some items of storage.
	set_storage { items: Vec<KeyValue> },
	/// Kill some items from storage.
	kill_storage { keys: Vec<Key> },
	/// Kill all storage items with a key that starts with the given prefix.
	///
	/// **NOTE:** We rely on the Root origin to provide us the number of subkeys under
	/// the prefix we are removing to accurately calculate the weight of this function.
	kill_prefix { prefix: Key, subkeys: u32 },
	/// Make some on-chain remark and emit event.
	remark_with_event { remark: Vec<u8> },
}

const CALL_NAMES: &[&str] = &[
	"remark",
	"set_heap_pages",
	"set_storage",
	"kill_storage",
	"kill_prefix",
	"remark_with_event",
];
const CALL_INDICES: &[u8] = &[0, 1, 4, 5, 6, 7];

impl<T: Config> Call<T> {
	/// Names and indices of every call of the module.
	pub fn metadata() -> Vec<ItemMetadata> {
		CALL_NAMES
			.iter()
			.zip(CALL_INDICES)
			.map(|(name, index)| ItemMetadata::new(*name, *index))
			.collect()
	}
}

impl<T: Config> GetCallName for Call<T> {
	fn get_call_names() -> &'static [&'static str] {
		CALL_NAMES
	}

	fn get_call_name(&self) -> &'static str {
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::remark { .. } => "remark",
			Self::set_heap_pages { .. } => "set_heap_pages",
			Self::set_storage { .. } => "set_storage",
			Self::kill_storage { .. } => "kill_storage",
			Self::kill_prefix { .. } => "kill_prefix",
			Self::remark_with_event { .. } => "remark_with_event",
		}
	}
}

impl<T: Config> GetCallIndex for Call<T> {
	fn get_call_indices() -> &'static [u8] {
		CALL_INDICES
	}

	fn get_call_index(&self) -> u8 {
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::remark { .. } => 0,
			Self::set_heap_pages { .. } => 1,
			Self::set_storage { .. } => 4,
			Self::kill_storage { .. } => 5,
			Self::kill_prefix { .. } => 6,
			Self::remark_with_event { .. } => 7,
		}
	}
}

impl<T: Config> Encode for Call<T> {
	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		dest.push_byte(self.get_call_index());
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::remark { remark } | Self::remark_with_event { remark } => remark.encode_to(dest),
			Self::set_heap_pages { pages } => pages.encode_to(dest),
			Self::set_storage { items } => items.encode_to(dest),
			Self::kill_storage { keys } => keys.encode_to(dest),
			Self::kill_prefix { prefix, subkeys } => {
				prefix.encode_to(dest);
				subkeys.encode_to(dest);
			},
		}
	}
}

impl<T: Config> Decode for Call<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, CodecError> {
		let index = input.read_byte().map_err(|e| e.expecting("Call"))?;
		let call = match index {
			0 => Self::remark {
				remark: Decode::decode(input).map_err(|e| e.expecting("Call::remark"))?,
			},
			1 => Self::set_heap_pages {
				pages: Decode::decode(input).map_err(|e| e.expecting("Call::set_heap_pages"))?,
			},
			4 => Self::set_storage {
				items: Decode::decode(input).map_err(|e| e.expecting("Call::set_storage"))?,
			},
			5 => Self::kill_storage {
				keys: Decode::decode(input).map_err(|e| e.expecting("Call::kill_storage"))?,
			},
			6 => Self::kill_prefix {
				prefix: Decode::decode(input).map_err(|e| e.expecting("Call::kill_prefix"))?,
				subkeys: Decode::decode(input).map_err(|e| e.expecting("Call::kill_prefix"))?,
			},
			7 => Self::remark_with_event {
				remark: Decode::decode(input)
					.map_err(|e| e.expecting("Call::remark_with_event"))?,
			},
			_ => return Err(CodecError::unknown_variant("Call", index)),
		};
		Ok(call)
	}
}

impl<T: Config> GetDispatchInfo for Call<T> {
	fn get_dispatch_info(&self) -> DispatchInfo {
		match self {
			Self::__Ignore(_, never) => match *never {},
			Self::remark { remark } =>
				DispatchInfo::from_annotation(T::SystemWeightInfo::remark(remark.len() as u32), ()),
			Self::set_heap_pages { .. } => DispatchInfo::from_annotation(
				(T::SystemWeightInfo::set_heap_pages(), DispatchClass::Operational),
				(),
			),
			Self::set_storage { items } => DispatchInfo::from_annotation(
				(T::SystemWeightInfo::set_storage(items.len() as u32), DispatchClass::Operational),
				(),
			),
			Self::kill_storage { keys } => DispatchInfo::from_annotation(
				(T::SystemWeightInfo::kill_storage(keys.len() as u32), DispatchClass::Operational),
				(),
			),
			Self::kill_prefix { subkeys, .. } => DispatchInfo::from_annotation(
				(
					T::SystemWeightInfo::kill_prefix(subkeys.saturating_add(1)),
					DispatchClass::Operational,
				),
				(),
			),
			Self::remark_with_event { remark } => DispatchInfo::from_annotation(
				T::SystemWeightInfo::remark_with_event(remark.len() as u32),
				(),
			),
		}
	}
}

impl<T: Config> UnfilteredDispatchable for Call<T> {
	type RuntimeOrigin = OriginFor<T>;

	fn dispatch_bypass_filter(
		self,
		ext: &mut Externalities,
		origin: Self::RuntimeOrigin,
	) -> DispatchResultWithPostInfo {
		match self {
			Self::__Ignore(_, never) => match never {},
			Self::remark { remark } => Pallet::<T>::remark(origin, remark),
			Self::set_heap_pages { pages } => Pallet::<T>::set_heap_pages(ext, origin, pages),
			Self::set_storage { items } => Pallet::<T>::set_storage(ext, origin, items),
			Self::kill_storage { keys } => Pallet::<T>::kill_storage(ext, origin, keys),
			Self::kill_prefix { prefix, subkeys } =>
				Pallet::<T>::kill_prefix(ext, origin, prefix, subkeys),
			Self::remark_with_event { remark } =>
				Pallet::<T>::remark_with_event(ext, origin, remark),
		}
	}
}

// Dispatchable functions.
impl<T: Config> Pallet<T> {
	/// Make some on-chain remark.
	///
	/// Can be executed by every `origin`.
	pub fn remark(origin: OriginFor<T>, _remark: Vec<u8>) -> DispatchResultWithPostInfo {
		let _ = ensure_signed_or_root(origin)?;
		Ok(().into())
	}

	/// Set the number of pages in the WebAssembly environment's heap.
	pub fn set_heap_pages(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		pages: u64,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		unhashed::put_raw(ext, well_known_keys::HEAP_PAGES, &pages.encode());
		Ok(().into())
	}

	/// Set some items of storage.
	pub fn set_storage(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		items: Vec<KeyValue>,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		for i in &items {
			unhashed::put_raw(ext, &i.0, &i.1);
		}
		Ok(().into())
	}

	/// Kill some items from storage.
	pub fn kill_storage(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		keys: Vec<Key>,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		for key in &keys {
			unhashed::kill(ext, key);
		}
		Ok(().into())
	}

	/// Kill all storage items with a key that starts with the given prefix.
	///
	/// At most `subkeys` items are removed.
	pub fn kill_prefix(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		prefix: Key,
		subkeys: u32,
	) -> DispatchResultWithPostInfo {
		ensure_root(origin)?;
		let _ = unhashed::clear_prefix(ext, &prefix, Some(subkeys));
		Ok(().into())
	}

	/// Make some on-chain remark and emit event.
	pub fn remark_with_event(
		ext: &mut Externalities,
		origin: OriginFor<T>,
		remark: Vec<u8>,
	) -> DispatchResultWithPostInfo {
		let who = ensure_signed(origin)?;
		let hash = blake2_256_hash(&remark[..]);
		Self::deposit_event(ext, Event::Remarked { sender: who, hash });
		Ok(().into())
	}
}

impl<T: Config> PalletInfoAccess for Pallet<T> {
	fn index() -> usize {
		T::PalletInfo::index::<Self>().expect(
			"Pallet is part of the runtime because pallet `Config` trait is \
			implemented by the runtime; qed",
		)
	}

	fn name() -> &'static str {
		T::PalletInfo::name::<Self>().expect(
			"Pallet is part of the runtime because pallet `Config` trait is \
			implemented by the runtime; qed",
		)
	}
}

impl<T: Config> OnInitialize<BlockNumber> for Pallet<T> {}

impl<T: Config> OnFinalize<BlockNumber> for Pallet<T> {}

impl<T: Config> IntegrityTest for Pallet<T> {
	fn integrity_test() {
		T::BlockWeights::get().validate().expect("The weights are invalid.");
	}
}

/// Genesis configuration of the System module.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct GenesisConfig<T: Config> {
	#[cfg_attr(feature = "std", serde(skip))]
	pub _config: PhantomData<T>,
}

impl<T: Config> Default for GenesisConfig<T> {
	fn default() -> Self {
		Self { _config: PhantomData }
	}
}

impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
	fn build(&self, ext: &mut Externalities) {
		BlockHash::insert(ext, &0, hash69());
		ParentHash::put(ext, hash69());
		unhashed::put(ext, well_known_keys::EXTRINSIC_INDEX, &0u32);
	}
}

/// The block hash the genesis block is anchored to.
pub fn hash69() -> H256 {
	H256::repeat_byte(69)
}

/// Ensure that the origin `o` represents a signed extrinsic (i.e. transaction).
/// Returns `Ok` with the account that signed the extrinsic or an `Err` otherwise.
pub fn ensure_signed<AccountId>(o: RawOrigin<AccountId>) -> Result<AccountId, BadOrigin> {
	match o {
		RawOrigin::Signed(t) => Ok(t),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents either a signed extrinsic (i.e. transaction) or the root.
/// Returns `Ok` with the account that signed the extrinsic, `None` if it was root,  or an `Err`
/// otherwise.
pub fn ensure_signed_or_root<AccountId>(
	o: RawOrigin<AccountId>,
) -> Result<Option<AccountId>, BadOrigin> {
	match o {
		RawOrigin::Root => Ok(None),
		RawOrigin::Signed(t) => Ok(Some(t)),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents the root. Returns `Ok` or an `Err` otherwise.
pub fn ensure_root<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::Root => Ok(()),
		_ => Err(BadOrigin),
	}
}

/// Ensure that the origin `o` represents an unsigned extrinsic. Returns `Ok` or an `Err` otherwise.
pub fn ensure_none<AccountId>(o: RawOrigin<AccountId>) -> Result<(), BadOrigin> {
	match o {
		RawOrigin::None => Ok(()),
		_ => Err(BadOrigin),
	}
}

impl<T: Config> Pallet<T> {
	/// Returns the `spec_version` of the last runtime upgrade.
	pub fn runtime_version() -> RuntimeVersion {
		T::Version::get()
	}

	/// Retrieve the account transaction counter from storage.
	pub fn account_nonce(ext: &Externalities, who: &T::AccountId) -> Nonce {
		Account::<T>::get(ext, who).nonce
	}

	/// Increment a particular account's nonce by 1.
	pub fn inc_account_nonce(ext: &mut Externalities, who: &T::AccountId) {
		Account::<T>::mutate(ext, who, |a| a.nonce = a.nonce.saturating_add(1));
	}

	/// The full account information of `who`.
	pub fn account(ext: &Externalities, who: &T::AccountId) -> AccountInfo<T::AccountData> {
		Account::<T>::get(ext, who)
	}

	/// True if the account has any reference keeping it alive.
	pub fn account_exists(ext: &Externalities, who: &T::AccountId) -> bool {
		Account::<T>::contains_key(ext, who)
	}

	/// An account is being created.
	fn on_created_account(ext: &mut Externalities, who: T::AccountId) {
		T::OnNewAccount::on_new_account(ext, &who);
		Self::deposit_event(ext, Event::NewAccount { account: who });
	}

	/// Do anything that needs to be done after an account has been killed.
	fn on_killed_account(ext: &mut Externalities, who: T::AccountId) {
		T::OnKilledAccount::on_killed_account(ext, &who);
		Self::deposit_event(ext, Event::KilledAccount { account: who });
	}

	/// True if some other module still depends on the existence of `who`.
	pub fn is_provider_required(ext: &Externalities, who: &T::AccountId) -> bool {
		Account::<T>::get(ext, who).consumers != 0
	}

	/// Increment the provider reference counter on an account.
	pub fn inc_providers(ext: &mut Externalities, who: &T::AccountId) -> IncRefStatus {
		let status = Account::<T>::mutate(ext, who, |a| {
			if a.providers == 0 && a.sufficients == 0 {
				// Account is being created.
				a.providers = 1;
				IncRefStatus::Created
			} else {
				a.providers = a.providers.saturating_add(1);
				IncRefStatus::Existed
			}
		});
		if status == IncRefStatus::Created {
			Self::on_created_account(ext, who.clone());
		}
		status
	}

	/// Decrement the provider reference counter on an account.
	///
	/// This *MUST* only be done once for every time you called `inc_providers` on `who`.
	pub fn dec_providers(
		ext: &mut Externalities,
		who: &T::AccountId,
	) -> Result<DecRefStatus, DispatchError> {
		let (status, killed) = Account::<T>::try_mutate_exists(ext, who, |maybe_account| {
			if let Some(mut account) = maybe_account.take() {
				if account.providers == 0 {
					// Logic error - cannot decrement beyond zero.
					log::error!(
						target: LOG_TARGET,
						"Logic error: Unexpected underflow in reducing provider",
					);
					account.providers = 1;
				}
				match (account.providers, account.consumers, account.sufficients) {
					(1, 0, 0) => {
						// No providers left (and no consumers) and no sufficients. Account dead.
						Ok((DecRefStatus::Reaped, true))
					},
					(1, c, _) if c > 0 => {
						// Cannot remove last provider if there are consumers.
						Err(DispatchError::ConsumerRemaining)
					},
					(x, _, _) => {
						// Account will continue to exist as there is either > 1 provider or
						// > 0 sufficients.
						account.providers = x - 1;
						*maybe_account = Some(account);
						Ok((DecRefStatus::Exists, false))
					},
				}
			} else {
				log::error!(
					target: LOG_TARGET,
					"Logic error: Account already dead when reducing provider",
				);
				Ok((DecRefStatus::Reaped, false))
			}
		})?;
		if killed {
			Self::on_killed_account(ext, who.clone());
		}
		Ok(status)
	}

	/// Increment the self-sufficient reference counter on an account.
	pub fn inc_sufficients(ext: &mut Externalities, who: &T::AccountId) -> IncRefStatus {
		let status = Account::<T>::mutate(ext, who, |a| {
			if a.providers + a.sufficients == 0 {
				// Account is being created.
				a.sufficients = 1;
				IncRefStatus::Created
			} else {
				a.sufficients = a.sufficients.saturating_add(1);
				IncRefStatus::Existed
			}
		});
		if status == IncRefStatus::Created {
			Self::on_created_account(ext, who.clone());
		}
		status
	}

	/// Decrement the sufficients reference counter on an account.
	///
	/// This *MUST* only be done once for every time you called `inc_sufficients` on `who`.
	pub fn dec_sufficients(ext: &mut Externalities, who: &T::AccountId) -> DecRefStatus {
		let (status, killed) = Account::<T>::mutate_exists(ext, who, |maybe_account| {
			if let Some(mut account) = maybe_account.take() {
				if account.sufficients == 0 {
					// Logic error - cannot decrement beyond zero.
					log::error!(
						target: LOG_TARGET,
						"Logic error: Unexpected underflow in reducing sufficients",
					);
				}
				match (account.sufficients, account.providers) {
					(0, 0) | (1, 0) => (DecRefStatus::Reaped, true),
					(x, _) => {
						account.sufficients = x.saturating_sub(1);
						*maybe_account = Some(account);
						(DecRefStatus::Exists, false)
					},
				}
			} else {
				log::error!(
					target: LOG_TARGET,
					"Logic error: Account already dead when reducing provider",
				);
				(DecRefStatus::Reaped, false)
			}
		});
		if killed {
			Self::on_killed_account(ext, who.clone());
		}
		status
	}

	/// The number of outstanding provider references for the account `who`.
	pub fn providers(ext: &Externalities, who: &T::AccountId) -> RefCount {
		Account::<T>::get(ext, who).providers
	}

	/// The number of outstanding sufficient references for the account `who`.
	pub fn sufficients(ext: &Externalities, who: &T::AccountId) -> RefCount {
		Account::<T>::get(ext, who).sufficients
	}

	/// The number of outstanding provider and sufficient references for the account `who`.
	pub fn reference_count(ext: &Externalities, who: &T::AccountId) -> RefCount {
		let a = Account::<T>::get(ext, who);
		a.providers + a.sufficients
	}

	/// Increment the reference counter on an account.
	///
	/// The account `who`'s `providers` must be non-zero and the current number of consumers must
	/// be less than `MaxConsumers` or this will return an error.
	pub fn inc_consumers(ext: &mut Externalities, who: &T::AccountId) -> Result<(), DispatchError> {
		Account::<T>::try_mutate(ext, who, |a| {
			if a.providers > 0 {
				if a.consumers < T::MaxConsumers::get() {
					a.consumers = a.consumers.saturating_add(1);
					Ok(())
				} else {
					Err(DispatchError::TooManyConsumers)
				}
			} else {
				Err(DispatchError::NoProviders)
			}
		})
	}

	/// Decrement the reference counter on an account. This *MUST* only be done once for every time
	/// you called `inc_consumers` on `who`.
	pub fn dec_consumers(ext: &mut Externalities, who: &T::AccountId) {
		Account::<T>::mutate_exists(ext, who, |maybe_account| match maybe_account {
			Some(a) if a.consumers > 0 => a.consumers -= 1,
			_ => {
				log::error!(
					target: LOG_TARGET,
					"Logic error: Unexpected underflow in reducing consumer",
				);
			},
		})
	}

	/// The number of outstanding references for the account `who`.
	pub fn consumers(ext: &Externalities, who: &T::AccountId) -> RefCount {
		Account::<T>::get(ext, who).consumers
	}

	/// True if the account has no outstanding consumer references or more than one provider.
	pub fn can_dec_provider(ext: &Externalities, who: &T::AccountId) -> bool {
		let a = Account::<T>::get(ext, who);
		a.consumers == 0 || a.providers > 1
	}

	/// True if the account has at least one provider reference and adding `amount` consumer
	/// references would not take it above the the maximum.
	pub fn can_accrue_consumers(ext: &Externalities, who: &T::AccountId, amount: u32) -> bool {
		let a = Account::<T>::get(ext, who);
		match a.consumers.checked_add(amount) {
			Some(c) => a.providers > 0 && c <= T::MaxConsumers::get(),
			None => false,
		}
	}

	/// True if the account has at least one provider reference and fewer consumer references than
	/// the maximum.
	pub fn can_inc_consumer(ext: &Externalities, who: &T::AccountId) -> bool {
		Self::can_accrue_consumers(ext, who, 1)
	}

	/// Deposits an event into this block's event record.
	///
	/// Events deposited while the block number is zero are dropped.
	pub fn deposit_event(ext: &mut Externalities, event: impl Into<T::RuntimeEvent>) {
		Self::deposit_event_indexed(ext, &[], event.into());
	}

	/// Deposits an event into this block's event record adding this event
	/// to the corresponding topic indexes.
	///
	/// This will update storage entries that correspond to the specified topics.
	/// It is expected that light-clients could subscribe to this topics.
	///
	/// Events deposited while the block number is zero are dropped.
	pub fn deposit_event_indexed(ext: &mut Externalities, topics: &[H256], event: T::RuntimeEvent) {
		let block_number = Self::block_number(ext);

		// Don't populate events on genesis.
		if block_number == 0 {
			return
		}

		let phase = ExecutionPhase::get(ext).unwrap_or_default();
		let event = EventRecord { phase, event, topics: topics.to_vec() };

		let old_event_count = EventCount::get(ext);
		let new_event_count = match old_event_count.checked_add(1) {
			// We've reached the maximum number of events at this block, just
			// don't do anything and leave the event_count unaltered.
			None => return,
			Some(nc) => nc,
		};
		EventCount::put(ext, new_event_count);

		Events::<T>::append(ext, event);
	}

	/// Gets the index of extrinsic that is currently executing.
	pub fn extrinsic_index(ext: &Externalities) -> Option<u32> {
		unhashed::get(ext, well_known_keys::EXTRINSIC_INDEX)
	}

	/// Gets extrinsics count.
	pub fn extrinsic_count(ext: &Externalities) -> u32 {
		ExtrinsicCount::get(ext).unwrap_or_default()
	}

	/// Gets the length of all extrinsics applied so far in this block.
	pub fn all_extrinsics_len(ext: &Externalities) -> u32 {
		AllExtrinsicsLen::get(ext).unwrap_or_default()
	}

	/// The current weight for the block.
	pub fn block_weight(ext: &Externalities) -> ConsumedWeight {
		BlockWeight::get(ext)
	}

	/// The current block number being processed.
	pub fn block_number(ext: &Externalities) -> BlockNumber {
		Number::get(ext)
	}

	/// Hash of the previous block.
	pub fn parent_hash(ext: &Externalities) -> H256 {
		ParentHash::get(ext)
	}

	/// Hash of the block numbered `n`, if it is still in the pruning window.
	pub fn block_hash(ext: &Externalities, n: BlockNumber) -> H256 {
		BlockHash::get(ext, &n)
	}

	/// The execution phase of the block, if a block is being executed.
	pub fn execution_phase(ext: &Externalities) -> Option<Phase> {
		ExecutionPhase::get(ext)
	}

	/// Get the current events deposited by the runtime.
	///
	/// NOTE: This should only be used in tests. Reading events from the runtime can have a large
	/// impact on the PoV size of a block. Users should use alternative and well bounded storage
	/// items for any behavior like this.
	pub fn read_events_no_consensus(ext: &Externalities) -> Vec<EventRecord<T::RuntimeEvent>> {
		Events::<T>::get(ext)
	}

	/// Inform the system module of some additional weight that should be accounted for, in the
	/// current block.
	///
	/// NOTE: use with extra care; this function is made public only be used for certain modules
	/// that need it. A runtime that does not have dynamic calls should never need this and should
	/// stick to static weights. A typical use case for this is inner calls or smart contract calls.
	/// Furthermore, it only makes sense to use this when it is presumably  _cheap_ to provide the
	/// argument `weight`; In other words, if this function is to be used to account for some
	/// unknown, user provided call's weight, it would only make sense to use it if you are sure you
	/// can rapidly compute the weight of the inner call.
	///
	/// Even more dangerous is to note that this function does NOT take any action, if the new sum
	/// of block weight is more than the block weight limit. This is what the _unchecked_.
	///
	/// Another potential use-case could be for the `on_initialize` and `on_finalize` hooks.
	pub fn register_extra_weight_unchecked(
		ext: &mut Externalities,
		weight: Weight,
		class: DispatchClass,
	) {
		BlockWeight::mutate(ext, |current_weight| {
			current_weight.accrue(weight, class);
		});
	}

	/// Start the execution of a particular block.
	pub fn initialize(ext: &mut Externalities, number: BlockNumber, parent_hash: &H256) {
		// populate environment
		ExecutionPhase::put(ext, Phase::Initialization);
		unhashed::put(ext, well_known_keys::EXTRINSIC_INDEX, &0u32);
		Number::put(ext, number);
		ParentHash::put(ext, *parent_hash);
		BlockHash::insert(ext, &number.saturating_sub(1), *parent_hash);

		// Remove previous block data from storage
		BlockWeight::kill(ext);
	}

	/// Remove temporary "environment" entries in storage, compute the storage root and return the
	/// resulting header for this block.
	pub fn finalize(ext: &mut Externalities) -> Header {
		let block_weight = Self::block_weight(ext);
		let weights = T::BlockWeights::get();
		let normal_limit = weights.get(DispatchClass::Normal).max_total.unwrap_or(weights.max_block);
		let len_limit = *T::BlockLength::get().max.get(DispatchClass::Normal);
		log::debug!(
			target: LOG_TARGET,
			"[{}] {} extrinsics, length: {} (normal {}%) / normal weight: {} ({}%) op weight {} / \
			 mandatory weight {}",
			Self::block_number(ext),
			Self::extrinsic_count(ext),
			Self::all_extrinsics_len(ext),
			percent_of(Self::all_extrinsics_len(ext) as u64, len_limit as u64),
			block_weight.get(DispatchClass::Normal),
			percent_of(block_weight.get(DispatchClass::Normal).ref_time(), normal_limit.ref_time()),
			block_weight.get(DispatchClass::Operational),
			block_weight.get(DispatchClass::Mandatory),
		);
		ExecutionPhase::kill(ext);
		AllExtrinsicsLen::kill(ext);

		// The following fields
		//
		// - <Events<T>>
		// - <EventCount<T>>
		// - <Number<T>>
		// - <ParentHash<T>>
		//
		// stay to be inspected by the client and will be cleared by `Self::initialize`.
		let number = Self::block_number(ext);
		let parent_hash = Self::parent_hash(ext);
		let extrinsics = (0..ExtrinsicCount::take(ext).unwrap_or_default())
			.map(|i| ExtrinsicData::take(ext, &i))
			.collect::<Vec<_>>();
		let extrinsics_root = ordered_root(&extrinsics);

		// move block hash pruning window by one block
		let block_hash_count = T::BlockHashCount::get();
		let to_remove = number.saturating_sub(block_hash_count).saturating_sub(1);

		// keep genesis hash
		if to_remove != 0 {
			BlockHash::remove(ext, &to_remove);
		}

		let storage_root = ext.storage_root();

		Header::new(number, extrinsics_root, storage_root, parent_hash)
	}

	/// Reset events.
	///
	/// This needs to be used in prior calling [`initialize`](Self::initialize) for each new block
	/// to clear events from previous block.
	pub fn reset_events(ext: &mut Externalities) {
		Events::<T>::kill(ext);
		EventCount::kill(ext);
	}

	/// To be called immediately after an extrinsic has been applied.
	///
	/// Emits an `ExtrinsicSuccess` or `ExtrinsicFailed` event depending on the outcome.
	/// The emitted event contains the post-dispatch corrected weight including
	/// the base-weight for its dispatch class.
	pub fn note_applied_extrinsic(
		ext: &mut Externalities,
		r: &DispatchResultWithPostInfo,
		mut info: DispatchInfo,
	) {
		info.weight = extract_actual_weight(r, &info)
			.saturating_add(T::BlockWeights::get().get(info.class).base_extrinsic);
		info.pays_fee = extract_actual_pays_fee(r, &info);

		let event = match r {
			Ok(_) => Event::ExtrinsicSuccess { dispatch_info: info },
			Err(err) => {
				log::trace!(
					target: LOG_TARGET,
					"Extrinsic failed at block({:?}): {:?}",
					Self::block_number(ext),
					err,
				);
				Event::ExtrinsicFailed { dispatch_error: err.error.clone(), dispatch_info: info }
			},
		};
		Self::deposit_event(ext, event);

		let next_extrinsic_index = Self::extrinsic_index(ext).unwrap_or_default() + 1u32;

		unhashed::put(ext, well_known_keys::EXTRINSIC_INDEX, &next_extrinsic_index);
		ExecutionPhase::put(ext, Phase::ApplyExtrinsic(next_extrinsic_index));
	}

	/// To be called immediately after `note_applied_extrinsic` of the last extrinsic of the block
	/// has been called.
	pub fn note_finished_extrinsics(ext: &mut Externalities) {
		let extrinsic_index: u32 =
			unhashed::take(ext, well_known_keys::EXTRINSIC_INDEX).unwrap_or_default();
		ExtrinsicCount::put(ext, extrinsic_index);
		ExecutionPhase::put(ext, Phase::Finalization);
	}

	/// To be called immediately after finishing the initialization of the block
	/// (e.g., called `on_initialize` for all modules).
	pub fn note_finished_initialize(ext: &mut Externalities) {
		ExecutionPhase::put(ext, Phase::ApplyExtrinsic(0))
	}

	/// Note what the extrinsic data of the current extrinsic index is.
	///
	/// This is required to be called before applying an extrinsic. The data will used
	/// in [`Self::finalize`] to calculate the correct extrinsics root.
	pub fn note_extrinsic(ext: &mut Externalities, encoded_xt: Vec<u8>) {
		let index = Self::extrinsic_index(ext).unwrap_or_default();
		ExtrinsicData::insert(ext, &index, encoded_xt);
	}

	/// Everything the module exposes to the outside.
	pub fn metadata() -> ModuleMetadata {
		ModuleMetadata {
			name: <Self as PalletInfoAccess>::name(),
			index: <Self as PalletInfoAccess>::index() as u8,
			calls: Call::<T>::metadata(),
			events: Event::<T>::metadata(),
			errors: Error::<T>::metadata(),
			storage: STORAGE_ITEMS.to_vec(),
			constants: vec![
				ConstantMetadata { name: "BlockWeights", value: T::BlockWeights::get().encode() },
				ConstantMetadata { name: "BlockLength", value: T::BlockLength::get().encode() },
				ConstantMetadata {
					name: "BlockHashCount",
					value: T::BlockHashCount::get().encode(),
				},
				ConstantMetadata { name: "DbWeight", value: T::DbWeight::get().encode() },
				ConstantMetadata { name: "Version", value: T::Version::get().encode() },
			],
		}
	}
}

fn percent_of(part: u64, whole: u64) -> u64 {
	if whole == 0 {
		return 0
	}
	((part as u128) * 100 / (whole as u128)) as u64
}

/// Helpers for tests and benchmarks.
#[cfg(any(feature = "std", test))]
impl<T: Config> Pallet<T> {
	/// Set the block number to something in particular. Can be used as an alternative to
	/// `initialize` for tests that don't need to bother with the other environment entries.
	pub fn set_block_number(ext: &mut Externalities, n: BlockNumber) {
		Number::put(ext, n);
	}

	/// Sets the index of extrinsic that is currently executing.
	pub fn set_extrinsic_index(ext: &mut Externalities, extrinsic_index: u32) {
		unhashed::put(ext, well_known_keys::EXTRINSIC_INDEX, &extrinsic_index)
	}

	/// Set the parent hash number to something in particular. Can be used as an alternative to
	/// `initialize` for tests that don't need to bother with the other environment entries.
	pub fn set_parent_hash(ext: &mut Externalities, n: H256) {
		ParentHash::put(ext, n);
	}

	/// Set the current block weight. This should only be used in some integration tests.
	pub fn set_block_consumed_resources(ext: &mut Externalities, weight: Weight, len: usize) {
		BlockWeight::mutate(ext, |current_weight| {
			current_weight.set(weight, DispatchClass::Normal)
		});
		AllExtrinsicsLen::put(ext, len as u32);
	}

	/// Get the current events deposited by the runtime.
	pub fn events(ext: &Externalities) -> Vec<EventRecord<T::RuntimeEvent>> {
		Self::read_events_no_consensus(ext)
	}

	/// Get the basic externalities for this module, useful for tests.
	pub fn externalities() -> Externalities {
		let mut ext = Externalities::default();
		BlockHash::insert(&mut ext, &0, hash69());
		Number::put(&mut ext, 1);
		ParentHash::put(&mut ext, hash69());
		ext
	}

	/// Assert the given `event` exists.
	pub fn assert_has_event(ext: &Externalities, event: T::RuntimeEvent) {
		let events = Self::events(ext);
		assert!(
			events.iter().any(|record| record.event == event),
			"expected event {:?} not found in events {:?}",
			event,
			events,
		);
	}

	/// Assert the last event equal to the given `event`.
	pub fn assert_last_event(ext: &Externalities, event: T::RuntimeEvent) {
		let events = Self::events(ext);
		let last_event = events.last().map(|record| &record.event);
		assert_eq!(last_event, Some(&event), "expected event {:?} is not equal to the last event", event);
	}
}

/// Account data stored in the System module, with provider bookkeeping: data that becomes
/// non-default takes a provider reference, and data returning to its default releases it.
impl<T: Config> StoredMap<T::AccountId, T::AccountData> for Pallet<T> {
	fn get(ext: &Externalities, k: &T::AccountId) -> T::AccountData {
		Account::<T>::get(ext, k).data
	}

	fn try_mutate_exists<R, E: From<DispatchError>>(
		ext: &mut Externalities,
		k: &T::AccountId,
		f: impl FnOnce(&mut Option<T::AccountData>) -> Result<R, E>,
	) -> Result<R, E> {
		let account = Account::<T>::get(ext, k);
		let was_providing = account.data != T::AccountData::default();
		let mut some_data = if was_providing { Some(account.data) } else { None };
		let result = f(&mut some_data)?;
		let is_providing = some_data.is_some();
		if !was_providing && is_providing {
			Self::inc_providers(ext, k);
		} else if was_providing && !is_providing {
			match Self::dec_providers(ext, k)? {
				DecRefStatus::Reaped => return Ok(result),
				DecRefStatus::Exists => {
					// Update value as normal...
				},
			}
		} else if !was_providing && !is_providing {
			return Ok(result)
		}
		Account::<T>::mutate(ext, k, |a| a.data = some_data.unwrap_or_default());
		Ok(result)
	}
}
