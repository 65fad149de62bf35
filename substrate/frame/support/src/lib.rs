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


//! # Support
//!
//! The support library holds everything a runtime module needs besides its own logic:
//!
//! - [`dispatch`]: dispatch information, origins and the call traits every module call
//!   implements.
//! - [`registry`]: the module registry the composed runtime resolves calls through.
//! - [`storage`]: typed storage items, hashers and transactional storage layers.
//! - [`traits`]: hooks, currencies, imbalances and other seams between modules.
//! - [`weights`]: fee conversion and the reference weight constants.
//!
//! Every function that touches state receives the [`Externalities`](tessera_primitives::Externalities)
//! it runs against; there is no ambient storage.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Private exports that are being used by macros.
///
/// The exports are not stable and should not be relied on.
#[doc(hidden)]
pub mod __private {
	pub use alloc::{string::String, vec, vec::Vec};
	pub use codec;
	pub use core::{convert::Infallible, marker::PhantomData};
	pub use impl_trait_for_tuples;
	pub use log;
	pub use paste;
	pub use serde;
	pub use serde_json;
	pub use tessera_primitives::{self, DispatchError, ModuleError, TransactionOutcome};
}

#[macro_use]
mod macros;

pub mod dispatch;
pub mod error;
pub mod hash;
pub mod registry;
pub mod storage;
pub mod traits;
pub mod weights;

pub use self::hash::{
	Blake2_128, Blake2_128Concat, Blake2_256, Hashable, Identity, ReversibleStorageHasher,
	StorageHasher, Twox128, Twox256, Twox64Concat,
};
pub use tessera_primitives::{ensure, fail};

/// The prelude every module starts from.
pub mod pallet_prelude {
	pub use crate::{
		decl_error, defensive,
		dispatch::{
			ClassifyDispatch, DispatchClass, DispatchError, DispatchInfo, DispatchResult,
			DispatchResultWithPostInfo, GetCallIndex, GetCallName, GetDispatchInfo, Pays, PaysFee,
			PostDispatchInfo, RawOrigin, UnfilteredDispatchable, WeighData, WithPostDispatchInfo,
		},
		ensure, fail,
		registry::{ItemMetadata, ModuleMetadata},
		storage::{
			types::{OptionQuery, StorageMap, StorageValue, ValueQuery},
			Blake2_128Concat, Identity, Twox64Concat,
		},
		traits::{
			BuildGenesisConfig, ConstU32, Get, GetDefault, OnFinalize, OnInitialize, PalletInfo,
			PalletInfoAccess,
		},
		weights::Weight,
	};
	pub use codec::{Compact, Decode, Encode, Input, Output};
	pub use core::marker::PhantomData;
	pub use tessera_primitives::{
		transaction_validity::{
			InvalidTransaction, TransactionSource, TransactionValidity, TransactionValidityError,
			ValidTransaction,
		},
		BlockNumber, Externalities,
	};
}
