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


//! Stuff to do with the runtime's storage.

pub use crate::{
	hash::{
		Blake2_128, Blake2_128Concat, Blake2_256, Identity, ReversibleStorageHasher,
		StorageHasher, Twox128, Twox256, Twox64Concat,
	},
	traits::StorageInstance,
};
pub use transactional::{with_storage_layer, with_transaction, with_transaction_opaque_err};

pub mod transactional;
pub mod types;
pub mod unhashed;

/// Returns the storage prefix for a specific pallet name and storage name.
///
/// The storage prefix is `concat(twox_128(pallet_name), twox_128(storage_name))`.
pub fn storage_prefix(pallet_name: &[u8], storage_name: &[u8]) -> [u8; 32] {
	let pallet_hash = sp_crypto_hashing::twox_128(pallet_name);
	let storage_hash = sp_crypto_hashing::twox_128(storage_name);

	let mut final_key = [0u8; 32];
	final_key[..16].copy_from_slice(&pallet_hash);
	final_key[16..].copy_from_slice(&storage_hash);

	final_key
}

/// Declare the [`StorageInstance`] types of a module.
///
/// Each generated type is a zero sized marker naming one storage item of the module.
///
/// ```
/// # use tessera_support::{generate_storage_instances, storage::{StorageInstance, types::StorageValue}};
/// generate_storage_instances!("Example", {
/// 	CounterPrefix => "Counter",
/// });
///
/// type Counter = StorageValue<CounterPrefix, u32>;
/// assert_eq!(CounterPrefix::pallet_prefix(), "Example");
/// assert_eq!(CounterPrefix::STORAGE_PREFIX, "Counter");
/// ```
#[macro_export]
macro_rules! generate_storage_instances {
	( $pallet:literal, { $( $(#[$attr:meta])* $name:ident => $item:literal ),* $(,)? } ) => {
		$(
			$(#[$attr])*
			#[doc(hidden)]
			pub struct $name;

			impl $crate::traits::StorageInstance for $name {
				fn pallet_prefix() -> &'static str {
					$pallet
				}
				const STORAGE_PREFIX: &'static str = $item;
			}
		)*
	};
}
