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


//! Storage value type. Implements the value accessors directly over the execution context.

use crate::{
	hash::{StorageHasher, Twox128},
	storage::{
		types::{OptionQuery, QueryKindTrait},
		unhashed,
	},
	traits::{Get, GetDefault, StorageInstance},
};
use alloc::vec::Vec;
use codec::{Compact, Encode, FullCodec};
use tessera_primitives::Externalities;

/// A type that allow to store a value.
///
/// Each value is stored at:
/// ```nocompile
/// Twox128(Prefix::pallet_prefix()) ++ Twox128(Prefix::STORAGE_PREFIX)
/// ```
pub struct StorageValue<Prefix, Value, QueryKind = OptionQuery, OnEmpty = GetDefault>(
	core::marker::PhantomData<(Prefix, Value, QueryKind, OnEmpty)>,
);

impl<Prefix, Value, QueryKind, OnEmpty> StorageValue<Prefix, Value, QueryKind, OnEmpty>
where
	Prefix: StorageInstance,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value, OnEmpty>,
	OnEmpty: Get<QueryKind::Query> + 'static,
{
	/// Get the storage key.
	pub fn hashed_key() -> [u8; 32] {
		let mut final_key = [0u8; 32];
		final_key[0..16].copy_from_slice(&Twox128::hash(Prefix::pallet_prefix().as_bytes()));
		final_key[16..32].copy_from_slice(&Twox128::hash(Prefix::STORAGE_PREFIX.as_bytes()));
		final_key
	}

	/// Does the value (explicitly) exist in storage?
	pub fn exists(ext: &Externalities) -> bool {
		unhashed::exists(ext, &Self::hashed_key())
	}

	/// Load the value from the provided storage instance.
	pub fn get(ext: &Externalities) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::get(ext, &Self::hashed_key()))
	}

	/// Try to get the underlying value from the provided storage instance.
	///
	/// Returns `Ok` if it exists, `Err` if not.
	pub fn try_get(ext: &Externalities) -> Result<Value, ()> {
		unhashed::get(ext, &Self::hashed_key()).ok_or(())
	}

	/// Store a value under this key into the provided storage instance.
	pub fn put(ext: &mut Externalities, val: Value) {
		unhashed::put(ext, &Self::hashed_key(), &val)
	}

	/// Store a value under this key into the provided storage instance.
	///
	/// this uses the query type rather than the underlying value.
	pub fn set(ext: &mut Externalities, val: QueryKind::Query) {
		match QueryKind::from_query_to_optional_value(val) {
			Some(ref val) => unhashed::put(ext, &Self::hashed_key(), val),
			None => unhashed::kill(ext, &Self::hashed_key()),
		}
	}

	/// Mutate the value
	pub fn mutate<R, F: FnOnce(&mut QueryKind::Query) -> R>(ext: &mut Externalities, f: F) -> R {
		let mut val = Self::get(ext);
		let ret = f(&mut val);
		Self::set(ext, val);
		ret
	}

	/// Mutate the value if closure returns `Ok`
	pub fn try_mutate<R, E, F: FnOnce(&mut QueryKind::Query) -> Result<R, E>>(
		ext: &mut Externalities,
		f: F,
	) -> Result<R, E> {
		let mut val = Self::get(ext);
		let ret = f(&mut val);
		if ret.is_ok() {
			Self::set(ext, val);
		}
		ret
	}

	/// Clear the storage value.
	pub fn kill(ext: &mut Externalities) {
		unhashed::kill(ext, &Self::hashed_key())
	}

	/// Take a value from storage, removing it afterwards.
	pub fn take(ext: &mut Externalities) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::take(ext, &Self::hashed_key()))
	}
}

impl<Prefix, Item, QueryKind, OnEmpty> StorageValue<Prefix, Vec<Item>, QueryKind, OnEmpty>
where
	Prefix: StorageInstance,
	Item: FullCodec,
	QueryKind: QueryKindTrait<Vec<Item>, OnEmpty>,
	OnEmpty: Get<QueryKind::Query> + 'static,
{
	/// Append the given item to the value in the storage.
	///
	/// Only the length prefix is rewritten, the existing items are not decoded.
	///
	/// # Warning
	///
	/// If the storage item is not encoded properly, the storage item will be overwritten and set
	/// to `[item]`. Any default value set for the storage item will be ignored on overwrite.
	pub fn append(ext: &mut Externalities, item: Item) {
		let key = Self::hashed_key();
		let appended = unhashed::get_raw(ext, &key).and_then(|raw| append_encoded(&raw, &item));
		match appended {
			Some(encoded) => unhashed::put_raw(ext, &key, &encoded),
			None => {
				if Self::exists(ext) {
					log::error!(
						target: "runtime::storage",
						"Corrupted state at `{}::{}`, overwriting on append",
						Prefix::pallet_prefix(),
						Prefix::STORAGE_PREFIX,
					);
				}
				unhashed::put(ext, &key, &alloc::vec![item]);
			},
		}
	}

	/// Read the length of the storage value without decoding the entire value.
	///
	/// Returns `None` if the value is absent or its length prefix is corrupted.
	pub fn decode_len(ext: &Externalities) -> Option<usize> {
		let raw = unhashed::get_raw(ext, &Self::hashed_key())?;
		codec::decode_with_remainder::<Compact<u32>>(&raw).ok().map(|(len, _)| len.0 as usize)
	}
}

/// Rewrite the compact length prefix of an encoded `Vec` and push `item` at the end.
pub(crate) fn append_encoded<Item: Encode>(raw: &[u8], item: &Item) -> Option<Vec<u8>> {
	let (len, items) = codec::decode_with_remainder::<Compact<u32>>(raw).ok()?;
	let new_len = len.0.checked_add(1)?;
	let mut encoded = Compact(new_len).encode();
	encoded.reserve(items.len() + item.size_hint());
	encoded.extend_from_slice(items);
	item.encode_to(&mut encoded);
	Some(encoded)
}
