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


//! Storage map type. Implements the map accessors and iteration directly over the execution
//! context.

use crate::{
	hash::{ReversibleStorageHasher, StorageHasher},
	storage::{
		types::{OptionQuery, QueryKindTrait},
		unhashed,
	},
	traits::{Get, GetDefault, StorageInstance},
};
use alloc::vec::Vec;
use codec::{Decode, Encode, FullCodec};
use tessera_primitives::Externalities;

/// A type that allow to store value for given key. Allowing to insert/remove/iterate on values.
///
/// Each value is stored at:
/// ```nocompile
/// Twox128(Prefix::pallet_prefix())
/// 	++ Twox128(Prefix::STORAGE_PREFIX)
/// 	++ Hasher1(encode(key))
/// ```
///
/// # Warning
///
/// If the keys are not trusted (e.g. can be set by a user), a cryptographic `hasher` such as
/// `blake2_128_concat` must be used. Otherwise, other values in storage can be compromised.
pub struct StorageMap<Prefix, Hasher, Key, Value, QueryKind = OptionQuery, OnEmpty = GetDefault>(
	core::marker::PhantomData<(Prefix, Hasher, Key, Value, QueryKind, OnEmpty)>,
);

impl<Prefix, Hasher, Key, Value, QueryKind, OnEmpty>
	StorageMap<Prefix, Hasher, Key, Value, QueryKind, OnEmpty>
where
	Prefix: StorageInstance,
	Hasher: StorageHasher,
	Key: FullCodec,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value, OnEmpty>,
	OnEmpty: Get<QueryKind::Query> + 'static,
{
	/// The prefix shared by every key of the map.
	pub fn final_prefix() -> [u8; 32] {
		Prefix::prefix_hash()
	}

	/// Get the storage key used to fetch a value corresponding to a specific key.
	pub fn hashed_key_for(key: &Key) -> Vec<u8> {
		let key_hashed = key.using_encoded(Hasher::hash);
		let mut final_key = Vec::with_capacity(32 + key_hashed.as_ref().len());
		final_key.extend_from_slice(&Self::final_prefix());
		final_key.extend_from_slice(key_hashed.as_ref());
		final_key
	}

	/// Does the value (explicitly) exist in storage?
	pub fn contains_key(ext: &Externalities, key: &Key) -> bool {
		unhashed::exists(ext, &Self::hashed_key_for(key))
	}

	/// Load the value associated with the given key from the map.
	pub fn get(ext: &Externalities, key: &Key) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::get(ext, &Self::hashed_key_for(key)))
	}

	/// Try to get the value for the given key from the map.
	///
	/// Returns `Ok` if it exists, `Err` if not.
	pub fn try_get(ext: &Externalities, key: &Key) -> Result<Value, ()> {
		unhashed::get(ext, &Self::hashed_key_for(key)).ok_or(())
	}

	/// Store a value to be associated with the given key from the map.
	pub fn insert(ext: &mut Externalities, key: &Key, val: Value) {
		unhashed::put(ext, &Self::hashed_key_for(key), &val)
	}

	/// Store the query value under a key, removing the entry when it maps to no value.
	pub fn set(ext: &mut Externalities, key: &Key, val: QueryKind::Query) {
		let final_key = Self::hashed_key_for(key);
		match QueryKind::from_query_to_optional_value(val) {
			Some(ref val) => unhashed::put(ext, &final_key, val),
			None => unhashed::kill(ext, &final_key),
		}
	}

	/// Remove the value under a key.
	pub fn remove(ext: &mut Externalities, key: &Key) {
		unhashed::kill(ext, &Self::hashed_key_for(key))
	}

	/// Take the value under a key.
	pub fn take(ext: &mut Externalities, key: &Key) -> QueryKind::Query {
		QueryKind::from_optional_value_to_query(unhashed::take(ext, &Self::hashed_key_for(key)))
	}

	/// Swap the values of two keys.
	pub fn swap(ext: &mut Externalities, key1: &Key, key2: &Key) {
		let k1 = Self::hashed_key_for(key1);
		let k2 = Self::hashed_key_for(key2);
		let v1 = unhashed::get_raw(ext, &k1);
		match unhashed::get_raw(ext, &k2) {
			Some(val) => unhashed::put_raw(ext, &k1, &val),
			None => unhashed::kill(ext, &k1),
		}
		match v1 {
			Some(val) => unhashed::put_raw(ext, &k2, &val),
			None => unhashed::kill(ext, &k2),
		}
	}

	/// Mutate the value under a key.
	pub fn mutate<R, F: FnOnce(&mut QueryKind::Query) -> R>(
		ext: &mut Externalities,
		key: &Key,
		f: F,
	) -> R {
		Self::try_mutate(ext, key, |v| Ok::<R, core::convert::Infallible>(f(v)))
			.unwrap_or_else(|never| match never {})
	}

	/// Mutate the item, only if an `Ok` value is returned.
	pub fn try_mutate<R, E, F: FnOnce(&mut QueryKind::Query) -> Result<R, E>>(
		ext: &mut Externalities,
		key: &Key,
		f: F,
	) -> Result<R, E> {
		let final_key = Self::hashed_key_for(key);
		let mut val = QueryKind::from_optional_value_to_query(unhashed::get(ext, &final_key));
		let ret = f(&mut val);
		if ret.is_ok() {
			match QueryKind::from_query_to_optional_value(val) {
				Some(ref val) => unhashed::put(ext, &final_key, val),
				None => unhashed::kill(ext, &final_key),
			}
		}
		ret
	}

	/// Mutate the value under a key. Deletes the item if mutated to a `None`.
	pub fn mutate_exists<R, F: FnOnce(&mut Option<Value>) -> R>(
		ext: &mut Externalities,
		key: &Key,
		f: F,
	) -> R {
		Self::try_mutate_exists(ext, key, |v| Ok::<R, core::convert::Infallible>(f(v)))
			.unwrap_or_else(|never| match never {})
	}

	/// Mutate the item, only if an `Ok` value is returned. Deletes the item if mutated to a `None`.
	/// `f` will always be called with an option representing if the storage item exists (`Some<V>`)
	/// or if the storage item does not exist (`None`), independent of the `QueryType`.
	pub fn try_mutate_exists<R, E, F: FnOnce(&mut Option<Value>) -> Result<R, E>>(
		ext: &mut Externalities,
		key: &Key,
		f: F,
	) -> Result<R, E> {
		let final_key = Self::hashed_key_for(key);
		let mut val = unhashed::get(ext, &final_key);
		let ret = f(&mut val);
		if ret.is_ok() {
			match val {
				Some(ref val) => unhashed::put(ext, &final_key, val),
				None => unhashed::kill(ext, &final_key),
			}
		}
		ret
	}

	/// Remove up to `limit` entries of the map, or all of them when `limit` is `None`.
	///
	/// Returns the number of entries removed.
	pub fn clear(ext: &mut Externalities, limit: Option<u32>) -> u32 {
		unhashed::clear_prefix(ext, &Self::final_prefix(), limit)
	}

	/// Iterate over the raw values of the map without decoding keys.
	pub fn iter_values(ext: &Externalities) -> Vec<Value> {
		ext.keys_with_prefix(&Self::final_prefix())
			.into_iter()
			.filter_map(|key| unhashed::get(ext, &key))
			.collect()
	}
}

impl<Prefix, Hasher, Key, Value, QueryKind, OnEmpty>
	StorageMap<Prefix, Hasher, Key, Value, QueryKind, OnEmpty>
where
	Prefix: StorageInstance,
	Hasher: StorageHasher + ReversibleStorageHasher,
	Key: FullCodec,
	Value: FullCodec,
	QueryKind: QueryKindTrait<Value, OnEmpty>,
	OnEmpty: Get<QueryKind::Query> + 'static,
{
	fn decode_key(final_key: &[u8]) -> Option<Key> {
		let mut key_material = Hasher::reverse(&final_key[32..]);
		match Key::decode(&mut key_material) {
			Ok(key) => Some(key),
			Err(e) => {
				log::error!(
					target: "runtime::storage",
					"Corrupted key under `{}::{}`: {:?}",
					Prefix::pallet_prefix(),
					Prefix::STORAGE_PREFIX,
					e,
				);
				None
			},
		}
	}

	/// Enumerate all elements in the map in lexicographic order of the encoded key. If you alter
	/// the map while doing this, you'll get undefined results.
	pub fn iter(ext: &Externalities) -> Vec<(Key, Value)> {
		ext.keys_with_prefix(&Self::final_prefix())
			.into_iter()
			.filter_map(|final_key| {
				let key = Self::decode_key(&final_key)?;
				let value = unhashed::get(ext, &final_key)?;
				Some((key, value))
			})
			.collect()
	}

	/// Enumerate all keys in the map in lexicographic order of the encoded key.
	pub fn iter_keys(ext: &Externalities) -> Vec<Key> {
		ext.keys_with_prefix(&Self::final_prefix())
			.into_iter()
			.filter_map(|final_key| Self::decode_key(&final_key))
			.collect()
	}

	/// Remove all elements from the map and return them.
	pub fn drain(ext: &mut Externalities) -> Vec<(Key, Value)> {
		let all = Self::iter(ext);
		Self::clear(ext, None);
		all
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		generate_storage_instances,
		hash::{Blake2_128Concat, Identity, Twox128, Twox64Concat},
		storage::types::ValueQuery,
		traits::ConstU32,
	};

	generate_storage_instances!("Test", {
		FooPrefix => "Foo",
		BarPrefix => "Bar",
	});

	type A = StorageMap<FooPrefix, Blake2_128Concat, u16, u32, OptionQuery>;
	type AValueQueryWithAnOnEmpty =
		StorageMap<FooPrefix, Blake2_128Concat, u16, u32, ValueQuery, ConstU32<97>>;
	type B = StorageMap<BarPrefix, Twox64Concat, u16, u32, ValueQuery>;

	#[test]
	fn keys_are_prefixed_and_hashed() {
		let k = [Twox128::hash(b"Test"), Twox128::hash(b"Foo")].concat();
		let expected = [k.clone(), 3u16.using_encoded(Blake2_128Concat::hash)].concat();
		assert_eq!(A::hashed_key_for(&3), expected);
		assert_eq!(A::final_prefix().to_vec(), k);
		type I = StorageMap<BarPrefix, Identity, u16, u32>;
		assert_eq!(I::hashed_key_for(&3)[32..], [3u8, 0][..]);
	}

	#[test]
	fn map_works() {
		let ext = &mut Externalities::default();
		assert_eq!(A::contains_key(ext, &3), false);
		assert_eq!(A::get(ext, &3), None);
		assert_eq!(AValueQueryWithAnOnEmpty::get(ext, &3), 97);
		assert_eq!(A::try_get(ext, &3), Err(()));

		A::insert(ext, &3, 10);
		assert_eq!(A::contains_key(ext, &3), true);
		assert_eq!(A::get(ext, &3), Some(10));
		assert_eq!(AValueQueryWithAnOnEmpty::get(ext, &3), 10);

		A::swap(ext, &3, &2);
		assert_eq!(A::contains_key(ext, &3), false);
		assert_eq!(A::get(ext, &2), Some(10));

		A::remove(ext, &2);
		assert_eq!(A::contains_key(ext, &2), false);

		AValueQueryWithAnOnEmpty::mutate(ext, &2, |v| *v = *v * 2);
		assert_eq!(A::get(ext, &2), Some(97 * 2));

		let _: Result<(), ()> = A::try_mutate(ext, &2, |v| {
			*v = Some(1);
			Err(())
		});
		assert_eq!(A::get(ext, &2), Some(97 * 2));

		A::mutate_exists(ext, &2, |v| *v = None);
		assert_eq!(A::contains_key(ext, &2), false);

		let _: Result<(), ()> = A::try_mutate_exists(ext, &2, |v| {
			assert!(v.is_none());
			*v = Some(8);
			Ok(())
		});
		assert_eq!(A::take(ext, &2), Some(8));
		assert_eq!(A::contains_key(ext, &2), false);
	}

	#[test]
	fn value_query_set_to_default_keeps_entry() {
		let ext = &mut Externalities::default();
		B::insert(ext, &1, 4);
		B::mutate(ext, &1, |v| *v = 0);
		assert!(B::contains_key(ext, &1));
		assert_eq!(B::get(ext, &1), 0);
	}

	#[test]
	fn iteration_and_clear() {
		let ext = &mut Externalities::default();
		for i in 0..4u16 {
			B::insert(ext, &i, i as u32 * 10);
		}
		A::insert(ext, &9, 9);

		let mut all = B::iter(ext);
		all.sort();
		assert_eq!(all, vec![(0, 0), (1, 10), (2, 20), (3, 30)]);
		let mut keys = B::iter_keys(ext);
		keys.sort();
		assert_eq!(keys, vec![0, 1, 2, 3]);
		assert_eq!(B::iter_values(ext).len(), 4);

		assert_eq!(B::clear(ext, Some(1)), 1);
		assert_eq!(B::iter_keys(ext).len(), 3);
		assert_eq!(B::drain(ext).len(), 3);
		assert!(B::iter(ext).is_empty());
		// other maps are untouched.
		assert_eq!(A::get(ext, &9), Some(9));
	}
}
