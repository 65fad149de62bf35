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


//! Operation on unhashed runtime storage.

use alloc::vec::Vec;
use codec::{Decode, Encode};
use tessera_primitives::Externalities;

/// Return the value of the item in storage under `key`, or `None` if there is no explicit entry.
///
/// A value that fails to decode is logged as corrupted and treated as absent.
pub fn get<T: Decode + Sized>(ext: &Externalities, key: &[u8]) -> Option<T> {
	ext.storage(key).and_then(|val| {
		Decode::decode(&mut &val[..]).map(Some).unwrap_or_else(|e| {
			log::error!(
				target: "runtime::storage",
				"Corrupted state at `{:?}`: {:?}",
				key,
				e,
			);
			None
		})
	})
}

/// Return the value of the item in storage under `key`, or the type's default if there is no
/// explicit entry.
pub fn get_or_default<T: Decode + Sized + Default>(ext: &Externalities, key: &[u8]) -> T {
	get(ext, key).unwrap_or_default()
}

/// Return the value of the item in storage under `key`, or `default_value` if there is no
/// explicit entry.
pub fn get_or<T: Decode + Sized>(ext: &Externalities, key: &[u8], default_value: T) -> T {
	get(ext, key).unwrap_or(default_value)
}

/// Put `value` in storage under `key`.
pub fn put<T: Encode + ?Sized>(ext: &mut Externalities, key: &[u8], value: &T) {
	ext.set_storage(key, value.encode());
}

/// Remove `key` from storage, returning its value if it had an explicit entry or `None` otherwise.
pub fn take<T: Decode + Sized>(ext: &mut Externalities, key: &[u8]) -> Option<T> {
	let r = get(ext, key);
	if r.is_some() {
		kill(ext, key);
	}
	r
}

/// Remove `key` from storage, returning its value, or, if there was no explicit entry in storage,
/// the default for its type.
pub fn take_or_default<T: Decode + Sized + Default>(ext: &mut Externalities, key: &[u8]) -> T {
	take(ext, key).unwrap_or_default()
}

/// Check to see if `key` has an explicit entry in storage.
pub fn exists(ext: &Externalities, key: &[u8]) -> bool {
	ext.exists(key)
}

/// Ensure `key` has no explicit entry in storage.
pub fn kill(ext: &mut Externalities, key: &[u8]) {
	ext.clear_storage(key);
}

/// Partially clear the storage of all keys under a common `prefix`.
///
/// At most `maybe_limit` keys are removed; `None` removes all of them. Returns the number of keys
/// that were removed.
pub fn clear_prefix(ext: &mut Externalities, prefix: &[u8], maybe_limit: Option<u32>) -> u32 {
	ext.clear_prefix(prefix, maybe_limit)
}

/// Get a Vec of bytes from storage.
pub fn get_raw(ext: &Externalities, key: &[u8]) -> Option<Vec<u8>> {
	ext.storage(key)
}

/// Put a raw byte slice into storage.
pub fn put_raw(ext: &mut Externalities, key: &[u8], value: &[u8]) {
	ext.set_storage(key, value.to_vec());
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corrupted_values_read_as_absent() {
		let ext = &mut Externalities::default();
		put_raw(ext, b"k", &[1, 2]);
		assert_eq!(get::<u32>(ext, b"k"), None);
		assert_eq!(get::<u16>(ext, b"k"), Some(0x0201));
		assert_eq!(get_or_default::<u32>(ext, b"missing"), 0);
		assert_eq!(take::<u16>(ext, b"k"), Some(0x0201));
		assert!(!exists(ext, b"k"));
	}

	#[test]
	fn clear_prefix_respects_the_limit() {
		let ext = &mut Externalities::default();
		for i in 0u8..5 {
			put(ext, &[b'p', i], &i);
		}
		put(ext, b"q", &9u8);
		assert_eq!(clear_prefix(ext, b"p", Some(2)), 2);
		assert_eq!(clear_prefix(ext, b"p", None), 3);
		assert_eq!(get::<u8>(ext, b"q"), Some(9));
	}
}
