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


//! Traits and associated datatypes for managing abstract stored values.

use crate::storage::{types::StorageMap, StorageHasher, StorageInstance};
use codec::FullCodec;
use tessera_primitives::{DispatchError, Externalities};

/// An abstraction of a value stored within storage, but possibly as part of a larger composite
/// item.
pub trait StoredMap<K, T: Default> {
	/// Get the item, or its default if it doesn't yet exist; we make no distinction between the
	/// two.
	fn get(ext: &Externalities, k: &K) -> T;

	/// Maybe mutate the item only if an `Ok` value is returned from `f`. Do nothing if an `Err` is
	/// returned. It is removed or reset to default value if it has been mutated to `None`
	fn try_mutate_exists<R, E: From<DispatchError>>(
		ext: &mut Externalities,
		k: &K,
		f: impl FnOnce(&mut Option<T>) -> Result<R, E>,
	) -> Result<R, E>;

	// Everything past here has a default implementation.

	/// Mutate the item.
	fn mutate<R>(
		ext: &mut Externalities,
		k: &K,
		f: impl FnOnce(&mut T) -> R,
	) -> Result<R, DispatchError> {
		Self::mutate_exists(ext, k, |maybe_account| match maybe_account {
			Some(ref mut account) => f(account),
			x @ None => {
				let mut account = Default::default();
				let r = f(&mut account);
				*x = Some(account);
				r
			},
		})
	}

	/// Mutate the item, removing or resetting to default value if it has been mutated to `None`.
	///
	/// This is infallible as long as the value does not get destroyed.
	fn mutate_exists<R>(
		ext: &mut Externalities,
		k: &K,
		f: impl FnOnce(&mut Option<T>) -> R,
	) -> Result<R, DispatchError> {
		Self::try_mutate_exists(ext, k, |x| -> Result<R, DispatchError> { Ok(f(x)) })
	}

	/// Set the item to something new.
	fn insert(ext: &mut Externalities, k: &K, t: T) -> Result<(), DispatchError> {
		Self::mutate(ext, k, |i| *i = t)
	}

	/// Remove the item or otherwise replace it with its default value; we don't care which.
	fn remove(ext: &mut Externalities, k: &K) -> Result<(), DispatchError> {
		Self::mutate_exists(ext, k, |x| *x = None)
	}
}

/// A simple, generic one-parameter event notifier/handler.
pub trait HandleLifetime<T> {
	/// An account was created.
	fn created(_ext: &mut Externalities, _t: &T) -> Result<(), DispatchError> {
		Ok(())
	}

	/// An account was killed.
	fn killed(_ext: &mut Externalities, _t: &T) -> Result<(), DispatchError> {
		Ok(())
	}
}

impl<T> HandleLifetime<T> for () {}

/// A shim for placing around a storage item in order to use it as a `StoredValue`.
///
/// The `L` handler is told when an entry is about to come into existence or go away.
pub struct StorageMapShim<Prefix, Hasher, L, K, T>(
	core::marker::PhantomData<(Prefix, Hasher, L, K, T)>,
);

impl<Prefix, Hasher, L, K, T> StoredMap<K, T> for StorageMapShim<Prefix, Hasher, L, K, T>
where
	Prefix: StorageInstance,
	Hasher: StorageHasher,
	L: HandleLifetime<K>,
	K: FullCodec,
	T: FullCodec + Default + 'static,
{
	fn get(ext: &Externalities, k: &K) -> T {
		StorageMap::<Prefix, Hasher, K, T>::get(ext, k).unwrap_or_default()
	}

	fn try_mutate_exists<R, E: From<DispatchError>>(
		ext: &mut Externalities,
		k: &K,
		f: impl FnOnce(&mut Option<T>) -> Result<R, E>,
	) -> Result<R, E> {
		let existed = StorageMap::<Prefix, Hasher, K, T>::contains_key(ext, k);
		let mut maybe_value = StorageMap::<Prefix, Hasher, K, T>::get(ext, k);
		let r = f(&mut maybe_value)?;
		let exists = maybe_value.is_some();
		if !existed && exists {
			L::created(ext, k)?;
		} else if existed && !exists {
			L::killed(ext, k)?;
		}
		StorageMap::<Prefix, Hasher, K, T>::set(ext, k, maybe_value);
		Ok(r)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{generate_storage_instances, hash::Twox64Concat, parameter_types};

	generate_storage_instances!("Shim", { DataPrefix => "Data" });

	parameter_types! {
		static Lifetime: Vec<(&'static str, u32)> = vec![];
	}

	struct Track;
	impl HandleLifetime<u32> for Track {
		fn created(_: &mut Externalities, t: &u32) -> Result<(), DispatchError> {
			Lifetime::mutate(|l| l.push(("created", *t)));
			Ok(())
		}
		fn killed(_: &mut Externalities, t: &u32) -> Result<(), DispatchError> {
			Lifetime::mutate(|l| l.push(("killed", *t)));
			Ok(())
		}
	}

	type Shim = StorageMapShim<DataPrefix, Twox64Concat, Track, u32, u64>;

	#[test]
	fn shim_reports_lifetime() {
		let ext = &mut Externalities::default();
		assert_eq!(Shim::get(ext, &1), 0);
		Shim::insert(ext, &1, 10).unwrap();
		Shim::mutate(ext, &1, |v| *v += 1).unwrap();
		assert_eq!(Shim::get(ext, &1), 11);
		Shim::remove(ext, &1).unwrap();
		assert_eq!(Shim::get(ext, &1), 0);
		assert_eq!(Lifetime::get(), vec![("created", 1), ("killed", 1)]);
	}

	#[test]
	fn failed_mutation_changes_nothing() {
		let ext = &mut Externalities::default();
		let r: Result<(), DispatchError> = Shim::try_mutate_exists(ext, &2, |v| {
			*v = Some(5);
			Err("nope".into())
		});
		assert!(r.is_err());
		assert_eq!(Shim::get(ext, &2), 0);
		assert!(Lifetime::get().is_empty());
	}
}
