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

//! The storage boundary of the runtime.
//!
//! A [`Backend`] is the persistent key/value store the runtime is executed against. The runtime
//! never talks to it directly: every call receives an [`Externalities`], which buffers writes in
//! an overlay of nested change layers so that a dispatch can be committed or discarded as a
//! whole.

use crate::{hashing::blake2_256_hash, TransactionalError, H256};
use alloc::{
	boxed::Box,
	collections::{BTreeMap, BTreeSet},
	vec::Vec,
};
use codec::Encode;
use core::fmt;

const LOG_TARGET: &str = "runtime::storage";

/// A set of changes: `Some` is a write, `None` is a deletion.
type ChangeSet = BTreeMap<Vec<u8>, Option<Vec<u8>>>;

/// The persistent key/value store backing the runtime state.
pub trait Backend {
	/// Read the value stored under `key`.
	fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

	/// Write `value` under `key`.
	fn set(&mut self, key: &[u8], value: &[u8]);

	/// Remove `key`.
	fn remove(&mut self, key: &[u8]);

	/// All keys starting with `prefix`, in lexicographic order.
	fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>>;
}

/// A [`Backend`] keeping everything in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryBackend {
	inner: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryBackend {
	/// Create an empty backend.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// `true` if nothing is stored.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<BTreeMap<Vec<u8>, Vec<u8>>> for InMemoryBackend {
	fn from(inner: BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
		Self { inner }
	}
}

impl FromIterator<(Vec<u8>, Vec<u8>)> for InMemoryBackend {
	fn from_iter<I: IntoIterator<Item = (Vec<u8>, Vec<u8>)>>(iter: I) -> Self {
		Self { inner: iter.into_iter().collect() }
	}
}

impl Backend for InMemoryBackend {
	fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
		self.inner.get(key).cloned()
	}

	fn set(&mut self, key: &[u8], value: &[u8]) {
		self.inner.insert(key.to_vec(), value.to_vec());
	}

	fn remove(&mut self, key: &[u8]) {
		self.inner.remove(key);
	}

	fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
		self.inner
			.range(prefix.to_vec()..)
			.take_while(|(k, _)| k.starts_with(prefix))
			.map(|(k, _)| k.clone())
			.collect()
	}
}

/// The execution context handed to every runtime call.
///
/// Owns the [`Backend`] and an overlay of pending changes. The bottom layer of the overlay holds
/// everything committed so far in this execution; each call to
/// [`start_transaction`](Self::start_transaction) pushes a new layer on top that is either
/// merged into the one below ([`commit_transaction`](Self::commit_transaction)) or dropped
/// ([`rollback_transaction`](Self::rollback_transaction)).
pub struct Externalities {
	backend: Box<dyn Backend>,
	committed: ChangeSet,
	layers: Vec<ChangeSet>,
}

impl Default for Externalities {
	fn default() -> Self {
		Self::new(InMemoryBackend::default())
	}
}

impl fmt::Debug for Externalities {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("Externalities")
			.field("committed", &self.committed.len())
			.field("depth", &self.layers.len())
			.finish()
	}
}

impl Externalities {
	/// Create a context on top of `backend`.
	pub fn new<B: Backend + 'static>(backend: B) -> Self {
		Self { backend: Box::new(backend), committed: ChangeSet::new(), layers: Vec::new() }
	}

	fn top_mut(&mut self) -> &mut ChangeSet {
		self.layers.last_mut().unwrap_or(&mut self.committed)
	}

	fn overlay_value(&self, key: &[u8]) -> Option<&Option<Vec<u8>>> {
		self.layers
			.iter()
			.rev()
			.chain(core::iter::once(&self.committed))
			.find_map(|layer| layer.get(key))
	}

	/// Read the current value under `key`.
	pub fn storage(&self, key: &[u8]) -> Option<Vec<u8>> {
		match self.overlay_value(key) {
			Some(value) => value.clone(),
			None => self.backend.get(key),
		}
	}

	/// `true` if a value is stored under `key`.
	pub fn exists(&self, key: &[u8]) -> bool {
		match self.overlay_value(key) {
			Some(value) => value.is_some(),
			None => self.backend.get(key).is_some(),
		}
	}

	/// Write `value` under `key` in the current layer.
	pub fn set_storage(&mut self, key: &[u8], value: Vec<u8>) {
		self.top_mut().insert(key.to_vec(), Some(value));
	}

	/// Delete `key` in the current layer.
	pub fn clear_storage(&mut self, key: &[u8]) {
		self.top_mut().insert(key.to_vec(), None);
	}

	/// All live keys starting with `prefix`, in lexicographic order.
	pub fn keys_with_prefix(&self, prefix: &[u8]) -> Vec<Vec<u8>> {
		let mut keys: BTreeSet<Vec<u8>> =
			self.backend.keys_with_prefix(prefix).into_iter().collect();
		for layer in core::iter::once(&self.committed).chain(self.layers.iter()) {
			let changes = layer.range(prefix.to_vec()..).take_while(|(k, _)| k.starts_with(prefix));
			for (key, value) in changes {
				if value.is_some() {
					keys.insert(key.clone());
				} else {
					keys.remove(key);
				}
			}
		}
		keys.into_iter().collect()
	}

	/// The first live key strictly after `key`, if any.
	pub fn next_key(&self, key: &[u8]) -> Option<Vec<u8>> {
		self.keys_with_prefix(&[]).into_iter().find(|k| k.as_slice() > key)
	}

	/// Delete up to `limit` keys starting with `prefix`. Returns the number of deleted keys.
	pub fn clear_prefix(&mut self, prefix: &[u8], limit: Option<u32>) -> u32 {
		let keys = self.keys_with_prefix(prefix);
		let limit = limit.map_or(usize::MAX, |l| l as usize);
		let mut removed = 0;
		for key in keys.into_iter().take(limit) {
			self.clear_storage(&key);
			removed += 1;
		}
		removed
	}

	/// Open a new change layer.
	pub fn start_transaction(&mut self) {
		self.layers.push(ChangeSet::new());
	}

	/// Merge the top layer into the one below it.
	pub fn commit_transaction(&mut self) -> Result<(), TransactionalError> {
		let top = self.layers.pop().ok_or(TransactionalError::NoLayer)?;
		self.top_mut().extend(top);
		Ok(())
	}

	/// Discard the top layer.
	pub fn rollback_transaction(&mut self) -> Result<(), TransactionalError> {
		self.layers.pop().map(|_| ()).ok_or(TransactionalError::NoLayer)
	}

	/// Number of open change layers.
	pub fn transaction_depth(&self) -> usize {
		self.layers.len()
	}

	/// Flush every pending change into the backend.
	///
	/// Open layers are committed first.
	pub fn commit_all(&mut self) {
		if !self.layers.is_empty() {
			log::warn!(
				target: LOG_TARGET,
				"committing {} open storage layers into the backend",
				self.layers.len(),
			);
		}
		while self.commit_transaction().is_ok() {}
		for (key, value) in core::mem::take(&mut self.committed) {
			match value {
				Some(value) => self.backend.set(&key, &value),
				None => self.backend.remove(&key),
			}
		}
	}

	/// All live key/value pairs, in key order.
	pub fn pairs(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
		self.keys_with_prefix(&[])
			.into_iter()
			.filter_map(|key| self.storage(&key).map(|value| (key, value)))
			.collect()
	}

	/// A commitment to the whole current state: the blake2-256 hash of the encoded, sorted
	/// key/value pairs.
	pub fn storage_root(&self) -> H256 {
		blake2_256_hash(&self.pairs().encode())
	}
}
