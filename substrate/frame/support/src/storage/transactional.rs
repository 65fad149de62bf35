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


//! Provides functionality around the transaction storage.
//!
//! Transactional storage provides functionality to run an entire code block in a storage
//! transaction. This means that either the entire changes to the storage are committed or
//! everything is thrown away. This simplifies the writing of functionality that may bail at any
//! point of operation. Otherwise you would need to first verify all storage accesses and then do
//! the storage modifications.

use tessera_primitives::{DispatchError, Externalities, TransactionOutcome, TransactionalError};

/// The maximum number of nested layers.
pub const TRANSACTIONAL_LIMIT: u32 = 255;

/// Check if the current call is within a transactional layer.
pub fn is_transactional(ext: &Externalities) -> bool {
	ext.transaction_depth() > 0
}

/// Execute the supplied function in a new storage transaction.
///
/// All changes to storage performed by the supplied function are discarded if the returned
/// outcome is `TransactionOutcome::Rollback`.
///
/// Transactions can be nested up to `TRANSACTIONAL_LIMIT` times; more than that will result in an
/// error.
///
/// Commits happen to the parent transaction.
pub fn with_transaction<T, E, F>(ext: &mut Externalities, f: F) -> Result<T, E>
where
	E: From<DispatchError>,
	F: FnOnce(&mut Externalities) -> TransactionOutcome<Result<T, E>>,
{
	if ext.transaction_depth() >= TRANSACTIONAL_LIMIT as usize {
		return Err(E::from(DispatchError::from(TransactionalError::LimitReached)))
	}

	ext.start_transaction();
	match f(ext) {
		TransactionOutcome::Commit(res) => {
			ext.commit_transaction().map_err(|e| E::from(DispatchError::from(e)))?;
			res
		},
		TransactionOutcome::Rollback(res) => {
			ext.rollback_transaction().map_err(|e| E::from(DispatchError::from(e)))?;
			res
		},
	}
}

/// Same as [`with_transaction`] but casts any internal error to `()`.
///
/// This rids `E` of the `From<DispatchError>` bound that is required by `with_transaction`.
pub fn with_transaction_opaque_err<R, E, F>(ext: &mut Externalities, f: F) -> Result<Result<R, E>, ()>
where
	F: FnOnce(&mut Externalities) -> TransactionOutcome<Result<R, E>>,
{
	with_transaction(ext, move |ext| -> TransactionOutcome<Result<Result<R, E>, DispatchError>> {
		match f(ext) {
			TransactionOutcome::Commit(res) => TransactionOutcome::Commit(Ok(res)),
			TransactionOutcome::Rollback(res) => TransactionOutcome::Rollback(Ok(res)),
		}
	})
	.map_err(|_| ())
}

/// Execute the supplied function, adding a new storage layer.
///
/// This is the same as `with_transaction`, but assuming that any function returning an `Err`
/// should rollback, and any function returning `Ok` should commit. This provides a cleaner API to
/// the developer who wants this behavior.
pub fn with_storage_layer<T, E, F>(ext: &mut Externalities, f: F) -> Result<T, E>
where
	E: From<DispatchError>,
	F: FnOnce(&mut Externalities) -> Result<T, E>,
{
	with_transaction(ext, |ext| {
		let r = f(ext);
		if r.is_ok() {
			TransactionOutcome::Commit(r)
		} else {
			TransactionOutcome::Rollback(r)
		}
	})
}
