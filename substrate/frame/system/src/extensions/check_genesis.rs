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


use crate::{Config, Pallet};
use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, SignedExtension},
	transaction_validity::TransactionValidityError,
	Externalities, H256,
};

/// Genesis hash check to provide replay protection between different networks.
///
/// # Transaction Validity
///
/// Note that while a transaction with invalid `genesis_hash` will fail to be decoded,
/// the extension does not affect any other fields of `TransactionValidity` directly.
#[derive(Clone, Eq, PartialEq)]
pub struct CheckGenesis<T>(PhantomData<T>);

super::impl_empty_extension_codec!(CheckGenesis);

impl<T: Config> core::fmt::Debug for CheckGenesis<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "CheckGenesis")
	}
}

impl<T: Config> CheckGenesis<T> {
	/// Creates new `SignedExtension` to check genesis hash.
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T: Config> Default for CheckGenesis<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Config> SignedExtension for CheckGenesis<T> {
	const IDENTIFIER: &'static str = "CheckGenesis";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = H256;
	type Pre = ();

	fn additional_signed(&self, ext: &Externalities) -> Result<H256, TransactionValidityError> {
		Ok(Pallet::<T>::block_hash(ext, 0))
	}

	fn pre_dispatch(
		self,
		_ext: &mut Externalities,
		_who: &Self::AccountId,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> Result<Self::Pre, TransactionValidityError> {
		Ok(())
	}
}
