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


use crate::Config;
use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, Get, SignedExtension},
	transaction_validity::TransactionValidityError,
	Externalities,
};

/// Ensure the runtime version registered in the transaction is the same as at present.
///
/// # Transaction Validity
///
/// The transaction with incorrect `spec_version` are considered invalid. The validity
/// is not affected in any other way.
#[derive(Clone, Eq, PartialEq)]
pub struct CheckSpecVersion<T>(PhantomData<T>);

super::impl_empty_extension_codec!(CheckSpecVersion);

impl<T: Config> core::fmt::Debug for CheckSpecVersion<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "CheckSpecVersion")
	}
}

impl<T: Config> CheckSpecVersion<T> {
	/// Create new `SignedExtension` to check spec version.
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T: Config> Default for CheckSpecVersion<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Config> SignedExtension for CheckSpecVersion<T> {
	const IDENTIFIER: &'static str = "CheckSpecVersion";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = u32;
	type Pre = ();

	fn additional_signed(
		&self,
		_: &Externalities,
	) -> Result<Self::AdditionalSigned, TransactionValidityError> {
		Ok(T::Version::get().spec_version)
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
