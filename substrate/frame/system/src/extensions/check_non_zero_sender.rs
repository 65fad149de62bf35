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
use codec::Encode;
use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, SignedExtension},
	transaction_validity::{
		InvalidTransaction, TransactionValidity, TransactionValidityError, ValidTransaction,
	},
	Externalities,
};

/// Check to ensure that the sender is not the zero address.
#[derive(Clone, Eq, PartialEq)]
pub struct CheckNonZeroSender<T>(PhantomData<T>);

super::impl_empty_extension_codec!(CheckNonZeroSender);

impl<T: Config> core::fmt::Debug for CheckNonZeroSender<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "CheckNonZeroSender")
	}
}

impl<T: Config> CheckNonZeroSender<T> {
	/// Create new `SignedExtension` that rejects the zero sender.
	pub fn new() -> Self {
		Self(PhantomData)
	}
}

impl<T: Config> Default for CheckNonZeroSender<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Config> SignedExtension for CheckNonZeroSender<T> {
	const IDENTIFIER: &'static str = "CheckNonZeroSender";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = ();
	type Pre = ();

	fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	fn validate(
		&self,
		_ext: &mut Externalities,
		who: &Self::AccountId,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> TransactionValidity {
		if who.using_encoded(|d| d.iter().all(|x| *x == 0)) {
			return Err(TransactionValidityError::Invalid(InvalidTransaction::BadSigner))
		}
		Ok(ValidTransaction::default())
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<Self::Pre, TransactionValidityError> {
		self.validate(ext, who, call, info, len).map(|_| ())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mock::{new_test_ext, Test, CALL};
	use tessera_support::{assert_noop, assert_ok, dispatch::DispatchInfo};

	#[test]
	fn zero_account_ban_works() {
		let ext = &mut new_test_ext();
		let info = DispatchInfo::default();
		let len = 0_usize;
		assert_noop!(
			ext,
			CheckNonZeroSender::<Test>::new().validate(ext, &0, CALL, &info, len),
			InvalidTransaction::BadSigner
		);
		assert_ok!(CheckNonZeroSender::<Test>::new().validate(ext, &1, CALL, &info, len));
	}
}
