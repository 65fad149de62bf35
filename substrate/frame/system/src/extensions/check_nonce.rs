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


use crate::{Account, Config};
use alloc::vec;
use codec::{Compact, Decode, Encode, Error, Input, Output};
use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, SignedExtension},
	transaction_validity::{
		InvalidTransaction, TransactionLongevity, TransactionValidity, TransactionValidityError,
		ValidTransaction,
	},
	Externalities, Nonce,
};

/// Nonce check and increment to give replay protection for transactions.
///
/// # Transaction Validity
///
/// This extension affects `requires` and `provides` tags of validity, but DOES NOT
/// set the `priority` field. Make sure that AT LEAST one of the signed extension sets
/// some kind of priority upon validating transactions.
#[derive(Clone, Eq, PartialEq)]
pub struct CheckNonce<T>(pub Nonce, PhantomData<T>);

impl<T: Config> CheckNonce<T> {
	/// utility constructor. Used only in client/factory code.
	pub fn from(nonce: Nonce) -> Self {
		Self(nonce, PhantomData)
	}
}

impl<T: Config> Encode for CheckNonce<T> {
	fn size_hint(&self) -> usize {
		Compact(self.0).size_hint()
	}

	fn encode_to<O: Output + ?Sized>(&self, dest: &mut O) {
		Compact(self.0).encode_to(dest)
	}
}

impl<T: Config> Decode for CheckNonce<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let nonce = Compact::<Nonce>::decode(input).map_err(|e| e.expecting("CheckNonce"))?;
		Ok(Self::from(nonce.0))
	}
}

impl<T: Config> core::fmt::Debug for CheckNonce<T> {
	fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(f, "CheckNonce({})", self.0)
	}
}

impl<T: Config> SignedExtension for CheckNonce<T> {
	const IDENTIFIER: &'static str = "CheckNonce";
	type AccountId = T::AccountId;
	type Call = T::RuntimeCall;
	type AdditionalSigned = ();
	type Pre = ();

	fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> Result<(), TransactionValidityError> {
		let mut account = Account::<T>::get(ext, who);
		if account.providers == 0 && account.sufficients == 0 {
			// Nonce storage not paid for
			return Err(InvalidTransaction::Payment.into())
		}
		if self.0 != account.nonce {
			return Err(if self.0 < account.nonce {
				InvalidTransaction::Stale
			} else {
				InvalidTransaction::Future
			}
			.into())
		}
		account.nonce = account.nonce.saturating_add(1);
		Account::<T>::insert(ext, who, account);
		Ok(())
	}

	fn validate(
		&self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> TransactionValidity {
		let account = Account::<T>::get(ext, who);
		if account.providers == 0 && account.sufficients == 0 {
			// Nonce storage not paid for
			return Err(InvalidTransaction::Payment.into())
		}
		if self.0 < account.nonce {
			return Err(InvalidTransaction::Stale.into())
		}

		let provides = vec![Encode::encode(&(who, self.0))];
		let requires = if account.nonce < self.0 {
			vec![Encode::encode(&(who, self.0 - 1))]
		} else {
			vec![]
		};

		Ok(ValidTransaction {
			priority: 0,
			requires,
			provides,
			longevity: TransactionLongevity::MAX,
			propagate: true,
		})
	}
}
