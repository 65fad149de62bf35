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


//! Traits and default implementation for paying transaction fees.

use crate::Config;

use core::marker::PhantomData;
use tessera_primitives::{
	traits::{DispatchInfoOf, PostDispatchInfoOf},
	transaction_validity::{InvalidTransaction, TransactionValidityError},
	Balance, Externalities,
};
use tessera_support::{
	hypothetically,
	traits::{
		Currency, ExistenceRequirement, Imbalance, OnUnbalanced, SameOrOther, SettleIssuance,
		WithdrawReasons,
	},
};

type NegativeImbalanceOf<C, T> =
	<C as Currency<<T as tessera_system::Config>::AccountId>>::NegativeImbalance;

/// Handle withdrawing, refunding and depositing of transaction fees.
pub trait OnChargeTransaction<T: Config> {
	/// Whatever the withdrawal hands over to the correction after dispatch.
	type LiquidityInfo: Default;

	/// Before the transaction is executed the payment of the transaction fees
	/// need to be secured.
	///
	/// Note: The `fee` already includes the `tip`.
	fn withdraw_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		call: &T::RuntimeCall,
		dispatch_info: &DispatchInfoOf<T::RuntimeCall>,
		fee: Balance,
		tip: Balance,
	) -> Result<Self::LiquidityInfo, TransactionValidityError>;

	/// Check whether the fee could be withdrawn, without withdrawing it.
	///
	/// Used while validating a transaction for the queue. Must agree with `withdraw_fee`.
	fn can_withdraw_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		call: &T::RuntimeCall,
		dispatch_info: &DispatchInfoOf<T::RuntimeCall>,
		fee: Balance,
		tip: Balance,
	) -> Result<(), TransactionValidityError>;

	/// After the transaction was executed the actual fee can be calculated.
	/// This function should refund any overpaid fees and optionally deposit
	/// the corrected amount.
	///
	/// Note: The `fee` already includes the `tip`.
	fn correct_and_deposit_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		dispatch_info: &DispatchInfoOf<T::RuntimeCall>,
		post_info: &PostDispatchInfoOf<T::RuntimeCall>,
		corrected_fee: Balance,
		tip: Balance,
		already_withdrawn: Self::LiquidityInfo,
	) -> Result<(), TransactionValidityError>;
}

fn withdraw_reasons(tip: Balance) -> WithdrawReasons {
	if tip == 0 {
		WithdrawReasons::TRANSACTION_PAYMENT
	} else {
		WithdrawReasons::TRANSACTION_PAYMENT | WithdrawReasons::TIP
	}
}

/// Implements the transaction payment for a module implementing the `Currency`
/// trait (eg. the balances module) using an unbalance handler (implementing
/// `OnUnbalanced`).
///
/// The unbalance handler is given 2 unbalanceds in [`OnUnbalanced::on_unbalanceds`]: `fee` and
/// then `tip`.
pub struct CurrencyAdapter<C, OU>(PhantomData<(C, OU)>);

impl<T, C, OU> OnChargeTransaction<T> for CurrencyAdapter<C, OU>
where
	T: Config,
	C: Currency<<T as tessera_system::Config>::AccountId>,
	OU: OnUnbalanced<NegativeImbalanceOf<C, T>>,
{
	type LiquidityInfo = Option<NegativeImbalanceOf<C, T>>;

	/// Withdraw the predicted fee from the transaction origin.
	///
	/// Note: The `fee` already includes the `tip`.
	fn withdraw_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		_call: &T::RuntimeCall,
		_info: &DispatchInfoOf<T::RuntimeCall>,
		fee: Balance,
		tip: Balance,
	) -> Result<Self::LiquidityInfo, TransactionValidityError> {
		if fee == 0 {
			return Ok(None)
		}

		match C::withdraw(ext, who, fee, withdraw_reasons(tip), ExistenceRequirement::KeepAlive) {
			Ok(imbalance) => Ok(Some(imbalance)),
			Err(_) => Err(InvalidTransaction::Payment.into()),
		}
	}

	/// Run the withdrawal in a storage layer that is rolled back afterwards.
	fn can_withdraw_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		_call: &T::RuntimeCall,
		_info: &DispatchInfoOf<T::RuntimeCall>,
		fee: Balance,
		tip: Balance,
	) -> Result<(), TransactionValidityError> {
		if fee == 0 {
			return Ok(())
		}

		hypothetically!(
			ext,
			C::withdraw(ext, who, fee, withdraw_reasons(tip), ExistenceRequirement::KeepAlive)
				.map(|imbalance| imbalance.settle_issuance(ext))
		)
		.map_err(|_| InvalidTransaction::Payment.into())
	}

	/// Hand the fee and the tip over to the `[OnUnbalanced]` implementation.
	/// Since the predicted fee might have been too high, parts of the fee may
	/// be refunded.
	///
	/// Note: The `corrected_fee` already includes the `tip`.
	fn correct_and_deposit_fee(
		ext: &mut Externalities,
		who: &T::AccountId,
		_dispatch_info: &DispatchInfoOf<T::RuntimeCall>,
		_post_info: &PostDispatchInfoOf<T::RuntimeCall>,
		corrected_fee: Balance,
		tip: Balance,
		already_withdrawn: Self::LiquidityInfo,
	) -> Result<(), TransactionValidityError> {
		let Some(paid) = already_withdrawn else { return Ok(()) };

		// Calculate how much refund we should return
		let refund_amount = paid.peek().saturating_sub(corrected_fee);
		// refund to the the account that paid the fees. If this fails, the
		// account might have dropped below the existential balance. In
		// that case we don't refund anything.
		let refund_imbalance = C::deposit_into_existing(ext, who, refund_amount)
			.unwrap_or_else(|_| C::PositiveImbalance::zero());
		// merge the imbalance caused by paying the fees and refunding parts of it again.
		let adjusted_paid = match paid.offset(refund_imbalance) {
			SameOrOther::Same(paid) => paid,
			SameOrOther::None => NegativeImbalanceOf::<C, T>::zero(),
			SameOrOther::Other(surplus) => {
				surplus.settle_issuance(ext);
				return Err(InvalidTransaction::Payment.into())
			},
		};
		// Call someone else to handle the imbalance (fee and tip separately)
		let (tip, fee) = adjusted_paid.split(tip);
		OU::on_unbalanceds::<Balance>(ext, Some(fee).into_iter().chain(Some(tip)));
		Ok(())
	}
}
