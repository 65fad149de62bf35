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

//! Transaction validity interface.

use alloc::vec::Vec;
use codec::{Decode, Encode, Error, Input, Output};
use core::fmt;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Priority for a transaction. Additive. Higher is better.
pub type TransactionPriority = u64;

/// Minimum number of blocks a transaction will remain valid for.
/// `TransactionLongevity::max_value()` means "forever".
pub type TransactionLongevity = u64;

/// Tag for a transaction. No two transactions with the same tag should be placed on-chain.
pub type TransactionTag = Vec<u8>;

/// An invalid transaction validity.
#[derive(Clone, PartialEq, Eq, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum InvalidTransaction {
	/// The call of the transaction is not expected.
	Call,
	/// General error to do with the inability to pay some fees (e.g. account balance too low).
	Payment,
	/// General error to do with the transaction not yet being valid (e.g. nonce too high).
	Future,
	/// General error to do with the transaction being outdated (e.g. nonce too low).
	Stale,
	/// General error to do with the transaction's proofs (e.g. signature).
	///
	/// # Possible causes
	///
	/// When using a signed extension that provides additional data for signing, it is required
	/// that the signing and the verifying side use the same additional data. Additional
	/// data will only be used to generate the signature, but will not be part of the transaction
	/// itself. As the verifying side does not know which additional data was used while signing
	/// it will only be able to assume a bad signature and cannot express a more meaningful error.
	BadProof,
	/// The transaction birth block is ancient.
	///
	/// # Possible causes
	///
	/// This would be caused by `current block number - Era::birth block number >
	/// BlockHashCount`. (e.g. with `BlockHashCount` = 2400, a transaction with birth block
	/// number 1337 would be valid up until block number 1337 + 2400, after which point the
	/// transaction would be considered to have an ancient birth block.)
	AncientBirthBlock,
	/// The transaction would exhaust the resources of current block.
	///
	/// The transaction might be valid, but there are not enough resources
	/// left in the current block.
	ExhaustsResources,
	/// Any other custom invalid validity that is not covered by this enum.
	Custom(u8),
	/// An extrinsic with a Mandatory dispatch resulted in Error. This is indicative of either a
	/// malicious validator or a buggy `provide_inherent`. In any case, it can result in
	/// dangerously overweight blocks and therefore if found, invalidates the block.
	BadMandatory,
	/// An extrinsic with a mandatory dispatch tried to be validated.
	/// This is invalid; only inherent extrinsics are allowed to have mandatory dispatches.
	MandatoryValidation,
	/// The sending address is disabled or known to be invalid.
	BadSigner,
}

impl InvalidTransaction {
	/// Returns if the reason for the invalidity was block resource exhaustion.
	pub fn exhausted_resources(&self) -> bool {
		matches!(self, Self::ExhaustsResources)
	}

	/// Returns if the reason for the invalidity was a mandatory call failing.
	pub fn was_mandatory(&self) -> bool {
		matches!(self, Self::BadMandatory)
	}
}

impl From<InvalidTransaction> for &'static str {
	fn from(invalid: InvalidTransaction) -> &'static str {
		match invalid {
			InvalidTransaction::Call => "Transaction call is not expected",
			InvalidTransaction::Future => "Transaction will be valid in the future",
			InvalidTransaction::Stale => "Transaction is outdated",
			InvalidTransaction::BadProof => "Transaction has a bad signature",
			InvalidTransaction::AncientBirthBlock => "Transaction has an ancient birth block",
			InvalidTransaction::ExhaustsResources => "Transaction would exhaust the block limits",
			InvalidTransaction::Payment =>
				"Inability to pay some fees (e.g. account balance too low)",
			InvalidTransaction::BadMandatory =>
				"A call was labelled as mandatory, but resulted in an Error.",
			InvalidTransaction::MandatoryValidation =>
				"Transaction dispatch is mandatory; transactions must not be validated.",
			InvalidTransaction::Custom(_) => "InvalidTransaction custom error",
			InvalidTransaction::BadSigner => "Invalid signing address",
		}
	}
}

impl Encode for InvalidTransaction {
	fn size_hint(&self) -> usize {
		match self {
			InvalidTransaction::Custom(_) => 2,
			_ => 1,
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		let index = match self {
			InvalidTransaction::Call => 0,
			InvalidTransaction::Payment => 1,
			InvalidTransaction::Future => 2,
			InvalidTransaction::Stale => 3,
			InvalidTransaction::BadProof => 4,
			InvalidTransaction::AncientBirthBlock => 5,
			InvalidTransaction::ExhaustsResources => 6,
			InvalidTransaction::Custom(code) => {
				dest.push_byte(7);
				dest.push_byte(*code);
				return
			},
			InvalidTransaction::BadMandatory => 8,
			InvalidTransaction::MandatoryValidation => 9,
			InvalidTransaction::BadSigner => 10,
		};
		dest.push_byte(index);
	}
}

impl Decode for InvalidTransaction {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let err = |e: Error| e.expecting("InvalidTransaction");
		Ok(match input.read_byte().map_err(err)? {
			0 => InvalidTransaction::Call,
			1 => InvalidTransaction::Payment,
			2 => InvalidTransaction::Future,
			3 => InvalidTransaction::Stale,
			4 => InvalidTransaction::BadProof,
			5 => InvalidTransaction::AncientBirthBlock,
			6 => InvalidTransaction::ExhaustsResources,
			7 => InvalidTransaction::Custom(input.read_byte().map_err(err)?),
			8 => InvalidTransaction::BadMandatory,
			9 => InvalidTransaction::MandatoryValidation,
			10 => InvalidTransaction::BadSigner,
			index => return Err(Error::unknown_variant("InvalidTransaction", index)),
		})
	}
}

/// An unknown transaction validity.
#[derive(Clone, PartialEq, Eq, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum UnknownTransaction {
	/// Could not lookup some information that is required to validate the transaction.
	CannotLookup,
	/// No validator found for the given unsigned transaction.
	NoUnsignedValidator,
	/// Any other custom unknown validity that is not covered by this enum.
	Custom(u8),
}

impl From<UnknownTransaction> for &'static str {
	fn from(unknown: UnknownTransaction) -> &'static str {
		match unknown {
			UnknownTransaction::CannotLookup =>
				"Could not lookup information required to validate the transaction",
			UnknownTransaction::NoUnsignedValidator =>
				"Could not find an unsigned validator for the unsigned transaction",
			UnknownTransaction::Custom(_) => "UnknownTransaction custom error",
		}
	}
}

impl Encode for UnknownTransaction {
	fn size_hint(&self) -> usize {
		match self {
			UnknownTransaction::Custom(_) => 2,
			_ => 1,
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match self {
			UnknownTransaction::CannotLookup => dest.push_byte(0),
			UnknownTransaction::NoUnsignedValidator => dest.push_byte(1),
			UnknownTransaction::Custom(code) => {
				dest.push_byte(2);
				dest.push_byte(*code);
			},
		}
	}
}

impl Decode for UnknownTransaction {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let err = |e: Error| e.expecting("UnknownTransaction");
		Ok(match input.read_byte().map_err(err)? {
			0 => UnknownTransaction::CannotLookup,
			1 => UnknownTransaction::NoUnsignedValidator,
			2 => UnknownTransaction::Custom(input.read_byte().map_err(err)?),
			index => return Err(Error::unknown_variant("UnknownTransaction", index)),
		})
	}
}

/// Errors that can occur while checking the validity of a transaction.
#[derive(Clone, PartialEq, Eq, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum TransactionValidityError {
	/// The transaction is invalid.
	Invalid(InvalidTransaction),
	/// Transaction validity can't be determined.
	Unknown(UnknownTransaction),
}

impl TransactionValidityError {
	/// Returns `true` if the reason for the error was block resource exhaustion.
	pub fn exhausted_resources(&self) -> bool {
		match self {
			Self::Invalid(e) => e.exhausted_resources(),
			Self::Unknown(_) => false,
		}
	}

	/// Returns `true` if the reason for the error was it being a mandatory dispatch that could not
	/// be completed successfully.
	pub fn was_mandatory(&self) -> bool {
		match self {
			Self::Invalid(e) => e.was_mandatory(),
			Self::Unknown(_) => false,
		}
	}
}

impl From<TransactionValidityError> for &'static str {
	fn from(err: TransactionValidityError) -> &'static str {
		match err {
			TransactionValidityError::Invalid(invalid) => invalid.into(),
			TransactionValidityError::Unknown(unknown) => unknown.into(),
		}
	}
}

impl fmt::Display for TransactionValidityError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let s: &'static str = (*self).into();
		write!(f, "{}", s)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for TransactionValidityError {}

impl From<InvalidTransaction> for TransactionValidityError {
	fn from(err: InvalidTransaction) -> Self {
		TransactionValidityError::Invalid(err)
	}
}

impl From<UnknownTransaction> for TransactionValidityError {
	fn from(err: UnknownTransaction) -> Self {
		TransactionValidityError::Unknown(err)
	}
}

impl Encode for TransactionValidityError {
	fn size_hint(&self) -> usize {
		1 + match self {
			Self::Invalid(e) => e.size_hint(),
			Self::Unknown(e) => e.size_hint(),
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match self {
			Self::Invalid(e) => {
				dest.push_byte(0);
				e.encode_to(dest);
			},
			Self::Unknown(e) => {
				dest.push_byte(1);
				e.encode_to(dest);
			},
		}
	}
}

impl Decode for TransactionValidityError {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let err = |e: Error| e.expecting("TransactionValidityError");
		match input.read_byte().map_err(err)? {
			0 => Ok(Self::Invalid(InvalidTransaction::decode(input).map_err(err)?)),
			1 => Ok(Self::Unknown(UnknownTransaction::decode(input).map_err(err)?)),
			index => Err(Error::unknown_variant("TransactionValidityError", index)),
		}
	}
}

/// Information on a transaction's validity and, if valid, on how it relates to other transactions.
pub type TransactionValidity = Result<ValidTransaction, TransactionValidityError>;

impl From<InvalidTransaction> for TransactionValidity {
	fn from(invalid_transaction: InvalidTransaction) -> Self {
		Err(TransactionValidityError::Invalid(invalid_transaction))
	}
}

impl From<UnknownTransaction> for TransactionValidity {
	fn from(unknown_transaction: UnknownTransaction) -> Self {
		Err(TransactionValidityError::Unknown(unknown_transaction))
	}
}

/// The source of the transaction.
///
/// Depending on the source we might apply different validation schemes.
/// For instance we can disallow specific kinds of transactions if they were not produced
/// by our local node (for instance off-chain workers).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TransactionSource {
	/// Transaction is already included in block.
	///
	/// This means that we can't really tell where the transaction is coming from,
	/// since it's already in the received block. Note that the custom validation logic
	/// using either `Local` or `External` should most likely just allow `InBlock`
	/// transactions as well.
	InBlock,
	/// Transaction is coming from a local source.
	///
	/// This means that the transaction was produced internally by the node
	/// (for instance an Off-Chain Worker, or an Off-Chain Call), as opposed
	/// to being received over the network.
	Local,
	/// Transaction has been received externally.
	///
	/// This means the transaction has been received from (usually) "untrusted" source,
	/// for instance received over the network or RPC.
	External,
}

codec::impl_codec_enum!(TransactionSource { InBlock = 0, Local = 1, External = 2 });

/// Information concerning a valid transaction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ValidTransaction {
	/// Priority of the transaction.
	///
	/// Priority determines the ordering of two transactions that have all
	/// their dependencies (required tags) satisfied.
	pub priority: TransactionPriority,
	/// Transaction dependencies
	///
	/// A non-empty list signifies that some other transactions which provide
	/// given tags are required to be included before that one.
	pub requires: Vec<TransactionTag>,
	/// Provided tags
	///
	/// A list of tags this transaction provides. Successfully importing the transaction
	/// will enable other transactions that depend on (require) those tags to be included as well.
	/// Provided and required tags allow Substrate to build a dependency graph of transactions
	/// and import them in the right (linear) order.
	pub provides: Vec<TransactionTag>,
	/// Transaction longevity
	///
	/// Longevity describes minimum number of blocks the validity is correct.
	/// After this period transaction should be removed from the pool or revalidated.
	pub longevity: TransactionLongevity,
	/// A flag indicating if the transaction should be propagated to other peers.
	///
	/// By setting `false` here the transaction will still be considered for
	/// including in blocks that are authored on the current node, but will
	/// never be sent to other peers.
	pub propagate: bool,
}

codec::impl_codec_struct!(ValidTransaction { priority, requires, provides, longevity, propagate });

impl Default for ValidTransaction {
	fn default() -> Self {
		Self {
			priority: 0,
			requires: Vec::new(),
			provides: Vec::new(),
			longevity: TransactionLongevity::MAX,
			propagate: true,
		}
	}
}

impl ValidTransaction {
	/// Combine two instances into one, as a best effort. This will take the superset of each of the
	/// `provides` and `requires` tags, it will sum the priorities, take the minimum longevity and
	/// the logic *And* of the propagate flags.
	pub fn combine_with(mut self, mut other: ValidTransaction) -> Self {
		Self {
			priority: self.priority.saturating_add(other.priority),
			requires: {
				self.requires.append(&mut other.requires);
				self.requires
			},
			provides: {
				self.provides.append(&mut other.provides);
				self.provides
			},
			longevity: self.longevity.min(other.longevity),
			propagate: self.propagate && other.propagate,
		}
	}
}
