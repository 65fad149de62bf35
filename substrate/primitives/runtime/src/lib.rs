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

//! # Tessera Runtime Primitives
//!
//! Types shared by every module of the runtime: the dispatch error taxonomy, the transaction
//! validity types, accounts and addresses, the storage boundary ([`Externalities`]) and the
//! generic extrinsic, header and block formats.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[doc(hidden)]
pub use codec;
#[doc(hidden)]
pub use log;
#[doc(hidden)]
pub use serde;

pub use tessera_weights::Weight;

pub mod arithmetic;
mod crypto;
pub mod generic;
pub mod hashing;
mod macros;
mod multiaddress;
pub mod storage;
pub mod testing;
pub mod traits;
pub mod transaction_validity;

pub use crate::{
	arithmetic::{FixedU128, Perbill},
	crypto::{AccountId32, MultiSignature, H256},
	multiaddress::MultiAddress,
	storage::{Backend, Externalities, InMemoryBackend},
};

use alloc::borrow::Cow;
use codec::{Decode, Encode, Error, Input, Output};
use core::fmt;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Account balance.
pub type Balance = u128;

/// Index of a transaction in the chain.
pub type Nonce = u32;

/// An index to a block.
pub type BlockNumber = u64;

/// This is the legacy return type of `Dispatchable`.
pub type DispatchResult = core::result::Result<(), DispatchError>;

/// Return type of a `Dispatchable` which contains the `DispatchResult` and additional information
/// about the `Dispatchable` that is only known post dispatch.
pub type DispatchResultWithInfo<T> = core::result::Result<T, DispatchErrorWithPostInfo<T>>;

/// Reason why a pallet call failed.
#[derive(Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct ModuleError {
	/// Module index, matching the metadata module index.
	pub index: u8,
	/// Module specific error value.
	pub error: u32,
	/// Optional error message.
	#[cfg_attr(feature = "std", serde(skip_deserializing))]
	pub message: Option<&'static str>,
}

impl PartialEq for ModuleError {
	fn eq(&self, other: &Self) -> bool {
		(self.index == other.index) && (self.error == other.error)
	}
}

impl Encode for ModuleError {
	fn size_hint(&self) -> usize {
		5
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.index.encode_to(dest);
		self.error.encode_to(dest);
	}
}

impl Decode for ModuleError {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let index = u8::decode(input).map_err(|e| e.expecting("ModuleError::index"))?;
		let error = u32::decode(input).map_err(|e| e.expecting("ModuleError::error"))?;
		Ok(Self { index, error, message: None })
	}
}

/// Errors related to transactional storage layers.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum TransactionalError {
	/// Too many transactional layers have been spawned.
	LimitReached,
	/// A transactional layer was expected, but does not exist.
	NoLayer,
}

codec::impl_codec_enum!(TransactionalError { LimitReached = 0, NoLayer = 1 });

impl From<TransactionalError> for &'static str {
	fn from(e: TransactionalError) -> &'static str {
		match e {
			TransactionalError::LimitReached => "Too many transactional layers have been spawned",
			TransactionalError::NoLayer => "A transactional layer was expected, but does not exist",
		}
	}
}

impl From<TransactionalError> for DispatchError {
	fn from(e: TransactionalError) -> DispatchError {
		Self::Transactional(e)
	}
}

/// Description of what went wrong when trying to complete an operation on a token.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum TokenError {
	/// Funds are unavailable.
	FundsUnavailable,
	/// Some part of the balance gives the only provider reference to the account and thus cannot
	/// be (re)moved.
	OnlyProvider,
	/// Account cannot exist with the funds that would be given.
	BelowMinimum,
	/// Account cannot be created.
	CannotCreate,
	/// The asset in question is unknown.
	UnknownAsset,
	/// Funds exist but are frozen.
	Frozen,
	/// Operation is not supported by the asset.
	Unsupported,
}

codec::impl_codec_enum!(TokenError {
	FundsUnavailable = 0,
	OnlyProvider = 1,
	BelowMinimum = 2,
	CannotCreate = 3,
	UnknownAsset = 4,
	Frozen = 5,
	Unsupported = 6,
});

impl From<TokenError> for &'static str {
	fn from(e: TokenError) -> &'static str {
		match e {
			TokenError::FundsUnavailable => "Funds are unavailable",
			TokenError::OnlyProvider => "Account that must exist would die",
			TokenError::BelowMinimum => "Account cannot exist with the funds that would be given",
			TokenError::CannotCreate => "Account cannot be created",
			TokenError::UnknownAsset => "The asset in question is unknown",
			TokenError::Frozen => "Funds exist but are frozen",
			TokenError::Unsupported => "Operation is not supported by the asset",
		}
	}
}

impl From<TokenError> for DispatchError {
	fn from(e: TokenError) -> DispatchError {
		Self::Token(e)
	}
}

/// Arithmetic errors.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
	/// Underflow.
	Underflow,
	/// Overflow.
	Overflow,
	/// Division by zero.
	DivisionByZero,
}

codec::impl_codec_enum!(ArithmeticError { Underflow = 0, Overflow = 1, DivisionByZero = 2 });

impl From<ArithmeticError> for &'static str {
	fn from(e: ArithmeticError) -> &'static str {
		match e {
			ArithmeticError::Underflow => "An underflow would occur",
			ArithmeticError::Overflow => "An overflow would occur",
			ArithmeticError::DivisionByZero => "Division by zero",
		}
	}
}

impl From<ArithmeticError> for DispatchError {
	fn from(e: ArithmeticError) -> DispatchError {
		Self::Arithmetic(e)
	}
}

/// Reason why a dispatch call failed.
///
/// The discriminants are part of the wire format and never change.
#[derive(Eq, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum DispatchError {
	/// Some error occurred.
	Other(Cow<'static, str>),
	/// Failed to lookup some data.
	CannotLookup,
	/// A bad origin.
	BadOrigin,
	/// A custom error in a module.
	Module(ModuleError),
	/// At least one consumer is remaining so the account cannot be destroyed.
	ConsumerRemaining,
	/// There are no providers so the account cannot be created.
	NoProviders,
	/// There are too many consumers so the account cannot be created.
	TooManyConsumers,
	/// An error to do with tokens.
	Token(TokenError),
	/// An arithmetic error.
	Arithmetic(ArithmeticError),
	/// The number of transactional layers has been reached, or we are not in a transactional
	/// layer.
	Transactional(TransactionalError),
	/// Resources exhausted, e.g. attempt to read/write data which is too large to manipulate.
	Exhausted,
	/// The state is corrupt; this is generally not going to fix itself.
	Corruption,
	/// Some resource (e.g. a preimage) is unavailable right now. This might fix itself later.
	Unavailable,
}

impl DispatchError {
	/// Return the same error but without the attached message.
	pub fn stripped(self) -> Self {
		match self {
			DispatchError::Module(ModuleError { index, error, message: Some(_) }) =>
				DispatchError::Module(ModuleError { index, error, message: None }),
			m => m,
		}
	}

	/// A short human readable description of the error.
	pub fn as_str(&self) -> &str {
		use DispatchError::*;
		match self {
			Other(msg) => msg.as_ref(),
			CannotLookup => "Cannot lookup",
			BadOrigin => "Bad origin",
			Module(ModuleError { message, .. }) => message.unwrap_or("Unknown module error"),
			ConsumerRemaining => "Consumer remaining",
			NoProviders => "No providers",
			TooManyConsumers => "Too many consumers",
			Token(e) => (*e).into(),
			Arithmetic(e) => (*e).into(),
			Transactional(e) => (*e).into(),
			Exhausted => "Resources exhausted",
			Corruption => "State corrupt",
			Unavailable => "Resource unavailable",
		}
	}
}

impl fmt::Display for DispatchError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			DispatchError::Module(ModuleError { index, error, message }) => write!(
				f,
				"Module error: index {}, error {}, {}",
				index,
				error,
				message.unwrap_or("no message")
			),
			other => f.write_str(other.as_str()),
		}
	}
}

impl Encode for DispatchError {
	fn size_hint(&self) -> usize {
		1 + match self {
			DispatchError::Other(msg) => msg.size_hint(),
			DispatchError::Module(e) => e.size_hint(),
			DispatchError::Token(_) | DispatchError::Arithmetic(_) | DispatchError::Transactional(_) =>
				1,
			_ => 0,
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		use DispatchError::*;
		match self {
			Other(msg) => {
				dest.push_byte(0);
				msg.encode_to(dest);
			},
			CannotLookup => dest.push_byte(1),
			BadOrigin => dest.push_byte(2),
			Module(e) => {
				dest.push_byte(3);
				e.encode_to(dest);
			},
			ConsumerRemaining => dest.push_byte(4),
			NoProviders => dest.push_byte(5),
			TooManyConsumers => dest.push_byte(6),
			Token(e) => {
				dest.push_byte(7);
				e.encode_to(dest);
			},
			Arithmetic(e) => {
				dest.push_byte(8);
				e.encode_to(dest);
			},
			Transactional(e) => {
				dest.push_byte(9);
				e.encode_to(dest);
			},
			Exhausted => dest.push_byte(10),
			Corruption => dest.push_byte(11),
			Unavailable => dest.push_byte(12),
		}
	}
}

impl Decode for DispatchError {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		use DispatchError::*;
		let err = |e: Error| e.expecting("DispatchError");
		Ok(match input.read_byte().map_err(err)? {
			0 => Other(Cow::decode(input).map_err(err)?),
			1 => CannotLookup,
			2 => BadOrigin,
			3 => Module(ModuleError::decode(input).map_err(err)?),
			4 => ConsumerRemaining,
			5 => NoProviders,
			6 => TooManyConsumers,
			7 => Token(TokenError::decode(input).map_err(err)?),
			8 => Arithmetic(ArithmeticError::decode(input).map_err(err)?),
			9 => Transactional(TransactionalError::decode(input).map_err(err)?),
			10 => Exhausted,
			11 => Corruption,
			12 => Unavailable,
			index => return Err(Error::unknown_variant("DispatchError", index)),
		})
	}
}

impl From<&'static str> for DispatchError {
	fn from(err: &'static str) -> DispatchError {
		Self::Other(Cow::Borrowed(err))
	}
}

impl From<crate::traits::LookupError> for DispatchError {
	fn from(_: crate::traits::LookupError) -> Self {
		Self::CannotLookup
	}
}

impl From<crate::traits::BadOrigin> for DispatchError {
	fn from(_: crate::traits::BadOrigin) -> Self {
		Self::BadOrigin
	}
}

/// Result of a `Dispatchable` which contains the `DispatchResult` and additional information about
/// the `Dispatchable` that is only known post dispatch.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct DispatchErrorWithPostInfo<Info> {
	/// Additional information about the `Dispatchable` which is only known post dispatch.
	pub post_info: Info,
	/// The actual `DispatchResult` indicating whether the dispatch was successful.
	pub error: DispatchError,
}

codec::impl_codec_struct!(DispatchErrorWithPostInfo<Info> { post_info, error });

impl<T, E> From<E> for DispatchErrorWithPostInfo<T>
where
	T: Default,
	E: Into<DispatchError>,
{
	fn from(error: E) -> Self {
		Self { post_info: Default::default(), error: error.into() }
	}
}

/// This type specifies the outcome of dispatching a call to a module.
///
/// In case of failure an error specific to the module is returned.
///
/// A failed call does not invalidate its extrinsic: it is still included in the block. The
/// storage writes of the call itself are rolled back, while the writes made before dispatch, such
/// as the fee withdrawal and the nonce increment, are kept.
pub type DispatchOutcome = Result<(), DispatchError>;

/// The result of applying of an extrinsic.
///
/// This type is typically used in the context of block building to signal that the extrinsic
/// in question cannot be included.
///
/// A block containing extrinsics that have a negative inclusion outcome is invalid. A negative
/// result can only occur during the block production, where such extrinsics are detected and
/// removed from the block that is being created and the transaction pool.
pub type ApplyExtrinsicResult =
	Result<DispatchOutcome, transaction_validity::TransactionValidityError>;

/// Same as `ApplyExtrinsicResult` but augmented with `PostDispatchInfo` on success.
pub type ApplyExtrinsicResultWithInfo<T> =
	Result<DispatchResultWithInfo<T>, transaction_validity::TransactionValidityError>;

/// Describes on what should happen with a storage transaction.
pub enum TransactionOutcome<R> {
	/// Commit the transaction.
	Commit(R),
	/// Rollback the transaction.
	Rollback(R),
}

impl<R> TransactionOutcome<R> {
	/// Convert into the inner type.
	pub fn into_inner(self) -> R {
		match self {
			Self::Commit(r) => r,
			Self::Rollback(r) => r,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn dispatch_error_encoding() {
		let error = DispatchError::Module(ModuleError {
			index: 1,
			error: 2,
			message: Some("error message"),
		});
		let encoded = error.encode();
		let decoded = DispatchError::decode(&mut &encoded[..]).unwrap();
		assert_eq!(encoded, vec![3, 1, 2, 0, 0, 0]);
		assert_eq!(decoded, DispatchError::Module(ModuleError { index: 1, error: 2, message: None }));
	}

	#[rstest]
	#[case(DispatchError::Other("abc".into()), vec![0, 12, b'a', b'b', b'c'])]
	#[case(DispatchError::CannotLookup, vec![1])]
	#[case(DispatchError::BadOrigin, vec![2])]
	#[case(DispatchError::ConsumerRemaining, vec![4])]
	#[case(DispatchError::NoProviders, vec![5])]
	#[case(DispatchError::TooManyConsumers, vec![6])]
	#[case(DispatchError::Token(TokenError::Frozen), vec![7, 5])]
	#[case(DispatchError::Arithmetic(ArithmeticError::DivisionByZero), vec![8, 2])]
	#[case(DispatchError::Transactional(TransactionalError::NoLayer), vec![9, 1])]
	#[case(DispatchError::Exhausted, vec![10])]
	#[case(DispatchError::Corruption, vec![11])]
	#[case(DispatchError::Unavailable, vec![12])]
	fn dispatch_error_discriminants_are_stable(#[case] error: DispatchError, #[case] bytes: Vec<u8>) {
		assert_eq!(error.encode(), bytes);
		assert_eq!(error.size_hint(), bytes.len());
		assert_eq!(DispatchError::decode(&mut &bytes[..]).unwrap(), error);
	}

	#[test]
	fn unknown_dispatch_error_is_rejected() {
		let err = DispatchError::decode(&mut &[13u8][..]).unwrap_err();
		assert_eq!(err.reason(), codec::Reason::UnknownVariant(13));
		assert_eq!(err.expected(), Some("DispatchError"));
		assert!(DispatchError::decode(&mut &[7u8, 9][..]).is_err());
	}

	#[test]
	fn dispatch_error_equality() {
		use DispatchError::*;

		let variants = vec![
			Other("foo".into()),
			Other("bar".into()),
			CannotLookup,
			BadOrigin,
			Module(ModuleError { index: 1, error: 1, message: None }),
			Module(ModuleError { index: 1, error: 2, message: None }),
			Module(ModuleError { index: 2, error: 1, message: None }),
			ConsumerRemaining,
			NoProviders,
			Token(TokenError::FundsUnavailable),
			Token(TokenError::OnlyProvider),
			Token(TokenError::BelowMinimum),
			Token(TokenError::CannotCreate),
			Token(TokenError::UnknownAsset),
			Token(TokenError::Frozen),
			Arithmetic(ArithmeticError::Overflow),
			Arithmetic(ArithmeticError::Underflow),
			Arithmetic(ArithmeticError::DivisionByZero),
		];
		for (i, variant) in variants.iter().enumerate() {
			for (j, other_variant) in variants.iter().enumerate() {
				if i == j {
					assert_eq!(variant, other_variant);
				} else {
					assert_ne!(variant, other_variant);
				}
			}
		}

		// Ignores `message` field in `Module` variant.
		assert_eq!(
			Module(ModuleError { index: 1, error: 1, message: Some("foo") }),
			Module(ModuleError { index: 1, error: 1, message: None }),
		);
	}

	#[test]
	fn error_with_post_info_encodes_info_first() {
		let err: DispatchErrorWithPostInfo<u8> = DispatchError::BadOrigin.into();
		assert_eq!(err.post_info, 0);
		let err = DispatchErrorWithPostInfo { post_info: 7u8, ..err };
		assert_eq!(err.encode(), vec![7, 2]);
	}

	#[test]
	fn display_uses_descriptions() {
		assert_eq!(DispatchError::Token(TokenError::Frozen).to_string(), "Funds exist but are frozen");
		assert_eq!(
			DispatchError::Module(ModuleError { index: 5, error: 2, message: Some("InsufficientBalance") })
				.to_string(),
			"Module error: index 5, error 2, InsufficientBalance"
		);
	}
}
