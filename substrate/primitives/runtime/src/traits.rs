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

//! Primitive traits for the runtime.

use crate::{
	storage::Externalities,
	transaction_validity::{
		TransactionSource, TransactionValidity, TransactionValidityError, UnknownTransaction,
		ValidTransaction,
	},
	AccountId32, DispatchResult, MultiAddress,
};
use alloc::vec::Vec;
use codec::{Codec, Decode, Encode};
use core::{fmt::Debug, marker::PhantomData};

/// A type that can be used in runtime structures.
pub trait Member: Send + Sync + Sized + Debug + Eq + PartialEq + Clone + 'static {}
impl<T: Send + Sync + Sized + Debug + Eq + PartialEq + Clone + 'static> Member for T {}

/// A trait for querying a single value from a type.
///
/// It is not required that the value is constant.
pub trait Get<T> {
	/// Return the current value.
	fn get() -> T;
}

impl<T: Default> Get<T> for () {
	fn get() -> T {
		T::default()
	}
}

/// A trait for querying a single value from a type defined in the trait.
///
/// It is not required that the value is constant.
pub trait TypedGet {
	/// The type which is returned.
	type Type;
	/// Return the current value.
	fn get() -> Self::Type;
}

/// Implement Get by returning Default for any type that implements Default.
pub struct GetDefault;
impl<T: Default> Get<T> for GetDefault {
	fn get() -> T {
		T::default()
	}
}

macro_rules! impl_const_get {
	($name:ident, $t:ty) => {
		/// Const getter for a basic type.
		#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
		pub struct $name<const T: $t>;

		impl<const T: $t> Get<$t> for $name<T> {
			fn get() -> $t {
				T
			}
		}
		impl<const T: $t> Get<Option<$t>> for $name<T> {
			fn get() -> Option<$t> {
				Some(T)
			}
		}
		impl<const T: $t> TypedGet for $name<T> {
			type Type = $t;
			fn get() -> $t {
				T
			}
		}
	};
}

impl_const_get!(ConstBool, bool);
impl_const_get!(ConstU8, u8);
impl_const_get!(ConstU16, u16);
impl_const_get!(ConstU32, u32);
impl_const_get!(ConstU64, u64);
impl_const_get!(ConstU128, u128);

/// Infallible conversion trait. Generic over both source and destination types.
pub trait Convert<A, B> {
	/// Make conversion.
	fn convert(a: A) -> B;
}

impl<A, B: Default> Convert<A, B> for () {
	fn convert(_: A) -> B {
		Default::default()
	}
}

/// A structure that performs identity conversion.
pub struct Identity;
impl<T> Convert<T, T> for Identity {
	fn convert(a: T) -> T {
		a
	}
}

/// An error type that indicates that the origin is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadOrigin;

impl From<BadOrigin> for &'static str {
	fn from(_: BadOrigin) -> &'static str {
		"Bad origin"
	}
}

/// An error that indicates that a lookup failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LookupError;

impl From<LookupError> for &'static str {
	fn from(_: LookupError) -> &'static str {
		"Can not lookup"
	}
}

impl From<LookupError> for TransactionValidityError {
	fn from(_: LookupError) -> Self {
		UnknownTransaction::CannotLookup.into()
	}
}

/// Means of changing one type into another in a manner dependent on the source type.
pub trait Lookup {
	/// Type to lookup from.
	type Source;
	/// Type to lookup into.
	type Target;
	/// Attempt a lookup.
	fn lookup(&self, s: Self::Source) -> Result<Self::Target, LookupError>;
}

/// Means of changing one type into another in a manner dependent on the source type.
/// This variant is different to `Lookup` in that it doesn't (can cannot) require any
/// context.
pub trait StaticLookup {
	/// Type to lookup from.
	type Source: Codec + Clone + PartialEq + Debug;
	/// Type to lookup into.
	type Target;
	/// Attempt a lookup.
	fn lookup(s: Self::Source) -> Result<Self::Target, LookupError>;
	/// Convert from Target back to Source.
	fn unlookup(t: Self::Target) -> Self::Source;
}

/// A lookup implementation returning the input value.
#[derive(Default)]
pub struct IdentityLookup<T>(PhantomData<T>);

impl<T: Codec + Clone + PartialEq + Debug> StaticLookup for IdentityLookup<T> {
	type Source = T;
	type Target = T;
	fn lookup(x: T) -> Result<T, LookupError> {
		Ok(x)
	}
	fn unlookup(x: T) -> T {
		x
	}
}

impl<T> Lookup for IdentityLookup<T> {
	type Source = T;
	type Target = T;
	fn lookup(&self, x: T) -> Result<T, LookupError> {
		Ok(x)
	}
}

/// A lookup implementation resolving a [`MultiAddress`] into an [`AccountId32`].
///
/// Only the `Id` and `Address32` forms can be resolved; there is no account index.
pub struct AccountIdLookup<AccountIndex = u32>(PhantomData<AccountIndex>);

impl<AccountIndex> StaticLookup for AccountIdLookup<AccountIndex>
where
	AccountIndex: Copy + Clone + PartialEq + Debug,
	codec::Compact<AccountIndex>: Codec,
{
	type Source = MultiAddress<AccountId32, AccountIndex>;
	type Target = AccountId32;

	fn lookup(x: Self::Source) -> Result<Self::Target, LookupError> {
		match x {
			MultiAddress::Id(id) => Ok(id),
			MultiAddress::Address32(raw) => Ok(AccountId32::from(raw)),
			_ => Err(LookupError),
		}
	}

	fn unlookup(x: Self::Target) -> Self::Source {
		MultiAddress::Id(x)
	}
}

/// Signature verification, supplied to the runtime by its environment.
///
/// Implemented by a context type rather than by the signature itself, so the runtime never has to
/// carry a cryptographic implementation.
pub trait Verify<Signature> {
	/// The identity a signature is checked against.
	type Signer;

	/// Verify `signature` over `msg` by `signer`.
	fn verify(&self, signature: &Signature, msg: &[u8], signer: &Self::Signer) -> bool;
}

/// A "checkable" piece of information, used by the executive in order to check the validity of a
/// piece of extrinsic information, usually by verifying the signature.
///
/// Implement for pieces of information that require some additional context `Context` in order
/// to be checked.
pub trait Checkable<Context>: Sized {
	/// Returned if `check` succeeds.
	type Checked;

	/// Check self, given an instance of Context and read access to the state.
	fn check(self, ext: &Externalities, c: &Context)
		-> Result<Self::Checked, TransactionValidityError>;
}

/// Something that acts like an `Extrinsic`.
pub trait Extrinsic: Sized {
	/// Is this `Extrinsic` signed?
	/// If no information are available about signed/unsigned, `None` should be returned.
	fn is_signed(&self) -> Option<bool> {
		None
	}
}

/// A lazy call (module function and argument values) that can be executed via its `dispatch`
/// method.
pub trait Dispatchable {
	/// Every function call from your runtime has an origin, which specifies where the extrinsic
	/// was generated from. In the case of a signed extrinsic (transaction), the origin contains
	/// an identifier for the caller. The origin can be empty in the case of an inherent
	/// extrinsic.
	type RuntimeOrigin;
	/// An opaque set of information attached to the transaction.
	type Info;
	/// Additional information that is returned by `dispatch`. Can be used to supply the caller
	/// with information about a `Dispatchable` that is only known post dispatch.
	type PostInfo: Eq + PartialEq + Clone + Copy + Encode + Decode + Debug;
	/// Actually dispatch this call and return the result of it.
	fn dispatch(
		self,
		ext: &mut Externalities,
		origin: Self::RuntimeOrigin,
	) -> crate::DispatchResultWithInfo<Self::PostInfo>;
}

/// Shortcut to reference the `Info` type of a `Dispatchable`.
pub type DispatchInfoOf<T> = <T as Dispatchable>::Info;
/// Shortcut to reference the `PostInfo` type of a `Dispatchable`.
pub type PostDispatchInfoOf<T> = <T as Dispatchable>::PostInfo;

/// Means by which a transaction may be extended. This type embodies both the data and the logic
/// that should be additionally associated with the transaction. It should be plain old data.
///
/// Every hook receives the execution context. Hooks run in the order the extensions are listed
/// in a tuple and the first failure stops the pipeline.
pub trait SignedExtension: Codec + Debug + Clone + Eq + PartialEq {
	/// Unique identifier of this signed extension.
	const IDENTIFIER: &'static str;

	/// The type which encodes the sender identity.
	type AccountId;

	/// The type which encodes the call to be dispatched.
	type Call: Dispatchable;

	/// Any additional data that will go into the signed payload. This may be created dynamically
	/// from the transaction using the `additional_signed` function.
	type AdditionalSigned: Encode;

	/// The type that encodes information that can be passed from pre_dispatch to post-dispatch.
	type Pre;

	/// Construct any additional data that should be in the signed payload of the transaction.
	/// Can also perform any pre-signature-verification checks and return an error if needed.
	fn additional_signed(
		&self,
		ext: &Externalities,
	) -> Result<Self::AdditionalSigned, TransactionValidityError>;

	/// Validate a signed transaction for the transaction queue.
	///
	/// Make sure to perform the same checks in `pre_dispatch` function.
	fn validate(
		&self,
		_ext: &mut Externalities,
		_who: &Self::AccountId,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> TransactionValidity {
		Ok(ValidTransaction::default())
	}

	/// Do any pre-flight stuff for a signed transaction.
	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<Self::Pre, TransactionValidityError>;

	/// Validate an unsigned transaction for the transaction queue.
	fn validate_unsigned(
		_ext: &mut Externalities,
		_call: &Self::Call,
		_info: &DispatchInfoOf<Self::Call>,
		_len: usize,
	) -> TransactionValidity {
		Ok(ValidTransaction::default())
	}

	/// Do any pre-flight stuff for an unsigned transaction.
	///
	/// Delegates to `validate_unsigned` by default.
	fn pre_dispatch_unsigned(
		ext: &mut Externalities,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		Self::validate_unsigned(ext, call, info, len).map(|_| ())
	}

	/// Do any post-flight stuff for an extrinsic.
	///
	/// If the transaction is signed, then `pre` will contain the output of `pre_dispatch`, and
	/// `None` otherwise. Returning an error here invalidates the whole block.
	fn post_dispatch(
		_ext: &mut Externalities,
		_pre: Option<Self::Pre>,
		_info: &DispatchInfoOf<Self::Call>,
		_post_info: &PostDispatchInfoOf<Self::Call>,
		_len: usize,
		_result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	/// The identifiers of this extension and, for tuples, of every member in order.
	fn identifier() -> Vec<&'static str> {
		alloc::vec![Self::IDENTIFIER]
	}
}

#[impl_trait_for_tuples::impl_for_tuples(1, 10)]
impl<AccountId, Call: Dispatchable> SignedExtension for Tuple {
	for_tuples!( where #( Tuple: SignedExtension<AccountId=AccountId, Call=Call,> )* );
	type AccountId = AccountId;
	type Call = Call;
	const IDENTIFIER: &'static str = "You should call `identifier()`!";
	for_tuples!( type AdditionalSigned = ( #( Tuple::AdditionalSigned ),* ); );
	for_tuples!( type Pre = ( #( Tuple::Pre ),* ); );

	fn additional_signed(
		&self,
		ext: &Externalities,
	) -> Result<Self::AdditionalSigned, TransactionValidityError> {
		Ok(for_tuples!( ( #( Tuple.additional_signed(ext)? ),* ) ))
	}

	fn validate(
		&self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		let valid = ValidTransaction::default();
		for_tuples!( #( let valid = valid.combine_with(Tuple.validate(ext, who, call, info, len)?); )* );
		Ok(valid)
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<Self::Pre, TransactionValidityError> {
		Ok(for_tuples!( ( #( Tuple.pre_dispatch(ext, who, call, info, len)? ),* ) ))
	}

	fn validate_unsigned(
		ext: &mut Externalities,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		let valid = ValidTransaction::default();
		for_tuples!( #( let valid = valid.combine_with(Tuple::validate_unsigned(ext, call, info, len)?); )* );
		Ok(valid)
	}

	fn pre_dispatch_unsigned(
		ext: &mut Externalities,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		for_tuples!( #( Tuple::pre_dispatch_unsigned(ext, call, info, len)?; )* );
		Ok(())
	}

	fn post_dispatch(
		ext: &mut Externalities,
		pre: Option<Self::Pre>,
		info: &DispatchInfoOf<Self::Call>,
		post_info: &PostDispatchInfoOf<Self::Call>,
		len: usize,
		result: &DispatchResult,
	) -> Result<(), TransactionValidityError> {
		match pre {
			Some(x) => {
				for_tuples!( #( Tuple::post_dispatch(ext, Some(x.Tuple), info, post_info, len, result)?; )* );
			},
			None => {
				for_tuples!( #( Tuple::post_dispatch(ext, None, info, post_info, len, result)?; )* );
			},
		}
		Ok(())
	}

	fn identifier() -> Vec<&'static str> {
		let mut ids = Vec::new();
		for_tuples!( #( ids.extend(Tuple::identifier()); )* );
		ids
	}
}

impl SignedExtension for () {
	const IDENTIFIER: &'static str = "UnitSignedExtension";
	type AccountId = AccountId32;
	type Call = ();
	type AdditionalSigned = ();
	type Pre = ();

	fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
		Ok(())
	}

	fn pre_dispatch(
		self,
		ext: &mut Externalities,
		who: &Self::AccountId,
		call: &Self::Call,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> Result<(), TransactionValidityError> {
		self.validate(ext, who, call, info, len).map(|_| ())
	}
}

impl Dispatchable for () {
	type RuntimeOrigin = ();
	type Info = ();
	type PostInfo = ();
	fn dispatch(
		self,
		_ext: &mut Externalities,
		_origin: Self::RuntimeOrigin,
	) -> crate::DispatchResultWithInfo<Self::PostInfo> {
		Ok(())
	}
}

/// An "executable" piece of information, used by the executive in order to enact a piece of
/// extrinsic information by marshalling and dispatching to a named function call.
///
/// Also provides information on to whom this information is attributable and an index that
/// allows each piece of attributable information to be disambiguated.
pub trait Applyable: Sized {
	/// Type by which we can dispatch. Restricts the `UnsignedValidator` type.
	type Call: Dispatchable;

	/// Checks to see if this is a valid *transaction*. It returns information on it if so.
	fn validate<V: ValidateUnsigned<Call = Self::Call>>(
		&self,
		ext: &mut Externalities,
		source: TransactionSource,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity;

	/// Executes all necessary logic needed prior to dispatch and deconstructs into function call,
	/// index and sender.
	fn apply<V: ValidateUnsigned<Call = Self::Call>>(
		self,
		ext: &mut Externalities,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> crate::ApplyExtrinsicResultWithInfo<PostDispatchInfoOf<Self::Call>>;
}

/// Something that can validate unsigned extrinsics for the transaction pool.
///
/// Note that any checks done here are only used for determining the validity of the transaction
/// for the transaction pool. During block execution phase one need to perform the same checks
/// anyway, since this function is not being called.
pub trait ValidateUnsigned {
	/// The call to validate
	type Call;

	/// Validate the call right before dispatch.
	///
	/// Changes made to storage WILL be persisted if the call returns `Ok`.
	fn pre_dispatch(
		ext: &mut Externalities,
		call: &Self::Call,
	) -> Result<(), TransactionValidityError> {
		Self::validate_unsigned(ext, TransactionSource::InBlock, call).map(|_| ())
	}

	/// Return the validity of the call.
	///
	/// Changes made to storage should be discarded by caller.
	fn validate_unsigned(
		ext: &mut Externalities,
		source: TransactionSource,
		call: &Self::Call,
	) -> TransactionValidity;
}
