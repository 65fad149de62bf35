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

//! Generic implementation of an unchecked (pre-verification) extrinsic.

use crate::{
	generic::CheckedExtrinsic,
	hashing::blake2_256,
	storage::Externalities,
	traits::{self, Checkable, Lookup, SignedExtension, Verify},
	transaction_validity::{InvalidTransaction, TransactionValidityError},
};
use alloc::vec::Vec;
use codec::{Compact, Decode, Encode, Error, Input, Output};
use core::fmt;

/// Current version of the [`UncheckedExtrinsic`] encoded format.
///
/// This version needs to be bumped if the encoded representation changes. It ensures that if the
/// representation is changed and the format is not known, the decoding fails.
pub const EXTRINSIC_FORMAT_VERSION: u8 = 4;

const SIGNED_BIT: u8 = 0b1000_0000;

/// Payloads longer than this are hashed before signing.
const MAX_UNHASHED_PAYLOAD: usize = 256;

/// An extrinsic right from the external world. This is unchecked and so can contain a signature.
#[derive(PartialEq, Eq, Clone)]
pub struct UncheckedExtrinsic<Address, Call, Signature, Extra>
where
	Extra: SignedExtension,
{
	/// The signer, the signature and the signed extension data, if this is a signed extrinsic.
	pub signature: Option<(Address, Signature, Extra)>,
	/// The function that should be called.
	pub function: Call,
}

impl<Address, Call, Signature, Extra: SignedExtension>
	UncheckedExtrinsic<Address, Call, Signature, Extra>
{
	/// New instance of a signed extrinsic aka "transaction".
	pub fn new_signed(function: Call, signed: Address, signature: Signature, extra: Extra) -> Self {
		Self { signature: Some((signed, signature, extra)), function }
	}

	/// New instance of an unsigned extrinsic aka "inherent".
	pub fn new_unsigned(function: Call) -> Self {
		Self { signature: None, function }
	}

	/// `true` if this extrinsic carries a signature.
	pub fn is_signed(&self) -> bool {
		self.signature.is_some()
	}
}

impl<Address, Call, Signature, Extra: SignedExtension> traits::Extrinsic
	for UncheckedExtrinsic<Address, Call, Signature, Extra>
{
	fn is_signed(&self) -> Option<bool> {
		Some(self.signature.is_some())
	}
}

impl<Address, Call, Signature, Extra, Context> Checkable<Context>
	for UncheckedExtrinsic<Address, Call, Signature, Extra>
where
	Call: Encode,
	Extra: SignedExtension<AccountId = Context::Target>,
	Context: Lookup<Source = Address> + Verify<Signature, Signer = <Context as Lookup>::Target>,
{
	type Checked = CheckedExtrinsic<Context::Target, Call, Extra>;

	fn check(
		self,
		ext: &Externalities,
		context: &Context,
	) -> Result<Self::Checked, TransactionValidityError> {
		Ok(match self.signature {
			Some((signed, signature, extra)) => {
				let signed = context.lookup(signed)?;
				let raw_payload = SignedPayload::new(self.function, extra, ext)?;
				if !raw_payload.using_encoded(|payload| context.verify(&signature, payload, &signed))
				{
					return Err(InvalidTransaction::BadProof.into())
				}
				let (function, extra, _) = raw_payload.deconstruct();
				CheckedExtrinsic { signed: Some((signed, extra)), function }
			},
			None => CheckedExtrinsic { signed: None, function: self.function },
		})
	}
}

/// A payload that has been signed for an unchecked extrinsics.
///
/// Note that the payload that we sign to produce unchecked extrinsic signature is going to be
/// different than the signature payload the extrinsic actually contains.
pub struct SignedPayload<Call, Extra: SignedExtension>((Call, Extra, Extra::AdditionalSigned));

impl<Call, Extra> SignedPayload<Call, Extra>
where
	Call: Encode,
	Extra: SignedExtension,
{
	/// Create new `SignedPayload`.
	///
	/// This function may fail if `additional_signed` of `Extra` is not available.
	pub fn new(
		call: Call,
		extra: Extra,
		ext: &Externalities,
	) -> Result<Self, TransactionValidityError> {
		let additional_signed = extra.additional_signed(ext)?;
		Ok(Self((call, extra, additional_signed)))
	}

	/// Create new `SignedPayload` from raw components.
	pub fn from_raw(call: Call, extra: Extra, additional_signed: Extra::AdditionalSigned) -> Self {
		Self((call, extra, additional_signed))
	}

	/// Deconstruct the payload into it's components.
	pub fn deconstruct(self) -> (Call, Extra, Extra::AdditionalSigned) {
		self.0
	}
}

impl<Call, Extra> Encode for SignedPayload<Call, Extra>
where
	Call: Encode,
	Extra: SignedExtension,
{
	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.using_encoded(|payload| dest.write(payload))
	}

	/// Get an encoded version of this payload.
	///
	/// Payloads longer than 256 bytes are going to be `blake2_256`-hashed.
	fn using_encoded<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
		self.0.using_encoded(|payload| {
			if payload.len() > MAX_UNHASHED_PAYLOAD {
				f(&blake2_256(payload)[..])
			} else {
				f(payload)
			}
		})
	}
}

impl<Address, Call, Signature, Extra> Decode for UncheckedExtrinsic<Address, Call, Signature, Extra>
where
	Address: Decode,
	Signature: Decode,
	Call: Decode,
	Extra: SignedExtension,
{
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		// The format is binary compatible with `Vec<u8>`, hence the length prefix.
		let expected_length: Compact<u32> =
			Decode::decode(input).map_err(|e| e.expecting("UncheckedExtrinsic::length"))?;
		let before_length = input.remaining_len()?;

		let version = input.read_byte().map_err(|e| e.expecting("UncheckedExtrinsic::version"))?;
		let is_signed = version & SIGNED_BIT != 0;
		if version & !SIGNED_BIT != EXTRINSIC_FORMAT_VERSION {
			return Err(Error::from("Invalid transaction version").expecting("UncheckedExtrinsic"))
		}

		let signature = if is_signed {
			Some(<(Address, Signature, Extra)>::decode(input).map_err(|e| {
				e.expecting("UncheckedExtrinsic::signature")
			})?)
		} else {
			None
		};
		let function =
			Decode::decode(input).map_err(|e| e.expecting("UncheckedExtrinsic::function"))?;

		if let Some((before_length, after_length)) =
			input.remaining_len()?.and_then(|a| before_length.map(|b| (b, a)))
		{
			let length = before_length.saturating_sub(after_length);
			if length != expected_length.0 as usize {
				return Err(Error::from("Invalid length prefix").expecting("UncheckedExtrinsic"))
			}
		}

		Ok(Self { signature, function })
	}
}

impl<Address, Call, Signature, Extra> Encode for UncheckedExtrinsic<Address, Call, Signature, Extra>
where
	Address: Encode,
	Signature: Encode,
	Call: Encode,
	Extra: SignedExtension,
{
	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		let mut body = Vec::new();
		match self.signature.as_ref() {
			Some(signature) => {
				body.push(EXTRINSIC_FORMAT_VERSION | SIGNED_BIT);
				signature.encode_to(&mut body);
			},
			None => body.push(EXTRINSIC_FORMAT_VERSION),
		}
		self.function.encode_to(&mut body);

		Compact(body.len() as u32).encode_to(dest);
		dest.write(&body);
	}
}

impl<Address, Call, Signature, Extra> fmt::Debug
	for UncheckedExtrinsic<Address, Call, Signature, Extra>
where
	Address: fmt::Debug,
	Call: fmt::Debug,
	Extra: SignedExtension,
{
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(
			f,
			"UncheckedExtrinsic({:?}, {:?})",
			self.signature.as_ref().map(|x| (&x.0, &x.2)),
			self.function,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		testing::{sign, TestContext},
		traits::{DispatchInfoOf, Dispatchable},
		AccountId32, MultiAddress, MultiSignature,
	};
	use codec::Reason;
	use pretty_assertions::assert_eq;

	#[derive(Debug, Clone, PartialEq, Eq)]
	struct TestCall(Vec<u8>);

	impl Encode for TestCall {
		fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
			self.0.encode_to(dest)
		}
	}

	impl Decode for TestCall {
		fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
			Vec::decode(input).map(TestCall)
		}
	}

	impl Dispatchable for TestCall {
		type RuntimeOrigin = Option<AccountId32>;
		type Info = ();
		type PostInfo = ();
		fn dispatch(
			self,
			_: &mut Externalities,
			_: Self::RuntimeOrigin,
		) -> crate::DispatchResultWithInfo<()> {
			Ok(())
		}
	}

	#[derive(Debug, Clone, PartialEq, Eq)]
	struct TestExtra;
	codec::impl_codec_struct!(TestExtra {});

	impl SignedExtension for TestExtra {
		const IDENTIFIER: &'static str = "TestExtra";
		type AccountId = AccountId32;
		type Call = TestCall;
		type AdditionalSigned = u32;
		type Pre = ();

		fn additional_signed(&self, ext: &Externalities) -> Result<u32, TransactionValidityError> {
			Ok(ext.storage(b":marker").map_or(0, |v| v.len() as u32))
		}

		fn pre_dispatch(
			self,
			ext: &mut Externalities,
			who: &AccountId32,
			call: &TestCall,
			info: &DispatchInfoOf<TestCall>,
			len: usize,
		) -> Result<(), TransactionValidityError> {
			self.validate(ext, who, call, info, len).map(|_| ())
		}
	}

	type Address = MultiAddress<AccountId32, u32>;
	type Ex = UncheckedExtrinsic<Address, TestCall, MultiSignature, TestExtra>;
	type CEx = CheckedExtrinsic<AccountId32, TestCall, TestExtra>;

	const ALICE: AccountId32 = AccountId32::new([1; 32]);

	fn signed(call: TestCall, ext: &Externalities) -> Ex {
		let payload = SignedPayload::new(call.clone(), TestExtra, ext).unwrap();
		let signature = payload.using_encoded(|bytes| sign(&ALICE, bytes));
		Ex::new_signed(call, MultiAddress::Id(ALICE), signature, TestExtra)
	}

	#[test]
	fn unsigned_codec_should_work() {
		let ux = Ex::new_unsigned(TestCall(vec![7]));
		let encoded = ux.encode();
		// length, version, call
		assert_eq!(encoded, vec![3 << 2, 4, 1 << 2, 7]);
		assert_eq!(Ex::decode(&mut &encoded[..]).unwrap(), ux);
	}

	#[test]
	fn signed_codec_should_work() {
		let ext = Externalities::default();
		let ux = signed(TestCall(vec![1, 2, 3]), &ext);
		let encoded = ux.encode();
		// two byte length prefix, then the signed version byte
		assert_eq!(encoded[2], 0x84);
		assert_eq!(Ex::decode(&mut &encoded[..]).unwrap(), ux);
	}

	#[test]
	fn encoding_matches_vec() {
		let ux = Ex::new_unsigned(TestCall(vec![0u8; 70]));
		let encoded = ux.encode();
		let as_vec: Vec<u8> = Decode::decode(&mut encoded.as_slice()).unwrap();
		assert_eq!(as_vec.encode(), encoded);
	}

	#[test]
	fn invalid_length_prefix_is_detected() {
		let mut encoded = Ex::new_unsigned(TestCall(vec![])).encode();
		encoded[0] += 4;
		encoded.push(0);
		encoded.push(0);
		let err = Ex::decode(&mut &encoded[..]).unwrap_err();
		assert_eq!(err.reason(), Reason::InvalidValue("Invalid length prefix"));
	}

	#[test]
	fn unknown_version_is_rejected() {
		let mut encoded = Ex::new_unsigned(TestCall(vec![])).encode();
		encoded[1] = 5;
		let err = Ex::decode(&mut &encoded[..]).unwrap_err();
		assert_eq!(err.reason(), Reason::InvalidValue("Invalid transaction version"));
	}

	#[test]
	fn large_bad_prefix_should_fail() {
		let encoded = Compact::<u32>::from(u32::MAX).encode();
		assert_eq!(Ex::decode(&mut &encoded[..]).unwrap_err().reason(), Reason::NotEnoughData);
	}

	#[test]
	fn unsigned_check_should_work() {
		let ext = Externalities::default();
		let ux = Ex::new_unsigned(TestCall(vec![]));
		assert!(!ux.is_signed());
		assert_eq!(
			<Ex as Checkable<TestContext>>::check(ux, &ext, &TestContext),
			Ok(CEx { signed: None, function: TestCall(vec![]) }),
		);
	}

	#[test]
	fn signed_check_should_work() {
		let ext = Externalities::default();
		let ux = signed(TestCall(vec![9]), &ext);
		assert!(ux.is_signed());
		assert_eq!(
			<Ex as Checkable<TestContext>>::check(ux, &ext, &TestContext),
			Ok(CEx { signed: Some((ALICE, TestExtra)), function: TestCall(vec![9]) }),
		);
	}

	#[test]
	fn large_payload_is_signed_by_hash() {
		let ext = Externalities::default();
		let ux = signed(TestCall(vec![5; 300]), &ext);
		assert!(<Ex as Checkable<TestContext>>::check(ux, &ext, &TestContext).is_ok());
	}

	#[test]
	fn badly_signed_check_should_fail() {
		let mut ext = Externalities::default();
		let ux = signed(TestCall(vec![]), &ext);
		// The additional signed data changed after signing.
		ext.set_storage(b":marker", vec![1]);
		assert_eq!(
			<Ex as Checkable<TestContext>>::check(ux, &ext, &TestContext),
			Err(InvalidTransaction::BadProof.into()),
		);
	}

	#[test]
	fn unknown_address_cannot_be_looked_up() {
		let ext = Externalities::default();
		let mut ux = signed(TestCall(vec![]), &ext);
		ux.signature.as_mut().unwrap().0 = MultiAddress::Index(3);
		assert_eq!(
			<Ex as Checkable<TestContext>>::check(ux, &ext, &TestContext),
			Err(crate::transaction_validity::UnknownTransaction::CannotLookup.into()),
		);
	}
}
