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

//! Generic implementation of an extrinsic that has passed the verification
//! stage.

use crate::{
	storage::Externalities,
	traits::{
		self, DispatchInfoOf, Dispatchable, Member, PostDispatchInfoOf, SignedExtension,
		ValidateUnsigned,
	},
	transaction_validity::{TransactionSource, TransactionValidity},
};

/// Definition of something that the external world might want to say; its existence implies that
/// it has been checked and is good, particularly with regards to the signature.
///
/// This is typically passed into [`traits::Applyable::apply`], which should execute
/// [`CheckedExtrinsic::function`], alongside all other bits and bobs.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct CheckedExtrinsic<AccountId, Call, Extra> {
	/// Who this purports to be from and the signed extension data, if anyone (note this is not a
	/// signature).
	pub signed: Option<(AccountId, Extra)>,

	/// The function that should be called.
	pub function: Call,
}

impl<AccountId, Call, Extra, RuntimeOrigin> traits::Applyable
	for CheckedExtrinsic<AccountId, Call, Extra>
where
	AccountId: Member,
	Call: Member + Dispatchable<RuntimeOrigin = RuntimeOrigin>,
	Extra: SignedExtension<AccountId = AccountId, Call = Call>,
	RuntimeOrigin: From<Option<AccountId>>,
{
	type Call = Call;

	fn validate<U: ValidateUnsigned<Call = Self::Call>>(
		&self,
		ext: &mut Externalities,
		source: TransactionSource,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> TransactionValidity {
		if let Some((ref id, ref extra)) = self.signed {
			Extra::validate(extra, ext, id, &self.function, info, len)
		} else {
			let valid = Extra::validate_unsigned(ext, &self.function, info, len)?;
			let unsigned_validation = U::validate_unsigned(ext, source, &self.function)?;
			Ok(valid.combine_with(unsigned_validation))
		}
	}

	fn apply<U: ValidateUnsigned<Call = Self::Call>>(
		self,
		ext: &mut Externalities,
		info: &DispatchInfoOf<Self::Call>,
		len: usize,
	) -> crate::ApplyExtrinsicResultWithInfo<PostDispatchInfoOf<Self::Call>> {
		let (maybe_who, maybe_pre) = if let Some((id, extra)) = self.signed {
			let pre = Extra::pre_dispatch(extra, ext, &id, &self.function, info, len)?;
			(Some(id), Some(pre))
		} else {
			Extra::pre_dispatch_unsigned(ext, &self.function, info, len)?;
			U::pre_dispatch(ext, &self.function)?;
			(None, None)
		};
		// Writes of a failed call are discarded. Those of the extensions above are kept.
		ext.start_transaction();
		let res = self.function.dispatch(ext, RuntimeOrigin::from(maybe_who));
		let closed = if res.is_ok() { ext.commit_transaction() } else { ext.rollback_transaction() };
		closed.expect("the layer opened before dispatch is still open; qed");
		let post_info = match &res {
			Ok(info) => *info,
			Err(err) => err.post_info,
		};
		Extra::post_dispatch(
			ext,
			maybe_pre,
			info,
			&post_info,
			len,
			&res.as_ref().map(|_| ()).map_err(|e| e.error.clone()),
		)?;
		Ok(res)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		traits::Applyable,
		transaction_validity::{
			InvalidTransaction, TransactionValidityError, UnknownTransaction, ValidTransaction,
		},
		DispatchError,
	};

	type AccountId = u64;

	#[derive(PartialEq, Eq, Clone, Debug)]
	enum Call {
		Succeed,
		Fail,
	}

	impl Dispatchable for Call {
		type RuntimeOrigin = Option<AccountId>;
		type Info = ();
		type PostInfo = ();

		fn dispatch(
			self,
			ext: &mut Externalities,
			origin: Self::RuntimeOrigin,
		) -> crate::DispatchResultWithInfo<()> {
			ext.set_storage(b"dispatched", codec::Encode::encode(&origin));
			match self {
				Call::Succeed => Ok(()),
				Call::Fail => Err(DispatchError::from("fail").into()),
			}
		}
	}

	/// Records every hook it runs in storage.
	#[derive(Debug, Eq, Clone, PartialEq)]
	struct Recorder;
	codec::impl_codec_struct!(Recorder {});

	fn record(ext: &mut Externalities, hook: &str) {
		let mut log = ext.storage(b"hooks").unwrap_or_default();
		log.extend_from_slice(hook.as_bytes());
		log.push(b';');
		ext.set_storage(b"hooks", log);
	}

	impl SignedExtension for Recorder {
		const IDENTIFIER: &'static str = "Recorder";
		type AccountId = AccountId;
		type Call = Call;
		type AdditionalSigned = ();
		type Pre = AccountId;

		fn additional_signed(&self, _: &Externalities) -> Result<(), TransactionValidityError> {
			Ok(())
		}

		fn validate(
			&self,
			ext: &mut Externalities,
			who: &AccountId,
			_: &Call,
			_: &(),
			_: usize,
		) -> TransactionValidity {
			record(ext, "validate");
			if *who == 0 {
				return Err(InvalidTransaction::BadSigner.into())
			}
			Ok(ValidTransaction { priority: *who, ..Default::default() })
		}

		fn pre_dispatch(
			self,
			ext: &mut Externalities,
			who: &AccountId,
			call: &Call,
			info: &(),
			len: usize,
		) -> Result<AccountId, TransactionValidityError> {
			self.validate(ext, who, call, info, len)?;
			record(ext, "pre_dispatch");
			Ok(*who)
		}

		fn post_dispatch(
			ext: &mut Externalities,
			pre: Option<AccountId>,
			_: &(),
			_: &(),
			_: usize,
			result: &crate::DispatchResult,
		) -> Result<(), TransactionValidityError> {
			let hook = match (pre, result) {
				(Some(_), Ok(())) => "post_signed_ok",
				(Some(_), Err(_)) => "post_signed_err",
				(None, _) => "post_unsigned",
			};
			record(ext, hook);
			Ok(())
		}
	}

	struct Unsigned;
	impl ValidateUnsigned for Unsigned {
		type Call = Call;
		fn validate_unsigned(
			_: &mut Externalities,
			_: TransactionSource,
			call: &Call,
		) -> TransactionValidity {
			match call {
				Call::Succeed => Ok(ValidTransaction { priority: 42, ..Default::default() }),
				Call::Fail => Err(UnknownTransaction::NoUnsignedValidator.into()),
			}
		}
	}

	type Extrinsic = CheckedExtrinsic<AccountId, Call, Recorder>;

	fn hooks(ext: &Externalities) -> alloc::string::String {
		alloc::string::String::from_utf8(ext.storage(b"hooks").unwrap_or_default()).unwrap()
	}

	#[test]
	fn signed_validate_uses_extensions() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: Some((7, Recorder)), function: Call::Succeed };
		let valid = xt.validate::<Unsigned>(&mut ext, TransactionSource::External, &(), 0);
		assert_eq!(valid.unwrap().priority, 7);

		let xt = Extrinsic { signed: Some((0, Recorder)), function: Call::Succeed };
		assert_eq!(
			xt.validate::<Unsigned>(&mut ext, TransactionSource::External, &(), 0),
			Err(InvalidTransaction::BadSigner.into())
		);
	}

	#[test]
	fn unsigned_validate_asks_the_unsigned_validator() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: None, function: Call::Succeed };
		let valid = xt.validate::<Unsigned>(&mut ext, TransactionSource::External, &(), 0);
		assert_eq!(valid.unwrap().priority, 42);

		let xt = Extrinsic { signed: None, function: Call::Fail };
		assert_eq!(
			xt.validate::<Unsigned>(&mut ext, TransactionSource::External, &(), 0),
			Err(UnknownTransaction::NoUnsignedValidator.into())
		);
	}

	#[test]
	fn apply_runs_hooks_around_dispatch() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: Some((3, Recorder)), function: Call::Succeed };
		assert_eq!(xt.apply::<Unsigned>(&mut ext, &(), 0), Ok(Ok(())));
		assert_eq!(hooks(&ext), "validate;pre_dispatch;post_signed_ok;");
		assert_eq!(ext.storage(b"dispatched"), Some(codec::Encode::encode(&Some(3u64))));
	}

	#[test]
	fn apply_reports_dispatch_errors_inside_ok() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: Some((3, Recorder)), function: Call::Fail };
		let res = xt.apply::<Unsigned>(&mut ext, &(), 0).unwrap();
		assert_eq!(res.unwrap_err().error, DispatchError::from("fail"));
		assert_eq!(hooks(&ext), "validate;pre_dispatch;post_signed_err;");
		// The write made by the failed call is gone, the hooks' writes are not.
		assert!(!ext.exists(b"dispatched"));
		assert_eq!(ext.transaction_depth(), 0);
	}

	#[test]
	fn apply_rejects_before_dispatch() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: Some((0, Recorder)), function: Call::Succeed };
		assert_eq!(
			xt.apply::<Unsigned>(&mut ext, &(), 0),
			Err(InvalidTransaction::BadSigner.into())
		);
		assert!(!ext.exists(b"dispatched"));

		let xt = Extrinsic { signed: None, function: Call::Fail };
		assert!(xt.apply::<Unsigned>(&mut ext, &(), 0).is_err());
		assert!(!ext.exists(b"dispatched"));
	}

	#[test]
	fn unsigned_apply_dispatches_with_no_origin() {
		let mut ext = Externalities::default();
		let xt = Extrinsic { signed: None, function: Call::Succeed };
		assert_eq!(xt.apply::<Unsigned>(&mut ext, &(), 0), Ok(Ok(())));
		assert_eq!(hooks(&ext), "post_unsigned;");
		assert_eq!(ext.storage(b"dispatched"), Some(codec::Encode::encode(&None::<u64>)));
	}
}
