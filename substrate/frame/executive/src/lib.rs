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


//! # Executive Module
//!
//! The Executive module acts as the orchestration layer for the runtime. It dispatches incoming
//! extrinsic calls to the respective modules in the runtime.
//!
//! ## Overview
//!
//! The executive module is not a typical module providing functionality around a specific
//! feature. It is a cross-cutting framework component. It uses the following things to
//! orchestrate block execution:
//!
//! - Check extrinsic signature and decode it.
//! - Initialize a block, running the `on_initialize` hook of every module.
//! - Apply extrinsics, accounting their weight and length and noting them for the block.
//! - Finalize a block, running the `on_finalize` hooks and computing the header.
//! - Validate transactions on behalf of the transaction pool.
//!
//! ## Usage
//!
//! ```ignore
//! pub type Executive = tessera_executive::Executive<
//! 	Runtime,
//! 	UncheckedExtrinsic,
//! 	RuntimeContext,
//! 	Runtime,
//! 	AllPalletsWithSystem,
//! >;
//! ```
//!
//! Every entry point takes the externalities of the block being built or imported. Extrinsics
//! are applied inside their own storage layer: an extrinsic that turns out to be invalid leaves
//! no trace in storage.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;


use alloc::vec::Vec;
use codec::{Codec, DecodeAll, Encode};
use core::marker::PhantomData;
use tessera_primitives::{
	generic::{Block, Header},
	traits::{Applyable, Checkable, Dispatchable, Extrinsic, ValidateUnsigned},
	transaction_validity::{
		InvalidTransaction, TransactionSource, TransactionValidity, TransactionValidityError,
	},
	ApplyExtrinsicResult, BlockNumber, Externalities, TransactionOutcome, H256,
};
use tessera_support::{
	dispatch::{DispatchClass, DispatchInfo, GetDispatchInfo, PostDispatchInfo},
	hypothetically,
	storage::transactional::with_transaction_opaque_err,
	traits::{Get, OnFinalize, OnInitialize},
};
use tessera_system as frame_system;

const LOG_TARGET: &str = "runtime::executive";

/// The checked form of `E` under the context `C`.
pub type CheckedOf<E, C> = <E as Checkable<C>>::Checked;
/// The call of the checked form of `E`.
pub type CallOf<E, C> = <CheckedOf<E, C> as Applyable>::Call;
/// The origin the call of `E` is dispatched with.
pub type OriginOf<E, C> = <CallOf<E, C> as Dispatchable>::RuntimeOrigin;

/// Main entry point for certain runtime actions as e.g. `execute_block`.
///
/// Generic parameters:
/// - `System`: Something that implements `tessera_system::Config`
/// - `Extrinsic`: The extrinsic format of the blocks, e.g. `UncheckedExtrinsic`
/// - `Context`: The context that is used when checking an extrinsic. It resolves addresses and
///   verifies signatures.
/// - `UnsignedValidator`: The unsigned transaction validator of the runtime.
/// - `AllPalletsWithSystem`: Tuple that contains all modules including frame system module.
///   Will be used to call e.g. `on_initialize`.
pub struct Executive<System, Extrinsic, Context, UnsignedValidator, AllPalletsWithSystem>(
	PhantomData<(System, Extrinsic, Context, UnsignedValidator, AllPalletsWithSystem)>,
);

impl<System, Ext, Context, UnsignedValidator, AllPalletsWithSystem>
	Executive<System, Ext, Context, UnsignedValidator, AllPalletsWithSystem>
where
	System: frame_system::Config,
	Ext: Checkable<Context> + Extrinsic + GetDispatchInfo + Codec,
	CheckedOf<Ext, Context>: Applyable + GetDispatchInfo,
	CallOf<Ext, Context>:
		Dispatchable<Info = DispatchInfo, PostInfo = PostDispatchInfo> + GetDispatchInfo,
	Context: Default,
	UnsignedValidator: ValidateUnsigned<Call = CallOf<Ext, Context>>,
	AllPalletsWithSystem: OnInitialize<BlockNumber> + OnFinalize<BlockNumber>,
{
	/// Start the execution of a particular block.
	pub fn initialize_block(ext: &mut Externalities, header: &Header) {
		log::trace!(target: LOG_TARGET, "init_block");
		// Reset events before the hooks of the new block run.
		<frame_system::Pallet<System>>::reset_events(ext);
		<frame_system::Pallet<System>>::initialize(ext, header.number, &header.parent_hash);

		let mut weight = <AllPalletsWithSystem as OnInitialize<BlockNumber>>::on_initialize(
			ext,
			header.number,
		);
		weight = weight.saturating_add(System::BlockWeights::get().base_block);
		<frame_system::Pallet<System>>::register_extra_weight_unchecked(
			ext,
			weight,
			DispatchClass::Mandatory,
		);

		<frame_system::Pallet<System>>::note_finished_initialize(ext);
	}

	/// Actually execute all transitions for `block`.
	///
	/// Panics if the block is invalid: a bad inherent position, an extrinsic that cannot be
	/// applied, or a header that does not match the computed one.
	pub fn execute_block(ext: &mut Externalities, block: Block<Ext>) {
		log::debug!(
			target: LOG_TARGET,
			"[{}] executing block with {} extrinsics",
			block.header.number,
			block.extrinsics.len(),
		);
		Self::initialize_block(ext, &block.header);

		// any initial checks
		Self::initial_checks(ext, &block);

		// execute extrinsics
		let (header, extrinsics) = block.deconstruct();
		Self::execute_extrinsics_with_book_keeping(ext, extrinsics, header.number);

		// any final checks
		Self::final_checks(ext, &header);
	}

	fn initial_checks(ext: &Externalities, block: &Block<Ext>) {
		let header = &block.header;
		let n = header.number;
		if n == 0 ||
			<frame_system::Pallet<System>>::block_hash(ext, n - 1) != header.parent_hash
		{
			log::error!(target: LOG_TARGET, "[{}] parent hash {:?} is invalid", n, header.parent_hash);
			panic!("Parent hash should be valid.");
		}

		if let Some(index) = Self::first_misplaced_inherent(&block.extrinsics) {
			log::error!(target: LOG_TARGET, "[{}] inherent out of place at index {}", n, index);
			panic!("Invalid inherent position for extrinsic at index {}", index);
		}
	}

	/// Inherents (unsigned mandatory extrinsics) must come before every other extrinsic.
	fn first_misplaced_inherent(extrinsics: &[Ext]) -> Option<usize> {
		let mut seen_non_inherent = false;
		extrinsics.iter().position(|xt| {
			let is_inherent = xt.is_signed() == Some(false) &&
				xt.get_dispatch_info().class == DispatchClass::Mandatory;
			if is_inherent {
				seen_non_inherent
			} else {
				seen_non_inherent = true;
				false
			}
		})
	}

	/// Execute given extrinsics and take care of post-extrinsics book-keeping.
	fn execute_extrinsics_with_book_keeping(
		ext: &mut Externalities,
		extrinsics: Vec<Ext>,
		block_number: BlockNumber,
	) {
		for (index, xt) in extrinsics.into_iter().enumerate() {
			if let Err(e) = Self::apply_extrinsic(ext, &xt.encode()) {
				log::error!(
					target: LOG_TARGET,
					"[{}] extrinsic {} could not be applied: {:?}",
					block_number,
					index,
					e,
				);
				let err: &'static str = e.into();
				panic!("{}", err)
			}
		}

		// post-extrinsics book-keeping
		<frame_system::Pallet<System>>::note_finished_extrinsics(ext);
		<AllPalletsWithSystem as OnFinalize<BlockNumber>>::on_finalize(ext, block_number);
	}

	/// Finalize the block - it is up the caller to ensure that all header fields are valid
	/// except state-root.
	pub fn finalize_block(ext: &mut Externalities) -> Header {
		log::trace!(target: LOG_TARGET, "finalize_block");
		<frame_system::Pallet<System>>::note_finished_extrinsics(ext);
		let block_number = <frame_system::Pallet<System>>::block_number(ext);
		<AllPalletsWithSystem as OnFinalize<BlockNumber>>::on_finalize(ext, block_number);

		<frame_system::Pallet<System>>::finalize(ext)
	}

	/// Apply extrinsic outside of the block execution function.
	///
	/// This doesn't attempt to validate anything regarding the block, but it builds a list of
	/// uxt hashes. An `Err` leaves storage exactly as it was.
	pub fn apply_extrinsic(ext: &mut Externalities, encoded: &[u8]) -> ApplyExtrinsicResult {
		with_transaction_opaque_err(ext, |ext| match Self::do_apply_extrinsic(ext, encoded) {
			Ok(outcome) => TransactionOutcome::Commit(Ok(outcome)),
			Err(e) => TransactionOutcome::Rollback(Err(e)),
		})
		.unwrap_or_else(|()| {
			log::debug!(target: LOG_TARGET, "no storage layer left to apply an extrinsic in");
			Err(InvalidTransaction::ExhaustsResources.into())
		})
	}

	fn do_apply_extrinsic(ext: &mut Externalities, encoded: &[u8]) -> ApplyExtrinsicResult {
		let uxt = Self::decode_extrinsic(encoded)?;
		let encoded_len = encoded.len();

		// Verify that the signature is good.
		let xt = uxt.check(ext, &Context::default())?;

		// We don't need to make sure to `note_extrinsic` only after we know it's going to be
		// executed: a failure from here on rolls the whole storage layer back.
		<frame_system::Pallet<System>>::note_extrinsic(ext, encoded.to_vec());

		// Decode parameters and dispatch
		let dispatch_info = xt.get_dispatch_info();
		let r = Applyable::apply::<UnsignedValidator>(xt, ext, &dispatch_info, encoded_len)?;

		// Mandatory(inherents) are not allowed to fail.
		//
		// The entire block should be discarded if an inherent fails to apply. Otherwise
		// it may open an attack vector.
		if r.is_err() && dispatch_info.class == DispatchClass::Mandatory {
			return Err(InvalidTransaction::BadMandatory.into())
		}

		<frame_system::Pallet<System>>::note_applied_extrinsic(ext, &r, dispatch_info);

		Ok(r.map(|_| ()).map_err(|e| e.error))
	}

	fn decode_extrinsic(encoded: &[u8]) -> Result<Ext, TransactionValidityError> {
		Ext::decode_all(&mut &encoded[..]).map_err(|e| {
			log::debug!(target: LOG_TARGET, "extrinsic failed to decode: {}", e);
			InvalidTransaction::Call.into()
		})
	}

	fn final_checks(ext: &mut Externalities, header: &Header) {
		// remove temporaries
		let new_header = <frame_system::Pallet<System>>::finalize(ext);

		// check storage root.
		if header.state_root != new_header.state_root {
			log::error!(
				target: LOG_TARGET,
				"[{}] storage root {:?} does not match the computed {:?}",
				header.number,
				header.state_root,
				new_header.state_root,
			);
			panic!("Storage root must match that calculated.");
		}

		if header.extrinsics_root != new_header.extrinsics_root {
			log::error!(
				target: LOG_TARGET,
				"[{}] extrinsics root {:?} does not match the computed {:?}",
				header.number,
				header.extrinsics_root,
				new_header.extrinsics_root,
			);
			panic!("Transaction trie root must be valid.");
		}
	}

	/// Check a given signed transaction for validity. This doesn't execute any
	/// side-effects; it merely checks whether the transaction would panic if it were included
	/// or not.
	///
	/// Changes made to storage are discarded before returning.
	pub fn validate_transaction(
		ext: &mut Externalities,
		source: TransactionSource,
		encoded: &[u8],
		block_hash: H256,
	) -> TransactionValidity {
		hypothetically!(ext, Self::do_validate_transaction(ext, source, encoded, block_hash))
	}

	fn do_validate_transaction(
		ext: &mut Externalities,
		source: TransactionSource,
		encoded: &[u8],
		block_hash: H256,
	) -> TransactionValidity {
		let number = <frame_system::Pallet<System>>::block_number(ext).saturating_add(1);
		<frame_system::Pallet<System>>::initialize(ext, number, &block_hash);

		let uxt = Self::decode_extrinsic(encoded)?;
		let xt = uxt.check(ext, &Context::default())?;

		let dispatch_info = xt.get_dispatch_info();
		if dispatch_info.class == DispatchClass::Mandatory {
			return Err(InvalidTransaction::MandatoryValidation.into())
		}

		xt.validate::<UnsignedValidator>(ext, source, &dispatch_info, encoded.len())
	}
}
