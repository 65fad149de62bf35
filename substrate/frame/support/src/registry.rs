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


//! The module registry of a composed runtime.
//!
//! Every module compiled into the runtime contributes one [`ModuleEntry`]. The entries are laid
//! out in a [`ModuleRegistry`], a fixed array of 256 slots indexed by the module index, built in a
//! `const` context. Resolving a module is a single array access.
//!
//! An encoded call is `[module index][function index][arguments]`; the registry reads the module
//! index and hands the rest of the input to the module's own call decoder.

use alloc::vec::Vec;
use codec::{Decode, Error, Input};
#[cfg(feature = "std")]
use serde::Serialize;
use tessera_primitives::{
	transaction_validity::{
		TransactionSource, TransactionValidity, TransactionValidityError, UnknownTransaction,
	},
	Externalities,
};

const LOG_TARGET: &str = "runtime::dispatch";

/// A named, indexed item of a module: a call, an event or an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub struct ItemMetadata {
	/// Name of the item.
	pub name: &'static str,
	/// The wire discriminant of the item.
	pub index: u8,
}

impl ItemMetadata {
	/// Describe the item `name` with discriminant `index`.
	pub const fn new(name: &'static str, index: u8) -> Self {
		Self { name, index }
	}
}

/// A constant exposed by a module, with its encoded value.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(Serialize))]
pub struct ConstantMetadata {
	/// Name of the constant.
	pub name: &'static str,
	/// The encoded value.
	pub value: Vec<u8>,
}

/// What a module exposes to the outside: its calls, events, errors, storage items and constants.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "std", derive(Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct ModuleMetadata {
	/// Name of the module.
	pub name: &'static str,
	/// Index of the module in the runtime.
	pub index: u8,
	/// Calls, by function index.
	pub calls: Vec<ItemMetadata>,
	/// Events, by event index.
	pub events: Vec<ItemMetadata>,
	/// Errors, by error index.
	pub errors: Vec<ItemMetadata>,
	/// Names of the storage items.
	pub storage: Vec<&'static str>,
	/// Constants and their encoded values.
	pub constants: Vec<ConstantMetadata>,
}

/// Access to the module and function indices of a call.
pub trait CallIndex {
	/// The index of the module the call belongs to.
	fn module_index(&self) -> u8;
	/// The index of the function within its module.
	fn function_index(&self) -> u8;
}

/// One compiled-in module, as seen by the runtime.
pub struct ModuleEntry<Call: 'static> {
	/// Index of the module. The first byte of every call it owns.
	pub index: u8,
	/// Name of the module.
	pub name: &'static str,
	/// Decode a call of this module. The input starts at the function index.
	pub decode_call: fn(&mut dyn Input) -> Result<Call, Error>,
	/// Pool validation of an unsigned call of this module.
	pub validate_unsigned: fn(&mut Externalities, TransactionSource, &Call) -> TransactionValidity,
	/// Block-inclusion check of an unsigned call of this module.
	pub pre_dispatch: fn(&mut Externalities, &Call) -> Result<(), TransactionValidityError>,
	/// The module's metadata.
	pub metadata: fn() -> ModuleMetadata,
}

/// `validate_unsigned` of a module that accepts no unsigned calls.
pub fn reject_unsigned<Call>(
	_: &mut Externalities,
	_: TransactionSource,
	_: &Call,
) -> TransactionValidity {
	Err(UnknownTransaction::NoUnsignedValidator.into())
}

/// `pre_dispatch` of a module that has nothing to check before inclusion.
pub fn no_pre_dispatch<Call>(
	_: &mut Externalities,
	_: &Call,
) -> Result<(), TransactionValidityError> {
	Ok(())
}

/// All modules of a runtime, indexed by module index.
pub struct ModuleRegistry<Call: 'static> {
	slots: [Option<&'static ModuleEntry<Call>>; 256],
	len: usize,
}

impl<Call: 'static> ModuleRegistry<Call> {
	/// Lay out `entries` by their index.
	///
	/// Panics, at compile time when used to initialise a `static`, if two entries share an index.
	pub const fn new(entries: &'static [ModuleEntry<Call>]) -> Self {
		let mut slots: [Option<&'static ModuleEntry<Call>>; 256] = [None; 256];
		let mut i = 0;
		while i < entries.len() {
			let entry = &entries[i];
			if slots[entry.index as usize].is_some() {
				panic!("two modules registered under the same index");
			}
			slots[entry.index as usize] = Some(entry);
			i += 1;
		}
		Self { slots, len: entries.len() }
	}

	/// The module registered under `index`, if any.
	pub fn get(&self, index: u8) -> Option<&'static ModuleEntry<Call>> {
		self.slots[index as usize]
	}

	/// The module registered under `index`.
	///
	/// Only call this with the index of a call that was decoded through this registry. An absent
	/// module means the runtime and the call disagree about which modules exist, which is fatal.
	pub fn module(&self, index: u8) -> &'static ModuleEntry<Call> {
		match self.get(index) {
			Some(entry) => entry,
			None => {
				log::error!(target: LOG_TARGET, "module with index {} is not registered", index);
				panic!("calls are only constructed for registered modules; qed");
			},
		}
	}

	/// Decode a call: the module index selects the module, which decodes the rest.
	pub fn decode_call<I: Input>(&self, input: &mut I) -> Result<Call, Error> {
		let index = input.read_byte().map_err(|e| e.expecting("RuntimeCall"))?;
		let entry = self.get(index).ok_or_else(|| {
			log::debug!(target: LOG_TARGET, "call for unknown module index {}", index);
			Error::unknown_variant("RuntimeCall", index)
		})?;
		(entry.decode_call)(input).map_err(|e| e.expecting("RuntimeCall"))
	}

	/// All registered modules, in index order.
	pub fn iter(&self) -> impl Iterator<Item = &'static ModuleEntry<Call>> + '_ {
		self.slots.iter().filter_map(|slot| *slot)
	}

	/// Number of registered modules.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether no module is registered.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Metadata of every registered module, in index order.
	pub fn metadata(&self) -> Vec<ModuleMetadata> {
		self.iter().map(|entry| (entry.metadata)()).collect()
	}
}

impl<Call: CallIndex + 'static> ModuleRegistry<Call> {
	/// Validate an unsigned call with the module that owns it.
	pub fn validate_unsigned(
		&self,
		ext: &mut Externalities,
		source: TransactionSource,
		call: &Call,
	) -> TransactionValidity {
		(self.module(call.module_index()).validate_unsigned)(ext, source, call)
	}

	/// Run the inclusion check of an unsigned call with the module that owns it.
	pub fn pre_dispatch(
		&self,
		ext: &mut Externalities,
		call: &Call,
	) -> Result<(), TransactionValidityError> {
		(self.module(call.module_index()).pre_dispatch)(ext, call)
	}
}

/// Decode a module's call through [`Decode`], for use as [`ModuleEntry::decode_call`].
pub fn decode_module_call<C: Decode, Call: From<C>>(
	mut input: &mut dyn Input,
) -> Result<Call, Error> {
	C::decode(&mut input).map(Into::into)
}
