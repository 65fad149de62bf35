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

//! Decoding errors.

use alloc::vec::Vec;
use core::fmt;

/// The reason a decode failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
	/// The input ended before the value was complete.
	NotEnoughData,
	/// A tagged union carried a discriminant that names no variant.
	UnknownVariant(u8),
	/// A compact integer used a longer mode than its value requires.
	NonCanonicalCompact,
	/// A compact integer does not fit the target type.
	OutOfRange,
	/// The bytes were well formed but do not describe a valid value.
	InvalidValue(&'static str),
	/// Bytes were left over after a value that must consume the whole input.
	TrailingInput,
}

impl fmt::Display for Reason {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Reason::NotEnoughData => write!(f, "Not enough data to fill buffer"),
			Reason::UnknownVariant(index) => write!(f, "Variant index {} doesn't exist", index),
			Reason::NonCanonicalCompact => write!(f, "Out of range compact prefix"),
			Reason::OutOfRange => write!(f, "Value is out of range for the target type"),
			Reason::InvalidValue(what) => write!(f, "{}", what),
			Reason::TrailingInput => write!(f, "Input buffer has still data left after decoding"),
		}
	}
}

/// Error returned when a value fails to decode.
///
/// Carries the low level [`Reason`] and the chain of type names that were being decoded when it
/// happened, innermost first.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
	reason: Reason,
	context: Vec<&'static str>,
}

impl Error {
	/// Create an error with no type context yet.
	pub fn new(reason: Reason) -> Self {
		Self { reason, context: Vec::new() }
	}

	/// Shorthand for an input that ran dry.
	pub fn not_enough_data() -> Self {
		Self::new(Reason::NotEnoughData)
	}

	/// Shorthand for an unknown discriminant while decoding `type_name`.
	pub fn unknown_variant(type_name: &'static str, index: u8) -> Self {
		Self::new(Reason::UnknownVariant(index)).expecting(type_name)
	}

	/// Record that this error happened while decoding `type_name`.
	pub fn expecting(mut self, type_name: &'static str) -> Self {
		self.context.push(type_name);
		self
	}

	/// Why the decode failed.
	pub fn reason(&self) -> Reason {
		self.reason
	}

	/// The innermost type that failed to decode, if any was recorded.
	pub fn expected(&self) -> Option<&'static str> {
		self.context.first().copied()
	}

	/// The outermost type that failed to decode, if any was recorded.
	pub fn outermost(&self) -> Option<&'static str> {
		self.context.last().copied()
	}
}

impl From<Reason> for Error {
	fn from(reason: Reason) -> Self {
		Self::new(reason)
	}
}

impl From<&'static str> for Error {
	fn from(desc: &'static str) -> Self {
		Self::new(Reason::InvalidValue(desc))
	}
}

impl fmt::Debug for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		for name in self.context.iter().rev() {
			write!(f, "Could not decode `{}`:\n\t", name)?;
		}
		write!(f, "{}", self.reason)
	}
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
