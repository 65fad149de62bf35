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


//! Smaller traits which don't need their own file.

use tessera_primitives::Externalities;

/// Error message logged when an execution path that should be unreachable is taken.
pub const DEFENSIVE_OP_PUBLIC_ERROR: &str = "a defensive failure has been triggered; please report the block number";

/// Same as [`DEFENSIVE_OP_PUBLIC_ERROR`] but for internal use, e.g. in tests.
pub const DEFENSIVE_OP_INTERNAL_ERROR: &str = "Defensive failure has been triggered!";

/// Saturating arithmetic that calls `defensive!` when saturation happens.
pub trait DefensiveSaturating: Sized {
	/// Return `self` plus `other` defensively.
	fn defensive_saturating_add(self, other: Self) -> Self;
	/// Return `self` minus `other` defensively.
	fn defensive_saturating_sub(self, other: Self) -> Self;
	/// Increase `self` by `other` defensively.
	fn defensive_saturating_accrue(&mut self, other: Self);
	/// Reduce `self` by `other` defensively.
	fn defensive_saturating_reduce(&mut self, other: Self);
}

macro_rules! impl_defensive_saturating {
	( $( $t:ty ),* ) => { $(
		impl DefensiveSaturating for $t {
			fn defensive_saturating_add(self, other: Self) -> Self {
				self.checked_add(other).unwrap_or_else(|| {
					defensive!("Unexpected overflow");
					Self::MAX
				})
			}
			fn defensive_saturating_sub(self, other: Self) -> Self {
				self.checked_sub(other).unwrap_or_else(|| {
					defensive!("Unexpected underflow");
					0
				})
			}
			fn defensive_saturating_accrue(&mut self, other: Self) {
				*self = self.defensive_saturating_add(other);
			}
			fn defensive_saturating_reduce(&mut self, other: Self) {
				*self = self.defensive_saturating_sub(other);
			}
		}
	)* }
}

impl_defensive_saturating!(u32, u64, u128);

/// Prelude module for all defensive traits to be imported at once.
pub mod defensive_prelude {
	pub use super::DefensiveSaturating;
}

/// A trait for querying whether a type can be said to "contain" a value.
pub trait Contains<T> {
	/// Return `true` if this "contains" the given value `t`.
	fn contains(t: &T) -> bool;
}

/// A [`Contains`] implementation that contains every value.
pub enum Everything {}
impl<T> Contains<T> for Everything {
	fn contains(_: &T) -> bool {
		true
	}
}

/// A [`Contains`] implementation that contains no value.
pub enum Nothing {}
impl<T> Contains<T> for Nothing {
	fn contains(_: &T) -> bool {
		false
	}
}

/// Return type used when we need to return one of two items, each of the opposite direction or
/// sign, with one (`Same`) being of the same type as the `self` or primary argument of the
/// function that returned it.
pub enum SameOrOther<A, B> {
	/// No item.
	None,
	/// An item of the same type as the `Self` on which the return function was called.
	Same(A),
	/// An item of the opposite type to the `Self` on which the return function was called.
	Other(B),
}

impl<A, B> TryDrop for SameOrOther<A, B> {
	fn try_drop(self) -> Result<(), Self> {
		if let SameOrOther::None = self {
			Ok(())
		} else {
			Err(self)
		}
	}
}

impl<A, B> SameOrOther<A, B> {
	/// Returns `Ok` with the inner value of `Same` if `self` is that, otherwise returns `Err` with
	/// `self`.
	pub fn try_same(self) -> Result<A, Self> {
		match self {
			SameOrOther::Same(a) => Ok(a),
			x => Err(x),
		}
	}

	/// Returns `Ok` with the inner value of `Other` if `self` is that, otherwise returns `Err` with
	/// `self`.
	pub fn try_other(self) -> Result<B, Self> {
		match self {
			SameOrOther::Other(b) => Ok(b),
			x => Err(x),
		}
	}

	/// Returns `Ok` if `self` is `None`, otherwise returns `Err` with `self`.
	pub fn try_none(self) -> Result<(), Self> {
		match self {
			SameOrOther::None => Ok(()),
			x => Err(x),
		}
	}

	pub fn same(self) -> Result<A, B>
	where
		A: Default,
	{
		match self {
			SameOrOther::Same(a) => Ok(a),
			SameOrOther::None => Ok(A::default()),
			SameOrOther::Other(b) => Err(b),
		}
	}

	pub fn other(self) -> Result<B, A>
	where
		B: Default,
	{
		match self {
			SameOrOther::Same(a) => Err(a),
			SameOrOther::None => Ok(B::default()),
			SameOrOther::Other(b) => Ok(b),
		}
	}
}

/// A type for which some values make sense to be able to drop without further consideration.
pub trait TryDrop: Sized {
	/// Drop an instance cleanly. Only works if its value represents "no-operation".
	fn try_drop(self) -> Result<(), Self>;
}

impl TryDrop for () {
	fn try_drop(self) -> Result<(), Self> {
		Ok(())
	}
}

/// Handler for when a new account has been created.
pub trait OnNewAccount<AccountId> {
	/// A new account `who` has been registered.
	fn on_new_account(ext: &mut Externalities, who: &AccountId);
}

crate::impl_for_tuples_attr! {
	impl<AccountId> OnNewAccount<AccountId> for Tuple {
		fn on_new_account(ext: &mut Externalities, who: &AccountId) {
			for_tuples!( #( Tuple::on_new_account(ext, who); )* );
		}
	}
}

/// The account with the given id was reaped.
pub trait OnKilledAccount<AccountId> {
	/// The account with the given id was reaped.
	fn on_killed_account(ext: &mut Externalities, who: &AccountId);
}

crate::impl_for_tuples_attr! {
	impl<AccountId> OnKilledAccount<AccountId> for Tuple {
		fn on_killed_account(ext: &mut Externalities, who: &AccountId) {
			for_tuples!( #( Tuple::on_killed_account(ext, who); )* );
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn same_or_other_accessors() {
		assert_eq!(SameOrOther::<u8, u16>::Same(1).same(), Ok(1));
		assert_eq!(SameOrOther::<u8, u16>::None.same(), Ok(0));
		assert_eq!(SameOrOther::<u8, u16>::Other(2).same(), Err(2));
		assert!(SameOrOther::<u8, u16>::None.try_drop().is_ok());
		assert!(SameOrOther::<u8, u16>::Other(2).try_none().is_err());
	}

	#[test]
	fn contains_everything_and_nothing() {
		assert!(<Everything as Contains<u8>>::contains(&3));
		assert!(!<Nothing as Contains<u8>>::contains(&3));
	}

	#[test]
	fn defensive_saturating_in_range() {
		assert_eq!(5u128.defensive_saturating_add(5), 10);
		let mut x = 5u32;
		x.defensive_saturating_reduce(2);
		assert_eq!(x, 3);
	}

	#[test]
	#[cfg(debug_assertions)]
	#[should_panic(expected = "Defensive failure has been triggered!")]
	fn defensive_saturating_underflow_panics_in_debug() {
		let _ = 1u64.defensive_saturating_sub(2);
	}
}
