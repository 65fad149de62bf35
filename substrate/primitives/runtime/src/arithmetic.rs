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

//! Fixed point arithmetic used by the runtime: [`Perbill`] for ratios and [`FixedU128`] for the
//! fee multiplier.

use codec::{Decode, Encode, Error, Input, Output};
use core::{fmt, ops::Mul};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};
use tessera_weights::Weight;

/// Rounding method used when a rational result does not fit exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rounding {
	/// Towards zero.
	Down,
	/// Away from zero.
	Up,
	/// To the nearest value, halves go down.
	NearestPrefDown,
}

/// Full 256 bit product of two `u128`, returned as `(high, low)`.
fn full_mul(a: u128, b: u128) -> (u128, u128) {
	const MASK: u128 = u64::MAX as u128;
	let (a1, a0) = (a >> 64, a & MASK);
	let (b1, b0) = (b >> 64, b & MASK);
	let p00 = a0 * b0;
	let p01 = a0 * b1;
	let p10 = a1 * b0;
	let p11 = a1 * b1;
	let mid = (p00 >> 64) + (p01 & MASK) + (p10 & MASK);
	let lo = (p00 & MASK) | (mid << 64);
	let hi = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);
	(hi, lo)
}

/// Compute `a * b / c` without intermediate overflow, returning the quotient and remainder.
///
/// Returns `None` if `c` is zero or the quotient does not fit in a `u128`.
pub fn multiply_by_rational(a: u128, b: u128, c: u128) -> Option<(u128, u128)> {
	if c == 0 {
		return None
	}
	let (hi, lo) = full_mul(a, b);
	if hi >= c {
		return None
	}
	let mut rem = hi;
	let mut quot = 0u128;
	for i in (0..128).rev() {
		let carry = rem >> 127;
		rem = (rem << 1) | ((lo >> i) & 1);
		quot <<= 1;
		if carry == 1 || rem >= c {
			rem = rem.wrapping_sub(c);
			quot |= 1;
		}
	}
	Some((quot, rem))
}

/// `a * b / c` rounded as requested, `None` on division by zero or overflow.
pub fn multiply_by_rational_with_rounding(
	a: u128,
	b: u128,
	c: u128,
	rounding: Rounding,
) -> Option<u128> {
	let (quot, rem) = multiply_by_rational(a, b, c)?;
	let round_up = match rounding {
		Rounding::Down => false,
		Rounding::Up => rem > 0,
		Rounding::NearestPrefDown => rem > c - rem,
	};
	if round_up {
		quot.checked_add(1)
	} else {
		Some(quot)
	}
}

/// A fixed point representation of a number in the range [0, 1], in parts per billion.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Perbill(u32);

impl Perbill {
	/// Number of parts in one whole.
	pub const ACCURACY: u32 = 1_000_000_000;

	/// Everything.
	pub const fn one() -> Self {
		Self(Self::ACCURACY)
	}

	/// Nothing.
	pub const fn zero() -> Self {
		Self(0)
	}

	/// `true` if this is nothing.
	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// Build from raw parts, saturating at one.
	pub const fn from_parts(parts: u32) -> Self {
		Self(if parts > Self::ACCURACY { Self::ACCURACY } else { parts })
	}

	/// Converts from a percent. Equal to `x / 100`, saturating at 100 percent.
	pub const fn from_percent(x: u32) -> Self {
		let x = if x > 100 { 100 } else { x };
		Self(x * (Self::ACCURACY / 100))
	}

	/// `p / q` rounded down, saturating at one. A zero `q` gives one.
	pub fn from_rational(p: u128, q: u128) -> Self {
		if p >= q {
			return Self::one()
		}
		let parts = multiply_by_rational(p, Self::ACCURACY as u128, q).map_or(0, |(x, _)| x);
		Self(parts as u32)
	}

	/// The raw parts per billion.
	pub const fn deconstruct(self) -> u32 {
		self.0
	}

	/// `self * x`, rounding towards zero.
	pub fn mul_floor(self, x: u128) -> u128 {
		self.mul_with(x, Rounding::Down)
	}

	/// `self * x`, rounding away from zero.
	pub fn mul_ceil(self, x: u128) -> u128 {
		self.mul_with(x, Rounding::Up)
	}

	/// `1 - self`.
	pub const fn left_from_one(self) -> Self {
		Self(Self::ACCURACY - self.0)
	}

	fn mul_with(self, x: u128, rounding: Rounding) -> u128 {
		// Never overflows: the result is at most `x`.
		multiply_by_rational_with_rounding(x, self.0 as u128, Self::ACCURACY as u128, rounding)
			.unwrap_or(x)
	}
}

impl fmt::Debug for Perbill {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}.{:07}%", self.0 / 10_000_000, self.0 % 10_000_000)
	}
}

impl Mul<u64> for Perbill {
	type Output = u64;
	fn mul(self, b: u64) -> u64 {
		self.mul_with(b as u128, Rounding::NearestPrefDown) as u64
	}
}

impl Mul<u128> for Perbill {
	type Output = u128;
	fn mul(self, b: u128) -> u128 {
		self.mul_with(b, Rounding::NearestPrefDown)
	}
}

impl Mul<u32> for Perbill {
	type Output = u32;
	fn mul(self, b: u32) -> u32 {
		self.mul_with(b as u128, Rounding::NearestPrefDown) as u32
	}
}

impl Mul<Weight> for Perbill {
	type Output = Weight;
	fn mul(self, b: Weight) -> Weight {
		Weight::from_parts(self * b.ref_time(), self * b.proof_size())
	}
}

impl Encode for Perbill {
	fn size_hint(&self) -> usize {
		4
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.0.encode_to(dest)
	}
}

impl Decode for Perbill {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let parts = u32::decode(input).map_err(|e| e.expecting("Perbill"))?;
		if parts > Self::ACCURACY {
			return Err(Error::from("Perbill out of range").expecting("Perbill"))
		}
		Ok(Self(parts))
	}
}

/// An unsigned fixed point number with 18 decimals, backed by a `u128`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(transparent))]
pub struct FixedU128(u128);

impl FixedU128 {
	/// The accuracy of this type.
	pub const DIV: u128 = 1_000_000_000_000_000_000;

	/// Create from the raw inner value.
	pub const fn from_inner(inner: u128) -> Self {
		Self(inner)
	}

	/// The raw inner value.
	pub const fn into_inner(self) -> u128 {
		self.0
	}

	/// One.
	pub const fn one() -> Self {
		Self(Self::DIV)
	}

	/// Zero.
	pub const fn zero() -> Self {
		Self(0)
	}

	/// `true` if this is zero.
	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// `true` if this is one.
	pub const fn is_one(&self) -> bool {
		self.0 == Self::DIV
	}

	/// The integer `n` as a fixed point number, saturating at the maximum.
	pub const fn saturating_from_integer(n: u128) -> Self {
		Self(n.saturating_mul(Self::DIV))
	}

	/// `n / d`, or `None` if `d` is zero or the result does not fit.
	pub fn checked_from_rational(n: u128, d: u128) -> Option<Self> {
		multiply_by_rational(n, Self::DIV, d).map(|(inner, _)| Self(inner))
	}

	/// `n / d`, saturating at the maximum. A zero `d` saturates as well.
	pub fn saturating_from_rational(n: u128, d: u128) -> Self {
		Self::checked_from_rational(n, d).unwrap_or(Self(u128::MAX))
	}

	/// Multiply an integer by this number, rounding down and saturating at the maximum.
	pub fn saturating_mul_int(self, n: u128) -> u128 {
		multiply_by_rational(self.0, n, Self::DIV).map_or(u128::MAX, |(x, _)| x)
	}

	/// Saturating addition.
	pub const fn saturating_add(self, rhs: Self) -> Self {
		Self(self.0.saturating_add(rhs.0))
	}

	/// Saturating subtraction.
	pub const fn saturating_sub(self, rhs: Self) -> Self {
		Self(self.0.saturating_sub(rhs.0))
	}

	/// Saturating multiplication.
	pub fn saturating_mul(self, rhs: Self) -> Self {
		Self(self.saturating_mul_int(rhs.0))
	}

	/// Checked multiplication.
	pub fn checked_mul(self, rhs: Self) -> Option<Self> {
		multiply_by_rational(self.0, rhs.0, Self::DIV).map(|(x, _)| Self(x))
	}
}

impl fmt::Debug for FixedU128 {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "FixedU128({}.{:018})", self.0 / Self::DIV, self.0 % Self::DIV)
	}
}

impl Encode for FixedU128 {
	fn size_hint(&self) -> usize {
		16
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.0.encode_to(dest)
	}
}

impl Decode for FixedU128 {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		u128::decode(input).map(Self).map_err(|e| e.expecting("FixedU128"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn perbill_percent_and_parts() {
		assert_eq!(Perbill::from_percent(75).deconstruct(), 750_000_000);
		assert_eq!(Perbill::from_percent(150), Perbill::one());
		assert_eq!(Perbill::from_parts(2_000_000_000), Perbill::one());
		assert_eq!(Perbill::from_percent(10).left_from_one(), Perbill::from_percent(90));
		assert_eq!(Perbill::from_rational(1, 3).deconstruct(), 333_333_333);
		assert_eq!(Perbill::from_rational(5, 0), Perbill::one());
	}

	#[test]
	fn perbill_multiplication_rounds() {
		let third = Perbill::from_rational(1, 3);
		assert_eq!(third.mul_floor(10u128), 3);
		assert_eq!(third.mul_ceil(10u128), 4);
		assert_eq!(Perbill::from_percent(50) * 3u64, 1);
		assert_eq!(Perbill::from_percent(75) * 2_000_000_000_000u64, 1_500_000_000_000);
		assert_eq!(Perbill::one() * u128::MAX, u128::MAX);
		assert_eq!(
			Perbill::from_percent(10) * Weight::from_parts(1_000, 50),
			Weight::from_parts(100, 5)
		);
	}

	#[test]
	fn perbill_decode_rejects_out_of_range() {
		assert!(Perbill::decode(&mut &1_000_000_001u32.encode()[..]).is_err());
		assert_eq!(
			Perbill::decode(&mut &Perbill::from_percent(5).encode()[..]).unwrap(),
			Perbill::from_percent(5)
		);
	}

	#[test]
	fn fixed_mul_int_works() {
		assert_eq!(FixedU128::one().saturating_mul_int(42), 42);
		assert_eq!(FixedU128::saturating_from_rational(1, 2).saturating_mul_int(5), 2);
		assert_eq!(FixedU128::saturating_from_integer(3).saturating_mul_int(u128::MAX), u128::MAX);
		assert_eq!(FixedU128::zero().saturating_mul_int(u128::MAX), 0);
		assert_eq!(FixedU128::one().saturating_mul_int(u128::MAX), u128::MAX);
	}

	#[test]
	fn fixed_rational_and_ops() {
		assert_eq!(FixedU128::checked_from_rational(1, 0), None);
		let half = FixedU128::saturating_from_rational(1, 2);
		assert_eq!(half.into_inner(), FixedU128::DIV / 2);
		assert_eq!(half.saturating_add(half), FixedU128::one());
		assert_eq!(half.saturating_mul(half).into_inner(), FixedU128::DIV / 4);
		assert_eq!(half.saturating_sub(FixedU128::one()), FixedU128::zero());
		assert!(FixedU128::from_inner(u128::MAX).checked_mul(FixedU128::saturating_from_integer(2)).is_none());
		assert_eq!(alloc::format!("{:?}", half), "FixedU128(0.500000000000000000)");
	}

	proptest! {
		#[test]
		fn multiply_by_rational_matches_small_arithmetic(a in any::<u64>(), b in any::<u64>(), c in 1u64..) {
			let expected = (a as u128) * (b as u128);
			let (q, r) = multiply_by_rational(a as u128, b as u128, c as u128).unwrap();
			prop_assert_eq!(q, expected / c as u128);
			prop_assert_eq!(r, expected % c as u128);
		}

		#[test]
		fn multiply_by_rational_identity(a in any::<u128>(), c in 1u128..) {
			prop_assert_eq!(multiply_by_rational(a, c, c), Some((a, 0)));
		}
	}
}
