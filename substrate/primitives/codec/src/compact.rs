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

//! [Compact encoding](https://docs.substrate.io/reference/scale-codec/#fn-1) for unsigned
//! integers.
//!
//! The two least significant bits of the first byte select the mode:
//!
//! - `0b00`: single byte mode, the upper six bits are the value (`0..=63`).
//! - `0b01`: two byte mode, the upper six bits and the next byte are the value (`64..=2^14-1`).
//! - `0b10`: four byte mode (`2^14..=2^30-1`).
//! - `0b11`: big integer mode, the upper six bits are the number of following bytes minus four.
//!
//! Decoding rejects any encoding that uses a longer mode than its value needs.

use crate::{
	codec::{Decode, Encode, Input, Output},
	error::{Error, Reason},
};

const SINGLE_BYTE_MAX: u128 = 0b0011_1111;
const TWO_BYTE_MAX: u128 = 0b0011_1111_1111_1111;
const FOUR_BYTE_MAX: u128 = 0x3fff_ffff;

/// Compact-encoded variant of `T`. This is more space-efficient but less compute-efficient.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug, Default, Hash)]
pub struct Compact<T>(pub T);

impl<T> From<T> for Compact<T> {
	fn from(x: T) -> Compact<T> {
		Compact(x)
	}
}

/// Something that has a compact length.
pub trait CompactLen<T> {
	/// Determine the compact length of the given value.
	fn compact_len(val: &T) -> usize;
}

fn bytes_needed(value: u128) -> usize {
	((128 - value.leading_zeros() as usize) + 7) / 8
}

fn compact_len_of(value: u128) -> usize {
	match value {
		0..=SINGLE_BYTE_MAX => 1,
		0..=TWO_BYTE_MAX => 2,
		0..=FOUR_BYTE_MAX => 4,
		_ => 1 + bytes_needed(value),
	}
}

fn encode_compact<W: Output + ?Sized>(value: u128, dest: &mut W) {
	match value {
		0..=SINGLE_BYTE_MAX => dest.push_byte((value as u8) << 2),
		0..=TWO_BYTE_MAX => dest.write(&(((value as u16) << 2) | 0b01).to_le_bytes()),
		0..=FOUR_BYTE_MAX => dest.write(&(((value as u32) << 2) | 0b10).to_le_bytes()),
		_ => {
			let bytes = bytes_needed(value);
			debug_assert!(bytes >= 4, "values above the four byte mode need at least four bytes");
			dest.push_byte(0b11 + (((bytes - 4) as u8) << 2));
			dest.write(&value.to_le_bytes()[..bytes]);
		},
	}
}

fn decode_compact<I: Input>(input: &mut I) -> Result<u128, Error> {
	let prefix = input.read_byte()?;
	match prefix % 4 {
		0 => Ok((prefix >> 2) as u128),
		1 => {
			let x = u16::from_le_bytes([prefix, input.read_byte()?]) >> 2;
			if x as u128 > SINGLE_BYTE_MAX {
				Ok(x as u128)
			} else {
				Err(Reason::NonCanonicalCompact.into())
			}
		},
		2 => {
			let mut buf = [prefix, 0, 0, 0];
			input.read(&mut buf[1..])?;
			let x = u32::from_le_bytes(buf) >> 2;
			if x as u128 > TWO_BYTE_MAX {
				Ok(x as u128)
			} else {
				Err(Reason::NonCanonicalCompact.into())
			}
		},
		_ => {
			let bytes = (prefix >> 2) as usize + 4;
			if bytes > 16 {
				return Err(Reason::OutOfRange.into())
			}
			let mut buf = [0u8; 16];
			input.read(&mut buf[..bytes])?;
			let x = u128::from_le_bytes(buf);
			if buf[bytes - 1] == 0 || x <= FOUR_BYTE_MAX {
				return Err(Reason::NonCanonicalCompact.into())
			}
			Ok(x)
		},
	}
}

macro_rules! impl_compact {
	( $( $t:ty ),* ) => { $(
		impl Encode for Compact<$t> {
			fn size_hint(&self) -> usize {
				compact_len_of(self.0 as u128)
			}

			fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
				encode_compact(self.0 as u128, dest)
			}
		}

		impl Decode for Compact<$t> {
			fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
				let value = decode_compact(input)
					.map_err(|e| e.expecting(concat!("Compact<", stringify!($t), ">")))?;
				<$t>::try_from(value).map(Compact).map_err(|_| {
					Error::new(Reason::OutOfRange)
						.expecting(concat!("Compact<", stringify!($t), ">"))
				})
			}
		}

		impl CompactLen<$t> for Compact<$t> {
			fn compact_len(val: &$t) -> usize {
				compact_len_of(*val as u128)
			}
		}

		impl From<Compact<$t>> for $t {
			fn from(x: Compact<$t>) -> $t {
				x.0
			}
		}
	)* }
}

impl_compact!(u8, u16, u32, u64, u128);
