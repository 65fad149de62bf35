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

//! Transaction longevity.

use codec::{Decode, Encode, Error, Input, Output};
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Era period: the number of blocks a mortal transaction stays valid for.
pub type Period = u64;

/// Era phase: the offset within the period at which a mortal transaction was born.
pub type Phase = u64;

/// Shortest period a mortal era can describe.
const MIN_PERIOD: u64 = 4;
/// Longest period a mortal era can describe.
const MAX_PERIOD: u64 = 1 << 16;
/// Phases of periods above this are stored with reduced precision.
const PHASE_PRECISION: u64 = 1 << 12;

/// An era to describe the longevity of a transaction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub enum Era {
	/// The transaction is valid forever. The genesis hash is part of the signed payload.
	Immortal,
	/// The transaction is valid for `period` blocks starting at the block whose number is
	/// congruent to `phase` modulo `period`. The hash of that block is part of the signed
	/// payload.
	///
	/// `period` must not exceed the number of block hashes the chain keeps around.
	Mortal(Period, Phase),
}

fn quantize_factor(period: u64) -> u64 {
	(period / PHASE_PRECISION).max(1)
}

impl Era {
	/// A mortal era of roughly `period` blocks starting around block `current`.
	///
	/// The period is rounded up to a power of two within `4..=65536` and, for long periods, the
	/// phase is rounded down to the precision the encoding can carry.
	pub fn mortal(period: u64, current: u64) -> Self {
		let period =
			period.checked_next_power_of_two().unwrap_or(MAX_PERIOD).clamp(MIN_PERIOD, MAX_PERIOD);
		let factor = quantize_factor(period);
		let phase = current % period / factor * factor;
		Self::Mortal(period, phase)
	}

	/// An era that never ends.
	pub fn immortal() -> Self {
		Self::Immortal
	}

	/// `true` if this is an immortal era.
	pub fn is_immortal(&self) -> bool {
		matches!(self, Self::Immortal)
	}

	/// The first block of the era instance that `current` falls into.
	pub fn birth(self, current: u64) -> u64 {
		match self {
			Self::Immortal => 0,
			Self::Mortal(period, phase) => (current.max(phase) - phase) / period * period + phase,
		}
	}

	/// The first block at which the era instance that `current` falls into has ended.
	pub fn death(self, current: u64) -> u64 {
		match self {
			Self::Immortal => u64::MAX,
			Self::Mortal(period, _) => self.birth(current).saturating_add(period),
		}
	}
}

impl Encode for Era {
	fn size_hint(&self) -> usize {
		if self.is_immortal() {
			1
		} else {
			2
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match *self {
			Self::Immortal => dest.push_byte(0),
			Self::Mortal(period, phase) => {
				// Low four bits: log2(period) - 1. High twelve bits: the quantized phase.
				let log = (period.trailing_zeros().saturating_sub(1)).clamp(1, 15) as u16;
				let phase = (phase / quantize_factor(period)) as u16;
				(log | (phase << 4)).encode_to(dest);
			},
		}
	}
}

impl Decode for Era {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let first = input.read_byte().map_err(|e| e.expecting("Era"))?;
		if first == 0 {
			return Ok(Self::Immortal)
		}
		let second = input.read_byte().map_err(|e| e.expecting("Era"))?;
		let encoded = u16::from_le_bytes([first, second]) as u64;
		let period = 2u64 << (encoded % 16);
		let phase = (encoded >> 4) * quantize_factor(period);
		if period >= MIN_PERIOD && phase < period {
			Ok(Self::Mortal(period, phase))
		} else {
			Err(Error::from("Invalid period and phase").expecting("Era"))
		}
	}
}
