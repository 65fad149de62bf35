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

//! Core encoding and decoding traits and their implementations for primitive and container
//! types.

use alloc::{borrow::Cow, boxed::Box, string::String, vec::Vec};
use core::marker::PhantomData;

use crate::{
	compact::{Compact, CompactLen},
	error::{Error, Reason},
};

/// Trait that allows reading of data into a slice.
pub trait Input {
	/// Should return the remaining length of the input data. If no information about the input
	/// length is available, `None` should be returned.
	///
	/// The length is used to constrain the preallocation while decoding. Returning a garbage
	/// length can open the doors for a denial of service attack to your application.
	fn remaining_len(&mut self) -> Result<Option<usize>, Error>;

	/// Read the exact number of bytes required to fill the given buffer.
	///
	/// Note that this function is similar to `std::io::Read::read_exact` and not
	/// `std::io::Read::read`.
	fn read(&mut self, into: &mut [u8]) -> Result<(), Error>;

	/// Read a single byte from the input.
	fn read_byte(&mut self) -> Result<u8, Error> {
		let mut buf = [0u8];
		self.read(&mut buf[..])?;
		Ok(buf[0])
	}
}

impl<'a> Input for &'a [u8] {
	fn remaining_len(&mut self) -> Result<Option<usize>, Error> {
		Ok(Some(self.len()))
	}

	fn read(&mut self, into: &mut [u8]) -> Result<(), Error> {
		if into.len() > self.len() {
			return Err(Error::not_enough_data())
		}
		let len = into.len();
		into.copy_from_slice(&self[..len]);
		*self = &self[len..];
		Ok(())
	}
}

impl<'a, I: Input + ?Sized> Input for &'a mut I {
	fn remaining_len(&mut self) -> Result<Option<usize>, Error> {
		(**self).remaining_len()
	}

	fn read(&mut self, into: &mut [u8]) -> Result<(), Error> {
		(**self).read(into)
	}

	fn read_byte(&mut self) -> Result<u8, Error> {
		(**self).read_byte()
	}
}

/// Trait that allows writing of data.
pub trait Output {
	/// Write to the output.
	fn write(&mut self, bytes: &[u8]);

	/// Write a single byte to the output.
	fn push_byte(&mut self, byte: u8) {
		self.write(&[byte]);
	}
}

impl Output for Vec<u8> {
	fn write(&mut self, bytes: &[u8]) {
		self.extend_from_slice(bytes)
	}
}

/// Trait that allows zero-copy write of value-references to slices in LE format.
///
/// Implementations should override `using_encoded` for value types and `encode_to` and
/// `size_hint` for allocating types. Wrapper types should override all methods.
pub trait Encode {
	/// If possible give a hint of expected size of the encoding.
	///
	/// This method is used inside default implementation of `encode` to avoid re-allocations.
	fn size_hint(&self) -> usize {
		0
	}

	/// Convert self to a slice and append it to the destination.
	fn encode_to<T: Output + ?Sized>(&self, dest: &mut T);

	/// Convert self to an owned vector.
	fn encode(&self) -> Vec<u8> {
		let mut r = Vec::with_capacity(self.size_hint());
		self.encode_to(&mut r);
		r
	}

	/// Convert self to a slice and then invoke the given closure with it.
	fn using_encoded<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
		f(&self.encode())
	}

	/// Calculates the encoded size.
	fn encoded_size(&self) -> usize {
		self.encode().len()
	}
}

/// Trait that allows zero-copy read of value-references from slices in LE format.
pub trait Decode: Sized {
	/// Attempt to deserialise the value from input.
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error>;
}

/// Trait for types that are both [`Encode`] and [`Decode`].
pub trait Codec: Decode + Encode {}
impl<S: Decode + Encode> Codec for S {}

/// Trait for types that are [`Codec`], cloneable and comparable, i.e. everything that can be
/// stored.
pub trait FullCodec: Codec + Clone + PartialEq + core::fmt::Debug {}
impl<S: Codec + Clone + PartialEq + core::fmt::Debug> FullCodec for S {}

/// Extension trait to [`Decode`] that ensures that the given input data is consumed completely
/// while decoding.
pub trait DecodeAll: Sized {
	/// Decode `Self` and consume all of the given input data.
	///
	/// If not all data is consumed, an error is returned.
	fn decode_all(input: &mut &[u8]) -> Result<Self, Error>;
}

impl<T: Decode> DecodeAll for T {
	fn decode_all(input: &mut &[u8]) -> Result<Self, Error> {
		let res = T::decode(input)?;
		if input.is_empty() {
			Ok(res)
		} else {
			Err(Error::new(Reason::TrailingInput))
		}
	}
}

/// Decode a value from the front of `bytes` and return it together with the bytes that were
/// not consumed.
pub fn decode_with_remainder<T: Decode>(bytes: &[u8]) -> Result<(T, &[u8]), Error> {
	let mut cursor = bytes;
	let value = T::decode(&mut cursor)?;
	Ok((value, cursor))
}

macro_rules! impl_for_integer {
	( $( $t:ty ),* ) => { $(
		impl Encode for $t {
			fn size_hint(&self) -> usize {
				core::mem::size_of::<$t>()
			}

			fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
				dest.write(&self.to_le_bytes())
			}

			fn using_encoded<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
				f(&self.to_le_bytes())
			}
		}

		impl Decode for $t {
			fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
				let mut buf = [0u8; core::mem::size_of::<$t>()];
				input.read(&mut buf).map_err(|e| e.expecting(stringify!($t)))?;
				Ok(<$t>::from_le_bytes(buf))
			}
		}
	)* }
}

impl_for_integer!(u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Encode for u8 {
	fn size_hint(&self) -> usize {
		1
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		dest.push_byte(*self)
	}

	fn using_encoded<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
		f(&[*self])
	}
}

impl Decode for u8 {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		input.read_byte().map_err(|e| e.expecting("u8"))
	}
}

impl Encode for bool {
	fn size_hint(&self) -> usize {
		1
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		dest.push_byte(*self as u8)
	}
}

impl Decode for bool {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		match input.read_byte().map_err(|e| e.expecting("bool"))? {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(Error::from("Invalid boolean representation").expecting("bool")),
		}
	}
}

impl Encode for () {
	fn encode_to<W: Output + ?Sized>(&self, _dest: &mut W) {}

	fn encode(&self) -> Vec<u8> {
		Vec::new()
	}
}

impl Decode for () {
	fn decode<I: Input>(_input: &mut I) -> Result<Self, Error> {
		Ok(())
	}
}

impl<T> Encode for PhantomData<T> {
	fn encode_to<W: Output + ?Sized>(&self, _dest: &mut W) {}
}

impl<T> Decode for PhantomData<T> {
	fn decode<I: Input>(_input: &mut I) -> Result<Self, Error> {
		Ok(PhantomData)
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn size_hint(&self) -> usize {
		(**self).size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		(**self).encode_to(dest)
	}

	fn encode(&self) -> Vec<u8> {
		(**self).encode()
	}

	fn using_encoded<R, F: FnOnce(&[u8]) -> R>(&self, f: F) -> R {
		(**self).using_encoded(f)
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn size_hint(&self) -> usize {
		(**self).size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		(**self).encode_to(dest)
	}
}

impl<T: Decode> Decode for Box<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		T::decode(input).map(Box::new)
	}
}

/// Fixed length sequences carry their length in the type and encode only their elements.
impl<T: Encode, const N: usize> Encode for [T; N] {
	fn size_hint(&self) -> usize {
		self.iter().map(Encode::size_hint).sum()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		for item in self.iter() {
			item.encode_to(dest);
		}
	}
}

impl<T: Decode, const N: usize> Decode for [T; N] {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let mut items = Vec::with_capacity(N);
		for _ in 0..N {
			items.push(T::decode(input).map_err(|e| e.expecting("[T; N]"))?);
		}
		items
			.try_into()
			.map_err(|_| Error::from("Fixed sequence length mismatch").expecting("[T; N]"))
	}
}

/// Encode the elements of a slice prefixed with their compact length.
impl<T: Encode> Encode for [T] {
	fn size_hint(&self) -> usize {
		Compact::<u32>::compact_len(&(self.len() as u32)) +
			self.iter().map(Encode::size_hint).sum::<usize>()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		encode_len(self.len(), dest);
		for item in self.iter() {
			item.encode_to(dest);
		}
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn size_hint(&self) -> usize {
		self.as_slice().size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.as_slice().encode_to(dest)
	}
}

impl<T: Decode> Decode for Vec<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let len = decode_len(input).map_err(|e| e.expecting("Vec<T>"))?;
		// Never trust the length prefix for preallocation; at least one byte per element must
		// still be available.
		let capacity = match input.remaining_len()? {
			Some(remaining) => len.min(remaining),
			None => 0,
		};
		let mut items = Vec::with_capacity(capacity);
		for _ in 0..len {
			items.push(T::decode(input).map_err(|e| e.expecting("Vec<T>"))?);
		}
		Ok(items)
	}
}

impl Encode for str {
	fn size_hint(&self) -> usize {
		self.as_bytes().size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		encode_len(self.len(), dest);
		dest.write(self.as_bytes());
	}
}

impl Encode for String {
	fn size_hint(&self) -> usize {
		self.as_str().size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.as_str().encode_to(dest)
	}
}

impl Decode for String {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		let len = decode_len(input).map_err(|e| e.expecting("String"))?;
		if input.remaining_len()?.map_or(false, |remaining| remaining < len) {
			return Err(Error::not_enough_data().expecting("String"))
		}
		let mut bytes = alloc::vec![0u8; len];
		input.read(&mut bytes).map_err(|e| e.expecting("String"))?;
		String::from_utf8(bytes).map_err(|_| Error::from("Invalid utf8 sequence").expecting("String"))
	}
}

impl<'a> Encode for Cow<'a, str> {
	fn size_hint(&self) -> usize {
		self.as_ref().size_hint()
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		self.as_ref().encode_to(dest)
	}
}

impl<'a> Decode for Cow<'a, str> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		String::decode(input).map(Cow::Owned)
	}
}

/// `Option` is a tagged union: `0x00` for `None`, `0x01` followed by the value for `Some`.
impl<T: Encode> Encode for Option<T> {
	fn size_hint(&self) -> usize {
		1 + self.as_ref().map_or(0, Encode::size_hint)
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match self {
			Some(v) => {
				dest.push_byte(1);
				v.encode_to(dest);
			},
			None => dest.push_byte(0),
		}
	}
}

impl<T: Decode> Decode for Option<T> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		match input.read_byte().map_err(|e| e.expecting("Option<T>"))? {
			0 => Ok(None),
			1 => Ok(Some(T::decode(input).map_err(|e| e.expecting("Option<T>"))?)),
			index => Err(Error::unknown_variant("Option<T>", index)),
		}
	}
}

/// `Result` is a tagged union: `0x00` followed by the ok value, `0x01` followed by the error.
impl<T: Encode, E: Encode> Encode for Result<T, E> {
	fn size_hint(&self) -> usize {
		1 + match self {
			Ok(t) => t.size_hint(),
			Err(e) => e.size_hint(),
		}
	}

	fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
		match self {
			Ok(t) => {
				dest.push_byte(0);
				t.encode_to(dest);
			},
			Err(e) => {
				dest.push_byte(1);
				e.encode_to(dest);
			},
		}
	}
}

impl<T: Decode, E: Decode> Decode for Result<T, E> {
	fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
		match input.read_byte().map_err(|e| e.expecting("Result<T, E>"))? {
			0 => Ok(Ok(T::decode(input).map_err(|e| e.expecting("Result<T, E>::Ok"))?)),
			1 => Ok(Err(E::decode(input).map_err(|e| e.expecting("Result<T, E>::Err"))?)),
			index => Err(Error::unknown_variant("Result<T, E>", index)),
		}
	}
}

macro_rules! impl_for_tuple {
	( $( $name:ident $idx:tt ),+ ) => {
		impl<$( $name: Encode ),+> Encode for ( $( $name, )+ ) {
			fn size_hint(&self) -> usize {
				0 $( + self.$idx.size_hint() )+
			}

			fn encode_to<W: Output + ?Sized>(&self, dest: &mut W) {
				$( self.$idx.encode_to(dest); )+
			}
		}

		impl<$( $name: Decode ),+> Decode for ( $( $name, )+ ) {
			fn decode<I: Input>(input: &mut I) -> Result<Self, Error> {
				Ok(( $( $name::decode(input).map_err(|e| e.expecting("tuple"))?, )+ ))
			}
		}
	};
}

impl_for_tuple!(A 0);
impl_for_tuple!(A 0, B 1);
impl_for_tuple!(A 0, B 1, C 2);
impl_for_tuple!(A 0, B 1, C 2, D 3);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8);
impl_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7, J 8, K 9);

/// Write a sequence length prefix.
pub(crate) fn encode_len<W: Output + ?Sized>(len: usize, dest: &mut W) {
	Compact(len as u32).encode_to(dest)
}

/// Read a sequence length prefix.
pub(crate) fn decode_len<I: Input>(input: &mut I) -> Result<usize, Error> {
	Compact::<u32>::decode(input).map(|Compact(len)| len as usize)
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;
	use pretty_assertions::assert_eq;

	#[test]
	fn integers_are_little_endian() {
		assert_eq!(1u16.encode(), hex!("0100"));
		assert_eq!(0x0102_0304u32.encode(), hex!("04030201"));
		assert_eq!((-1i64).encode(), hex!("ffffffffffffffff"));
		assert_eq!(u128::decode(&mut &[1u8; 16][..]).unwrap(), u128::from_le_bytes([1u8; 16]));
	}

	#[test]
	fn truncated_integer_names_the_type() {
		let err = u64::decode(&mut &hex!("010203")[..]).unwrap_err();
		assert_eq!(err.reason(), Reason::NotEnoughData);
		assert_eq!(err.expected(), Some("u64"));
	}

	#[test]
	fn bool_rejects_other_bytes() {
		assert_eq!(bool::decode(&mut &[1u8][..]), Ok(true));
		let err = bool::decode(&mut &[2u8][..]).unwrap_err();
		assert_eq!(err.expected(), Some("bool"));
	}

	#[test]
	fn vec_is_compact_length_prefixed() {
		let v: Vec<u16> = vec![1, 2, 3];
		assert_eq!(v.encode(), hex!("0c010002000300"));
		assert_eq!(Vec::<u16>::decode(&mut &hex!("0c010002000300")[..]).unwrap(), v);
	}

	#[test]
	fn vec_with_lying_length_fails_without_huge_allocation() {
		// Compact length of 2^30 - 1 elements, but only two bytes of payload.
		let bytes = hex!("feffffff0102");
		let err = Vec::<u8>::decode(&mut &bytes[..]).unwrap_err();
		assert_eq!(err.reason(), Reason::NotEnoughData);
		assert_eq!(err.outermost(), Some("Vec<T>"));
	}

	#[test]
	fn fixed_arrays_have_no_prefix() {
		let a = [7u8; 4];
		assert_eq!(a.encode(), vec![7, 7, 7, 7]);
		assert_eq!(<[u8; 4]>::decode(&mut &a.encode()[..]).unwrap(), a);
		assert!(<[u8; 4]>::decode(&mut &[7u8, 7, 7][..]).is_err());
	}

	#[test]
	fn strings_round_trip_and_reject_invalid_utf8() {
		let s = String::from("unknown error");
		let encoded = s.encode();
		assert_eq!(encoded[0], 13 << 2);
		assert_eq!(String::decode(&mut &encoded[..]).unwrap(), s);
		assert!(String::decode(&mut &hex!("04ff")[..]).is_err());
	}

	#[test]
	fn option_and_result_are_tagged_unions() {
		assert_eq!(Some(5u8).encode(), vec![1, 5]);
		assert_eq!(None::<u8>.encode(), vec![0]);
		let err = Option::<u8>::decode(&mut &[2u8, 5][..]).unwrap_err();
		assert_eq!(err.reason(), Reason::UnknownVariant(2));
		assert_eq!(err.expected(), Some("Option<T>"));

		let ok: Result<u8, u16> = Ok(3);
		let failed: Result<u8, u16> = Err(4);
		assert_eq!(ok.encode(), vec![0, 3]);
		assert_eq!(failed.encode(), vec![1, 4, 0]);
		assert_eq!(Result::<u8, u16>::decode(&mut &[1u8, 4, 0][..]).unwrap(), failed);
	}

	#[test]
	fn tuples_encode_in_field_order() {
		let t = (1u8, 2u16, true);
		assert_eq!(t.encode(), vec![1, 2, 0, 1]);
		assert_eq!(<(u8, u16, bool)>::decode(&mut &t.encode()[..]).unwrap(), t);
	}

	#[test]
	fn decode_all_rejects_trailing_bytes() {
		assert_eq!(u8::decode_all(&mut &[1u8][..]), Ok(1));
		assert_eq!(u8::decode_all(&mut &[1u8, 2][..]).unwrap_err().reason(), Reason::TrailingInput);
	}

	#[test]
	fn decode_with_remainder_returns_rest() {
		let (value, rest) = decode_with_remainder::<u16>(&[1, 0, 9, 9]).unwrap();
		assert_eq!(value, 1);
		assert_eq!(rest, &[9, 9]);
	}
}
