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

//! # Tessera Codec
//!
//! Simple Concatenated Aggregate Little-Endian encoding, the wire and storage format of the
//! runtime.
//!
//! - Fixed width integers are little endian.
//! - [`Compact`] integers use a variable length encoding with a two bit mode selector.
//! - Variable length sequences (`Vec<T>`, `String`) are prefixed with their compact length;
//!   fixed length sequences (`[T; N]`) are not.
//! - Tagged unions (enums, `Option`, `Result`) are a leading discriminant byte followed by the
//!   variant payload. Discriminants are part of the wire contract and are always listed
//!   explicitly.
//!
//! Values compose over a shared cursor: decoding reads from `&mut &[u8]` and leaves the
//! unconsumed bytes behind.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod codec;
mod compact;
mod error;

pub use self::{
	codec::{
		decode_with_remainder, Codec, Decode, DecodeAll, Encode, FullCodec, Input, Output,
	},
	compact::{Compact, CompactLen},
	error::{Error, Reason},
};

/// Implement [`Encode`] and [`Decode`] for a struct by concatenating its fields in the order
/// they are listed.
///
/// ```
/// # use tessera_codec::{Decode, Encode, impl_codec_struct};
/// #[derive(Debug, PartialEq)]
/// struct Pair<T> {
/// 	a: u8,
/// 	b: T,
/// }
/// impl_codec_struct!(Pair<T> { a, b });
///
/// let pair = Pair { a: 1, b: 2u16 };
/// assert_eq!(pair.encode(), vec![1, 2, 0]);
/// assert_eq!(Pair::<u16>::decode(&mut &[1u8, 2, 0][..]).unwrap(), pair);
/// ```
#[macro_export]
macro_rules! impl_codec_struct {
	( $name:ident $( < $( $gen:ident ),* > )? { $( $field:ident ),* $(,)? } ) => {
		impl $( < $( $gen: $crate::Encode ),* > )? $crate::Encode for $name $( < $( $gen ),* > )? {
			fn size_hint(&self) -> usize {
				0 $( + $crate::Encode::size_hint(&self.$field) )*
			}

			fn encode_to<__O: $crate::Output + ?Sized>(&self, dest: &mut __O) {
				$( $crate::Encode::encode_to(&self.$field, dest); )*
			}
		}

		impl $( < $( $gen: $crate::Decode ),* > )? $crate::Decode for $name $( < $( $gen ),* > )? {
			fn decode<__I: $crate::Input>(input: &mut __I) -> Result<Self, $crate::Error> {
				Ok(Self {
					$(
						$field: $crate::Decode::decode(input).map_err(|e| {
							e.expecting(concat!(stringify!($name), "::", stringify!($field)))
						})?,
					)*
				})
			}
		}
	};
}

/// Implement [`Encode`] and [`Decode`] for a field-less enum with explicitly numbered
/// discriminants.
///
/// ```
/// # use tessera_codec::{Decode, Encode, impl_codec_enum};
/// #[derive(Debug, PartialEq, Clone, Copy)]
/// enum Mode {
/// 	Off,
/// 	On,
/// }
/// impl_codec_enum!(Mode { Off = 0, On = 1 });
///
/// assert_eq!(Mode::On.encode(), vec![1]);
/// assert!(Mode::decode(&mut &[2u8][..]).is_err());
/// ```
#[macro_export]
macro_rules! impl_codec_enum {
	( $name:ident { $( $variant:ident = $index:literal ),* $(,)? } ) => {
		impl $crate::Encode for $name {
			fn size_hint(&self) -> usize {
				1
			}

			fn encode_to<__O: $crate::Output + ?Sized>(&self, dest: &mut __O) {
				let index: u8 = match self {
					$( $name::$variant => $index, )*
				};
				dest.push_byte(index);
			}
		}

		impl $crate::Decode for $name {
			fn decode<__I: $crate::Input>(input: &mut __I) -> Result<Self, $crate::Error> {
				match input.read_byte().map_err(|e| e.expecting(stringify!($name)))? {
					$( $index => Ok($name::$variant), )*
					index => Err($crate::Error::unknown_variant(stringify!($name), index)),
				}
			}
		}
	};
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::{string::String, vec::Vec};

	#[derive(Debug, PartialEq, Clone)]
	struct Record<T> {
		id: Compact<u32>,
		tags: Vec<String>,
		payload: Option<T>,
	}
	impl_codec_struct!(Record<T> { id, tags, payload });

	#[derive(Debug, PartialEq, Clone, Copy)]
	enum Light {
		Red,
		Green,
	}
	impl_codec_enum!(Light { Red = 3, Green = 9 });

	#[test]
	fn structs_compose_over_shared_cursor() {
		let record =
			Record { id: Compact(64), tags: vec!["a".into()], payload: Some(Light::Green) };
		let mut bytes = record.encode();
		bytes.extend_from_slice(&[0xaa, 0xbb]);

		let mut cursor = &bytes[..];
		let decoded = Record::<Light>::decode(&mut cursor).unwrap();
		assert_eq!(decoded, record);
		assert_eq!(cursor, &[0xaa, 0xbb]);
	}

	#[test]
	fn struct_errors_name_the_field() {
		let record = Record { id: Compact(1), tags: vec![], payload: Some(Light::Red) };
		let mut bytes = record.encode();
		*bytes.last_mut().unwrap() = 4;
		let err = Record::<Light>::decode(&mut &bytes[..]).unwrap_err();
		assert_eq!(err.reason(), Reason::UnknownVariant(4));
		assert_eq!(err.expected(), Some("Light"));
		assert_eq!(err.outermost(), Some("Record::payload"));
	}

	#[test]
	fn explicit_discriminants_are_used() {
		assert_eq!(Light::Red.encode(), vec![3]);
		assert_eq!(Light::decode(&mut &[9u8][..]).unwrap(), Light::Green);
		assert!(Light::decode(&mut &[0u8][..]).is_err());
	}
}
