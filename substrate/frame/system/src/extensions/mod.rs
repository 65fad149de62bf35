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


pub mod check_genesis;
pub mod check_mortality;
pub mod check_non_zero_sender;
pub mod check_nonce;
pub mod check_spec_version;
pub mod check_tx_version;
pub mod check_weight;

/// Implement the codec for an extension that carries no data of its own.
macro_rules! impl_empty_extension_codec {
	( $name:ident ) => {
		impl<T: $crate::Config> codec::Encode for $name<T> {
			fn encode_to<O: codec::Output + ?Sized>(&self, _dest: &mut O) {}
		}

		impl<T: $crate::Config> codec::Decode for $name<T> {
			fn decode<I: codec::Input>(_input: &mut I) -> Result<Self, codec::Error> {
				Ok(Self::new())
			}
		}
	};
}

pub(crate) use impl_empty_extension_codec;
