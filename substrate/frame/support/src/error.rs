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


//! Macro for declaring a module error.

/// Declare an error type for a module.
///
/// Every variant carries an explicit index. The index is the module specific `u32` of
/// [`DispatchError::Module`](tessera_primitives::DispatchError::Module); the module index comes
/// from the runtime's [`PalletInfo`](crate::traits::PalletInfo), through the
/// [`PalletInfoAccess`](crate::traits::PalletInfoAccess) implementation of the named pallet type.
///
/// # Usage
///
/// ```
/// # use tessera_support::{decl_error, traits::{PalletInfo, PalletInfoAccess}};
/// # use tessera_primitives::{DispatchError, ModuleError};
/// pub trait Config: 'static {
/// 	type PalletInfo: PalletInfo;
/// }
///
/// pub struct Pallet<T>(core::marker::PhantomData<T>);
///
/// impl<T: Config> PalletInfoAccess for Pallet<T> {
/// 	fn index() -> usize {
/// 		3
/// 	}
/// 	fn name() -> &'static str {
/// 		"Example"
/// 	}
/// }
///
/// decl_error! {
/// 	pub enum Error for Pallet<T: Config> {
/// 		/// You are just not cool enough for my module!
/// 		YouAreNotCoolEnough = 0,
/// 	}
/// }
///
/// # struct Runtime;
/// # impl Config for Runtime { type PalletInfo = (); }
/// let err: DispatchError = Error::<Runtime>::YouAreNotCoolEnough.into();
/// assert_eq!(err, DispatchError::Module(ModuleError { index: 3, error: 0, message: None }));
/// ```
#[macro_export]
macro_rules! decl_error {
	(
		$(#[$attr:meta])*
		pub enum $error:ident for $pallet:ident<$generic:ident: $trait:path> {
			$(
				$( #[doc = $doc_attr:tt] )*
				$name:ident = $index:literal
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		pub enum $error<$generic: $trait> {
			#[doc(hidden)]
			__Ignore(
				$crate::__private::PhantomData<$generic>,
				$crate::__private::Infallible,
			),
			$(
				$( #[doc = $doc_attr] )*
				$name,
			)*
		}

		impl<$generic: $trait> $error<$generic> {
			/// The module specific index of this error.
			pub fn index(&self) -> u8 {
				match self {
					Self::__Ignore(_, never) => match *never {},
					$( Self::$name => $index, )*
				}
			}

			/// The name of this error.
			pub fn as_str(&self) -> &'static str {
				match self {
					Self::__Ignore(_, never) => match *never {},
					$( Self::$name => stringify!($name), )*
				}
			}

			/// Names and indices of every error of the module.
			pub fn metadata() -> $crate::__private::Vec<$crate::registry::ItemMetadata> {
				$crate::__private::vec![
					$( $crate::registry::ItemMetadata::new(stringify!($name), $index), )*
				]
			}
		}

		impl<$generic: $trait> core::fmt::Debug for $error<$generic> {
			fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl<$generic: $trait> PartialEq for $error<$generic> {
			fn eq(&self, other: &Self) -> bool {
				self.index() == other.index()
			}
		}

		impl<$generic: $trait> Eq for $error<$generic> {}

		impl<$generic: $trait> From<$error<$generic>> for &'static str {
			fn from(err: $error<$generic>) -> &'static str {
				err.as_str()
			}
		}

		impl<$generic: $trait> From<$error<$generic>> for $crate::__private::DispatchError {
			fn from(err: $error<$generic>) -> Self {
				let index = <$pallet<$generic> as $crate::traits::PalletInfoAccess>::index();
				$crate::__private::DispatchError::Module($crate::__private::ModuleError {
					index: index as u8,
					error: err.index() as u32,
					message: Some(err.as_str()),
				})
			}
		}
	};
}
