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


//! Traits and associated utilities shared by the runtime modules.

pub mod tokens;
pub use tokens::{
	currency::{Currency, LockIdentifier, LockableCurrency, ReservableCurrency},
	imbalance::{Imbalance, OnUnbalanced, SettleIssuance, SignedImbalance},
	BalanceStatus, ExistenceRequirement, WithdrawReasons,
};

mod hooks;
pub use hooks::{BuildGenesisConfig, IntegrityTest, OnFinalize, OnInitialize};

mod metadata;
pub use metadata::{CallMetadata, GetCallMetadata, PalletInfo, PalletInfoAccess};

mod misc;
pub use misc::{
	defensive_prelude,
	Contains, DefensiveSaturating, Everything, Nothing, OnKilledAccount, OnNewAccount,
	SameOrOther, TryDrop, DEFENSIVE_OP_INTERNAL_ERROR, DEFENSIVE_OP_PUBLIC_ERROR,
};

mod storage;
pub use storage::StorageInstance;

mod stored_map;
pub use stored_map::{HandleLifetime, StorageMapShim, StoredMap};

pub use tessera_primitives::traits::{
	ConstBool, ConstU128, ConstU16, ConstU32, ConstU64, ConstU8, Get, GetDefault,
	TypedGet,
};
