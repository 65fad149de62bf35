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


//! Genesis Configuration presets.

use crate::{
	constants::currency::DOLLARS, AccountId, Balance, BalancesConfig, RuntimeGenesisConfig,
};
use alloc::{vec, vec::Vec};
use hex_literal::hex;

/// The development preset: Alice and Bob are endowed.
pub const DEV_RUNTIME_PRESET: &str = "development";
/// The local testnet preset: every well known account is endowed.
pub const LOCAL_TESTNET_RUNTIME_PRESET: &str = "local_testnet";

/// The balance every endowed account starts with.
pub const ENDOWMENT: Balance = 10_000_000 * DOLLARS;

/// The sr25519 public keys of the well known development accounts.
pub mod well_known {
	use super::*;

	pub const ALICE: AccountId =
		AccountId::new(hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d"));
	pub const BOB: AccountId =
		AccountId::new(hex!("8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48"));
	pub const CHARLIE: AccountId =
		AccountId::new(hex!("90b5ab205c6974c9ea841be688864633dc9ca8a357843eeacf2314649965fe22"));
	pub const DAVE: AccountId =
		AccountId::new(hex!("306721211d5404bd9da88e0204360a1a9ab8b87c66c1bc2fcdd37f3c2222cc20"));
	pub const EVE: AccountId =
		AccountId::new(hex!("e659a7a1628cdd93febc04a4e0646ea20e9f5f0ce097d9a05290d4a9e054df4e"));
	pub const FERDIE: AccountId =
		AccountId::new(hex!("1cbd2d43530a44705ad088af313e18f80b53ef16b36177cd4b77b846f2a5f07c"));

	/// All of them.
	pub fn all() -> Vec<AccountId> {
		vec![ALICE, BOB, CHARLIE, DAVE, EVE, FERDIE]
	}
}

const LOG_TARGET: &str = "runtime::genesis";

/// A genesis config endowing each of `endowed_accounts` with [`ENDOWMENT`].
pub fn testnet_genesis(endowed_accounts: Vec<AccountId>) -> RuntimeGenesisConfig {
	RuntimeGenesisConfig {
		balances: BalancesConfig {
			balances: endowed_accounts.into_iter().map(|k| (k, ENDOWMENT)).collect(),
		},
		..Default::default()
	}
}

/// Provides the JSON representation of predefined genesis config for given `id`.
///
/// Balances do not fit a `u64`, so the config is written straight to bytes rather than through
/// a `serde_json::Value`.
pub fn get_preset(id: &str) -> Option<Vec<u8>> {
	let config = match id {
		DEV_RUNTIME_PRESET => testnet_genesis(vec![well_known::ALICE, well_known::BOB]),
		LOCAL_TESTNET_RUNTIME_PRESET => testnet_genesis(well_known::all()),
		_ => return None,
	};
	serde_json::to_vec(&config)
		.map_err(|e| log::error!(target: LOG_TARGET, "preset {} does not serialize: {}", id, e))
		.ok()
}

/// List of supported presets.
pub fn preset_names() -> Vec<&'static str> {
	vec![DEV_RUNTIME_PRESET, LOCAL_TESTNET_RUNTIME_PRESET]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{api, Balances, System};
	use tessera_primitives::Externalities;
	use tessera_support::traits::Currency;

	#[test]
	fn presets_build_a_state() {
		for id in preset_names() {
			let json = get_preset(id).unwrap();
			let mut ext = Externalities::default();
			api::build_state(&mut ext, &json).unwrap();
			assert_eq!(Balances::free_balance(&ext, &well_known::ALICE), ENDOWMENT);
			assert_eq!(System::providers(&ext, &well_known::BOB), 1);
		}
	}

	#[test]
	fn local_testnet_endows_everyone() {
		let json = get_preset(LOCAL_TESTNET_RUNTIME_PRESET).unwrap();
		let mut ext = Externalities::default();
		api::build_state(&mut ext, &json).unwrap();
		assert_eq!(
			Balances::total_issuance(&ext),
			ENDOWMENT * well_known::all().len() as Balance
		);
	}

	#[test]
	fn endowments_above_u64_survive_json() {
		assert!(ENDOWMENT > u64::MAX as Balance);
		let json = get_preset(DEV_RUNTIME_PRESET).unwrap();
		let config: RuntimeGenesisConfig = serde_json::from_slice(&json).unwrap();
		assert_eq!(config, testnet_genesis(vec![well_known::ALICE, well_known::BOB]));
	}

	#[test]
	fn unknown_presets_are_none() {
		assert!(get_preset("mainnet").is_none());
	}

	#[test]
	fn unknown_fields_are_rejected() {
		let mut ext = Externalities::default();
		let err = api::build_state(&mut ext, br#"{"sudo": {}}"#).unwrap_err();
		assert!(err.starts_with("Invalid JSON blob"), "{}", err);
	}
}
