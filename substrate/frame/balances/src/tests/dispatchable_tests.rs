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


//! Tests regarding the functionality of the dispatchables.

use super::*;
use pretty_assertions::assert_eq;
use tessera_primitives::traits::BadOrigin;
use tessera_support::{
	assert_noop, assert_ok, assert_storage_noop,
	dispatch::{DispatchClass, Pays, RawOrigin},
};

fn signed(who: u64) -> OriginFor<Test> {
	RawOrigin::Signed(who)
}

#[test]
fn balance_transfer_works() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::transfer(ext, signed(1), 2, 69));
	assert_eq!(Balances::total_balance(ext, &1), 42);
	assert_eq!(Balances::total_balance(ext, &2), 69);
	assert_eq!(Balances::total_issuance(ext), 111);
}

#[test]
fn transfer_to_new_account_emits_transfer_then_endowed() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 100);
	let _ = events(ext);

	assert_ok!(Balances::transfer(ext, signed(1), 2, 50));
	assert_eq!(
		events(ext),
		vec![
			RuntimeEvent::Balances(Event::Transfer { from: 1, to: 2, amount: 50 }),
			RuntimeEvent::System(tessera_system::Event::NewAccount { account: 2 }),
			RuntimeEvent::Balances(Event::Endowed { account: 2, free_balance: 50 }),
		]
	);
}

#[test]
fn zero_and_self_transfers_are_noops() {
	let ext = &mut ExtBuilder::default().existential_deposit(10).monied(true).build();
	let _ = events(ext);
	assert_storage_noop!(ext, assert!(Balances::transfer(ext, signed(1), 2, 0).is_ok()));
	assert_storage_noop!(ext, assert!(Balances::transfer(ext, signed(1), 1, 50).is_ok()));
	assert_eq!(Balances::free_balance(ext, &1), 100);
	assert!(events(ext).is_empty());
}

#[test]
fn transfer_below_existential_deposit_to_new_account_fails() {
	let ext = &mut ExtBuilder::default().existential_deposit(10).monied(true).build();
	assert!(!System::account_exists(ext, &5));
	assert_noop!(ext, Balances::transfer(ext, signed(1), 5, 9), Error::<Test>::ExistentialDeposit);
	assert!(!System::account_exists(ext, &5));
	assert_eq!(Balances::free_balance(ext, &1), 100);
}

#[test]
fn transfer_more_than_free_fails() {
	let ext = &mut ExtBuilder::default().existential_deposit(10).monied(true).build();
	assert_noop!(
		ext,
		Balances::transfer(ext, signed(1), 2, 101),
		Error::<Test>::InsufficientBalance
	);
}

#[test]
fn balance_transfer_when_reserved_should_not_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 69));
	assert_noop!(
		ext,
		Balances::transfer(ext, signed(1), 2, 69),
		Error::<Test>::InsufficientBalance
	);
}

#[test]
fn transferring_too_high_value_should_not_panic() {
	let ext = &mut ExtBuilder::default().build();
	make_free_balance_be(ext, 1, Balance::MAX);
	make_free_balance_be(ext, 2, 1);

	assert_noop!(
		ext,
		Balances::transfer(ext, signed(1), 2, Balance::MAX),
		ArithmeticError::Overflow
	);

	assert_eq!(Balances::free_balance(ext, &1), Balance::MAX);
	assert_eq!(Balances::free_balance(ext, &2), 1);
}

#[test]
fn account_removal_on_free_too_low() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	assert_eq!(Balances::total_issuance(ext), 0);

	// Setup two accounts with free balance above the existential threshold.
	deposit_creating(ext, 1, 110);
	deposit_creating(ext, 2, 110);
	assert_eq!(Balances::total_issuance(ext), 220);
	let _ = events(ext);

	// Transfer funds from account 1 of such amount that after this transfer
	// the balance of account 1 will be below the existential threshold.
	// This should lead to the removal of all balance of this account.
	assert_ok!(Balances::transfer(ext, signed(1), 2, 20));

	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::free_balance(ext, &2), 130);
	assert!(!System::account_exists(ext, &1));

	// Verify that TotalIssuance tracks balance removal when free balance is too low.
	assert_eq!(Balances::total_issuance(ext), 130);
	assert_eq!(
		events(ext),
		vec![
			RuntimeEvent::Balances(Event::Transfer { from: 1, to: 2, amount: 20 }),
			RuntimeEvent::System(tessera_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::Balances(Event::DustLost { account: 1, amount: 90 }),
		]
	);
}

#[test]
fn transfer_keep_alive_works() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 100);
	assert_noop!(
		ext,
		Balances::transfer_keep_alive(ext, signed(1), 2, 100),
		Error::<Test>::KeepAlive
	);
	assert!(System::account_exists(ext, &1));
	assert_eq!(Balances::total_balance(ext, &1), 100);
	assert_eq!(Balances::total_balance(ext, &2), 0);

	// Leaving exactly the existential deposit behind is fine.
	assert_ok!(Balances::transfer_keep_alive(ext, signed(1), 2, 99));
	assert_eq!(Balances::total_balance(ext, &1), 1);
}

#[test]
fn force_transfer_works() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_noop!(ext, Balances::force_transfer(ext, signed(2), 1, 2, 69), BadOrigin);
	assert_ok!(Balances::force_transfer(ext, RawOrigin::Root, 1, 2, 69));
	assert_eq!(Balances::total_balance(ext, &1), 42);
	assert_eq!(Balances::total_balance(ext, &2), 69);
}

#[test]
fn set_balance_requires_root() {
	let ext = &mut ExtBuilder::default().build();
	assert_noop!(ext, Balances::set_balance(ext, signed(1), 1, 100, 0), BadOrigin);
}

#[test]
fn set_balance_creates_and_adjusts_issuance() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 100, 0));
	assert_eq!(
		events(ext),
		vec![
			RuntimeEvent::System(tessera_system::Event::NewAccount { account: 1 }),
			RuntimeEvent::Balances(Event::Endowed { account: 1, free_balance: 100 }),
			RuntimeEvent::Balances(Event::BalanceSet { who: 1, free: 100, reserved: 0 }),
		]
	);
	assert_eq!(Balances::total_issuance(ext), 100);

	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 150, 30));
	assert_eq!(Balances::free_balance(ext, &1), 150);
	assert_eq!(Balances::reserved_balance(ext, &1), 30);
	assert_eq!(Balances::total_issuance(ext), 180);
}

#[test]
fn set_balance_below_existential_deposit_wipes_the_account() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 100, 0));
	let _ = events(ext);

	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 50, 49));
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert!(!System::account_exists(ext, &1));
	assert_eq!(Balances::total_issuance(ext), 0);
	assert_eq!(
		events(ext),
		vec![
			RuntimeEvent::System(tessera_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::Balances(Event::BalanceSet { who: 1, free: 0, reserved: 0 }),
		]
	);
}

#[test]
fn transfer_all_works() {
	// setup
	let ext = &mut ExtBuilder::default().monied(true).build();
	// transfer all and allow death
	assert_ok!(Balances::transfer_all(ext, signed(1), 2, false));
	assert_eq!(Balances::total_balance(ext, &1), 0);
	assert_eq!(Balances::total_balance(ext, &2), 30);
	assert!(!System::account_exists(ext, &1));

	// transfer all and keep alive
	assert_ok!(Balances::transfer_all(ext, signed(2), 1, true));
	assert_eq!(Balances::total_balance(ext, &2), 1);
	assert_eq!(Balances::total_balance(ext, &1), 29);
}

#[test]
fn transfer_all_leaves_reserved_balance_behind() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	assert_ok!(Balances::reserve(ext, &1, 5));

	// The reserve already keeps the account alive, so all of the free balance may go.
	assert_ok!(Balances::transfer_all(ext, signed(1), 2, true));
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 5);
	assert_eq!(Balances::free_balance(ext, &2), 25);
}

#[test]
fn force_unreserve_works() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 111));

	assert_noop!(ext, Balances::force_unreserve(ext, signed(1), 1, 42), BadOrigin);

	assert_ok!(Balances::force_unreserve(ext, RawOrigin::Root, 1, 42));
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert_eq!(Balances::free_balance(ext, &1), 42);
	assert_eq!(
		last_event(ext),
		RuntimeEvent::Balances(Event::Unreserved { who: 1, amount: 42 })
	);

	// Asking for more than is reserved unreserves what there is.
	assert_ok!(Balances::force_unreserve(ext, RawOrigin::Root, 1, 100));
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(Balances::free_balance(ext, &1), 111);
	assert_eq!(
		last_event(ext),
		RuntimeEvent::Balances(Event::Unreserved { who: 1, amount: 69 })
	);
}

#[test]
fn calls_dispatch_through_the_runtime() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	let call = RuntimeCall::Balances(Call::transfer { dest: 3, value: 5 });
	assert_ok!(call.dispatch(ext, signed(1)));
	assert_eq!(Balances::free_balance(ext, &1), 5);
	assert_eq!(Balances::free_balance(ext, &3), 35);

	let call = RuntimeCall::Balances(Call::transfer_keep_alive { dest: 3, value: 5 });
	assert_eq!(
		call.dispatch(ext, signed(1)).map_err(|e| e.error),
		Err(Error::<Test>::KeepAlive.into())
	);
}

#[test]
fn module_errors_carry_the_module_index() {
	let ext = &mut ExtBuilder::default().build();
	let err = Balances::transfer(ext, signed(1), 2, 1).unwrap_err().error;
	assert_eq!(
		err,
		DispatchError::Module(tessera_primitives::ModuleError {
			index: BALANCES_INDEX,
			error: 2,
			message: Some("InsufficientBalance"),
		})
	);
}

#[test]
fn call_encoding_is_index_prefixed() {
	let call = RuntimeCall::Balances(Call::transfer { dest: 2, value: 69 });
	let encoded = call.encode();
	assert_eq!(encoded, vec![BALANCES_INDEX, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0x15, 0x01]);
	assert_eq!(RuntimeCall::decode(&mut &encoded[..]).unwrap(), call);

	let call = Call::<Test>::transfer_all { dest: 7, keep_alive: true };
	assert_eq!(call.encode(), vec![4, 7, 0, 0, 0, 0, 0, 0, 0, 1]);

	// Unknown function index.
	assert!(Call::<Test>::decode(&mut &[6u8][..]).is_err());
}

#[test]
fn call_names_and_indices() {
	assert_eq!(
		Call::<Test>::get_call_names(),
		&[
			"transfer",
			"set_balance",
			"force_transfer",
			"transfer_keep_alive",
			"transfer_all",
			"force_unreserve",
		]
	);
	let call = Call::<Test>::force_unreserve { who: 1, amount: 3 };
	assert_eq!(call.get_call_name(), "force_unreserve");
	assert_eq!(call.get_call_index(), 5);
}

#[test]
fn dispatch_info_uses_weight_info() {
	let info = Call::<Test>::transfer { dest: 2, value: 1 }.get_dispatch_info();
	assert_eq!(info.weight, <() as WeightInfo>::transfer());
	assert_eq!(info.class, DispatchClass::Normal);
	assert_eq!(info.pays_fee, Pays::Yes);

	let info =
		Call::<Test>::set_balance { who: 2, new_free: 1, new_reserved: 0 }.get_dispatch_info();
	assert_eq!(
		info.weight,
		<() as WeightInfo>::set_balance_creating().max(<() as WeightInfo>::set_balance_killing())
	);
}
