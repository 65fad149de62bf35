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


//! Tests regarding the functionality of the `Currency` trait set implementations.

use super::*;
use tessera_support::{
	assert_noop, assert_ok,
	dispatch::RawOrigin,
	traits::{BalanceStatus as Status, ExistenceRequirement::AllowDeath},
};

#[test]
fn basic_locking_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	assert_eq!(Balances::free_balance(ext, &1), 10);
	Balances::set_lock(ext, ID_1, &1, 9, WithdrawReasons::all());
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 5, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
}

#[test]
fn account_should_be_reaped() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	assert_eq!(Balances::free_balance(ext, &1), 10);
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 10, AllowDeath));
	assert!(!System::account_exists(ext, &1));
}

#[test]
fn partial_locking_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 5, WithdrawReasons::all());
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath));
}

#[test]
fn lock_removal_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, Balance::MAX, WithdrawReasons::all());
	Balances::remove_lock(ext, ID_1, &1);
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath));
}

#[test]
fn lock_replacement_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, Balance::MAX, WithdrawReasons::all());
	Balances::set_lock(ext, ID_1, &1, 5, WithdrawReasons::all());
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath));
}

#[test]
fn double_locking_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 5, WithdrawReasons::all());
	Balances::set_lock(ext, ID_2, &1, 5, WithdrawReasons::all());
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath));
}

#[test]
fn combination_locking_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, Balance::MAX, WithdrawReasons::empty());
	Balances::set_lock(ext, ID_2, &1, 0, WithdrawReasons::all());
	assert!(Balances::locks(ext, &1).is_empty());
	assert_ok!(<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath));
}

#[test]
fn lock_value_extension_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 5, WithdrawReasons::all());
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 6, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	Balances::extend_lock(ext, ID_1, &1, 2, WithdrawReasons::all());
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 6, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	Balances::extend_lock(ext, ID_1, &1, 8, WithdrawReasons::all());
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 3, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
}

#[test]
fn lock_reasons_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 10, WithdrawReasons::RESERVE);
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	assert_noop!(
		ext,
		<Balances as ReservableCurrency<_>>::reserve(ext, &1, 1),
		Error::<Test>::LiquidityRestrictions
	);
	assert!(Balances::withdraw(
		ext,
		&1,
		1,
		WithdrawReasons::TRANSACTION_PAYMENT,
		ExistenceRequirement::KeepAlive
	)
	.is_err());

	// A fee lock still holds back transfers, which withdraw for every reason at once.
	Balances::set_lock(ext, ID_1, &1, 10, WithdrawReasons::TRANSACTION_PAYMENT);
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 1, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	assert_ok!(<Balances as ReservableCurrency<_>>::reserve(ext, &1, 1));
}

#[test]
fn fee_payments_are_checked_against_misc_frozen() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 10, WithdrawReasons::TRANSACTION_PAYMENT);
	let account = Balances::account(ext, &1);
	assert_eq!(account.fee_frozen, 10);
	assert_eq!(account.misc_frozen, 0);
	assert_eq!(account.frozen(Reasons::All), 10);
	assert_eq!(Balances::usable_balance(ext, &1), 10);
	assert_eq!(Balances::usable_balance_for_fees(ext, &1), 10);
	let imbalance = Balances::withdraw(
		ext,
		&1,
		1,
		WithdrawReasons::TRANSACTION_PAYMENT,
		ExistenceRequirement::KeepAlive,
	)
	.unwrap();
	imbalance.settle_issuance(ext);

	Balances::set_lock(ext, ID_2, &1, 4, WithdrawReasons::TRANSFER);
	let account = Balances::account(ext, &1);
	assert_eq!(account.misc_frozen, 4);
	assert_eq!(account.frozen(Reasons::Fee), 4);
	assert_eq!(account.frozen(Reasons::All), 10);
	assert_eq!(Balances::usable_balance_for_fees(ext, &1), 5);
}

#[test]
fn lock_reasons_extension_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	Balances::set_lock(ext, ID_1, &1, 10, WithdrawReasons::TRANSFER);
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 6, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	Balances::extend_lock(ext, ID_1, &1, 10, WithdrawReasons::empty());
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 6, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	Balances::extend_lock(ext, ID_1, &1, 10, WithdrawReasons::RESERVE);
	assert_noop!(
		ext,
		<Balances as Currency<_>>::transfer(ext, &1, &2, 6, AllowDeath),
		Error::<Test>::LiquidityRestrictions
	);
	assert_eq!(Balances::locks(ext, &1)[0].reasons, Reasons::Misc);
	Balances::extend_lock(ext, ID_1, &1, 10, WithdrawReasons::TRANSACTION_PAYMENT);
	assert_eq!(Balances::locks(ext, &1)[0].reasons, Reasons::All);
}

#[test]
fn reserved_balance_should_prevent_reclaim_count() {
	let ext = &mut ExtBuilder::default().existential_deposit(256).monied(true).build();
	System::inc_account_nonce(ext, &2);
	assert!(System::account_exists(ext, &2));
	assert!(!System::account_exists(ext, &5));
	assert_eq!(Balances::total_balance(ext, &2), 256 * 20);

	// account 2 becomes mostly reserved
	assert_ok!(Balances::reserve(ext, &2, 256 * 19 + 1));
	// "free" account deleted."
	assert_eq!(Balances::free_balance(ext, &2), 255);
	// reserve still exists.
	assert_eq!(Balances::total_balance(ext, &2), 256 * 20);
	assert!(System::account_exists(ext, &2));
	assert_eq!(System::account_nonce(ext, &2), 1);

	// account 4 tries to take index 1 for account 5.
	assert_ok!(Balances::transfer(ext, RawOrigin::Signed(4), 5, 256 + 0x69));
	assert_eq!(Balances::total_balance(ext, &5), 256 + 0x69);

	// account 2 gets slashed
	let (imbalance, remaining) = Balances::slash(ext, &2, 256 * 19 + 2);
	imbalance.settle_issuance(ext);
	assert_eq!(remaining, 0);
	// "reserve" account reduced to 255 (below ED) so account deleted
	assert_eq!(Balances::total_balance(ext, &2), 0);
	// nonce zero
	assert_eq!(System::account_nonce(ext, &2), 0);
	assert!(!System::account_exists(ext, &2));

	// account 4 tries to take index 1 again for account 6.
	assert_ok!(Balances::transfer(ext, RawOrigin::Signed(4), 6, 256 + 0x69));
	assert_eq!(Balances::total_balance(ext, &6), 256 + 0x69);
	assert!(System::account_exists(ext, &6));
	assert_eq!(Balances::total_issuance(ext), sum_of_balances(ext));
}

#[test]
fn reward_should_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	assert_eq!(Balances::total_balance(ext, &1), 10);
	let imbalance = Balances::deposit_into_existing(ext, &1, 10).unwrap();
	imbalance.settle_issuance(ext);
	assert_eq!(Balances::total_balance(ext, &1), 20);
	assert_eq!(TotalIssuance::get(ext), 110);
	assert_eq!(last_event(ext), RuntimeEvent::Balances(Event::Deposit { who: 1, amount: 10 }));
}

#[test]
fn deposit_into_dead_account_fails() {
	let ext = &mut ExtBuilder::default().build();
	assert_noop!(
		ext,
		Balances::deposit_into_existing(ext, &9, 10).map(|imbalance| imbalance.peek()),
		Error::<Test>::DeadAccount
	);
}

#[test]
fn dust_account_removal_should_work() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).monied(true).build();
	System::inc_account_nonce(ext, &2);
	assert_eq!(System::account_nonce(ext, &2), 1);
	assert_eq!(Balances::total_balance(ext, &2), 2000);
	// index 1 (account 2) becomes zombie
	assert_ok!(Balances::transfer(ext, RawOrigin::Signed(2), 5, 1901));
	assert_eq!(Balances::total_balance(ext, &2), 0);
	assert_eq!(Balances::total_balance(ext, &5), 1901);
	assert_eq!(System::account_nonce(ext, &2), 0);
}

#[test]
fn balance_works() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 42);
	assert_eq!(Balances::free_balance(ext, &1), 42);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(Balances::total_balance(ext, &1), 42);
	assert_eq!(Balances::free_balance(ext, &2), 0);
	assert_eq!(Balances::reserved_balance(ext, &2), 0);
	assert_eq!(Balances::total_balance(ext, &2), 0);
}

#[test]
fn reserving_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);

	assert_eq!(Balances::total_balance(ext, &1), 111);
	assert_eq!(Balances::free_balance(ext, &1), 111);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);

	assert_ok!(Balances::reserve(ext, &1, 69));

	assert_eq!(Balances::total_balance(ext, &1), 111);
	assert_eq!(Balances::free_balance(ext, &1), 42);
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert!(!Balances::can_reserve(ext, &1, 43));
	assert!(Balances::can_reserve(ext, &1, 42));
}

#[test]
fn refunding_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 42);
	assert_ok!(Balances::mutate_account(ext, &1, |a| a.reserved = 69));
	TotalIssuance::mutate(ext, |t| *t += 69);
	assert_eq!(Balances::unreserve(ext, &1, 69), 0);
	assert_eq!(Balances::free_balance(ext, &1), 111);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
}

#[test]
fn slashing_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 69));
	let (imbalance, remaining) = Balances::slash(ext, &1, 69);
	imbalance.settle_issuance(ext);
	assert_eq!(remaining, 0);
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 42);
	assert_eq!(TotalIssuance::get(ext), 42);
}

#[test]
fn slashing_incomplete_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 42);
	assert_ok!(Balances::reserve(ext, &1, 21));
	let (imbalance, remaining) = Balances::slash(ext, &1, 69);
	assert_eq!(imbalance.peek(), 42);
	imbalance.settle_issuance(ext);
	assert_eq!(remaining, 27);
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(TotalIssuance::get(ext), 0);
}

#[test]
fn unreserving_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 111));
	assert_eq!(Balances::unreserve(ext, &1, 42), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert_eq!(Balances::free_balance(ext, &1), 42);
}

#[test]
fn slashing_reserved_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 111));
	let (imbalance, remaining) = Balances::slash_reserved(ext, &1, 42);
	imbalance.settle_issuance(ext);
	assert_eq!(remaining, 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(TotalIssuance::get(ext), 69);
}

#[test]
fn slashing_incomplete_reserved_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 42));
	let (imbalance, remaining) = Balances::slash_reserved(ext, &1, 69);
	imbalance.settle_issuance(ext);
	assert_eq!(remaining, 27);
	assert_eq!(Balances::free_balance(ext, &1), 69);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(TotalIssuance::get(ext), 69);
}

#[test]
fn repatriating_reserved_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 110);
	deposit_creating(ext, 2, 1);
	assert_ok!(Balances::reserve(ext, &1, 110));
	assert_ok!(Balances::repatriate_reserved(ext, &1, &2, 41, Status::Free), 0);
	assert_eq!(
		last_event(ext),
		RuntimeEvent::Balances(Event::ReserveRepatriated {
			from: 1,
			to: 2,
			amount: 41,
			destination_status: Status::Free,
		})
	);
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &2), 0);
	assert_eq!(Balances::free_balance(ext, &2), 42);
}

#[test]
fn transferring_reserved_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 110);
	deposit_creating(ext, 2, 1);
	assert_ok!(Balances::reserve(ext, &1, 110));
	assert_ok!(Balances::repatriate_reserved(ext, &1, &2, 41, Status::Reserved), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 69);
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &2), 41);
	assert_eq!(Balances::free_balance(ext, &2), 1);
}

#[test]
fn transferring_reserved_balance_to_yourself_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 110);
	assert_ok!(Balances::reserve(ext, &1, 50));
	assert_ok!(Balances::repatriate_reserved(ext, &1, &1, 50, Status::Free), 0);
	assert_eq!(Balances::free_balance(ext, &1), 110);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);

	assert_ok!(Balances::reserve(ext, &1, 50));
	assert_ok!(Balances::repatriate_reserved(ext, &1, &1, 60, Status::Reserved), 10);
	assert_eq!(Balances::free_balance(ext, &1), 60);
	assert_eq!(Balances::reserved_balance(ext, &1), 50);
}

#[test]
fn transferring_reserved_balance_to_nonexistent_should_fail() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 111);
	assert_ok!(Balances::reserve(ext, &1, 111));
	assert_noop!(
		ext,
		Balances::repatriate_reserved(ext, &1, &2, 42, Status::Free),
		Error::<Test>::DeadAccount
	);
}

#[test]
fn transferring_incomplete_reserved_balance_should_work() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 110);
	deposit_creating(ext, 2, 1);
	assert_ok!(Balances::reserve(ext, &1, 41));
	assert_ok!(Balances::repatriate_reserved(ext, &1, &2, 69, Status::Free), 28);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(Balances::free_balance(ext, &1), 69);
	assert_eq!(Balances::reserved_balance(ext, &2), 0);
	assert_eq!(Balances::free_balance(ext, &2), 42);
}

#[test]
fn account_create_on_free_too_low_with_other() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	deposit_creating(ext, 1, 100);
	assert_eq!(TotalIssuance::get(ext), 100);

	// No-op.
	let imbalance = Balances::deposit_creating(ext, &2, 50);
	assert_eq!(imbalance.peek(), 0);
	imbalance.settle_issuance(ext);
	assert_eq!(Balances::free_balance(ext, &2), 0);
	assert_eq!(TotalIssuance::get(ext), 100);
}

#[test]
fn account_create_on_free_too_low() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	// No-op.
	deposit_creating(ext, 2, 50);
	assert_eq!(Balances::free_balance(ext, &2), 0);
	assert_eq!(TotalIssuance::get(ext), 0);
	assert!(!System::account_exists(ext, &2));
}

#[test]
fn burn_must_work() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	let init_total_issuance = Balances::total_issuance(ext);
	let imbalance = Balances::burn(ext, 10);
	assert_eq!(Balances::total_issuance(ext), init_total_issuance - 10);
	imbalance.settle_issuance(ext);
	assert_eq!(Balances::total_issuance(ext), init_total_issuance);
}

#[test]
fn issue_saturates_at_max() {
	let ext = &mut ExtBuilder::default().monied(true).build();
	let issued = Balances::issue(ext, Balance::MAX);
	assert_eq!(issued.peek(), Balance::MAX - 100);
	assert_eq!(Balances::total_issuance(ext), Balance::MAX);
	issued.settle_issuance(ext);
	assert_eq!(Balances::total_issuance(ext), 100);
}

#[test]
fn withdraw_respects_keep_alive() {
	let ext = &mut ExtBuilder::default().existential_deposit(10).monied(true).build();
	assert_noop!(
		ext,
		Balances::withdraw(
			ext,
			&1,
			95,
			WithdrawReasons::TRANSACTION_PAYMENT,
			ExistenceRequirement::KeepAlive
		)
		.map(|imbalance| imbalance.peek()),
		Error::<Test>::KeepAlive
	);

	let imbalance = Balances::withdraw(
		ext,
		&1,
		90,
		WithdrawReasons::TRANSACTION_PAYMENT,
		ExistenceRequirement::KeepAlive,
	)
	.unwrap();
	assert_eq!(imbalance.peek(), 90);
	imbalance.settle_issuance(ext);
	assert_eq!(Balances::free_balance(ext, &1), 10);
	assert_eq!(Balances::total_issuance(ext), sum_of_balances(ext));

	let imbalance =
		Balances::withdraw(ext, &1, 10, WithdrawReasons::TRANSACTION_PAYMENT, AllowDeath).unwrap();
	imbalance.settle_issuance(ext);
	assert!(!System::account_exists(ext, &1));
	assert_eq!(Balances::total_issuance(ext), sum_of_balances(ext));
}

#[test]
fn make_free_balance_be_reports_the_signed_difference() {
	let ext = &mut ExtBuilder::default().existential_deposit(10).monied(true).build();
	match Balances::make_free_balance_be(ext, &1, 150) {
		SignedImbalance::Positive(p) => {
			assert_eq!(p.peek(), 50);
			p.settle_issuance(ext);
		},
		SignedImbalance::Negative(_) => panic!("balance went up"),
	}
	match Balances::make_free_balance_be(ext, &1, 120) {
		SignedImbalance::Negative(n) => {
			assert_eq!(n.peek(), 30);
			n.settle_issuance(ext);
		},
		SignedImbalance::Positive(_) => panic!("balance went down"),
	}
	assert_eq!(Balances::total_issuance(ext), sum_of_balances(ext));

	// A new account cannot be created below the existential deposit.
	match Balances::make_free_balance_be(ext, &9, 5) {
		SignedImbalance::Positive(p) => assert_eq!(p.peek(), 0),
		SignedImbalance::Negative(_) => panic!("nothing to take"),
	}
	assert!(!System::account_exists(ext, &9));
}

#[test]
fn dust_moves_between_free_and_reserved() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	// Set balance to free and reserved at the existential deposit
	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 100, 0));
	// Check balance
	assert_eq!(Balances::free_balance(ext, &1), 100);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);

	// Reserve some free balance
	assert_ok!(Balances::reserve(ext, &1, 50));
	// Check balance, the account should be ok.
	assert_eq!(Balances::free_balance(ext, &1), 50);
	assert_eq!(Balances::reserved_balance(ext, &1), 50);

	// Reserve the rest of the free balance
	assert_ok!(Balances::reserve(ext, &1, 50));
	// Check balance, the account should be ok.
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 100);

	// Unreserve everything
	assert_eq!(Balances::unreserve(ext, &1, 100), 0);
	// Check balance, all 100 should move to free_balance
	assert_eq!(Balances::free_balance(ext, &1), 100);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
}

#[test]
fn account_deleted_when_just_dust() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	// Set balance to free and reserved at the existential deposit
	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 50, 50));
	// Check balance
	assert_eq!(Balances::free_balance(ext, &1), 50);
	assert_eq!(Balances::reserved_balance(ext, &1), 50);

	// Reserve some free balance
	let (imbalance, _) = Balances::slash(ext, &1, 1);
	imbalance.settle_issuance(ext);
	// The account should be dead.
	assert!(!System::account_exists(ext, &1));
	assert_eq!(Balances::free_balance(ext, &1), 0);
	assert_eq!(Balances::reserved_balance(ext, &1), 0);
	assert_eq!(Balances::total_issuance(ext), 0);
}

#[test]
fn emit_events_with_reserve_and_unreserve() {
	let ext = &mut ExtBuilder::default().build();
	deposit_creating(ext, 1, 100);

	System::set_block_number(ext, 2);
	assert_ok!(Balances::reserve(ext, &1, 10));

	assert_eq!(last_event(ext), RuntimeEvent::Balances(Event::Reserved { who: 1, amount: 10 }));

	System::set_block_number(ext, 3);
	assert_eq!(Balances::unreserve(ext, &1, 5), 0);

	assert_eq!(last_event(ext), RuntimeEvent::Balances(Event::Unreserved { who: 1, amount: 5 }));

	System::set_block_number(ext, 4);
	assert_eq!(Balances::unreserve(ext, &1, 6), 1);

	// should only unreserve 5
	assert_eq!(last_event(ext), RuntimeEvent::Balances(Event::Unreserved { who: 1, amount: 5 }));
}

#[test]
fn emit_events_with_existential_deposit() {
	let ext = &mut ExtBuilder::default().existential_deposit(100).build();
	assert_ok!(Balances::set_balance(ext, RawOrigin::Root, 1, 100, 0));

	assert_eq!(
		events(ext),
		[
			RuntimeEvent::System(tessera_system::Event::NewAccount { account: 1 }),
			RuntimeEvent::Balances(Event::Endowed { account: 1, free_balance: 100 }),
			RuntimeEvent::Balances(Event::BalanceSet { who: 1, free: 100, reserved: 0 }),
		]
	);

	let (imbalance, _) = Balances::slash(ext, &1, 1);
	imbalance.settle_issuance(ext);

	assert_eq!(
		events(ext),
		[
			RuntimeEvent::System(tessera_system::Event::KilledAccount { account: 1 }),
			RuntimeEvent::Balances(Event::DustLost { account: 1, amount: 99 }),
			RuntimeEvent::Balances(Event::Slashed { who: 1, amount: 1 }),
		]
	);
}
