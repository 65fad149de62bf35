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


use crate::{mock::*, *};
use pretty_assertions::assert_eq;
use tessera_primitives::DispatchErrorWithPostInfo;
use tessera_support::{
	assert_noop, assert_ok,
	dispatch::{Pays, PostDispatchInfo},
	traits::StoredMap,
};

fn record(phase: Phase, event: SysEvent) -> EventRecord<SysEvent> {
	EventRecord { phase, event, topics: vec![] }
}

#[test]
fn stored_map_works() {
	let ext = &mut new_test_ext();
	assert_ok!(System::insert(ext, &0, 42));
	assert!(!System::is_provider_required(ext, &0));

	assert_eq!(
		Account::<Test>::get(ext, &0),
		AccountInfo { nonce: 0, providers: 1, consumers: 0, sufficients: 0, data: 42 }
	);

	assert_ok!(System::inc_consumers(ext, &0));
	assert!(System::is_provider_required(ext, &0));

	assert_ok!(System::insert(ext, &0, 69));
	assert!(System::is_provider_required(ext, &0));
	assert_eq!(System::providers(ext, &0), 1);

	System::dec_consumers(ext, &0);
	assert!(!System::is_provider_required(ext, &0));

	assert!(Killed::get().is_empty());
	assert_ok!(System::remove(ext, &0));
	assert!(!System::account_exists(ext, &0));
	assert_eq!(Killed::get(), vec![0u64]);
	Killed::set(vec![]);
}

#[test]
fn stored_map_removal_blocked_by_consumers() {
	let ext = &mut new_test_ext();
	assert_ok!(System::insert(ext, &7, 5));
	assert_ok!(System::inc_consumers(ext, &7));
	assert_noop!(ext, System::remove(ext, &7), DispatchError::ConsumerRemaining);
	assert_eq!(<System as StoredMap<u64, u32>>::get(ext, &7), 5);
}

#[test]
fn provider_ref_handover_to_self_sufficient_ref_works() {
	let ext = &mut new_test_ext();
	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Created);
	System::inc_account_nonce(ext, &0);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// a second reference coming and going doesn't change anything.
	assert_eq!(System::inc_sufficients(ext, &0), IncRefStatus::Existed);
	assert_eq!(System::dec_sufficients(ext, &0), DecRefStatus::Exists);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// a provider reference coming and going doesn't change anything.
	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Existed);
	assert_eq!(System::dec_providers(ext, &0).unwrap(), DecRefStatus::Exists);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// a self-sufficient reference coming and provider going keeps the account.
	assert_eq!(System::inc_sufficients(ext, &0), IncRefStatus::Existed);
	assert_eq!(System::dec_providers(ext, &0).unwrap(), DecRefStatus::Exists);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// the self-sufficient reference going takes the account.
	assert_eq!(System::dec_sufficients(ext, &0), DecRefStatus::Reaped);
	assert_eq!(System::account_nonce(ext, &0), 0);
	Killed::set(vec![]);
}

#[test]
fn self_sufficient_ref_handover_to_provider_ref_works() {
	let ext = &mut new_test_ext();
	assert_eq!(System::inc_sufficients(ext, &0), IncRefStatus::Created);
	System::inc_account_nonce(ext, &0);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// a provider reference coming and self-sufficient going keeps the account.
	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Existed);
	assert_eq!(System::dec_sufficients(ext, &0), DecRefStatus::Exists);
	assert_eq!(System::account_nonce(ext, &0), 1);

	// the provider reference going takes the account.
	assert_eq!(System::dec_providers(ext, &0).unwrap(), DecRefStatus::Reaped);
	assert_eq!(System::account_nonce(ext, &0), 0);
	Killed::set(vec![]);
}

#[test]
fn sufficient_cannot_support_consumer() {
	let ext = &mut new_test_ext();
	assert_eq!(System::inc_sufficients(ext, &0), IncRefStatus::Created);
	System::inc_account_nonce(ext, &0);
	assert_eq!(System::account_nonce(ext, &0), 1);
	assert_noop!(ext, System::inc_consumers(ext, &0), DispatchError::NoProviders);

	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Existed);
	assert_ok!(System::inc_consumers(ext, &0));
	assert_noop!(ext, System::dec_providers(ext, &0), DispatchError::ConsumerRemaining);
}

#[test]
fn provider_required_to_support_consumer() {
	let ext = &mut new_test_ext();
	assert_noop!(ext, System::inc_consumers(ext, &0), DispatchError::NoProviders);

	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Created);
	System::inc_account_nonce(ext, &0);
	assert_eq!(System::account_nonce(ext, &0), 1);

	assert_eq!(System::inc_providers(ext, &0), IncRefStatus::Existed);
	assert_eq!(System::dec_providers(ext, &0).unwrap(), DecRefStatus::Exists);
	assert_eq!(System::account_nonce(ext, &0), 1);

	assert_ok!(System::inc_consumers(ext, &0));
	assert_noop!(ext, System::dec_providers(ext, &0), DispatchError::ConsumerRemaining);

	System::dec_consumers(ext, &0);
	assert_eq!(System::dec_providers(ext, &0).unwrap(), DecRefStatus::Reaped);
	assert_eq!(System::account_nonce(ext, &0), 0);
	Killed::set(vec![]);
}

#[test]
fn consumers_are_capped() {
	let ext = &mut new_test_ext();
	System::inc_providers(ext, &1);
	for _ in 0..MaxConsumers::get() {
		assert_ok!(System::inc_consumers(ext, &1));
	}
	assert!(!System::can_inc_consumer(ext, &1));
	assert_noop!(ext, System::inc_consumers(ext, &1), DispatchError::TooManyConsumers);

	System::dec_consumers(ext, &1);
	assert!(System::can_inc_consumer(ext, &1));
	assert!(!System::can_accrue_consumers(ext, &1, 2));
}

#[test]
fn can_dec_provider_respects_consumers() {
	let ext = &mut new_test_ext();
	System::inc_providers(ext, &1);
	assert!(System::can_dec_provider(ext, &1));
	assert_ok!(System::inc_consumers(ext, &1));
	assert!(!System::can_dec_provider(ext, &1));
	System::inc_providers(ext, &1);
	assert!(System::can_dec_provider(ext, &1));
}

#[test]
fn dec_on_dead_account_is_logged_not_fatal() {
	let ext = &mut new_test_ext();
	assert_eq!(System::dec_providers(ext, &9).unwrap(), DecRefStatus::Reaped);
	assert_eq!(System::dec_sufficients(ext, &9), DecRefStatus::Reaped);
	System::dec_consumers(ext, &9);
	assert!(!System::account_exists(ext, &9));
	assert!(Killed::get().is_empty());
}

#[test]
fn account_creation_and_reaping_emit_events() {
	let ext = &mut new_test_ext();
	System::initialize(ext, 1, &[0u8; 32].into());
	System::note_finished_initialize(ext);

	System::inc_providers(ext, &3);
	assert_ok!(System::dec_providers(ext, &3));

	assert_eq!(
		System::events(ext),
		vec![
			record(Phase::ApplyExtrinsic(0), SysEvent::NewAccount { account: 3 }),
			record(Phase::ApplyExtrinsic(0), SysEvent::KilledAccount { account: 3 }),
		]
	);
	assert_eq!(Killed::get(), vec![3u64]);
	Killed::set(vec![]);
}

#[test]
fn deposit_event_should_work() {
	let ext = &mut new_test_ext();
	System::reset_events(ext);
	System::initialize(ext, 1, &[0u8; 32].into());
	System::note_finished_extrinsics(ext);
	System::deposit_event(ext, SysEvent::CodeUpdated);
	System::finalize(ext);
	assert_eq!(System::events(ext), vec![record(Phase::Finalization, SysEvent::CodeUpdated)]);
	assert_eq!(EventCount::get(ext), 1);

	let pre_block_events = System::events(ext);
	System::reset_events(ext);
	System::initialize(ext, 2, &[0u8; 32].into());
	System::deposit_event(ext, SysEvent::NewAccount { account: 32 });
	System::note_finished_initialize(ext);
	System::deposit_event(ext, SysEvent::KilledAccount { account: 42 });
	System::note_applied_extrinsic(ext, &Ok(().into()), Default::default());
	System::note_applied_extrinsic(
		ext,
		&Err(DispatchError::BadOrigin.into()),
		Default::default(),
	);
	System::note_finished_extrinsics(ext);
	System::deposit_event(ext, SysEvent::NewAccount { account: 3 });
	System::finalize(ext);
	assert_ne!(System::events(ext), pre_block_events);
	assert_eq!(
		System::events(ext),
		vec![
			record(Phase::Initialization, SysEvent::NewAccount { account: 32 }),
			record(Phase::ApplyExtrinsic(0), SysEvent::KilledAccount { account: 42 }),
			record(
				Phase::ApplyExtrinsic(0),
				SysEvent::ExtrinsicSuccess {
					dispatch_info: DispatchInfo {
						weight: Weight::from_parts(5, 0),
						..Default::default()
					},
				}
			),
			record(
				Phase::ApplyExtrinsic(1),
				SysEvent::ExtrinsicFailed {
					dispatch_error: DispatchError::BadOrigin,
					dispatch_info: DispatchInfo {
						weight: Weight::from_parts(5, 0),
						..Default::default()
					},
				}
			),
			record(Phase::Finalization, SysEvent::NewAccount { account: 3 }),
		]
	);
	assert_eq!(EventCount::get(ext), 5);
}

#[test]
fn events_are_not_deposited_at_genesis() {
	let ext = &mut new_test_ext();
	assert_eq!(System::block_number(ext), 0);
	System::deposit_event(ext, SysEvent::CodeUpdated);
	assert!(System::events(ext).is_empty());
	assert_eq!(EventCount::get(ext), 0);
}

#[test]
fn deposit_event_uses_actual_weight_and_pays_fee() {
	let ext = &mut new_test_ext();
	System::reset_events(ext);
	System::initialize(ext, 1, &[0u8; 32].into());
	System::note_finished_initialize(ext);

	let pre_info = DispatchInfo { weight: Weight::from_parts(1000, 0), ..Default::default() };
	System::note_applied_extrinsic(ext, &Ok(Some(Weight::from_parts(300, 0)).into()), pre_info);
	System::note_applied_extrinsic(ext, &Ok(Some(Weight::from_parts(1000, 0)).into()), pre_info);
	System::note_applied_extrinsic(
		ext,
		// values over the pre info should be capped at pre dispatch value
		&Ok(Some(Weight::from_parts(1200, 0)).into()),
		pre_info,
	);
	System::note_applied_extrinsic(
		ext,
		&Ok(PostDispatchInfo { actual_weight: None, pays_fee: Pays::No }),
		pre_info,
	);
	System::note_applied_extrinsic(
		ext,
		&Err(DispatchErrorWithPostInfo {
			post_info: PostDispatchInfo {
				actual_weight: Some(Weight::from_parts(999, 0)),
				pays_fee: Pays::Yes,
			},
			error: DispatchError::BadOrigin,
		}),
		pre_info,
	);

	let base = Weight::from_parts(5, 0);
	let events: Vec<_> = System::events(ext).into_iter().map(|r| r.event).collect();
	assert_eq!(
		events,
		vec![
			SysEvent::ExtrinsicSuccess {
				dispatch_info: DispatchInfo {
					weight: Weight::from_parts(300, 0) + base,
					..Default::default()
				},
			},
			SysEvent::ExtrinsicSuccess {
				dispatch_info: DispatchInfo {
					weight: Weight::from_parts(1000, 0) + base,
					..Default::default()
				},
			},
			SysEvent::ExtrinsicSuccess {
				dispatch_info: DispatchInfo {
					weight: Weight::from_parts(1000, 0) + base,
					..Default::default()
				},
			},
			SysEvent::ExtrinsicSuccess {
				dispatch_info: DispatchInfo {
					weight: Weight::from_parts(1000, 0) + base,
					pays_fee: Pays::No,
					..Default::default()
				},
			},
			SysEvent::ExtrinsicFailed {
				dispatch_error: DispatchError::BadOrigin,
				dispatch_info: DispatchInfo {
					weight: Weight::from_parts(999, 0) + base,
					..Default::default()
				},
			},
		]
	);
	assert_eq!(System::extrinsic_index(ext), Some(5));
}

#[test]
fn block_hash_pruning_keeps_window_and_genesis() {
	let ext = &mut new_test_ext();
	let count = BlockHashCount::get();
	let mut parent_hash = System::parent_hash(ext);
	for n in 1..=count + 5 {
		System::reset_events(ext);
		System::initialize(ext, n, &parent_hash);
		System::note_finished_initialize(ext);
		System::note_finished_extrinsics(ext);
		parent_hash = System::finalize(ext).hash();
	}
	let last = count + 5;
	// the genesis hash is never pruned
	assert!(BlockHash::contains_key(ext, &0));
	assert!(!BlockHash::contains_key(ext, &(last - count - 1)));
	assert!(BlockHash::contains_key(ext, &(last - count)));
	assert!(BlockHash::contains_key(ext, &(last - 1)));
}

#[test]
fn initialize_sets_up_the_block_environment() {
	let ext = &mut new_test_ext();
	let parent = H256::repeat_byte(7);
	System::register_extra_weight_unchecked(
		ext,
		Weight::from_parts(100, 0),
		DispatchClass::Normal,
	);
	System::initialize(ext, 5, &parent);
	assert_eq!(System::block_number(ext), 5);
	assert_eq!(System::parent_hash(ext), parent);
	assert_eq!(System::block_hash(ext, 4), parent);
	assert_eq!(System::extrinsic_index(ext), Some(0));
	assert_eq!(System::execution_phase(ext), Some(Phase::Initialization));
	assert_eq!(System::block_weight(ext).total(), Weight::zero());
}

#[test]
fn finalize_builds_header_from_noted_extrinsics() {
	let ext = &mut new_test_ext();
	let parent = H256::repeat_byte(3);
	System::initialize(ext, 1, &parent);
	System::note_finished_initialize(ext);

	let xts = vec![vec![1u8, 2, 3], vec![4u8]];
	for xt in &xts {
		System::note_extrinsic(ext, xt.clone());
		System::note_applied_extrinsic(ext, &Ok(().into()), Default::default());
	}
	System::note_finished_extrinsics(ext);
	assert_eq!(System::extrinsic_count(ext), 2);
	assert_eq!(System::execution_phase(ext), Some(Phase::Finalization));

	let header = System::finalize(ext);
	assert_eq!(header.number, 1);
	assert_eq!(header.parent_hash, parent);
	assert_eq!(header.extrinsics_root, ordered_root(&xts));
	assert_eq!(System::execution_phase(ext), None);
	assert!(!ExtrinsicData::contains_key(ext, &0));
	assert_eq!(header.state_root, ext.storage_root());
}

#[test]
fn remark_accepts_signed_and_root_only() {
	assert_ok!(System::remark(RawOrigin::Signed(1), b"hello".to_vec()));
	assert_ok!(System::remark(RawOrigin::Root, b"hello".to_vec()));
	assert_eq!(
		System::remark(RawOrigin::None, b"hello".to_vec()).map_err(|e| e.error),
		Err(DispatchError::BadOrigin)
	);
}

#[test]
fn remark_with_event_works() {
	let ext = &mut new_test_ext();
	System::set_block_number(ext, 1);
	let remark = b"remark".to_vec();
	assert_ok!(System::remark_with_event(ext, RawOrigin::Signed(1), remark.clone()));
	System::assert_last_event(
		ext,
		SysEvent::Remarked { sender: 1, hash: blake2_256_hash(&remark) },
	);
	assert_noop!(ext, System::remark_with_event(ext, RawOrigin::Root, remark), BadOrigin);
}

#[test]
fn base_call_filter_blocks_non_root_dispatch() {
	let ext = &mut new_test_ext();
	let call: RuntimeCall = Call::remark { remark: b"forbidden".to_vec() }.into();
	assert_eq!(
		call.clone().dispatch(ext, RawOrigin::Signed(1)).map_err(|e| e.error),
		Err(Error::<Test>::CallFiltered.into())
	);
	assert_ok!(call.dispatch(ext, RawOrigin::Root));
}

#[test]
fn root_storage_calls_work() {
	let ext = &mut new_test_ext();
	let items = vec![
		(b":a:1".to_vec(), vec![1u8]),
		(b":a:2".to_vec(), vec![2u8]),
		(b":b:1".to_vec(), vec![3u8]),
	];
	assert_noop!(ext, System::set_storage(ext, RawOrigin::Signed(1), items.clone()), BadOrigin);
	assert_ok!(System::set_storage(ext, RawOrigin::Root, items));
	assert_eq!(unhashed::get_raw(ext, b":a:1"), Some(vec![1u8]));

	assert_ok!(System::kill_storage(ext, RawOrigin::Root, vec![b":b:1".to_vec()]));
	assert!(!unhashed::exists(ext, b":b:1"));

	assert_ok!(System::kill_prefix(ext, RawOrigin::Root, b":a:".to_vec(), 1));
	let left = [b":a:1", b":a:2"].iter().filter(|k| unhashed::exists(ext, &k[..])).count();
	assert_eq!(left, 1);

	assert_ok!(System::set_heap_pages(ext, RawOrigin::Root, 64));
	assert_eq!(unhashed::get::<u64>(ext, well_known_keys::HEAP_PAGES), Some(64));
}

#[test]
fn call_dispatch_info_is_classified() {
	let info = Call::<Test>::kill_prefix { prefix: vec![], subkeys: 3 }.get_dispatch_info();
	assert_eq!(info.class, DispatchClass::Operational);
	assert_eq!(info.weight, <() as WeightInfo>::kill_prefix(4));

	let info = Call::<Test>::remark { remark: vec![0; 10] }.get_dispatch_info();
	assert_eq!(info.class, DispatchClass::Normal);
	assert_eq!(info.pays_fee, Pays::Yes);
}

#[test]
fn calls_use_explicit_indices() {
	let call = Call::<Test>::remark_with_event { remark: vec![1] };
	assert_eq!(call.encode(), vec![7, 4, 1]);
	assert_eq!(Call::<Test>::decode(&mut &[7u8, 4, 1][..]).unwrap(), call);
	assert!(Call::<Test>::decode(&mut &[2u8][..]).is_err());
	assert_eq!(call.get_call_name(), "remark_with_event");
	assert_eq!(RuntimeCall::from(call).encode(), vec![0, 7, 4, 1]);
}

#[test]
fn phase_and_event_wire_format() {
	assert_eq!(Phase::ApplyExtrinsic(1).encode(), vec![0, 1, 0, 0, 0]);
	assert_eq!(Phase::Finalization.encode(), vec![1]);
	assert_eq!(Phase::decode(&mut &[2u8][..]).unwrap(), Phase::Initialization);

	let event = SysEvent::KilledAccount { account: 5 };
	let mut expected = vec![4u8];
	expected.extend(5u64.encode());
	assert_eq!(event.encode(), expected);
	assert_eq!(SysEvent::decode(&mut &expected[..]).unwrap(), event);
}

#[test]
fn genesis_anchors_hash_69() {
	let ext = &mut new_test_ext();
	assert_eq!(System::block_hash(ext, 0), hash69());
	assert_eq!(System::parent_hash(ext), hash69());
	assert_eq!(System::extrinsic_index(ext), Some(0));
}

#[test]
fn genesis_config_json() {
	let config: GenesisConfig<Test> = serde_json::from_str("{}").unwrap();
	assert_eq!(config, GenesisConfig::default());
	assert!(serde_json::from_str::<GenesisConfig<Test>>(r#"{"unknown": 1}"#).is_err());
}

#[test]
fn metadata_lists_everything() {
	let metadata = System::metadata();
	assert_eq!(metadata.name, "System");
	assert_eq!(metadata.index, 0);
	assert_eq!(metadata.calls.len(), 6);
	assert_eq!(metadata.events[5], ItemMetadata::new("Remarked", 5));
	assert_eq!(metadata.errors[5], ItemMetadata::new("CallFiltered", 5));
	assert!(metadata.storage.contains(&"Account"));
	let hash_count = metadata.constants.iter().find(|c| c.name == "BlockHashCount").unwrap();
	assert_eq!(hash_count.value, 10u64.encode());
}

#[test]
fn module_errors_carry_module_index() {
	let err: DispatchError = Error::<Test>::CallFiltered.into();
	match err {
		DispatchError::Module(module) => {
			assert_eq!(module.index, 0);
			assert_eq!(module.error, 5);
		},
		other => panic!("unexpected error {:?}", other),
	}
}

#[test]
fn integrity_test_accepts_mock_weights() {
	<System as IntegrityTest>::integrity_test();
}

#[test]
fn ensure_origin_helpers() {
	assert_eq!(ensure_signed(RawOrigin::Signed(1u64)), Ok(1));
	assert_eq!(ensure_signed(RawOrigin::<u64>::Root), Err(BadOrigin));
	assert_eq!(ensure_root(RawOrigin::<u64>::Root), Ok(()));
	assert_eq!(ensure_none(RawOrigin::<u64>::None), Ok(()));
	assert_eq!(ensure_signed_or_root(RawOrigin::<u64>::Root), Ok(None));
	assert_eq!(ensure_signed_or_root(RawOrigin::<u64>::None), Err(BadOrigin));
}
