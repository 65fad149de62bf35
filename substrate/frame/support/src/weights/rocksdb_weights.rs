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


//! Reference costs of a storage read and a storage write against a RocksDB backed state.

use crate::parameter_types;
use tessera_weights::{constants::WEIGHT_REF_TIME_PER_MICROS, RuntimeDbWeight};

parameter_types! {
	/// By default, Substrate uses RocksDB, so this will be the weight used throughout
	/// the runtime.
	pub const RocksDbWeight: RuntimeDbWeight = RuntimeDbWeight {
		read: 25 * WEIGHT_REF_TIME_PER_MICROS,  // ~25 µs @ 200,000 items
		write: 100 * WEIGHT_REF_TIME_PER_MICROS, // ~100 µs @ 200,000 items
	};
}
