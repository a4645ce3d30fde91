/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use dashmap::DashMap;

use crate::traits::StateStore;

/// An in-memory [`StateStore`].
///
/// Holds slots for the lifetime of the process only. This is the store to
/// inject in tests and in hosts that handle persistence elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: DashMap<String, i64>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.slots.get(key).map(|slot| *slot.value())
    }

    fn set(&self, key: &str, value: i64) {
        self.slots.insert(key.to_string(), value);
    }
}
