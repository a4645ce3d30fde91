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

use std::fmt::Debug;

/// The persistence capability injected into the counter.
///
/// The counter reads its slot once at construction and writes it after every
/// recognized event; the store's scope and lifetime belong to the host.
/// `get` distinguishes an absent slot from a stored value; a stored `0` is
/// a value, not an absence.
///
/// Both methods are synchronous: event processing never suspends, so a store
/// implementation must not block on anything slower than local I/O.
pub trait StateStore: Send + Sync + Debug {
    /// Reads the value stored under `key`, if the slot has ever been written.
    fn get(&self, key: &str) -> Option<i64>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: i64);
}
