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

use std::time::SystemTime;

use static_assertions::assert_impl_all;

/// A value emitted by the counter.
///
/// Emitted whenever processing moves the cursor, and on every reset even
/// when the cursor is already at position 0. The payload is the allowed
/// value under the cursor after the transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterOutput {
    /// The allowed value under the cursor.
    pub payload: i64,
    /// The time when the value was emitted.
    pub timestamp: SystemTime,
}

impl CounterOutput {
    pub(crate) fn new(payload: i64) -> Self {
        CounterOutput {
            payload,
            timestamp: SystemTime::now(),
        }
    }
}

// Ensures that CounterOutput implements the Send trait.
assert_impl_all!(CounterOutput: Send);
