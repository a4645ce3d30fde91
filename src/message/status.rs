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

use std::fmt;

/// Marks a [`CounterStatus`] as healthy or faulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIndicator {
    /// The counter is ready and processing events.
    Ok,
    /// The counter is inert: its configured initial value is not in range.
    Error,
}

/// The display status a host can surface for the counter.
///
/// Published once at construction and again after every emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterStatus {
    /// Whether the counter is operating or faulted.
    pub indicator: StatusIndicator,
    /// Human-readable position (`i:<index> v:<value>`) or fault description.
    pub text: String,
}

impl CounterStatus {
    /// Status for a ready counter at the given cursor position.
    pub fn ready(index: usize, value: i64) -> Self {
        CounterStatus {
            indicator: StatusIndicator::Ok,
            text: format!("i:{index} v:{value}"),
        }
    }

    /// Status for a counter whose configured initial value is not in range.
    pub fn invalid(initial_value: i64) -> Self {
        CounterStatus {
            indicator: StatusIndicator::Error,
            text: format!("Invalid initial value: '{initial_value}'"),
        }
    }
}

impl fmt::Display for CounterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
