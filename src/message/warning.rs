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

use crate::message::Payload;

/// Non-fatal rejections raised while processing events.
///
/// A warning leaves every invariant intact: the cursor is unchanged and the
/// counter keeps accepting events. Warnings are logged and retained on the
/// model for inspection.
#[derive(Debug, Clone)]
pub enum CounterWarning {
    /// A set-value payload that is not among the allowed values.
    ValueNotInRange {
        /// The rejected payload.
        value: Payload,
        /// The allowed values, rendered for the log line.
        allowed: String,
    },
    /// A set-index payload outside `[0, len)`.
    IndexOutOfRange {
        /// The largest valid index.
        max: usize,
    },
    /// A topic that selects no operation.
    UnknownTopic {
        /// The unrecognized topic.
        topic: String,
    },
}

impl std::fmt::Display for CounterWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterWarning::ValueNotInRange { value, allowed } => {
                write!(f, "Value {value} not in range. Allowed: {allowed}")
            }
            CounterWarning::IndexOutOfRange { max } => {
                write!(f, "Index out of range. Min: 0, max: {max}")
            }
            CounterWarning::UnknownTopic { topic } => write!(f, "Unknown topic: '{topic}'"),
        }
    }
}
