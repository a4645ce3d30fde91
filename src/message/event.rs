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

use crate::message::Payload;

/// A single tagged input event delivered to the counter.
///
/// The `topic` routes the event to one of the counter's operations; the
/// `payload` parameterizes it. Events are ephemeral: the counter does not
/// retain them after processing.
#[derive(Debug, Clone)]
pub struct CounterEvent {
    /// The routing tag selecting the operation to apply.
    pub topic: String,
    /// The operation's argument, if any.
    pub payload: Payload,
    /// The time when the event was created.
    pub timestamp: SystemTime,
}

impl CounterEvent {
    /// Creates a new event with the given topic and payload.
    pub fn new(topic: impl Into<String>, payload: impl Into<Payload>) -> Self {
        CounterEvent {
            topic: topic.into(),
            payload: payload.into(),
            timestamp: SystemTime::now(),
        }
    }

    /// Creates a new event with the given topic and no payload.
    pub fn bare(topic: impl Into<String>) -> Self {
        Self::new(topic, Payload::Empty)
    }
}

// Ensures that CounterEvent implements the Send trait.
assert_impl_all!(CounterEvent: Send);
