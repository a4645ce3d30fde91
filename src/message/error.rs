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

/// Represents fatal errors raised by the counter.
///
/// Both construction variants halt initialization: an invalid spec refuses
/// construction outright, while an out-of-range initial value leaves the
/// counter constructed but inert. Runtime rejections are not errors; see
/// [`CounterWarning`](crate::message::CounterWarning).
#[derive(Debug, Clone)]
pub enum CounterError {
    /// The range spec expanded to zero allowed values.
    InvalidSpec(String),
    /// The configured initial value is absent from the allowed values.
    InitialValueNotInRange(i64),
    /// Indicates that sending an event to the counter failed.
    SendFailed(String),
}

impl std::fmt::Display for CounterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterError::InvalidSpec(spec) => {
                write!(f, "Range spec '{spec}' yields no allowed values")
            }
            CounterError::InitialValueNotInRange(value) => {
                write!(f, "Initial value not in range: {value}")
            }
            CounterError::SendFailed(msg) => write!(f, "Failed to send event: {msg}"),
        }
    }
}

impl std::error::Error for CounterError {}

/// Converts a `SendError` from Tokio's MPSC channel to a `CounterError`.
impl<T> From<tokio::sync::mpsc::error::SendError<T>> for CounterError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        CounterError::SendFailed("Channel closed".into())
    }
}
