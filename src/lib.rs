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

#![forbid(unsafe_code)]

//! # Range Counter
//!
//! A small reactive counter cell built on top of Tokio. The counter owns a
//! cursor into an ordered list of allowed integer values (parsed from a
//! compact range spec such as `"1,3..5,10"`) and advances that cursor in
//! response to tagged events delivered one at a time: reset, set-value,
//! set-index, increment and decrement. The cursor position is persisted
//! through a pluggable key-value store so it survives restarts.
//!
//! ## Key Concepts
//!
//! - **Allowed values (`AllowedValues`)**: the ordered, immutable list of
//!   integers the cursor may point at, parsed once at construction.
//! - **Model (`CounterModel`)**: the synchronous state machine. It can be
//!   driven directly for embedding or testing without a runtime.
//! - **Managed counter (`ManagedCounter`)**: type-state wrapper (`Idle` →
//!   `Started`) that runs the model behind a Tokio mailbox, serializing
//!   event processing.
//! - **Handle (`CounterHandle`)**: cloneable reference for sending events,
//!   subscribing to emitted values, reading the display status, and
//!   stopping the counter.
//! - **State store (`StateStore`)**: the injected persistence capability;
//!   `MemoryStore` and `FileStore` implementations are bundled.

/// Internal utilities: configuration, the handle, and bundled stores.
pub(crate) mod common;

/// The counter state machine and its managed wrapper.
pub(crate) mod counter;

/// Event, command, payload, output, status and error types.
pub(crate) mod message;

/// The range-spec parser producing the allowed-value list.
pub(crate) mod range;

/// Trait definitions for injected capabilities.
pub(crate) mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// *   [`crate::common::CounterConfig`]: Construction configuration (range spec + initial value).
/// *   [`crate::common::CounterHandle`]: Handle for interacting with a started counter.
/// *   [`crate::common::FileStore`]: TOML-file-backed state store.
/// *   [`crate::common::MemoryStore`]: In-memory state store.
/// *   [`crate::common::INDEX_KEY`]: The persisted-slot key for the cursor.
/// *   [`crate::counter::CounterModel`]: The synchronous counter state machine.
/// *   [`crate::counter::Idle`]: Type-state marker for a counter before it starts.
/// *   [`crate::counter::ManagedCounter`]: The managed counter wrapper.
/// *   [`crate::counter::Phase`]: Operational phase of the model (`Ready` / `Invalid`).
/// *   [`crate::counter::Started`]: Type-state marker for a running counter.
/// *   [`crate::message::Command`]: The closed set of operations an event can select.
/// *   [`crate::message::CounterError`]: Fatal construction and channel errors.
/// *   [`crate::message::CounterEvent`]: A tagged input event.
/// *   [`crate::message::CounterOutput`]: An emitted value.
/// *   [`crate::message::CounterStatus`]: The display status (`i:<index> v:<value>`).
/// *   [`crate::message::CounterWarning`]: Non-fatal runtime rejections.
/// *   [`crate::message::Payload`]: The event payload (integer, text, or empty).
/// *   [`crate::message::StatusIndicator`]: Ok/Error marker on the display status.
/// *   [`crate::range::AllowedValues`]: The parsed, ordered allowed-value list.
/// *   [`crate::traits::StateStore`]: The injected persistence capability.
pub mod prelude {
    pub use crate::common::{CounterConfig, CounterHandle, FileStore, MemoryStore, INDEX_KEY};
    pub use crate::counter::{CounterModel, Idle, ManagedCounter, Phase, Started};
    pub use crate::message::{
        Command, CounterError, CounterEvent, CounterOutput, CounterStatus, CounterWarning,
        Payload, StatusIndicator,
    };
    pub use crate::range::AllowedValues;
    pub use crate::traits::StateStore;
}
