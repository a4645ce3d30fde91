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

use std::sync::Arc;

use tracing::{debug, error, instrument, trace, warn};

use crate::common::{CounterConfig, StoreRef, INDEX_KEY};
use crate::message::{Command, CounterError, CounterEvent, CounterStatus, CounterWarning};
use crate::range::AllowedValues;
use crate::traits::StateStore;

/// Operational phase of a [`CounterModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The cursor is valid and events are being processed.
    Ready,
    /// Terminal: the configured initial value is not among the allowed
    /// values. The model ignores every event.
    Invalid,
}

/// The counter state machine.
///
/// Owns the allowed-value list, the cursor into it, and the injected state
/// store. The model is synchronous and single-threaded: `process` runs one
/// event to completion before the next is accepted, which is what the
/// mailbox in [`ManagedCounter`](crate::counter::ManagedCounter) guarantees.
/// Hosts with their own serialization contract can drive the model directly.
#[derive(Debug)]
pub struct CounterModel {
    allowed: AllowedValues,
    index: usize,
    phase: Phase,
    initial_value: i64,
    store: StoreRef,
    warning_count: u64,
    last_warning: Option<CounterWarning>,
    fault: Option<CounterError>,
}

impl CounterModel {
    /// Builds a model from its configuration and a state store.
    ///
    /// Resolves the configured initial value to its first position among the
    /// allowed values. When the value is absent the model is constructed in
    /// the terminal [`Phase::Invalid`] and the fault is reported; otherwise
    /// a previously persisted cursor, if any, overrides the configured start.
    /// A persisted `0` counts as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidSpec`] when the range spec expands to
    /// no allowed values.
    pub fn new(config: &CounterConfig, store: Arc<dyn StateStore>) -> Result<Self, CounterError> {
        let allowed = AllowedValues::parse(&config.range)?;
        let initial_value = config.initial_value;

        let Some(initial_index) = allowed.position_of(initial_value) else {
            let fault = CounterError::InitialValueNotInRange(initial_value);
            error!("{fault}");
            return Ok(Self {
                allowed,
                index: 0,
                phase: Phase::Invalid,
                initial_value,
                store,
                warning_count: 0,
                last_warning: None,
                fault: Some(fault),
            });
        };

        let mut index = initial_index;
        match store.get(INDEX_KEY) {
            Some(saved) if (0..allowed.len() as i64).contains(&saved) => index = saved as usize,
            Some(saved) => {
                warn!(saved, "persisted cursor outside the allowed range, keeping the configured start")
            }
            None => {}
        }

        let model = Self {
            allowed,
            index,
            phase: Phase::Ready,
            initial_value,
            store,
            warning_count: 0,
            last_warning: None,
            fault: None,
        };
        debug!(
            index = model.index,
            value = model.allowed.value_at(model.index),
            "counter ready"
        );
        Ok(model)
    }

    /// Processes one event, returning the value to emit, if any.
    ///
    /// A value is emitted when the cursor moved, and on every reset even if
    /// the cursor was already at position 0. The cursor is persisted for
    /// every recognized topic (the warning paths rewrite it unchanged), but
    /// not for unknown topics, which end processing immediately.
    ///
    /// While the model is [`Phase::Invalid`] this is a guarded no-op: no
    /// state change, no emission, no persistence.
    #[instrument(skip(self, event), fields(topic = %event.topic))]
    pub fn process(&mut self, event: &CounterEvent) -> Option<i64> {
        if self.phase == Phase::Invalid {
            trace!("counter is invalid, event dropped");
            return None;
        }

        let old_index = self.index;
        let command = Command::parse(&event.topic, &event.payload);
        trace!(?command, "dispatching");

        match &command {
            Command::Reset => self.index = 0,
            Command::SetValue(payload) => {
                match payload
                    .as_integer()
                    .and_then(|value| self.allowed.position_of(value))
                {
                    Some(position) => self.index = position,
                    None => self.record(CounterWarning::ValueNotInRange {
                        value: payload.clone(),
                        allowed: self.allowed.to_string(),
                    }),
                }
            }
            Command::SetIndex(payload) => {
                match payload
                    .as_integer()
                    .filter(|index| (0..self.allowed.len() as i64).contains(index))
                {
                    Some(index) => self.index = index as usize,
                    None => self.record(CounterWarning::IndexOutOfRange {
                        max: self.allowed.len() - 1,
                    }),
                }
            }
            Command::Increment { step } => self.index = self.shifted(*step as i128),
            Command::Decrement { step } => self.index = self.shifted(-(*step as i128)),
            Command::Unknown(topic) => {
                self.record(CounterWarning::UnknownTopic {
                    topic: topic.clone(),
                });
                return None;
            }
        }

        let emitted = (self.index != old_index || matches!(command, Command::Reset))
            .then(|| self.allowed.value_at(self.index));
        self.store.set(INDEX_KEY, self.index as i64);
        if let Some(value) = emitted {
            debug!(index = self.index, value, "cursor moved");
        }
        emitted
    }

    /// The display status for the model's current state.
    pub fn status(&self) -> CounterStatus {
        match self.phase {
            Phase::Invalid => CounterStatus::invalid(self.initial_value),
            Phase::Ready => CounterStatus::ready(self.index, self.allowed.value_at(self.index)),
        }
    }

    /// The current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The allowed value under the cursor, or `None` while invalid.
    pub fn value(&self) -> Option<i64> {
        match self.phase {
            Phase::Ready => Some(self.allowed.value_at(self.index)),
            Phase::Invalid => None,
        }
    }

    /// The model's operational phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The allowed values the cursor walks.
    pub fn allowed(&self) -> &AllowedValues {
        &self.allowed
    }

    /// Number of warnings recorded since construction.
    pub fn warning_count(&self) -> u64 {
        self.warning_count
    }

    /// The most recent warning, if any.
    pub fn last_warning(&self) -> Option<&CounterWarning> {
        self.last_warning.as_ref()
    }

    /// The construction fault, when the model is [`Phase::Invalid`].
    pub fn fault(&self) -> Option<&CounterError> {
        self.fault.as_ref()
    }

    // Cursor arithmetic runs in i128 so extreme step payloads cannot
    // overflow before the modulo.
    fn shifted(&self, step: i128) -> usize {
        let length = self.allowed.len() as i128;
        (self.index as i128 + step).rem_euclid(length) as usize
    }

    fn record(&mut self, warning: CounterWarning) {
        warn!("{warning}");
        self.warning_count += 1;
        self.last_warning = Some(warning);
    }
}
