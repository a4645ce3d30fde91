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

use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::common::{
    CounterConfig, CounterHandle, EVENT_CHANNEL_CAPACITY, OUTPUT_CHANNEL_CAPACITY,
};
use crate::counter::{CounterModel, ManagedCounter, Started};
use crate::message::CounterError;
use crate::traits::StateStore;

/// Type-state marker for a [`ManagedCounter`] that has not started yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idle;

impl ManagedCounter<Idle> {
    /// Wires up a counter from its configuration and a state store.
    ///
    /// The model resolves its starting cursor here (configured initial
    /// value, overridden by a persisted cursor when one exists), and the
    /// mailbox, output fan-out and status channel are created. Nothing runs
    /// until [`start`](ManagedCounter::start).
    ///
    /// A counter whose initial value is not in range is still constructed:
    /// it starts, reports its error status, and ignores every event.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidSpec`] when the range spec expands to
    /// no allowed values.
    pub fn new(config: &CounterConfig, store: Arc<dyn StateStore>) -> Result<Self, CounterError> {
        let model = CounterModel::new(config, store)?;

        let (outbox, inbox) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (outputs, _) = broadcast::channel(OUTPUT_CHANNEL_CAPACITY);
        let (status_tx, status_rx) = watch::channel(model.status());
        let cancellation_token = CancellationToken::new();

        let handle = CounterHandle {
            outbox,
            cancellation_token: cancellation_token.clone(),
            tracker: TaskTracker::new(),
            status: status_rx,
            outputs: outputs.clone(),
        };

        trace!("NEW COUNTER: {}", model.status().text);

        Ok(ManagedCounter::<Idle> {
            model,
            handle,
            inbox,
            outputs,
            status_tx,
            cancellation_token,
            _counter_state: PhantomData,
        })
    }

    /// A view of the wired model, for inspection before starting.
    pub fn model(&self) -> &CounterModel {
        &self.model
    }

    /// Spawns the mailbox task and hands back the counter's handle.
    #[instrument(skip(self))]
    pub fn start(self) -> CounterHandle {
        let handle = self.handle.clone();
        let started: ManagedCounter<Started> = self.into();

        handle.tracker.spawn(started.wake());
        handle.tracker.close();

        handle
    }
}

impl From<ManagedCounter<Idle>> for ManagedCounter<Started> {
    fn from(value: ManagedCounter<Idle>) -> Self {
        ManagedCounter::<Started> {
            model: value.model,
            handle: value.handle,
            inbox: value.inbox,
            outputs: value.outputs,
            status_tx: value.status_tx,
            cancellation_token: value.cancellation_token,
            _counter_state: PhantomData,
        }
    }
}
