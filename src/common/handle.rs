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

use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{instrument, trace};

use crate::common::{EventOutbox, OutputFanout};
use crate::message::{CounterError, CounterEvent, CounterOutput, CounterStatus};

/// A cloneable reference to a started counter.
///
/// The handle is the host-facing boundary: events go in through [`send`],
/// emitted values come out through [`subscribe`], the display status is
/// readable at any time, and [`stop`] shuts the counter down after draining
/// whatever is already in its mailbox.
///
/// [`send`]: CounterHandle::send
/// [`subscribe`]: CounterHandle::subscribe
/// [`stop`]: CounterHandle::stop
#[derive(Debug, Clone)]
pub struct CounterHandle {
    /// The outbound channel for delivering events to the mailbox.
    pub(crate) outbox: EventOutbox,
    /// Cancellation token that initiates shutdown.
    pub(crate) cancellation_token: CancellationToken,
    /// The task tracker for the counter's mailbox task.
    pub(crate) tracker: TaskTracker,
    /// The latest published display status.
    pub(crate) status: watch::Receiver<CounterStatus>,
    /// Fan-out for emitted values.
    pub(crate) outputs: OutputFanout,
}

impl CounterHandle {
    /// Delivers one event to the counter's mailbox.
    ///
    /// Events are processed strictly in delivery order, one at a time.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::SendFailed`] when the counter has stopped and
    /// its mailbox is closed.
    #[instrument(skip(self, event), fields(topic = %event.topic))]
    pub async fn send(&self, event: CounterEvent) -> Result<(), CounterError> {
        trace!("delivering event to mailbox");
        self.outbox.send(event).await?;
        Ok(())
    }

    /// Subscribes to the values the counter emits.
    ///
    /// Each subscriber receives every emission from the moment it subscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<CounterOutput> {
        self.outputs.subscribe()
    }

    /// The latest display status published by the counter.
    pub fn status(&self) -> CounterStatus {
        self.status.borrow().clone()
    }

    /// Stops the counter.
    ///
    /// Signals cancellation, lets the mailbox drain events already
    /// delivered, and waits for the counter task to finish.
    #[instrument(skip(self))]
    pub async fn stop(&self) -> anyhow::Result<()> {
        trace!("requesting counter shutdown");
        self.cancellation_token.cancel();
        self.tracker.wait().await;
        Ok(())
    }
}
