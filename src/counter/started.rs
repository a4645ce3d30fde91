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

use tracing::{instrument, trace};

use crate::counter::ManagedCounter;
use crate::message::CounterOutput;

/// Type-state marker for a [`ManagedCounter`] that is actively processing
/// its mailbox.
///
/// When a counter is in the `Started` state its mailbox task (`wake`) is
/// running, receiving one event at a time and driving the model with it.
/// Interaction happens via the counter's
/// [`CounterHandle`](crate::common::CounterHandle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Started;

impl ManagedCounter<Started> {
    // wake() is the mailbox loop; it owns the counter for the rest of its life.
    #[instrument(skip(self))]
    pub(crate) async fn wake(mut self) {
        let cancellation_token = self.cancellation_token.clone();
        let mut halting = false;

        loop {
            tokio::select! {
                // React immediately to cancellation: stop accepting new
                // events, then drain what was already delivered.
                _ = cancellation_token.cancelled(), if !halting => {
                    trace!("cancellation token triggered for counter");
                    halting = true;
                    self.inbox.close();
                }
                incoming = self.inbox.recv() => {
                    let Some(event) = incoming else { break; };
                    trace!(topic = %event.topic, "received event");

                    if let Some(value) = self.model.process(&event) {
                        // A send error only means no subscriber is listening.
                        let _ = self.outputs.send(CounterOutput::new(value));
                        self.status_tx.send_replace(self.model.status());
                    }
                }
            }
        }

        trace!("event loop finished for counter");
    }
}
