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
use std::fmt::Debug;
use std::fmt::Formatter;
use std::marker::PhantomData;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

pub use idle::Idle;
pub use model::{CounterModel, Phase};
pub use started::Started;

use crate::common::{CounterHandle, EventInbox, OutputFanout};
use crate::message::CounterStatus;

mod idle;
mod model;
mod started;

/// A counter wrapped in its runtime plumbing.
///
/// `ManagedCounter` follows the type-state pattern: it is constructed in the
/// [`Idle`] state, where the model, mailbox and channels are wired up, and
/// moves to [`Started`] when [`start`](ManagedCounter::start) spawns the
/// mailbox task. Only the [`CounterHandle`] remains with the caller after
/// starting.
pub struct ManagedCounter<CounterState = Idle> {
    /// The synchronous state machine driven by the mailbox.
    pub(crate) model: CounterModel,

    /// The handle returned to the caller on start.
    pub(crate) handle: CounterHandle,

    /// The mailbox of incoming events.
    pub(crate) inbox: EventInbox,

    /// Fan-out for emitted values.
    pub(crate) outputs: OutputFanout,

    /// Publisher side of the display status.
    pub(crate) status_tx: watch::Sender<CounterStatus>,

    /// Shutdown signal shared with the handle.
    pub(crate) cancellation_token: CancellationToken,

    _counter_state: PhantomData<CounterState>,
}

impl<CounterState> Debug for ManagedCounter<CounterState> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManagedCounter")
            .field("status", &self.model.status().text)
            .finish()
    }
}
