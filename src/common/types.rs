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

use tokio::sync::{broadcast, mpsc};

use crate::message::{CounterEvent, CounterOutput};
use crate::traits::StateStore;

/// The persisted-slot key under which the counter stores its cursor.
pub const INDEX_KEY: &str = "index";

/// Inbox capacity for the counter's event mailbox.
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 255;

/// Capacity of the emitted-value fan-out channel.
pub(crate) const OUTPUT_CHANNEL_CAPACITY: usize = 255;

pub(crate) type EventOutbox = mpsc::Sender<CounterEvent>;
pub(crate) type EventInbox = mpsc::Receiver<CounterEvent>;
pub(crate) type OutputFanout = broadcast::Sender<CounterOutput>;
pub(crate) type StoreRef = Arc<dyn StateStore>;
