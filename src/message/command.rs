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

/// The closed set of operations an incoming event can select.
///
/// An event's topic is parsed into a `Command` exactly once, at the top of
/// processing; nothing downstream re-tests topic strings. Topic matching is
/// case-sensitive, and each operation answers to three aliases:
///
/// | Command | Topics |
/// |---|---|
/// | [`Command::Reset`] | `r`, `res`, `reset` |
/// | [`Command::SetValue`] | `v`, `val`, `setValue` |
/// | [`Command::SetIndex`] | `i`, `idx`, `setIndex` |
/// | [`Command::Increment`] | `inc`, `++`, `increment` |
/// | [`Command::Decrement`] | `dec`, `--`, `decrement` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor back to position 0.
    Reset,
    /// Move the cursor to the first position holding the payload value.
    SetValue(Payload),
    /// Move the cursor to the payload position.
    SetIndex(Payload),
    /// Step the cursor forward, wrapping around the end of the range.
    Increment {
        /// How far to step. Defaults to 1 when the payload is not an integer.
        step: i64,
    },
    /// Step the cursor backward, wrapping around the start of the range.
    Decrement {
        /// How far to step. Defaults to 1 when the payload is not an integer.
        step: i64,
    },
    /// Anything else: rejected with a warning, no state change.
    Unknown(String),
}

impl Command {
    /// Resolves a topic and payload into the operation they select.
    pub fn parse(topic: &str, payload: &Payload) -> Self {
        match topic {
            "r" | "res" | "reset" => Self::Reset,
            "v" | "val" | "setValue" => Self::SetValue(payload.clone()),
            "i" | "idx" | "setIndex" => Self::SetIndex(payload.clone()),
            "inc" | "++" | "increment" => Self::Increment {
                step: payload.as_integer().unwrap_or(1),
            },
            "dec" | "--" | "decrement" => Self::Decrement {
                step: payload.as_integer().unwrap_or(1),
            },
            other => Self::Unknown(other.to_string()),
        }
    }
}
