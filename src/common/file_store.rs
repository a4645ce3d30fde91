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

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use dashmap::DashMap;
use tracing::{error, warn};

use crate::traits::StateStore;

/// A [`StateStore`] backed by a TOML slot file.
///
/// The file is read once at [`FileStore::open`] and rewritten after every
/// `set`, so slots survive process restarts. A missing file starts the store
/// empty; an unreadable or malformed file is reported and the store starts
/// empty rather than refusing to operate. Write failures are reported and
/// the in-memory slots stay authoritative for the rest of the process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    slots: DashMap<String, i64>,
}

impl FileStore {
    /// Opens the slot file at `path`, loading any previously stored slots.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let slots = DashMap::new();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str::<BTreeMap<String, i64>>(&contents) {
                Ok(stored) => {
                    for (key, value) in stored {
                        slots.insert(key, value);
                    }
                }
                Err(e) => error!("Failed to parse slot file {}: {}", path.display(), e),
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => error!("Failed to read slot file {}: {}", path.display(), e),
        }
        Self { path, slots }
    }

    fn flush(&self) {
        let snapshot: BTreeMap<String, i64> = self
            .slots
            .iter()
            .map(|slot| (slot.key().clone(), *slot.value()))
            .collect();
        match toml::to_string(&snapshot) {
            Ok(rendered) => {
                if let Err(e) = std::fs::write(&self.path, rendered) {
                    warn!("Failed to write slot file {}: {}", self.path.display(), e);
                }
            }
            Err(e) => warn!("Failed to serialize slots for {}: {}", self.path.display(), e),
        }
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.slots.get(key).map(|slot| *slot.value())
    }

    fn set(&self, key: &str, value: i64) {
        self.slots.insert(key.to_string(), value);
        self.flush();
    }
}
