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

use tracing::trace;

use crate::message::CounterError;

/// The ordered list of integer values the counter cursor may point at.
///
/// Built once from a compact range spec and immutable afterwards. A spec is
/// a comma-separated list of tokens; each token is either a single
/// non-negative integer literal or an inclusive run `A..B` that expands to
/// every integer from `A` to `B` in ascending order. An inverted run
/// (`A > B`) expands to nothing. Tokens that are neither form are skipped.
/// Duplicate values are kept as written; lookups resolve to the first match.
///
/// Invariant: the list is never empty. [`AllowedValues::parse`] refuses a
/// spec whose expansion yields no values, so every index in
/// `[0, len())` is a valid cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedValues(Vec<i64>);

impl AllowedValues {
    /// Parses a range spec into its expanded value list.
    ///
    /// # Errors
    ///
    /// Returns [`CounterError::InvalidSpec`] when no token contributes a
    /// value (empty input, or nothing but malformed tokens).
    pub fn parse(spec: &str) -> Result<Self, CounterError> {
        let mut values = Vec::new();
        for raw_token in spec.split(',') {
            let token = raw_token.trim();
            if let Some((start, end)) = token.split_once("..") {
                let (Some(start), Some(end)) = (parse_bound(start), parse_bound(end)) else {
                    trace!(token, "skipping malformed run token");
                    continue;
                };
                // An inverted run contributes nothing.
                values.extend(start..=end);
            } else if let Some(single) = parse_bound(token) {
                values.push(single);
            } else if !token.is_empty() {
                trace!(token, "skipping malformed token");
            }
        }
        if values.is_empty() {
            return Err(CounterError::InvalidSpec(spec.to_string()));
        }
        Ok(Self(values))
    }

    /// Position of the first occurrence of `value`, if present.
    pub fn position_of(&self, value: i64) -> Option<usize> {
        self.0.iter().position(|candidate| *candidate == value)
    }

    /// The value at `index`.
    ///
    /// `index` must be in `[0, len())`; every cursor the counter produces is.
    pub fn value_at(&self, index: usize) -> i64 {
        self.0[index]
    }

    /// Number of allowed values. Always at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the allowed values in order.
    pub fn iter(&self) -> impl Iterator<Item = &i64> {
        self.0.iter()
    }
}

impl fmt::Display for AllowedValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .0
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{rendered}")
    }
}

/// A run bound or single token: a non-negative integer literal.
fn parse_bound(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().filter(|value| *value >= 0)
}
