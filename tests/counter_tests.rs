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

#![allow(dead_code)]

use std::sync::Arc;

use range_counter::prelude::*;

use crate::setup::initialize_tracing;

mod setup;

fn model_over(range: &str, initial_value: i64) -> (CounterModel, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let config = CounterConfig::new(range, initial_value);
    let model = CounterModel::new(&config, store.clone()).expect("valid spec");
    (model, store)
}

/// The configured initial value resolves to its position in the range.
///
/// **Scenario:**
/// 1. Build a model over `0..4` starting at value `2`.
///
/// **Verification:**
/// - The cursor is at index 2, the status reads `i:2 v:2`, phase is `Ready`.
#[test]
fn initial_value_resolves_to_its_index() {
    initialize_tracing();
    let (model, _store) = model_over("0..4", 2);
    assert_eq!(model.index(), 2);
    assert_eq!(model.value(), Some(2));
    assert_eq!(model.phase(), Phase::Ready);
    let status = model.status();
    assert_eq!(status.indicator, StatusIndicator::Ok);
    assert_eq!(status.text, "i:2 v:2");
}

/// An initial value absent from the range leaves the model inert.
///
/// **Scenario:**
/// 1. Build a model over `0..2` starting at value `9`.
/// 2. Feed it a `reset` event.
///
/// **Verification:**
/// - Phase is `Invalid`, the fault and error status name the value.
/// - The reset produces no emission and writes nothing to the store.
#[test]
fn invalid_initial_value_is_terminal() {
    initialize_tracing();
    let (mut model, store) = model_over("0..2", 9);
    assert_eq!(model.phase(), Phase::Invalid);
    assert_eq!(model.value(), None);
    assert!(matches!(
        model.fault(),
        Some(CounterError::InitialValueNotInRange(9))
    ));
    let status = model.status();
    assert_eq!(status.indicator, StatusIndicator::Error);
    assert_eq!(status.text, "Invalid initial value: '9'");

    let emitted = model.process(&CounterEvent::bare("reset"));
    assert_eq!(emitted, None);
    assert_eq!(store.get(INDEX_KEY), None);
    assert_eq!(model.warning_count(), 0);
}

/// A spec with no values refuses construction outright.
#[test]
fn invalid_spec_refuses_construction() {
    initialize_tracing();
    let store = Arc::new(MemoryStore::new());
    let config = CounterConfig::new("abc", 0);
    assert!(matches!(
        CounterModel::new(&config, store),
        Err(CounterError::InvalidSpec(_))
    ));
}

/// Reset moves the cursor home and emits the first value.
///
/// **Scenario:**
/// 1. Build a model over `10..14` starting at value `13` (index 3).
/// 2. Process `reset`.
///
/// **Verification:**
/// - The cursor is at index 0 and the first value is emitted.
#[test]
fn reset_moves_home_and_emits() {
    initialize_tracing();
    let (mut model, store) = model_over("10..14", 13);
    assert_eq!(model.index(), 3);

    let emitted = model.process(&CounterEvent::bare("reset"));
    assert_eq!(emitted, Some(10));
    assert_eq!(model.index(), 0);
    assert_eq!(store.get(INDEX_KEY), Some(0));
}

/// Reset re-announces the position even when the cursor is already home,
/// under any of its aliases.
#[test]
fn reset_always_emits() {
    initialize_tracing();
    let (mut model, _store) = model_over("10..14", 10);
    assert_eq!(model.index(), 0);

    assert_eq!(model.process(&CounterEvent::bare("r")), Some(10));
    assert_eq!(model.process(&CounterEvent::bare("res")), Some(10));
    assert_eq!(model.process(&CounterEvent::bare("reset")), Some(10));
}

/// Increment wraps past the end of the range.
#[test]
fn increment_wraps_around() {
    initialize_tracing();
    let (mut model, _store) = model_over("0..4", 4);
    assert_eq!(model.index(), 4);

    let emitted = model.process(&CounterEvent::bare("increment"));
    assert_eq!(emitted, Some(0));
    assert_eq!(model.index(), 0);
}

/// Decrement wraps past the start of the range.
#[test]
fn decrement_wraps_around() {
    initialize_tracing();
    let (mut model, _store) = model_over("0..4", 0);

    let emitted = model.process(&CounterEvent::bare("decrement"));
    assert_eq!(emitted, Some(4));
    assert_eq!(model.index(), 4);
}

/// An integer payload is the step size; anything else steps by one.
#[test]
fn step_size_comes_from_the_payload() {
    initialize_tracing();
    let (mut model, _store) = model_over("0..4", 0);

    assert_eq!(model.process(&CounterEvent::new("inc", 3)), Some(3));
    assert_eq!(model.process(&CounterEvent::new("dec", 2)), Some(1));
    // Non-numeric payloads fall back to a step of one.
    assert_eq!(model.process(&CounterEvent::new("inc", "fast")), Some(2));
    // Negative steps walk the other way, wrapping.
    assert_eq!(model.process(&CounterEvent::new("inc", -3)), Some(4));
}

/// Set-value jumps to the first position holding the payload value.
#[test]
fn set_value_moves_to_first_match() {
    initialize_tracing();
    let (mut model, _store) = model_over("5,7,9,5", 7);

    assert_eq!(model.process(&CounterEvent::new("setValue", 9)), Some(9));
    assert_eq!(model.index(), 2);

    // Duplicate values resolve to the first occurrence.
    assert_eq!(model.process(&CounterEvent::new("val", 5)), Some(5));
    assert_eq!(model.index(), 0);
}

/// A set-value payload outside the range warns and changes nothing,
/// but the (unchanged) cursor is still persisted.
///
/// **Scenario:**
/// 1. Build a model over `0..4` at index 2.
/// 2. Process `setValue 99`.
///
/// **Verification:**
/// - No emission, cursor unchanged, one warning recorded, slot written.
#[test]
fn set_value_rejection_preserves_state() {
    initialize_tracing();
    let (mut model, store) = model_over("0..4", 2);

    let emitted = model.process(&CounterEvent::new("setValue", 99));
    assert_eq!(emitted, None);
    assert_eq!(model.index(), 2);
    assert_eq!(model.warning_count(), 1);
    assert!(matches!(
        model.last_warning(),
        Some(CounterWarning::ValueNotInRange { .. })
    ));
    assert_eq!(store.get(INDEX_KEY), Some(2));
}

/// Set-index accepts positions inside `[0, len)` and warns otherwise.
#[test]
fn set_index_checks_bounds() {
    initialize_tracing();
    let (mut model, _store) = model_over("10..14", 10);

    assert_eq!(model.process(&CounterEvent::new("setIndex", 3)), Some(13));
    assert_eq!(model.index(), 3);

    assert_eq!(model.process(&CounterEvent::new("idx", 9)), None);
    assert_eq!(model.index(), 3);
    assert!(matches!(
        model.last_warning(),
        Some(CounterWarning::IndexOutOfRange { max: 4 })
    ));
}

/// An unknown topic warns and ends processing before the persistence step.
///
/// **Scenario:**
/// 1. Build a model with an empty store.
/// 2. Process an unrecognized topic.
///
/// **Verification:**
/// - No emission, no cursor change, no slot write, one warning recorded.
#[test]
fn unknown_topic_skips_emission_and_persistence() {
    initialize_tracing();
    let (mut model, store) = model_over("0..4", 2);

    let emitted = model.process(&CounterEvent::bare("frobnicate"));
    assert_eq!(emitted, None);
    assert_eq!(model.index(), 2);
    assert_eq!(store.get(INDEX_KEY), None);
    assert_eq!(model.warning_count(), 1);
    assert!(matches!(
        model.last_warning(),
        Some(CounterWarning::UnknownTopic { .. })
    ));
}

/// Alias topics route to the same operations as their long forms.
#[test]
fn aliases_share_semantics() {
    initialize_tracing();
    let (mut model, _store) = model_over("0..4", 0);

    assert_eq!(model.process(&CounterEvent::bare("++")), Some(1));
    assert_eq!(model.process(&CounterEvent::bare("--")), Some(0));
    assert_eq!(model.process(&CounterEvent::new("v", 3)), Some(3));
    assert_eq!(model.process(&CounterEvent::new("i", 1)), Some(1));
}

/// Topic matching is case-sensitive.
#[test]
fn topics_are_case_sensitive() {
    initialize_tracing();
    let (mut model, _store) = model_over("0..4", 2);

    assert_eq!(model.process(&CounterEvent::bare("Reset")), None);
    assert_eq!(model.index(), 2);
    assert!(matches!(
        model.last_warning(),
        Some(CounterWarning::UnknownTopic { .. })
    ));
}
