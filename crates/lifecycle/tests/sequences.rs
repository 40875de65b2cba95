//! Exhaustive sequence checks for the counter detector.

use apz_lifecycle::{
    new_callback, ActivityCounterDetector, CounterConfig, LifecycleState, LifecycleTracker,
    UnitEvent,
};
use std::sync::{Arc, Mutex};

const MAX_LEN: u32 = 8;

fn run(events: &[UnitEvent]) -> (ActivityCounterDetector, Vec<LifecycleState>) {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emitted);
    let mut detector = ActivityCounterDetector::new(CounterConfig::default());
    detector.start(new_callback(move |state| sink.lock().unwrap().push(state)));
    for event in events {
        detector.on_unit(*event);
    }
    let emitted = emitted.lock().unwrap().clone();
    (detector, emitted)
}

/// Every sequence over `alphabet` of length `len`, indexed by a base-N counter.
fn sequences(alphabet: &[UnitEvent], len: u32) -> impl Iterator<Item = Vec<UnitEvent>> + '_ {
    let base = alphabet.len();
    (0..base.pow(len)).map(move |mut n| {
        (0..len)
            .map(|_| {
                let event = alphabet[n % base];
                n /= base;
                event
            })
            .collect()
    })
}

#[test]
fn started_count_is_floored_net_of_start_and_stop() {
    for len in 0..=MAX_LEN {
        for seq in sequences(&[UnitEvent::Started, UnitEvent::Stopped], len) {
            let expected = seq.iter().fold(0u32, |count, event| match event {
                UnitEvent::Started => count + 1,
                _ => count.saturating_sub(1),
            });
            let (detector, _) = run(&seq);
            assert_eq!(detector.counters().started, expected, "sequence {seq:?}");
        }
    }
}

#[test]
fn no_adjacent_duplicates_from_counter_transitions() {
    let alphabet = [
        UnitEvent::Started,
        UnitEvent::Resumed,
        UnitEvent::Paused,
        UnitEvent::Stopped,
        UnitEvent::Destroyed,
    ];
    for len in 0..=6 {
        for seq in sequences(&alphabet, len) {
            let (_, emitted) = run(&seq);
            for pair in emitted.windows(2) {
                assert_ne!(pair[0], pair[1], "sequence {seq:?} emitted {emitted:?}");
            }
        }
    }
}

#[test]
fn resumed_after_background_follows_a_start() {
    let alphabet = [
        UnitEvent::Started,
        UnitEvent::Resumed,
        UnitEvent::Paused,
        UnitEvent::Stopped,
        UnitEvent::Destroyed,
    ];
    for len in 0..=6 {
        for seq in sequences(&alphabet, len) {
            let emitted = Arc::new(Mutex::new(Vec::new()));
            let sink = Arc::clone(&emitted);
            let mut detector = ActivityCounterDetector::new(CounterConfig::default());
            detector.start(new_callback(move |state| sink.lock().unwrap().push(state)));

            let mut backgrounded = false;
            let mut started_since_background = false;
            for (step, event) in seq.iter().enumerate() {
                let before = emitted.lock().unwrap().len();
                detector.on_unit(*event);
                if *event == UnitEvent::Started {
                    started_since_background = true;
                }

                let fresh = emitted.lock().unwrap()[before..].to_vec();
                for state in fresh {
                    match state {
                        LifecycleState::Paused if *event == UnitEvent::Stopped => {
                            backgrounded = true;
                            started_since_background = false;
                        }
                        LifecycleState::Resumed if backgrounded => {
                            assert!(
                                started_since_background,
                                "sequence {seq:?} resumed at step {step} without a start"
                            );
                            backgrounded = false;
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}

#[test]
fn late_start_with_replayed_units_tracks_focus() {
    let emitted = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emitted);
    let mut detector = ActivityCounterDetector::new(CounterConfig::default());

    // The host's first window opens before anyone subscribes.
    for event in [UnitEvent::Created, UnitEvent::Started, UnitEvent::Resumed] {
        detector.on_unit(event);
    }
    assert_eq!(detector.counters().started, 0);

    detector.start(new_callback(move |state| sink.lock().unwrap().push(state)));
    detector.on_unit(UnitEvent::Started);
    detector.on_unit(UnitEvent::Resumed);
    detector.on_unit(UnitEvent::Paused);
    detector.on_unit(UnitEvent::Resumed);

    assert_eq!(
        *emitted.lock().unwrap(),
        vec![
            LifecycleState::Resumed,
            LifecycleState::Inactive,
            LifecycleState::Resumed,
        ]
    );
}
