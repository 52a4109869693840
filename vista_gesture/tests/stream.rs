// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vista_gesture` crate.
//!
//! Both backend adapters must produce the same canonical stream for the same
//! physical gesture, and every stream must be well-formed:
//! `began → changed* → (ended | cancelled)`.

use kurbo::{Point, Size, Vec2};
use vista_gesture::{
    ContentFrame, ContinuousAdapter, DragValue, GestureEvent, MagnifyValue, PanSample,
    PinchSample, RecognizerState, TapRecognizer, TouchAdapter, UnitPoint, predicted_translation,
};

/// Checks that pan events in `stream` follow `began → changed* → terminal`.
fn assert_well_formed_pans(stream: &[GestureEvent]) {
    let mut open = false;
    for event in stream.iter().filter(|e| e.is_pan()) {
        match event {
            GestureEvent::PanBegan { .. } => {
                assert!(!open, "began while a pan was open");
                open = true;
            }
            GestureEvent::PanChanged { .. } => assert!(open, "changed outside a pan"),
            GestureEvent::PanEnded { .. } | GestureEvent::PanCancelled => {
                assert!(open, "terminal event outside a pan");
                open = false;
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn both_backends_agree_on_a_flick() {
    let translations = [10.0, 40.0, 90.0];
    let velocity = Vec2::new(0.0, 1600.0);

    let mut touch = TouchAdapter::default();
    let mut from_touch = Vec::new();
    from_touch.extend(touch.pan(PanSample {
        state: RecognizerState::Began,
        translation: Vec2::ZERO,
        velocity: Vec2::ZERO,
        location: Point::new(20.0, 20.0),
        time_ms: 0,
    }));
    for (i, y) in translations.iter().enumerate() {
        from_touch.extend(touch.pan(PanSample {
            state: RecognizerState::Changed,
            translation: Vec2::new(0.0, *y),
            velocity,
            location: Point::new(20.0, 20.0 + y),
            time_ms: 16 * (i as u64 + 1),
        }));
    }
    from_touch.extend(touch.pan(PanSample {
        state: RecognizerState::Ended,
        translation: Vec2::new(0.0, 90.0),
        velocity,
        location: Point::new(20.0, 110.0),
        time_ms: 50,
    }));

    let mut continuous = ContinuousAdapter::default();
    let mut from_continuous = Vec::new();
    for (i, y) in translations.iter().enumerate() {
        from_continuous.extend(continuous.drag_changed(DragValue {
            translation: Vec2::new(0.0, *y),
            predicted_end_translation: predicted_translation(Vec2::new(0.0, *y), velocity),
            start_location: Point::new(20.0, 20.0),
            time_ms: 16 * (i as u64 + 1),
        }));
    }
    from_continuous.extend(continuous.drag_ended(DragValue {
        translation: Vec2::new(0.0, 90.0),
        predicted_end_translation: predicted_translation(Vec2::new(0.0, 90.0), velocity),
        start_location: Point::new(20.0, 20.0),
        time_ms: 50,
    }));

    assert_eq!(from_touch, from_continuous);
    assert_well_formed_pans(&from_touch);
    assert_eq!(
        from_touch.last(),
        Some(&GestureEvent::PanEnded {
            translation: Vec2::new(0.0, 90.0),
            predicted: Vec2::new(0.0, 490.0),
        })
    );
}

#[test]
fn interleaved_failures_keep_the_stream_well_formed() {
    let mut touch = TouchAdapter::default();
    let mut stream = Vec::new();
    let states = [
        RecognizerState::Possible,
        RecognizerState::Changed,
        RecognizerState::Failed,
        RecognizerState::Ended,
        RecognizerState::Began,
        RecognizerState::Began,
        RecognizerState::Changed,
        RecognizerState::Cancelled,
        RecognizerState::Cancelled,
    ];
    for (i, state) in states.into_iter().enumerate() {
        stream.extend(touch.pan(PanSample {
            state,
            translation: Vec2::new(i as f64, 0.0),
            velocity: Vec2::ZERO,
            location: Point::ZERO,
            time_ms: i as u64,
        }));
    }
    // A repeated `Began` restarts the pan and is reported as a cancel first.
    let doubled: Vec<_> = stream
        .windows(2)
        .filter(|w| {
            matches!(w[0], GestureEvent::PanBegan { .. })
                && matches!(w[1], GestureEvent::PanBegan { .. })
        })
        .collect();
    assert!(doubled.is_empty(), "double began: {stream:?}");
    assert_well_formed_pans(&stream);
    assert!(!touch.is_panning());
}

#[test]
fn pinch_anchor_matches_across_backends() {
    let content = Size::new(400.0, 800.0);

    let mut touch = TouchAdapter::default();
    let began = touch.pinch(PinchSample {
        state: RecognizerState::Began,
        scale: 1.0,
        location: Point::new(300.0, 200.0),
        view_size: content,
    });

    // The continuous backend reports the pinch center relative to the
    // unscrolled content; here the content is not scrolled.
    let mut continuous = ContinuousAdapter::default();
    let changed = continuous.magnify_changed(
        MagnifyValue {
            magnification: 1.0,
            start_location: Point::new(300.0, 200.0),
        },
        ContentFrame {
            size: content,
            offset: Vec2::ZERO,
        },
    );

    let anchor = UnitPoint::new(0.75, 0.25);
    assert_eq!(began[0], GestureEvent::PinchBegan { anchor });
    assert_eq!(changed[0], GestureEvent::PinchBegan { anchor });
}

#[test]
fn taps_and_pans_coexist() {
    let mut taps = TapRecognizer::default();
    taps.touch_down(0);
    assert!(taps.touch_up(Point::new(1.0, 1.0), 30).is_empty());
    // A pan begins before the window elapses; the host cancels the tap.
    taps.touch_cancelled();
    assert_eq!(taps.next_deadline(), None);
    assert_eq!(taps.poll(1_000), None);

    taps.touch_down(2_000);
    taps.touch_up(Point::new(1.0, 1.0), 2_050);
    let deadline = taps.next_deadline().unwrap();
    assert_eq!(taps.poll(deadline - 1), None);
    assert_eq!(taps.poll(deadline), Some(GestureEvent::SingleTap));
}
