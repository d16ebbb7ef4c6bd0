// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end event flow through `Timeline`.

use kurbo::Point;
use timestrip::{
    ConfigError, ItemId, Key, PointerButton, RawItem, RestoreOutcome, Timeline, TimelineConfig,
    TimelineError, TimelineEvent,
};

const VIEWPORT: f64 = 800.0;

fn raw(id: u64, name: &str, start: &str, end: &str) -> RawItem {
    RawItem {
        id: ItemId(id),
        name: name.into(),
        start: start.into(),
        end: end.into(),
    }
}

fn sample() -> Timeline {
    Timeline::from_raw(
        [
            raw(1, "Design", "2024-01-01", "2024-01-05"),
            raw(2, "Build", "2024-01-03", "2024-01-10"),
            raw(3, "Review", "2024-01-06", "2024-01-08"),
        ],
        TimelineConfig::default(),
    )
    .unwrap()
}

fn present(timeline: &mut Timeline) {
    let layout = timeline.layout();
    assert!(timeline.commit_layout(&layout, VIEWPORT));
}

#[test]
fn zoom_preserves_relative_scroll_position() {
    let mut timeline = sample();
    present(&mut timeline);

    // Jan 1 through Feb 29 at 200 px/day.
    let max = 60.0 * 200.0 - VIEWPORT;
    timeline.handle(TimelineEvent::Scroll { offset: max / 2.0 });

    let token = timeline.handle(TimelineEvent::ZoomOut).unwrap();
    present(&mut timeline);
    let RestoreOutcome::Applied { offset } = timeline.commit_restore(token) else {
        panic!("restore was not applied");
    };

    let new_max = 60.0 * (200.0 / 1.2) - VIEWPORT;
    assert!((offset - new_max / 2.0).abs() < 1e-9);
    assert_eq!(timeline.zoom_label(), "167px/day");
}

#[test]
fn only_the_latest_restore_applies() {
    let mut timeline = sample();
    present(&mut timeline);

    let first = timeline.handle(TimelineEvent::ZoomOut).unwrap();
    let second = timeline.handle(TimelineEvent::ZoomOut).unwrap();
    present(&mut timeline);

    assert_eq!(timeline.commit_restore(first), RestoreOutcome::Superseded);
    assert!(matches!(
        timeline.commit_restore(second),
        RestoreOutcome::Applied { .. }
    ));
}

#[test]
fn stale_layouts_are_not_committed() {
    let mut timeline = sample();
    present(&mut timeline);
    let stale = timeline.layout();
    let token = timeline.handle(TimelineEvent::ZoomOut).unwrap();

    assert!(!timeline.commit_layout(&stale, VIEWPORT));
    assert_eq!(timeline.commit_restore(token), RestoreOutcome::LayoutPending);

    present(&mut timeline);
    assert!(matches!(
        timeline.commit_restore(token),
        RestoreOutcome::Applied { .. }
    ));
}

#[test]
fn restore_after_detach_is_a_no_op() {
    let mut timeline = sample();
    present(&mut timeline);
    let token = timeline.handle(TimelineEvent::ZoomIn);
    // Already at the maximum density.
    assert!(token.is_none());

    let token = timeline.handle(TimelineEvent::ZoomOut).unwrap();
    timeline.handle(TimelineEvent::SurfaceDetached);
    assert_eq!(timeline.commit_restore(token), RestoreOutcome::Detached);
}

#[test]
fn wheel_zooms_after_threshold() {
    let mut timeline = sample();
    present(&mut timeline);
    assert!(timeline.handle(TimelineEvent::Wheel { delta_y: 20.0 }).is_none());
    let token = timeline.handle(TimelineEvent::Wheel { delta_y: 15.0 }).unwrap();
    assert!((timeline.controller().pixels_per_day() - 200.0 / 1.2).abs() < 1e-9);
    present(&mut timeline);
    let _ = timeline.commit_restore(token);
}

#[test]
fn middle_drag_pans_and_suppresses_clicks() {
    let mut timeline = sample();
    present(&mut timeline);
    timeline.handle(TimelineEvent::Scroll { offset: 500.0 });

    timeline.handle(TimelineEvent::PointerDown {
        button: PointerButton::Middle,
        position: Point::new(400.0, 50.0),
    });
    timeline.handle(TimelineEvent::PointerMove {
        position: Point::new(300.0, 50.0),
    });
    assert_eq!(timeline.controller().scroll_offset(), 600.0);

    // Clicks during a pan do not select.
    timeline.handle(TimelineEvent::Click {
        position: Point::new(100.0, 30.0),
    });
    assert_eq!(timeline.overlay().selected(), None);

    timeline.handle(TimelineEvent::PointerLeave);
    assert!(!timeline.controller().is_panning());
    timeline.handle(TimelineEvent::PointerMove {
        position: Point::new(0.0, 50.0),
    });
    assert_eq!(timeline.controller().scroll_offset(), 600.0);
}

#[test]
fn primary_button_does_not_pan() {
    let mut timeline = sample();
    present(&mut timeline);
    timeline.handle(TimelineEvent::PointerDown {
        button: PointerButton::Primary,
        position: Point::new(400.0, 50.0),
    });
    assert!(!timeline.controller().is_panning());
}

#[test]
fn click_opens_detail_and_escape_closes_it() {
    let mut timeline = sample();
    present(&mut timeline);

    // Item 2 ("Build") sits in the second lane, Jan 3 to Jan 10.
    let layout = timeline.layout();
    let rect = layout.item(ItemId(2)).unwrap().rect;
    timeline.handle(TimelineEvent::Click {
        position: rect.center(),
    });
    assert_eq!(timeline.overlay().selected(), Some(ItemId(2)));

    let detail = timeline.selected_detail().unwrap();
    assert_eq!(detail.title, "Build");
    assert_eq!(detail.duration, "8 days");
    assert_eq!(detail.start, "Wednesday, January 3, 2024");

    timeline.handle(TimelineEvent::ToggleHelp);
    timeline.handle(TimelineEvent::Key(Key::Escape));
    assert_eq!(timeline.overlay().selected(), None);
    assert!(timeline.overlay().is_help_open());
    timeline.handle(TimelineEvent::BackdropClick);
    assert!(!timeline.overlay().is_open());
}

#[test]
fn clicks_select_the_item_under_the_pointer() {
    let mut timeline = sample();
    present(&mut timeline);
    // At 200 px/day: Design 0..1000 and Review 1000..1600 in lane 0,
    // Build 400..2000 in lane 1. Items span y 15..75 within each 90px lane.
    for (point, expected) in [
        (Point::new(10.0, 30.0), Some(ItemId(1))),
        (Point::new(10.0, 5.0), None),
        (Point::new(1_100.0, 30.0), Some(ItemId(3))),
        (Point::new(450.0, 120.0), Some(ItemId(2))),
        (Point::new(450.0, 500.0), None),
    ] {
        timeline.overlay_mut().dismiss();
        timeline.handle(TimelineEvent::Click { position: point });
        assert_eq!(timeline.overlay().selected(), expected, "{point:?}");
    }
}

#[test]
fn empty_timeline_is_valid() {
    let mut timeline = Timeline::new(Vec::new(), TimelineConfig::default()).unwrap();
    assert!(timeline.window().is_none());

    let layout = timeline.layout();
    assert!(layout.lanes.is_empty());
    assert!(layout.axis.months.is_empty());
    assert_eq!(layout.content_width, 0.0);
    assert!(timeline.commit_layout(&layout, VIEWPORT));

    let token = timeline.handle(TimelineEvent::ZoomOut).unwrap();
    present(&mut timeline);
    assert_eq!(
        timeline.commit_restore(token),
        RestoreOutcome::Applied { offset: 0.0 }
    );
    timeline.handle(TimelineEvent::Click {
        position: Point::new(5.0, 5.0),
    });
    assert!(!timeline.overlay().is_open());
}

#[test]
fn invalid_input_is_reported() {
    let err = Timeline::from_raw(
        [
            raw(1, "Ok", "2024-01-01", "2024-01-02"),
            raw(2, "Backwards", "2024-01-05", "2024-01-01"),
        ],
        TimelineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TimelineError::InvalidDateRange { id: ItemId(2), .. }
    ));

    let config = TimelineConfig {
        zoom_min: 300.0,
        ..TimelineConfig::default()
    };
    let err = Timeline::new(Vec::new(), config).unwrap_err();
    assert!(matches!(err, TimelineError::InvalidConfig(_)));

    let config = TimelineConfig {
        lane_height: f64::NAN,
        ..TimelineConfig::default()
    };
    let err = Timeline::from_raw([raw(1, "Ok", "2024-01-01", "2024-01-02")], config).unwrap_err();
    assert!(matches!(
        err,
        TimelineError::InvalidConfig(ConfigError::LaneHeight(_))
    ));
}
