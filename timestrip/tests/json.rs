// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading items and configuration from JSON.

#![cfg(feature = "serde")]

use timestrip::{ConfigError, ItemId, RawItem, Timeline, TimelineConfig, TimelineError, ingest};

const ITEMS: &str = r#"[
    { "id": 1, "name": "Kickoff", "start": "2024-03-01", "end": "2024-03-01" },
    { "id": 2, "name": "Research", "start": "2024-03-01", "end": "2024-03-20" },
    { "id": 3, "name": "Prototype", "start": "2024-03-04", "end": "2024-03-15" },
    { "id": 4, "name": "Launch", "start": "2024-03-21", "end": "2024-04-02" }
]"#;

#[test]
fn loads_items_from_json() {
    let raw: Vec<RawItem> = serde_json::from_str(ITEMS).unwrap();
    let timeline = Timeline::from_raw(raw, TimelineConfig::default()).unwrap();

    let lanes: Vec<Vec<u64>> = timeline
        .lanes()
        .iter()
        .map(|lane| lane.iter().map(|item| item.id().0).collect())
        .collect();
    assert_eq!(lanes, vec![vec![1, 3, 4], vec![2]]);

    let window = timeline.window().unwrap();
    assert_eq!(window.min().to_string(), "2024-03-01");
    assert_eq!(window.max().to_string(), "2024-04-02");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: TimelineConfig = serde_json::from_str(r#"{ "lane_height": 120.0 }"#).unwrap();
    assert_eq!(config.lane_height, 120.0);
    assert_eq!(config.item_height, TimelineConfig::default().item_height);
    assert_eq!(config.zoom_default, TimelineConfig::default().zoom_default);
    config.validate().unwrap();
}

#[test]
fn partial_config_is_still_validated() {
    // The default 60px items no longer fit.
    let config: TimelineConfig = serde_json::from_str(r#"{ "lane_height": 40.0 }"#).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ItemTallerThanLane { .. })
    ));
}

#[test]
fn bad_json_dates_are_rejected() {
    let raw: Vec<RawItem> = serde_json::from_str(
        r#"[{ "id": 9, "name": "x", "start": "03/01/2024", "end": "2024-03-02" }]"#,
    )
    .unwrap();
    let err = ingest(raw).unwrap_err();
    assert!(matches!(err, TimelineError::InvalidDate { id: ItemId(9), .. }));
}
