// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless timeline demo.
//!
//! Loads items from a JSON file, packs and lays them out, and prints the lanes,
//! axis and a zoom round trip. Set `RUST_LOG=debug` to see the controller's
//! events.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use timestrip::{
    ItemId, RawItem, RestoreOutcome, Timeline, TimelineConfig, TimelineEvent, TimelineLayout,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON array of `{ id, name, start, end }` items
    #[arg(default_value = "demos/data/project.json")]
    items: PathBuf,

    /// Optional JSON configuration; missing fields use defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels
    #[arg(short, long, default_value_t = 1280.0)]
    viewport: f64,

    /// Number of zoom-out steps to simulate
    #[arg(short, long, default_value_t = 2)]
    steps: u32,

    /// Item whose detail popup to show
    #[arg(long)]
    select: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<TimelineConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => TimelineConfig::default(),
    };

    let text = fs::read_to_string(&args.items)
        .with_context(|| format!("reading items {}", args.items.display()))?;
    let raw: Vec<RawItem> = serde_json::from_str(&text)
        .with_context(|| format!("parsing items {}", args.items.display()))?;
    let mut timeline = Timeline::from_raw(raw, config)?;
    info!(lanes = timeline.lanes().len(), "loaded timeline");

    let layout = timeline.layout();
    timeline.commit_layout(&layout, args.viewport);
    print_layout(&timeline, &layout);

    // Park the view in the middle, then zoom out and check the position holds.
    let middle = timeline.controller().scroll().max_offset() / 2.0;
    timeline.handle(TimelineEvent::Scroll { offset: middle });
    for _ in 0..args.steps {
        let Some(token) = timeline.handle(TimelineEvent::ZoomOut) else {
            println!("zoom: already at the minimum ({})", timeline.zoom_label());
            break;
        };
        let layout = timeline.layout();
        timeline.commit_layout(&layout, args.viewport);
        match timeline.commit_restore(token) {
            RestoreOutcome::Applied { offset } => println!(
                "zoom: {} width {:.0} scroll {:.0} (ratio {:.3})",
                timeline.zoom_label(),
                layout.content_width,
                offset,
                timeline.controller().scroll().ratio(),
            ),
            other => println!("zoom: {} restore {other:?}", timeline.zoom_label()),
        }
    }

    if let Some(id) = args.select {
        timeline.overlay_mut().open_detail(ItemId(id));
        match timeline.selected_detail() {
            Some(detail) => {
                println!();
                println!("{} ({})", detail.title, detail.id_label);
                println!("  {} to {}", detail.start, detail.end);
                println!("  {}", detail.duration);
            }
            None => println!("no item with id {id}"),
        }
    }
    Ok(())
}

fn print_layout(timeline: &Timeline, layout: &TimelineLayout) {
    let Some(window) = layout.window else {
        println!("empty timeline");
        return;
    };
    println!(
        "{} to {} ({} days on the axis), {} at {}",
        window.min(),
        window.max(),
        window.total_days(),
        timeline.zoom_label(),
        format_size(layout),
    );

    let months: Vec<&str> = layout.axis.months.iter().map(|m| m.label.as_str()).collect();
    println!("months: {}", months.join(", "));

    for (lane, placed) in timeline.lanes().iter().zip(&layout.lanes) {
        let names: Vec<String> = lane
            .iter()
            .zip(&placed.items)
            .map(|(item, it)| format!("{} [{:.0}..{:.0}]", item.name(), it.rect.x0, it.rect.x1))
            .collect();
        println!("lane {}: {}", placed.index, names.join("  "));
    }
}

fn format_size(layout: &TimelineLayout) -> String {
    format!("{:.0}x{:.0}", layout.content_width, layout.total_height)
}
