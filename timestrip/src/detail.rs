// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;

use crate::Item;

/// Human readable text shown for an item in its tooltip and detail popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemDetail {
    /// Popup title, the item's name.
    pub title: String,
    /// `1 day` or `N days`.
    pub duration: String,
    /// Start date, e.g. `Monday, January 1, 2024`.
    pub start: String,
    /// End date, same format as `start`.
    pub end: String,
    /// Compact range, `Jan 1` or `Jan 1 - Jan 5`.
    pub range: String,
    /// Id as shown to users, e.g. `#7`.
    pub id_label: String,
}

impl ItemDetail {
    /// Builds the display text for `item`.
    #[must_use]
    pub fn new(item: &Item) -> Self {
        Self {
            title: item.name().to_owned(),
            duration: format_duration(item.duration_days()),
            start: long_date(item.start()),
            end: long_date(item.end()),
            range: short_range(item.start(), item.end()),
            id_label: format!("#{}", item.id()),
        }
    }

    /// Three-line hover text: name, range and duration.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{}\n{}\n{}", self.title, self.range, self.duration)
    }
}

/// `1 day` for a single day, `N days` otherwise.
#[must_use]
pub fn format_duration(days: i64) -> String {
    if days == 1 {
        "1 day".to_owned()
    } else {
        format!("{days} days")
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn short_range(start: NaiveDate, end: NaiveDate) -> String {
    let first = start.format("%b %-d").to_string();
    if start == end {
        first
    } else {
        format!("{first} - {}", end.format("%b %-d"))
    }
}
