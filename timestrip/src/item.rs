// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use chrono::NaiveDate;
use hashbrown::HashSet;
use timestrip_lanes::Span;
use tracing::{debug, warn};

use crate::{DateField, TimelineError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifier of a timeline item, unique within one timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named item covering an inclusive range of calendar days.
///
/// Construction guarantees `start <= end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl Item {
    /// Creates an item, rejecting an end date before the start date.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, TimelineError> {
        if end < start {
            return Err(TimelineError::InvalidDateRange { id, start, end });
        }
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
        })
    }

    /// The item's id.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First day covered.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day covered.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, counting both ends. Always at least one.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}

impl Span for Item {
    type Bound = NaiveDate;

    fn span_start(&self) -> NaiveDate {
        self.start
    }

    fn span_end(&self) -> NaiveDate {
        self.end
    }
}

/// An item as supplied by the host, with ISO `YYYY-MM-DD` date strings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawItem {
    /// Unique id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// First day, `YYYY-MM-DD`.
    pub start: String,
    /// Last day, `YYYY-MM-DD`.
    pub end: String,
}

impl TryFrom<RawItem> for Item {
    type Error = TimelineError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let start = parse_date(raw.id, DateField::Start, &raw.start)?;
        let end = parse_date(raw.id, DateField::End, &raw.end)?;
        Self::new(raw.id, raw.name, start, end)
    }
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(id: ItemId, field: DateField, value: &str) -> Result<NaiveDate, TimelineError> {
    let invalid = || TimelineError::InvalidDate {
        id,
        field,
        value: value.to_owned(),
    };
    // chrono accepts unpadded months and days; the input format does not.
    if value.len() != 10 || !value.is_ascii() {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

/// Converts raw items, failing on the first malformed one.
///
/// Rejects unparsable dates, reversed ranges and duplicate ids.
pub fn ingest(raw: impl IntoIterator<Item = RawItem>) -> Result<Vec<Item>, TimelineError> {
    let items = raw
        .into_iter()
        .map(Item::try_from)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| warn!(%err, "rejected timeline input"))?;
    ensure_unique_ids(&items)?;
    debug!(count = items.len(), "ingested timeline items");
    Ok(items)
}

pub(crate) fn ensure_unique_ids(items: &[Item]) -> Result<(), TimelineError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.id) {
            warn!(id = %item.id, "duplicate timeline item id");
            return Err(TimelineError::DuplicateId(item.id));
        }
    }
    Ok(())
}
