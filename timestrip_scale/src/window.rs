// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;

use crate::DayScale;
use crate::calendar::{days_between, end_of_following_month};

/// Reference date range of a data set.
///
/// `min` is the origin of every [`DayScale`] built from the window. The axis
/// runs past `max` to [`DateWindow::axis_end`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateWindow {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateWindow {
    /// Creates a window spanning both dates, in either order.
    #[must_use]
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Smallest window covering every date, or `None` when there are none.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Option<Self> {
        dates.into_iter().fold(None, |window, date| {
            Some(match window {
                None => Self::new(date, date),
                Some(w) => Self::new(w.min.min(date), w.max.max(date)),
            })
        })
    }

    /// Earliest date; offset zero on the axis.
    #[must_use]
    pub fn min(&self) -> NaiveDate {
        self.min
    }

    /// Latest date of the data set.
    #[must_use]
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    /// Last day shown on the axis: the end of the month after `max`.
    #[must_use]
    pub fn axis_end(&self) -> NaiveDate {
        end_of_following_month(self.max)
    }

    /// Number of day cells on the axis, inclusive of both ends.
    #[must_use]
    pub fn total_days(&self) -> i64 {
        days_between(self.min, self.axis_end()) + 1
    }

    /// Total content width at the given density.
    #[must_use]
    pub fn content_width(&self, pixels_per_day: f64) -> f64 {
        self.total_days() as f64 * pixels_per_day
    }

    /// A scale anchored at this window's minimum date.
    #[must_use]
    pub fn scale(&self, pixels_per_day: f64) -> DayScale {
        DayScale::new(self.min, pixels_per_day)
    }
}
