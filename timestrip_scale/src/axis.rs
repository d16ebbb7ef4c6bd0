// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::DateWindow;
use crate::calendar::{add_months, first_of_month};

/// A month boundary on the axis.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthMark {
    /// First day of the month.
    pub date: NaiveDate,
    /// Pixel offset, clamped at zero for a month that starts before the origin.
    pub offset: f64,
    /// Full month name and year, e.g. `January 2024`.
    pub label: String,
}

/// A single day cell on the axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DayMark {
    /// The day.
    pub date: NaiveDate,
    /// Pixel offset of the day's left edge.
    pub offset: f64,
    /// Day of the week.
    pub weekday: Weekday,
    /// Day of the month, starting at 1.
    pub day: u32,
}

impl DayMark {
    /// Abbreviated weekday name, e.g. `Mon`.
    #[must_use]
    pub fn weekday_label(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

/// Month and day marks for one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisMarks {
    /// One mark per calendar month, from the origin's month through the month after the last date.
    pub months: Vec<MonthMark>,
    /// One mark per day, from the origin through [`DateWindow::axis_end`].
    pub days: Vec<DayMark>,
}

/// Generates the axis marks of `window` at the given density.
#[must_use]
pub fn axis_marks(window: &DateWindow, pixels_per_day: f64) -> AxisMarks {
    AxisMarks {
        months: month_marks(window, pixels_per_day),
        days: day_marks(window, pixels_per_day),
    }
}

fn month_marks(window: &DateWindow, pixels_per_day: f64) -> Vec<MonthMark> {
    let scale = window.scale(pixels_per_day);
    let Some(last) = add_months(first_of_month(window.max()), 1) else {
        return Vec::new();
    };

    let mut marks = Vec::new();
    let mut current = first_of_month(window.min());
    while current <= last {
        marks.push(MonthMark {
            date: current,
            offset: scale.offset_of(current).max(0.0),
            label: current.format("%B %Y").to_string(),
        });
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    marks
}

fn day_marks(window: &DateWindow, pixels_per_day: f64) -> Vec<DayMark> {
    let scale = window.scale(pixels_per_day);
    let end = window.axis_end();

    let mut marks = Vec::new();
    let mut current = window.min();
    while current <= end {
        marks.push(DayMark {
            date: current,
            offset: scale.offset_of(current),
            weekday: current.weekday(),
            day: current.day(),
        });
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    marks
}
