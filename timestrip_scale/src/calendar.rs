// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Month arithmetic that saturates at the ends of chrono's calendar.

use chrono::{Datelike, Days, Months, NaiveDate};

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Last day of the month following `date`'s month.
pub(crate) fn end_of_following_month(date: NaiveDate) -> NaiveDate {
    add_months(first_of_month(date), 2)
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// `origin` shifted by a signed number of whole days.
pub(crate) fn shift_days(origin: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        origin.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        origin.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

pub(crate) fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
