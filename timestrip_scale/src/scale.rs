// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use chrono::NaiveDate;

use crate::calendar::{days_between, shift_days};

/// Linear mapping from calendar days to horizontal pixel offsets.
///
/// The origin date maps to offset `0.0`; each whole day adds `pixels_per_day`.
/// There is no sub-day precision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DayScale {
    origin: NaiveDate,
    pixels_per_day: f64,
}

impl DayScale {
    /// Creates a scale anchored at `origin` with the given density.
    #[must_use]
    pub fn new(origin: NaiveDate, pixels_per_day: f64) -> Self {
        Self {
            origin,
            pixels_per_day,
        }
    }

    /// The reference date mapped to offset zero.
    #[must_use]
    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    /// Zoom density in pixels per day.
    #[must_use]
    pub fn pixels_per_day(&self) -> f64 {
        self.pixels_per_day
    }

    /// Signed whole days from the origin to `date`.
    #[must_use]
    pub fn days_from_origin(&self, date: NaiveDate) -> i64 {
        days_between(self.origin, date)
    }

    /// Pixel offset of the start of `date`.
    #[must_use]
    pub fn offset_of(&self, date: NaiveDate) -> f64 {
        self.days_from_origin(date) as f64 * self.pixels_per_day
    }

    /// The date whose day cell contains `offset`.
    ///
    /// Non-finite offsets and non-positive densities map to the origin.
    #[must_use]
    pub fn date_at(&self, offset: f64) -> NaiveDate {
        if !offset.is_finite() || self.pixels_per_day <= 0.0 {
            return self.origin;
        }
        let days = (offset / self.pixels_per_day).floor();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "saturating cast, out of range days clamp to calendar bounds"
        )]
        let days = days as i64;
        shift_days(self.origin, days)
    }

    /// Dates with at least one pixel inside `[scroll_offset, scroll_offset + viewport_width]`.
    #[must_use]
    pub fn visible_dates(
        &self,
        scroll_offset: f64,
        viewport_width: f64,
    ) -> RangeInclusive<NaiveDate> {
        let start = scroll_offset.max(0.0);
        let end = start + viewport_width.max(0.0);
        self.date_at(start)..=self.date_at(end)
    }
}

/// Horizontal placement of an item on the scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemBox {
    /// Offset of the left edge.
    pub left: f64,
    /// Width in pixels, never below the configured minimum.
    pub width: f64,
}

impl ItemBox {
    /// Offset of the right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Places an inclusive `[start, end]` item on `scale`.
///
/// The width covers `days_between(start, end) + 1` days and is at least
/// `min_item_width` pixels.
#[must_use]
pub fn item_box(
    start: NaiveDate,
    end: NaiveDate,
    scale: &DayScale,
    min_item_width: f64,
) -> ItemBox {
    let duration = days_between(start, end) + 1;
    ItemBox {
        left: scale.offset_of(start),
        width: (duration as f64 * scale.pixels_per_day).max(min_item_width),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DayScale, item_box};

    fn jan(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn offsets_are_whole_days_times_density() {
        let scale = DayScale::new(jan(1), 30.0);
        assert_eq!(scale.offset_of(jan(1)), 0.0);
        assert_eq!(scale.offset_of(jan(11)), 300.0);
        let dec31 = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(scale.offset_of(dec31), -30.0);
    }

    #[test]
    fn single_day_item_is_one_day_wide() {
        let scale = DayScale::new(jan(1), 100.0);
        let bx = item_box(jan(1), jan(1), &scale, 20.0);
        assert_eq!(bx.left, 0.0);
        assert_eq!(bx.width, 100.0);
        assert_eq!(bx.right(), 100.0);
    }

    #[test]
    fn narrow_items_get_minimum_width() {
        let scale = DayScale::new(jan(1), 5.0);
        let bx = item_box(jan(2), jan(3), &scale, 20.0);
        assert_eq!(bx.left, 5.0);
        assert_eq!(bx.width, 20.0);
    }

    #[test]
    fn date_at_inverts_offset_of() {
        let scale = DayScale::new(jan(1), 40.0);
        for d in 1..=31 {
            let offset = scale.offset_of(jan(d));
            assert_eq!(scale.date_at(offset), jan(d));
            assert_eq!(scale.date_at(offset + 39.9), jan(d));
        }
        assert_eq!(scale.date_at(-0.5), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(scale.date_at(f64::NAN), jan(1));
    }

    #[test]
    fn visible_dates_cover_partially_shown_days() {
        let scale = DayScale::new(jan(1), 100.0);
        assert_eq!(scale.visible_dates(150.0, 300.0), jan(2)..=jan(5));
        assert_eq!(scale.visible_dates(-50.0, 100.0), jan(1)..=jan(2));
    }
}
