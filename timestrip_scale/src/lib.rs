// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestrip Scale: the calendar-day coordinate model of a timeline.
//!
//! A [`DayScale`] maps calendar dates onto a horizontal pixel axis with whole-day
//! granularity: `offset = days_between(origin, date) * pixels_per_day`. Every
//! geometric output of this crate goes through that single function, so item
//! boxes and axis marks never drift apart.
//!
//! - [`DateWindow`]: the reference range of a data set. Its minimum date is the
//!   scale origin; its axis extends to the end of the month following the
//!   maximum date so at least one trailing month is always visible.
//! - [`item_box`]: horizontal placement of an inclusive `[start, end]` item.
//! - [`axis_marks`]: month and day marks across the window.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use timestrip_scale::{DateWindow, axis_marks, item_box};
//!
//! let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let window = DateWindow::new(jan(1), jan(10));
//! let scale = window.scale(100.0);
//!
//! let bx = item_box(jan(3), jan(5), &scale, 20.0);
//! assert_eq!(bx.left, 200.0);
//! assert_eq!(bx.width, 300.0);
//!
//! // January, plus the month following the last date.
//! let marks = axis_marks(&window, 100.0);
//! assert_eq!(marks.months.len(), 2);
//! assert_eq!(marks.months[1].label, "February 2024");
//! // Jan 1 through Feb 29.
//! assert_eq!(marks.days.len(), 60);
//! assert_eq!(window.content_width(100.0), 6000.0);
//! ```
//!
//! All outputs are pure functions of their inputs.

mod axis;
mod calendar;
mod scale;
mod window;

pub use axis::{AxisMarks, DayMark, MonthMark, axis_marks};
pub use scale::{DayScale, ItemBox, item_box};
pub use window::DateWindow;
