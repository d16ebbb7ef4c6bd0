// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;
use alloc::vec::Vec;

use crate::Span;

/// A horizontal lane of non-overlapping items, ordered by start ascending.
///
/// Lanes are produced fresh by [`assign_lanes`]; they carry no identity
/// beyond their position in the returned list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lane<T> {
    items: Vec<T>,
}

impl<T: Span> Lane<T> {
    fn new(first: T) -> Self {
        Self { items: vec![first] }
    }

    /// Returns the items in this lane, in start order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the lane, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of items in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A lane produced by [`assign_lanes`] is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the items in this lane.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// End bound of the last item, the point a new item must start after.
    #[must_use]
    pub fn last_end(&self) -> Option<T::Bound> {
        self.items.last().map(|last| last.span_end())
    }

    fn accepts(&self, start: T::Bound) -> bool {
        self.last_end().is_some_and(|end| end < start)
    }
}

impl<'a, T> IntoIterator for &'a Lane<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Packs `items` into lanes of non-overlapping items.
///
/// Items are stably sorted by start, then each goes into the first lane whose
/// last item ends strictly before it starts. The output is deterministic for a
/// given input order.
#[must_use]
pub fn assign_lanes<T: Span>(items: impl IntoIterator<Item = T>) -> Vec<Lane<T>> {
    let mut sorted: Vec<T> = items.into_iter().collect();
    // `sort_by_key` is stable, which keeps input order among equal starts.
    sorted.sort_by_key(|item| item.span_start());

    let mut lanes: Vec<Lane<T>> = Vec::new();
    for item in sorted {
        let start = item.span_start();
        match lanes.iter_mut().find(|lane| lane.accepts(start)) {
            Some(lane) => lane.items.push(item),
            None => lanes.push(Lane::new(item)),
        }
    }
    lanes
}

/// Computes the lane index of every item without moving the items.
///
/// `result[i]` is the lane of `items[i]`. Lane numbering and placement are
/// identical to [`assign_lanes`] on the same input order.
#[must_use]
pub fn assign_lane_indices<T: Span>(items: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| items[i].span_start());

    let mut lane_ends: Vec<T::Bound> = Vec::new();
    let mut result = vec![0; items.len()];
    for i in order {
        let item = &items[i];
        let start = item.span_start();
        let lane = match lane_ends.iter().position(|&end| end < start) {
            Some(lane) => {
                lane_ends[lane] = item.span_end();
                lane
            }
            None => {
                lane_ends.push(item.span_end());
                lane_ends.len() - 1
            }
        };
        result[i] = lane;
    }
    result
}

/// Number of lanes [`assign_lanes`] would produce for `items`.
#[must_use]
pub fn lane_count<T: Span>(items: &[T]) -> usize {
    assign_lane_indices(items)
        .into_iter()
        .max()
        .map_or(0, |max| max + 1)
}
