// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

/// An item occupying an inclusive `[start, end]` range on a timeline axis.
pub trait Span {
    /// Bound type, for example a calendar date or a day index.
    type Bound: Ord + Copy;

    /// First point covered by the item.
    fn span_start(&self) -> Self::Bound;

    /// Last point covered by the item (inclusive).
    fn span_end(&self) -> Self::Bound;
}

impl<B: Ord + Copy> Span for RangeInclusive<B> {
    type Bound = B;

    fn span_start(&self) -> B {
        *self.start()
    }

    fn span_end(&self) -> B {
        *self.end()
    }
}

impl<T: Span + ?Sized> Span for &T {
    type Bound = T::Bound;

    fn span_start(&self) -> Self::Bound {
        (**self).span_start()
    }

    fn span_end(&self) -> Self::Bound {
        (**self).span_end()
    }
}
