// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::iter::FusedIterator;

/// A closed range `[min, max]` over the 128-bit signed integer domain.
///
/// `MinMax` is the descriptor every compile-time range computation works
/// with. All of its queries are `const fn`, so a range can be derived,
/// compared and validated inside a `const` item.
///
/// # Invariants
/// `min` must always be less than or equal to `max`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinMax {
    min: i128,
    max: i128,
}

/// An iterator over the integer points contained within a `MinMax`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::min_max::MinMax;
///
/// let range = MinMax::new(1, 4);
/// let points: Vec<_> = range.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct MinMaxIterator {
    current: i128,
    last: i128,
    exhausted: bool,
}

impl Iterator for MinMaxIterator {
    type Item = i128;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.current;
        if self.current == self.last {
            self.exhausted = true;
        } else {
            self.current += 1;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = (self.last.wrapping_sub(self.current) as u128).checked_add(1);
        match remaining.and_then(|r| usize::try_from(r).ok()) {
            Some(r) => (r, Some(r)),
            None => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for MinMaxIterator {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.last;
        if self.current == self.last {
            self.exhausted = true;
        } else {
            self.last -= 1;
        }
        Some(result)
    }
}

impl FusedIterator for MinMaxIterator {}

impl MinMax {
    /// Creates a new `MinMax`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`. In a `const` context this is a compile error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let range = MinMax::new(0, 10);
    /// assert_eq!(range.count(), Some(11));
    /// ```
    #[inline]
    pub const fn new(min: i128, max: i128) -> Self {
        assert!(
            min <= max,
            "Invalid range: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates a new `MinMax` if the inputs are valid.
    ///
    /// Returns `None` if `min > max`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// assert!(MinMax::try_new(0, 10).is_some());
    /// assert!(MinMax::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub const fn try_new(min: i128, max: i128) -> Option<Self> {
        if min <= max {
            Some(Self { min, max })
        } else {
            None
        }
    }

    /// Creates a new `MinMax` without checking invariants in release builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `min <= max`. Bounded integers trust the order
    /// of their range; a `debug_assert!` catches violations during
    /// development.
    #[inline]
    pub const unsafe fn new_unchecked(min: i128, max: i128) -> Self {
        debug_assert!(
            min <= max,
            "Invalid range: min must be less than or equal to max"
        );
        Self { min, max }
    }

    /// Creates the single-value range `[value, value]`.
    #[inline]
    pub const fn singleton(value: i128) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Returns the smallest value of the range.
    #[inline]
    pub const fn min(&self) -> i128 {
        self.min
    }

    /// Returns the largest value of the range.
    #[inline]
    pub const fn max(&self) -> i128 {
        self.max
    }

    /// Returns `true` if the range holds exactly one value.
    #[inline]
    pub const fn is_singleton(&self) -> bool {
        self.min == self.max
    }

    /// Returns the number of values in the range.
    ///
    /// Returns `None` only for the full `i128` domain, whose size is `2^128`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// assert_eq!(MinMax::new(-5, 9).count(), Some(15));
    /// assert_eq!(MinMax::new(i128::MIN, i128::MAX).count(), None);
    /// ```
    #[inline]
    pub const fn count(&self) -> Option<u128> {
        (self.max.wrapping_sub(self.min) as u128).checked_add(1)
    }

    /// Returns `true` if `value` lies in `[min, max]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let range = MinMax::new(0, 10);
    /// assert!(range.contains(0));
    /// assert!(range.contains(10));
    /// assert!(!range.contains(11));
    /// ```
    #[inline]
    pub const fn contains(&self, value: i128) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if every value of `other` lies in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let a = MinMax::new(0, 10);
    /// assert!(a.contains_range(MinMax::new(2, 8)));
    /// assert!(!a.contains_range(MinMax::new(-1, 8)));
    /// ```
    #[inline]
    pub const fn contains_range(&self, other: Self) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// Returns `true` if the two ranges share at least one value.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Calculates the intersection of two ranges.
    ///
    /// Returns `None` if the ranges are disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let a = MinMax::new(0, 10);
    /// let b = MinMax::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(MinMax::new(5, 10)));
    /// ```
    #[inline]
    pub const fn intersection(&self, other: Self) -> Option<Self> {
        let min = if self.min > other.min { self.min } else { other.min };
        let max = if self.max < other.max { self.max } else { other.max };
        Self::try_new(min, max)
    }

    /// Returns the smallest range covering both `self` and `other`.
    ///
    /// Unlike a set union this never fails; a gap between the two ranges is
    /// covered as well.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let a = MinMax::new(0, 2);
    /// let b = MinMax::new(8, 9);
    /// assert_eq!(a.hull(b), MinMax::new(0, 9));
    /// ```
    #[inline]
    pub const fn hull(&self, other: Self) -> Self {
        let min = if self.min < other.min { self.min } else { other.min };
        let max = if self.max > other.max { self.max } else { other.max };
        Self { min, max }
    }

    /// Saturates `value` into the range.
    #[inline]
    pub const fn clamp(&self, value: i128) -> i128 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Reduces `value` into the range modulo the range size.
    ///
    /// This is the fixed-width wrap-around rule generalized to an arbitrary
    /// range: the result is `((value - min) mod count) + min` with a
    /// non-negative modulus.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    ///
    /// let byte = MinMax::new(0, 255);
    /// assert_eq!(byte.wrap(256), 0);
    /// assert_eq!(byte.wrap(-1), 255);
    /// assert_eq!(MinMax::new(-5, 9).wrap(12), -3);
    /// ```
    #[inline]
    pub const fn wrap(&self, value: i128) -> i128 {
        let size = match self.count() {
            Some(size) => size,
            // Every i128 is already inside the full domain.
            None => return value,
        };
        if value >= self.min {
            let offset = value.wrapping_sub(self.min) as u128;
            self.min.wrapping_add((offset % size) as i128)
        } else {
            let offset = self.min.wrapping_sub(value) as u128;
            let remainder = offset % size;
            if remainder == 0 {
                self.min
            } else {
                self.min.wrapping_add((size - remainder) as i128)
            }
        }
    }

    /// Returns an iterator over every value in the range, in ascending order.
    #[inline]
    pub fn iter(&self) -> MinMaxIterator {
        MinMaxIterator {
            current: self.min,
            last: self.max,
            exhausted: false,
        }
    }
}

impl std::fmt::Debug for MinMax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinMax")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish()
    }
}

impl std::fmt::Display for MinMax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl std::ops::RangeBounds<i128> for MinMax {
    fn start_bound(&self) -> std::ops::Bound<&i128> {
        std::ops::Bound::Included(&self.min)
    }

    fn end_bound(&self) -> std::ops::Bound<&i128> {
        std::ops::Bound::Included(&self.max)
    }
}

impl IntoIterator for MinMax {
    type Item = i128;
    type IntoIter = MinMaxIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The error returned when converting a `RangeInclusive` whose start lies
/// above its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid range: min {min} exceeds max {max}")]
pub struct InvertedRange {
    /// The start of the rejected range.
    pub min: i128,
    /// The end of the rejected range.
    pub max: i128,
}

impl TryFrom<std::ops::RangeInclusive<i128>> for MinMax {
    type Error = InvertedRange;

    /// Converts `start..=end`, rejecting empty ranges.
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::{InvertedRange, MinMax};
    /// assert_eq!(MinMax::try_from(-2..=7), Ok(MinMax::new(-2, 7)));
    /// assert_eq!(MinMax::try_from(5..=0), Err(InvertedRange { min: 5, max: 0 }));
    /// ```
    #[inline]
    fn try_from(range: std::ops::RangeInclusive<i128>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        Self::try_new(min, max).ok_or(InvertedRange { min, max })
    }
}

impl From<MinMax> for std::ops::RangeInclusive<i128> {
    #[inline]
    fn from(range: MinMax) -> Self {
        range.min..=range.max
    }
}
