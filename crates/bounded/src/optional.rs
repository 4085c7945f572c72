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

//! Optional values without a discriminant.
//!
//! A bounded integer whose range is a strict subset of its storage type
//! leaves some bit patterns unused. [`Optional`] stores one of those spare
//! patterns to mean "no value", so `Optional<Integer<..>>` is exactly as
//! large as the integer itself.

use crate::integer::Integer;
use crate::policy::Policy;
use crate::range::Range;
use bounded_core::num::underlying::Underlying;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

/// A type with bit patterns that never hold a valid value.
///
/// # Safety
///
/// `tombstone(i)` must return a distinct raw value for every
/// `i < SPARE_REPRESENTATIONS`, none of which is the raw form of a valid
/// value. `tombstone_index` must return `None` exactly for raw values that
/// `into_raw` can produce, and invert `tombstone` otherwise.
pub unsafe trait Tombstone: Copy {
    /// The raw storage of the type.
    type Raw: Copy;

    /// How many raw values never hold a valid value.
    const SPARE_REPRESENTATIONS: u128;

    /// The `index`-th spare raw value.
    ///
    /// `index` must be less than [`Tombstone::SPARE_REPRESENTATIONS`].
    fn tombstone(index: u128) -> Self::Raw;

    /// The index of a spare raw value, or `None` for a valid one.
    fn tombstone_index(raw: Self::Raw) -> Option<u128>;

    /// Returns the raw form of the value.
    fn into_raw(self) -> Self::Raw;

    /// Rebuilds a value from its raw form.
    ///
    /// # Safety
    ///
    /// `tombstone_index(raw)` must be `None`.
    unsafe fn from_raw(raw: Self::Raw) -> Self;
}

/// The distance of the range's bounds from the smallest storage value.
#[inline(always)]
const fn offsets<R: Range>() -> (u128, u128) {
    let representation_min = <R::Repr as Underlying>::REPRESENTATION.min() as u128;
    (
        (R::BOUNDS.min() as u128).wrapping_sub(representation_min),
        (R::BOUNDS.max() as u128).wrapping_sub(representation_min),
    )
}

// SAFETY: spare raw values are the storage offsets below the lower bound
// followed by those above the upper bound, which no valid value occupies.
unsafe impl<R: Range, P: Policy> Tombstone for Integer<R, P> {
    type Raw = R::Repr;

    const SPARE_REPRESENTATIONS: u128 = {
        let bits = <R::Repr as Underlying>::REPRESENTATION.bits();
        let span = u128::MAX >> (128 - bits);
        let (min, max) = offsets::<R>();
        span - (max - min)
    };

    #[inline]
    fn tombstone(index: u128) -> R::Repr {
        debug_assert!(
            index < Self::SPARE_REPRESENTATIONS,
            "called `Tombstone::tombstone` with index {} but only {} spare representations exist",
            index,
            Self::SPARE_REPRESENTATIONS
        );
        let (min, max) = offsets::<R>();
        let offset = if index < min {
            index
        } else {
            max + 1 + (index - min)
        };
        R::Repr::from_offset(offset)
    }

    #[inline]
    fn tombstone_index(raw: R::Repr) -> Option<u128> {
        let (min, max) = offsets::<R>();
        let offset = raw.to_offset();
        if offset < min {
            Some(offset)
        } else if offset > max {
            Some(min + (offset - max - 1))
        } else {
            None
        }
    }

    #[inline(always)]
    fn into_raw(self) -> R::Repr {
        self.get()
    }

    #[inline(always)]
    unsafe fn from_raw(raw: R::Repr) -> Self {
        // SAFETY: a raw value without a tombstone index lies in the range.
        unsafe { Self::new_unchecked(raw) }
    }
}

/// An optional value stored in a spare representation of `T`.
///
/// # Examples
///
/// ```rust
/// use bounded::{Between, Integer, Optional};
///
/// type Weekday = Integer<Between<0, 6, u8>>;
///
/// let mut day = Optional::<Weekday>::none();
/// assert_eq!(size_of_val(&day), 1);
/// assert!(day.is_none());
///
/// day.insert(Weekday::constant::<3>());
/// assert_eq!(day.get(), Some(Weekday::constant::<3>()));
/// ```
#[repr(transparent)]
pub struct Optional<T: Tombstone> {
    raw: T::Raw,
}

impl<T: Tombstone> Optional<T> {
    /// Returns the empty value.
    #[inline(always)]
    pub fn none() -> Self {
        const {
            assert!(
                T::SPARE_REPRESENTATIONS > 0,
                "the type has no spare representation; use `Option` instead"
            )
        };
        Self {
            raw: T::tombstone(0),
        }
    }

    /// Wraps a present value.
    #[inline(always)]
    pub fn some(value: T) -> Self {
        Self {
            raw: value.into_raw(),
        }
    }

    /// Converts from an `Option`.
    #[inline]
    pub fn new(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::some(value),
            None => Self::none(),
        }
    }

    /// Returns the value, if present.
    #[inline]
    pub fn get(&self) -> Option<T> {
        match T::tombstone_index(self.raw) {
            Some(_) => None,
            // SAFETY: the raw value is not a tombstone.
            None => Some(unsafe { T::from_raw(self.raw) }),
        }
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        T::tombstone_index(self.raw).is_none()
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Takes the value out, leaving the empty value behind.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).get()
    }

    /// Stores `value`, returning the previous value.
    #[inline]
    pub fn replace(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Self::some(value)).get()
    }

    /// Stores `value`, discarding the previous value.
    #[inline]
    pub fn insert(&mut self, value: T) {
        *self = Self::some(value);
    }

    /// Maps the value, if present.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        self.get().map(f)
    }

    /// Returns the value, or `default` if empty.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        self.get().unwrap_or(default)
    }
}

impl<T: Tombstone> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::none()
    }
}

impl<T: Tombstone> Clone for Optional<T> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Tombstone> Copy for Optional<T> {}

impl<T: Tombstone> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T: Tombstone> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.get()
    }
}

impl<T: Tombstone + PartialEq> PartialEq for Optional<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Tombstone + Eq> Eq for Optional<T> {}

impl<T: Tombstone + Hash> Hash for Optional<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<T: Tombstone + Debug> Debug for Optional<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.get().fmt(f)
    }
}
