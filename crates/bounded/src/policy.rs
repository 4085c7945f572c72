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

//! Overflow policies.
//!
//! A policy decides what happens when a runtime value has to be placed into a
//! bounded integer whose range it may not fit. Policies are only consulted at
//! that boundary; arithmetic between bounded integers never invokes them
//! because the range algebra already proves every result in range.

use crate::error::Error;
use bounded_core::math::min_max::MinMax;
use std::fmt::Debug;
use std::marker::PhantomData;

/// A strategy for bringing runtime values into range.
///
/// # Safety
///
/// [`Policy::correct`] must only return `Ok(value)` when `bounds` contains
/// `value`. Bounded integers are built from its output without any further
/// check.
pub unsafe trait Policy: 'static {
    /// What a policy-checked construction of a `T` produces.
    type Output<T>;

    /// Brings `value` into `bounds`, or reports why it cannot.
    fn correct(value: i128, bounds: MinMax) -> Result<i128, Error>;

    /// Turns the outcome of a construction into the policy's output.
    fn finish<T>(outcome: Result<T, Error>) -> Self::Output<T>;
}

/// A policy whose constructions produce the value itself rather than a
/// `Result`.
///
/// Compound assignment (`+=` and friends) is only available for these
/// policies. With [`Throw`], use [`Integer::set`](crate::Integer::set), which
/// hands the error back to the caller.
pub trait Assignable: Policy {}

impl Assignable for Unchecked {}
impl Assignable for Clamp {}
impl Assignable for Wrap {}

/// No correction: an out-of-range value is a contract violation.
///
/// This is the default policy. Checked construction panics on a violation;
/// the `unsafe` constructors of `Integer` skip the check entirely and only
/// assert it in debug builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unchecked;

// SAFETY: only values inside `bounds` pass.
unsafe impl Policy for Unchecked {
    type Output<T> = T;

    #[inline]
    fn correct(value: i128, bounds: MinMax) -> Result<i128, Error> {
        if bounds.contains(value) {
            Ok(value)
        } else {
            Err(Error::out_of_range(value, bounds))
        }
    }

    /// # Panics
    ///
    /// Panics if the construction failed.
    #[inline]
    #[track_caller]
    fn finish<T>(outcome: Result<T, Error>) -> T {
        match outcome {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

/// Reports an out-of-range value as an error of type `E`.
pub struct Throw<E = Error>(PhantomData<fn() -> E>);

// SAFETY: only values inside `bounds` pass.
unsafe impl<E: From<Error> + 'static> Policy for Throw<E> {
    type Output<T> = Result<T, E>;

    #[inline]
    fn correct(value: i128, bounds: MinMax) -> Result<i128, Error> {
        Unchecked::correct(value, bounds)
    }

    #[inline]
    fn finish<T>(outcome: Result<T, Error>) -> Result<T, E> {
        outcome.map_err(E::from)
    }
}

impl<E> Debug for Throw<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Throw")
    }
}

impl<E> Clone for Throw<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Throw<E> {}

impl<E> Default for Throw<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// Saturates an out-of-range value to the nearest bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Clamp;

// SAFETY: `MinMax::clamp` always lands inside `bounds`.
unsafe impl Policy for Clamp {
    type Output<T> = T;

    #[inline]
    fn correct(value: i128, bounds: MinMax) -> Result<i128, Error> {
        Ok(bounds.clamp(value))
    }

    #[inline]
    fn finish<T>(outcome: Result<T, Error>) -> T {
        match outcome {
            Ok(value) => value,
            Err(error) => unreachable!("clamping cannot fail: {error}"),
        }
    }
}

/// Wraps an out-of-range value around the range, modulo its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Wrap;

// SAFETY: `MinMax::wrap` always lands inside `bounds`.
unsafe impl Policy for Wrap {
    type Output<T> = T;

    #[inline]
    fn correct(value: i128, bounds: MinMax) -> Result<i128, Error> {
        Ok(bounds.wrap(value))
    }

    #[inline]
    fn finish<T>(outcome: Result<T, Error>) -> T {
        match outcome {
            Ok(value) => value,
            Err(error) => unreachable!("wrapping cannot fail: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i128, max: i128) -> MinMax {
        MinMax::new(min, max)
    }

    #[test]
    fn test_unchecked_passes_values_in_range() {
        assert_eq!(Unchecked::correct(5, range(0, 10)), Ok(5));
        assert_eq!(
            Unchecked::correct(11, range(0, 10)),
            Err(Error::out_of_range(11, range(0, 10)))
        );
    }

    #[test]
    #[should_panic(expected = "got a value of 11")]
    fn test_unchecked_finish_panics_on_failure() {
        Unchecked::finish::<()>(Err(Error::out_of_range(11, range(0, 10))));
    }

    #[test]
    fn test_throw_converts_error() {
        #[derive(Debug, PartialEq)]
        struct Custom(String);

        impl From<Error> for Custom {
            fn from(error: Error) -> Self {
                Custom(error.to_string())
            }
        }

        let outcome = <Throw<Custom> as Policy>::finish::<i32>(Err(Error::out_of_range(
            15,
            range(0, 10),
        )));
        assert_eq!(
            outcome,
            Err(Custom(
                "got a value of 15 but expected a value in the range [0, 10]".to_string()
            ))
        );
        assert_eq!(<Throw as Policy>::correct(10, range(0, 10)), Ok(10));
    }

    #[test]
    fn test_clamp() {
        let bounds = range(27, 567);
        assert_eq!(Clamp::correct(20, bounds), Ok(27));
        assert_eq!(Clamp::correct(1000, bounds), Ok(567));
        assert_eq!(Clamp::correct(567, bounds), Ok(567));
        assert_eq!(Clamp::correct(i128::MIN, bounds), Ok(27));
    }

    #[test]
    fn test_wrap() {
        let byte = range(0, 255);
        assert_eq!(Wrap::correct(256, byte), Ok(0));
        assert_eq!(Wrap::correct(-1, byte), Ok(255));
        assert_eq!(Wrap::correct(12, range(-5, 9)), Ok(-3));
        assert_eq!(Wrap::correct(-10, range(-5, 9)), Ok(5));
    }

    #[test]
    fn test_corrected_values_always_in_range() {
        let bounds = range(-3, 17);
        for value in -100..100 {
            for corrected in [Clamp::correct(value, bounds), Wrap::correct(value, bounds)] {
                let corrected = corrected.expect("infallible policy");
                assert!(bounds.contains(corrected), "{value} -> {corrected}");
            }
        }
    }
}
