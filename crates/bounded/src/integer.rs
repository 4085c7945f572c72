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

//! The bounded integer value type.

use crate::error::{Error, Result};
use crate::policy::{Policy, Unchecked};
use crate::range::{Absolute, Logarithm, Quotient, Range, Remainder};
use bounded_core::math::min_max::MinMax;
use bounded_core::num::underlying::{Primitive, Underlying};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// An integer whose value always lies in the range `R`.
///
/// The value is stored in `R::Repr` and is therefore exactly as large as
/// that native type. Arithmetic on bounded integers derives the range of the
/// result at compile time, so results are never checked at runtime; only
/// values entering from outside go through the overflow policy `P`.
///
/// # Examples
///
/// ```rust
/// use bounded::{Between, Clamp, Integer};
///
/// type Percent = Integer<Between<0, 100, u8>, Clamp>;
///
/// let p = Percent::new(250);
/// assert_eq!(p, 100);
///
/// let q = Percent::new(30);
/// let sum = p + q; // the range of `sum` is [0, 200]
/// assert_eq!(sum, 130);
/// ```
#[repr(transparent)]
pub struct Integer<R: Range, P: Policy = Unchecked> {
    value: R::Repr,
    marker: PhantomData<fn() -> (R, P)>,
}

impl<R: Range, P: Policy> Integer<R, P> {
    /// The range every value of this type lies in.
    pub const BOUNDS: MinMax = R::BOUNDS;

    /// Creates an `Integer` from its storage value without checking it.
    ///
    /// # Safety
    ///
    /// `value` must lie in `R::BOUNDS`. Violations are caught by a
    /// `debug_assert!` in debug builds and are undefined behavior otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer};
    ///
    /// // SAFETY: 7 lies in [0, 9].
    /// let digit = unsafe { Integer::<Between<0, 9, u8>>::new_unchecked(7) };
    /// assert_eq!(digit.get(), 7);
    /// ```
    #[inline(always)]
    pub unsafe fn new_unchecked(value: R::Repr) -> Self {
        const {
            assert!(
                R::BOUNDS.min() <= R::BOUNDS.max(),
                "the range is inverted"
            );
            assert!(
                <R::Repr as Underlying>::REPRESENTATION.contains(R::BOUNDS),
                "the storage type cannot hold every value of the range"
            )
        };
        debug_assert!(
            R::BOUNDS.contains(value.to_wide()),
            "called `Integer::new_unchecked` with a value out of range: the range is {} but the value is {}",
            R::BOUNDS,
            value
        );
        Self {
            value,
            marker: PhantomData,
        }
    }

    /// Creates an `Integer` from a wide value without checking it.
    ///
    /// # Safety
    ///
    /// `value` must lie in `R::BOUNDS`.
    #[inline(always)]
    pub(crate) unsafe fn from_wide_unchecked(value: i128) -> Self {
        // SAFETY: the caller guarantees the range, and the storage type
        // holds every value of it, so the narrowing is exact.
        unsafe { Self::new_unchecked(R::Repr::from_wide(value)) }
    }

    /// Creates an `Integer` from a runtime value, applying the policy `P`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer, Throw, Wrap};
    ///
    /// let wrapped = Integer::<Between<0, 255, u8>, Wrap>::new(-1);
    /// assert_eq!(wrapped, 255);
    ///
    /// let checked = Integer::<Between<0, 10, u8>, Throw>::new(15);
    /// assert!(checked.is_err());
    /// ```
    #[inline]
    #[track_caller]
    pub fn new<T: Primitive>(value: T) -> P::Output<Self> {
        Self::from_wide(value.to_wide())
    }

    /// Creates an `Integer` from an `i128`, applying the policy `P`.
    #[inline]
    #[track_caller]
    pub fn from_wide(value: i128) -> P::Output<Self> {
        let outcome = P::correct(value, R::BOUNDS).map(|corrected| {
            // SAFETY: `Policy::correct` only passes values inside the bounds.
            unsafe { Self::from_wide_unchecked(corrected) }
        });
        P::finish(outcome)
    }

    /// Creates an `Integer` if `value` lies in the range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer};
    ///
    /// assert!(Integer::<Between<-5, 5, i8>>::try_new(5).is_some());
    /// assert!(Integer::<Between<-5, 5, i8>>::try_new(6u64).is_none());
    /// ```
    #[inline]
    pub fn try_new<T: Primitive>(value: T) -> Option<Self> {
        Self::try_from_wide(value.to_wide())
    }

    /// Creates an `Integer` if the `i128` `value` lies in the range.
    #[inline]
    pub fn try_from_wide(value: i128) -> Option<Self> {
        if R::BOUNDS.contains(value) {
            // SAFETY: checked right above.
            Some(unsafe { Self::from_wide_unchecked(value) })
        } else {
            None
        }
    }

    /// Creates an `Integer` from a compile-time constant.
    ///
    /// Membership is checked during compilation and costs nothing at
    /// runtime.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer};
    ///
    /// let ten = Integer::<Between<0, 100, u8>>::constant::<10>();
    /// assert_eq!(ten, 10);
    /// ```
    ///
    /// A constant outside the range does not compile:
    ///
    /// ```compile_fail
    /// use bounded::{Between, Integer};
    ///
    /// let too_big = Integer::<Between<0, 100, u8>>::constant::<101>();
    /// ```
    #[inline(always)]
    pub fn constant<const V: i128>() -> Self {
        const {
            assert!(
                R::BOUNDS.contains(V),
                "the constant lies outside the range"
            )
        };
        // SAFETY: the constant was checked during compilation.
        unsafe { Self::from_wide_unchecked(V) }
    }

    /// The smallest value of the range.
    #[inline]
    pub fn min_value() -> Self {
        // SAFETY: the lower bound is in range.
        unsafe { Self::from_wide_unchecked(R::BOUNDS.min()) }
    }

    /// The largest value of the range.
    #[inline]
    pub fn max_value() -> Self {
        // SAFETY: the upper bound is in range.
        unsafe { Self::from_wide_unchecked(R::BOUNDS.max()) }
    }

    /// Returns the stored value.
    ///
    /// The optimizer is told that the value lies in the range, which lets it
    /// drop checks that the range already rules out.
    #[inline(always)]
    pub fn get(self) -> R::Repr {
        // SAFETY: every constructor establishes the range invariant.
        unsafe { std::hint::assert_unchecked(R::BOUNDS.contains(self.value.to_wide())) };
        self.value
    }

    /// Returns the value in the `i128` domain.
    #[inline(always)]
    pub fn to_wide(self) -> i128 {
        self.get().to_wide()
    }

    /// Converts to a range that contains `R`, at no runtime cost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer};
    ///
    /// let small = Integer::<Between<1, 6, u8>>::constant::<4>();
    /// let large: Integer<Between<-100, 100, i8>> = small.widen();
    /// assert_eq!(large, 4);
    /// ```
    ///
    /// Narrowing does not compile:
    ///
    /// ```compile_fail
    /// use bounded::{Between, Integer};
    ///
    /// let large = Integer::<Between<0, 100, u8>>::constant::<4>();
    /// let small: Integer<Between<1, 6, u8>> = large.widen();
    /// ```
    #[inline(always)]
    pub fn widen<R2: Range>(self) -> Integer<R2, P> {
        const {
            assert!(
                R2::BOUNDS.contains_range(R::BOUNDS),
                "the target range does not contain the source range"
            )
        };
        // SAFETY: every value of `R` is a value of `R2`.
        unsafe { Integer::from_wide_unchecked(self.to_wide()) }
    }

    /// Converts to the range `R2` if the value lies in it.
    #[inline]
    pub fn try_cast<R2: Range>(self) -> Option<Integer<R2, P>> {
        Integer::try_from_wide(self.to_wide())
    }

    /// Converts to the range `R2` and policy `Q`, applying `Q`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Clamp, Integer};
    ///
    /// let value = Integer::<Between<0, 1000, u16>>::constant::<700>();
    /// let clamped = value.convert::<Between<0, 255, u8>, Clamp>();
    /// assert_eq!(clamped, 255);
    /// ```
    #[inline]
    #[track_caller]
    pub fn convert<R2: Range, Q: Policy>(self) -> Q::Output<Integer<R2, Q>> {
        Integer::<R2, Q>::from_wide(self.to_wide())
    }

    /// Switches to the policy `Q`, keeping the range.
    #[inline(always)]
    pub fn with_policy<Q: Policy>(self) -> Integer<R, Q> {
        // SAFETY: the range is unchanged.
        unsafe { Integer::new_unchecked(self.get()) }
    }

    /// Reinterprets the value as lying in `R2` without checking it.
    ///
    /// # Safety
    ///
    /// The value must lie in `R2::BOUNDS`. Violations are caught by a
    /// `debug_assert!` in debug builds and are undefined behavior otherwise.
    #[inline(always)]
    pub unsafe fn assume_in_range<R2: Range>(self) -> Integer<R2, P> {
        // SAFETY: forwarded to the caller.
        unsafe { Integer::from_wide_unchecked(self.to_wide()) }
    }

    /// Returns the absolute value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Integer};
    ///
    /// let value = Integer::<Between<-128, 127, i8>>::constant::<-128>();
    /// assert_eq!(value.abs(), 128);
    /// ```
    #[inline(always)]
    pub fn abs(self) -> Integer<Absolute<R>, P> {
        // SAFETY: `Absolute<R>` holds the magnitude of every value of `R`.
        unsafe { Integer::from_wide_unchecked(self.to_wide().abs()) }
    }

    /// Returns `floor(log_base(self))`.
    ///
    /// Only defined when every value is positive and every base is at least
    /// two; other ranges do not compile.
    #[inline]
    pub fn log<R2: Range>(self, base: Integer<R2, P>) -> Integer<Logarithm<R, R2>, P> {
        let log = self.to_wide().ilog(base.to_wide());
        // SAFETY: `Logarithm<R, R2>` bounds the logarithm of every operand pair.
        unsafe { Integer::from_wide_unchecked(log as i128) }
    }

    /// Divides by a divisor whose range may contain zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Error, Integer};
    ///
    /// let lhs = Integer::<Between<0, 100, u8>>::constant::<42>();
    /// let zero = Integer::<Between<0, 10, u8>>::constant::<0>();
    /// let two = Integer::<Between<0, 10, u8>>::constant::<2>();
    /// assert_eq!(lhs.checked_div(zero), Err(Error::DivisionByZero));
    /// assert_eq!(lhs.checked_div(two).map(|q| q.get()), Ok(21));
    /// ```
    #[inline]
    pub fn checked_div<R2: Range>(self, rhs: Integer<R2, P>) -> Result<Integer<Quotient<R, R2>, P>> {
        let divisor = rhs.to_wide();
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        // SAFETY: `Quotient<R, R2>` bounds every quotient by a non-zero divisor.
        Ok(unsafe { Integer::from_wide_unchecked(self.to_wide() / divisor) })
    }

    /// Takes the remainder by a divisor whose range may contain zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn checked_rem<R2: Range>(
        self,
        rhs: Integer<R2, P>,
    ) -> Result<Integer<Remainder<R, R2>, P>> {
        let divisor = rhs.to_wide();
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        // SAFETY: `Remainder<R, R2>` bounds every remainder by a non-zero divisor.
        Ok(unsafe { Integer::from_wide_unchecked(self.to_wide().wrapping_rem(divisor)) })
    }

    /// Stores `value` in `self`, applying the policy `P`.
    ///
    /// This is the fallible form of compound assignment: `a.set(a + b)` does
    /// what `a += b` does, but with [`Throw`](crate::Throw) an out-of-range
    /// result comes back as an error. On failure `self` keeps its previous
    /// value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded::{Between, Error, Integer, Throw};
    ///
    /// let mut stock = Integer::<Between<0, 10, u8>, Throw>::new(3)?;
    /// stock.set(stock + 5u8)?;
    /// assert_eq!(stock, 8);
    ///
    /// assert!(stock.set(stock + 5u8).is_err());
    /// assert_eq!(stock, 8);
    /// # Ok::<(), Error>(())
    /// ```
    #[inline]
    #[track_caller]
    pub fn set<R2: Range, Q: Policy>(&mut self, value: Integer<R2, Q>) -> P::Output<()> {
        let outcome = P::correct(value.to_wide(), R::BOUNDS).map(|corrected| {
            // SAFETY: `Policy::correct` only passes values inside the bounds.
            *self = unsafe { Self::from_wide_unchecked(corrected) };
        });
        P::finish(outcome)
    }

    /// Re-applies the policy to an exact result and stores it in `self`.
    ///
    /// # Panics
    ///
    /// Panics if the policy rejects the value.
    #[inline]
    #[track_caller]
    pub(crate) fn assign_wide(&mut self, value: i128) {
        *self = match P::correct(value, R::BOUNDS) {
            // SAFETY: `Policy::correct` only passes values inside the bounds.
            Ok(corrected) => unsafe { Self::from_wide_unchecked(corrected) },
            Err(error) => panic!("{error}"),
        };
    }
}

impl<R: Range, P: Policy> Clone for Integer<R, P> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Range, P: Policy> Copy for Integer<R, P> {}

impl<R: Range, P: Policy> Hash for Integer<R, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}

impl<R1: Range, P1: Policy, R2: Range, P2: Policy> PartialEq<Integer<R2, P2>>
    for Integer<R1, P1>
{
    #[inline]
    fn eq(&self, other: &Integer<R2, P2>) -> bool {
        self.to_wide() == other.to_wide()
    }
}

impl<R: Range, P: Policy> Eq for Integer<R, P> {}

impl<R1: Range, P1: Policy, R2: Range, P2: Policy> PartialOrd<Integer<R2, P2>>
    for Integer<R1, P1>
{
    #[inline]
    fn partial_cmp(&self, other: &Integer<R2, P2>) -> Option<Ordering> {
        Some(self.to_wide().cmp(&other.to_wide()))
    }
}

impl<R: Range, P: Policy> Ord for Integer<R, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_wide().cmp(&other.to_wide())
    }
}

impl<R: Range, P: Policy> num_traits::Bounded for Integer<R, P> {
    #[inline]
    fn min_value() -> Self {
        Self::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        Self::max_value()
    }
}

impl<R: Range, P: Policy> FromStr for Integer<R, P> {
    type Err = Error;

    /// Parses a decimal integer and checks it against the range.
    ///
    /// The policy is not applied; a value outside the range is an error.
    fn from_str(s: &str) -> Result<Self> {
        let value: i128 = s.trim().parse()?;
        Self::try_from_wide(value).ok_or_else(|| Error::out_of_range(value, R::BOUNDS))
    }
}

impl<R: Range, P: Policy> std::fmt::Debug for Integer<R, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Integer").field(&self.get()).finish()
    }
}

macro_rules! impl_fmt_for {
    ($($trait_name:ident),*) => {
        $(
            impl<R: Range, P: Policy> std::fmt::$trait_name for Integer<R, P> {
                #[inline]
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::$trait_name::fmt(&self.get(), f)
                }
            }
        )*
    };
}

impl_fmt_for!(Display, LowerHex, UpperHex, Binary, Octal);

macro_rules! impl_native_conversions_for {
    ($($t:ty),*) => {
        $(
            impl<R: Range, P: Policy> From<$t> for Integer<R, P> {
                /// Converts a native value whose whole type fits the range.
                #[inline(always)]
                fn from(value: $t) -> Self {
                    const {
                        assert!(
                            R::BOUNDS.contains_range(<$t as Underlying>::REPRESENTATION.bounds()),
                            concat!("the range does not contain every ", stringify!($t))
                        )
                    };
                    // SAFETY: every value of the native type lies in the range.
                    unsafe { Self::from_wide_unchecked(value.to_wide()) }
                }
            }

            impl<R: Range, P: Policy> From<Integer<R, P>> for $t {
                /// Converts to a native type that holds the whole range.
                #[inline(always)]
                fn from(value: Integer<R, P>) -> Self {
                    const {
                        assert!(
                            <$t as Underlying>::REPRESENTATION.contains(R::BOUNDS),
                            concat!("the range does not fit into ", stringify!($t))
                        )
                    };
                    <$t as Underlying>::from_wide(value.to_wide())
                }
            }

            impl<R: Range, P: Policy> PartialEq<$t> for Integer<R, P> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.to_wide() == other.to_wide()
                }
            }

            impl<R: Range, P: Policy> PartialEq<Integer<R, P>> for $t {
                #[inline]
                fn eq(&self, other: &Integer<R, P>) -> bool {
                    self.to_wide() == other.to_wide()
                }
            }

            impl<R: Range, P: Policy> PartialOrd<$t> for Integer<R, P> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.to_wide().cmp(&other.to_wide()))
                }
            }

            impl<R: Range, P: Policy> PartialOrd<Integer<R, P>> for $t {
                #[inline]
                fn partial_cmp(&self, other: &Integer<R, P>) -> Option<Ordering> {
                    Some(self.to_wide().cmp(&other.to_wide()))
                }
            }
        )*
    };
}

impl_native_conversions_for!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

impl<R: Range, P: Policy> From<Integer<R, P>> for u128 {
    #[inline(always)]
    fn from(value: Integer<R, P>) -> Self {
        const {
            assert!(
                <u128 as Underlying>::REPRESENTATION.contains(R::BOUNDS),
                "the range does not fit into u128"
            )
        };
        value.to_wide() as u128
    }
}

/// Orders a value of the `i128` domain against any `u128`.
#[inline(always)]
fn cmp_unsigned(value: i128, other: u128) -> Ordering {
    match i128::try_from(other) {
        Ok(other) => value.cmp(&other),
        Err(_) => Ordering::Less,
    }
}

impl<R: Range, P: Policy> PartialEq<u128> for Integer<R, P> {
    #[inline]
    fn eq(&self, other: &u128) -> bool {
        cmp_unsigned(self.to_wide(), *other) == Ordering::Equal
    }
}

impl<R: Range, P: Policy> PartialEq<Integer<R, P>> for u128 {
    #[inline]
    fn eq(&self, other: &Integer<R, P>) -> bool {
        other == self
    }
}

impl<R: Range, P: Policy> PartialOrd<u128> for Integer<R, P> {
    #[inline]
    fn partial_cmp(&self, other: &u128) -> Option<Ordering> {
        Some(cmp_unsigned(self.to_wide(), *other))
    }
}

impl<R: Range, P: Policy> PartialOrd<Integer<R, P>> for u128 {
    #[inline]
    fn partial_cmp(&self, other: &Integer<R, P>) -> Option<Ordering> {
        Some(cmp_unsigned(other.to_wide(), *self).reverse())
    }
}
