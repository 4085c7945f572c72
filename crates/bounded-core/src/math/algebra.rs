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

//! Range algebra: the sound output range of every supported operator.
//!
//! Each function takes the ranges of its operands and returns the range every
//! exact result falls into, or `None` when that range does not exist in the
//! `i128` domain or the operator is not defined for the operands. All
//! functions are `const fn` so that derived ranges can be computed during
//! constant evaluation; a `None` there turns into a compile error.
//!
//! Addition, subtraction, multiplication and division are tight: both
//! endpoints are attained by some pair of operands. The remaining operators
//! are sound but may be wider than necessary.

use crate::math::min_max::MinMax;

/// Unwraps an `Option` inside a `const fn`, returning `None` on failure.
macro_rules! try_const {
    ($e:expr) => {
        match $e {
            Some(value) => value,
            None => return None,
        }
    };
}

/// Number of divisors the remainder sweep visits before it settles for the
/// conservative bound.
pub const REMAINDER_SWEEP_LIMIT: u32 = 64;

#[inline(always)]
const fn smaller(a: i128, b: i128) -> i128 {
    if a < b { a } else { b }
}

#[inline(always)]
const fn larger(a: i128, b: i128) -> i128 {
    if a > b { a } else { b }
}

#[inline(always)]
const fn corners(a: i128, b: i128, c: i128, d: i128) -> MinMax {
    MinMax::new(
        smaller(smaller(a, b), smaller(c, d)),
        larger(larger(a, b), larger(c, d)),
    )
}

/// The range of `lhs + rhs`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// let sum = algebra::add(MinMax::new(1, 10), MinMax::new(-3, 3));
/// assert_eq!(sum, Some(MinMax::new(-2, 13)));
/// assert_eq!(algebra::add(MinMax::new(0, i128::MAX), MinMax::new(0, 1)), None);
/// ```
#[inline]
pub const fn add(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    let min = try_const!(lhs.min().checked_add(rhs.min()));
    let max = try_const!(lhs.max().checked_add(rhs.max()));
    Some(MinMax::new(min, max))
}

/// The range of `lhs - rhs`.
#[inline]
pub const fn sub(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    let min = try_const!(lhs.min().checked_sub(rhs.max()));
    let max = try_const!(lhs.max().checked_sub(rhs.min()));
    Some(MinMax::new(min, max))
}

/// The range of `lhs * rhs`, taken over all four corner products.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// let product = algebra::mul(MinMax::new(-3, 2), MinMax::new(-5, 4));
/// assert_eq!(product, Some(MinMax::new(-12, 15)));
/// ```
#[inline]
pub const fn mul(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    let a = try_const!(lhs.min().checked_mul(rhs.min()));
    let b = try_const!(lhs.min().checked_mul(rhs.max()));
    let c = try_const!(lhs.max().checked_mul(rhs.min()));
    let d = try_const!(lhs.max().checked_mul(rhs.max()));
    Some(corners(a, b, c, d))
}

/// The quotients of `lhs` over a divisor part `[low, high]` that does not
/// contain zero. Truncating division is monotone in each operand there, so
/// the corners bound it.
const fn quotient_corners(lhs: MinMax, low: i128, high: i128) -> Option<MinMax> {
    let a = try_const!(lhs.min().checked_div(low));
    let b = try_const!(lhs.min().checked_div(high));
    let c = try_const!(lhs.max().checked_div(low));
    let d = try_const!(lhs.max().checked_div(high));
    Some(corners(a, b, c, d))
}

/// The range of `lhs / rhs` (truncating), over every non-zero divisor in
/// `rhs`.
///
/// Returns `None` if `rhs` is exactly `[0, 0]` or the quotient overflows,
/// which only happens for `i128::MIN / -1`. Whether a zero divisor is
/// acceptable at runtime is the caller's decision; this function only
/// describes the non-zero divisors.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// let quotient = algebra::div(MinMax::new(1, 10), MinMax::new(-3, 11));
/// assert_eq!(quotient, Some(MinMax::new(-10, 10)));
/// assert_eq!(algebra::div(MinMax::new(1, 10), MinMax::singleton(0)), None);
/// ```
pub const fn div(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    let negative = if rhs.min() < 0 {
        let high = if rhs.max() < 0 { rhs.max() } else { -1 };
        Some(try_const!(quotient_corners(lhs, rhs.min(), high)))
    } else {
        None
    };
    let positive = if rhs.max() > 0 {
        let low = if rhs.min() > 0 { rhs.min() } else { 1 };
        Some(try_const!(quotient_corners(lhs, low, rhs.max())))
    } else {
        None
    };
    match (negative, positive) {
        (Some(negative), Some(positive)) => Some(negative.hull(positive)),
        (Some(range), None) | (None, Some(range)) => Some(range),
        (None, None) => None,
    }
}

/// A range of magnitudes, used by the remainder computation.
#[derive(Clone, Copy)]
struct Magnitude {
    min: u128,
    max: u128,
}

const fn modulo_round(dividend: Magnitude, divisor: u128) -> Magnitude {
    if dividend.min / divisor == dividend.max / divisor {
        Magnitude {
            min: dividend.min % divisor,
            max: dividend.max % divisor,
        }
    } else {
        Magnitude {
            min: 0,
            max: divisor - 1,
        }
    }
}

const fn magnitude_remainder(dividend: Magnitude, divisor: Magnitude) -> Magnitude {
    if divisor.min > dividend.max {
        return dividend;
    }

    let mut current = Magnitude {
        min: u128::MAX,
        max: 0,
    };
    let mut candidate = divisor.min;
    let mut visited = 0;
    loop {
        if visited == REMAINDER_SWEEP_LIMIT {
            let cap = if dividend.max < divisor.max - 1 {
                dividend.max
            } else {
                divisor.max - 1
            };
            return Magnitude { min: 0, max: cap };
        }

        // Every larger divisor leaves the dividend untouched.
        let round = if candidate > dividend.max {
            dividend
        } else {
            modulo_round(dividend, candidate)
        };
        if round.min < current.min {
            current.min = round.min;
        }
        if round.max > current.max {
            current.max = round.max;
        }

        let saturated = current.min == 0
            && (current.max == divisor.max - 1 || current.max == dividend.max);
        if saturated || candidate > dividend.max || candidate == divisor.max {
            return current;
        }
        candidate += 1;
        visited += 1;
    }
}

#[inline(always)]
const fn negated_magnitude(magnitude: u128) -> i128 {
    0i128.wrapping_sub(magnitude as i128)
}

/// The range of `lhs % rhs` (truncating; the sign follows the dividend).
///
/// Divisors are swept from the smallest magnitude upwards, which keeps the
/// result tight for narrow divisor ranges. Past [`REMAINDER_SWEEP_LIMIT`]
/// divisors the bound falls back to `[0, min(|lhs|, |rhs| - 1)]` per sign.
///
/// Returns `None` if `rhs` is exactly `[0, 0]`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// assert_eq!(
///     algebra::rem(MinMax::new(73, 76), MinMax::new(7, 8)),
///     Some(MinMax::new(1, 6))
/// );
/// assert_eq!(
///     algebra::rem(MinMax::new(-54, -6), MinMax::new(17, 23)),
///     Some(MinMax::new(-22, 0))
/// );
/// ```
pub const fn rem(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    if rhs.min() == 0 && rhs.max() == 0 {
        return None;
    }

    let divisor = if rhs.min() > 0 {
        Magnitude {
            min: rhs.min() as u128,
            max: rhs.max() as u128,
        }
    } else if rhs.max() < 0 {
        Magnitude {
            min: rhs.max().unsigned_abs(),
            max: rhs.min().unsigned_abs(),
        }
    } else {
        let low = rhs.min().unsigned_abs();
        let high = rhs.max() as u128;
        Magnitude {
            min: 1,
            max: if low > high { low } else { high },
        }
    };

    let has_negative = lhs.min() < 0;
    let has_positive = lhs.max() > 0;

    let negative = magnitude_remainder(
        Magnitude {
            min: if lhs.max() < 0 {
                lhs.max().unsigned_abs()
            } else {
                0
            },
            max: if has_negative {
                lhs.min().unsigned_abs()
            } else {
                0
            },
        },
        divisor,
    );
    let positive = magnitude_remainder(
        Magnitude {
            min: if lhs.min() > 0 { lhs.min() as u128 } else { 0 },
            max: if has_positive { lhs.max() as u128 } else { 0 },
        },
        divisor,
    );

    let min = if has_negative {
        negated_magnitude(negative.max)
    } else {
        positive.min as i128
    };
    let max = if has_positive {
        positive.max as i128
    } else {
        negated_magnitude(negative.min)
    };
    Some(MinMax::new(min, max))
}

/// The range of `-value`.
///
/// Returns `None` only when `value` contains `i128::MIN`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// assert_eq!(algebra::neg(MinMax::new(-128, 127)), Some(MinMax::new(-127, 128)));
/// ```
#[inline]
pub const fn neg(value: MinMax) -> Option<MinMax> {
    let min = try_const!(value.max().checked_neg());
    let max = try_const!(value.min().checked_neg());
    Some(MinMax::new(min, max))
}

/// The range of `|value|`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// assert_eq!(algebra::abs(MinMax::new(-7, 3)), Some(MinMax::new(0, 7)));
/// assert_eq!(algebra::abs(MinMax::new(-7, -3)), Some(MinMax::new(3, 7)));
/// ```
#[inline]
pub const fn abs(value: MinMax) -> Option<MinMax> {
    if value.min() >= 0 {
        return Some(value);
    }
    if value.max() <= 0 {
        return neg(value);
    }
    let low = try_const!(value.min().checked_neg());
    Some(MinMax::new(0, larger(low, value.max())))
}

/// The range of `lhs & rhs`, defined for non-negative operands only.
///
/// The bound `[0, min(lhs.max, rhs.max)]` is deliberately loose; the bits of
/// the two maxima are not inspected.
#[inline]
pub const fn bitand(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    if lhs.min() < 0 || rhs.min() < 0 {
        return None;
    }
    Some(MinMax::new(0, smaller(lhs.max(), rhs.max())))
}

#[inline(always)]
const fn shifted_left(value: i128, amount: i128) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    if amount >= 127 {
        return None;
    }
    value.checked_mul(1 << amount as u32)
}

/// The range of `lhs << rhs`, `[lhs.min << rhs.min, lhs.max << rhs.max]`.
///
/// Both operands must be non-negative and every shifted value must stay in
/// the `i128` domain; otherwise `None` is returned.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// assert_eq!(
///     algebra::shl(MinMax::new(1, 3), MinMax::new(2, 4)),
///     Some(MinMax::new(4, 48))
/// );
/// assert_eq!(algebra::shl(MinMax::new(-1, 3), MinMax::new(0, 1)), None);
/// ```
#[inline]
pub const fn shl(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    if lhs.min() < 0 || rhs.min() < 0 {
        return None;
    }
    let min = try_const!(shifted_left(lhs.min(), rhs.min()));
    let max = try_const!(shifted_left(lhs.max(), rhs.max()));
    Some(MinMax::new(min, max))
}

/// The range of `lhs >> rhs`, `[lhs.min >> rhs.max, lhs.max >> rhs.min]`.
///
/// Both operands must be non-negative. Shift amounts past the width of the
/// domain shift every bit out.
#[inline]
pub const fn shr(lhs: MinMax, rhs: MinMax) -> Option<MinMax> {
    if lhs.min() < 0 || rhs.min() < 0 {
        return None;
    }
    let min = lhs.min() >> smaller(rhs.max(), 127) as u32;
    let max = lhs.max() >> smaller(rhs.min(), 127) as u32;
    Some(MinMax::new(min, max))
}

/// The range of the lesser of two operands.
#[inline]
pub const fn lesser(lhs: MinMax, rhs: MinMax) -> MinMax {
    MinMax::new(
        smaller(lhs.min(), rhs.min()),
        smaller(lhs.max(), rhs.max()),
    )
}

/// The range of the greater of two operands.
#[inline]
pub const fn greater(lhs: MinMax, rhs: MinMax) -> MinMax {
    MinMax::new(larger(lhs.min(), rhs.min()), larger(lhs.max(), rhs.max()))
}

/// The range of `floor(log_base(value))`.
///
/// Requires every value to be positive and every base to be at least two.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::{algebra, min_max::MinMax};
/// assert_eq!(
///     algebra::log(MinMax::new(1, 1024), MinMax::new(2, 10)),
///     Some(MinMax::new(0, 10))
/// );
/// ```
#[inline]
pub const fn log(value: MinMax, base: MinMax) -> Option<MinMax> {
    if value.min() < 1 || base.min() < 2 {
        return None;
    }
    Some(MinMax::new(
        value.min().ilog(base.max()) as i128,
        value.max().ilog(base.min()) as i128,
    ))
}
