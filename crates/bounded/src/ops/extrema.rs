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

use crate::integer::Integer;
use crate::policy::Policy;
use crate::range::{Greater, Lesser, Range};

/// Returns the lesser of two bounded integers.
///
/// The result range spans both lower bounds up to the lesser upper bound.
///
/// # Examples
///
/// ```rust
/// use bounded::{Between, Integer};
///
/// let a = Integer::<Between<0, 10, u8>>::constant::<7>();
/// let b = Integer::<Between<-5, 5, i8>>::constant::<-2>();
/// let lesser = bounded::min(a, b); // in [-5, 5]
/// assert_eq!(lesser, -2);
/// ```
#[inline(always)]
pub fn min<R1: Range, R2: Range, P: Policy>(
    lhs: Integer<R1, P>,
    rhs: Integer<R2, P>,
) -> Integer<Lesser<R1, R2>, P> {
    let value = lhs.to_wide().min(rhs.to_wide());
    // SAFETY: the lesser operand lies in the lesser range.
    unsafe { Integer::from_wide_unchecked(value) }
}

/// Returns the greater of two bounded integers.
#[inline(always)]
pub fn max<R1: Range, R2: Range, P: Policy>(
    lhs: Integer<R1, P>,
    rhs: Integer<R2, P>,
) -> Integer<Greater<R1, R2>, P> {
    let value = lhs.to_wide().max(rhs.to_wide());
    // SAFETY: the greater operand lies in the greater range.
    unsafe { Integer::from_wide_unchecked(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::Between;
    use bounded_core::math::min_max::MinMax;

    fn bounds_of<R: Range>(_: Integer<R>) -> MinMax {
        R::BOUNDS
    }

    #[test]
    fn test_min_and_max() {
        let a = Integer::<Between<0, 10, u8>>::constant::<7>();
        let b = Integer::<Between<-5, 5, i8>>::constant::<-2>();

        let lesser = min(a, b);
        assert_eq!(lesser, -2);
        assert_eq!(bounds_of(lesser), MinMax::new(-5, 5));

        let greater = max(a, b);
        assert_eq!(greater, 7);
        assert_eq!(bounds_of(greater), MinMax::new(0, 10));
    }

    #[test]
    fn test_min_and_max_of_equal_values() {
        let a = Integer::<Between<3, 3, u8>>::constant::<3>();
        let b = Integer::<Between<0, 100, u8>>::constant::<3>();
        assert_eq!(min(a, b), 3);
        assert_eq!(max(a, b), 3);
        assert_eq!(bounds_of(max(a, b)), MinMax::new(3, 100));
    }
}
