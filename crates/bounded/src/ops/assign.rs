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

//! Compound assignment.
//!
//! The exact result is computed in its derived range and then stored back
//! into the left-hand range through the left-hand policy: `Clamp` and `Wrap`
//! correct it, and `Unchecked` panics on a value outside the range.
//!
//! An assignment has no way to return an error, so the operators are only
//! implemented for [`Assignable`] policies. A `Throw` integer is updated with
//! [`Integer::set`] instead:
//!
//! ```compile_fail
//! use bounded::{Between, Integer, Throw};
//!
//! let mut value = Integer::<Between<0, 10, u8>, Throw>::new(0).unwrap();
//! value -= 1u8;
//! ```

use crate::integer::Integer;
use crate::policy::Assignable;
use crate::range::Range;
use std::ops::{
    AddAssign, BitAndAssign, DivAssign, MulAssign, RemAssign, ShlAssign, ShrAssign, SubAssign,
};

macro_rules! impl_assign_op {
    ($trait_name:ident, $method:ident, $op:tt) => {
        impl<R1: Range, R2: Range, P: Assignable> $trait_name<Integer<R2, P>> for Integer<R1, P> {
            #[inline]
            #[track_caller]
            fn $method(&mut self, rhs: Integer<R2, P>) {
                let value = (*self $op rhs).to_wide();
                self.assign_wide(value);
            }
        }
    };
}

macro_rules! impl_native_assign_op {
    ($trait_name:ident, $method:ident, $op:tt, $($t:ty),*) => {
        $(
            impl<R: Range, P: Assignable> $trait_name<$t> for Integer<R, P> {
                #[inline]
                #[track_caller]
                fn $method(&mut self, rhs: $t) {
                    let value = (*self $op rhs).to_wide();
                    self.assign_wide(value);
                }
            }
        )*
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);
impl_assign_op!(RemAssign, rem_assign, %);
impl_assign_op!(BitAndAssign, bitand_assign, &);
impl_assign_op!(ShlAssign, shl_assign, <<);
impl_assign_op!(ShrAssign, shr_assign, >>);

// Combined with `Full<i128>`, nearly every range leaves the `i128` domain;
// `i128` values enter through `Integer::try_new` instead.
impl_native_assign_op!(AddAssign, add_assign, +, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_native_assign_op!(SubAssign, sub_assign, -, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_native_assign_op!(MulAssign, mul_assign, *, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::integer::Integer;
    use crate::policy::{Clamp, Throw, Wrap};
    use crate::range::Between;

    #[test]
    fn test_clamped_assignment() {
        let mut value = Integer::<Between<0, 100, u8>, Clamp>::new(90);
        value += 20u8;
        assert_eq!(value, 100);
        value -= Integer::<Between<0, 255, u8>, Clamp>::new(255);
        assert_eq!(value, 0);
        value += 7i32;
        value *= 3u8;
        assert_eq!(value, 21);
    }

    #[test]
    fn test_wrapped_assignment() {
        let mut value = Integer::<Between<0, 255, u8>, Wrap>::new(250);
        value += 10u8;
        assert_eq!(value, 4);
        value -= 5u8;
        assert_eq!(value, 255);
        value *= 2u8;
        assert_eq!(value, 254);
    }

    #[test]
    fn test_assignment_of_derived_operators() {
        let mut value = Integer::<Between<0, 1000, u16>, Clamp>::new(1000);
        let divisor = Integer::<Between<3, 7, u8>, Clamp>::new(3);
        value /= divisor;
        assert_eq!(value, 333);
        value %= divisor;
        assert_eq!(value, 0);

        let mut bits = Integer::<Between<0, 255, u8>, Wrap>::new(0b1011_0110);
        bits &= Integer::<Between<0, 15, u8>, Wrap>::new(0b1111);
        assert_eq!(bits, 0b0110);
        let amount = Integer::<Between<0, 4, u8>, Wrap>::new(4);
        bits <<= amount;
        assert_eq!(bits, 0b0110_0000);
        bits <<= amount;
        assert_eq!(bits, 0);
        let mut bits = Integer::<Between<0, 255, u8>, Wrap>::new(0b1000_0000);
        bits >>= amount;
        assert_eq!(bits, 0b1000);
    }

    #[test]
    fn test_unchecked_assignment_in_range() {
        let mut value = Integer::<Between<-10, 10, i8>>::new(-10);
        value += 15i8;
        assert_eq!(value, 5);
    }

    #[test]
    #[should_panic(expected = "got a value of 11")]
    fn test_unchecked_assignment_out_of_range() {
        let mut value = Integer::<Between<-10, 10, i8>>::new(10);
        value += 1u8;
    }

    #[test]
    fn test_throwing_set_reports_out_of_range() {
        let mut value = Integer::<Between<0, 10, u8>, Throw>::new(0).expect("in range");
        assert_eq!(
            value.set(value - 1u8),
            Err(Error::Range {
                value: -1,
                min: 0,
                max: 10
            })
        );
        assert_eq!(value, 0);

        assert_eq!(value.set(value + 7u8), Ok(()));
        assert_eq!(value, 7);
        let divisor = Integer::<Between<1, 3, u8>, Throw>::new(2).expect("in range");
        assert_eq!(
            value.set(value * divisor),
            Err(Error::Range {
                value: 14,
                min: 0,
                max: 10
            })
        );
        assert_eq!(value, 7);
    }

    #[test]
    fn test_set_applies_the_target_policy() {
        let mut clamped = Integer::<Between<0, 100, u8>, Clamp>::new(50);
        clamped.set(Integer::<Between<0, 1000, u16>, Throw>::new(400).expect("in range"));
        assert_eq!(clamped, 100);

        let mut wrapped = Integer::<Between<0, 9, u8>, Wrap>::new(0);
        wrapped.set(wrapped + 23u8);
        assert_eq!(wrapped, 3);
    }
}
