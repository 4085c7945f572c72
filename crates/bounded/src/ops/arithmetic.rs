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

use crate::error::Result;
use crate::integer::Integer;
use crate::policy::Policy;
use crate::range::{Difference, Full, Negation, Product, Quotient, Range, Remainder, Sum};
use bounded_core::num::underlying::Underlying;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

macro_rules! impl_exact_binary_op {
    ($trait_name:ident, $method:ident, $range:ident, $wide_method:ident) => {
        impl<R1: Range, R2: Range, P: Policy> $trait_name<Integer<R2, P>> for Integer<R1, P> {
            type Output = Integer<$range<R1, R2>, P>;

            #[inline(always)]
            fn $method(self, rhs: Integer<R2, P>) -> Self::Output {
                let value = self.to_wide().$wide_method(rhs.to_wide());
                // SAFETY: the derived range holds every exact result.
                unsafe { Integer::from_wide_unchecked(value) }
            }
        }
    };
}

macro_rules! impl_exact_native_op {
    ($trait_name:ident, $method:ident, $range:ident, $wide_method:ident, $($t:ty),*) => {
        $(
            impl<R: Range, P: Policy> $trait_name<$t> for Integer<R, P> {
                type Output = Integer<$range<R, Full<$t>>, P>;

                #[inline(always)]
                fn $method(self, rhs: $t) -> Self::Output {
                    let value = self.to_wide().$wide_method(rhs.to_wide());
                    // SAFETY: the derived range holds every exact result.
                    unsafe { Integer::from_wide_unchecked(value) }
                }
            }

            impl<R: Range, P: Policy> $trait_name<Integer<R, P>> for $t {
                type Output = Integer<$range<Full<$t>, R>, P>;

                #[inline(always)]
                fn $method(self, rhs: Integer<R, P>) -> Self::Output {
                    let value = self.to_wide().$wide_method(rhs.to_wide());
                    // SAFETY: the derived range holds every exact result.
                    unsafe { Integer::from_wide_unchecked(value) }
                }
            }
        )*
    };
}

impl_exact_binary_op!(Add, add, Sum, add);
impl_exact_binary_op!(Sub, sub, Difference, sub);
impl_exact_binary_op!(Mul, mul, Product, mul);

// Combined with `Full<i128>`, nearly every range leaves the `i128` domain;
// `i128` values enter through `Integer::try_new` instead.
impl_exact_native_op!(Add, add, Sum, add, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_exact_native_op!(Sub, sub, Difference, sub, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
impl_exact_native_op!(Mul, mul, Product, mul, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<R1: Range, R2: Range, P: Policy> Div<Integer<R2, P>> for Integer<R1, P> {
    type Output = Integer<Quotient<R1, R2>, P>;

    /// Divides, truncating toward zero.
    ///
    /// The divisor's range must exclude zero; use
    /// [`Integer::checked_div`] otherwise.
    #[inline(always)]
    fn div(self, rhs: Integer<R2, P>) -> Self::Output {
        const {
            assert!(
                !R2::BOUNDS.contains(0),
                "the divisor may be zero; use checked_div"
            )
        };
        // SAFETY: the divisor is non-zero and the derived range holds every
        // quotient.
        unsafe { Integer::from_wide_unchecked(self.to_wide() / rhs.to_wide()) }
    }
}

impl<R1: Range, R2: Range, P: Policy> Rem<Integer<R2, P>> for Integer<R1, P> {
    type Output = Integer<Remainder<R1, R2>, P>;

    /// Takes the remainder, which has the sign of the dividend.
    ///
    /// The divisor's range must exclude zero; use
    /// [`Integer::checked_rem`] otherwise.
    #[inline(always)]
    fn rem(self, rhs: Integer<R2, P>) -> Self::Output {
        const {
            assert!(
                !R2::BOUNDS.contains(0),
                "the divisor may be zero; use checked_rem"
            )
        };
        // SAFETY: the divisor is non-zero and the derived range holds every
        // remainder.
        unsafe { Integer::from_wide_unchecked(self.to_wide().wrapping_rem(rhs.to_wide())) }
    }
}

macro_rules! impl_native_division {
    ($($t:ty),*) => {
        $(
            impl<R: Range, P: Policy> Div<$t> for Integer<R, P> {
                type Output = Result<Integer<Quotient<R, Full<$t>>, P>>;

                /// Divides by a native value, which may be zero.
                #[inline]
                fn div(self, rhs: $t) -> Self::Output {
                    // SAFETY: `Full<$t>` holds every value of the native type.
                    let divisor: Integer<Full<$t>, P> =
                        unsafe { Integer::new_unchecked(rhs) };
                    self.checked_div(divisor)
                }
            }

            impl<R: Range, P: Policy> Rem<$t> for Integer<R, P> {
                type Output = Result<Integer<Remainder<R, Full<$t>>, P>>;

                /// Takes the remainder by a native value, which may be zero.
                #[inline]
                fn rem(self, rhs: $t) -> Self::Output {
                    // SAFETY: `Full<$t>` holds every value of the native type.
                    let divisor: Integer<Full<$t>, P> =
                        unsafe { Integer::new_unchecked(rhs) };
                    self.checked_rem(divisor)
                }
            }

            impl<R: Range, P: Policy> Div<Integer<R, P>> for $t {
                type Output = Integer<Quotient<Full<$t>, R>, P>;

                #[inline(always)]
                fn div(self, rhs: Integer<R, P>) -> Self::Output {
                    // SAFETY: `Full<$t>` holds every value of the native type.
                    let dividend: Integer<Full<$t>, P> =
                        unsafe { Integer::new_unchecked(self) };
                    dividend / rhs
                }
            }

            impl<R: Range, P: Policy> Rem<Integer<R, P>> for $t {
                type Output = Integer<Remainder<Full<$t>, R>, P>;

                #[inline(always)]
                fn rem(self, rhs: Integer<R, P>) -> Self::Output {
                    // SAFETY: `Full<$t>` holds every value of the native type.
                    let dividend: Integer<Full<$t>, P> =
                        unsafe { Integer::new_unchecked(self) };
                    dividend % rhs
                }
            }
        )*
    };
}

impl_native_division!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);

impl<R: Range, P: Policy> Neg for Integer<R, P> {
    type Output = Integer<Negation<R>, P>;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        // SAFETY: the derived range holds the negation of every value.
        unsafe { Integer::from_wide_unchecked(-self.to_wide()) }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::integer::Integer;
    use crate::policy::{Clamp, Policy, Throw, Unchecked, Wrap};
    use crate::range::{Between, Exactly, Full, Range};
    use bounded_core::math::min_max::MinMax;
    use bounded_core::num::representation::Representation;
    use bounded_core::num::underlying::Underlying;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::cell::Cell;

    thread_local! {
        static CORRECTIONS: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts every call into the policy.
    struct Counting;

    // SAFETY: forwards to the checking policy, which only passes values in
    // range.
    unsafe impl Policy for Counting {
        type Output<T> = T;

        fn correct(value: i128, bounds: MinMax) -> Result<i128, Error> {
            CORRECTIONS.with(|count| count.set(count.get() + 1));
            Unchecked::correct(value, bounds)
        }

        fn finish<T>(outcome: Result<T, Error>) -> Self::Output<T> {
            Unchecked::finish(outcome)
        }
    }

    fn repr_of<R: Range, P: Policy>(_: Integer<R, P>) -> Representation {
        <R::Repr as Underlying>::REPRESENTATION
    }

    fn bounds_of<R: Range, P: Policy>(_: Integer<R, P>) -> MinMax {
        R::BOUNDS
    }

    #[test]
    fn test_addition_derives_range_and_storage() {
        let a = Integer::<Between<0, 200, u8>>::constant::<150>();
        let b = Integer::<Between<0, 200, u8>>::constant::<100>();
        let sum = a + b;
        assert_eq!(sum, 250);
        assert_eq!(bounds_of(sum), MinMax::new(0, 400));
        assert_eq!(repr_of(sum), Representation::I16);
    }

    #[test]
    fn test_subtraction_and_multiplication() {
        let a = Integer::<Between<0, 255, u8>>::constant::<3>();
        let b = Integer::<Between<0, 255, u8>>::constant::<200>();
        let difference = a - b;
        assert_eq!(difference, -197);
        assert_eq!(bounds_of(difference), MinMax::new(-255, 255));

        let product = b * b;
        assert_eq!(product, 40000);
        assert_eq!(bounds_of(product), MinMax::new(0, 65025));
        assert_eq!(repr_of(product), Representation::I32);
    }

    #[test]
    fn test_negation_of_minimum_is_representable() {
        let value = Integer::<Full<i8>>::constant::<-128>();
        let negated = -value;
        assert_eq!(negated, 128);
        assert_eq!(bounds_of(negated), MinMax::new(-127, 128));
        assert_eq!(repr_of(negated), Representation::I16);
    }

    #[test]
    fn test_mixed_native_operands() {
        let a = Integer::<Between<1, 10, u8>>::constant::<7>();
        let sum = a + 5u8;
        assert_eq!(sum, 12);
        assert_eq!(bounds_of(sum), MinMax::new(1, 265));

        let left = 1000i16 - a;
        assert_eq!(left, 993);
        assert_eq!(bounds_of(left), MinMax::new(i16::MIN as i128 - 10, i16::MAX as i128 - 1));

        let product = a * -3i8;
        assert_eq!(product, -21);
    }

    #[test]
    fn test_widest_native_operands() {
        let a = Integer::<Between<1, 10, u8>>::constant::<10>();
        let sum = a + u64::MAX;
        assert_eq!(sum, u64::MAX as i128 + 10);
        let product = a * i64::MIN;
        assert_eq!(product, i64::MIN as i128 * 10);
        assert_eq!(bounds_of(product), MinMax::new(i64::MIN as i128 * 10, i64::MAX as i128 * 10));

        let wide = Integer::<Between<-1000, 1000, i16>>::try_new(-400i128).expect("in range");
        assert_eq!(a + wide, -390);
        assert!(Integer::<Between<-1000, 1000, i16>>::try_new(i128::MAX).is_none());
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        let a = Integer::<Between<-100, 100, i8>>::constant::<-7>();
        let b = Integer::<Between<2, 5, u8>>::constant::<2>();
        let quotient = a / b;
        assert_eq!(quotient, -3);
        assert_eq!(bounds_of(quotient), MinMax::new(-50, 50));
        let remainder = a % b;
        assert_eq!(remainder, -1);
        assert_eq!(bounds_of(remainder), MinMax::new(-4, 4));
    }

    #[test]
    fn test_division_of_minimum_by_minus_one() {
        let a = Integer::<Full<i8>>::constant::<-128>();
        let minus_one = Integer::<Exactly<-1, i8>>::constant::<-1>();
        assert_eq!(a / minus_one, 128);
        assert_eq!(a % minus_one, 0);
    }

    #[test]
    fn test_native_divisor_may_be_zero() {
        let a = Integer::<Between<0, 100, u8>>::constant::<42>();
        assert_eq!((a / 0u8).map(Integer::get), Err(Error::DivisionByZero));
        assert_eq!((a % 0i32).map(Integer::get), Err(Error::DivisionByZero));
        assert_eq!((a / 4u8).map(Integer::get), Ok(10));
        assert_eq!((a % -4i32).map(Integer::get), Ok(2));
    }

    #[test]
    fn test_native_dividend() {
        let divisor = Integer::<Between<1, 16, u8>>::constant::<3>();
        let quotient = 100u8 / divisor;
        assert_eq!(quotient, 33);
        assert_eq!(bounds_of(quotient), MinMax::new(0, 255));
        assert_eq!(100u8 % divisor, 1);
    }

    #[test]
    fn test_operators_never_consult_the_policy() {
        CORRECTIONS.with(|count| count.set(0));
        let a = Integer::<Between<-50, 50, i8>, Counting>::new(-20);
        let b = Integer::<Between<1, 9, u8>, Counting>::new(3);
        assert_eq!(CORRECTIONS.with(Cell::get), 2);

        let result = -((a + b) * b - a) / b % b;
        assert_eq!(result, -((-20 + 3) * 3 + 20) / 3 % 3);
        let _ = a.abs();
        let _ = a + 7i64;
        let _ = a / 7u16;
        assert_eq!(CORRECTIONS.with(Cell::get), 2);
    }

    #[test]
    fn test_policy_is_kept_through_operators() {
        let a = Integer::<Between<0, 10, u8>, Throw>::new(4).expect("in range");
        let sum: Integer<_, Throw> = a + a;
        assert_eq!(sum, 8);
        let a = Integer::<Between<0, 10, u8>, Wrap>::new(4);
        let sum: Integer<_, Wrap> = a * a;
        assert_eq!(sum, 16);
        let a = Integer::<Between<0, 10, u8>, Clamp>::new(4);
        let sum: Integer<_, Clamp> = -a;
        assert_eq!(sum, -4);
    }

    #[test]
    fn test_results_lie_in_derived_ranges() {
        type A = Integer<Between<-1000, 700, i16>>;
        type B = Integer<Between<3, 60, u8>>;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a = A::new(rng.random_range(-1000i16..=700));
            let b = B::new(rng.random_range(3u8..=60));
            let (x, y) = (a.to_wide(), b.to_wide());

            let sum = a + b;
            assert_eq!(sum.to_wide(), x + y);
            assert!(bounds_of(sum).contains(sum.to_wide()));
            let difference = b - a;
            assert_eq!(difference.to_wide(), y - x);
            assert!(bounds_of(difference).contains(difference.to_wide()));
            let product = a * b;
            assert_eq!(product.to_wide(), x * y);
            assert!(bounds_of(product).contains(product.to_wide()));
            let quotient = a / b;
            assert_eq!(quotient.to_wide(), x / y);
            assert!(bounds_of(quotient).contains(quotient.to_wide()));
            let remainder = a % b;
            assert_eq!(remainder.to_wide(), x % y);
            assert!(bounds_of(remainder).contains(remainder.to_wide()));
            let negated = -a;
            assert!(bounds_of(negated).contains(negated.to_wide()));
        }
    }
}
