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
use crate::range::{Conjunction, Full, LeftShift, Range, RightShift};
use bounded_core::num::underlying::Underlying;
use std::ops::{BitAnd, Shl, Shr};

impl<R1: Range, R2: Range, P: Policy> BitAnd<Integer<R2, P>> for Integer<R1, P> {
    type Output = Integer<Conjunction<R1, R2>, P>;

    #[inline(always)]
    fn bitand(self, rhs: Integer<R2, P>) -> Self::Output {
        // SAFETY: both operands are non-negative, so the conjunction lies in
        // `[0, min(lhs.max, rhs.max)]`.
        unsafe { Integer::from_wide_unchecked(self.to_wide() & rhs.to_wide()) }
    }
}

macro_rules! impl_native_bitand {
    ($($t:ty),*) => {
        $(
            impl<R: Range, P: Policy> BitAnd<$t> for Integer<R, P> {
                type Output = Integer<Conjunction<R, Full<$t>>, P>;

                #[inline(always)]
                fn bitand(self, rhs: $t) -> Self::Output {
                    // SAFETY: see the bounded operand form.
                    unsafe { Integer::from_wide_unchecked(self.to_wide() & rhs.to_wide()) }
                }
            }

            impl<R: Range, P: Policy> BitAnd<Integer<R, P>> for $t {
                type Output = Integer<Conjunction<Full<$t>, R>, P>;

                #[inline(always)]
                fn bitand(self, rhs: Integer<R, P>) -> Self::Output {
                    // SAFETY: see the bounded operand form.
                    unsafe { Integer::from_wide_unchecked(self.to_wide() & rhs.to_wide()) }
                }
            }
        )*
    };
}

// Signed native types always include negative values.
impl_native_bitand!(u8, u16, u32, u64, usize);

impl<R1: Range, R2: Range, P: Policy> Shl<Integer<R2, P>> for Integer<R1, P> {
    type Output = Integer<LeftShift<R1, R2>, P>;

    #[inline(always)]
    fn shl(self, rhs: Integer<R2, P>) -> Self::Output {
        let value = self.to_wide();
        // Only zero may be shifted past the width of the domain.
        let shifted = if value == 0 {
            0
        } else {
            value << rhs.to_wide() as u32
        };
        // SAFETY: the derived range holds every shifted value.
        unsafe { Integer::from_wide_unchecked(shifted) }
    }
}

impl<R1: Range, R2: Range, P: Policy> Shr<Integer<R2, P>> for Integer<R1, P> {
    type Output = Integer<RightShift<R1, R2>, P>;

    #[inline(always)]
    fn shr(self, rhs: Integer<R2, P>) -> Self::Output {
        let shifted = self.to_wide() >> rhs.to_wide().min(127) as u32;
        // SAFETY: the derived range holds every shifted value.
        unsafe { Integer::from_wide_unchecked(shifted) }
    }
}

#[cfg(test)]
mod tests {
    use crate::integer::Integer;
    use crate::range::{Between, Exactly, Range};
    use bounded_core::math::min_max::MinMax;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn bounds_of<R: Range>(_: Integer<R>) -> MinMax {
        R::BOUNDS
    }

    #[test]
    fn test_bitand() {
        let a = Integer::<Between<0, 12, u8>>::constant::<12>();
        let b = Integer::<Between<0, 10, u8>>::constant::<10>();
        let masked = a & b;
        assert_eq!(masked, 8);
        assert_eq!(bounds_of(masked), MinMax::new(0, 10));

        let native = a & 0b0100u8;
        assert_eq!(native, 4);
        assert_eq!(bounds_of(native), MinMax::new(0, 12));
        let native = 0xFFu64 & b;
        assert_eq!(native, 10);
        assert_eq!(bounds_of(native), MinMax::new(0, 10));
    }

    #[test]
    fn test_shifts() {
        let a = Integer::<Between<1, 3, u8>>::constant::<3>();
        let amount = Integer::<Between<2, 4, u8>>::constant::<4>();
        let shifted = a << amount;
        assert_eq!(shifted, 48);
        assert_eq!(bounds_of(shifted), MinMax::new(4, 48));

        let b = Integer::<Between<0, 1000, u16>>::constant::<1000>();
        let amount = Integer::<Between<1, 3, u8>>::constant::<3>();
        let shifted = b >> amount;
        assert_eq!(shifted, 125);
        assert_eq!(bounds_of(shifted), MinMax::new(0, 500));
    }

    #[test]
    fn test_shifting_zero_past_the_domain() {
        let zero = Integer::<Exactly<0, u8>>::constant::<0>();
        let far = Integer::<Between<0, 1000, u16>>::constant::<1000>();
        assert_eq!(zero << far, 0);
        let one = Integer::<Exactly<1, u8>>::constant::<1>();
        assert_eq!(one >> far, 0);
    }

    #[test]
    fn test_results_lie_in_derived_ranges() {
        type A = Integer<Between<0, 5000, u16>>;
        type B = Integer<Between<0, 200, u8>>;
        type S = Integer<Between<0, 20, u8>>;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let a = A::new(rng.random_range(0u16..=5000));
            let b = B::new(rng.random_range(0u8..=200));
            let s = S::new(rng.random_range(0u8..=20));

            let masked = a & b;
            assert_eq!(masked.to_wide(), a.to_wide() & b.to_wide());
            assert!(bounds_of(masked).contains(masked.to_wide()));
            let left = a << s;
            assert_eq!(left.to_wide(), a.to_wide() << s.to_wide());
            assert!(bounds_of(left).contains(left.to_wide()));
            let right = a >> s;
            assert_eq!(right.to_wide(), a.to_wide() >> s.to_wide());
            assert!(bounds_of(right).contains(right.to_wide()));
        }
    }
}
