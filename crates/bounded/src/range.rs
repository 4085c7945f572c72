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

//! Ranges as types.
//!
//! A bounded integer carries its range in its type. Because stable Rust
//! cannot compute a const generic argument from other const arguments, a
//! range is a zero-sized marker type implementing [`Range`]: user-declared
//! ranges carry their bounds as const generics, and every operator result is
//! a marker over its operands' markers whose bounds are derived by the range
//! algebra during constant evaluation.
//!
//! A derived range that does not exist (its bounds overflow the `i128`
//! domain, it divides by the constant zero, or it shifts or masks a possibly
//! negative operand) fails that evaluation, which rejects the program at
//! compile time.
//!
//! The storage of a derived range is picked from its operands' storage types,
//! not from its bounds, so it grows with every operation: `a * a * a` for
//! `a` in `[0, 3]` lies in `[0, 27]` but is stored in `i128`. Widening the
//! result into a declared range brings back the smallest storage, and costs
//! nothing at runtime:
//!
//! ```rust
//! use bounded::integer;
//!
//! let a = <integer!(0, 3)>::new(3);
//! let cube = a * a * a;
//! assert_eq!(size_of_val(&cube), 16);
//!
//! let compact: integer!(0, 27) = cube.widen();
//! assert_eq!(size_of_val(&compact), 1);
//! ```

use bounded_core::math::{algebra, min_max::MinMax};
use bounded_core::num::underlying::{Primitive, Underlying, Widened};
use std::marker::PhantomData;

/// A compile-time range together with the native type storing its values.
///
/// # Safety
///
/// `BOUNDS.min()` must not exceed `BOUNDS.max()`. Bounded integers tell the
/// optimizer that their value lies in `BOUNDS`, so an inverted range is
/// undefined behavior. Whether `Repr` holds every value of `BOUNDS` is
/// checked at compile time when an integer is built.
///
/// Implementing the trait therefore needs `unsafe`:
///
/// ```compile_fail
/// use bounded::{Integer, MinMax, Range};
///
/// struct Inverted;
///
/// impl Range for Inverted {
///     type Repr = u8;
///     const BOUNDS: MinMax = MinMax::new(0, 10);
/// }
/// ```
///
/// and an inverted range is rejected even then:
///
/// ```compile_fail
/// use bounded::{Integer, MinMax, Range};
///
/// struct Inverted;
///
/// // SAFETY: not upheld; the range is inverted.
/// unsafe impl Range for Inverted {
///     type Repr = u8;
///     const BOUNDS: MinMax = unsafe { MinMax::new_unchecked(10, 0) };
/// }
///
/// let _ = Integer::<Inverted>::min_value().get();
/// ```
pub unsafe trait Range: 'static {
    /// The native type values of this range are stored in.
    type Repr: Underlying;

    /// The smallest and largest value of the range.
    const BOUNDS: MinMax;
}

/// The user-declared range `[MIN, MAX]`, stored in `T`.
///
/// `T` must hold every value of the range; the `integer!` macro picks the
/// smallest such type automatically.
pub struct Between<const MIN: i128, const MAX: i128, T>(PhantomData<T>);

// SAFETY: `MinMax::new` rejects an inverted range during constant evaluation.
unsafe impl<const MIN: i128, const MAX: i128, T: Underlying> Range for Between<MIN, MAX, T> {
    type Repr = T;
    const BOUNDS: MinMax = MinMax::new(MIN, MAX);
}

/// The single-value range `[V, V]`, stored in `T`.
pub struct Exactly<const V: i128, T = i32>(PhantomData<T>);

// SAFETY: a singleton is ordered.
unsafe impl<const V: i128, T: Underlying> Range for Exactly<V, T> {
    type Repr = T;
    const BOUNDS: MinMax = MinMax::singleton(V);
}

/// The full range of the native type `T`.
///
/// Native operands enter bounded arithmetic through this range.
pub struct Full<T>(PhantomData<T>);

// SAFETY: the range of a native type is ordered.
unsafe impl<T: Primitive> Range for Full<T> {
    type Repr = T;
    const BOUNDS: MinMax = T::REPRESENTATION.bounds();
}

type Doubled<R> = <<R as Range>::Repr as Underlying>::Doubled;
type Joined<A, B> = <Doubled<A> as Widened>::Join<Doubled<B>>;

macro_rules! binary_range {
    ($(#[$doc:meta])* $name:ident, $repr:ty, $bounds:expr, $message:literal) => {
        $(#[$doc])*
        pub struct $name<A, B>(PhantomData<(A, B)>);

        // SAFETY: the algebra only builds ordered ranges.
        unsafe impl<A: Range, B: Range> Range for $name<A, B> {
            type Repr = $repr;
            const BOUNDS: MinMax = match $bounds {
                Some(bounds) => bounds,
                None => panic!($message),
            };
        }
    };
}

macro_rules! unary_range {
    ($(#[$doc:meta])* $name:ident, $repr:ty, $bounds:expr, $message:literal) => {
        $(#[$doc])*
        pub struct $name<A>(PhantomData<A>);

        // SAFETY: the algebra only builds ordered ranges.
        unsafe impl<A: Range> Range for $name<A> {
            type Repr = $repr;
            const BOUNDS: MinMax = match $bounds {
                Some(bounds) => bounds,
                None => panic!($message),
            };
        }
    };
}

binary_range!(
    /// The range of `A + B`.
    Sum,
    Joined<A, B>,
    algebra::add(A::BOUNDS, B::BOUNDS),
    "the bounds of the sum overflow i128"
);

binary_range!(
    /// The range of `A - B`.
    Difference,
    Joined<A, B>,
    algebra::sub(A::BOUNDS, B::BOUNDS),
    "the bounds of the difference overflow i128"
);

binary_range!(
    /// The range of `A * B`.
    Product,
    <Joined<A, B> as Underlying>::Doubled,
    algebra::mul(A::BOUNDS, B::BOUNDS),
    "the bounds of the product overflow i128"
);

binary_range!(
    /// The range of `A / B` over the non-zero divisors of `B`.
    Quotient,
    Doubled<A>,
    algebra::div(A::BOUNDS, B::BOUNDS),
    "the quotient is undefined: the divisor is always zero or the bounds overflow i128"
);

binary_range!(
    /// The range of `A % B` over the non-zero divisors of `B`.
    Remainder,
    A::Repr,
    algebra::rem(A::BOUNDS, B::BOUNDS),
    "the remainder is undefined: the divisor is always zero"
);

binary_range!(
    /// The range of `A & B`; both operands must be non-negative.
    Conjunction,
    A::Repr,
    algebra::bitand(A::BOUNDS, B::BOUNDS),
    "bitwise and requires non-negative operands"
);

binary_range!(
    /// The range of `A << B`; both operands must be non-negative.
    LeftShift,
    i128,
    algebra::shl(A::BOUNDS, B::BOUNDS),
    "left shift requires non-negative operands and a result inside i128"
);

binary_range!(
    /// The range of `A >> B`; both operands must be non-negative.
    RightShift,
    A::Repr,
    algebra::shr(A::BOUNDS, B::BOUNDS),
    "right shift requires non-negative operands"
);

binary_range!(
    /// The range of the lesser of `A` and `B`.
    Lesser,
    Joined<A, B>,
    Some(algebra::lesser(A::BOUNDS, B::BOUNDS)),
    "unreachable"
);

binary_range!(
    /// The range of the greater of `A` and `B`.
    Greater,
    Joined<A, B>,
    Some(algebra::greater(A::BOUNDS, B::BOUNDS)),
    "unreachable"
);

binary_range!(
    /// The range of `floor(log_B(A))`; `A` must be positive and `B` at least
    /// two.
    Logarithm,
    u8,
    algebra::log(A::BOUNDS, B::BOUNDS),
    "the logarithm requires positive values and a base of at least two"
);

unary_range!(
    /// The range of `-A`.
    Negation,
    Doubled<A>,
    algebra::neg(A::BOUNDS),
    "the bounds of the negation overflow i128"
);

unary_range!(
    /// The range of `|A|`.
    Absolute,
    Doubled<A>,
    algebra::abs(A::BOUNDS),
    "the bounds of the absolute value overflow i128"
);

#[cfg(test)]
mod tests {
    use super::*;
    use bounded_core::num::representation::Representation;

    fn bounds<R: Range>() -> MinMax {
        R::BOUNDS
    }

    fn storage<R: Range>() -> Representation {
        <R::Repr as Underlying>::REPRESENTATION
    }

    type Byte = Between<0, 255, u8>;
    type SignedByte = Between<-128, 127, i8>;

    #[test]
    fn test_declared_ranges() {
        assert_eq!(bounds::<Byte>(), MinMax::new(0, 255));
        assert_eq!(bounds::<Exactly<-7>>(), MinMax::singleton(-7));
        assert_eq!(storage::<Exactly<-7>>(), Representation::I32);
        assert_eq!(bounds::<Full<i16>>(), MinMax::new(-32768, 32767));
        assert_eq!(bounds::<Full<u64>>(), MinMax::new(0, u64::MAX as i128));
    }

    #[test]
    fn test_derived_bounds() {
        assert_eq!(bounds::<Sum<Byte, Byte>>(), MinMax::new(0, 510));
        assert_eq!(bounds::<Difference<Byte, Byte>>(), MinMax::new(-255, 255));
        assert_eq!(
            bounds::<Product<SignedByte, SignedByte>>(),
            MinMax::new(-16256, 16384)
        );
        assert_eq!(bounds::<Negation<SignedByte>>(), MinMax::new(-127, 128));
        assert_eq!(bounds::<Absolute<SignedByte>>(), MinMax::new(0, 128));
        assert_eq!(
            bounds::<Quotient<Byte, Between<1, 16, u8>>>(),
            MinMax::new(0, 255)
        );
        assert_eq!(
            bounds::<Remainder<Byte, Between<1, 16, u8>>>(),
            MinMax::new(0, 15)
        );
        assert_eq!(
            bounds::<LeftShift<Between<1, 3, u8>, Between<0, 4, u8>>>(),
            MinMax::new(1, 48)
        );
        assert_eq!(
            bounds::<Logarithm<Between<1, 1024, u16>, Exactly<2>>>(),
            MinMax::new(0, 10)
        );
    }

    #[test]
    fn test_derived_storage_follows_promotion_table() {
        assert_eq!(storage::<Sum<Byte, Byte>>(), Representation::I16);
        assert_eq!(storage::<Sum<Byte, Full<u32>>>(), Representation::I64);
        assert_eq!(storage::<Product<Byte, Byte>>(), Representation::I32);
        assert_eq!(storage::<Negation<SignedByte>>(), Representation::I16);
        assert_eq!(storage::<Quotient<Byte, Exactly<-1>>>(), Representation::I16);
        assert_eq!(storage::<Remainder<Byte, Exactly<7>>>(), Representation::U8);
        assert_eq!(storage::<LeftShift<Byte, Exactly<3>>>(), Representation::I128);
        assert_eq!(storage::<Lesser<Byte, SignedByte>>(), Representation::I16);
    }

    #[test]
    fn test_derived_storage_holds_bounds() {
        fn check<R: Range>() {
            assert!(storage::<R>().contains(R::BOUNDS), "{}", R::BOUNDS);
        }
        check::<Sum<Full<i64>, Full<i64>>>();
        check::<Difference<Full<u64>, Full<i64>>>();
        check::<Product<Full<u32>, Full<i32>>>();
        check::<Product<Full<i64>, Full<i32>>>();
        check::<Negation<Full<i64>>>();
        check::<Absolute<Full<i8>>>();
        check::<Quotient<Full<i32>, Full<i8>>>();
        check::<Remainder<Full<i16>, Full<u64>>>();
        check::<Greater<Full<usize>, Full<isize>>>();
    }
}
