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

//! Native integer types as storage for bounded values.
//!
//! [`Underlying`] is implemented for every primitive integer and gives the
//! value type a uniform way to move between its storage and the `i128`
//! domain the range algebra works in. [`Widened`] is the closed family of
//! signed result types derived ranges are stored in; its associated types
//! encode the promotion table at the type level.

use crate::num::representation::Representation;
use num_traits::PrimInt;
use std::fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex};
use std::hash::Hash;

/// A primitive integer able to store a bounded value.
pub trait Underlying:
    PrimInt
    + Hash
    + Debug
    + Display
    + Binary
    + LowerHex
    + UpperHex
    + Octal
    + Send
    + Sync
    + 'static
{
    /// The width and signedness of the type.
    const REPRESENTATION: Representation;

    /// The signed type twice as wide, saturating at `i128`.
    type Doubled: Widened;

    /// Converts to the `i128` domain.
    ///
    /// Exact for every value of a bounded integer. A `u128` above
    /// `i128::MAX` lies outside the domain and wraps.
    fn to_wide(self) -> i128;

    /// Converts from the `i128` domain, truncating values the type cannot
    /// hold.
    fn from_wide(value: i128) -> Self;

    /// The distance of `self` from the smallest value of the type.
    fn to_offset(self) -> u128;

    /// The inverse of [`Underlying::to_offset`], truncating to the width of
    /// the type.
    fn from_offset(offset: u128) -> Self;
}

/// A signed type a derived range is stored in.
pub trait Widened: Underlying {
    type AtLeast16: Widened;
    type AtLeast32: Widened;
    type AtLeast64: Widened;

    /// The wider of `Self` and `W`.
    type Join<W: Widened>: Widened;
}

/// A primitive integer whose full range lies inside the `i128` domain.
///
/// Everything except `u128` qualifies. These are the types native operands
/// and runtime inputs may have.
pub trait Primitive: Underlying {}

macro_rules! impl_underlying_for {
    ($t:ty, $representation:expr, $doubled:ty) => {
        impl Underlying for $t {
            const REPRESENTATION: Representation = $representation;

            type Doubled = $doubled;

            #[inline(always)]
            fn to_wide(self) -> i128 {
                self as i128
            }

            #[inline(always)]
            fn from_wide(value: i128) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_offset(self) -> u128 {
                (self as i128 as u128).wrapping_sub(<$t>::MIN as i128 as u128)
            }

            #[inline(always)]
            fn from_offset(offset: u128) -> Self {
                offset.wrapping_add(<$t>::MIN as i128 as u128) as $t
            }
        }
    };
}

macro_rules! impl_widened_for {
    ($t:ty, $at_least_16:ty, $at_least_32:ty, $at_least_64:ty, $join:ident) => {
        impl Widened for $t {
            type AtLeast16 = $at_least_16;
            type AtLeast32 = $at_least_32;
            type AtLeast64 = $at_least_64;
            type Join<W: Widened> = <W as Widened>::$join;
        }
    };
}

macro_rules! impl_primitive_for {
    ($($t:ty),*) => {
        $(impl Primitive for $t {})*
    };
}

const fn pointer_sized(signed: bool) -> Representation {
    match Representation::with_bits(usize::BITS, signed) {
        Some(representation) => representation,
        None => panic!("unsupported pointer width"),
    }
}

impl_underlying_for!(u8, Representation::U8, i16);
impl_underlying_for!(u16, Representation::U16, i32);
impl_underlying_for!(u32, Representation::U32, i64);
impl_underlying_for!(u64, Representation::U64, i128);
impl_underlying_for!(u128, Representation::U128, i128);
impl_underlying_for!(usize, pointer_sized(false), i128);

impl_underlying_for!(i8, Representation::I8, i16);
impl_underlying_for!(i16, Representation::I16, i32);
impl_underlying_for!(i32, Representation::I32, i64);
impl_underlying_for!(i64, Representation::I64, i128);
impl_underlying_for!(i128, Representation::I128, i128);
impl_underlying_for!(isize, pointer_sized(true), i128);

impl_widened_for!(i16, i16, i32, i64, AtLeast16);
impl_widened_for!(i32, i32, i32, i64, AtLeast32);
impl_widened_for!(i64, i64, i64, i64, AtLeast64);

impl Widened for i128 {
    type AtLeast16 = i128;
    type AtLeast32 = i128;
    type AtLeast64 = i128;
    type Join<W: Widened> = i128;
}

impl_primitive_for!(u8, u16, u32, u64, usize, i8, i16, i32, i64, i128, isize);
