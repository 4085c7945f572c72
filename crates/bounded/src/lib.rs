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

//! # Bounded
//!
//! Integers whose range is part of their type. Arithmetic on them derives
//! the range of each result at compile time, picks a native type wide enough
//! to store it, and therefore never overflows and never checks at runtime.
//! Only values entering from outside (parsing, native inputs, narrowing
//! conversions, compound assignment) go through an overflow policy.
//!
//! ```rust
//! use bounded::integer;
//!
//! type Hour = integer!(0, 23);       // stored in u8
//! type Minute = integer!(0, 59);     // stored in u8
//!
//! let h = Hour::new(13);
//! let m = Minute::new(45);
//! let minutes = h * 60u8 + m;        // in [0, 5924]
//! assert_eq!(minutes, 825);
//! ```
//!
//! ## Modules
//!
//! - `range`: Range markers. `Between`, `Exactly` and `Full` declare ranges;
//!   `Sum`, `Product` and the other derived markers compute the range and
//!   storage of an operator's result.
//! - `integer`: The `Integer<R, P>` value type with its constructors,
//!   conversions, comparisons, formatting and parsing.
//! - `ops`: Arithmetic, bitwise, shift and compound assignment operators,
//!   plus `min` and `max`.
//! - `policy`: What happens to a value outside the range: `Unchecked`,
//!   `Throw`, `Clamp` and `Wrap`.
//! - `optional`: `Optional<T>`, an optional value stored in a spare bit
//!   pattern of `T`.
//! - `error`: The crate's `Error` type.
//!
//! ## Rejected at compile time
//!
//! A derived range must exist. Dividing by a range that contains zero needs
//! `checked_div`:
//!
//! ```compile_fail
//! use bounded::{Between, Integer};
//!
//! let a = Integer::<Between<0, 10, u8>>::constant::<5>();
//! let b = Integer::<Between<-1, 1, i8>>::constant::<1>();
//! let _ = a / b;
//! ```
//!
//! Bounds must stay inside the `i128` domain:
//!
//! ```compile_fail
//! use bounded::{Full, Integer};
//!
//! let a = Integer::<Full<i128>>::constant::<1>();
//! let _ = a + a;
//! ```
//!
//! Shifts and masks need non-negative operands:
//!
//! ```compile_fail
//! use bounded::{Between, Integer};
//!
//! let a = Integer::<Between<-4, 4, i8>>::constant::<1>();
//! let b = Integer::<Between<0, 3, u8>>::constant::<1>();
//! let _ = a << b;
//! ```
//!
//! A declared range must fit its storage type:
//!
//! ```compile_fail
//! use bounded::{Between, Integer};
//!
//! let _ = Integer::<Between<0, 300, u8>>::constant::<1>();
//! ```

extern crate self as bounded;

pub mod error;
pub mod integer;
pub mod ops;
pub mod optional;
pub mod policy;
pub mod range;

pub use bounded_core::math::algebra;
pub use bounded_core::math::min_max::MinMax;
pub use bounded_core::num::representation::{
    Representation, Selection, digits_in_string_representation, representation_bits,
};
pub use bounded_core::num::underlying::{Primitive, Underlying, Widened};
pub use error::{Error, Result};
pub use integer::Integer;
pub use ops::extrema::{max, min};
pub use optional::{Optional, Tombstone};
pub use policy::{Assignable, Clamp, Policy, Throw, Unchecked, Wrap};
pub use range::{
    Absolute, Between, Conjunction, Difference, Exactly, Full, Greater, LeftShift, Lesser,
    Logarithm, Negation, Product, Quotient, Range, Remainder, RightShift, Sum,
};

#[cfg(feature = "macros")]
pub use bounded_macros::{constant, fast_integer, integer};

/// A bounded integer whose runtime inputs return `Result`.
pub type Checked<R> = Integer<R, Throw>;

/// A bounded integer whose runtime inputs saturate at the bounds.
pub type Clamped<R> = Integer<R, Clamp>;

/// A bounded integer whose runtime inputs wrap around the range.
pub type Wrapped<R> = Integer<R, Wrap>;
