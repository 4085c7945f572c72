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

//! # Bounded Core
//!
//! Compile-time foundations for bounded integers: range descriptors, the
//! range algebra, and the selection of native storage types. Everything in
//! this crate that deals with ranges is a `const fn`, so the same code
//! derives bounds during constant evaluation and answers queries at runtime.
//!
//! ## Modules
//!
//! - `math`: The closed range `[min, max]` (`MinMax`) with containment,
//!   intersection, hull, clamping, and wrapping, plus the range algebra that
//!   computes the sound result range of every arithmetic, bitwise, and shift
//!   operator.
//! - `num`: The `Representation` selector that maps a range to the smallest
//!   (or fastest) native integer type, and the `Underlying` family of traits
//!   that lets generic code store values in and widen values from those
//!   types.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
