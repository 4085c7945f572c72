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

//! # Bounded Macros
//!
//! Procedural macros that compute storage types for bounded integers at
//! expansion time. They are re-exported by the `bounded` crate and expand to
//! paths under `::bounded`.

use proc_macro::TokenStream;
use syn::{Error, parse_macro_input};

mod bound;
mod expand;

/// Names a bounded integer type whose storage is the smallest native type
/// holding `[MIN, MAX]`.
///
/// ```text
/// type Percent = integer!(0, 100);            // stored in u8
/// type Offset = integer!(-300, 300, Clamp);   // stored in i16, clamps
/// ```
///
/// Both bounds must be integer literals, optionally negated. The optional
/// third argument is the overflow policy type.
#[proc_macro]
pub fn integer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::IntegerInput);
    expand::impl_integer_macro(input, bounded_core::num::representation::Selection::Smallest)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Like [`integer!`], but stores the value in at least a pointer-sized
/// native type.
#[proc_macro]
pub fn fast_integer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::IntegerInput);
    expand::impl_integer_macro(input, bounded_core::num::representation::Selection::Fastest)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

/// Writes a bounded integer constant whose range is exactly its value.
///
/// ```text
/// let five = constant!(5);                // Integer<Exactly<5, i32>>
/// let big = constant!(10_000_000_000);    // Integer<Exactly<10000000000, i64>>
/// ```
///
/// The storage follows the rules for bare integer constants: `i32` when the
/// value fits, then `i64`, `u64`, and `i128`.
#[proc_macro]
pub fn constant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as expand::ConstantInput);
    expand::impl_constant_macro(input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
