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

use bounded_core::math::min_max::MinMax;

/// A failure reported by a checked bounded-integer operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A runtime value did not fit the target range.
    #[error("got a value of {value} but expected a value in the range [{min}, {max}]")]
    Range { value: i128, min: i128, max: i128 },
    /// The divisor of a checked division or remainder was zero.
    #[error("attempted to divide by zero")]
    DivisionByZero,
    /// A string did not hold an integer.
    #[error("failed to parse integer: {0}")]
    Parse(#[from] std::num::ParseIntError),
}

impl Error {
    /// Creates a [`Error::Range`] for `value` and `bounds`.
    #[inline]
    pub fn out_of_range(value: i128, bounds: MinMax) -> Self {
        Self::Range {
            value,
            min: bounds.min(),
            max: bounds.max(),
        }
    }
}

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message_mentions_value_and_bounds() {
        let error = Error::out_of_range(15, MinMax::new(0, 10));
        assert_eq!(
            error.to_string(),
            "got a value of 15 but expected a value in the range [0, 10]"
        );
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse = "twelve".parse::<i128>().expect_err("not a number");
        let error = Error::from(parse.clone());
        assert_eq!(error, Error::Parse(parse));
        assert!(error.to_string().starts_with("failed to parse integer"));
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(Error::DivisionByZero.to_string(), "attempted to divide by zero");
    }
}
