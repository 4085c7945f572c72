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

//! Selection of the native integer type that stores a range.

use crate::math::min_max::MinMax;

/// A native integer type, identified by width and signedness.
///
/// Bounds live in the `i128` domain, so [`Representation::U128`] covers
/// `[0, i128::MAX]` rather than the full unsigned 128-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    U128,
    I128,
}

/// How [`Representation::select`] breaks ties between fitting types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// The fewest bits that hold the range; best for storage density.
    #[default]
    Smallest,
    /// At least the pointer width; best for arithmetic throughput.
    Fastest,
}

const UNSIGNED: [Representation; 5] = [
    Representation::U8,
    Representation::U16,
    Representation::U32,
    Representation::U64,
    Representation::U128,
];

const SIGNED: [Representation; 5] = [
    Representation::I8,
    Representation::I16,
    Representation::I32,
    Representation::I64,
    Representation::I128,
];

impl Representation {
    /// The width of the type in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 => 32,
            Self::U64 | Self::I64 => 64,
            Self::U128 | Self::I128 => 128,
        }
    }

    #[inline]
    pub const fn is_signed(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::I128
        )
    }

    /// The smallest value of the type.
    #[inline]
    pub const fn min(self) -> i128 {
        match self {
            Self::I8 => i8::MIN as i128,
            Self::I16 => i16::MIN as i128,
            Self::I32 => i32::MIN as i128,
            Self::I64 => i64::MIN as i128,
            Self::I128 => i128::MIN,
            _ => 0,
        }
    }

    /// The largest value of the type, capped at `i128::MAX`.
    #[inline]
    pub const fn max(self) -> i128 {
        match self {
            Self::U8 => u8::MAX as i128,
            Self::I8 => i8::MAX as i128,
            Self::U16 => u16::MAX as i128,
            Self::I16 => i16::MAX as i128,
            Self::U32 => u32::MAX as i128,
            Self::I32 => i32::MAX as i128,
            Self::U64 => u64::MAX as i128,
            Self::I64 => i64::MAX as i128,
            Self::U128 | Self::I128 => i128::MAX,
        }
    }

    /// The values of the type as a range.
    #[inline]
    pub const fn bounds(self) -> MinMax {
        // SAFETY: the smallest value of every type lies below its largest.
        unsafe { MinMax::new_unchecked(self.min(), self.max()) }
    }

    /// Returns `true` if every value of `bounds` is representable.
    #[inline]
    pub const fn contains(self, bounds: MinMax) -> bool {
        self.bounds().contains_range(bounds)
    }

    /// The type with the given width and signedness, if one exists.
    #[inline]
    pub const fn with_bits(bits: u32, signed: bool) -> Option<Self> {
        let index = match bits {
            8 => 0,
            16 => 1,
            32 => 2,
            64 => 3,
            128 => 4,
            _ => return None,
        };
        Some(if signed { SIGNED[index] } else { UNSIGNED[index] })
    }

    /// The smallest type that holds every value of `bounds`.
    ///
    /// Non-negative ranges are stored unsigned, anything else signed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    /// # use bounded_core::num::representation::Representation;
    /// assert_eq!(Representation::smallest(MinMax::new(0, 255)), Representation::U8);
    /// assert_eq!(Representation::smallest(MinMax::new(0, 256)), Representation::U16);
    /// assert_eq!(Representation::smallest(MinMax::new(-1, 127)), Representation::I8);
    /// assert_eq!(Representation::smallest(MinMax::new(-1, 128)), Representation::I16);
    /// ```
    pub const fn smallest(bounds: MinMax) -> Self {
        let candidates = if bounds.min() < 0 { &SIGNED } else { &UNSIGNED };
        let mut index = 0;
        while index < candidates.len() {
            if candidates[index].contains(bounds) {
                return candidates[index];
            }
            index += 1;
        }
        Self::I128
    }

    /// The smallest type that holds `bounds`, widened to the pointer width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::math::min_max::MinMax;
    /// # use bounded_core::num::representation::Representation;
    /// let fastest = Representation::fastest(MinMax::new(-3, 3));
    /// assert!(fastest.is_signed());
    /// assert_eq!(fastest.bits(), usize::BITS);
    /// ```
    pub const fn fastest(bounds: MinMax) -> Self {
        let smallest = Self::smallest(bounds);
        if smallest.bits() >= usize::BITS {
            return smallest;
        }
        match Self::with_bits(usize::BITS, smallest.is_signed()) {
            Some(word) => word,
            None => smallest,
        }
    }

    /// Selects the storage type for `bounds` according to `selection`.
    #[inline]
    pub const fn select(bounds: MinMax, selection: Selection) -> Self {
        match selection {
            Selection::Smallest => Self::smallest(bounds),
            Selection::Fastest => Self::fastest(bounds),
        }
    }

    /// The type a bare integer constant takes.
    ///
    /// Constants that fit behave like `i32`, larger ones move to the widest
    /// signed and then the widest unsigned 64-bit type, and everything else
    /// to `i128`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bounded_core::num::representation::Representation;
    /// assert_eq!(Representation::for_constant(5), Representation::I32);
    /// assert_eq!(Representation::for_constant(1 << 40), Representation::I64);
    /// assert_eq!(Representation::for_constant(u64::MAX as i128), Representation::U64);
    /// assert_eq!(Representation::for_constant(-(1 << 70)), Representation::I128);
    /// ```
    pub const fn for_constant(value: i128) -> Self {
        let point = MinMax::singleton(value);
        if Self::I32.contains(point) {
            Self::I32
        } else if Self::I64.contains(point) {
            Self::I64
        } else if Self::U64.contains(point) {
            Self::U64
        } else {
            Self::I128
        }
    }

    /// The name of the matching Rust primitive.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::U128 => "u128",
            Self::I128 => "i128",
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline(always)]
const fn bit_width(magnitude: u128) -> u32 {
    u128::BITS - magnitude.leading_zeros()
}

/// The number of bits needed to write every value of `bounds` as a
/// magnitude, plus one sign bit if the range has negative values.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::min_max::MinMax;
/// # use bounded_core::num::representation::representation_bits;
/// assert_eq!(representation_bits(MinMax::new(0, 63)), 6);
/// assert_eq!(representation_bits(MinMax::new(0, 64)), 7);
/// assert_eq!(representation_bits(MinMax::new(-64, 20)), 8);
/// ```
pub const fn representation_bits(bounds: MinMax) -> u32 {
    let low = bounds.min().unsigned_abs();
    let high = bounds.max().unsigned_abs();
    let magnitude = if low > high { low } else { high };
    bit_width(magnitude) + if bounds.min() < 0 { 1 } else { 0 }
}

#[inline(always)]
const fn digits(value: i128, base: u32) -> u32 {
    let mut magnitude = value.unsigned_abs();
    let mut count = 1;
    while magnitude >= base as u128 {
        magnitude /= base as u128;
        count += 1;
    }
    count + if value < 0 { 1 } else { 0 }
}

/// The longest string any value of `bounds` needs in the given base,
/// counting a leading minus sign.
///
/// # Panics
///
/// Panics if `base < 2`.
///
/// # Examples
///
/// ```rust
/// # use bounded_core::math::min_max::MinMax;
/// # use bounded_core::num::representation::digits_in_string_representation;
/// assert_eq!(digits_in_string_representation(MinMax::new(-63, 20), 10), 3);
/// assert_eq!(digits_in_string_representation(MinMax::new(-1, 9), 2), 4);
/// ```
pub const fn digits_in_string_representation(bounds: MinMax, base: u32) -> u32 {
    assert!(base >= 2, "base must be at least 2");
    let low = digits(bounds.min(), base);
    let high = digits(bounds.max(), base);
    if low > high { low } else { high }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: i128, max: i128) -> MinMax {
        MinMax::new(min, max)
    }

    #[test]
    fn test_smallest_unsigned() {
        assert_eq!(Representation::smallest(range(0, 0)), Representation::U8);
        assert_eq!(Representation::smallest(range(0, 255)), Representation::U8);
        assert_eq!(Representation::smallest(range(27, 567)), Representation::U16);
        assert_eq!(
            Representation::smallest(range(0, u32::MAX as i128)),
            Representation::U32
        );
        assert_eq!(
            Representation::smallest(range(0, u32::MAX as i128 + 1)),
            Representation::U64
        );
        assert_eq!(
            Representation::smallest(range(0, 1 << 100)),
            Representation::U128
        );
    }

    #[test]
    fn test_smallest_signed() {
        assert_eq!(Representation::smallest(range(-128, 127)), Representation::I8);
        assert_eq!(Representation::smallest(range(-129, 0)), Representation::I16);
        assert_eq!(Representation::smallest(range(-1, 255)), Representation::I16);
        assert_eq!(
            Representation::smallest(range(-1, u64::MAX as i128)),
            Representation::I128
        );
        assert_eq!(
            Representation::smallest(range(i128::MIN, i128::MAX)),
            Representation::I128
        );
    }

    #[test]
    fn test_smallest_is_minimal() {
        let samples = [
            range(0, 1),
            range(-1, 0),
            range(0, 300),
            range(-40_000, 3),
            range(0, 1 << 40),
            range(-(1 << 40), 1 << 40),
            range(0, 1 << 80),
        ];
        for bounds in samples {
            let chosen = Representation::smallest(bounds);
            assert!(chosen.contains(bounds), "{bounds} in {chosen}");
            let candidates = if bounds.min() < 0 { SIGNED } else { UNSIGNED };
            for narrower in candidates.iter().filter(|r| r.bits() < chosen.bits()) {
                assert!(!narrower.contains(bounds), "{narrower} already holds {bounds}");
            }
        }
    }

    #[test]
    fn test_fastest() {
        let fastest = Representation::fastest(range(0, 10));
        assert!(!fastest.is_signed());
        assert_eq!(fastest.bits(), usize::BITS);
        assert_eq!(
            Representation::fastest(range(0, 1 << 100)),
            Representation::U128
        );
        assert_eq!(
            Representation::select(range(-1, 1), Selection::Smallest),
            Representation::I8
        );
    }

    #[test]
    fn test_for_constant() {
        assert_eq!(Representation::for_constant(0), Representation::I32);
        assert_eq!(Representation::for_constant(-5), Representation::I32);
        assert_eq!(
            Representation::for_constant(i32::MAX as i128 + 1),
            Representation::I64
        );
        assert_eq!(
            Representation::for_constant(i64::MIN as i128),
            Representation::I64
        );
        assert_eq!(
            Representation::for_constant(i64::MAX as i128 + 1),
            Representation::U64
        );
        assert_eq!(
            Representation::for_constant(u64::MAX as i128 + 1),
            Representation::I128
        );
    }

    #[test]
    fn test_with_bits() {
        assert_eq!(Representation::with_bits(16, true), Some(Representation::I16));
        assert_eq!(Representation::with_bits(64, false), Some(Representation::U64));
        assert_eq!(Representation::with_bits(24, false), None);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Representation::I8.bounds(), range(-128, 127));
        assert_eq!(Representation::U128.bounds(), range(0, i128::MAX));
        assert_eq!(Representation::I16.to_string(), "i16");
    }

    #[test]
    fn test_representation_bits() {
        assert_eq!(representation_bits(range(63, 63)), 6);
        assert_eq!(representation_bits(range(64, 64)), 7);
        assert_eq!(representation_bits(range(65, 65)), 7);
        assert_eq!(representation_bits(range(-63, 20)), 7);
        assert_eq!(representation_bits(range(-64, 20)), 8);
        assert_eq!(representation_bits(range(-65, 20)), 8);
        assert_eq!(representation_bits(range(-1, 9)), 5);
        assert_eq!(representation_bits(range(-1, 99)), 8);
    }

    #[test]
    fn test_digits_in_string_representation() {
        assert_eq!(digits_in_string_representation(range(63, 63), 2), 6);
        assert_eq!(digits_in_string_representation(range(63, 63), 10), 2);
        assert_eq!(digits_in_string_representation(range(-64, 20), 2), 8);
        assert_eq!(digits_in_string_representation(range(-63, 20), 10), 3);
        assert_eq!(digits_in_string_representation(range(-1, 10), 2), 4);
        assert_eq!(digits_in_string_representation(range(-1, 99), 2), 7);
        assert_eq!(digits_in_string_representation(range(-1, 99), 10), 2);
    }
}
