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

//! Saturating conversion between integer types.
//!
//! A value is converted unchanged when the target can represent it and
//! clamped to the nearest bound otherwise. The range check goes through
//! `num_traits::NumCast`, which compares in the source domain against bounds
//! converted without loss, so a 128-bit source is never truncated before it
//! is compared against a narrow target. An unrepresentable value is below
//! `R::MIN` exactly when it is negative, because every target range
//! contains zero.
//!
//! The `const` counterpart lives on
//! [`ConstEval`](crate::num::ops::const_eval::ConstEval):
//! `saturate_from_signed` takes any signed source widened to `i128`, and
//! `saturate_from_unsigned` any unsigned source widened to `u128`.

use num_traits::NumCast;

use crate::num::int::SatInt;

/// Converts `x` to `R`, clamping to `[R::MIN, R::MAX]`.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::cast::saturate_cast;
/// assert_eq!(saturate_cast::<u8, i16>(-5), 0);
/// assert_eq!(saturate_cast::<i8, i128>(i128::MAX), i8::MAX);
/// assert_eq!(saturate_cast::<u64, u8>(200), 200);
/// assert_eq!(saturate_cast::<i32, u128>(u128::MAX), i32::MAX);
/// ```
#[inline(always)]
#[must_use]
pub fn saturate_cast<R: SatInt, T: SatInt>(x: T) -> R {
    match <R as NumCast>::from(x) {
        Some(value) => value,
        None if x < T::zero() => R::MIN,
        None => R::MAX,
    }
}

/// Method form of [`saturate_cast`].
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::cast::SaturateCast;
/// let wide: i64 = -70_000;
/// let narrow: i16 = wide.saturate_cast();
/// assert_eq!(narrow, i16::MIN);
/// assert_eq!(300u16.saturate_cast::<u8>(), 255);
/// ```
pub trait SaturateCast: Sized {
    /// Converts `self` to `R`, clamping to `R`'s range.
    fn saturate_cast<R: SatInt>(self) -> R;
}

impl<T: SatInt> SaturateCast for T {
    #[inline(always)]
    fn saturate_cast<R: SatInt>(self) -> R {
        saturate_cast::<R, T>(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::ops::const_eval::ConstEval;

    #[test]
    fn test_in_range_is_lossless() {
        assert_eq!(saturate_cast::<i8, i64>(-128), -128i8);
        assert_eq!(saturate_cast::<u8, i32>(255), 255u8);
        assert_eq!(saturate_cast::<i128, u64>(u64::MAX), u64::MAX as i128);
        assert_eq!(saturate_cast::<u128, i128>(i128::MAX), i128::MAX as u128);
        assert_eq!(saturate_cast::<isize, i8>(-1), -1isize);
    }

    #[test]
    fn test_clamps_below_and_above() {
        assert_eq!(saturate_cast::<u8, i16>(-5), 0u8);
        assert_eq!(saturate_cast::<u8, i128>(i128::MIN), 0u8);
        assert_eq!(saturate_cast::<u8, i128>(i128::MAX), u8::MAX);
        assert_eq!(saturate_cast::<i8, u128>(u128::MAX), i8::MAX);
        assert_eq!(saturate_cast::<i64, i128>(i128::MIN), i64::MIN);
        assert_eq!(saturate_cast::<u128, i8>(-1), 0u128);
        assert_eq!(saturate_cast::<i128, u128>(u128::MAX), i128::MAX);
    }

    #[test]
    fn test_runtime_matches_const_form() {
        for x in i16::MIN..=i16::MAX {
            assert_eq!(saturate_cast::<i8, i16>(x), ConstEval::<i8>::saturate_from_signed(x as i128));
            assert_eq!(saturate_cast::<u8, i16>(x), ConstEval::<u8>::saturate_from_signed(x as i128));
        }
        for x in u16::MIN..=u16::MAX {
            assert_eq!(saturate_cast::<i8, u16>(x), ConstEval::<i8>::saturate_from_unsigned(x as u128));
            assert_eq!(saturate_cast::<u8, u16>(x), ConstEval::<u8>::saturate_from_unsigned(x as u128));
        }
    }

    #[test]
    fn test_method_form() {
        assert_eq!((-5i16).saturate_cast::<u8>(), 0);
        assert_eq!(1_000i32.saturate_cast::<i8>(), i8::MAX);
        assert_eq!(7u64.saturate_cast::<i128>(), 7);
    }
}
