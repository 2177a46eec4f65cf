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

/// Compile-time range information for a fixed-width integer type.
///
/// Every value of an implementing type lies in `[MIN, MAX]`. The saturating
/// operations clamp to exactly these bounds.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::limits::IntRange;
/// assert_eq!(<i8 as IntRange>::MIN, -128);
/// assert_eq!(<u16 as IntRange>::MAX, 65_535);
/// assert!(<i64 as IntRange>::SIGNED);
/// assert_eq!(<u128 as IntRange>::BITS, 128);
/// ```
pub trait IntRange: Sized + Copy {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
    /// The width of the type in bits.
    const BITS: u32;
    /// Whether the type uses two's complement signed representation.
    const SIGNED: bool;
}

macro_rules! impl_int_range_for {
    ($t:ty, $signed:expr) => {
        impl IntRange for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const BITS: u32 = <$t>::BITS;
            const SIGNED: bool = $signed;
        }
    };
}

macro_rules! impl_signed_range_for {
    ($t:ty) => {
        impl_int_range_for!($t, true);
    };
}

macro_rules! impl_unsigned_range_for {
    ($t:ty) => {
        impl_int_range_for!($t, false);
    };
}

impl_signed_range_for!(i8);
impl_signed_range_for!(i16);
impl_signed_range_for!(i32);
impl_signed_range_for!(i64);
impl_signed_range_for!(i128);
impl_signed_range_for!(isize);

impl_unsigned_range_for!(u8);
impl_unsigned_range_for!(u16);
impl_unsigned_range_for!(u32);
impl_unsigned_range_for!(u64);
impl_unsigned_range_for!(u128);
impl_unsigned_range_for!(usize);

#[cfg(test)]
mod tests {
    use super::IntRange;

    fn span<T: IntRange>() -> (T, T) {
        (T::MIN, T::MAX)
    }

    #[test]
    fn test_signed_ranges() {
        assert_eq!(span::<i8>(), (-128, 127));
        assert_eq!(span::<i16>(), (i16::MIN, i16::MAX));
        assert_eq!(span::<i128>(), (i128::MIN, i128::MAX));
        assert!(<isize as IntRange>::SIGNED);
    }

    #[test]
    fn test_unsigned_ranges() {
        assert_eq!(span::<u8>(), (0, 255));
        assert_eq!(span::<u64>(), (0, u64::MAX));
        assert!(!<usize as IntRange>::SIGNED);
    }

    #[test]
    fn test_bits_match_width() {
        assert_eq!(<i8 as IntRange>::BITS, 8);
        assert_eq!(<u32 as IntRange>::BITS, 32);
        assert_eq!(<usize as IntRange>::BITS, usize::BITS);
    }
}
