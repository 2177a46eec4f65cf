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

use core::arch::x86_64::{_addcarry_u32, _addcarry_u64, _subborrow_u32, _subborrow_u64};

use super::FastPath;

// The product of two `BITS`-wide operands always fits the double-width type,
// which lowers to a single `imul`/`mul` producing both halves. The result
// overflowed iff the high half is not the extension of the low half.
macro_rules! widening_mul {
    ($t:ty, $wide:ty) => {
        #[inline(always)]
        fn intrinsic_overflowing_mul(self, rhs: Self) -> Option<(Self, bool)> {
            let full = (self as $wide) * (rhs as $wide);
            let low = full as $t;
            Some((low, full != low as $wide))
        }
    };
}

macro_rules! carry_fast_path {
    ($t:ty, $wide:ty, $add:ident, $sub:ident) => {
        impl FastPath for $t {
            widening_mul!($t, $wide);

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn intrinsic_overflowing_add(self, rhs: Self) -> Option<(Self, bool)> {
                let mut out: $t = 0;
                // SAFETY: the carry intrinsics only require x86_64, which this
                // module is gated on.
                let carry = unsafe { $add(0, self, rhs, &mut out) };
                Some((out, carry != 0))
            }

            #[inline(always)]
            #[allow(unused_unsafe)]
            fn intrinsic_overflowing_sub(self, rhs: Self) -> Option<(Self, bool)> {
                let mut out: $t = 0;
                // SAFETY: see `intrinsic_overflowing_add`.
                let borrow = unsafe { $sub(0, self, rhs, &mut out) };
                Some((out, borrow != 0))
            }
        }
    };
}

carry_fast_path!(u32, u64, _addcarry_u32, _subborrow_u32);
carry_fast_path!(u64, u128, _addcarry_u64, _subborrow_u64);

impl FastPath for i32 {
    widening_mul!(i32, i64);
}

impl FastPath for i64 {
    widening_mul!(i64, i128);
}

#[cfg(test)]
mod tests {
    use super::FastPath;

    #[test]
    fn test_addcarry_matches_overflowing_add() {
        let cases = [(0u32, 0u32), (u32::MAX, 1), (u32::MAX, u32::MAX), (7, 9)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_add(b), Some(a.overflowing_add(b)));
        }
        let cases = [(0u64, 0u64), (u64::MAX, 1), (u64::MAX, u64::MAX), (7, 9)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_add(b), Some(a.overflowing_add(b)));
        }
    }

    #[test]
    fn test_widening_mul_matches_overflowing_mul() {
        let cases = [(0u32, u32::MAX), (1 << 16, 1 << 16), (u32::MAX, u32::MAX), (65_535, 65_537)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_mul(b), Some(a.overflowing_mul(b)));
        }
        let cases = [(0u64, u64::MAX), (1 << 32, 1 << 32), (u64::MAX, u64::MAX), (u64::MAX, 1)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_mul(b), Some(a.overflowing_mul(b)));
        }
        let cases = [(i32::MIN, -1), (i32::MIN, 1), (-65_536, 32_768), (65_536, 32_768), (-7, 9)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_mul(b), Some(a.overflowing_mul(b)));
        }
        // A negative low half with a zero high half is still an overflow.
        let cases = [(i64::MIN, -1), (i64::MIN, 1), (1 << 32, 1 << 31), (-(1 << 32), 1 << 31)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_mul(b), Some(a.overflowing_mul(b)));
        }
    }

    #[test]
    fn test_subborrow_matches_overflowing_sub() {
        let cases = [(0u32, 1u32), (u32::MAX, u32::MAX), (5, 9), (9, 5)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_sub(b), Some(a.overflowing_sub(b)));
        }
        let cases = [(0u64, 1u64), (u64::MAX, u64::MAX), (5, 9), (9, 5)];
        for (a, b) in cases {
            assert_eq!(a.intrinsic_overflowing_sub(b), Some(a.overflowing_sub(b)));
        }
    }
}
