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

//! Compile-time and runtime evaluation must agree for the same inputs.

use satnum_core::{ConstEval, add_sat, mul_sat, saturate_cast, sub_sat};

macro_rules! const_matches_runtime {
    ($name:ident, $t:ty) => {
        #[test]
        fn $name() {
            const MIN: $t = <$t>::MIN;
            const MAX: $t = <$t>::MAX;

            const ADD_MAX: $t = ConstEval::<$t>::add_sat(MAX, 1);
            const ADD_MIX: $t = ConstEval::<$t>::add_sat(MAX, MIN);
            const SUB_MIN: $t = ConstEval::<$t>::sub_sat(MIN, 1);
            const SUB_ZERO: $t = ConstEval::<$t>::sub_sat(0, MAX);
            const MUL_MAX: $t = ConstEval::<$t>::mul_sat(MAX, 2);
            const MUL_MIN: $t = ConstEval::<$t>::mul_sat(MIN, 2);
            const MUL_EDGE: $t = ConstEval::<$t>::mul_sat(MIN, MIN);
            const SMALL: $t = ConstEval::<$t>::mul_sat(3, 5);

            assert_eq!(ADD_MAX, add_sat::<$t>(MAX, 1));
            assert_eq!(ADD_MIX, add_sat::<$t>(MAX, MIN));
            assert_eq!(SUB_MIN, sub_sat::<$t>(MIN, 1));
            assert_eq!(SUB_ZERO, sub_sat::<$t>(0, MAX));
            assert_eq!(MUL_MAX, mul_sat::<$t>(MAX, 2));
            assert_eq!(MUL_MIN, mul_sat::<$t>(MIN, 2));
            assert_eq!(MUL_EDGE, mul_sat::<$t>(MIN, MIN));
            assert_eq!(SMALL, 15);
        }
    };
}

const_matches_runtime!(test_const_matches_runtime_i8, i8);
const_matches_runtime!(test_const_matches_runtime_i16, i16);
const_matches_runtime!(test_const_matches_runtime_i32, i32);
const_matches_runtime!(test_const_matches_runtime_i64, i64);
const_matches_runtime!(test_const_matches_runtime_i128, i128);
const_matches_runtime!(test_const_matches_runtime_isize, isize);
const_matches_runtime!(test_const_matches_runtime_u8, u8);
const_matches_runtime!(test_const_matches_runtime_u16, u16);
const_matches_runtime!(test_const_matches_runtime_u32, u32);
const_matches_runtime!(test_const_matches_runtime_u64, u64);
const_matches_runtime!(test_const_matches_runtime_u128, u128);
const_matches_runtime!(test_const_matches_runtime_usize, usize);

#[test]
fn test_const_cast_matches_runtime() {
    const NEG_TO_U8: u8 = ConstEval::<u8>::saturate_from_signed(-5i16 as i128);
    const BIG_TO_I8: i8 = ConstEval::<i8>::saturate_from_signed(i128::MAX);
    const HUGE_TO_I64: i64 = ConstEval::<i64>::saturate_from_unsigned(u128::MAX);
    const FITS: u16 = ConstEval::<u16>::saturate_from_unsigned(40_000u32 as u128);

    assert_eq!(NEG_TO_U8, saturate_cast::<u8, i16>(-5));
    assert_eq!(BIG_TO_I8, saturate_cast::<i8, i128>(i128::MAX));
    assert_eq!(HUGE_TO_I64, saturate_cast::<i64, u128>(u128::MAX));
    assert_eq!(FITS, saturate_cast::<u16, u32>(40_000));
}
