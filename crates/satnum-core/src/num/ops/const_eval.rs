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

//! Constant-evaluation-safe strategy and the `const` public surface.
//!
//! Trait methods cannot be called from a `const fn` on stable Rust, so the
//! generic strategies in `overflow` are unavailable during constant
//! evaluation. This module expands one comparison-based template per
//! concrete integer type instead. The formulation never evaluates an
//! expression that could itself overflow:
//!
//! - add overflows iff `(y > 0 && x > MAX - y) || (y < 0 && x < MIN - y)`
//! - sub overflows iff `(y < 0 && x > MAX + y) || (y > 0 && x < MIN + y)`
//! - mul compares one operand against `MAX / y` or `MIN / y` depending on the
//!   sign quadrant; `MIN` is never divided by `-1`.
//!
//! The same functions are also reachable at runtime through
//! `SatInt::const_overflowing_*`, which is how the test-suite checks that
//! compile-time and runtime evaluation agree.

use core::marker::PhantomData;

use crate::num::ops::clamp::ClampPolicy;

/// Saturating operations usable in `const` contexts.
///
/// `ConstEval::<T>` carries one set of `const fn` associated functions per
/// integer type `T`.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::const_eval::ConstEval;
/// const SUM: i8 = ConstEval::<i8>::add_sat(100, 100);
/// const DIFF: i8 = ConstEval::<i8>::sub_sat(-100, 100);
/// const PRODUCT: i8 = ConstEval::<i8>::mul_sat(20, 20);
/// const CAST: u8 = ConstEval::<u8>::saturate_from_signed(-5i16 as i128);
///
/// assert_eq!(SUM, 127);
/// assert_eq!(DIFF, -128);
/// assert_eq!(PRODUCT, 127);
/// assert_eq!(CAST, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConstEval<T>(PhantomData<T>);

macro_rules! const_eval_impl {
    ($t:ty) => {
        #[allow(unused_comparisons)]
        impl ConstEval<$t> {
            /// Wrapped sum and overflow flag.
            #[inline(always)]
            pub const fn overflowing_add(x: $t, y: $t) -> ($t, bool) {
                let overflowed =
                    (y > 0 && x > <$t>::MAX - y) || (y < 0 && x < <$t>::MIN - y);
                (x.wrapping_add(y), overflowed)
            }

            /// Wrapped difference and overflow flag.
            #[inline(always)]
            pub const fn overflowing_sub(x: $t, y: $t) -> ($t, bool) {
                let overflowed =
                    (y < 0 && x > <$t>::MAX + y) || (y > 0 && x < <$t>::MIN + y);
                (x.wrapping_sub(y), overflowed)
            }

            /// Wrapped product and overflow flag.
            #[inline(always)]
            pub const fn overflowing_mul(x: $t, y: $t) -> ($t, bool) {
                let overflowed = if x == 0 || y == 0 {
                    false
                } else if x > 0 {
                    if y > 0 {
                        x > <$t>::MAX / y
                    } else {
                        y < <$t>::MIN / x
                    }
                } else if y > 0 {
                    x < <$t>::MIN / y
                } else {
                    x < <$t>::MAX / y
                };
                (x.wrapping_mul(y), overflowed)
            }

            /// Saturating addition.
            #[inline(always)]
            pub const fn add_sat(x: $t, y: $t) -> $t {
                let (raw, overflowed) = Self::overflowing_add(x, y);
                ClampPolicy::<$t>::add(x, y, raw, overflowed)
            }

            /// Saturating subtraction.
            #[inline(always)]
            pub const fn sub_sat(x: $t, y: $t) -> $t {
                let (raw, overflowed) = Self::overflowing_sub(x, y);
                ClampPolicy::<$t>::sub(x, y, raw, overflowed)
            }

            /// Saturating multiplication.
            #[inline(always)]
            pub const fn mul_sat(x: $t, y: $t) -> $t {
                let (raw, overflowed) = Self::overflowing_mul(x, y);
                ClampPolicy::<$t>::mul(x, y, raw, overflowed)
            }

            /// Saturating conversion from any signed integer, widened to `i128`.
            #[inline(always)]
            pub const fn saturate_from_signed(x: i128) -> $t {
                if x >= 0 {
                    Self::saturate_from_unsigned(x as u128)
                } else if x < <$t>::MIN as i128 {
                    <$t>::MIN
                } else {
                    x as $t
                }
            }

            /// Saturating conversion from any unsigned integer, widened to `u128`.
            #[inline(always)]
            pub const fn saturate_from_unsigned(x: u128) -> $t {
                if x > <$t>::MAX as u128 {
                    <$t>::MAX
                } else {
                    x as $t
                }
            }
        }
    };
}

const_eval_impl!(i8);
const_eval_impl!(i16);
const_eval_impl!(i32);
const_eval_impl!(i64);
const_eval_impl!(i128);
const_eval_impl!(isize);

const_eval_impl!(u8);
const_eval_impl!(u16);
const_eval_impl!(u32);
const_eval_impl!(u64);
const_eval_impl!(u128);
const_eval_impl!(usize);
