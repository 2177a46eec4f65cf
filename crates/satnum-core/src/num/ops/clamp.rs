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

//! Clamp policy: turns an overflow primitive's `(raw, overflowed)` pair into
//! the saturated value.
//!
//! The policy is a pure, total function of the operands. When no overflow
//! happened the wrapped result is already exact and is returned unchanged.
//! Otherwise the direction of the excursion is recovered from operand signs:
//!
//! | op  | unsigned | signed                                       |
//! |-----|----------|----------------------------------------------|
//! | add | `MAX`    | `MAX` if `x > 0`, else `MIN`                 |
//! | sub | `MIN`    | `MAX` if `x >= 0`, else `MIN`                |
//! | mul | `MAX`    | `MAX` if the operands share a sign, else `MIN` |
//!
//! The functions are `const` so the same policy serves compile-time
//! evaluation and every runtime strategy.

use core::marker::PhantomData;

/// Per-type clamp policy for add, sub and mul.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::clamp::ClampPolicy;
/// let (raw, overflowed) = 100i8.overflowing_add(100);
/// assert_eq!(ClampPolicy::<i8>::add(100, 100, raw, overflowed), 127);
///
/// let (raw, overflowed) = 3u8.overflowing_sub(5);
/// assert_eq!(ClampPolicy::<u8>::sub(3, 5, raw, overflowed), 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClampPolicy<T>(PhantomData<T>);

macro_rules! clamp_policy_impl {
    ($t:ty) => {
        #[allow(unused_comparisons)]
        impl ClampPolicy<$t> {
            const SIGNED: bool = <$t>::MIN != 0;

            /// Resolves an addition result.
            #[inline(always)]
            pub const fn add(x: $t, _y: $t, raw: $t, overflowed: bool) -> $t {
                if !overflowed {
                    raw
                } else if !Self::SIGNED || x > 0 {
                    <$t>::MAX
                } else {
                    <$t>::MIN
                }
            }

            /// Resolves a subtraction result.
            #[inline(always)]
            pub const fn sub(x: $t, _y: $t, raw: $t, overflowed: bool) -> $t {
                if !overflowed {
                    raw
                } else if Self::SIGNED && x >= 0 {
                    <$t>::MAX
                } else {
                    <$t>::MIN
                }
            }

            /// Resolves a multiplication result.
            #[inline(always)]
            pub const fn mul(x: $t, y: $t, raw: $t, overflowed: bool) -> $t {
                if !overflowed {
                    raw
                } else if !Self::SIGNED || (x < 0) == (y < 0) {
                    <$t>::MAX
                } else {
                    <$t>::MIN
                }
            }
        }
    };
}

clamp_policy_impl!(i8);
clamp_policy_impl!(i16);
clamp_policy_impl!(i32);
clamp_policy_impl!(i64);
clamp_policy_impl!(i128);
clamp_policy_impl!(isize);

clamp_policy_impl!(u8);
clamp_policy_impl!(u16);
clamp_policy_impl!(u32);
clamp_policy_impl!(u64);
clamp_policy_impl!(u128);
clamp_policy_impl!(usize);
