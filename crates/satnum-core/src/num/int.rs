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

//! The integral bound shared by every saturating operation.
//!
//! `SatInt` is implemented for exactly the twelve primitive integer types and
//! is sealed, so passing anything else (floats, wrappers, `bool`) is rejected
//! at compile time. Besides the `num_traits` capabilities the generic
//! algorithms need, it provides:
//!
//! - the unsigned counterpart of the type and lossless bit reinterpretation
//!   to and from it,
//! - the toolchain's checked-arithmetic builtins (`native_overflowing_*`),
//! - runtime access to the constant-evaluation strategy
//!   (`const_overflowing_*`),
//! - the clamp policy (`clamp_*`).

use core::fmt::Debug;
use core::hash::Hash;

use num_traits::{PrimInt, WrappingAdd, WrappingMul, WrappingSub};

use crate::arch::FastPath;
use crate::num::limits::IntRange;
use crate::num::ops::clamp::ClampPolicy;
use crate::num::ops::const_eval::ConstEval;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width primitive integer usable with the saturating operations.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::int::SatInt;
/// fn reinterpret<T: SatInt>(x: T) -> T::Unsigned {
///     x.to_unsigned()
/// }
///
/// assert_eq!(reinterpret(-1i8), 255u8);
/// assert_eq!(<i8 as SatInt>::from_unsigned(128u8), -128i8);
/// ```
pub trait SatInt:
    PrimInt
    + WrappingAdd
    + WrappingSub
    + WrappingMul
    + IntRange
    + FastPath
    + Debug
    + Hash
    + Send
    + Sync
    + sealed::Sealed
    + 'static
{
    /// The unsigned type of the same width. Maps to itself for unsigned types.
    type Unsigned: SatInt<Unsigned = Self::Unsigned>;

    /// Reinterprets the bits of `self` as the unsigned counterpart.
    fn to_unsigned(self) -> Self::Unsigned;

    /// Reinterprets the bits of an unsigned counterpart value as `Self`.
    fn from_unsigned(bits: Self::Unsigned) -> Self;

    /// Wrapped sum and overflow flag from the compiler builtin.
    fn native_overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Wrapped difference and overflow flag from the compiler builtin.
    fn native_overflowing_sub(self, rhs: Self) -> (Self, bool);

    /// Wrapped product and overflow flag from the compiler builtin.
    fn native_overflowing_mul(self, rhs: Self) -> (Self, bool);

    /// Wrapped sum and overflow flag from the constant-evaluation strategy.
    fn const_overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Wrapped difference and overflow flag from the constant-evaluation strategy.
    fn const_overflowing_sub(self, rhs: Self) -> (Self, bool);

    /// Wrapped product and overflow flag from the constant-evaluation strategy.
    fn const_overflowing_mul(self, rhs: Self) -> (Self, bool);

    /// Applies the addition clamp policy.
    fn clamp_add(self, rhs: Self, raw: Self, overflowed: bool) -> Self;

    /// Applies the subtraction clamp policy.
    fn clamp_sub(self, rhs: Self, raw: Self, overflowed: bool) -> Self;

    /// Applies the multiplication clamp policy.
    fn clamp_mul(self, rhs: Self, raw: Self, overflowed: bool) -> Self;
}

macro_rules! sat_int_impl {
    ($t:ty, $u:ty) => {
        impl sealed::Sealed for $t {}

        impl SatInt for $t {
            type Unsigned = $u;

            #[inline(always)]
            fn to_unsigned(self) -> $u {
                self as $u
            }

            #[inline(always)]
            fn from_unsigned(bits: $u) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn native_overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }

            #[inline(always)]
            fn native_overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            #[inline(always)]
            fn native_overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }

            #[inline(always)]
            fn const_overflowing_add(self, rhs: Self) -> (Self, bool) {
                ConstEval::<$t>::overflowing_add(self, rhs)
            }

            #[inline(always)]
            fn const_overflowing_sub(self, rhs: Self) -> (Self, bool) {
                ConstEval::<$t>::overflowing_sub(self, rhs)
            }

            #[inline(always)]
            fn const_overflowing_mul(self, rhs: Self) -> (Self, bool) {
                ConstEval::<$t>::overflowing_mul(self, rhs)
            }

            #[inline(always)]
            fn clamp_add(self, rhs: Self, raw: Self, overflowed: bool) -> Self {
                ClampPolicy::<$t>::add(self, rhs, raw, overflowed)
            }

            #[inline(always)]
            fn clamp_sub(self, rhs: Self, raw: Self, overflowed: bool) -> Self {
                ClampPolicy::<$t>::sub(self, rhs, raw, overflowed)
            }

            #[inline(always)]
            fn clamp_mul(self, rhs: Self, raw: Self, overflowed: bool) -> Self {
                ClampPolicy::<$t>::mul(self, rhs, raw, overflowed)
            }
        }
    };
}

sat_int_impl!(i8, u8);
sat_int_impl!(i16, u16);
sat_int_impl!(i32, u32);
sat_int_impl!(i64, u64);
sat_int_impl!(i128, u128);
sat_int_impl!(isize, usize);

sat_int_impl!(u8, u8);
sat_int_impl!(u16, u16);
sat_int_impl!(u32, u32);
sat_int_impl!(u64, u64);
sat_int_impl!(u128, u128);
sat_int_impl!(usize, usize);
