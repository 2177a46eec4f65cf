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

use crate::num::int::SatInt;
use crate::num::ops::dispatch::Selected;
use crate::num::ops::overflow::OverflowStrategy;

/// Saturating addition.
///
/// Returns `x + y` clamped to `[T::MIN, T::MAX]`. Never panics, for any input.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::add_sat;
/// assert_eq!(add_sat(100i8, 100i8), 127);
/// assert_eq!(add_sat(-100i8, -100i8), -128);
/// assert_eq!(add_sat(250u8, 10u8), 255);
/// assert_eq!(add_sat(1u8, 2u8), 3);
/// ```
#[inline(always)]
#[must_use]
pub fn add_sat<T: SatInt>(x: T, y: T) -> T {
    Selected::add_sat(x, y)
}

/// Saturating subtraction.
///
/// Returns `x - y` clamped to `[T::MIN, T::MAX]`. Never panics, for any input.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::sub_sat;
/// assert_eq!(sub_sat(-100i8, 100i8), -128);
/// assert_eq!(sub_sat(100i8, -100i8), 127);
/// assert_eq!(sub_sat(0u32, 1u32), 0);
/// ```
#[inline(always)]
#[must_use]
pub fn sub_sat<T: SatInt>(x: T, y: T) -> T {
    Selected::sub_sat(x, y)
}

/// Saturating multiplication.
///
/// Returns `x * y` clamped to `[T::MIN, T::MAX]`. Never panics, for any input.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::mul_sat;
/// assert_eq!(mul_sat(20i8, 20i8), 127);
/// assert_eq!(mul_sat(-20i8, 20i8), -128);
/// assert_eq!(mul_sat(i64::MIN, -1), i64::MAX);
/// assert_eq!(mul_sat(u128::MAX, 2), u128::MAX);
/// ```
#[inline(always)]
#[must_use]
pub fn mul_sat<T: SatInt>(x: T, y: T) -> T {
    Selected::mul_sat(x, y)
}

/// Wrapped sum and overflow flag from the selected strategy.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::overflowing_add;
/// assert_eq!(overflowing_add(i8::MAX, 1), (i8::MIN, true));
/// assert_eq!(overflowing_add(1u16, 2), (3, false));
/// ```
#[inline(always)]
pub fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool) {
    Selected::overflowing_add(x, y)
}

/// Wrapped difference and overflow flag from the selected strategy.
#[inline(always)]
pub fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool) {
    Selected::overflowing_sub(x, y)
}

/// Wrapped product and overflow flag from the selected strategy.
#[inline(always)]
pub fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool) {
    Selected::overflowing_mul(x, y)
}

/// Saturating addition by value, as a method.
///
/// Implemented for every [`SatInt`] type; the work is done by [`add_sat`].
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::AddSat;
/// let a: u8 = 250;
/// assert_eq!(a.add_sat(10), 255); // Clamps at u8::MAX
///
/// let m: i8 = -120;
/// assert_eq!(m.add_sat(-20), -128); // Clamps at i8::MIN
/// ```
pub trait AddSat: Sized {
    /// Performs saturating addition by value.
    fn add_sat(self, rhs: Self) -> Self;
}

impl<T: SatInt> AddSat for T {
    #[inline(always)]
    fn add_sat(self, rhs: Self) -> Self {
        add_sat(self, rhs)
    }
}

/// Saturating subtraction by value, as a method.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::SubSat;
/// let a: u8 = 5;
/// assert_eq!(a.sub_sat(10), 0); // Clamps at u8::MIN
///
/// let m: i8 = 120;
/// assert_eq!(m.sub_sat(-20), 127); // Clamps at i8::MAX
/// ```
pub trait SubSat: Sized {
    /// Performs saturating subtraction by value.
    fn sub_sat(self, rhs: Self) -> Self;
}

impl<T: SatInt> SubSat for T {
    #[inline(always)]
    fn sub_sat(self, rhs: Self) -> Self {
        sub_sat(self, rhs)
    }
}

/// Saturating multiplication by value, as a method.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::saturating_arithmetic::MulSat;
/// let a: u8 = 64;
/// assert_eq!(a.mul_sat(10), 255); // 640 -> clamps at u8::MAX
///
/// let m: i8 = -30;
/// assert_eq!(m.mul_sat(10), -128); // -300 -> clamps at i8::MIN
/// ```
pub trait MulSat: Sized {
    /// Performs saturating multiplication by value.
    fn mul_sat(self, rhs: Self) -> Self;
}

impl<T: SatInt> MulSat for T {
    #[inline(always)]
    fn mul_sat(self, rhs: Self) -> Self {
        mul_sat(self, rhs)
    }
}
