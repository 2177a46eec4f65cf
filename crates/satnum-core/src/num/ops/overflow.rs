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

//! Overflow primitives.
//!
//! An overflow primitive maps an operand pair to `(raw, overflowed)`, where
//! `raw` is the result reduced modulo `2^BITS` and `overflowed` tells whether
//! the exact result left `[MIN, MAX]`. Every strategy here must agree
//! bit-for-bit with every other one; they differ only in how they get there.
//!
//! - [`Portable`]: algebraic sign-rule detection in the unsigned domain. Needs
//!   nothing from the toolchain.
//! - [`NativeChecked`]: the compiler's checked-arithmetic builtins.
//! - [`HardwareInstruction`]: per-width target instructions where the target
//!   has them, [`Portable`] everywhere else.
//! - [`Constant`]: the constant-evaluation formulation from
//!   [`ConstEval`](crate::num::ops::const_eval::ConstEval), run at runtime.

use core::cmp::{max, min};

use num_traits::{One, WrappingAdd, WrappingMul, WrappingSub, Zero};

use crate::num::int::SatInt;

/// Capability tag naming an overflow strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Algebraic sign-rule detection, no builtins.
    Portable,
    /// Compiler checked-arithmetic builtins.
    NativeChecked,
    /// Target instructions with a portable fallback.
    HardwareInstruction,
    /// Comparison formulation usable in constant evaluation.
    Constant,
}

impl StrategyKind {
    /// A short, stable name for the strategy.
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Portable => "portable",
            StrategyKind::NativeChecked => "native-checked",
            StrategyKind::HardwareInstruction => "hardware-instruction",
            StrategyKind::Constant => "constant",
        }
    }
}

impl core::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An interchangeable way of detecting overflow, plus the saturating
/// operations composed from it and the clamp policy.
///
/// Strategies are zero-sized types selected at compile time; none of the
/// methods take `self`.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::overflow::{NativeChecked, OverflowStrategy, Portable};
/// assert_eq!(Portable::overflowing_add(i8::MAX, 1), (i8::MIN, true));
/// assert_eq!(NativeChecked::overflowing_add(i8::MAX, 1), (i8::MIN, true));
/// assert_eq!(Portable::add_sat(i8::MAX, 1), i8::MAX);
/// ```
pub trait OverflowStrategy {
    /// The tag identifying this strategy.
    const KIND: StrategyKind;

    /// Wrapped sum and overflow flag.
    fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool);

    /// Wrapped difference and overflow flag.
    fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool);

    /// Wrapped product and overflow flag.
    fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool);

    /// Saturating addition.
    #[inline(always)]
    fn add_sat<T: SatInt>(x: T, y: T) -> T {
        let (raw, overflowed) = Self::overflowing_add(x, y);
        x.clamp_add(y, raw, overflowed)
    }

    /// Saturating subtraction.
    #[inline(always)]
    fn sub_sat<T: SatInt>(x: T, y: T) -> T {
        let (raw, overflowed) = Self::overflowing_sub(x, y);
        x.clamp_sub(y, raw, overflowed)
    }

    /// Saturating multiplication.
    #[inline(always)]
    fn mul_sat<T: SatInt>(x: T, y: T) -> T {
        let (raw, overflowed) = Self::overflowing_mul(x, y);
        x.clamp_mul(y, raw, overflowed)
    }
}

/// Portable algebraic overflow detection.
///
/// Arithmetic runs on the unsigned counterpart so that it is plain modular
/// arithmetic for every width, then the flag is derived from sign bits:
///
/// - signed add: `(x ^ raw) & (y ^ raw)` is negative, i.e. both operands
///   share a sign and the result does not;
/// - signed sub: `(x ^ y) & (x ^ raw)` is negative, i.e. the operands differ
///   in sign and the result left the minuend's sign;
/// - unsigned add/sub: the result wrapped past the first operand.
///
/// Multiplication splits both magnitudes into half-width limbs so no wider
/// type is needed, which keeps `i128`/`u128` on the same code path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Portable;

impl OverflowStrategy for Portable {
    const KIND: StrategyKind = StrategyKind::Portable;

    #[inline(always)]
    fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool) {
        let raw = T::from_unsigned(x.to_unsigned().wrapping_add(&y.to_unsigned()));
        let overflowed = if T::SIGNED {
            ((x ^ raw) & (y ^ raw)) < T::zero()
        } else {
            raw < x
        };
        (raw, overflowed)
    }

    #[inline(always)]
    fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool) {
        let raw = T::from_unsigned(x.to_unsigned().wrapping_sub(&y.to_unsigned()));
        let overflowed = if T::SIGNED {
            ((x ^ y) & (x ^ raw)) < T::zero()
        } else {
            raw > x
        };
        (raw, overflowed)
    }

    #[inline(always)]
    fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool) {
        let raw = T::from_unsigned(x.to_unsigned().wrapping_mul(&y.to_unsigned()));
        if !T::SIGNED {
            return (raw, magnitude_mul_overflows(x.to_unsigned(), y.to_unsigned()));
        }

        let negative = (x < T::zero()) != (y < T::zero());
        let (a, b) = (unsigned_abs(x), unsigned_abs(y));
        if magnitude_mul_overflows(a, b) {
            return (raw, true);
        }

        // |MIN| is one larger than MAX, so a negative product gets one more.
        let mut limit = T::MAX.to_unsigned();
        if negative {
            limit = limit + T::Unsigned::one();
        }
        (raw, a.wrapping_mul(&b) > limit)
    }
}

/// `|x|` as the unsigned counterpart; exact for `MIN` as well.
#[inline(always)]
fn unsigned_abs<T: SatInt>(x: T) -> T::Unsigned {
    if x < T::zero() {
        T::Unsigned::zero().wrapping_sub(&x.to_unsigned())
    } else {
        x.to_unsigned()
    }
}

/// Whether `a * b` exceeds the unsigned type `U`.
///
/// With `a = a_hi * 2^h + a_lo` and `b = b_hi * 2^h + b_lo` for `h = BITS / 2`,
/// the product fits iff at most one high limb is set, the single cross term
/// stays below `2^h`, and adding the shifted cross term to `a_lo * b_lo`
/// does not carry.
#[inline(always)]
fn magnitude_mul_overflows<U: SatInt>(a: U, b: U) -> bool {
    let half = (U::BITS / 2) as usize;
    let mask = (U::one() << half) - U::one();
    let (a_hi, a_lo) = (a >> half, a & mask);
    let (b_hi, b_lo) = (b >> half, b & mask);

    if a_hi != U::zero() && b_hi != U::zero() {
        return true;
    }

    // Each partial product is below 2^BITS, and at most one cross term is non-zero.
    let cross = a_hi.wrapping_mul(&b_lo).wrapping_add(&a_lo.wrapping_mul(&b_hi));
    if cross > mask {
        return true;
    }

    let low = a_lo.wrapping_mul(&b_lo);
    (cross << half).wrapping_add(&low) < low
}

/// The compiler's checked-arithmetic builtins.
///
/// Rust's `overflowing_*` lower to LLVM's `*.with.overflow` intrinsics, the
/// same primitives C compilers expose as `__builtin_*_overflow`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NativeChecked;

impl OverflowStrategy for NativeChecked {
    const KIND: StrategyKind = StrategyKind::NativeChecked;

    #[inline(always)]
    fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.native_overflowing_add(y)
    }

    #[inline(always)]
    fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.native_overflowing_sub(y)
    }

    #[inline(always)]
    fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.native_overflowing_mul(y)
    }
}

/// Target instructions, narrowed per width and signedness.
///
/// The order of preference for add/sub is: a single saturating instruction
/// (PTX `add.sat.s32` on `i32`), a carry/borrow intrinsic resolved through
/// the clamp policy (x86_64 `u32`/`u64`), the branch-free unsigned forms
/// `x + min(y, !x)` and `max(x, y) - y`, and finally [`Portable`].
/// Multiplication takes the widening multiply of the target (x86_64 `imul`
/// and `mul` with the high half) where one exists, else [`Portable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HardwareInstruction;

impl OverflowStrategy for HardwareInstruction {
    const KIND: StrategyKind = StrategyKind::HardwareInstruction;

    #[inline(always)]
    fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool) {
        match x.intrinsic_overflowing_add(y) {
            Some(pair) => pair,
            None => Portable::overflowing_add(x, y),
        }
    }

    #[inline(always)]
    fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool) {
        match x.intrinsic_overflowing_sub(y) {
            Some(pair) => pair,
            None => Portable::overflowing_sub(x, y),
        }
    }

    #[inline(always)]
    fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool) {
        match x.intrinsic_overflowing_mul(y) {
            Some(pair) => pair,
            None => Portable::overflowing_mul(x, y),
        }
    }

    #[inline(always)]
    fn add_sat<T: SatInt>(x: T, y: T) -> T {
        if let Some(saturated) = x.instruction_add_sat(y) {
            return saturated;
        }
        if let Some((raw, overflowed)) = x.intrinsic_overflowing_add(y) {
            return x.clamp_add(y, raw, overflowed);
        }
        if !T::SIGNED {
            // `!x` is the headroom `MAX - x`.
            return x + min(y, !x);
        }
        Portable::add_sat(x, y)
    }

    #[inline(always)]
    fn sub_sat<T: SatInt>(x: T, y: T) -> T {
        if let Some(saturated) = x.instruction_sub_sat(y) {
            return saturated;
        }
        if let Some((raw, overflowed)) = x.intrinsic_overflowing_sub(y) {
            return x.clamp_sub(y, raw, overflowed);
        }
        if !T::SIGNED {
            return max(x, y) - y;
        }
        Portable::sub_sat(x, y)
    }
}

/// The constant-evaluation formulation, callable at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Constant;

impl OverflowStrategy for Constant {
    const KIND: StrategyKind = StrategyKind::Constant;

    #[inline(always)]
    fn overflowing_add<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.const_overflowing_add(y)
    }

    #[inline(always)]
    fn overflowing_sub<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.const_overflowing_sub(y)
    }

    #[inline(always)]
    fn overflowing_mul<T: SatInt>(x: T, y: T) -> (T, bool) {
        x.const_overflowing_mul(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_agrees<S: OverflowStrategy, T: SatInt>(x: T, y: T) {
        assert_eq!(
            S::overflowing_add(x, y),
            x.native_overflowing_add(y),
            "{} add {:?} {:?}",
            S::KIND,
            x,
            y
        );
        assert_eq!(
            S::overflowing_sub(x, y),
            x.native_overflowing_sub(y),
            "{} sub {:?} {:?}",
            S::KIND,
            x,
            y
        );
        assert_eq!(
            S::overflowing_mul(x, y),
            x.native_overflowing_mul(y),
            "{} mul {:?} {:?}",
            S::KIND,
            x,
            y
        );
    }

    fn extremes<T: SatInt>() -> [T; 7] {
        let one = T::one();
        let two = one + one;
        let mid = T::MAX / two;
        [T::MIN, T::MIN + one, T::zero(), one, mid, T::MAX - one, T::MAX]
    }

    fn check_all_strategies<T: SatInt>() {
        let values = extremes::<T>();
        let mut signed_values = values.to_vec();
        if T::SIGNED {
            signed_values.push(T::zero() - T::one());
            signed_values.push(T::zero() - T::one() - T::one());
        }
        for &x in &signed_values {
            for &y in &signed_values {
                assert_agrees::<Portable, T>(x, y);
                assert_agrees::<HardwareInstruction, T>(x, y);
                assert_agrees::<Constant, T>(x, y);
            }
        }
    }

    #[test]
    fn test_strategies_agree_on_extremes() {
        check_all_strategies::<i8>();
        check_all_strategies::<i16>();
        check_all_strategies::<i32>();
        check_all_strategies::<i64>();
        check_all_strategies::<i128>();
        check_all_strategies::<isize>();
        check_all_strategies::<u8>();
        check_all_strategies::<u16>();
        check_all_strategies::<u32>();
        check_all_strategies::<u64>();
        check_all_strategies::<u128>();
        check_all_strategies::<usize>();
    }

    #[test]
    fn test_portable_mul_exhaustive_8_bit() {
        for x in i8::MIN..=i8::MAX {
            for y in i8::MIN..=i8::MAX {
                assert_eq!(Portable::overflowing_mul(x, y), x.overflowing_mul(y));
            }
        }
        for x in u8::MIN..=u8::MAX {
            for y in u8::MIN..=u8::MAX {
                assert_eq!(Portable::overflowing_mul(x, y), x.overflowing_mul(y));
            }
        }
    }

    #[test]
    fn test_portable_mul_128_bit_boundaries() {
        let half = 1u128 << 64;
        assert_eq!(Portable::overflowing_mul(half, half), (0, true));
        assert_eq!(Portable::overflowing_mul(half - 1, half + 1), (u128::MAX, false));
        assert_eq!(Portable::overflowing_mul(u128::MAX, 1), (u128::MAX, false));
        assert_eq!(Portable::overflowing_mul(i128::MIN, -1), (i128::MIN, true));
        assert_eq!(Portable::overflowing_mul(i128::MIN, 1), (i128::MIN, false));
        assert_eq!(
            Portable::overflowing_mul(-(1i128 << 63), 1i128 << 64),
            (i128::MIN, false)
        );
    }

    #[test]
    fn test_hardware_unsigned_saturating_forms() {
        assert_eq!(HardwareInstruction::add_sat(250u8, 10), u8::MAX);
        assert_eq!(HardwareInstruction::add_sat(250u8, 5), 255);
        assert_eq!(HardwareInstruction::sub_sat(5u16, 10), 0);
        assert_eq!(HardwareInstruction::sub_sat(10u16, 5), 5);
        assert_eq!(HardwareInstruction::add_sat(u64::MAX, 1), u64::MAX);
        assert_eq!(HardwareInstruction::sub_sat(0u32, 1), 0);
        assert_eq!(HardwareInstruction::add_sat(i32::MAX, 1), i32::MAX);
        assert_eq!(HardwareInstruction::sub_sat(i32::MIN, 1), i32::MIN);
    }

    #[test]
    fn test_hardware_mul_matches_builtin() {
        let signed = [(i32::MAX, 2), (i32::MIN, -1), (-46_341, 46_341), (-65_536, 32_768)];
        for (x, y) in signed {
            assert_eq!(HardwareInstruction::overflowing_mul(x, y), x.overflowing_mul(y));
        }
        let wide = [(i64::MIN, -1), (i64::MIN, 1), (-(1i64 << 32), 1i64 << 31), (1 << 32, 1 << 31)];
        for (x, y) in wide {
            assert_eq!(HardwareInstruction::overflowing_mul(x, y), x.overflowing_mul(y));
        }
        assert_eq!(HardwareInstruction::overflowing_mul(1u32 << 16, 1 << 16), (0, true));
        assert_eq!(HardwareInstruction::overflowing_mul(u64::MAX, 1), (u64::MAX, false));
        assert_eq!(HardwareInstruction::mul_sat(i64::MIN, 2), i64::MIN);
        assert_eq!(HardwareInstruction::mul_sat(u32::MAX, 3), u32::MAX);
    }

    #[test]
    fn test_strategy_kind_display() {
        assert_eq!(format!("{}", Portable::KIND), "portable");
        assert_eq!(format!("{}", NativeChecked::KIND), "native-checked");
        assert_eq!(format!("{}", HardwareInstruction::KIND), "hardware-instruction");
        assert_eq!(format!("{}", Constant::KIND), "constant");
    }
}
