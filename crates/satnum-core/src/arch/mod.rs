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

//! # Target Fast Paths
//!
//! Per-width hooks into instructions a specific target provides. Every hook
//! defaults to `None`, meaning "no instruction for this width here"; the
//! `HardwareInstruction` strategy then falls back to the portable algorithm.
//!
//! ## Submodules
//!
//! - `x86_64`: carry/borrow intrinsics (`_addcarry_u32`, `_addcarry_u64`,
//!   `_subborrow_u32`, `_subborrow_u64`) for 32/64-bit unsigned add/sub, and
//!   the widening multiply for 32/64-bit signed and unsigned mul.
//! - `nvptx`: the PTX `add.sat.s32`/`sub.sat.s32` instructions for `i32`
//!   (feature `ptx-asm`).
//!
//! Widths without an instruction on the current target get the empty
//! default implementation below, so the set of overriding impls is decided
//! entirely by `cfg`.

#[cfg(all(target_arch = "nvptx64", feature = "ptx-asm"))]
mod nvptx;
#[cfg(target_arch = "x86_64")]
mod x86_64;

/// Target-specific instruction hooks for a single integer width.
///
/// The two families differ in what they produce:
///
/// - `intrinsic_overflowing_*` return the wrapped result plus the overflow
///   flag, exactly like a checked-arithmetic primitive, and are resolved by
///   the regular clamp policy.
/// - `instruction_*_sat` return the already saturated value.
///
/// Implementations must agree bit-for-bit with the portable strategy.
pub trait FastPath: Sized + Copy {
    /// Wrapped sum and overflow flag from a target intrinsic, if one exists.
    #[inline(always)]
    fn intrinsic_overflowing_add(self, _rhs: Self) -> Option<(Self, bool)> {
        None
    }

    /// Wrapped difference and overflow flag from a target intrinsic, if one exists.
    #[inline(always)]
    fn intrinsic_overflowing_sub(self, _rhs: Self) -> Option<(Self, bool)> {
        None
    }

    /// Wrapped product and overflow flag from a widening multiply, if one exists.
    #[inline(always)]
    fn intrinsic_overflowing_mul(self, _rhs: Self) -> Option<(Self, bool)> {
        None
    }

    /// Saturated sum from a single hardware instruction, if one exists.
    #[inline(always)]
    fn instruction_add_sat(self, _rhs: Self) -> Option<Self> {
        None
    }

    /// Saturated difference from a single hardware instruction, if one exists.
    #[inline(always)]
    fn instruction_sub_sat(self, _rhs: Self) -> Option<Self> {
        None
    }
}

macro_rules! no_fast_path {
    ($($t:ty),* $(,)?) => {
        $(impl FastPath for $t {})*
    };
}

no_fast_path!(i8, i16, i128, isize);
no_fast_path!(u8, u16, u128, usize);

#[cfg(not(target_arch = "x86_64"))]
no_fast_path!(i64, u32, u64);

#[cfg(not(any(target_arch = "x86_64", all(target_arch = "nvptx64", feature = "ptx-asm"))))]
no_fast_path!(i32);
