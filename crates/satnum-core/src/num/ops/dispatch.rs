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

//! Environment dispatcher.
//!
//! Picks the overflow strategy the public operations run with. The choice is
//! a type alias resolved by `cfg`, so it costs nothing at runtime:
//!
//! 1. feature `portable`: [`Portable`](crate::num::ops::overflow::Portable),
//!    unconditionally;
//! 2. feature `builtin` (default):
//!    [`NativeChecked`](crate::num::ops::overflow::NativeChecked);
//! 3. otherwise
//!    [`HardwareInstruction`](crate::num::ops::overflow::HardwareInstruction),
//!    which uses whatever instructions the
//!    target has for the width at hand (`nvptx64` with `ptx-asm`: 32-bit
//!    signed saturating add/sub; `x86_64`: carry/borrow intrinsics and the
//!    widening multiply) and
//!    the portable algorithm for the rest.
//!
//! Constant evaluation never goes through this alias: generic trait methods
//! cannot run in a `const fn`, so `const` callers use
//! [`ConstEval`](crate::num::ops::const_eval::ConstEval), whose results are
//! tested to be identical.

use crate::num::ops::overflow::{OverflowStrategy, StrategyKind};

/// The strategy the runtime entry points use in this build.
#[cfg(feature = "portable")]
pub type Selected = crate::num::ops::overflow::Portable;

/// The strategy the runtime entry points use in this build.
#[cfg(all(not(feature = "portable"), feature = "builtin"))]
pub type Selected = crate::num::ops::overflow::NativeChecked;

/// The strategy the runtime entry points use in this build.
#[cfg(all(not(feature = "portable"), not(feature = "builtin")))]
pub type Selected = crate::num::ops::overflow::HardwareInstruction;

/// Tag of [`Selected`], for diagnostics.
///
/// # Examples
///
/// ```rust
/// # use satnum_core::num::ops::dispatch::SELECTED_STRATEGY;
/// println!("saturating arithmetic uses the {} strategy", SELECTED_STRATEGY);
/// ```
pub const SELECTED_STRATEGY: StrategyKind = <Selected as OverflowStrategy>::KIND;

/// Whether this build targets the accelerator execution context.
///
/// Diagnostics only, like [`SELECTED_STRATEGY`]: on the accelerator the
/// `HardwareInstruction` route reaches the PTX saturating instructions when
/// `ptx-asm` is enabled and `builtin` is not.
pub const ACCELERATOR_TARGET: bool = cfg!(target_arch = "nvptx64");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_follows_features() {
        let expected = if cfg!(feature = "portable") {
            StrategyKind::Portable
        } else if cfg!(feature = "builtin") {
            StrategyKind::NativeChecked
        } else {
            StrategyKind::HardwareInstruction
        };
        assert_eq!(SELECTED_STRATEGY, expected);
        assert_eq!(ACCELERATOR_TARGET, cfg!(target_arch = "nvptx64"));
    }

    #[test]
    fn test_selected_saturates() {
        assert_eq!(Selected::add_sat(i8::MAX, 1), i8::MAX);
        assert_eq!(Selected::sub_sat(0u8, 1), 0);
        assert_eq!(Selected::mul_sat(i8::MIN, 2), i8::MIN);
    }
}
