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

//! # Satnum Core
//!
//! Saturating integer arithmetic for every primitive integer type from 8 to
//! 128 bits: results that leave `[MIN, MAX]` clamp to the nearest bound
//! instead of wrapping or panicking.
//!
//! ## Modules
//!
//! - `num`: range constants (`IntRange`), the sealed integral bound
//!   (`SatInt`), the saturating operations and their overflow strategies,
//!   and saturating conversion.
//! - `arch`: per-target instruction hooks (`FastPath`) used by the
//!   hardware-instruction strategy.
//!
//! ## Quick start
//!
//! ```rust
//! use satnum_core::{ConstEval, add_sat, mul_sat, saturate_cast, sub_sat};
//!
//! assert_eq!(add_sat(100i8, 100i8), 127);
//! assert_eq!(sub_sat(-100i8, 100i8), -128);
//! assert_eq!(mul_sat(20i8, 20i8), 127);
//! assert_eq!(saturate_cast::<u8, i16>(-5), 0);
//!
//! // The same operations in a constant context.
//! const LIMIT: u32 = ConstEval::<u32>::mul_sat(1 << 20, 1 << 20);
//! assert_eq!(LIMIT, u32::MAX);
//! ```
//!
//! ## Strategies
//!
//! Overflow detection is pluggable (`Portable`, `NativeChecked`,
//! `HardwareInstruction`, `Constant`) and chosen at compile time through
//! Cargo features and the target; see `num::ops::dispatch`. Every strategy
//! yields identical results, and none of the operations can fail.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(
    all(target_arch = "nvptx64", feature = "ptx-asm"),
    feature(asm_experimental_arch)
)]

pub mod arch;
pub mod num;

pub use num::cast::{SaturateCast, saturate_cast};
pub use num::int::SatInt;
pub use num::limits::IntRange;
pub use num::ops::const_eval::ConstEval;
pub use num::ops::dispatch::SELECTED_STRATEGY;
pub use num::ops::saturating_arithmetic::{AddSat, MulSat, SubSat, add_sat, mul_sat, sub_sat};
