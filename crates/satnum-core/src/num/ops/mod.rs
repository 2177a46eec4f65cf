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

//! # Saturating Operations
//!
//! The arithmetic core. A public operation asks the dispatcher for a
//! strategy, the strategy produces `(raw, overflowed)`, and the clamp policy
//! turns that into the final value.
//!
//! ## Submodules
//!
//! - `overflow`: the `OverflowStrategy` trait and its implementations
//!   (`Portable`, `NativeChecked`, `HardwareInstruction`, `Constant`).
//! - `clamp`: `ClampPolicy`, the per-operation rules choosing `MIN` or `MAX`.
//! - `const_eval`: `ConstEval<T>`, the comparison-based strategy expanded per
//!   type as `const fn`, and the whole `const` API.
//! - `dispatch`: `Selected`, the strategy this build runs with.
//! - `saturating_arithmetic`: `add_sat`, `sub_sat`, `mul_sat`, the
//!   `overflowing_*` functions and the `AddSat`/`SubSat`/`MulSat` method
//!   traits.
//!
//! ## Motivation
//!
//! Every path (builtin, target instruction, portable, constant evaluation)
//! must produce the same bits. Keeping detection and clamping apart lets the
//! clamp policy be written once and shared by all of them.

pub mod clamp;
pub mod const_eval;
pub mod dispatch;
pub mod overflow;
pub mod saturating_arithmetic;
