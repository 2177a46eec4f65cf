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

//! # Numeric Foundations
//!
//! Integer range information, the integral bound, saturating arithmetic and
//! saturating conversion.
//!
//! ## Submodules
//!
//! - `limits`: `IntRange`, the compile-time `MIN`/`MAX`/`BITS`/`SIGNED`
//!   constants of every primitive integer type.
//! - `int`: `SatInt`, the sealed bound accepted by every operation, with the
//!   unsigned-counterpart mapping and the per-type primitives.
//! - `ops`: overflow strategies, the clamp policy, the environment
//!   dispatcher and the public `add_sat`/`sub_sat`/`mul_sat`.
//! - `cast`: `saturate_cast` between any two integer types.
//!
//! ## Motivation
//!
//! Wraparound is rarely the arithmetic a caller wants near the edges of a
//! type's range. These modules give every width the same clamping semantics
//! through one generic algorithm, whichever overflow primitive the build
//! ends up using.

pub mod cast;
pub mod int;
pub mod limits;
pub mod ops;
