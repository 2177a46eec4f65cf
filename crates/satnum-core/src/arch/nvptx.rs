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

use core::arch::asm;

use super::FastPath;

// PTX only has saturating add/sub for 32-bit signed operands.
impl FastPath for i32 {
    #[inline(always)]
    fn instruction_add_sat(self, rhs: Self) -> Option<Self> {
        let result: i32;
        // SAFETY: `add.sat.s32` reads two registers and writes one; it touches
        // no memory and cannot trap.
        unsafe {
            asm!(
                "add.sat.s32 {0}, {1}, {2};",
                out(reg32) result,
                in(reg32) self,
                in(reg32) rhs,
                options(pure, nomem, nostack),
            );
        }
        Some(result)
    }

    #[inline(always)]
    fn instruction_sub_sat(self, rhs: Self) -> Option<Self> {
        let result: i32;
        // SAFETY: see `instruction_add_sat`.
        unsafe {
            asm!(
                "sub.sat.s32 {0}, {1}, {2};",
                out(reg32) result,
                in(reg32) self,
                in(reg32) rhs,
                options(pure, nomem, nostack),
            );
        }
        Some(result)
    }
}
