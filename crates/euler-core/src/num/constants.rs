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

/// A trait for integer types that have a constant representing 2.
pub trait Two {
    /// The constant representing 2 for the implementing type.
    const TWO: Self;
}

/// A trait for integer types that have a constant representing 3.
pub trait Three {
    /// The constant representing 3 for the implementing type.
    const THREE: Self;
}

/// A trait for integer types that have a constant representing 5.
pub trait Five {
    /// The constant representing 5 for the implementing type.
    const FIVE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $($t:ty),+) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

impl_const_for!(Two, TWO, 2, u8, u16, u32, u64, u128, usize);
impl_const_for!(Two, TWO, 2, i8, i16, i32, i64, i128, isize);

impl_const_for!(Three, THREE, 3, u8, u16, u32, u64, u128, usize);
impl_const_for!(Three, THREE, 3, i8, i16, i32, i64, i128, isize);

impl_const_for!(Five, FIVE, 5, u8, u16, u32, u64, u128, usize);
impl_const_for!(Five, FIVE, 5, i8, i16, i32, i64, i128, isize);
