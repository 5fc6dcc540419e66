// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Integers stored in 3, 5, 6 or 7 bytes.
//!
//! Each narrow width wraps the smallest native integer that holds it.
//! Unsigned values are truncated to the narrow width. Signed values are
//! folded into the narrow width with two's-complement range compression on
//! write and sign-extended back on read.
//!
//! Values outside `MIN..=MAX` are not rejected. Only the low `WIDTH` bytes
//! reach the wire, so such a value reads back as a different one:
//! `I24(1 << 23)` comes back as `I24(I24::MIN)` and `U24(1 << 24)` as
//! `U24(0)`. Build values with `checked` when the native integer is not
//! known to be in range.

use crate::codec::number::FixedWidth;
use crate::error::Error;
use byteorder::{ByteOrder, LittleEndian};
use std::ops::{BitAnd, BitXor};

/// Native signed integer that narrow widths fold into and expand from.
pub trait NativeSigned:
    Copy + Eq + Ord + BitXor<Output = Self> + BitAnd<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;
    /// All bits set, i.e. `-1`.
    const ALL: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
}

macro_rules! impl_native_signed {
    ($($ty:ty),*) => {
        $(
            impl NativeSigned for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const ALL: Self = -1;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }
            }
        )*
    };
}

impl_native_signed!(i32, i64);

/// Folds a native signed value into a narrow width whose all-bits-set mask
/// is `small_mask`. Non-negative values pass through.
#[inline(always)]
pub fn twos_complement_shrink<T: NativeSigned>(value: T, small_mask: T) -> T {
    if value < T::ZERO {
        ((value ^ T::ALL).wrapping_add(T::ONE) ^ small_mask).wrapping_add(T::ONE)
    } else {
        value
    }
}

/// Sign-extends a narrow value back to its native width.
///
/// `min_small` is the narrow sign bit, which is also the bit pattern of the
/// most negative narrow value. That value has no positive complement, so it
/// maps straight to its native equivalent.
#[inline(always)]
pub fn twos_complement_expand<T: NativeSigned>(value: T, min_small: T, small_mask: T) -> T {
    if value & min_small != min_small {
        return value;
    }
    if value ^ min_small == T::ZERO {
        return min_small.wrapping_sub(T::ONE) ^ T::ALL;
    }
    ((value ^ small_mask).wrapping_add(T::ONE) ^ T::ALL).wrapping_add(T::ONE)
}

macro_rules! impl_narrow_unsigned {
    ($name:ident, $native:ty, $width:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $native);

        impl $name {
            pub const MAX: $native = ((1u64 << ($width * 8)) - 1) as $native;

            /// `None` when `v` does not fit in the narrow width.
            pub fn checked(v: $native) -> Option<Self> {
                (v <= Self::MAX).then_some($name(v))
            }
        }

        impl From<$name> for $native {
            fn from(v: $name) -> $native {
                v.0
            }
        }

        impl FixedWidth for $name {
            const WIDTH: usize = $width;

            #[inline(always)]
            fn encode(self, buf: &mut [u8]) {
                LittleEndian::write_uint(buf, self.0 as u64 & Self::MAX as u64, $width)
            }

            #[inline(always)]
            fn decode(buf: &[u8]) -> Result<Self, Error> {
                Ok($name(LittleEndian::read_uint(buf, $width) as $native))
            }
        }
        impl_access_for_fixed!($name);
    };
}

macro_rules! impl_narrow_signed {
    ($name:ident, $native:ty, $width:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub $native);

        impl $name {
            /// All narrow bits set.
            pub const MASK: $native = ((1i64 << ($width * 8)) - 1) as $native;
            /// Narrow sign bit.
            pub const SIGN: $native = (1i64 << ($width * 8 - 1)) as $native;
            pub const MIN: $native = -Self::SIGN;
            pub const MAX: $native = Self::SIGN - 1;

            /// `None` when `v` does not fit in the narrow width.
            pub fn checked(v: $native) -> Option<Self> {
                (Self::MIN..=Self::MAX).contains(&v).then_some($name(v))
            }
        }

        impl From<$name> for $native {
            fn from(v: $name) -> $native {
                v.0
            }
        }

        impl FixedWidth for $name {
            const WIDTH: usize = $width;

            #[inline(always)]
            fn encode(self, buf: &mut [u8]) {
                let folded = twos_complement_shrink(self.0, Self::MASK) & Self::MASK;
                LittleEndian::write_uint(buf, folded as u64, $width)
            }

            #[inline(always)]
            fn decode(buf: &[u8]) -> Result<Self, Error> {
                let raw = LittleEndian::read_uint(buf, $width) as $native;
                Ok($name(twos_complement_expand(raw, Self::SIGN, Self::MASK)))
            }
        }
        impl_access_for_fixed!($name);
    };
}

impl_narrow_unsigned!(U24, u32, 3, "Unsigned 24-bit integer carried in a `u32`, 3 bytes on the wire.");
impl_narrow_unsigned!(U40, u64, 5, "Unsigned 40-bit integer carried in a `u64`, 5 bytes on the wire.");
impl_narrow_unsigned!(U48, u64, 6, "Unsigned 48-bit integer carried in a `u64`, 6 bytes on the wire.");
impl_narrow_unsigned!(U56, u64, 7, "Unsigned 56-bit integer carried in a `u64`, 7 bytes on the wire.");
impl_narrow_signed!(I24, i32, 3, "Signed 24-bit integer carried in an `i32`, 3 bytes on the wire.");
impl_narrow_signed!(I40, i64, 5, "Signed 40-bit integer carried in an `i64`, 5 bytes on the wire.");
impl_narrow_signed!(I48, i64, 6, "Signed 48-bit integer carried in an `i64`, 6 bytes on the wire.");
impl_narrow_signed!(I56, i64, 7, "Signed 56-bit integer carried in an `i64`, 7 bytes on the wire.");
