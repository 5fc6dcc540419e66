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

//! Fixed-width scalar family.
//!
//! Every scalar is little-endian and occupies a width known from its type
//! alone, so Peek and Slice are O(1). `usize`/`isize` always use 8 bytes so
//! that the wire format does not depend on the platform.

use crate::buffer::Crate;
use crate::error::Error;
use byteorder::{ByteOrder, LittleEndian};
use std::ops::Range;

/// A value with a static wire width.
pub trait FixedWidth: Copy {
    const WIDTH: usize;

    /// Writes exactly `WIDTH` bytes into `buf`.
    fn encode(self, buf: &mut [u8]);

    /// Decodes from exactly `WIDTH` bytes.
    fn decode(buf: &[u8]) -> Result<Self, Error>;
}

#[inline(always)]
pub fn write_fixed<T: FixedWidth>(c: &mut Crate, value: T) -> Result<(), Error> {
    c.write_with(T::WIDTH, |buf| value.encode(buf))
}

#[inline(always)]
pub fn peek_fixed<T: FixedWidth>(c: &Crate) -> Result<T, Error> {
    T::decode(c.peek_bytes(T::WIDTH)?)
}

#[inline(always)]
pub fn read_fixed<T: FixedWidth>(c: &mut Crate) -> Result<T, Error> {
    let value = peek_fixed(c)?;
    c.read_pos += T::WIDTH;
    Ok(value)
}

#[inline(always)]
pub fn span_fixed<T: FixedWidth>(c: &Crate) -> Result<Range<usize>, Error> {
    c.check_read(T::WIDTH)?;
    Ok(c.read_index()..c.read_index() + T::WIDTH)
}

macro_rules! impl_access_for_fixed {
    ($ty:ty) => {
        impl $crate::codec::core::Access for $ty {
            #[inline(always)]
            fn write_into(&self, c: &mut $crate::buffer::Crate) -> Result<(), $crate::error::Error> {
                $crate::codec::number::write_fixed(c, *self)
            }

            #[inline(always)]
            fn read_from(c: &mut $crate::buffer::Crate) -> Result<Self, $crate::error::Error> {
                $crate::codec::number::read_fixed(c)
            }

            #[inline(always)]
            fn peek_from(c: &mut $crate::buffer::Crate) -> Result<Self, $crate::error::Error> {
                $crate::codec::number::peek_fixed(c)
            }

            #[inline(always)]
            fn discard_from(c: &mut $crate::buffer::Crate) -> Result<(), $crate::error::Error> {
                c.skip(<$ty as $crate::codec::number::FixedWidth>::WIDTH)
            }

            #[inline(always)]
            fn span_in(
                c: &mut $crate::buffer::Crate,
            ) -> Result<std::ops::Range<usize>, $crate::error::Error> {
                $crate::codec::number::span_fixed::<$ty>(c)
            }

            #[inline(always)]
            fn encoded_len(&self) -> usize {
                <$ty as $crate::codec::number::FixedWidth>::WIDTH
            }
        }
    };
}

macro_rules! impl_fixed_width {
    ($ty:ty, $width:expr, $writer:expr, $reader:expr) => {
        impl FixedWidth for $ty {
            const WIDTH: usize = $width;

            #[inline(always)]
            fn encode(self, buf: &mut [u8]) {
                $writer(buf, self)
            }

            #[inline(always)]
            fn decode(buf: &[u8]) -> Result<Self, Error> {
                Ok($reader(buf))
            }
        }
        impl_access_for_fixed!($ty);
    };
}

impl_fixed_width!(u16, 2, LittleEndian::write_u16, LittleEndian::read_u16);
impl_fixed_width!(i16, 2, LittleEndian::write_i16, LittleEndian::read_i16);
impl_fixed_width!(u32, 4, LittleEndian::write_u32, LittleEndian::read_u32);
impl_fixed_width!(i32, 4, LittleEndian::write_i32, LittleEndian::read_i32);
impl_fixed_width!(u64, 8, LittleEndian::write_u64, LittleEndian::read_u64);
impl_fixed_width!(i64, 8, LittleEndian::write_i64, LittleEndian::read_i64);
impl_fixed_width!(u128, 16, LittleEndian::write_u128, LittleEndian::read_u128);
impl_fixed_width!(i128, 16, LittleEndian::write_i128, LittleEndian::read_i128);
impl_fixed_width!(f32, 4, LittleEndian::write_f32, LittleEndian::read_f32);
impl_fixed_width!(f64, 8, LittleEndian::write_f64, LittleEndian::read_f64);
impl_fixed_width!(u8, 1, |buf: &mut [u8], v: u8| buf[0] = v, |buf: &[u8]| buf[0]);
impl_fixed_width!(
    i8,
    1,
    |buf: &mut [u8], v: i8| buf[0] = v as u8,
    |buf: &[u8]| buf[0] as i8
);
impl_fixed_width!(
    bool,
    1,
    |buf: &mut [u8], v: bool| buf[0] = v as u8,
    |buf: &[u8]| buf[0] != 0
);

impl FixedWidth for usize {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn encode(self, buf: &mut [u8]) {
        LittleEndian::write_u64(buf, self as u64)
    }

    #[inline(always)]
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let v = LittleEndian::read_u64(buf);
        usize::try_from(v).map_err(|_| Error::invalid_data(format!("{v} does not fit in usize")))
    }
}
impl_access_for_fixed!(usize);

impl FixedWidth for isize {
    const WIDTH: usize = 8;

    #[inline(always)]
    fn encode(self, buf: &mut [u8]) {
        LittleEndian::write_i64(buf, self as i64)
    }

    #[inline(always)]
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let v = LittleEndian::read_i64(buf);
        isize::try_from(v).map_err(|_| Error::invalid_data(format!("{v} does not fit in isize")))
    }
}
impl_access_for_fixed!(isize);

impl FixedWidth for char {
    const WIDTH: usize = 4;

    #[inline(always)]
    fn encode(self, buf: &mut [u8]) {
        LittleEndian::write_u32(buf, self as u32)
    }

    #[inline(always)]
    fn decode(buf: &[u8]) -> Result<Self, Error> {
        let v = LittleEndian::read_u32(buf);
        char::from_u32(v)
            .ok_or_else(|| Error::invalid_data(format!("{v:#x} is not a unicode scalar value")))
    }
}
impl_access_for_fixed!(char);

/// A complex number stored as two consecutive floats, real part first.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }
}

/// Two `f32`, 8 bytes on the wire.
pub type Complex32 = Complex<f32>;
/// Two `f64`, 16 bytes on the wire.
pub type Complex64 = Complex<f64>;

macro_rules! impl_complex {
    ($float:ty) => {
        impl FixedWidth for Complex<$float> {
            const WIDTH: usize = 2 * <$float as FixedWidth>::WIDTH;

            #[inline(always)]
            fn encode(self, buf: &mut [u8]) {
                let (re, im) = buf.split_at_mut(<$float as FixedWidth>::WIDTH);
                self.re.encode(re);
                self.im.encode(im);
            }

            #[inline(always)]
            fn decode(buf: &[u8]) -> Result<Self, Error> {
                let (re, im) = buf.split_at(<$float as FixedWidth>::WIDTH);
                Ok(Complex::new(<$float>::decode(re)?, <$float>::decode(im)?))
            }
        }
        impl_access_for_fixed!(Complex<$float>);
    };
}

impl_complex!(f32);
impl_complex!(f64);
