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

//! Variable-length integers.
//!
//! A `u64` takes 1 to 9 bytes. Each of the first eight bytes carries the
//! lowest seven bits not yet emitted, with bit 7 set when more bytes follow.
//! Encoding stops as soon as the remaining value is zero. A ninth byte is
//! only reached when bits 56..64 remain; it carries all eight of them and
//! has no continuation flag. Signed values are zigzag mapped first so small
//! magnitudes of either sign stay short.

use crate::buffer::Crate;
use crate::codec::core::Access;
use crate::error::Error;
use std::ops::Range;

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 9;

const CONTINUE_BIT: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;

#[inline(always)]
pub fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

#[inline(always)]
pub fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encoded length of `value`, from the value alone.
#[inline]
pub fn uvarint_len(value: u64) -> usize {
    match value {
        0..=0x7F => 1,
        0x80..=0x3FFF => 2,
        0x4000..=0x1F_FFFF => 3,
        0x20_0000..=0xFFF_FFFF => 4,
        0x1000_0000..=0x7_FFFF_FFFF => 5,
        0x8_0000_0000..=0x3FF_FFFF_FFFF => 6,
        0x400_0000_0000..=0x1_FFFF_FFFF_FFFF => 7,
        0x2_0000_0000_0000..=0xFF_FFFF_FFFF_FFFF => 8,
        _ => 9,
    }
}

#[inline]
pub fn varint_len(value: i64) -> usize {
    uvarint_len(zigzag_encode(value))
}

/// Encoded length of the varint at the start of `data`, from the
/// continuation bits alone. `None` when `data` ends before the varint does.
#[inline]
pub fn uvarint_len_in(data: &[u8]) -> Option<usize> {
    for (i, b) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 || b & CONTINUE_BIT == 0 {
            return Some(i + 1);
        }
    }
    None
}

/// Encodes `value` into `buf`, returning the number of bytes used.
#[inline]
pub fn encode_uvarint(mut value: u64, buf: &mut [u8; MAX_VARINT_LEN]) -> usize {
    for (i, slot) in buf.iter_mut().enumerate() {
        if i == MAX_VARINT_LEN - 1 {
            *slot = value as u8;
            return MAX_VARINT_LEN;
        }
        let mut byte = value as u8 & GROUP_MASK;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUE_BIT;
        }
        *slot = byte;
        if value == 0 {
            return i + 1;
        }
    }
    MAX_VARINT_LEN
}

/// Decodes the varint at the start of `data`, returning the value and the
/// number of bytes consumed. `None` when `data` ends too early.
#[inline]
pub fn decode_uvarint(data: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0u64;
    for (i, b) in data.iter().take(MAX_VARINT_LEN).enumerate() {
        if i == MAX_VARINT_LEN - 1 {
            value |= (*b as u64) << 56;
            return Some((value, MAX_VARINT_LEN));
        }
        value |= ((b & GROUP_MASK) as u64) << (7 * i);
        if b & CONTINUE_BIT == 0 {
            return Some((value, i + 1));
        }
    }
    None
}

impl Crate {
    /// Writes `value` as a uvarint, returning the number of bytes written.
    #[inline]
    pub fn write_uvarint(&mut self, value: u64) -> Result<usize, Error> {
        let mut buf = [0u8; MAX_VARINT_LEN];
        let n = encode_uvarint(value, &mut buf);
        self.write_bytes(&buf[..n])?;
        Ok(n)
    }

    /// Decodes the uvarint at the read cursor without advancing, returning
    /// the value and its encoded length.
    #[inline]
    pub fn peek_uvarint(&self) -> Result<(u64, usize), Error> {
        let unread = self.slice_after_cursor();
        decode_uvarint(unread).ok_or_else(|| {
            Error::buffer_underrun(unread.len() + 1, self.read_pos, self.write_pos)
        })
    }

    /// Decodes the uvarint at the read cursor and advances past it.
    #[inline]
    pub fn read_uvarint(&mut self) -> Result<u64, Error> {
        let (value, n) = self.peek_uvarint()?;
        self.read_pos += n;
        Ok(value)
    }

    /// Skips the uvarint at the read cursor by its continuation bits,
    /// returning how many bytes were skipped.
    #[inline]
    pub fn discard_uvarint(&mut self) -> Result<usize, Error> {
        let n = self.uvarint_span()?.len();
        self.read_pos += n;
        Ok(n)
    }

    /// Bytes the uvarint at the read cursor occupies.
    #[inline]
    pub fn slice_uvarint(&self) -> Result<&[u8], Error> {
        let range = self.uvarint_span()?;
        Ok(self.span(range))
    }

    fn uvarint_span(&self) -> Result<Range<usize>, Error> {
        let unread = self.slice_after_cursor();
        match uvarint_len_in(unread) {
            Some(n) => Ok(self.read_pos..self.read_pos + n),
            None => Err(Error::buffer_underrun(
                unread.len() + 1,
                self.read_pos,
                self.write_pos,
            )),
        }
    }

    /// Writes `value` as a zigzag varint, returning the number of bytes written.
    #[inline]
    pub fn write_varint(&mut self, value: i64) -> Result<usize, Error> {
        self.write_uvarint(zigzag_encode(value))
    }

    #[inline]
    pub fn peek_varint(&self) -> Result<(i64, usize), Error> {
        let (value, n) = self.peek_uvarint()?;
        Ok((zigzag_decode(value), n))
    }

    #[inline]
    pub fn read_varint(&mut self) -> Result<i64, Error> {
        self.read_uvarint().map(zigzag_decode)
    }

    #[inline]
    pub fn discard_varint(&mut self) -> Result<usize, Error> {
        self.discard_uvarint()
    }

    #[inline]
    pub fn slice_varint(&self) -> Result<&[u8], Error> {
        self.slice_uvarint()
    }
}

/// A `u64` encoded as a 1 to 9 byte uvarint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UVarint(pub u64);

/// An `i64` encoded as a zigzag varint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Varint(pub i64);

impl Access for UVarint {
    #[inline]
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write_uvarint(self.0).map(|_| ())
    }

    #[inline]
    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        c.read_uvarint().map(UVarint)
    }

    #[inline]
    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        c.peek_uvarint().map(|(v, _)| UVarint(v))
    }

    #[inline]
    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.discard_uvarint().map(|_| ())
    }

    #[inline]
    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        c.uvarint_span()
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        uvarint_len(self.0)
    }
}

impl Access for Varint {
    #[inline]
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write_varint(self.0).map(|_| ())
    }

    #[inline]
    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        c.read_varint().map(Varint)
    }

    #[inline]
    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        c.peek_varint().map(|(v, _)| Varint(v))
    }

    #[inline]
    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.discard_varint().map(|_| ())
    }

    #[inline]
    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        c.uvarint_span()
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        varint_len(self.0)
    }
}
