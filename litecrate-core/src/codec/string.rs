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

use crate::buffer::Crate;
use crate::codec::core::Access;
use crate::codec::length::length_to_usize;
use crate::codec::varint::uvarint_len;
use crate::error::Error;
use std::ops::Range;

#[inline(always)]
fn counted_len(len: usize) -> usize {
    uvarint_len(len as u64 + 1) + len
}

#[inline(always)]
fn utf8(bytes: &[u8]) -> Result<String, Error> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(Error::invalid_data(format!("string is not valid UTF-8: {e}"))),
    }
}

// Raw strings and bytes: the caller transmits the length out of band.
impl Crate {
    #[inline]
    pub fn write_str(&mut self, s: &str) -> Result<(), Error> {
        self.write_bytes(s.as_bytes())
    }

    /// Decodes `len` bytes of UTF-8. The cursor only moves on success.
    pub fn read_string(&mut self, len: usize) -> Result<String, Error> {
        let s = self.peek_string(len)?;
        self.read_pos += len;
        Ok(s)
    }

    pub fn peek_string(&self, len: usize) -> Result<String, Error> {
        utf8(self.peek_bytes(len)?)
    }

    pub fn discard_string(&mut self, len: usize) -> Result<(), Error> {
        self.skip(len)
    }

    pub fn slice_string(&self, len: usize) -> Result<&[u8], Error> {
        self.peek_bytes(len)
    }

    /// Copies out the next `len` unread bytes and advances past them.
    pub fn read_byte_vec(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        self.read_bytes(len).map(<[u8]>::to_vec)
    }

    pub fn peek_byte_vec(&self, len: usize) -> Result<Vec<u8>, Error> {
        self.peek_bytes(len).map(<[u8]>::to_vec)
    }
}

// Length-or-nil prefixed strings and bytes.
impl Crate {
    /// Writes a prefix and the string bytes. `None` writes only the nil prefix.
    pub fn write_string_with_counter(&mut self, s: Option<&str>) -> Result<(), Error> {
        self.write_bytes_with_counter(s.map(str::as_bytes))
    }

    pub fn read_string_with_counter(&mut self) -> Result<Option<String>, Error> {
        let s = self.peek_string_with_counter()?;
        self.discard_with_counter()?;
        Ok(s)
    }

    pub fn peek_string_with_counter(&self) -> Result<Option<String>, Error> {
        match self.peek_counted()? {
            Some(bytes) => utf8(bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn write_bytes_with_counter(&mut self, v: Option<&[u8]>) -> Result<(), Error> {
        match v {
            None => self.write_length_or_nil(None).map(|_| ()),
            Some(v) => {
                self.check_write(counted_len(v.len()))?;
                self.write_length_usize(v.len())?;
                self.write_bytes(v)
            }
        }
    }

    pub fn read_bytes_with_counter(&mut self) -> Result<Option<Vec<u8>>, Error> {
        let v = self.peek_bytes_with_counter()?;
        self.discard_with_counter()?;
        Ok(v)
    }

    pub fn peek_bytes_with_counter(&self) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.peek_counted()?.map(<[u8]>::to_vec))
    }

    /// Skips a prefixed string or byte array.
    pub fn discard_with_counter(&mut self) -> Result<(), Error> {
        let range = self.counted_span()?;
        self.read_pos = range.end;
        Ok(())
    }

    /// Bytes a prefixed string or byte array occupies, prefix included.
    pub fn slice_with_counter(&self) -> Result<&[u8], Error> {
        let range = self.counted_span()?;
        Ok(self.span(range))
    }

    /// Payload of the prefixed value at the read cursor, without advancing.
    fn peek_counted(&self) -> Result<Option<&[u8]>, Error> {
        let (length, prefix) = self.peek_length_or_nil()?;
        let Some(length) = length else {
            return Ok(None);
        };
        let len = length_to_usize(length)?;
        let unread = self.slice_after_cursor();
        if len > unread.len() - prefix {
            return Err(Error::buffer_underrun(
                prefix.saturating_add(len),
                self.read_pos,
                self.write_pos,
            ));
        }
        Ok(Some(&unread[prefix..prefix + len]))
    }

    fn counted_span(&self) -> Result<Range<usize>, Error> {
        let (length, prefix) = self.peek_length_or_nil()?;
        let len = length_to_usize(length.unwrap_or(0))?;
        let total = prefix.checked_add(len).ok_or_else(|| {
            Error::buffer_underrun(usize::MAX, self.read_pos, self.write_pos)
        })?;
        self.check_read(total)?;
        Ok(self.read_pos..self.read_pos + total)
    }
}

impl Access for String {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write_string_with_counter(Some(self))
    }

    /// A nil prefix reads as the empty string.
    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        c.read_string_with_counter().map(Option::unwrap_or_default)
    }

    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        c.peek_string_with_counter().map(Option::unwrap_or_default)
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.discard_with_counter()
    }

    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        c.counted_span()
    }

    fn encoded_len(&self) -> usize {
        counted_len(self.len())
    }
}

impl Access for Option<String> {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write_string_with_counter(self.as_deref())
    }

    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        c.read_string_with_counter()
    }

    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        c.peek_string_with_counter()
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.discard_with_counter()
    }

    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        c.counted_span()
    }

    fn encoded_len(&self) -> usize {
        match self {
            None => 1,
            Some(s) => counted_len(s.len()),
        }
    }
}
