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
use crate::error::Error;
use crate::types::Mode;
use std::ops::Range;

/// Per-type codec honouring all five access modes.
///
/// Implementors provide Write, Read and Discard. Peek and Slice have
/// defaults that replay Read or Discard and then restore the read cursor,
/// which costs a full decode; fixed-width types override both with O(1)
/// versions.
///
/// For every value `v`, `span_in` after `write_into(v)` covers exactly the
/// bytes `write_into` produced, and `discard_from` advances the read cursor
/// by that same length.
pub trait Access: Sized {
    /// Encodes `self` at the write cursor and advances it.
    fn write_into(&self, c: &mut Crate) -> Result<(), Error>;

    /// Decodes a value at the read cursor and advances it.
    fn read_from(c: &mut Crate) -> Result<Self, Error>;

    /// Decodes a value at the read cursor without advancing it.
    #[inline]
    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        let restore = c.reset_cursor_to_here();
        let result = Self::read_from(c);
        restore(c);
        result
    }

    /// Advances the read cursor past the next value without materialising it.
    fn discard_from(c: &mut Crate) -> Result<(), Error>;

    /// Byte range the next unread value occupies. The read cursor is unchanged.
    #[inline]
    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        let start = c.read_index();
        let restore = c.reset_cursor_to_here();
        let result = Self::discard_from(c);
        let end = c.read_index();
        restore(c);
        result.map(|_| start..end)
    }

    /// Number of bytes `write_into` produces for this value.
    fn encoded_len(&self) -> usize;
}

impl Crate {
    /// Applies `mode` to `val`.
    ///
    /// Write encodes `*val`; Read and Peek overwrite `*val` with the decoded
    /// value; Discard skips it; Slice leaves `*val` alone and returns the
    /// bytes the next unread value occupies. Only Slice returns `Some`.
    #[inline]
    pub fn access<T: Access>(&mut self, val: &mut T, mode: Mode) -> Result<Option<&[u8]>, Error> {
        match mode {
            Mode::Write => val.write_into(self)?,
            Mode::Read => *val = T::read_from(self)?,
            Mode::Peek => *val = T::peek_from(self)?,
            Mode::Discard => T::discard_from(self)?,
            Mode::Slice => {
                let range = T::span_in(self)?;
                return Ok(Some(self.span(range)));
            }
        }
        Ok(None)
    }

    /// [`Crate::access`] with a raw mode byte.
    pub fn access_raw<T: Access>(&mut self, val: &mut T, mode: u8) -> Result<Option<&[u8]>, Error> {
        let mode = Mode::from_u8(mode)?;
        self.access(val, mode)
    }

    #[inline]
    pub fn write<T: Access>(&mut self, val: &T) -> Result<(), Error> {
        val.write_into(self)
    }

    #[inline]
    pub fn read<T: Access>(&mut self) -> Result<T, Error> {
        T::read_from(self)
    }

    #[inline]
    pub fn peek<T: Access>(&mut self) -> Result<T, Error> {
        T::peek_from(self)
    }

    #[inline]
    pub fn discard<T: Access>(&mut self) -> Result<(), Error> {
        T::discard_from(self)
    }

    #[inline]
    pub fn slice<T: Access>(&mut self) -> Result<&[u8], Error> {
        let range = T::span_in(self)?;
        Ok(self.span(range))
    }
}

impl<T: Access> Access for Box<T> {
    #[inline]
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        (**self).write_into(c)
    }

    #[inline]
    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        T::read_from(c).map(Box::new)
    }

    #[inline]
    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        T::peek_from(c).map(Box::new)
    }

    #[inline]
    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        T::discard_from(c)
    }

    #[inline]
    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        T::span_in(c)
    }

    #[inline]
    fn encoded_len(&self) -> usize {
        (**self).encoded_len()
    }
}
