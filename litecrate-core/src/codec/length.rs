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

//! Length prefix that also carries a nil flag.
//!
//! The wire value is `len + 1` for a present container and `0` for nil, so
//! nil and empty stay distinct in a single byte for short lengths.

use crate::buffer::Crate;
use crate::codec::core::Access;
use crate::codec::varint::uvarint_len;
use crate::error::Error;
use std::ops::Range;

#[inline(always)]
fn to_wire(length: Option<u64>) -> Result<u64, Error> {
    match length {
        None => Ok(0),
        Some(u64::MAX) => Err(Error::invalid_data(
            "length u64::MAX has no length-or-nil encoding",
        )),
        Some(n) => Ok(n + 1),
    }
}

#[inline(always)]
fn from_wire(wire: u64) -> Option<u64> {
    wire.checked_sub(1)
}

/// Converts a decoded length into a `usize`.
#[inline(always)]
pub(crate) fn length_to_usize(length: u64) -> Result<usize, Error> {
    usize::try_from(length).map_err(|_| {
        Error::malformed_varint(format!("length {length} does not fit in usize"))
    })
}

impl Crate {
    /// Writes a length-or-nil prefix, returning the number of bytes written.
    pub fn write_length_or_nil(&mut self, length: Option<u64>) -> Result<usize, Error> {
        let wire = to_wire(length)?;
        self.write_uvarint(wire)
    }

    /// Decodes a length-or-nil prefix; `None` is nil.
    pub fn read_length_or_nil(&mut self) -> Result<Option<u64>, Error> {
        self.read_uvarint().map(from_wire)
    }

    /// Decodes a length-or-nil prefix without advancing, also returning its
    /// encoded length.
    pub fn peek_length_or_nil(&self) -> Result<(Option<u64>, usize), Error> {
        let (wire, n) = self.peek_uvarint()?;
        Ok((from_wire(wire), n))
    }

    pub fn discard_length_or_nil(&mut self) -> Result<usize, Error> {
        self.discard_uvarint()
    }

    pub fn slice_length_or_nil(&self) -> Result<&[u8], Error> {
        self.slice_uvarint()
    }

    /// Reads a length-or-nil prefix as a `usize`.
    pub(crate) fn read_length_usize(&mut self) -> Result<Option<usize>, Error> {
        self.read_length_or_nil()?.map(length_to_usize).transpose()
    }

    /// Writes `len` as a present length.
    #[inline(always)]
    pub(crate) fn write_length_usize(&mut self, len: usize) -> Result<(), Error> {
        self.write_length_or_nil(Some(len as u64)).map(|_| ())
    }
}

/// A length prefix that may be nil. `LengthOrNil(None)` encodes as `0x00`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LengthOrNil(pub Option<u64>);

impl LengthOrNil {
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Decoded length, `0` for nil.
    pub fn len(&self) -> u64 {
        self.0.unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Access for LengthOrNil {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write_length_or_nil(self.0).map(|_| ())
    }

    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        c.read_length_or_nil().map(LengthOrNil)
    }

    fn peek_from(c: &mut Crate) -> Result<Self, Error> {
        c.peek_length_or_nil().map(|(v, _)| LengthOrNil(v))
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.discard_length_or_nil().map(|_| ())
    }

    fn span_in(c: &mut Crate) -> Result<Range<usize>, Error> {
        let start = c.read_index();
        let n = c.slice_length_or_nil()?.len();
        Ok(start..start + n)
    }

    fn encoded_len(&self) -> usize {
        match self.0 {
            None => 1,
            Some(n) => uvarint_len(n.saturating_add(1)),
        }
    }
}
