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

//! A `Crate` packs into another `Crate` as write cursor (u64), read cursor
//! (u64), policy flags (u8) and then its whole storage as a prefixed byte
//! array.

use crate::accessor::SelfAccessor;
use crate::buffer::Crate;
use crate::codec::core::Access;
use crate::codec::varint::uvarint_len;
use crate::config::Config;
use crate::error::Error;
use crate::types::Mode;

const HEADER_LEN: usize = 8 + 8 + 1;

fn unpack(c: &mut Crate) -> Result<Crate, Error> {
    let write = c.read::<u64>()?;
    let read = c.read::<u64>()?;
    let flags = c.read::<u8>()?;
    let data = c.read_bytes_with_counter()?.unwrap_or_default();
    let (Ok(write_pos), Ok(read_pos)) = (usize::try_from(write), usize::try_from(read)) else {
        return Err(Error::invalid_data("packed crate cursors do not fit in usize"));
    };
    if read_pos > write_pos || write_pos > data.len() {
        return Err(Error::invalid_data(format!(
            "packed crate has inconsistent cursors (read: {read}, write: {write}, storage: {})",
            data.len()
        )));
    }
    let mut unpacked = Crate::open(data, Config::from_flags(flags));
    unpacked.write_pos = write_pos;
    unpacked.read_pos = read_pos;
    Ok(unpacked)
}

impl Access for Crate {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        c.write(&(self.write_pos as u64))?;
        c.write(&(self.read_pos as u64))?;
        c.write(&self.config().to_flags())?;
        c.write_bytes_with_counter(Some(self.data.as_slice()))
    }

    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        let restore = c.reset_cursor_to_here();
        let result = unpack(c);
        if result.is_err() {
            restore(c);
        }
        result
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        c.check_read(HEADER_LEN)?;
        let restore = c.reset_cursor_to_here();
        c.discard_n(HEADER_LEN);
        c.discard_with_counter().map_err(|e| {
            restore(c);
            e
        })
    }

    fn encoded_len(&self) -> usize {
        HEADER_LEN + uvarint_len(self.data.len() as u64 + 1) + self.data.len()
    }
}

impl SelfAccessor for Crate {
    fn access_self(&mut self, c: &mut Crate, mode: Mode) -> Result<(), Error> {
        match mode {
            Mode::Slice => Crate::span_in(c).map(|_| ()),
            _ => c.access(self, mode).map(|_| ()),
        }
    }
}
