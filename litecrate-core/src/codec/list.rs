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
use crate::codec::varint::uvarint_len;
use crate::error::Error;
use crate::types::Mode;
use std::ops::Range;

/// Most elements a collection prefix may claim when its elements occupy no
/// bytes. Such elements cannot be bounded by the input that is left, so the
/// count itself is capped.
pub const MAX_ZERO_WIDTH_ELEMENTS: usize = 1 << 20;

/// Called after each element of a `len`-element collection, with the read
/// cursor from before that element.
#[inline]
pub(crate) fn check_zero_width(c: &Crate, before: usize, len: usize) -> Result<(), Error> {
    if len > MAX_ZERO_WIDTH_ELEMENTS && c.read_index() == before {
        return Err(Error::invalid_data(format!(
            "collection claims {len} elements that occupy no bytes (limit {MAX_ZERO_WIDTH_ELEMENTS})"
        )));
    }
    Ok(())
}

/// Writes a length prefix followed by every element in iteration order.
pub fn write_collection<'a, T, I>(iter: I, c: &mut Crate) -> Result<(), Error>
where
    T: Access + 'a,
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = iter.into_iter();
    c.write_length_usize(iter.len())?;
    for item in iter {
        item.write_into(c)?;
    }
    Ok(())
}

/// Reads `len` elements. On failure the read cursor is back where it started.
///
/// Elements that occupy no bytes fail with `InvalidData` once `len` is above
/// [`MAX_ZERO_WIDTH_ELEMENTS`]; Discard applies the same limit.
pub fn read_collection<C, T>(c: &mut Crate, len: usize) -> Result<C, Error>
where
    T: Access,
    C: FromIterator<T>,
{
    let restore = c.reset_cursor_to_here();
    let result = (0..len)
        .map(|_| {
            let before = c.read_index();
            let item = T::read_from(c)?;
            check_zero_width(c, before, len)?;
            Ok(item)
        })
        .collect::<Result<C, Error>>();
    if result.is_err() {
        restore(c);
    }
    result
}

/// Discards `len` elements one at a time, since their widths may differ.
pub fn discard_collection<T: Access>(c: &mut Crate, len: usize) -> Result<(), Error> {
    for _ in 0..len {
        let before = c.read_index();
        T::discard_from(c)?;
        check_zero_width(c, before, len)?;
    }
    Ok(())
}

/// Reads a prefixed collection; `None` for a nil prefix.
pub(crate) fn read_counted<C, T>(c: &mut Crate) -> Result<Option<C>, Error>
where
    T: Access,
    C: FromIterator<T>,
{
    let restore = c.reset_cursor_to_here();
    let Some(len) = c.read_length_usize()? else {
        return Ok(None);
    };
    match read_collection::<C, T>(c, len) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            restore(c);
            Err(e)
        }
    }
}

pub(crate) fn discard_counted<T: Access>(c: &mut Crate) -> Result<(), Error> {
    let restore = c.reset_cursor_to_here();
    let len = c.read_length_usize()?.unwrap_or(0);
    discard_collection::<T>(c, len).map_err(|e| {
        restore(c);
        e
    })
}

fn collection_len<'a, T: Access + 'a>(items: impl ExactSizeIterator<Item = &'a T>) -> usize {
    let prefix = uvarint_len(items.len() as u64 + 1);
    items.fold(prefix, |n, item| n + item.encoded_len())
}

impl<T: Access> Access for Vec<T> {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        write_collection(self, c)
    }

    /// A nil prefix reads as an empty vector.
    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        read_counted::<Vec<T>, T>(c).map(Option::unwrap_or_default)
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        discard_counted::<T>(c)
    }

    fn encoded_len(&self) -> usize {
        collection_len(self.iter())
    }
}

impl<T: Access> Access for Option<Vec<T>> {
    fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
        match self {
            Some(v) => write_collection(v, c),
            None => c.write_length_or_nil(None).map(|_| ()),
        }
    }

    fn read_from(c: &mut Crate) -> Result<Self, Error> {
        read_counted::<Vec<T>, T>(c)
    }

    fn discard_from(c: &mut Crate) -> Result<(), Error> {
        discard_counted::<T>(c)
    }

    fn encoded_len(&self) -> usize {
        match self {
            Some(v) => collection_len(v.iter()),
            None => 1,
        }
    }
}

impl Crate {
    /// Applies `mode` to a nil-aware vector, using `elem` for every element.
    ///
    /// Write emits the prefix and calls `elem` in Write mode per element.
    /// Read allocates exactly the decoded length and fills each slot through
    /// `elem` in Read mode; Peek does the same and then restores the cursor.
    /// Discard and Slice call `elem` in Discard mode once per element on a
    /// scratch value. Only Slice returns `Some`.
    pub fn access_slice<T, F>(
        &mut self,
        val: &mut Option<Vec<T>>,
        mode: Mode,
        mut elem: F,
    ) -> Result<Option<&[u8]>, Error>
    where
        T: Default,
        F: FnMut(&mut Crate, &mut T, Mode) -> Result<(), Error>,
    {
        match mode {
            Mode::Write => match val {
                None => {
                    self.write_length_or_nil(None)?;
                }
                Some(items) => {
                    self.write_length_usize(items.len())?;
                    for item in items.iter_mut() {
                        elem(self, item, Mode::Write)?;
                    }
                }
            },
            Mode::Read => *val = self.read_slice_with(&mut elem)?,
            Mode::Peek => {
                let restore = self.reset_cursor_to_here();
                let result = self.read_slice_with(&mut elem);
                restore(self);
                *val = result?;
            }
            Mode::Discard => self.discard_slice_with::<T, F>(&mut elem)?,
            Mode::Slice => {
                let range = self.slice_span_with::<T, F>(&mut elem)?;
                return Ok(Some(self.span(range)));
            }
        }
        Ok(None)
    }

    fn read_slice_with<T, F>(&mut self, elem: &mut F) -> Result<Option<Vec<T>>, Error>
    where
        T: Default,
        F: FnMut(&mut Crate, &mut T, Mode) -> Result<(), Error>,
    {
        let restore = self.reset_cursor_to_here();
        let Some(len) = self.read_length_usize()? else {
            return Ok(None);
        };
        let mut items = Vec::with_capacity(len.min(self.reads_left()));
        for _ in 0..len {
            let before = self.read_index();
            let mut item = T::default();
            let result = elem(self, &mut item, Mode::Read)
                .and_then(|_| check_zero_width(self, before, len));
            if let Err(e) = result {
                restore(self);
                return Err(e);
            }
            items.push(item);
        }
        Ok(Some(items))
    }

    fn discard_slice_with<T, F>(&mut self, elem: &mut F) -> Result<(), Error>
    where
        T: Default,
        F: FnMut(&mut Crate, &mut T, Mode) -> Result<(), Error>,
    {
        let restore = self.reset_cursor_to_here();
        let len = self.read_length_usize()?.unwrap_or(0);
        let mut scratch = T::default();
        for _ in 0..len {
            let before = self.read_index();
            let result = elem(self, &mut scratch, Mode::Discard)
                .and_then(|_| check_zero_width(self, before, len));
            if let Err(e) = result {
                restore(self);
                return Err(e);
            }
        }
        Ok(())
    }

    fn slice_span_with<T, F>(&mut self, elem: &mut F) -> Result<Range<usize>, Error>
    where
        T: Default,
        F: FnMut(&mut Crate, &mut T, Mode) -> Result<(), Error>,
    {
        let start = self.read_index();
        let restore = self.reset_cursor_to_here();
        let result = self.discard_slice_with::<T, F>(elem);
        let end = self.read_index();
        restore(self);
        result.map(|_| start..end)
    }
}
