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

use crate::config::Config;
use crate::error::Error;
use std::ops::Range;

/// A growable byte buffer with independent write and read cursors.
///
/// `0 <= read <= write <= capacity` holds between calls. Every codec reads
/// and writes through these cursors, and only the write path grows the
/// storage.
///
/// `capacity()` is the length of the writable storage. Bytes past the write
/// cursor are always initialised (zero after a grow), which lets `grow`
/// shrink and re-extend the view without touching the allocator.
#[derive(Clone, Debug, Default)]
pub struct Crate {
    pub(crate) data: Vec<u8>,
    pub(crate) write_pos: usize,
    pub(crate) read_pos: usize,
    config: Config,
}

impl Crate {
    /// Creates an empty buffer with `size` bytes of zeroed storage.
    pub fn new(size: usize, config: Config) -> Crate {
        Crate {
            data: vec![0; size],
            write_pos: 0,
            read_pos: 0,
            config,
        }
    }

    /// Opens existing bytes for reading: every byte counts as written and
    /// nothing has been read yet.
    pub fn open(data: Vec<u8>, config: Config) -> Crate {
        Crate {
            write_pos: data.len(),
            read_pos: 0,
            data,
            config,
        }
    }

    /// Same as [`Crate::open`] over a copy of `data`.
    pub fn from_slice(data: &[u8], config: Config) -> Crate {
        Crate::open(data.to_vec(), config)
    }

    /// Ensures `size` more bytes can be written, growing when the policy allows.
    #[inline(always)]
    pub fn check_write(&mut self, size: usize) -> Result<(), Error> {
        let end = match self.write_pos.checked_add(size) {
            Some(end) => end,
            None => {
                return Err(Error::buffer_overflow(
                    size,
                    self.write_pos,
                    self.data.len(),
                ))
            }
        };
        if end > self.data.len() {
            if !self.config.auto_grow {
                return Err(Error::buffer_overflow(
                    size,
                    self.write_pos,
                    self.data.len(),
                ));
            }
            self.grow_by(end - self.data.len())?;
        }
        Ok(())
    }

    /// Ensures `size` unread bytes exist before the write cursor. Never grows.
    #[inline(always)]
    pub fn check_read(&self, size: usize) -> Result<(), Error> {
        if size > self.write_pos - self.read_pos {
            return Err(Error::buffer_underrun(size, self.read_pos, self.write_pos));
        }
        Ok(())
    }

    /// Whether writes grow the buffer on their own.
    pub fn will_auto_grow(&self) -> bool {
        self.config.auto_grow
    }

    /// Whether a reallocation doubles the old storage.
    pub fn will_double_on_grow(&self) -> bool {
        self.config.double_on_grow
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Grows the storage by `n` bytes, or shrinks it when `n` is negative.
    ///
    /// Shrinking clamps both cursors to the new end and silently drops any
    /// written data past it. Growing stays inside the current allocation when
    /// possible; otherwise it reallocates to `old * 2 + n` bytes, or to
    /// exactly `old + n` under the exact policy, keeping existing bytes.
    ///
    /// Fails with `BufferOverflow` when the new size does not fit in `usize`
    /// or cannot be allocated; the buffer is left untouched in that case.
    pub fn grow(&mut self, n: isize) -> Result<(), Error> {
        if n < 0 {
            self.shrink_by(n.unsigned_abs());
            Ok(())
        } else {
            self.grow_by(n as usize)
        }
    }

    fn shrink_by(&mut self, n: usize) {
        let new_len = self.data.len().saturating_sub(n);
        tracing::debug!(from = self.data.len(), to = new_len, "shrinking crate");
        self.data.truncate(new_len);
        if self.write_pos > new_len {
            self.write_pos = new_len;
        }
        if self.read_pos > self.write_pos {
            self.read_pos = self.write_pos;
        }
    }

    fn grow_by(&mut self, n: usize) -> Result<(), Error> {
        if n == 0 {
            return Ok(());
        }
        let old_len = self.data.len();
        let write_pos = self.write_pos;
        let overflow = move || Error::buffer_overflow(n, write_pos, old_len);
        let wanted = old_len.checked_add(n).ok_or_else(overflow)?;
        if wanted <= self.data.capacity() {
            self.data.resize(wanted, 0);
            return Ok(());
        }
        let new_len = if self.config.double_on_grow {
            old_len
                .checked_mul(2)
                .and_then(|doubled| doubled.checked_add(n))
                .ok_or_else(overflow)?
        } else {
            wanted
        };
        tracing::trace!(
            from = old_len,
            to = new_len,
            double = self.config.double_on_grow,
            "reallocating crate"
        );
        let mut alloc = Vec::new();
        if let Err(err) = alloc.try_reserve_exact(new_len) {
            tracing::debug!(size = new_len, %err, "crate allocation failed");
            return Err(overflow());
        }
        alloc.extend_from_slice(&self.data);
        alloc.resize(new_len, 0);
        self.data = alloc;
        Ok(())
    }

    /// Number of written bytes.
    pub fn len(&self) -> usize {
        self.write_pos
    }

    pub fn is_empty(&self) -> bool {
        self.write_pos == 0
    }

    /// Length of the writable storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Borrowed view of the written bytes.
    pub fn data(&self) -> &[u8] {
        &self.data[..self.write_pos]
    }

    /// Independent copy of the written bytes.
    pub fn data_copy(&self) -> Vec<u8> {
        self.data[..self.write_pos].to_vec()
    }

    /// Consumes the buffer, returning the written bytes.
    pub fn into_inner(mut self) -> Vec<u8> {
        self.data.truncate(self.write_pos);
        self.data
    }

    /// Whether both buffers hold the same written bytes.
    pub fn data_equal(&self, other: &Crate) -> bool {
        self.data() == other.data()
    }

    /// Copies unread bytes into `dst` without moving the read cursor.
    pub fn copy_to(&self, dst: &mut [u8]) -> usize {
        let src = &self.data[self.read_pos..self.write_pos];
        let n = src.len().min(dst.len());
        dst[..n].copy_from_slice(&src[..n]);
        n
    }

    /// Copies `src` into free storage after the write cursor without moving
    /// it. Never grows; returns how many bytes fit.
    pub fn copy_from(&mut self, src: &[u8]) -> usize {
        let dst = &mut self.data[self.write_pos..];
        let n = src.len().min(dst.len());
        dst[..n].copy_from_slice(&src[..n]);
        n
    }

    /// Zeroes both cursors and keeps the storage, for reuse.
    pub fn reset(&mut self) {
        self.write_pos = 0;
        self.read_pos = 0;
    }

    /// Resets the cursors, then zero-fills the storage by repeatedly copying
    /// the already zeroed prefix over the next stretch, doubling each time.
    pub fn full_clear(&mut self) {
        self.reset();
        let len = self.data.len();
        if len == 0 {
            return;
        }
        tracing::debug!(len, "full clear");
        self.data[0] = 0;
        let mut filled = 1;
        while filled < len {
            let n = filled.min(len - filled);
            self.data.copy_within(0..n, filled);
            filled += n;
        }
    }

    /// Rewinds the read cursor so everything written is unread again.
    pub fn reset_read_index(&mut self) {
        self.read_pos = 0;
    }

    pub fn write_index(&self) -> usize {
        self.write_pos
    }

    /// Moves the write cursor, growing like a write would when `index` is
    /// past capacity. The read cursor is pulled back if it ends up ahead.
    pub fn set_write_index(&mut self, index: usize) -> Result<(), Error> {
        if index > self.data.len() {
            if !self.config.auto_grow {
                return Err(Error::buffer_overflow(
                    index - self.write_pos,
                    self.write_pos,
                    self.data.len(),
                ));
            }
            self.grow_by(index - self.data.len())?;
        }
        self.write_pos = index;
        if self.read_pos > index {
            self.read_pos = index;
        }
        Ok(())
    }

    pub fn read_index(&self) -> usize {
        self.read_pos
    }

    /// Moves the read cursor, failing when `index` is past the write cursor.
    pub fn set_read_index(&mut self, index: usize) -> Result<(), Error> {
        if index > self.write_pos {
            return Err(Error::buffer_underrun(index, 0, self.write_pos));
        }
        self.read_pos = index;
        Ok(())
    }

    /// Bytes left before the storage has to grow.
    pub fn space_left(&self) -> usize {
        self.data.len() - self.write_pos
    }

    /// Bytes written but not read yet.
    pub fn reads_left(&self) -> usize {
        self.write_pos - self.read_pos
    }

    /// Advances the read cursor by `n`, stopping silently at the write cursor.
    pub fn discard_n(&mut self, n: usize) {
        self.read_pos = self.read_pos.saturating_add(n).min(self.write_pos);
    }

    /// Captures the read cursor; calling the returned closure restores it.
    pub fn reset_cursor_to_here(&self) -> impl FnOnce(&mut Self) {
        let raw_cursor = self.read_pos;
        move |this: &mut Self| {
            this.read_pos = raw_cursor;
        }
    }

    /// Unread bytes, which may end in the middle of a value.
    #[inline(always)]
    pub fn slice_after_cursor(&self) -> &[u8] {
        &self.data[self.read_pos..self.write_pos]
    }

    #[inline(always)]
    pub(crate) fn span(&self, range: Range<usize>) -> &[u8] {
        &self.data[range]
    }

    /// Appends raw bytes at the write cursor.
    #[inline(always)]
    pub fn write_bytes(&mut self, v: &[u8]) -> Result<(), Error> {
        self.check_write(v.len())?;
        self.data[self.write_pos..self.write_pos + v.len()].copy_from_slice(v);
        self.write_pos += v.len();
        Ok(())
    }

    /// Reserves `len` bytes at the write cursor and hands them to `fill`.
    #[inline(always)]
    pub(crate) fn write_with(
        &mut self,
        len: usize,
        fill: impl FnOnce(&mut [u8]),
    ) -> Result<(), Error> {
        self.check_write(len)?;
        fill(&mut self.data[self.write_pos..self.write_pos + len]);
        self.write_pos += len;
        Ok(())
    }

    /// Borrows the next `len` unread bytes without advancing.
    #[inline(always)]
    pub fn peek_bytes(&self, len: usize) -> Result<&[u8], Error> {
        self.check_read(len)?;
        Ok(&self.data[self.read_pos..self.read_pos + len])
    }

    /// Borrows the next `len` unread bytes and advances past them.
    #[inline(always)]
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8], Error> {
        self.check_read(len)?;
        let start = self.read_pos;
        self.read_pos += len;
        Ok(&self.data[start..start + len])
    }

    /// Advances past `len` unread bytes, failing if fewer exist.
    #[inline(always)]
    pub fn skip(&mut self, len: usize) -> Result<(), Error> {
        self.check_read(len)?;
        self.read_pos += len;
        Ok(())
    }
}

impl From<Vec<u8>> for Crate {
    fn from(data: Vec<u8>) -> Self {
        Crate::open(data, Config::default())
    }
}
