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

//! # PERFORMANCE CRITICAL MODULE
//!
//! Error constructors sit on every bounds check of every codec. They are kept
//! `#[cold]` so the happy path of a read or write stays small enough to be
//! inlined into the caller.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for every operation on a [`Crate`](crate::buffer::Crate).
///
/// # Always Use Static Constructor Functions
///
/// Do not build variants with enum syntax. Use the constructors instead:
///
/// ```rust
/// use litecrate_core::error::Error;
///
/// let err = Error::buffer_underrun(4, 10, 12);
/// let err = Error::invalid_data(format!("bad char {:#x}", 0xD800));
/// ```
///
/// ## Available Constructor Functions
///
/// - [`Error::buffer_overflow`] - a write would exceed capacity and growth is off or fails
/// - [`Error::buffer_underrun`] - a read would pass the write cursor
/// - [`Error::invalid_mode`] - a raw mode byte outside the five access modes
/// - [`Error::malformed_varint`] - a varint whose value cannot be used
/// - [`Error::invalid_data`] - decoded bytes that the target type cannot hold
///
/// Every error is fatal to the operation that produced it. Nothing is
/// partially decoded, and the caller decides where a recoverable boundary
/// belongs (for example around a buffer opened over network input).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Write of `needed` bytes at `write` does not fit into `capacity` and the
    /// storage cannot grow.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_overflow`] instead.
    #[error("Buffer overflow: cannot write {needed} more bytes (write index: {write}, capacity: {capacity})")]
    BufferOverflow {
        needed: usize,
        write: usize,
        capacity: usize,
    },

    /// Read of `needed` bytes at `read` would pass the write cursor.
    ///
    /// Do not construct this variant directly; use [`Error::buffer_underrun`] instead.
    #[error("Buffer underrun: cannot read {needed} more bytes (read index: {read}, write index: {write})")]
    BufferUnderrun {
        needed: usize,
        read: usize,
        write: usize,
    },

    /// Mode byte outside `Write..=Slice`.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_mode`] instead.
    #[error("Invalid access mode: {0}")]
    InvalidMode(u8),

    /// Do not construct this variant directly; use [`Error::malformed_varint`] instead.
    #[error("{0}")]
    MalformedVarint(Cow<'static, str>),

    /// Do not construct this variant directly; use [`Error::invalid_data`] instead.
    #[error("{0}")]
    InvalidData(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::BufferOverflow`].
    ///
    /// # Example
    /// ```
    /// use litecrate_core::error::Error;
    ///
    /// let err = Error::buffer_overflow(8, 60, 64);
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_overflow(needed: usize, write: usize, capacity: usize) -> Self {
        Error::BufferOverflow {
            needed,
            write,
            capacity,
        }
    }

    /// Creates a new [`Error::BufferUnderrun`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_underrun(needed: usize, read: usize, write: usize) -> Self {
        Error::BufferUnderrun {
            needed,
            read,
            write,
        }
    }

    /// Creates a new [`Error::InvalidMode`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_mode(mode: u8) -> Self {
        Error::InvalidMode(mode)
    }

    /// Creates a new [`Error::MalformedVarint`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn malformed_varint<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::MalformedVarint(s.into())
    }

    /// Creates a new [`Error::InvalidData`].
    ///
    /// # Example
    /// ```
    /// use litecrate_core::error::Error;
    ///
    /// let err = Error::invalid_data("string is not valid UTF-8");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_data<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::InvalidData(s.into())
    }
}
