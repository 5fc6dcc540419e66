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

//! Self-describing aggregates.
//!
//! An aggregate lists its own fields once, in a fixed order, and the buffer
//! derives all five modes from that single list. Peek and Slice cost a full
//! pass over the aggregate because its footprint is not known up front,
//! unlike fixed-width scalars where both are O(1).

use crate::buffer::Crate;
use crate::error::Error;
use crate::types::Mode;

/// A type that applies an access mode to each of its fields in order.
///
/// Implementations usually call [`Crate::access`] once per field:
///
/// ```rust
/// use litecrate_core::{Crate, Error, Mode, SelfAccessor};
///
/// #[derive(Default)]
/// struct Person {
///     age: u8,
///     name: String,
/// }
///
/// impl SelfAccessor for Person {
///     fn access_self(&mut self, c: &mut Crate, mode: Mode) -> Result<(), Error> {
///         c.access(&mut self.age, mode)?;
///         c.access(&mut self.name, mode)?;
///         Ok(())
///     }
/// }
/// ```
///
/// Through the `Crate` adapters `mode` is always Write, Read or Discard;
/// Peek and Slice are built on top of a Read or Discard pass.
///
/// A Read pass fills `self` field by field. When it fails, the fields before
/// the failing one already hold decoded values, so treat the whole value as
/// garbage after an `Err`. Types that also implement
/// [`Access`](crate::codec::Access), as derived aggregates do, can be read
/// with [`Crate::read`] instead, which only hands back a value once every
/// field has decoded.
pub trait SelfAccessor {
    fn access_self(&mut self, c: &mut Crate, mode: Mode) -> Result<(), Error>;
}

impl Crate {
    #[inline]
    pub fn write_self_accessor(&mut self, val: &mut dyn SelfAccessor) -> Result<(), Error> {
        val.access_self(self, Mode::Write)
    }

    /// Reads into `val`. On failure the read cursor is back where it started,
    /// but fields already read into `val` keep their new values; discard
    /// `val` on `Err`.
    pub fn read_self_accessor(&mut self, val: &mut dyn SelfAccessor) -> Result<(), Error> {
        let restore = self.reset_cursor_to_here();
        let result = val.access_self(self, Mode::Read);
        if result.is_err() {
            restore(self);
        }
        result
    }

    /// Reads into `val` and puts the read cursor back.
    pub fn peek_self_accessor(&mut self, val: &mut dyn SelfAccessor) -> Result<(), Error> {
        let restore = self.reset_cursor_to_here();
        let result = val.access_self(self, Mode::Read);
        restore(self);
        result
    }

    pub fn discard_self_accessor(&mut self, val: &mut dyn SelfAccessor) -> Result<(), Error> {
        let restore = self.reset_cursor_to_here();
        let result = val.access_self(self, Mode::Discard);
        if result.is_err() {
            restore(self);
        }
        result
    }

    /// Bytes the next unread aggregate occupies. `val` only supplies the
    /// field layout and is left unchanged, since the pass runs in Discard mode.
    pub fn slice_self_accessor(&mut self, val: &mut dyn SelfAccessor) -> Result<&[u8], Error> {
        let start = self.read_index();
        let restore = self.reset_cursor_to_here();
        let result = val.access_self(self, Mode::Discard);
        let end = self.read_index();
        restore(self);
        result?;
        Ok(self.span(start..end))
    }

    /// Applies `mode` to an aggregate. Only Slice returns `Some`.
    pub fn access_self_accessor(
        &mut self,
        val: &mut dyn SelfAccessor,
        mode: Mode,
    ) -> Result<Option<&[u8]>, Error> {
        match mode {
            Mode::Write => self.write_self_accessor(val)?,
            Mode::Read => self.read_self_accessor(val)?,
            Mode::Peek => self.peek_self_accessor(val)?,
            Mode::Discard => self.discard_self_accessor(val)?,
            Mode::Slice => return self.slice_self_accessor(val).map(Some),
        }
        Ok(None)
    }
}
