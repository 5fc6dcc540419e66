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

use crate::error::Error;
use num_enum::{IntoPrimitive, TryFromPrimitive, TryFromPrimitiveError};

/// What an accessor does with the value it is handed.
///
/// The mode is never stored in the buffer; reader and writer agree on it
/// through the order of their calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Mode {
    /// Encode the value at the write cursor and advance it.
    Write = 0,
    /// Decode the value at the read cursor and advance it.
    Read = 1,
    /// Decode the value at the read cursor, leaving the cursor in place.
    Peek = 2,
    /// Advance the read cursor past the value without decoding it.
    Discard = 3,
    /// Return the bytes the next unread value occupies, leaving the cursor in place.
    Slice = 4,
}

impl From<TryFromPrimitiveError<Mode>> for Error {
    #[cold]
    fn from(err: TryFromPrimitiveError<Mode>) -> Self {
        Error::invalid_mode(err.number)
    }
}

impl Mode {
    /// Converts a raw mode byte, failing with `InvalidMode` outside `0..=4`.
    #[inline]
    pub fn from_u8(mode: u8) -> Result<Mode, Error> {
        Ok(Mode::try_from(mode)?)
    }
}
