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

//! # LiteCrate Core
//!
//! A growable byte buffer with independent read and write cursors, and a
//! uniform five-mode access protocol for packing values into a compact,
//! schema-less binary format.
//!
//! ## Architecture
//!
//! - **`buffer`**: the [`Crate`] buffer, its cursors and grow policy
//! - **`config`**: grow policy switches and their flag byte
//! - **`types`**: the [`Mode`] enumeration
//! - **`codec`**: the [`Access`] trait and every per-type codec
//! - **`accessor`**: the [`SelfAccessor`] capability for aggregates
//! - **`pool`**: a segmented pool of reusable buffers
//! - **`error`**: the error type shared by all of the above
//!
//! ## Access modes
//!
//! Every encodable type honours the same five modes:
//!
//! - **Write** encodes a value at the write cursor
//! - **Read** decodes the value at the read cursor and advances it
//! - **Peek** decodes without advancing
//! - **Discard** skips the value without decoding it
//! - **Slice** returns the raw bytes the value occupies
//!
//! The wire format carries no tags, names or version bytes. Reader and
//! writer must apply the same typed operations in the same order; the call
//! sequence is the schema.
//!
//! ## Wire format
//!
//! - fixed-width scalars are little-endian, complex numbers are real then
//!   imaginary part
//! - 24, 40, 48 and 56-bit integers take 3, 5, 6 and 7 bytes
//! - varints take 1 to 9 bytes, least significant group first
//! - strings, byte arrays, vectors and maps carry a length-or-nil prefix:
//!   `len + 1` as a uvarint, or `0` for nil
//!
//! ## Usage
//!
//! ```rust
//! use litecrate_core::{Config, Crate, Mode};
//!
//! let mut c = Crate::new(0, Config::default());
//! c.write(&39u8).unwrap();
//! c.write(&String::from("Derek")).unwrap();
//! c.write(&-2i64).unwrap();
//! assert_eq!(c.len(), 15);
//!
//! let mut age = 0u8;
//! c.access(&mut age, Mode::Read).unwrap();
//! assert_eq!(age, 39);
//! assert_eq!(c.peek::<String>().unwrap(), "Derek");
//! c.discard::<String>().unwrap();
//! assert_eq!(c.slice::<i64>().unwrap(), &(-2i64).to_le_bytes());
//! ```

pub mod accessor;
pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod pool;
pub mod types;
pub mod util;

pub use accessor::SelfAccessor;
pub use buffer::Crate;
pub use codec::{
    Access, Complex, Complex32, Complex64, FixedWidth, LengthOrNil, MapLike, UVarint, Varint,
    I24, I40, I48, I56, U24, U40, U48, U56,
};
pub use config::Config;
pub use error::Error;
pub use pool::CratePool;
pub use types::Mode;
