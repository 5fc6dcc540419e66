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

//! # LiteCrate
//!
//! Compact, schema-less binary serialization built around one buffer type,
//! [`Crate`], and one protocol applied to every value: Write, Read, Peek,
//! Discard and Slice.
//!
//! ## Key Features
//!
//! - **Small output**: no tags, field names or version bytes on the wire
//! - **One protocol**: every scalar, string, collection and aggregate
//!   supports all five access modes
//! - **Narrow integers**: 24, 40, 48 and 56-bit values in 3 to 7 bytes
//! - **Varints**: zigzag signed and plain unsigned, 1 to 9 bytes
//! - **Nil-aware containers**: nil and empty strings, vectors and maps stay
//!   distinct
//! - **Derived aggregates**: `#[derive(SelfAccess)]` for structs, nested to
//!   any depth
//!
//! ## Example
//!
//! ```rust
//! use litecrate::{Config, Crate, Mode, SelfAccess, Varint};
//!
//! #[derive(SelfAccess, Debug, Default, PartialEq)]
//! struct Reading {
//!     sensor: u16,
//!     delta: Varint,
//!     tags: Vec<String>,
//! }
//!
//! let reading = Reading {
//!     sensor: 7,
//!     delta: Varint(-3),
//!     tags: vec!["hot".to_string()],
//! };
//!
//! let mut c = Crate::new(0, Config::default());
//! c.write(&reading).unwrap();
//!
//! let mut other = Crate::open(c.data_copy(), Config::default());
//! let mut out = Reading::default();
//! other.access_self_accessor(&mut out, Mode::Read).unwrap();
//! assert_eq!(out, reading);
//! assert_eq!(other.reads_left(), 0);
//! ```
//!
//! The reader must call the same typed operations, in the same order, as the
//! writer. Nothing on the wire lets a reader detect a mismatch.

pub use litecrate_core::{
    accessor, buffer, codec, config, error, pool, types, Access, Complex, Complex32, Complex64,
    Config, Crate, CratePool, Error, FixedWidth, LengthOrNil, MapLike, Mode, SelfAccessor,
    UVarint, Varint, I24, I40, I48, I56, U24, U40, U48, U56,
};
pub use litecrate_derive::SelfAccess;
