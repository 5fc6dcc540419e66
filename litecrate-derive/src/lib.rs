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

//! # LiteCrate Derive Macros
//!
//! `#[derive(SelfAccess)]` turns a struct into a self-describing aggregate.
//! It generates two impls:
//!
//! - `SelfAccessor`, applying the access mode to every field in declaration
//!   order
//! - `Access`, so the struct nests inside vectors, maps, tuples and other
//!   derived structs like any scalar
//!
//! Fields marked `#[litecrate(skip)]` are neither written nor read and come
//! back as `Default::default()`.
//!
//! ```rust
//! use litecrate_core::{Config, Crate};
//! use litecrate_derive::SelfAccess;
//!
//! #[derive(SelfAccess, Debug, Default, PartialEq)]
//! struct Person {
//!     age: u8,
//!     name: String,
//!     children: Vec<Person>,
//!     #[litecrate(skip)]
//!     cache: Option<u64>,
//! }
//!
//! let person = Person {
//!     age: 39,
//!     name: "Derek".to_string(),
//!     children: vec![Person::default()],
//!     cache: Some(1),
//! };
//! let mut c = Crate::new(0, Config::default());
//! c.write(&person).unwrap();
//! let back: Person = c.read().unwrap();
//! assert_eq!(back.name, "Derek");
//! assert_eq!(back.children.len(), 1);
//! assert_eq!(back.cache, None);
//! ```
//!
//! Enums and unions are rejected: the format has no tag byte to tell
//! variants apart.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derives `SelfAccessor` and `Access` for a struct.
#[proc_macro_derive(SelfAccess, attributes(litecrate))]
pub fn proc_macro_derive_self_access(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_self_access(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
