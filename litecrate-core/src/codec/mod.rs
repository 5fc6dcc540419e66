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

#[macro_use]
pub mod number;
pub mod core;
pub mod crate_;
pub mod length;
pub mod list;
pub mod map;
pub mod narrow;
pub mod string;
pub mod tuple;
pub mod varint;

pub use self::core::Access;
pub use length::LengthOrNil;
pub use map::MapLike;
pub use narrow::{I24, I40, I48, I56, U24, U40, U48, U56};
pub use number::{Complex, Complex32, Complex64, FixedWidth};
pub use varint::{UVarint, Varint};
