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

/// Flag bit set when the buffer only grows through an explicit `grow` call.
pub const FLAG_MANUAL_GROW: u8 = 1;
/// Flag bit set when reallocation grows to exactly the requested size.
pub const FLAG_GROW_EXACT: u8 = 2;

/// Grow policy of a [`Crate`](crate::buffer::Crate).
///
/// Two independent switches: whether a write that does not fit triggers a
/// grow by itself, and whether a reallocation doubles the old storage
/// (`old * 2 + n`) or fits it exactly (`old + n`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Config {
    /// Grow automatically when a write would exceed capacity.
    /// When off, such a write fails with `BufferOverflow`.
    pub auto_grow: bool,
    /// Reallocate to `old * 2 + n` instead of `old + n`.
    pub double_on_grow: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::auto_double()
    }
}

impl Config {
    /// Creates a new Config with default values (auto grow, doubling).
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn auto_double() -> Self {
        Config {
            auto_grow: true,
            double_on_grow: true,
        }
    }

    pub const fn auto_exact() -> Self {
        Config {
            auto_grow: true,
            double_on_grow: false,
        }
    }

    pub const fn manual_double() -> Self {
        Config {
            auto_grow: false,
            double_on_grow: true,
        }
    }

    pub const fn manual_exact() -> Self {
        Config {
            auto_grow: false,
            double_on_grow: false,
        }
    }

    pub fn with_auto_grow(mut self, auto_grow: bool) -> Self {
        self.auto_grow = auto_grow;
        self
    }

    pub fn with_double_on_grow(mut self, double_on_grow: bool) -> Self {
        self.double_on_grow = double_on_grow;
        self
    }

    /// Check if writes grow the buffer on their own.
    #[inline(always)]
    pub fn is_auto_grow(&self) -> bool {
        self.auto_grow
    }

    /// Check if reallocation doubles the old storage.
    #[inline(always)]
    pub fn is_double_on_grow(&self) -> bool {
        self.double_on_grow
    }

    /// Packs the policy into its flag byte, `0` being auto grow with doubling.
    pub fn to_flags(&self) -> u8 {
        let mut flags = 0;
        if !self.auto_grow {
            flags |= FLAG_MANUAL_GROW;
        }
        if !self.double_on_grow {
            flags |= FLAG_GROW_EXACT;
        }
        flags
    }

    /// Unpacks a flag byte. Unknown bits are ignored.
    pub fn from_flags(flags: u8) -> Self {
        Config {
            auto_grow: flags & FLAG_MANUAL_GROW == 0,
            double_on_grow: flags & FLAG_GROW_EXACT == 0,
        }
    }
}
