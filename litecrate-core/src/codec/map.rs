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
use crate::codec::list::{check_zero_width, discard_counted, read_counted};
use crate::codec::varint::uvarint_len;
use crate::error::Error;
use crate::types::Mode;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Map types the generic map codec can fill and walk.
pub trait MapLike<K, V>: Default {
    fn entry_count(&self) -> usize;

    fn insert_entry(&mut self, key: K, value: V);

    /// Visits every entry in the map's own iteration order.
    fn try_for_each_entry<F>(&mut self, f: F) -> Result<(), Error>
    where
        F: FnMut(&K, &mut V) -> Result<(), Error>;
}

impl<K: Eq + Hash, V, S: BuildHasher + Default> MapLike<K, V> for HashMap<K, V, S> {
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn try_for_each_entry<F>(&mut self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&K, &mut V) -> Result<(), Error>,
    {
        self.iter_mut().try_for_each(|(k, v)| f(k, v))
    }
}

impl<K: Ord, V> MapLike<K, V> for BTreeMap<K, V> {
    fn entry_count(&self) -> usize {
        self.len()
    }

    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    fn try_for_each_entry<F>(&mut self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&K, &mut V) -> Result<(), Error>,
    {
        self.iter_mut().try_for_each(|(k, v)| f(k, v))
    }
}

/// Writes a length prefix followed by key, value pairs in iteration order.
pub fn write_map<'a, K, V, I>(iter: I, c: &mut Crate) -> Result<(), Error>
where
    K: Access + 'a,
    V: Access + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    I::IntoIter: ExactSizeIterator,
{
    let iter = iter.into_iter();
    c.write_length_usize(iter.len())?;
    for (k, v) in iter {
        k.write_into(c)?;
        v.write_into(c)?;
    }
    Ok(())
}

fn map_len<'a, K, V>(entries: impl ExactSizeIterator<Item = (&'a K, &'a V)>) -> usize
where
    K: Access + 'a,
    V: Access + 'a,
{
    let prefix = uvarint_len(entries.len() as u64 + 1);
    entries.fold(prefix, |n, (k, v)| n + k.encoded_len() + v.encoded_len())
}

macro_rules! impl_access_for_map {
    ($map:ty, [$($generics:tt)*]) => {
        impl<$($generics)*> Access for $map {
            fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
                write_map(self, c)
            }

            /// A nil prefix reads as an empty map.
            fn read_from(c: &mut Crate) -> Result<Self, Error> {
                read_counted::<Self, (K, V)>(c).map(Option::unwrap_or_default)
            }

            fn discard_from(c: &mut Crate) -> Result<(), Error> {
                discard_counted::<(K, V)>(c)
            }

            fn encoded_len(&self) -> usize {
                map_len(self.iter())
            }
        }

        impl<$($generics)*> Access for Option<$map> {
            fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
                match self {
                    Some(m) => write_map(m, c),
                    None => c.write_length_or_nil(None).map(|_| ()),
                }
            }

            fn read_from(c: &mut Crate) -> Result<Self, Error> {
                read_counted::<$map, (K, V)>(c)
            }

            fn discard_from(c: &mut Crate) -> Result<(), Error> {
                discard_counted::<(K, V)>(c)
            }

            fn encoded_len(&self) -> usize {
                match self {
                    Some(m) => map_len(m.iter()),
                    None => 1,
                }
            }
        }
    };
}

impl_access_for_map!(HashMap<K, V, S>, [K: Access + Eq + Hash, V: Access, S: BuildHasher + Default]);
impl_access_for_map!(BTreeMap<K, V>, [K: Access + Ord, V: Access]);

impl Crate {
    /// Applies `mode` to a nil-aware map through a key codec and a value
    /// codec, the same way [`Crate::access_slice`] handles elements.
    ///
    /// Write visits entries in the map's iteration order, handing the key
    /// codec a clone of each key. Read builds a fresh map and inserts pairs
    /// in wire order.
    pub fn access_map<M, K, V, FK, FV>(
        &mut self,
        val: &mut Option<M>,
        mode: Mode,
        mut key: FK,
        mut value: FV,
    ) -> Result<Option<&[u8]>, Error>
    where
        M: MapLike<K, V>,
        K: Default + Clone,
        V: Default,
        FK: FnMut(&mut Crate, &mut K, Mode) -> Result<(), Error>,
        FV: FnMut(&mut Crate, &mut V, Mode) -> Result<(), Error>,
    {
        match mode {
            Mode::Write => match val {
                None => {
                    self.write_length_or_nil(None)?;
                }
                Some(map) => {
                    self.write_length_usize(map.entry_count())?;
                    map.try_for_each_entry(|k, v| {
                        let mut k = k.clone();
                        key(self, &mut k, Mode::Write)?;
                        value(self, v, Mode::Write)
                    })?;
                }
            },
            Mode::Read => *val = self.read_map_with::<M, K, V, FK, FV>(&mut key, &mut value)?,
            Mode::Peek => {
                let restore = self.reset_cursor_to_here();
                let result = self.read_map_with::<M, K, V, FK, FV>(&mut key, &mut value);
                restore(self);
                *val = result?;
            }
            Mode::Discard => self.discard_map_with::<K, V, FK, FV>(&mut key, &mut value)?,
            Mode::Slice => {
                let start = self.read_index();
                let restore = self.reset_cursor_to_here();
                let result = self.discard_map_with::<K, V, FK, FV>(&mut key, &mut value);
                let end = self.read_index();
                restore(self);
                result?;
                return Ok(Some(self.span(start..end)));
            }
        }
        Ok(None)
    }

    fn read_map_with<M, K, V, FK, FV>(
        &mut self,
        key: &mut FK,
        value: &mut FV,
    ) -> Result<Option<M>, Error>
    where
        M: MapLike<K, V>,
        K: Default,
        V: Default,
        FK: FnMut(&mut Crate, &mut K, Mode) -> Result<(), Error>,
        FV: FnMut(&mut Crate, &mut V, Mode) -> Result<(), Error>,
    {
        let restore = self.reset_cursor_to_here();
        let Some(len) = self.read_length_usize()? else {
            return Ok(None);
        };
        let mut map = M::default();
        for _ in 0..len {
            let before = self.read_index();
            let mut k = K::default();
            let mut v = V::default();
            let result = key(self, &mut k, Mode::Read)
                .and_then(|_| value(self, &mut v, Mode::Read))
                .and_then(|_| check_zero_width(self, before, len));
            if let Err(e) = result {
                restore(self);
                return Err(e);
            }
            map.insert_entry(k, v);
        }
        Ok(Some(map))
    }

    fn discard_map_with<K, V, FK, FV>(&mut self, key: &mut FK, value: &mut FV) -> Result<(), Error>
    where
        K: Default,
        V: Default,
        FK: FnMut(&mut Crate, &mut K, Mode) -> Result<(), Error>,
        FV: FnMut(&mut Crate, &mut V, Mode) -> Result<(), Error>,
    {
        let restore = self.reset_cursor_to_here();
        let len = self.read_length_usize()?.unwrap_or(0);
        let mut k = K::default();
        let mut v = V::default();
        for _ in 0..len {
            let before = self.read_index();
            let result = key(self, &mut k, Mode::Discard)
                .and_then(|_| value(self, &mut v, Mode::Discard))
                .and_then(|_| check_zero_width(self, before, len));
            if let Err(e) = result {
                restore(self);
                return Err(e);
            }
        }
        Ok(())
    }
}
