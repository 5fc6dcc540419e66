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

use litecrate_core::{Config, Crate, Error, Mode, Varint};
use litecrate_tests::{check_all_modes, round_trip};
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_hash_map_modes() {
    let map: HashMap<String, u32> = [("a", 1), ("bb", 2), ("", 3)]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let bytes = check_all_modes(&map);
    assert_eq!(bytes.len(), 1 + (2 + 4) + (3 + 4) + (1 + 4));
    assert_eq!(bytes[0], 0x04);
}

#[test]
fn test_btree_map_bytes_are_reproducible() {
    let forward: BTreeMap<u16, String> = (0..50).map(|i| (i, i.to_string())).collect();
    let backward: BTreeMap<u16, String> = (0..50).rev().map(|i| (i, i.to_string())).collect();
    assert_eq!(check_all_modes(&forward), check_all_modes(&backward));
}

#[test]
fn test_nil_maps() {
    assert_eq!(check_all_modes(&None::<HashMap<u8, u8>>), vec![0x00]);
    assert_eq!(check_all_modes(&Some(BTreeMap::<u8, u8>::new())), vec![0x01]);
    let mut c = Crate::open(vec![0x00], Config::default());
    assert!(c.read::<HashMap<u8, u8>>().unwrap().is_empty());
}

#[test]
fn test_nested_values() {
    let mut map = BTreeMap::new();
    map.insert(Varint(-1), vec![String::from("x")]);
    map.insert(Varint(1), vec![]);
    assert_eq!(round_trip(&map), map);
    check_all_modes(&map);
}

#[test]
fn test_duplicate_keys_keep_the_last_value() {
    let mut c = Crate::new(0, Config::default());
    c.write_length_or_nil(Some(2)).unwrap();
    c.write(&(1u8, 10u8)).unwrap();
    c.write(&(1u8, 20u8)).unwrap();
    let map = c.read::<HashMap<u8, u8>>().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map[&1], 20);
}

fn key_codec(c: &mut Crate, k: &mut String, mode: Mode) -> Result<(), Error> {
    c.access(k, mode).map(|_| ())
}

fn value_codec(c: &mut Crate, v: &mut i64, mode: Mode) -> Result<(), Error> {
    let mut wire = Varint(*v);
    c.access(&mut wire, mode)?;
    *v = wire.0;
    Ok(())
}

#[test]
fn test_access_map_with_codecs() {
    let mut src: Option<BTreeMap<String, i64>> =
        Some([("k".to_string(), -5), ("m".to_string(), 500)].into_iter().collect());
    let mut c = Crate::new(0, Config::default());
    c.access_map(&mut src, Mode::Write, key_codec, value_codec).unwrap();
    assert_eq!(c.data(), &[0x03, 0x02, b'k', 0x09, 0x02, b'm', 0xE8, 0x07]);

    let mut out: Option<BTreeMap<String, i64>> = None;
    let span = c
        .access_map(&mut out, Mode::Slice, key_codec, value_codec)
        .unwrap()
        .unwrap();
    assert_eq!(span.len(), 8);
    c.access_map(&mut out, Mode::Peek, key_codec, value_codec).unwrap();
    assert_eq!(out, src);
    assert_eq!(c.read_index(), 0);
    c.access_map(&mut out, Mode::Discard, key_codec, value_codec).unwrap();
    assert_eq!(c.reads_left(), 0);

    c.reset_read_index();
    let mut out: Option<HashMap<String, i64>> = None;
    c.access_map(&mut out, Mode::Read, key_codec, value_codec).unwrap();
    let out = out.unwrap();
    assert_eq!(out["k"], -5);
    assert_eq!(out["m"], 500);
}

#[test]
fn test_access_map_nil() {
    let mut c = Crate::new(0, Config::default());
    let mut nil: Option<HashMap<String, i64>> = None;
    c.access_map(&mut nil, Mode::Write, key_codec, value_codec).unwrap();
    assert_eq!(c.data(), &[0x00]);
    let mut out = Some(HashMap::new());
    c.access_map(&mut out, Mode::Read, key_codec, value_codec).unwrap();
    assert_eq!(out, None);
}
