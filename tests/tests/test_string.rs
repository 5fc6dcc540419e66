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

use litecrate_core::{Config, Crate, Error, Mode};
use litecrate_tests::check_all_modes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_string_modes() {
    assert_eq!(check_all_modes(&String::from("Derek")), b"\x06Derek".to_vec());
    assert_eq!(check_all_modes(&String::new()), vec![0x01]);
    assert_eq!(check_all_modes(&"ü".repeat(100)).len(), 2 + 200);
}

#[test]
fn test_nil_and_empty_strings_stay_distinct() {
    assert_eq!(check_all_modes(&None::<String>), vec![0x00]);
    assert_eq!(check_all_modes(&Some(String::new())), vec![0x01]);
    assert_eq!(check_all_modes(&Some(String::from("x"))), vec![0x02, b'x']);
}

#[test]
fn test_nil_reads_as_empty_plain_string() {
    let mut c = Crate::open(vec![0x00], Config::default());
    assert_eq!(c.read::<String>().unwrap(), "");
    assert_eq!(c.reads_left(), 0);
}

#[test]
fn test_slice_includes_prefix() {
    let mut c = Crate::new(0, Config::default());
    let long = "a".repeat(200);
    c.write(&long).unwrap();
    let mut slot = String::new();
    let span = c.access(&mut slot, Mode::Slice).unwrap().unwrap();
    assert_eq!(span.len(), 2 + 200);
    assert_eq!(&span[..2], &[0xC9, 0x01]);
}

#[test]
fn test_bytes_with_counter() {
    let mut c = Crate::new(0, Config::default());
    c.write_bytes_with_counter(Some(&[0xDE, 0xAD][..])).unwrap();
    c.write_bytes_with_counter(Some(&[][..])).unwrap();
    c.write_bytes_with_counter(None).unwrap();
    assert_eq!(c.data(), &[0x03, 0xDE, 0xAD, 0x01, 0x00]);

    assert_eq!(c.peek_bytes_with_counter().unwrap(), Some(vec![0xDE, 0xAD]));
    assert_eq!(c.slice_with_counter().unwrap(), &[0x03, 0xDE, 0xAD]);
    assert_eq!(c.read_bytes_with_counter().unwrap(), Some(vec![0xDE, 0xAD]));
    assert_eq!(c.read_bytes_with_counter().unwrap(), Some(vec![]));
    assert_eq!(c.read_bytes_with_counter().unwrap(), None);
}

#[test]
fn test_byte_vec_uses_the_same_wire_format() {
    let mut c = Crate::new(0, Config::default());
    c.write(&vec![1u8, 2, 3]).unwrap();
    c.write(&None::<Vec<u8>>).unwrap();
    assert_eq!(c.read_bytes_with_counter().unwrap(), Some(vec![1, 2, 3]));
    assert_eq!(c.read_bytes_with_counter().unwrap(), None);
}

#[test]
fn test_raw_strings_and_bytes() {
    let mut c = Crate::new(0, Config::default());
    c.write_str("abc").unwrap();
    c.write_bytes(&[1, 2]).unwrap();
    assert_eq!(c.len(), 5);
    assert_eq!(c.slice_string(3).unwrap(), b"abc");
    assert_eq!(c.peek_string(3).unwrap(), "abc");
    c.discard_string(3).unwrap();
    assert_eq!(c.peek_byte_vec(2).unwrap(), vec![1, 2]);
    assert_eq!(c.read_byte_vec(2).unwrap(), vec![1, 2]);
    assert!(matches!(c.read_byte_vec(1), Err(Error::BufferUnderrun { .. })));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let mut c = Crate::open(vec![0x02, 0xFF], Config::default());
    assert!(matches!(c.read::<String>(), Err(Error::InvalidData(_))));
    assert_eq!(c.read_index(), 0);
    // the bytes still have a well-defined footprint
    c.discard::<String>().unwrap();
    assert_eq!(c.reads_left(), 0);
}

#[test]
fn test_length_past_written_data() {
    let mut c = Crate::open(vec![0x7F, b'a'], Config::default());
    assert!(matches!(c.read::<String>(), Err(Error::BufferUnderrun { .. })));
    assert!(c.slice::<String>().is_err());
    assert_eq!(c.read_index(), 0);
}

#[test]
fn test_random_strings() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut c = Crate::new(0, Config::default());
    let strings: Vec<Option<String>> = (0..300)
        .map(|_| {
            if rng.gen_bool(0.1) {
                return None;
            }
            let len = rng.gen_range(0..300);
            Some((0..len).map(|_| rng.gen::<char>()).collect())
        })
        .collect();
    for s in &strings {
        c.write(s).unwrap();
    }
    for s in &strings {
        assert_eq!(&c.read::<Option<String>>().unwrap(), s);
    }
    assert_eq!(c.reads_left(), 0);
}
