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

use litecrate::SelfAccess;
use litecrate_core::codec::list::MAX_ZERO_WIDTH_ELEMENTS;
use litecrate_core::{Access, Config, Crate, Error, Mode, Varint};
use litecrate_tests::{check_all_modes, round_trip};

#[test]
fn test_vec_modes() {
    assert_eq!(check_all_modes(&vec![1u32, 2]), vec![0x03, 1, 0, 0, 0, 2, 0, 0, 0]);
    assert_eq!(check_all_modes(&Vec::<u32>::new()), vec![0x01]);
    check_all_modes(&vec![String::from("a"), String::new(), String::from("ccc")]);
    check_all_modes(&vec![vec![Varint(-1)], vec![], vec![Varint(1000), Varint(0)]]);
}

#[test]
fn test_nil_vec() {
    assert_eq!(check_all_modes(&None::<Vec<u8>>), vec![0x00]);
    assert_eq!(check_all_modes(&Some(Vec::<u8>::new())), vec![0x01]);
    check_all_modes(&Some(vec![None, Some(String::from("x"))]));
}

#[test]
fn test_variable_width_discard() {
    let v = vec![Varint(0), Varint(i64::MIN), Varint(64), Varint(-3)];
    let mut c = Crate::new(0, Config::default());
    c.write(&v).unwrap();
    c.write(&0xEEu8).unwrap();
    c.discard::<Vec<Varint>>().unwrap();
    assert_eq!(c.read_index(), v.encoded_len());
    assert_eq!(c.read::<u8>().unwrap(), 0xEE);
}

#[test]
fn test_tuples_and_boxes() {
    assert_eq!(round_trip(&(1u8, -1i16, String::from("t"))), (1, -1, "t".to_string()));
    check_all_modes(&(Varint(5), Some(String::from("z"))));
    assert_eq!(*round_trip(&Box::new(7u64)), 7);
    check_all_modes(&vec![(1u8, 2u8), (3, 4)]);
}

fn access_u16(c: &mut Crate, v: &mut u16, mode: Mode) -> Result<(), Error> {
    c.access(v, mode).map(|_| ())
}

#[test]
fn test_access_slice_with_element_codec() {
    let mut c = Crate::new(0, Config::default());
    let mut v = Some(vec![10u16, 20, 30]);
    assert!(c.access_slice(&mut v, Mode::Write, access_u16).unwrap().is_none());
    let mut nil: Option<Vec<u16>> = None;
    c.access_slice(&mut nil, Mode::Write, access_u16).unwrap();
    assert_eq!(c.data(), &[0x04, 10, 0, 20, 0, 30, 0, 0x00]);

    let mut out = None;
    let span = c
        .access_slice(&mut out, Mode::Slice, access_u16)
        .unwrap()
        .unwrap()
        .to_vec();
    assert_eq!(span, vec![0x04, 10, 0, 20, 0, 30, 0]);
    assert_eq!(out, None);

    c.access_slice(&mut out, Mode::Peek, access_u16).unwrap();
    assert_eq!(out, Some(vec![10, 20, 30]));
    assert_eq!(c.read_index(), 0);

    c.access_slice(&mut out, Mode::Discard, access_u16).unwrap();
    assert_eq!(c.read_index(), 7);

    let mut out = Some(vec![1u16]);
    c.access_slice(&mut out, Mode::Read, access_u16).unwrap();
    assert_eq!(out, None);
    assert_eq!(c.reads_left(), 0);
}

#[test]
fn test_access_slice_custom_element_encoding() {
    // elements stored as varints even though the slot type is i64
    let codec = |c: &mut Crate, v: &mut i64, mode: Mode| -> Result<(), Error> {
        let mut wire = Varint(*v);
        c.access(&mut wire, mode)?;
        *v = wire.0;
        Ok(())
    };
    let mut c = Crate::new(0, Config::default());
    let mut v = Some(vec![-1i64, 1, 300]);
    c.access_slice(&mut v, Mode::Write, codec).unwrap();
    assert_eq!(c.len(), 1 + 1 + 1 + 2);
    let mut out = None;
    c.access_slice(&mut out, Mode::Read, codec).unwrap();
    assert_eq!(out, v);
}

#[test]
fn test_nested_vec_failure_restores_cursor() {
    let mut c = Crate::new(0, Config::default());
    c.write(&vec![vec![1u8, 2], vec![3]]).unwrap();
    let mut bytes = c.into_inner();
    bytes.pop();
    let mut c = Crate::open(bytes, Config::default());
    assert!(c.read::<Vec<Vec<u8>>>().is_err());
    assert!(c.discard::<Vec<Vec<u8>>>().is_err());
    assert_eq!(c.read_index(), 0);
}

#[derive(SelfAccess, Debug, Default, PartialEq)]
struct Marker;

#[test]
fn test_zero_width_elements() {
    let markers: Vec<Marker> = (0..1000).map(|_| Marker).collect();
    assert_eq!(check_all_modes(&markers), vec![0xE9, 0x07]);

    // a prefix claiming more empty elements than allowed
    let mut c = Crate::new(0, Config::default());
    c.write_length_or_nil(Some(1 << 40)).unwrap();
    assert!(matches!(
        c.read::<Vec<Marker>>(),
        Err(Error::InvalidData(_))
    ));
    assert_eq!(c.read_index(), 0);
    assert!(c.discard::<Vec<Marker>>().is_err());
    assert!(c.slice::<Vec<Marker>>().is_err());
    assert_eq!(c.read_index(), 0);

    let mut out = None;
    let result = c.access_slice(&mut out, Mode::Read, |c, m: &mut Marker, mode| {
        c.access(m, mode).map(|_| ())
    });
    assert!(result.is_err());
    assert_eq!(c.read_index(), 0);

    let mut c = Crate::new(0, Config::default());
    c.write_length_or_nil(Some(MAX_ZERO_WIDTH_ELEMENTS as u64)).unwrap();
    assert_eq!(c.read::<Vec<Marker>>().unwrap().len(), MAX_ZERO_WIDTH_ELEMENTS);
}
