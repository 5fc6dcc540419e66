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

use litecrate_core::{Complex32, Complex64, Config, Crate, Error, Mode};
use litecrate_tests::{check_all_modes, round_trip};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_all_modes_on_scalars() {
    assert_eq!(check_all_modes(&true), vec![1]);
    assert_eq!(check_all_modes(&0xABu8), vec![0xAB]);
    assert_eq!(check_all_modes(&-1i8), vec![0xFF]);
    assert_eq!(check_all_modes(&0x0102u16), vec![2, 1]);
    assert_eq!(check_all_modes(&-2i16), vec![0xFE, 0xFF]);
    assert_eq!(check_all_modes(&0x01020304u32), vec![4, 3, 2, 1]);
    assert_eq!(check_all_modes(&i32::MIN), vec![0, 0, 0, 0x80]);
    assert_eq!(check_all_modes(&u64::MAX), vec![0xFF; 8]);
    assert_eq!(check_all_modes(&-2i64), (-2i64).to_le_bytes().to_vec());
    assert_eq!(check_all_modes(&u128::MAX), vec![0xFF; 16]);
    assert_eq!(check_all_modes(&i128::MIN).len(), 16);
    assert_eq!(check_all_modes(&usize::MAX).len(), 8);
    assert_eq!(check_all_modes(&isize::MIN).len(), 8);
    assert_eq!(check_all_modes(&1.5f32), 1.5f32.to_le_bytes().to_vec());
    assert_eq!(check_all_modes(&-0.25f64), (-0.25f64).to_le_bytes().to_vec());
    assert_eq!(check_all_modes(&'é'), vec![0xE9, 0, 0, 0]);
}

#[test]
fn test_complex() {
    let bytes = check_all_modes(&Complex64::new(1.0, -2.0));
    assert_eq!(&bytes[..8], &1.0f64.to_le_bytes());
    assert_eq!(&bytes[8..], &(-2.0f64).to_le_bytes());
    assert_eq!(check_all_modes(&Complex32::new(0.5, 3.0)).len(), 8);
}

#[test]
fn test_float_bit_patterns_survive() {
    for bits in [0x7FC0_0001u32, 0xFF80_0000, 0x0000_0001, 0x8000_0000] {
        let v = f32::from_bits(bits);
        assert_eq!(round_trip(&v).to_bits(), bits);
    }
    let v = f64::from_bits(0x7FF8_0000_0000_0001);
    assert_eq!(round_trip(&v).to_bits(), 0x7FF8_0000_0000_0001);
}

#[test]
fn test_bool_reads_nonzero_as_true() {
    let mut c = Crate::open(vec![0, 1, 2], Config::default());
    assert!(!c.read::<bool>().unwrap());
    assert!(c.read::<bool>().unwrap());
    assert!(c.read::<bool>().unwrap());
}

#[test]
fn test_peek_is_idempotent() {
    let mut c = Crate::new(0, Config::default());
    c.write(&0x1122_3344u32).unwrap();
    for _ in 0..3 {
        assert_eq!(c.peek::<u32>().unwrap(), 0x1122_3344);
        assert_eq!(c.read_index(), 0);
    }
    assert_eq!(c.read::<u32>().unwrap(), 0x1122_3344);
}

#[test]
fn test_short_reads_fail_in_every_mode() {
    let mut c = Crate::open(vec![1, 2, 3], Config::default());
    let mut v = 0u32;
    for mode in [Mode::Read, Mode::Peek, Mode::Discard, Mode::Slice] {
        let err = c.access(&mut v, mode).unwrap_err();
        assert_eq!(err, Error::buffer_underrun(4, 0, 3));
    }
    assert_eq!(c.read_index(), 0);
    assert_eq!(v, 0);
}

#[test]
fn test_raw_mode_byte() {
    let mut c = Crate::new(0, Config::default());
    let mut v = 5u16;
    c.access_raw(&mut v, 0).unwrap();
    assert_eq!(c.access_raw(&mut v, 5).unwrap_err(), Error::invalid_mode(5));
    assert_eq!(c.access_raw(&mut v, 255).unwrap_err(), Error::InvalidMode(255));
    let mut out = 0u16;
    c.access_raw(&mut out, 1).unwrap();
    assert_eq!(out, 5);
}

#[test]
fn test_random_scalars() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut c = Crate::new(0, Config::auto_exact());
    let mut expected = Vec::new();
    for _ in 0..500 {
        let (a, b, d, e): (u16, i32, u64, f64) = (rng.gen(), rng.gen(), rng.gen(), rng.gen());
        c.write(&a).unwrap();
        c.write(&b).unwrap();
        c.write(&d).unwrap();
        c.write(&e).unwrap();
        expected.push((a, b, d, e));
    }
    assert_eq!(c.len(), 500 * (2 + 4 + 8 + 8));

    let mut r = Crate::open(c.into_inner(), Config::default());
    for (a, b, d, e) in expected {
        assert_eq!(r.read::<u16>().unwrap(), a);
        assert_eq!(r.read::<i32>().unwrap(), b);
        assert_eq!(r.read::<u64>().unwrap(), d);
        assert_eq!(r.read::<f64>().unwrap(), e);
    }
    assert_eq!(r.reads_left(), 0);
}
