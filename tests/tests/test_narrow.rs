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

use litecrate_core::{Config, Crate, I24, I40, I48, I56, U24, U40, U48, U56};
use litecrate_tests::check_all_modes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_narrow_widths() {
    assert_eq!(check_all_modes(&U24(U24::MAX)).len(), 3);
    assert_eq!(check_all_modes(&U40(U40::MAX)).len(), 5);
    assert_eq!(check_all_modes(&U48(U48::MAX)).len(), 6);
    assert_eq!(check_all_modes(&U56(U56::MAX)).len(), 7);
    assert_eq!(check_all_modes(&I24(I24::MIN)).len(), 3);
    assert_eq!(check_all_modes(&I40(I40::MIN)).len(), 5);
    assert_eq!(check_all_modes(&I48(I48::MIN)).len(), 6);
    assert_eq!(check_all_modes(&I56(I56::MIN)).len(), 7);
}

macro_rules! check_boundaries {
    ($($name:ident),*) => {$(
        for v in [0, 1, -1, $name::MIN, $name::MIN + 1, $name::MAX, $name::MAX - 1] {
            check_all_modes(&$name(v));
        }
    )*};
}

#[test]
fn test_signed_boundaries() {
    check_boundaries!(I24, I40, I48, I56);
}

#[test]
fn test_signed_wire_bytes() {
    assert_eq!(check_all_modes(&I24(-1)), vec![0xFF, 0xFF, 0xFF]);
    assert_eq!(check_all_modes(&I24(I24::MIN)), vec![0x00, 0x00, 0x80]);
    assert_eq!(check_all_modes(&I24(I24::MAX)), vec![0xFF, 0xFF, 0x7F]);
    assert_eq!(check_all_modes(&I40(-2)), vec![0xFE, 0xFF, 0xFF, 0xFF, 0xFF]);
    assert_eq!(
        check_all_modes(&I56(I56::MIN)),
        vec![0, 0, 0, 0, 0, 0, 0x80]
    );
}

#[test]
fn test_sign_extension_from_raw_bytes() {
    let mut c = Crate::open(vec![0x01, 0x00, 0x80, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], Config::default());
    assert_eq!(c.read::<I24>().unwrap(), I24(-8_388_607));
    assert_eq!(c.read::<I48>().unwrap(), I48(-1));
}

#[test]
fn test_random_narrow_values() {
    let mut rng = StdRng::seed_from_u64(24);
    for _ in 0..200 {
        check_all_modes(&I24(rng.gen_range(I24::MIN..=I24::MAX)));
        check_all_modes(&I40(rng.gen_range(I40::MIN..=I40::MAX)));
        check_all_modes(&I48(rng.gen_range(I48::MIN..=I48::MAX)));
        check_all_modes(&I56(rng.gen_range(I56::MIN..=I56::MAX)));
        check_all_modes(&U24(rng.gen_range(0..=U24::MAX)));
        check_all_modes(&U56(rng.gen_range(0..=U56::MAX)));
    }
}

#[test]
fn test_out_of_range_values_keep_low_bytes() {
    let mut c = Crate::new(0, Config::default());
    c.write(&I24(1 << 23)).unwrap();
    c.write(&U24(1 << 24)).unwrap();
    c.write(&I40(-(1 << 39) - 1)).unwrap();
    assert_eq!(c.len(), 3 + 3 + 5);
    assert_eq!(c.read::<I24>().unwrap(), I24(I24::MIN));
    assert_eq!(c.read::<U24>().unwrap(), U24(0));
    assert_eq!(c.read::<I40>().unwrap(), I40(I40::MAX));

    assert_eq!(I24::checked(1 << 23), None);
    assert_eq!(I24::checked(I24::MIN), Some(I24(I24::MIN)));
    assert_eq!(I56::checked(I56::MIN - 1), None);
    assert_eq!(U24::checked(U24::MAX), Some(U24(U24::MAX)));
    assert_eq!(U48::checked(U48::MAX + 1), None);
    assert_eq!(U40::checked(0), Some(U40(0)));
    assert_eq!(I48::checked(-1), Some(I48(-1)));
}
