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

//! Tuples are written element by element with no prefix, like an aggregate
//! whose fields are its positions.

use crate::buffer::Crate;
use crate::codec::core::Access;
use crate::error::Error;

macro_rules! impl_tuple_access {
    ($($T:ident $idx:tt),+) => {
        impl<$($T: Access),+> Access for ($($T,)+) {
            #[inline(always)]
            fn write_into(&self, c: &mut Crate) -> Result<(), Error> {
                $( self.$idx.write_into(c)?; )+
                Ok(())
            }

            fn read_from(c: &mut Crate) -> Result<Self, Error> {
                let restore = c.reset_cursor_to_here();
                let result: Result<Self, Error> = (|| Ok(($($T::read_from(c)?,)+)))();
                if result.is_err() {
                    restore(c);
                }
                result
            }

            fn discard_from(c: &mut Crate) -> Result<(), Error> {
                let restore = c.reset_cursor_to_here();
                let result: Result<(), Error> = (|| {
                    $( $T::discard_from(c)?; )+
                    Ok(())
                })();
                if result.is_err() {
                    restore(c);
                }
                result
            }

            #[inline(always)]
            fn encoded_len(&self) -> usize {
                0 $( + self.$idx.encoded_len() )+
            }
        }
    };
}

impl_tuple_access!(T0 0);
impl_tuple_access!(T0 0, T1 1);
impl_tuple_access!(T0 0, T1 1, T2 2);
impl_tuple_access!(T0 0, T1 1, T2 2, T3 3);
impl_tuple_access!(T0 0, T1 1, T2 2, T3 3, T4 4);
impl_tuple_access!(T0 0, T1 1, T2 2, T3 3, T4 4, T5 5);
