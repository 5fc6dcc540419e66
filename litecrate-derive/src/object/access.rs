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

use proc_macro2::TokenStream;
use quote::quote;
use syn::Fields;

use crate::util::{self_construction, SourceField};

fn wire_fields<'a, 'b>(
    source_fields: &'b [SourceField<'a>],
) -> impl Iterator<Item = &'b SourceField<'a>> {
    source_fields.iter().filter(|sf| !sf.skip)
}

/// Write, Read and Discard walk the fields; Peek and Slice go through the
/// buffer adapters, which replay a Read or Discard pass and restore the cursor.
pub fn gen_access_self(source_fields: &[SourceField<'_>]) -> TokenStream {
    let members = wire_fields(source_fields).map(SourceField::member);
    quote! {
        fn access_self(
            &mut self,
            c: &mut ::litecrate_core::Crate,
            mode: ::litecrate_core::Mode,
        ) -> ::core::result::Result<(), ::litecrate_core::Error> {
            match mode {
                ::litecrate_core::Mode::Peek => c.peek_self_accessor(self),
                ::litecrate_core::Mode::Slice => c.slice_self_accessor(self).map(|_| ()),
                _ => {
                    #( c.access(&mut self.#members, mode)?; )*
                    ::core::result::Result::Ok(())
                }
            }
        }
    }
}

pub fn gen_write_into(source_fields: &[SourceField<'_>]) -> TokenStream {
    let writes = wire_fields(source_fields).map(|sf| {
        let member = sf.member();
        quote! { ::litecrate_core::Access::write_into(&self.#member, c)?; }
    });
    quote! {
        fn write_into(
            &self,
            c: &mut ::litecrate_core::Crate,
        ) -> ::core::result::Result<(), ::litecrate_core::Error> {
            #(#writes)*
            ::core::result::Result::Ok(())
        }
    }
}

pub fn gen_read_from(fields: &Fields, source_fields: &[SourceField<'_>]) -> TokenStream {
    let field_inits: Vec<TokenStream> = source_fields
        .iter()
        .map(|sf| {
            let value = if sf.skip {
                quote! { ::core::default::Default::default() }
            } else {
                let ty = sf.ty();
                quote! { <#ty as ::litecrate_core::Access>::read_from(c)? }
            };
            sf.field_init(value)
        })
        .collect();
    let construction = self_construction(fields, &field_inits);
    quote! {
        fn read_from(
            c: &mut ::litecrate_core::Crate,
        ) -> ::core::result::Result<Self, ::litecrate_core::Error> {
            let restore = c.reset_cursor_to_here();
            let result: ::core::result::Result<Self, ::litecrate_core::Error> =
                (|| ::core::result::Result::Ok(#construction))();
            if result.is_err() {
                restore(c);
            }
            result
        }
    }
}

pub fn gen_discard_from(source_fields: &[SourceField<'_>]) -> TokenStream {
    let discards = wire_fields(source_fields).map(|sf| {
        let ty = sf.ty();
        quote! { <#ty as ::litecrate_core::Access>::discard_from(c)?; }
    });
    quote! {
        fn discard_from(
            c: &mut ::litecrate_core::Crate,
        ) -> ::core::result::Result<(), ::litecrate_core::Error> {
            let restore = c.reset_cursor_to_here();
            let result: ::core::result::Result<(), ::litecrate_core::Error> = (|| {
                #(#discards)*
                ::core::result::Result::Ok(())
            })();
            if result.is_err() {
                restore(c);
            }
            result
        }
    }
}

pub fn gen_encoded_len(source_fields: &[SourceField<'_>]) -> TokenStream {
    let lens = wire_fields(source_fields).map(|sf| {
        let member = sf.member();
        quote! { + ::litecrate_core::Access::encoded_len(&self.#member) }
    });
    quote! {
        fn encoded_len(&self) -> usize {
            0 #(#lens)*
        }
    }
}
