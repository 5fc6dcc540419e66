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

pub mod access;
pub mod field_meta;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput};

use crate::util::source_fields;

pub fn derive_self_access(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let fields = match &ast.data {
        Data::Struct(s) => &s.fields,
        Data::Enum(e) => {
            return Err(syn::Error::new(
                e.enum_token.span,
                "SelfAccess cannot be derived for enums",
            ))
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span,
                "SelfAccess cannot be derived for unions",
            ))
        }
    };
    let source_fields = source_fields(fields)?;

    let mut generics = ast.generics.clone();
    let type_params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::litecrate_core::Access));
    }
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let access_self = access::gen_access_self(&source_fields);
    let write_into = access::gen_write_into(&source_fields);
    let read_from = access::gen_read_from(fields, &source_fields);
    let discard_from = access::gen_discard_from(&source_fields);
    let encoded_len = access::gen_encoded_len(&source_fields);

    Ok(quote! {
        impl #impl_generics ::litecrate_core::SelfAccessor for #name #ty_generics #where_clause {
            #access_self
        }

        impl #impl_generics ::litecrate_core::Access for #name #ty_generics #where_clause {
            #write_into
            #read_from
            #discard_from
            #encoded_len
        }
    })
}
