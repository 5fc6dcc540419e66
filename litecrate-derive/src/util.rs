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
use quote::{format_ident, quote, ToTokens};
use syn::{Field, Fields, Index, Type};

use crate::object::field_meta::parse_field_meta;

/// A struct field in declaration order.
pub struct SourceField<'a> {
    pub index: usize,
    pub field: &'a Field,
    pub skip: bool,
    pub is_tuple_struct: bool,
}

impl<'a> SourceField<'a> {
    pub fn ty(&self) -> &'a Type {
        &self.field.ty
    }

    /// `name` for named fields, the position for tuple fields.
    pub fn member(&self) -> TokenStream {
        match &self.field.ident {
            Some(ident) => ident.to_token_stream(),
            None => Index::from(self.index).to_token_stream(),
        }
    }

    /// `name: value` for named fields, just `value` for tuple fields.
    pub fn field_init(&self, value: TokenStream) -> TokenStream {
        if self.is_tuple_struct {
            value
        } else {
            let ident = match &self.field.ident {
                Some(ident) => ident.clone(),
                None => format_ident!("_{}", self.index),
            };
            quote! { #ident: #value }
        }
    }
}

pub fn source_fields(fields: &Fields) -> syn::Result<Vec<SourceField<'_>>> {
    let is_tuple_struct = matches!(fields, Fields::Unnamed(_));
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            Ok(SourceField {
                index,
                field,
                skip: parse_field_meta(field)?.skip,
                is_tuple_struct,
            })
        })
        .collect()
}

/// `Self(..)`, `Self { .. }` or `Self` for a unit struct.
pub fn self_construction(fields: &Fields, field_inits: &[TokenStream]) -> TokenStream {
    match fields {
        Fields::Unnamed(_) => quote! { Self( #(#field_inits),* ) },
        Fields::Named(_) => quote! { Self { #(#field_inits),* } },
        Fields::Unit => quote! { Self },
    }
}
