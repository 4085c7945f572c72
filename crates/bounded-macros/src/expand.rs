// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::bound::{evaluate, to_const_argument};
use bounded_core::math::min_max::MinMax;
use bounded_core::num::representation::{Representation, Selection};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Expr, Ident, Token, Type};

/// `MIN, MAX[, Policy]`
pub(crate) struct IntegerInput {
    min: i128,
    max: i128,
    policy: Option<Type>,
}

impl Parse for IntegerInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let min_expr: Expr = input.parse()?;
        input.parse::<Token![,]>()?;
        let max_expr: Expr = input.parse()?;
        let min = evaluate(&min_expr)?;
        let max = evaluate(&max_expr)?;

        let mut policy = None;
        if input.parse::<Option<Token![,]>>()?.is_some() && !input.is_empty() {
            policy = Some(input.parse::<Type>()?);
            input.parse::<Option<Token![,]>>()?;
        }

        if min > max {
            return Err(Error::new_spanned(
                max_expr,
                format!("the minimum {min} exceeds the maximum {max}"),
            ));
        }
        Ok(Self { min, max, policy })
    }
}

/// A single integer literal.
pub(crate) struct ConstantInput {
    value: i128,
}

impl Parse for ConstantInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let expr: Expr = input.parse()?;
        let value = evaluate(&expr)?;
        input.parse::<Option<Token![,]>>()?;
        Ok(Self { value })
    }
}

fn primitive(representation: Representation) -> TokenStream {
    let ident = Ident::new(representation.name(), Span::call_site());
    quote! { ::core::primitive::#ident }
}

pub(crate) fn impl_integer_macro(
    input: IntegerInput,
    selection: Selection,
) -> syn::Result<TokenStream> {
    let bounds = MinMax::new(input.min, input.max);
    let storage = primitive(Representation::select(bounds, selection));
    let min = to_const_argument(input.min);
    let max = to_const_argument(input.max);
    let range = quote! { ::bounded::Between<#min, #max, #storage> };

    Ok(match input.policy {
        Some(policy) => quote! { ::bounded::Integer<#range, #policy> },
        None => quote! { ::bounded::Integer<#range> },
    })
}

pub(crate) fn impl_constant_macro(input: ConstantInput) -> syn::Result<TokenStream> {
    let storage = primitive(Representation::for_constant(input.value));
    let value = to_const_argument(input.value);
    Ok(quote! {
        ::bounded::Integer::<::bounded::Exactly<#value, #storage>>::constant::<#value>()
    })
}
