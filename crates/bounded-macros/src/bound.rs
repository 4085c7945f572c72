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

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{Error, Expr, ExprLit, ExprUnary, Lit, LitInt, UnOp};

const I128_MIN_MAGNITUDE: u128 = 1 << 127;

fn literal_magnitude(lit: &LitInt) -> syn::Result<u128> {
    lit.base10_parse::<u128>()
}

/// Evaluates a bound written as an integer literal, optionally negated or
/// parenthesized.
pub(crate) fn evaluate(expr: &Expr) -> syn::Result<i128> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) => i128::try_from(literal_magnitude(lit)?)
            .map_err(|_| Error::new(lit.span(), "bound exceeds i128::MAX")),
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => negate(inner),
        Expr::Paren(paren) => evaluate(&paren.expr),
        Expr::Group(group) => evaluate(&group.expr),
        other => Err(Error::new_spanned(other, "expected an integer literal")),
    }
}

fn negate(expr: &Expr) -> syn::Result<i128> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Int(lit), ..
    }) = expr
    {
        let magnitude = literal_magnitude(lit)?;
        if magnitude == I128_MIN_MAGNITUDE {
            return Ok(i128::MIN);
        }
        return i128::try_from(magnitude)
            .map(|value| -value)
            .map_err(|_| Error::new(lit.span(), "bound is below i128::MIN"));
    }
    evaluate(expr)?
        .checked_neg()
        .ok_or_else(|| Error::new_spanned(expr, "bound exceeds i128::MAX"))
}

/// Emits `value` as a braced const generic argument of type `i128`.
pub(crate) fn to_const_argument(value: i128) -> TokenStream {
    if value == i128::MIN {
        return quote! { { ::core::primitive::i128::MIN } };
    }
    let magnitude = Literal::u128_unsuffixed(value.unsigned_abs());
    if value < 0 {
        quote! { { -#magnitude } }
    } else {
        quote! { { #magnitude } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str) -> syn::Result<i128> {
        evaluate(&syn::parse_str::<Expr>(source).expect("valid expression"))
    }

    #[test]
    fn test_evaluate_literals() {
        assert_eq!(eval("0").ok(), Some(0));
        assert_eq!(eval("255").ok(), Some(255));
        assert_eq!(eval("1_000u32").ok(), Some(1000));
        assert_eq!(eval("-5").ok(), Some(-5));
        assert_eq!(eval("(-(7))").ok(), Some(-7));
        assert_eq!(eval("- -3").ok(), Some(3));
    }

    #[test]
    fn test_evaluate_extremes() {
        assert_eq!(
            eval("170141183460469231731687303715884105727").ok(),
            Some(i128::MAX)
        );
        assert_eq!(
            eval("-170141183460469231731687303715884105728").ok(),
            Some(i128::MIN)
        );
        assert!(eval("170141183460469231731687303715884105728").is_err());
        assert!(eval("-170141183460469231731687303715884105729").is_err());
    }

    #[test]
    fn test_evaluate_rejects_non_literals() {
        assert!(eval("N").is_err());
        assert!(eval("1 + 2").is_err());
        assert!(eval("\"5\"").is_err());
    }

    #[test]
    fn test_to_const_argument() {
        assert_eq!(to_const_argument(5).to_string(), quote! { { 5 } }.to_string());
        assert_eq!(to_const_argument(-5).to_string(), quote! { { -5 } }.to_string());
        assert!(to_const_argument(i128::MIN).to_string().contains("MIN"));
    }
}
