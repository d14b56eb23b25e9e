//! Procedural macros generating the arity-indexed trait impls for the
//! `catena` crate: conversions between flat tuples and their inductive list
//! forms, and conversions between const-generic and unary type-level
//! numbers. Neither family can be written as a single generic impl, so both
//! are generated up to a caller-chosen bound.

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, LitInt};

/// Generate `Tuple` and `List` impls converting between flat tuples and
/// nested-pair lists for every arity from 0 up to and including the given
/// bound.
///
/// Must be invoked in a scope where the `Tuple` and `List` traits are
/// visible unqualified; the generated impls name them directly.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    let bound: usize = match bound.base10_parse() {
        Ok(bound) => bound,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    for arity in 0..=bound {
        let tys: Vec<_> = (0..arity).map(|i| format_ident!("T{}", i)).collect();
        let vals: Vec<_> = (0..arity).map(|i| format_ident!("t{}", i)).collect();

        // The flat form `(T0, T1, ...)` and the inductive form
        // `(T0, (T1, (..., ())))`, as both types and patterns/expressions.
        let flat_ty = quote!((#(#tys,)*));
        let flat_val = quote!((#(#vals,)*));
        let mut nested_ty = quote!(());
        let mut nested_val = quote!(());
        for (ty, val) in tys.iter().zip(vals.iter()).rev() {
            nested_ty = quote!((#ty, #nested_ty));
            nested_val = quote!((#val, #nested_val));
        }

        impls.extend(quote! {
            impl<#(#tys),*> Tuple for #flat_ty {
                type AsList = #nested_ty;

                fn into_list(self) -> Self::AsList {
                    let #flat_val = self;
                    #nested_val
                }
            }

            impl<#(#tys),*> List for #nested_ty {
                type AsTuple = #flat_ty;

                fn into_tuple(self) -> Self::AsTuple {
                    let #nested_val = self;
                    #flat_val
                }
            }
        });
    }
    impls.into()
}

/// Generate `ToUnary` impls for `Number<0>` through `Number<bound>` and the
/// matching `ToConstant` impls for their unary forms.
///
/// Must be invoked in a scope where `Number`, `ToUnary`, `ToConstant`, `S`,
/// and `Z` are visible unqualified.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let bound = parse_macro_input!(input as LitInt);
    let bound: usize = match bound.base10_parse() {
        Ok(bound) => bound,
        Err(error) => return error.to_compile_error().into(),
    };

    let mut impls = TokenStream2::new();
    let mut unary_ty = quote!(Z);
    for n in 0..=bound {
        let n = proc_macro2::Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#n> {
                type AsUnary = #unary_ty;
            }

            impl ToConstant for #unary_ty {
                type AsConstant = Number<#n>;
            }
        });
        unary_ty = quote!(S<#unary_ty>);
    }
    impls.into()
}
