//! Common parsing and naming utilities
//!
//! Shared by every generator so the emitted parameter names stay consistent.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{
    parse::{Parse, ParseStream},
    Ident, LitInt,
};

/// Largest arity a generator accepts. Anything above this is almost certainly
/// a typo and would only slow down every downstream build.
pub const ARITY_LIMIT: usize = 32;

// =============================================================================
// Arity Input: `12`
// =============================================================================

/// The single integer literal every generator takes: the largest arity to emit.
#[derive(Debug)]
pub struct ArityInput {
    pub max: usize,
}

impl Parse for ArityInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        if max == 0 || max > ARITY_LIMIT {
            return Err(syn::Error::new(
                lit.span(),
                format!("arity must be between 1 and {ARITY_LIMIT}, got {max}"),
            ));
        }
        if !input.is_empty() {
            return Err(input.error("expected a single integer literal"));
        }
        Ok(ArityInput { max })
    }
}

// =============================================================================
// Identifier Lists
// =============================================================================

/// `prefix1, prefix2, ..., prefixN`
pub fn numbered_idents(prefix: &str, n: usize) -> Vec<Ident> {
    (1..=n).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

/// Right fold of `items` into a cons-list type: `HCons<A, HCons<B, HNil>>`.
pub fn cons_type(items: &[Ident]) -> TokenStream {
    items.iter().rev().fold(quote! { HNil }, |tail, head| {
        quote! { HCons<#head, #tail> }
    })
}

/// Right fold of `items` into a cons-list literal. The same tokens work as a
/// destructuring pattern.
pub fn cons_value(items: &[Ident]) -> TokenStream {
    items.iter().rev().fold(quote! { HNil }, |tail, head| {
        quote! { HCons { head: #head, tail: #tail } }
    })
}

/// Lower-case binding names `k1..kN` matching `numbered_idents("K", n)`.
pub fn bindings(n: usize) -> Vec<Ident> {
    (1..=n).map(|i| Ident::new(&format!("k{i}"), Span::call_site())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arity() {
        let parsed: ArityInput = syn::parse_str("12").unwrap();
        assert_eq!(parsed.max, 12);
    }

    #[test]
    fn test_reject_zero_and_huge() {
        assert!(syn::parse_str::<ArityInput>("0").is_err());
        assert!(syn::parse_str::<ArityInput>("1000").is_err());
        assert!(syn::parse_str::<ArityInput>("3 4").is_err());
    }

    #[test]
    fn test_cons_type_shape() {
        let tys = numbered_idents("K", 2);
        assert_eq!(
            cons_type(&tys).to_string(),
            quote! { HCons<K1, HCons<K2, HNil> > }.to_string()
        );
        assert_eq!(cons_type(&[]).to_string(), "HNil");
    }
}
