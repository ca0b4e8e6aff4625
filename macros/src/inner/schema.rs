//! Schema resolution impls.
//!
//! For a key count `k` this emits:
//!
//! ```text
//! impl<K1, ..., Kk, V> Schema for (K1, ..., Kk, V)
//!     Root = Branch<K1, Branch<K2, ... Branch<Kk, Leaf<V>>>>
//!     Init = HCons<K1, ... HCons<K(k-1), HNil>>
//!     Last = Kk
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::{bindings, cons_type, cons_value, numbered_idents, ArityInput};

pub fn expand_schemas(input: ArityInput) -> TokenStream {
    let impls = (1..=input.max).map(|arity| {
        let keys = numbered_idents("K", arity);
        let vars = bindings(arity);

        let (last_key, init_keys) = keys.split_last().expect("arity is at least 1");
        let (last_var, init_vars) = vars.split_last().expect("arity is at least 1");

        let init_ty = cons_type(init_keys);
        let init_val = cons_value(init_vars);
        let root_ty = keys.iter().rev().fold(quote! { Leaf<V> }, |inner, key| {
            quote! { Branch<#key, #inner> }
        });

        quote! {
            impl<#(#keys,)* V> Schema for (#(#keys,)* V)
            where
                #(#keys: Ord + Clone,)*
            {
                type Keys = (#(#keys,)*);
                type Value = V;
                type Init = #init_ty;
                type Last = #last_key;
                type Root = #root_ty;

                const ARITY: usize = #arity;

                #[inline]
                fn split(keys: Self::Keys) -> (Self::Init, Self::Last) {
                    let (#(#vars,)*) = keys;
                    (#init_val, #last_var)
                }
            }
        }
    });

    quote! { #(#impls)* }
}
