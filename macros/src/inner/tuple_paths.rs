//! Tuple ⇄ key path conversion impls.

use proc_macro2::TokenStream;
use quote::quote;

use crate::common::{bindings, cons_type, cons_value, numbered_idents, ArityInput};

/// Emit `IntoPath` for `()`, `(T1,)`, ..., `(T1, ..., Tmax)` and the matching
/// `Flatten` for every cons path of the same lengths.
pub fn expand_tuple_paths(input: ArityInput) -> TokenStream {
    let impls = (0..=input.max).map(|n| {
        let tys = numbered_idents("T", n);
        let vars = bindings(n);
        let path_ty = cons_type(&tys);
        let path_val = cons_value(&vars);

        quote! {
            impl<#(#tys),*> IntoPath for (#(#tys,)*) {
                type Path = #path_ty;

                #[inline]
                fn into_path(self) -> Self::Path {
                    let (#(#vars,)*) = self;
                    #path_val
                }
            }

            impl<#(#tys),*> Flatten for #path_ty {
                type Tuple = (#(#tys,)*);

                #[inline]
                fn flatten(self) -> Self::Tuple {
                    let #path_val = self;
                    (#(#vars,)*)
                }
            }
        }
    });

    quote! { #(#impls)* }
}
