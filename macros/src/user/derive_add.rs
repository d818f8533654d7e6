//! `#[derive(Add)]`: the composite-type policy.
//!
//! The aggregate's implementation applies the capability to each field and
//! rebuilds the aggregate from the per-field results:
//!
//! ```ignore
//! #[derive(Add)]
//! struct Point<T> { x: T, y: T }
//!
//! // Expands to:
//! impl<T> ::tola_add::Add for Point<T>
//! where
//!     T: ::tola_add::AddTrait,
//! {
//!     fn add(self, rhs: Self) -> Self {
//!         Self {
//!             x: <T as ::tola_add::Add>::add(self.x, rhs.x),
//!             y: <T as ::tola_add::Add>::add(self.y, rhs.y),
//!         }
//!     }
//! }
//! ```
//!
//! Every field type must satisfy the predicate itself; the bound is placed on
//! the field type, not on the generic parameters, so concrete and nested
//! field types are handled the same way.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, WherePredicate};

use crate::common::{crate_path, with_predicates, FieldSet};

pub fn expand_derive_add(input: DeriveInput) -> TokenStream {
    match try_expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn try_expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let krate = crate_path();
    let name = &input.ident;
    let set = FieldSet::from_input(input, "Add")?;

    let bounds: Vec<WherePredicate> = set
        .distinct_types()
        .into_iter()
        .map(|ty| parse_quote! { #ty: #krate::AddTrait })
        .collect();
    let generics = with_predicates(&input.generics, bounds);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let values: Vec<TokenStream> = set
        .fields
        .iter()
        .map(|field| {
            let member = &field.member;
            let ty = &field.ty;
            quote! { <#ty as #krate::Add>::add(self.#member, rhs.#member) }
        })
        .collect();
    let body = set.rebuild(&values);
    // A unit struct never reads `rhs`.
    let rhs = if set.fields.is_empty() { quote! { _rhs } } else { quote! { rhs } };

    Ok(quote! {
        impl #impl_generics #krate::Add for #name #ty_generics #where_clause {
            #[inline]
            fn add(self, #rhs: Self) -> Self {
                #body
            }
        }
    })
}
