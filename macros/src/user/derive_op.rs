//! `#[derive(AddOp)]`: route `Self + Self` to the capability.
//!
//! Only the `Self + Self -> Self` triple is generated; other triples of a
//! concrete subject go through `tola_add::impl_add_op!`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, DeriveInput, WherePredicate};

use crate::common::{crate_path, with_predicates, FieldSet};

pub fn expand_derive_add_op(input: DeriveInput) -> TokenStream {
    let krate = crate_path();
    let name = &input.ident;

    // Only structs get a capability impl from #[derive(Add)]; keep the error
    // consistent for the operator.
    if let Err(err) = FieldSet::from_input(&input, "AddOp") {
        return err.to_compile_error();
    }

    let (_, ty_generics, _) = input.generics.split_for_impl();
    let subject_bound: WherePredicate = parse_quote! { #name #ty_generics: #krate::AddTrait };
    let generics = with_predicates(&input.generics, vec![subject_bound]);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::core::ops::Add for #name #ty_generics #where_clause {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                <Self as #krate::Add>::add(self, rhs)
            }
        }
    }
}
