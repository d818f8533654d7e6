//! Field model shared by the derive macros.
//!
//! A struct is flattened into its members (named or positional) and their
//! types, so the expansion code never matches on `syn::Fields` itself.

use proc_macro2::{Span, TokenStream};
use quote::{quote, ToTokens};
use syn::{Data, DeriveInput, Fields, Generics, Index, Member, Type, WherePredicate};

/// Shape of the struct body, needed to rebuild a value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Shape {
    Named,
    Tuple,
    Unit,
}

/// One struct field: how to reach it, and its type.
pub struct Field {
    pub member: Member,
    pub ty: Type,
}

/// All fields of a struct, in declaration order.
pub struct FieldSet {
    pub shape: Shape,
    pub fields: Vec<Field>,
}

impl FieldSet {
    /// Collect the fields of a struct. Enums and unions are rejected at the
    /// type name.
    pub fn from_input(input: &DeriveInput, derive: &str) -> syn::Result<Self> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(e) => {
                return Err(syn::Error::new(
                    e.enum_token.span,
                    format!("`#[derive({})]` only supports structs, not enums", derive),
                ));
            }
            Data::Union(u) => {
                return Err(syn::Error::new(
                    u.union_token.span,
                    format!("`#[derive({})]` only supports structs, not unions", derive),
                ));
            }
        };

        let (shape, fields) = match &data.fields {
            Fields::Named(named) => {
                let fields = named
                    .named
                    .iter()
                    .filter_map(|f| {
                        f.ident.clone().map(|ident| Field {
                            member: Member::Named(ident),
                            ty: f.ty.clone(),
                        })
                    })
                    .collect();
                (Shape::Named, fields)
            }
            Fields::Unnamed(unnamed) => {
                let fields = unnamed
                    .unnamed
                    .iter()
                    .enumerate()
                    .map(|(i, f)| Field {
                        member: Member::Unnamed(Index { index: i as u32, span: Span::call_site() }),
                        ty: f.ty.clone(),
                    })
                    .collect();
                (Shape::Tuple, fields)
            }
            Fields::Unit => (Shape::Unit, Vec::new()),
        };

        Ok(FieldSet { shape, fields })
    }

    /// Rebuild `Self` from one expression per field.
    pub fn rebuild(&self, values: &[TokenStream]) -> TokenStream {
        match self.shape {
            Shape::Named => {
                let members = self.fields.iter().map(|f| &f.member);
                quote! { Self { #(#members: #values),* } }
            }
            Shape::Tuple => quote! { Self(#(#values),*) },
            Shape::Unit => quote! { Self },
        }
    }

    /// Distinct field types, first occurrence kept.
    pub fn distinct_types(&self) -> Vec<&Type> {
        let mut seen: Vec<String> = Vec::new();
        let mut out = Vec::new();
        for field in &self.fields {
            let key = field.ty.to_token_stream().to_string();
            if !seen.contains(&key) {
                seen.push(key);
                out.push(&field.ty);
            }
        }
        out
    }
}

/// Copy of `generics` with extra where-predicates appended.
pub fn with_predicates(generics: &Generics, extra: Vec<WherePredicate>) -> Generics {
    let mut generics = generics.clone();
    if !extra.is_empty() {
        let clause = generics.make_where_clause();
        for pred in extra {
            clause.predicates.push(pred);
        }
    }
    generics
}

/// Path to the runtime crate as seen from the expansion site.
pub fn crate_path() -> TokenStream {
    quote! { ::tola_add }
}
