//! Procedural macros for tola-add capability system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Add)]` | struct | Field-wise capability implementation |
//! | `#[derive(AddOp)]` | struct | `+` operator forwarding to the capability |
//!
//! ## Example
//!
//! ```ignore
//! use tola_add::prelude::*;
//!
//! #[derive(Clone, Copy, Add, AddOp)]
//! struct Point<T> { x: T, y: T }
//!
//! let p = Point { x: 1, y: 2 } + Point { x: 3, y: 4 };
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Derive the capability for an aggregate by applying it to every field.
///
/// Each field type must itself implement `tola_add::Add` for
/// `(Field, Field, Field)`; the generated impl is bounded on exactly that.
///
/// # Usage
/// ```ignore
/// #[derive(Add)]
/// struct Point<T> { x: T, y: T }
///
/// // Point<T>: Add whenever T: Add
/// let p = tola_add::add!(Point { x: 1, y: 1 }, Point { x: 2, y: 2 });
/// ```
#[proc_macro_derive(Add)]
pub fn derive_add(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_add(input).into()
}

/// Derive `core::ops::Add` for `Self + Self -> Self`, forwarding to the
/// capability implementation.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, Add, AddOp)]
/// struct Point<T> { x: T, y: T }
///
/// let p = Point { x: 1, y: 1 } + Point { x: 2, y: 2 };
/// ```
#[proc_macro_derive(AddOp)]
pub fn derive_add_op(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_add_op(input).into()
}
