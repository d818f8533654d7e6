#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library
// - alloc: enables DynAdd and dyn_add! in no_std

//! # tola-add
//!
//! Open, extensible capability implementations for Rust types.
//!
//! A capability is declared once, as a free-standing generic trait, and
//! implemented for a subject type anywhere, after the type exists. Calls are
//! resolved either at compile time (static dispatch) or through a
//! type-erased handle (dynamic dispatch), and both can be written with
//! ordinary operator syntax.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent)                                        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Capability                                              |
//! |  - Add<Rhs, Out> (declaration), AddTrait / can_add! (predicate)   |
//! |  - Scalar family blanket impl, ExactAdd override                  |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - DynAdd<Rhs, Out> (erased handle), add!, impl_add_op!           |
//! |  - #[derive(Add)], #[derive(AddOp)]                               |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_add::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Add, AddOp)]
//! struct Point<T> {
//!     x: T,
//!     y: T,
//! }
//!
//! // Point<f32> + f32 -> f32, next to the field-wise Point + Point
//! impl Add<f32, f32> for Point<f32> {
//!     fn add(self, rhs: f32) -> f32 {
//!         self.x + rhs
//!     }
//! }
//!
//! let a = Point { x: 1.0f32, y: 1.0 };
//! let b = Point { x: 2.0f32, y: 2.0 };
//!
//! // Static dispatch
//! assert_eq!(a + b, Point { x: 3.0, y: 3.0 });
//!
//! // Dynamic dispatch over heterogeneous subjects
//! let handles: Vec<DynAdd<f32, f32>> = tola_add::dyn_add![1.5f32, a];
//! let sums: Vec<f32> = handles.iter().map(|h| h + 0.5).collect();
//! assert_eq!(sums, [2.0, 1.5]);
//! ```
//!
//! ## Aggregates
//!
//! `#[derive(Add)]` requires every field type to pass the predicate for
//! `(Field, Field, Field)`. A field that does not qualify is a build error:
//!
//! ```compile_fail
//! use tola_add::prelude::*;
//!
//! #[derive(Clone, Add)]
//! struct Labelled {
//!     weight: f64,
//!     label: String,
//! }
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Capability
// =============================================================================
pub mod decl;
pub mod predicate;
pub mod family;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
#[cfg(feature = "alloc")]
pub mod erased;
pub mod ops;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::bool::{Bool, Present, Absent};
pub use decl::Add;
pub use predicate::AddTrait;
pub use family::{Scalar, ExactAdd, Resolution, resolution};
#[cfg(feature = "alloc")]
pub use erased::DynAdd;

// Re-export proc-macros
pub use macros::{Add, AddOp};

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "alloc")]
    pub use alloc::vec;
}

/// Common items for the capability system.
pub mod prelude {
    pub use crate::decl::Add;
    pub use crate::predicate::AddTrait;
    pub use crate::family::{Scalar, ExactAdd};
    #[cfg(feature = "alloc")]
    pub use crate::erased::DynAdd;
    pub use crate::primitives::{Present, Absent};
    pub use macros::{Add, AddOp};
    // Note: add!, can_add!, impl_add_op!, dyn_add! are #[macro_export] so they're at crate root
}
