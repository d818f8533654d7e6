//! # Layer 0: Primitives
//!
//! - `bool.rs`: Type-level boolean logic (Present/Absent).

pub mod bool;

pub use bool::{Bool, Present, Absent};
