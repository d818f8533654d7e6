// Common utilities shared by the derive macros
//
// This module contains:
// - fields: Struct field model and where-clause helpers

mod fields;

pub use fields::*;
