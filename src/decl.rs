//! # Capability Declaration
//!
//! The single extension point of the crate. Every way of adding two values
//! goes through an implementation of [`Add`]; no subject type is ever edited
//! to gain the capability.
//!
//! An implementation is keyed by the triple `(Self, Rhs, Out)`. The
//! compiler rejects a second implementation for the same triple, so there
//! is never a runtime choice between candidates.
//!
//! ```
//! use tola_add::Add;
//!
//! #[derive(Debug, Clone, Copy, PartialEq)]
//! struct Meters(f64);
//!
//! impl Add for Meters {
//!     fn add(self, rhs: Meters) -> Meters {
//!         Meters(self.0 + rhs.0)
//!     }
//! }
//!
//! // A second triple for the same subject: Meters + f64 -> f64
//! impl Add<f64, f64> for Meters {
//!     fn add(self, rhs: f64) -> f64 {
//!         self.0 + rhs
//!     }
//! }
//!
//! assert_eq!(Meters(1.5).add(Meters(2.0)), Meters(3.5));
//! let total: f64 = Meters(1.5).add(0.5);
//! assert_eq!(total, 2.0);
//! ```
//!
//! A subject without an implementation does not build:
//!
//! ```compile_fail
//! use tola_add::Add;
//!
//! struct Opaque;
//! let _ = Opaque.add(Opaque);
//! ```

/// Addition capability for `Self`, taking `Rhs` and producing `Out`.
///
/// Both parameters default to `Self`. The implementing value is consumed:
/// it is the state the implementation was constructed from.
#[diagnostic::on_unimplemented(
    message = "no matching capability implementation: `{Self} + {Rhs} -> {Out}`",
    label = "`{Self}` does not implement `Add<{Rhs}, {Out}>`",
    note = "implement `tola_add::Add<{Rhs}, {Out}>` for `{Self}`, derive it field-wise with `#[derive(Add)]`, or join the scalar family through `tola_add::Scalar`"
)]
pub trait Add<Rhs = Self, Out = Self> {
    fn add(self, rhs: Rhs) -> Out;
}
