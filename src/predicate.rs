//! # Capability Predicate
//!
//! Two forms of the same question, "does `(S, Rhs, Out)` have an
//! implementation whose method takes `Rhs` and returns exactly `Out`?":
//!
//! - [`AddTrait`]: the bound form. Generic code writes `S: AddTrait<Rhs, Out>`
//!   and an unsatisfied bound is a build error.
//! - [`can_add!`](crate::can_add): the boolean form. Answers `true` or `false`
//!   for concrete types without constructing any value.

use crate::decl::Add;

/// Bound form of the predicate.
///
/// Implemented for every type with a matching [`Add`] implementation and for
/// nothing else. Used to gate the dynamic adapter, the operator front-end
/// and derived aggregate implementations.
#[diagnostic::on_unimplemented(
    message = "capability requirement failed: `{Self}` cannot be added to `{Rhs}` producing `{Out}`",
    label = "requires `{Self}: Add<{Rhs}, {Out}>`",
    note = "the result type must match exactly; check `Rhs` and `Out` of the implementations of `{Self}`"
)]
pub trait AddTrait<Rhs = Self, Out = Self>: Add<Rhs, Out> {}

impl<S, Rhs, Out> AddTrait<Rhs, Out> for S where S: Add<Rhs, Out> {}

/// Check at compile time whether a concrete subject implements [`Add`].
///
/// Uses the "Inherent Const Fallback" pattern: an inherent const shadows
/// a trait const when the bound is satisfied.
///
/// Defaults follow the declaration: `can_add!(S)` asks about `(S, S, S)`,
/// `can_add!(S, Rhs)` about `(S, Rhs, S)`.
///
/// **Note**: Only works for concrete types. In generic code use
/// [`AddTrait`] as a bound instead.
///
/// ```
/// use tola_add::can_add;
///
/// assert!(can_add!(f32));
/// assert!(can_add!(u8, u8 => u8));
/// assert!(!can_add!(f32, f64));
/// assert!(!can_add!(String));
/// ```
#[macro_export]
macro_rules! can_add {
    ($S:ty) => {
        $crate::can_add!($S, $S => $S)
    };
    ($S:ty, $Rhs:ty) => {
        $crate::can_add!($S, $Rhs => $S)
    };
    ($S:ty, $Rhs:ty => $Out:ty) => {{
        #[allow(dead_code)]
        struct __Probe<S, R, O>(::core::marker::PhantomData<(S, R, O)>);

        trait __Fallback { const HOLDS: bool = false; }
        impl<S, R, O> __Fallback for __Probe<S, R, O> {}

        impl<S: $crate::AddTrait<R, O>, R, O> __Probe<S, R, O> {
            #[allow(dead_code)]
            const HOLDS: bool = true;
        }

        <__Probe<$S, $Rhs, $Out>>::HOLDS
    }};
}
