//! # Blanket Implementations: the scalar family
//!
//! One implementation of [`Add`] covers every arithmetic scalar through the
//! [`Scalar`] constraint. The body is picked per member at compile time:
//!
//! ```text
//! S: Scalar ──> S::Exact ──┬── Absent  ──> FamilyRoute: lhs + rhs
//!                          └── Present ──> ExactRoute:  S::add_exact(lhs, rhs)
//! ```
//!
//! A member that needs its own body sets `Exact = Present` and implements
//! [`ExactAdd`]; the exact body then wins at every call site, static or
//! dynamic. Writing `impl Add for S` directly for a member overlaps with the
//! blanket impl and does not build:
//!
//! ```compile_fail
//! use tola_add::{Add, Absent, Scalar};
//!
//! #[derive(Clone, Copy)]
//! struct Tick(u32);
//!
//! impl core::ops::Add for Tick {
//!     type Output = Tick;
//!     fn add(self, rhs: Tick) -> Tick { Tick(self.0 + rhs.0) }
//! }
//!
//! impl Scalar for Tick {
//!     type Exact = Absent;
//! }
//!
//! // conflicting implementation: Tick already gets `Add` from the family
//! impl Add for Tick {
//!     fn add(self, rhs: Tick) -> Tick { Tick(self.0.max(rhs.0)) }
//! }
//! ```

use core::num::Wrapping;

use crate::decl::Add;
use crate::primitives::{Absent, Bool};

// =============================================================================
// Family Membership
// =============================================================================

/// Arithmetic scalar: a `Copy` value closed under `+`.
///
/// `Exact` selects the body used for `(Self, Self, Self)`: `Absent` takes the
/// family body, `Present` takes the member's [`ExactAdd`] body.
pub trait Scalar: Copy + core::ops::Add<Output = Self> {
    type Exact: Bool;
}

/// Exact body for a [`Scalar`] member whose `Exact` is `Present`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` selects an exact implementation but does not provide one",
    label = "missing `ExactAdd` for `{Self}`",
    note = "implement `tola_add::ExactAdd` for `{Self}`, or set `type Exact = Absent` to use the family body"
)]
pub trait ExactAdd: Scalar {
    fn add_exact(self, rhs: Self) -> Self;
}

macro_rules! scalar_family {
    ($($t:ty),* $(,)?) => {
        $(
            impl Scalar for $t {
                type Exact = Absent;
            }

            impl Scalar for Wrapping<$t> {
                type Exact = Absent;
            }
        )*
    };
}

scalar_family!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Scalar for f32 {
    type Exact = Absent;
}

impl Scalar for f64 {
    type Exact = Absent;
}

// =============================================================================
// Routing
// =============================================================================

/// Route taken when a member provides its own body.
pub struct ExactRoute;

/// Route taken by every other member.
pub struct FamilyRoute;

/// Body selected for `S` by its `Exact` slot.
pub type Route<S> = <<S as Scalar>::Exact as Bool>::If<ExactRoute, FamilyRoute>;

/// Trait for route types that can be type-selected.
pub trait RouteAdd<S> {
    fn call(lhs: S, rhs: S) -> S;
}

impl<S: ExactAdd> RouteAdd<S> for ExactRoute {
    #[inline(always)]
    fn call(lhs: S, rhs: S) -> S {
        lhs.add_exact(rhs)
    }
}

impl<S: Scalar> RouteAdd<S> for FamilyRoute {
    #[inline(always)]
    fn call(lhs: S, rhs: S) -> S {
        lhs + rhs
    }
}

impl<S> Add for S
where
    S: Scalar,
    Route<S>: RouteAdd<S>,
{
    #[inline(always)]
    fn add(self, rhs: S) -> S {
        <Route<S> as RouteAdd<S>>::call(self, rhs)
    }
}

// =============================================================================
// Introspection
// =============================================================================

/// Which body a scalar member resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The member's own [`ExactAdd`] body.
    Exact,
    /// The family body, `lhs + rhs`.
    Family,
}

/// Report the body [`Add`] resolves to for `S`, decided at compile time.
pub const fn resolution<S: Scalar>() -> Resolution {
    if <S::Exact as Bool>::VALUE {
        Resolution::Exact
    } else {
        Resolution::Family
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Present;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Clamp(u8);

    impl core::ops::Add for Clamp {
        type Output = Clamp;
        fn add(self, rhs: Clamp) -> Clamp {
            Clamp(self.0.wrapping_add(rhs.0))
        }
    }

    impl Scalar for Clamp {
        type Exact = Present;
    }

    impl ExactAdd for Clamp {
        fn add_exact(self, rhs: Clamp) -> Clamp {
            Clamp(self.0.saturating_add(rhs.0))
        }
    }

    #[test]
    fn test_family_body() {
        assert_eq!(Add::add(2i32, 3i32), 5);
        assert_eq!(Add::add(0.5f64, 0.25f64), 0.75);
        assert_eq!(Add::add(Wrapping(250u8), Wrapping(10u8)), Wrapping(4u8));
        assert_eq!(resolution::<i64>(), Resolution::Family);
    }

    #[test]
    fn test_exact_body_wins() {
        assert_eq!(Add::add(Clamp(250), Clamp(10)), Clamp(255));
        assert_eq!(Clamp(250) + Clamp(10), Clamp(4));
        assert_eq!(resolution::<Clamp>(), Resolution::Exact);
    }
}
