#![allow(clippy::assertions_on_constants)]
//! The capability predicate, as a boolean query and as a bound.

use tola_add::prelude::*;
use tola_add::can_add;

#[derive(Debug, Clone, Copy, PartialEq, Add)]
struct Point<T> {
    x: T,
    y: T,
}

impl Add<f32, f32> for Point<f32> {
    fn add(self, rhs: f32) -> f32 {
        self.x + rhs
    }
}

#[allow(dead_code)]
struct Opaque;

// ============================================================================
// Boolean form
// ============================================================================

#[test]
fn scalars_hold() {
    assert!(can_add!(i8));
    assert!(can_add!(u128));
    assert!(can_add!(isize));
    assert!(can_add!(f32));
    assert!(can_add!(f64, f64 => f64));
    assert!(can_add!(std::num::Wrapping<i16>));
}

#[test]
fn non_scalars_do_not_hold() {
    assert!(!can_add!(bool));
    assert!(!can_add!(char));
    assert!(!can_add!(String));
    assert!(!can_add!(Opaque));
    assert!(!can_add!(std::num::Wrapping<f32>));
}

#[test]
fn param_and_result_must_match_exactly() {
    assert!(can_add!(Point<f32>, f32 => f32));
    assert!(!can_add!(Point<f32>, f32 => f64));
    assert!(!can_add!(Point<f32>, f64 => f64));
    assert!(!can_add!(Point<f64>, f32 => f32));
    // defaults: Out = Self
    assert!(!can_add!(Point<f32>, f32));
    assert!(can_add!(Point<f32>, Point<f32>));
}

#[test]
fn usable_in_const_context() {
    const POINT_PLUS_FLOAT: bool = can_add!(Point<f32>, f32 => f32);
    const OPAQUE: bool = can_add!(Opaque);
    assert!(POINT_PLUS_FLOAT);
    assert!(!OPAQUE);
}

// ============================================================================
// Bound form
// ============================================================================

fn double<T: AddTrait + Copy>(value: T) -> T {
    value.add(value)
}

fn offset<S, R, O>(subject: S, by: R) -> O
where
    S: AddTrait<R, O>,
{
    subject.add(by)
}

#[test]
fn bound_gates_generic_code() {
    assert_eq!(double(21u32), 42);
    assert_eq!(double(Point { x: 1.5f64, y: -2.0 }), Point { x: 3.0, y: -4.0 });
    let sum: f32 = offset(Point { x: 1.0f32, y: 9.0 }, 2.0f32);
    assert_eq!(sum, 3.0);
}
