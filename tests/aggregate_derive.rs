//! `#[derive(Add)]`: aggregates add field-wise, recursively.

use std::num::Wrapping;

use tola_add::prelude::*;
use tola_add::{add, can_add};

#[derive(Debug, Clone, Copy, PartialEq, Add, AddOp)]
struct Point<T> {
    x: T,
    y: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Add, AddOp)]
struct Segment {
    from: Point<i32>,
    to: Point<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Add)]
struct Mixed(i64, f64, Wrapping<u8>);

#[derive(Debug, Clone, Copy, PartialEq, Add)]
struct Marker;

#[derive(Debug, Clone, Copy, PartialEq, Add)]
struct Tagged<T, U>
where
    T: Copy,
{
    left: T,
    right: U,
    weight: u16,
}

#[test]
fn field_wise_sum() {
    let lhs = Point { x: 1i32, y: 1 };
    let rhs = Point { x: 2i32, y: 2 };
    assert_eq!(add!(lhs, rhs), Point { x: 3, y: 3 });
    assert_eq!(
        add!(lhs, rhs),
        Point { x: add!(lhs.x, rhs.x), y: add!(lhs.y, rhs.y) }
    );
}

#[test]
fn nested_aggregates_recurse() {
    let a = Segment { from: Point { x: 0, y: 1 }, to: Point { x: 2, y: 3 } };
    let b = Segment { from: Point { x: 10, y: 10 }, to: Point { x: -2, y: -3 } };
    let expected = Segment {
        from: a.from + b.from,
        to: a.to + b.to,
    };
    assert_eq!(a + b, expected);
    assert_eq!(expected, Segment { from: Point { x: 10, y: 11 }, to: Point { x: 0, y: 0 } });
}

#[test]
fn tuple_struct_fields() {
    let out = add!(Mixed(1, 0.5, Wrapping(255)), Mixed(2, 0.25, Wrapping(2)));
    assert_eq!(out, Mixed(3, 0.75, Wrapping(1)));
}

#[test]
fn unit_struct() {
    assert_eq!(add!(Marker, Marker), Marker);
}

#[test]
fn generic_parameters_and_where_clause() {
    let lhs = Tagged { left: 1u8, right: Point { x: 1.0f32, y: 2.0 }, weight: 3 };
    let rhs = Tagged { left: 2u8, right: Point { x: 0.5f32, y: 0.5 }, weight: 4 };
    assert_eq!(
        add!(lhs, rhs),
        Tagged { left: 3, right: Point { x: 1.5, y: 2.5 }, weight: 7 }
    );
}

#[test]
fn capability_follows_the_fields() {
    assert!(can_add!(Point<f64>));
    assert!(can_add!(Point<Point<u32>>));
    assert!(can_add!(Segment));
    // String has no implementation, so neither does Point<String>.
    assert!(!can_add!(Point<String>));
    assert!(!can_add!(Point<bool>));
}
