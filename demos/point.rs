//! Static and dynamic dispatch over the addition capability.
//!
//! Run with `cargo run --example point`.

use tola_add::prelude::*;
use tola_add::{dyn_add, impl_add_op};

#[derive(Debug, Clone, Copy, PartialEq, Add, AddOp)]
struct Point<T> {
    x: T,
    y: T,
}

// Point<f32> + f32 -> f32
impl Add<f32, f32> for Point<f32> {
    fn add(self, rhs: f32) -> f32 {
        self.x + rhs
    }
}

impl_add_op!(Point<f32>, f32 => f32);

fn main() {
    println!("--- Static dispatch ---");
    let a = Point { x: 1.0f32, y: 1.0 };
    let b = Point { x: 2.0f32, y: 2.0 };
    let sum = a + b;
    println!("{} {}", sum.x, sum.y);
    println!("a + 1.2 = {}", a + 1.2);

    println!();
    println!("--- Dynamic dispatch ---");
    // Like `dyn Add<Rhs = f32, Out = f32>`
    let floating_point = 1.2f32;
    let v_lhs: Vec<DynAdd<f32, f32>> = dyn_add![floating_point, a];
    for lhs in &v_lhs {
        let s = lhs + 1.2;
        println!("sum = {}", s);
    }
}
