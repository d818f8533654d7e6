//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Add)]` | on struct | Field-wise capability implementation |
//! | `#[derive(AddOp)]` | on struct | `+` operator forwarding to the capability |

mod derive_add;
mod derive_op;

pub use derive_add::expand_derive_add;
pub use derive_op::expand_derive_add_op;
