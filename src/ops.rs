//! # Operator Front-End
//!
//! Call routing only; nothing here holds state.
//!
//! - Static path: [`add!`](crate::add) builds the call to the subject's own
//!   implementation, chosen at compile time.
//! - Dynamic path: `DynAdd<Rhs, Out> + Rhs` forwards to the handle's stored
//!   call.
//! - Real `+` for subjects the caller owns: `#[derive(AddOp)]` for
//!   `Self + Self -> Self`, [`impl_add_op!`](crate::impl_add_op) for any
//!   implemented concrete triple.

use crate::decl::Add;
use crate::predicate::AddTrait;

/// Static dispatch through the subject's implementation.
///
/// `Out` is inferred; pin it with [`add!`](crate::add)`(lhs, rhs => Out)`
/// when more than one implementation could apply.
#[inline(always)]
pub fn add<S, Rhs, Out>(lhs: S, rhs: Rhs) -> Out
where
    S: AddTrait<Rhs, Out>,
{
    <S as Add<Rhs, Out>>::add(lhs, rhs)
}

/// Add two values through the capability, resolved at compile time.
///
/// ```
/// use tola_add::add;
///
/// assert_eq!(add!(2u8, 3u8), 5);
/// let sum: f32 = add!(0.5f32, 0.25f32 => f32);
/// assert_eq!(sum, 0.75);
/// ```
///
/// A subject without a matching implementation does not build:
///
/// ```compile_fail
/// use tola_add::add;
///
/// let _ = add!(String::new(), String::new());
/// ```
#[macro_export]
macro_rules! add {
    ($lhs:expr, $rhs:expr => $Out:ty) => {
        $crate::ops::add::<_, _, $Out>($lhs, $rhs)
    };
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::ops::add($lhs, $rhs)
    };
}

/// Implement `core::ops::Add` for a concrete subject by forwarding to its
/// capability implementation.
///
/// `impl_add_op!(S)` covers `S + S -> S`; `impl_add_op!(S, Rhs => Out)`
/// covers any other implemented triple. `S` must be local to the calling
/// crate.
#[macro_export]
macro_rules! impl_add_op {
    ($S:ty) => {
        $crate::impl_add_op!($S, $S => $S);
    };
    ($S:ty, $Rhs:ty => $Out:ty) => {
        impl ::core::ops::Add<$Rhs> for $S {
            type Output = $Out;

            #[inline]
            fn add(self, rhs: $Rhs) -> $Out {
                <$S as $crate::Add<$Rhs, $Out>>::add(self, rhs)
            }
        }
    };
}

#[cfg(feature = "alloc")]
mod erased_ops {
    use crate::erased::DynAdd;

    impl<Rhs, Out> core::ops::Add<Rhs> for DynAdd<Rhs, Out> {
        type Output = Out;

        #[inline]
        fn add(self, rhs: Rhs) -> Out {
            self.call(rhs)
        }
    }

    impl<Rhs, Out> core::ops::Add<Rhs> for &DynAdd<Rhs, Out> {
        type Output = Out;

        #[inline]
        fn add(self, rhs: Rhs) -> Out {
            self.call(rhs)
        }
    }
}
