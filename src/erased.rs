//! # Dynamic Adapter
//!
//! [`DynAdd`] captures any subject satisfying [`AddTrait<Rhs, Out>`] and
//! forgets its type. Handles that agree on `(Rhs, Out)` share one type, so
//! heterogeneous subjects fit in one container:
//!
//! ```
//! use tola_add::{dyn_add, DynAdd};
//!
//! let handles: Vec<DynAdd<f64, f64>> = dyn_add![1.5f64, 2.0f64];
//! let sums: Vec<f64> = handles.iter().map(|h| h + 1.0).collect();
//! assert_eq!(sums, [2.5, 3.0]);
//! ```
//!
//! The stored call is the only runtime dispatch in the crate; every other
//! resolution happens at compile time. A subject that does not qualify is
//! rejected when the handle is built:
//!
//! ```compile_fail
//! use tola_add::DynAdd;
//!
//! let _ = DynAdd::<f32, f32>::new(String::from("no"));
//! ```

use alloc::rc::Rc;
use core::fmt;

use crate::decl::Add;
use crate::predicate::AddTrait;

/// Type-erased handle over the addition capability.
///
/// Owns exactly one captured subject for its whole lifetime. The handle
/// cannot be re-targeted; build a new one instead. Cloning a handle shares
/// the captured subject, which is dropped with the last clone.
pub struct DynAdd<Rhs, Out = Rhs> {
    add: Rc<dyn Fn(Rhs) -> Out>,
}

impl<Rhs, Out> DynAdd<Rhs, Out> {
    /// Capture `subject` by move.
    ///
    /// Each call clones the captured value and consumes the clone through
    /// `S`'s own implementation, so the captured value is never changed and
    /// repeated calls do not affect each other.
    pub fn new<S>(subject: S) -> Self
    where
        S: AddTrait<Rhs, Out> + Clone + 'static,
    {
        Self {
            add: Rc::new(move |rhs: Rhs| -> Out { subject.clone().add(rhs) }),
        }
    }

    /// Invoke the captured subject's implementation with `rhs`.
    #[inline]
    pub fn call(&self, rhs: Rhs) -> Out {
        (self.add)(rhs)
    }
}

/// The erased handle is itself an implementation of the capability.
impl<Rhs, Out> Add<Rhs, Out> for DynAdd<Rhs, Out> {
    #[inline]
    fn add(self, rhs: Rhs) -> Out {
        self.call(rhs)
    }
}

impl<Rhs, Out> Clone for DynAdd<Rhs, Out> {
    fn clone(&self) -> Self {
        Self {
            add: Rc::clone(&self.add),
        }
    }
}

impl<Rhs, Out> fmt::Debug for DynAdd<Rhs, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynAdd").finish_non_exhaustive()
    }
}

/// Build a `Vec` of [`DynAdd`] handles from heterogeneous subjects, in order.
///
/// `(Rhs, Out)` is taken from context.
#[macro_export]
macro_rules! dyn_add {
    ($($subject:expr),* $(,)?) => {
        $crate::__private::vec![$($crate::DynAdd::new($subject)),*]
    };
}
