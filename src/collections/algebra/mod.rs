//! Non-destructive set algebra.
//!
//! Each function here takes two sets by reference and returns a brand new one, leaving both
//! operands exactly as they were. For the in-place forms, see [`HashSet::union_with`],
//! [`HashSet::intersect_with`] and [`HashSet::subtract_with`].
//!
//! The operators `|`, `&` and `-` on references to [`HashSet`]s are shorthand for these functions,
//! while `|=`, `&=` and `-=` use the in-place forms.
//!
//! [`HashSet`]: crate::collections::set::HashSet
//! [`HashSet::union_with`]: crate::collections::set::HashSet::union_with
//! [`HashSet::intersect_with`]: crate::collections::set::HashSet::intersect_with
//! [`HashSet::subtract_with`]: crate::collections::set::HashSet::subtract_with

mod algebra;
mod ops;

pub use algebra::*;
