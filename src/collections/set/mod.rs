//! A module containing [`HashSet`] and associtated types.
//!
//! Besides the set itself, there are types for owned and borrowed iteration over its elements and
//! the errors produced by its fallible operations. The lazy set views ([`Difference`],
//! [`Intersection`] and [`Union`]) live with the [`Set`](crate::collections::traits::Set) trait.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the
//! elements in place would cause a logic error.
//!
//! [`Difference`]: crate::collections::traits::Difference
//! [`Intersection`]: crate::collections::traits::Intersection
//! [`Union`]: crate::collections::traits::Union

mod error;
mod hash_set;
mod iter;
mod table;
mod tests;

pub use error::*;
pub use hash_set::*;
pub use iter::*;
