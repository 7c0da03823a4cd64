//! Set collections and the algebra over them.
//!
//! # Purpose
//! [`HashSet`](set::HashSet) is a mutable container of unique values whose algebra comes in two
//! forms: destructive methods that mutate the receiver, and the pure functions in [`algebra`]
//! that build a new set and leave their operands alone.
//!
//! # Method
//! The [`traits`] describe what a set can do independently of how it stores its elements, so the
//! functions in [`algebra`] work with any [`Set`](traits::Set) that can be collected into.

#[cfg(feature = "algebra")]
pub mod algebra;
#[cfg(feature = "set")]
pub mod set;
#[cfg(feature = "traits")]
pub mod traits;
