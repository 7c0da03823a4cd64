//! This crate provides a mutable, unordered set with a small algebra on top of it.
//!
//! # Purpose
//! A [`HashSet`](collections::set::HashSet) holds values with mathematical set semantics rather
//! than array semantics: inserting a duplicate changes nothing, iteration order means nothing and
//! two sets are equal when they hold the same elements.
//!
//! # Method
//! Union, intersection and subtraction each exist twice. The `*_with` methods on the set mutate
//! it in place, while the functions in [`collections::algebra`] take both operands by reference
//! and return a new set. The borrow checker rules out the aliasing cases a dynamic language has to
//! reason about, such as a set being intersected with itself while it is modified.
//!
//! # Error Handling
//! Only two operations fail. [`remove`](collections::set::HashSet::remove) reports a missing
//! element with [`ElementNotFound`](collections::set::ElementNotFound), and folding a set always
//! reports [`NotImplemented`](collections::set::NotImplemented). Both are small structs that
//! implement [`Error`](std::error::Error) and can be combined into a
//! [`SetError`](collections::set::SetError) using `?`.
//!
//! Capacity overflow while growing is treated like it is by the standard library, with a panic.
//!
//! # Concurrency
//! Nothing here is synchronised. Sets can be sent between threads when their elements and hasher
//! can, but concurrent mutation needs external locking.
//!
//! # Dependencies
//! The set's storage is a hand-written open-addressing hash table. The only dependency is
//! `derive_more`, for the error types.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
