//! Traits describing collections independently of their storage.

pub mod collection;
pub mod set;

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use set::*;
