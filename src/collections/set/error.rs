use derive_more::{Display, Error, From, IsVariant, TryInto};

/// Returned by [`HashSet::remove`](super::HashSet::remove) when no element equal to the requested
/// one is present. Removal isn't idempotent: check with `contains` first, or use
/// [`HashSet::subtract_with`](super::HashSet::subtract_with), if absence is expected.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("the set does not contain the provided element")]
pub struct ElementNotFound;

/// Returned by operations that sets deliberately don't provide, such as
/// [`HashSet::fold_left`](super::HashSet::fold_left).
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("{operation} is not implemented for sets")]
pub struct NotImplemented {
    pub operation: &'static str,
}

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    NotFound(ElementNotFound),
    NotImplemented(NotImplemented),
}
