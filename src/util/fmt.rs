use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a set, without collecting them first.
pub(crate) struct DebugSet<I>(pub I);

impl<I> Debug for DebugSet<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.clone()).finish()
    }
}
