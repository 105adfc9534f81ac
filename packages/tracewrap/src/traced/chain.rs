//! Walking the `source()` chain

use super::types::TracedError;
use std::error::Error as StdError;

/// Iterator over an error and its sources, outermost first
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    /// Chain starting at `head`
    #[must_use]
    pub fn new(head: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(head) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Iterate `err` and everything it wraps
#[must_use]
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain::new(err)
}

/// Whether any link of the chain is a `T` equal to `target`
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    chain(err).any(|link| link.downcast_ref::<T>() == Some(target))
}

impl<E> TracedError<E>
where
    E: StdError + 'static,
{
    /// Iterate this error and everything it wraps
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// Whether `target` appears anywhere in the chain
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: StdError + PartialEq + 'static,
    {
        is(self, target)
    }

    /// First link of the chain that is a `T`
    pub fn find<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        self.chain().find_map(|link| link.downcast_ref::<T>())
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        // The chain always yields at least `self`
        self.chain().last().unwrap_or(self)
    }
}
