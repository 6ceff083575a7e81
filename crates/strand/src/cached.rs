use crate::{Counted, Cursor};
use std::fmt;

/// A cursor memoizing the current element of its source.
///
/// Built with [`Cursor::cached`]. The source's `get` runs once per
/// position, at construction and after every advance, and repeated reads
/// clone the memo instead. Worthwhile when an upstream [`map`] is expensive
/// and read more than once per step; the upstream function must be a pure
/// function of position for the memo to be indistinguishable from the
/// source.
///
/// Clones of a caching cursor own their memo, so advancing one clone never
/// disturbs what another observes.
///
/// [`Cursor::cached`]: crate::Cursor::cached
/// [`map`]: crate::Cursor::map
pub struct Cached<C>
where
    C: Cursor,
{
    inner: C,
    memo: Option<C::Item>,
}

impl<C> Cached<C>
where
    C: Cursor,
    C::Item: Clone,
{
    pub(crate) fn new(inner: C) -> Self {
        let memo = if inner.has_next() {
            Some(inner.get())
        } else {
            None
        };

        Self { inner, memo }
    }
}

impl<C> Cursor for Cached<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn get(&self) -> Self::Item {
        match &self.memo {
            Some(value) => value.clone(),
            None => panic!("cursor is exhausted"),
        }
    }

    fn advance(&mut self) {
        self.inner.advance();

        self.memo = if self.inner.has_next() {
            Some(self.inner.get())
        } else {
            None
        };
    }
}

impl<C> Counted for Cached<C>
where
    C: Counted,
    C::Item: Clone,
{
    fn count(&self) -> usize {
        self.inner.count()
    }
}

impl<C> Clone for Cached<C>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            memo: self.memo.clone(),
        }
    }
}

impl<C> fmt::Debug for Cached<C>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cached")
            .field("inner", &self.inner)
            .field("memo", &self.memo)
            .finish()
    }
}
