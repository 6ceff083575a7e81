use crate::{Cursor, Reversible};

/// A cursor keeping only the elements satisfying a predicate.
///
/// Built with [`Cursor::filter`]. Whenever `has_next` is true the cursor is
/// already positioned on a satisfying element; both construction and every
/// advance run the look-ahead to the next match.
///
/// Counting a filter is inherently linear, so the cursor does not carry the
/// [`Counted`] capability; use [`Cursor::with_count`] or a terminal
/// [`algo::count`] to pay for the traversal explicitly.
///
/// [`Cursor::filter`]: crate::Cursor::filter
/// [`Cursor::with_count`]: crate::Cursor::with_count
/// [`Counted`]: crate::Counted
/// [`algo::count`]: crate::algo::count
#[derive(Debug, Clone)]
pub struct Filter<C, F> {
    inner: C,
    predicate: F,
}

impl<C, F> Filter<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    pub(crate) fn new(inner: C, predicate: F) -> Self {
        let mut filter = Self { inner, predicate };
        filter.seek();
        filter
    }

    /// Advance the source to the next satisfying element, if any.
    fn seek(&mut self) {
        while self.inner.has_next() && !(self.predicate)(&self.inner.get()) {
            self.inner.advance();
        }
    }
}

impl<C, F> Cursor for Filter<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    fn get(&self) -> Self::Item {
        self.inner.get()
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.seek();
    }
}

impl<C, F> Reversible for Filter<C, F>
where
    C: Reversible,
    F: Fn(&C::Item) -> bool,
{
    type Reversed = Filter<C::Reversed, F>;

    fn reverse(self) -> Self::Reversed {
        Filter::new(self.inner.reverse(), self.predicate)
    }
}
