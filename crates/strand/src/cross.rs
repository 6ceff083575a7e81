use crate::{Counted, Cursor, Pair};
use std::fmt;

/// A cursor producing the full cartesian product of two sources.
///
/// Built with [`Cursor::cross`]. The first source is the fast inner
/// dimension: a pristine clone of it is replayed for every element of the
/// slow outer source. The current outer element is held in a memo slot so
/// that a potentially expensive outer `get` runs once per outer step, not
/// once per pair.
///
/// [`Cursor::cross`]: crate::Cursor::cross
pub struct Cross<A, B>
where
    B: Cursor,
{
    source: A,
    inner: A,
    outer: B,
    memo: Option<B::Item>,
}

impl<A, B> Cross<A, B>
where
    A: Cursor + Clone,
    B: Cursor,
    B::Item: Clone,
{
    pub(crate) fn new(a: A, b: B) -> Self {
        assert!(a.has_next(), "cross over an empty inner source");
        assert!(b.has_next(), "cross over an empty outer source");

        let memo = Some(b.get());

        Self {
            inner: a.clone(),
            source: a,
            outer: b,
            memo,
        }
    }
}

impl<A, B> Cursor for Cross<A, B>
where
    A: Cursor + Clone,
    B: Cursor,
    B::Item: Clone,
{
    type Item = Pair<A::Item, B::Item>;

    fn has_next(&self) -> bool {
        self.outer.has_next()
    }

    fn get(&self) -> Self::Item {
        match &self.memo {
            Some(outer) => Pair::new(self.inner.get(), outer.clone()),
            None => panic!("cursor is exhausted"),
        }
    }

    fn advance(&mut self) {
        assert!(self.outer.has_next(), "cursor is exhausted");
        self.inner.advance();

        if !self.inner.has_next() {
            // Row finished: replay the inner source against the next
            // outer element, if one remains.
            self.inner = self.source.clone();
            self.outer.advance();

            self.memo = if self.outer.has_next() {
                Some(self.outer.get())
            } else {
                None
            };
        }
    }
}

impl<A, B> Counted for Cross<A, B>
where
    A: Counted + Clone,
    B: Counted,
    B::Item: Clone,
{
    fn count(&self) -> usize {
        let outer = self.outer.count();

        if outer == 0 {
            return 0;
        }

        self.source.count() * (outer - 1) + self.inner.count()
    }
}

impl<A, B> Clone for Cross<A, B>
where
    A: Clone,
    B: Cursor + Clone,
    B::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            inner: self.inner.clone(),
            outer: self.outer.clone(),
            memo: self.memo.clone(),
        }
    }
}

impl<A, B> fmt::Debug for Cross<A, B>
where
    A: fmt::Debug,
    B: Cursor + fmt::Debug,
    B::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cross")
            .field("source", &self.source)
            .field("inner", &self.inner)
            .field("outer", &self.outer)
            .field("memo", &self.memo)
            .finish()
    }
}
