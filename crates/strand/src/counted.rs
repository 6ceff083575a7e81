use crate::{Counted, Cursor};

/// A cursor forcing the counted capability onto a cloneable source.
///
/// Built with [`Cursor::with_count`]. Some sources cannot know their
/// remaining length in constant time: a filter, or a nul-terminated
/// buffer. This wrapper answers `count` anyway, by cloning the source and
/// walking the clone to its end; the wrapped cursor itself is untouched.
///
/// This is the one [`Counted`] implementation that is O(n) per call, which
/// is the entire point: the caller decides that a scan is an acceptable
/// price exactly where the wrapper is applied.
///
/// [`Cursor::with_count`]: crate::Cursor::with_count
#[derive(Debug, Clone)]
pub struct WithCount<C> {
    inner: C,
}

impl<C> WithCount<C> {
    pub(crate) fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C> Cursor for WithCount<C>
where
    C: Cursor,
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
    }
}

impl<C> Counted for WithCount<C>
where
    C: Cursor + Clone,
{
    fn count(&self) -> usize {
        let mut walker = self.inner.clone();
        let mut count = 0;

        while walker.has_next() {
            count += 1;
            walker.advance();
        }

        log::trace!("with_count scanned {} elements", count);
        count
    }
}
