use crate::{Counted, Cursor, Pair};
use std::fmt;

/// A cursor producing every unordered pair drawn from one source.
///
/// Built with [`Cursor::unordered_pairs`]. For a source of n elements this
/// yields the n·(n+1)/2 pairs {xᵢ, xⱼ} with i ≤ j: the upper triangle of
/// the n×n grid, diagonal included, with no symmetric duplicates. A slow
/// outer position holds one element (memoized, like [`Cross`]) while a fast
/// inner clone sweeps the remaining suffix starting at the outer position
/// itself.
///
/// [`Cursor::unordered_pairs`]: crate::Cursor::unordered_pairs
/// [`Cross`]: crate::Cross
pub struct UnorderedPairs<C>
where
    C: Cursor,
{
    outer: C,
    inner: C,
    memo: Option<C::Item>,
}

impl<C> UnorderedPairs<C>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    pub(crate) fn new(source: C) -> Self {
        assert!(source.has_next(), "unordered pairs over an empty source");

        let memo = Some(source.get());

        Self {
            inner: source.clone(),
            outer: source,
            memo,
        }
    }
}

impl<C> Cursor for UnorderedPairs<C>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    type Item = Pair<C::Item, C::Item>;

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
            // Row finished: the next row starts on the diagonal, so the
            // inner position is the advanced outer position itself.
            self.outer.advance();

            self.memo = if self.outer.has_next() {
                Some(self.outer.get())
            } else {
                None
            };

            self.inner = self.outer.clone();
        }
    }
}

impl<C> Counted for UnorderedPairs<C>
where
    C: Counted + Clone,
    C::Item: Clone,
{
    fn count(&self) -> usize {
        // Triangular count of the untouched rows below the current one,
        // plus what is left of the current row (inclusive).
        let n = self.outer.count();
        n * n.saturating_sub(1) / 2 + self.inner.count()
    }
}

impl<C> Clone for UnorderedPairs<C>
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            memo: self.memo.clone(),
        }
    }
}

impl<C> fmt::Debug for UnorderedPairs<C>
where
    C: Cursor + fmt::Debug,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnorderedPairs")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("memo", &self.memo)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Counted, Cursor, Span};

    #[test]
    fn ten_elements_make_fifty_five_pairs() {
        let n = 10;
        let total = n * (n + 1) / 2;

        let mut pairs = Span::new(0i32, n as i32).unordered_pairs();
        assert_eq!(pairs.count(), total);

        for step in 0..total {
            assert!(pairs.has_next());
            assert_eq!(pairs.count(), total - step);
            pairs.advance();
        }

        assert!(!pairs.has_next());
        assert_eq!(pairs.count(), 0);
    }

    #[test]
    fn every_row_starts_on_the_diagonal() {
        let mut pairs = Span::new(0i32, 3).unordered_pairs();
        let mut seen = Vec::new();

        while pairs.has_next() {
            let pair = pairs.get();
            seen.push((pair.first, pair.second));
            pairs.advance();
        }

        assert_eq!(
            seen,
            vec![(0, 0), (1, 0), (2, 0), (1, 1), (2, 1), (2, 2)]
        );
    }

    #[test]
    #[should_panic(expected = "unordered pairs over an empty source")]
    fn an_empty_source_is_rejected() {
        let _ = Span::new(0i32, 0).unordered_pairs();
    }
}
