use crate::stage::Stage;
use crate::{Cached, Chain, Cross, Filter, Iter, Map, Take, UnorderedPairs, WithCount, Zip};

/// The pull protocol every sequence in this crate speaks.
///
/// A cursor is positioned *on* an element, not between elements: while
/// [`has_next`] is true, [`get`] reads the current element and [`advance`]
/// discards it. `get` is a pure query and may be called any number of times
/// without observable effect; only `advance` changes state.
///
/// Once `has_next` has returned false the cursor is exhausted, and both
/// `get` and `advance` panic. Exhaustion is the only termination signal.
///
/// [`has_next`]: Cursor::has_next
/// [`get`]: Cursor::get
/// [`advance`]: Cursor::advance
pub trait Cursor {
    /// The element type this cursor produces.
    ///
    /// Sources over borrowed storage yield references into that storage;
    /// anything built on top of them is then valid exactly as long as the
    /// storage is.
    type Item;

    /// Test if a current element exists.
    fn has_next(&self) -> bool;

    /// Read the current element without consuming it.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    fn get(&self) -> Self::Item;

    /// Discard the current element and move to the next one.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    fn advance(&mut self);

    /// Transform every element with the given function.
    ///
    /// The function must be pure; it is re-applied on every [`get`].
    ///
    /// [`get`]: Cursor::get
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Keep only the elements satisfying the given predicate.
    ///
    /// The returned cursor is always positioned on a satisfying element
    /// while it has one; leading failures are skipped during construction.
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Cap this cursor at `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Advance past the next `n` elements and return the cursor.
    ///
    /// This is the one strict operation among the combinators: the source
    /// is advanced `n` times *here*, not when the result is first pulled.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `n` elements remain.
    fn skip(mut self, n: usize) -> Self
    where
        Self: Sized,
    {
        for _ in 0..n {
            self.advance();
        }
        self
    }

    /// Memoize the current element so repeated [`get`] calls do not repeat
    /// an expensive upstream computation.
    ///
    /// [`get`]: Cursor::get
    fn cached(self) -> Cached<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Cached::new(self)
    }

    /// Force the counted capability onto a cloneable cursor by counting a
    /// duplicate with a linear scan when asked.
    fn with_count(self) -> WithCount<Self>
    where
        Self: Sized + Clone,
    {
        WithCount::new(self)
    }

    /// Pair this cursor with another, positionally, until either runs out.
    fn zip<C>(self, other: C) -> Zip<Self, C>
    where
        Self: Sized,
        C: Cursor,
    {
        Zip::new(self, other)
    }

    /// Continue with `other` once this cursor is exhausted.
    fn chain<C>(self, other: C) -> Chain<Self, C>
    where
        Self: Sized,
        C: Cursor<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Produce the full cartesian product of this cursor and `other`.
    ///
    /// `self` is the fast dimension, restarted from a pristine clone for
    /// every element of `other`.
    ///
    /// # Panics
    ///
    /// Panics if either cursor is already exhausted.
    fn cross<C>(self, other: C) -> Cross<Self, C>
    where
        Self: Sized + Clone,
        C: Cursor,
        C::Item: Clone,
    {
        Cross::new(self, other)
    }

    /// Produce every unordered pair of elements, diagonal included.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already exhausted.
    fn unordered_pairs(self) -> UnorderedPairs<Self>
    where
        Self: Sized + Clone,
        Self::Item: Clone,
    {
        UnorderedPairs::new(self)
    }

    /// Bind a sourceless [`stage`] descriptor to this cursor.
    ///
    /// `cursor.pipe(stage::map(f))` is the same cursor as `cursor.map(f)`;
    /// terminal stages return the reduced value instead. Stages apply
    /// left-to-right, each fully constructed before the next one runs.
    ///
    /// [`stage`]: crate::stage
    fn pipe<S>(self, stage: S) -> S::Output
    where
        Self: Sized,
        S: Stage<Self>,
    {
        stage.apply(self)
    }

    /// Adapt this cursor to a standard [`Iterator`].
    ///
    /// [`Iterator`]: std::iter::Iterator
    fn into_iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// A cursor which knows its exact remaining length.
///
/// `count` is expected to be O(1); the one deliberate exception is
/// [`WithCount`], which buys the capability with a scan.
pub trait Counted: Cursor {
    /// The exact number of elements left, the current one included.
    fn count(&self) -> usize;
}

/// A cursor which can be consumed from the opposite end.
pub trait Reversible: Cursor {
    /// The mirrored cursor type.
    type Reversed: Cursor<Item = Self::Item>;

    /// Produce a mirror over the same remaining range, in O(1).
    ///
    /// No elements are materialized; reversing twice restores a cursor
    /// with the original content and order.
    fn reverse(self) -> Self::Reversed;
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::Span;

    struct Probe {
        at: usize,
        upto: usize,
        advances: usize,
    }

    impl Cursor for Probe {
        type Item = usize;

        fn has_next(&self) -> bool {
            self.at < self.upto
        }

        fn get(&self) -> usize {
            assert!(self.has_next(), "cursor is exhausted");
            self.at
        }

        fn advance(&mut self) {
            assert!(self.has_next(), "cursor is exhausted");
            self.at += 1;
            self.advances += 1;
        }
    }

    #[test]
    fn skip_is_eager() {
        let probe = Probe {
            at: 0,
            upto: 10,
            advances: 0,
        };

        let skipped = probe.skip(4);
        assert_eq!(skipped.advances, 4);
        assert_eq!(skipped.get(), 4);
    }

    #[test]
    fn skip_to_the_exact_end() {
        let skipped = Span::new(0u32, 3).skip(3);
        assert!(!skipped.has_next());
    }

    #[test]
    #[should_panic(expected = "cursor is exhausted")]
    fn skip_past_the_end_panics() {
        let _ = Span::new(0u32, 3).skip(4);
    }
}
