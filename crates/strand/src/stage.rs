//! Sourceless pipeline stages.
//!
//! Every combinator and terminal algorithm in the crate has a
//! configuration-only factory here. The factory call carries no iteration
//! state; the resulting descriptor does its work when bound to a source
//! with [`Cursor::pipe`], and produces exactly what the corresponding
//! direct form produces:
//!
//! ```
//! use strand::{stage, Cursor, Span};
//!
//! let piped = Span::new(0u32, 100)
//!     .pipe(stage::filter(|n: &u32| n % 3 == 0))
//!     .pipe(stage::map(|n| n * n))
//!     .pipe(stage::take(5))
//!     .pipe(stage::sum());
//!
//! let direct = strand::algo::sum(
//!     Span::new(0u32, 100).filter(|n| n % 3 == 0).map(|n| n * n).take(5),
//! );
//!
//! assert_eq!(piped, direct);
//! ```
//!
//! Stages bind left-to-right, each one fully constructed before the next
//! consumes it.
//!
//! [`Cursor::pipe`]: crate::Cursor::pipe

use crate::{algo, Cached, Chain, Cross, Cursor, Filter, Map, Reversible, Take};
use crate::{UnorderedPairs, WithCount, Zip};
use std::marker::PhantomData;
use std::ops::Add;

/// A pipeline stage waiting for a source.
///
/// Combinator stages output another cursor; terminal stages output the
/// reduced value.
pub trait Stage<C>
where
    C: Cursor,
{
    /// What binding this stage to a source produces.
    type Output;

    /// Bind the stage to a source.
    fn apply(self, cursor: C) -> Self::Output;
}

/// The descriptor produced by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct MapStage<F> {
    f: F,
}

/// Build a map stage from the function to apply.
pub fn map<F>(f: F) -> MapStage<F> {
    MapStage { f }
}

impl<B, C, F> Stage<C> for MapStage<F>
where
    C: Cursor,
    F: Fn(C::Item) -> B,
{
    type Output = Map<C, F>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.map(self.f)
    }
}

/// The descriptor produced by [`filter`].
#[derive(Debug, Clone, Copy)]
pub struct FilterStage<F> {
    predicate: F,
}

/// Build a filter stage from the predicate to keep elements by.
pub fn filter<F>(predicate: F) -> FilterStage<F> {
    FilterStage { predicate }
}

impl<C, F> Stage<C> for FilterStage<F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Output = Filter<C, F>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.filter(self.predicate)
    }
}

/// The descriptor produced by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct TakeStage {
    n: usize,
}

/// Build a stage capping its source at `n` elements.
pub fn take(n: usize) -> TakeStage {
    TakeStage { n }
}

impl<C> Stage<C> for TakeStage
where
    C: Cursor,
{
    type Output = Take<C>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.take(self.n)
    }
}

/// The descriptor produced by [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct SkipStage {
    n: usize,
}

/// Build a stage advancing past the next `n` elements.
///
/// Like [`Cursor::skip`] this is strict: the source is advanced when the
/// stage binds, not when the result is first pulled. Binding it panics if
/// fewer than `n` elements remain.
///
/// [`Cursor::skip`]: crate::Cursor::skip
pub fn skip(n: usize) -> SkipStage {
    SkipStage { n }
}

impl<C> Stage<C> for SkipStage
where
    C: Cursor,
{
    type Output = C;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.skip(self.n)
    }
}

/// The descriptor produced by [`cached`].
#[derive(Debug, Clone, Copy)]
pub struct CachedStage(());

/// Build a stage memoizing the current element of its source.
pub fn cached() -> CachedStage {
    CachedStage(())
}

impl<C> Stage<C> for CachedStage
where
    C: Cursor,
    C::Item: Clone,
{
    type Output = Cached<C>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.cached()
    }
}

/// The descriptor produced by [`with_count`].
#[derive(Debug, Clone, Copy)]
pub struct WithCountStage(());

/// Build a stage forcing the counted capability onto its source.
pub fn with_count() -> WithCountStage {
    WithCountStage(())
}

impl<C> Stage<C> for WithCountStage
where
    C: Cursor + Clone,
{
    type Output = WithCount<C>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.with_count()
    }
}

/// The descriptor produced by [`zip`].
#[derive(Debug, Clone)]
pub struct ZipStage<C2> {
    other: C2,
}

/// Build a stage pairing its source with `other`, position by position.
pub fn zip<C2>(other: C2) -> ZipStage<C2> {
    ZipStage { other }
}

impl<C, C2> Stage<C> for ZipStage<C2>
where
    C: Cursor,
    C2: Cursor,
{
    type Output = Zip<C, C2>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.zip(self.other)
    }
}

/// The descriptor produced by [`chain`].
#[derive(Debug, Clone)]
pub struct ChainStage<C2> {
    other: C2,
}

/// Build a stage continuing with `other` once its source is exhausted.
pub fn chain<C2>(other: C2) -> ChainStage<C2> {
    ChainStage { other }
}

impl<C, C2> Stage<C> for ChainStage<C2>
where
    C: Cursor,
    C2: Cursor<Item = C::Item>,
{
    type Output = Chain<C, C2>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.chain(self.other)
    }
}

/// The descriptor produced by [`cross`].
#[derive(Debug, Clone)]
pub struct CrossStage<C2> {
    other: C2,
}

/// Build a stage producing the cartesian product of its source and
/// `other`, with the source as the fast dimension.
pub fn cross<C2>(other: C2) -> CrossStage<C2> {
    CrossStage { other }
}

impl<C, C2> Stage<C> for CrossStage<C2>
where
    C: Cursor + Clone,
    C2: Cursor,
    C2::Item: Clone,
{
    type Output = Cross<C, C2>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.cross(self.other)
    }
}

/// The descriptor produced by [`unordered_pairs`].
#[derive(Debug, Clone, Copy)]
pub struct UnorderedPairsStage(());

/// Build a stage producing every unordered pair from its source.
pub fn unordered_pairs() -> UnorderedPairsStage {
    UnorderedPairsStage(())
}

impl<C> Stage<C> for UnorderedPairsStage
where
    C: Cursor + Clone,
    C::Item: Clone,
{
    type Output = UnorderedPairs<C>;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.unordered_pairs()
    }
}

/// The descriptor produced by [`reverse`].
#[derive(Debug, Clone, Copy)]
pub struct ReverseStage(());

/// Build a stage mirroring a reversible source.
pub fn reverse() -> ReverseStage {
    ReverseStage(())
}

impl<C> Stage<C> for ReverseStage
where
    C: Reversible,
{
    type Output = C::Reversed;

    fn apply(self, cursor: C) -> Self::Output {
        cursor.reverse()
    }
}

/// The terminal descriptor produced by [`fold`].
#[derive(Debug, Clone, Copy)]
pub struct FoldStage<T, F> {
    initial: T,
    f: F,
}

/// Build a terminal stage folding its source into an accumulator.
pub fn fold<T, F>(initial: T, f: F) -> FoldStage<T, F> {
    FoldStage { initial, f }
}

impl<C, T, F> Stage<C> for FoldStage<T, F>
where
    C: Cursor,
    F: FnMut(T, C::Item) -> T,
{
    type Output = T;

    fn apply(self, cursor: C) -> Self::Output {
        algo::fold(cursor, self.initial, self.f)
    }
}

/// The terminal descriptor produced by [`sum`].
#[derive(Debug, Clone, Copy)]
pub struct SumStage(());

/// Build a terminal stage summing its source.
pub fn sum() -> SumStage {
    SumStage(())
}

impl<C> Stage<C> for SumStage
where
    C: Cursor,
    C::Item: Default + Add<Output = C::Item>,
{
    type Output = C::Item;

    fn apply(self, cursor: C) -> Self::Output {
        algo::sum(cursor)
    }
}

/// The terminal descriptor produced by [`any`].
#[derive(Debug, Clone, Copy)]
pub struct AnyStage(());

/// Build a terminal stage testing a boolean source for a true element.
pub fn any() -> AnyStage {
    AnyStage(())
}

impl<C> Stage<C> for AnyStage
where
    C: Cursor<Item = bool>,
{
    type Output = bool;

    fn apply(self, cursor: C) -> Self::Output {
        algo::any(cursor)
    }
}

/// The terminal descriptor produced by [`count`].
#[derive(Debug, Clone, Copy)]
pub struct CountStage(());

/// Build a terminal stage counting its source by walking it.
///
/// The constant-time path for counted sources is [`Counted::count`]; this
/// stage is the universal linear one, and the two always agree.
///
/// [`Counted::count`]: crate::Counted::count
pub fn count() -> CountStage {
    CountStage(())
}

impl<C> Stage<C> for CountStage
where
    C: Cursor,
{
    type Output = usize;

    fn apply(self, cursor: C) -> Self::Output {
        algo::count(cursor)
    }
}

/// The terminal descriptor produced by [`collect`].
#[derive(Debug, Clone, Copy)]
pub struct CollectStage<B> {
    marker: PhantomData<B>,
}

/// Build a terminal stage draining its source into a container.
///
/// The container type is chosen at the call site:
/// `cursor.pipe(stage::collect::<Vec<_>>())`.
pub fn collect<B>() -> CollectStage<B> {
    CollectStage {
        marker: PhantomData,
    }
}

impl<C, B> Stage<C> for CollectStage<B>
where
    C: Cursor,
    B: Default + Extend<C::Item>,
{
    type Output = B;

    fn apply(self, cursor: C) -> Self::Output {
        algo::collect(cursor)
    }
}
