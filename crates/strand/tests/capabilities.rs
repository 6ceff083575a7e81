//! Compile-time checks that capabilities propagate exactly where the
//! adapters can honor them, and nowhere else.

use static_assertions::{assert_impl_all, assert_not_impl_any};
use strand::{
    Cached, Chain, Counted, Cross, Filter, Map, NulTerminated, Once, Reversible, RevSlice,
    RevSpan, Slice, Span, Take, Unbounded, UnorderedPairs, WithCount, Zip,
};

type MapFn = fn(i32) -> i64;
type PredFn = fn(&i32) -> bool;

// Sources.
assert_impl_all!(Slice<'static, i32>: Counted, Reversible, Clone);
assert_impl_all!(RevSlice<'static, i32>: Counted, Reversible);
assert_impl_all!(Span<i32>: Counted, Reversible, Clone);
assert_impl_all!(RevSpan<i32>: Counted, Reversible);
assert_impl_all!(Once<i32>: Counted, Reversible, Clone);

// Endless and unscannable sources never pretend to know their length.
assert_not_impl_any!(Unbounded<i32>: Counted, Reversible);
assert_not_impl_any!(NulTerminated<'static>: Counted, Reversible);

// Adapters forward exactly what their logic preserves.
assert_impl_all!(Map<Span<i32>, MapFn>: Counted, Reversible);
assert_impl_all!(Filter<Span<i32>, PredFn>: Reversible);
assert_not_impl_any!(Filter<Span<i32>, PredFn>: Counted);
assert_impl_all!(Take<Span<i32>>: Counted);
assert_not_impl_any!(Take<Unbounded<i32>>: Counted);
assert_impl_all!(Cached<Span<i32>>: Counted, Clone);
assert_impl_all!(Zip<Span<i32>, Slice<'static, i32>>: Counted);
assert_not_impl_any!(Zip<Span<i32>, Unbounded<i32>>: Counted);
assert_impl_all!(Chain<Span<i32>, Span<i32>>: Counted);
assert_impl_all!(Cross<Span<i32>, Span<i32>>: Counted, Clone);
assert_not_impl_any!(Cross<Span<i32>, Unbounded<i32>>: Counted);
assert_impl_all!(UnorderedPairs<Span<i32>>: Counted, Clone);

// The one deliberately linear count.
assert_impl_all!(WithCount<Filter<Span<i32>, PredFn>>: Counted);
assert_impl_all!(WithCount<NulTerminated<'static>>: Counted);

// Deep pipelines keep the counted capability end to end.
assert_impl_all!(Map<Take<Map<Span<i32>, MapFn>>, fn(i64) -> i64>: Counted);

#[test]
fn capability_assertions_compile() {}
