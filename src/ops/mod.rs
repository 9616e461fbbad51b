//! The operator surface.
//!
//! Every operator forwards to the `Dispatch` impl of the input's tier. The
//! free functions read the process-wide [`Config`](crate::config::global);
//! an [`Operators`] value carries its own.
//!
//! Missing predicates, selectors and comparers cannot be expressed, and
//! unsigned counts cannot be negative. The `try_` variants take signed
//! counts for callers that hold them and reject negatives before touching
//! the input.

pub mod dispatch;
pub mod fast_path;
pub mod general;
pub mod in_place;
pub mod indexed;
pub mod threshold;

use crate::capability::Sequence;
use crate::comparer::{ByKey, Comparer, Descending, EqualityComparer, Natural};
use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::selection::Selection;

use dispatch::Dispatch;

/// Operators bound to a particular configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operators {
    config: Config,
}

impl Operators {
    pub fn new(config: Config) -> Operators {
        return Operators { config };
    }

    /// Operators using the process-wide configuration.
    pub fn global() -> Operators {
        return Operators::new(*config::global());
    }

    pub fn config(&self) -> &Config {
        return &self.config;
    }

    /// Number of elements; O(1) for countable inputs.
    pub fn count<S: ?Sized + Sequence>(&self, source: &S) -> usize {
        return <S::Tier as Dispatch<S>>::count(source);
    }

    /// True when the input has at least one element.
    pub fn any_element<S: ?Sized + Sequence>(&self, source: &S) -> bool {
        return <S::Tier as Dispatch<S>>::any(source, |_| true);
    }

    pub fn any<S, P>(&self, source: &S, predicate: P) -> bool
    where
        S: ?Sized + Sequence,
        P: FnMut(&S::Item) -> bool,
    {
        return <S::Tier as Dispatch<S>>::any(source, predicate);
    }

    pub fn all<S, P>(&self, source: &S, predicate: P) -> bool
    where
        S: ?Sized + Sequence,
        P: FnMut(&S::Item) -> bool,
    {
        return <S::Tier as Dispatch<S>>::all(source, predicate);
    }

    pub fn contains<S>(&self, source: &S, value: &S::Item) -> bool
    where
        S: ?Sized + Sequence,
        S::Item: Eq + std::hash::Hash,
    {
        return self.contains_by(source, value, &Natural);
    }

    pub fn contains_by<S, E>(&self, source: &S, value: &S::Item, comparer: &E) -> bool
    where
        S: ?Sized + Sequence,
        E: EqualityComparer<S::Item> + ?Sized,
    {
        return <S::Tier as Dispatch<S>>::any(source, |item| comparer.equals(item, value));
    }

    /// Elements matching `predicate`, in input order. Returns the input
    /// itself when a small indexable input matches entirely.
    pub fn filter<'a, S, P>(&self, source: &'a S, predicate: P) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        P: FnMut(&S::Item) -> bool,
    {
        return <S::Tier as Dispatch<S>>::filter(source, predicate, &self.config);
    }

    /// First occurrence of every element, in input order.
    pub fn distinct<'a, S>(&self, source: &'a S) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        S::Item: Eq + std::hash::Hash,
    {
        return self.distinct_by(source, &Natural);
    }

    pub fn distinct_by<'a, S, E>(&self, source: &'a S, comparer: &E) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        E: EqualityComparer<S::Item> + ?Sized,
    {
        return <S::Tier as Dispatch<S>>::distinct(source, comparer, &self.config);
    }

    pub fn distinct_by_key<'a, S, K, F>(&self, source: &'a S, key: F) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        K: Eq + std::hash::Hash,
        F: Fn(&S::Item) -> K,
    {
        return self.distinct_by(source, &ByKey(key));
    }

    /// Stable ascending order by `key`.
    pub fn order_by<'a, S, K, F>(&self, source: &'a S, key: F) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        return self.order_by_with(source, key, &Natural);
    }

    /// Stable descending order by `key`.
    pub fn order_by_descending<'a, S, K, F>(&self, source: &'a S, key: F) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        K: Ord,
        F: FnMut(&S::Item) -> K,
    {
        return self.order_by_with(source, key, &Descending(Natural));
    }

    pub fn order_by_with<'a, S, K, F, C>(&self, source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        S: ?Sized + Sequence,
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        return <S::Tier as Dispatch<S>>::order_by(source, key, comparer);
    }

    pub fn first<'a, S: ?Sized + Sequence>(&self, source: &'a S) -> Result<&'a S::Item> {
        return <S::Tier as Dispatch<S>>::first(source).ok_or(Error::NoElements { operator: "first" });
    }

    pub fn first_or_default<S>(&self, source: &S) -> S::Item
    where
        S: ?Sized + Sequence,
        S::Item: Clone + Default,
    {
        return <S::Tier as Dispatch<S>>::first(source).cloned().unwrap_or_default();
    }

    pub fn last<'a, S: ?Sized + Sequence>(&self, source: &'a S) -> Result<&'a S::Item> {
        return <S::Tier as Dispatch<S>>::last(source).ok_or(Error::NoElements { operator: "last" });
    }

    pub fn last_or_default<S>(&self, source: &S) -> S::Item
    where
        S: ?Sized + Sequence,
        S::Item: Clone + Default,
    {
        return <S::Tier as Dispatch<S>>::last(source).cloned().unwrap_or_default();
    }

    pub fn element_at<'a, S: ?Sized + Sequence>(&self, source: &'a S, index: usize) -> Result<&'a S::Item> {
        return <S::Tier as Dispatch<S>>::element_at(source, index)
            .ok_or(Error::IndexOutOfRange { operator: "element_at", index });
    }

    pub fn element_at_or_default<S>(&self, source: &S, index: usize) -> S::Item
    where
        S: ?Sized + Sequence,
        S::Item: Clone + Default,
    {
        return <S::Tier as Dispatch<S>>::element_at(source, index).cloned().unwrap_or_default();
    }

    /// The first `n` elements.
    pub fn take<'a, S: ?Sized + Sequence>(&self, source: &'a S, n: usize) -> Selection<'a, S> {
        return <S::Tier as Dispatch<S>>::take(source, n);
    }

    /// Everything after the first `n` elements.
    pub fn skip<'a, S: ?Sized + Sequence>(&self, source: &'a S, n: usize) -> Selection<'a, S> {
        return <S::Tier as Dispatch<S>>::skip(source, n);
    }

    pub fn try_take<'a, S: ?Sized + Sequence>(&self, source: &'a S, n: i64) -> Result<Selection<'a, S>> {
        let n = checked_count("take", n)?;
        return Ok(self.take(source, n));
    }

    pub fn try_skip<'a, S: ?Sized + Sequence>(&self, source: &'a S, n: i64) -> Result<Selection<'a, S>> {
        let n = checked_count("skip", n)?;
        return Ok(self.skip(source, n));
    }
}

fn checked_count(operator: &'static str, count: i64) -> Result<usize> {
    if count < 0 {
        return Err(Error::NegativeCount { operator, count });
    }
    // Counts past usize::MAX cover every possible input anyway.
    return Ok(usize::try_from(count).unwrap_or(usize::MAX));
}

// =============================================================================
// Free functions over the global configuration
// =============================================================================

pub fn count<S: ?Sized + Sequence>(source: &S) -> usize {
    return Operators::global().count(source);
}

pub fn any_element<S: ?Sized + Sequence>(source: &S) -> bool {
    return Operators::global().any_element(source);
}

pub fn any<S, P>(source: &S, predicate: P) -> bool
where
    S: ?Sized + Sequence,
    P: FnMut(&S::Item) -> bool,
{
    return Operators::global().any(source, predicate);
}

pub fn all<S, P>(source: &S, predicate: P) -> bool
where
    S: ?Sized + Sequence,
    P: FnMut(&S::Item) -> bool,
{
    return Operators::global().all(source, predicate);
}

pub fn contains<S>(source: &S, value: &S::Item) -> bool
where
    S: ?Sized + Sequence,
    S::Item: Eq + std::hash::Hash,
{
    return Operators::global().contains(source, value);
}

pub fn filter<'a, S, P>(source: &'a S, predicate: P) -> Selection<'a, S>
where
    S: ?Sized + Sequence,
    P: FnMut(&S::Item) -> bool,
{
    return Operators::global().filter(source, predicate);
}

pub fn distinct<S>(source: &S) -> Selection<'_, S>
where
    S: ?Sized + Sequence,
    S::Item: Eq + std::hash::Hash,
{
    return Operators::global().distinct(source);
}

pub fn distinct_by<'a, S, E>(source: &'a S, comparer: &E) -> Selection<'a, S>
where
    S: ?Sized + Sequence,
    E: EqualityComparer<S::Item> + ?Sized,
{
    return Operators::global().distinct_by(source, comparer);
}

pub fn order_by<'a, S, K, F>(source: &'a S, key: F) -> Selection<'a, S>
where
    S: ?Sized + Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    return Operators::global().order_by(source, key);
}

pub fn order_by_descending<'a, S, K, F>(source: &'a S, key: F) -> Selection<'a, S>
where
    S: ?Sized + Sequence,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    return Operators::global().order_by_descending(source, key);
}

pub fn first<S: ?Sized + Sequence>(source: &S) -> Result<&S::Item> {
    return Operators::global().first(source);
}

pub fn first_or_default<S>(source: &S) -> S::Item
where
    S: ?Sized + Sequence,
    S::Item: Clone + Default,
{
    return Operators::global().first_or_default(source);
}

pub fn last<S: ?Sized + Sequence>(source: &S) -> Result<&S::Item> {
    return Operators::global().last(source);
}

pub fn last_or_default<S>(source: &S) -> S::Item
where
    S: ?Sized + Sequence,
    S::Item: Clone + Default,
{
    return Operators::global().last_or_default(source);
}

pub fn element_at<S: ?Sized + Sequence>(source: &S, index: usize) -> Result<&S::Item> {
    return Operators::global().element_at(source, index);
}

pub fn contains_by<S, E>(source: &S, value: &S::Item, comparer: &E) -> bool
where
    S: ?Sized + Sequence,
    E: EqualityComparer<S::Item> + ?Sized,
{
    return Operators::global().contains_by(source, value, comparer);
}

pub fn distinct_by_key<S, K, F>(source: &S, key: F) -> Selection<'_, S>
where
    S: ?Sized + Sequence,
    K: Eq + std::hash::Hash,
    F: Fn(&S::Item) -> K,
{
    return Operators::global().distinct_by_key(source, key);
}

pub fn order_by_with<'a, S, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
where
    S: ?Sized + Sequence,
    F: FnMut(&S::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    return Operators::global().order_by_with(source, key, comparer);
}

pub fn element_at_or_default<S>(source: &S, index: usize) -> S::Item
where
    S: ?Sized + Sequence,
    S::Item: Clone + Default,
{
    return Operators::global().element_at_or_default(source, index);
}

pub fn try_take<S: ?Sized + Sequence>(source: &S, n: i64) -> Result<Selection<'_, S>> {
    return Operators::global().try_take(source, n);
}

pub fn try_skip<S: ?Sized + Sequence>(source: &S, n: i64) -> Result<Selection<'_, S>> {
    return Operators::global().try_skip(source, n);
}

pub fn take<S: ?Sized + Sequence>(source: &S, n: usize) -> Selection<'_, S> {
    return Operators::global().take(source, n);
}

pub fn skip<S: ?Sized + Sequence>(source: &S, n: usize) -> Selection<'_, S> {
    return Operators::global().skip(source, n);
}
