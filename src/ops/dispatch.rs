//! Tier markers and the per-tier operator implementations.
//!
//! `Sequence::Tier` names one of the markers below. Each marker implements
//! `Dispatch<S>` only for the `S` that have the matching capability, and
//! tries its paths in order before handing over to `general`:
//!
//! | Operator | Plain | Counted | Indexed |
//! |----------|-------|---------|---------|
//! | any/all | general | zero count | zero count, positions |
//! | filter | general | zero count, small all-match | zero count, small all-match |
//! | distinct | general | zero/one count | zero/one count, pairwise scan |
//! | order_by | general | zero/one count | zero/one count |
//! | first/last | general | general | index 0 / count - 1 |
//! | take/skip | n == 0 | count bounds | count bounds, index range |
//!
//! `Listed` is `Indexed` with a richer reported capability: in-place
//! variants live in `in_place` and are never picked by the tier.

use crate::capability::{Capability, Countable, Indexable, MutableList, Sequence};
use crate::comparer::{Comparer, EqualityComparer};
use crate::config::Config;
use crate::selection::{Refs, Selection};

use super::fast_path;
use super::general;
use super::indexed::{self, Positions};
use super::threshold;

/// Tier of sequences that can only be enumerated.
#[derive(Debug, Clone, Copy)]
pub enum Plain {}

/// Tier of sequences with an O(1) count.
#[derive(Debug, Clone, Copy)]
pub enum Counted {}

/// Tier of sequences with O(1) positional access.
#[derive(Debug, Clone, Copy)]
pub enum Indexed {}

/// Tier of sequences that can also be mutated in place.
#[derive(Debug, Clone, Copy)]
pub enum Listed {}

/// Operator implementations chosen by a sequence's tier.
pub trait Dispatch<S: ?Sized + Sequence> {
    const CAPABILITY: Capability;

    fn count(source: &S) -> usize;

    fn any<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool;

    fn all<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool;

    fn filter<'a, P>(source: &'a S, predicate: P, config: &Config) -> Selection<'a, S>
    where
        P: FnMut(&S::Item) -> bool;

    fn distinct<'a, E>(source: &'a S, comparer: &E, config: &Config) -> Selection<'a, S>
    where
        E: EqualityComparer<S::Item> + ?Sized;

    fn order_by<'a, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized;

    fn first(source: &S) -> Option<&S::Item>;

    fn last(source: &S) -> Option<&S::Item>;

    fn element_at(source: &S, index: usize) -> Option<&S::Item>;

    fn take(source: &S, n: usize) -> Selection<'_, S>;

    fn skip(source: &S, n: usize) -> Selection<'_, S>;
}

// =============================================================================
// Plain
// =============================================================================

impl<S: ?Sized + Sequence> Dispatch<S> for Plain {
    const CAPABILITY: Capability = Capability::Sequence;

    fn count(source: &S) -> usize {
        return general::count(source.elements());
    }

    fn any<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        return general::any(source.elements(), predicate);
    }

    fn all<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        return general::all(source.elements(), predicate);
    }

    fn filter<'a, P>(source: &'a S, predicate: P, _config: &Config) -> Selection<'a, S>
    where
        P: FnMut(&S::Item) -> bool,
    {
        return general::filter(source.elements(), predicate);
    }

    fn distinct<'a, E>(source: &'a S, comparer: &E, _config: &Config) -> Selection<'a, S>
    where
        E: EqualityComparer<S::Item> + ?Sized,
    {
        return general::distinct(source.elements(), comparer);
    }

    fn order_by<'a, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        return general::order_by(source.elements(), key, comparer);
    }

    fn first(source: &S) -> Option<&S::Item> {
        return general::first(source.elements());
    }

    fn last(source: &S) -> Option<&S::Item> {
        return general::last(source.elements());
    }

    fn element_at(source: &S, index: usize) -> Option<&S::Item> {
        return general::element_at(source.elements(), index);
    }

    fn take(source: &S, n: usize) -> Selection<'_, S> {
        if n == 0 {
            return Selection::Empty;
        }
        return general::take(source.elements(), n);
    }

    fn skip(source: &S, n: usize) -> Selection<'_, S> {
        return general::skip(source.elements(), n);
    }
}

// =============================================================================
// Counted
// =============================================================================

impl<S: ?Sized + Countable> Dispatch<S> for Counted {
    const CAPABILITY: Capability = Capability::Countable;

    #[inline]
    fn count(source: &S) -> usize {
        return source.count();
    }

    fn any<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        if let Some(answer) = fast_path::any(source.count()) {
            return answer;
        }
        return general::any(source.elements(), predicate);
    }

    fn all<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        if let Some(answer) = fast_path::all(source.count()) {
            return answer;
        }
        return general::all(source.elements(), predicate);
    }

    fn filter<'a, P>(source: &'a S, mut predicate: P, config: &Config) -> Selection<'a, S>
    where
        P: FnMut(&S::Item) -> bool,
    {
        let count = source.count();
        if let Some(result) = fast_path::empty(count) {
            return result;
        }
        if !config.is_small(count) {
            tracing::trace!(count, threshold = config.threshold, "filter: over threshold");
            return general::filter(source.elements(), predicate);
        }

        // Walk until the first rejection; the remaining elements are picked
        // up from the same iterator so each one is tested once.
        let mut elements = source.elements();
        let mut matched = 0;
        let mut rejected = false;
        for item in elements.by_ref() {
            if !predicate(item) {
                rejected = true;
                break;
            }
            matched += 1;
        }
        if !rejected {
            return Selection::source(source, count);
        }
        tracing::trace!(count, rejected = matched, "filter: partial match");
        let mut refs: Refs<'a, S::Item> = source.elements().take(matched).collect();
        refs.extend(elements.filter(|item| predicate(item)));
        return Selection::from_refs(refs);
    }

    fn distinct<'a, E>(source: &'a S, comparer: &E, _config: &Config) -> Selection<'a, S>
    where
        E: EqualityComparer<S::Item> + ?Sized,
    {
        if let Some(result) = fast_path::trivial(source, source.count()) {
            return result;
        }
        return general::distinct(source.elements(), comparer);
    }

    fn order_by<'a, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        if let Some(result) = fast_path::trivial(source, source.count()) {
            return result;
        }
        return general::order_by(source.elements(), key, comparer);
    }

    fn first(source: &S) -> Option<&S::Item> {
        if source.count() == 0 {
            return None;
        }
        return general::first(source.elements());
    }

    fn last(source: &S) -> Option<&S::Item> {
        if source.count() == 0 {
            return None;
        }
        return general::last(source.elements());
    }

    fn element_at(source: &S, index: usize) -> Option<&S::Item> {
        if index >= source.count() {
            return None;
        }
        return general::element_at(source.elements(), index);
    }

    fn take(source: &S, n: usize) -> Selection<'_, S> {
        if let Some(result) = fast_path::take(source, source.count(), n) {
            return result;
        }
        return general::take(source.elements(), n);
    }

    fn skip(source: &S, n: usize) -> Selection<'_, S> {
        if let Some(result) = fast_path::skip(source, source.count(), n) {
            return result;
        }
        return general::skip(source.elements(), n);
    }
}

// =============================================================================
// Indexed
// =============================================================================

impl<S: ?Sized + Indexable> Dispatch<S> for Indexed {
    const CAPABILITY: Capability = Capability::Indexable;

    #[inline]
    fn count(source: &S) -> usize {
        return source.count();
    }

    fn any<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        if let Some(answer) = fast_path::any(source.count()) {
            return answer;
        }
        return indexed::any(source, predicate);
    }

    fn all<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        if let Some(answer) = fast_path::all(source.count()) {
            return answer;
        }
        return indexed::all(source, predicate);
    }

    fn filter<'a, P>(source: &'a S, mut predicate: P, config: &Config) -> Selection<'a, S>
    where
        P: FnMut(&S::Item) -> bool,
    {
        let count = source.count();
        if let Some(result) = fast_path::empty(count) {
            return result;
        }
        if !config.is_small(count) {
            tracing::trace!(count, threshold = config.threshold, "filter: over threshold");
            return general::filter(Positions::new(source), predicate);
        }

        // Everything before the first rejected position already matched, so
        // the general pass resumes after it and each element is tested once.
        let Some(rejected) = indexed::first_rejected(source, &mut predicate) else {
            return Selection::source(source, count);
        };
        tracing::trace!(count, rejected, "filter: partial match");
        let mut refs: Refs<'a, S::Item> = Positions::range(source, 0, rejected).collect();
        refs.extend(Positions::range(source, rejected + 1, count).filter(|item| predicate(item)));
        return Selection::from_refs(refs);
    }

    fn distinct<'a, E>(source: &'a S, comparer: &E, config: &Config) -> Selection<'a, S>
    where
        E: EqualityComparer<S::Item> + ?Sized,
    {
        let count = source.count();
        if let Some(result) = fast_path::trivial(source, count) {
            return result;
        }
        if !config.is_small(count) {
            tracing::trace!(count, threshold = config.threshold, "distinct: over threshold");
            return general::distinct(Positions::new(source), comparer);
        }
        match threshold::first_duplicate(source, comparer) {
            None => Selection::source(source, count),
            Some((i, j)) => {
                tracing::trace!(count, i, j, "distinct: duplicate in pairwise scan");
                general::distinct(Positions::new(source), comparer)
            }
        }
    }

    fn order_by<'a, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        if let Some(result) = fast_path::trivial(source, source.count()) {
            return result;
        }
        return general::order_by(Positions::new(source), key, comparer);
    }

    #[inline]
    fn first(source: &S) -> Option<&S::Item> {
        if source.count() == 0 {
            return None;
        }
        return Some(source.at(0));
    }

    #[inline]
    fn last(source: &S) -> Option<&S::Item> {
        let count = source.count();
        if count == 0 {
            return None;
        }
        return Some(source.at(count - 1));
    }

    #[inline]
    fn element_at(source: &S, index: usize) -> Option<&S::Item> {
        if index >= source.count() {
            return None;
        }
        return Some(source.at(index));
    }

    fn take(source: &S, n: usize) -> Selection<'_, S> {
        let count = source.count();
        if let Some(result) = fast_path::take(source, count, n) {
            return result;
        }
        return Selection::from_refs(Positions::range(source, 0, n).collect());
    }

    fn skip(source: &S, n: usize) -> Selection<'_, S> {
        let count = source.count();
        if let Some(result) = fast_path::skip(source, count, n) {
            return result;
        }
        return Selection::from_refs(Positions::range(source, n, count).collect());
    }
}

// =============================================================================
// Listed
// =============================================================================

impl<S: ?Sized + MutableList> Dispatch<S> for Listed {
    const CAPABILITY: Capability = Capability::MutableList;

    #[inline]
    fn count(source: &S) -> usize {
        return <Indexed as Dispatch<S>>::count(source);
    }

    #[inline]
    fn any<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        return <Indexed as Dispatch<S>>::any(source, predicate);
    }

    #[inline]
    fn all<P>(source: &S, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        return <Indexed as Dispatch<S>>::all(source, predicate);
    }

    #[inline]
    fn filter<'a, P>(source: &'a S, predicate: P, config: &Config) -> Selection<'a, S>
    where
        P: FnMut(&S::Item) -> bool,
    {
        return <Indexed as Dispatch<S>>::filter(source, predicate, config);
    }

    #[inline]
    fn distinct<'a, E>(source: &'a S, comparer: &E, config: &Config) -> Selection<'a, S>
    where
        E: EqualityComparer<S::Item> + ?Sized,
    {
        return <Indexed as Dispatch<S>>::distinct(source, comparer, config);
    }

    #[inline]
    fn order_by<'a, K, F, C>(source: &'a S, key: F, comparer: &C) -> Selection<'a, S>
    where
        F: FnMut(&S::Item) -> K,
        C: Comparer<K> + ?Sized,
    {
        return <Indexed as Dispatch<S>>::order_by(source, key, comparer);
    }

    #[inline]
    fn first(source: &S) -> Option<&S::Item> {
        return <Indexed as Dispatch<S>>::first(source);
    }

    #[inline]
    fn last(source: &S) -> Option<&S::Item> {
        return <Indexed as Dispatch<S>>::last(source);
    }

    #[inline]
    fn element_at(source: &S, index: usize) -> Option<&S::Item> {
        return <Indexed as Dispatch<S>>::element_at(source, index);
    }

    #[inline]
    fn take(source: &S, n: usize) -> Selection<'_, S> {
        return <Indexed as Dispatch<S>>::take(source, n);
    }

    #[inline]
    fn skip(source: &S, n: usize) -> Selection<'_, S> {
        return <Indexed as Dispatch<S>>::skip(source, n);
    }
}
