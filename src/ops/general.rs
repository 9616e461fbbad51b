//! General-purpose reference algorithms.
//!
//! These are the fallbacks for every operator: they work on nothing more
//! than an ordered enumeration and make no attempt to avoid allocation.
//! Results are references into the input, buffered in a `SmallVec`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::capability::Sequence;
use crate::comparer::{Comparer, EqualityComparer};
use crate::selection::{Refs, Selection, INLINE_RESULTS};

pub fn count<'a, T: 'a, I>(iter: I) -> usize
where
    I: Iterator<Item = &'a T>,
{
    return iter.count();
}

pub fn any<'a, T: 'a, I, P>(mut iter: I, mut predicate: P) -> bool
where
    I: Iterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    return iter.any(|item| predicate(item));
}

pub fn all<'a, T: 'a, I, P>(mut iter: I, mut predicate: P) -> bool
where
    I: Iterator<Item = &'a T>,
    P: FnMut(&T) -> bool,
{
    return iter.all(|item| predicate(item));
}

pub fn filter<'a, S, I, P>(iter: I, mut predicate: P) -> Selection<'a, S>
where
    S: ?Sized + Sequence + 'a,
    I: Iterator<Item = &'a S::Item>,
    P: FnMut(&S::Item) -> bool,
{
    let refs: Refs<'a, S::Item> = iter.filter(|item| predicate(item)).collect();
    return Selection::from_refs(refs);
}

/// Hash-bucketed distinct, keeping first occurrences in input order.
pub fn distinct<'a, S, I, E>(iter: I, comparer: &E) -> Selection<'a, S>
where
    S: ?Sized + Sequence + 'a,
    I: Iterator<Item = &'a S::Item>,
    E: EqualityComparer<S::Item> + ?Sized,
{
    // Buckets hold positions into `kept`, so hash collisions between unequal
    // values are resolved with `equals`.
    let mut buckets: FxHashMap<u64, SmallVec<[usize; 2]>> = FxHashMap::default();
    let mut kept: Refs<'a, S::Item> = SmallVec::new();

    for item in iter {
        let bucket = buckets.entry(comparer.hash(item)).or_default();
        if bucket.iter().any(|&k| comparer.equals(kept[k], item)) {
            continue;
        }
        bucket.push(kept.len());
        kept.push(item);
    }

    return Selection::from_refs(kept);
}

/// Stable sort by a key computed once per element.
pub fn order_by<'a, S, I, K, F, C>(iter: I, mut key: F, comparer: &C) -> Selection<'a, S>
where
    S: ?Sized + Sequence + 'a,
    I: Iterator<Item = &'a S::Item>,
    F: FnMut(&S::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    let mut keyed: SmallVec<[(K, &'a S::Item); INLINE_RESULTS]> =
        iter.map(|item| (key(item), item)).collect();
    keyed.sort_by(|a, b| comparer.compare(&a.0, &b.0));
    let refs: Refs<'a, S::Item> = keyed.into_iter().map(|(_, item)| item).collect();
    return Selection::from_refs(refs);
}

pub fn first<'a, T: 'a, I>(mut iter: I) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
{
    return iter.next();
}

pub fn last<'a, T: 'a, I>(iter: I) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
{
    return iter.last();
}

pub fn element_at<'a, T: 'a, I>(mut iter: I, index: usize) -> Option<&'a T>
where
    I: Iterator<Item = &'a T>,
{
    return iter.nth(index);
}

pub fn take<'a, S, I>(iter: I, count: usize) -> Selection<'a, S>
where
    S: ?Sized + Sequence + 'a,
    I: Iterator<Item = &'a S::Item>,
{
    let refs: Refs<'a, S::Item> = iter.take(count).collect();
    return Selection::from_refs(refs);
}

pub fn skip<'a, S, I>(iter: I, count: usize) -> Selection<'a, S>
where
    S: ?Sized + Sequence + 'a,
    I: Iterator<Item = &'a S::Item>,
{
    let refs: Refs<'a, S::Item> = iter.skip(count).collect();
    return Selection::from_refs(refs);
}
