//! In-place variants for mutable lists.
//!
//! These take the list by `&mut`, rewrite it, and hand the same list back.
//! They are separate entry points: the tier never routes an ordinary
//! operator here, so a `Vec` passed to `filter` is never modified. The
//! exclusive borrow means no other reference can observe the list while it
//! is rewritten; afterwards its contents and length have changed.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::capability::MutableList;
use crate::comparer::{Comparer, EqualityComparer, Natural};
use crate::config::Config;

use super::threshold;

/// Keep the elements matching `predicate`, preserving their order.
///
/// Survivors are swapped down over the rejected elements and the tail is
/// truncated.
pub fn filter_in_place<L, P>(list: &mut L, mut predicate: P) -> &mut L
where
    L: ?Sized + MutableList,
    P: FnMut(&L::Item) -> bool,
{
    let count = list.count();
    let mut write = 0;
    for read in 0..count {
        if !predicate(list.at(read)) {
            continue;
        }
        if write != read {
            list.swap_at(write, read);
        }
        write += 1;
    }
    list.truncate_to(write);
    return list;
}

/// Stable in-place sort by `key` under `comparer`.
pub fn order_in_place_by<'l, L, K, F, C>(list: &'l mut L, mut key: F, comparer: &C) -> &'l mut L
where
    L: ?Sized + MutableList,
    F: FnMut(&L::Item) -> K,
    C: Comparer<K> + ?Sized,
{
    if list.count() > 1 {
        list.sort_in_place_by(|a, b| comparer.compare(&key(a), &key(b)));
    }
    return list;
}

/// Stable in-place sort by the element's own order.
pub fn sort_in_place<L>(list: &mut L) -> &mut L
where
    L: ?Sized + MutableList,
    L::Item: Ord,
{
    if list.count() > 1 {
        list.sort_in_place_by(|a, b| Natural.compare(a, b));
    }
    return list;
}

/// Keep the first occurrence of every element, preserving order.
///
/// Small lists compare each element against the survivors so far; larger
/// ones bucket survivor positions by hash. Survivors never move once
/// placed, so their positions stay valid for the rest of the pass.
pub fn distinct_in_place<'l, L, E>(list: &'l mut L, comparer: &E, config: &Config) -> &'l mut L
where
    L: ?Sized + MutableList,
    E: EqualityComparer<L::Item> + ?Sized,
{
    let count = list.count();
    if count <= 1 {
        return list;
    }

    let mut write = 0;
    if config.is_small(count) {
        for read in 0..count {
            if threshold::contains_before(list, write, list.at(read), comparer) {
                continue;
            }
            if write != read {
                list.swap_at(write, read);
            }
            write += 1;
        }
    } else {
        tracing::trace!(count, threshold = config.threshold, "distinct_in_place: over threshold");
        let mut buckets: FxHashMap<u64, SmallVec<[usize; 2]>> = FxHashMap::default();
        for read in 0..count {
            let hash = comparer.hash(list.at(read));
            let seen = match buckets.get(&hash) {
                Some(bucket) => bucket.iter().any(|&k| comparer.equals(list.at(k), list.at(read))),
                None => false,
            };
            if seen {
                continue;
            }
            if write != read {
                list.swap_at(write, read);
            }
            buckets.entry(hash).or_default().push(write);
            write += 1;
        }
    }

    list.truncate_to(write);
    return list;
}

/// Keep only the first `n` elements.
pub fn take_in_place<L>(list: &mut L, n: usize) -> &mut L
where
    L: ?Sized + MutableList,
{
    list.truncate_to(n);
    return list;
}

/// Drop the first `n` elements, shifting the rest down.
pub fn skip_in_place<L>(list: &mut L, n: usize) -> &mut L
where
    L: ?Sized + MutableList,
{
    let count = list.count();
    if n == 0 {
        return list;
    }
    if n >= count {
        list.truncate_to(0);
        return list;
    }
    for read in n..count {
        list.swap_at(read - n, read);
    }
    list.truncate_to(count - n);
    return list;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::ByKey;
    use smallvec::smallvec;
    use std::collections::VecDeque;

    #[test]
    fn filter_compacts_in_order() {
        let mut list = vec![4, 1, 4, 2, 1];
        let before = list.as_ptr();
        let result = filter_in_place(&mut list, |x| *x != 1);
        assert_eq!(*result, vec![4, 4, 2]);
        assert_eq!(result.as_ptr(), before);
    }

    #[test]
    fn filter_everything_or_nothing() {
        let mut all = vec![1, 2, 3];
        filter_in_place(&mut all, |_| true);
        assert_eq!(all, vec![1, 2, 3]);

        let mut none = vec![1, 2, 3];
        filter_in_place(&mut none, |_| false);
        assert!(none.is_empty());
    }

    #[test]
    fn works_on_deques_and_smallvecs() {
        let mut deque: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
        deque.push_front(5);
        sort_in_place(&mut deque);
        assert_eq!(deque, VecDeque::from(vec![1, 2, 3, 5]));

        let mut small: SmallVec<[i32; 4]> = smallvec![1, 2, 2, 3];
        distinct_in_place(&mut small, &Natural, &Config::default());
        assert_eq!(small.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn order_in_place_is_stable() {
        let mut list = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        order_in_place_by(&mut list, |pair| pair.0, &Natural);
        assert_eq!(list, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn distinct_small_and_large_agree() {
        let original: Vec<i32> = (0..40).map(|i| (i * 7) % 13).collect();

        let mut small = original.clone();
        distinct_in_place(&mut small, &Natural, &Config::new(usize::MAX));

        let mut large = original.clone();
        distinct_in_place(&mut large, &Natural, &Config::new(0));

        assert_eq!(small, large);
        assert_eq!(small.len(), 13);
        assert_eq!(&small[..4], &[0, 7, 1, 8]);
    }

    #[test]
    fn distinct_with_key() {
        let mut words = vec!["apple", "avocado", "banana", "cherry", "blueberry"];
        distinct_in_place(&mut words, &ByKey(|w: &&str| w.as_bytes()[0]), &Config::default());
        assert_eq!(words, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn slicing_in_place() {
        let mut list = vec![1, 2, 3, 4, 5];
        skip_in_place(&mut list, 2);
        assert_eq!(list, vec![3, 4, 5]);
        take_in_place(&mut list, 2);
        assert_eq!(list, vec![3, 4]);
        take_in_place(&mut list, 10);
        assert_eq!(list, vec![3, 4]);
        skip_in_place(&mut list, 10);
        assert!(list.is_empty());
    }
}
