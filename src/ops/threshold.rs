//! Allocation-free O(n²) scans for small indexable inputs.
//!
//! Below the configured threshold, comparing every pair of positions is
//! cheaper than building a hash set. The scans only decide whether the input
//! can be returned unchanged; when they cannot, the caller falls back to the
//! general algorithm and nothing from the aborted scan is reused.

use crate::capability::Indexable;
use crate::comparer::EqualityComparer;

/// First pair of positions `(i, j)`, `i < j`, whose elements compare equal.
///
/// Pairs are visited with `i` ascending, then `j` ascending. Because
/// equality is symmetric, only `j > i` needs checking: the smallest `i` with
/// any equal partner is always found paired with a later position.
pub fn first_duplicate<S, E>(source: &S, comparer: &E) -> Option<(usize, usize)>
where
    S: ?Sized + Indexable,
    E: EqualityComparer<S::Item> + ?Sized,
{
    let count = source.count();
    for i in 0..count {
        let left = source.at(i);
        for j in (i + 1)..count {
            if comparer.equals(left, source.at(j)) {
                return Some((i, j));
            }
        }
    }
    return None;
}

/// True when any element in `[0, end)` of `source` equals `value`.
pub fn contains_before<S, E>(source: &S, end: usize, value: &S::Item, comparer: &E) -> bool
where
    S: ?Sized + Indexable,
    E: EqualityComparer<S::Item> + ?Sized,
{
    for i in 0..end {
        if comparer.equals(source.at(i), value) {
            return true;
        }
    }
    return false;
}
