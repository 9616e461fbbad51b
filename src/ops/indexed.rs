//! Position-based traversal for indexable inputs.
//!
//! The count is read once, before the first element is touched, and used as
//! the loop bound for the whole traversal. There is no detection of the
//! underlying collection changing mid-walk; `&self` access already rules
//! that out for safe code.

use crate::capability::Indexable;

/// Walks `[0, count)` by position instead of through the collection's own
/// iterator.
pub struct Positions<'a, S: ?Sized> {
    source: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: ?Sized + Indexable> Positions<'a, S> {
    pub fn new(source: &'a S) -> Positions<'a, S> {
        return Positions { source, front: 0, back: source.count() };
    }

    /// Walk `[start, end)`, clamped to the observed count.
    pub fn range(source: &'a S, start: usize, end: usize) -> Positions<'a, S> {
        let count = source.count();
        let back = end.min(count);
        return Positions { source, front: start.min(back), back };
    }
}

impl<'a, S: ?Sized + Indexable> Iterator for Positions<'a, S> {
    type Item = &'a S::Item;

    #[inline]
    fn next(&mut self) -> Option<&'a S::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.source.at(self.front);
        self.front += 1;
        return Some(item);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        return (remaining, Some(remaining));
    }
}

impl<'a, S: ?Sized + Indexable> DoubleEndedIterator for Positions<'a, S> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a S::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        return Some(self.source.at(self.back));
    }
}

impl<'a, S: ?Sized + Indexable> ExactSizeIterator for Positions<'a, S> {}

pub fn any<S, P>(source: &S, mut predicate: P) -> bool
where
    S: ?Sized + Indexable,
    P: FnMut(&S::Item) -> bool,
{
    let count = source.count();
    for i in 0..count {
        if predicate(source.at(i)) {
            return true;
        }
    }
    return false;
}

pub fn all<S, P>(source: &S, mut predicate: P) -> bool
where
    S: ?Sized + Indexable,
    P: FnMut(&S::Item) -> bool,
{
    let count = source.count();
    for i in 0..count {
        if !predicate(source.at(i)) {
            return false;
        }
    }
    return true;
}

/// Position of the first element that fails `predicate`.
pub fn first_rejected<S, P>(source: &S, mut predicate: P) -> Option<usize>
where
    S: ?Sized + Indexable,
    P: FnMut(&S::Item) -> bool,
{
    let count = source.count();
    for i in 0..count {
        if !predicate(source.at(i)) {
            return Some(i);
        }
    }
    return None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_in_both_directions() {
        let source = vec![1, 2, 3, 4];
        let forward: Vec<_> = Positions::new(&source).copied().collect();
        let backward: Vec<_> = Positions::new(&source).rev().copied().collect();
        assert_eq!(forward, vec![1, 2, 3, 4]);
        assert_eq!(backward, vec![4, 3, 2, 1]);
        assert_eq!(Positions::new(&source).len(), 4);
    }

    #[test]
    fn range_is_clamped() {
        let source = [1, 2, 3];
        assert_eq!(Positions::range(&source, 1, 10).copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(Positions::range(&source, 5, 10).count(), 0);
        assert_eq!(Positions::range(&source, 2, 1).count(), 0);
    }

    #[test]
    fn predicates_short_circuit() {
        let source = vec![2, 4, 5, 6];
        let mut seen = 0;
        assert!(any(&source, |x| {
            seen += 1;
            *x % 2 == 1
        }));
        assert_eq!(seen, 3);
        assert!(!all(&source, |x| *x % 2 == 0));
        assert_eq!(first_rejected(&source, |x| *x % 2 == 0), Some(2));
        assert_eq!(first_rejected(&source, |x| *x > 0), None);
    }

    #[test]
    fn empty_input() {
        let source: Vec<i32> = Vec::new();
        assert!(!any(&source, |_| true));
        assert!(all(&source, |_| false));
        assert_eq!(Positions::new(&source).next(), None);
    }
}
