//! Operator results.
//!
//! A `Selection` is one of three things:
//!
//! - `Empty`: the canonical empty result. Zero-sized, never allocates.
//! - `Source`: the input itself, returned when the operator had nothing to
//!   do (already distinct, already filtered, whole-range slice, ...).
//! - `Owned`: references into the input, produced by a general algorithm.
//!   Up to [`INLINE_RESULTS`] of them are stored inline.
//!
//! Every variant borrows the input for `'a`. A `Source` result therefore
//! observes the input exactly as it was when the operator ran: the borrow
//! checker rejects any mutation of the input while the result is alive.

use std::fmt;

use smallvec::SmallVec;

use crate::capability::{Countable, Sequence};
use crate::empty::EmptySequence;
use crate::ops::dispatch::Counted;

/// Number of result references stored without a heap allocation.
pub const INLINE_RESULTS: usize = 8;

/// Reference buffer used by the general algorithms.
pub type Refs<'a, T> = SmallVec<[&'a T; INLINE_RESULTS]>;

pub enum Selection<'a, S: ?Sized + Sequence> {
    Empty,
    Source { source: &'a S, count: usize },
    Owned(Refs<'a, S::Item>),
}

impl<'a, S: ?Sized + Sequence> Selection<'a, S> {
    pub(crate) fn source(source: &'a S, count: usize) -> Self {
        debug_assert!(count > 0, "zero-count results use the canonical empty");
        return Selection::Source { source, count };
    }

    /// Wrap references collected by a general algorithm. An empty buffer
    /// collapses to the canonical empty result.
    pub(crate) fn from_refs(refs: Refs<'a, S::Item>) -> Self {
        if refs.is_empty() {
            return Selection::Empty;
        }
        return Selection::Owned(refs);
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::Source { count, .. } => *count,
            Selection::Owned(refs) => refs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// True for the canonical empty result.
    pub fn is_empty_sequence(&self) -> bool {
        return matches!(self, Selection::Empty);
    }

    /// True when the result is the input itself.
    pub fn is_source(&self) -> bool {
        return matches!(self, Selection::Source { .. });
    }

    /// The input, when the result is the input itself.
    pub fn as_source(&self) -> Option<&'a S> {
        match self {
            Selection::Source { source, .. } => Some(*source),
            _ => None,
        }
    }

    /// The process-wide empty instance, when the result is empty.
    pub fn as_shared_empty(&self) -> Option<&'static EmptySequence<S::Item>>
    where
        S::Item: 'static,
    {
        match self {
            Selection::Empty => Some(EmptySequence::shared()),
            _ => None,
        }
    }

    pub fn iter(&self) -> SelectionIter<'a, '_, S> {
        match self {
            Selection::Empty => SelectionIter::Empty,
            Selection::Source { source, .. } => SelectionIter::Source(source.elements()),
            Selection::Owned(refs) => SelectionIter::Owned(refs.iter()),
        }
    }

    /// Element at `index`. Constant time for owned results; a source result
    /// is walked from the front.
    pub fn get(&self, index: usize) -> Option<&S::Item> {
        match self {
            Selection::Empty => None,
            Selection::Source { source, count } => {
                if index >= *count {
                    return None;
                }
                source.elements().nth(index)
            }
            Selection::Owned(refs) => refs.get(index).copied(),
        }
    }

    pub fn to_vec(&self) -> Vec<S::Item>
    where
        S::Item: Clone,
    {
        return self.iter().cloned().collect();
    }
}

impl<'a, S: ?Sized + Sequence> Clone for Selection<'a, S> {
    fn clone(&self) -> Self {
        match self {
            Selection::Empty => Selection::Empty,
            Selection::Source { source, count } => Selection::Source {
                source: *source,
                count: *count,
            },
            Selection::Owned(refs) => Selection::Owned(refs.clone()),
        }
    }
}

impl<'a, S> fmt::Debug for Selection<'a, S>
where
    S: ?Sized + Sequence,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}

impl<'a, S> PartialEq<[S::Item]> for Selection<'a, S>
where
    S: ?Sized + Sequence,
    S::Item: PartialEq,
{
    fn eq(&self, other: &[S::Item]) -> bool {
        return self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == b);
    }
}

/// Iterator over a [`Selection`].
pub enum SelectionIter<'a, 'b, S>
where
    S: ?Sized + Sequence + 'a,
    'a: 'b,
{
    Empty,
    Source(S::Iter<'b>),
    Owned(std::slice::Iter<'b, &'a S::Item>),
}

impl<'a, 'b, S> Iterator for SelectionIter<'a, 'b, S>
where
    S: ?Sized + Sequence + 'a,
    'a: 'b,
{
    type Item = &'b S::Item;

    #[inline]
    fn next(&mut self) -> Option<&'b S::Item> {
        match self {
            SelectionIter::Empty => None,
            SelectionIter::Source(iter) => iter.next(),
            SelectionIter::Owned(iter) => match iter.next() {
                Some(item) => Some(*item),
                None => None,
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SelectionIter::Empty => (0, Some(0)),
            SelectionIter::Source(iter) => iter.size_hint(),
            SelectionIter::Owned(iter) => iter.size_hint(),
        }
    }
}

impl<'a, S: ?Sized + Sequence> Sequence for Selection<'a, S> {
    type Item = S::Item;
    type Iter<'b> = SelectionIter<'a, 'b, S> where Self: 'b;
    type Tier = Counted;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<'a, S: ?Sized + Sequence> Countable for Selection<'a, S> {
    fn count(&self) -> usize {
        return self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn empty_refs_collapse() {
        let refs: Refs<'_, i32> = SmallVec::new();
        let selection: Selection<'_, Vec<i32>> = Selection::from_refs(refs);
        assert!(selection.is_empty_sequence());
        assert_eq!(selection.len(), 0);
        assert!(selection.as_shared_empty().is_some());
    }

    #[test]
    fn source_reports_identity() {
        let source = vec![1, 2, 3];
        let selection = Selection::source(&source, 3);
        assert!(selection.is_source());
        assert!(std::ptr::eq(selection.as_source().unwrap(), &source));
        assert_eq!(selection.get(2), Some(&3));
        assert_eq!(selection.get(3), None);
    }

    #[test]
    fn owned_iterates_in_order() {
        let source = vec![10, 20, 30];
        let refs: Refs<'_, i32> = smallvec![&source[2], &source[0]];
        let selection: Selection<'_, Vec<i32>> = Selection::from_refs(refs);
        assert_eq!(selection.to_vec(), vec![30, 10]);
        assert_eq!(selection, [30, 10][..]);
        assert_eq!(format!("{:?}", selection), "[30, 10]");
        assert_eq!(selection.count(), 2);
    }
}
