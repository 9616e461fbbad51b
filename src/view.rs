//! Deferred views.
//!
//! `Filtered` applies its predicate while being enumerated instead of
//! materializing anything. Its length is unknown until it has been walked,
//! so it only reaches the plain `Sequence` tier.

use crate::capability::Sequence;
use crate::ops::dispatch::Plain;

/// A lazily filtered view over another sequence.
pub struct Filtered<'a, S: ?Sized, P> {
    source: &'a S,
    predicate: P,
}

/// View the elements of `source` that match `predicate`.
pub fn filtered<S, P>(source: &S, predicate: P) -> Filtered<'_, S, P>
where
    S: ?Sized + Sequence,
    P: Fn(&S::Item) -> bool,
{
    return Filtered { source, predicate };
}

impl<'a, S: ?Sized, P> Filtered<'a, S, P> {
    pub fn source(&self) -> &'a S {
        return self.source;
    }
}

pub struct FilteredIter<'b, S: ?Sized + Sequence + 'b, P> {
    inner: S::Iter<'b>,
    predicate: &'b P,
}

impl<'b, S, P> Iterator for FilteredIter<'b, S, P>
where
    S: ?Sized + Sequence + 'b,
    P: Fn(&S::Item) -> bool,
{
    type Item = &'b S::Item;

    fn next(&mut self) -> Option<&'b S::Item> {
        for item in self.inner.by_ref() {
            if (self.predicate)(item) {
                return Some(item);
            }
        }
        return None;
    }
}

impl<'a, S, P> Sequence for Filtered<'a, S, P>
where
    S: ?Sized + Sequence,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;
    type Iter<'b> = FilteredIter<'b, S, P> where Self: 'b;
    type Tier = Plain;

    fn elements(&self) -> Self::Iter<'_> {
        return FilteredIter {
            inner: self.source.elements(),
            predicate: &self.predicate,
        };
    }
}
