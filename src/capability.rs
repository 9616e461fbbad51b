//! Capability tiers for input sequences.
//!
//! A sequence declares the richest tier it supports through its `Tier`
//! associated type. The `Dispatch` impl for each tier marker demands the
//! matching capability trait, so the tier is checked by the compiler and the
//! operator code for a tier is only instantiated for types that have it.
//! Nothing here inspects types at run time.

use std::cmp::Ordering;
use std::collections::{btree_set, hash_set, linked_list, vec_deque};
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

use smallvec::{Array, SmallVec};

use crate::ops::dispatch::{Counted, Dispatch, Indexed, Listed};

/// The four capability tiers, ordered from poorest to richest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Sequence,
    Countable,
    Indexable,
    MutableList,
}

/// An ordered, finite enumeration of elements.
///
/// Enumeration borrows the sequence; each call to `elements` starts over
/// from the first element.
pub trait Sequence {
    /// The element type.
    type Item;

    /// Borrowing iterator over the elements, in order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// The richest tier this sequence supports.
    type Tier: Dispatch<Self>;

    /// Enumerate the elements in order.
    fn elements(&self) -> Self::Iter<'_>;
}

/// A sequence that knows its element count without enumerating.
///
/// The count always equals the number of elements a full enumeration would
/// yield at the instant of the call.
pub trait Countable: Sequence {
    fn count(&self) -> usize;
}

/// A countable sequence with O(1) positional access.
pub trait Indexable: Countable {
    /// Element at `index`. Panics when `index >= self.count()`, like slice
    /// indexing does.
    fn at(&self, index: usize) -> &Self::Item;
}

/// An indexable sequence that can be compacted and reordered in place.
pub trait MutableList: Indexable {
    fn swap_at(&mut self, a: usize, b: usize);

    /// Drop every element at or after `len`. No-op when `len >= count`.
    fn truncate_to(&mut self, len: usize);

    /// Stable in-place sort.
    fn sort_in_place_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

/// The tier the compiler resolved for `S`.
pub fn capability_of<S: ?Sized + Sequence>() -> Capability {
    return <S::Tier as Dispatch<S>>::CAPABILITY;
}

// =============================================================================
// Contiguous storage
// =============================================================================

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type Tier = Listed;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T> Countable for Vec<T> {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<T> Indexable for Vec<T> {
    fn at(&self, index: usize) -> &T {
        return &self[index];
    }
}

impl<T> MutableList for Vec<T> {
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn truncate_to(&mut self, len: usize) {
        Vec::truncate(self, len);
    }

    fn sort_in_place_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
    }
}

impl<A: Array> Sequence for SmallVec<A> {
    type Item = A::Item;
    type Iter<'a> = std::slice::Iter<'a, A::Item> where Self: 'a;
    type Tier = Listed;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<A: Array> Countable for SmallVec<A> {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<A: Array> Indexable for SmallVec<A> {
    fn at(&self, index: usize) -> &A::Item {
        return &self[index];
    }
}

impl<A: Array> MutableList for SmallVec<A> {
    fn swap_at(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn truncate_to(&mut self, len: usize) {
        SmallVec::truncate(self, len);
    }

    fn sort_in_place_by<F>(&mut self, compare: F)
    where
        F: FnMut(&A::Item, &A::Item) -> Ordering,
    {
        self.as_mut_slice().sort_by(compare);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Iter<'a> = vec_deque::Iter<'a, T> where Self: 'a;
    type Tier = Listed;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T> Countable for VecDeque<T> {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<T> Indexable for VecDeque<T> {
    fn at(&self, index: usize) -> &T {
        return &self[index];
    }
}

impl<T> MutableList for VecDeque<T> {
    fn swap_at(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }

    fn truncate_to(&mut self, len: usize) {
        VecDeque::truncate(self, len);
    }

    fn sort_in_place_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.make_contiguous().sort_by(compare);
    }
}

// Slices and arrays can be reordered but not shortened, so they stop at
// Indexable.

impl<T> Sequence for [T] {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type Tier = Indexed;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T> Countable for [T] {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<T> Indexable for [T] {
    fn at(&self, index: usize) -> &T {
        return &self[index];
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Iter<'a> = std::slice::Iter<'a, T> where Self: 'a;
    type Tier = Indexed;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T, const N: usize> Countable for [T; N] {
    fn count(&self) -> usize {
        return N;
    }
}

impl<T, const N: usize> Indexable for [T; N] {
    fn at(&self, index: usize) -> &T {
        return &self[index];
    }
}

// =============================================================================
// Countable-only collections
// =============================================================================

impl<T> Sequence for BTreeSet<T> {
    type Item = T;
    type Iter<'a> = btree_set::Iter<'a, T> where Self: 'a;
    type Tier = Counted;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T> Countable for BTreeSet<T> {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<T, H: BuildHasher> Sequence for HashSet<T, H> {
    type Item = T;
    type Iter<'a> = hash_set::Iter<'a, T> where Self: 'a;
    type Tier = Counted;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T, H: BuildHasher> Countable for HashSet<T, H> {
    fn count(&self) -> usize {
        return self.len();
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;
    type Iter<'a> = linked_list::Iter<'a, T> where Self: 'a;
    type Tier = Counted;

    fn elements(&self) -> Self::Iter<'_> {
        return self.iter();
    }
}

impl<T> Countable for LinkedList<T> {
    fn count(&self) -> usize {
        return self.len();
    }
}
