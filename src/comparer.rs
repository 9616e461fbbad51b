//! Caller-supplied equality and ordering.
//!
//! The operators assume, and never verify, that an `EqualityComparer` is
//! reflexive, symmetric and transitive with `hash` consistent with
//! `equals`, and that a `Comparer` is a total order.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Equality plus a hash consistent with it.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash(&self, value: &T) -> u64;
}

/// Total order over `T`.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The type's own `Eq + Hash` or `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

/// Compare by a projected key.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

/// Reverse another comparer.
#[derive(Debug, Default, Clone, Copy)]
pub struct Descending<C>(pub C);

fn fx_hash<K: Hash + ?Sized>(value: &K) -> u64 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    return hasher.finish();
}

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for Natural {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        return a == b;
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        return fx_hash(value);
    }
}

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return a.cmp(b);
    }
}

impl<T: ?Sized, K: Eq + Hash, F: Fn(&T) -> K> EqualityComparer<T> for ByKey<F> {
    fn equals(&self, a: &T, b: &T) -> bool {
        return (self.0)(a) == (self.0)(b);
    }

    fn hash(&self, value: &T) -> u64 {
        return fx_hash(&(self.0)(value));
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Comparer<T> for ByKey<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return (self.0)(a).cmp(&(self.0)(b));
    }
}

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Descending<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return self.0.compare(b, a);
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Comparer<T> for F {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        return self(a, b);
    }
}

impl<T: ?Sized, E: EqualityComparer<T> + ?Sized> EqualityComparer<T> for &E {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        return (**self).equals(a, b);
    }

    #[inline]
    fn hash(&self, value: &T) -> u64 {
        return (**self).hash(value);
    }
}
