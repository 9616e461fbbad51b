//! The canonical empty sequence.
//!
//! `EmptySequence<T>` carries no data, so handing one out never allocates.
//! For callers that want a `'static` handle, [`EmptySequence::shared`]
//! returns one instance per element type, created on first demand and then
//! reused for the life of the process. Creation goes through a locked
//! registry keyed by `TypeId`, so concurrent first calls for the same `T`
//! still create exactly one instance.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::capability::{Countable, Indexable, Sequence};
use crate::ops::dispatch::Indexed;

type Registry = FxHashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static REGISTRY: Lazy<Mutex<Registry>> = Lazy::new(|| Mutex::new(Registry::default()));

/// A zero-element sequence of `T`.
pub struct EmptySequence<T> {
    // fn() -> T keeps the type Send + Sync whatever T is.
    marker: PhantomData<fn() -> T>,
}

impl<T> EmptySequence<T> {
    pub const fn new() -> EmptySequence<T> {
        return EmptySequence { marker: PhantomData };
    }
}

impl<T: 'static> EmptySequence<T> {
    /// The process-wide instance for `T`.
    pub fn shared() -> &'static EmptySequence<T> {
        let mut registry = REGISTRY.lock().unwrap_or_else(PoisonError::into_inner);
        let instance: &'static (dyn Any + Send + Sync) =
            *registry.entry(TypeId::of::<T>()).or_insert_with(|| {
                tracing::trace!(
                    element = std::any::type_name::<T>(),
                    "creating shared empty sequence"
                );
                let leaked: &'static (dyn Any + Send + Sync) =
                    Box::leak(Box::new(EmptySequence::<T>::new()));
                leaked
            });
        return instance
            .downcast_ref::<EmptySequence<T>>()
            .expect("registry entries are keyed by their own TypeId");
    }
}

impl<T> Default for EmptySequence<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Clone for EmptySequence<T> {
    fn clone(&self) -> Self {
        return *self;
    }
}

impl<T> Copy for EmptySequence<T> {}

impl<T> fmt::Debug for EmptySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("[]");
    }
}

impl<T> Sequence for EmptySequence<T> {
    type Item = T;
    type Iter<'a> = std::iter::Empty<&'a T> where Self: 'a;
    type Tier = Indexed;

    fn elements(&self) -> Self::Iter<'_> {
        return std::iter::empty();
    }
}

impl<T> Countable for EmptySequence<T> {
    fn count(&self) -> usize {
        return 0;
    }
}

impl<T> Indexable for EmptySequence<T> {
    fn at(&self, index: usize) -> &T {
        panic!("index {} out of range for an empty sequence", index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_instance_is_reused() {
        let a = EmptySequence::<i32>::shared();
        let b = EmptySequence::<i32>::shared();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.count(), 0);
        assert_eq!(a.elements().next(), None);
    }

    #[test]
    fn one_instance_per_type() {
        let ints = EmptySequence::<u64>::shared();
        let strings = EmptySequence::<String>::shared();
        assert_eq!(ints.count(), 0);
        assert_eq!(strings.count(), 0);
        let registry = REGISTRY.lock().unwrap();
        assert!(registry.contains_key(&TypeId::of::<u64>()));
        assert!(registry.contains_key(&TypeId::of::<String>()));
    }

    #[test]
    fn concurrent_first_use_creates_one_instance() {
        struct Marker;
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| EmptySequence::<Marker>::shared() as *const _ as usize))
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    #[should_panic]
    fn indexing_panics() {
        let empty = EmptySequence::<u8>::new();
        let _ = empty.at(0);
    }
}
