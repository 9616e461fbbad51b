//! Results that follow from the element count alone.
//!
//! Each helper returns `Some` when the count decides the answer and `None`
//! when the caller has to look at elements. Empty results are always the
//! canonical empty; a result that is definitionally the input (one element
//! that cannot be out of order or duplicated, a slice covering everything)
//! is the input itself.

use crate::capability::Sequence;
use crate::selection::Selection;

/// `any` on an empty input is false.
#[inline]
pub fn any(count: usize) -> Option<bool> {
    if count == 0 {
        return Some(false);
    }
    return None;
}

/// `all` on an empty input is vacuously true.
#[inline]
pub fn all(count: usize) -> Option<bool> {
    if count == 0 {
        return Some(true);
    }
    return None;
}

/// Filtering an empty input yields the canonical empty.
#[inline]
pub fn empty<'a, S: ?Sized + Sequence>(count: usize) -> Option<Selection<'a, S>> {
    if count == 0 {
        return Some(Selection::Empty);
    }
    return None;
}

/// Zero or one element: already distinct and already ordered.
#[inline]
pub fn trivial<'a, S: ?Sized + Sequence>(source: &'a S, count: usize) -> Option<Selection<'a, S>> {
    match count {
        0 => Some(Selection::Empty),
        1 => Some(Selection::source(source, count)),
        _ => None,
    }
}

/// `take(n)` decided by `n` and the count.
#[inline]
pub fn take<'a, S: ?Sized + Sequence>(
    source: &'a S,
    count: usize,
    n: usize,
) -> Option<Selection<'a, S>> {
    if n == 0 || count == 0 {
        return Some(Selection::Empty);
    }
    if n >= count {
        return Some(Selection::source(source, count));
    }
    return None;
}

/// `skip(n)` decided by `n` and the count.
#[inline]
pub fn skip<'a, S: ?Sized + Sequence>(
    source: &'a S,
    count: usize,
    n: usize,
) -> Option<Selection<'a, S>> {
    if n >= count {
        return Some(Selection::Empty);
    }
    if n == 0 {
        return Some(Selection::source(source, count));
    }
    return None;
}
