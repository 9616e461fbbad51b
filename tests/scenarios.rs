//! Operator behaviour across capability tiers.

use std::cell::Cell;
use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};

use narrow::{
    capability_of, distinct, filter, filter_in_place, first, first_or_default, last,
    last_or_default, order_by, skip, take, Capability, Config, EmptySequence, EqualityComparer,
    Error, Natural, Operators, Selection,
};

fn ops(threshold: usize) -> Operators {
    return Operators::new(Config::new(threshold));
}

/// Natural equality that records how often each half is used.
#[derive(Default)]
struct Counting {
    equals: Cell<usize>,
    hashes: Cell<usize>,
}

impl EqualityComparer<i32> for Counting {
    fn equals(&self, a: &i32, b: &i32) -> bool {
        self.equals.set(self.equals.get() + 1);
        return a == b;
    }

    fn hash(&self, value: &i32) -> u64 {
        self.hashes.set(self.hashes.get() + 1);
        return EqualityComparer::<i32>::hash(&Natural, value);
    }
}

// =============================================================================
// Worked examples
// =============================================================================

#[test]
fn distinct_falls_back_on_duplicate() {
    let source = vec![5, 3, 3, 7];
    let result = ops(8).distinct(&source);
    assert!(!result.is_source());
    assert_eq!(result.to_vec(), vec![5, 3, 7]);
}

#[test]
fn distinct_scans_pairs_then_hashes() {
    let source = vec![5, 3, 3, 7];
    let counting = Counting::default();
    let result = ops(8).distinct_by(&source, &counting);
    assert_eq!(result.to_vec(), vec![5, 3, 7]);

    // Pairwise: (0,1) (0,2) (0,3) (1,2) stops on the duplicate 3.
    // General: every element hashed once, one bucket hit for the second 3.
    assert_eq!(counting.hashes.get(), 4);
    assert_eq!(counting.equals.get(), 4 + 1);
}

#[test]
fn distinct_input_never_reaches_the_hash_pass() {
    let source = vec![5, 3, 7];
    let counting = Counting::default();
    assert!(ops(8).distinct_by(&source, &counting).is_source());
    assert_eq!(counting.equals.get(), 3);
    assert_eq!(counting.hashes.get(), 0);
}

#[test]
fn distinct_returns_source_when_already_distinct() {
    let source = vec![5, 3, 7];
    let result = ops(8).distinct(&source);
    assert!(result.is_source());
    assert!(std::ptr::eq(result.as_source().unwrap(), &source));
}

#[test]
fn empty_filter_is_the_shared_singleton() {
    let source: Vec<i32> = Vec::new();
    let result = filter(&source, |x| *x > 0);
    assert!(result.is_empty_sequence());

    let other: VecDeque<i32> = VecDeque::new();
    let again = distinct(&other);
    assert!(again.is_empty_sequence());

    let a = result.as_shared_empty().unwrap();
    let b = again.as_shared_empty().unwrap();
    assert!(std::ptr::eq(a, b));
    assert!(std::ptr::eq(a, EmptySequence::<i32>::shared()));
}

#[test]
fn in_place_filter_returns_same_container() {
    let mut list = vec![4, 1, 4, 2, 1];
    let address = &list as *const Vec<i32>;
    let result = filter_in_place(&mut list, |x| *x != 1);
    assert!(std::ptr::eq(result, address));
    assert_eq!(list, vec![4, 4, 2]);
}

// =============================================================================
// Count fast paths
// =============================================================================

#[test]
fn empty_countable_inputs() {
    let set: BTreeSet<i32> = BTreeSet::new();
    let o = ops(8);
    assert!(!o.any(&set, |_| panic!("no element should be visited")));
    assert!(o.all(&set, |_| panic!("no element should be visited")));
    assert!(o.filter(&set, |_| true).is_empty_sequence());
    assert!(o.distinct(&set).is_empty_sequence());
    assert!(!o.any_element(&set));
    assert_eq!(o.count(&set), 0);
}

#[test]
fn small_countable_filter_matching_everything_is_the_source() {
    let set: BTreeSet<i32> = [1, 2, 3].into_iter().collect();
    let result = ops(8).filter(&set, |x| *x > 0);
    assert!(result.is_source());
    assert!(std::ptr::eq(result.as_source().unwrap(), &set));

    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert!(ops(8).filter(&list, |x| *x > 0).is_source());

    // Over the threshold the general filter copies.
    assert!(!ops(2).filter(&set, |x| *x > 0).is_source());
}

#[test]
fn small_countable_filter_tests_each_element_once() {
    let list: LinkedList<i32> = [4, 1, 4, 2, 1].into_iter().collect();
    let mut calls = 0;
    let result = ops(8).filter(&list, |x| {
        calls += 1;
        *x != 1
    });
    assert_eq!(result.to_vec(), vec![4, 4, 2]);
    assert_eq!(calls, 5);

    let unique = ops(8).distinct(&list);
    assert!(ops(8).filter(&unique, |x| *x > 0).is_source());
}

#[test]
fn single_element_is_returned_as_is() {
    let list: LinkedList<&str> = ["only"].into_iter().collect();
    let o = ops(8);
    assert!(o.distinct(&list).is_source());
    assert!(o.order_by(&list, |s| s.len()).is_source());

    let array = [42];
    assert!(o.distinct(&array).is_source());
    assert!(o.order_by(&array, |x| *x).is_source());
}

#[test]
fn hash_sets_are_countable() {
    let set: HashSet<u8> = [1, 2, 3].into_iter().collect();
    assert_eq!(capability_of::<HashSet<u8>>(), Capability::Countable);
    let o = ops(8);
    assert_eq!(o.count(&set), 3);
    assert!(o.all(&set, |x| *x > 0));
    assert!(o.take(&set, 3).is_source());
    assert!(o.skip(&set, 3).is_empty_sequence());
    assert_eq!(o.take(&set, 2).len(), 2);
}

// =============================================================================
// Element access
// =============================================================================

#[test]
fn first_and_last_by_index() {
    let source = vec![10, 20, 30];
    assert_eq!(first(&source), Ok(&10));
    assert_eq!(last(&source), Ok(&30));
    assert!(std::ptr::eq(first(&source).unwrap(), &source[0]));
    assert!(std::ptr::eq(last(&source).unwrap(), &source[2]));
}

#[test]
fn or_default_on_empty() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(first_or_default(&empty), String::new());
    assert_eq!(last_or_default(&empty), String::new());
    assert_eq!(first(&empty), Err(Error::NoElements { operator: "first" }));

    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(first_or_default(&set), 1);
    assert_eq!(last_or_default(&set), 3);
}

#[test]
fn element_at_across_tiers() {
    let o = ops(8);
    let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(o.element_at(&list, 2), Ok(&3));
    assert!(o.element_at(&list, 3).is_err());
    assert_eq!(o.element_at_or_default(&list, 7), 0);

    let slice: &[i32] = &[4, 5, 6];
    assert_eq!(o.element_at(slice, 1), Ok(&5));
}

// =============================================================================
// Slicing
// =============================================================================

#[test]
fn take_and_skip_bounds() {
    let source = vec![1, 2, 3, 4];
    assert!(take(&source, 0).is_empty_sequence());
    assert!(take(&source, 4).is_source());
    assert!(take(&source, 100).is_source());
    assert_eq!(take(&source, 2).to_vec(), vec![1, 2]);

    assert!(skip(&source, 0).is_source());
    assert!(skip(&source, 4).is_empty_sequence());
    assert_eq!(skip(&source, 1).to_vec(), vec![2, 3, 4]);
}

#[test]
fn negative_counts_fail_before_work() {
    let source = vec![1, 2, 3];
    let err = ops(8).try_take(&source, -3).unwrap_err();
    assert_eq!(err, Error::NegativeCount { operator: "take", count: -3 });
    assert_eq!(err.to_string(), "take: count must be non-negative, got -3");
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn results_are_countable_sequences() {
    let source = vec![3, 1, 3, 2, 1];
    let o = ops(8);

    let unique: Selection<'_, Vec<i32>> = o.distinct(&source);
    assert_eq!(capability_of::<Selection<'static, Vec<i32>>>(), Capability::Countable);

    let sorted = o.order_by(&unique, |x| *x);
    assert_eq!(sorted.to_vec(), vec![1, 2, 3]);

    let big = o.filter(&sorted, |x| *x > 1);
    assert_eq!(big.to_vec(), vec![2, 3]);

    let none = o.filter(&big, |x| *x > 10);
    assert!(none.is_empty_sequence());
    assert!(o.distinct(&none).is_empty_sequence());
}

#[test]
fn order_by_on_deques() {
    let mut deque: VecDeque<(u8, char)> = VecDeque::new();
    deque.push_back((2, 'x'));
    deque.push_front((1, 'y'));
    deque.push_back((1, 'z'));
    let sorted = order_by(&deque, |pair| pair.0);
    assert_eq!(sorted.to_vec(), vec![(1, 'y'), (1, 'z'), (2, 'x')]);
}

#[test]
fn distinct_with_case_folding() {
    let words = vec!["Rust", "rust", "Go", "RUST", "go"];
    let result = ops(8).distinct_by_key(&words, |w| w.to_lowercase());
    assert_eq!(result.to_vec(), vec!["Rust", "Go"]);

    let exact = ops(8).distinct_by(&words, &Natural);
    assert!(exact.is_source());
}
