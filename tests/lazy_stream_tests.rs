//! Integration tests for `LazyStream<T>`.
//!
//! Tests cover:
//! - The concrete take / drop / exists / for_all scenarios
//! - Short-circuiting of folds over streams whose tail must not be forced
//! - Memoization of element and tail thunks
//! - Infinite streams consumed through bounded traversals

use lazy_stream::control::Thunk;
use lazy_stream::stream::LazyStream;
use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;

/// A stream whose first element is `head` and whose tail panics if forced.
fn guarded(head: i32) -> LazyStream<i32> {
    LazyStream::cons(move || head, || panic!("tail must not be forced"))
}

/// `0..length`, counting how many elements have been computed.
fn counted(length: usize, computed: &Rc<Cell<usize>>) -> LazyStream<usize> {
    let counter = Rc::clone(computed);
    LazyStream::unfold(0, move |index| {
        (index < length).then(|| {
            counter.set(counter.get() + 1);
            (index, index + 1)
        })
    })
}

// =============================================================================
// Concrete Scenarios
// =============================================================================

#[rstest]
fn take_two_of_five() {
    assert_eq!(
        LazyStream::of(vec![1, 2, 3, 4, 5]).take(2).to_list_eager(),
        vec![1, 2]
    );
}

#[rstest]
fn drop_one_of_three() {
    assert_eq!(
        LazyStream::of(vec![1, 2, 3]).drop(1).to_list_eager(),
        vec![2, 3]
    );
}

#[rstest]
fn exists_greater_than_two() {
    assert!(LazyStream::of(vec![1, 2, 3]).exists(|x| *x > 2));
}

#[rstest]
#[case(0, true)]
#[case(1, false)]
fn for_all_greater_than(#[case] bound: i32, #[case] expected: bool) {
    assert_eq!(LazyStream::of(vec![1, 2, 3]).for_all(|x| *x > bound), expected);
}

// =============================================================================
// Short-circuiting
// =============================================================================

#[rstest]
fn exists_on_first_element_does_not_force_tail() {
    assert!(guarded(1).exists(|x| *x == 1));
}

#[rstest]
fn for_all_failing_first_element_does_not_force_tail() {
    assert!(!guarded(1).for_all(|x| *x == 2));
}

#[rstest]
fn find_first_element_does_not_force_tail() {
    assert_eq!(guarded(3).find(|x| *x == 3), Some(3));
}

#[rstest]
#[should_panic(expected = "tail must not be forced")]
fn exists_without_match_forces_tail() {
    let _ = guarded(1).exists(|x| *x == 2);
}

#[rstest]
fn fold_right_can_ignore_the_rest() {
    let first = guarded(4).fold_right(0, |element, _rest| element);
    assert_eq!(first, 4);
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn elements_are_computed_once() {
    let computed = Rc::new(Cell::new(0));
    let stream = counted(5, &computed);

    assert_eq!(stream.to_list_eager(), vec![0, 1, 2, 3, 4]);
    assert_eq!(stream.to_list_recursive(), vec![0, 1, 2, 3, 4]);
    assert!(stream.exists(|x| *x == 4));
    assert_eq!(computed.get(), 5);
}

#[rstest]
fn cons_thunks_run_at_most_once() {
    let head_runs = Rc::new(Cell::new(0));
    let tail_runs = Rc::new(Cell::new(0));
    let head_counter = Rc::clone(&head_runs);
    let tail_counter = Rc::clone(&tail_runs);
    let stream = LazyStream::cons(
        move || {
            head_counter.set(head_counter.get() + 1);
            10
        },
        move || {
            tail_counter.set(tail_counter.get() + 1);
            LazyStream::empty()
        },
    );

    for _ in 0..3 {
        assert_eq!(stream.head_option(), Some(10));
        assert_eq!(stream.to_list_eager(), vec![10]);
    }
    assert_eq!(head_runs.get(), 1);
    assert_eq!(tail_runs.get(), 1);
}

#[rstest]
fn take_result_shares_element_cells_with_source() {
    let source = LazyStream::of(vec![1, 2, 3]);
    let prefix = source.take(2);
    let _ = prefix.to_list_eager();

    let LazyStream::Cons(head, tail) = &source else {
        panic!("expected a node");
    };
    assert!(head.is_forced());
    let second = tail.force();
    let LazyStream::Cons(second_head, second_tail) = &*second else {
        panic!("expected a node");
    };
    assert!(second_head.is_forced());
    // The element after the prefix was never reached
    let third = second_tail.force();
    let LazyStream::Cons(third_head, _) = &*third else {
        panic!("expected a node");
    };
    assert!(!third_head.is_forced());
}

#[rstest]
fn manual_node_construction() {
    let stream = LazyStream::Cons(
        Rc::new(Thunk::evaluated(1)),
        Rc::new(Thunk::new(|| LazyStream::of(vec![2, 3]))),
    );
    assert_eq!(stream.to_list_eager(), vec![1, 2, 3]);
}

// =============================================================================
// Infinite Streams
// =============================================================================

#[rstest]
fn ones_is_infinite_but_boundedly_consumable() {
    let ones: LazyStream<i32> = LazyStream::ones();
    assert_eq!(ones.take(5).to_list_eager(), vec![1; 5]);
    assert!(ones.exists(|x| *x == 1));
    assert!(!ones.for_all(|x| *x != 1));
    assert_eq!(ones.drop(1_000).head_option(), Some(1));
}

#[rstest]
fn derived_infinite_streams_compose() {
    let naturals = LazyStream::from(0_u64);
    let odd_squares = naturals.filter(|x| x % 2 == 1).map(|x| x * x);
    assert_eq!(odd_squares.take(4).to_list_eager(), vec![1, 9, 25, 49]);
    assert!(naturals.starts_with(&LazyStream::of(vec![0, 1, 2])));
}

#[rstest]
fn take_while_variants_agree_on_infinite_stream() {
    let naturals = LazyStream::from(1);
    assert_eq!(
        naturals.take_while(|x| *x * *x < 30).to_list_eager(),
        naturals.take_while_via_fold_right(|x| *x * *x < 30).to_list_eager()
    );
}

// =============================================================================
// Edge Cases
// =============================================================================

#[rstest]
fn empty_stream_operations_are_no_ops() {
    let empty: LazyStream<i32> = LazyStream::empty();
    assert!(empty.take(3).is_empty());
    assert!(empty.drop(3).is_empty());
    assert!(empty.take_while(|_| true).is_empty());
    assert!(empty.take_while_via_fold_right(|_| true).is_empty());
    assert_eq!(empty.find(|_| true), None);
    assert_eq!(empty.head_option(), None);
    assert!(!empty.exists(|_| true));
    assert!(empty.for_all(|_| false));
    assert!(empty.to_list_eager().is_empty());
    assert!(empty.to_list_recursive().is_empty());
}

#[rstest]
fn long_stream_is_materialized_and_dropped_without_overflow() {
    let stream: LazyStream<usize> = (0..300_000).collect();
    let elements = stream.to_list_eager();
    assert_eq!(elements.len(), 300_000);
    assert_eq!(stream.drop(299_999).head_option(), Some(299_999));
    drop(stream);
}
