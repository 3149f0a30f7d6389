//! Common unit tests for [StructureTester] implementations
#![allow(warnings, unused)]

use super::testers::{
    Discipline,
    StructureTester,
};


/// The order in which `discipline` would give back the `pushed` elements, if nothing were popped in between
pub fn expected_removal_order(discipline: Discipline, pushed: &[i32]) -> Vec<i32> {
    let mut expected = pushed.to_vec();
    match discipline {
        Discipline::Stack            => expected.reverse(),
        Discipline::Queue            => (),
        Discipline::FifoDeque        => (),
        Discipline::MaxPriorityQueue => expected.sort_by(|a, b| b.cmp(a)),
        Discipline::MinPriorityQueue => expected.sort(),
    }
    expected
}

pub fn basic_tester_use_cases(discipline: Discipline, tester: &mut impl StructureTester<i32>) {

    macro_rules! assert_empty {
        () => {
            assert!(tester.is_empty(), "'{}' tester should be empty at this point", discipline.id());
            assert_eq!(tester.len(), 0, "'{}' tester reported being empty, but len() disagrees", discipline.id());
            assert_eq!(tester.peek(), None, "Something was peeked from the empty '{}' tester", discipline.id());
            assert!(!tester.test_pop(&0), "`test_pop()` should fail on the empty '{}' tester", discipline.id());
            match tester.pop() {
                None          => (),   // test passed
                Some(element) => panic!("Something was popped from the empty '{}' tester: {:?}", discipline.id(), element),
            }
            assert_eq!(tester.len(), 0, "'{}' tester should remain empty after popping from empty", discipline.id());
        }
    }

    macro_rules! push_and_pop_a_single_element {
        () => {
            let expected = 123;
            tester.push(expected);
            assert_eq!(tester.len(), 1, "Pushing an element didn't increase the '{}' tester length", discipline.id());
            assert_eq!(tester.peek(), Some(&expected), "Wrong element peeked from '{}'", discipline.id());
            match tester.pop() {
                None          => panic!("No element was popped from '{}', even when {} has just been pushed", discipline.id(), expected),
                Some(element) => assert_eq!(element, expected, "Wrong element popped from '{}'", discipline.id()),
            }
            assert_empty!();
        }
    }

    macro_rules! push_all_and_pop_to_emptiness {
        ($pushed: expr) => {
            let pushed: &[i32] = &$pushed;
            for (i, element) in pushed.iter().enumerate() {
                tester.push(*element);
                assert_eq!(tester.len(), i+1, "'{}' tester length is wrong after {} pushes", discipline.id(), i+1);
            }
            for expected in expected_removal_order(discipline, pushed) {
                assert_eq!(tester.peek(), Some(&expected), "`peek()` on '{}' disagrees with the discipline", discipline.id());
                assert_eq!(tester.pop(), Some(expected), "`pop()` on '{}' disagrees with the discipline", discipline.id());
            }
            assert_empty!();
        }
    }

    tester.reset();
    assert_empty!();
    push_and_pop_a_single_element!();
    push_all_and_pop_to_emptiness!([5, 1, 4, 2, 3]);
    push_all_and_pop_to_emptiness!([7, 7, -1, 0, 7, -1]);

    // `reset()` brings the tester back to emptiness, whatever it holds
    for element in 0..16 {
        tester.push(element);
    }
    tester.reset();
    assert_empty!();
    push_and_pop_a_single_element!();
}

/// Checks [StructureTester::test_pop()] keeps the tester in sync with the trace -- even when the expectation is not met
pub fn test_pop_use_cases(discipline: Discipline, tester: &mut impl StructureTester<i32>) {
    tester.reset();
    tester.push(10);
    tester.push(20);
    let order = expected_removal_order(discipline, &[10, 20]);

    assert!(!tester.test_pop(&99), "`test_pop()` on '{}' matched a value that was never pushed", discipline.id());
    assert_eq!(tester.len(), 1, "A failed `test_pop()` on '{}' should still have removed an element", discipline.id());
    assert!(tester.test_pop(&order[1]), "`test_pop()` on '{}' should have matched {}", discipline.id(), order[1]);
    assert!(tester.is_empty(), "'{}' tester should be empty after two `test_pop()`s", discipline.id());
    assert!(!tester.test_pop(&order[1]), "`test_pop()` on the empty '{}' tester should fail", discipline.id());
    assert!(tester.is_empty());
}
