//! Priority queue simulators, backed by binary heaps -- so equal priorities are
//! resolved the same way a binary heap resolves them.

use super::StructureTester;
use std::{
    cmp::Reverse,
    collections::BinaryHeap,
};


/// Simulates a priority queue where the greatest element is always the next to be removed
#[derive(Debug)]
pub struct MaxPriorityQueueTester<SlotType> {
    heap: BinaryHeap<SlotType>,
}

impl<SlotType> MaxPriorityQueueTester<SlotType> {
    pub const NAME: &'static str = "kolejka priorytetowa";
}

impl<SlotType: Ord> MaxPriorityQueueTester<SlotType> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<SlotType: Ord> Default for MaxPriorityQueueTester<SlotType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SlotType: Ord> StructureTester<SlotType> for MaxPriorityQueueTester<SlotType> {

    #[inline(always)]
    fn push(&mut self, element: SlotType) {
        self.heap.push(element);
    }

    #[inline(always)]
    fn peek(&self) -> Option<&SlotType> {
        self.heap.peek()
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SlotType> {
        self.heap.pop()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn reset(&mut self) {
        self.heap.clear();
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

}


/// Simulates a priority queue where the smallest element is always the next to be removed
#[derive(Debug)]
pub struct MinPriorityQueueTester<SlotType> {
    heap: BinaryHeap<Reverse<SlotType>>,
}

impl<SlotType> MinPriorityQueueTester<SlotType> {
    pub const NAME: &'static str = "kolejka priorytetowa min";
}

impl<SlotType: Ord> MinPriorityQueueTester<SlotType> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<SlotType: Ord> Default for MinPriorityQueueTester<SlotType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SlotType: Ord> StructureTester<SlotType> for MinPriorityQueueTester<SlotType> {

    #[inline(always)]
    fn push(&mut self, element: SlotType) {
        self.heap.push(Reverse(element));
    }

    #[inline(always)]
    fn peek(&self) -> Option<&SlotType> {
        self.heap.peek().map(|Reverse(element)| element)
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SlotType> {
        self.heap.pop().map(|Reverse(element)| element)
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn reset(&mut self) {
        self.heap.clear();
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [priority_queue_tester](super) module

    use super::*;
    use super::super::Discipline;
    use crate::test_commons;


    #[cfg_attr(not(doc),test)]
    fn basic_max_priority_queue_use_cases() {
        let mut priority_queue = MaxPriorityQueueTester::<i32>::new();
        test_commons::basic_tester_use_cases(Discipline::MaxPriorityQueue, &mut priority_queue);
    }

    #[cfg_attr(not(doc),test)]
    fn basic_min_priority_queue_use_cases() {
        let mut priority_queue = MinPriorityQueueTester::<i32>::new();
        test_commons::basic_tester_use_cases(Discipline::MinPriorityQueue, &mut priority_queue);
    }

    #[cfg_attr(not(doc),test)]
    fn repeated_priorities() {
        let mut max = MaxPriorityQueueTester::new();
        let mut min = MinPriorityQueueTester::new();
        for element in [3, 1, 3, 2, 1] {
            max.push(element);
            min.push(element);
        }
        let max_order: Vec<i32> = std::iter::from_fn(|| max.pop()).collect();
        let min_order: Vec<i32> = std::iter::from_fn(|| min.pop()).collect();
        assert_eq!(max_order, vec![3, 3, 2, 1, 1], "Max priority queue removed elements in the wrong order");
        assert_eq!(min_order, vec![1, 1, 2, 3, 3], "Min priority queue removed elements in the wrong order");
    }

}
