//! FIFO simulator -- the least recently pushed element is the next one to be removed

use super::StructureTester;
use std::collections::VecDeque;


/// Simulates a queue: elements are removed in the same order they were enqueued
#[derive(Debug)]
pub struct QueueTester<SlotType> {
    buffer: VecDeque<SlotType>,
}

impl<SlotType> QueueTester<SlotType> {

    pub const NAME: &'static str = "kolejka";

    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
        }
    }

}

impl<SlotType> Default for QueueTester<SlotType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SlotType> StructureTester<SlotType> for QueueTester<SlotType> {

    #[inline(always)]
    fn push(&mut self, element: SlotType) {
        self.buffer.push_back(element);
    }

    #[inline(always)]
    fn peek(&self) -> Option<&SlotType> {
        self.buffer.front()
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SlotType> {
        self.buffer.pop_front()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [queue_tester](super) module

    use super::*;
    use super::super::Discipline;
    use crate::test_commons;


    #[cfg_attr(not(doc),test)]
    fn basic_queue_use_cases() {
        let mut queue = QueueTester::<i32>::new();
        test_commons::basic_tester_use_cases(Discipline::Queue, &mut queue);
    }

    #[cfg_attr(not(doc),test)]
    fn interleaved_enqueues_and_dequeues() {
        let mut queue = QueueTester::new();
        queue.push("first");
        queue.push("second");
        assert_eq!(queue.pop(), Some("first"));
        queue.push("third");
        assert_eq!(queue.peek(), Some(&"second"), "Queue's front should be the oldest remaining element");
        assert_eq!(queue.pop(), Some("second"));
        assert_eq!(queue.pop(), Some("third"));
        assert!(queue.is_empty(), "Queue should be empty after consuming everything");
    }

}
