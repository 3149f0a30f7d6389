//! Double ended queue simulator, used as a FIFO: elements are inserted at the back & removed from the front.\
//! Behaves exactly as the [QueueTester](super::queue_tester::QueueTester), but is reported as a discipline of its own.

use super::StructureTester;
use std::collections::VecDeque;


#[derive(Debug)]
pub struct DequeFrontTester<SlotType> {
    buffer: VecDeque<SlotType>,
}

impl<SlotType> DequeFrontTester<SlotType> {

    pub const NAME: &'static str = "deque (FIFO)";

    pub fn new() -> Self {
        Self {
            buffer: VecDeque::new(),
        }
    }

}

impl<SlotType> Default for DequeFrontTester<SlotType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SlotType> StructureTester<SlotType> for DequeFrontTester<SlotType> {

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

    //! Unit tests for [deque_tester](super) module

    use super::*;
    use super::super::Discipline;
    use crate::test_commons;


    #[cfg_attr(not(doc),test)]
    fn basic_deque_use_cases() {
        let mut deque = DequeFrontTester::<i32>::new();
        test_commons::basic_tester_use_cases(Discipline::FifoDeque, &mut deque);
    }

}
