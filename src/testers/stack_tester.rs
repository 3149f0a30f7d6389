//! LIFO simulator -- the most recently pushed element is the next one to be removed

use super::StructureTester;


/// Simulates a stack: elements are removed in the reverse order they were pushed
#[derive(Debug)]
pub struct StackTester<SlotType> {
    /// the top of the stack is the last element
    buffer: Vec<SlotType>,
}

impl<SlotType> StackTester<SlotType> {

    pub const NAME: &'static str = "stos";

    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
        }
    }

}

impl<SlotType> Default for StackTester<SlotType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SlotType> StructureTester<SlotType> for StackTester<SlotType> {

    #[inline(always)]
    fn push(&mut self, element: SlotType) {
        self.buffer.push(element);
    }

    #[inline(always)]
    fn peek(&self) -> Option<&SlotType> {
        self.buffer.last()
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SlotType> {
        self.buffer.pop()
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

    //! Unit tests for [stack_tester](super) module

    use super::*;
    use super::super::Discipline;
    use crate::test_commons;


    #[cfg_attr(not(doc),test)]
    fn basic_stack_use_cases() {
        let mut stack = StackTester::<i32>::new();
        test_commons::basic_tester_use_cases(Discipline::Stack, &mut stack);
    }

    #[cfg_attr(not(doc),test)]
    fn top_is_the_last_pushed() {
        let mut stack = StackTester::new();
        stack.push('a');
        stack.push('b');
        assert_eq!(stack.peek(), Some(&'b'), "Stack's top should be the last pushed element");
        stack.push('c');
        assert_eq!(stack.pop(), Some('c'));
        assert_eq!(stack.pop(), Some('b'));
        stack.push('d');
        assert_eq!(stack.pop(), Some('d'));
        assert_eq!(stack.pop(), Some('a'));
        assert_eq!(stack.pop(), None, "Popping from an empty stack should yield nothing");
    }

}
