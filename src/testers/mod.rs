//! Simulators for the data structure disciplines we are able to identify.
//!
//! Each tester mirrors exactly what a real instance of its discipline would contain if fed
//! the same pushes & pops, so the [StructureIdentifier](crate::identifier::StructureIdentifier)
//! may confront the simulated removals with the ones observed in a trace.

pub mod stack_tester;
pub mod queue_tester;
pub mod priority_queue_tester;
pub mod deque_tester;

use self::{
    stack_tester::StackTester,
    queue_tester::QueueTester,
    priority_queue_tester::{MaxPriorityQueueTester, MinPriorityQueueTester},
    deque_tester::DequeFrontTester,
};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};


/// Capabilities every discipline simulator must provide
pub trait StructureTester<SlotType> {

    /// Inserts `element` according to the discipline's ordering rule. Never fails.
    fn push(&mut self, element: SlotType);

    /// The element the discipline would remove next -- `None` if empty
    fn peek(&self) -> Option<&SlotType>;

    /// Removes the element [Self::peek()] refers to, advancing the discipline's removal order by one.\
    /// Returns `None`, without any side effects, if there was nothing to remove.
    fn pop(&mut self) -> Option<SlotType>;

    /// How many elements the simulated structure currently holds
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Brings the simulated structure back to its empty state
    fn reset(&mut self);

    /// The fixed name of the simulated discipline -- the one reported when it gets identified
    fn name(&self) -> &'static str;

    /// Checks whether the next removal of the discipline yields `expected`.\
    /// Returns `false`, without changing anything, if the structure is empty; otherwise the element is always removed
    /// -- regardless of the comparison outcome -- so this tester stays in sync with the trace.
    fn test_pop(&mut self, expected: &SlotType) -> bool where SlotType: PartialEq {
        let matches = match self.peek() {
            Some(next) => next == expected,
            None       => return false,
        };
        self.pop();
        matches
    }

}


/// The closed set of disciplines known to this crate.\
/// The kebab-case representation (`stack`, `max-priority-queue`, ...) is used for configuration,
/// while [Discipline::name()] is what gets reported on identifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Discipline {
    /// LIFO
    Stack,
    /// FIFO
    Queue,
    /// largest value first
    MaxPriorityQueue,
    /// smallest value first
    MinPriorityQueue,
    /// front-removal double ended queue
    FifoDeque,
}

impl Discipline {

    /// The name reported when this discipline is identified
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stack            => StackTester::<()>::NAME,
            Self::Queue            => QueueTester::<()>::NAME,
            Self::MaxPriorityQueue => MaxPriorityQueueTester::<()>::NAME,
            Self::MinPriorityQueue => MinPriorityQueueTester::<()>::NAME,
            Self::FifoDeque        => DequeFrontTester::<()>::NAME,
        }
    }

    /// The configuration identifier for this discipline, as accepted by `Discipline::from_str()`
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Instantiates an empty simulator for this discipline
    pub fn tester<SlotType: Ord>(self) -> Tester<SlotType> {
        match self {
            Self::Stack            => Tester::Stack(StackTester::new()),
            Self::Queue            => Tester::Queue(QueueTester::new()),
            Self::MaxPriorityQueue => Tester::MaxPriorityQueue(MaxPriorityQueueTester::new()),
            Self::MinPriorityQueue => Tester::MinPriorityQueue(MinPriorityQueueTester::new()),
            Self::FifoDeque        => Tester::FifoDeque(DequeFrontTester::new()),
        }
    }

}


/// Any of the [Discipline] simulators -- what the [StructureIdentifier](crate::identifier::StructureIdentifier) holds
#[derive(Debug)]
pub enum Tester<SlotType: Ord> {
    Stack(StackTester<SlotType>),
    Queue(QueueTester<SlotType>),
    MaxPriorityQueue(MaxPriorityQueueTester<SlotType>),
    MinPriorityQueue(MinPriorityQueueTester<SlotType>),
    FifoDeque(DequeFrontTester<SlotType>),
}

/// Forwards `$action` to whatever concrete tester `$self` wraps
macro_rules! dispatch {
    ($self: expr, $tester: ident => $action: expr) => {
        match $self {
            Tester::Stack($tester)            => $action,
            Tester::Queue($tester)            => $action,
            Tester::MaxPriorityQueue($tester) => $action,
            Tester::MinPriorityQueue($tester) => $action,
            Tester::FifoDeque($tester)        => $action,
        }
    }
}

impl<SlotType: Ord> Tester<SlotType> {

    /// Which discipline this tester simulates
    pub fn discipline(&self) -> Discipline {
        match self {
            Self::Stack(_)            => Discipline::Stack,
            Self::Queue(_)            => Discipline::Queue,
            Self::MaxPriorityQueue(_) => Discipline::MaxPriorityQueue,
            Self::MinPriorityQueue(_) => Discipline::MinPriorityQueue,
            Self::FifoDeque(_)        => Discipline::FifoDeque,
        }
    }

}

impl<SlotType: Ord> StructureTester<SlotType> for Tester<SlotType> {

    #[inline(always)]
    fn push(&mut self, element: SlotType) {
        dispatch!(self, tester => tester.push(element))
    }

    #[inline(always)]
    fn peek(&self) -> Option<&SlotType> {
        dispatch!(self, tester => tester.peek())
    }

    #[inline(always)]
    fn pop(&mut self) -> Option<SlotType> {
        dispatch!(self, tester => tester.pop())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        dispatch!(self, tester => tester.len())
    }

    fn reset(&mut self) {
        dispatch!(self, tester => tester.reset())
    }

    fn name(&self) -> &'static str {
        dispatch!(self, tester => tester.name())
    }

}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [testers](super) module

    use super::*;
    use super::super::test_commons;
    use std::str::FromStr;
    use strum::IntoEnumIterator;


    #[cfg_attr(not(doc),test)]
    fn basic_use_cases_for_every_discipline() {
        for discipline in Discipline::iter() {
            let mut tester = discipline.tester::<i32>();
            assert_eq!(tester.discipline(), discipline, "`Discipline::tester()` built a simulator for the wrong discipline");
            assert_eq!(tester.name(), discipline.name(), "Tester and discipline disagree on the reported name");
            test_commons::basic_tester_use_cases(discipline, &mut tester);
        }
    }

    #[cfg_attr(not(doc),test)]
    fn test_pop_always_advances() {
        for discipline in Discipline::iter() {
            let mut tester = discipline.tester::<i32>();
            test_commons::test_pop_use_cases(discipline, &mut tester);
        }
    }

    #[cfg_attr(not(doc),test)]
    fn reported_names() {
        let names: Vec<&str> = Discipline::iter().map(Discipline::name).collect();
        assert_eq!(names, vec!["stos", "kolejka", "kolejka priorytetowa", "kolejka priorytetowa min", "deque (FIFO)"]);
    }

    #[cfg_attr(not(doc),test)]
    fn configuration_ids() {
        for discipline in Discipline::iter() {
            assert_eq!(Discipline::from_str(discipline.id()), Ok(discipline), "id '{}' didn't parse back", discipline.id());
        }
        assert_eq!(Discipline::from_str("max-priority-queue"), Ok(Discipline::MaxPriorityQueue));
        assert_eq!(Discipline::from_str("fifo-deque"),         Ok(Discipline::FifoDeque));
        assert!(Discipline::from_str("heap").is_err(), "unknown disciplines should not parse");
    }

}
