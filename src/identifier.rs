//! Resting place for the [StructureIdentifier] -- the engine that confronts an observed trace
//! with every registered [Discipline] simulator and tells which of them behave like it.

use crate::{
    instruments::Instruments,
    input::{self, InputError},
    testers::{Discipline, StructureTester, Tester},
    types::Operation,
};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};
use log::{info, trace};


/// Output for [StructureIdentifier::identify()] of a trace that no registered discipline could have produced
pub const IMPOSSIBLE_MESSAGE: &str = "niemozliwe";
/// Output for [StructureIdentifier::identify()] of a trace that more than one registered discipline could have produced
pub const UNCERTAIN_MESSAGE:  &str = "brak pewnosci";


/// The verdict on a trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identification {
    /// Either the trace pops from an empty structure or every registered discipline got falsified
    Impossible,
    /// More than one discipline is consistent with the trace -- their names are listed in registration order
    Uncertain(Vec<&'static str>),
    /// Exactly one discipline is consistent with the trace
    Identified(&'static str),
}

impl Identification {

    /// The textual form of this verdict: [IMPOSSIBLE_MESSAGE], [UNCERTAIN_MESSAGE] or the name of the identified discipline
    pub fn message(&self) -> &'static str {
        match self {
            Self::Impossible       => IMPOSSIBLE_MESSAGE,
            Self::Uncertain(_)     => UNCERTAIN_MESSAGE,
            Self::Identified(name) => *name,
        }
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, Self::Identified(_))
    }

    /// Names of the disciplines consistent with the trace, in registration order
    pub fn matching_structures(&self) -> &[&'static str] {
        match self {
            Self::Impossible        => &[],
            Self::Uncertain(names)  => names,
            Self::Identified(name)  => std::slice::from_ref(name),
        }
    }

}

impl Display for Identification {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}


/// Counters kept by a [StructureIdentifier] instrumented with [Instruments::metrics()]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentifierMetrics {
    /// how many times [StructureIdentifier::identify()] was called
    pub identifications:    u64,
    pub identified:         u64,
    pub uncertain:          u64,
    pub impossible:         u64,
    /// pops attempted while the reference tester was empty
    pub invalid_operations: u64,
    /// how many times a tester had its simulated removal disagreeing with the trace for the first time in an identification
    pub falsifications:     u64,
}


/// Feeds traces to every registered discipline simulator and reduces their verdicts into an [Identification].
///
/// Testers & their validity flags live side by side, in registration order -- which is also the order
/// names are reported in [Identification::Uncertain].\
/// `INSTRUMENTS` follows the *Zero-Cost Instrumentation Pattern* -- see [Instruments].
#[derive(Debug)]
pub struct StructureIdentifier<SlotType: Ord, const INSTRUMENTS: usize = 0> {
    testers: Vec<Tester<SlotType>>,
    /// `valid[i]` tells if `testers[i]` was consistent with the trace, so far
    valid:   Vec<bool>,
    metrics: IdentifierMetrics,
}

impl<SlotType: Ord + Clone + Debug, const INSTRUMENTS: usize> StructureIdentifier<SlotType, INSTRUMENTS> {

    /// Creates an identifier without any registered structures -- see [Self::register_structure()]
    pub fn new() -> Self {
        Self {
            testers: Vec::new(),
            valid:   Vec::new(),
            metrics: IdentifierMetrics::default(),
        }
    }

    /// Creates an identifier with the given `disciplines` registered, in order
    pub fn with_structures(disciplines: impl IntoIterator<Item=Discipline>) -> Self {
        let mut instance = Self::new();
        for discipline in disciplines {
            instance.register_structure(discipline);
        }
        instance
    }

    /// Stack, queue & max priority queue -- in this order
    pub fn with_default_structures() -> Self {
        Self::with_structures([Discipline::Stack, Discipline::Queue, Discipline::MaxPriorityQueue])
    }

    /// Every known [Discipline]: stack, queue, max priority queue, min priority queue & the FIFO deque -- in this order
    pub fn with_all_structures() -> Self {
        Self::with_structures([Discipline::Stack, Discipline::Queue, Discipline::MaxPriorityQueue, Discipline::MinPriorityQueue, Discipline::FifoDeque])
    }

    /// Adds a simulator for `discipline` to the ones the traces are confronted with.\
    /// Registration order is the reporting order for ambiguous identifications.
    pub fn register_structure(&mut self, discipline: Discipline) {
        self.testers.push(discipline.tester());
        self.valid.push(true);
    }

    /// Number of registered simulators
    pub fn tester_count(&self) -> usize {
        self.testers.len()
    }

    /// The registered disciplines, in registration order
    pub fn disciplines(&self) -> impl Iterator<Item=Discipline> + '_ {
        self.testers.iter().map(Tester::discipline)
    }

    /// The counters collected so far -- all zeroes unless `INSTRUMENTS` enables [Instruments::metrics()]
    pub fn metrics(&self) -> &IdentifierMetrics {
        &self.metrics
    }

    /// Tells which of the registered disciplines could have produced the given trace.\
    /// Every call starts from empty simulators, so results don't depend on previous calls.
    ///
    /// A pop attempted while the first registered tester is empty marks the whole trace as malformed,
    /// causing [Identification::Impossible] -- even if the rest of the trace is consistent with some discipline.
    pub fn identify<'o>(&mut self, operations: impl IntoIterator<Item=&'o Operation<SlotType>>) -> Identification
                       where SlotType: 'o {

        let start = Instruments::from(INSTRUMENTS).metrics_diagnostics().then(minstant::Instant::now);
        self.reset_all();

        let mut invalid_operation = false;
        let mut operations_count = 0usize;
        for operation in operations {
            operations_count += 1;
            match operation {
                Operation::Push(element) => self.push_all(element),
                Operation::Pop(expected) => {
                    // the first tester stands for all of them, as they all hold the same number of elements
                    let reference_is_empty = self.testers.first().map_or(true, |reference| reference.is_empty());
                    if reference_is_empty {
                        if Instruments::from(INSTRUMENTS).tracing() {
                            trace!("StructureIdentifier: operation #{operations_count} pops {expected:?} from an empty structure: the trace is impossible");
                        }
                        if Instruments::from(INSTRUMENTS).metrics() {
                            self.metrics.invalid_operations += 1;
                        }
                        invalid_operation = true;
                        continue;
                    }
                    self.test_pop_all(expected);
                },
            }
        }

        let identification = self.build_identification(invalid_operation);
        if Instruments::from(INSTRUMENTS).metrics() {
            self.metrics.identifications += 1;
            match identification {
                Identification::Impossible    => self.metrics.impossible += 1,
                Identification::Uncertain(_)  => self.metrics.uncertain  += 1,
                Identification::Identified(_) => self.metrics.identified += 1,
            }
        }
        if let Some(start) = start {
            info!("StructureIdentifier: {operations_count} operations confronted with {} structures in {:?}: {:?}",
                  self.testers.len(), start.elapsed(), identification);
        }
        identification
    }

    /// Parses `count` operations from `tokens` -- see [input::parse_operations()] -- then [identifies](Self::identify()) them
    pub fn identify_from_tokens<'t>(&mut self, tokens: &mut impl Iterator<Item=&'t str>, count: usize) -> Result<Identification, InputError>
                                   where SlotType: FromStr {
        let operations = input::parse_operations(tokens, count)?;
        Ok(self.identify(&operations))
    }

    fn reset_all(&mut self) {
        for tester in self.testers.iter_mut() {
            tester.reset();
        }
        self.valid.fill(true);
    }

    /// Every tester receives the element -- falsified ones included -- so all of them remain in lockstep with the trace
    fn push_all(&mut self, element: &SlotType) {
        if Instruments::from(INSTRUMENTS).tracing() {
            trace!("StructureIdentifier: PUSH {element:?} to {} testers", self.testers.len());
        }
        for tester in self.testers.iter_mut() {
            tester.push(element.clone());
        }
    }

    fn test_pop_all(&mut self, expected: &SlotType) {
        if Instruments::from(INSTRUMENTS).tracing() {
            trace!("StructureIdentifier: POP {expected:?} from {} testers", self.testers.len());
        }
        for (tester, valid) in self.testers.iter_mut().zip(self.valid.iter_mut()) {
            if !tester.test_pop(expected) && *valid {
                *valid = false;
                if Instruments::from(INSTRUMENTS).metrics() {
                    self.metrics.falsifications += 1;
                }
                if Instruments::from(INSTRUMENTS).tracing() {
                    trace!("StructureIdentifier: '{}' falsified by POP {expected:?}", tester.name());
                }
            }
        }
    }

    fn build_identification(&self, invalid_operation: bool) -> Identification {
        let mut matches: Vec<&'static str> = self.testers.iter()
            .zip(self.valid.iter())
            .filter(|(_tester, valid)| **valid)
            .map(|(tester, _valid)| tester.name())
            .collect();
        if invalid_operation || matches.is_empty() {
            Identification::Impossible
        } else if matches.len() > 1 {
            Identification::Uncertain(matches)
        } else {
            Identification::Identified(matches.remove(0))
        }
    }

}

impl<SlotType: Ord + Clone + Debug, const INSTRUMENTS: usize> Default for StructureIdentifier<SlotType, INSTRUMENTS> {
    fn default() -> Self {
        Self::new()
    }
}


/// Uninstrumented identifier for stacks, queues & max priority queues -- registered in this order
pub fn default_identifier() -> StructureIdentifier<i32> {
    StructureIdentifier::with_default_structures()
}

/// Uninstrumented identifier for every known [Discipline] -- see [StructureIdentifier::with_all_structures()]
pub fn full_identifier() -> StructureIdentifier<i32> {
    StructureIdentifier::with_all_structures()
}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [identifier](super) module

    use super::*;
    use Operation::{Push, Pop};


    #[ctor::ctor]
    fn suite_setup() {
        simple_logger::SimpleLogger::new().with_utc_timestamps().init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));
    }

    const STACK:       &str = "stos";
    const QUEUE:       &str = "kolejka";
    const MAX_PQ:      &str = "kolejka priorytetowa";
    const MIN_PQ:      &str = "kolejka priorytetowa min";
    const FIFO_DEQUE:  &str = "deque (FIFO)";


    #[cfg_attr(not(doc),test)]
    fn registration() {
        let identifier = default_identifier();
        assert_eq!(identifier.tester_count(), 3, "Default identifier should have stack, queue & max priority queue");
        assert_eq!(identifier.disciplines().collect::<Vec<_>>(),
                   vec![Discipline::Stack, Discipline::Queue, Discipline::MaxPriorityQueue],
                   "Registration order was not preserved");
        assert_eq!(identifier.valid.len(), identifier.tester_count(), "Every tester must have a validity flag");
        assert_eq!(full_identifier().tester_count(), 5, "Full identifier should have all disciplines");
        assert_eq!(StructureIdentifier::<u8>::new().tester_count(), 0);
    }

    #[cfg_attr(not(doc),test)]
    fn lifo_trace() {
        let mut identifier = StructureIdentifier::<i32>::with_structures([Discipline::Stack, Discipline::Queue]);
        let identification = identifier.identify(&[Push(1), Push(2), Pop(2), Pop(1)]);
        assert_eq!(identification, Identification::Identified(STACK));
        assert!(identification.is_identified());
        assert_eq!(identification.to_string(), STACK);
    }

    #[cfg_attr(not(doc),test)]
    fn ambiguity_is_detected_rather_than_first_match_wins() {
        let mut identifier = default_identifier();
        let identification = identifier.identify(&[Push(1), Push(2), Pop(2), Pop(1)]);
        assert_eq!(identification, Identification::Uncertain(vec![STACK, MAX_PQ]),
                   "Both the stack & the max priority queue pop 2 then 1");
        assert!(!identification.is_identified());
        assert_eq!(identification.message(), UNCERTAIN_MESSAGE);
        assert_eq!(identification.matching_structures(), &[STACK, MAX_PQ]);
    }

    #[cfg_attr(not(doc),test)]
    fn fifo_trace() {
        let mut identifier = default_identifier();
        let identification = identifier.identify(&[Push(1), Push(2), Pop(1), Pop(2)]);
        assert_eq!(identification, Identification::Identified(QUEUE));
        assert_eq!(identification.matching_structures(), &[QUEUE]);
    }

    #[cfg_attr(not(doc),test)]
    fn priority_traces() {
        let mut identifier = full_identifier();
        assert_eq!(identifier.identify(&[Push(3), Push(1), Push(2), Pop(1), Pop(2), Pop(3)]),
                   Identification::Identified(MIN_PQ));
        assert_eq!(identifier.identify(&[Push(1), Push(3), Push(2), Pop(3), Pop(2), Pop(1)]),
                   Identification::Identified(MAX_PQ));
        assert_eq!(identifier.identify(&[Push(1), Push(2), Pop(1), Pop(2)]),
                   Identification::Uncertain(vec![QUEUE, MIN_PQ, FIFO_DEQUE]),
                   "Ambiguous disciplines must be listed in registration order");
    }

    #[cfg_attr(not(doc),test)]
    fn inconsistent_with_every_discipline() {
        let mut identifier = full_identifier();
        let identification = identifier.identify(&[Push(5), Pop(3)]);
        assert_eq!(identification, Identification::Impossible);
        assert_eq!(identification.to_string(), IMPOSSIBLE_MESSAGE);
        assert!(identification.matching_structures().is_empty());
    }

    #[cfg_attr(not(doc),test)]
    fn pop_from_empty() {
        let mut identifier = default_identifier();
        assert_eq!(identifier.identify(&[Pop(1)]), Identification::Impossible, "Popping from nothing is a malformed trace");
        // even when the rest of the trace points to a single discipline
        assert_eq!(identifier.identify(&[Push(1), Push(2), Pop(1), Pop(2), Pop(7), Push(3), Pop(3)]),
                   Identification::Impossible,
                   "A single pop from an empty structure must doom the whole trace");
    }

    #[cfg_attr(not(doc),test)]
    fn empty_trace() {
        let no_operations: [Operation<i32>; 0] = [];
        let mut identifier = full_identifier();
        assert_eq!(identifier.identify(&no_operations), Identification::Uncertain(vec![STACK, QUEUE, MAX_PQ, MIN_PQ, FIFO_DEQUE]),
                   "Every discipline trivially matches an empty trace");
        let mut identifier = StructureIdentifier::<i32>::with_structures([Discipline::Queue]);
        assert_eq!(identifier.identify(&no_operations), Identification::Identified(QUEUE));
    }

    #[cfg_attr(not(doc),test)]
    fn no_registered_structures() {
        let no_operations: [Operation<i32>; 0] = [];
        let mut identifier = StructureIdentifier::<i32>::new();
        assert_eq!(identifier.identify(&no_operations),      Identification::Impossible);
        assert_eq!(identifier.identify(&[Push(1)]),          Identification::Impossible);
        assert_eq!(identifier.identify(&[Push(1), Pop(1)]),  Identification::Impossible);
    }

    #[cfg_attr(not(doc),test)]
    fn falsified_testers_stay_in_lockstep() {
        let mut identifier = full_identifier();
        // the stack gets falsified on the first pop, yet keeps receiving elements
        let identification = identifier.identify(&[Push(1), Push(2), Pop(1), Push(3), Push(4), Pop(2)]);
        assert_eq!(identification, Identification::Uncertain(vec![QUEUE, MIN_PQ, FIFO_DEQUE]));
        assert_eq!(identifier.valid, vec![false, true, false, true, true]);
        for tester in identifier.testers.iter() {
            assert_eq!(tester.len(), 2, "'{}' tester is out of sync with the trace", tester.name());
        }
    }

    #[cfg_attr(not(doc),test)]
    fn identifications_are_independent() {
        let mut identifier = default_identifier();
        let trace = [Push(1), Push(2), Pop(1), Pop(2)];
        let first = identifier.identify(&trace);
        // leaves elements behind & falsifies everything
        assert_eq!(identifier.identify(&[Push(9), Push(8), Push(7), Pop(1)]), Identification::Impossible);
        assert_eq!(identifier.identify(&trace), first, "A previous identification leaked state into the next one");
        assert_eq!(identifier.identify(&trace), first, "Identifying the same trace twice should yield the same result");
    }

    #[cfg_attr(not(doc),test)]
    fn generic_slot_types() {
        let mut identifier = StructureIdentifier::<String>::with_default_structures();
        let trace: Vec<Operation<String>> = vec![Push("b".into()), Push("a".into()), Push("c".into()), Pop("c".into()), Pop("b".into())];
        assert_eq!(identifier.identify(&trace), Identification::Identified(MAX_PQ));
    }

    #[cfg_attr(not(doc),test)]
    fn metrics() {
        const INSTRUMENTS: usize = Instruments::MetricsAndTracing.into();
        let mut identifier = StructureIdentifier::<i32, INSTRUMENTS>::with_default_structures();
        identifier.identify(&[Push(1), Push(2), Pop(2), Pop(1)]);   // uncertain: stack & max pq
        identifier.identify(&[Push(1), Push(2), Pop(1), Pop(2)]);   // identified: queue
        identifier.identify(&[Pop(1), Pop(2)]);                     // impossible: 2 invalid operations
        assert_eq!(identifier.metrics(), &IdentifierMetrics {
            identifications:    3,
            identified:         1,
            uncertain:          1,
            impossible:         1,
            invalid_operations: 2,
            falsifications:     3,
        });

        let mut uninstrumented = default_identifier();
        uninstrumented.identify(&[Push(1), Pop(1)]);
        assert_eq!(uninstrumented.metrics(), &IdentifierMetrics::default(), "Uninstrumented identifiers should not count anything");
    }

    #[cfg_attr(not(doc),test)]
    fn identify_from_tokens() {
        let mut identifier = default_identifier();
        let mut tokens = "1 5 1 7 2 7 2 5   1 1".split_whitespace();
        assert_eq!(identifier.identify_from_tokens(&mut tokens, 4).expect("well formed input"), Identification::Uncertain(vec![STACK, MAX_PQ]));
        assert_eq!(tokens.next(), Some("1"), "Only the requested operations should have been consumed");
        let mut truncated = "1 5 2".split_whitespace();
        assert!(identifier.identify_from_tokens(&mut truncated, 2).is_err(), "A truncated batch should not be identified");
    }

}
