//! Tests the [structure_identifier] library through its public API, using traces the
//! way they are presented by its users.

use structure_identifier::prelude::*;
use Operation::{Push, Pop};


#[ctor::ctor]
fn suite_setup() {
    simple_logger::SimpleLogger::new().with_utc_timestamps().init().unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));
}

/// Builds a trace by replaying `elements` through `discipline`: all of them are pushed, then all of them are popped
fn replay(discipline: Discipline, elements: &[i32]) -> Vec<Operation<i32>> {
    let mut simulator = discipline.tester::<i32>();
    let mut trace: Vec<Operation<i32>> = elements.iter().map(|&element| Push(element)).collect();
    for &element in elements {
        simulator.push(element);
    }
    while let Some(element) = simulator.pop() {
        trace.push(Pop(element));
    }
    trace
}

/// Ensures every discipline is identified by a trace only it could have produced, when it is the only one registered that matches
#[cfg_attr(not(doc),test)]
fn each_discipline_identifies_itself() {
    let elements = [4, 9, 1, 7, 3];
    for (discipline, rivals) in [
        (Discipline::Stack,            vec![Discipline::Queue, Discipline::MaxPriorityQueue, Discipline::MinPriorityQueue]),
        (Discipline::Queue,            vec![Discipline::Stack, Discipline::MaxPriorityQueue, Discipline::MinPriorityQueue]),
        (Discipline::MaxPriorityQueue, vec![Discipline::Stack, Discipline::Queue,            Discipline::MinPriorityQueue]),
        (Discipline::MinPriorityQueue, vec![Discipline::Stack, Discipline::Queue,            Discipline::MaxPriorityQueue]),
        (Discipline::FifoDeque,        vec![Discipline::Stack, Discipline::MaxPriorityQueue, Discipline::MinPriorityQueue]),
    ] {
        let mut identifier = StructureIdentifier::<i32>::with_structures(rivals.into_iter().chain([discipline]));
        assert_eq!(identifier.identify(&replay(discipline, &elements)), Identification::Identified(discipline.name()),
                   "'{}' was not identified by its own trace", discipline.id());
    }
}

/// Queue & FIFO deque behave the same, so they can never be told apart
#[cfg_attr(not(doc),test)]
fn queue_and_fifo_deque_are_indistinguishable() {
    let mut identifier = StructureIdentifier::<i32>::with_structures([Discipline::FifoDeque, Discipline::Queue]);
    let identification = identifier.identify(&replay(Discipline::Queue, &[4, 9, 1]));
    assert_eq!(identification, Identification::Uncertain(vec!["deque (FIFO)", "kolejka"]));
}

/// Interleaved pushes & pops, as a real structure would see them
#[cfg_attr(not(doc),test)]
fn interleaved_traces() {
    let mut identifier = full_identifier();
    let trace = [Push(1), Push(5), Pop(5), Push(3), Push(2), Pop(3), Push(4), Pop(4), Pop(2), Pop(1)];
    assert_eq!(identifier.identify(&trace), Identification::Identified("kolejka priorytetowa"));
    let trace = [Push(1), Push(5), Pop(5), Push(3), Push(2), Pop(2), Push(4), Pop(4), Pop(3), Pop(1)];
    assert_eq!(identifier.identify(&trace), Identification::Identified("stos"));
}

/// The same identifier is reused for many traces, as the command line does
#[cfg_attr(not(doc),test)]
fn batches_of_traces() {
    let input = "\
        6  1 1 1 2 1 3 2 3 2 2 2 1\n\
        6  1 1 1 2 1 3 2 1 2 2 2 3\n\
        2  1 1 2 2\n\
        4  1 2 1 1 2 1 2 2\n\
        7  1 2 1 5 1 1 1 3 2 5 1 4 2 4\n";
    let mut identifier = default_identifier();
    let mut output = Vec::new();
    let batches = identify_batches(input.as_bytes(), &mut identifier, |identification| {
        use std::io::Write;
        writeln!(output, "{identification}")
    }).expect("well formed input");
    assert_eq!(batches, 5);
    assert_eq!(String::from_utf8(output).expect("utf-8 output"),
               "brak pewnosci\nkolejka\nniemozliwe\nstos\nkolejka priorytetowa\n");
}

/// Ensures instrumented identifiers give the same verdicts as the uninstrumented ones
#[cfg_attr(not(doc),test)]
fn instrumented_identifiers() {
    const INSTRUMENTS: usize = Instruments::MetricsAndTracing.into();
    let mut instrumented = StructureIdentifier::<i32, INSTRUMENTS>::with_all_structures();
    let mut uninstrumented = full_identifier();
    let traces = [
        vec![Push(1), Push(2), Pop(2), Pop(1)],
        vec![Push(1), Pop(2)],
        vec![Pop(1)],
        vec![Push(3), Push(1), Pop(1), Push(2), Pop(2), Pop(3)],
    ];
    for trace in traces.iter() {
        assert_eq!(instrumented.identify(trace), uninstrumented.identify(trace), "Instrumentation changed the verdict for {:?}", trace);
    }
    let metrics = instrumented.metrics();
    assert_eq!(metrics.identifications, traces.len() as u64);
    assert_eq!(metrics.identified + metrics.uncertain + metrics.impossible, metrics.identifications);
    assert_eq!(metrics.invalid_operations, 1);
}
