//! Adapters turning the textual representation of traces into [Operation]s.
//!
//! A batch is written as its operations count followed by that many `<code> <value>` pairs,
//! all separated by whitespace. `code` is `1` for pushes and `2` for pops -- see [OP_PUSH](crate::types::OP_PUSH) & [OP_POP](crate::types::OP_POP).
//! Inputs may carry any number of batches, one after the other:
//! ```text
//! 4
//! 1 1  1 2  2 2  2 1
//! 2
//! 1 5  2 3
//! ```

use crate::{
    identifier::{Identification, StructureIdentifier},
    types::Operation,
};
use std::{
    collections::VecDeque,
    fmt::Debug,
    io::{self, BufRead},
    str::FromStr,
};
use log::warn;
use thiserror::Error;


/// Upper bound for the operations buffer reserved upfront -- the announced count comes from the input,
/// so it can't be trusted for allocations
const MAX_RESERVED_OPERATIONS: usize = 1024;


/// Reasons why a textual trace could not be turned into [Operation]s
#[derive(Debug, Error)]
pub enum InputError {
    /// The input ended before the announced number of operations could be read
    #[error("expected {expected} operations, but the input ended after {parsed}")]
    Truncated { expected: usize, parsed: usize },
    /// Something other than a number was found where a number was expected
    #[error("'{token}' is not a valid {what}")]
    InvalidToken { token: String, what: &'static str },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}


/// Whitespace separated tokens pulled out of a [BufRead], one line at a time -- so batches
/// may be identified as soon as their last line arrives, without waiting for the end of the input.\
/// Tokens that are not valid UTF-8 are kept (lossily converted), to be rejected when parsed.
pub struct TokenReader<Reader: BufRead> {
    reader:  Reader,
    line:    Vec<u8>,
    pending: VecDeque<String>,
}

impl<Reader: BufRead> TokenReader<Reader> {

    pub fn new(reader: Reader) -> Self {
        Self {
            reader,
            line:    Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// The next token -- or `None` if the input is over
    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token))
            }
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None)
            }
            self.pending.extend(self.line
                .split(|byte| byte.is_ascii_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| String::from_utf8_lossy(token).into_owned()));
        }
    }

}


/// Reads `count` operations -- as `<code> <value>` pairs -- from `tokens`, consuming nothing past them.\
/// Pairs with unknown operation codes are skipped, but still count towards `count`.
pub fn parse_operations<'t, SlotType: FromStr>(tokens: &mut impl Iterator<Item=&'t str>, count: usize) -> Result<Vec<Operation<SlotType>>, InputError> {
    parse_operations_with(|| Ok(tokens.next()), count)
}

/// Identifies every batch in `reader`, handing each [Identification] -- in input order -- to `on_identification`
/// as soon as the batch is read.\
/// Reading stops when the input is exhausted. Returns how many batches were identified.
pub fn identify_batches<SlotType:          Ord + Clone + Debug + FromStr,
                        const INSTRUMENTS: usize>
                       (reader:                impl BufRead,
                        identifier:            &mut StructureIdentifier<SlotType, INSTRUMENTS>,
                        mut on_identification: impl FnMut(Identification) -> io::Result<()>)
                       -> Result<usize, InputError> {

    let mut tokens = TokenReader::new(reader);
    let mut batches = 0;
    while let Some(count_token) = tokens.next_token()? {
        let count = parse_token::<usize>(&count_token, "operations count")?;
        let operations = parse_operations_with(|| tokens.next_token(), count)?;
        on_identification(identifier.identify(&operations))?;
        batches += 1;
    }
    Ok(batches)
}

/// Common ground for [parse_operations()] & [identify_batches()]: `next_token` yields `Ok(None)` when the input is over
fn parse_operations_with<SlotType: FromStr,
                         Token:    AsRef<str>>
                        (mut next_token: impl FnMut() -> Result<Option<Token>, InputError>,
                         count:          usize)
                        -> Result<Vec<Operation<SlotType>>, InputError> {

    let mut operations = Vec::with_capacity(count.min(MAX_RESERVED_OPERATIONS));
    for parsed in 0..count {
        let truncated = || InputError::Truncated { expected: count, parsed };
        let code = parse_token::<i32>(next_token()?.ok_or_else(truncated)?.as_ref(), "operation code")?;
        let value = parse_token::<SlotType>(next_token()?.ok_or_else(truncated)?.as_ref(), "value")?;
        match Operation::from_code(code, value) {
            Some(operation) => operations.push(operation),
            None => warn!("Skipping operation #{} of the batch: unknown operation code {code}", parsed+1),
        }
    }
    Ok(operations)
}

fn parse_token<T: FromStr>(token: &str, what: &'static str) -> Result<T, InputError> {
    token.parse()
        .map_err(|_| InputError::InvalidToken { token: token.to_string(), what })
}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [input](super) module

    use super::*;
    use crate::identifier::default_identifier;
    use Operation::{Push, Pop};


    #[cfg_attr(not(doc),test)]
    fn well_formed_batch() {
        let mut tokens = "1 10\n1 -3\t2 10 2 -3".split_whitespace();
        let operations: Vec<Operation<i64>> = parse_operations(&mut tokens, 4).expect("well formed input");
        assert_eq!(operations, vec![Push(10), Push(-3), Pop(10), Pop(-3)]);
        assert_eq!(tokens.next(), None);
    }

    #[cfg_attr(not(doc),test)]
    fn unknown_codes_are_skipped() {
        let mut tokens = "1 4 3 9 2 4".split_whitespace();
        let operations: Vec<Operation<i32>> = parse_operations(&mut tokens, 3).expect("unknown codes are not errors");
        assert_eq!(operations, vec![Push(4), Pop(4)], "The pair with code 3 should have been skipped");
    }

    #[cfg_attr(not(doc),test)]
    fn malformed_batches() {
        let mut tokens = "1 4 2".split_whitespace();
        match parse_operations::<i32>(&mut tokens, 2) {
            Err(InputError::Truncated { expected: 2, parsed: 1 }) => (),   // test passed
            other => panic!("Truncated input not reported correctly: {:?}", other),
        }
        let mut tokens = "1 four".split_whitespace();
        match parse_operations::<i32>(&mut tokens, 1) {
            Err(InputError::InvalidToken { token, what: "value" }) => assert_eq!(token, "four"),
            other => panic!("Invalid value not reported correctly: {:?}", other),
        }
        let mut tokens = "push 4".split_whitespace();
        match parse_operations::<i32>(&mut tokens, 1) {
            Err(InputError::InvalidToken { token, what: "operation code" }) => assert_eq!(token, "push"),
            other => panic!("Invalid operation code not reported correctly: {:?}", other),
        }
    }

    #[cfg_attr(not(doc),test)]
    fn multiple_batches() {
        let input = "4\n1 1 1 2 2 2 2 1\n4\n1 1 1 2 2 1 2 2\n2\n1 5 2 3\n1\n2 1\n0\n";
        let mut identifier = default_identifier();
        let mut messages = Vec::new();
        let batches = identify_batches(input.as_bytes(), &mut identifier, |identification| {
            messages.push(identification.to_string());
            Ok(())
        }).expect("well formed input");
        assert_eq!(batches, 5);
        assert_eq!(messages, vec!["brak pewnosci", "kolejka", "niemozliwe", "niemozliwe", "brak pewnosci"]);
    }

    #[cfg_attr(not(doc),test)]
    fn malformed_batch_count() {
        let mut identifier = default_identifier();
        let result = identify_batches("2 1 1 2 1 x".as_bytes(), &mut identifier, |_| Ok(()));
        assert!(matches!(result, Err(InputError::InvalidToken { what: "operations count", .. })), "got {:?}", result);
    }

    /// huge announced counts must be reported as truncated inputs rather than reserved upfront
    #[cfg_attr(not(doc),test)]
    fn huge_operations_count() {
        let mut tokens = "1 1 2 1".split_whitespace();
        match parse_operations::<i32>(&mut tokens, 1 << 40) {
            Err(InputError::Truncated { expected, parsed: 2 }) => assert_eq!(expected, 1 << 40),
            other => panic!("Huge count not reported as truncated: {:?}", other),
        }
        let mut identifier = default_identifier();
        let result = identify_batches(format!("{} 1 1 2 1", usize::MAX >> 3).as_bytes(), &mut identifier, |_| Ok(()));
        assert!(matches!(result, Err(InputError::Truncated { parsed: 2, .. })), "got {:?}", result);
    }

    /// verdicts must be delivered as soon as their batch is read, before any later input failure
    #[cfg_attr(not(doc),test)]
    fn verdicts_precede_later_failures() {
        struct FailingReader;
        impl io::Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "input went away"))
            }
        }
        let reader = io::BufReader::new(io::Read::chain("4\n1 1 1 2 2 1 2 2\n".as_bytes(), FailingReader));
        let mut identifier = default_identifier();
        let mut messages = Vec::new();
        let result = identify_batches(reader, &mut identifier, |identification| {
            messages.push(identification.to_string());
            Ok(())
        });
        assert_eq!(messages, vec!["kolejka"], "The first batch should have been identified before the read error");
        assert!(matches!(result, Err(InputError::Io(_))), "got {:?}", result);

        let mut input = b"2\n1 7 2 7\n1\n1 ".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut messages = Vec::new();
        let result = identify_batches(input.as_slice(), &mut identifier, |identification| {
            messages.push(identification.to_string());
            Ok(())
        });
        assert_eq!(messages, vec!["brak pewnosci"], "Batches before the non UTF-8 bytes should still be identified");
        assert!(matches!(result, Err(InputError::InvalidToken { what: "value", .. })), "got {:?}", result);
    }

    #[cfg_attr(not(doc),test)]
    fn tokens_across_lines() {
        let mut tokens = TokenReader::new(" 3\t1 \n\n  2 7\n".as_bytes());
        let mut read = Vec::new();
        while let Some(token) = tokens.next_token().expect("in-memory reads don't fail") {
            read.push(token);
        }
        assert_eq!(read, vec!["3", "1", "2", "7"]);
    }

}
