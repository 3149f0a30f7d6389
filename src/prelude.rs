//! Set of re-exported types & functions to allow clients to use this lib.

pub use crate::{
    types::{Operation, OP_PUSH, OP_POP},
    instruments::Instruments,
    testers::{Discipline, StructureTester, Tester},
    identifier::{
        StructureIdentifier, Identification, IdentifierMetrics,
        default_identifier, full_identifier,
        IMPOSSIBLE_MESSAGE, UNCERTAIN_MESSAGE,
    },
    input::{InputError, TokenReader, parse_operations, identify_batches},
};
