//! Common types across this crate


/// The numeric code for [Operation::Push], as used by the external representation of traces
pub const OP_PUSH: i32 = 1;
/// The numeric code for [Operation::Pop], as used by the external representation of traces
pub const OP_POP:  i32 = 2;


/// One entry of a trace: either something was inserted into the data structure
/// or something was taken out of it -- with the value the caller claims was removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation<SlotType> {
    Push(SlotType),
    Pop(SlotType),
}

impl<SlotType> Operation<SlotType> {

    /// Builds an operation from its external `(code, value)` representation -- see [OP_PUSH] & [OP_POP].\
    /// Returns `None` for unknown codes.
    pub fn from_code(code: i32, value: SlotType) -> Option<Self> {
        match code {
            OP_PUSH => Some(Self::Push(value)),
            OP_POP  => Some(Self::Pop(value)),
            _       => None,
        }
    }

    /// The external code for this operation
    pub fn code(&self) -> i32 {
        match self {
            Self::Push(_) => OP_PUSH,
            Self::Pop(_)  => OP_POP,
        }
    }

    /// The value pushed or, for pops, the value the trace claims was removed
    pub fn value(&self) -> &SlotType {
        match self {
            Self::Push(value) | Self::Pop(value) => value,
        }
    }

}


#[cfg(any(test,doc))]
mod tests {

    //! Unit tests for [types](super) module

    use super::*;


    #[cfg_attr(not(doc),test)]
    fn external_codes() {
        assert_eq!(Operation::from_code(1, 7), Some(Operation::Push(7)), "code 1 is a push");
        assert_eq!(Operation::from_code(2, 7), Some(Operation::Pop(7)),  "code 2 is a pop");
        assert_eq!(Operation::from_code(3, 7), None,                    "unknown codes should be rejected");
        assert_eq!(Operation::Push(9).code(), OP_PUSH);
        assert_eq!(Operation::Pop(9).code(),  OP_POP);
        assert_eq!(*Operation::Pop(9).value(), 9);
    }

}
