#![doc = include_str!("../README.md")]

pub mod testers;
pub mod identifier;
pub mod input;
pub mod prelude;

mod types;
mod instruments;

#[cfg(any(test,doc))]
mod test_commons;
