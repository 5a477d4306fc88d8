//! Command parsing pipeline
//!
//! Converts a line of shell text into an `Action`:
//! line -> split_arguments -> parse_command -> Action

pub mod parser;

pub use parser::{parse_command, split_arguments, ParseError};
