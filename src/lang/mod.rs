/*!
# Rust Language Module

This Rust module provides the text side of the stack machine: errors,
the byte cursor that splits input lines into words, and the
classification of words into integer literals and dictionary names.

*/

#[macro_use]
mod error;
pub mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{is_int_literal, Cursor};
pub use token::Token;
