//! # Stack Machine
//!
//! A small Forth-family machine: two bounded stacks of tagged values, a
//! case-insensitive dictionary of words and an interpreter that runs
//! each word as soon as it reads it.
//!
//! Install with `cargo install stack-machine` and run `sm`. Type words,
//! press ENTER, and the machine answers `ok`.
//! ```text
//! 2 3 + .
//! 5  ok
//! ```
//!
//! The interpreter can be embedded. It talks to the outside world only
//! through an [`Io`](mach::Io) channel handed to it at construction.
//! ```
//! use stackmachine::mach::{Buffer, Interpreter, Val};
//!
//! let mut forth = Interpreter::new(Buffer::default());
//! forth.define_primitive("square", |m| {
//!     m.dup()?;
//!     m.multiply()
//! });
//! forth.interpret("7 SQUARE").unwrap();
//! assert_eq!(forth.machine().elements(), &[Val::Integer(49)]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
pub mod term;
