/*!
## Rust Machine Module

This Rust module is the stack machine and its interpreter.

*/

/// Index of a cell in the machine's memory arena.
pub type Address = usize;

mod builtin;
mod dictionary;
mod interpreter;
mod io;
mod machine;
mod memory;
mod operation;
mod repl;
mod stack;
mod val;
mod word;

#[cfg(test)]
mod tests;

pub use builtin::Builtin;
pub use dictionary::Dictionary;
pub use interpreter::Interpreter;
pub use io::{Buffer, Io};
pub use machine::Machine;
pub use memory::Memory;
pub use operation::Operation;
pub use stack::{Stack, DEFAULT_CAPACITY};
pub use val::Val;
pub use word::{Flow, Primitive, WordEntry, Xt};
