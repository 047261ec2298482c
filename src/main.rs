//! # sm
//!
//! Interactive stack machine. Source files named on the command line
//! are loaded before the first prompt.

fn main() {
    stackmachine::term::main();
}
