#![allow(dead_code)]
use stackmachine::mach::{Buffer, Interpreter, Val};

pub fn interpreter() -> Interpreter<Buffer> {
    Interpreter::new(Buffer::default())
}

/// Run `quit` over the lines and return everything it wrote.
pub fn run(lines: &[&str]) -> String {
    let mut forth = Interpreter::new(Buffer::new(lines));
    forth.quit().unwrap();
    forth.into_io().take_output()
}

/// Interpret one line and return what it printed.
pub fn exec(forth: &mut Interpreter<Buffer>, line: &str) -> String {
    forth.interpret(line).unwrap();
    forth.io_mut().take_output()
}

pub fn ints(forth: &Interpreter<Buffer>) -> Vec<i64> {
    forth
        .machine()
        .elements()
        .iter()
        .map(|v| match v {
            Val::Integer(n) => *n,
            other => panic!("not an integer: {}", other),
        })
        .collect()
}
