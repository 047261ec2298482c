use crate::mach::{Buffer, Interpreter};

mod builtin_test;

fn interpreter() -> Interpreter<Buffer> {
    Interpreter::new(Buffer::default())
}

fn run(lines: &[&str]) -> String {
    let mut forth = Interpreter::new(Buffer::new(lines));
    forth.quit().unwrap();
    forth.into_io().take_output()
}
