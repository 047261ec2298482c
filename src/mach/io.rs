use std::collections::VecDeque;

/// ## Line channel
///
/// Where the interpreter writes output and, inside `quit`, reads lines.
/// `read` returning `None` is end of input.

pub trait Io {
    fn write(&mut self, s: &str) -> std::io::Result<()>;

    fn read(&mut self) -> std::io::Result<Option<String>>;

    /// Used for `error:` lines so a terminal can set them apart.
    fn write_error(&mut self, s: &str) -> std::io::Result<()> {
        self.write(s)
    }
}

impl<T: Io + ?Sized> Io for &mut T {
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        (**self).write(s)
    }
    fn read(&mut self) -> std::io::Result<Option<String>> {
        (**self).read()
    }
    fn write_error(&mut self, s: &str) -> std::io::Result<()> {
        (**self).write_error(s)
    }
}

impl<T: Io + ?Sized> Io for Box<T> {
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        (**self).write(s)
    }
    fn read(&mut self) -> std::io::Result<Option<String>> {
        (**self).read()
    }
    fn write_error(&mut self, s: &str) -> std::io::Result<()> {
        (**self).write_error(s)
    }
}

/// In-memory channel: scripted input lines, collected output.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    input: VecDeque<String>,
    output: String,
}

impl Buffer {
    pub fn new(lines: &[&str]) -> Buffer {
        Buffer {
            input: lines.iter().map(|s| s.to_string()).collect(),
            output: String::new(),
        }
    }
    pub fn push_line(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }
    pub fn output(&self) -> &str {
        &self.output
    }
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }
}

impl Io for Buffer {
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        self.output.push_str(s);
        Ok(())
    }
    fn read(&mut self) -> std::io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }
}
