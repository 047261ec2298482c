use crate::mach::Io;
use std::io::{BufRead, Write};

/// Plain standard input and output, for pipes and scripts.
pub struct StdIo {
    stdin: std::io::Stdin,
    stdout: std::io::Stdout,
}

impl StdIo {
    pub fn new() -> StdIo {
        StdIo {
            stdin: std::io::stdin(),
            stdout: std::io::stdout(),
        }
    }
}

impl Default for StdIo {
    fn default() -> Self {
        StdIo::new()
    }
}

impl Io for StdIo {
    fn write(&mut self, s: &str) -> std::io::Result<()> {
        let mut out = self.stdout.lock();
        out.write_all(s.as_bytes())?;
        out.flush()
    }

    fn read(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(|c| c == '\n' || c == '\r').len();
        line.truncate(len);
        Ok(Some(line))
    }
}
