/*!
## Rust Terminal Module

The `sm` program: channels for a terminal or a pipe, loading source
files, and the session that ties them to an interpreter.

*/

use crate::error;
use crate::lang::Error;
use crate::mach::{Flow, Interpreter, Io};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, IsTerminal};
use std::sync::Once;

mod linefeed;
mod stdio;

pub use self::linefeed::LineEditor;
pub use self::stdio::StdIo;

const BANNER: &str = "Stack Machine\nType BYE or CTRL-D to exit.\n";

static TRACING_INIT: Once = Once::new();

/// Send `tracing` output to stderr when `RUST_LOG` is set,
/// e.g. `RUST_LOG=stackmachine=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}

pub fn main() {
    init_tracing();
    let files: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = main_loop(&files) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

fn main_loop(files: &[String]) -> Result<(), Error> {
    if std::io::stdin().is_terminal() {
        let interpreter = Interpreter::new(LineEditor::new()?);
        session(interpreter, files, true)
    } else {
        session(Interpreter::new(StdIo::new()), files, false)
    }
}

/// Load each file, then hand the channel to `quit`. A failing file is
/// reported and skipped; `bye` in a file ends the session.
pub fn session<I: Io>(
    mut interpreter: Interpreter<I>,
    files: &[String],
    banner: bool,
) -> Result<(), Error> {
    for filename in files {
        match load(&mut interpreter, filename) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(error) if error.is_fatal() => return Err(error),
            Err(error) => {
                interpreter
                    .io_mut()
                    .write_error(&format!("error: {}\n", error))?;
                interpreter.machine_mut().reset();
            }
        }
    }
    if banner {
        interpreter.io_mut().write(BANNER)?;
    }
    let flow = interpreter.quit()?;
    tracing::debug!(?flow, "session over");
    Ok(())
}

/// Interpret a source file line by line, stopping at the first error.
pub fn load<I: Io>(interpreter: &mut Interpreter<I>, filename: &str) -> Result<Flow, Error> {
    let reader = match File::open(filename) {
        Ok(file) => BufReader::new(file),
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Err(error!(FileNotFound; filename)),
            _ => return Err(error.into()),
        },
    };
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match interpreter.interpret(&line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(Flow::Exit),
            Err(error) => {
                let context = format!("in line {} of {}", index + 1, filename);
                return Err(error.in_context(&context));
            }
        }
    }
    tracing::debug!(filename, "loaded");
    Ok(Flow::Continue)
}
