use super::{Flow, Interpreter, Io};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

enum State {
    Prompting,
    Reading,
    Evaluating(String),
    Recovering(Error),
    Terminated(Flow),
}

impl<I: Io> Interpreter<I> {
    /// Read, interpret and acknowledge lines until input runs out or
    /// `bye` is executed.
    ///
    /// ` ok` is written on entry and after each successful line. A
    /// failed line prints `error: ...` instead and empties both stacks;
    /// the dictionary is kept. Channel failures are not recovered and end the loop with
    /// the error.
    pub fn quit(&mut self) -> Result<Flow> {
        let mut state = State::Prompting;
        loop {
            state = match state {
                State::Prompting => {
                    self.io.write(" ok\n")?;
                    State::Reading
                }
                State::Reading => match self.io.read()? {
                    Some(line) => State::Evaluating(line),
                    None => State::Terminated(Flow::Continue),
                },
                State::Evaluating(line) => match self.interpret(&line) {
                    Ok(Flow::Continue) => State::Prompting,
                    Ok(Flow::Exit) => State::Terminated(Flow::Exit),
                    Err(error) => State::Recovering(error),
                },
                State::Recovering(error) => {
                    if error.is_fatal() {
                        return Err(error);
                    }
                    tracing::debug!(%error, "recovering");
                    self.io.write_error(&format!("error: {}\n", error))?;
                    self.machine.reset();
                    State::Reading
                }
                State::Terminated(flow) => {
                    tracing::debug!(?flow, "quit");
                    return Ok(flow);
                }
            }
        }
    }
}
