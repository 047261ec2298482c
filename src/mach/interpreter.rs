use super::{Builtin, Dictionary, Flow, Io, Machine, Primitive, Val, WordEntry, Xt};
use crate::error;
use crate::lang::lex::SPACE;
use crate::lang::{Cursor, Error, Token};

type Result<T> = std::result::Result<T, Error>;

/// ## Outer interpreter
///
/// Splits a line into words and runs each one as soon as it is read.
/// Integer literals are pushed, anything else is looked up in the
/// dictionary. There is no compile state.
///
/// ```
/// use stackmachine::mach::{Buffer, Interpreter};
///
/// let mut forth = Interpreter::new(Buffer::default());
/// forth.interpret("3 4 + .").unwrap();
/// assert_eq!(forth.io().output(), "7 ");
/// ```

pub struct Interpreter<I: Io> {
    pub(super) machine: Machine,
    pub(super) dictionary: Dictionary,
    pub(super) input: Cursor,
    pub(super) io: I,
}

impl<I: Io> Interpreter<I> {
    pub fn new(io: I) -> Interpreter<I> {
        Interpreter::with_machine(io, Machine::new())
    }

    /// Both stacks hold at most `capacity` cells.
    pub fn with_capacity(io: I, capacity: usize) -> Interpreter<I> {
        Interpreter::with_machine(io, Machine::with_capacity(capacity))
    }

    fn with_machine(io: I, machine: Machine) -> Interpreter<I> {
        let mut interpreter = Interpreter {
            machine,
            dictionary: Dictionary::new(),
            input: Cursor::default(),
            io,
        };
        interpreter.define_words();
        interpreter
    }

    fn define_words(&mut self) {
        for builtin in Builtin::ALL.iter() {
            self.dictionary.define(builtin.name(), Xt::Builtin(*builtin), false);
        }
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    pub fn machine_mut(&mut self) -> &mut Machine {
        &mut self.machine
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn io(&self) -> &I {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut I {
        &mut self.io
    }

    pub fn into_io(self) -> I {
        self.io
    }

    /// Add or replace a word whose behaviour is Rust code acting on the
    /// machine.
    pub fn define_primitive<F>(&mut self, name: &str, code: F)
    where
        F: Fn(&mut Machine) -> Result<()> + 'static,
    {
        tracing::debug!(name, "define primitive");
        let primitive = Primitive::new(name, code);
        self.dictionary.define(name, Xt::Primitive(primitive), false);
    }

    pub fn find_word(&self, name: &str) -> Option<&WordEntry> {
        self.dictionary.find(name)
    }

    pub fn execute_word(&mut self, name: &str) -> Result<Flow> {
        let xt = match self.dictionary.find(name) {
            Some(entry) => entry.xt.clone(),
            None => return Err(error!(UndefinedWord; name)),
        };
        self.execute(&xt)
    }

    pub fn execute(&mut self, xt: &Xt) -> Result<Flow> {
        match xt {
            Xt::Builtin(builtin) => self.run_builtin(*builtin),
            Xt::Primitive(primitive) => {
                primitive.call(&mut self.machine)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Next word of the line being interpreted.
    pub fn read_word(&mut self, delimiter: u8) -> Option<String> {
        self.input.read_word(delimiter)
    }

    /// Run one line. The caller's input position is restored afterwards,
    /// so this nests under `evaluate`. Each level holds a return stack
    /// cell, which bounds the nesting.
    pub fn interpret(&mut self, text: &str) -> Result<Flow> {
        let depth = self.machine.nest()?;
        let saved = std::mem::replace(&mut self.input, Cursor::new(text));
        let result = self.interpret_input_buffer();
        self.input = saved;
        self.machine.unnest(depth);
        result
    }

    fn interpret_input_buffer(&mut self) -> Result<Flow> {
        while let Some(word) = self.read_word(SPACE) {
            tracing::trace!(word = word.as_str(), "interpret");
            let flow = match Token::classify(&word)? {
                Token::Integer(n) => {
                    self.machine.push(Val::Integer(n))?;
                    Flow::Continue
                }
                Token::Word(name) => self.execute_word(&name)?,
            };
            if flow == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}
