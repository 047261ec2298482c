use super::{Flow, Interpreter, Io, Val, Xt};
use crate::error;
use crate::lang::lex::{DQUOTE, SPACE};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// `ior` left by `allocate` when the arena is exhausted.
const ALLOCATE_FAILED: i64 = -59;

/// ## Words the interpreter provides
///
/// Each runs with the whole interpreter in hand, so unlike a
/// [`Primitive`](super::Primitive) it may parse input, write output
/// or consult the dictionary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    // *** Stack manipulation
    Depth,
    Dup,
    Drop,
    Swap,
    Over,
    Pick,

    // *** Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // *** Memory
    Store,
    Fetch,
    Allocate,
    CellPlus,

    // *** Dictionary and execution
    Find,
    Tick,
    Execute,
    Evaluate,
    Quit,
    Bye,

    // *** Output
    Dot,
    DotS,
    DotQuote,
    Emit,
    Cr,
    Bl,
    Words,

    // *** Parsing
    SQuote,
}

impl Builtin {
    pub const ALL: [Builtin; 28] = [
        Builtin::Depth,
        Builtin::Dup,
        Builtin::Drop,
        Builtin::Swap,
        Builtin::Over,
        Builtin::Pick,
        Builtin::Plus,
        Builtin::Minus,
        Builtin::Star,
        Builtin::Slash,
        Builtin::Store,
        Builtin::Fetch,
        Builtin::Allocate,
        Builtin::CellPlus,
        Builtin::Find,
        Builtin::Tick,
        Builtin::Execute,
        Builtin::Evaluate,
        Builtin::Quit,
        Builtin::Bye,
        Builtin::Dot,
        Builtin::DotS,
        Builtin::DotQuote,
        Builtin::Emit,
        Builtin::Cr,
        Builtin::Bl,
        Builtin::Words,
        Builtin::SQuote,
    ];

    pub fn name(self) -> &'static str {
        use Builtin::*;
        match self {
            Depth => "depth",
            Dup => "dup",
            Drop => "drop",
            Swap => "swap",
            Over => "over",
            Pick => "pick",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Slash => "/",
            Store => "!",
            Fetch => "@",
            Allocate => "allocate",
            CellPlus => "cell+",
            Find => "find",
            Tick => "'",
            Execute => "execute",
            Evaluate => "evaluate",
            Quit => "quit",
            Bye => "bye",
            Dot => ".",
            DotS => ".s",
            DotQuote => ".\"",
            Emit => "emit",
            Cr => "cr",
            Bl => "bl",
            Words => "words",
            SQuote => "s\"",
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<I: Io> Interpreter<I> {
    pub(super) fn run_builtin(&mut self, builtin: Builtin) -> Result<Flow> {
        use Builtin::*;
        match builtin {
            Depth => self.machine.depth()?,
            Dup => self.machine.dup()?,
            Drop => self.machine.drop()?,
            Swap => self.machine.swap()?,
            Over => self.machine.over()?,
            Pick => self.machine.pick()?,
            Plus => self.machine.add()?,
            Minus => self.machine.subtract()?,
            Star => self.machine.multiply()?,
            Slash => self.machine.divide()?,
            Store => self.machine.store()?,
            Fetch => self.machine.fetch()?,
            Allocate => self.allocate()?,
            CellPlus => self.cell_plus()?,
            Find => self.find()?,
            Tick => self.tick()?,
            Execute => return self.execute_top(),
            Evaluate => return self.evaluate(),
            Quit => return self.quit(),
            Bye => return Ok(Flow::Exit),
            Dot => self.dot()?,
            DotS => self.dot_s()?,
            DotQuote => self.dot_quote()?,
            Emit => self.emit()?,
            Cr => self.io.write("\n")?,
            Bl => self.machine.push(Val::Integer(SPACE as i64))?,
            Words => self.words()?,
            SQuote => self.s_quote()?,
        }
        Ok(Flow::Continue)
    }

    /// ( u -- a-addr ior )
    fn allocate(&mut self) -> Result<()> {
        let count = match self.machine.pop()? {
            Val::Integer(n) if n < 0 => return Err(error!(OutOfRange; "allocate: {}", n)),
            Val::Integer(n) => n as usize,
            _ => return Err(error!(IntegerRequired; "allocate")),
        };
        match self.machine.allocate(count) {
            Ok(addr) => {
                self.machine.push(Val::Address(addr))?;
                self.machine.push(Val::Integer(0))
            }
            Err(_) => {
                self.machine.push(Val::Integer(0))?;
                self.machine.push(Val::Integer(ALLOCATE_FAILED))
            }
        }
    }

    /// ( a-addr1 -- a-addr2 )
    fn cell_plus(&mut self) -> Result<()> {
        match self.machine.top()? {
            Val::Address(addr) => {
                let next = addr + 1;
                self.machine.replace_top(Val::Address(next))
            }
            _ => Err(error!(AddressRequired; "cell+")),
        }
    }

    /// ( s -- s 0 | xt 1 | xt -1 )
    ///
    /// -1 for an ordinary word, 1 for an immediate one.
    fn find(&mut self) -> Result<()> {
        let name = match self.machine.top()? {
            Val::Text(s) => s.clone(),
            _ => return Err(error!(TextRequired; "find")),
        };
        match self.dictionary.find(&name) {
            Some(entry) => {
                let flag = if entry.immediate { 1 } else { -1 };
                let xt = entry.xt.clone();
                self.machine.replace_top(Val::Xt(xt))?;
                self.machine.push(Val::Integer(flag))
            }
            None => self.machine.push(Val::FALSE),
        }
    }

    /// ( "name" -- xt )
    fn tick(&mut self) -> Result<()> {
        let name = match self.read_word(SPACE) {
            Some(name) => name,
            None => return Err(error!(UndefinedWord; "' expects a name")),
        };
        let xt = match self.dictionary.find(&name) {
            Some(entry) => entry.xt.clone(),
            None => return Err(error!(UndefinedWord; &name)),
        };
        self.machine.push(Val::Xt(xt))
    }

    /// ( i*x xt -- j*x )
    fn execute_top(&mut self) -> Result<Flow> {
        match self.machine.pop()? {
            Val::Xt(xt) => self.execute(&xt),
            _ => Err(error!(XtRequired; "execute")),
        }
    }

    /// ( i*x s -- j*x )
    fn evaluate(&mut self) -> Result<Flow> {
        match self.machine.pop()? {
            Val::Text(text) => self.interpret(&text),
            _ => Err(error!(TextRequired; "evaluate")),
        }
    }

    /// ( x -- )
    fn dot(&mut self) -> Result<()> {
        let x = self.machine.pop()?;
        self.io.write(&format!("{} ", x))?;
        Ok(())
    }

    /// ( -- )
    fn dot_s(&mut self) -> Result<()> {
        let elements = self.machine.elements();
        let mut s = format!("<{}> ", elements.len());
        for x in elements {
            s.push_str(&format!("{} ", x));
        }
        self.io.write(&s)?;
        Ok(())
    }

    /// ( "ccc<quote>" -- )
    fn dot_quote(&mut self) -> Result<()> {
        let text = self.input.parse(DQUOTE);
        self.io.write(&text)?;
        Ok(())
    }

    /// ( n -- )
    fn emit(&mut self) -> Result<()> {
        let ch = match self.machine.pop()? {
            Val::Integer(n) => match std::char::from_u32(n as u32) {
                Some(ch) if n >= 0 && n <= std::u32::MAX as i64 => ch,
                _ => return Err(error!(OutOfRange; "emit: {}", n)),
            },
            _ => return Err(error!(IntegerRequired; "emit")),
        };
        self.io.write(ch.encode_utf8(&mut [0; 4]))?;
        Ok(())
    }

    /// ( -- )
    fn words(&mut self) -> Result<()> {
        let mut s = String::new();
        for name in self.dictionary.names() {
            s.push_str(name);
            s.push(' ');
        }
        s.push('\n');
        self.io.write(&s)?;
        Ok(())
    }

    /// ( "ccc<quote>" -- s )
    fn s_quote(&mut self) -> Result<()> {
        let text = self.input.parse(DQUOTE);
        self.machine.push(Val::Text(text))
    }
}

impl From<Builtin> for Xt {
    fn from(builtin: Builtin) -> Xt {
        Xt::Builtin(builtin)
    }
}
