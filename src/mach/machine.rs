use super::{Address, Memory, Operation, Stack, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack machine
///
/// A data stack, a return stack and cell memory. Stack words act on the
/// data stack; the return stack holds one cell per nested `interpret`.
///
/// Operations that fail part way do not put back what they already
/// popped. `quit` resets the stacks after any error anyway.

#[derive(Debug, Default)]
pub struct Machine {
    stack: Stack<Val>,
    rstack: Stack<Val>,
    memory: Memory,
}

impl Machine {
    pub fn new() -> Machine {
        Machine::default()
    }

    pub fn with_capacity(capacity: usize) -> Machine {
        Machine {
            stack: Stack::new(capacity),
            rstack: Stack::new(capacity),
            memory: Memory::new(),
        }
    }

    pub fn stack(&self) -> &Stack<Val> {
        &self.stack
    }

    pub fn rstack(&self) -> &Stack<Val> {
        &self.rstack
    }

    pub fn rstack_mut(&mut self) -> &mut Stack<Val> {
        &mut self.rstack
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn allocate(&mut self, cells: usize) -> Result<Address> {
        self.memory.allocate(cells)
    }

    /// Mark entry to a nested line on the return stack and return the
    /// depth to restore with [`unnest`](Machine::unnest).
    pub fn nest(&mut self) -> Result<usize> {
        let depth = self.rstack.len();
        if self.rstack.is_full() {
            return Err(error!(StackOverflow; "evaluate"));
        }
        self.rstack.push(Val::Integer(depth as i64))?;
        Ok(depth)
    }

    pub fn unnest(&mut self, depth: usize) {
        self.rstack.truncate(depth);
    }

    /// Empty both stacks. Memory is kept.
    pub fn reset(&mut self) {
        self.stack.reset();
        self.rstack.reset();
    }

    /// Data stack, bottom to top.
    pub fn elements(&self) -> &[Val] {
        self.stack.elements()
    }

    pub fn push(&mut self, val: Val) -> Result<()> {
        self.stack.push(val)
    }

    pub fn top(&self) -> Result<&Val> {
        self.stack.top()
    }

    pub fn pop(&mut self) -> Result<Val> {
        self.stack.pop()
    }

    pub fn drop(&mut self) -> Result<()> {
        self.stack.drop()
    }

    pub fn replace_top(&mut self, val: Val) -> Result<()> {
        self.stack.replace_top(val)
    }

    pub fn dup(&mut self) -> Result<()> {
        self.stack.dup()
    }

    pub fn swap(&mut self) -> Result<()> {
        self.stack.swap()
    }

    pub fn over(&mut self) -> Result<()> {
        self.stack.over()
    }

    pub fn pick(&mut self) -> Result<()> {
        self.stack.pick()
    }

    pub fn depth(&mut self) -> Result<()> {
        self.stack.depth()
    }

    fn binary(&mut self, op: fn(Val, Val) -> Result<Val>) -> Result<()> {
        let rhs = self.pop()?;
        let lhs = self.top()?.clone();
        let val = op(lhs, rhs)?;
        self.replace_top(val)
    }

    /// ( n1 n2 -- n3 )
    pub fn add(&mut self) -> Result<()> {
        self.binary(Operation::sum)
    }

    /// ( n1 n2 -- n3 )
    pub fn subtract(&mut self) -> Result<()> {
        self.binary(Operation::subtract)
    }

    /// ( n1 n2 -- n3 )
    pub fn multiply(&mut self) -> Result<()> {
        self.binary(Operation::multiply)
    }

    /// ( n1 n2 -- n3 )
    pub fn divide(&mut self) -> Result<()> {
        self.binary(Operation::divide)
    }

    /// ( x a-addr -- )
    pub fn store(&mut self) -> Result<()> {
        let addr = self.pop()?;
        let val = self.pop()?;
        match addr {
            Val::Address(addr) => self.memory.store(addr, val),
            _ => Err(error!(AddressRequired; "!")),
        }
    }

    /// ( a-addr -- x )
    pub fn fetch(&mut self) -> Result<()> {
        let addr = match self.top()? {
            Val::Address(addr) => *addr,
            _ => return Err(error!(AddressRequired; "@")),
        };
        let val = self.memory.fetch(addr)?;
        self.replace_top(val)
    }
}
