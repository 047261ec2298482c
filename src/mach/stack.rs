use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub const DEFAULT_CAPACITY: usize = 128;

/// ## Stack enforced and size limited vector
///
/// Every operation checks its bounds first and leaves the stack untouched
/// when it fails.

pub struct Stack<T> {
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Clone + std::fmt::Display> Default for Stack<T> {
    fn default() -> Self {
        Stack::new(DEFAULT_CAPACITY)
    }
}

impl<T: Clone + std::fmt::Display> Stack<T> {
    pub fn new(capacity: usize) -> Stack<T> {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    fn underflow_check(&self, depth: usize, op: &str) -> Result<()> {
        if self.vec.len() < depth {
            Err(error!(StackUnderflow; op))
        } else {
            Ok(())
        }
    }
    fn overflow_check(&self, op: &str) -> Result<()> {
        if self.is_full() {
            Err(error!(StackOverflow; op))
        } else {
            Ok(())
        }
    }
    /// Bottom to top.
    pub fn elements(&self) -> &[T] {
        &self.vec
    }
    pub fn reset(&mut self) {
        self.vec.clear()
    }
    /// Shorten to `len` cells. Does nothing if already shorter.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow; "push: {}", val));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn top(&self) -> Result<&T> {
        match self.vec.last() {
            Some(v) => Ok(v),
            None => Err(error!(StackUnderflow; "top")),
        }
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(StackUnderflow; "pop")),
        }
    }
    pub fn drop(&mut self) -> Result<()> {
        match self.vec.pop() {
            Some(_) => Ok(()),
            None => Err(error!(StackUnderflow; "drop")),
        }
    }
    pub fn replace_top(&mut self, val: T) -> Result<()> {
        match self.vec.last_mut() {
            Some(top) => {
                *top = val;
                Ok(())
            }
            None => Err(error!(StackUnderflow; "replace top: {}", val)),
        }
    }
    /// ( x1 -- x1 x1 )
    pub fn dup(&mut self) -> Result<()> {
        self.underflow_check(1, "dup")?;
        self.overflow_check("dup")?;
        let x = self.vec[self.vec.len() - 1].clone();
        self.vec.push(x);
        Ok(())
    }
    /// ( x1 x2 -- x2 x1 )
    pub fn swap(&mut self) -> Result<()> {
        self.underflow_check(2, "swap")?;
        let len = self.vec.len();
        self.vec.swap(len - 1, len - 2);
        Ok(())
    }
    /// ( x1 x2 -- x1 x2 x1 )
    pub fn over(&mut self) -> Result<()> {
        self.underflow_check(2, "over")?;
        self.overflow_check("over")?;
        let x = self.vec[self.vec.len() - 2].clone();
        self.vec.push(x);
        Ok(())
    }
}

impl Stack<Val> {
    /// Replace the integer `n` on top with the value `n` cells below it,
    /// counting the cell that holds `n` as offset zero.
    pub fn pick(&mut self) -> Result<()> {
        self.underflow_check(1, "pick")?;
        let top = self.vec.len() - 1;
        let n = match &self.vec[top] {
            Val::Integer(n) => *n,
            _ => return Err(error!(IntegerRequired; "pick")),
        };
        if n < 0 {
            return Err(error!(OutOfRange; "pick: {}", n));
        }
        if n as u64 > top as u64 {
            return Err(error!(StackUnderflow; "pick"));
        }
        let x = self.vec[top - n as usize].clone();
        self.vec[top] = x;
        Ok(())
    }
    /// ( -- n )
    pub fn depth(&mut self) -> Result<()> {
        let n = self.vec.len() as i64;
        self.push(Val::Integer(n))
    }
}
