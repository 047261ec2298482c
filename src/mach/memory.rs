use super::{Address, Val};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Cell memory
///
/// An arena of value slots. An `Address` is an index into it, so a stale
/// or forged address is caught as an error instead of touching freed
/// storage. Cells are never released.

#[derive(Debug, Default)]
pub struct Memory {
    cells: Vec<Val>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory::default()
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize + 1
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Reserve `count` cells holding zero and return the first one.
    pub fn allocate(&mut self, count: usize) -> Result<Address> {
        if count > self.max_len() - self.cells.len() {
            return Err(error!(OutOfRange; "allocate: {}", count));
        }
        let addr = self.cells.len();
        self.cells.resize(addr + count, Val::Integer(0));
        Ok(addr)
    }
    pub fn fetch(&self, addr: Address) -> Result<Val> {
        match self.cells.get(addr) {
            Some(val) => Ok(val.clone()),
            None => Err(error!(InvalidAddress; "@: {}", addr)),
        }
    }
    pub fn store(&mut self, addr: Address, val: Val) -> Result<()> {
        match self.cells.get_mut(addr) {
            Some(cell) => {
                *cell = val;
                Ok(())
            }
            None => Err(error!(InvalidAddress; "!: {}", addr)),
        }
    }
}
