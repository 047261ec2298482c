use super::{Builtin, Machine};
use crate::lang::Error;
use std::rc::Rc;

/// What the caller should do after a word or a line has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// `bye` was executed.
    Exit,
}

type Code = dyn Fn(&mut Machine) -> Result<(), Error>;

/// ## Caller-defined word
///
/// Behaviour supplied from Rust. It only sees the machine, never the
/// interpreter that runs it.

#[derive(Clone)]
pub struct Primitive {
    name: Rc<str>,
    code: Rc<Code>,
}

impl Primitive {
    pub fn new<F>(name: &str, code: F) -> Primitive
    where
        F: Fn(&mut Machine) -> Result<(), Error> + 'static,
    {
        Primitive {
            name: name.into(),
            code: Rc::new(code),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn call(&self, machine: &mut Machine) -> Result<(), Error> {
        (self.code)(machine)
    }
}

impl PartialEq for Primitive {
    fn eq(&self, other: &Primitive) -> bool {
        Rc::ptr_eq(&self.code, &other.code)
    }
}

impl std::fmt::Debug for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Primitive({})", self.name)
    }
}

/// ## Execution token
///
/// A word's behaviour as a first-class value.

#[derive(Debug, Clone, PartialEq)]
pub enum Xt {
    Builtin(Builtin),
    Primitive(Primitive),
}

impl Xt {
    pub fn name(&self) -> &str {
        match self {
            Xt::Builtin(b) => b.name(),
            Xt::Primitive(p) => p.name(),
        }
    }
}

impl std::fmt::Display for Xt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WordEntry {
    pub name: String,
    pub xt: Xt,
    /// Not consulted by the interpreter; `find` reports it.
    pub immediate: bool,
}
