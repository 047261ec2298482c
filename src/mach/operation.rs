use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic on cells
///
/// Results wrap on overflow, the way a machine word does.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_add(r))),
            _ => Err(error!(IntegerRequired; "+")),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_sub(r))),
            _ => Err(error!(IntegerRequired; "-")),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_mul(r))),
            _ => Err(error!(IntegerRequired; "*")),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(_), Integer(0)) => Err(error!(DivisionByZero; "/")),
            (Integer(l), Integer(r)) => Ok(Integer(l.wrapping_div(r))),
            _ => Err(error!(IntegerRequired; "/")),
        }
    }
}
